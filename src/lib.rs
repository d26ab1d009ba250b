//!
//! A platform-agnostic driver for the Allegro ACS37800 power monitoring IC. Built using embedded-hal.
//!
//! The driver only reads: RMS voltage and RMS power are fetched over SPI and converted from the
//! chip's fixed-point register fields into volts and watts.
//!
//! ```no_run
//! # fn demo<SPI: embedded_hal::spi::SpiDevice>(spi: SPI) -> Result<(), acs37800::ACS37800Error<SPI::Error>> {
//! use acs37800::{ACS37800Config, ACS37800Driver};
//!
//! let mut sensor = ACS37800Driver::new(
//!     spi,
//!     ACS37800Config {
//!         chip_id: 0,
//!         voltage_divider: 1.0,
//!     },
//! );
//!
//! let volts = sensor.get_rms_voltage()?;
//! let watts = sensor.get_rms_power()?;
//! # let _ = (volts, watts);
//! # Ok(())
//! # }
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod driver;
pub mod fixed_point;
pub mod register;

pub use driver::*;
pub use register::Register;
