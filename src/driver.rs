use crate::fixed_point::{convert_signed_fixed_point, convert_unsigned_fixed_point};
use crate::register::Register;
use embedded_hal::spi::{Mode, SpiDevice, MODE_0};

/// SPI mode expected by the ACS37800.
pub const MODE: Mode = MODE_0;

/// Command byte followed by the 32 bit little endian payload.
const FRAME_LEN: usize = 5;

/// Differential input range of the voltage channel, in mV.
const VOLTAGE_RANGE_MV: f32 = 250.0;
/// Empirical gain correction applied to the RMS voltage.
const VOLTAGE_GAIN: f64 = 1.19;
/// RMS power full scale, in mW per unit of the divider ratio.
const POWER_SCALE_MW: f32 = 5328.0;

#[derive(Copy, Clone, Debug)]
pub enum ACS37800Error<SPI> {
    Spi(SPI),
}

#[derive(Copy, Clone, Debug)]
pub struct ACS37800Config {
    /// Identifier of the chip on the board, for the caller's bookkeeping
    pub chip_id: u8,
    /// Ratio of the external resistor network feeding the voltage input, e.g. 1K / (2M + 1K)
    pub voltage_divider: f32,
}

pub struct ACS37800Driver<SPI> {
    spi: SPI,
    chip_id: u8,
    voltage_divider: f32,
}

impl<SPI> ACS37800Driver<SPI>
where
    SPI: SpiDevice,
{
    /// Wraps an SPI device. No bus traffic happens until a reading is requested.
    pub fn new(spi: SPI, config: ACS37800Config) -> Self {
        Self {
            spi,
            chip_id: config.chip_id,
            voltage_divider: config.voltage_divider,
        }
    }

    pub fn chip_id(&self) -> u8 {
        self.chip_id
    }

    pub fn voltage_divider(&self) -> f32 {
        self.voltage_divider
    }

    pub fn set_voltage_divider(&mut self, voltage_divider: f32) {
        self.voltage_divider = voltage_divider;
    }

    /// Gives back the SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }

    /// RMS voltage in volts.
    pub fn get_rms_voltage(&mut self) -> Result<f32, ACS37800Error<SPI::Error>> {
        let raw = self.read_register(Register::RmsVoltageCurrent)? & 0xFFFF;

        let mut volts = convert_unsigned_fixed_point(raw, 16, 16);
        volts *= VOLTAGE_RANGE_MV;
        volts /= 1000.0;
        volts *= self.voltage_divider;
        volts = (f64::from(volts) * VOLTAGE_GAIN) as f32;

        log::debug!("acs37800 #{}: vrms {} V", self.chip_id, volts);
        Ok(volts)
    }

    /// RMS active power in watts. Negative when power flows back into the source.
    pub fn get_rms_power(&mut self) -> Result<f32, ACS37800Error<SPI::Error>> {
        let raw = self.read_register(Register::RmsPower)? & 0xFFFF;

        let mut power = convert_signed_fixed_point(raw, 15, 16);
        power *= POWER_SCALE_MW;
        power *= self.voltage_divider;
        power /= 1000.0;

        log::debug!("acs37800 #{}: pactive {} W", self.chip_id, power);
        Ok(power)
    }

    ///
    ///
    /// # Arguments
    ///
    /// * `register`: The register to read.
    ///
    /// The chip answers with the register addressed by the previous frame, so the command is
    /// clocked out twice and only the second response is kept.
    ///
    /// returns: Result<u32, ACS37800Error<<SPI as ErrorType>::Error>>
    pub fn read_register(&mut self, register: Register) -> Result<u32, ACS37800Error<SPI::Error>> {
        let command = register.read_command();
        let mut buffer = [command, 0, 0, 0, 0];

        self.spi
            .transfer_in_place(&mut buffer)
            .map_err(ACS37800Error::Spi)?;
        buffer[0] = command;
        self.spi
            .transfer_in_place(&mut buffer)
            .map_err(ACS37800Error::Spi)?;

        let mut payload = [0u8; FRAME_LEN - 1];
        payload.copy_from_slice(&buffer[1..]);
        let result = u32::from_le_bytes(payload);

        log::trace!("acs37800 #{}: {:?} = {:#010x}", self.chip_id, register, result);
        Ok(result)
    }
}

#[cfg(feature = "std")]
impl<SPI> std::fmt::Display for ACS37800Error<SPI>
where
    SPI: std::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ACS37800Error::Spi(spi) => write!(f, "SPI Error: {spi:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl<SPI> std::error::Error for ACS37800Error<SPI>
where
    SPI: std::fmt::Debug,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
