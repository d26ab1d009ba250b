/// Mask applied to a register address before the read/write flag is or-ed in.
pub const ADDRESS_MASK: u8 = 0x7F;
/// Command flag for a register read.
pub const READ: u8 = 0x80;

/// ACS37800 register map.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Register {
    // EEPROM shadow registers, not interpreted by this driver.
    ShadowB = 0x1B,
    ShadowC = 0x1C,
    ShadowD = 0x1D,
    ShadowE = 0x1E,
    ShadowF = 0x1F,
    /// `vrms` in the low half, `irms` in the high half.
    RmsVoltageCurrent = 0x20,
    /// `pactive` in the low half, `pimag` in the high half.
    RmsPower = 0x21,
}

impl Register {
    pub fn address(self) -> u8 {
        self as u8
    }

    /// The command byte that starts a read of this register.
    pub fn read_command(self) -> u8 {
        (self.address() & ADDRESS_MASK) | READ
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_command_sets_read_flag() {
        assert_eq!(Register::RmsVoltageCurrent.read_command(), 0xA0);
        assert_eq!(Register::RmsPower.read_command(), 0xA1);
        assert_eq!(Register::ShadowB.read_command(), 0x9B);
    }
}
