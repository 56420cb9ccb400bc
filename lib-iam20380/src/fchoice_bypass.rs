/// `FCHOICE_B` setting, lets the gyroscope signal skip the DLPF entirely.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FchoiceBypass
{
    /// DLPF in use, bandwidth set by `DLPF_CFG`.
    Disabled = 0b00,
    /// 8173Hz bandwidth at a 32kHz internal rate.
    Bw8173Hz = 0b01,
    /// 3281Hz bandwidth at a 32kHz internal rate.
    Bw3281Hz = 0b10,
}

impl FchoiceBypass {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Disabled,
            0b10 => Self::Bw3281Hz,
            // Bit 0 set selects the 8173Hz path regardless of bit 1.
            _ => Self::Bw8173Hz,
        }
    }

    pub fn as_bits(&self) -> u8 {
        (*self) as u8
    }
}

impl Default for FchoiceBypass {
    fn default() -> Self {
        FchoiceBypass::Disabled
    }
}
