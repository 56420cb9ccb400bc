/// Number of gyroscope samples averaged into one output value, stored on chip as a log2 index in
/// the `G_AVGCFG` field of `LP_MODE_CFG`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Averaging
{
    X1 = 0,
    X2 = 1,
    X4 = 2,
    X8 = 3,
    X16 = 4,
    X32 = 5,
    X64 = 6,
    X128 = 7,
}

impl Averaging {

    /// Looks up the averaging setting for a sample count, only powers of two up to 128 exist.
    ///
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::X1),
            2 => Some(Self::X2),
            4 => Some(Self::X4),
            8 => Some(Self::X8),
            16 => Some(Self::X16),
            32 => Some(Self::X32),
            64 => Some(Self::X64),
            128 => Some(Self::X128),
            _ => None,
        }
    }

    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::X1,
            1 => Self::X2,
            2 => Self::X4,
            3 => Self::X8,
            4 => Self::X16,
            5 => Self::X32,
            6 => Self::X64,
            _ => Self::X128,
        }
    }

    /// The log2 index written into `G_AVGCFG`.
    ///
    pub fn as_bits(&self) -> u8 {
        (*self) as u8
    }

    pub fn as_count(&self) -> u8 {
        1 << self.as_bits()
    }
}

impl Default for Averaging {
    fn default() -> Self {
        Averaging::X1
    }
}
