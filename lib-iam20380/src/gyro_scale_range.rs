#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroScaleRange
{
    D250 = 0,
    D500 = 1,
    D1000 = 2,
    D2000 = 3,
}

impl GyroScaleRange {

    /// Looks up the scale range for a full scale value given in deg/s, `None` if the chip has no
    /// such setting.
    ///
    pub fn from_dps(dps: u16) -> Option<Self> {
        match dps {
            250 => Some(Self::D250),
            500 => Some(Self::D500),
            1000 => Some(Self::D1000),
            2000 => Some(Self::D2000),
            _ => None,
        }
    }

    /// Decodes the 2-bit `FS_SEL` field (already shifted down to bit 0).
    ///
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::D250,
            1 => Self::D500,
            2 => Self::D1000,
            _ => Self::D2000,
        }
    }

    /// Value of the `FS_SEL` field for this range.
    ///
    pub fn as_bits(&self) -> u8 {
        (*self) as u8
    }

    /// The full scale value in deg/s.
    ///
    pub fn as_dps(&self) -> u16 {
        match self {
            Self::D250 => 250,
            Self::D500 => 500,
            Self::D1000 => 1000,
            Self::D2000 => 2000,
        }
    }

    /// Gets the sensitivity scale factor for the given scale range.
    /// (Note scale factor is in LSB / (deg/s)).
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::D250 => 131.0,
            Self::D500 => 65.5,
            Self::D1000 => 32.8,
            Self::D2000 => 16.4,
        }
    }
}

impl Default for GyroScaleRange {
    fn default() -> Self {
        GyroScaleRange::D250
    }
}
