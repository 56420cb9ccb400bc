use crate::{Averaging, DlpfMode};

/// Default profile that `reset` programs into the chip.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerProfile
{
    /// Gyro cycle mode with 8x averaging, 1kHz internal sampling and a ~3.9Hz output rate
    /// (~1.3mA, ~0.09 dps rms noise).
    LowPower,
    /// Continuous sampling with 128x averaging behind the 5Hz DLPF.
    LowNoise,
}

impl PowerProfile {
    pub fn averaging(&self) -> Averaging {
        match self {
            Self::LowPower => Averaging::X8,
            Self::LowNoise => Averaging::X128,
        }
    }

    pub fn gyro_cycle(&self) -> bool {
        matches!(self, Self::LowPower)
    }

    /// DLPF setting to apply, `None` leaves the chip's reset value in place.
    ///
    pub fn dlpf_mode(&self) -> Option<DlpfMode> {
        match self {
            Self::LowPower => None,
            Self::LowNoise => Some(DlpfMode::Bw5Hz),
        }
    }
}

impl Default for PowerProfile {
    fn default() -> Self {
        PowerProfile::LowPower
    }
}

/// Driver configuration, fixed at construction.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config
{
    pub profile: PowerProfile,
}

impl Config {
    pub fn with_profile(profile: PowerProfile) -> Self {
        Config { profile }
    }
}
