use crate::{IAM20380_DEVICE_ID, IAM20380HT_DEVICE_ID};

/// Which member of the chip family answered the `WHO_AM_I` read.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipVariant
{
    Standard,
    HighTemperature,
}

impl ChipVariant {
    pub fn from_device_id(id: u8) -> Option<Self> {
        match id {
            IAM20380_DEVICE_ID => Some(Self::Standard),
            IAM20380HT_DEVICE_ID => Some(Self::HighTemperature),
            _ => None,
        }
    }

    pub fn device_id(&self) -> u8 {
        match self {
            Self::Standard => IAM20380_DEVICE_ID,
            Self::HighTemperature => IAM20380HT_DEVICE_ID,
        }
    }
}
