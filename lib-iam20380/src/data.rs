use core::ops::Sub;

use crate::utils::be_u16;

/// Gyroscope output words exactly as read from `GYRO_XOUT_H..GYRO_ZOUT_L`, not yet sign corrected.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawGyro
{
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

impl RawGyro {
    /// Assembles the three big-endian words of a 6 byte burst starting at `GYRO_XOUT_H`.
    ///
    pub fn from_be_bytes(data: &[u8; 6]) -> Self {
        RawGyro {
            x: be_u16(data[0], data[1]),
            y: be_u16(data[2], data[3]),
            z: be_u16(data[4], data[5]),
        }
    }

    /// Two's complement view of the three axes.
    ///
    pub fn to_signed(&self) -> [i16; 3] {
        [self.x as i16, self.y as i16, self.z as i16]
    }
}

/// Angular rate around each axis in deg/s.
///
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Rotation { x, y, z }
    }

    pub fn zero() -> Self {
        Rotation::default()
    }

    /// Converts raw counts into deg/s given a sensitivity in LSB / (deg/s).
    ///
    pub fn from_raw(raw: RawGyro, scale_factor: f32) -> Self {
        let [x, y, z] = raw.to_signed();
        Rotation {
            x: x as f32 / scale_factor,
            y: y as f32 / scale_factor,
            z: z as f32 / scale_factor,
        }
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Rotation {
    fn from(v: [f32; 3]) -> Self {
        Rotation { x: v[0], y: v[1], z: v[2] }
    }
}

impl Sub for Rotation {
    type Output = Rotation;

    fn sub(self, rhs: Rotation) -> Rotation {
        Rotation {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

pub struct SensorData
{
    pub gyros: Rotation,
    pub temp: f32,
}
