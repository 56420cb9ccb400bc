#![cfg_attr(not(test), no_std)]

//! Driver for the TDK InvenSense IAM-20380 3-axis MEMS gyroscope over I2C.
//!
//! The bus and delay source are any `embedded-hal` 1.0 implementations:
//!
//! ```ignore
//! let mut gyro = Iam20380::new(&mut i2c, delay)?;
//! gyro.set_full_scale_range(500)?;
//! let rotation = gyro.read_rotation()?;
//! let temp = gyro.read_temperature()?;
//! ```

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod averaging;
pub use averaging::*;

pub mod dlpf_mode;
pub use dlpf_mode::*;

pub mod fchoice_bypass;
pub use fchoice_bypass::*;

pub mod chip_variant;
pub use chip_variant::*;

pub mod config;
pub use config::*;

pub mod data;
pub use data::*;

pub mod error;
pub use error::*;

pub mod registers;

pub mod iam20380;
pub use iam20380::*;

mod utils;

#[cfg(test)]
mod tests;

/// Default i2c address of the IAM-20380 (AD0 pulled low, 0x69 when pulled high).
/// 
pub const IAM20380_DEFAULT_I2C_ADDR: u8 = 0x68;

/// `WHO_AM_I` value of the standard IAM-20380.
/// 
pub const IAM20380_DEVICE_ID: u8 = 0xB5;

/// `WHO_AM_I` value of the high temperature IAM-20380HT.
/// 
pub const IAM20380HT_DEVICE_ID: u8 = 0xFD;

/// Time the chip needs after a soft reset before its registers can be used, in milliseconds.
/// 
pub const RESET_SETTLE_MS: u32 = 100;

/// Temperature sensitivity in LSB / degree celsius.
/// 
pub const TEMP_SENSITIVITY: f32 = 326.8;

/// Temperature the `TEMP_OUT` offset is referenced to, in degrees celsius.
/// 
pub const TEMP_ROOM_C: f32 = 25.0;

/// `TEMP_OUT` reading at [`TEMP_ROOM_C`], in LSB.
/// 
pub const TEMP_OFFSET: f32 = 0.0;
