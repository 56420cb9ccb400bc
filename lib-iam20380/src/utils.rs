use crate::{TEMP_OFFSET, TEMP_ROOM_C, TEMP_SENSITIVITY};

#[inline]
pub fn be_u16(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

/// Converts the `TEMP_OUT` word into degrees celsius.
#[inline]
pub fn temp_to_celsius(high: u8, low: u8) -> f32 {
    let raw = i16::from_be_bytes([high, low]) as f32;
    (raw - TEMP_OFFSET) / TEMP_SENSITIVITY + TEMP_ROOM_C
}
