//! Register addresses and bit-field layout of the IAM-20380.

pub const SMPLRT_DIV: u8 = 0x19;

pub const CONFIG: u8 = 0x1A; //[2:0] DLPF_CFG
pub const GYRO_CONFIG: u8 = 0x1B; //[4:3] FS_SEL, [1:0] FCHOICE_B

pub const LP_MODE_CFG: u8 = 0x1E; //[7] GYRO_CYCLE, [6:4] G_AVGCFG

pub const TEMP_OUT_H: u8 = 0x41;
pub const TEMP_OUT_L: u8 = 0x42;

pub const GYRO_XOUT_H: u8 = 0x43;
pub const GYRO_XOUT_L: u8 = 0x44;
pub const GYRO_YOUT_H: u8 = 0x45;
pub const GYRO_YOUT_L: u8 = 0x46;
pub const GYRO_ZOUT_H: u8 = 0x47;
pub const GYRO_ZOUT_L: u8 = 0x48;

pub const PWR_MGMT_1: u8 = 0x6B; //[7] DEVICE_RESET, [6] SLEEP, [2:0] CLKSEL

pub const WHO_AM_I: u8 = 0x75;

/// `PWR_MGMT_1` value that clears `SLEEP` and auto-selects the best clock source.
///
pub const PWR_MGMT_1_WAKE: u8 = 0x01;

/// A run of bits inside a single 8-bit register.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub register: u8,
    pub offset: u8,
    pub width: u8,
}

impl BitField {
    pub const fn new(register: u8, offset: u8, width: u8) -> Self {
        BitField { register, offset, width }
    }

    /// Mask of the bits this field occupies within its register.
    ///
    pub const fn mask(&self) -> u8 {
        (((1u16 << self.width) - 1) as u8) << self.offset
    }

    /// True if the field covers the whole register, so no read-modify-write is needed.
    ///
    pub const fn spans_register(&self) -> bool {
        self.offset == 0 && self.width == 8
    }

    /// Pulls this field's value out of a full register byte.
    ///
    pub const fn extract(&self, register_value: u8) -> u8 {
        (register_value & self.mask()) >> self.offset
    }

    /// Returns `register_value` with this field replaced by `value`, every other bit untouched.
    ///
    pub const fn insert(&self, register_value: u8, value: u8) -> u8 {
        (register_value & !self.mask()) | ((value << self.offset) & self.mask())
    }
}

pub const SMPLRT_DIV_FIELD: BitField = BitField::new(SMPLRT_DIV, 0, 8);
pub const DLPF_CFG: BitField = BitField::new(CONFIG, 0, 3);
pub const FS_SEL: BitField = BitField::new(GYRO_CONFIG, 3, 2);
pub const FCHOICE_B: BitField = BitField::new(GYRO_CONFIG, 0, 2);
pub const G_AVGCFG: BitField = BitField::new(LP_MODE_CFG, 4, 3);
pub const GYRO_CYCLE: BitField = BitField::new(LP_MODE_CFG, 7, 1);
pub const DEVICE_RESET: BitField = BitField::new(PWR_MGMT_1, 7, 1);
pub const SLEEP: BitField = BitField::new(PWR_MGMT_1, 6, 1);
