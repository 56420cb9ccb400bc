/// DLPF (Digital Low Pass Filter) mode, this determines the 3dB bandwidth of the gyroscope when
/// `FCHOICE_B` is cleared. 
/// 
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DlpfMode {
    Bw250Hz = 0x00,
    Bw176Hz = 0x01,
    Bw92Hz = 0x02,
    Bw41Hz = 0x03,
    Bw20Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
    Bw3281Hz = 0x07,
}

impl DlpfMode {
    /// Maps a raw `DLPF_CFG` code onto a mode, codes above 7 do not fit the 3-bit field.
    ///
    pub fn from_code(code: u8) -> Option<Self> {
        if code > 0b111 {
            return None;
        }
        Some(Self::from_bits(code))
    }

    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::Bw250Hz,
            1 => Self::Bw176Hz,
            2 => Self::Bw92Hz,
            3 => Self::Bw41Hz,
            4 => Self::Bw20Hz,
            5 => Self::Bw10Hz,
            6 => Self::Bw5Hz,
            _ => Self::Bw3281Hz,
        }
    }

    pub fn as_code(&self) -> u8 {
        (*self) as u8
    }
}

impl Default for DlpfMode {
    fn default() -> Self {
        DlpfMode::Bw250Hz
    }
}
