use crate::registers::*;
use crate::utils::temp_to_celsius;
use crate::*;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

#[test]
fn test_scale_range_from_dps() {
    for scale in [GyroScaleRange::D250, GyroScaleRange::D500, GyroScaleRange::D1000, GyroScaleRange::D2000] {
        assert_eq!(GyroScaleRange::from_dps(scale.as_dps()), Some(scale));
        assert_eq!(GyroScaleRange::from_bits(scale.as_bits()), scale);
    }
    for dps in [0, 125, 249, 251, 4000, u16::MAX] {
        assert_eq!(GyroScaleRange::from_dps(dps), None);
    }
}

#[test]
fn test_scale_factors() {
    assert_eq!(GyroScaleRange::D250.as_scale_factor(), 131.0);
    assert_eq!(GyroScaleRange::D500.as_scale_factor(), 65.5);
    assert_eq!(GyroScaleRange::D1000.as_scale_factor(), 32.8);
    assert_eq!(GyroScaleRange::D2000.as_scale_factor(), 16.4);
}

#[test]
fn test_averaging_log2_index() {
    let expected = [(1, 0), (2, 1), (4, 2), (8, 3), (16, 4), (32, 5), (64, 6), (128, 7)];
    for (count, index) in expected {
        let averaging = Averaging::from_count(count).unwrap();
        assert_eq!(averaging.as_bits(), index);
        assert_eq!(averaging.as_count(), count);
        assert_eq!(Averaging::from_bits(index), averaging);
    }
    for count in [0, 3, 5, 100, 127, 255] {
        assert_eq!(Averaging::from_count(count), None);
    }
}

#[test]
fn test_dlpf_codes() {
    for code in 0..=7u8 {
        assert_eq!(DlpfMode::from_code(code).unwrap().as_code(), code);
    }
    assert_eq!(DlpfMode::from_code(8), None);
    assert_eq!(DlpfMode::from_code(255), None);
}

#[test]
fn test_fchoice_bits() {
    assert_eq!(FchoiceBypass::from_bits(0b00), FchoiceBypass::Disabled);
    assert_eq!(FchoiceBypass::from_bits(0b01), FchoiceBypass::Bw8173Hz);
    assert_eq!(FchoiceBypass::from_bits(0b11), FchoiceBypass::Bw8173Hz);
    assert_eq!(FchoiceBypass::from_bits(0b10), FchoiceBypass::Bw3281Hz);
}

#[test]
fn test_chip_variants() {
    assert_eq!(ChipVariant::from_device_id(0xB5), Some(ChipVariant::Standard));
    assert_eq!(ChipVariant::from_device_id(0xFD), Some(ChipVariant::HighTemperature));
    assert_eq!(ChipVariant::from_device_id(0x00), None);
    assert_eq!(ChipVariant::from_device_id(0x68), None);
}

#[test]
fn test_bit_field_masks() {
    assert_eq!(FS_SEL.mask(), 0b0001_1000);
    assert_eq!(FCHOICE_B.mask(), 0b0000_0011);
    assert_eq!(DLPF_CFG.mask(), 0b0000_0111);
    assert_eq!(G_AVGCFG.mask(), 0b0111_0000);
    assert_eq!(GYRO_CYCLE.mask(), 0b1000_0000);
    assert_eq!(DEVICE_RESET.mask(), 0b1000_0000);
    assert_eq!(SLEEP.mask(), 0b0100_0000);
    assert_eq!(SMPLRT_DIV_FIELD.mask(), 0xFF);
    assert!(SMPLRT_DIV_FIELD.spans_register());
    assert!(!G_AVGCFG.spans_register());
}

#[test]
fn test_bit_field_insert_keeps_other_bits() {
    for register_value in 0..=255u8 {
        for value in 0..8u8 {
            let written = G_AVGCFG.insert(register_value, value);
            assert_eq!(G_AVGCFG.extract(written), value);
            assert_eq!(written & !G_AVGCFG.mask(), register_value & !G_AVGCFG.mask());
        }
    }
    // Values wider than the field are truncated instead of spilling into neighbours.
    assert_eq!(FS_SEL.insert(0b1110_0111, 0xFF), 0xFF);
    assert_eq!(FS_SEL.insert(0x00, 0b111), 0b0001_1000);
}

#[test]
fn test_twos_complement_extremes() {
    let max = RawGyro::from_be_bytes(&[0x7F, 0xFF, 0x80, 0x00, 0xFF, 0xFF]);
    assert_eq!(max.x, 0x7FFF);
    assert_eq!(max.y, 0x8000);
    assert_eq!(max.to_signed(), [i16::MAX, i16::MIN, -1]);

    let rotation = Rotation::from_raw(max, 131.0);
    assert!(rotation.x > 250.0);
    assert!(rotation.y < -250.0);
    assert!(approx_eq(rotation.z, -1.0 / 131.0, 1e-6));
}

#[test]
fn test_small_positive_stays_positive() {
    let raw = RawGyro::from_be_bytes(&[0x00, 0x64, 0x00, 0xC8, 0xFF, 0x38]);
    assert_eq!(raw, RawGyro { x: 100, y: 200, z: 65336 });

    let rotation = Rotation::from_raw(raw, GyroScaleRange::D250.as_scale_factor());
    assert!(approx_eq(rotation.x, 0.763, 1e-3), "{}", rotation.x);
    assert!(approx_eq(rotation.y, 1.527, 1e-3), "{}", rotation.y);
    assert!(approx_eq(rotation.z, -1.527, 1e-3), "{}", rotation.z);
}

#[test]
fn test_temperature_conversion() {
    assert!(approx_eq(temp_to_celsius(0x00, 0x00), 25.0, 1e-6));
    // 3268 LSB -> +10 C
    assert!(approx_eq(temp_to_celsius(0x0C, 0xC4), 35.0, 1e-4));
    // -3268 LSB -> -10 C
    assert!(approx_eq(temp_to_celsius(0xF3, 0x3C), 15.0, 1e-4));
}
