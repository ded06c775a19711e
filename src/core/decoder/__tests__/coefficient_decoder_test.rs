use crate::core::bitstream::{BitReader, BitWriter};
use crate::core::decoder::decode_coefficients;
use crate::core::protocol::{COEFFS_PER_PATCH, PATCH_SIZE};

#[test]
fn 존재_플래그_0은_계수_0_테스트() {
    let mut writer = BitWriter::new();
    // 계수 0: 존재=0, 계수 1: 존재=1, 종료=1, 부호=0, 크기=5 (10비트)
    writer.write_bit(false);
    writer.write_bit(true);
    writer.write_bit(true);
    writer.write_bit(false);
    writer.write_bits(5, 10);
    // 나머지는 EOB
    writer.write_bit(true);
    writer.write_bit(false);

    let bytes = writer.into_bytes();
    let mut bits = BitReader::new(&bytes);
    let coeffs = decode_coefficients(&mut bits, 10, PATCH_SIZE);

    assert_eq!(coeffs.len(), COEFFS_PER_PATCH);
    assert_eq!(coeffs[0], 0);
    assert_eq!(coeffs[1], 5);
    assert!(coeffs[2..].iter().all(|&c| c == 0));
}

#[test]
fn 종료_플래그_단락_테스트() {
    let mut writer = BitWriter::new();
    // 계수 0: 값 -3
    writer.write_bit(true);
    writer.write_bit(true);
    writer.write_bit(true); // 음수
    writer.write_bits(3, 10);
    // 계수 1에서 EOB: 존재=1, 종료=0
    writer.write_bit(true);
    writer.write_bit(false);
    // EOB 뒤의 비트는 소비되면 안 됨
    writer.write_bits(0x3FF, 10);

    let bytes = writer.into_bytes();
    let mut bits = BitReader::new(&bytes);
    let coeffs = decode_coefficients(&mut bits, 10, PATCH_SIZE);

    assert_eq!(coeffs[0], -3);
    assert!(coeffs[1..].iter().all(|&c| c == 0), "EOB 이후 전부 0이어야 함");
    assert_eq!(bits.bit_pos(), 15, "EOB 플래그까지만 소비해야 함");
}

#[test]
fn 비트_소진시_제로필_테스트() {
    let mut writer = BitWriter::new();
    // 계수 0: 값 7, 그 뒤 스트림이 끊김
    writer.write_bit(true);
    writer.write_bit(true);
    writer.write_bit(false);
    writer.write_bits(7, 10);
    // 13비트 기록 → 2바이트로 패딩됨. 패딩 3비트는 존재 플래그 0으로 읽힘

    let bytes = writer.into_bytes();
    let mut bits = BitReader::new(&bytes);
    let coeffs = decode_coefficients(&mut bits, 10, PATCH_SIZE);

    assert_eq!(coeffs[0], 7);
    assert!(coeffs[1..].iter().all(|&c| c == 0));
}

#[test]
fn 빈_스트림_전체_제로필_테스트() {
    let bytes: Vec<u8> = Vec::new();
    let mut bits = BitReader::new(&bytes);
    let coeffs = decode_coefficients(&mut bits, 10, PATCH_SIZE);

    assert_eq!(coeffs, vec![0i32; COEFFS_PER_PATCH]);
}

#[test]
fn 부호_크기_복원_테스트() {
    let values = [1i32, -1, 511, -511, 1023];
    let mut writer = BitWriter::new();
    for &v in &values {
        writer.write_bit(true);
        writer.write_bit(true);
        writer.write_bit(v < 0);
        writer.write_bits(v.unsigned_abs(), 10);
    }
    writer.write_bit(true);
    writer.write_bit(false); // EOB

    let bytes = writer.into_bytes();
    let mut bits = BitReader::new(&bytes);
    let coeffs = decode_coefficients(&mut bits, 10, PATCH_SIZE);

    assert_eq!(&coeffs[..values.len()], &values);
}
