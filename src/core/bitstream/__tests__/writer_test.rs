use crate::core::bitstream::{BitReader, BitWriter};
use rand::Rng;

#[test]
fn 기록_후_바이트_배열_테스트() {
    let mut writer = BitWriter::new();
    writer.write_bits(0xA, 4);
    writer.write_bits(0xC, 4);
    writer.write_bits(0x12, 8);

    assert_eq!(writer.bit_len(), 16);
    assert_eq!(writer.into_bytes(), vec![0xAC, 0x12]);
}

#[test]
fn 마지막_바이트_제로_패딩_테스트() {
    let mut writer = BitWriter::new();
    writer.write_bits(0b101, 3);

    assert_eq!(writer.into_bytes(), vec![0b1010_0000]);
}

#[test]
fn 라이터_리더_왕복_테스트() {
    let mut rng = rand::thread_rng();
    let fields: Vec<(u32, usize)> = (0..200)
        .map(|_| {
            let count = rng.gen_range(1..=32);
            let value = rng.gen::<u32>() & (u32::MAX >> (32 - count));
            (value, count)
        })
        .collect();

    let mut writer = BitWriter::new();
    for &(value, count) in &fields {
        writer.write_bits(value, count);
    }

    let bytes = writer.into_bytes();
    let mut reader = BitReader::new(&bytes);
    for &(value, count) in &fields {
        assert_eq!(reader.read_bits(count), Some(value), "{}비트 필드가 왕복되어야 함", count);
    }
}
