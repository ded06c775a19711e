//! 공개 API를 통한 코덱 왕복 통합 테스트

use terracodec::{
    compress_land, decode_layer_data, BitReader, BitWriter, HeightPatch, PatchTables,
    COEFFS_PER_PATCH, DEFAULT_PREQUANT, END_OF_PATCHES, TABLES,
};

#[test]
/// 공개 API만으로 패킷 하나를 인코딩하고 다시 디코딩했을 때
/// 좌표와 높이값이 허용 오차 안에서 보존되는지 확인합니다.
fn test_public_api_roundtrip() {
    let patches: Vec<HeightPatch> = (0..3)
        .map(|i| HeightPatch {
            x: i,
            y: i + 4,
            heights: (0..COEFFS_PER_PATCH)
                .map(|k| 15.0 + i as f32 + ((k / 16) as f32 * 0.5))
                .collect(),
        })
        .collect();

    let payload = compress_land(&patches, DEFAULT_PREQUANT, &TABLES);
    let decoded = decode_layer_data(&payload);

    assert_eq!(decoded.len(), patches.len());
    for (original, restored) in patches.iter().zip(decoded.iter()) {
        assert_eq!(original.x, restored.header.x);
        assert_eq!(original.y, restored.header.y);
        for (a, b) in original.heights.iter().zip(restored.height_data.iter()) {
            assert!((a - b).abs() < 0.5, "높이 {} vs {} 오차 초과", a, b);
        }
    }

    println!("PASSED: test_public_api_roundtrip");
}

#[test]
/// 명시적으로 생성한 테이블과 전역 Lazy 테이블이 같은 결과를 내는지 확인합니다.
fn test_explicit_tables_equivalence() {
    let local = PatchTables::compute();
    let patch = HeightPatch {
        x: 0,
        y: 0,
        heights: vec![42.0; COEFFS_PER_PATCH],
    };

    let with_local = compress_land(std::slice::from_ref(&patch), DEFAULT_PREQUANT, &local);
    let with_global = compress_land(std::slice::from_ref(&patch), DEFAULT_PREQUANT, &TABLES);

    assert_eq!(with_local, with_global);
}

#[test]
/// 센티널 한 바이트짜리 패킷의 노운 벡터 테스트.
fn test_sentinel_known_vector() {
    let mut writer = BitWriter::new();
    writer.write_bits(264, 16);
    writer.write_bits(16, 8);
    writer.write_bits(0x4C, 8);
    writer.write_bits(END_OF_PATCHES as u32, 8);

    let bytes = writer.into_bytes();
    assert_eq!(bytes.len(), 5);

    let decoded = decode_layer_data(&bytes);
    assert!(decoded.is_empty());

    // 직접 리더로 소비량 검증: 그룹 헤더 32비트 + 센티널 8비트
    let mut bits = BitReader::new(&bytes);
    assert_eq!(bits.read_bits(32), Some((264 << 16) | (16 << 8) | 0x4C));
    assert_eq!(bits.read_bits(8), Some(END_OF_PATCHES as u32));
    assert_eq!(bits.bits_left(), 0);
}
