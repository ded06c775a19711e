//! terracodec - 지형 LayerData 코덱 라이브러리
//!
//! 레거시 가상세계 프로토콜의 지형 패치(16x16) 압축 포맷을 디코딩/인코딩하는 라이브러리.
//! 비트스트림 파싱 → 역양자화 → 2차원 IDCT → 패치 재구성 파이프라인으로 구성됨

pub mod core;

// 핵심 타입들 재수출
pub use crate::core::{
    // 비트스트림
    BitReader, BitWriter,
    // 와이어 타입
    LayerType, PatchGroupHeader, PatchHeader, DecodedTerrainPatch, HeightPatch,
    END_OF_PATCHES, PATCH_SIZE, PATCHES_PER_EDGE, COEFFS_PER_PATCH,
    // 테이블
    PatchTables, TABLES,
    // 디코더
    HeaderToken, decode_group_header, decode_patch_header, decode_coefficients,
    decompress_patch, decompress_land, decode_layer_data,
    // 인코더
    compress_patch, compress_land, encode_patch_header, encode_coefficients,
    prescan_patch, DEFAULT_PREQUANT,
};
