//! LayerData 디코딩 파이프라인
//!
//! 헤더 파싱 → 계수 디코딩 → 역양자화 + IDCT → 패치 조립 순서로 진행됨.
//! 디코딩 경로는 패닉/에러 전파 없이 조기 반환과 로그로만 실패를 알림

pub mod header_decoder;
pub mod coefficient_decoder;
pub mod idct;
pub mod land_decoder;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use header_decoder::{decode_group_header, decode_patch_header, HeaderToken};
pub use coefficient_decoder::decode_coefficients;
pub use idct::decompress_patch;
pub use land_decoder::{decode_layer_data, decompress_land};
