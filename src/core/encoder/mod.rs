//! LayerData 인코딩 파이프라인 (디코더의 정확한 역과정)
//!
//! 사전 스캔 → 중심화 + 순방향 DCT → 양자화 + 지그재그 배치 → 비트 부호화

pub mod dct;
pub mod coefficient_encoder;
pub mod land_encoder;


// 재수출
pub use dct::{compress_patch, prescan_patch, DEFAULT_PREQUANT};
pub use coefficient_encoder::encode_coefficients;
pub use land_encoder::{compress_land, encode_patch_header};
