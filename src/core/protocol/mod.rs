//! LayerData 와이어 포맷 타입 정의

pub mod header_types;
pub mod patch_types;


// 재수출
pub use header_types::*;
pub use patch_types::*;
