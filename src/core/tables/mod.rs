//! 16x16 고정 크기 IDCT/양자화 사전 계산 테이블

pub mod patch_tables;


// 재수출
pub use patch_tables::{PatchTables, TABLES};
