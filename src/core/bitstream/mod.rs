//! MSB 우선 비트스트림 입출력

pub mod reader;
pub mod writer;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use reader::BitReader;
pub use writer::BitWriter;
