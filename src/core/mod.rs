//! # 지형 코덱 핵심 모듈
//!
//! LayerData 패킷의 비트 단위 파싱과 DCT 기반 패치 압축/복원의 핵심 구성 요소들

pub mod bitstream;
pub mod protocol;
pub mod tables;
pub mod decoder;
pub mod encoder;

// 주요 타입들 재수출
pub use bitstream::*;
pub use protocol::*;
pub use tables::*;
pub use decoder::*;
pub use encoder::*;

// 각 모듈이 자체 테스트를 포함함
