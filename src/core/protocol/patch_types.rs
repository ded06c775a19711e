//! 디코딩 결과/인코딩 입력 패치 타입

use serde::{Deserialize, Serialize};
use super::header_types::PatchHeader;

/// 디코딩된 지형 패치 한 개
///
/// `height_data`는 행 우선(row-major) 월드 높이값이며 길이는 patchSize².
/// 재구성이 생략된 패치(지원하지 않는 patchSize)는 빈 벡터로 남음
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedTerrainPatch {
    pub header: PatchHeader,
    pub height_data: Vec<f32>,
}

/// 인코더 입력 - 그리드 좌표와 16x16 높이값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightPatch {
    pub x: u8,
    pub y: u8,
    pub heights: Vec<f32>,
}
