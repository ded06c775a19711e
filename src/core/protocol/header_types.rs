//! 패킷/패치 헤더 타입

use serde::{Deserialize, Serialize};

/// 패치 종료 센티널 - quantWBits 자리에 나타나면 패킷 내 패치가 더 없음
pub const END_OF_PATCHES: u8 = 97;

/// 패치 한 변의 정점 수 - 이 프로토콜은 16만 사용
pub const PATCH_SIZE: usize = 16;

/// 패치 그리드 한 변의 패치 수 - 좌표 x, y는 이 값 미만이어야 함
pub const PATCHES_PER_EDGE: u8 = 16;

/// 패치당 DCT 계수 개수 (16x16)
pub const COEFFS_PER_PATCH: usize = PATCH_SIZE * PATCH_SIZE;

/// LayerData 레이어 종류 - 8비트 판별자
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerType {
    Land = 0x4C,
    Water = 0x57,
    Wind = 0x37,
    Cloud = 0x38,
}

impl LayerType {
    pub fn from_u8(value: u8) -> Option<LayerType> {
        match value {
            0x4C => Some(LayerType::Land),
            0x57 => Some(LayerType::Water),
            0x37 => Some(LayerType::Wind),
            0x38 => Some(LayerType::Cloud),
            _ => None,
        }
    }
}

/// 패킷당 한 번 오는 그룹 헤더 - stride(16) + patchSize(8) + layerType(8)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchGroupHeader {
    /// 예약 필드 - 디코딩 로직에서는 사용하지 않음
    pub stride: u16,
    pub patch_size: u8,
    pub layer_type: u8,
}

impl PatchGroupHeader {
    pub fn layer(&self) -> Option<LayerType> {
        LayerType::from_u8(self.layer_type)
    }
}

/// 패치당 한 번 오는 헤더
///
/// `dc_offset`은 와이어에서 IEEE-754 비트 패턴 그대로 전달되며
/// 숫자 변환 없이 재해석으로 복원됨
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchHeader {
    /// 하위 니블+2 = 계수 비트폭, 상위 니블+2 = prequant
    pub quant_wbits: u8,
    /// 패치 내 최저 높이값
    pub dc_offset: f32,
    /// 최고-최저 높이 차 (월드 단위)
    pub range: u16,
    /// 패치 그리드 X 좌표 (10비트 필드의 상위 5비트)
    pub x: u8,
    /// 패치 그리드 Y 좌표 (10비트 필드의 하위 5비트)
    pub y: u8,
}

impl PatchHeader {
    /// 계수 한 개의 크기 비트 수 - 전송되지 않고 파생됨
    pub fn word_bits(&self) -> u32 {
        (self.quant_wbits & 0x0F) as u32 + 2
    }

    /// 양자화 사전 시프트 양
    pub fn prequant(&self) -> u32 {
        (self.quant_wbits >> 4) as u32 + 2
    }
}
