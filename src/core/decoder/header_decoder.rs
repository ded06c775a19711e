//! 그룹/패치 헤더 디코더

use crate::core::bitstream::BitReader;
use crate::core::protocol::{PatchGroupHeader, PatchHeader, END_OF_PATCHES};

/// 패치 헤더 디코딩 결과
///
/// quantWBits 자리에서 센티널(97)을 만나면 나머지 필드를 읽지 않고
/// `EndOfPatches`를 반환함
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderToken {
    Patch(PatchHeader),
    EndOfPatches,
}

/// LayerData 페이로드 선두의 그룹 헤더 읽기 - stride(16) + patchSize(8) + layerType(8)
///
/// 비트폭 외의 검증은 하지 않음. 스트림이 짧으면 `None`
pub fn decode_group_header(bits: &mut BitReader) -> Option<PatchGroupHeader> {
    let stride = bits.read_bits(16)? as u16;
    let patch_size = bits.read_bits(8)? as u8;
    let layer_type = bits.read_bits(8)? as u8;

    Some(PatchGroupHeader {
        stride,
        patch_size,
        layer_type,
    })
}

/// 패치 헤더 한 개 읽기
///
/// `dc_offset`은 32비트를 IEEE-754 비트 패턴으로 재해석함 (숫자 캐스트 아님).
/// 패치 좌표는 10비트 결합 필드에서 `x = field >> 5`, `y = field & 0x1F`로 분리.
/// 스트림이 헤더 중간에 끊기면 `None`
pub fn decode_patch_header(bits: &mut BitReader) -> Option<HeaderToken> {
    let quant_wbits = bits.read_bits(8)? as u8;
    if quant_wbits == END_OF_PATCHES {
        return Some(HeaderToken::EndOfPatches);
    }

    let dc_offset = f32::from_bits(bits.read_bits(32)?);
    let range = bits.read_bits(16)? as u16;
    let patch_ids = bits.read_bits(10)?;
    let x = (patch_ids >> 5) as u8;
    let y = (patch_ids & 0x1F) as u8;

    Some(HeaderToken::Patch(PatchHeader {
        quant_wbits,
        dc_offset,
        range,
        x,
        y,
    }))
}
