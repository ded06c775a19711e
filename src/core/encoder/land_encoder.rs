//! 패킷 단위 Land 레이어 인코딩

use log::warn;

use crate::core::bitstream::BitWriter;
use crate::core::protocol::{
    HeightPatch, LayerType, PatchHeader, COEFFS_PER_PATCH, END_OF_PATCHES, PATCHES_PER_EDGE,
    PATCH_SIZE,
};
use crate::core::tables::PatchTables;

use super::coefficient_encoder::encode_coefficients;
use super::dct::{compress_patch, prescan_patch};

/// 패치 헤더를 와이어 순서대로 기록 - quantWBits(8) + dcOffset(32) + range(16) + 좌표(10)
pub fn encode_patch_header(writer: &mut BitWriter, header: &PatchHeader) {
    writer.write_bits(header.quant_wbits as u32, 8);
    writer.write_bits(header.dc_offset.to_bits(), 32);
    writer.write_bits(header.range as u32, 16);
    writer.write_bits(((header.x as u32) << 5) | (header.y as u32 & 0x1F), 10);
}

/// 높이 패치들을 LayerData Land 페이로드로 압축
///
/// 그룹 헤더 + 패치별 (헤더 + 계수 블록) + 센티널 순서로 기록됨.
/// 좌표나 높이 개수가 잘못된 패치는 경고 후 건너뜀
pub fn compress_land(patches: &[HeightPatch], prequant: u32, tables: &PatchTables) -> Vec<u8> {
    let mut writer = BitWriter::new();

    // 그룹 헤더: stride는 예약 필드이며 관례상 264를 기록
    writer.write_bits(264, 16);
    writer.write_bits(PATCH_SIZE as u32, 8);
    writer.write_bits(LayerType::Land as u32, 8);

    for patch in patches {
        if patch.x >= PATCHES_PER_EDGE || patch.y >= PATCHES_PER_EDGE {
            warn!("패치 좌표 ({}, {})가 그리드를 벗어나 인코딩에서 제외", patch.x, patch.y);
            continue;
        }
        if patch.heights.len() != COEFFS_PER_PATCH {
            warn!(
                "패치 ({}, {})의 높이 개수 {} ≠ 256 - 인코딩에서 제외",
                patch.x,
                patch.y,
                patch.heights.len()
            );
            continue;
        }

        let (zmin, zmax) = prescan_patch(&patch.heights);
        let mut header = PatchHeader {
            quant_wbits: 0, // compress_patch가 채움
            dc_offset: zmin,
            range: (zmax - zmin + 1.0) as u16,
            x: patch.x,
            y: patch.y,
        };

        let coeffs = compress_patch(&patch.heights, &mut header, prequant, tables);
        encode_patch_header(&mut writer, &header);
        encode_coefficients(&mut writer, &coeffs, header.word_bits());
    }

    writer.write_bits(END_OF_PATCHES as u32, 8);
    writer.into_bytes()
}
