//! 패킷 단위 Land 레이어 디코딩 오케스트레이션

use log::{debug, warn};

use crate::core::bitstream::BitReader;
use crate::core::protocol::{
    DecodedTerrainPatch, LayerType, PatchGroupHeader, PATCHES_PER_EDGE,
};
use crate::core::tables::{PatchTables, TABLES};

use super::coefficient_decoder::decode_coefficients;
use super::header_decoder::{decode_group_header, decode_patch_header, HeaderToken};
use super::idct::decompress_patch;

/// Land 레이어 패킷의 패치들을 전부 디코딩
///
/// 센티널을 만나거나 비트가 소진되면 정상 종료.
/// 그리드 좌표가 16 이상이면 패킷 전체를 손상으로 간주하고 나머지 패치를 버림 -
/// 이미 디코딩된 패치들은 그대로 반환됨
pub fn decompress_land(
    bits: &mut BitReader,
    group_header: &PatchGroupHeader,
    tables: &PatchTables,
) -> Vec<DecodedTerrainPatch> {
    let mut patches = Vec::new();

    while bits.bits_left() > 0 {
        let header = match decode_patch_header(bits) {
            Some(HeaderToken::Patch(header)) => header,
            Some(HeaderToken::EndOfPatches) => break,
            None => break,
        };

        if header.x >= PATCHES_PER_EDGE || header.y >= PATCHES_PER_EDGE {
            warn!(
                "손상된 패치 좌표 ({}, {}) - 패킷의 나머지 디코딩 중단",
                header.x, header.y
            );
            break;
        }

        let coeffs = decode_coefficients(
            bits,
            header.word_bits(),
            group_header.patch_size as usize,
        );
        let height_data = decompress_patch(&coeffs, &header, group_header, tables);

        patches.push(DecodedTerrainPatch {
            header,
            height_data,
        });
    }

    patches
}

/// LayerData 페이로드 한 개를 통째로 디코딩하는 편의 진입점
///
/// 그룹 헤더를 읽고 레이어 종류에 따라 분기함.
/// Land만 디코딩하며 Water/Wind/Cloud와 미지의 타입은 로그 후 건너뜀
pub fn decode_layer_data(payload: &[u8]) -> Vec<DecodedTerrainPatch> {
    let mut bits = BitReader::new(payload);

    let Some(group_header) = decode_group_header(&mut bits) else {
        warn!("그룹 헤더를 읽기 전에 페이로드가 끝남");
        return Vec::new();
    };

    match group_header.layer() {
        Some(LayerType::Land) => decompress_land(&mut bits, &group_header, &TABLES),
        Some(LayerType::Water) => {
            debug!("처리하지 않는 LayerData: Water");
            Vec::new()
        }
        Some(LayerType::Wind) => {
            debug!("처리하지 않는 LayerData: Wind");
            Vec::new()
        }
        Some(LayerType::Cloud) => {
            debug!("처리하지 않는 LayerData: Cloud");
            Vec::new()
        }
        None => {
            debug!("알 수 없는 LayerData 타입: {:#04x}", group_header.layer_type);
            Vec::new()
        }
    }
}
