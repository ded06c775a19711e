//! 순방향 DCT + 양자화

use crate::core::protocol::{PatchHeader, COEFFS_PER_PATCH, PATCH_SIZE};
use crate::core::tables::PatchTables;

const OO_SQRT2: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// 기본 양자화 사전 시프트 - 와이어에서 쓰이는 표준값
pub const DEFAULT_PREQUANT: u32 = 10;

/// 패치의 최저/최고 높이값 스캔
pub fn prescan_patch(heights: &[f32]) -> (f32, f32) {
    let mut zmin = f32::INFINITY;
    let mut zmax = f32::NEG_INFINITY;
    for &h in heights {
        zmin = zmin.min(h);
        zmax = zmax.max(h);
    }
    (zmin, zmax)
}

/// 행 방향 순방향 DCT 한 줄
fn dct_line(data_in: &[f32], data_out: &mut [f32], line: usize, tables: &PatchTables) {
    let line_base = line * PATCH_SIZE;

    let mut total = 0.0f32;
    for n in 0..PATCH_SIZE {
        total += data_in[line_base + n];
    }
    data_out[line_base] = OO_SQRT2 * total;

    for u in 1..PATCH_SIZE {
        let mut total = 0.0f32;
        for n in 0..PATCH_SIZE {
            total += data_in[line_base + n] * tables.cosines[u * PATCH_SIZE + n];
        }
        data_out[line_base + u] = total;
    }
}

/// 열 방향 순방향 DCT 한 줄 - 양자화와 지그재그 배치까지 수행
fn dct_column(data_in: &[f32], data_out: &mut [i32], column: usize, tables: &PatchTables) {
    let oosob = 2.0f32 / PATCH_SIZE as f32;

    let mut total = 0.0f32;
    for n in 0..PATCH_SIZE {
        total += data_in[PATCH_SIZE * n + column];
    }
    data_out[tables.copy_matrix[column]] =
        (OO_SQRT2 * total * oosob * tables.quantize[column]).round() as i32;

    for u in 1..PATCH_SIZE {
        let mut total = 0.0f32;
        for n in 0..PATCH_SIZE {
            total += data_in[PATCH_SIZE * n + column] * tables.cosines[u * PATCH_SIZE + n];
        }
        let k = u * PATCH_SIZE + column;
        data_out[tables.copy_matrix[k]] = (total * oosob * tables.quantize[k]).round() as i32;
    }
}

/// 16x16 높이 패치를 양자화된 DCT 계수(와이어 스캔 순서)로 압축
///
/// 헤더에는 prescan 결과(dc_offset, range)가 먼저 들어 있어야 하며,
/// 여기서 최대 계수 크기에 맞춘 워드 크기로 `quant_wbits`를 채움
pub fn compress_patch(
    heights: &[f32],
    header: &mut PatchHeader,
    prequant: u32,
    tables: &PatchTables,
) -> Vec<i32> {
    debug_assert_eq!(heights.len(), COEFFS_PER_PATCH);

    // 니블에 들어가는 범위로 한정 (하위 2는 인코딩 시 빠짐)
    let prequant = prequant.clamp(2, 17);
    let range = header.range.max(1) as f32;
    let premult = (1u32 << prequant) as f32 / range;
    let sub = (1u32 << (prequant - 1)) as f32 + header.dc_offset * premult;

    // 높이값을 [-2^(prequant-1), 2^(prequant-1)) 부근으로 중심화
    let mut block = [0.0f32; COEFFS_PER_PATCH];
    for k in 0..COEFFS_PER_PATCH {
        block[k] = heights[k] * premult - sub;
    }

    let mut temp = [0.0f32; COEFFS_PER_PATCH];
    for line in 0..PATCH_SIZE {
        dct_line(&block, &mut temp, line, tables);
    }
    let mut coeffs = vec![0i32; COEFFS_PER_PATCH];
    for column in 0..PATCH_SIZE {
        dct_column(&temp, &mut coeffs, column, tables);
    }

    // 최대 크기에 필요한 비트 수로 워드 크기 결정 (니블 한계 내)
    let max_mag = coeffs.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0);
    let mut word_size = 32 - max_mag.leading_zeros();
    word_size = word_size.clamp(prequant, 17);
    header.quant_wbits = ((word_size - 2) as u8 & 0x0F) | (((prequant - 2) as u8) << 4);

    coeffs
}
