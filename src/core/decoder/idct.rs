//! 역양자화 + 2차원 분리형 IDCT 재구성

use log::warn;

use crate::core::protocol::{PatchGroupHeader, PatchHeader, COEFFS_PER_PATCH, PATCH_SIZE};
use crate::core::tables::PatchTables;

const OO_SQRT2: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// 열 방향 IDCT 한 줄
fn idct_column(data_in: &[f32], data_out: &mut [f32], column: usize, tables: &PatchTables) {
    for n in 0..PATCH_SIZE {
        let mut total = OO_SQRT2 * data_in[column];
        for u in 1..PATCH_SIZE {
            total += data_in[u * PATCH_SIZE + column] * tables.cosines[u * PATCH_SIZE + n];
        }
        data_out[PATCH_SIZE * n + column] = total;
    }
}

/// 행 방향 IDCT 한 줄 - 여기서 2/16 정규화가 들어감
fn idct_row(data_in: &[f32], data_out: &mut [f32], row: usize, tables: &PatchTables) {
    let row_base = row * PATCH_SIZE;
    for n in 0..PATCH_SIZE {
        let mut total = OO_SQRT2 * data_in[row_base];
        for u in 1..PATCH_SIZE {
            total += data_in[row_base + u] * tables.cosines[u * PATCH_SIZE + n];
        }
        data_out[row_base + n] = total * 2.0 / PATCH_SIZE as f32;
    }
}

/// 16x16 블록에 열 패스 → 행 패스 순으로 IDCT 적용
fn idct_patch(block: &mut [f32; COEFFS_PER_PATCH], tables: &PatchTables) {
    let mut temp = [0.0f32; COEFFS_PER_PATCH];
    for column in 0..PATCH_SIZE {
        idct_column(block, &mut temp, column, tables);
    }
    for row in 0..PATCH_SIZE {
        idct_row(&temp, block, row, tables);
    }
}

/// 와이어 순서 계수 배열을 월드 높이값 256개로 복원
///
/// 순서: 역양자화 + 지그재그 재배열 → 열 IDCT → 행 IDCT → 최종 스케일 복원.
/// 이 디코더는 patchSize 16만 지원하며, 다른 크기는 경고 후 빈 결과를 반환함
pub fn decompress_patch(
    coeffs: &[i32],
    header: &PatchHeader,
    group_header: &PatchGroupHeader,
    tables: &PatchTables,
) -> Vec<f32> {
    if group_header.patch_size as usize != PATCH_SIZE {
        warn!(
            "지원하지 않는 patchSize {} - 16x16 전용 디코더이므로 재구성 생략",
            group_header.patch_size
        );
        return Vec::new();
    }

    let prequant = header.prequant();
    let quantize = 1u32 << prequant;
    let ooq = 1.0f32 / quantize as f32;
    let mult = ooq * header.range as f32;
    let addval = mult * (1u32 << (prequant - 1)) as f32 + header.dc_offset;

    // 역양자화 + 재배열: 대상 위치 n이 원본 계수를 copy_matrix[n]으로 인덱싱함
    let mut block = [0.0f32; COEFFS_PER_PATCH];
    for n in 0..COEFFS_PER_PATCH {
        block[n] = coeffs[tables.copy_matrix[n]] as f32 * tables.dequantize[n];
    }

    idct_patch(&mut block, tables);

    block.iter().map(|&v| v * mult + addval).collect()
}
