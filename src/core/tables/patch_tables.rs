//! 패치 복원에 쓰이는 사전 계산 테이블
//!
//! 네 테이블 모두 고정 크기 16에서만 파생되며 입력 데이터와 무관함.
//! 한 번 만들어진 뒤 절대 변경되지 않으므로 스레드 간 동기화 없이 공유 가능

use once_cell::sync::Lazy;
use std::f32::consts::PI;

use crate::core::protocol::{COEFFS_PER_PATCH, PATCH_SIZE};

/// 프로세스 전역 공유 인스턴스 - 최초 사용 시 1회 계산
pub static TABLES: Lazy<PatchTables> = Lazy::new(PatchTables::compute);

/// 16x16 패치용 사전 계산 테이블 묶음
///
/// 모든 테이블은 행 우선으로 저장된 16x16 정방 행렬
pub struct PatchTables {
    /// `1 + 2*(i+j)` - 양자화된 계수를 복원 스케일로 되돌림
    pub dequantize: [f32; COEFFS_PER_PATCH],
    /// dequantize의 역수 - 순방향 인코딩에서 사용
    pub quantize: [f32; COEFFS_PER_PATCH],
    /// `cos((2n+1)*u*π/32)` - IDCT 기저 함수
    pub cosines: [f32; COEFFS_PER_PATCH],
    /// 지그재그 순회 순서 - 선형 계수 인덱스 → 2차원 주파수 위치 재배열
    pub copy_matrix: [usize; COEFFS_PER_PATCH],
}

impl PatchTables {
    /// 테이블 전체를 명시적으로 계산
    pub fn compute() -> Self {
        let mut dequantize = [0.0f32; COEFFS_PER_PATCH];
        let mut quantize = [0.0f32; COEFFS_PER_PATCH];
        let mut cosines = [0.0f32; COEFFS_PER_PATCH];

        for j in 0..PATCH_SIZE {
            for i in 0..PATCH_SIZE {
                dequantize[j * PATCH_SIZE + i] = 1.0 + 2.0 * (i + j) as f32;
                quantize[j * PATCH_SIZE + i] = 1.0 / (1.0 + 2.0 * (i + j) as f32);
            }
        }

        for u in 0..PATCH_SIZE {
            for n in 0..PATCH_SIZE {
                cosines[u * PATCH_SIZE + n] =
                    ((2.0 * n as f32 + 1.0) * u as f32 * PI / (2.0 * PATCH_SIZE as f32)).cos();
            }
        }

        PatchTables {
            dequantize,
            quantize,
            cosines,
            copy_matrix: build_copy_matrix(),
        }
    }
}

/// 지그재그(JPEG식 대각선 교대) 순회 테이블 생성
///
/// (0,0)에서 시작해 우상/좌하 대각선을 번갈아 훑으며,
/// `copy_matrix[j*16+i]`에 방문 순번을 기록함. 결과는 {0..255} 위의 전단사
fn build_copy_matrix() -> [usize; COEFFS_PER_PATCH] {
    let mut matrix = [0usize; COEFFS_PER_PATCH];

    let mut diag = false;
    let mut right = true;
    let mut i = 0usize;
    let mut j = 0usize;
    let mut count = 0usize;

    while i < PATCH_SIZE && j < PATCH_SIZE {
        matrix[j * PATCH_SIZE + i] = count;
        count += 1;

        if !diag {
            if right {
                // 오른쪽 한 칸, 가장자리면 아래로
                if i < PATCH_SIZE - 1 {
                    i += 1;
                } else {
                    j += 1;
                }
                right = false;
            } else {
                // 아래 한 칸, 가장자리면 오른쪽으로
                if j < PATCH_SIZE - 1 {
                    j += 1;
                } else {
                    i += 1;
                }
                right = true;
            }
            diag = true;
        } else if right {
            i += 1;
            j -= 1;
            if i == PATCH_SIZE - 1 || j == 0 {
                diag = false;
            }
        } else {
            i -= 1;
            j += 1;
            if i == 0 || j == PATCH_SIZE - 1 {
                diag = false;
            }
        }
    }

    matrix
}
