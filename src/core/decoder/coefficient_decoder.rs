//! 양자화된 DCT 계수 디코더
//!
//! 계수마다 3단계 플래그 상태기계를 거침: 비트 소진 / 존재 플래그 / 종료 플래그.
//! 대부분 0인 평탄한 패치를 싸게 부호화하는 런렝스 방식

use crate::core::bitstream::BitReader;

/// 패치 한 개 분량(patchSize²)의 양자화 계수를 와이어 순서대로 디코딩
///
/// 공간 배치 순서가 아니라 지그재그 이전의 선형 스캔 순서임.
/// 재배열은 이후 copy_matrix를 통해 수행됨
pub fn decode_coefficients(bits: &mut BitReader, word_bits: u32, patch_size: usize) -> Vec<i32> {
    let count = patch_size * patch_size;
    let mut coeffs = vec![0i32; count];

    for i in 0..count {
        // 1. 비트 소진은 에러가 아님 - 나머지를 0으로 채우고 종료
        let Some(present) = bits.read_bit() else {
            break;
        };

        // 2. 존재 플래그 0 → 이 계수만 0
        if !present {
            continue;
        }

        // 3. 종료 플래그 0 → 이 인덱스부터 끝까지 전부 0
        match bits.read_bit() {
            Some(true) => {}
            Some(false) | None => break,
        }

        // 4. 부호 1비트 + 크기 word_bits비트
        let Some(sign) = bits.read_bit() else {
            break;
        };
        let Some(magnitude) = bits.read_bits(word_bits as usize) else {
            break;
        };

        coeffs[i] = if sign {
            -(magnitude as i32)
        } else {
            magnitude as i32
        };
    }

    coeffs
}
