//! 양자화 계수의 비트 부호화 (디코더 플래그 프로토콜의 거울상)

use crate::core::bitstream::BitWriter;

/// 계수 배열을 런렝스 플래그 방식으로 기록
///
/// 0 계수는 `0` 한 비트, 남은 계수가 전부 0이면 `10`(EOB),
/// 그 외에는 `11` + 부호 1비트 + `word_bits`비트 크기
pub fn encode_coefficients(writer: &mut BitWriter, coeffs: &[i32], word_bits: u32) {
    for i in 0..coeffs.len() {
        if coeffs[i] == 0 {
            if coeffs[i..].iter().all(|&c| c == 0) {
                // EOB: 존재=1, 종료=0
                writer.write_bit(true);
                writer.write_bit(false);
                return;
            }
            writer.write_bit(false);
            continue;
        }

        writer.write_bit(true);
        writer.write_bit(true);
        writer.write_bit(coeffs[i] < 0);
        writer.write_bits(coeffs[i].unsigned_abs(), word_bits as usize);
    }
}
