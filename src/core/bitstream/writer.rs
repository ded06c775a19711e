//! 바이트 버퍼로의 순차 비트 라이터

/// `BitReader`의 거울상 라이터
///
/// 각 바이트의 최상위 비트부터 채우며, 마지막 바이트의 남는 비트는 0으로 패딩됨
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    data: Vec<u8>,
    bit_pos: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 기록한 비트 수
    pub fn bit_len(&self) -> usize {
        self.bit_pos
    }

    /// 비트 1개 기록
    pub fn write_bit(&mut self, bit: bool) {
        if self.bit_pos % 8 == 0 {
            self.data.push(0);
        }
        if bit {
            let last = self.data.len() - 1;
            self.data[last] |= 1 << (7 - self.bit_pos % 8);
        }
        self.bit_pos += 1;
    }

    /// `value`의 하위 `count`비트(최대 32)를 상위 비트 우선으로 기록
    pub fn write_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 != 0);
        }
    }

    /// 기록된 바이트 버퍼 반환 (마지막 바이트 0 패딩)
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
