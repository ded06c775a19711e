//! 바이트 버퍼 위의 순차 비트 리더

/// 바이트 버퍼에서 비트 단위로 읽는 리더
///
/// 각 바이트의 최상위 비트부터 읽으며, 멀티비트 값은 상위 비트 우선으로 조립됨.
/// 버퍼가 소진되면 `None`을 반환하고 위치는 변하지 않음
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// 지금까지 소비한 비트 수
    pub fn bit_pos(&self) -> usize {
        self.bit_pos
    }

    /// 남은 비트 수
    pub fn bits_left(&self) -> usize {
        self.data.len() * 8 - self.bit_pos
    }

    /// 비트 1개 읽기
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.bit_pos >= self.data.len() * 8 {
            return None;
        }
        let byte = self.data[self.bit_pos / 8];
        let bit = (byte >> (7 - self.bit_pos % 8)) & 1;
        self.bit_pos += 1;
        Some(bit != 0)
    }

    /// `count`비트(최대 32)를 상위 비트 우선으로 읽기
    ///
    /// 남은 비트가 부족하면 아무것도 소비하지 않고 `None`
    pub fn read_bits(&mut self, count: usize) -> Option<u32> {
        debug_assert!(count <= 32);
        if self.bits_left() < count {
            return None;
        }
        let mut value: u32 = 0;
        for _ in 0..count {
            let bit = self.read_bit()?;
            value = (value << 1) | bit as u32;
        }
        Some(value)
    }
}
