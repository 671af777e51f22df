//! # 帧格式模块
//!
//! 帧 = 4 字节大端序长度头部 + 负载。
//! 头部始终位于载体的 bit-slot `[0, 32)`，负载紧随其后。
//! 格式中没有魔数、版本号或校验和。

use crate::constants::{BITS_PER_BYTE, LENGTH_HEADER_BYTES, LENGTH_HEADER_SLOTS};
use crate::error::{CapacityError, PayloadTooLarge};
use crate::steganography::{extract, slot_end};

/// 带长度前缀的负载帧。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    header: [u8; LENGTH_HEADER_BYTES],
    payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// 大端序长度头部。
    pub fn header(&self) -> [u8; LENGTH_HEADER_BYTES] {
        self.header
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    pub fn payload_len(&self) -> u32 {
        u32::from_be_bytes(self.header)
    }

    /// 整个帧占用的 bit-slot 数，即 `32 + 8 * len(payload)`。
    pub fn bit_slots(&self) -> usize {
        LENGTH_HEADER_SLOTS + self.payload.len() * BITS_PER_BYTE
    }
}

/// 为负载构建帧。
///
/// # Errors
///
/// 负载长度超过 `u32::MAX` 时返回 [`PayloadTooLarge`]，而不是截断长度。
pub fn build_frame(payload: &[u8]) -> Result<Frame<'_>, PayloadTooLarge> {
    let len = u32::try_from(payload.len()).map_err(|_| PayloadTooLarge { len: payload.len() })?;

    Ok(Frame {
        header: len.to_be_bytes(),
        payload,
    })
}

/// 容纳长度为 `payload_len` 的负载所需的 bit-slot 总数，溢出时返回 `None`。
pub fn required_slots(payload_len: usize) -> Option<usize> {
    slot_end(LENGTH_HEADER_SLOTS, payload_len)
}

/// 从 `bit_offset` 开始读取 32 个 bit-slot，按 MSB-first 还原大端序长度。
///
/// # Errors
///
/// 载体不足 `bit_offset + 32` 个字节时返回 [`CapacityError`]。
pub fn read_length(carrier: &[u8], bit_offset: usize) -> Result<u32, CapacityError> {
    let bytes = extract(carrier, bit_offset, LENGTH_HEADER_BYTES)?;
    let mut header = [0u8; LENGTH_HEADER_BYTES];
    header.copy_from_slice(&bytes);
    Ok(u32::from_be_bytes(header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steganography::embed;

    #[test]
    fn build_frame_prefixes_big_endian_length() {
        let payload = [0xDE, 0xAD, 0xBE];
        let frame = build_frame(&payload).unwrap();

        assert_eq!(frame.header(), [0, 0, 0, 3]);
        assert_eq!(frame.payload(), &payload);
        assert_eq!(frame.payload_len(), 3);
        assert_eq!(frame.bit_slots(), 32 + 24);
    }

    #[test]
    fn build_frame_accepts_empty_payload() {
        let frame = build_frame(&[]).unwrap();
        assert_eq!(frame.header(), [0; 4]);
        assert_eq!(frame.bit_slots(), 32);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn build_frame_rejects_oversized_payload() {
        // 只读取长度，页面按需分配，不会真正占用 4 GiB 内存
        let payload = vec![0u8; u32::MAX as usize + 1];
        assert_eq!(
            build_frame(&payload).unwrap_err(),
            PayloadTooLarge {
                len: u32::MAX as usize + 1
            }
        );

        let largest = &payload[..u32::MAX as usize];
        assert_eq!(build_frame(largest).unwrap().payload_len(), u32::MAX);
    }

    #[test]
    fn header_round_trips_through_read_length() {
        for len in [0u32, 1, 255, 65_536, u32::MAX] {
            let mut carrier = vec![0x7Fu8; 40];
            embed(&mut carrier, &len.to_be_bytes(), 0).unwrap();
            assert_eq!(read_length(&carrier, 0).unwrap(), len, "length {len}");
        }
    }

    #[test]
    fn read_length_honours_offset() {
        let mut carrier = vec![0u8; 48];
        embed(&mut carrier, &0x0102_0304u32.to_be_bytes(), 16).unwrap();
        assert_eq!(read_length(&carrier, 16).unwrap(), 0x0102_0304);
    }

    #[test]
    fn read_length_needs_thirty_two_slots() {
        let carrier = [0u8; 31];
        let err = read_length(&carrier, 0).unwrap_err();
        assert_eq!(err.required, 32);
        assert_eq!(err.available, 31);
    }

    #[test]
    fn required_slots_detects_overflow() {
        assert_eq!(required_slots(0), Some(32));
        assert_eq!(required_slots(1), Some(40));
        assert_eq!(required_slots(usize::MAX), None);
    }
}
