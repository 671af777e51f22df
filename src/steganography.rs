//! # LSB 位编解码模块
//!
//! 每个载体字节 (bit-slot) 的最低有效位存储 1 bit 数据，其余 7 位保持不变。
//! 数据字节按从高位到低位 (MSB-first) 的顺序依次写入连续的 bit-slot。

use crate::constants::BITS_PER_BYTE;
use crate::error::CapacityError;

/// 计算从 `bit_offset` 开始写入 `data_len` 字节后的结束位置 (不含)。
///
/// 发生算术溢出时返回 `None`。
pub fn slot_end(bit_offset: usize, data_len: usize) -> Option<usize> {
    data_len.checked_mul(BITS_PER_BYTE)?.checked_add(bit_offset)
}

/// 检查长度为 `carrier_len` 的载体能否在 `bit_offset` 处容纳 `data_len` 字节。
///
/// 需要事务语义的调用者应在修改载体前先调用此函数。
///
/// # Errors
///
/// 当 `bit_offset + 8 * data_len > carrier_len` (或计算溢出) 时返回 [`CapacityError`]。
pub fn check_capacity(
    carrier_len: usize,
    bit_offset: usize,
    data_len: usize,
) -> Result<(), CapacityError> {
    match slot_end(bit_offset, data_len) {
        Some(end) if end <= carrier_len => Ok(()),
        end => Err(CapacityError {
            required: end.unwrap_or(usize::MAX),
            available: carrier_len,
        }),
    }
}

/// 将 `data` 从 `bit_offset` 开始逐位写入 `carrier` 的最低有效位。
///
/// 容量在任何写入发生之前完成校验，因此出错时载体保持原样。
///
/// # Errors
///
/// 载体空间不足时返回 [`CapacityError`]。
pub fn embed(carrier: &mut [u8], data: &[u8], bit_offset: usize) -> Result<(), CapacityError> {
    check_capacity(carrier.len(), bit_offset, data.len())?;

    let end = bit_offset + data.len() * BITS_PER_BYTE;
    let slots = &mut carrier[bit_offset..end];

    for (chunk, &byte) in slots.chunks_exact_mut(BITS_PER_BYTE).zip(data) {
        for (i, slot) in chunk.iter_mut().enumerate() {
            let bit = (byte >> (BITS_PER_BYTE - 1 - i)) & 0x1;
            *slot = (*slot & 0xFE) | bit;
        }
    }

    Ok(())
}

/// 从 `bit_offset` 开始读取 `out_len` 个字节，每 8 个 bit-slot 组成一个字节。
///
/// # Errors
///
/// 读取范围超出载体时返回 [`CapacityError`]，不会截断结果。
pub fn extract(
    carrier: &[u8],
    bit_offset: usize,
    out_len: usize,
) -> Result<Vec<u8>, CapacityError> {
    check_capacity(carrier.len(), bit_offset, out_len)?;

    let end = bit_offset + out_len * BITS_PER_BYTE;
    let slots = &carrier[bit_offset..end];

    Ok(slots
        .chunks_exact(BITS_PER_BYTE)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &slot| (acc << 1) | (slot & 0x1)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_writes_msb_first_into_low_bits() {
        let mut carrier = [0xFFu8; 8];
        embed(&mut carrier, &[0b1010_0110], 0).unwrap();
        assert_eq!(carrier, [0xFF, 0xFE, 0xFF, 0xFE, 0xFE, 0xFF, 0xFF, 0xFE]);
    }

    #[test]
    fn embed_preserves_upper_seven_bits() {
        let original: Vec<u8> = (0..16u8).map(|i| i.wrapping_mul(37)).collect();
        let mut carrier = original.clone();
        embed(&mut carrier, &[0x5A, 0xC3], 0).unwrap();

        for (before, after) in original.iter().zip(&carrier) {
            assert_eq!(before & 0xFE, after & 0xFE);
        }
        assert_eq!(extract(&carrier, 0, 2).unwrap(), vec![0x5A, 0xC3]);
    }

    #[test]
    fn embed_respects_bit_offset() {
        let mut carrier = vec![0u8; 12];
        embed(&mut carrier, &[0xFF], 3).unwrap();
        assert_eq!(carrier, [0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0]);
        assert_eq!(extract(&carrier, 3, 1).unwrap(), vec![0xFF]);
    }

    #[test]
    fn embed_rejects_overflow_without_touching_carrier() {
        let mut carrier = vec![0xAAu8; 15];
        let err = embed(&mut carrier, &[0xFF, 0xFF], 0).unwrap_err();
        assert_eq!(
            err,
            CapacityError {
                required: 16,
                available: 15
            }
        );
        assert!(carrier.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn extract_rejects_out_of_bounds_reads() {
        let carrier = [0u8; 8];
        assert!(extract(&carrier, 1, 1).is_err());
        assert!(extract(&carrier, 0, 2).is_err());
        assert_eq!(extract(&carrier, 8, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn check_capacity_reports_arithmetic_overflow() {
        let err = check_capacity(64, usize::MAX, 1).unwrap_err();
        assert_eq!(err.required, usize::MAX);
        assert_eq!(err.available, 64);
        assert!(check_capacity(64, 0, usize::MAX).is_err());
    }
}
