//! # 编解码流程模块
//!
//! 组合帧格式与 LSB 位编解码：`encode` 将负载连同长度头部写入载体，
//! `decode` 读取长度头部后取出负载。两个操作均为单次、无状态的调用。

use crate::constants::{BITS_PER_BYTE, LENGTH_HEADER_SLOTS};
use crate::error::{CapacityError, CodecError};
use crate::frame::{build_frame, read_length, required_slots};
use crate::steganography::{embed, extract};

/// 长度为 `carrier_len` 的载体最多能容纳的负载字节数。
pub fn capacity(carrier_len: usize) -> usize {
    let bytes = carrier_len.saturating_sub(LENGTH_HEADER_SLOTS) / BITS_PER_BYTE;
    bytes.min(u32::MAX as usize)
}

/// 将 `payload` 隐写到 `carrier` 中。
///
/// 整个帧的容量在写入前一次性校验，失败时载体不会被修改。
///
/// # Errors
///
/// * 负载长度超出 32 位头部范围时返回 [`CodecError::PayloadTooLarge`]。
/// * 载体不足 `32 + 8 * len(payload)` 字节时返回 [`CodecError::CarrierTooSmall`]。
pub fn encode(payload: &[u8], carrier: &mut [u8]) -> Result<(), CodecError> {
    let frame = build_frame(payload)?;

    let required = required_slots(payload.len()).unwrap_or(usize::MAX);
    if required > carrier.len() {
        return Err(CapacityError {
            required,
            available: carrier.len(),
        }
        .into());
    }

    log::debug!(
        "Embedding frame: {} payload bytes into {} of {} carrier bytes",
        frame.payload_len(),
        frame.bit_slots(),
        carrier.len()
    );

    embed(carrier, &frame.header(), 0)?;
    embed(carrier, frame.payload(), LENGTH_HEADER_SLOTS)?;

    Ok(())
}

/// 从 `carrier` 中恢复负载。
///
/// # Errors
///
/// 载体不足 32 字节，或长度头部声明的负载超出载体范围时返回
/// [`CodecError::CarrierTooSmall`]。
pub fn decode(carrier: &[u8]) -> Result<Vec<u8>, CodecError> {
    let length = read_length(carrier, 0)?;
    log::debug!("Length header declares {length} payload bytes");

    let payload = extract(carrier, LENGTH_HEADER_SLOTS, length as usize)?;
    log::trace!("Extracted {} payload bytes", payload.len());

    Ok(payload)
}
