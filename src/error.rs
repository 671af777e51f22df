//! # 错误类型模块
//!
//! 编解码核心使用的强类型错误。
//! 应用层 (`handler`) 通过 `anyhow` 为这些错误附加上下文后再报告给用户。

use thiserror::Error;

/// 操作需要的 bit-slot 数超过了载体所能提供的数量。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The carrier is too small: {required} bit-slots required, {available} available.")]
pub struct CapacityError {
    /// 完成操作所需的载体字节数；`usize::MAX` 表示计算时已溢出。
    pub required: usize,
    /// 载体实际的字节数。
    pub available: usize,
}

/// 负载长度无法用 32 位长度头部表示。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The payload is too large: {len} bytes exceed the 32-bit length header.")]
pub struct PayloadTooLarge {
    pub len: usize,
}

/// 编解码流程 (`encode` / `decode`) 的错误。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error(transparent)]
    CarrierTooSmall(#[from] CapacityError),

    #[error(transparent)]
    PayloadTooLarge(#[from] PayloadTooLarge),
}
