//! # lsb_frame 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：带长度前缀的帧格式 (`frame`)、
//! 逐位的最低有效位编解码 (`steganography`) 以及二者的组合 (`codec`)。
//! 压缩、图像转换和命令行处理位于外围模块中。

// 声明库包含的所有模块。

pub mod carrier;
pub mod cli;
pub mod codec;
pub mod compression;
pub mod constants;
pub mod error;
pub mod frame;
pub mod handler;
pub mod steganography;

pub use codec::{capacity, decode, encode};
pub use error::{CapacityError, CodecError, PayloadTooLarge};
