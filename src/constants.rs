/// 每个字节包含的位数，也是隐写单个字节所需的载体字节 (bit-slot) 数。
pub const BITS_PER_BYTE: usize = 8;

/// 长度头部占用的字节数。
/// 长度以大端序 `u32` 存储，因此固定为 4 字节。
pub const LENGTH_HEADER_BYTES: usize = 4;

/// 长度头部占用的载体字节数。
/// 每个载体字节的最低位存储 1 bit，因此需要 4 * 8 = 32 个载体字节。
pub const LENGTH_HEADER_SLOTS: usize = LENGTH_HEADER_BYTES * BITS_PER_BYTE;

/// 未提供载体图像时，自动生成的空白图像宽度 (像素)。
pub const DEFAULT_CARRIER_WIDTH: u32 = 1000;

/// 未提供载体图像时，自动生成的空白图像高度 (像素)。
pub const DEFAULT_CARRIER_HEIGHT: u32 = 1000;

/// 使用空白载体且未指定输出路径时的默认输出文件名。
pub const DEFAULT_HIDE_OUTPUT: &str = "output.png";

/// 隐写结果图像默认文件名的前缀。
pub const DEFAULT_HIDE_OUTPUT_PREFIX: &str = "doctored_";

/// 恢复文本默认文件名的前缀。
pub const DEFAULT_RECOVER_OUTPUT_PREFIX: &str = "recovered_";
