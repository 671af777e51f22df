//! # 压缩模块
//!
//! 隐写前使用 zlib 封装的 deflate 压缩文本，恢复时解压。
//! 编解码核心把压缩结果当作不透明的负载处理。

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::io::{self, Read, Write};

/// 压缩 UTF-8 文本。
pub fn compress(text: &str) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    encoder.finish()
}

/// 解压数据并还原为 UTF-8 文本。
///
/// # Errors
///
/// 数据不是合法的 zlib 流，或解压结果不是合法的 UTF-8 时返回错误。
pub fn decompress(data: &[u8]) -> Result<String> {
    // 合法的 zlib 流至少包含头部，空负载只可能来自未隐写的载体
    anyhow::ensure!(!data.is_empty(), "The hidden payload is empty.");

    let mut text = String::new();
    ZlibDecoder::new(data)
        .read_to_string(&mut text)
        .context("The hidden payload is not valid compressed UTF-8 text.")?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_then_decompress_restores_text() {
        let text = "line one\nline two 第二行\n".repeat(20);
        let compressed = compress(&text).unwrap();
        assert!(compressed.len() < text.len());
        assert_eq!(decompress(&compressed).unwrap(), text);
    }

    #[test]
    fn compress_emits_zlib_header() {
        let compressed = compress("").unwrap();
        assert_eq!(compressed[0], 0x78);
        assert_eq!(decompress(&compressed).unwrap(), "");
    }

    #[test]
    fn decompress_rejects_garbage() {
        assert!(decompress(&[]).is_err());
        assert!(decompress(&[0x00, 0x01, 0x02, 0x03]).is_err());
    }
}
