//! # 载体图像模块
//!
//! 负责在图像文件与扁平的载体字节缓冲区之间转换。
//! 载体为每像素 3 字节、按行优先排列的 BGR 数据，每个颜色通道一个字节，
//! 与常见的 `3BYTE_BGR` 光栅布局一致，因此其他工具写入的隐写图像可以直接恢复。

use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, ImageReader, ImageResult, RgbImage};
use std::path::Path;

/// 每像素占用的载体字节数。
const CHANNELS: usize = 3;

/// 交换每个像素的第 0 和第 2 个通道，用于 RGB 与 BGR 之间的互相转换。
fn swap_red_blue(pixels: &mut [u8]) {
    pixels
        .chunks_exact_mut(CHANNELS)
        .for_each(|pixel| pixel.swap(0, 2));
}

/// 以 BGR8 像素数据作为载体的图像。
#[derive(Debug, Clone)]
pub struct CarrierImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CarrierImage {
    /// 读取并解码图像文件，格式根据文件内容推断。
    ///
    /// 带 alpha 通道或非 8 位深度的图像会先被转换为 8 位三通道数据。
    pub fn open(path: &Path) -> ImageResult<Self> {
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_rgb8();
        let (width, height) = image.dimensions();
        log::debug!("Decoded carrier {}: {}x{}", path.display(), width, height);

        let mut pixels = image.into_raw();
        swap_red_blue(&mut pixels);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// 创建全零像素的空白载体。
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// 以相同尺寸和颜色布局重新编码并保存，格式由扩展名决定。
    pub fn save(&self, path: &Path) -> ImageResult<()> {
        let mut rgb = self.pixels.clone();
        swap_red_blue(&mut rgb);

        let image = RgbImage::from_raw(self.width, self.height, rgb).ok_or_else(|| {
            ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            ))
        })?;
        image.save(path)
    }
}
