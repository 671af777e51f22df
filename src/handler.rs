//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、压缩、图像转换，调用核心编解码函数，并向用户报告结果。

use crate::carrier::CarrierImage;
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::codec::{capacity, decode, encode};
use crate::compression::{compress, decompress};
use crate::constants::{
    DEFAULT_HIDE_OUTPUT, DEFAULT_HIDE_OUTPUT_PREFIX, DEFAULT_RECOVER_OUTPUT_PREFIX,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 在 `source` 所在目录下生成 `<prefix><stem>.<extension>` 形式的路径。
fn sibling_path(source: &Path, prefix: &str, extension: &str) -> PathBuf {
    let mut name = OsString::from(prefix);
    name.push(source.file_stem().unwrap_or_default());
    name.push(".");
    name.push(extension);
    source.with_file_name(name)
}

/// 未使用 `--force` 时拒绝覆盖已存在的输出文件。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取文本文件并压缩、读取 (或生成) 载体图像、检查隐写空间是否足够、
/// 调用编码函数写入长度头部和负载，最后将结果保存为目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像或文本文件。
/// * 图像没有足够的空间来隐藏压缩后的文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = match (&args.dest, &args.image) {
        (Some(dest), _) => dest.clone(),
        (None, Some(image)) => sibling_path(image, DEFAULT_HIDE_OUTPUT_PREFIX, "png"),
        (None, None) => PathBuf::from(DEFAULT_HIDE_OUTPUT),
    };
    ensure_writable(&dest, args.force)?;

    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let mut carrier = match &args.image {
        Some(image) => CarrierImage::open(image).with_context(|| {
            format!(
                "Unable to read image file: {}",
                image.to_string_lossy().red().bold()
            )
        })?,
        None => {
            log::info!(
                "No carrier image given, generating a blank {}x{} image",
                args.width,
                args.height
            );
            CarrierImage::blank(args.width, args.height)
        }
    };

    let payload = compress(&text).context("Failed to compress the text.")?;
    log::info!(
        "Compressed {} text bytes into {} payload bytes",
        text.len(),
        payload.len()
    );

    let available_space = capacity(carrier.as_bytes().len());
    anyhow::ensure!(
        available_space >= payload.len(),
        "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
        payload.len().to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    encode(&payload, carrier.as_bytes_mut()).with_context(|| {
        format!(
            "Failed to hide the text in a {}x{} image.",
            carrier.width(),
            carrier.height()
        )
    })?;

    carrier.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、读取长度头部并取出负载、解压，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 图像中的长度头部超出图像范围，或负载无法解压。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let text_path = args
        .text
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, DEFAULT_RECOVER_OUTPUT_PREFIX, "txt"));
    ensure_writable(&text_path, args.force)?;

    let carrier = CarrierImage::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = decode(carrier.as_bytes()).with_context(|| {
        format!(
            "Failed to recover the hidden payload from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    log::info!("Recovered {} payload bytes", payload.len());

    let text = decompress(&payload).with_context(|| {
        format!(
            "No hidden text found in '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&text_path, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 报告图像的载体字节数以及最多可以隐藏的负载字节数。
///
/// # Errors
///
/// 无法读取或解码输入的图像文件时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<usize> {
    let carrier = CarrierImage::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let carrier_bytes = carrier.as_bytes().len();
    let payload_bytes = capacity(carrier_bytes);

    println!(
        "{}x{} image, {} carrier bytes, up to {} compressed payload bytes.",
        carrier.width(),
        carrier.height(),
        carrier_bytes.to_string().bold(),
        payload_bytes.to_string().green().bold()
    );

    Ok(payload_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_path_keeps_directory() {
        let path = sibling_path(Path::new("/tmp/pics/cat.bmp"), "doctored_", "png");
        assert_eq!(path, PathBuf::from("/tmp/pics/doctored_cat.png"));

        let path = sibling_path(Path::new("doctored_cat.png"), "recovered_", "txt");
        assert_eq!(path, PathBuf::from("recovered_doctored_cat.txt"));
    }

    #[test]
    fn ensure_writable_respects_force() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(ensure_writable(file.path(), false).is_err());
        assert!(ensure_writable(file.path(), true).is_ok());
        assert!(ensure_writable(Path::new("/definitely/not/here.png"), false).is_ok());
    }
}
