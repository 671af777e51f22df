//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::{DEFAULT_CARRIER_HEIGHT, DEFAULT_CARRIER_WIDTH};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 将文本压缩后以带长度前缀的帧隐藏在无损格式图像 (如 PNG, BMP) 像素的最低有效位中。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "将文本压缩后以带长度前缀的帧隐藏在无损格式图像 (如 PNG, BMP) 像素的最低有效位中，并可无损恢复。"
)]
pub struct Cli {
    /// 日志级别。
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub loglevel: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量查询)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将文本文件内容压缩后隐藏在图像中。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 显示图像最多可以隐藏多少字节的 (压缩后) 负载。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。省略时生成一张空白图像。
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 默认为输入图像旁的 `doctored_<name>.png`，空白图像时为 `output.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,

    /// 生成空白图像时的宽度 (像素)。
    #[arg(long, default_value_t = DEFAULT_CARRIER_WIDTH)]
    pub width: u32,

    /// 生成空白图像时的高度 (像素)。
    #[arg(long, default_value_t = DEFAULT_CARRIER_HEIGHT)]
    pub height: u32,
}

impl HideArgs {
    /// 使用默认的空白图像尺寸构造参数。
    pub fn new(image: Option<PathBuf>, text: PathBuf, dest: Option<PathBuf>, force: bool) -> Self {
        Self {
            image,
            text,
            dest,
            force,
            width: DEFAULT_CARRIER_WIDTH,
            height: DEFAULT_CARRIER_HEIGHT,
        }
    }
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本后，保存文本内容的输出路径。默认为图像旁的 `recovered_<name>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要查询容量的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
