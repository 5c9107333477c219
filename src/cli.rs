//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::codec::BitsHidden;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于把一幅图像隐藏在另一幅图像中，或将其恢复。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具。载体图像保留高位，载荷图像的高位写入载体的低位，合成结果以无损 PNG 保存。"
)]
pub struct Cli {
    /// 并行处理使用的最大线程数，默认使用全部 CPU 核心。
    #[arg(short = 'j', long, global = true)]
    pub threads: Option<usize>,

    /// 输出调试日志。
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 recover (恢复)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把载荷图像隐藏到载体图像的低位中。
    Hide(HideArgs),

    /// 从合成图像的低位中恢复载荷图像的近似。
    Recover(RecoverArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 载体图像路径，结果看起来与它相同。
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// 要隐藏的载荷图像路径。
    #[arg(short, long)]
    pub payload: PathBuf,

    /// 合成图像的输出路径，默认为载体旁的 `doctored_<载体名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 用于隐藏载荷的低位数 (1 到 7)。
    #[arg(short, long, default_value_t = BitsHidden::default(), value_parser = parse_bits)]
    pub bits: BitsHidden,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏载荷的合成图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复图像的输出路径，默认为输入旁的 `recovered_<输入名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 隐藏时使用的低位数，必须与隐藏时一致。
    #[arg(short, long, default_value_t = BitsHidden::default(), value_parser = parse_bits)]
    pub bits: BitsHidden,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 解析 `--bits`，越界的位数在读取任何文件之前就被拒绝。
pub fn parse_bits(value: &str) -> Result<BitsHidden, String> {
    let bits: u32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a non-negative integer"))?;
    BitsHidden::new(bits).map_err(|e| e.to_string())
}
