//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `recover` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{HideArgs, RecoverArgs};
use crate::constants::{DOCTORED_PREFIX, LOSSY_EXTENSIONS, OUTPUT_EXTENSION, RECOVERED_PREFIX};
use crate::steganography::{extract, hide};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbImage};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取载体与载荷图像、调用隐写核心函数完成对齐、削减、移位与合成，
/// 最后将合成图像以 PNG 写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和隐藏位数的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码载体或载荷图像。
/// * 目标文件已存在且未指定 `--force`。
/// * 核心隐写函数 (`hide`) 在执行过程中失败。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = output_path(&args.carrier, args.dest.as_deref(), DOCTORED_PREFIX);
    ensure_writable(&dest, args.force)?;

    let carrier = load_rgb(&args.carrier)?;
    let payload = load_rgb(&args.payload)?;

    let combined = hide(&carrier, &payload, args.bits).with_context(|| {
        format!(
            "Failed to hide '{}' inside '{}'.",
            args.payload.to_string_lossy().red().bold(),
            args.carrier.to_string_lossy().red().bold()
        )
    })?;

    save_png(&combined, &dest)?;
    info!(
        "wrote {}x{} combined image to {}",
        combined.width(),
        combined.height(),
        dest.display()
    );

    println!(
        "The image has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "The carrier keeps {} bits per channel, the payload uses {}.",
        args.bits.bits_kept().to_string().green().bold(),
        args.bits.bits().to_string().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取合成图像、调用提取函数取出低位并扩展回字节高位，
/// 最后将恢复的载荷近似图像以 PNG 写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和隐藏位数的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = output_path(&args.image, args.dest.as_deref(), RECOVERED_PREFIX);
    ensure_writable(&dest, args.force)?;

    let combined = load_rgb(&args.image)?;
    let recovered = extract(&combined, args.bits);

    save_png(&recovered, &dest)?;
    info!(
        "recovered {}x{} payload with {} bits per channel",
        recovered.width(),
        recovered.height(),
        args.bits
    );

    println!(
        "The hidden image has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 计算输出路径：显式给出的路径优先，否则在输入文件旁生成 `<prefix><stem>.png`。
pub fn output_path(input: &Path, explicit: Option<&Path>, prefix: &str) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{stem}.{OUTPUT_EXTENSION}"))
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let lossy = dest
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            LOSSY_EXTENSIONS
                .iter()
                .any(|lossy| ext.eq_ignore_ascii_case(lossy))
        });
    if lossy {
        warn!(
            "{} has a lossy extension but will be written as PNG",
            dest.display()
        );
    }

    Ok(())
}

/// 读取图像并应用 EXIF 方向，丢弃 alpha 通道。
fn load_rgb(path: &Path) -> Result<RgbImage> {
    let open_context = || {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    };

    let mut decoder = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .with_context(open_context)?
        .into_decoder()
        .with_context(open_context)?;
    let orientation = decoder.orientation().with_context(open_context)?;
    let mut image = DynamicImage::from_decoder(decoder).with_context(open_context)?;
    image.apply_orientation(orientation);

    Ok(image.to_rgb8())
}

fn save_png(image: &RgbImage, dest: &Path) -> Result<()> {
    image
        .save_with_format(dest, ImageFormat::Png)
        .with_context(|| {
            format!(
                "Unable to write to target image file: {}",
                dest.to_string_lossy().red().bold()
            )
        })
}
