//! # 图像隐写核心模块
//!
//! 在整幅图像上应用位平面编解码：对齐裁剪、削减载体、移位载荷、合成与提取。
//! 所有函数都不修改输入，每个阶段分配自己的输出图像。

use crate::codec::{BitsHidden, add_checked, chop_low, extract_low, shift_high};
use crate::error::{Channel, StegoError};
use image::{RgbImage, imageops};
use log::debug;
use rayon::prelude::*;

/// 两幅图像共同的 (宽, 高)，即各轴上的较小值。
pub fn align(first: &RgbImage, second: &RgbImage) -> (u32, u32) {
    (
        first.width().min(second.width()),
        first.height().min(second.height()),
    )
}

/// 从左上角 (0, 0) 裁出 `width` x `height` 的新图像，像素原样复制。
///
/// # Errors
///
/// 目标尺寸超出源图像时返回 [`StegoError::OutOfBounds`]，报告第一个越界的坐标。
pub fn crop(image: &RgbImage, width: u32, height: u32) -> Result<RgbImage, StegoError> {
    if width > image.width() || height > image.height() {
        return Err(StegoError::OutOfBounds {
            x: width.saturating_sub(1),
            y: height.saturating_sub(1),
            width: image.width(),
            height: image.height(),
        });
    }

    Ok(imageops::crop_imm(image, 0, 0, width, height).to_image())
}

/// 把载体和载荷裁到相同尺寸。
pub fn align_pair(
    carrier: &RgbImage,
    payload: &RgbImage,
) -> Result<(RgbImage, RgbImage), StegoError> {
    let (width, height) = align(carrier, payload);
    debug!(
        "aligning {}x{} carrier and {}x{} payload to {}x{}",
        carrier.width(),
        carrier.height(),
        payload.width(),
        payload.height(),
        width,
        height
    );
    Ok((crop(carrier, width, height)?, crop(payload, width, height)?))
}

fn map_channels<F>(image: &RgbImage, op: F) -> RgbImage
where
    F: Fn(u8) -> u8 + Sync,
{
    let mut output = image.clone();
    let samples: &mut [u8] = &mut output;
    samples.par_iter_mut().for_each(|sample| *sample = op(*sample));
    output
}

/// 清零每个像素每个通道的低位，为隐藏数据腾出空间。
pub fn chop_image(image: &RgbImage, bits: BitsHidden) -> RgbImage {
    map_channels(image, |value| chop_low(value, bits))
}

/// 把每个通道的高位压缩到低位，写入新分配的图像。
pub fn shift_image(image: &RgbImage, bits: BitsHidden) -> RgbImage {
    map_channels(image, |value| shift_high(value, bits))
}

/// 逐像素、逐通道相加两幅同尺寸图像。
///
/// 按行优先顺序扫描，遇到第一个和大于 255 的通道即失败。
/// 只有削减与移位使用了不同的位数，或输入并非来自本流水线时才会发生。
pub fn combine(first: &RgbImage, second: &RgbImage) -> Result<RgbImage, StegoError> {
    if first.dimensions() != second.dimensions() {
        return Err(StegoError::DimensionMismatch {
            left_width: first.width(),
            left_height: first.height(),
            right_width: second.width(),
            right_height: second.height(),
        });
    }

    let mut combined = RgbImage::new(first.width(), first.height());
    for (x, y, pixel) in combined.enumerate_pixels_mut() {
        let a = first.get_pixel(x, y);
        let b = second.get_pixel(x, y);
        for (index, channel) in Channel::ALL.into_iter().enumerate() {
            let (p, q) = (a[index], b[index]);
            pixel[index] = add_checked(p, q).ok_or(StegoError::ChannelOverflow {
                x,
                y,
                channel,
                sum: u16::from(p) + u16::from(q),
            })?;
        }
    }

    Ok(combined)
}

/// 从合成图像中恢复载荷的近似图像。
pub fn extract(combined: &RgbImage, bits: BitsHidden) -> RgbImage {
    map_channels(combined, |value| extract_low(value, bits))
}

/// 完整的隐藏流程：对齐，削减载体，移位载荷，合成。
pub fn hide(
    carrier: &RgbImage,
    payload: &RgbImage,
    bits: BitsHidden,
) -> Result<RgbImage, StegoError> {
    let (carrier, payload) = align_pair(carrier, payload)?;
    debug!(
        "hiding {} bits per channel (factor_chop = {}, factor_hide = {})",
        bits.bits(),
        bits.factor_chop(),
        bits.factor_hide()
    );
    combine(&chop_image(&carrier, bits), &shift_image(&payload, bits))
}

/// 读取像素，坐标越界时返回 [`StegoError::OutOfBounds`]。
pub fn pixel_at(image: &RgbImage, x: u32, y: u32) -> Result<[u8; 3], StegoError> {
    image
        .get_pixel_checked(x, y)
        .map(|pixel| pixel.0)
        .ok_or(StegoError::OutOfBounds {
            x,
            y,
            width: image.width(),
            height: image.height(),
        })
}
