//! # 错误类型模块
//!
//! 隐写核心的所有失败情形。核心是纯函数，出错即表示本次调用没有输出图像。

use std::fmt;
use thiserror::Error;

/// 颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// 按 RGB 样本顺序排列的通道。
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    #[error("Invalid number of hidden bits: {bits} (expected {min} to {max})")]
    Configuration { bits: u32, min: u32, max: u32 },

    #[error("Pixel ({x}, {y}) is outside a {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Pixel value > 255 at ({x}, {y}) in the {channel} channel: {sum}")]
    ChannelOverflow {
        x: u32,
        y: u32,
        channel: Channel,
        sum: u16,
    },

    #[error("Image dimensions differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },
}
