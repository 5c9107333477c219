//! # lsb_veil 库
//!
//! 本库包含把一幅图像隐藏到另一幅图像中的 LSB 隐写核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;
