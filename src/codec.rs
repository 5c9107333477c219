//! # 位平面编解码模块
//!
//! 把一个 8 位通道值拆成“保留”的高位与“隐藏”的低位。
//! 载体保留高 `8 - bits` 位，载荷的高 `bits` 位被移入低位。

use crate::constants::{CHANNEL_BITS, DEFAULT_BITS_HIDDEN, MAX_BITS_HIDDEN, MIN_BITS_HIDDEN};
use crate::error::StegoError;
use std::fmt;

/// 用于隐藏载荷的低位数，以及由它导出的两个量化因子。
///
/// 只能通过 [`BitsHidden::new`] 或 `Default` (2 位) 构造，因此位数总在 1 到 7 之间，
/// 且 `factor_chop * factor_hide == 256`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitsHidden {
    bits: u32,
    factor_chop: u8,
    factor_hide: u8,
}

impl BitsHidden {
    /// 校验位数并计算 `factor_chop = 2^bits`、`factor_hide = 2^(8 - bits)`。
    ///
    /// # Errors
    ///
    /// 位数不在 1 到 7 之间时返回 [`StegoError::Configuration`]。
    pub fn new(bits: u32) -> Result<Self, StegoError> {
        if !(MIN_BITS_HIDDEN..=MAX_BITS_HIDDEN).contains(&bits) {
            return Err(StegoError::Configuration {
                bits,
                min: MIN_BITS_HIDDEN,
                max: MAX_BITS_HIDDEN,
            });
        }

        Ok(Self::with_factors(bits))
    }

    const fn with_factors(bits: u32) -> Self {
        Self {
            bits,
            factor_chop: 1 << bits,
            factor_hide: 1 << (CHANNEL_BITS - bits),
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// 载体保留位的量化步长。
    pub fn factor_chop(&self) -> u8 {
        self.factor_chop
    }

    /// 载荷贡献位的量化步长。
    pub fn factor_hide(&self) -> u8 {
        self.factor_hide
    }

    /// 载体保留的位数。
    pub fn bits_kept(&self) -> u32 {
        CHANNEL_BITS - self.bits
    }
}

impl Default for BitsHidden {
    fn default() -> Self {
        Self::with_factors(DEFAULT_BITS_HIDDEN)
    }
}

impl fmt::Display for BitsHidden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits)
    }
}

/// 清零载体通道值的低 `bits` 位。
pub fn chop_low(value: u8, bits: BitsHidden) -> u8 {
    value / bits.factor_chop * bits.factor_chop
}

/// 把载荷通道值的高 `bits` 位右移到低位，结果在 `[0, factor_chop - 1]`。
pub fn shift_high(value: u8, bits: BitsHidden) -> u8 {
    value / bits.factor_hide
}

/// 取出合成值的低 `bits` 位并扩展回字节高位。
///
/// 有损：原载荷低 `8 - bits` 位无法恢复。
pub fn extract_low(value: u8, bits: BitsHidden) -> u8 {
    // (factor_chop - 1) * factor_hide == 256 - factor_hide，不会溢出
    (value % bits.factor_chop) * bits.factor_hide
}

/// 两个通道值相加，超过 255 时返回 `None` 而不是截断或回绕。
pub fn add_checked(carrier: u8, payload: u8) -> Option<u8> {
    carrier.checked_add(payload)
}
