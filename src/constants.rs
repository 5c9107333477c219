/// 每个颜色通道的位数。
pub const CHANNEL_BITS: u32 = 8;

/// 可用于隐藏载荷图像的最少低位数。
pub const MIN_BITS_HIDDEN: u32 = 1;

/// 可用于隐藏载荷图像的最多低位数。
/// 取 8 将不给载体图像留下任何位。
pub const MAX_BITS_HIDDEN: u32 = 7;

/// 未指定 `--bits` 时使用的低位数。
pub const DEFAULT_BITS_HIDDEN: u32 = 2;

/// `hide` 默认输出文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// `recover` 默认输出文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";

/// 输出总是以无损 PNG 编码。
pub const OUTPUT_EXTENSION: &str = "png";

/// 以 PNG 字节写入时会误导使用者的有损扩展名。
pub const LOSSY_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "webp"];
