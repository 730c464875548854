//! 图片解析器 - 基础设施层
//!
//! 把请求里内嵌的 data URL 还原为图片字节，只暴露"解析"能力

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::GenericImageView;
use std::io::Cursor;
use tracing::{debug, warn};

/// 每英寸对应的 EMU（Office 文档长度单位）
pub const EMU_PER_INCH: f64 = 914_400.0;

/// 解析成功的图片，统一转为 PNG
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

impl ResolvedImage {
    /// 按给定宽度（英寸）等比缩放后的尺寸，单位 EMU
    pub fn size_emu(&self, width_inches: f64) -> (u32, u32) {
        let width = width_inches * EMU_PER_INCH;
        let height = if self.width_px == 0 {
            width
        } else {
            width * f64::from(self.height_px) / f64::from(self.width_px)
        };
        (width.round() as u32, height.round() as u32)
    }
}

/// 图片解析能力
///
/// 解析失败不是错误：返回 None，调用方跳过这张图片
pub trait ImageResolver: Send + Sync {
    fn resolve(&self, reference: &str) -> Option<ResolvedImage>;
}

/// data URL 解析器（`data:image/png;base64,....`）
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlResolver;

impl ImageResolver for DataUrlResolver {
    fn resolve(&self, reference: &str) -> Option<ResolvedImage> {
        let bytes = decode_data_url(reference)?;

        let img = match image::load_from_memory(&bytes) {
            Ok(img) => img,
            Err(e) => {
                warn!("⚠️ 图片内容无法识别，已跳过: {}", e);
                return None;
            }
        };

        let (width_px, height_px) = img.dimensions();
        let mut png = Vec::new();
        if let Err(e) = img.write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png) {
            warn!("⚠️ 图片转换为 PNG 失败，已跳过: {}", e);
            return None;
        }

        Some(ResolvedImage {
            png,
            width_px,
            height_px,
        })
    }
}

/// 拆分 data URL 并做 base64 解码
///
/// 缺少 `,` 分隔符或内容不是合法 base64 时返回 None
pub fn decode_data_url(reference: &str) -> Option<Vec<u8>> {
    let Some((header, encoded)) = reference.split_once(',') else {
        warn!("⚠️ 图片引用缺少分隔符，已跳过");
        return None;
    };
    debug!("解析图片: {}", header);

    let payload: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    match STANDARD.decode(payload.as_bytes()) {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => {
            warn!("⚠️ 图片内容为空，已跳过");
            None
        }
        Err(e) => {
            warn!("⚠️ 图片 base64 解码失败，已跳过: {}", e);
            None
        }
    }
}
