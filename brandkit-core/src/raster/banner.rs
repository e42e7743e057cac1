//! Logo + wordmark banners.

use std::path::PathBuf;

use image::{DynamicImage, RgbImage, Rgba};
use serde::{Deserialize, Serialize};

use super::canvas::{self, Background};
use super::enhance;
use super::text::{TextLayout, Typeface};
use crate::error::{BrandError, Result};

pub const DEFAULT_TEXT: &str = "ULTRATHINK";

/// Site header banner: logo and wordmark on black with generous padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderBanner {
    pub logo_size: u32,
    pub scale: u32,
    pub text_color: [u8; 3],
    pub font: Option<PathBuf>,
}

impl Default for HeaderBanner {
    fn default() -> Self {
        Self { logo_size: 48, scale: 4, text_color: [145, 145, 145], font: None }
    }
}

fn mul(name: &'static str, a: u32, b: u32) -> Result<u32> {
    a.checked_mul(b).ok_or_else(|| BrandError::invalid(name, format!("{a} x {b} overflows the pixel range")))
}

fn add(name: &'static str, parts: &[u32]) -> Result<u32> {
    parts
        .iter()
        .try_fold(0u32, |acc, &p| acc.checked_add(p))
        .ok_or_else(|| BrandError::invalid(name, "overflows the pixel range"))
}

/// Pixel geometry of a header banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderGeometry {
    pub logo_px: u32,
    pub font_px: u32,
    pub gap: u32,
    pub pad_v: u32,
    pub pad_h: u32,
}

impl HeaderBanner {
    pub fn geometry(&self) -> Result<HeaderGeometry> {
        if self.scale == 0 {
            return Err(BrandError::invalid("scale", "must be at least 1"));
        }
        if self.logo_size == 0 {
            return Err(BrandError::invalid("logo_size", "must be at least 1"));
        }
        let s = self.scale;
        Ok(HeaderGeometry {
            logo_px: mul("logo_size", self.logo_size, s)?,
            // 1.1rem at a 16px base
            font_px: (17.6 * s as f32) as u32,
            gap: mul("scale", 8, s)?,
            pad_v: mul("scale", 16, s)?,
            pad_h: mul("scale", 80, s)?,
        })
    }

    pub fn render(&self, logo: &DynamicImage, text: &str, typeface: &Typeface) -> Result<RgbImage> {
        let g = self.geometry()?;
        let logo = canvas::resize(&logo.to_rgba8(), g.logo_px, g.logo_px);
        let layout = TextLayout::measure(typeface, text, g.font_px as f32);

        let width = add("banner width", &[g.logo_px, g.gap, layout.total_width as u32, g.pad_h, g.pad_h])?;
        let height = add("banner height", &[g.logo_px.max(layout.max_height), g.pad_v, g.pad_v])?;
        let inner = height - 2 * g.pad_v;

        let mut out = canvas::filled(width, height, Background::Black.rgba());
        let logo_x = g.pad_h;
        let logo_y = g.pad_v + (inner - g.logo_px) / 2;
        canvas::paste(&mut out, &logo, logo_x as i64, logo_y as i64);

        let text_x = logo_x + g.logo_px + g.gap;
        let text_y = g.pad_v + (inner - layout.max_height) / 2;
        layout.draw(&mut out, typeface, text, text_x as i64, text_y as i64, self.text_color);

        log::debug!("header banner {width}x{height}, font {}", typeface.describe());
        Ok(DynamicImage::ImageRgba8(out).to_rgb8())
    }
}

/// 4:1 social banner: darkened logo and wordmark centred on white.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WideBanner {
    pub width: u32,
    pub scale: u32,
    pub text_color: [u8; 3],
    pub font: Option<PathBuf>,
}

impl Default for WideBanner {
    fn default() -> Self {
        Self { width: 1200, scale: 2, text_color: [0x33, 0x33, 0x33], font: None }
    }
}

const WIDE_LOGO_RATIO: f32 = 0.55;
const WIDE_FONT_RATIO: f32 = 0.22;
const WIDE_GAP_RATIO: f32 = 0.08;
const LOGO_BRIGHTNESS: f32 = 0.7;
const LOGO_CONTRAST: f32 = 1.2;

impl WideBanner {
    /// Canvas size: `width * scale` by `(width / 4) * scale`.
    pub fn canvas_size(&self) -> Result<(u32, u32)> {
        if self.scale == 0 {
            return Err(BrandError::invalid("scale", "must be at least 1"));
        }
        if self.width < 4 {
            return Err(BrandError::invalid("width", format!("must be at least 4, got {}", self.width)));
        }
        Ok((mul("width", self.width, self.scale)?, mul("width", self.width / 4, self.scale)?))
    }

    pub fn render(&self, logo: &DynamicImage, text: &str, typeface: &Typeface) -> Result<RgbImage> {
        let (width, height) = self.canvas_size()?;
        let h = height as f32;
        let logo_px = ((h * WIDE_LOGO_RATIO) as u32).max(1);
        let font_px = (h * WIDE_FONT_RATIO) as u32;
        let gap = (h * WIDE_GAP_RATIO) as u32;

        let mut logo_img = canvas::resize(&logo.to_rgba8(), logo_px, logo_px);
        // only logos with transparency are darkened for the white page
        if logo.color().has_alpha() {
            logo_img = enhance::contrast(&enhance::brightness(&logo_img, LOGO_BRIGHTNESS), LOGO_CONTRAST);
        }

        let layout = TextLayout::measure(typeface, text, font_px as f32);
        let content = logo_px as i64 + gap as i64 + layout.total_width as i64;
        let start_x = (width as i64 - content).div_euclid(2);

        let mut out = canvas::filled(width, height, Rgba([255, 255, 255, 255]));
        let logo_y = (height as i64 - logo_px as i64).div_euclid(2);
        canvas::paste(&mut out, &logo_img, start_x, logo_y);

        let text_x = start_x + logo_px as i64 + gap as i64;
        let text_y = (height as i64 - layout.max_height as i64).div_euclid(2);
        layout.draw(&mut out, typeface, text, text_x, text_y, self.text_color);

        log::debug!("wide banner {width}x{height}, font {}", typeface.describe());
        Ok(DynamicImage::ImageRgba8(out).to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn transparent_logo(size: u32) -> DynamicImage {
        let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
        for x in size / 4..size * 3 / 4 {
            for y in size / 4..size * 3 / 4 {
                img.put_pixel(x, y, Rgba([220, 220, 220, 255]));
            }
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn header_geometry_scales() {
        let g = HeaderBanner::default().geometry().expect("geometry");
        assert_eq!(g, HeaderGeometry { logo_px: 192, font_px: 70, gap: 32, pad_v: 64, pad_h: 320 });
    }

    #[test]
    fn header_dimensions_with_bitmap_font() {
        let banner = HeaderBanner::default();
        let img = banner.render(&transparent_logo(64), DEFAULT_TEXT, &Typeface::Bitmap).expect("render");
        // 48 ink cells of 9px plus nine 5.6px gaps = 482
        assert_eq!(img.dimensions(), (192 + 32 + 482 + 640, 320));
        // padding stays black, wordmark is grey
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert!(img.pixels().any(|p| p.0 == [145, 145, 145]));
    }

    #[test]
    fn wide_banner_size_follows_width_and_scale() {
        let banner = WideBanner { width: 1200, scale: 2, ..WideBanner::default() };
        assert_eq!(banner.canvas_size().expect("size"), (2400, 600));
        let small = WideBanner { width: 400, scale: 1, ..WideBanner::default() };
        let img = small.render(&transparent_logo(32), "UT", &Typeface::Bitmap).expect("render");
        assert_eq!(img.dimensions(), (400, 100));
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn oversized_banners_are_rejected_not_wrapped() {
        let wide = WideBanner { width: u32::MAX / 2, scale: 4, ..WideBanner::default() };
        assert!(matches!(wide.canvas_size(), Err(BrandError::InvalidParam { name: "width", .. })));
        let header = HeaderBanner { logo_size: u32::MAX / 2, scale: 4, ..HeaderBanner::default() };
        assert!(matches!(header.geometry(), Err(BrandError::InvalidParam { name: "logo_size", .. })));
        let padded = HeaderBanner { logo_size: 1, scale: u32::MAX / 10, ..HeaderBanner::default() };
        assert!(matches!(padded.geometry(), Err(BrandError::InvalidParam { name: "scale", .. })));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let banner = WideBanner { scale: 0, ..WideBanner::default() };
        assert!(banner.canvas_size().is_err());
        let header = HeaderBanner { scale: 0, ..HeaderBanner::default() };
        assert!(header.geometry().is_err());
    }
}
