use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageEncoder, Rgba, RgbaImage};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{BrandError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Black,
    White,
    Transparent,
}

impl Background {
    pub fn rgba(self) -> Rgba<u8> {
        match self {
            Background::Black => Rgba([0, 0, 0, 255]),
            Background::White => Rgba([255, 255, 255, 255]),
            Background::Transparent => Rgba([0, 0, 0, 0]),
        }
    }

    /// `#rrggbb`, or `None` for transparent.
    pub fn hex(self) -> Option<&'static str> {
        match self {
            Background::Black => Some("#000000"),
            Background::White => Some("#FFFFFF"),
            Background::Transparent => None,
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Background::Black => "black",
            Background::White => "white",
            Background::Transparent => "transparent",
        })
    }
}

impl FromStr for Background {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Background::Black),
            "white" => Ok(Background::White),
            "transparent" | "none" => Ok(Background::Transparent),
            other => Err(BrandError::invalid(
                "background",
                format!("expected black, white or transparent, got {other:?}"),
            )),
        }
    }
}

/// Same spellings as the command line.
impl<'de> Deserialize<'de> for Background {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Open an image, reporting a missing file as a hard input error.
pub fn load_image<P: AsRef<Path>>(path: P, what: &'static str) -> Result<DynamicImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BrandError::missing(what, path));
    }
    Ok(image::open(path)?)
}

pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Composite `img` over a solid background. Transparent keeps alpha.
pub fn flatten(img: &RgbaImage, bg: Background) -> RgbaImage {
    if bg == Background::Transparent {
        return img.clone();
    }
    let Rgba([br, bg_g, bb, _]) = bg.rgba();
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let Rgba([r, g, b, a]) = *px;
        let a = a as f32 / 255.0;
        let mix = |src: u8, back: u8| (src as f32 * a + back as f32 * (1.0 - a)).round() as u8;
        *px = Rgba([mix(r, br), mix(g, bg_g), mix(b, bb), 255]);
    }
    out
}

pub fn resize(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(img, width, height, FilterType::Lanczos3)
}

/// Alpha-blend `top` onto `canvas` with its top-left corner at (x, y).
pub fn paste(canvas: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(canvas, top, x, y);
}

/// Write a PNG with fast compression, creating parent directories.
pub fn write_png<P: AsRef<Path>>(path: P, img: &DynamicImage) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let out = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(out, CompressionType::Fast, PngFilter::Adaptive);
    encoder.write_image(img.as_bytes(), img.width(), img.height(), img.color())?;
    log::debug!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}
