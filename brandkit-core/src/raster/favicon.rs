//! Square favicon on black.

use std::path::Path;

use image::{imageops, DynamicImage, RgbImage};
use serde::{Deserialize, Serialize};

use super::canvas::{self, Background};
use crate::error::{BrandError, Result};
use crate::provider::{first_available, FnProvider, Resolved};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconOptions {
    pub size: u32,
}

impl Default for FaviconOptions {
    fn default() -> Self {
        Self { size: 1024 }
    }
}

/// Where the logo sits in a default header banner (48px logo at 4x).
const BANNER_LOGO_X: u32 = 320;
const BANNER_LOGO_SIZE: u32 = 192;

/// Flatten the logo onto black and stretch it to `size`.
pub fn from_logo(logo: &DynamicImage, size: u32) -> RgbImage {
    let flat = canvas::flatten(&logo.to_rgba8(), Background::Black);
    DynamicImage::ImageRgba8(canvas::resize(&flat, size, size)).to_rgb8()
}

/// Cut the logo square out of an existing header banner.
pub fn from_banner(banner: &DynamicImage, size: u32) -> Result<RgbImage> {
    let (w, h) = (banner.width(), banner.height());
    if w < BANNER_LOGO_X + BANNER_LOGO_SIZE || h < BANNER_LOGO_SIZE {
        return Err(BrandError::invalid(
            "banner",
            format!("{w}x{h} is too small to contain the logo"),
        ));
    }
    let top = (h - BANNER_LOGO_SIZE) / 2;
    let region = imageops::crop_imm(&banner.to_rgba8(), BANNER_LOGO_X, top, BANNER_LOGO_SIZE, BANNER_LOGO_SIZE).to_image();
    let flat = canvas::flatten(&region, Background::Black);
    Ok(DynamicImage::ImageRgba8(canvas::resize(&flat, size, size)).to_rgb8())
}

type SourceFn<'a> = Box<dyn Fn() -> std::result::Result<RgbImage, String> + 'a>;
type Source<'a> = FnProvider<SourceFn<'a>>;

/// Build the favicon from the logo PNG, falling back to the header banner
/// when the logo cannot be decoded. A logo file that does not exist at all
/// is a hard error.
pub fn generate(logo: &Path, banner: Option<&Path>, opts: &FaviconOptions) -> Result<Resolved<RgbImage>> {
    if opts.size == 0 {
        return Err(BrandError::invalid("size", "must be at least 1"));
    }
    if !logo.exists() {
        return Err(BrandError::missing("logo PNG", logo));
    }
    let size = opts.size;
    let from_logo_file: SourceFn<'_> = Box::new(move || {
        let img = image::open(logo).map_err(|e| e.to_string())?;
        Ok(from_logo(&img, size))
    });
    let mut sources: Vec<Source<'_>> = vec![FnProvider::new(format!("logo {}", logo.display()), from_logo_file)];
    if let Some(banner) = banner {
        let from_banner_file: SourceFn<'_> = Box::new(move || {
            let img = canvas::load_image(banner, "banner").map_err(|e| e.to_string())?;
            from_banner(&img, size).map_err(|e| e.to_string())
        });
        sources.push(FnProvider::new(format!("banner {}", banner.display()), from_banner_file));
    }
    first_available("favicon source", sources)
}
