use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::convert::ConvertOptions;
use crate::mobius::{Labels, MobiusParams};
use crate::raster::banner::{HeaderBanner, WideBanner, DEFAULT_TEXT};
use crate::raster::favicon::FaviconOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub brand: Brand,
    pub paths: Paths,
    pub mobius: MobiusParams,
    pub banner: HeaderBanner,
    pub wide_banner: WideBanner,
    pub favicon: FaviconOptions,
    pub convert: ConvertOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Wordmark drawn on the banners.
    pub text: String,
    /// `<title>` of the SVG icon.
    pub title: String,
    /// `<desc>` of the SVG icon.
    pub description: String,
}

impl Default for Brand {
    fn default() -> Self {
        let labels = Labels::default();
        Self { text: DEFAULT_TEXT.to_string(), title: labels.title, description: labels.description }
    }
}

impl Brand {
    pub fn labels(&self) -> Labels {
        Labels { title: self.title.clone(), description: self.description.clone() }
    }
}

/// Default input and output locations, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub logo_svg: PathBuf,
    pub logo_png: PathBuf,
    pub favicon: PathBuf,
    pub banner: PathBuf,
    pub wide_banner: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            logo_svg: PathBuf::from("assets/icons/ultrathink-mobius.svg"),
            logo_png: PathBuf::from("assets/icons/ultrathink-mobius.png"),
            favicon: PathBuf::from("assets/icons/favicon.png"),
            banner: PathBuf::from("ultrathink-banner.png"),
            wide_banner: PathBuf::from("ultrathink-banner-4x1.png"),
        }
    }
}
