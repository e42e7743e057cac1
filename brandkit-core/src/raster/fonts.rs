//! Font discovery on local search paths.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use serde::{Deserialize, Serialize};

use super::text::Typeface;
use crate::error::{BrandError, Result};
use crate::provider::{first_available, Provider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Geometric sans for the header banner.
    Sans,
    /// Monospace, matching the site header's mono wordmark.
    Mono,
}

const SANS_CANDIDATES: &[&str] = &[
    "~/Library/Fonts/SpaceGrotesk-SemiBold.ttf",
    "~/Library/Fonts/SpaceGrotesk-Bold.ttf",
    "~/.local/share/fonts/SpaceGrotesk-SemiBold.ttf",
    "/System/Library/Fonts/Supplemental/SpaceGrotesk-SemiBold.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "C:/Windows/Fonts/arial.ttf",
];

const MONO_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFMono-Bold.otf",
    "/System/Library/Fonts/SFMono-Semibold.otf",
    "/System/Library/Fonts/SFMono-Regular.otf",
    "/Library/Fonts/SF-Mono-Bold.otf",
    "/Library/Fonts/SF-Mono-Semibold.otf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "/System/Library/Fonts/Supplemental/Monaco.ttf",
    "/System/Library/Fonts/Supplemental/Courier New Bold.ttf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "/Library/Fonts/Courier New Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Bold.ttf",
    "C:/Windows/Fonts/consola.ttf",
    "C:/Windows/Fonts/cour.ttf",
];

fn expand_home(p: &str) -> PathBuf {
    match (p.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(p),
    }
}

impl FontFamily {
    pub fn search_paths(self) -> Vec<PathBuf> {
        let list = match self {
            FontFamily::Sans => SANS_CANDIDATES,
            FontFamily::Mono => MONO_CANDIDATES,
        };
        list.iter().map(|p| expand_home(p)).collect()
    }
}

/// A font file on disk.
pub struct FontFile {
    pub path: PathBuf,
}

impl Provider for FontFile {
    type Output = Typeface;

    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn provide(&self) -> std::result::Result<Typeface, String> {
        if !self.path.is_file() {
            return Err("not found".to_string());
        }
        let font = load_font(&self.path).map_err(|e| e.to_string())?;
        Ok(Typeface::Vector { font, source: self.path.clone() })
    }
}

/// Parse a font file; collections use their first face.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let font_error = |reason: String| BrandError::Font { path: path.to_path_buf(), reason };
    let data = std::fs::read(path).map_err(|e| font_error(e.to_string()))?;
    FontVec::try_from_vec_and_index(data, 0).map_err(|e| font_error(e.to_string()))
}

/// Pick a typeface: the explicit path first, then the family's search
/// list, and finally the built-in bitmap font.
pub fn resolve(family: FontFamily, explicit: Option<&Path>) -> Typeface {
    let candidates = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(family.search_paths())
        .map(|path| FontFile { path });
    match first_available("font", candidates) {
        Ok(found) => {
            log::info!("using font {}", found.provider);
            found.value
        }
        Err(err) => {
            log::warn!("{err}; falling back to the built-in bitmap font");
            Typeface::Bitmap
        }
    }
}
