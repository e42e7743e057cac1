//! Theme-dependent grey gradients for the icon.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::BrandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// (base, highlight, shadow) grey levels.
    fn levels(self) -> (u8, u8, u8) {
        match self {
            // light strip on a dark page
            Theme::Dark => (200, 245, 160),
            Theme::Light => (180, 220, 140),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

impl FromStr for Theme {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(BrandError::invalid("theme", format!("expected dark or light, got {other:?}"))),
        }
    }
}

/// Same spellings as the command line.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// How far each band is lifted from the base grey, brightest first.
pub const BAND_FACTORS: [f64; 5] = [0.35, 0.25, 0.15, 0.08, 0.02];

const HIGHLIGHT_FACTOR: f64 = 0.4;

/// Three vertical stops of one intensity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandGradient {
    pub top: u8,
    pub mid: u8,
    pub bottom: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub bands: Vec<BandGradient>,
    pub highlight: u8,
    pub base: u8,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let (base, hi, shadow) = theme.levels();
        let (b, h, s) = (base as f64, hi as f64, shadow as f64);
        let bands = BAND_FACTORS
            .iter()
            .map(|&f| {
                let mid = (b + (h - b) * f) as i32;
                let top = (b + (h - b) * f * 1.2) as i32;
                let bottom = (b - (b - s) * f) as i32;
                BandGradient {
                    top: top.clamp(shadow as i32, hi as i32) as u8,
                    mid: mid.clamp(shadow as i32, hi as i32) as u8,
                    bottom: bottom.clamp(shadow as i32, base as i32) as u8,
                }
            })
            .collect();
        let highlight = (b + (h - b) * HIGHLIGHT_FACTOR) as u8;
        Self { theme, bands, highlight, base }
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }
}

/// `#rrggbb` for a grey level.
pub fn grey_hex(level: u8) -> String {
    format!("#{level:02x}{level:02x}{level:02x}")
}
