//! SVG to PNG rasterization through external converters.
//!
//! Converters are tried in a fixed order: `rsvg-convert`, Inkscape,
//! ImageMagick and, on macOS, Quick Look. The first one that runs
//! successfully and leaves a non-empty PNG behind wins.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
use crate::provider::{first_available, Provider};
use crate::raster::canvas::{self, Background};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub size: u32,
    pub background: Background,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { size: 1024, background: Background::Black }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    Rsvg,
    Inkscape,
    ImageMagick,
    QuickLook,
}

impl Converter {
    pub fn program(self) -> &'static str {
        match self {
            Converter::Rsvg => "rsvg-convert",
            Converter::Inkscape => "inkscape",
            Converter::ImageMagick => "convert",
            Converter::QuickLook => "qlmanage",
        }
    }

    /// Package hint shown when nothing is installed.
    pub fn install_hint(self) -> &'static str {
        match self {
            Converter::Rsvg => "librsvg (brew install librsvg)",
            Converter::Inkscape => "Inkscape (brew install inkscape)",
            Converter::ImageMagick => "ImageMagick (brew install imagemagick)",
            Converter::QuickLook => "Quick Look (macOS only)",
        }
    }

    /// Converters to try on this platform, best first.
    pub fn chain() -> Vec<Converter> {
        let mut list = vec![Converter::Rsvg, Converter::Inkscape, Converter::ImageMagick];
        if cfg!(target_os = "macos") {
            list.push(Converter::QuickLook);
        }
        list
    }

    fn named_color(bg: Background) -> &'static str {
        match bg {
            Background::Black => "black",
            Background::White => "white",
            Background::Transparent => "none",
        }
    }

    /// Build the command line for a job.
    pub fn command(self, job: &ConvertJob) -> Command {
        let size = job.opts.size.to_string();
        let mut cmd = Command::new(self.program());
        match self {
            Converter::Rsvg => {
                cmd.args(["-w", size.as_str(), "-h", size.as_str()]);
                if let Some(hex) = job.opts.background.hex() {
                    cmd.args(["--background-color", hex]);
                }
                cmd.arg("-o").arg(&job.png).arg(&job.svg);
            }
            Converter::Inkscape => {
                cmd.arg(&job.svg)
                    .arg("--export-type=png")
                    .arg(format!("--export-filename={}", job.png.display()))
                    .arg(format!("--export-width={size}"))
                    .arg(format!("--export-height={size}"));
                if job.opts.background != Background::Transparent {
                    cmd.arg(format!("--export-background={}", Self::named_color(job.opts.background)));
                }
            }
            Converter::ImageMagick => {
                cmd.args(["-background", Self::named_color(job.opts.background)])
                    .arg("-resize")
                    .arg(format!("{size}x{size}"))
                    .arg(&job.svg)
                    .arg(&job.png);
            }
            Converter::QuickLook => {
                cmd.args(["-t", "-s", size.as_str(), "-o"]).arg(job.out_dir()).arg(&job.svg);
            }
        }
        cmd
    }
}

/// One conversion request.
#[derive(Debug, Clone)]
pub struct ConvertJob {
    pub svg: PathBuf,
    pub png: PathBuf,
    pub opts: ConvertOptions,
}

impl ConvertJob {
    fn out_dir(&self) -> PathBuf {
        self.png
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Quick Look names its thumbnail after the source file.
    fn quicklook_output(&self) -> PathBuf {
        let name = self.svg.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        self.out_dir().join(format!("{name}.png"))
    }
}

fn describe_failure(out: &Output) -> String {
    let stderr = String::from_utf8_lossy(&out.stderr);
    let first = stderr.lines().next().unwrap_or("").trim();
    if first.is_empty() {
        format!("exited with {}", out.status)
    } else {
        format!("exited with {}: {first}", out.status)
    }
}

struct ConverterRun<'a> {
    converter: Converter,
    job: &'a ConvertJob,
}

impl ConverterRun<'_> {
    fn finish_quicklook(&self) -> std::result::Result<(), String> {
        let produced = self.job.quicklook_output();
        std::fs::rename(&produced, &self.job.png).map_err(|e| format!("no thumbnail at {}: {e}", produced.display()))?;
        if self.job.opts.background == Background::Transparent {
            return Ok(());
        }
        let img = image::open(&self.job.png).map_err(|e| e.to_string())?;
        let flat = canvas::flatten(&img.to_rgba8(), self.job.opts.background);
        canvas::write_png(&self.job.png, &image::DynamicImage::ImageRgba8(flat)).map_err(|e| e.to_string())
    }
}

impl Provider for ConverterRun<'_> {
    type Output = Converter;

    fn name(&self) -> String {
        self.converter.program().to_string()
    }

    fn provide(&self) -> std::result::Result<Converter, String> {
        let out = self.converter.command(self.job).output().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => "not installed".to_string(),
            _ => e.to_string(),
        })?;
        if !out.status.success() {
            return Err(describe_failure(&out));
        }
        if self.converter == Converter::QuickLook {
            self.finish_quicklook()?;
        }
        match std::fs::metadata(&self.job.png) {
            Ok(meta) if meta.len() > 0 => Ok(self.converter),
            _ => Err("produced no output".to_string()),
        }
    }
}

/// Rasterize `svg` into `png`. A missing SVG is a hard error; when every
/// converter fails the error lists each attempt.
pub fn convert(svg: &Path, png: &Path, opts: &ConvertOptions) -> Result<Converter> {
    convert_with(svg, png, opts, &Converter::chain())
}

pub fn convert_with(svg: &Path, png: &Path, opts: &ConvertOptions, chain: &[Converter]) -> Result<Converter> {
    if !svg.exists() {
        return Err(BrandError::missing("SVG", svg));
    }
    if opts.size == 0 {
        return Err(BrandError::invalid("size", "must be at least 1"));
    }
    if let Some(dir) = png.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let job = ConvertJob { svg: svg.to_path_buf(), png: png.to_path_buf(), opts: opts.clone() };
    let found = first_available("svg converter", chain.iter().map(|&converter| ConverterRun { converter, job: &job }))?;
    log::debug!("converted {} -> {} with {}", svg.display(), png.display(), found.provider);
    Ok(found.value)
}
