//! Procedural Möbius strip icon.
//!
//! The strip is sampled on a (u, v) grid, rotated, projected
//! orthographically and cut into quads. Each quad is shaded with a narrow
//! ambient + diffuse model, quantized to one of a few gradient bands, and
//! the quads are painted back to front. The brightest top-side quads are
//! painted again with a soft radial highlight.

pub mod palette;
pub mod patch;
pub mod shading;
pub mod surface;
pub mod svg;
pub mod transform;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
pub use palette::{Palette, Theme};
pub use patch::Patch;
pub use svg::Labels;

use patch::{PatchBuilder, HIGHLIGHT_CAP, HIGHLIGHT_THRESHOLD};
use shading::{Light, Shading};
use surface::ParamGrid;
use transform::{Projection, Rotation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobiusParams {
    pub rot_x: f64,
    pub rot_y: f64,
    pub rot_z: f64,
    pub distance: f64,
    pub theme: Theme,
    pub u_steps: usize,
    pub v_steps: usize,
    pub radius: f64,
    pub half_width: f64,
    pub normal_step: f64,
}

impl Default for MobiusParams {
    fn default() -> Self {
        Self {
            rot_x: 25.0,
            rot_y: 50.0,
            rot_z: 5.0,
            distance: 4.5,
            theme: Theme::Dark,
            u_steps: 80,
            v_steps: 12,
            radius: 1.0,
            half_width: 0.3,
            normal_step: surface::DEFAULT_NORMAL_STEP,
        }
    }
}

/// Patches in draw order plus the palette they index into.
#[derive(Debug, Clone)]
pub struct Scene {
    pub patches: Vec<Patch>,
    pub palette: Palette,
    pub shading: Shading,
}

impl MobiusParams {
    fn check_surface(&self) -> Result<()> {
        if !self.radius.is_finite() {
            return Err(BrandError::invalid("radius", format!("must be finite, got {}", self.radius)));
        }
        if !(self.normal_step.is_finite() && self.normal_step > 0.0) {
            return Err(BrandError::invalid(
                "normal_step",
                format!("must be a positive number, got {}", self.normal_step),
            ));
        }
        Ok(())
    }
}

impl Scene {
    pub fn build(params: &MobiusParams) -> Result<Self> {
        params.check_surface()?;
        let grid = ParamGrid::new(params.u_steps, params.v_steps, params.half_width)?;
        let shading = Shading::default();
        let builder = PatchBuilder {
            radius: params.radius,
            normal_step: params.normal_step,
            rotation: Rotation::checked(params.rot_x, params.rot_y, params.rot_z)?,
            projection: Projection::for_distance(params.distance)?,
            light: Light::default(),
            shading,
        };
        let mut patches = builder.build(&grid);
        patch::sort_back_to_front(&mut patches);
        log::debug!("built {} patches", patches.len());
        Ok(Self { patches, palette: Palette::for_theme(params.theme), shading })
    }

    pub fn highlights(&self) -> Vec<&Patch> {
        patch::select_highlights(&self.patches, HIGHLIGHT_THRESHOLD, HIGHLIGHT_CAP)
    }

    pub fn to_svg(&self, labels: &Labels) -> Result<String> {
        let highlights = self.highlights();
        svg::write_document(&self.patches, &highlights, &self.palette, |i| self.shading.band(i), labels)
    }
}

pub fn render_svg(params: &MobiusParams, labels: &Labels) -> Result<String> {
    Scene::build(params)?.to_svg(labels)
}

/// Render and write to `path`, creating parent directories.
pub fn write_svg<P: AsRef<Path>>(path: P, params: &MobiusParams, labels: &Labels) -> Result<()> {
    let path = path.as_ref();
    let doc = render_svg(params, labels)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, doc)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
