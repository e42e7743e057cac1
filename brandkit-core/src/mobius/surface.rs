//! Möbius strip surface: parametric evaluation, sampling grid and normals.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::error::{BrandError, Result};

/// Below this squared length a cross product is treated as degenerate.
const DEGENERATE_EPS: f64 = 1e-24;

pub const DEFAULT_NORMAL_STEP: f64 = 0.01;

/// Point on the strip for ring radius `radius`.
///
/// `u` runs along the strip, `v` across its width. The half-angle term
/// realises the single half twist, so `point(u, v) == point(u + 2π, -v)`.
pub fn point(u: f64, v: f64, radius: f64) -> DVec3 {
    let (sin_h, cos_h) = (u * 0.5).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let r = radius + v * cos_h;
    DVec3::new(r * cos_u, r * sin_u, v * sin_h)
}

fn raw_normal(u: f64, v: f64, radius: f64, eps: f64) -> DVec3 {
    let p = point(u, v, radius);
    let du = point(u + eps, v, radius) - p;
    let dv = point(u, v + eps, radius) - p;
    du.cross(dv)
}

/// Surface normal from forward differences along `u` and `v`.
///
/// A degenerate cross product is returned unnormalized.
pub fn estimate_normal(u: f64, v: f64, radius: f64, eps: f64) -> DVec3 {
    let n = raw_normal(u, v, radius, eps);
    if n.length_squared() > DEGENERATE_EPS {
        return n.normalize();
    }
    log::debug!("degenerate normal at u={u:.4}, v={v:.4}; left unnormalized");
    n
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n - 1).map(|i| start + step * i as f64).collect();
            out.push(end);
            out
        }
    }
}

/// Sampling grid over one turn of the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGrid {
    pub u: Vec<f64>,
    pub v: Vec<f64>,
}

impl ParamGrid {
    pub fn new(u_steps: usize, v_steps: usize, half_width: f64) -> Result<Self> {
        if u_steps < 2 {
            return Err(BrandError::invalid("u_steps", format!("need at least 2 samples, got {u_steps}")));
        }
        if v_steps < 2 {
            return Err(BrandError::invalid("v_steps", format!("need at least 2 samples, got {v_steps}")));
        }
        if !(half_width.is_finite() && half_width > 0.0) {
            return Err(BrandError::invalid("half_width", format!("must be positive, got {half_width}")));
        }
        Ok(Self {
            u: linspace(0.0, TAU, u_steps),
            v: linspace(-half_width, half_width, v_steps),
        })
    }

    /// Number of quads the grid produces.
    pub fn cell_count(&self) -> usize {
        (self.u.len() - 1) * (self.v.len() - 1)
    }
}
