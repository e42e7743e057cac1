//! Matte diffuse lighting quantized to a handful of gradient bands.

use glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    dir: DVec3,
}

impl Light {
    /// Light coming from `dir`; the vector is normalized.
    pub fn new(dir: DVec3) -> Self {
        Self { dir: dir.try_normalize().unwrap_or(DVec3::Z) }
    }

    pub fn direction(&self) -> DVec3 {
        self.dir
    }
}

impl Default for Light {
    /// Above and slightly to the left of the viewer.
    fn default() -> Self {
        Self::new(DVec3::new(0.2, 0.6, 0.8))
    }
}

/// Narrow ambient + diffuse model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    pub ambient: f64,
    pub diffuse: f64,
    pub bands: usize,
}

impl Default for Shading {
    fn default() -> Self {
        Self { ambient: 0.2, diffuse: 0.3, bands: 5 }
    }
}

impl Shading {
    pub fn intensity(&self, normal: DVec3, light: &Light) -> f64 {
        let lambert = normal.dot(light.direction()).clamp(0.0, 1.0);
        self.ambient + self.diffuse * lambert
    }

    /// Gradient band for an intensity; band 0 is the brightest.
    pub fn band(&self, intensity: f64) -> usize {
        let last = self.bands.saturating_sub(1);
        if self.diffuse == 0.0 {
            return last;
        }
        let normalized = (intensity - self.ambient) / self.diffuse;
        let raw = ((1.0 - normalized) * self.bands as f64).round();
        if raw.is_nan() {
            return last;
        }
        raw.clamp(0.0, last as f64) as usize
    }
}
