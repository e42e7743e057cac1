//! Shaded quads and their painter's-algorithm ordering.

use glam::{DVec2, DVec3};

use super::shading::{Light, Shading};
use super::surface::{self, ParamGrid};
use super::transform::{Projection, Rotation};

/// Patches brighter than this (and on the top half) get a highlight.
pub const HIGHLIGHT_THRESHOLD: f64 = 0.42;
/// Maximum number of highlight overlays.
pub const HIGHLIGHT_CAP: usize = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub corners: [DVec2; 4],
    pub intensity: f64,
    /// Mean rotated z of the four corners.
    pub depth: f64,
    pub v_mid: f64,
}

impl Patch {
    pub fn is_underside(&self) -> bool {
        self.v_mid < 0.0
    }

    /// SVG path data for the closed quad.
    pub fn path_data(&self) -> String {
        let [a, b, c, d] = self.corners;
        format!(
            "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z",
            a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y
        )
    }
}

/// Everything needed to turn a grid into patches.
#[derive(Debug, Clone)]
pub struct PatchBuilder {
    pub radius: f64,
    pub normal_step: f64,
    pub rotation: Rotation,
    pub projection: Projection,
    pub light: Light,
    pub shading: Shading,
}

impl PatchBuilder {
    /// One patch per grid cell, in grid order (v outer, u inner).
    pub fn build(&self, grid: &ParamGrid) -> Vec<Patch> {
        let rotated: Vec<Vec<DVec3>> = grid
            .v
            .iter()
            .map(|&v| {
                grid.u
                    .iter()
                    .map(|&u| self.rotation.apply(surface::point(u, v, self.radius)))
                    .collect()
            })
            .collect();

        let mut patches = Vec::with_capacity(grid.cell_count());
        for i in 0..grid.v.len() - 1 {
            for j in 0..grid.u.len() - 1 {
                let quad = [rotated[i][j], rotated[i][j + 1], rotated[i + 1][j + 1], rotated[i + 1][j]];
                let u_mid = (grid.u[j] + grid.u[j + 1]) / 2.0;
                let v_mid = (grid.v[i] + grid.v[i + 1]) / 2.0;

                let normal = surface::estimate_normal(u_mid, v_mid, self.radius, self.normal_step);
                let normal = self.rotation.apply_normal(normal);

                patches.push(Patch {
                    corners: quad.map(|p| self.projection.project(p)),
                    intensity: self.shading.intensity(normal, &self.light),
                    depth: quad.iter().map(|p| p.z).sum::<f64>() / 4.0,
                    v_mid,
                });
            }
        }
        patches
    }
}

/// Stable sort by ascending depth so the farthest patch is drawn first.
pub fn sort_back_to_front(patches: &mut [Patch]) {
    patches.sort_by(|a, b| a.depth.total_cmp(&b.depth));
}

/// Brightest top-side patches, brightest first, at most `cap`.
pub fn select_highlights(patches: &[Patch], threshold: f64, cap: usize) -> Vec<&Patch> {
    let mut picked: Vec<&Patch> = patches
        .iter()
        .filter(|p| p.intensity > threshold && p.v_mid >= 0.0)
        .collect();
    picked.sort_by(|a, b| b.intensity.total_cmp(&a.intensity));
    picked.truncate(cap);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn builder(rx: f64, ry: f64, rz: f64) -> PatchBuilder {
        PatchBuilder {
            radius: 1.0,
            normal_step: surface::DEFAULT_NORMAL_STEP,
            rotation: Rotation::new(rx, ry, rz),
            projection: Projection::for_distance(4.5).expect("distance"),
            light: Light::default(),
            shading: Shading::default(),
        }
    }

    fn patch(depth: f64, intensity: f64, v_mid: f64) -> Patch {
        Patch { corners: [DVec2::ZERO; 4], intensity, depth, v_mid }
    }

    #[test]
    fn one_patch_per_cell() {
        let grid = ParamGrid::new(80, 12, 0.3).expect("grid");
        let patches = builder(25.0, 50.0, 5.0).build(&grid);
        assert_eq!(patches.len(), 79 * 11);
        assert!(patches.iter().all(|p| (0.2..=0.5 + 1e-12).contains(&p.intensity)));
    }

    #[test]
    fn projected_corners_stay_inside_viewbox() {
        let grid = ParamGrid::new(40, 6, 0.3).expect("grid");
        for p in builder(25.0, 50.0, 5.0).build(&grid) {
            for c in p.corners {
                assert!(c.x > 0.0 && c.x < 160.0 && c.y > 0.0 && c.y < 160.0, "{c:?}");
            }
        }
    }

    #[test]
    fn path_data_is_closed_quad() {
        let mut p = patch(0.0, 0.3, 0.1);
        p.corners = [DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0), DVec2::new(5.124, 6.0), DVec2::new(7.0, 8.0)];
        assert_eq!(p.path_data(), "M 1.00 2.00 L 3.00 4.00 L 5.12 6.00 L 7.00 8.00 Z");
    }

    #[test]
    fn highlights_filter_sort_and_cap() {
        let mut patches: Vec<Patch> = (0..40).map(|i| patch(0.0, 0.43 + i as f64 * 0.001, 0.1)).collect();
        patches.push(patch(0.0, 0.49, -0.1));
        patches.push(patch(0.0, 0.41, 0.2));
        let picked = select_highlights(&patches, HIGHLIGHT_THRESHOLD, HIGHLIGHT_CAP);
        assert_eq!(picked.len(), 25);
        assert!(picked.iter().all(|p| p.v_mid >= 0.0 && p.intensity > HIGHLIGHT_THRESHOLD));
        assert!(picked.windows(2).all(|w| w[0].intensity >= w[1].intensity));
        assert!((picked[0].intensity - 0.469).abs() < 1e-9);
    }

    #[test]
    fn equal_depths_keep_grid_order() {
        let mut patches = vec![patch(1.0, 0.2, 0.0), patch(0.0, 0.3, 0.0), patch(1.0, 0.4, 0.0)];
        sort_back_to_front(&mut patches);
        let order: Vec<f64> = patches.iter().map(|p| p.intensity).collect();
        assert_eq!(order, vec![0.3, 0.2, 0.4]);
    }

    proptest! {
        #[test]
        fn sorted_depths_are_non_decreasing(
            rx in -180.0f64..180.0, ry in -180.0f64..180.0, rz in -180.0f64..180.0,
        ) {
            let grid = ParamGrid::new(24, 5, 0.3).expect("grid");
            let mut patches = builder(rx, ry, rz).build(&grid);
            sort_back_to_front(&mut patches);
            prop_assert!(patches.windows(2).all(|w| w[0].depth <= w[1].depth));
        }
    }
}
