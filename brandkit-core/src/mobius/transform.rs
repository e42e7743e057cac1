//! Rotation and orthographic projection into the icon's viewBox.

use glam::{DMat3, DVec2, DVec3};

use crate::error::{BrandError, Result};

/// Side length of the square viewBox the icon is drawn in.
pub const VIEWBOX_SIZE: f64 = 160.0;

/// Projected size of a unit length at camera distance 1.
const SCALE_AT_UNIT_DISTANCE: f64 = 45.0;

/// Rotation in degrees about X, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
    pub z_deg: f64,
}

impl Rotation {
    pub fn new(x_deg: f64, y_deg: f64, z_deg: f64) -> Self {
        Self { x_deg, y_deg, z_deg }
    }

    /// Like [`Rotation::new`], rejecting non-finite angles.
    pub fn checked(x_deg: f64, y_deg: f64, z_deg: f64) -> Result<Self> {
        for (name, deg) in [("rot_x", x_deg), ("rot_y", y_deg), ("rot_z", z_deg)] {
            if !deg.is_finite() {
                return Err(BrandError::invalid(name, format!("must be a finite angle, got {deg}")));
            }
        }
        Ok(Self::new(x_deg, y_deg, z_deg))
    }

    pub fn matrix(&self) -> DMat3 {
        DMat3::from_rotation_z(self.z_deg.to_radians())
            * DMat3::from_rotation_y(self.y_deg.to_radians())
            * DMat3::from_rotation_x(self.x_deg.to_radians())
    }

    pub fn apply(&self, p: DVec3) -> DVec3 {
        self.matrix() * p
    }

    /// Rotate a normal and renormalize it. Zero vectors pass through.
    pub fn apply_normal(&self, n: DVec3) -> DVec3 {
        let r = self.matrix() * n;
        r.try_normalize().unwrap_or(r)
    }
}

/// Orthographic projection: keep rotated x/y, scale and centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub center: DVec2,
}

impl Projection {
    pub fn for_distance(distance: f64) -> Result<Self> {
        if !(distance.is_finite() && distance > 0.0) {
            return Err(BrandError::invalid("distance", format!("must be a positive number, got {distance}")));
        }
        Ok(Self {
            scale: SCALE_AT_UNIT_DISTANCE / distance,
            center: DVec2::splat(VIEWBOX_SIZE / 2.0),
        })
    }

    pub fn project(&self, p: DVec3) -> DVec2 {
        p.truncate() * self.scale + self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rotating_x_axis_about_z_by_90_gives_y() {
        let r = Rotation::new(0.0, 0.0, 90.0).apply(DVec3::X);
        assert!((r - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn order_is_x_then_y_then_z() {
        // X first sends +y to +z, then Y by 90 sends +z to +x
        let r = Rotation::new(90.0, 90.0, 0.0).apply(DVec3::Y);
        assert!((r - DVec3::X).length() < 1e-12, "{r:?}");
    }

    #[test]
    fn non_finite_angles_are_rejected() {
        assert!(Rotation::checked(25.0, 50.0, 5.0).is_ok());
        assert!(matches!(
            Rotation::checked(f64::NAN, 0.0, 0.0),
            Err(BrandError::InvalidParam { name: "rot_x", .. })
        ));
        assert!(matches!(
            Rotation::checked(0.0, f64::INFINITY, 0.0),
            Err(BrandError::InvalidParam { name: "rot_y", .. })
        ));
        assert!(matches!(
            Rotation::checked(0.0, 0.0, f64::NEG_INFINITY),
            Err(BrandError::InvalidParam { name: "rot_z", .. })
        ));
    }

    #[test]
    fn projection_centres_origin() {
        let p = Projection::for_distance(4.5).expect("valid distance");
        assert_eq!(p.project(DVec3::ZERO), DVec2::new(80.0, 80.0));
        assert!((p.scale - 10.0).abs() < 1e-12);
        let q = p.project(DVec3::new(1.0, -1.0, 7.0));
        assert!((q - DVec2::new(90.0, 70.0)).length() < 1e-12);
    }

    #[test]
    fn projection_rejects_bad_distance() {
        assert!(Projection::for_distance(0.0).is_err());
        assert!(Projection::for_distance(-1.0).is_err());
        assert!(Projection::for_distance(f64::NAN).is_err());
    }

    proptest! {
        #[test]
        fn zero_rotation_is_identity(x in -5.0f64..5.0, y in -5.0f64..5.0, z in -5.0f64..5.0) {
            let p = DVec3::new(x, y, z);
            prop_assert_eq!(Rotation::new(0.0, 0.0, 0.0).apply(p), p);
        }

        #[test]
        fn rotated_normals_stay_unit(
            ax in -360.0f64..360.0, ay in -360.0f64..360.0, az in -360.0f64..360.0,
            x in -1.0f64..1.0, y in -1.0f64..1.0, z in 0.1f64..1.0,
        ) {
            let n = DVec3::new(x, y, z).normalize();
            let r = Rotation::new(ax, ay, az).apply_normal(n);
            prop_assert!((r.length() - 1.0).abs() < 1e-12);
        }
    }
}
