/// Axis-angle rotation about an arbitrary pivot (Rodrigues' formula)
use nalgebra::{Point3, Rotation3, Unit, Vector3};

use crate::error::{Error, Result};

/// A validated axis-angle rotation.
///
/// The axis is normalized once on construction and the sine/cosine are
/// cached, so one `Rotation` can be applied to every vertex of a frame.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    axis: Unit<Vector3<f64>>,
    angle: f64,
    cos: f64,
    sin: f64,
}

impl Rotation {
    /// Build a rotation of `angle` radians about `axis`.
    ///
    /// `axis` need not be normalized, but it must be finite and non-zero.
    pub fn new(axis: &Vector3<f64>, angle: f64) -> Result<Self> {
        let norm = axis.norm();
        if !norm.is_finite() || norm == 0.0 {
            return Err(Error::InvalidAxis {
                x: axis.x,
                y: axis.y,
                z: axis.z,
            });
        }

        let (sin, cos) = angle.sin_cos();
        Ok(Self {
            axis: Unit::new_unchecked(axis / norm),
            angle,
            cos,
            sin,
        })
    }

    pub fn axis(&self) -> Vector3<f64> {
        self.axis.into_inner()
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Rotate `point` about `pivot`
    pub fn apply(&self, point: &Point3<f64>, pivot: &Point3<f64>) -> Point3<f64> {
        let relative = point - pivot;
        let k = self.axis.as_ref();
        let dot = k.dot(&relative);

        let rotated =
            relative * self.cos + k.cross(&relative) * self.sin + k * (dot * (1.0 - self.cos));

        pivot + rotated
    }

    /// Equivalent rotation matrix (about the origin)
    pub fn to_matrix(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&self.axis, self.angle)
    }
}

/// Rotate `point` by `angle` radians about `axis` passing through `pivot`.
///
/// Fails with [`Error::InvalidAxis`] instead of producing NaN coordinates
/// when `axis` is zero-length or non-finite.
pub fn rotate_around_pivot(
    point: &Point3<f64>,
    axis: &Vector3<f64>,
    angle: f64,
    pivot: &Point3<f64>,
) -> Result<Point3<f64>> {
    Ok(Rotation::new(axis, angle)?.apply(point, pivot))
}
