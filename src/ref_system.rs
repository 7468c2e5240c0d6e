//! # Reference frames and rotation matrices
//!
//! Every position in the crate is first produced in the **EQJ** frame (mean equator and
//! equinox of J2000). This module provides the rotations to the other frames used by the
//! public queries:
//!
//! * **ECL**: mean ecliptic and equinox of J2000,
//! * **EQD**: true equator and equinox of date (precession + nutation),
//! * **HOR**: local horizontal frame of an observer (x north, y west, z zenith).
//!
//! ## Overview
//!
//! * [`RotationMatrix`] wraps a validated `Matrix3<f64>`: it is built only through
//!   [`RotationMatrix::try_from_rows`] / [`RotationMatrix::from_matrix`] (or by the crate's
//!   own factories), then composed with [`RotationMatrix::combine`], inverted and applied to
//!   [`AstroVector`]s and [`StateVector`]s.
//! * [`rotmt`] builds an elementary rotation about one coordinate axis.
//! * `rotation_*` factories return the frame changes. The time-dependent ones read the cached
//!   Earth tilt and sidereal time from an [`Orrery`].
use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Radian, RADEG};
use crate::coordinates::{AstroVector, StateVector};
use crate::earth_orientation::{gyration_rot, mean_obliquity, PrecessDirection};
use crate::observers::Observer;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::Instant;

/// A 3×3 rotation taking vectors from one frame to another.
///
/// The product `matrix * v` expresses in the target frame a vector `v` given in the source
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix {
    rot: Matrix3<f64>,
}

impl RotationMatrix {
    /// Wrap a matrix produced by the crate's own formulas, skipping validation.
    pub(crate) fn from_trusted(rot: Matrix3<f64>) -> Self {
        RotationMatrix { rot }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        RotationMatrix {
            rot: Matrix3::identity(),
        }
    }

    /// Build a rotation from a nalgebra matrix, rejecting non-finite entries.
    pub fn from_matrix(rot: Matrix3<f64>) -> Result<Self, OrreryError> {
        if rot.iter().any(|x| !x.is_finite()) {
            return Err(OrreryError::InvalidRotationMatrix(format!(
                "non-finite entry in {rot:?}"
            )));
        }
        Ok(RotationMatrix { rot })
    }

    /// Build a rotation from row slices.
    ///
    /// Arguments
    /// ---------
    /// * `rows`: exactly three rows of exactly three finite numbers
    ///
    /// Return
    /// ------
    /// * the rotation, or [`OrreryError::InvalidRotationMatrix`] when the shape is wrong or an
    ///   entry is not finite
    pub fn try_from_rows(rows: &[Vec<f64>]) -> Result<Self, OrreryError> {
        if rows.len() != 3 || rows.iter().any(|row| row.len() != 3) {
            let shape: Vec<usize> = rows.iter().map(Vec::len).collect();
            return Err(OrreryError::InvalidRotationMatrix(format!(
                "expected 3x3, got rows of lengths {shape:?}"
            )));
        }
        let rot = Matrix3::from_fn(|i, j| rows[i][j]);
        RotationMatrix::from_matrix(rot)
    }

    /// Underlying matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.rot
    }

    /// The reverse rotation (the transpose, since the matrix is orthonormal).
    pub fn inverse(&self) -> Self {
        RotationMatrix {
            rot: self.rot.transpose(),
        }
    }

    /// Rotation equivalent to applying `self` first, then `other`.
    pub fn combine(&self, other: &RotationMatrix) -> Self {
        RotationMatrix {
            rot: other.rot * self.rot,
        }
    }

    /// Apply the rotation to a position vector; the time tag is preserved.
    pub fn rotate_vector(&self, vector: &AstroVector) -> AstroVector {
        AstroVector::from_position(self.rot * vector.pos, vector.t)
    }

    /// Apply the rotation to both position and velocity of a state vector.
    pub fn rotate_state(&self, state: &StateVector) -> StateVector {
        StateVector::new(self.rot * state.pos, self.rot * state.vel, state.t)
    }

    /// Re-orient the target frame by `angle` degrees about one of its own axes.
    ///
    /// Arguments
    /// ---------
    /// * `axis`: 0, 1 or 2 for x, y, z
    /// * `angle`: counterclockwise rotation of the frame, seen from the positive end of the axis
    ///
    /// Return
    /// ------
    /// * the rotation followed by the pivot, or [`OrreryError::InvalidRotationMatrix`] for an
    ///   axis outside `0..=2` or a non-finite angle
    pub fn pivot(&self, axis: usize, angle: Degree) -> Result<Self, OrreryError> {
        if !angle.is_finite() {
            return Err(OrreryError::NonFiniteValue("pivot angle"));
        }
        let frame = rotmt(-angle * RADEG, axis)?;
        Ok(self.combine(&RotationMatrix::from_trusted(frame)))
    }
}

/// Elementary rotation matrix of angle `alpha` about coordinate axis `k`.
///
/// The rotation is applied to the vector (counterclockwise about the axis), not to the frame:
/// `rotmt(alpha, 2) * x̂ = (cos α, sin α, 0)`. A frame rotated by `α` is therefore described
/// by `rotmt(-α, k)`.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians
/// * `k`: axis index, 0 (x), 1 (y) or 2 (z)
///
/// Return
/// ------
/// * the orthonormal matrix, or [`OrreryError::InvalidRotationMatrix`] for `k > 2`
///
/// # See also
/// * [`RotationMatrix::pivot`] – frame re-orientation built on this function
/// * [`rotation_eqj_ecl`] – obliquity rotation
pub fn rotmt(alpha: Radian, k: usize) -> Result<Matrix3<f64>, OrreryError> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => {
            return Err(OrreryError::InvalidRotationMatrix(format!(
                "invalid axis index {k} (must be 0, 1 or 2)"
            )))
        }
    };

    Ok(Rotation3::from_axis_angle(&axis, alpha).into())
}

/// Frame rotation about `z` by `angle` degrees applied to a vector: the coordinates of the
/// same vector in a frame turned counterclockwise by `angle`.
pub(crate) fn spin(angle: Degree, v: &Vector3<f64>) -> Vector3<f64> {
    let (s, c) = (angle * RADEG).sin_cos();
    Vector3::new(c * v.x + s * v.y, c * v.y - s * v.x, v.z)
}

/// EQJ → mean ecliptic of J2000.
pub fn rotation_eqj_ecl() -> RotationMatrix {
    let obliquity = mean_obliquity(0.0) * RADEG;
    let (s, c) = obliquity.sin_cos();
    RotationMatrix::from_trusted(Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c))
}

/// Mean ecliptic of J2000 → EQJ.
pub fn rotation_ecl_eqj() -> RotationMatrix {
    rotation_eqj_ecl().inverse()
}

/// EQJ → true equator of date (precession then nutation).
pub fn rotation_eqj_eqd(orrery: &Orrery, time: &Instant) -> RotationMatrix {
    gyration_rot(&orrery.e_tilt(time), PrecessDirection::From2000)
}

/// True equator of date → EQJ.
pub fn rotation_eqd_eqj(orrery: &Orrery, time: &Instant) -> RotationMatrix {
    gyration_rot(&orrery.e_tilt(time), PrecessDirection::Into2000)
}

/// True equator of date → horizontal frame of `observer`.
///
/// The rows of the matrix are the north, west and zenith unit vectors of the observer,
/// expressed in the equator of date: the Earth-fixed unit vectors are spun by the Greenwich
/// apparent sidereal time.
pub fn rotation_eqd_hor(orrery: &Orrery, time: &Instant, observer: &Observer) -> RotationMatrix {
    let (sinlat, coslat) = (observer.latitude() * RADEG).sin_cos();
    let (sinlon, coslon) = (observer.longitude() * RADEG).sin_cos();

    let uze = Vector3::new(coslat * coslon, coslat * sinlon, sinlat);
    let une = Vector3::new(-sinlat * coslon, -sinlat * sinlon, coslat);
    let uwe = Vector3::new(sinlon, -coslon, 0.0);

    let spin_angle = -15.0 * orrery.sidereal_time(time);
    let uz = spin(spin_angle, &uze);
    let un = spin(spin_angle, &une);
    let uw = spin(spin_angle, &uwe);

    RotationMatrix::from_trusted(Matrix3::from_rows(&[
        un.transpose(),
        uw.transpose(),
        uz.transpose(),
    ]))
}

/// Horizontal frame of `observer` → true equator of date.
pub fn rotation_hor_eqd(orrery: &Orrery, time: &Instant, observer: &Observer) -> RotationMatrix {
    rotation_eqd_hor(orrery, time, observer).inverse()
}

/// EQJ → horizontal frame of `observer`.
pub fn rotation_eqj_hor(orrery: &Orrery, time: &Instant, observer: &Observer) -> RotationMatrix {
    rotation_eqj_eqd(orrery, time).combine(&rotation_eqd_hor(orrery, time, observer))
}

/// Horizontal frame of `observer` → EQJ.
pub fn rotation_hor_eqj(orrery: &Orrery, time: &Instant, observer: &Observer) -> RotationMatrix {
    rotation_eqj_hor(orrery, time, observer).inverse()
}

#[cfg(test)]
mod ref_system_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_rotmt_direction() {
        let m = rotmt(std::f64::consts::FRAC_PI_2, 2).unwrap();
        assert_abs_diff_eq!(m * Vector3::x(), Vector3::y(), epsilon = 1e-15);
        assert!(matches!(
            rotmt(0.1, 3),
            Err(OrreryError::InvalidRotationMatrix(_))
        ));
    }

    #[test]
    fn test_try_from_rows_validation() {
        let ok = RotationMatrix::try_from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ]);
        assert_eq!(ok, Ok(RotationMatrix::identity()));

        let short = RotationMatrix::try_from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert!(matches!(short, Err(OrreryError::InvalidRotationMatrix(_))));

        let nan = RotationMatrix::try_from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, f64::NAN, 0.0],
            vec![0.0, 0.0, 1.0],
        ]);
        assert!(matches!(nan, Err(OrreryError::InvalidRotationMatrix(_))));
    }

    #[test]
    fn test_combine_order() {
        let a = RotationMatrix::identity().pivot(2, 90.0).unwrap();
        let b = RotationMatrix::identity().pivot(0, 90.0).unwrap();
        let v = AstroVector::new(1.0, 0.0, 0.0, Instant::from_ut(0.0).unwrap());
        let sequential = b.rotate_vector(&a.rotate_vector(&v));
        let combined = a.combine(&b).rotate_vector(&v);
        assert_abs_diff_eq!(sequential.pos, combined.pos, epsilon = 1e-15);
    }

    #[test]
    fn test_pivot_turns_frame() {
        let frame = RotationMatrix::identity().pivot(2, 90.0).unwrap();
        let v = AstroVector::new(1.0, 0.0, 0.0, Instant::from_ut(0.0).unwrap());
        // the new x axis points along the old y axis, so old x is now -y
        assert_abs_diff_eq!(
            frame.rotate_vector(&v).pos,
            Vector3::new(0.0, -1.0, 0.0),
            epsilon = 1e-15
        );
        assert!(RotationMatrix::identity().pivot(3, 10.0).is_err());
    }

    #[test]
    fn test_ecliptic_round_trip() {
        let v = AstroVector::new(0.4, -1.3, 0.25, Instant::from_ut(123.0).unwrap());
        let ecl = rotation_eqj_ecl().rotate_vector(&v);
        let back = rotation_ecl_eqj().rotate_vector(&ecl);
        assert_abs_diff_eq!(back.pos, v.pos, epsilon = 1e-12);

        // the celestial north pole sits at ecliptic latitude 90 - obliquity
        let pole = rotation_eqj_ecl().rotate_vector(&AstroVector::new(0.0, 0.0, 1.0, v.t));
        assert_abs_diff_eq!(
            pole.pos.z.asin().to_degrees(),
            90.0 - mean_obliquity(0.0),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_spin() {
        let v = spin(90.0, &Vector3::x());
        assert_abs_diff_eq!(v, Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-15);
    }
}
