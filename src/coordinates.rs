//! # Vectors and coordinate tuples
//!
//! Time-tagged Cartesian vectors ([`AstroVector`], [`StateVector`]) and the angular coordinate
//! types returned by the public queries. Angular types are validated for finiteness when they
//! are built; nothing is silently clamped.
//!
//! ## Overview
//!
//! * distances are in AU, velocities in AU/day,
//! * angles are in degrees, right ascension in sidereal hours in `[0, 24)`,
//! * every vector carries the [`Instant`] at which it is valid.
use std::ops::{Add, Neg, Sub};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour};
use crate::orrery_errors::OrreryError;
use crate::time::Instant;

/// Return `value` if it is finite, an [`OrreryError::NonFiniteValue`] naming `what` otherwise.
pub(crate) fn finite(value: f64, what: &'static str) -> Result<f64, OrreryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OrreryError::NonFiniteValue(what))
    }
}

/// Reduce an angle in degrees to `[0, 360)`.
pub fn normalize_longitude(lon: Degree) -> Degree {
    let lon = lon.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if lon >= 360.0 {
        0.0
    } else {
        lon
    }
}

/// Reduce an angle difference in degrees to `(-180, +180]`.
///
/// A NaN or infinite `diff` gives NaN.
pub fn longitude_offset(diff: Degree) -> Degree {
    if diff > -180.0 && diff <= 180.0 {
        return diff;
    }
    let offset = (diff + 180.0).rem_euclid(360.0) - 180.0;
    if offset <= -180.0 {
        offset + 360.0
    } else {
        offset
    }
}

/// A position in AU, valid at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstroVector {
    pub pos: Vector3<f64>,
    pub t: Instant,
}

impl AstroVector {
    pub fn new(x: f64, y: f64, z: f64, t: Instant) -> Self {
        AstroVector {
            pos: Vector3::new(x, y, z),
            t,
        }
    }

    pub fn from_position(pos: Vector3<f64>, t: Instant) -> Self {
        AstroVector { pos, t }
    }

    pub fn zero(t: Instant) -> Self {
        AstroVector {
            pos: Vector3::zeros(),
            t,
        }
    }

    /// Euclidean length in AU.
    pub fn length(&self) -> f64 {
        self.pos.norm()
    }
}

impl Add for AstroVector {
    type Output = AstroVector;

    fn add(self, rhs: AstroVector) -> AstroVector {
        AstroVector::from_position(self.pos + rhs.pos, self.t)
    }
}

impl Sub for AstroVector {
    type Output = AstroVector;

    fn sub(self, rhs: AstroVector) -> AstroVector {
        AstroVector::from_position(self.pos - rhs.pos, self.t)
    }
}

impl Neg for AstroVector {
    type Output = AstroVector;

    fn neg(self) -> AstroVector {
        AstroVector::from_position(-self.pos, self.t)
    }
}

/// Position (AU) and velocity (AU/day) valid at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
    pub t: Instant,
}

impl StateVector {
    pub fn new(pos: Vector3<f64>, vel: Vector3<f64>, t: Instant) -> Self {
        StateVector { pos, vel, t }
    }

    pub fn zero(t: Instant) -> Self {
        StateVector::new(Vector3::zeros(), Vector3::zeros(), t)
    }

    pub fn position(&self) -> AstroVector {
        AstroVector::from_position(self.pos, self.t)
    }

    /// Scale position and velocity by the same factor.
    pub fn scale(&self, factor: f64) -> StateVector {
        StateVector::new(self.pos * factor, self.vel * factor, self.t)
    }
}

impl Add for StateVector {
    type Output = StateVector;

    fn add(self, rhs: StateVector) -> StateVector {
        StateVector::new(self.pos + rhs.pos, self.vel + rhs.vel, self.t)
    }
}

impl Sub for StateVector {
    type Output = StateVector;

    fn sub(self, rhs: StateVector) -> StateVector {
        StateVector::new(self.pos - rhs.pos, self.vel - rhs.vel, self.t)
    }
}

impl Neg for StateVector {
    type Output = StateVector;

    fn neg(self) -> StateVector {
        StateVector::new(-self.pos, -self.vel, self.t)
    }
}

/// Latitude, longitude (degrees) and distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoord {
    pub lat: Degree,
    pub lon: Degree,
    pub dist: f64,
}

impl SphericalCoord {
    pub fn new(lat: Degree, lon: Degree, dist: f64) -> Result<Self, OrreryError> {
        Ok(SphericalCoord {
            lat: finite(lat, "spherical latitude")?,
            lon: finite(lon, "spherical longitude")?,
            dist: finite(dist, "spherical distance")?,
        })
    }

    /// Cartesian vector pointing at these coordinates.
    pub fn to_vector(&self, t: Instant) -> AstroVector {
        let radlat = self.lat.to_radians();
        let radlon = self.lon.to_radians();
        let rcoslat = self.dist * radlat.cos();
        AstroVector::new(
            rcoslat * radlon.cos(),
            rcoslat * radlon.sin(),
            self.dist * radlat.sin(),
            t,
        )
    }

    /// Spherical coordinates of a Cartesian vector, longitude in `[0, 360)`.
    ///
    /// A vector on the z axis gets longitude 0 and latitude ±90; the zero vector is rejected.
    pub fn from_vector(vector: &AstroVector) -> Result<Self, OrreryError> {
        let p = vector.pos;
        let xyproj = p.x * p.x + p.y * p.y;
        let dist = (xyproj + p.z * p.z).sqrt();
        if xyproj == 0.0 {
            if p.z == 0.0 {
                return Err(OrreryError::ZeroLengthVector);
            }
            let lat = if p.z < 0.0 { -90.0 } else { 90.0 };
            return SphericalCoord::new(lat, 0.0, dist);
        }
        let lon = normalize_longitude(p.y.atan2(p.x).to_degrees());
        let lat = p.z.atan2(xyproj.sqrt()).to_degrees();
        SphericalCoord::new(lat, lon, dist)
    }
}

/// Right ascension (hours), declination (degrees), distance, and the vector they came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoord {
    pub ra: Hour,
    pub dec: Degree,
    pub dist: f64,
    pub vec: AstroVector,
}

impl EquatorialCoord {
    pub fn new(ra: Hour, dec: Degree, dist: f64, vec: AstroVector) -> Result<Self, OrreryError> {
        Ok(EquatorialCoord {
            ra: finite(ra, "right ascension")?,
            dec: finite(dec, "declination")?,
            dist: finite(dist, "equatorial distance")?,
            vec,
        })
    }

    /// Equatorial angles of a vector expressed in an equatorial frame.
    pub fn from_vector(vector: &AstroVector) -> Result<Self, OrreryError> {
        let sphere = SphericalCoord::from_vector(vector)?;
        EquatorialCoord::new(sphere.lon / 15.0, sphere.lat, sphere.dist, *vector)
    }
}

/// Ecliptic longitude and latitude (degrees) with the ecliptic Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoord {
    pub vec: AstroVector,
    pub elat: Degree,
    pub elon: Degree,
}

impl EclipticCoord {
    pub fn new(vec: AstroVector, elat: Degree, elon: Degree) -> Result<Self, OrreryError> {
        Ok(EclipticCoord {
            vec,
            elat: finite(elat, "ecliptic latitude")?,
            elon: finite(elon, "ecliptic longitude")?,
        })
    }

    /// Ecliptic angles of a vector already expressed in an ecliptic frame.
    pub fn from_vector(vector: &AstroVector) -> Result<Self, OrreryError> {
        let sphere = SphericalCoord::from_vector(vector)?;
        EclipticCoord::new(*vector, sphere.lat, sphere.lon)
    }
}

/// Azimuth/altitude of a sky position for an observer, with the (possibly refracted)
/// equatorial angles of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoord {
    pub azimuth: Degree,
    pub altitude: Degree,
    pub ra: Hour,
    pub dec: Degree,
}

impl HorizontalCoord {
    pub fn new(azimuth: Degree, altitude: Degree, ra: Hour, dec: Degree) -> Result<Self, OrreryError> {
        Ok(HorizontalCoord {
            azimuth: finite(azimuth, "azimuth")?,
            altitude: finite(altitude, "altitude")?,
            ra: finite(ra, "horizontal right ascension")?,
            dec: finite(dec, "horizontal declination")?,
        })
    }
}

/// Angle in degrees between two vectors.
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> Result<Degree, OrreryError> {
    let r = a.norm() * b.norm();
    if r < 1e-8 {
        return Err(OrreryError::ZeroLengthVector);
    }
    let dot = (a.dot(b) / r).clamp(-1.0, 1.0);
    Ok(dot.acos().to_degrees())
}

#[cfg(test)]
mod coordinates_test {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(370.0), 10.0);
        assert_eq!(normalize_longitude(-10.0), 350.0);
        assert_eq!(normalize_longitude(-1e-20), 0.0);
        assert_eq!(longitude_offset(190.0), -170.0);
        assert_eq!(longitude_offset(-180.0), 180.0);
        assert_eq!(longitude_offset(45.0), 45.0);
    }

    #[test]
    fn test_longitude_offset_far_and_non_finite() {
        assert_abs_diff_eq!(longitude_offset(3600.0 + 270.0), -90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(longitude_offset(-7200.0 - 10.0), -10.0, epsilon = 1e-9);
        assert_eq!(longitude_offset(540.0), 180.0);
        for diff in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(longitude_offset(diff).is_nan());
        }
    }

    #[test]
    fn test_sphere_round_trip() {
        let t = Instant::from_ut(0.0).unwrap();
        let sphere = SphericalCoord::new(-23.5, 301.25, 4.2).unwrap();
        let back = SphericalCoord::from_vector(&sphere.to_vector(t)).unwrap();
        assert_relative_eq!(back.lat, sphere.lat, epsilon = 1e-12);
        assert_relative_eq!(back.lon, sphere.lon, epsilon = 1e-12);
        assert_relative_eq!(back.dist, sphere.dist, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_and_zero_vectors() {
        let t = Instant::from_ut(0.0).unwrap();
        let pole = SphericalCoord::from_vector(&AstroVector::new(0.0, 0.0, -2.0, t)).unwrap();
        assert_eq!((pole.lat, pole.lon, pole.dist), (-90.0, 0.0, 2.0));
        assert_eq!(
            SphericalCoord::from_vector(&AstroVector::zero(t)),
            Err(OrreryError::ZeroLengthVector)
        );
    }

    #[test]
    fn test_equatorial_from_vector() {
        let t = Instant::from_ut(0.0).unwrap();
        let eq = EquatorialCoord::from_vector(&AstroVector::new(0.0, 1.0, 1.0, t)).unwrap();
        assert_relative_eq!(eq.ra, 6.0, epsilon = 1e-12);
        assert_relative_eq!(eq.dec, 45.0, epsilon = 1e-12);
        assert_relative_eq!(eq.dist, 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            SphericalCoord::new(f64::NAN, 0.0, 1.0),
            Err(OrreryError::NonFiniteValue("spherical latitude"))
        );
        assert!(HorizontalCoord::new(0.0, f64::INFINITY, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_angle_between() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 3.0, 0.0);
        assert_relative_eq!(angle_between(&a, &b).unwrap(), 90.0);
        assert_relative_eq!(angle_between(&a, &(-a)).unwrap(), 180.0);
        assert!(angle_between(&a, &Vector3::zeros()).is_err());
    }
}
