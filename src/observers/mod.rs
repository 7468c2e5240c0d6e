//! # Observer & Site Geometry
//!
//! This module gathers **observer/site handling** for topocentric queries. It provides:
//!
//! - A validated [`Observer`](crate::observers::Observer) type storing geodetic latitude,
//!   longitude and height as NaN-free values, so observers can be hashed and compared.
//! - [`terra`](crate::observers::terra): geodetic site + sidereal time → geocentric position and
//!   velocity in the true equator of date (EQD), on the WGS84-style oblate Earth.
//! - [`inverse_terra`](crate::observers::inverse_terra): the reverse, solved by Newton iteration
//!   on the meridional error.
//! - [`Observer::geocentric_position`] / [`Observer::geocentric_state`]: the same site
//!   expressed in EQJ (or EQD) at an [`Instant`].
//! - The [`horizon`] submodule: horizontal coordinates and atmospheric refraction.
//!
//! ## Frames & conventions
//!
//! ```text
//! Earth-fixed --(spin by GAST)--> EQD --(nutation + precession, Into2000)--> EQJ
//! ```
//!
//! ## Units
//!
//! - Latitude/longitude: **degrees** (north and east positive).
//! - Height above the ellipsoid: **meters**.
//! - Positions: **AU**, velocities: **AU/day**.
//!
//! ## Errors
//!
//! - [`Observer::new`] rejects NaN ([`OrreryError::InvalidFloatValue`]), infinities
//!   ([`OrreryError::NonFiniteValue`]) and latitudes outside `[-90, +90]`
//!   ([`OrreryError::InvalidLatitude`]).
//! - [`inverse_terra`] fails with [`OrreryError::NonConvergence`] after 10 Newton steps.
//!
//! ## See also
//! ------------
//! * [`crate::ref_system::rotation_eqd_hor`] – the horizontal frame of an observer.
//! * [`crate::earth_orientation::sidereal_time`] – the Earth rotation driving [`terra`].

pub mod horizon;

use nalgebra::Vector3;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, Hour, Meter, AU, EARTH_ANGULAR_VELOCITY, EARTH_AXIS_RATIO,
    EARTH_EQUATORIAL_RADIUS_KM, EARTH_POLAR_RADIUS_KM, RADEG, SECONDS_PER_DAY,
};
use crate::coordinates::{longitude_offset, AstroVector, StateVector};
use crate::earth_orientation::{gyration_rot, PrecessDirection};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::Instant;

/// Squared ratio of the polar to the equatorial radius.
const EARTH_FLATTENING_SQUARED: f64 = EARTH_AXIS_RATIO * EARTH_AXIS_RATIO;

/// Distance to the rotation axis (km) below which a point is treated as lying on it.
const POLE_THRESHOLD_KM: f64 = 1.0e-6;

/// A geographic location on or near the surface of the Earth.
///
/// Fields are stored as [`NotNan`] so observers are `Eq + Hash` and usable as map keys.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct Observer {
    /// Geodetic latitude in **degrees**, `[-90, +90]`.
    latitude: NotNan<f64>,

    /// Longitude in **degrees** east of Greenwich.
    longitude: NotNan<f64>,

    /// Height above the reference ellipsoid in **meters**.
    height: NotNan<f64>,
}

impl Observer {
    /// Create a new observer from geodetic coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: geodetic latitude in **degrees**, `[-90, +90]`.
    /// * `longitude`: longitude in **degrees** (east positive).
    /// * `height`: height above the reference ellipsoid in **meters**.
    ///
    /// Return
    /// ----------
    /// * the observer, or an [`OrreryError`] when a value is NaN, infinite, or the latitude is
    ///   out of range.
    pub fn new(latitude: Degree, longitude: Degree, height: Meter) -> Result<Self, OrreryError> {
        let latitude = NotNan::new(latitude)?;
        let longitude = NotNan::new(longitude)?;
        let height = NotNan::new(height)?;

        if !longitude.is_finite() {
            return Err(OrreryError::NonFiniteValue("observer longitude"));
        }
        if !height.is_finite() {
            return Err(OrreryError::NonFiniteValue("observer height"));
        }
        if !(-90.0..=90.0).contains(&latitude.into_inner()) {
            return Err(OrreryError::InvalidLatitude(latitude.into_inner()));
        }

        Ok(Observer {
            latitude,
            longitude,
            height,
        })
    }

    pub fn latitude(&self) -> Degree {
        self.latitude.into_inner()
    }

    pub fn longitude(&self) -> Degree {
        self.longitude.into_inner()
    }

    pub fn height(&self) -> Meter {
        self.height.into_inner()
    }

    /// Geocentric position of this observer.
    ///
    /// Arguments
    /// ---------
    /// * `time`: the instant
    /// * `orrery`: provides the cached sidereal time and Earth tilt
    /// * `of_date`: `true` for the true equator of date (EQD), `false` for EQJ
    ///
    /// Return
    /// ------
    /// * the position in AU
    pub fn geocentric_position(&self, time: &Instant, orrery: &Orrery, of_date: bool) -> AstroVector {
        self.geocentric_state(time, orrery, of_date).position()
    }

    /// Geocentric position and velocity (from the Earth's rotation) of this observer.
    ///
    /// See [`Observer::geocentric_position`] for the arguments.
    pub fn geocentric_state(&self, time: &Instant, orrery: &Orrery, of_date: bool) -> StateVector {
        let gast = orrery.sidereal_time(time);
        let (pos, vel) = terra(self, gast);
        let state = StateVector::new(pos, vel, *time);
        if of_date {
            state
        } else {
            gyration_rot(&orrery.e_tilt(time), PrecessDirection::Into2000).rotate_state(&state)
        }
    }
}

/// Geocentric position and velocity of a site in the true equator of date.
///
/// Arguments
/// ---------
/// * `observer`: the site
/// * `st`: Greenwich apparent sidereal time in hours
///
/// Return
/// ------
/// * `(position, velocity)` in AU and AU/day
///
/// The ellipsoid has the IERS equatorial radius and flattening 1/298.257223563:
///
/// ```text
/// C = 1 / sqrt(cos²φ + (1-f)² sin²φ),  S = (1-f)² C
/// r = ((aC + h) cos φ cos θ, (aC + h) cos φ sin θ, (aS + h) sin φ)
/// ```
///
/// with `θ = 15·st + λ` the local sidereal angle.
pub fn terra(observer: &Observer, st: Hour) -> (Vector3<f64>, Vector3<f64>) {
    let (sinphi, cosphi) = (observer.latitude() * RADEG).sin_cos();
    let c = 1.0 / (cosphi * cosphi + EARTH_FLATTENING_SQUARED * sinphi * sinphi).sqrt();
    let s = EARTH_FLATTENING_SQUARED * c;
    let ht_km = observer.height() / 1000.0;
    let ach = EARTH_EQUATORIAL_RADIUS_KM * c + ht_km;
    let ash = EARTH_EQUATORIAL_RADIUS_KM * s + ht_km;
    let (sinst, cosst) = ((15.0 * st + observer.longitude()) * RADEG).sin_cos();

    let pos = Vector3::new(
        ach * cosphi * cosst / AU,
        ach * cosphi * sinst / AU,
        ash * sinphi / AU,
    );
    let rate = EARTH_ANGULAR_VELOCITY * SECONDS_PER_DAY;
    let vel = Vector3::new(
        -rate * ach * cosphi * sinst / AU,
        rate * ach * cosphi * cosst / AU,
        0.0,
    );
    (pos, vel)
}

/// Geodetic site under a geocentric position of the true equator of date.
///
/// Arguments
/// ---------
/// * `ovec`: geocentric EQD position in AU
/// * `st`: Greenwich apparent sidereal time in hours
///
/// Return
/// ------
/// * the observer (longitude in `(-180, +180]`), or [`OrreryError::NonConvergence`] if the
///   latitude does not settle in 10 Newton steps
///
/// Within 1 mm of the rotation axis the latitude is ±90° and the longitude 0.
pub fn inverse_terra(ovec: &Vector3<f64>, st: Hour) -> Result<Observer, OrreryError> {
    let x = ovec.x * AU;
    let y = ovec.y * AU;
    let z = ovec.z * AU;
    let p = x.hypot(y);

    if p < POLE_THRESHOLD_KM {
        let lat = if z > 0.0 { 90.0 } else { -90.0 };
        let height_km = z.abs() - EARTH_POLAR_RADIUS_KM;
        return Observer::new(lat, 0.0, 1000.0 * height_km);
    }

    let lon = longitude_offset(y.atan2(x).to_degrees() - 15.0 * st);
    let f = EARTH_FLATTENING_SQUARED;
    let factor = (f - 1.0) * EARTH_EQUATORIAL_RADIUS_KM;

    let mut lat = (z / p).atan();
    let mut converged = None;
    for _ in 0..10 {
        let (s, c) = lat.sin_cos();
        let c2 = c * c;
        let s2 = s * s;
        let radicand = c2 + f * s2;
        let denom = radicand.sqrt();
        // meridional distance between the normal at `lat` and the target point
        let w = factor * s * c / denom - z * c + p * s;
        if w.abs() < 1.0e-8 {
            converged = Some((s, c, denom));
            break;
        }
        let d = factor * ((c2 - s2) / denom - s2 * c2 * (f - 1.0) / (denom * radicand))
            + z * s
            + p * c;
        lat -= w / d;
    }

    let (s, c, denom) = converged.ok_or_else(|| {
        OrreryError::NonConvergence(format!("inverse_terra({x} km, {y} km, {z} km)"))
    })?;

    let adjust = EARTH_EQUATORIAL_RADIUS_KM / denom;
    let height_km = if s.abs() > c.abs() {
        z / s - f * adjust
    } else {
        p / c - adjust
    };

    Observer::new(lat.to_degrees(), lon, 1000.0 * height_km)
}

#[cfg(test)]
mod observer_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_observer_constructor() {
        let observer = Observer::new(45.0, -71.0, 300.0).unwrap();
        assert_eq!(observer.latitude(), 45.0);
        assert_eq!(observer.longitude(), -71.0);
        assert_eq!(observer.height(), 300.0);

        assert_eq!(
            Observer::new(91.0, 0.0, 0.0),
            Err(OrreryError::InvalidLatitude(91.0))
        );
        assert!(matches!(
            Observer::new(f64::NAN, 0.0, 0.0),
            Err(OrreryError::InvalidFloatValue(_))
        ));
        assert_eq!(
            Observer::new(10.0, f64::INFINITY, 0.0),
            Err(OrreryError::NonFiniteValue("observer longitude"))
        );
    }

    #[test]
    fn test_terra_equator_and_pole() {
        let equator = Observer::new(0.0, 0.0, 0.0).unwrap();
        let (pos, vel) = terra(&equator, 0.0);
        assert_abs_diff_eq!(pos.x * AU, EARTH_EQUATORIAL_RADIUS_KM, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.y, 0.0, epsilon = 1e-15);
        // about 0.465 km/s eastward
        assert_abs_diff_eq!(vel.y * AU / SECONDS_PER_DAY, 0.4651, epsilon = 1e-3);

        let pole = Observer::new(90.0, 0.0, 0.0).unwrap();
        let (pos, _) = terra(&pole, 3.0);
        assert_abs_diff_eq!(pos.z * AU, EARTH_POLAR_RADIUS_KM, epsilon = 1e-9);
    }

    #[test]
    fn test_terra_round_trip() {
        for lat in [-89.5, -60.0, -12.3, 0.0, 33.3, 51.5, 89.9] {
            for lon in [-179.0, -71.0, 0.0, 45.0, 179.5] {
                for height in [-100.0, 0.0, 4200.0] {
                    let observer = Observer::new(lat, lon, height).unwrap();
                    let st = 7.25;
                    let (pos, _) = terra(&observer, st);
                    let back = inverse_terra(&pos, st).unwrap();
                    assert_abs_diff_eq!(back.latitude(), lat, epsilon = 1e-8);
                    assert_abs_diff_eq!(
                        longitude_offset(back.longitude() - lon),
                        0.0,
                        epsilon = 1e-8
                    );
                    assert_abs_diff_eq!(back.height(), height, epsilon = 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_inverse_terra_on_axis() {
        let v = Vector3::new(0.0, 0.0, -(EARTH_POLAR_RADIUS_KM + 1.0) / AU);
        let observer = inverse_terra(&v, 12.0).unwrap();
        assert_eq!(observer.latitude(), -90.0);
        assert_eq!(observer.longitude(), 0.0);
        assert_abs_diff_eq!(observer.height(), 1000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_geocentric_state_frames() {
        let orrery = Orrery::new();
        let observer = Observer::new(-33.9, 18.4, 10.0).unwrap();
        let time = Instant::from_ut(8000.3).unwrap();
        let eqd = observer.geocentric_position(&time, &orrery, true);
        let eqj = observer.geocentric_position(&time, &orrery, false);
        assert_abs_diff_eq!(eqd.length(), eqj.length(), epsilon = 1e-15);
        assert!((eqd.pos - eqj.pos).norm() > 1e-8);
    }
}
