//! # Lunar position model
//!
//! Geocentric position of the Moon from a periodic-term theory of the lunar motion
//! (60 terms in longitude and distance, 60 in latitude), plus the Moon's libration
//! ([`libration`]).
//!
//! ## Overview
//!
//! The theory is expressed in the fundamental arguments of the lunar orbit, polynomials in TT
//! Julian centuries:
//!
//! | symbol | meaning                          |
//! |--------|----------------------------------|
//! | `L'`   | mean longitude of the Moon       |
//! | `D`    | mean elongation of the Moon      |
//! | `M`    | mean anomaly of the Sun          |
//! | `M'`   | mean anomaly of the Moon         |
//! | `F`    | argument of latitude of the Moon |
//!
//! Terms depending on `M` are scaled by the decreasing eccentricity of the Earth's orbit
//! `E^|m|`, and three additive corrections (Venus, Jupiter and the flattening of the Earth) are
//! applied on top of the tables.
//!
//! The output (ecliptic of date, mean equinox) is turned into a Cartesian vector, rotated by the
//! mean obliquity to the mean equator of date, then precessed to EQJ.
use nalgebra::Vector3;

use crate::constants::{Degree, Kilometer, AU, DAYS_PER_CENTURY, RADEG};
use crate::coordinates::{normalize_longitude, AstroVector, SphericalCoord, StateVector};
use crate::earth_orientation::{iau2000b, mean_obliquity, precession_rot, PrecessDirection};
use crate::orrery_errors::OrreryError;
use crate::series::fold_arguments;
use crate::time::Instant;

pub mod libration;
mod tables;

use tables::{LATITUDE, LONGITUDE_DISTANCE};

/// Half-width (days) of the symmetric difference used for the lunar velocity.
const VELOCITY_STEP: f64 = 1.0e-5;

/// Fundamental arguments of the lunar theory, in degrees, at one instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MeanArguments {
    /// Mean longitude of the Moon
    pub lp: Degree,
    /// Mean elongation of the Moon
    pub d: Degree,
    /// Mean anomaly of the Sun
    pub m: Degree,
    /// Mean anomaly of the Moon
    pub mp: Degree,
    /// Argument of latitude of the Moon
    pub f: Degree,
    /// Mean longitude of the ascending node
    pub omega: Degree,
    /// Eccentricity factor of the Earth's orbit
    pub e: f64,
}

impl MeanArguments {
    /// Arguments at `t` Julian centuries of TT since J2000.
    pub(crate) fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t2 * t2;
        MeanArguments {
            lp: normalize_longitude(
                218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
                    - t4 / 65194000.0,
            ),
            d: normalize_longitude(
                297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
                    - t4 / 113065000.0,
            ),
            m: normalize_longitude(
                357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0,
            ),
            mp: normalize_longitude(
                134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
                    - t4 / 14712000.0,
            ),
            f: normalize_longitude(
                93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
                    + t4 / 863310000.0,
            ),
            omega: normalize_longitude(
                125.0445479 - 1934.1362891 * t + 0.0020754 * t2 + t3 / 467441.0
                    - t4 / 60616000.0,
            ),
            e: 1.0 - 0.002516 * t - 0.0000074 * t2,
        }
    }
}

/// Geocentric ecliptic coordinates of the Moon, mean ecliptic and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LunarCoordinates {
    pub lon: Degree,
    pub lat: Degree,
    pub dist_km: Kilometer,
}

/// Evaluate the lunar theory at `tt` (TT days since J2000).
pub(crate) fn lunar_coordinates(tt: f64) -> LunarCoordinates {
    let t = tt / DAYS_PER_CENTURY;
    let args = MeanArguments::at(t);

    let a1 = (119.75 + 131.849 * t) * RADEG;
    let a2 = (53.09 + 479264.290 * t) * RADEG;
    let a3 = (313.45 + 481266.484 * t) * RADEG;
    let lp = args.lp * RADEG;
    let mp = args.mp * RADEG;
    let f = args.f * RADEG;

    let angles = [args.d * RADEG, args.m * RADEG, mp, f];
    let (mut sum_l, sum_r) = fold_arguments(LONGITUDE_DISTANCE, &angles, args.e);
    let (mut sum_b, _) = fold_arguments(LATITUDE, &angles, args.e);

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    LunarCoordinates {
        lon: normalize_longitude(args.lp + sum_l / 1.0e6),
        lat: sum_b / 1.0e6,
        dist_km: 385000.56 + sum_r / 1000.0,
    }
}

/// Geocentric EQJ position of the Moon (AU) at `tt`.
pub(crate) fn geo_moon_position(tt: f64) -> Vector3<f64> {
    let moon = lunar_coordinates(tt);
    let dist = moon.dist_km / AU;
    let (slon, clon) = (moon.lon * RADEG).sin_cos();
    let (slat, clat) = (moon.lat * RADEG).sin_cos();
    let ecliptic = Vector3::new(dist * clat * clon, dist * clat * slon, dist * slat);

    // ecliptic of date -> mean equator of date
    let (s, c) = (mean_obliquity(tt) * RADEG).sin_cos();
    let equator = Vector3::new(
        ecliptic.x,
        c * ecliptic.y - s * ecliptic.z,
        s * ecliptic.y + c * ecliptic.z,
    );

    precession_rot(tt, PrecessDirection::Into2000).matrix() * equator
}

/// Geocentric position of the Moon in EQJ (AU).
pub fn geo_moon(time: &Instant) -> AstroVector {
    AstroVector::from_position(geo_moon_position(time.tt), *time)
}

/// Geocentric position (AU) and velocity (AU/day) of the Moon in EQJ.
///
/// The velocity is the symmetric difference of the positions `1e-5` day on each side of the
/// instant.
pub fn geo_moon_state(time: &Instant) -> StateVector {
    let before = geo_moon_position(time.tt - VELOCITY_STEP);
    let after = geo_moon_position(time.tt + VELOCITY_STEP);
    StateVector::new(
        geo_moon_position(time.tt),
        (after - before) / (2.0 * VELOCITY_STEP),
        *time,
    )
}

/// Geocentric ecliptic coordinates of the Moon on the true ecliptic and equinox of date.
///
/// Return
/// ------
/// * `lat`/`lon` in degrees (longitude including the nutation in longitude), `dist` in AU
pub fn ecliptic_geo_moon(time: &Instant) -> Result<SphericalCoord, OrreryError> {
    let moon = lunar_coordinates(time.tt);
    let (dpsi, _) = iau2000b(time.tt);
    SphericalCoord::new(
        moon.lat,
        normalize_longitude(moon.lon + dpsi / 3600.0),
        moon.dist_km / AU,
    )
}

#[cfg(test)]
mod moon_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::coordinates::longitude_offset;

    #[test]
    fn test_worked_example() {
        // JDE 2448724.5 (1992-04-12 00:00 TT)
        let moon = lunar_coordinates(2448724.5 - 2451545.0);
        assert_abs_diff_eq!(moon.lon, 133.162655, epsilon = 1e-5);
        assert_abs_diff_eq!(moon.lat, -3.229126, epsilon = 1e-5);
        assert_abs_diff_eq!(moon.dist_km, 368409.7, epsilon = 0.1);
    }

    #[test]
    fn test_distance_range() {
        for k in 0..400 {
            let time = Instant::from_ut(-5000.0 + k as f64 * 3.7).unwrap();
            let d = geo_moon(&time).length() * AU;
            assert!((356000.0..407000.0).contains(&d), "distance {d} km");
        }
    }

    #[test]
    fn test_state_matches_position() {
        let time = Instant::from_ut(1234.5).unwrap();
        let state = geo_moon_state(&time);
        assert_eq!(state.pos, geo_moon(&time).pos);
        // about 1 km/s
        let speed_kms = state.vel.norm() * AU / 86400.0;
        assert!((0.9..1.1).contains(&speed_kms), "speed {speed_kms} km/s");
    }

    #[test]
    fn test_ecliptic_geo_moon_adds_nutation() {
        let time = Instant::from_ut(-2820.5).unwrap();
        let sphere = ecliptic_geo_moon(&time).unwrap();
        let mean = lunar_coordinates(time.tt);
        let (dpsi, _) = iau2000b(time.tt);
        assert_abs_diff_eq!(
            longitude_offset(sphere.lon - mean.lon),
            dpsi / 3600.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(sphere.dist * AU, mean.dist_km, epsilon = 1e-6);
    }
}
