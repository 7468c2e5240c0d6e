//! # Planetary position model
//!
//! Heliocentric positions of Mercury through Neptune from truncated VSOP87D series.
//!
//! ## Overview
//!
//! Each planet has three [`Series`]: ecliptic longitude `L`, latitude `B` (radians) and radius
//! `R` (AU), referred to the ecliptic and equinox **of date**, evaluated at
//! `t = tt / 365250` (Julian millennia of TT since J2000).
//!
//! The pipeline of [`vsop_helio_vector`] is:
//!
//! 1. evaluate `L`, `B`, `R`,
//! 2. spherical → Cartesian (ecliptic of date),
//! 3. ecliptic precession to the ecliptic of J2000 (Lieske angles η, Π, p),
//! 4. fixed rotation ecliptic J2000 → EQJ.
//!
//! The velocity variant differentiates the series analytically, pushes the rates through the
//! spherical Jacobian, removes the general precession rate from the longitude rate and applies
//! the same two rotations.
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::body::Body;
use crate::constants::{Radian, DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, RADEG, RADSEC};
use crate::coordinates::{AstroVector, StateVector};
use crate::orrery_errors::OrreryError;
use crate::series::{evaluate, evaluate_derivative, Series};
use crate::time::Instant;

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

pub(crate) use jupiter::JUPITER;
pub(crate) use neptune::NEPTUNE;
pub(crate) use saturn::SATURN;
pub(crate) use uranus::URANUS;

/// Longitude, latitude and radius series of one planet.
#[derive(Debug)]
pub struct VsopModel {
    pub(crate) lon: Series,
    pub(crate) lat: Series,
    pub(crate) rad: Series,
}

/// Rotation from the ecliptic of J2000 to the equator of J2000 (EQJ).
#[allow(clippy::excessive_precision)]
fn ecliptic_to_eqj() -> Matrix3<f64> {
    Matrix3::new(
        1.0,
        0.000000440360,
        -0.000000190919,
        -0.000000479966,
        0.917482137087,
        -0.397776982902,
        0.0,
        0.397776982902,
        0.917482137087,
    )
}

/// Series of `body`, or `None` for a body this model does not cover.
pub fn vsop_model(body: Body) -> Option<&'static VsopModel> {
    match body {
        Body::Mercury => Some(&mercury::MERCURY),
        Body::Venus => Some(&venus::VENUS),
        Body::Earth => Some(&earth::EARTH),
        Body::Mars => Some(&mars::MARS),
        Body::Jupiter => Some(&jupiter::JUPITER),
        Body::Saturn => Some(&saturn::SATURN),
        Body::Uranus => Some(&uranus::URANUS),
        Body::Neptune => Some(&neptune::NEPTUNE),
        Body::Sun
        | Body::Moon
        | Body::Pluto
        | Body::SSB
        | Body::EMB
        | Body::Star1
        | Body::Star2
        | Body::Star3
        | Body::Star4
        | Body::Star5
        | Body::Star6
        | Body::Star7
        | Body::Star8 => None,
    }
}

fn model_for(body: Body) -> Result<&'static VsopModel, OrreryError> {
    vsop_model(body).ok_or(OrreryError::UnsupportedBody(body, "the planetary series"))
}

/// Ecliptic precession from the ecliptic and equinox of date to those of J2000.
///
/// Lieske (1977) angles with `T = tt / 36525` and `t = -T`:
///
/// ```text
/// η = (47.0029″ − 0.06603″T + 0.000598″T²)t + (−0.03302″ + 0.000598″T)t² + 0.000060″t³
/// Π = 174.876384° + 3289.4789″T + 0.60622″T² − (869.8089″ + 0.50491″T)t + 0.03536″t²
/// p = (5029.0966″ + 2.22226″T − 0.000042″T²)t + (1.11113″ − 0.000042″T)t² − 0.000006″t³
/// ```
///
/// and the rotation `R3(p + Π) · R1(−η) · R3(−Π)` applied to the vector.
fn ecliptic_precession(tt: f64) -> Matrix3<f64> {
    let tc = tt / DAYS_PER_CENTURY;
    let t = -tc;

    let eta = ((47.0029 - 0.06603 * tc + 0.000598 * tc * tc) * t
        + (-0.03302 + 0.000598 * tc) * t * t
        + 0.000060 * t * t * t)
        * RADSEC;
    let pi = 174.876384 * RADEG
        + (3289.4789 * tc + 0.60622 * tc * tc - (869.8089 + 0.50491 * tc) * t
            + 0.03536 * t * t)
            * RADSEC;
    let p = ((5029.0966 + 2.22226 * tc - 0.000042 * tc * tc) * t
        + (1.11113 - 0.000042 * tc) * t * t
        - 0.000006 * t * t * t)
        * RADSEC;

    let rot = Rotation3::from_axis_angle(&Vector3::z_axis(), p + pi)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), -eta)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), -pi);
    rot.into()
}

/// Full rotation from the ecliptic of date to EQJ.
fn date_ecliptic_to_eqj(tt: f64) -> Matrix3<f64> {
    ecliptic_to_eqj() * ecliptic_precession(tt)
}

/// Longitude, latitude (radians) and radius (AU) of date.
pub(crate) fn vsop_spherical(model: &VsopModel, tt: f64) -> (Radian, Radian, f64) {
    let t = tt / DAYS_PER_MILLENNIUM;
    (
        evaluate(model.lon, t, true),
        evaluate(model.lat, t, false),
        evaluate(model.rad, t, false),
    )
}

fn spherical_to_cartesian(lon: Radian, lat: Radian, rad: f64) -> Vector3<f64> {
    let (sl, cl) = lon.sin_cos();
    let (sb, cb) = lat.sin_cos();
    Vector3::new(rad * cb * cl, rad * cb * sl, rad * sb)
}

/// Heliocentric EQJ position (AU) of the planet at `tt`.
pub(crate) fn vsop_position(model: &VsopModel, tt: f64) -> Vector3<f64> {
    let (lon, lat, rad) = vsop_spherical(model, tt);
    date_ecliptic_to_eqj(tt) * spherical_to_cartesian(lon, lat, rad)
}

/// Heliocentric EQJ position (AU) and velocity (AU/day) of the planet at `tt`.
pub(crate) fn vsop_pos_vel(model: &VsopModel, tt: f64) -> (Vector3<f64>, Vector3<f64>) {
    let t = tt / DAYS_PER_MILLENNIUM;
    let (lon, lat, rad) = vsop_spherical(model, tt);

    // per-day rates of the spherical coordinates of date
    let precession_rate =
        (5029.0966 + 2.22226 * tt / DAYS_PER_CENTURY) * RADSEC / DAYS_PER_CENTURY;
    let dlon = evaluate_derivative(model.lon, t) / DAYS_PER_MILLENNIUM - precession_rate;
    let dlat = evaluate_derivative(model.lat, t) / DAYS_PER_MILLENNIUM;
    let drad = evaluate_derivative(model.rad, t) / DAYS_PER_MILLENNIUM;

    let (sl, cl) = lon.sin_cos();
    let (sb, cb) = lat.sin_cos();
    let pos = Vector3::new(rad * cb * cl, rad * cb * sl, rad * sb);
    let vel = Vector3::new(
        drad * cb * cl - rad * sb * cl * dlat - rad * cb * sl * dlon,
        drad * cb * sl - rad * sb * sl * dlat + rad * cb * cl * dlon,
        drad * sb + rad * cb * dlat,
    );

    let rot = date_ecliptic_to_eqj(tt);
    (rot * pos, rot * vel)
}

/// Heliocentric position of a planet in EQJ.
///
/// Arguments
/// ---------
/// * `body`: Mercury … Neptune
/// * `time`: the instant, the series are evaluated at its TT
///
/// Return
/// ------
/// * the position in AU, or [`OrreryError::UnsupportedBody`] for any other body
pub fn vsop_helio_vector(body: Body, time: &Instant) -> Result<AstroVector, OrreryError> {
    let model = model_for(body)?;
    Ok(AstroVector::from_position(
        vsop_position(model, time.tt),
        *time,
    ))
}

/// Heliocentric position and velocity of a planet in EQJ.
pub fn vsop_helio_state(body: Body, time: &Instant) -> Result<StateVector, OrreryError> {
    let model = model_for(body)?;
    let (pos, vel) = vsop_pos_vel(model, time.tt);
    Ok(StateVector::new(pos, vel, *time))
}

/// Heliocentric distance (AU) of a planet, from the radius series alone.
pub fn vsop_helio_distance(body: Body, time: &Instant) -> Result<f64, OrreryError> {
    let model = model_for(body)?;
    Ok(evaluate(model.rad, time.tt / DAYS_PER_MILLENNIUM, false))
}

#[cfg(test)]
mod vsop_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::coordinates::normalize_longitude;

    #[test]
    fn test_earth_worked_example() {
        // JDE 2448908.5 (1992-10-13)
        let (lon, lat, rad) = vsop_spherical(&earth::EARTH, 2448908.5 - 2451545.0);
        assert_abs_diff_eq!(normalize_longitude(lon.to_degrees()), 19.907372, epsilon = 1e-5);
        assert_abs_diff_eq!(lat.to_degrees(), -0.000179, epsilon = 1e-5);
        assert_abs_diff_eq!(rad, 0.99760775, epsilon = 1e-7);
    }

    #[test]
    fn test_venus_worked_example() {
        // JDE 2448976.5 (1992-12-20)
        let (lon, lat, rad) = vsop_spherical(&venus::VENUS, 2448976.5 - 2451545.0);
        assert_abs_diff_eq!(normalize_longitude(lon.to_degrees()), 26.11428, epsilon = 1e-4);
        assert_abs_diff_eq!(lat.to_degrees(), -2.62070, epsilon = 1e-4);
        assert_abs_diff_eq!(rad, 0.724603, epsilon = 1e-5);
    }

    #[test]
    fn test_distance_matches_vector_length() {
        for body in [
            Body::Mercury,
            Body::Venus,
            Body::Earth,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
            Body::Uranus,
            Body::Neptune,
        ] {
            for ut in [-50000.0, -1234.5, 0.0, 8765.4, 36525.0] {
                let time = Instant::from_ut(ut).unwrap();
                let v = vsop_helio_vector(body, &time).unwrap();
                let d = vsop_helio_distance(body, &time).unwrap();
                assert_abs_diff_eq!(v.length(), d, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_precession_is_identity_at_j2000() {
        assert_abs_diff_eq!(ecliptic_precession(0.0), Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let h = 0.01;
        for body in [Body::Mercury, Body::Earth, Body::Jupiter, Body::Neptune] {
            let model = vsop_model(body).unwrap();
            let tt = 7000.25;
            let (_, vel) = vsop_pos_vel(model, tt);
            let numeric = (vsop_position(model, tt + h) - vsop_position(model, tt - h)) / (2.0 * h);
            assert_abs_diff_eq!(vel, numeric, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_unsupported_body() {
        let time = Instant::from_ut(0.0).unwrap();
        assert_eq!(
            vsop_helio_vector(Body::Pluto, &time),
            Err(OrreryError::UnsupportedBody(
                Body::Pluto,
                "the planetary series"
            ))
        );
    }
}
