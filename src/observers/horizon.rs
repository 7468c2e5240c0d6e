//! Horizontal coordinates and atmospheric refraction.
//!
//! The horizontal frame of an observer has x toward the north point, y toward the west point
//! and z toward the zenith. Azimuth is measured from north through east.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour, RADEG};
use crate::coordinates::{normalize_longitude, HorizontalCoord};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::ref_system::rotation_eqd_hor;
use crate::time::Instant;

use super::Observer;

/// Atmospheric refraction model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Refraction {
    /// Airless sky
    None,
    /// Standard refraction, fading to zero toward the nadir below the horizon
    Normal,
    /// Same formula without the fade below -1°, as used by JPL Horizons
    JplHor,
}

/// Upward shift (degrees) of a body at geometric `altitude` caused by refraction.
///
/// Arguments
/// ---------
/// * `refraction`: the model
/// * `altitude`: geometric altitude in degrees
///
/// Return
/// ------
/// * the refraction angle, `0` outside `[-90, +90]` or for [`Refraction::None`]
///
/// The formula is
///
/// ```text
/// R = 1.02 / tan(h + 10.3 / (h + 5.11)) / 60
/// ```
///
/// with `h` floored at -1°.
pub fn refraction_angle(refraction: Refraction, altitude: Degree) -> Degree {
    if !(-90.0..=90.0).contains(&altitude) {
        return 0.0;
    }
    match refraction {
        Refraction::None => 0.0,
        Refraction::Normal | Refraction::JplHor => {
            let hd = altitude.max(-1.0);
            let mut refr = (1.02 / ((hd + 10.3 / (hd + 5.11)) * RADEG).tan()) / 60.0;
            if refraction == Refraction::Normal && altitude < -1.0 {
                refr *= (altitude + 90.0) / 89.0;
            }
            refr
        }
    }
}

/// Correction (degrees) turning an apparent (refracted) altitude into the geometric one.
///
/// The result is negative or zero: `geometric = bent_altitude + inverse_refraction_angle(..)`.
/// It is found by fixed-point iteration on [`refraction_angle`] to 1e-14°.
pub fn inverse_refraction_angle(
    refraction: Refraction,
    bent_altitude: Degree,
) -> Result<Degree, OrreryError> {
    if !(-90.0..=90.0).contains(&bent_altitude) {
        return Ok(0.0);
    }
    let mut altitude = bent_altitude - refraction_angle(refraction, bent_altitude);
    for _ in 0..100 {
        let diff = (altitude + refraction_angle(refraction, altitude)) - bent_altitude;
        if diff.abs() < 1.0e-14 {
            return Ok(altitude - bent_altitude);
        }
        altitude -= diff;
    }
    Err(OrreryError::NonConvergence(format!(
        "inverse_refraction_angle({bent_altitude})"
    )))
}

/// Horizontal coordinates of a sky position seen by `observer`.
///
/// Arguments
/// ---------
/// * `orrery`: engine context (sidereal time cache)
/// * `time`: the instant
/// * `observer`: the site
/// * `ra`, `dec`: right ascension (hours) and declination (degrees) on the true equator of date
/// * `refraction`: refraction model applied to the altitude
///
/// Return
/// ------
/// * azimuth and altitude, with the equatorial angles shifted by the same refraction
pub fn horizon(
    orrery: &Orrery,
    time: &Instant,
    observer: &Observer,
    ra: Hour,
    dec: Degree,
    refraction: Refraction,
) -> Result<HorizontalCoord, OrreryError> {
    let rot = rotation_eqd_hor(orrery, time, observer);
    let m = rot.matrix();
    let un: Vector3<f64> = m.row(0).transpose();
    let uw: Vector3<f64> = m.row(1).transpose();
    let uz: Vector3<f64> = m.row(2).transpose();

    let (sindc, cosdc) = (dec * RADEG).sin_cos();
    let (sinra, cosra) = (ra * 15.0 * RADEG).sin_cos();
    let p = Vector3::new(cosdc * cosra, cosdc * sinra, sindc);

    let pz = p.dot(&uz);
    let pn = p.dot(&un);
    let pw = p.dot(&uw);

    let proj = pn.hypot(pw);
    let azimuth = if proj > 0.0 {
        normalize_longitude(-pw.atan2(pn).to_degrees())
    } else {
        0.0
    };

    let mut zd = proj.atan2(pz).to_degrees();
    let mut out_ra = ra;
    let mut out_dec = dec;

    if refraction != Refraction::None {
        let zd0 = zd;
        let refr = refraction_angle(refraction, 90.0 - zd);
        zd -= refr;

        if refr > 0.0 && zd > 3.0e-4 {
            let (sinzd, coszd) = (zd * RADEG).sin_cos();
            let (sinzd0, coszd0) = (zd0 * RADEG).sin_cos();
            let pr = (p - coszd0 * uz) / sinzd0 * sinzd + uz * coszd;
            let proj = pr.x.hypot(pr.y);
            out_ra = if proj > 0.0 {
                normalize_longitude(pr.y.atan2(pr.x).to_degrees()) / 15.0
            } else {
                0.0
            };
            out_dec = pr.z.atan2(proj).to_degrees();
        }
    }

    HorizontalCoord::new(azimuth, 90.0 - zd, out_ra, out_dec)
}

#[cfg(test)]
mod horizon_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::coordinates::{AstroVector, EquatorialCoord};
    use crate::ref_system::rotation_hor_eqd;

    #[test]
    fn test_refraction_at_horizon() {
        assert_abs_diff_eq!(refraction_angle(Refraction::Normal, 0.0), 0.4830, epsilon = 1e-3);
        assert_eq!(refraction_angle(Refraction::None, 0.0), 0.0);
        assert!(refraction_angle(Refraction::Normal, 90.0).abs() < 1e-4);
        assert!(refraction_angle(Refraction::Normal, -45.0) < refraction_angle(Refraction::JplHor, -45.0));
        assert_eq!(refraction_angle(Refraction::Normal, 95.0), 0.0);
    }

    #[test]
    fn test_inverse_refraction() {
        for bent in [-5.0, -0.5, 0.0, 2.0, 10.0, 45.0, 89.0] {
            let correction = inverse_refraction_angle(Refraction::Normal, bent).unwrap();
            let geometric = bent + correction;
            assert_abs_diff_eq!(
                geometric + refraction_angle(Refraction::Normal, geometric),
                bent,
                epsilon = 1e-12
            );
        }
    }

    /// Equatorial angles of date of the point at (azimuth, altitude) for `observer`.
    fn sky_point(
        orrery: &Orrery,
        time: &Instant,
        observer: &Observer,
        azimuth: Degree,
        altitude: Degree,
    ) -> EquatorialCoord {
        let (sa, ca) = (altitude * RADEG).sin_cos();
        let (sz, cz) = (azimuth * RADEG).sin_cos();
        // x north, y west
        let hor = AstroVector::new(ca * cz, -ca * sz, sa, *time);
        let eqd = rotation_hor_eqd(orrery, time, observer).rotate_vector(&hor);
        EquatorialCoord::from_vector(&eqd).unwrap()
    }

    #[test]
    fn test_horizon_geometry() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(9000.123).unwrap();
        let observer = Observer::new(40.0, -105.0, 1600.0).unwrap();

        for (az, alt) in [(10.0, 89.9), (90.0, 30.0), (200.0, 10.0), (300.0, -20.0)] {
            let eq = sky_point(&orrery, &time, &observer, az, alt);
            let hor = horizon(&orrery, &time, &observer, eq.ra, eq.dec, Refraction::None).unwrap();
            assert_abs_diff_eq!(hor.altitude, alt, epsilon = 1e-9);
            assert_abs_diff_eq!(hor.azimuth, az, epsilon = 1e-6);
            assert_eq!(hor.ra, eq.ra);
        }
    }

    #[test]
    fn test_horizon_refraction_raises_body() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(-3000.5).unwrap();
        let observer = Observer::new(-20.0, 30.0, 0.0).unwrap();
        let eq = sky_point(&orrery, &time, &observer, 120.0, 5.0);

        let hor = horizon(&orrery, &time, &observer, eq.ra, eq.dec, Refraction::Normal).unwrap();
        assert_abs_diff_eq!(
            hor.altitude,
            5.0 + refraction_angle(Refraction::Normal, 5.0),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(hor.azimuth, 120.0, epsilon = 1e-6);
        // the refracted equatorial position sits on the refracted direction
        let shifted = sky_point(&orrery, &time, &observer, 120.0, hor.altitude);
        assert_abs_diff_eq!(hor.dec, shifted.dec, epsilon = 1e-8);
    }
}
