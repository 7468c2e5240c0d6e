//! # Earth orientation
//!
//! Orientation of the Earth's rotation axis and of the Earth itself relative to the stars:
//!
//! * nutation in longitude and obliquity ([`iau2000b`]),
//! * mean obliquity of the ecliptic ([`mean_obliquity`]) and the combined [`EarthTilt`],
//! * precession and nutation rotation matrices ([`precession_rot`], [`nutation_rot`]),
//! * Earth Rotation Angle and apparent sidereal time ([`earth_rotation_angle`],
//!   [`sidereal_time`]).
//!
//! The functions here are pure; the per-instant memoization of [`EarthTilt`] and of the
//! sidereal time lives in [`Orrery`](crate::orrery::Orrery).
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::constants::{ArcSec, Degree, Hour, ARCSEC_PER_CIRCLE, DAYS_PER_CENTURY, RADEG, RADSEC};
use crate::ref_system::RotationMatrix;

/// Direction of a precession or nutation rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecessDirection {
    /// From the J2000 mean equator towards the equator of date
    From2000,
    /// From the equator of date back to the J2000 mean equator
    Into2000,
}

/// Nutation and obliquity of the Earth's axis at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarthTilt {
    /// TT days since J2000 this tilt was computed for
    pub tt: f64,
    /// Nutation in longitude (arcseconds)
    pub dpsi: ArcSec,
    /// Nutation in obliquity (arcseconds)
    pub deps: ArcSec,
    /// Equation of the equinoxes (seconds of time)
    pub ee: f64,
    /// Mean obliquity of the ecliptic (degrees)
    pub mobl: Degree,
    /// True obliquity of the ecliptic (degrees)
    pub tobl: Degree,
}

/// Multipliers of (l, l', F, D, Ω) for the five leading terms of IAU2000B.
const NUTATION_ARGS: [[f64; 5]; 5] = [
    [0.0, 0.0, 0.0, 0.0, 1.0],
    [0.0, 0.0, 2.0, -2.0, 2.0],
    [0.0, 0.0, 2.0, 0.0, 2.0],
    [0.0, 0.0, 0.0, 0.0, 2.0],
    [0.0, 1.0, 0.0, 0.0, 0.0],
];

/// Longitude (sin, t·sin, cos) and obliquity (cos, t·cos, sin) coefficients in 0.1 µas.
const NUTATION_COEFFS: [[f64; 6]; 5] = [
    [-172064161.0, -174666.0, 33386.0, 92052331.0, 9086.0, 15377.0],
    [-13170906.0, -1675.0, -13696.0, 5730336.0, -3015.0, -4587.0],
    [-2276413.0, -234.0, 2796.0, 978459.0, -485.0, 1374.0],
    [2074554.0, 207.0, -698.0, -897492.0, 470.0, -291.0],
    [1475877.0, -3633.0, 11817.0, 73871.0, -184.0, -1924.0],
];

/// Compute the nutation angles in longitude and obliquity (IAU 2000B, five leading terms).
///
/// Arguments
/// ---------
/// * `tt`: TT days since J2000.
///
/// Returns
/// --------
/// * A tuple `(Δψ, Δε)` in arcseconds.
///
/// Description
/// -----------
/// The fundamental arguments (mean anomalies of the Moon and the Sun, argument of latitude of
/// the Moon, mean elongation of the Moon, longitude of the lunar node) are linear in Julian
/// centuries. Each term contributes
///
/// ```text
/// Δψ += (S + S'·T)·sin(arg) + C'·cos(arg)
/// Δε += (C + C''·T)·cos(arg) + S''·sin(arg)
/// ```
///
/// and the IAU2000B fixed offsets standing for the planetary terms are added at the end.
///
/// # See also
/// * [`nutation_rot`] – rotation built from these angles
/// * [`EarthTilt`] – bundles them with the obliquity
pub fn iau2000b(tt: f64) -> (ArcSec, ArcSec) {
    let t = tt / DAYS_PER_CENTURY;

    let angle = |a0: f64, a1: f64| ((a0 + t * a1) % ARCSEC_PER_CIRCLE) * RADSEC;
    let args = [
        angle(485868.249036, 1717915923.2178),
        angle(1287104.79305, 129596581.0481),
        angle(335779.526232, 1739527262.8478),
        angle(1072260.70369, 1602961601.2090),
        angle(450160.398036, -6962890.5431),
    ];

    let (dp, de) = NUTATION_ARGS.iter().zip(NUTATION_COEFFS.iter()).fold(
        (0.0, 0.0),
        |(dp, de), (mult, c)| {
            let arg: f64 = mult.iter().zip(args.iter()).map(|(m, a)| m * a).sum();
            let (sarg, carg) = arg.sin_cos();
            (
                dp + (c[0] + c[1] * t) * sarg + c[2] * carg,
                de + (c[3] + c[4] * t) * carg + c[5] * sarg,
            )
        },
    );

    (-0.000135 + dp * 1.0e-7, 0.000388 + de * 1.0e-7)
}

/// Mean obliquity of the ecliptic (IAU 2006), in degrees.
///
/// ```text
/// ε = 84381.406″ − 46.836769″·T − 0.0001831″·T² + 0.00200340″·T³ − 5.76e-7″·T⁴ − 4.34e-8″·T⁵
/// ```
pub fn mean_obliquity(tt: f64) -> Degree {
    let t = tt / DAYS_PER_CENTURY;
    let asec = ((((-0.0000000434 * t - 0.000000576) * t + 0.00200340) * t - 0.0001831) * t
        - 46.836769)
        * t
        + 84381.406;
    asec / 3600.0
}

/// Nutation and obliquity at `tt`, without memoization.
pub fn compute_e_tilt(tt: f64) -> EarthTilt {
    let (dpsi, deps) = iau2000b(tt);
    let mobl = mean_obliquity(tt);
    EarthTilt {
        tt,
        dpsi,
        deps,
        ee: dpsi * (mobl * RADEG).cos() / 15.0,
        mobl,
        tobl: mobl + deps / 3600.0,
    }
}

/// Precession rotation between the J2000 mean equator and the mean equator of date (IAU 2006).
///
/// Arguments
/// ---------
/// * `tt`: TT days since J2000.
/// * `dir`: [`PrecessDirection::From2000`] maps J2000 vectors to the mean equator of date,
///   [`PrecessDirection::Into2000`] the reverse.
///
/// Return
/// ------
/// * the rotation matrix
///
/// The rotation is built from the precession angles ψA, ωA and χA, polynomials of degree five
/// in Julian centuries, around the J2000 obliquity ε₀:
///
/// ```text
/// P = R3(χA) · R1(−ωA) · R3(−ψA) · R1(ε₀)
/// ```
pub fn precession_rot(tt: f64, dir: PrecessDirection) -> RotationMatrix {
    let t = tt / DAYS_PER_CENTURY;
    let eps0 = 84381.406;

    let psia = ((((-0.0000000951 * t + 0.000132851) * t - 0.00114045) * t - 1.0790069) * t
        + 5038.481507)
        * t;
    let omegaa = ((((0.0000003337 * t - 0.000000467) * t - 0.00772503) * t + 0.0512623) * t
        - 0.025754)
        * t
        + eps0;
    let chia = ((((-0.0000000560 * t + 0.000170663) * t - 0.00121197) * t - 2.3814292) * t
        + 10.556403)
        * t;

    let (sa, ca) = (eps0 * RADSEC).sin_cos();
    let (sb, cb) = (-psia * RADSEC).sin_cos();
    let (sc, cc) = (-omegaa * RADSEC).sin_cos();
    let (sd, cd) = (chia * RADSEC).sin_cos();

    let xx = cd * cb - sb * sd * cc;
    let yx = cd * sb * ca + sd * cc * cb * ca - sa * sd * sc;
    let zx = cd * sb * sa + sd * cc * cb * sa + ca * sd * sc;
    let xy = -sd * cb - sb * cd * cc;
    let yy = -sd * sb * ca + cd * cc * cb * ca - sa * cd * sc;
    let zy = -sd * sb * sa + cd * cc * cb * sa + ca * cd * sc;
    let xz = sb * sc;
    let yz = -sc * cb * ca - sa * cc;
    let zz = -sc * cb * sa + cc * ca;

    // of date -> J2000
    let into2000 = Matrix3::new(xx, xy, xz, yx, yy, yz, zx, zy, zz);
    let rot = RotationMatrix::from_trusted(into2000);
    match dir {
        PrecessDirection::Into2000 => rot,
        PrecessDirection::From2000 => rot.inverse(),
    }
}

/// Nutation rotation between the mean equator of date and the true equator of date.
///
/// Arguments
/// ---------
/// * `tilt`: nutation and obliquities at the instant of interest
/// * `dir`: [`PrecessDirection::From2000`] maps mean-of-date vectors to true-of-date,
///   [`PrecessDirection::Into2000`] the reverse
pub fn nutation_rot(tilt: &EarthTilt, dir: PrecessDirection) -> RotationMatrix {
    let (sobm, cobm) = (tilt.mobl * RADEG).sin_cos();
    let (sobt, cobt) = (tilt.tobl * RADEG).sin_cos();
    let (spsi, cpsi) = (tilt.dpsi * RADSEC).sin_cos();

    let xx = cpsi;
    let yx = -spsi * cobm;
    let zx = -spsi * sobm;
    let xy = spsi * cobt;
    let yy = cpsi * cobm * cobt + sobm * sobt;
    let zy = cpsi * sobm * cobt - cobm * sobt;
    let xz = spsi * sobt;
    let yz = cpsi * cobm * sobt - sobm * cobt;
    let zz = cpsi * sobm * sobt + cobm * cobt;

    // mean -> true
    let from2000 = Matrix3::new(xx, yx, zx, xy, yy, zy, xz, yz, zz);
    let rot = RotationMatrix::from_trusted(from2000);
    match dir {
        PrecessDirection::From2000 => rot,
        PrecessDirection::Into2000 => rot.inverse(),
    }
}

/// Rotation between J2000 and the true equator of date, combining precession and nutation in
/// the order required by `dir`.
///
/// * `Into2000`: nutation (true → mean of date), then precession (mean of date → J2000),
/// * `From2000`: precession, then nutation.
pub fn gyration_rot(tilt: &EarthTilt, dir: PrecessDirection) -> RotationMatrix {
    let precession = precession_rot(tilt.tt, dir);
    let nutation = nutation_rot(tilt, dir);
    match dir {
        PrecessDirection::Into2000 => nutation.combine(&precession),
        PrecessDirection::From2000 => precession.combine(&nutation),
    }
}

/// Earth Rotation Angle in degrees, `[0, 360)`.
///
/// Argument
/// --------
/// * `ut`: UT days since J2000
pub fn earth_rotation_angle(ut: f64) -> Degree {
    let thet1 = 0.7790572732640 + 0.00273781191135448 * ut;
    let thet3 = ut % 1.0;
    let theta = 360.0 * ((thet1 + thet3) % 1.0);
    if theta < 0.0 {
        theta + 360.0
    } else {
        theta
    }
}

/// Greenwich apparent sidereal time in sidereal hours, `[0, 24)`.
///
/// Arguments
/// ---------
/// * `ut`: UT days since J2000, drives the Earth Rotation Angle
/// * `tilt`: Earth tilt at the same instant, provides TT and the equation of the equinoxes
///
/// Return
/// ------
/// * GAST = ERA + precession polynomial + equation of the equinoxes
pub fn sidereal_time(ut: f64, tilt: &EarthTilt) -> Hour {
    let t = tilt.tt / DAYS_PER_CENTURY;
    let eqeq = 15.0 * tilt.ee;
    let theta = earth_rotation_angle(ut);
    let st = eqeq
        + 0.014506
        + ((((-0.0000000368 * t - 0.000029956) * t - 0.00000044) * t + 1.3915817) * t
            + 4612.156534)
            * t;

    let gst = ((st / 3600.0 + theta) % 360.0) / 15.0;
    if gst < 0.0 {
        gst + 24.0
    } else {
        gst
    }
}

#[cfg(test)]
mod earth_orientation_test {
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    use super::*;

    #[test]
    fn test_mean_obliquity() {
        assert_eq!(mean_obliquity(0.0), 84381.406 / 3600.0);
        let drift = mean_obliquity(36525.0) - mean_obliquity(0.0);
        assert_abs_diff_eq!(drift, -46.836769 / 3600.0, epsilon = 1e-6);
    }

    #[test]
    fn test_nutation_amplitude() {
        for k in 0..200 {
            let tt = -36525.0 + k as f64 * 365.25;
            let (dpsi, deps) = iau2000b(tt);
            assert!(dpsi.abs() < 20.0, "dpsi = {dpsi}");
            assert!(deps.abs() < 11.0, "deps = {deps}");
        }
        let (dpsi, deps) = iau2000b(0.0);
        assert_abs_diff_eq!(dpsi, -13.93, epsilon = 0.2);
        assert_abs_diff_eq!(deps, -5.77, epsilon = 0.2);
    }

    #[test]
    fn test_precession_direction() {
        // the equinox of 2050 has moved by about 0.64 degree in right ascension
        let rot = precession_rot(18262.5, PrecessDirection::From2000);
        let v = rot.matrix() * Vector3::x();
        let ra = v.y.atan2(v.x).to_degrees();
        assert_abs_diff_eq!(ra, 0.6407, epsilon = 1e-3);

        let back = precession_rot(18262.5, PrecessDirection::Into2000);
        let identity = back.matrix() * rot.matrix();
        assert_abs_diff_eq!(identity, Matrix3::identity(), epsilon = 1e-14);
    }

    #[test]
    fn test_precession_identity_at_j2000() {
        let rot = precession_rot(0.0, PrecessDirection::Into2000);
        assert_abs_diff_eq!(*rot.matrix(), Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_nutation_moves_equinox_eastward() {
        let tilt = compute_e_tilt(0.0);
        let v = nutation_rot(&tilt, PrecessDirection::From2000).matrix() * Vector3::x();
        let dpsi = tilt.dpsi * RADSEC;
        assert_abs_diff_eq!(v.y / dpsi, (tilt.tobl * RADEG).cos(), epsilon = 1e-4);
    }

    #[test]
    fn test_gyration_round_trip() {
        let tilt = compute_e_tilt(9000.0);
        let from = gyration_rot(&tilt, PrecessDirection::From2000);
        let into = gyration_rot(&tilt, PrecessDirection::Into2000);
        let v = Vector3::new(0.3, -1.2, 0.7);
        let back = into.matrix() * (from.matrix() * v);
        assert_abs_diff_eq!(back, v, epsilon = 1e-14);
    }

    #[test]
    fn test_sidereal_time_at_j2000() {
        let tilt = compute_e_tilt(0.000742870370370);
        let gast = sidereal_time(0.0, &tilt);
        // GMST at J2000 is 18.697374558 h; GAST adds the equation of the equinoxes
        assert_abs_diff_eq!(gast, 18.697374558 + tilt.ee / 3600.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sidereal_time_range() {
        for k in 0..500 {
            let ut = -20000.0 + k as f64 * 83.37;
            let tilt = compute_e_tilt(ut);
            let gast = sidereal_time(ut, &tilt);
            assert!((0.0..24.0).contains(&gast), "gast = {gast}");
        }
    }

    #[test]
    fn test_earth_rotation_angle() {
        assert_abs_diff_eq!(
            earth_rotation_angle(0.0),
            0.7790572732640 * 360.0,
            epsilon = 1e-9
        );
        let era = earth_rotation_angle(-0.25);
        assert!((0.0..360.0).contains(&era));
    }
}
