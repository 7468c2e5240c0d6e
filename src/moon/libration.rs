//! Libration of the Moon: the apparent rocking of the lunar globe seen from the Earth.
//!
//! The optical libration follows from the geometry between the Moon's orbit and its equator,
//! inclined by 1.54242° on the ecliptic; the physical libration adds the small periodic
//! corrections ρ, σ and τ to it.
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Kilometer, DAYS_PER_CENTURY, MOON_MEAN_RADIUS_KM, RADEG};
use crate::coordinates::longitude_offset;
use crate::time::Instant;

use super::{lunar_coordinates, MeanArguments};

/// Inclination of the mean lunar equator on the ecliptic, degrees.
const LUNAR_EQUATOR_INCLINATION: Degree = 1.54242;

/// Libration angles and apparent size of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LibrationInfo {
    /// Sub-Earth libration latitude (degrees)
    pub elat: Degree,
    /// Sub-Earth libration longitude (degrees)
    pub elon: Degree,
    /// Geocentric ecliptic latitude of the Moon (degrees)
    pub mlat: Degree,
    /// Geocentric ecliptic longitude of the Moon (degrees)
    pub mlon: Degree,
    /// Earth-Moon distance (km)
    pub dist_km: Kilometer,
    /// Apparent angular diameter of the Moon (degrees)
    pub diam_deg: Degree,
}

/// Compute the libration of the Moon at `time`.
///
/// Arguments
/// ---------
/// * `time`: the instant, the lunar theory is evaluated at its TT
///
/// Return
/// ------
/// * a [`LibrationInfo`] whose `elon`/`elat` are the selenographic coordinates of the sub-Earth
///   point (optical plus physical libration)
pub fn libration(time: &Instant) -> LibrationInfo {
    let t = time.tt / DAYS_PER_CENTURY;
    let moon = lunar_coordinates(time.tt);
    let args = MeanArguments::at(t);

    let diam_deg = 2.0
        * (MOON_MEAN_RADIUS_KM
            / (moon.dist_km * moon.dist_km - MOON_MEAN_RADIUS_KM * MOON_MEAN_RADIUS_KM).sqrt())
        .atan()
        .to_degrees();

    let incl = LUNAR_EQUATOR_INCLINATION * RADEG;
    let f = args.f * RADEG;
    let omega = args.omega * RADEG;
    let m = args.m * RADEG;
    let mdash = args.mp * RADEG;
    let d = args.d * RADEG;
    let e = args.e;

    let lon = moon.lon * RADEG;
    let lat = moon.lat * RADEG;

    // optical libration
    let w = lon - omega;
    let a = (w.sin() * lat.cos() * incl.cos() - lat.sin() * incl.sin()).atan2(w.cos() * lat.cos());
    let ldash = longitude_offset((a - f).to_degrees());
    let bdash = (-w.sin() * lat.cos() * incl.sin() - lat.sin() * incl.cos()).asin();

    // physical libration
    let k1 = (119.75 + 131.849 * t) * RADEG;
    let k2 = (72.56 + 20.186 * t) * RADEG;

    let rho = -0.02752 * mdash.cos() - 0.02245 * f.sin() + 0.00684 * (mdash - 2.0 * f).cos()
        - 0.00293 * (2.0 * f).cos()
        - 0.00085 * (2.0 * f - 2.0 * d).cos()
        - 0.00054 * (mdash - 2.0 * d).cos()
        - 0.00020 * (mdash + f).sin()
        - 0.00020 * (mdash + 2.0 * f).cos()
        - 0.00020 * (mdash - f).cos()
        + 0.00014 * (mdash + 2.0 * f - 2.0 * d).cos();

    let sigma = -0.02816 * mdash.sin() + 0.02244 * f.cos() - 0.00682 * (mdash - 2.0 * f).sin()
        - 0.00279 * (2.0 * f).sin()
        - 0.00083 * (2.0 * f - 2.0 * d).sin()
        + 0.00069 * (mdash - 2.0 * d).sin()
        + 0.00040 * (mdash + f).cos()
        - 0.00025 * (2.0 * mdash).sin()
        - 0.00023 * (mdash + 2.0 * f).sin()
        + 0.00020 * (mdash - f).cos()
        + 0.00019 * (mdash - f).sin()
        + 0.00013 * (mdash + 2.0 * f - 2.0 * d).sin()
        - 0.00010 * (mdash - 3.0 * f).cos();

    let tau = 0.02520 * e * m.sin() + 0.00473 * (2.0 * mdash - 2.0 * f).sin()
        - 0.00467 * mdash.sin()
        + 0.00396 * k1.sin()
        + 0.00276 * (2.0 * mdash - 2.0 * d).sin()
        + 0.00196 * omega.sin()
        - 0.00183 * (mdash - f).cos()
        + 0.00115 * (mdash - 2.0 * d).sin()
        - 0.00096 * (mdash - d).sin()
        + 0.00046 * (2.0 * f - 2.0 * d).sin()
        - 0.00039 * (mdash - f).sin()
        - 0.00032 * (mdash - m - d).sin()
        + 0.00027 * (2.0 * mdash - m - 2.0 * d).sin()
        + 0.00023 * k2.sin()
        - 0.00014 * (2.0 * d).sin()
        + 0.00014 * (2.0 * mdash - 2.0 * f).cos()
        - 0.00012 * (mdash - 2.0 * f).sin()
        - 0.00012 * (2.0 * mdash).sin()
        + 0.00011 * (2.0 * mdash - 2.0 * m - 2.0 * d).sin();

    let ldash2 = -tau + (rho * a.cos() + sigma * a.sin()) * bdash.tan();
    let bdash2 = sigma * a.cos() - rho * a.sin();

    LibrationInfo {
        elat: bdash.to_degrees() + bdash2,
        elon: ldash + ldash2,
        mlat: moon.lat,
        mlon: moon.lon,
        dist_km: moon.dist_km,
        diam_deg,
    }
}

#[cfg(test)]
mod libration_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_libration_worked_example() {
        // 1992-04-12 00:00 TT: l = -1.23°, b = +4.20°
        let time = Instant {
            ut: -2820.5 - 59.0 / 86400.0,
            tt: 2448724.5 - 2451545.0,
        };
        let lib = libration(&time);
        assert_abs_diff_eq!(lib.elon, -1.23, epsilon = 0.01);
        assert_abs_diff_eq!(lib.elat, 4.20, epsilon = 0.01);
        assert_abs_diff_eq!(lib.diam_deg, 0.5404, epsilon = 1e-3);
    }

    #[test]
    fn test_libration_bounds() {
        for k in 0..300 {
            let lib = libration(&Instant::from_ut(k as f64 * 5.3).unwrap());
            assert!(lib.elon.abs() < 8.5, "elon = {}", lib.elon);
            assert!(lib.elat.abs() < 7.5, "elat = {}", lib.elat);
            assert!((0.48..0.57).contains(&lib.diam_deg), "diam = {}", lib.diam_deg);
        }
    }
}
