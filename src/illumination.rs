//! # Illumination and visual magnitude
//!
//! [`Orrery::illumination`] gives how bright a body looks from the Earth and how much of its disc
//! is lit.
//!
//! ## Overview
//!
//! The phase angle is the Sun-body-Earth angle. The visual magnitude combines a body-specific
//! phase polynomial with the inverse-square dimming by the heliocentric and geocentric distances:
//!
//! ```text
//! mag = c0 + c1·x + c2·x² + c3·x³ + 5·log10(r·Δ),   x = phase / 100°
//! ```
//!
//! The Sun and the Moon have their own formulas, and Saturn adds the brightness of its rings,
//! which depends on how open they appear from the Earth (the ring tilt).
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::constants::{Degree, AU, AU_PER_PARSEC, MOON_MEAN_DISTANCE_KM, RADEG};
use crate::coordinates::{angle_between, AstroVector};
use crate::moon::geo_moon;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::time::Instant;
use crate::vsop::vsop_helio_vector;

/// Absolute magnitude of the Sun seen from 1 AU.
pub static SUN_MAG_1AU: Lazy<f64> = Lazy::new(|| -0.17 - 5.0 * AU_PER_PARSEC.log10());

/// Inclination of Saturn's ring plane on the ecliptic, degrees.
const SATURN_RING_INCLINATION: Degree = 28.06;

/// Brightness and lighting geometry of a body seen from the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IlluminationInfo {
    pub time: Instant,
    /// Visual magnitude
    pub mag: f64,
    /// Sun-body-Earth angle (degrees), 0 for the Sun
    pub phase_angle: Degree,
    /// Lit fraction of the apparent disc, in `[0, 1]`
    pub phase_fraction: f64,
    /// Sun-body distance (AU)
    pub helio_dist: f64,
    /// Earth-body distance (AU)
    pub geo_dist: f64,
    /// Geocentric EQJ position of the body
    pub gc: AstroVector,
    /// Heliocentric EQJ position of the body
    pub hc: AstroVector,
    /// Tilt of Saturn's rings seen from the Earth (degrees), 0 for every other body
    pub ring_tilt: Degree,
}

/// Phase polynomial coefficients `(c0, c1, c2, c3)`.
fn magnitude_coefficients(body: Body, phase: Degree) -> Option<(f64, f64, f64, f64)> {
    match body {
        Body::Mercury => Some((-0.60, 4.98, -4.88, 3.02)),
        Body::Venus if phase < 163.6 => Some((-4.47, 1.03, 0.57, 0.13)),
        Body::Venus => Some((0.98, -1.02, 0.0, 0.0)),
        Body::Mars => Some((-1.52, 1.60, 0.0, 0.0)),
        Body::Jupiter => Some((-9.40, 0.50, 0.0, 0.0)),
        Body::Uranus => Some((-7.19, 0.25, 0.0, 0.0)),
        Body::Neptune => Some((-6.87, 0.0, 0.0, 0.0)),
        Body::Pluto => Some((-1.00, 4.00, 0.0, 0.0)),
        // the Sun, the Moon and Saturn have their own formulas
        Body::Sun
        | Body::Moon
        | Body::Saturn
        | Body::Earth
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

fn visual_magnitude(
    body: Body,
    phase: Degree,
    helio_dist: f64,
    geo_dist: f64,
) -> Result<f64, OrreryError> {
    let (c0, c1, c2, c3) = magnitude_coefficients(body, phase)
        .ok_or(OrreryError::UnsupportedBody(body, "illumination"))?;
    let x = phase / 100.0;
    Ok(c0 + x * (c1 + x * (c2 + x * c3)) + 5.0 * (helio_dist * geo_dist).log10())
}

fn moon_magnitude(phase: Degree, helio_dist: f64, geo_dist: f64) -> f64 {
    let rad = phase * RADEG;
    let rad4 = rad.powi(4);
    let geo_au = geo_dist / (MOON_MEAN_DISTANCE_KM / AU);
    -12.717 + 1.49 * rad.abs() + 0.0431 * rad4 + 5.0 * (helio_dist * geo_au).log10()
}

/// Magnitude of Saturn with its rings, and the ring tilt in degrees.
fn saturn_magnitude(
    orrery: &Orrery,
    phase: Degree,
    helio_dist: f64,
    geo_dist: f64,
    gc: &AstroVector,
    time: &Instant,
) -> Result<(f64, Degree), OrreryError> {
    let eclip = orrery.ecliptic(gc)?;
    let ir = SATURN_RING_INCLINATION * RADEG;
    let nr = (169.51 + 3.82e-5 * time.tt) * RADEG;

    let lat = eclip.elat * RADEG;
    let lon = eclip.elon * RADEG;
    let tilt = (lat.sin() * ir.cos() - lat.cos() * ir.sin() * (lon - nr).sin()).asin();
    let sin_tilt = tilt.abs().sin();

    let mag = -9.0 + 0.044 * phase + sin_tilt * (-2.6 + 1.2 * sin_tilt)
        + 5.0 * (helio_dist * geo_dist).log10();
    Ok((mag, tilt.to_degrees()))
}

impl Orrery {
    /// Visual magnitude and phase of a body seen from the Earth.
    ///
    /// Arguments
    /// ---------
    /// * `body`: the Sun, the Moon, a planet other than the Earth, or Pluto
    /// * `time`: the instant
    ///
    /// Return
    /// ------
    /// * an [`IlluminationInfo`]; [`OrreryError::UnsupportedBody`] for the Earth, the
    ///   barycentres and the user stars
    ///
    /// Positions are geometric (no light-time correction).
    pub fn illumination(
        &self,
        body: Body,
        time: &Instant,
    ) -> Result<IlluminationInfo, OrreryError> {
        if matches!(body, Body::Earth | Body::SSB | Body::EMB) || body.is_star() {
            return Err(OrreryError::UnsupportedBody(body, "illumination"));
        }

        let earth = vsop_helio_vector(Body::Earth, time)?;
        let (gc, hc, phase_angle) = match body {
            Body::Sun => (-earth, AstroVector::zero(*time), 0.0),
            Body::Moon => {
                let gc = geo_moon(time);
                let hc = earth + gc;
                (gc, hc, angle_between(&gc.pos, &hc.pos)?)
            }
            _ => {
                let hc = self.helio_vector(body, time)?;
                let gc = hc - earth;
                (gc, hc, angle_between(&gc.pos, &hc.pos)?)
            }
        };

        let geo_dist = gc.length();
        let helio_dist = hc.length();
        let mut ring_tilt = 0.0;

        let mag = match body {
            Body::Sun => *SUN_MAG_1AU + 5.0 * geo_dist.log10(),
            Body::Moon => moon_magnitude(phase_angle, helio_dist, geo_dist),
            Body::Saturn => {
                let (mag, tilt) =
                    saturn_magnitude(self, phase_angle, helio_dist, geo_dist, &gc, time)?;
                ring_tilt = tilt;
                mag
            }
            _ => visual_magnitude(body, phase_angle, helio_dist, geo_dist)?,
        };

        Ok(IlluminationInfo {
            time: *time,
            mag,
            phase_angle,
            phase_fraction: (1.0 + (phase_angle * RADEG).cos()) / 2.0,
            helio_dist,
            geo_dist,
            gc,
            hc,
            ring_tilt,
        })
    }
}

#[cfg(test)]
mod illumination_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn utc(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Instant {
        Instant::from_gregorian(year, month, day, hour, minute, 0.0).unwrap()
    }

    #[test]
    fn test_sun_magnitude() {
        assert_abs_diff_eq!(*SUN_MAG_1AU, -26.74, epsilon = 0.01);
        let orrery = Orrery::new();
        let sun = orrery.illumination(Body::Sun, &utc(2024, 7, 4, 0, 0)).unwrap();
        // aphelion: 1.0167 AU
        assert_abs_diff_eq!(sun.mag, -26.74 + 5.0 * 1.0167f64.log10(), epsilon = 0.01);
        assert_eq!(sun.phase_fraction, 1.0);
        assert_eq!(sun.helio_dist, 0.0);
    }

    #[test]
    fn test_moon_phase_fraction() {
        let orrery = Orrery::new();
        let full = orrery.illumination(Body::Moon, &utc(2024, 1, 25, 17, 54)).unwrap();
        assert_abs_diff_eq!(full.phase_fraction, 1.0, epsilon = 0.02);
        assert!(full.mag < -12.0, "full moon magnitude {}", full.mag);

        let new = orrery.illumination(Body::Moon, &utc(2024, 1, 11, 11, 57)).unwrap();
        assert_abs_diff_eq!(new.phase_fraction, 0.0, epsilon = 0.02);
    }

    #[test]
    fn test_planet_magnitudes() {
        let orrery = Orrery::new();
        let time = utc(2024, 6, 1, 0, 0);
        let venus = orrery.illumination(Body::Venus, &time).unwrap();
        assert!((-4.9..-3.7).contains(&venus.mag), "Venus {}", venus.mag);
        let jupiter = orrery.illumination(Body::Jupiter, &time).unwrap();
        assert!((-2.9..-1.6).contains(&jupiter.mag), "Jupiter {}", jupiter.mag);
        assert_eq!(jupiter.ring_tilt, 0.0);
        let pluto = orrery.illumination(Body::Pluto, &time).unwrap();
        assert!((13.5..15.5).contains(&pluto.mag), "Pluto {}", pluto.mag);
    }

    #[test]
    fn test_saturn_ring_tilt() {
        let orrery = Orrery::new();
        // rings widely open in late 2017
        let wide = orrery.illumination(Body::Saturn, &utc(2017, 10, 16, 0, 0)).unwrap();
        assert!(wide.ring_tilt.abs() > 25.0, "tilt {}", wide.ring_tilt);
        // edge-on in March 2025
        let edge = orrery.illumination(Body::Saturn, &utc(2025, 3, 23, 0, 0)).unwrap();
        assert!(edge.ring_tilt.abs() < 2.0, "tilt {}", edge.ring_tilt);
        assert!(wide.mag < edge.mag);

        for k in 0..30 {
            let info = orrery
                .illumination(Body::Saturn, &Instant::from_ut(-5000.0 + 400.0 * k as f64).unwrap())
                .unwrap();
            assert!(info.ring_tilt.abs() <= 31.0);
        }
    }

    #[test]
    fn test_magnitude_coefficients_cover_plain_planets() {
        for body in Body::PLANETS {
            let covered = magnitude_coefficients(body, 50.0).is_some();
            assert_eq!(covered, !matches!(body, Body::Earth | Body::Saturn), "{body}");
        }
        for body in Body::STARS.into_iter().chain([Body::Sun, Body::Moon, Body::SSB, Body::EMB]) {
            assert!(magnitude_coefficients(body, 50.0).is_none(), "{body}");
        }
        // Venus switches formula near inferior conjunction
        assert_ne!(
            magnitude_coefficients(Body::Venus, 160.0),
            magnitude_coefficients(Body::Venus, 170.0)
        );
    }

    #[test]
    fn test_unsupported_bodies() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(0.0).unwrap();
        for body in [Body::Earth, Body::SSB, Body::EMB, Body::Star1] {
            assert_eq!(
                orrery.illumination(body, &time),
                Err(OrreryError::UnsupportedBody(body, "illumination"))
            );
        }
    }
}
