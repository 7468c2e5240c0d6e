//! # Galilean moons of Jupiter
//!
//! Jovicentric EQJ positions and velocities of Io, Europa, Ganymede and Callisto.
//!
//! ## Overview
//!
//! Each moon moves in Jupiter's equatorial plane, whose pole follows the IAU rotation model. Its
//! position is given by:
//!
//! * a mean longitude linear in time, plus the leading periodic terms (the Laplace resonance
//!   between Io, Europa and Ganymede, and the eccentricity of Ganymede and Callisto),
//! * a radius vector `a·(1 + ρ)` with the matching radial terms.
//!
//! Longitudes count from the equinox of J2000 along the ecliptic to the ascending node of
//! Jupiter's equator, then along that equator. Velocities are central differences of the
//! positions.
use itertools::izip;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, AU, DAYS_PER_CENTURY, RADEG};
use crate::coordinates::StateVector;
use crate::orrery::Orrery;
use crate::ref_system::{rotation_ecl_eqj, rotation_eqj_ecl};
use crate::time::Instant;

/// Half-step (days) of the velocity difference.
const VELOCITY_STEP: f64 = 1.0e-4;

/// Offset of the longitude epoch (JDE 2443000.5) from J2000, days.
const LONGITUDE_EPOCH: f64 = 2443000.5 - 2451545.0;

/// Precession in longitude from B1950 to J2000, degrees.
const B1950_TO_J2000: Degree = 0.6983;

/// Semi-major axes of Io, Europa, Ganymede, Callisto (km).
const SEMI_MAJOR_AXIS_KM: [f64; 4] = [421_700.0, 671_034.0, 1_070_412.0, 1_882_709.0];

/// Jovicentric EQJ states of the four Galilean moons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JupiterMoonsInfo {
    pub io: StateVector,
    pub europa: StateVector,
    pub ganymede: StateVector,
    pub callisto: StateVector,
}

/// Unit vector of Jupiter's north pole in EQJ at `tt`.
fn jupiter_pole(tt: f64) -> Vector3<f64> {
    let t = tt / DAYS_PER_CENTURY;
    let ra = (268.056595 - 0.006499 * t) * RADEG;
    let dec = (64.495303 + 0.002413 * t) * RADEG;
    Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin())
}

/// True longitudes (degrees) and radius vectors (km) of the four moons.
fn longitudes_and_radii(tt: f64) -> ([Degree; 4], [f64; 4]) {
    let t = tt - LONGITUDE_EPOCH;

    let l1 = 106.07719 + 203.488955790 * t;
    let l2 = 175.73161 + 101.374724735 * t;
    let l3 = 120.55883 + 50.317609207 * t;
    let l4 = 84.44459 + 21.571071177 * t;

    let pi3 = 188.1840 + 0.00712734 * t;
    let pi4 = 335.2868 + 0.00184000 * t;

    let sin = |x: Degree| (x * RADEG).sin();
    let cos = |x: Degree| (x * RADEG).cos();

    let sigma = [
        0.47259 * sin(2.0 * (l1 - l2)),
        1.06476 * sin(2.0 * (l2 - l3))
            + 0.04256 * sin(l1 - 2.0 * l2 + pi3)
            + 0.03581 * sin(l2 - pi3),
        0.16490 * sin(l3 - pi3) + 0.09081 * sin(l3 - pi4) - 0.06907 * sin(l2 - l3),
        0.84287 * sin(l4 - pi4),
    ];
    let rho = [
        -0.0041339 * cos(2.0 * (l1 - l2)),
        0.0093848 * cos(l1 - l2),
        -0.0014388 * cos(l3 - pi3) - 0.0007917 * cos(l3 - pi4),
        -0.0073546 * cos(l4 - pi4),
    ];

    let mut lon = [0.0; 4];
    let mut radius = [0.0; 4];
    for (l, r, mean, sigma, rho, a) in izip!(
        &mut lon,
        &mut radius,
        [l1, l2, l3, l4],
        sigma,
        rho,
        SEMI_MAJOR_AXIS_KM
    ) {
        *l = mean + sigma + B1950_TO_J2000;
        *r = a * (1.0 + rho);
    }
    (lon, radius)
}

/// Jovicentric EQJ positions (AU) of the four moons.
fn moon_positions(tt: f64) -> [Vector3<f64>; 4] {
    let pole = jupiter_pole(tt);
    let ecliptic_pole = rotation_ecl_eqj().matrix() * Vector3::z();

    // ascending node of Jupiter's equator on the ecliptic, and the in-plane normal to it
    let node = ecliptic_pole.cross(&pole).normalize();
    let quadrature = pole.cross(&node);
    let node_ecl = rotation_eqj_ecl().matrix() * node;
    let psi = node_ecl.y.atan2(node_ecl.x).to_degrees();

    let (lon, radius) = longitudes_and_radii(tt);
    let mut out = [Vector3::zeros(); 4];
    for i in 0..4 {
        let (s, c) = ((lon[i] - psi) * RADEG).sin_cos();
        out[i] = (node * c + quadrature * s) * (radius[i] / AU);
    }
    out
}

impl Orrery {
    /// Jovicentric EQJ position and velocity of the Galilean moons at `time`.
    ///
    /// The positions are geometric: add the light-time corrected position of Jupiter to place
    /// the moons as seen from the Earth.
    pub fn jupiter_moons(&self, time: &Instant) -> JupiterMoonsInfo {
        let now = moon_positions(time.tt);
        let before = moon_positions(time.tt - VELOCITY_STEP);
        let after = moon_positions(time.tt + VELOCITY_STEP);
        let state = |i: usize| {
            StateVector::new(
                now[i],
                (after[i] - before[i]) / (2.0 * VELOCITY_STEP),
                *time,
            )
        };
        JupiterMoonsInfo {
            io: state(0),
            europa: state(1),
            ganymede: state(2),
            callisto: state(3),
        }
    }
}

#[cfg(test)]
mod jupiter_moons_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::body::Body;
    use crate::constants::{JUPITER_EQUATORIAL_RADIUS_KM, VLIGHT_AU};
    use crate::coordinates::angle_between;

    fn moons(info: &JupiterMoonsInfo) -> [StateVector; 4] {
        [info.io, info.europa, info.ganymede, info.callisto]
    }

    #[test]
    fn test_orbit_radii_and_speeds() {
        let orrery = Orrery::new();
        let periods = [1.769138, 3.551181, 7.154553, 16.689017];
        for k in 0..20 {
            let info = orrery.jupiter_moons(&Instant::from_ut(-3000.0 + 311.7 * k as f64).unwrap());
            for (i, moon) in moons(&info).iter().enumerate() {
                let a = SEMI_MAJOR_AXIS_KM[i] / AU;
                let r = moon.pos.norm();
                assert!((r / a - 1.0).abs() < 0.02, "moon {i}: r/a = {}", r / a);

                let speed = moon.vel.norm();
                let mean_speed = std::f64::consts::TAU * a / periods[i];
                assert!(
                    (speed / mean_speed - 1.0).abs() < 0.04,
                    "moon {i}: speed ratio {}",
                    speed / mean_speed
                );
            }
        }
    }

    #[test]
    fn test_orbits_in_jupiter_equator() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(8765.0).unwrap();
        let pole = jupiter_pole(time.tt);
        for moon in moons(&orrery.jupiter_moons(&time)) {
            let normal = moon.pos.cross(&moon.vel);
            // prograde orbits around the rotation pole
            assert!(angle_between(&normal, &pole).unwrap() < 0.5);
            assert_abs_diff_eq!(moon.pos.dot(&pole), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sky_separations_meeus_44b() {
        // JDE 2448972.50068, 1992 December 16 at 0h UT
        let orrery = Orrery::new();
        let time = Instant::from_terrestrial_time(2448972.50068 - 2451545.0).unwrap();
        let jupiter = orrery.geo_vector(Body::Jupiter, &time, false).unwrap();
        let line_of_sight = jupiter.pos.normalize();
        let light_time = jupiter.length() / VLIGHT_AU;

        let info = orrery.jupiter_moons(&time.add_days(-light_time));
        // distances from the centre of the disk, in Jupiter radii
        for (moon, expected) in moons(&info).iter().zip([3.4569, 7.4469, 1.3381, 7.1465]) {
            let sky = moon.pos - line_of_sight * moon.pos.dot(&line_of_sight);
            let separation = sky.norm() * AU / JUPITER_EQUATORIAL_RADIUS_KM;
            assert_abs_diff_eq!(separation, expected, epsilon = 0.06);
        }
    }

    #[test]
    fn test_node_on_ecliptic() {
        let pole = jupiter_pole(0.0);
        let ecl = rotation_eqj_ecl().matrix() * pole;
        // Jupiter's equator is tilted about 2.2 degrees on the ecliptic
        let incl = ecl.z.acos().to_degrees();
        assert_abs_diff_eq!(incl, 2.22, epsilon = 0.01);
    }

    #[test]
    fn test_laplace_resonance() {
        // l1 - 3 l2 + 2 l3 stays at 180 degrees
        for tt in [-20000.0, 0.0, 12345.6] {
            let t = tt - LONGITUDE_EPOCH;
            let l1: f64 = 106.07719 + 203.488955790 * t;
            let l2: f64 = 175.73161 + 101.374724735 * t;
            let l3: f64 = 120.55883 + 50.317609207 * t;
            let libration = (l1 - 3.0 * l2 + 2.0 * l3).rem_euclid(360.0);
            assert_abs_diff_eq!(libration, 180.0, epsilon = 0.5);
        }
    }
}
