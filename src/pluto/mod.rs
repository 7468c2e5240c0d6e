//! # Pluto integrator
//!
//! Pluto has no series theory here: its barycentric state is read from a coarse table of
//! 51 samples (every 29 200 days, ±2000 years around J2000) and refined by numerical
//! integration under the attraction of the Sun and the four giant planets.
//!
//! ## Overview
//!
//! * The interval between two table entries is a **segment**. A segment is filled on first use
//!   with 201 samples (146-day step): integrated forward from the left entry, backward from the
//!   right entry, and faded linearly from the first to the second so both ends match the table.
//! * A query inside a segment integrates from the two surrounding samples to the requested
//!   time and fades the two results with the fractional position between them.
//! * Outside the table, the state is integrated step by step from the nearest entry.
//!
//! Segments live in a fixed arena of [`OnceCell`] slots owned by
//! [`Orrery`](crate::orrery::Orrery): each is built once, under its own initialization lock,
//! and never invalidated.
//!
//! ## Force model
//!
//! Giant planets come from the planetary series; the Sun is placed so that the barycentre of
//! the Sun and each planet pair is consistent (`sun -= planet · gm / (gm + gm_sun)`).
//! Positions are EQJ, AU, AU/day.
use log::debug;
use nalgebra::Vector3;
use once_cell::sync::OnceCell;

use crate::constants::{JUPITER_GM, NEPTUNE_GM, SATURN_GM, SUN_GM, URANUS_GM};
use crate::orrery_errors::OrreryError;
use crate::vsop::{vsop_pos_vel, VsopModel, JUPITER, NEPTUNE, SATURN, URANUS};

mod table;

use table::PLUTO_STATE_TABLE;

/// Days between two table entries.
pub const PLUTO_TABLE_SPACING: f64 = 29_200.0;
/// Samples per segment, both ends included.
pub const PLUTO_SEGMENT_SAMPLES: usize = 201;
/// Integration step inside a segment, in days.
pub const PLUTO_TIME_STEP: f64 = PLUTO_TABLE_SPACING / (PLUTO_SEGMENT_SAMPLES - 1) as f64;

/// Maximum number of integration steps from the table edge to a requested instant.
const MAX_OUTSIDE_STEPS: f64 = 100_000.0;

/// One sample of the Pluto state table: barycentric EQJ state at `tt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    pub tt: f64,
    pub r: [f64; 3],
    pub v: [f64; 3],
}

/// The Pluto state table, in increasing `tt`.
pub fn pluto_state_table() -> &'static [TableEntry] {
    &PLUTO_STATE_TABLE
}

/// Barycentric position and velocity of one attracting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub tt: f64,
    pub r: Vector3<f64>,
    pub v: Vector3<f64>,
}

/// Barycentric states of the Sun and the giant planets at one instant.
#[derive(Debug, Clone, Copy)]
pub struct MajorBodies {
    pub sun: BodyState,
    pub jupiter: BodyState,
    pub saturn: BodyState,
    pub uranus: BodyState,
    pub neptune: BodyState,
}

/// The planets whose attraction perturbs Pluto, besides the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Giant {
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Giant {
    const ALL: [Giant; 4] = [Giant::Jupiter, Giant::Saturn, Giant::Uranus, Giant::Neptune];

    fn model(self) -> &'static VsopModel {
        match self {
            Giant::Jupiter => &JUPITER,
            Giant::Saturn => &SATURN,
            Giant::Uranus => &URANUS,
            Giant::Neptune => &NEPTUNE,
        }
    }

    /// Gravitational parameter, AU³/day².
    fn gm(self) -> f64 {
        match self {
            Giant::Jupiter => JUPITER_GM,
            Giant::Saturn => SATURN_GM,
            Giant::Uranus => URANUS_GM,
            Giant::Neptune => NEPTUNE_GM,
        }
    }
}

impl MajorBodies {
    /// Compute the barycentric states at `tt`.
    pub fn at(tt: f64) -> Self {
        let mut sun_r = Vector3::zeros();
        let mut sun_v = Vector3::zeros();

        let mut helio = Giant::ALL.map(|giant| vsop_pos_vel(giant.model(), tt));
        for (giant, (r, v)) in Giant::ALL.iter().zip(helio.iter()) {
            let share = giant.gm() / (giant.gm() + SUN_GM);
            sun_r -= r * share;
            sun_v -= v * share;
        }
        for (r, v) in helio.iter_mut() {
            *r += sun_r;
            *v += sun_v;
        }

        let state = |(r, v): (Vector3<f64>, Vector3<f64>)| BodyState { tt, r, v };
        MajorBodies {
            sun: state((sun_r, sun_v)),
            jupiter: state(helio[0]),
            saturn: state(helio[1]),
            uranus: state(helio[2]),
            neptune: state(helio[3]),
        }
    }

    /// Gravitational acceleration (AU/day²) at barycentric position `r`.
    pub fn acceleration(&self, r: &Vector3<f64>) -> Vector3<f64> {
        [
            (SUN_GM, &self.sun),
            (Giant::Jupiter.gm(), &self.jupiter),
            (Giant::Saturn.gm(), &self.saturn),
            (Giant::Uranus.gm(), &self.uranus),
            (Giant::Neptune.gm(), &self.neptune),
        ]
        .iter()
        .fold(Vector3::zeros(), |acc, (gm, body)| {
            let d = body.r - r;
            let r2 = d.norm_squared();
            acc + d * (gm / (r2 * r2.sqrt()))
        })
    }
}

/// State of the integrated body together with the acceleration acting on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravSim {
    pub tt: f64,
    pub r: Vector3<f64>,
    pub v: Vector3<f64>,
    pub a: Vector3<f64>,
}

impl GravSim {
    /// Advance the state by `dt` days with one predictor-corrector step.
    ///
    /// ```text
    /// predictor: r* = r + v·dt + a·dt²/2
    /// corrector: ā  = (a + a(r*)) / 2
    ///            r' = r + v·dt + ā·dt²/2,  v' = v + ā·dt
    /// ```
    pub fn step(&self, dt: f64) -> GravSim {
        let tt = self.tt + dt;
        let bodies = MajorBodies::at(tt);

        let approx = self.r + self.v * dt + self.a * (dt * dt / 2.0);
        let mean = (self.a + bodies.acceleration(&approx)) / 2.0;

        let r = self.r + self.v * dt + mean * (dt * dt / 2.0);
        let v = self.v + mean * dt;
        GravSim {
            tt,
            r,
            v,
            a: bodies.acceleration(&r),
        }
    }

    fn fade(&self, other: &GravSim, ramp: f64) -> GravSim {
        GravSim {
            tt: self.tt,
            r: self.r * (1.0 - ramp) + other.r * ramp,
            v: self.v * (1.0 - ramp) + other.v * ramp,
            a: self.a * (1.0 - ramp) + other.a * ramp,
        }
    }
}

/// Acceleration and state at a table entry.
pub fn grav_from_state(entry: &TableEntry) -> GravSim {
    let r = Vector3::from(entry.r);
    GravSim {
        tt: entry.tt,
        r,
        v: Vector3::from(entry.v),
        a: MajorBodies::at(entry.tt).acceleration(&r),
    }
}

/// Lazily filled segments of the Pluto table.
#[derive(Debug)]
pub struct PlutoArena {
    segments: Vec<OnceCell<Vec<GravSim>>>,
}

impl Default for PlutoArena {
    fn default() -> Self {
        PlutoArena::new()
    }
}

impl PlutoArena {
    pub fn new() -> Self {
        PlutoArena {
            segments: (0..PLUTO_STATE_TABLE.len() - 1)
                .map(|_| OnceCell::new())
                .collect(),
        }
    }

    /// Number of segments already built.
    pub fn built_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.get().is_some()).count()
    }

    fn segment(&self, index: usize) -> &[GravSim] {
        self.segments[index].get_or_init(|| build_segment(index))
    }

    /// Barycentric EQJ state of Pluto at `tt`.
    ///
    /// Return
    /// ------
    /// * `(position, velocity)` in AU and AU/day
    /// * [`OrreryError::NonFiniteValue`] for a NaN or infinite `tt`, or
    ///   [`OrreryError::InvalidParameter`] when `tt` is too far outside the table to integrate
    pub fn bary_state(&self, tt: f64) -> Result<(Vector3<f64>, Vector3<f64>), OrreryError> {
        if !tt.is_finite() {
            return Err(OrreryError::NonFiniteValue("Pluto terrestrial time"));
        }
        let first = &PLUTO_STATE_TABLE[0];
        let last = &PLUTO_STATE_TABLE[PLUTO_STATE_TABLE.len() - 1];

        if tt < first.tt || tt > last.tt {
            let sim = integrate_outside(if tt < first.tt { first } else { last }, tt)?;
            return Ok((sim.r, sim.v));
        }

        let index = (((tt - first.tt) / PLUTO_TABLE_SPACING).floor() as usize)
            .min(self.segments.len() - 1);
        let seg = self.segment(index);

        let i = (((tt - seg[0].tt) / PLUTO_TIME_STEP).floor() as usize)
            .min(PLUTO_SEGMENT_SAMPLES - 2);
        let s1 = &seg[i];
        let s2 = &seg[i + 1];

        let forward = s1.step(tt - s1.tt);
        let backward = s2.step(tt - s2.tt);
        let ramp = (tt - s1.tt) / PLUTO_TIME_STEP;
        let state = forward.fade(&backward, ramp);
        Ok((state.r, state.v))
    }
}

fn build_segment(index: usize) -> Vec<GravSim> {
    debug!(
        "building Pluto segment {index} (tt {} to {})",
        PLUTO_STATE_TABLE[index].tt,
        PLUTO_STATE_TABLE[index + 1].tt
    );

    let mut forward = Vec::with_capacity(PLUTO_SEGMENT_SAMPLES);
    forward.push(grav_from_state(&PLUTO_STATE_TABLE[index]));
    for i in 1..PLUTO_SEGMENT_SAMPLES {
        let next = forward[i - 1].step(PLUTO_TIME_STEP);
        forward.push(next);
    }

    let mut backward = vec![grav_from_state(&PLUTO_STATE_TABLE[index + 1]); PLUTO_SEGMENT_SAMPLES];
    for i in (0..PLUTO_SEGMENT_SAMPLES - 1).rev() {
        backward[i] = backward[i + 1].step(-PLUTO_TIME_STEP);
    }

    let last = (PLUTO_SEGMENT_SAMPLES - 1) as f64;
    forward
        .iter()
        .zip(backward.iter())
        .enumerate()
        .map(|(i, (f, b))| f.fade(b, i as f64 / last))
        .collect()
}

fn integrate_outside(start: &TableEntry, tt: f64) -> Result<GravSim, OrreryError> {
    if !tt.is_finite() {
        return Err(OrreryError::NonFiniteValue("Pluto terrestrial time"));
    }
    let steps = ((tt - start.tt).abs() / PLUTO_TIME_STEP).ceil();
    if steps > MAX_OUTSIDE_STEPS {
        return Err(OrreryError::InvalidParameter(format!(
            "Pluto requested at tt {tt}, more than {MAX_OUTSIDE_STEPS} steps outside the state table"
        )));
    }
    debug!(
        "Pluto requested at tt {tt}, outside the state table: integrating {steps} steps from tt {}",
        start.tt
    );
    let dt = (tt - start.tt) / steps.max(1.0);
    let mut sim = grav_from_state(start);
    for _ in 0..steps as usize {
        sim = sim.step(dt);
    }
    Ok(sim)
}

#[cfg(test)]
mod pluto_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::body::Body;

    #[test]
    fn test_table_layout() {
        let table = pluto_state_table();
        assert_eq!(table.len(), 51);
        assert_eq!(table[0].tt, -730_000.0);
        assert_eq!(table[50].tt, 730_000.0);
        for pair in table.windows(2) {
            assert_eq!(pair[1].tt - pair[0].tt, PLUTO_TABLE_SPACING);
        }
        assert_eq!(PLUTO_TIME_STEP, 146.0);
    }

    #[test]
    fn test_state_at_table_entries() {
        let arena = PlutoArena::new();
        for k in [0, 1, 24, 25, 49, 50] {
            let entry = &pluto_state_table()[k];
            let expected = grav_from_state(entry);
            let (r, v) = arena.bary_state(entry.tt).unwrap();
            assert_abs_diff_eq!(r, expected.r, epsilon = 1e-6);
            assert_abs_diff_eq!(v, expected.v, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_segments_built_lazily() {
        let arena = PlutoArena::new();
        assert_eq!(arena.built_segments(), 0);
        arena.bary_state(100.0).unwrap();
        arena.bary_state(2000.0).unwrap();
        assert_eq!(arena.built_segments(), 1);
    }

    #[test]
    fn test_continuity_across_samples() {
        let arena = PlutoArena::new();
        // one sample boundary and one segment boundary
        for tt in [146.0 * 7.0, 29_200.0] {
            let (r1, _) = arena.bary_state(tt - 1e-4).unwrap();
            let (r2, _) = arena.bary_state(tt + 1e-4).unwrap();
            assert!((r1 - r2).norm() < 1e-5, "jump at {tt}: {}", (r1 - r2).norm());
        }
    }

    #[test]
    fn test_velocity_matches_position() {
        let arena = PlutoArena::new();
        let tt = 5432.1;
        let h = 0.5;
        let (_, v) = arena.bary_state(tt).unwrap();
        let (rp, _) = arena.bary_state(tt + h).unwrap();
        let (rm, _) = arena.bary_state(tt - h).unwrap();
        assert_abs_diff_eq!(v, (rp - rm) / (2.0 * h), epsilon = 1e-7);
    }

    #[test]
    fn test_outside_table() {
        let arena = PlutoArena::new();
        let (r, _) = arena.bary_state(740_000.0).unwrap();
        assert!((25.0..55.0).contains(&r.norm()));
        assert_eq!(arena.built_segments(), 0);
    }

    #[test]
    fn test_non_finite_and_far_instants_rejected() {
        let arena = PlutoArena::new();
        for tt in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                arena.bary_state(tt),
                Err(OrreryError::NonFiniteValue("Pluto terrestrial time"))
            );
        }
        assert!(matches!(
            arena.bary_state(1e12),
            Err(OrreryError::InvalidParameter(_))
        ));
        assert_eq!(arena.built_segments(), 0);
    }

    #[test]
    fn test_giants_follow_planetary_series() {
        let tt = 4321.0;
        let bodies = MajorBodies::at(tt);
        for (giant, state, body) in [
            (Giant::Jupiter, bodies.jupiter, Body::Jupiter),
            (Giant::Saturn, bodies.saturn, Body::Saturn),
            (Giant::Uranus, bodies.uranus, Body::Uranus),
            (Giant::Neptune, bodies.neptune, Body::Neptune),
        ] {
            let helio = vsop_pos_vel(crate::vsop::vsop_model(body).unwrap(), tt).0;
            assert_abs_diff_eq!(state.r - bodies.sun.r, helio, epsilon = 1e-12);
            assert!(giant.gm() < SUN_GM / 1000.0);
        }
    }

    #[test]
    fn test_sun_barycentre_offset() {
        // the Sun wobbles by roughly one solar radius around the barycentre
        let sun = MajorBodies::at(0.0).sun;
        assert!((0.001..0.02).contains(&sun.r.norm()), "{}", sun.r.norm());
    }
}
