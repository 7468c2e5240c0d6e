//! # Orrery: engine context
//!
//! [`Orrery`] is the single entry point of the crate. It owns every piece of state shared between
//! queries:
//!
//! 1. **Earth-tilt memo**: the nutation/obliquity of the most recently requested instant.
//! 2. **Sidereal-time memo**: the Greenwich apparent sidereal time of that instant.
//! 3. **Pluto arena**: integrator segments built on first access (see [`PlutoArena`]).
//! 4. **User stars**: the eight [`StarDefinition`] slots.
//!
//! Both memos sit behind their own [`Mutex`] and are recomputed whenever the requested TT differs
//! from the cached one by more than `tilt_epsilon` (1e-6 day by default). They never change a
//! result, only avoid recomputing it, so an `Orrery` can be shared across threads freely.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use orrery::body::Body;
//! use orrery::orrery::Orrery;
//! use orrery::time::Instant;
//!
//! let orrery = Orrery::new();
//! let time = Instant::from_gregorian(2024, 1, 25, 17, 54, 0.0).unwrap();
//! let phase = orrery.moon_phase(&time).unwrap();
//! let mars = orrery.helio_vector(Body::Mars, &time).unwrap();
//! ```
//!
//! ## See also
//! ------------
//! * [`OrreryBuilder`] – tune the memo tolerance and define stars at construction.
//! * [`crate::ephemeris`], [`crate::events`], [`crate::illumination`] – the query methods.
use std::sync::Mutex;

use log::debug;

use crate::body::Body;
use crate::constants::{Degree, Hour};
use crate::coordinates::HorizontalCoord;
use crate::earth_orientation::{compute_e_tilt, sidereal_time, EarthTilt};
use crate::moon::libration::{libration, LibrationInfo};
use crate::observers::horizon::{self, Refraction};
use crate::observers::Observer;
use crate::orrery_errors::OrreryError;
use crate::pluto::PlutoArena;
use crate::stars::{star_slot, StarDefinition};
use crate::time::Instant;

/// Default TT tolerance (days) under which the memoized tilt and sidereal time are reused.
pub const DEFAULT_TILT_EPSILON: f64 = 1.0e-6;

/// Number of user-defined star slots.
pub const STAR_SLOTS: usize = 8;

#[derive(Debug)]
pub struct Orrery {
    tilt_cache: Mutex<Option<EarthTilt>>,
    sidereal_cache: Mutex<Option<(f64, Hour)>>,
    pub(crate) pluto: PlutoArena,
    stars: [Option<StarDefinition>; STAR_SLOTS],
    tilt_epsilon: f64,
}

impl Default for Orrery {
    fn default() -> Self {
        Orrery::new()
    }
}

impl Orrery {
    /// Construct a context with default settings and no star defined.
    pub fn new() -> Self {
        Orrery {
            tilt_cache: Mutex::new(None),
            sidereal_cache: Mutex::new(None),
            pluto: PlutoArena::new(),
            stars: [None; STAR_SLOTS],
            tilt_epsilon: DEFAULT_TILT_EPSILON,
        }
    }

    /// Start an [`OrreryBuilder`].
    pub fn builder() -> OrreryBuilder {
        OrreryBuilder::new()
    }

    /// TT tolerance of the per-instant memos, in days.
    pub fn tilt_epsilon(&self) -> f64 {
        self.tilt_epsilon
    }

    /// Nutation and obliquity of the Earth's axis at `time`.
    ///
    /// The most recent result is memoized; a request within `tilt_epsilon` of its TT returns it
    /// unchanged.
    pub fn e_tilt(&self, time: &Instant) -> EarthTilt {
        let mut cache = self.tilt_cache.lock().unwrap_or_else(|e| e.into_inner());
        match *cache {
            Some(tilt) if (tilt.tt - time.tt).abs() <= self.tilt_epsilon => tilt,
            _ => {
                let tilt = compute_e_tilt(time.tt);
                *cache = Some(tilt);
                tilt
            }
        }
    }

    /// Greenwich apparent sidereal time at `time`, in sidereal hours `[0, 24)`.
    ///
    /// Memoized on TT like [`Orrery::e_tilt`].
    pub fn sidereal_time(&self, time: &Instant) -> Hour {
        {
            let cache = self.sidereal_cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some((tt, gast)) = *cache {
                if (tt - time.tt).abs() <= self.tilt_epsilon {
                    return gast;
                }
            }
        }
        let gast = sidereal_time(time.ut, &self.e_tilt(time));
        let mut cache = self.sidereal_cache.lock().unwrap_or_else(|e| e.into_inner());
        *cache = Some((time.tt, gast));
        gast
    }

    /// Define (or redefine) one of the eight user stars.
    ///
    /// Arguments
    /// ---------
    /// * `body`: [`Body::Star1`] … [`Body::Star8`]
    /// * `ra`: J2000 right ascension in `[0, 24)` hours
    /// * `dec`: J2000 declination in `[-90, +90]` degrees
    /// * `dist_ly`: distance in light-years, at least 1
    ///
    /// Return
    /// ------
    /// * `Ok(())`, or the validation error; the slot is left untouched on error
    pub fn define_star(
        &mut self,
        body: Body,
        ra: Hour,
        dec: Degree,
        dist_ly: f64,
    ) -> Result<(), OrreryError> {
        let slot = star_slot(body)?;
        self.stars[slot] = Some(StarDefinition::new(ra, dec, dist_ly)?);
        Ok(())
    }

    /// Definition of a user star, [`OrreryError::UndefinedStar`] if its slot is empty.
    pub fn star(&self, body: Body) -> Result<&StarDefinition, OrreryError> {
        self.stars[star_slot(body)?]
            .as_ref()
            .ok_or(OrreryError::UndefinedStar(body))
    }

    /// Libration angles and apparent diameter of the Moon.
    pub fn libration(&self, time: &Instant) -> LibrationInfo {
        libration(time)
    }

    /// Horizontal coordinates of a true-equator-of-date position for `observer`.
    ///
    /// See [`horizon::horizon`].
    pub fn horizon(
        &self,
        time: &Instant,
        observer: &Observer,
        ra: Hour,
        dec: Degree,
        refraction: Refraction,
    ) -> Result<HorizontalCoord, OrreryError> {
        horizon::horizon(self, time, observer, ra, dec, refraction)
    }

    /// See [`horizon::refraction_angle`].
    pub fn refraction_angle(&self, refraction: Refraction, altitude: Degree) -> Degree {
        horizon::refraction_angle(refraction, altitude)
    }

    /// See [`horizon::inverse_refraction_angle`].
    pub fn inverse_refraction_angle(
        &self,
        refraction: Refraction,
        bent_altitude: Degree,
    ) -> Result<Degree, OrreryError> {
        horizon::inverse_refraction_angle(refraction, bent_altitude)
    }
}

/// Builder for [`Orrery`], with validation.
#[derive(Debug, Clone)]
pub struct OrreryBuilder {
    tilt_epsilon: f64,
    stars: Vec<(Body, Hour, Degree, f64)>,
}

impl Default for OrreryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrreryBuilder {
    pub fn new() -> Self {
        OrreryBuilder {
            tilt_epsilon: DEFAULT_TILT_EPSILON,
            stars: Vec::new(),
        }
    }

    pub fn tilt_epsilon(mut self, v: f64) -> Self {
        self.tilt_epsilon = v;
        self
    }

    /// Define a star at construction; later calls for the same slot win.
    pub fn star(mut self, body: Body, ra: Hour, dec: Degree, dist_ly: f64) -> Self {
        self.stars.push((body, ra, dec, dist_ly));
        self
    }

    /// Validate the settings and produce the [`Orrery`].
    ///
    /// Validation rules
    /// -----------------
    /// * `tilt_epsilon` must be finite and non-negative.
    /// * every star goes through [`Orrery::define_star`].
    pub fn build(self) -> Result<Orrery, OrreryError> {
        if !(self.tilt_epsilon.is_finite() && self.tilt_epsilon >= 0.0) {
            return Err(OrreryError::InvalidParameter(format!(
                "tilt_epsilon must be finite and >= 0, got {}",
                self.tilt_epsilon
            )));
        }

        let mut orrery = Orrery::new();
        orrery.tilt_epsilon = self.tilt_epsilon;
        for (body, ra, dec, dist_ly) in self.stars {
            orrery.define_star(body, ra, dec, dist_ly)?;
        }
        debug!(
            "orrery built: tilt_epsilon = {}, {} star(s) defined",
            orrery.tilt_epsilon,
            orrery.stars.iter().flatten().count()
        );
        Ok(orrery)
    }
}

#[cfg(test)]
mod orrery_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_orrery_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Orrery>();
    }

    #[test]
    fn test_tilt_memo() {
        let orrery = Orrery::new();
        let t1 = Instant::from_ut(100.0).unwrap();
        let a = orrery.e_tilt(&t1);
        assert_eq!(a, compute_e_tilt(t1.tt));
        // within tolerance: same record
        let b = orrery.e_tilt(&Instant::from_ut(100.0 + 1e-7).unwrap());
        assert_eq!(a, b);
        // beyond: recomputed
        let t2 = Instant::from_ut(101.0).unwrap();
        assert_eq!(orrery.e_tilt(&t2), compute_e_tilt(t2.tt));
    }

    #[test]
    fn test_sidereal_memo() {
        let orrery = Orrery::new();
        for ut in [-1000.25, 0.0, 3.75, 8765.4321] {
            let time = Instant::from_ut(ut).unwrap();
            let gast = orrery.sidereal_time(&time);
            assert!((0.0..24.0).contains(&gast));
            assert_eq!(gast, sidereal_time(time.ut, &compute_e_tilt(time.tt)));
            assert_eq!(orrery.sidereal_time(&time), gast);
        }
    }

    #[test]
    fn test_define_star() {
        let mut orrery = Orrery::new();
        assert_eq!(orrery.star(Body::Star1), Err(OrreryError::UndefinedStar(Body::Star1)));

        orrery.define_star(Body::Star1, 6.75, -16.7, 8.6).unwrap();
        assert_abs_diff_eq!(orrery.star(Body::Star1).unwrap().ra, 6.75);

        // redefinition replaces the slot
        orrery.define_star(Body::Star1, 18.6, 38.8, 25.0).unwrap();
        assert_abs_diff_eq!(orrery.star(Body::Star1).unwrap().dec, 38.8);

        // a rejected definition keeps the previous one
        assert!(orrery.define_star(Body::Star1, 25.0, 0.0, 10.0).is_err());
        assert_abs_diff_eq!(orrery.star(Body::Star1).unwrap().ra, 18.6);

        assert_eq!(
            orrery.define_star(Body::Mars, 1.0, 1.0, 10.0),
            Err(OrreryError::UnsupportedBody(Body::Mars, "star definitions"))
        );
    }

    #[test]
    fn test_builder() {
        let orrery = Orrery::builder()
            .tilt_epsilon(0.0)
            .star(Body::Star2, 1.0, 2.0, 3.0)
            .build()
            .unwrap();
        assert_eq!(orrery.tilt_epsilon(), 0.0);
        assert!(orrery.star(Body::Star2).is_ok());
        assert!(orrery.star(Body::Star3).is_err());

        assert!(Orrery::builder().tilt_epsilon(-1.0).build().is_err());
        assert!(Orrery::builder().star(Body::Star1, 0.0, 0.0, 0.1).build().is_err());
    }
}
