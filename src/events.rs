//! # Events
//!
//! Searches for the instants at which an angle reaches a target value:
//!
//! * lunar phases and quarters ([`Orrery::search_moon_phase`], [`Orrery::search_moon_quarter`],
//!   [`Orrery::next_moon_quarter`]),
//! * apparent solar longitude, equinoxes and solstices ([`Orrery::search_sun_longitude`],
//!   [`Orrery::seasons`]),
//! * heliocentric longitude of a planet relative to the Earth, i.e. conjunctions and oppositions
//!   ([`Orrery::search_relative_longitude`]).
//!
//! All of them reduce the angle to an offset in `(-180, +180]` that increases through zero at the
//! event, and hand it to [`search`] on a window estimated from the mean angular rate.
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::constants::{Days, Degree, MEAN_SYNODIC_MONTH, SECONDS_PER_DAY};
use crate::coordinates::{finite, longitude_offset};
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::search::{search, SearchOptions};
use crate::time::Instant;

/// Half-width (days) of the window around the mean-motion estimate of a lunar phase.
const MOON_PHASE_UNCERTAINTY: Days = 1.5;

/// A start instant closer than this (degrees) to the target phase counts as already past.
const MOON_PHASE_EPSILON: Degree = 1.0e-4;

/// Iteration cap of [`Orrery::search_relative_longitude`].
const RELATIVE_LONGITUDE_ITERATIONS: usize = 100;

/// One of the four principal lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonQuarter {
    /// 0 new moon, 1 first quarter, 2 full moon, 3 third quarter
    pub quarter: u8,
    pub time: Instant,
}

/// Equinoxes and solstices of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonsInfo {
    pub mar_equinox: Instant,
    pub jun_solstice: Instant,
    pub sep_equinox: Instant,
    pub dec_solstice: Instant,
}

impl Orrery {
    /// Find the next (or previous) instant the Moon reaches a phase angle.
    ///
    /// Arguments
    /// ---------
    /// * `target_lon`: phase angle in degrees, see [`Orrery::moon_phase`]
    /// * `start`: where the search begins
    /// * `limit_days`: how far to look; a negative value searches backward
    ///
    /// Return
    /// ------
    /// * `Ok(Some(t))` to 0.1 s, `Ok(None)` if the event does not fall within the limit
    ///
    /// A start instant already on the target phase does not count: the search moves on to the
    /// following (or preceding) lunation.
    pub fn search_moon_phase(
        &self,
        target_lon: Degree,
        start: &Instant,
        limit_days: Days,
    ) -> Result<Option<Instant>, OrreryError> {
        finite(target_lon, "target phase angle")?;
        finite(limit_days, "search limit")?;
        let moon_offset = |t: &Instant| -> Result<Degree, OrreryError> {
            Ok(longitude_offset(self.moon_phase(t)? - target_lon))
        };

        let mut ya = moon_offset(start)?;
        let (dt1, dt2) = if limit_days < 0.0 {
            if ya < MOON_PHASE_EPSILON {
                ya += 360.0;
            }
            let est_dt = -(MEAN_SYNODIC_MONTH * ya) / 360.0;
            let dt2 = est_dt + MOON_PHASE_UNCERTAINTY;
            if dt2 < limit_days {
                return Ok(None);
            }
            ((est_dt - MOON_PHASE_UNCERTAINTY).max(limit_days), dt2)
        } else {
            if ya > -MOON_PHASE_EPSILON {
                ya -= 360.0;
            }
            let est_dt = -(MEAN_SYNODIC_MONTH * ya) / 360.0;
            let dt1 = est_dt - MOON_PHASE_UNCERTAINTY;
            if dt1 > limit_days {
                return Ok(None);
            }
            (dt1, (est_dt + MOON_PHASE_UNCERTAINTY).min(limit_days))
        };

        let options = SearchOptions {
            dt_tolerance_seconds: 0.1,
            ..SearchOptions::default()
        };
        search(
            moon_offset,
            start.add_days(dt1),
            start.add_days(dt2),
            &options,
        )
    }

    /// First lunar quarter after `start`.
    pub fn search_moon_quarter(&self, start: &Instant) -> Result<MoonQuarter, OrreryError> {
        let phase = self.moon_phase(start)?;
        let quarter = ((phase / 90.0).floor() as u8 + 1) % 4;
        let time = self
            .search_moon_phase(90.0 * f64::from(quarter), start, 10.0)?
            .ok_or_else(|| {
                OrreryError::NonConvergence(format!("moon quarter {quarter} after {start}"))
            })?;
        Ok(MoonQuarter { quarter, time })
    }

    /// The lunar quarter following `mq`.
    ///
    /// The search restarts six days after `mq.time`, past the current quarter and before the
    /// next one.
    pub fn next_moon_quarter(&self, mq: &MoonQuarter) -> Result<MoonQuarter, OrreryError> {
        self.search_moon_quarter(&mq.time.add_days(6.0))
    }

    /// Find when the apparent ecliptic longitude of the Sun (true equinox of date) reaches
    /// `target_lon`.
    ///
    /// Return
    /// ------
    /// * `Ok(Some(t))` to 0.01 s within `[start, start + limit_days]`, `Ok(None)` otherwise
    pub fn search_sun_longitude(
        &self,
        target_lon: Degree,
        start: &Instant,
        limit_days: Days,
    ) -> Result<Option<Instant>, OrreryError> {
        finite(target_lon, "target solar longitude")?;
        finite(limit_days, "search limit")?;
        let sun_offset = |t: &Instant| -> Result<Degree, OrreryError> {
            Ok(longitude_offset(self.sun_position(t)?.elon - target_lon))
        };
        let options = SearchOptions {
            dt_tolerance_seconds: 0.01,
            ..SearchOptions::default()
        };
        search(sun_offset, *start, start.add_days(limit_days), &options)
    }

    /// Equinoxes and solstices of a calendar year (UTC).
    pub fn seasons(&self, year: i32) -> Result<SeasonsInfo, OrreryError> {
        let find = |target: Degree, month: u8| -> Result<Instant, OrreryError> {
            let start = Instant::from_gregorian(year, month, 10, 0, 0, 0.0)?;
            self.search_sun_longitude(target, &start, 20.0)?
                .ok_or_else(|| {
                    OrreryError::NonConvergence(format!(
                        "solar longitude {target} in {year}-{month:02}"
                    ))
                })
        };
        Ok(SeasonsInfo {
            mar_equinox: find(0.0, 3)?,
            jun_solstice: find(90.0, 6)?,
            sep_equinox: find(180.0, 9)?,
            dec_solstice: find(270.0, 12)?,
        })
    }

    /// Mean time (days) between two identical Sun-Earth-body configurations.
    pub fn synodic_period(&self, body: Body) -> Result<Days, OrreryError> {
        match body {
            Body::Moon => Ok(MEAN_SYNODIC_MONTH),
            Body::Earth => Err(OrreryError::UnsupportedBody(body, "synodic_period")),
            _ => match (Body::Earth.orbital_period(), body.orbital_period()) {
                (Some(earth), Some(period)) => Ok((earth / (earth / period - 1.0)).abs()),
                _ => Err(OrreryError::UnsupportedBody(body, "synodic_period")),
            },
        }
    }

    /// Find when the heliocentric longitude of `body` relative to the Earth reaches a value.
    ///
    /// Arguments
    /// ---------
    /// * `body`: a planet or Pluto
    /// * `target_rel_lon`: 0 for an opposition (superior body) or an inferior conjunction,
    ///   180 for a conjunction or a superior conjunction
    /// * `start`: the search looks forward from here
    /// * `limit_days`: events further than this from `start` give `Ok(None)`
    ///
    /// Return
    /// ------
    /// * the instant to about one second; [`OrreryError::NonConvergence`] after 100 iterations
    ///
    /// The angle is `Earth − body` for superior bodies and `body − Earth` for Mercury and Venus,
    /// so it always increases with time. Each step moves by the remaining angle over the
    /// synodic rate; close to the event the period is rescaled by the observed convergence ratio
    /// to follow eccentric orbits.
    pub fn search_relative_longitude(
        &self,
        body: Body,
        target_rel_lon: Degree,
        start: &Instant,
        limit_days: Days,
    ) -> Result<Option<Instant>, OrreryError> {
        if matches!(body, Body::Earth | Body::Sun | Body::Moon) {
            return Err(OrreryError::UnsupportedBody(body, "search_relative_longitude"));
        }
        finite(target_rel_lon, "target relative longitude")?;
        finite(limit_days, "search limit")?;
        let mut syn = self.synodic_period(body)?;
        let direction = if body.is_superior_planet() { 1.0 } else { -1.0 };

        let rlon_offset = |t: &Instant| -> Result<Degree, OrreryError> {
            let plon = self.ecliptic_longitude(body, t)?;
            let elon = self.ecliptic_longitude(Body::Earth, t)?;
            Ok(longitude_offset(direction * (elon - plon) - target_rel_lon))
        };

        let mut error_angle = rlon_offset(start)?;
        if error_angle > 0.0 {
            error_angle -= 360.0;
        }

        let mut time = *start;
        for _ in 0..RELATIVE_LONGITUDE_ITERATIONS {
            let day_adjust = (-error_angle / 360.0) * syn;
            time = time.add_days(day_adjust);
            if day_adjust.abs() * SECONDS_PER_DAY < 1.0 {
                return Ok((time.ut - start.ut <= limit_days).then_some(time));
            }
            let prev_angle = error_angle;
            error_angle = rlon_offset(&time)?;
            if prev_angle.abs() < 30.0 && prev_angle != error_angle {
                let ratio = prev_angle / (prev_angle - error_angle);
                if ratio > 0.5 && ratio < 2.0 {
                    syn *= ratio;
                }
            }
        }
        Err(OrreryError::NonConvergence(format!(
            "relative longitude {target_rel_lon} of {body} after {start}"
        )))
    }
}

#[cfg(test)]
mod events_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn utc(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Instant {
        Instant::from_gregorian(year, month, day, hour, minute, 0.0).unwrap()
    }

    #[test]
    fn test_non_finite_search_inputs_rejected() {
        let orrery = Orrery::new();
        let start = utc(2024, 1, 1, 0, 0);
        assert_eq!(
            orrery.search_moon_phase(90.0, &start, f64::INFINITY),
            Err(OrreryError::NonFiniteValue("search limit"))
        );
        assert_eq!(
            orrery.search_moon_phase(f64::NAN, &start, 30.0),
            Err(OrreryError::NonFiniteValue("target phase angle"))
        );
        assert_eq!(
            orrery.search_sun_longitude(0.0, &start, f64::NAN),
            Err(OrreryError::NonFiniteValue("search limit"))
        );
        assert_eq!(
            orrery.search_relative_longitude(Body::Mars, f64::INFINITY, &start, 800.0),
            Err(OrreryError::NonFiniteValue("target relative longitude"))
        );
    }

    #[test]
    fn test_full_and_new_moon_2024() {
        let orrery = Orrery::new();
        let full = orrery.moon_phase(&utc(2024, 1, 25, 17, 54)).unwrap();
        assert_abs_diff_eq!(full, 180.0, epsilon = 1.0);
        let new = orrery.moon_phase(&utc(2024, 1, 11, 11, 57)).unwrap();
        assert_abs_diff_eq!(longitude_offset(new), 0.0, epsilon = 1.0);
    }

    #[test]
    fn test_search_moon_phase_forward_and_backward() {
        let orrery = Orrery::new();
        let start = utc(2024, 1, 1, 0, 0);
        let full = orrery.search_moon_phase(180.0, &start, 40.0).unwrap().unwrap();
        // 2024-01-25 17:54 UTC
        assert_abs_diff_eq!(full.ut, utc(2024, 1, 25, 17, 54).ut, epsilon = 4.0 / 1440.0);

        let back = orrery.search_moon_phase(180.0, &start, -40.0).unwrap().unwrap();
        // 2023-12-27 00:33 UTC
        assert_abs_diff_eq!(back.ut, utc(2023, 12, 27, 0, 33).ut, epsilon = 4.0 / 1440.0);

        assert!(orrery.search_moon_phase(180.0, &start, 5.0).unwrap().is_none());
    }

    #[test]
    fn test_chained_new_moons() {
        let orrery = Orrery::new();
        let mut time = utc(2020, 1, 1, 0, 0);
        let mut previous: Option<Instant> = None;
        for _ in 0..24 {
            let found = orrery.search_moon_phase(0.0, &time, 40.0).unwrap().unwrap();
            if let Some(prev) = previous {
                assert_abs_diff_eq!(found.ut - prev.ut, MEAN_SYNODIC_MONTH, epsilon = 0.5);
            }
            previous = Some(found);
            time = found;
        }
    }

    #[test]
    fn test_moon_quarters_cycle() {
        let orrery = Orrery::new();
        let mut mq = orrery.search_moon_quarter(&utc(2024, 1, 1, 0, 0)).unwrap();
        // third quarter, 2024-01-04 03:30 UTC
        assert_eq!(mq.quarter, 3);
        assert_abs_diff_eq!(mq.time.ut, utc(2024, 1, 4, 3, 30).ut, epsilon = 4.0 / 1440.0);
        for _ in 0..12 {
            let next = orrery.next_moon_quarter(&mq).unwrap();
            assert_eq!(next.quarter, (mq.quarter + 1) % 4);
            assert!(next.time.ut > mq.time.ut + 5.0);
            mq = next;
        }
    }

    #[test]
    fn test_seasons_2024() {
        let orrery = Orrery::new();
        let seasons = orrery.seasons(2024).unwrap();
        let tol = 5.0 / 1440.0;
        assert_abs_diff_eq!(seasons.mar_equinox.ut, utc(2024, 3, 20, 3, 6).ut, epsilon = tol);
        assert_abs_diff_eq!(seasons.jun_solstice.ut, utc(2024, 6, 20, 20, 51).ut, epsilon = tol);
        assert_abs_diff_eq!(seasons.sep_equinox.ut, utc(2024, 9, 22, 12, 44).ut, epsilon = tol);
        assert_abs_diff_eq!(seasons.dec_solstice.ut, utc(2024, 12, 21, 9, 20).ut, epsilon = tol);
    }

    #[test]
    fn test_synodic_period() {
        let orrery = Orrery::new();
        assert_abs_diff_eq!(orrery.synodic_period(Body::Mars).unwrap(), 779.9, epsilon = 0.5);
        assert_abs_diff_eq!(orrery.synodic_period(Body::Venus).unwrap(), 583.9, epsilon = 0.5);
        assert_eq!(orrery.synodic_period(Body::Moon).unwrap(), MEAN_SYNODIC_MONTH);
        assert!(orrery.synodic_period(Body::Earth).is_err());
        assert!(orrery.synodic_period(Body::SSB).is_err());
    }

    #[test]
    fn test_mars_opposition_2020() {
        let orrery = Orrery::new();
        let start = utc(2020, 1, 1, 0, 0);
        let opposition = orrery
            .search_relative_longitude(Body::Mars, 0.0, &start, 400.0)
            .unwrap()
            .unwrap();
        // geocentric opposition 2020-10-13 23:26 UTC
        assert_abs_diff_eq!(opposition.ut, utc(2020, 10, 13, 23, 26).ut, epsilon = 0.5);

        assert!(orrery
            .search_relative_longitude(Body::Mars, 0.0, &start, 100.0)
            .unwrap()
            .is_none());
        assert!(orrery
            .search_relative_longitude(Body::Moon, 0.0, &start, 100.0)
            .is_err());
    }
}
