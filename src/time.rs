//! # Time model
//!
//! Every computation in the crate is keyed on an [`Instant`], which carries the same moment in
//! two time scales:
//!
//! * **UT** (Universal Time): follows the rotation of the Earth, used for sidereal time,
//! * **TT** (Terrestrial Time): uniform, used by every dynamical model.
//!
//! Both are fractional days since the J2000 epoch (2000-01-01 12:00:00). TT is derived from UT
//! with the Espenak–Meeus Delta-T polynomials ([`delta_t`]).
//!
//! ## Overview
//!
//! - Calendar parsing and projection use [`hifitime::Epoch`] on the UTC scale,
//! - [`Instant::add_days`] shifts UT and re-derives TT,
//! - [`Instant::from_terrestrial_time`] inverts the Delta-T model numerically.
use std::fmt;
use std::str::FromStr;

use hifitime::{Epoch, TimeScale};
use serde::{Deserialize, Serialize};

use crate::constants::{
    Days, DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, DAYS_PER_TROPICAL_YEAR, SECONDS_PER_DAY, T2000,
};
use crate::orrery_errors::OrreryError;

/// A moment in time, expressed in both Universal Time and Terrestrial Time.
///
/// Once built an `Instant` never changes: shifting it produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Instant {
    /// UT days since J2000
    pub ut: Days,
    /// TT days since J2000
    pub tt: Days,
}

impl Instant {
    /// Build an instant from a UT day count since J2000.
    ///
    /// Return
    /// ------
    /// * the instant, or [`OrreryError::NonFiniteValue`] for a NaN or infinite `ut`, or one so far
    ///   out that TT overflows
    pub fn from_ut(ut: Days) -> Result<Instant, OrreryError> {
        if !ut.is_finite() {
            return Err(OrreryError::NonFiniteValue("universal time"));
        }
        let time = Instant::at_ut(ut);
        // the Delta-T parabola overflows long before `ut` does
        if !time.tt.is_finite() {
            return Err(OrreryError::NonFiniteValue("terrestrial time"));
        }
        Ok(time)
    }

    /// Instant at an already validated UT.
    fn at_ut(ut: Days) -> Instant {
        Instant {
            ut,
            tt: terrestrial_time(ut),
        }
    }

    /// Build an instant from a [`hifitime::Epoch`], read on the UTC scale.
    pub fn from_epoch(epoch: &Epoch) -> Instant {
        Instant::at_ut(epoch.to_mjd_utc_days() - T2000)
    }

    /// Build an instant from UTC Gregorian calendar fields.
    ///
    /// Arguments
    /// ---------
    /// * `year`, `month`, `day`: calendar date
    /// * `hour`, `minute`: time of day
    /// * `second`: seconds, fractional part kept to the nanosecond
    ///
    /// Return
    /// ------
    /// * the instant, or [`OrreryError::InvalidDateTime`] for an impossible date
    pub fn from_gregorian(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Instant, OrreryError> {
        if !second.is_finite() || second < 0.0 {
            return Err(OrreryError::NonFiniteValue("second"));
        }
        let whole = second.trunc();
        let nanos = ((second - whole) * 1e9).round() as u32;
        let epoch =
            Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, whole as u8, nanos)?;
        Ok(Instant::from_epoch(&epoch))
    }

    /// Build an instant from a date in the format `YYYY MM DD.FFFFF` (UTC).
    ///
    /// Argument
    /// --------
    /// * `date_str`: year, month and fractional day separated by whitespace
    ///
    /// Return
    /// ------
    /// * the instant, or [`OrreryError::InvalidDateFormat`] when a field is missing or malformed
    pub fn from_frac_date(date_str: &str) -> Result<Instant, OrreryError> {
        let parts: Vec<&str> = date_str.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(OrreryError::InvalidDateFormat(format!(
                "expected YYYY MM DD.FFFFF, got '{date_str}'"
            )));
        }

        let invalid = |field: &str| OrreryError::InvalidDateFormat(format!("invalid {field}"));
        let year = i32::from_str(parts[0]).map_err(|_| invalid("year"))?;
        let month = u8::from_str(parts[1]).map_err(|_| invalid("month"))?;
        let day_fraction = f64::from_str(parts[2]).map_err(|_| invalid("fractional day"))?;
        if !(1.0..32.0).contains(&day_fraction) {
            return Err(invalid("fractional day"));
        }

        let day = day_fraction.trunc();
        let midnight = Instant::from_gregorian(year, month, day as u8, 0, 0, 0.0)?;
        Ok(midnight.add_days(day_fraction - day))
    }

    /// Build the instant whose Terrestrial Time is `tt`.
    ///
    /// Delta-T depends on UT, so the UT value is found by iterating [`Instant::add_days`] on the
    /// residual until it is below 1e-12 day.
    ///
    /// Return
    /// ------
    /// * the instant, or [`OrreryError::NonConvergence`] if 20 corrections are not enough
    pub fn from_terrestrial_time(tt: Days) -> Result<Instant, OrreryError> {
        if !tt.is_finite() {
            return Err(OrreryError::NonFiniteValue("terrestrial time"));
        }
        let mut time = Instant::at_ut(tt);
        for _ in 0..20 {
            let err = tt - time.tt;
            if err.abs() < 1e-12 {
                return Ok(time);
            }
            time = time.add_days(err);
        }
        Err(OrreryError::NonConvergence(format!(
            "Instant::from_terrestrial_time({tt})"
        )))
    }

    /// Shift this instant by a finite number of `days`.
    ///
    /// The shift is applied to UT and TT is re-derived, so the TT interval differs from `days`
    /// by the change of Delta-T over the interval (about 1e-7 of it). Public queries reject non-finite
    /// day counts before shifting.
    pub fn add_days(&self, days: Days) -> Instant {
        Instant::at_ut(self.ut + days)
    }

    /// Calendar projection of this instant on the UTC scale.
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_mjd_in_time_scale(self.ut + T2000, TimeScale::UTC)
    }

    /// TT in Julian centuries since J2000.
    pub fn julian_centuries(&self) -> f64 {
        self.tt / DAYS_PER_CENTURY
    }

    /// TT in Julian millennia since J2000.
    pub fn julian_millennia(&self) -> f64 {
        self.tt / DAYS_PER_MILLENNIUM
    }
}

impl TryFrom<Days> for Instant {
    type Error = OrreryError;

    fn try_from(ut: Days) -> Result<Self, Self::Error> {
        Instant::from_ut(ut)
    }
}

impl From<Epoch> for Instant {
    fn from(epoch: Epoch) -> Self {
        Instant::from_epoch(&epoch)
    }
}

impl FromStr for Instant {
    type Err = OrreryError;

    /// Parse any timestamp accepted by [`hifitime::Epoch`], e.g. `2024-01-25T17:54:00 UTC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epoch = Epoch::from_str(s)?;
        Ok(Instant::from_epoch(&epoch))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_epoch())
    }
}

/// Terrestrial Time corresponding to a UT day count.
pub fn terrestrial_time(ut: Days) -> Days {
    ut + delta_t(ut) / SECONDS_PER_DAY
}

/// Delta-T = TT - UT in seconds, from the Espenak–Meeus piecewise polynomials.
///
/// Argument
/// --------
/// * `ut`: UT days since J2000
///
/// Return
/// ------
/// * TT - UT in seconds
///
/// The polynomial is selected on the decimal year `2000 + (ut - 14) / 365.24217`. Before -500
/// and after 2150 a long-term parabola is used; between 2050 and 2150 the parabola is blended
/// with the 2050 value.
pub fn delta_t(ut: Days) -> f64 {
    let y = 2000.0 + (ut - 14.0) / DAYS_PER_TROPICAL_YEAR;

    if y < -500.0 {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 500.0 {
        let u = y / 100.0;
        return horner(
            u,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        );
    }
    if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        return horner(
            u,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        );
    }
    if y < 1700.0 {
        let u = y - 1600.0;
        return horner(u, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]);
    }
    if y < 1800.0 {
        let u = y - 1700.0;
        return horner(
            u,
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
        );
    }
    if y < 1860.0 {
        let u = y - 1800.0;
        return horner(
            u,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        );
    }
    if y < 1900.0 {
        let u = y - 1860.0;
        return horner(
            u,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
        );
    }
    if y < 1920.0 {
        let u = y - 1900.0;
        return horner(u, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197]);
    }
    if y < 1941.0 {
        let u = y - 1920.0;
        return horner(u, &[21.20, 0.84493, -0.076100, 0.0020936]);
    }
    if y < 1961.0 {
        let u = y - 1950.0;
        return horner(u, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]);
    }
    if y < 1986.0 {
        let u = y - 1975.0;
        return horner(u, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]);
    }
    if y < 2005.0 {
        let u = y - 2000.0;
        return horner(
            u,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        );
    }
    if y < 2050.0 {
        let u = y - 2000.0;
        return horner(u, &[62.92, 0.32217, 0.005589]);
    }
    let u = (y - 1820.0) / 100.0;
    if y < 2150.0 {
        return -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y);
    }
    -20.0 + 32.0 * u * u
}

/// Evaluate `c[0] + c[1]·u + c[2]·u² + …` in Horner form.
fn horner(u: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * u + c)
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_delta_t_reference_values() {
        // y = 2000 exactly
        assert_eq!(delta_t(14.0), 63.86);

        let ut_1900 = 14.0 - 100.0 * DAYS_PER_TROPICAL_YEAR;
        assert!((delta_t(ut_1900) - -2.79).abs() < 1e-6);

        let ut_1975 = 14.0 - 25.0 * DAYS_PER_TROPICAL_YEAR;
        assert!((delta_t(ut_1975) - 45.45).abs() < 1e-6);
    }

    #[test]
    fn test_delta_t_continuity_at_2050() {
        let ut_2050 = 14.0 + 50.0 * DAYS_PER_TROPICAL_YEAR;
        let before = delta_t(ut_2050 - 1e-6);
        let after = delta_t(ut_2050 + 1e-6);
        assert!((before - after).abs() < 0.01, "{before} vs {after}");
    }

    #[test]
    fn test_delta_t_far_past_and_future() {
        // long-term parabola is symmetric around 1820
        let ut_3000 = 14.0 + 1000.0 * DAYS_PER_TROPICAL_YEAR;
        let ut_m2000 = 14.0 - 4000.0 * DAYS_PER_TROPICAL_YEAR;
        let u = (3000.0 - 1820.0) / 100.0;
        assert!((delta_t(ut_3000) - (-20.0 + 32.0 * u * u)).abs() < 1e-6);
        assert!(delta_t(ut_m2000) > 40_000.0);
    }

    #[test]
    fn test_terrestrial_time() {
        let t = Instant::from_ut(14.0).unwrap();
        assert_eq!(t.tt, 14.0 + 63.86 / 86400.0);
    }

    #[test]
    fn test_from_terrestrial_time_round_trip() {
        for ut in [-700_000.0, -36_500.0, 0.0, 8790.25, 250_000.0] {
            let t = Instant::from_ut(ut).unwrap();
            let back = Instant::from_terrestrial_time(t.tt).unwrap();
            assert!((back.tt - t.tt).abs() < 1e-12);
            assert!((back.ut - ut).abs() < 1e-9);
        }
        assert_eq!(
            Instant::from_terrestrial_time(f64::NAN),
            Err(OrreryError::NonFiniteValue("terrestrial time"))
        );
    }

    #[test]
    fn test_non_finite_ut_rejected() {
        for ut in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                Instant::from_ut(ut),
                Err(OrreryError::NonFiniteValue("universal time"))
            );
            assert!(Instant::try_from(ut).is_err());
        }
        assert_eq!(
            Instant::from_ut(1e300),
            Err(OrreryError::NonFiniteValue("terrestrial time"))
        );
        assert_eq!(Instant::try_from(0.0).unwrap(), Instant::from_ut(0.0).unwrap());
    }

    #[test]
    fn test_add_days() {
        let t = Instant::from_ut(100.0).unwrap();
        let later = t.add_days(29.5);
        assert_eq!(later.ut, 129.5);
        assert!((later.tt - t.tt - 29.5).abs() < 1e-6);
    }

    #[test]
    fn test_parse_calendar() {
        let t: Instant = "2024-01-25T18:00:00 UTC".parse().unwrap();
        assert!((t.ut - (60334.75 - T2000)).abs() < 1e-9);

        let j2000: Instant = "2000-01-01T12:00:00 UTC".parse().unwrap();
        assert!(j2000.ut.abs() < 1e-9);

        let from_fields = Instant::from_gregorian(2024, 1, 25, 18, 0, 0.0).unwrap();
        assert!((from_fields.ut - t.ut).abs() < 1e-9);
    }

    #[test]
    fn test_from_frac_date() {
        let t = Instant::from_frac_date("2021 1 1.5").unwrap();
        assert!((t.ut - (59215.5 - T2000)).abs() < 1e-9);

        let t = Instant::from_frac_date("1976 09 20.93878").unwrap();
        assert!((t.ut - (43041.93878 - T2000)).abs() < 1e-9);

        assert!(Instant::from_frac_date("2021 1").is_err());
        assert!(Instant::from_frac_date("2021 x 1.5").is_err());
    }

    #[test]
    fn test_calendar_projection() {
        let t = Instant::from_ut(0.0).unwrap();
        let (y, m, d, h, mi, s, _) = t.to_epoch().to_gregorian_utc();
        assert_eq!((y, m, d, h, mi, s), (2000, 1, 1, 12, 0, 0));
    }
}
