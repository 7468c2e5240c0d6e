//! # Generic root search
//!
//! [`search`] finds the instant at which a scalar function of time crosses zero going upward,
//! inside a window `[t1, t2]` that is assumed to contain at most one such crossing.
//!
//! ## Overview
//!
//! Each iteration samples the midpoint and fits a parabola through `f(t1)`, `f(tmid)` and
//! `f(t2)` on a normalized `[-1, +1]` axis:
//!
//! 1. if the parabola has exactly one root inside the window, the function is evaluated there;
//!    when the derivative-scaled error is below tolerance that instant is returned,
//! 2. otherwise, if a window ten times tighter around the candidate still straddles an ascending
//!    sign change, the search continues on that window,
//! 3. otherwise the half containing the sign change is kept (bisection).
//!
//! The search ends with `Ok(None)` when neither half changes sign, and with
//! [`OrreryError::NonConvergence`] after `iter_limit` iterations.
use log::trace;

use crate::constants::SECONDS_PER_DAY;
use crate::orrery_errors::OrreryError;
use crate::time::Instant;

/// Tuning of [`search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Time resolution of the answer, in seconds
    pub dt_tolerance_seconds: f64,
    /// Already known `f(t1)`, saves one evaluation
    pub init_f1: Option<f64>,
    /// Maximum number of iterations
    pub iter_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            dt_tolerance_seconds: 1.0,
            init_f1: None,
            iter_limit: 20,
        }
    }
}

impl SearchOptions {
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::new()
    }
}

/// Builder for [`SearchOptions`], with validation.
#[derive(Debug, Clone, Default)]
pub struct SearchOptionsBuilder {
    options: SearchOptions,
}

impl SearchOptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: SearchOptions::default(),
        }
    }

    pub fn dt_tolerance_seconds(mut self, v: f64) -> Self {
        self.options.dt_tolerance_seconds = v;
        self
    }

    pub fn init_f1(mut self, v: f64) -> Self {
        self.options.init_f1 = Some(v);
        self
    }

    pub fn iter_limit(mut self, v: usize) -> Self {
        self.options.iter_limit = v;
        self
    }

    /// Finalize the options.
    ///
    /// Validation rules
    /// -----------------
    /// * `dt_tolerance_seconds` must be finite and strictly positive.
    /// * `init_f1`, when given, must be finite.
    /// * `iter_limit >= 1`.
    pub fn build(self) -> Result<SearchOptions, OrreryError> {
        let o = &self.options;
        if !(o.dt_tolerance_seconds.is_finite() && o.dt_tolerance_seconds > 0.0) {
            return Err(OrreryError::InvalidParameter(format!(
                "dt_tolerance_seconds must be finite and > 0, got {}",
                o.dt_tolerance_seconds
            )));
        }
        if o.init_f1.is_some_and(|f| !f.is_finite()) {
            return Err(OrreryError::NonFiniteValue("init_f1"));
        }
        if o.iter_limit == 0 {
            return Err(OrreryError::InvalidParameter(
                "iter_limit must be >= 1".into(),
            ));
        }
        Ok(self.options)
    }
}

/// Parabola through `(-1, fa)`, `(0, fm)`, `(+1, fb)` on the axis `t = tm + x·dt`.
///
/// Return
/// ------
/// * `Some((t, df/dt))` at the unique root with `x ∈ [-1, +1]`, `None` when there is no root
///   in range or two of them
fn quad_interp(tm: f64, dt: f64, fa: f64, fm: f64, fb: f64) -> Option<(f64, f64)> {
    let q = (fb + fa) / 2.0 - fm;
    let r = (fb - fa) / 2.0;
    let s = fm;
    let in_range = |x: f64| (-1.0..=1.0).contains(&x);

    let x = if q == 0.0 {
        if r == 0.0 {
            return None;
        }
        let x = -s / r;
        if !in_range(x) {
            return None;
        }
        x
    } else {
        let u = r * r - 4.0 * q * s;
        if u <= 0.0 {
            return None;
        }
        let ru = u.sqrt();
        let x1 = (-r + ru) / (2.0 * q);
        let x2 = (-r - ru) / (2.0 * q);
        match (in_range(x1), in_range(x2)) {
            (true, false) => x1,
            (false, true) => x2,
            _ => return None,
        }
    };
    Some((tm + x * dt, (2.0 * q * x + r) / dt))
}

/// Find the ascending zero crossing of `f` between `t1` and `t2`.
///
/// Arguments
/// ---------
/// * `f`: the function of time, negative before the event and non-negative after it
/// * `t1`, `t2`: the window, `t1` before `t2`
/// * `options`: tolerance, iteration limit and an optional known `f(t1)`
///
/// Return
/// ------
/// * `Ok(Some(t))` with `t` within `dt_tolerance_seconds` of the crossing
/// * `Ok(None)` if the window holds no ascending sign change
/// * `Err(..)` if `f` fails or the iteration limit is reached
///
/// # See also
/// * [`SearchOptions`]
pub fn search<F>(
    mut f: F,
    t1: Instant,
    t2: Instant,
    options: &SearchOptions,
) -> Result<Option<Instant>, OrreryError>
where
    F: FnMut(&Instant) -> Result<f64, OrreryError>,
{
    let dt_days = (options.dt_tolerance_seconds / SECONDS_PER_DAY).abs();
    let mut t1 = t1;
    let mut t2 = t2;
    let mut f1 = match options.init_f1 {
        Some(v) => v,
        None => f(&t1)?,
    };
    let mut f2 = f(&t2)?;
    let mut fmid = 0.0;
    let mut calc_fmid = true;

    for iter in 1..=options.iter_limit {
        let dt = (t2.tt - t1.tt) / 2.0;
        let tmid = t1.add_days(dt);
        if dt.abs() < dt_days {
            return Ok(Some(tmid));
        }

        if calc_fmid {
            fmid = f(&tmid)?;
        } else {
            calc_fmid = true;
        }
        trace!(
            "search iteration {iter}: [{}, {}] f = ({f1:e}, {fmid:e}, {f2:e})",
            t1.ut,
            t2.ut
        );

        if let Some((q_ut, q_df_dt)) = quad_interp(tmid.ut, t2.ut - tmid.ut, f1, fmid, f2) {
            let tq = Instant::from_ut(q_ut)?;
            let fq = f(&tq)?;
            if q_df_dt != 0.0 {
                let dt_guess = (fq / q_df_dt).abs();
                if dt_guess < dt_days {
                    return Ok(Some(tq));
                }
                let dt_guess = 1.2 * dt_guess;
                if dt_guess < dt / 10.0 {
                    let tleft = tq.add_days(-dt_guess);
                    let tright = tq.add_days(dt_guess);
                    let inside = |t: &Instant| (t.ut - t1.ut) * (t.ut - t2.ut) < 0.0;
                    if inside(&tleft) && inside(&tright) {
                        let fleft = f(&tleft)?;
                        let fright = f(&tright)?;
                        if fleft < 0.0 && fright >= 0.0 {
                            f1 = fleft;
                            f2 = fright;
                            t1 = tleft;
                            t2 = tright;
                            fmid = fq;
                            calc_fmid = false;
                            continue;
                        }
                    }
                }
            }
        }

        if f1 < 0.0 && fmid >= 0.0 {
            t2 = tmid;
            f2 = fmid;
        } else if fmid < 0.0 && f2 >= 0.0 {
            t1 = tmid;
            f1 = fmid;
        } else {
            return Ok(None);
        }
    }

    Err(OrreryError::NonConvergence(format!(
        "search did not converge in {} iterations",
        options.iter_limit
    )))
}

#[cfg(test)]
mod search_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_quad_interp() {
        // f(x) = x - 0.5 sampled at -1, 0, 1
        let (t, slope) = quad_interp(10.0, 2.0, -1.5, -0.5, 0.5).unwrap();
        assert_abs_diff_eq!(t, 11.0, epsilon = 1e-15);
        assert_abs_diff_eq!(slope, 0.5, epsilon = 1e-15);
        // two roots in range
        assert!(quad_interp(0.0, 1.0, 1.0, -1.0, 1.0).is_none());
        // no root
        assert!(quad_interp(0.0, 1.0, 1.0, 2.0, 3.0).is_none());
    }

    #[test]
    fn test_search_sinusoid() {
        let root = 12.345;
        let f = |t: &Instant| Ok(((t.ut - root) * 0.2).sin());
        let found = search(
            f,
            Instant::from_ut(5.0).unwrap(),
            Instant::from_ut(20.0).unwrap(),
            &SearchOptions::default(),
        )
        .unwrap()
        .unwrap();
        assert_abs_diff_eq!(found.ut, root, epsilon = 1.0 / SECONDS_PER_DAY);
    }

    #[test]
    fn test_search_polynomial_fine_tolerance() {
        let f = |t: &Instant| Ok(t.ut.powi(3) - 2.0);
        let options = SearchOptions::builder()
            .dt_tolerance_seconds(0.01)
            .iter_limit(50)
            .build()
            .unwrap();
        let found = search(f, Instant::from_ut(0.0).unwrap(), Instant::from_ut(3.0).unwrap(), &options)
            .unwrap()
            .unwrap();
        assert_abs_diff_eq!(found.ut, 2f64.cbrt(), epsilon = 0.05 / SECONDS_PER_DAY);
    }

    #[test]
    fn test_search_no_sign_change() {
        let f = |t: &Instant| Ok(1.0 + t.ut * t.ut);
        let found = search(
            f,
            Instant::from_ut(-2.0).unwrap(),
            Instant::from_ut(3.0).unwrap(),
            &SearchOptions::default(),
        )
        .unwrap();
        assert!(found.is_none());

        // descending crossing only
        let f = |t: &Instant| Ok(-t.ut);
        let found = search(
            f,
            Instant::from_ut(-1.0).unwrap(),
            Instant::from_ut(1.0).unwrap(),
            &SearchOptions::default(),
        )
        .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_search_propagates_errors() {
        let f = |_: &Instant| Err(OrreryError::ZeroLengthVector);
        let found = search(
            f,
            Instant::from_ut(0.0).unwrap(),
            Instant::from_ut(1.0).unwrap(),
            &SearchOptions::default(),
        );
        assert_eq!(found, Err(OrreryError::ZeroLengthVector));
    }

    #[test]
    fn test_search_iteration_limit() {
        // a step function defeats the parabola, bisection needs ~21 halvings of 15 days
        let f = |t: &Instant| Ok(if t.ut < 7.77 { -1.0 } else { 1.0 });
        let options = SearchOptions::builder().iter_limit(3).build().unwrap();
        let found = search(f, Instant::from_ut(0.0).unwrap(), Instant::from_ut(15.0).unwrap(), &options);
        assert!(matches!(found, Err(OrreryError::NonConvergence(_))));
    }

    #[test]
    fn test_options_validation() {
        assert_eq!(SearchOptions::builder().build().unwrap(), SearchOptions::default());
        assert!(SearchOptions::builder().dt_tolerance_seconds(0.0).build().is_err());
        assert!(SearchOptions::builder().iter_limit(0).build().is_err());
        assert!(SearchOptions::builder().init_f1(f64::NAN).build().is_err());
    }
}
