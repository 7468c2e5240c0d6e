//! # Trigonometric series evaluator
//!
//! The planetary and lunar theories are written as sums of periodic terms. Two shapes are
//! supported:
//!
//! * [`Series`]: Poisson series `Σₖ tᵏ · Σᵢ Aᵢ·cos(Bᵢ + Cᵢ·t)` (VSOP style), evaluated by
//!   [`evaluate`] and differentiated analytically by [`evaluate_derivative`],
//! * [`ArgumentTerm`] tables: sums of sines/cosines of integer combinations of fundamental
//!   arguments (lunar style), folded by [`fold_arguments`].
//!
//! Terms are always accumulated in table order.
use crate::constants::DPI;

/// One periodic term `amplitude · cos(phase + frequency · t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

impl Term {
    pub const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Term {
            amplitude,
            phase,
            frequency,
        }
    }
}

/// Terms grouped by power of time: `series[k]` is multiplied by `t^k`.
pub type Series = &'static [&'static [Term]];

/// Evaluate a Poisson series at time `t`.
///
/// Arguments
/// ---------
/// * `series`: the power levels of the series
/// * `t`: normalized time (millennia for the planetary theory)
/// * `clamp_angle`: reduce each power-level contribution modulo 2π before accumulating it,
///   for angular coordinates whose secular part grows to hundreds of radians
///
/// Return
/// ------
/// * the value of the series
pub fn evaluate(series: Series, t: f64, clamp_angle: bool) -> f64 {
    let mut coord = 0.0;
    let mut tpower = 1.0;
    for level in series {
        let sum: f64 = level
            .iter()
            .map(|term| term.amplitude * (term.phase + term.frequency * t).cos())
            .sum();

        let mut incr = tpower * sum;
        if clamp_angle {
            incr %= DPI;
        }
        coord += incr;
        tpower *= t;
    }
    coord
}

/// Analytic time derivative of [`evaluate`], in units of the series per unit of `t`.
///
/// For the level of power `k`:
///
/// ```text
/// d/dt [tᵏ Σ A cos(B + C t)] = k tᵏ⁻¹ Σ A cos(B + C t) − tᵏ Σ A C sin(B + C t)
/// ```
pub fn evaluate_derivative(series: Series, t: f64) -> f64 {
    let mut dpower = 0.0;
    let mut tpower = 1.0;
    let mut rate = 0.0;
    for (k, level) in series.iter().enumerate() {
        let (sin_sum, cos_sum) = level.iter().fold((0.0, 0.0), |(s, c), term| {
            let angle = term.phase + term.frequency * t;
            (
                s + term.amplitude * term.frequency * angle.sin(),
                c + term.amplitude * angle.cos(),
            )
        });
        rate += k as f64 * dpower * cos_sum - tpower * sin_sum;
        dpower = tpower;
        tpower *= t;
    }
    rate
}

/// A term whose argument is an integer combination of four fundamental angles.
///
/// The second multiplier applies to the solar mean anomaly: the term is scaled by `e^|m|`
/// where `e` is the eccentricity factor passed to [`fold_arguments`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArgumentTerm {
    pub multipliers: [i8; 4],
    pub sin_coefficient: f64,
    pub cos_coefficient: f64,
}

impl ArgumentTerm {
    pub const fn new(multipliers: [i8; 4], sin_coefficient: f64, cos_coefficient: f64) -> Self {
        ArgumentTerm {
            multipliers,
            sin_coefficient,
            cos_coefficient,
        }
    }
}

/// Fold a table of [`ArgumentTerm`]s.
///
/// Arguments
/// ---------
/// * `terms`: the table, in the order it must be summed
/// * `angles`: the four fundamental arguments in radians
/// * `e`: eccentricity factor applied per unit of the second multiplier
///
/// Return
/// ------
/// * `(Σ sin_coefficient·sin(arg), Σ cos_coefficient·cos(arg))`
pub fn fold_arguments(terms: &[ArgumentTerm], angles: &[f64; 4], e: f64) -> (f64, f64) {
    terms.iter().fold((0.0, 0.0), |(sum_sin, sum_cos), term| {
        let arg: f64 = term
            .multipliers
            .iter()
            .zip(angles)
            .map(|(&m, angle)| m as f64 * angle)
            .sum();
        let scale = e.powi(term.multipliers[1].unsigned_abs() as i32);
        (
            sum_sin + term.sin_coefficient * scale * arg.sin(),
            sum_cos + term.cos_coefficient * scale * arg.cos(),
        )
    })
}

#[cfg(test)]
mod series_test {
    use super::*;

    const LEVEL_0: &[Term] = &[Term::new(2.0, 0.0, 0.0), Term::new(0.5, 1.0, 3.0)];
    const LEVEL_1: &[Term] = &[Term::new(10.0, 0.0, 0.0), Term::new(0.25, 2.0, 7.0)];
    const LEVEL_2: &[Term] = &[Term::new(-0.3, 0.5, 1.5)];
    const SYNTHETIC: Series = &[LEVEL_0, LEVEL_1, LEVEL_2];

    #[test]
    fn test_evaluate_constant_terms() {
        const ONE: &[Term] = &[Term::new(1.5, 0.0, 0.0)];
        const CONSTANT: Series = &[ONE, ONE];
        assert_eq!(evaluate(CONSTANT, 0.0, false), 1.5);
        assert_eq!(evaluate(CONSTANT, 2.0, false), 1.5 + 2.0 * 1.5);
    }

    #[test]
    fn test_evaluate_clamps_each_level() {
        const BIG: &[Term] = &[Term::new(100.0, 0.0, 0.0)];
        const SECULAR: Series = &[BIG];
        let clamped = evaluate(SECULAR, 0.3, true);
        assert!((clamped - 100.0 % DPI).abs() < 1e-12);
        assert_eq!(evaluate(SECULAR, 0.3, false), 100.0);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        for t in [-0.7, -0.1, 0.0, 0.25, 0.9] {
            let numeric =
                (evaluate(SYNTHETIC, t + h, false) - evaluate(SYNTHETIC, t - h, false)) / (2.0 * h);
            let analytic = evaluate_derivative(SYNTHETIC, t);
            assert!(
                (numeric - analytic).abs() < 1e-6,
                "t = {t}: {numeric} vs {analytic}"
            );
        }
    }

    #[test]
    fn test_fold_arguments() {
        let terms = [
            ArgumentTerm::new([0, 0, 1, 0], 2.0, 3.0),
            ArgumentTerm::new([2, -1, 0, 0], 1.0, 0.0),
        ];
        let angles = [0.4, 0.2, 0.3, 1.1];
        let e = 0.9;
        let (s, c) = fold_arguments(&terms, &angles, e);
        assert!((s - (2.0 * 0.3_f64.sin() + e * (0.8_f64 - 0.2).sin())).abs() < 1e-15);
        assert!((c - 3.0 * 0.3_f64.cos()).abs() < 1e-15);
    }
}
