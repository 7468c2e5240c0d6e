//! User-defined fixed stars.
//!
//! Eight slots ([`Body::Star1`] … [`Body::Star8`]) can each hold a point in the sky given by its
//! J2000 right ascension, declination and distance. A defined star behaves like any other body in
//! position queries, with zero velocity.
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::constants::{Degree, Hour, AU_PER_LY};
use crate::coordinates::{AstroVector, SphericalCoord};
use crate::orrery_errors::OrreryError;
use crate::time::Instant;

/// J2000 direction and distance of a user star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarDefinition {
    /// Right ascension (sidereal hours, EQJ)
    pub ra: Hour,
    /// Declination (degrees, EQJ)
    pub dec: Degree,
    /// Distance in light-years
    pub dist_ly: f64,
}

impl StarDefinition {
    /// Validate and build a star definition.
    ///
    /// Arguments
    /// ---------
    /// * `ra`: right ascension in `[0, 24)` hours
    /// * `dec`: declination in `[-90, +90]` degrees
    /// * `dist_ly`: distance, at least one light-year
    ///
    /// Return
    /// ------
    /// * the definition, or the matching `Invalid…` error
    pub fn new(ra: Hour, dec: Degree, dist_ly: f64) -> Result<Self, OrreryError> {
        if !ra.is_finite() || !(0.0..24.0).contains(&ra) {
            return Err(OrreryError::InvalidRightAscension(ra));
        }
        if !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
            return Err(OrreryError::InvalidDeclination(dec));
        }
        if !dist_ly.is_finite() || dist_ly < 1.0 {
            return Err(OrreryError::InvalidStarDistance(dist_ly));
        }
        Ok(StarDefinition { ra, dec, dist_ly })
    }

    /// Distance in AU.
    pub fn dist_au(&self) -> f64 {
        self.dist_ly * AU_PER_LY
    }

    /// EQJ position of the star in AU, tagged with `time`.
    pub fn position(&self, time: &Instant) -> AstroVector {
        SphericalCoord {
            lat: self.dec,
            lon: 15.0 * self.ra,
            dist: self.dist_au(),
        }
        .to_vector(*time)
    }
}

/// Slot index of a star body, or [`OrreryError::UnsupportedBody`] for any other body.
pub(crate) fn star_slot(body: Body) -> Result<usize, OrreryError> {
    body.star_index()
        .ok_or(OrreryError::UnsupportedBody(body, "star definitions"))
}

#[cfg(test)]
mod stars_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_star_validation() {
        assert!(StarDefinition::new(0.0, -90.0, 1.0).is_ok());
        assert!(StarDefinition::new(23.999, 90.0, 1e6).is_ok());
        assert_eq!(
            StarDefinition::new(24.0, 0.0, 10.0),
            Err(OrreryError::InvalidRightAscension(24.0))
        );
        assert_eq!(
            StarDefinition::new(-0.1, 0.0, 10.0),
            Err(OrreryError::InvalidRightAscension(-0.1))
        );
        assert_eq!(
            StarDefinition::new(1.0, 90.5, 10.0),
            Err(OrreryError::InvalidDeclination(90.5))
        );
        assert_eq!(
            StarDefinition::new(1.0, 10.0, 0.5),
            Err(OrreryError::InvalidStarDistance(0.5))
        );
        assert!(StarDefinition::new(f64::NAN, 10.0, 5.0).is_err());
    }

    #[test]
    fn test_star_position() {
        // Sirius, 8.6 ly
        let star = StarDefinition::new(6.7525, -16.7161, 8.6).unwrap();
        let v = star.position(&Instant::from_ut(0.0).unwrap());
        assert_relative_eq!(v.length(), 8.6 * AU_PER_LY, max_relative = 1e-12);
        assert!(v.pos.z < 0.0);
        assert!(v.pos.x < 0.0);
    }

    #[test]
    fn test_star_slot() {
        assert_eq!(star_slot(Body::Star3), Ok(2));
        assert!(star_slot(Body::Mars).is_err());
    }
}
