//! # Solar system bodies
//!
//! [`Body`] is the closed set of objects the engine knows about. Every per-body table lookup
//! (series model, mass, orbital period, magnitude formula) is an exhaustive `match` on it.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::orrery_errors::OrreryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Solar system barycenter
    SSB,
    /// Earth/Moon barycenter
    EMB,
    Star1,
    Star2,
    Star3,
    Star4,
    Star5,
    Star6,
    Star7,
    Star8,
}

impl Body {
    /// The planets, Mercury to Pluto, in order of distance from the Sun.
    pub const PLANETS: [Body; 9] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// The user-definable star slots.
    pub const STARS: [Body; 8] = [
        Body::Star1,
        Body::Star2,
        Body::Star3,
        Body::Star4,
        Body::Star5,
        Body::Star6,
        Body::Star7,
        Body::Star8,
    ];

    /// Index of a user-defined star slot, `None` for every other body.
    pub fn star_index(self) -> Option<usize> {
        match self {
            Body::Star1 => Some(0),
            Body::Star2 => Some(1),
            Body::Star3 => Some(2),
            Body::Star4 => Some(3),
            Body::Star5 => Some(4),
            Body::Star6 => Some(5),
            Body::Star7 => Some(6),
            Body::Star8 => Some(7),
            _ => None,
        }
    }

    pub fn is_star(self) -> bool {
        self.star_index().is_some()
    }

    /// Sidereal orbital period in days, for bodies orbiting the Sun.
    pub fn orbital_period(self) -> Option<f64> {
        match self {
            Body::Mercury => Some(87.969),
            Body::Venus => Some(224.701),
            Body::Earth => Some(365.256),
            Body::Mars => Some(686.980),
            Body::Jupiter => Some(4332.589),
            Body::Saturn => Some(10759.22),
            Body::Uranus => Some(30685.4),
            Body::Neptune => Some(60189.0),
            Body::Pluto => Some(90560.0),
            Body::Sun
            | Body::Moon
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

    /// Planets whose orbit lies outside the Earth's.
    pub fn is_superior_planet(self) -> bool {
        matches!(
            self,
            Body::Mars | Body::Jupiter | Body::Saturn | Body::Uranus | Body::Neptune | Body::Pluto
        )
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Body {
    type Err = OrreryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = match s.to_ascii_lowercase().as_str() {
            "sun" => Body::Sun,
            "moon" => Body::Moon,
            "mercury" => Body::Mercury,
            "venus" => Body::Venus,
            "earth" => Body::Earth,
            "mars" => Body::Mars,
            "jupiter" => Body::Jupiter,
            "saturn" => Body::Saturn,
            "uranus" => Body::Uranus,
            "neptune" => Body::Neptune,
            "pluto" => Body::Pluto,
            "ssb" => Body::SSB,
            "emb" => Body::EMB,
            "star1" => Body::Star1,
            "star2" => Body::Star2,
            "star3" => Body::Star3,
            "star4" => Body::Star4,
            "star5" => Body::Star5,
            "star6" => Body::Star6,
            "star7" => Body::Star7,
            "star8" => Body::Star8,
            _ => return Err(OrreryError::UnknownBody(s.to_string())),
        };
        Ok(body)
    }
}

#[cfg(test)]
mod body_test {
    use super::*;

    #[test]
    fn test_parse_body() {
        assert_eq!("Jupiter".parse::<Body>().unwrap(), Body::Jupiter);
        assert_eq!("ssb".parse::<Body>().unwrap(), Body::SSB);
        assert_eq!("STAR3".parse::<Body>().unwrap(), Body::Star3);
        assert_eq!(
            "Vulcan".parse::<Body>(),
            Err(OrreryError::UnknownBody("Vulcan".into()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for body in Body::PLANETS.iter().chain(Body::STARS.iter()) {
            assert_eq!(body.to_string().parse::<Body>().unwrap(), *body);
        }
    }

    #[test]
    fn test_star_slots() {
        assert_eq!(Body::Star1.star_index(), Some(0));
        assert_eq!(Body::Star8.star_index(), Some(7));
        assert_eq!(Body::Moon.star_index(), None);
        assert!(Body::Mars.is_superior_planet());
        assert!(!Body::Venus.is_superior_planet());
    }
}
