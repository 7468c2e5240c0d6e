use thiserror::Error;

use crate::body::Body;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Invalid latitude: {0} (expected a value in [-90, +90] degrees)")]
    InvalidLatitude(f64),

    #[error("Invalid right ascension: {0} (expected a value in [0, 24) hours)")]
    InvalidRightAscension(f64),

    #[error("Invalid declination: {0} (expected a value in [-90, +90] degrees)")]
    InvalidDeclination(f64),

    #[error("Invalid star distance: {0} light-years (must be at least 1)")]
    InvalidStarDistance(f64),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Non-finite value for {0}")]
    NonFiniteValue(&'static str),

    #[error("Invalid floating-point value: {0}")]
    InvalidFloatValue(#[from] ordered_float::FloatIsNan),

    #[error("Invalid rotation matrix: {0}")]
    InvalidRotationMatrix(String),

    #[error("Invalid date/time: {0}")]
    InvalidDateTime(#[from] hifitime::HifitimeError),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Unknown body name: {0}")]
    UnknownBody(String),

    #[error("Body {0} is not supported by {1}")]
    UnsupportedBody(Body, &'static str),

    #[error("User-defined star {0} has not been defined")]
    UndefinedStar(Body),

    #[error("Zero-length vector has no direction")]
    ZeroLengthVector,

    #[error("Failed to converge: {0}")]
    NonConvergence(String),

    #[error("Object is too distant for the light-travel solver ({0} days of light time)")]
    LightTravelTooDistant(f64),
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (InvalidLatitude(a), InvalidLatitude(b)) => a == b,
            (InvalidRightAscension(a), InvalidRightAscension(b)) => a == b,
            (InvalidDeclination(a), InvalidDeclination(b)) => a == b,
            (InvalidStarDistance(a), InvalidStarDistance(b)) => a == b,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            (NonFiniteValue(a), NonFiniteValue(b)) => a == b,
            (InvalidRotationMatrix(a), InvalidRotationMatrix(b)) => a == b,
            (InvalidDateFormat(a), InvalidDateFormat(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (UnsupportedBody(a, x), UnsupportedBody(b, y)) => a == b && x == y,
            (UndefinedStar(a), UndefinedStar(b)) => a == b,
            (NonConvergence(a), NonConvergence(b)) => a == b,
            (LightTravelTooDistant(a), LightTravelTooDistant(b)) => a == b,
            (ZeroLengthVector, ZeroLengthVector) => true,

            // not comparable by content: same variant is enough
            (InvalidFloatValue(_), InvalidFloatValue(_)) => true,
            (InvalidDateTime(_), InvalidDateTime(_)) => true,

            _ => false,
        }
    }
}
