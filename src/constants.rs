//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **unit type
//! aliases** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants (AU, light speed, Earth ellipsoid, GM values)
//! - Unit conversions (degrees ↔ radians, hours ↔ radians, days ↔ seconds)
//! - Epoch offsets between day counts used by the time model
//! - Core type aliases used across the crate
//!
//! All day counts in the crate are measured from the J2000 epoch
//! (2000-01-01 12:00:00), i.e. `MJD - T2000`.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days per Julian millennium, the time unit of the planetary series
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Days per tropical year, used by the Delta-T model
pub const DAYS_PER_TROPICAL_YEAR: f64 = 365.24217;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Arcseconds in a full circle
pub const ARCSEC_PER_CIRCLE: f64 = 1_296_000.0;

/// Earth equatorial radius in kilometers (IERS 2003)
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.1366;

/// Earth flattening (WGS84)
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257223563;

/// Ratio of the polar to the equatorial Earth radius
pub const EARTH_AXIS_RATIO: f64 = 1.0 - EARTH_FLATTENING;

/// Earth polar radius in kilometers
pub const EARTH_POLAR_RADIUS_KM: f64 = EARTH_EQUATORIAL_RADIUS_KM * EARTH_AXIS_RATIO;

/// Earth angular velocity in rad/s
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.292115e-5;

/// Earth/Moon mass ratio
pub const EARTH_MOON_MASS_RATIO: f64 = 81.30056;

/// Mean lunar radius in kilometers
pub const MOON_MEAN_RADIUS_KM: f64 = 1737.4;

/// Mean Earth-Moon distance in kilometers, reference of the lunar magnitude
pub const MOON_MEAN_DISTANCE_KM: f64 = 385_000.6;

/// Jupiter equatorial radius in kilometers
pub const JUPITER_EQUATORIAL_RADIUS_KM: f64 = 71_492.0;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Speed of light in astronomical units per day
pub const VLIGHT_AU: f64 = VLIGHT / AU * SECONDS_PER_DAY;

/// Astronomical units per light year
pub const AU_PER_LY: f64 = 63_241.077_088_075_46;

/// Astronomical units per parsec
pub const AU_PER_PARSEC: f64 = 206_264.806_247;

/// Mean synodic month in days
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588;

// -------------------------------------------------------------------------------------------------
// Gravitational parameters (AU³/day²)
// -------------------------------------------------------------------------------------------------

pub const SUN_GM: f64 = 0.2959122082855911e-03;
pub const JUPITER_GM: f64 = 0.2825345909524226e-06;
pub const SATURN_GM: f64 = 0.8459715185680659e-07;
pub const URANUS_GM: f64 = 0.1292024916781969e-07;
pub const NEPTUNE_GM: f64 = 0.1524358900784276e-07;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Sidereal or solar hours
pub type Hour = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Fractional days since J2000
pub type Days = f64;
