//! # orrery
//!
//! Positions of the Sun, the Moon, the planets and Pluto, frame conversions, and searches for
//! lunar phases, equinoxes, solstices and planetary conjunctions.
//!
//! Every query is a method of [`orrery::Orrery`], which holds the per-instant memos, the Pluto
//! integrator and the user-defined stars.
pub mod body;
pub mod constants;
pub mod coordinates;
pub mod earth_orientation;
pub mod ephemeris;
pub mod events;
pub mod illumination;
pub mod jupiter_moons;
pub mod moon;
pub mod observers;
pub mod orrery;
pub mod orrery_errors;
pub mod pluto;
pub mod ref_system;
pub mod search;
pub mod series;
pub mod stars;
pub mod time;
pub mod vsop;
