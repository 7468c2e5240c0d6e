//! # Ephemeris queries
//!
//! Positions and velocities of every [`Body`] in EQJ, composed from the planetary series, the
//! lunar theory, the Pluto integrator and the user-defined stars:
//!
//! | query                          | centre                 |
//! |--------------------------------|------------------------|
//! | [`Orrery::helio_vector`]       | Sun                    |
//! | [`Orrery::helio_state`]        | Sun                    |
//! | [`Orrery::bary_state`]         | solar-system barycentre|
//! | [`Orrery::geo_vector`]         | Earth, light-time corrected |
//! | [`Orrery::equator`]            | an observer on the Earth |
//!
//! ## Light-travel time
//!
//! [`Orrery::geo_vector`] looks at the body where it was when the light now reaching the Earth
//! left it: the emission time is refined until two successive estimates agree to 1e-9 day.
//! With aberration, the Earth is taken at the emission time as well, which shifts the apparent
//! direction by the Earth's velocity times the light time.
use nalgebra::Vector3;

use crate::body::Body;
use crate::constants::{Degree, EARTH_MOON_MASS_RATIO, RADEG, VLIGHT_AU};
use crate::coordinates::{
    angle_between, normalize_longitude, AstroVector, EclipticCoord, EquatorialCoord, StateVector,
};
use crate::earth_orientation::{gyration_rot, PrecessDirection};
use crate::moon::{geo_moon, geo_moon_position, geo_moon_state};
use crate::observers::Observer;
use crate::orrery::Orrery;
use crate::orrery_errors::OrreryError;
use crate::pluto::MajorBodies;
use crate::ref_system::rotation_eqj_ecl;
use crate::time::Instant;
use crate::vsop::{vsop_helio_distance, vsop_helio_state, vsop_helio_vector};

/// Successive light-time estimates must agree to this many days.
const LIGHT_TIME_TOLERANCE: f64 = 1.0e-9;

/// Refinements of the emission time before giving up.
const LIGHT_TIME_ITERATIONS: usize = 10;

/// Light travel times above this many days are rejected.
const MAX_LIGHT_TIME: f64 = 1.0;

/// Share of the Earth-Moon vector between the Earth and the Earth-Moon barycentre.
const EMB_FRACTION: f64 = 1.0 / (1.0 + EARTH_MOON_MASS_RATIO);

fn earth_state(time: &Instant) -> Result<StateVector, OrreryError> {
    vsop_helio_state(Body::Earth, time)
}

impl Orrery {
    /// Heliocentric position of a body in EQJ.
    ///
    /// Arguments
    /// ---------
    /// * `body`: any body; user stars must have been defined
    /// * `time`: the instant
    ///
    /// Return
    /// ------
    /// * the position in AU, without light-time correction
    pub fn helio_vector(&self, body: Body, time: &Instant) -> Result<AstroVector, OrreryError> {
        match body {
            Body::Sun => Ok(AstroVector::zero(*time)),
            Body::Mercury
            | Body::Venus
            | Body::Earth
            | Body::Mars
            | Body::Jupiter
            | Body::Saturn
            | Body::Uranus
            | Body::Neptune => vsop_helio_vector(body, time),
            Body::Pluto => {
                let (bary, _) = self.pluto.bary_state(time.tt)?;
                let sun = MajorBodies::at(time.tt).sun;
                Ok(AstroVector::from_position(bary - sun.r, *time))
            }
            Body::Moon => {
                let earth = vsop_helio_vector(Body::Earth, time)?;
                Ok(earth + geo_moon(time))
            }
            Body::EMB => {
                let earth = vsop_helio_vector(Body::Earth, time)?;
                Ok(AstroVector::from_position(
                    earth.pos + geo_moon_position(time.tt) * EMB_FRACTION,
                    *time,
                ))
            }
            Body::SSB => Ok(AstroVector::from_position(
                -MajorBodies::at(time.tt).sun.r,
                *time,
            )),
            Body::Star1
            | Body::Star2
            | Body::Star3
            | Body::Star4
            | Body::Star5
            | Body::Star6
            | Body::Star7
            | Body::Star8 => Ok(self.star(body)?.position(time)),
        }
    }

    /// Heliocentric distance of a body in AU.
    ///
    /// For Mercury … Neptune only the radius series is evaluated.
    pub fn helio_distance(&self, body: Body, time: &Instant) -> Result<f64, OrreryError> {
        match body {
            Body::Sun => Ok(0.0),
            Body::Mercury
            | Body::Venus
            | Body::Earth
            | Body::Mars
            | Body::Jupiter
            | Body::Saturn
            | Body::Uranus
            | Body::Neptune => vsop_helio_distance(body, time),
            Body::Moon
            | Body::Pluto
            | Body::SSB
            | Body::EMB
            | Body::Star1
            | Body::Star2
            | Body::Star3
            | Body::Star4
            | Body::Star5
            | Body::Star6
            | Body::Star7
            | Body::Star8 => Ok(self.helio_vector(body, time)?.length()),
        }
    }

    /// Heliocentric position and velocity of a body in EQJ.
    ///
    /// User stars are fixed: their velocity is zero.
    pub fn helio_state(&self, body: Body, time: &Instant) -> Result<StateVector, OrreryError> {
        match body {
            Body::Sun => Ok(StateVector::zero(*time)),
            Body::Mercury
            | Body::Venus
            | Body::Earth
            | Body::Mars
            | Body::Jupiter
            | Body::Saturn
            | Body::Uranus
            | Body::Neptune => vsop_helio_state(body, time),
            Body::Pluto => {
                let (r, v) = self.pluto.bary_state(time.tt)?;
                let sun = MajorBodies::at(time.tt).sun;
                Ok(StateVector::new(r - sun.r, v - sun.v, *time))
            }
            Body::Moon => Ok(earth_state(time)? + geo_moon_state(time)),
            Body::EMB => Ok(earth_state(time)? + geo_moon_state(time).scale(EMB_FRACTION)),
            Body::SSB => {
                let sun = MajorBodies::at(time.tt).sun;
                Ok(StateVector::new(-sun.r, -sun.v, *time))
            }
            Body::Star1
            | Body::Star2
            | Body::Star3
            | Body::Star4
            | Body::Star5
            | Body::Star6
            | Body::Star7
            | Body::Star8 => {
                let pos = self.star(body)?.position(time);
                Ok(StateVector::new(pos.pos, Vector3::zeros(), *time))
            }
        }
    }

    /// Barycentric position and velocity of a body in EQJ.
    pub fn bary_state(&self, body: Body, time: &Instant) -> Result<StateVector, OrreryError> {
        match body {
            Body::SSB => Ok(StateVector::zero(*time)),
            Body::Pluto => {
                let (r, v) = self.pluto.bary_state(time.tt)?;
                Ok(StateVector::new(r, v, *time))
            }
            Body::Star1
            | Body::Star2
            | Body::Star3
            | Body::Star4
            | Body::Star5
            | Body::Star6
            | Body::Star7
            | Body::Star8 => self.helio_state(body, time),
            Body::Sun
            | Body::Moon
            | Body::Mercury
            | Body::Venus
            | Body::Earth
            | Body::Mars
            | Body::Jupiter
            | Body::Saturn
            | Body::Uranus
            | Body::Neptune
            | Body::EMB => {
                let sun = MajorBodies::at(time.tt).sun;
                let helio = self.helio_state(body, time)?;
                Ok(helio + StateVector::new(sun.r, sun.v, *time))
            }
        }
    }

    /// Geocentric position of a body in EQJ, corrected for light-travel time.
    ///
    /// Arguments
    /// ---------
    /// * `body`: any body; the Earth gives the zero vector
    /// * `time`: the instant of observation
    /// * `aberration`: also take the Earth at the emission time (apparent direction)
    ///
    /// Return
    /// ------
    /// * the position in AU, tagged with `time`
    /// * [`OrreryError::NonConvergence`] if the emission time does not settle in 10 iterations,
    ///   [`OrreryError::LightTravelTooDistant`] beyond one light-day
    ///
    /// The Moon uses the lunar theory directly; user stars are only shifted by the Earth's
    /// heliocentric position.
    pub fn geo_vector(
        &self,
        body: Body,
        time: &Instant,
        aberration: bool,
    ) -> Result<AstroVector, OrreryError> {
        match body {
            Body::Earth => return Ok(AstroVector::zero(*time)),
            Body::Moon => return Ok(geo_moon(time)),
            _ if body.is_star() => {
                let star = self.helio_vector(body, time)?;
                let earth = vsop_helio_vector(Body::Earth, time)?;
                return Ok(star - earth);
            }
            _ => {}
        }

        let mut earth = vsop_helio_vector(Body::Earth, time)?;
        let mut ltime = *time;
        for _ in 0..LIGHT_TIME_ITERATIONS {
            let helio = self.helio_vector(body, &ltime)?;
            if aberration {
                earth = vsop_helio_vector(Body::Earth, &ltime)?;
            }
            let geo = helio.pos - earth.pos;
            let light_time = geo.norm() / VLIGHT_AU;
            if light_time > MAX_LIGHT_TIME {
                return Err(OrreryError::LightTravelTooDistant(light_time));
            }
            let ltime2 = time.add_days(-light_time);
            if (ltime2.tt - ltime.tt).abs() < LIGHT_TIME_TOLERANCE {
                return Ok(AstroVector::from_position(geo, *time));
            }
            ltime = ltime2;
        }
        Err(OrreryError::NonConvergence(format!(
            "light-travel correction for {body} at {time}"
        )))
    }

    /// Geocentric position of the Moon in EQJ (AU).
    pub fn geo_moon(&self, time: &Instant) -> AstroVector {
        geo_moon(time)
    }

    /// Geocentric position and velocity of the Moon in EQJ.
    pub fn geo_moon_state(&self, time: &Instant) -> StateVector {
        geo_moon_state(time)
    }

    /// Equatorial coordinates of a body seen by an observer.
    ///
    /// Arguments
    /// ---------
    /// * `body`: the target
    /// * `time`: the instant
    /// * `observer`: the site, whose geocentric offset is removed (topocentric parallax)
    /// * `of_date`: `true` for the true equator of date, `false` for EQJ
    /// * `aberration`: forwarded to [`Orrery::geo_vector`]
    pub fn equator(
        &self,
        body: Body,
        time: &Instant,
        observer: &Observer,
        of_date: bool,
        aberration: bool,
    ) -> Result<EquatorialCoord, OrreryError> {
        let observer_pos = observer.geocentric_position(time, self, false);
        let geo = self.geo_vector(body, time, aberration)?;
        let topo = geo - observer_pos;
        if of_date {
            let rot = gyration_rot(&self.e_tilt(time), PrecessDirection::From2000);
            EquatorialCoord::from_vector(&rot.rotate_vector(&topo))
        } else {
            EquatorialCoord::from_vector(&topo)
        }
    }

    /// Geocentric position of the Sun on the true ecliptic and equinox of date.
    ///
    /// The Earth is taken one light-travel time (1 AU) earlier, so the result is the apparent
    /// direction of the Sun.
    pub fn sun_position(&self, time: &Instant) -> Result<EclipticCoord, OrreryError> {
        let adjusted = time.add_days(-1.0 / VLIGHT_AU);
        let earth = vsop_helio_vector(Body::Earth, &adjusted)?;
        let tilt = self.e_tilt(&adjusted);
        let sun_eqd = gyration_rot(&tilt, PrecessDirection::From2000).matrix() * (-earth.pos);

        let (s, c) = (tilt.tobl * RADEG).sin_cos();
        let ecliptic = Vector3::new(
            sun_eqd.x,
            c * sun_eqd.y + s * sun_eqd.z,
            -s * sun_eqd.y + c * sun_eqd.z,
        );
        EclipticCoord::from_vector(&AstroVector::from_position(ecliptic, *time))
    }

    /// Convert an EQJ vector to the mean ecliptic of J2000.
    pub fn ecliptic(&self, equatorial: &AstroVector) -> Result<EclipticCoord, OrreryError> {
        EclipticCoord::from_vector(&rotation_eqj_ecl().rotate_vector(equatorial))
    }

    /// Heliocentric ecliptic longitude of a body (mean ecliptic of J2000), in degrees.
    pub fn ecliptic_longitude(&self, body: Body, time: &Instant) -> Result<Degree, OrreryError> {
        if body == Body::Sun {
            return Err(OrreryError::UnsupportedBody(body, "ecliptic_longitude"));
        }
        let helio = self.helio_vector(body, time)?;
        Ok(self.ecliptic(&helio)?.elon)
    }

    /// Difference of the geocentric ecliptic longitudes `body1 - body2`, in `[0, 360)`.
    pub fn pair_longitude(
        &self,
        body1: Body,
        body2: Body,
        time: &Instant,
    ) -> Result<Degree, OrreryError> {
        for body in [body1, body2] {
            if body == Body::Earth {
                return Err(OrreryError::UnsupportedBody(body, "pair_longitude"));
            }
        }
        let eclip1 = self.ecliptic(&self.geo_vector(body1, time, false)?)?;
        let eclip2 = self.ecliptic(&self.geo_vector(body2, time, false)?)?;
        Ok(normalize_longitude(eclip1.elon - eclip2.elon))
    }

    /// Moon phase angle in `[0, 360)`: 0 new, 90 first quarter, 180 full, 270 third quarter.
    pub fn moon_phase(&self, time: &Instant) -> Result<Degree, OrreryError> {
        self.pair_longitude(Body::Moon, Body::Sun, time)
    }

    /// Angle in degrees between a body and the Sun, seen from the Earth.
    pub fn angle_from_sun(&self, body: Body, time: &Instant) -> Result<Degree, OrreryError> {
        if body == Body::Earth {
            return Err(OrreryError::UnsupportedBody(body, "angle_from_sun"));
        }
        let sv = self.geo_vector(Body::Sun, time, true)?;
        let bv = self.geo_vector(body, time, true)?;
        angle_between(&sv.pos, &bv.pos)
    }
}

#[cfg(test)]
mod ephemeris_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::constants::AU;

    #[test]
    fn test_earth_geo_vector_is_zero() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(1000.0).unwrap();
        for aberration in [false, true] {
            let v = orrery.geo_vector(Body::Earth, &time, aberration).unwrap();
            assert_eq!(v.pos, Vector3::zeros());
        }
    }

    #[test]
    fn test_sun_is_helio_origin() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(-500.0).unwrap();
        assert_eq!(orrery.helio_vector(Body::Sun, &time).unwrap().length(), 0.0);
        assert_eq!(orrery.helio_distance(Body::Sun, &time).unwrap(), 0.0);
    }

    #[test]
    fn test_barycentre_consistency() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(3000.0).unwrap();
        let ssb = orrery.helio_state(Body::SSB, &time).unwrap();
        let sun = orrery.bary_state(Body::Sun, &time).unwrap();
        assert_abs_diff_eq!(ssb.pos, -sun.pos, epsilon = 1e-15);
        assert_eq!(orrery.bary_state(Body::SSB, &time).unwrap().pos, Vector3::zeros());

        let helio = orrery.helio_state(Body::Jupiter, &time).unwrap();
        let bary = orrery.bary_state(Body::Jupiter, &time).unwrap();
        assert_abs_diff_eq!(bary.pos - helio.pos, sun.pos, epsilon = 1e-15);
    }

    #[test]
    fn test_emb_between_earth_and_moon() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(200.0).unwrap();
        let earth = orrery.helio_vector(Body::Earth, &time).unwrap();
        let moon = orrery.helio_vector(Body::Moon, &time).unwrap();
        let emb = orrery.helio_vector(Body::EMB, &time).unwrap();
        let offset_km = (emb.pos - earth.pos).norm() * AU;
        assert!((4000.0..5000.0).contains(&offset_km), "{offset_km} km");
        assert!((emb.pos - earth.pos).dot(&(moon.pos - earth.pos)) > 0.0);
    }

    #[test]
    fn test_light_time_shift() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(7000.0).unwrap();
        let geometric = orrery.helio_vector(Body::Jupiter, &time).unwrap()
            - orrery.helio_vector(Body::Earth, &time).unwrap();
        let astrometric = orrery.geo_vector(Body::Jupiter, &time, false).unwrap();
        // Jupiter moves about 0.0075 AU/day; light time is roughly 0.025-0.037 day
        let shift = (geometric.pos - astrometric.pos).norm();
        assert!((1e-5..5e-4).contains(&shift), "shift = {shift}");
        assert_eq!(astrometric.t, time);
    }

    #[test]
    fn test_pair_longitude_rejects_earth() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(0.0).unwrap();
        assert_eq!(
            orrery.pair_longitude(Body::Earth, Body::Sun, &time),
            Err(OrreryError::UnsupportedBody(Body::Earth, "pair_longitude"))
        );
        assert!(orrery.ecliptic_longitude(Body::Sun, &time).is_err());
    }

    #[test]
    fn test_sun_position_near_equinox() {
        let orrery = Orrery::new();
        // 2000-03-20 07:35 UTC, March equinox
        let time = Instant::from_ut(78.816).unwrap();
        let sun = orrery.sun_position(&time).unwrap();
        let lon = if sun.elon > 180.0 { sun.elon - 360.0 } else { sun.elon };
        assert_abs_diff_eq!(lon, 0.0, epsilon = 0.01);
        assert!(sun.elat.abs() < 1e-3);
    }

    #[test]
    fn test_angle_from_sun() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(4567.0).unwrap();
        let venus = orrery.angle_from_sun(Body::Venus, &time).unwrap();
        assert!(venus <= 48.0, "Venus elongation {venus}");
        assert_abs_diff_eq!(orrery.angle_from_sun(Body::Sun, &time).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_equator_topocentric_moon_parallax() {
        let orrery = Orrery::new();
        let time = Instant::from_ut(8000.0).unwrap();
        let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
        let topo = orrery.equator(Body::Moon, &time, &observer, false, false).unwrap();
        let geo = EquatorialCoord::from_vector(&orrery.geo_moon(&time)).unwrap();
        // horizontal parallax of the Moon is about one degree
        let shift = angle_between(&topo.vec.pos, &geo.vec.pos).unwrap();
        assert!(shift < 1.05, "parallax shift {shift}");
        assert_abs_diff_eq!(geo.dist - topo.dist, 0.0, epsilon = 5e-5);
    }
}
