mod common;

use approx::assert_abs_diff_eq;
use orrery::body::Body;
use orrery::constants::MEAN_SYNODIC_MONTH;
use orrery::coordinates::longitude_offset;
use orrery::orrery::Orrery;
use orrery::search::{search, SearchOptions};
use orrery::time::Instant;

use common::utc;

#[test]
fn test_moon_phase_reference_dates() {
    let orrery = Orrery::new();
    let full = orrery.moon_phase(&utc(2024, 1, 25, 18, 0)).unwrap();
    assert_abs_diff_eq!(full, 180.0, epsilon = 1.0);
    let new = orrery.moon_phase(&utc(2024, 1, 11, 12, 0)).unwrap();
    assert_abs_diff_eq!(longitude_offset(new), 0.0, epsilon = 1.0);
}

#[test]
fn test_chained_moon_phase_searches() {
    let orrery = Orrery::new();
    let mut time = utc(1990, 6, 1, 0, 0);
    let mut found = Vec::new();
    for _ in 0..25 {
        time = orrery
            .search_moon_phase(0.0, &time, 40.0)
            .unwrap()
            .expect("a new moon every lunation");
        found.push(time);
    }
    for pair in found.windows(2) {
        assert_abs_diff_eq!(pair[1].ut - pair[0].ut, MEAN_SYNODIC_MONTH, epsilon = 0.5);
    }
}

#[test]
fn test_quarters_cycle() {
    let orrery = Orrery::new();
    let mut mq = orrery.search_moon_quarter(&utc(2031, 3, 3, 3, 3)).unwrap();
    for _ in 0..40 {
        let next = orrery.next_moon_quarter(&mq).unwrap();
        assert_eq!(next.quarter, (mq.quarter + 1) % 4);
        assert!(next.time.ut > mq.time.ut);
        let phase = orrery.moon_phase(&next.time).unwrap();
        assert_abs_diff_eq!(
            longitude_offset(phase - 90.0 * f64::from(next.quarter)),
            0.0,
            epsilon = 1e-3
        );
        mq = next;
    }
}

#[test]
fn test_new_moon_phase_fraction() {
    let orrery = Orrery::new();
    let start = utc(2025, 2, 1, 0, 0);
    let new = orrery.search_moon_phase(0.0, &start, 40.0).unwrap().unwrap();
    let full = orrery.search_moon_phase(180.0, &start, 40.0).unwrap().unwrap();
    assert_abs_diff_eq!(
        orrery.illumination(Body::Moon, &new).unwrap().phase_fraction,
        0.0,
        epsilon = 0.02
    );
    assert_abs_diff_eq!(
        orrery.illumination(Body::Moon, &full).unwrap().phase_fraction,
        1.0,
        epsilon = 0.02
    );
}

#[test]
fn test_generic_search_on_synthetic_functions() {
    let options = SearchOptions::default();
    let t1 = Instant::from_ut(0.0).unwrap();
    let t2 = Instant::from_ut(10.0).unwrap();

    let root = search(|t: &Instant| Ok(t.ut - 3.25), t1, t2, &options)
        .unwrap()
        .unwrap();
    assert_abs_diff_eq!(root.ut, 3.25, epsilon = 1.0 / 86400.0);

    let cos_root = search(|t: &Instant| Ok(-(t.ut / 4.0).cos()), t1, t2, &options)
        .unwrap()
        .unwrap();
    assert_abs_diff_eq!(cos_root.ut, 2.0 * std::f64::consts::PI, epsilon = 1.0 / 86400.0);

    let none = search(|t: &Instant| Ok(t.ut * t.ut + 1.0), t1, t2, &options).unwrap();
    assert!(none.is_none());
}

#[test]
fn test_equinoxes_and_solstices() {
    let orrery = Orrery::new();
    let tol = 5.0 / 1440.0;
    // 2000: Mar 20 07:35, Jun 21 01:48, Sep 22 17:28, Dec 21 13:37 UTC
    let seasons = orrery.seasons(2000).unwrap();
    assert_abs_diff_eq!(seasons.mar_equinox.ut, utc(2000, 3, 20, 7, 35).ut, epsilon = tol);
    assert_abs_diff_eq!(seasons.jun_solstice.ut, utc(2000, 6, 21, 1, 48).ut, epsilon = tol);
    assert_abs_diff_eq!(seasons.sep_equinox.ut, utc(2000, 9, 22, 17, 28).ut, epsilon = tol);
    assert_abs_diff_eq!(seasons.dec_solstice.ut, utc(2000, 12, 21, 13, 37).ut, epsilon = tol);

    let sun = orrery.sun_position(&seasons.jun_solstice).unwrap();
    assert_abs_diff_eq!(sun.elon, 90.0, epsilon = 1e-5);
}

#[test]
fn test_venus_inferior_conjunction() {
    let orrery = Orrery::new();
    let start = utc(2020, 1, 1, 0, 0);
    let conj = orrery
        .search_relative_longitude(Body::Venus, 0.0, &start, 600.0)
        .unwrap()
        .unwrap();
    // 2020-06-03 17:43 UTC
    assert_abs_diff_eq!(conj.ut, utc(2020, 6, 3, 17, 43).ut, epsilon = 0.5);

    let venus = orrery.ecliptic_longitude(Body::Venus, &conj).unwrap();
    let earth = orrery.ecliptic_longitude(Body::Earth, &conj).unwrap();
    assert_abs_diff_eq!(longitude_offset(venus - earth), 0.0, epsilon = 1e-4);
}

#[test]
fn test_jupiter_superior_events_advance() {
    let orrery = Orrery::new();
    let mut time = utc(2010, 1, 1, 0, 0);
    let syn = orrery.synodic_period(Body::Jupiter).unwrap();
    for target in [0.0, 180.0, 0.0, 180.0] {
        let event = orrery
            .search_relative_longitude(Body::Jupiter, target, &time, 1000.0)
            .unwrap()
            .unwrap();
        assert!(event.ut > time.ut);
        assert!(event.ut - time.ut < syn + 30.0);
        time = event.add_days(1.0);
    }
}
