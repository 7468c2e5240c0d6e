#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use nalgebra::Vector3;
use orrery::body::Body;
use orrery::time::Instant;

/// Heliocentric EQJ positions (AU) from JPL Horizons, keyed by body and TT Julian date.
pub const HORIZONS_HELIO: &[(Body, f64, [f64; 3])] = &[
    (Body::Mercury, 2411545.0, [0.3493878714, -0.1302077267, -0.1058730361]),
    (Body::Mercury, 2419545.0, [0.2950960118, -0.244177297, -0.1610737357]),
    (Body::Mercury, 2427545.0, [0.2077238019, -0.3312635001, -0.198494532]),
    (Body::Mercury, 2435545.0, [0.1004920218, -0.3870987319, -0.217179168]),
    (Body::Mercury, 2443545.0, [-0.0153852754, -0.4101850758, -0.2174925982]),
    (Body::Mercury, 2451545.0, [-0.1300936046, -0.4005937206, -0.2004893069]),
    (Body::Venus, 2411545.0, [-0.7178452043, 0.0139241146, 0.0517532468]),
    (Body::Venus, 2419545.0, [0.6061342811, 0.3741316134, 0.1298042734]),
    (Body::Venus, 2427545.0, [-0.2299142475, -0.6331803015, -0.2701579257]),
    (Body::Venus, 2435545.0, [-0.2164924053, 0.6199261557, 0.292513693]),
    (Body::Venus, 2443545.0, [0.5935137101, -0.3693448084, -0.2037088644]),
    (Body::EMB, 2411545.0, [0.1117527004, -0.9270100498, -0.4021802015]),
    (Body::EMB, 2419545.0, [-0.4717744111, -0.8220227738, -0.3565918417]),
    (Body::EMB, 2427545.0, [-0.8889625915, -0.4282316398, -0.185747755]),
    (Body::EMB, 2435545.0, [-0.9854629414, 0.1188731342, 0.051541748]),
    (Body::EMB, 2443545.0, [-0.7169612488, 0.6210814225, 0.2693037488]),
    (Body::EMB, 2451545.0, [-0.1771587839, 0.887406859, 0.3847367185]),
    (Body::Mars, 2411545.0, [-0.1474461434, -1.3278375334, -0.6049474049]),
    (Body::Mars, 2419545.0, [-1.4097862365, 0.7887552075, 0.4001552102]),
    (Body::Mars, 2427545.0, [1.2751062367, 0.5929892819, 0.2372980895]),
    (Body::Mars, 2435545.0, [-0.7578584474, -1.210013532, -0.5344072732]),
    (Body::Mars, 2443545.0, [-1.0232278535, 1.1621468626, 0.5607395621]),
    (Body::Mars, 2451545.0, [1.3907159214, 0.0014012149, -0.0369601677]),
    (Body::Jupiter, 2411545.0, [2.9837884053, -3.772381627, -1.6901903627]),
    (Body::Jupiter, 2419545.0, [-1.7382880384, -4.6471837333, -1.9499553658]),
    (Body::Jupiter, 2427545.0, [-5.1281915292, -1.749800141, -0.6250207356]),
    (Body::Jupiter, 2435545.0, [-4.6121619014, 2.4953666775, 1.1821569858]),
    (Body::Jupiter, 2443545.0, [-0.4627146537, 4.7108655871, 2.0307146958]),
    (Body::Jupiter, 2451545.0, [4.0011771819, 2.7365785897, 1.0755125254]),
    (Body::Saturn, 2411545.0, [-8.5151099046, 3.282556578, 1.7200893604]),
    (Body::Saturn, 2419545.0, [5.217291758, 6.9815327926, 2.6579637103]),
    (Body::Saturn, 2427545.0, [7.7506635038, -5.5025418118, -2.6046062335]),
    (Body::Saturn, 2435545.0, [-5.2734506611, -7.8866680116, -3.0300154867]),
    (Body::Saturn, 2443545.0, [-7.7367291471, 4.5131027003, 2.1962088916]),
    (Body::Saturn, 2451545.0, [6.4064088704, 6.1746578061, 2.2747707349]),
    (Body::Uranus, 2411545.0, [-16.4159097008, -7.793650325, -3.18041265]),
    (Body::Uranus, 2419545.0, [10.4746921789, -15.300586733, -6.8500911185]),
    (Body::Uranus, 2427545.0, [17.5128800292, 8.7263262152, 3.5736558506]),
    (Body::Uranus, 2435545.0, [-9.7178358757, 14.4546349234, 6.4686670469]),
    (Body::Uranus, 2443545.0, [-13.4822148842, -11.8237898401, -4.9874755478]),
    (Body::Uranus, 2451545.0, [14.4318565807, -12.5062632452, -5.6816829828]),
    (Body::Neptune, 2411545.0, [12.1323801234, 25.3226220555, 10.0628233249]),
    (Body::Neptune, 2419545.0, [-12.3856600756, 25.1528348111, 10.6033851946]),
    (Body::Neptune, 2427545.0, [-28.7387978923, 8.2766903355, 4.1028690883]),
    (Body::Neptune, 2435545.0, [-26.3968325711, -14.030717305, -5.0858772277]),
    (Body::Neptune, 2443545.0, [-7.0565022877, -27.3194094185, -11.0063258261]),
    (Body::Neptune, 2451545.0, [16.8120479567, -22.9801038994, -9.8244204429]),
    (Body::Pluto, 2411545.0, [17.621305461, 43.9412232438, 8.4004533071]),
    (Body::Pluto, 2419545.0, [0.2778860239, 42.9818583697, 13.326112444]),
    (Body::Pluto, 2427545.0, [-16.9607735628, 33.1345593015, 15.446678678]),
    (Body::Pluto, 2435545.0, [-29.0024768171, 13.9948403475, 13.1021316473]),
    (Body::Pluto, 2443545.0, [-28.0398775393, -10.5511024785, 5.1547952585]),
    (Body::Pluto, 2451545.0, [-9.8753695808, -27.9789262247, -5.7537118247]),
];

/// Instant whose TT is the given Julian date.
pub fn jd_instant(jd: f64) -> Instant {
    Instant::from_terrestrial_time(jd - 2451545.0).unwrap()
}

pub fn utc(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Instant {
    Instant::from_gregorian(year, month, day, hour, minute, 0.0).unwrap()
}

pub fn assert_vector_close(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = epsilon);
}
