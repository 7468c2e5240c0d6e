//! Truncated VSOP87D series for Venus: heliocentric longitude, latitude
//! (radians) and radius (AU), ecliptic and equinox of date.

use crate::series::Term;

use super::VsopModel;

#[allow(clippy::excessive_precision)]
const LON_0: &[Term] = &[
    Term::new(3.17614667, 0.0, 0.0),
    Term::new(0.01353968, 5.5931332, 10213.2855462),
    Term::new(0.00089892, 5.3065, 20426.57109),
    Term::new(0.00005477, 4.4163, 7860.4194),
    Term::new(0.00003456, 2.6996, 11790.6291),
    Term::new(0.00002372, 2.9938, 3930.2097),
    Term::new(0.00001664, 4.2502, 1577.3435),
    Term::new(0.00001438, 4.1575, 9683.5946),
    Term::new(0.00001317, 5.1867, 26.2983),
    Term::new(0.00001201, 6.1536, 30639.8566),
    Term::new(0.00000769, 0.816, 9437.763),
    Term::new(0.00000761, 1.95, 529.691),
    Term::new(0.00000708, 1.065, 775.523),
    Term::new(0.00000585, 3.998, 191.448),
    Term::new(0.000005, 4.123, 15720.839),
    Term::new(0.00000429, 3.586, 19367.189),
    Term::new(0.00000327, 5.677, 5507.553),
    Term::new(0.00000326, 4.591, 10404.734),
    Term::new(0.00000232, 3.163, 9153.904),
    Term::new(0.0000018, 4.653, 1109.379),
    Term::new(0.00000155, 5.57, 19651.048),
    Term::new(0.00000128, 4.226, 20.775),
    Term::new(0.00000128, 0.962, 5661.332),
    Term::new(0.00000106, 1.537, 801.821),
];

#[allow(clippy::excessive_precision)]
const LON_1: &[Term] = &[
    Term::new(10213.52943053, 0.0, 0.0),
    Term::new(0.00095708, 2.46424, 10213.28555),
    Term::new(0.00014445, 0.51625, 20426.57109),
    Term::new(0.00000213, 1.795, 30639.857),
    Term::new(0.00000174, 2.655, 26.298),
    Term::new(0.00000152, 6.106, 1577.344),
    Term::new(0.00000082, 5.7, 191.45),
    Term::new(0.0000007, 2.68, 9437.76),
    Term::new(0.00000052, 3.6, 775.52),
    Term::new(0.00000038, 1.03, 529.69),
    Term::new(0.0000003, 1.25, 5507.55),
    Term::new(0.00000025, 6.11, 10404.73),
];

#[allow(clippy::excessive_precision)]
const LON_2: &[Term] = &[
    Term::new(0.00054127, 0.0, 0.0),
    Term::new(0.00003891, 0.3451, 10213.2855),
    Term::new(0.00001338, 2.0201, 20426.5711),
    Term::new(0.00000024, 2.05, 26.3),
    Term::new(0.00000019, 3.54, 30639.86),
    Term::new(0.0000001, 3.97, 775.52),
    Term::new(0.00000007, 1.52, 1577.34),
    Term::new(0.00000006, 1.0, 191.45),
];

#[allow(clippy::excessive_precision)]
const LON_3: &[Term] = &[
    Term::new(0.00000136, 4.804, 10213.286),
    Term::new(0.00000078, 3.67, 20426.57),
    Term::new(0.00000026, 0.0, 0.0),
];

#[allow(clippy::excessive_precision)]
const LON_4: &[Term] = &[
    Term::new(0.00000114, 3.1416, 0.0),
    Term::new(0.00000003, 5.21, 20426.57),
    Term::new(0.00000002, 2.51, 10213.29),
];

#[allow(clippy::excessive_precision)]
const LON_5: &[Term] = &[
    Term::new(0.00000001, 3.14, 0.0),
];

#[allow(clippy::excessive_precision)]
const LAT_0: &[Term] = &[
    Term::new(0.05923638, 0.2670278, 10213.2855462),
    Term::new(0.00040108, 1.14737, 20426.57109),
    Term::new(0.00032815, 3.14159, 0.0),
    Term::new(0.00001011, 1.0895, 30639.8566),
    Term::new(0.00000149, 6.254, 18073.705),
    Term::new(0.00000138, 0.86, 1577.344),
    Term::new(0.0000013, 3.672, 9437.763),
    Term::new(0.0000012, 3.705, 2352.866),
    Term::new(0.00000108, 4.539, 22003.915),
];

#[allow(clippy::excessive_precision)]
const LAT_1: &[Term] = &[
    Term::new(0.00513348, 1.803643, 10213.285546),
    Term::new(0.0000438, 3.3862, 20426.5711),
    Term::new(0.00000199, 0.0, 0.0),
    Term::new(0.00000197, 2.53, 30639.857),
];

#[allow(clippy::excessive_precision)]
const LAT_2: &[Term] = &[
    Term::new(0.00022378, 3.38509, 10213.28555),
    Term::new(0.00000282, 0.0, 0.0),
    Term::new(0.00000173, 5.256, 20426.571),
    Term::new(0.00000027, 3.87, 30639.86),
];

#[allow(clippy::excessive_precision)]
const LAT_3: &[Term] = &[
    Term::new(0.00000647, 4.992, 10213.286),
    Term::new(0.0000002, 3.14, 0.0),
    Term::new(0.00000006, 0.77, 20426.57),
    Term::new(0.00000003, 5.44, 30639.86),
];

#[allow(clippy::excessive_precision)]
const LAT_4: &[Term] = &[
    Term::new(0.00000014, 0.32, 10213.29),
];

#[allow(clippy::excessive_precision)]
const RAD_0: &[Term] = &[
    Term::new(0.72334821, 0.0, 0.0),
    Term::new(0.00489824, 4.021518, 10213.285546),
    Term::new(0.00001658, 4.9021, 20426.5711),
    Term::new(0.00001632, 2.8455, 7860.4194),
    Term::new(0.00001378, 1.1285, 11790.6291),
    Term::new(0.00000498, 2.587, 9683.595),
    Term::new(0.00000374, 1.423, 3930.21),
    Term::new(0.00000264, 5.529, 9437.763),
    Term::new(0.00000237, 2.551, 15720.839),
    Term::new(0.00000222, 2.013, 19367.189),
    Term::new(0.00000126, 2.728, 1577.344),
    Term::new(0.00000119, 3.02, 10404.734),
];

#[allow(clippy::excessive_precision)]
const RAD_1: &[Term] = &[
    Term::new(0.00034551, 0.89199, 10213.28555),
    Term::new(0.00000234, 1.772, 20426.571),
    Term::new(0.00000234, 3.142, 0.0),
];

#[allow(clippy::excessive_precision)]
const RAD_2: &[Term] = &[
    Term::new(0.00001407, 5.0637, 10213.2855),
    Term::new(0.00000016, 5.47, 20426.57),
    Term::new(0.00000013, 0.0, 0.0),
];

#[allow(clippy::excessive_precision)]
const RAD_3: &[Term] = &[
    Term::new(0.0000005, 3.22, 10213.29),
];

#[allow(clippy::excessive_precision)]
const RAD_4: &[Term] = &[
    Term::new(0.00000001, 0.92, 10213.29),
];

pub(super) static VENUS: VsopModel = VsopModel {
    lon: &[LON_0, LON_1, LON_2, LON_3, LON_4, LON_5],
    lat: &[LAT_0, LAT_1, LAT_2, LAT_3, LAT_4],
    rad: &[RAD_0, RAD_1, RAD_2, RAD_3, RAD_4],
};
