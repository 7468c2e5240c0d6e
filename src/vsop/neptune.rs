//! Truncated VSOP87D series for Neptune: heliocentric longitude, latitude
//! (radians) and radius (AU), ecliptic and equinox of date.

use crate::series::Term;

use super::VsopModel;

#[allow(clippy::excessive_precision)]
const LON_0: &[Term] = &[
    Term::new(5.31188633, 0.0, 0.0),
    Term::new(0.01798476, 2.9010127, 38.1330356),
    Term::new(0.01019728, 0.4858092, 1.4844727),
    Term::new(0.00124532, 4.830081, 36.648563),
    Term::new(0.00042064, 5.41055, 2.96895),
    Term::new(0.00037715, 6.09222, 35.16409),
    Term::new(0.00033785, 1.24489, 76.26607),
    Term::new(0.00016483, 8e-05, 491.55793),
    Term::new(0.00009199, 4.9375, 39.6175),
    Term::new(0.00008994, 0.2746, 175.1661),
    Term::new(0.00004216, 1.9871, 73.2971),
    Term::new(0.00003365, 1.0359, 33.6796),
    Term::new(0.00002285, 4.2061, 4.4534),
    Term::new(0.00001434, 2.7834, 74.7816),
    Term::new(0.000009, 2.076, 109.946),
    Term::new(0.00000745, 3.19, 71.813),
    Term::new(0.00000506, 5.748, 114.399),
    Term::new(0.000004, 0.35, 1021.249),
    Term::new(0.00000345, 3.462, 41.102),
    Term::new(0.0000034, 3.304, 77.751),
    Term::new(0.00000323, 2.248, 32.165),
    Term::new(0.00000306, 0.497, 0.521),
    Term::new(0.00000287, 4.505, 0.048),
    Term::new(0.00000282, 2.246, 146.594),
    Term::new(0.00000267, 4.889, 0.963),
    Term::new(0.00000252, 5.782, 388.465),
    Term::new(0.00000245, 1.247, 9.561),
    Term::new(0.00000233, 2.505, 137.033),
    Term::new(0.00000227, 1.797, 453.425),
    Term::new(0.0000017, 3.324, 108.461),
    Term::new(0.00000151, 2.192, 33.94),
    Term::new(0.0000015, 2.997, 5.938),
    Term::new(0.00000148, 0.859, 111.43),
    Term::new(0.00000119, 3.677, 2.448),
    Term::new(0.00000109, 2.416, 183.243),
    Term::new(0.00000103, 0.041, 0.261),
    Term::new(0.00000103, 4.404, 70.328),
    Term::new(0.00000102, 5.705, 0.112),
];

#[allow(clippy::excessive_precision)]
const LON_1: &[Term] = &[
    Term::new(38.37687717, 0.0, 0.0),
    Term::new(0.00016604, 4.86319, 1.48447),
    Term::new(0.00015807, 2.27923, 38.13304),
    Term::new(0.00003335, 3.682, 76.2661),
    Term::new(0.00001306, 3.6732, 2.9689),
    Term::new(0.00000605, 1.505, 35.164),
    Term::new(0.00000179, 3.453, 39.618),
    Term::new(0.00000107, 2.451, 4.453),
    Term::new(0.00000106, 2.755, 33.68),
    Term::new(0.00000073, 5.49, 36.65),
    Term::new(0.00000057, 1.86, 114.4),
    Term::new(0.00000057, 5.22, 0.52),
    Term::new(0.00000035, 4.52, 74.78),
    Term::new(0.00000032, 5.9, 77.75),
    Term::new(0.0000003, 3.67, 388.47),
    Term::new(0.00000029, 5.17, 9.56),
    Term::new(0.00000029, 5.17, 2.45),
    Term::new(0.00000026, 5.25, 168.05),
];

#[allow(clippy::excessive_precision)]
const LON_2: &[Term] = &[
    Term::new(0.00053893, 0.0, 0.0),
    Term::new(0.00000296, 1.855, 1.484),
    Term::new(0.00000281, 1.191, 38.133),
    Term::new(0.0000027, 5.721, 76.266),
    Term::new(0.00000023, 1.21, 2.97),
    Term::new(0.00000009, 4.43, 35.16),
    Term::new(0.00000007, 0.54, 2.45),
];

#[allow(clippy::excessive_precision)]
const LON_3: &[Term] = &[
    Term::new(0.00000031, 0.0, 0.0),
    Term::new(0.00000015, 1.35, 76.27),
    Term::new(0.00000012, 6.04, 1.48),
    Term::new(0.00000012, 6.11, 38.13),
];

#[allow(clippy::excessive_precision)]
const LON_4: &[Term] = &[
    Term::new(0.00000114, 3.142, 0.0),
];

#[allow(clippy::excessive_precision)]
const LAT_0: &[Term] = &[
    Term::new(0.03088623, 1.4410437, 38.1330356),
    Term::new(0.0002778, 5.91272, 76.26607),
    Term::new(0.00027624, 0.0, 0.0),
    Term::new(0.00015448, 3.50877, 39.61751),
    Term::new(0.00015355, 2.52124, 36.64856),
    Term::new(0.00002, 1.51, 74.7816),
    Term::new(0.00001968, 4.3778, 1.4845),
    Term::new(0.00001015, 3.2156, 35.1641),
    Term::new(0.00000606, 2.802, 73.297),
    Term::new(0.00000595, 2.129, 41.102),
    Term::new(0.00000589, 3.187, 2.969),
    Term::new(0.00000402, 4.169, 114.399),
    Term::new(0.0000028, 1.682, 77.751),
    Term::new(0.00000262, 3.767, 213.299),
    Term::new(0.00000254, 3.271, 453.425),
    Term::new(0.00000206, 4.257, 529.691),
    Term::new(0.0000014, 3.53, 137.033),
];

#[allow(clippy::excessive_precision)]
const LAT_1: &[Term] = &[
    Term::new(0.00227279, 3.807931, 38.133036),
    Term::new(0.00001803, 1.9758, 76.2661),
    Term::new(0.00001433, 3.1416, 0.0),
    Term::new(0.00001386, 4.8256, 36.6486),
    Term::new(0.00001073, 6.0805, 39.6175),
    Term::new(0.00000148, 3.858, 74.782),
    Term::new(0.00000136, 0.478, 1.484),
    Term::new(0.0000007, 6.19, 35.16),
    Term::new(0.00000052, 5.05, 73.3),
    Term::new(0.00000043, 0.31, 114.4),
    Term::new(0.00000037, 4.89, 41.1),
    Term::new(0.00000037, 5.76, 2.97),
    Term::new(0.00000026, 5.22, 213.3),
];

#[allow(clippy::excessive_precision)]
const LAT_2: &[Term] = &[
    Term::new(0.00009691, 5.5712, 38.133),
    Term::new(0.00000079, 3.63, 76.27),
    Term::new(0.00000072, 0.45, 36.65),
    Term::new(0.00000059, 3.14, 0.0),
    Term::new(0.0000003, 1.61, 39.62),
    Term::new(0.00000006, 5.61, 74.78),
];

#[allow(clippy::excessive_precision)]
const LAT_3: &[Term] = &[
    Term::new(0.00000273, 1.017, 38.133),
    Term::new(0.00000002, 0.0, 0.0),
    Term::new(0.00000002, 2.37, 36.65),
    Term::new(0.00000002, 5.33, 76.27),
];

#[allow(clippy::excessive_precision)]
const LAT_4: &[Term] = &[
    Term::new(0.00000006, 2.67, 38.13),
];

#[allow(clippy::excessive_precision)]
const RAD_0: &[Term] = &[
    Term::new(30.07013206, 0.0, 0.0),
    Term::new(0.27062259, 1.32999459, 38.13303564),
    Term::new(0.01691764, 3.2518614, 36.6485629),
    Term::new(0.00807831, 5.185928, 1.484473),
    Term::new(0.00537761, 4.521139, 35.16409),
    Term::new(0.00495726, 1.571057, 491.557929),
    Term::new(0.00274572, 1.845523, 175.16606),
    Term::new(0.00135134, 3.372206, 39.617508),
    Term::new(0.00121802, 5.797544, 76.266071),
    Term::new(0.00100895, 0.377027, 73.297126),
    Term::new(0.00069792, 3.79617, 2.96895),
    Term::new(0.00046688, 5.74938, 33.67962),
    Term::new(0.00024594, 0.50802, 109.94569),
    Term::new(0.00016939, 1.59422, 71.81265),
    Term::new(0.0001423, 1.07786, 74.7816),
    Term::new(0.00012012, 1.92062, 1021.24889),
    Term::new(0.00008395, 0.6782, 146.5943),
    Term::new(0.00007572, 1.0715, 388.4652),
    Term::new(0.00005721, 2.5906, 4.4534),
    Term::new(0.0000484, 1.9069, 41.102),
    Term::new(0.00004483, 2.9057, 529.691),
    Term::new(0.00004421, 1.7499, 108.4612),
    Term::new(0.00004354, 0.6799, 32.1645),
    Term::new(0.0000427, 3.4134, 453.4249),
    Term::new(0.00003381, 0.8481, 183.2428),
    Term::new(0.00002881, 1.986, 137.033),
    Term::new(0.00002879, 3.6742, 350.3321),
    Term::new(0.00002636, 3.0976, 213.2991),
    Term::new(0.0000253, 5.7984, 490.0735),
    Term::new(0.00002523, 0.4863, 493.0424),
    Term::new(0.00002306, 2.8096, 70.3282),
    Term::new(0.00002087, 0.6186, 33.9402),
];

#[allow(clippy::excessive_precision)]
const RAD_1: &[Term] = &[
    Term::new(0.00236339, 0.70498, 38.133036),
    Term::new(0.0001322, 3.32015, 1.48447),
    Term::new(0.00008622, 6.2163, 35.1641),
    Term::new(0.00002702, 1.8814, 39.6175),
    Term::new(0.00002155, 2.0943, 2.9689),
    Term::new(0.00002153, 5.1687, 76.2661),
    Term::new(0.00001603, 0.0, 0.0),
    Term::new(0.00001464, 1.1842, 33.6796),
    Term::new(0.00001136, 3.9189, 36.6486),
    Term::new(0.00000898, 5.241, 388.465),
    Term::new(0.0000079, 0.533, 168.053),
    Term::new(0.0000076, 0.021, 182.28),
    Term::new(0.00000607, 1.077, 1021.249),
    Term::new(0.00000572, 3.401, 484.444),
    Term::new(0.00000561, 2.887, 498.671),
];

#[allow(clippy::excessive_precision)]
const RAD_2: &[Term] = &[
    Term::new(0.00004247, 5.8991, 38.133),
    Term::new(0.00000218, 0.346, 1.484),
    Term::new(0.00000163, 2.239, 168.053),
    Term::new(0.00000156, 4.594, 182.28),
    Term::new(0.00000127, 2.848, 35.164),
];

#[allow(clippy::excessive_precision)]
const RAD_3: &[Term] = &[
    Term::new(0.00000166, 4.552, 38.133),
];

pub(crate) static NEPTUNE: VsopModel = VsopModel {
    lon: &[LON_0, LON_1, LON_2, LON_3, LON_4],
    lat: &[LAT_0, LAT_1, LAT_2, LAT_3, LAT_4],
    rad: &[RAD_0, RAD_1, RAD_2, RAD_3],
};
