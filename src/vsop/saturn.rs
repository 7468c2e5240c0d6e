//! Truncated VSOP87D series for Saturn: heliocentric longitude, latitude
//! (radians) and radius (AU), ecliptic and equinox of date.

use crate::series::Term;

use super::VsopModel;

#[allow(clippy::excessive_precision)]
const LON_0: &[Term] = &[
    Term::new(0.87401354, 0.0, 0.0),
    Term::new(0.1110766, 3.9620509, 213.29909544),
    Term::new(0.01414151, 4.5858152, 7.113547),
    Term::new(0.00398379, 0.52112, 206.185548),
    Term::new(0.00350769, 3.303299, 426.598191),
    Term::new(0.00206816, 0.246584, 103.092774),
    Term::new(0.00079271, 3.84007, 220.41264),
    Term::new(0.0002399, 4.66977, 110.20632),
    Term::new(0.00016574, 0.43719, 419.48464),
    Term::new(0.0001582, 0.93809, 632.78374),
    Term::new(0.00015054, 2.7167, 639.89729),
    Term::new(0.00014907, 5.76903, 316.39187),
    Term::new(0.0001461, 1.56519, 3.93215),
    Term::new(0.0001316, 4.44891, 14.22709),
    Term::new(0.00013005, 5.98119, 11.0457),
    Term::new(0.00010725, 3.1294, 202.2534),
    Term::new(0.00006126, 1.7633, 277.035),
    Term::new(0.00005863, 0.2366, 529.691),
    Term::new(0.00005228, 4.2078, 3.1814),
    Term::new(0.0000502, 3.1779, 433.7117),
    Term::new(0.00004593, 0.6198, 199.072),
    Term::new(0.00004006, 2.2448, 63.7359),
    Term::new(0.00003874, 3.2228, 138.5175),
    Term::new(0.00003269, 0.7749, 949.1756),
    Term::new(0.00002954, 0.9828, 95.9792),
    Term::new(0.00002461, 2.0316, 735.8765),
    Term::new(0.00001758, 3.2658, 522.5774),
    Term::new(0.0000164, 5.505, 846.0828),
    Term::new(0.00001581, 4.3727, 309.2783),
    Term::new(0.00001391, 4.0233, 323.5054),
    Term::new(0.00001124, 2.8373, 415.5525),
    Term::new(0.00001087, 4.1834, 2.4477),
    Term::new(0.00001017, 3.717, 227.5262),
    Term::new(0.00000957, 0.507, 1265.567),
    Term::new(0.00000853, 3.421, 175.166),
    Term::new(0.00000849, 3.191, 209.367),
    Term::new(0.00000789, 5.007, 0.963),
    Term::new(0.00000749, 2.144, 853.196),
    Term::new(0.00000744, 5.253, 224.345),
    Term::new(0.00000687, 1.747, 1052.268),
    Term::new(0.00000654, 1.599, 0.048),
    Term::new(0.00000634, 2.299, 412.371),
    Term::new(0.00000625, 0.97, 210.118),
    Term::new(0.0000058, 3.093, 74.782),
    Term::new(0.00000546, 2.127, 350.332),
    Term::new(0.00000543, 1.518, 9.561),
    Term::new(0.0000053, 4.449, 117.32),
    Term::new(0.00000478, 2.965, 137.033),
    Term::new(0.00000474, 5.475, 742.99),
    Term::new(0.00000452, 1.044, 490.334),
    Term::new(0.00000449, 1.29, 127.472),
    Term::new(0.00000372, 2.278, 217.231),
    Term::new(0.00000355, 3.013, 838.969),
    Term::new(0.00000347, 1.539, 340.771),
    Term::new(0.00000343, 0.246, 0.521),
    Term::new(0.0000033, 0.247, 1581.959),
    Term::new(0.00000322, 0.961, 203.738),
    Term::new(0.00000322, 2.572, 647.011),
    Term::new(0.00000309, 3.495, 216.48),
    Term::new(0.00000287, 2.37, 351.817),
    Term::new(0.00000278, 0.4, 211.815),
    Term::new(0.00000249, 1.47, 1368.66),
    Term::new(0.00000227, 4.91, 12.53),
    Term::new(0.0000022, 4.204, 200.769),
    Term::new(0.00000209, 1.345, 625.67),
    Term::new(0.00000208, 0.483, 1162.475),
    Term::new(0.00000208, 1.283, 39.357),
    Term::new(0.00000204, 6.011, 265.989),
    Term::new(0.00000185, 3.503, 149.563),
    Term::new(0.00000184, 0.973, 4.193),
    Term::new(0.00000182, 5.491, 2.921),
    Term::new(0.00000174, 1.863, 0.751),
    Term::new(0.00000165, 0.44, 5.417),
    Term::new(0.00000149, 5.736, 52.69),
    Term::new(0.00000148, 1.535, 5.629),
    Term::new(0.00000146, 6.231, 195.14),
    Term::new(0.0000014, 4.295, 21.341),
    Term::new(0.00000131, 4.068, 10.295),
    Term::new(0.00000125, 6.277, 1898.351),
    Term::new(0.00000122, 1.976, 4.666),
    Term::new(0.00000118, 5.341, 554.07),
    Term::new(0.00000117, 2.679, 1155.361),
    Term::new(0.00000114, 5.594, 1059.382),
    Term::new(0.00000112, 1.105, 191.208),
    Term::new(0.0000011, 0.166, 1.484),
    Term::new(0.00000109, 3.438, 536.805),
    Term::new(0.00000107, 4.012, 956.289),
    Term::new(0.00000104, 2.192, 88.866),
    Term::new(0.00000103, 1.197, 1685.052),
    Term::new(0.00000101, 4.965, 269.921),
];

#[allow(clippy::excessive_precision)]
const LON_1: &[Term] = &[
    Term::new(213.54295596, 0.0, 0.0),
    Term::new(0.01296855, 1.8282054, 213.2990954),
    Term::new(0.00564348, 2.885001, 7.113547),
    Term::new(0.00107679, 2.277699, 206.185548),
    Term::new(0.00098323, 1.0807, 426.59819),
    Term::new(0.00040255, 2.04128, 220.41264),
    Term::new(0.00019942, 1.27955, 103.09277),
    Term::new(0.00010512, 2.7488, 14.22709),
    Term::new(0.00006939, 0.4049, 639.8973),
    Term::new(0.00004803, 2.4419, 419.4846),
    Term::new(0.00004056, 2.9217, 110.2063),
    Term::new(0.00003769, 3.6497, 3.9322),
    Term::new(0.00003385, 2.4169, 3.1814),
    Term::new(0.00003302, 1.2626, 433.7117),
    Term::new(0.00003071, 2.3274, 199.072),
    Term::new(0.00001953, 3.5639, 11.0457),
    Term::new(0.00001249, 2.628, 95.9792),
    Term::new(0.00000922, 1.961, 227.526),
    Term::new(0.00000706, 4.417, 529.691),
    Term::new(0.0000065, 6.174, 202.253),
    Term::new(0.00000628, 6.111, 309.278),
    Term::new(0.00000487, 6.04, 853.196),
    Term::new(0.00000479, 4.988, 522.577),
    Term::new(0.00000468, 4.617, 63.736),
    Term::new(0.00000417, 2.117, 323.505),
    Term::new(0.00000408, 1.299, 209.367),
    Term::new(0.00000352, 2.317, 632.784),
    Term::new(0.00000344, 3.959, 412.371),
    Term::new(0.0000034, 3.634, 316.392),
    Term::new(0.00000336, 3.772, 735.877),
    Term::new(0.00000332, 2.861, 210.118),
    Term::new(0.00000289, 2.733, 117.32),
    Term::new(0.00000281, 5.744, 2.448),
    Term::new(0.00000266, 0.543, 647.011),
    Term::new(0.0000023, 1.644, 216.48),
    Term::new(0.00000192, 2.965, 224.345),
    Term::new(0.00000173, 4.077, 846.083),
    Term::new(0.00000167, 2.597, 21.341),
    Term::new(0.00000136, 2.286, 10.295),
    Term::new(0.00000131, 3.441, 742.99),
    Term::new(0.00000128, 4.095, 217.231),
    Term::new(0.00000109, 6.161, 415.552),
    Term::new(0.00000098, 4.73, 838.97),
    Term::new(0.00000094, 3.48, 1052.27),
    Term::new(0.00000092, 3.95, 88.87),
    Term::new(0.00000087, 1.22, 440.83),
    Term::new(0.00000083, 3.11, 625.67),
    Term::new(0.00000078, 6.24, 302.16),
    Term::new(0.00000067, 0.29, 4.67),
    Term::new(0.00000066, 5.65, 9.56),
    Term::new(0.00000062, 4.29, 127.47),
    Term::new(0.00000062, 1.83, 195.14),
    Term::new(0.00000058, 2.48, 191.96),
    Term::new(0.00000057, 5.02, 137.03),
    Term::new(0.00000055, 0.28, 74.78),
    Term::new(0.00000054, 5.13, 490.33),
    Term::new(0.00000051, 1.46, 536.8),
    Term::new(0.00000047, 1.18, 149.56),
    Term::new(0.00000047, 5.15, 515.46),
    Term::new(0.00000046, 2.23, 956.29),
    Term::new(0.00000044, 2.71, 5.42),
    Term::new(0.0000004, 0.41, 269.92),
    Term::new(0.0000004, 3.89, 728.76),
    Term::new(0.00000038, 0.65, 422.67),
    Term::new(0.00000038, 2.53, 12.53),
    Term::new(0.00000037, 3.78, 2.92),
    Term::new(0.00000035, 6.08, 5.63),
    Term::new(0.00000034, 3.21, 1368.66),
    Term::new(0.00000033, 4.64, 277.03),
    Term::new(0.00000033, 5.43, 1066.5),
    Term::new(0.00000033, 0.3, 351.82),
    Term::new(0.00000032, 4.39, 1155.36),
    Term::new(0.00000031, 2.43, 52.69),
    Term::new(0.0000003, 2.84, 203.0),
    Term::new(0.0000003, 6.19, 284.15),
    Term::new(0.0000003, 3.39, 1059.38),
    Term::new(0.00000029, 2.03, 330.62),
    Term::new(0.00000028, 2.74, 265.99),
    Term::new(0.00000026, 4.51, 340.77),
];

#[allow(clippy::excessive_precision)]
const LON_2: &[Term] = &[
    Term::new(0.00116441, 1.179879, 7.113547),
    Term::new(0.00091921, 0.07425, 213.2991),
    Term::new(0.00090592, 0.0, 0.0),
    Term::new(0.00015277, 4.06492, 206.18555),
    Term::new(0.00010631, 0.25778, 220.41264),
    Term::new(0.00010605, 5.40964, 426.59819),
    Term::new(0.00004265, 1.046, 14.2271),
    Term::new(0.00001216, 2.9186, 103.0928),
    Term::new(0.00001165, 4.6094, 639.8973),
    Term::new(0.00001082, 5.6913, 433.7117),
    Term::new(0.00001045, 4.0421, 199.072),
    Term::new(0.0000102, 0.6337, 3.1814),
    Term::new(0.00000634, 4.388, 419.485),
    Term::new(0.00000549, 5.573, 3.932),
    Term::new(0.00000457, 1.268, 110.206),
    Term::new(0.00000425, 0.209, 227.526),
    Term::new(0.00000274, 4.288, 95.979),
    Term::new(0.00000162, 1.381, 11.046),
    Term::new(0.00000129, 1.566, 309.278),
    Term::new(0.00000117, 3.881, 853.196),
    Term::new(0.00000105, 4.9, 647.011),
    Term::new(0.00000101, 0.893, 21.341),
    Term::new(0.00000096, 2.91, 316.39),
    Term::new(0.00000095, 5.63, 412.37),
    Term::new(0.00000085, 5.73, 209.37),
    Term::new(0.00000083, 6.05, 216.48),
    Term::new(0.00000082, 1.02, 117.32),
    Term::new(0.00000075, 4.76, 210.12),
    Term::new(0.00000067, 0.46, 522.58),
    Term::new(0.00000066, 0.48, 10.29),
    Term::new(0.00000064, 0.35, 323.51),
    Term::new(0.00000061, 4.88, 632.78),
    Term::new(0.00000053, 2.75, 529.69),
    Term::new(0.00000046, 5.69, 440.83),
    Term::new(0.00000045, 1.67, 202.25),
    Term::new(0.00000042, 5.71, 88.87),
    Term::new(0.00000032, 0.07, 63.74),
    Term::new(0.00000032, 1.67, 302.16),
    Term::new(0.00000031, 4.16, 191.96),
    Term::new(0.00000027, 0.83, 224.34),
    Term::new(0.00000025, 5.66, 735.88),
    Term::new(0.0000002, 5.94, 217.23),
    Term::new(0.00000018, 4.9, 625.67),
    Term::new(0.00000017, 1.63, 742.99),
    Term::new(0.00000016, 0.58, 515.46),
    Term::new(0.00000014, 0.21, 838.97),
    Term::new(0.00000014, 3.76, 195.14),
    Term::new(0.00000012, 4.72, 203.0),
    Term::new(0.00000012, 0.13, 234.64),
    Term::new(0.00000012, 3.12, 846.08),
    Term::new(0.00000011, 5.92, 536.8),
    Term::new(0.00000011, 5.6, 728.76),
    Term::new(0.00000011, 3.2, 1066.5),
    Term::new(0.0000001, 4.99, 422.67),
    Term::new(0.0000001, 0.26, 330.62),
    Term::new(0.0000001, 4.15, 860.31),
    Term::new(0.00000009, 0.46, 956.29),
    Term::new(0.00000008, 2.14, 269.92),
    Term::new(0.00000008, 5.25, 429.78),
    Term::new(0.00000008, 4.03, 9.56),
    Term::new(0.00000007, 5.4, 1052.27),
    Term::new(0.00000006, 4.46, 284.15),
    Term::new(0.00000006, 5.93, 405.26),
];

#[allow(clippy::excessive_precision)]
const LON_3: &[Term] = &[
    Term::new(0.00016039, 5.73945, 7.11355),
    Term::new(0.0000425, 4.5854, 213.2991),
    Term::new(0.00001907, 4.7608, 220.4126),
    Term::new(0.00001466, 5.9133, 206.1855),
    Term::new(0.00001162, 5.6197, 14.2271),
    Term::new(0.00001067, 3.6082, 426.5982),
    Term::new(0.00000239, 3.861, 433.712),
    Term::new(0.00000237, 5.768, 199.072),
    Term::new(0.00000166, 5.116, 3.181),
    Term::new(0.00000151, 2.736, 639.897),
    Term::new(0.00000131, 4.743, 227.526),
    Term::new(0.00000063, 0.23, 419.48),
    Term::new(0.00000062, 4.74, 103.09),
    Term::new(0.0000004, 5.47, 21.34),
    Term::new(0.0000004, 5.96, 95.98),
    Term::new(0.00000039, 5.83, 110.21),
    Term::new(0.00000028, 3.01, 647.01),
    Term::new(0.00000025, 0.99, 3.93),
    Term::new(0.00000019, 1.92, 853.2),
    Term::new(0.00000018, 4.97, 10.29),
    Term::new(0.00000018, 1.03, 412.37),
    Term::new(0.00000018, 4.2, 216.48),
    Term::new(0.00000018, 3.32, 309.28),
    Term::new(0.00000016, 3.9, 440.83),
    Term::new(0.00000016, 5.62, 117.32),
    Term::new(0.00000013, 1.18, 88.87),
    Term::new(0.00000011, 5.58, 11.05),
    Term::new(0.00000011, 5.93, 191.96),
    Term::new(0.0000001, 3.95, 209.37),
    Term::new(0.00000009, 3.39, 302.16),
    Term::new(0.00000008, 4.88, 323.51),
    Term::new(0.00000007, 0.38, 632.78),
    Term::new(0.00000006, 2.25, 522.58),
    Term::new(0.00000006, 1.06, 210.12),
    Term::new(0.00000005, 4.64, 234.64),
    Term::new(0.00000004, 3.14, 0.0),
    Term::new(0.00000004, 2.31, 515.46),
    Term::new(0.00000003, 2.2, 860.31),
    Term::new(0.00000003, 0.59, 529.69),
    Term::new(0.00000003, 4.93, 224.34),
    Term::new(0.00000003, 0.42, 625.67),
    Term::new(0.00000002, 4.77, 330.62),
    Term::new(0.00000002, 3.35, 429.78),
    Term::new(0.00000002, 3.2, 202.25),
    Term::new(0.00000002, 1.19, 1066.5),
    Term::new(0.00000002, 1.35, 405.26),
    Term::new(0.00000002, 4.16, 223.59),
    Term::new(0.00000002, 3.07, 654.12),
];

#[allow(clippy::excessive_precision)]
const LON_4: &[Term] = &[
    Term::new(0.00001662, 3.9983, 7.1135),
    Term::new(0.00000257, 2.984, 220.413),
    Term::new(0.00000236, 3.902, 14.227),
    Term::new(0.00000149, 2.741, 213.299),
    Term::new(0.00000114, 3.142, 0.0),
    Term::new(0.0000011, 1.515, 206.186),
    Term::new(0.00000068, 1.72, 426.6),
    Term::new(0.0000004, 2.05, 433.71),
    Term::new(0.00000038, 1.24, 199.07),
    Term::new(0.00000031, 3.01, 227.53),
    Term::new(0.00000015, 0.83, 639.9),
    Term::new(0.00000009, 3.71, 21.34),
    Term::new(0.00000006, 2.42, 419.48),
    Term::new(0.00000006, 1.16, 647.01),
    Term::new(0.00000006, 1.45, 95.98),
    Term::new(0.00000006, 2.12, 440.83),
    Term::new(0.00000005, 2.59, 88.87),
    Term::new(0.00000004, 1.78, 110.21),
    Term::new(0.00000004, 2.24, 117.32),
    Term::new(0.00000003, 1.23, 853.2),
    Term::new(0.00000003, 4.18, 3.18),
];

#[allow(clippy::excessive_precision)]
const LON_5: &[Term] = &[
    Term::new(0.00000124, 2.259, 7.114),
    Term::new(0.00000034, 2.16, 14.23),
    Term::new(0.00000028, 1.2, 220.41),
    Term::new(0.00000006, 1.22, 227.53),
    Term::new(0.00000005, 0.24, 433.71),
    Term::new(0.00000004, 6.23, 426.6),
    Term::new(0.00000003, 2.97, 199.07),
    Term::new(0.00000003, 4.29, 206.19),
    Term::new(0.00000002, 6.25, 213.3),
    Term::new(0.00000001, 5.28, 639.9),
    Term::new(0.00000001, 0.24, 440.83),
    Term::new(0.00000001, 3.14, 0.0),
];

#[allow(clippy::excessive_precision)]
const LAT_0: &[Term] = &[
    Term::new(0.04330678, 3.6028443, 213.2990954),
    Term::new(0.00240348, 2.852385, 426.598191),
    Term::new(0.00084746, 0.0, 0.0),
    Term::new(0.00034116, 0.57297, 206.18555),
    Term::new(0.00030863, 3.48442, 220.41264),
    Term::new(0.00014734, 2.11847, 639.89729),
    Term::new(0.00009917, 5.79, 419.4846),
    Term::new(0.00006994, 4.736, 7.1135),
    Term::new(0.00004808, 5.4331, 316.3919),
    Term::new(0.00004788, 4.9651, 110.2063),
    Term::new(0.00003432, 2.7326, 433.7117),
    Term::new(0.00001506, 6.013, 103.0928),
    Term::new(0.0000106, 5.631, 529.691),
    Term::new(0.00000969, 5.204, 632.784),
    Term::new(0.00000942, 1.396, 853.196),
    Term::new(0.00000708, 3.803, 323.505),
    Term::new(0.00000552, 5.131, 202.253),
    Term::new(0.000004, 3.359, 227.526),
    Term::new(0.00000319, 3.626, 209.367),
    Term::new(0.00000316, 1.997, 647.011),
    Term::new(0.00000314, 0.465, 217.231),
    Term::new(0.00000284, 4.886, 224.345),
    Term::new(0.00000236, 2.139, 11.046),
    Term::new(0.00000215, 5.95, 846.083),
    Term::new(0.00000209, 2.12, 415.552),
    Term::new(0.00000207, 0.73, 199.072),
    Term::new(0.00000179, 2.954, 63.736),
    Term::new(0.00000141, 0.644, 490.334),
    Term::new(0.00000139, 4.595, 14.227),
    Term::new(0.00000139, 1.998, 735.877),
    Term::new(0.00000135, 5.245, 742.99),
    Term::new(0.00000122, 3.115, 522.577),
    Term::new(0.00000116, 3.109, 216.48),
    Term::new(0.00000114, 0.963, 210.118),
];

#[allow(clippy::excessive_precision)]
const LAT_1: &[Term] = &[
    Term::new(0.00397555, 5.3329, 213.299095),
    Term::new(0.00049479, 3.14159, 0.0),
    Term::new(0.00018572, 6.09919, 426.59819),
    Term::new(0.00014801, 2.30586, 206.18555),
    Term::new(0.00009644, 1.6967, 220.4126),
    Term::new(0.00003757, 1.2543, 419.4846),
    Term::new(0.00002717, 5.9117, 639.8973),
    Term::new(0.00001455, 0.8516, 433.7117),
    Term::new(0.00001291, 2.9177, 7.1135),
    Term::new(0.00000853, 0.436, 316.392),
    Term::new(0.00000298, 0.919, 632.784),
    Term::new(0.00000292, 5.316, 853.196),
    Term::new(0.00000284, 1.619, 227.526),
    Term::new(0.00000275, 3.889, 103.093),
    Term::new(0.00000172, 0.052, 647.011),
    Term::new(0.00000166, 2.444, 199.072),
    Term::new(0.00000158, 5.209, 110.206),
    Term::new(0.00000128, 1.207, 529.691),
    Term::new(0.0000011, 2.457, 217.231),
    Term::new(0.00000082, 2.76, 210.12),
    Term::new(0.00000081, 2.86, 14.23),
    Term::new(0.00000069, 1.66, 202.25),
    Term::new(0.00000065, 1.26, 216.48),
    Term::new(0.00000061, 1.25, 209.37),
    Term::new(0.00000059, 1.82, 323.51),
    Term::new(0.00000046, 0.82, 440.83),
    Term::new(0.00000036, 1.82, 224.34),
    Term::new(0.00000034, 2.84, 117.32),
    Term::new(0.00000033, 1.31, 412.37),
    Term::new(0.00000032, 1.19, 846.08),
    Term::new(0.00000027, 4.65, 1066.5),
    Term::new(0.00000027, 4.44, 11.05),
];

#[allow(clippy::excessive_precision)]
const LAT_2: &[Term] = &[
    Term::new(0.0002063, 0.50482, 213.2991),
    Term::new(0.0000372, 3.9983, 206.1855),
    Term::new(0.00001627, 6.1819, 220.4126),
    Term::new(0.00001346, 0.0, 0.0),
    Term::new(0.00000706, 3.039, 419.485),
    Term::new(0.00000365, 5.099, 426.598),
    Term::new(0.0000033, 5.279, 433.712),
    Term::new(0.00000219, 3.828, 639.897),
    Term::new(0.00000139, 1.043, 7.114),
    Term::new(0.00000104, 6.157, 227.526),
    Term::new(0.00000093, 1.98, 316.39),
    Term::new(0.00000071, 4.15, 199.07),
    Term::new(0.00000052, 2.88, 632.78),
    Term::new(0.00000049, 4.43, 647.01),
    Term::new(0.00000041, 3.16, 853.2),
    Term::new(0.00000029, 4.53, 210.12),
    Term::new(0.00000024, 1.12, 14.23),
    Term::new(0.00000021, 4.35, 217.23),
    Term::new(0.0000002, 5.31, 440.83),
    Term::new(0.00000018, 0.85, 110.21),
    Term::new(0.00000017, 5.68, 216.48),
    Term::new(0.00000016, 4.26, 103.09),
    Term::new(0.00000014, 3.0, 412.37),
    Term::new(0.00000012, 2.53, 529.69),
    Term::new(0.00000008, 3.32, 202.25),
    Term::new(0.00000007, 5.56, 209.37),
    Term::new(0.00000007, 0.29, 323.51),
    Term::new(0.00000006, 1.16, 117.32),
    Term::new(0.00000006, 3.61, 860.31),
];

#[allow(clippy::excessive_precision)]
const LAT_3: &[Term] = &[
    Term::new(0.00000666, 1.99, 213.299),
    Term::new(0.00000632, 5.698, 206.186),
    Term::new(0.00000398, 0.0, 0.0),
    Term::new(0.00000188, 4.338, 220.413),
    Term::new(0.00000092, 4.84, 419.48),
    Term::new(0.00000052, 3.42, 433.71),
    Term::new(0.00000042, 2.38, 426.6),
    Term::new(0.00000026, 4.4, 227.53),
    Term::new(0.00000021, 5.85, 199.07),
    Term::new(0.00000018, 1.99, 639.9),
    Term::new(0.00000011, 5.37, 7.11),
    Term::new(0.0000001, 2.44, 440.83),
    Term::new(0.00000007, 2.46, 210.12),
];

#[allow(clippy::excessive_precision)]
const LAT_4: &[Term] = &[
    Term::new(0.0000008, 1.12, 206.19),
    Term::new(0.00000032, 3.12, 213.3),
    Term::new(0.00000017, 2.48, 220.41),
    Term::new(0.00000012, 3.14, 0.0),
    Term::new(0.00000009, 0.38, 419.48),
    Term::new(0.00000005, 1.56, 433.71),
];

#[allow(clippy::excessive_precision)]
const LAT_5: &[Term] = &[
    Term::new(0.00000008, 2.82, 206.19),
    Term::new(0.00000001, 0.51, 220.41),
];

#[allow(clippy::excessive_precision)]
const RAD_0: &[Term] = &[
    Term::new(9.55758136, 0.0, 0.0),
    Term::new(0.52921382, 2.3922622, 213.29909544),
    Term::new(0.0187368, 5.2354961, 206.1855484),
    Term::new(0.01464664, 1.6476305, 426.5981909),
    Term::new(0.00821891, 5.9352, 316.39187),
    Term::new(0.00547507, 5.015326, 103.092774),
    Term::new(0.00371684, 2.271148, 220.412642),
    Term::new(0.00361778, 3.139043, 7.113547),
    Term::new(0.00140618, 5.704067, 632.783739),
    Term::new(0.00108975, 3.293136, 110.206321),
    Term::new(0.00069007, 5.941, 419.48464),
    Term::new(0.00061053, 0.94038, 639.89729),
    Term::new(0.00048913, 1.55733, 202.2534),
    Term::new(0.00034144, 0.19519, 277.03499),
    Term::new(0.00032402, 5.47085, 949.17561),
    Term::new(0.00020937, 0.46349, 735.87651),
    Term::new(0.00020839, 1.52103, 433.71174),
    Term::new(0.00020747, 5.33256, 199.072),
    Term::new(0.00015298, 3.05944, 529.69097),
    Term::new(0.00014296, 2.60434, 323.50542),
    Term::new(0.00012884, 1.64892, 138.5175),
    Term::new(0.00011993, 5.98051, 846.08283),
    Term::new(0.0001138, 1.73106, 522.57742),
    Term::new(0.00009796, 5.2048, 1265.5675),
    Term::new(0.00007753, 5.8519, 95.9792),
    Term::new(0.00006771, 3.0043, 14.2271),
    Term::new(0.00006466, 0.1773, 1052.2684),
    Term::new(0.0000585, 1.4552, 415.5525),
    Term::new(0.00005307, 0.5974, 63.7359),
    Term::new(0.00004696, 2.1492, 227.5262),
    Term::new(0.00004044, 1.6401, 209.3669),
    Term::new(0.00003688, 0.7802, 412.3711),
    Term::new(0.00003461, 1.8509, 175.1661),
    Term::new(0.0000342, 4.9455, 1581.9593),
    Term::new(0.00003401, 0.5539, 350.3321),
    Term::new(0.00003376, 3.6953, 224.3448),
    Term::new(0.00002976, 5.6847, 210.1177),
    Term::new(0.00002885, 1.3876, 838.9693),
    Term::new(0.00002881, 0.1796, 853.1964),
    Term::new(0.00002508, 3.5385, 742.9901),
    Term::new(0.00002448, 6.1841, 1368.6603),
    Term::new(0.00002406, 2.9656, 117.3199),
    Term::new(0.00002174, 0.0151, 340.7709),
    Term::new(0.00002024, 5.0541, 11.0457),
];

#[allow(clippy::excessive_precision)]
const RAD_1: &[Term] = &[
    Term::new(0.06182981, 0.2584352, 213.2990954),
    Term::new(0.00506578, 0.711147, 206.185548),
    Term::new(0.00341394, 5.796358, 426.598191),
    Term::new(0.00188491, 0.472157, 220.412642),
    Term::new(0.00186262, 3.141593, 0.0),
    Term::new(0.00143891, 1.407449, 7.113547),
    Term::new(0.00049621, 6.01744, 103.09277),
    Term::new(0.00020928, 5.09246, 639.89729),
    Term::new(0.00019953, 1.1756, 419.48464),
    Term::new(0.0001884, 1.6082, 110.20632),
    Term::new(0.00013877, 0.75886, 199.072),
    Term::new(0.00012893, 5.9433, 433.71174),
    Term::new(0.00005397, 1.2885, 14.2271),
    Term::new(0.00004869, 0.8679, 323.5054),
    Term::new(0.00004247, 0.393, 227.5262),
    Term::new(0.00003252, 1.2585, 95.9792),
    Term::new(0.00003081, 3.4366, 522.5774),
    Term::new(0.00002909, 4.6068, 202.2534),
    Term::new(0.00002856, 2.1673, 735.8765),
    Term::new(0.00001988, 2.4505, 412.3711),
    Term::new(0.00001941, 6.0239, 209.3669),
    Term::new(0.00001581, 1.2919, 210.1177),
    Term::new(0.0000134, 4.308, 853.1964),
    Term::new(0.00001316, 1.253, 117.3199),
    Term::new(0.00001203, 1.8665, 316.3919),
    Term::new(0.00001091, 0.0753, 216.4805),
    Term::new(0.00000966, 0.48, 632.784),
    Term::new(0.00000954, 5.152, 647.011),
    Term::new(0.00000898, 0.983, 529.691),
    Term::new(0.00000882, 1.885, 1052.268),
    Term::new(0.00000874, 1.402, 224.345),
    Term::new(0.00000785, 3.064, 838.969),
    Term::new(0.0000074, 1.382, 625.67),
    Term::new(0.00000658, 4.144, 309.278),
    Term::new(0.0000065, 1.725, 742.99),
    Term::new(0.00000613, 3.033, 63.736),
    Term::new(0.00000599, 2.549, 217.231),
    Term::new(0.00000503, 2.13, 3.932),
];

#[allow(clippy::excessive_precision)]
const RAD_2: &[Term] = &[
    Term::new(0.00436902, 4.786717, 213.299095),
    Term::new(0.00071923, 2.5007, 206.18555),
    Term::new(0.00049767, 4.97168, 220.41264),
    Term::new(0.00043221, 3.8694, 426.59819),
    Term::new(0.00029646, 5.9631, 7.11355),
    Term::new(0.00004721, 2.4753, 199.072),
    Term::new(0.00004142, 4.1067, 433.7117),
    Term::new(0.00003789, 3.0977, 639.8973),
    Term::new(0.00002964, 1.3721, 103.0928),
    Term::new(0.00002556, 2.8507, 419.4846),
    Term::new(0.00002327, 0.0, 0.0),
    Term::new(0.00002208, 6.2759, 110.2063),
    Term::new(0.00002188, 5.8555, 14.2271),
    Term::new(0.00001957, 4.9245, 227.5262),
    Term::new(0.00000924, 5.464, 323.505),
    Term::new(0.00000706, 2.971, 95.979),
    Term::new(0.00000546, 4.129, 412.371),
    Term::new(0.00000431, 5.178, 522.577),
    Term::new(0.00000405, 4.173, 209.367),
    Term::new(0.00000391, 4.481, 216.48),
    Term::new(0.00000374, 5.834, 117.32),
    Term::new(0.00000361, 3.277, 647.011),
    Term::new(0.00000356, 3.192, 210.118),
    Term::new(0.00000326, 2.269, 853.196),
    Term::new(0.00000207, 4.022, 735.877),
    Term::new(0.00000204, 0.088, 202.253),
    Term::new(0.0000018, 3.597, 632.784),
    Term::new(0.00000178, 4.097, 440.825),
    Term::new(0.00000154, 3.135, 625.67),
    Term::new(0.00000148, 0.136, 302.165),
    Term::new(0.00000133, 2.594, 191.958),
    Term::new(0.00000132, 5.933, 309.278),
];

#[allow(clippy::excessive_precision)]
const RAD_3: &[Term] = &[
    Term::new(0.00020315, 3.02187, 213.2991),
    Term::new(0.00008924, 3.1914, 220.4126),
    Term::new(0.00006909, 4.3517, 206.1855),
    Term::new(0.00004087, 4.2241, 7.1135),
    Term::new(0.00003879, 2.0106, 426.5982),
    Term::new(0.00001071, 4.2036, 199.072),
    Term::new(0.00000907, 2.283, 433.712),
    Term::new(0.00000606, 3.175, 227.526),
    Term::new(0.00000597, 4.135, 14.227),
    Term::new(0.00000483, 1.173, 639.897),
    Term::new(0.00000393, 0.0, 0.0),
    Term::new(0.00000229, 4.698, 419.485),
    Term::new(0.00000188, 4.59, 110.206),
    Term::new(0.0000015, 3.202, 103.093),
    Term::new(0.00000121, 3.768, 323.505),
    Term::new(0.00000102, 4.71, 95.979),
    Term::new(0.00000101, 5.819, 412.371),
    Term::new(0.00000093, 1.44, 647.01),
    Term::new(0.00000084, 2.63, 216.48),
    Term::new(0.00000073, 4.15, 117.32),
    Term::new(0.00000062, 2.31, 440.83),
    Term::new(0.00000055, 0.31, 853.2),
    Term::new(0.0000005, 2.39, 209.37),
    Term::new(0.00000045, 4.37, 191.96),
    Term::new(0.00000041, 0.69, 522.58),
    Term::new(0.0000004, 1.84, 302.16),
    Term::new(0.00000038, 5.94, 88.87),
    Term::new(0.00000032, 4.01, 21.34),
];

#[allow(clippy::excessive_precision)]
const RAD_4: &[Term] = &[
    Term::new(0.00001202, 1.415, 220.4126),
    Term::new(0.00000708, 1.162, 213.299),
    Term::new(0.00000516, 6.24, 206.186),
    Term::new(0.00000427, 2.469, 7.114),
    Term::new(0.00000268, 0.187, 426.598),
    Term::new(0.0000017, 5.959, 199.072),
    Term::new(0.0000015, 0.48, 433.712),
    Term::new(0.00000145, 1.442, 227.526),
    Term::new(0.00000121, 2.405, 14.227),
    Term::new(0.00000047, 5.57, 639.9),
    Term::new(0.00000019, 5.86, 647.01),
    Term::new(0.00000017, 0.53, 440.83),
    Term::new(0.00000016, 2.9, 110.21),
    Term::new(0.00000015, 0.3, 419.48),
    Term::new(0.00000014, 1.3, 412.37),
    Term::new(0.00000013, 2.09, 323.51),
    Term::new(0.00000011, 0.22, 95.98),
    Term::new(0.00000011, 2.46, 117.32),
    Term::new(0.0000001, 3.14, 0.0),
    Term::new(0.00000009, 1.56, 88.87),
    Term::new(0.00000009, 2.28, 21.34),
    Term::new(0.00000009, 0.68, 216.48),
    Term::new(0.00000008, 1.27, 234.64),
];

#[allow(clippy::excessive_precision)]
const RAD_5: &[Term] = &[
    Term::new(0.00000129, 5.913, 220.413),
    Term::new(0.00000032, 0.69, 7.11),
    Term::new(0.00000027, 5.91, 227.53),
    Term::new(0.0000002, 4.95, 433.71),
    Term::new(0.0000002, 0.67, 14.23),
    Term::new(0.00000014, 2.67, 206.19),
    Term::new(0.00000014, 1.46, 199.07),
    Term::new(0.00000013, 4.59, 426.6),
    Term::new(0.00000007, 4.63, 213.3),
    Term::new(0.00000005, 3.61, 639.9),
    Term::new(0.00000004, 4.9, 440.83),
    Term::new(0.00000003, 4.07, 647.01),
    Term::new(0.00000003, 4.66, 191.96),
    Term::new(0.00000003, 0.49, 323.51),
    Term::new(0.00000003, 3.18, 419.48),
    Term::new(0.00000002, 3.7, 88.87),
    Term::new(0.00000002, 3.32, 95.98),
    Term::new(0.00000002, 0.56, 117.32),
];

pub(crate) static SATURN: VsopModel = VsopModel {
    lon: &[LON_0, LON_1, LON_2, LON_3, LON_4, LON_5],
    lat: &[LAT_0, LAT_1, LAT_2, LAT_3, LAT_4, LAT_5],
    rad: &[RAD_0, RAD_1, RAD_2, RAD_3, RAD_4, RAD_5],
};
