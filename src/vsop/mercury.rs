//! Truncated VSOP87D series for Mercury: heliocentric longitude, latitude
//! (radians) and radius (AU), ecliptic and equinox of date.

use crate::series::Term;

use super::VsopModel;

#[allow(clippy::excessive_precision)]
const LON_0: &[Term] = &[
    Term::new(4.4025071, 0.0, 0.0),
    Term::new(0.40989415, 1.48302034, 26087.90314157),
    Term::new(0.05046294, 4.47785449, 52175.8062831),
    Term::new(0.00855347, 1.165203, 78263.709425),
    Term::new(0.0016559, 4.119692, 104351.612566),
    Term::new(0.00034562, 0.77931, 130439.51571),
    Term::new(0.00007583, 3.7135, 156527.4188),
    Term::new(0.0000356, 1.512, 1109.3786),
    Term::new(0.00001803, 4.1033, 5661.332),
    Term::new(0.00001726, 0.3583, 182615.322),
    Term::new(0.0000159, 2.9951, 25028.5212),
    Term::new(0.00001365, 4.5992, 27197.2817),
    Term::new(0.00001017, 0.8803, 31749.2352),
    Term::new(0.00000714, 1.541, 24978.525),
    Term::new(0.00000644, 5.303, 21535.95),
    Term::new(0.00000451, 6.05, 51116.424),
    Term::new(0.00000404, 3.282, 208703.225),
    Term::new(0.00000352, 5.242, 20426.571),
    Term::new(0.00000345, 2.792, 15874.618),
    Term::new(0.00000343, 5.765, 955.6),
    Term::new(0.00000339, 5.863, 25558.212),
    Term::new(0.00000325, 1.337, 53285.185),
    Term::new(0.00000273, 2.495, 529.691),
    Term::new(0.00000264, 3.917, 57837.138),
    Term::new(0.0000026, 0.987, 4551.953),
    Term::new(0.00000239, 0.113, 1059.382),
    Term::new(0.00000235, 0.267, 11322.664),
    Term::new(0.00000217, 0.66, 13521.751),
    Term::new(0.00000209, 2.092, 47623.853),
    Term::new(0.00000183, 2.629, 27043.503),
    Term::new(0.00000182, 2.434, 25661.305),
    Term::new(0.00000176, 4.536, 51066.428),
    Term::new(0.00000173, 2.452, 24498.83),
    Term::new(0.00000142, 3.36, 37410.567),
    Term::new(0.00000138, 0.291, 10213.286),
    Term::new(0.00000125, 3.721, 39609.655),
    Term::new(0.00000118, 2.781, 77204.327),
    Term::new(0.00000106, 4.206, 19804.827),
];

#[allow(clippy::excessive_precision)]
const LON_1: &[Term] = &[
    Term::new(26088.14706223, 0.0, 0.0),
    Term::new(0.01126008, 6.2170397, 26087.9031416),
    Term::new(0.00303471, 3.055655, 52175.806283),
    Term::new(0.00080538, 6.10455, 78263.70942),
    Term::new(0.00021245, 2.83532, 104351.61257),
    Term::new(0.00005592, 5.8268, 130439.5157),
    Term::new(0.00001472, 2.5185, 156527.4188),
    Term::new(0.00000388, 5.48, 182615.322),
    Term::new(0.00000352, 3.052, 1109.379),
    Term::new(0.00000103, 2.149, 24978.525),
    Term::new(0.00000094, 6.12, 27197.28),
    Term::new(0.00000091, 0.0, 20426.57),
    Term::new(0.00000052, 5.62, 5661.33),
    Term::new(0.00000044, 4.57, 208703.23),
    Term::new(0.00000028, 3.04, 51066.43),
    Term::new(0.00000027, 5.09, 234791.13),
];

#[allow(clippy::excessive_precision)]
const LON_2: &[Term] = &[
    Term::new(0.0005305, 0.0, 0.0),
    Term::new(0.00016904, 4.69072, 26087.90314),
    Term::new(0.00007397, 1.3474, 52175.8063),
    Term::new(0.00003018, 4.4564, 78263.7094),
    Term::new(0.00001107, 1.2623, 104351.6126),
    Term::new(0.00000378, 4.32, 130439.516),
    Term::new(0.00000123, 1.069, 156527.419),
    Term::new(0.00000039, 4.08, 182615.32),
    Term::new(0.00000015, 4.63, 1109.38),
    Term::new(0.00000012, 0.79, 208703.23),
];

#[allow(clippy::excessive_precision)]
const LON_3: &[Term] = &[
    Term::new(0.00000188, 0.035, 52175.806),
    Term::new(0.00000142, 3.125, 26087.903),
    Term::new(0.00000097, 3.0, 78263.71),
    Term::new(0.00000044, 6.02, 104351.61),
    Term::new(0.00000035, 0.0, 0.0),
    Term::new(0.00000018, 2.78, 130439.52),
    Term::new(0.00000007, 5.82, 156527.42),
    Term::new(0.00000003, 2.57, 182615.32),
];

#[allow(clippy::excessive_precision)]
const LON_4: &[Term] = &[
    Term::new(0.00000114, 3.1416, 0.0),
    Term::new(0.00000002, 2.03, 26087.9),
    Term::new(0.00000002, 1.42, 78263.71),
    Term::new(0.00000002, 4.5, 52175.81),
    Term::new(0.00000001, 4.5, 104351.61),
    Term::new(0.00000001, 1.27, 130439.52),
];

#[allow(clippy::excessive_precision)]
const LON_5: &[Term] = &[
    Term::new(0.00000001, 3.14, 0.0),
];

#[allow(clippy::excessive_precision)]
const LAT_0: &[Term] = &[
    Term::new(0.11737529, 1.98357499, 26087.90314157),
    Term::new(0.02388077, 5.0373896, 52175.8062831),
    Term::new(0.0122284, 3.1415927, 0.0),
    Term::new(0.00543252, 1.796444, 78263.709425),
    Term::new(0.00129779, 4.832325, 104351.612566),
    Term::new(0.00031867, 1.58088, 130439.51571),
    Term::new(0.00007963, 4.6097, 156527.4188),
    Term::new(0.00002014, 1.3532, 182615.322),
    Term::new(0.00000514, 4.378, 208703.225),
    Term::new(0.00000209, 2.02, 24978.525),
    Term::new(0.00000208, 4.918, 27197.282),
    Term::new(0.00000132, 1.119, 234791.128),
    Term::new(0.00000121, 1.813, 53285.185),
    Term::new(0.000001, 5.657, 20426.571),
];

#[allow(clippy::excessive_precision)]
const LAT_1: &[Term] = &[
    Term::new(0.00429151, 3.501698, 26087.903142),
    Term::new(0.00146234, 3.141593, 0.0),
    Term::new(0.00022675, 0.01515, 52175.80628),
    Term::new(0.00010895, 0.4854, 78263.70942),
    Term::new(0.00006353, 3.4294, 104351.6126),
    Term::new(0.00002496, 0.1605, 130439.5157),
    Term::new(0.0000086, 3.185, 156527.419),
    Term::new(0.00000278, 6.21, 182615.322),
    Term::new(0.00000086, 2.95, 208703.23),
    Term::new(0.00000028, 0.29, 27197.28),
    Term::new(0.00000026, 5.98, 234791.13),
];

#[allow(clippy::excessive_precision)]
const LAT_2: &[Term] = &[
    Term::new(0.00011831, 4.79066, 26087.90314),
    Term::new(0.00001914, 0.0, 0.0),
    Term::new(0.00001045, 1.2122, 52175.8063),
    Term::new(0.00000266, 4.434, 78263.709),
    Term::new(0.0000017, 1.623, 104351.613),
    Term::new(0.00000096, 4.8, 130439.52),
    Term::new(0.00000045, 1.61, 156527.42),
    Term::new(0.00000018, 4.67, 182615.32),
    Term::new(0.00000007, 1.43, 208703.23),
];

#[allow(clippy::excessive_precision)]
const LAT_3: &[Term] = &[
    Term::new(0.00000235, 0.354, 26087.903),
    Term::new(0.00000161, 0.0, 0.0),
    Term::new(0.00000019, 4.36, 52175.81),
    Term::new(0.00000006, 2.51, 78263.71),
    Term::new(0.00000005, 6.14, 104351.61),
    Term::new(0.00000003, 3.12, 130439.52),
    Term::new(0.00000002, 6.27, 156527.42),
];

#[allow(clippy::excessive_precision)]
const LAT_4: &[Term] = &[
    Term::new(0.00000004, 1.75, 26087.9),
    Term::new(0.00000001, 3.14, 0.0),
];

#[allow(clippy::excessive_precision)]
const RAD_0: &[Term] = &[
    Term::new(0.39528272, 0.0, 0.0),
    Term::new(0.07834132, 6.1923372, 26087.9031416),
    Term::new(0.00795526, 2.959897, 52175.806283),
    Term::new(0.00121282, 6.010642, 78263.709425),
    Term::new(0.00021922, 2.7782, 104351.61257),
    Term::new(0.00004354, 5.8289, 130439.5157),
    Term::new(0.00000918, 2.597, 156527.419),
    Term::new(0.0000029, 1.424, 25028.521),
    Term::new(0.0000026, 3.028, 27197.282),
    Term::new(0.00000202, 5.647, 182615.322),
    Term::new(0.00000201, 5.592, 31749.235),
    Term::new(0.00000142, 6.253, 24978.525),
    Term::new(0.000001, 3.734, 21535.95),
];

#[allow(clippy::excessive_precision)]
const RAD_1: &[Term] = &[
    Term::new(0.00217348, 4.656172, 26087.903142),
    Term::new(0.00044142, 1.42386, 52175.80628),
    Term::new(0.00010094, 4.47466, 78263.70942),
    Term::new(0.00002433, 1.2423, 104351.6126),
    Term::new(0.00001624, 0.0, 0.0),
    Term::new(0.00000604, 4.293, 130439.516),
    Term::new(0.00000153, 1.061, 156527.419),
    Term::new(0.00000039, 4.11, 182615.32),
];

#[allow(clippy::excessive_precision)]
const RAD_2: &[Term] = &[
    Term::new(0.00003118, 3.0823, 26087.9031),
    Term::new(0.00001245, 6.1518, 52175.8063),
    Term::new(0.00000425, 2.926, 78263.709),
    Term::new(0.00000136, 6.283, 104351.613),
    Term::new(0.00000042, 2.75, 130439.52),
    Term::new(0.00000022, 3.14, 0.0),
    Term::new(0.00000013, 5.8, 156527.42),
];

#[allow(clippy::excessive_precision)]
const RAD_3: &[Term] = &[
    Term::new(0.00000033, 1.68, 26087.9),
    Term::new(0.00000024, 4.63, 52175.81),
    Term::new(0.00000012, 1.39, 78263.71),
    Term::new(0.00000005, 4.44, 104351.61),
    Term::new(0.00000002, 1.21, 130439.52),
];

pub(super) static MERCURY: VsopModel = VsopModel {
    lon: &[LON_0, LON_1, LON_2, LON_3, LON_4, LON_5],
    lat: &[LAT_0, LAT_1, LAT_2, LAT_3, LAT_4],
    rad: &[RAD_0, RAD_1, RAD_2, RAD_3],
};
