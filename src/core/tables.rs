//! Embedded 2026 federal and 2025 state tables for a single filer.

use super::types::{Jurisdiction, StateTaxPolicy, TaxBracket};

pub const STANDARD_DEDUCTION: f64 = 16_100.0;

pub static FEDERAL_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::bounded(0.0, 12_400.0, 0.10),
    TaxBracket::bounded(12_401.0, 50_400.0, 0.12),
    TaxBracket::bounded(50_401.0, 105_700.0, 0.22),
    TaxBracket::bounded(105_701.0, 201_775.0, 0.24),
    TaxBracket::bounded(201_776.0, 256_225.0, 0.32),
    TaxBracket::bounded(256_226.0, 640_600.0, 0.35),
    TaxBracket::open(640_601.0, 0.37),
];

static ALABAMA: [TaxBracket; 3] = [
    TaxBracket::bounded(0.0, 500.0, 0.02),
    TaxBracket::bounded(501.0, 3_000.0, 0.04),
    TaxBracket::open(3_001.0, 0.05),
];

static ARKANSAS: [TaxBracket; 2] = [
    TaxBracket::bounded(0.0, 4_500.0, 0.02),
    TaxBracket::open(4_501.0, 0.039),
];

static CALIFORNIA: [TaxBracket; 10] = [
    TaxBracket::bounded(0.0, 10_756.0, 0.01),
    TaxBracket::bounded(10_757.0, 25_499.0, 0.02),
    TaxBracket::bounded(25_500.0, 40_245.0, 0.04),
    TaxBracket::bounded(40_246.0, 55_866.0, 0.06),
    TaxBracket::bounded(55_867.0, 70_606.0, 0.08),
    TaxBracket::bounded(70_607.0, 360_659.0, 0.093),
    TaxBracket::bounded(360_660.0, 432_787.0, 0.103),
    TaxBracket::bounded(432_788.0, 721_314.0, 0.113),
    TaxBracket::bounded(721_315.0, 1_000_000.0, 0.123),
    TaxBracket::open(1_000_001.0, 0.133),
];

static CONNECTICUT: [TaxBracket; 7] = [
    TaxBracket::bounded(0.0, 10_000.0, 0.02),
    TaxBracket::bounded(10_001.0, 50_000.0, 0.045),
    TaxBracket::bounded(50_001.0, 100_000.0, 0.055),
    TaxBracket::bounded(100_001.0, 200_000.0, 0.06),
    TaxBracket::bounded(200_001.0, 250_000.0, 0.065),
    TaxBracket::bounded(250_001.0, 500_000.0, 0.069),
    TaxBracket::open(500_001.0, 0.0699),
];

static DELAWARE: [TaxBracket; 7] = [
    TaxBracket::bounded(0.0, 2_000.0, 0.0),
    TaxBracket::bounded(2_001.0, 5_000.0, 0.022),
    TaxBracket::bounded(5_001.0, 10_000.0, 0.039),
    TaxBracket::bounded(10_001.0, 20_000.0, 0.048),
    TaxBracket::bounded(20_001.0, 25_000.0, 0.052),
    TaxBracket::bounded(25_001.0, 60_000.0, 0.0555),
    TaxBracket::open(60_001.0, 0.066),
];

static HAWAII: [TaxBracket; 12] = [
    TaxBracket::bounded(0.0, 9_600.0, 0.014),
    TaxBracket::bounded(9_601.0, 14_400.0, 0.032),
    TaxBracket::bounded(14_401.0, 19_200.0, 0.055),
    TaxBracket::bounded(19_201.0, 24_000.0, 0.064),
    TaxBracket::bounded(24_001.0, 36_000.0, 0.068),
    TaxBracket::bounded(36_001.0, 48_000.0, 0.072),
    TaxBracket::bounded(48_001.0, 125_000.0, 0.076),
    TaxBracket::bounded(125_001.0, 175_000.0, 0.079),
    TaxBracket::bounded(175_001.0, 225_000.0, 0.0825),
    TaxBracket::bounded(225_001.0, 275_000.0, 0.09),
    TaxBracket::bounded(275_001.0, 325_000.0, 0.10),
    TaxBracket::open(325_001.0, 0.11),
];

static KANSAS: [TaxBracket; 2] = [
    TaxBracket::bounded(0.0, 23_000.0, 0.052),
    TaxBracket::open(23_001.0, 0.0558),
];

static MAINE: [TaxBracket; 3] = [
    TaxBracket::bounded(0.0, 26_800.0, 0.058),
    TaxBracket::bounded(26_801.0, 63_450.0, 0.0675),
    TaxBracket::open(63_451.0, 0.0715),
];

static MARYLAND: [TaxBracket; 8] = [
    TaxBracket::bounded(0.0, 1_000.0, 0.02),
    TaxBracket::bounded(1_001.0, 2_000.0, 0.03),
    TaxBracket::bounded(2_001.0, 3_000.0, 0.04),
    TaxBracket::bounded(3_001.0, 100_000.0, 0.0475),
    TaxBracket::bounded(100_001.0, 125_000.0, 0.05),
    TaxBracket::bounded(125_001.0, 150_000.0, 0.0525),
    TaxBracket::bounded(150_001.0, 250_000.0, 0.055),
    TaxBracket::open(250_001.0, 0.0575),
];

static MASSACHUSETTS: [TaxBracket; 2] = [
    TaxBracket::bounded(0.0, 1_083_150.0, 0.05),
    TaxBracket::open(1_083_151.0, 0.09),
];

static MINNESOTA: [TaxBracket; 4] = [
    TaxBracket::bounded(0.0, 32_570.0, 0.0535),
    TaxBracket::bounded(32_571.0, 106_990.0, 0.068),
    TaxBracket::bounded(106_991.0, 198_630.0, 0.0785),
    TaxBracket::open(198_631.0, 0.0985),
];

static MISSISSIPPI: [TaxBracket; 2] = [
    TaxBracket::bounded(0.0, 10_000.0, 0.0),
    TaxBracket::open(10_001.0, 0.044),
];

static MISSOURI: [TaxBracket; 8] = [
    TaxBracket::bounded(0.0, 1_313.0, 0.0),
    TaxBracket::bounded(1_314.0, 2_626.0, 0.02),
    TaxBracket::bounded(2_627.0, 3_939.0, 0.025),
    TaxBracket::bounded(3_940.0, 5_252.0, 0.03),
    TaxBracket::bounded(5_253.0, 6_565.0, 0.035),
    TaxBracket::bounded(6_566.0, 7_878.0, 0.04),
    TaxBracket::bounded(7_879.0, 9_191.0, 0.045),
    TaxBracket::open(9_192.0, 0.047),
];

static MONTANA: [TaxBracket; 2] = [
    TaxBracket::bounded(0.0, 21_100.0, 0.047),
    TaxBracket::open(21_101.0, 0.059),
];

static NEBRASKA: [TaxBracket; 4] = [
    TaxBracket::bounded(0.0, 4_030.0, 0.0246),
    TaxBracket::bounded(4_031.0, 24_120.0, 0.0351),
    TaxBracket::bounded(24_121.0, 38_870.0, 0.0501),
    TaxBracket::open(38_871.0, 0.052),
];

static NEW_JERSEY: [TaxBracket; 7] = [
    TaxBracket::bounded(0.0, 20_000.0, 0.014),
    TaxBracket::bounded(20_001.0, 35_000.0, 0.0175),
    TaxBracket::bounded(35_001.0, 40_000.0, 0.035),
    TaxBracket::bounded(40_001.0, 75_000.0, 0.05525),
    TaxBracket::bounded(75_001.0, 500_000.0, 0.0637),
    TaxBracket::bounded(500_001.0, 1_000_000.0, 0.0897),
    TaxBracket::open(1_000_001.0, 0.1075),
];

static NEW_MEXICO: [TaxBracket; 6] = [
    TaxBracket::bounded(0.0, 5_500.0, 0.015),
    TaxBracket::bounded(5_501.0, 16_500.0, 0.032),
    TaxBracket::bounded(16_501.0, 33_500.0, 0.043),
    TaxBracket::bounded(33_501.0, 66_500.0, 0.047),
    TaxBracket::bounded(66_501.0, 210_000.0, 0.049),
    TaxBracket::open(210_001.0, 0.059),
];

static NEW_YORK: [TaxBracket; 9] = [
    TaxBracket::bounded(0.0, 8_500.0, 0.04),
    TaxBracket::bounded(8_501.0, 11_700.0, 0.045),
    TaxBracket::bounded(11_701.0, 13_900.0, 0.0525),
    TaxBracket::bounded(13_901.0, 80_650.0, 0.055),
    TaxBracket::bounded(80_651.0, 215_400.0, 0.06),
    TaxBracket::bounded(215_401.0, 1_077_550.0, 0.0685),
    TaxBracket::bounded(1_077_551.0, 5_000_000.0, 0.0965),
    TaxBracket::bounded(5_000_001.0, 25_000_000.0, 0.103),
    TaxBracket::open(25_000_001.0, 0.109),
];

static NORTH_DAKOTA: [TaxBracket; 3] = [
    TaxBracket::bounded(0.0, 48_475.0, 0.0),
    TaxBracket::bounded(48_476.0, 244_825.0, 0.0195),
    TaxBracket::open(244_826.0, 0.025),
];

static OHIO: [TaxBracket; 3] = [
    TaxBracket::bounded(0.0, 26_050.0, 0.0),
    TaxBracket::bounded(26_051.0, 100_000.0, 0.0275),
    TaxBracket::open(100_001.0, 0.035),
];

static OKLAHOMA: [TaxBracket; 6] = [
    TaxBracket::bounded(0.0, 1_000.0, 0.0025),
    TaxBracket::bounded(1_001.0, 2_500.0, 0.0075),
    TaxBracket::bounded(2_501.0, 3_750.0, 0.0175),
    TaxBracket::bounded(3_751.0, 4_900.0, 0.0275),
    TaxBracket::bounded(4_901.0, 7_200.0, 0.0375),
    TaxBracket::open(7_201.0, 0.0475),
];

static OREGON: [TaxBracket; 4] = [
    TaxBracket::bounded(0.0, 4_400.0, 0.0475),
    TaxBracket::bounded(4_401.0, 11_050.0, 0.0675),
    TaxBracket::bounded(11_051.0, 125_000.0, 0.0875),
    TaxBracket::open(125_001.0, 0.099),
];

static RHODE_ISLAND: [TaxBracket; 3] = [
    TaxBracket::bounded(0.0, 79_900.0, 0.0375),
    TaxBracket::bounded(79_901.0, 181_650.0, 0.0475),
    TaxBracket::open(181_651.0, 0.0599),
];

static SOUTH_CAROLINA: [TaxBracket; 3] = [
    TaxBracket::bounded(0.0, 3_560.0, 0.0),
    TaxBracket::bounded(3_561.0, 17_830.0, 0.03),
    TaxBracket::open(17_831.0, 0.062),
];

static VERMONT: [TaxBracket; 4] = [
    TaxBracket::bounded(0.0, 47_900.0, 0.0335),
    TaxBracket::bounded(47_901.0, 116_000.0, 0.066),
    TaxBracket::bounded(116_001.0, 242_000.0, 0.076),
    TaxBracket::open(242_001.0, 0.0875),
];

static VIRGINIA: [TaxBracket; 4] = [
    TaxBracket::bounded(0.0, 3_000.0, 0.02),
    TaxBracket::bounded(3_001.0, 5_000.0, 0.03),
    TaxBracket::bounded(5_001.0, 17_000.0, 0.05),
    TaxBracket::open(17_001.0, 0.0575),
];

static WASHINGTON_DC: [TaxBracket; 7] = [
    TaxBracket::bounded(0.0, 10_000.0, 0.04),
    TaxBracket::bounded(10_001.0, 40_000.0, 0.06),
    TaxBracket::bounded(40_001.0, 60_000.0, 0.065),
    TaxBracket::bounded(60_001.0, 250_000.0, 0.085),
    TaxBracket::bounded(250_001.0, 500_000.0, 0.0925),
    TaxBracket::bounded(500_001.0, 1_000_000.0, 0.0975),
    TaxBracket::open(1_000_001.0, 0.1075),
];

static WEST_VIRGINIA: [TaxBracket; 5] = [
    TaxBracket::bounded(0.0, 10_000.0, 0.0222),
    TaxBracket::bounded(10_001.0, 25_000.0, 0.0296),
    TaxBracket::bounded(25_001.0, 40_000.0, 0.0333),
    TaxBracket::bounded(40_001.0, 60_000.0, 0.0444),
    TaxBracket::open(60_001.0, 0.0482),
];

static WISCONSIN: [TaxBracket; 4] = [
    TaxBracket::bounded(0.0, 14_680.0, 0.035),
    TaxBracket::bounded(14_681.0, 29_370.0, 0.044),
    TaxBracket::bounded(29_371.0, 323_290.0, 0.053),
    TaxBracket::open(323_291.0, 0.0765),
];

const fn none(name: &'static str) -> Jurisdiction {
    Jurisdiction {
        name,
        policy: StateTaxPolicy::None,
    }
}

const fn flat(name: &'static str, rate: f64) -> Jurisdiction {
    Jurisdiction {
        name,
        policy: StateTaxPolicy::Flat { rate },
    }
}

const fn progressive(name: &'static str, brackets: &'static [TaxBracket]) -> Jurisdiction {
    Jurisdiction {
        name,
        policy: StateTaxPolicy::Progressive { brackets },
    }
}

/// All 50 states plus the District, sorted by name.
pub static JURISDICTIONS: [Jurisdiction; 51] = [
    progressive("Alabama", &ALABAMA),
    none("Alaska"),
    flat("Arizona", 0.025),
    progressive("Arkansas", &ARKANSAS),
    progressive("California", &CALIFORNIA),
    flat("Colorado", 0.044),
    progressive("Connecticut", &CONNECTICUT),
    progressive("Delaware", &DELAWARE),
    none("Florida"),
    flat("Georgia", 0.0539),
    progressive("Hawaii", &HAWAII),
    flat("Idaho", 0.05695),
    flat("Illinois", 0.0495),
    flat("Indiana", 0.03),
    flat("Iowa", 0.038),
    progressive("Kansas", &KANSAS),
    flat("Kentucky", 0.04),
    flat("Louisiana", 0.03),
    progressive("Maine", &MAINE),
    progressive("Maryland", &MARYLAND),
    progressive("Massachusetts", &MASSACHUSETTS),
    flat("Michigan", 0.0425),
    progressive("Minnesota", &MINNESOTA),
    progressive("Mississippi", &MISSISSIPPI),
    progressive("Missouri", &MISSOURI),
    progressive("Montana", &MONTANA),
    progressive("Nebraska", &NEBRASKA),
    none("Nevada"),
    none("New Hampshire"),
    progressive("New Jersey", &NEW_JERSEY),
    progressive("New Mexico", &NEW_MEXICO),
    progressive("New York", &NEW_YORK),
    flat("North Carolina", 0.0425),
    progressive("North Dakota", &NORTH_DAKOTA),
    progressive("Ohio", &OHIO),
    progressive("Oklahoma", &OKLAHOMA),
    progressive("Oregon", &OREGON),
    flat("Pennsylvania", 0.0307),
    progressive("Rhode Island", &RHODE_ISLAND),
    progressive("South Carolina", &SOUTH_CAROLINA),
    none("South Dakota"),
    none("Tennessee"),
    none("Texas"),
    flat("Utah", 0.0455),
    progressive("Vermont", &VERMONT),
    progressive("Virginia", &VIRGINIA),
    Jurisdiction {
        name: "Washington",
        policy: StateTaxPolicy::CapitalGainsOnly {
            rate: 0.07,
            threshold: 270_000.0,
        },
    },
    progressive("Washington DC", &WASHINGTON_DC),
    progressive("West Virginia", &WEST_VIRGINIA),
    progressive("Wisconsin", &WISCONSIN),
    none("Wyoming"),
];

pub fn lookup_jurisdiction(name: &str) -> Option<&'static Jurisdiction> {
    JURISDICTIONS
        .binary_search_by(|j| j.name.cmp(name))
        .ok()
        .map(|idx| &JURISDICTIONS[idx])
}
