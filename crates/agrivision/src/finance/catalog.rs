//! Compiled-in reference tables for Kerala agricultural credit, insurance and subsidies.
//!
//! Figures follow the published terms of the Kerala State Co-operative Bank, NABARD, PMFBY,
//! the Coconut Development Board and the Kerala Agriculture Department.

use super::domain::RiskLevel;
use super::domain::RiskLevel::{High, Low, Medium};

/// Crops a loan product may finance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropEligibility {
    Any,
    Only(&'static [&'static str]),
}

impl CropEligibility {
    pub fn admits(&self, crop: &str) -> bool {
        match self {
            CropEligibility::Any => true,
            CropEligibility::Only(crops) => contains_crop(crops, crop),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanProduct {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub max_amount: u64,
    /// Effective rate after interest subvention.
    pub interest_rate: f64,
    pub original_rate: f64,
    pub tenure_months: u32,
    pub collateral_required: bool,
    /// Amount that can be sanctioned without collateral.
    pub collateral_limit: u64,
    pub eligible_crops: CropEligibility,
    pub min_land_acres: f64,
    pub description: &'static str,
    pub documents: &'static [&'static str],
    pub apply_at: &'static str,
}

pub const LOAN_PRODUCTS: &[LoanProduct] = &[
    LoanProduct {
        id: "kcc",
        name: "Kisan Credit Card (KCC)",
        provider: "All Scheduled Banks / Kerala Co-operative Banks",
        max_amount: 300_000,
        interest_rate: 4.0,
        original_rate: 7.0,
        tenure_months: 12,
        collateral_required: false,
        collateral_limit: 160_000,
        eligible_crops: CropEligibility::Only(&[
            "Paddy",
            "Banana",
            "Coconut",
            "Pepper",
            "Rubber",
            "Vegetables",
            "Tapioca",
        ]),
        min_land_acres: 0.5,
        description: "Short-term crop loan with 3% interest subvention from Government of India. Additional 3% subvention for prompt repayment.",
        documents: &[
            "Land documents / Pattayam",
            "Aadhaar Card",
            "Bank passbook",
            "Passport photo",
        ],
        apply_at: "Any bank branch or Kerala Co-operative Bank",
    },
    LoanProduct {
        id: "kscardb_mtl",
        name: "Medium Term Agricultural Loan",
        provider: "Kerala State Co-operative Agricultural & Rural Development Bank (KSCARDB)",
        max_amount: 1_000_000,
        interest_rate: 9.5,
        original_rate: 9.5,
        tenure_months: 60,
        collateral_required: true,
        collateral_limit: 0,
        eligible_crops: CropEligibility::Only(&[
            "Coconut", "Rubber", "Pepper", "Cardamom", "Coffee", "Arecanut",
        ]),
        min_land_acres: 1.0,
        description: "Medium-term loan for plantation crops, farm development, land improvement, and agricultural infrastructure.",
        documents: &[
            "Land documents with encumbrance certificate",
            "Aadhaar & PAN",
            "Income certificate",
            "Agricultural officer recommendation",
        ],
        apply_at: "KSCARDB branches across Kerala",
    },
    LoanProduct {
        id: "kerala_bank_agri",
        name: "Kerala Bank Agricultural Loan",
        provider: "Kerala State Co-operative Bank (Kerala Bank)",
        max_amount: 500_000,
        interest_rate: 7.0,
        original_rate: 7.0,
        tenure_months: 36,
        collateral_required: false,
        collateral_limit: 100_000,
        eligible_crops: CropEligibility::Any,
        min_land_acres: 0.25,
        description: "General agricultural loan for small and marginal farmers in Kerala for crop production and allied activities.",
        documents: &[
            "Land ownership proof",
            "Aadhaar Card",
            "Ration card",
            "Bank statement",
        ],
        apply_at: "Kerala Bank / Primary Agricultural Co-operative Societies (PACS)",
    },
    LoanProduct {
        id: "nabard_dairy",
        name: "Dairy Entrepreneurship Development Scheme",
        provider: "NABARD through Kerala Banks",
        max_amount: 700_000,
        interest_rate: 10.5,
        original_rate: 10.5,
        tenure_months: 72,
        collateral_required: true,
        collateral_limit: 100_000,
        eligible_crops: CropEligibility::Only(&["Dairy farming", "Cattle rearing"]),
        min_land_acres: 0.1,
        description: "Loan for setting up small dairy farms with 2-10 milch animals. 25% back-end capital subsidy available.",
        documents: &[
            "Project report",
            "Land documents",
            "Quotations for animals/equipment",
            "Training certificate if any",
        ],
        apply_at: "Any scheduled bank or Regional Rural Bank",
    },
    LoanProduct {
        id: "agri_gold_loan",
        name: "Agricultural Gold Loan",
        provider: "Kerala Bank / Federal Bank / SBI",
        max_amount: 2_500_000,
        interest_rate: 7.0,
        original_rate: 7.0,
        tenure_months: 12,
        collateral_required: true,
        collateral_limit: 0,
        eligible_crops: CropEligibility::Any,
        min_land_acres: 0.0,
        description: "Quick loan against gold ornaments for agricultural purposes. Fast disbursement within hours.",
        documents: &[
            "Gold ornaments",
            "Aadhaar Card",
            "Land documents (for agricultural purpose proof)",
        ],
        apply_at: "Bank branches",
    },
];

/// Pradhan Mantri Fasal Bima Yojana terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NationalCropInsurance {
    pub name: &'static str,
    pub provider: &'static str,
    pub premium_kharif: f64,
    pub premium_rabi: f64,
    pub premium_commercial: f64,
    pub coverage: &'static [&'static str],
    pub sum_insured_per_ha: &'static [(&'static str, u64)],
    pub default_sum_insured_per_ha: u64,
    pub documents: &'static [&'static str],
    pub deadline: &'static str,
}

pub const PMFBY: NationalCropInsurance = NationalCropInsurance {
    name: "Pradhan Mantri Fasal Bima Yojana (PMFBY)",
    provider: "Agriculture Insurance Company of India (AIC) / Other empanelled insurers",
    premium_kharif: 2.0,
    premium_rabi: 1.5,
    premium_commercial: 5.0,
    coverage: &[
        "Yield loss due to natural calamities",
        "Prevented sowing/planting risk",
        "Post-harvest losses (up to 14 days)",
        "Localized calamities (hailstorm, landslide, inundation)",
    ],
    sum_insured_per_ha: &[
        ("Paddy", 45_000),
        ("Banana", 150_000),
        ("Coconut", 35_000),
        ("Pepper", 75_000),
        ("Vegetables", 50_000),
        ("Tapioca", 35_000),
    ],
    default_sum_insured_per_ha: 40_000,
    documents: &["Land records", "Sowing certificate", "Bank account", "Aadhaar"],
    deadline: "Kharif: July 31, Rabi: December 31",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateCropInsurance {
    pub name: &'static str,
    pub provider: &'static str,
    pub premium_rate: f64,
    pub coverage: &'static [&'static str],
    pub max_compensation: &'static [(&'static str, u64)],
    pub default_compensation: u64,
    pub documents: &'static [&'static str],
    pub apply_at: &'static str,
}

pub const KERALA_STATE_INSURANCE: StateCropInsurance = StateCropInsurance {
    name: "Kerala State Crop Insurance Scheme",
    provider: "Kerala Agriculture Department",
    premium_rate: 2.0,
    coverage: &[
        "Flood damage",
        "Drought damage",
        "Pest and disease outbreak",
        "Wild animal attack",
    ],
    max_compensation: &[
        ("Paddy", 25_000),
        ("Banana", 50_000),
        ("Vegetables", 30_000),
        ("Coconut", 15_000),
        ("Pepper", 40_000),
    ],
    default_compensation: 25_000,
    documents: &[
        "Krishi Bhavan registration",
        "Land documents",
        "Crop details",
    ],
    apply_at: "Krishi Bhavan",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PalmInsurance {
    pub name: &'static str,
    pub provider: &'static str,
    /// Farmer share per palm after the board's subsidy.
    pub premium_per_palm: f64,
    pub actual_premium_per_palm: f64,
    pub subsidy_per_palm: f64,
    pub sum_insured_per_palm: u64,
    pub max_palms: u64,
    pub coverage: &'static [&'static str],
    pub documents: &'static [&'static str],
    pub apply_at: &'static str,
}

pub const COCONUT_PALM_INSURANCE: PalmInsurance = PalmInsurance {
    name: "Coconut Palm Insurance Scheme",
    provider: "Coconut Development Board / AIC",
    premium_per_palm: 9.0,
    actual_premium_per_palm: 14.0,
    subsidy_per_palm: 5.0,
    sum_insured_per_palm: 1_750,
    max_palms: 50,
    coverage: &["Natural calamities", "Pest attack", "Disease"],
    documents: &[
        "Ownership proof",
        "Palm count certificate from Krishi Bhavan",
    ],
    apply_at: "Krishi Bhavan or Coconut Development Board",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictRisk {
    pub flood: RiskLevel,
    pub drought: RiskLevel,
    pub pest: RiskLevel,
}

impl DistrictRisk {
    pub const UNKNOWN: Self = Self {
        flood: RiskLevel::Medium,
        drought: RiskLevel::Medium,
        pest: RiskLevel::Medium,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRisk {
    pub weather_sensitivity: RiskLevel,
    pub pest_risk: RiskLevel,
    pub market_volatility: RiskLevel,
}

impl CropRisk {
    pub const UNKNOWN: Self = Self {
        weather_sensitivity: RiskLevel::Medium,
        pest_risk: RiskLevel::Medium,
        market_volatility: RiskLevel::Medium,
    };
}

const fn district(flood: RiskLevel, drought: RiskLevel, pest: RiskLevel) -> DistrictRisk {
    DistrictRisk {
        flood,
        drought,
        pest,
    }
}

const fn crop(
    weather_sensitivity: RiskLevel,
    pest_risk: RiskLevel,
    market_volatility: RiskLevel,
) -> CropRisk {
    CropRisk {
        weather_sensitivity,
        pest_risk,
        market_volatility,
    }
}

pub const DISTRICT_RISKS: &[(&str, DistrictRisk)] = &[
    ("Thiruvananthapuram", district(Medium, Low, Medium)),
    ("Kollam", district(Medium, Low, Medium)),
    ("Pathanamthitta", district(High, Low, Low)),
    ("Alappuzha", district(High, Low, Medium)),
    ("Kottayam", district(High, Low, Medium)),
    ("Idukki", district(Medium, Low, High)),
    ("Ernakulam", district(Medium, Low, Medium)),
    ("Thrissur", district(Medium, Medium, Medium)),
    ("Palakkad", district(Low, High, Medium)),
    ("Malappuram", district(Medium, Medium, Medium)),
    ("Kozhikode", district(Medium, Low, Medium)),
    ("Wayanad", district(High, Medium, High)),
    ("Kannur", district(Medium, Low, Medium)),
    ("Kasaragod", district(Medium, Medium, Medium)),
];

pub const CROP_RISKS: &[(&str, CropRisk)] = &[
    ("Paddy", crop(High, High, Medium)),
    ("Banana", crop(High, High, High)),
    ("Coconut", crop(Medium, Medium, Low)),
    ("Pepper", crop(Medium, High, High)),
    ("Rubber", crop(Low, Low, High)),
    ("Vegetables", crop(High, High, High)),
    ("Tapioca", crop(Low, Medium, Medium)),
];

/// Crops covered by the PMKSY micro-irrigation subsidy.
pub const MICRO_IRRIGATION_CROPS: &[&str] =
    &["Vegetables", "Banana", "Coconut", "Pepper", "Arecanut"];

pub const PM_KISAN_ANNUAL_AMOUNT: u64 = 6_000;
pub const PM_KISAN_MAX_HECTARES: f64 = 2.0;
pub const MICRO_IRRIGATION_MAX_PER_HA: u64 = 100_000;
pub const MICRO_IRRIGATION_PERCENT: u64 = 55;
pub const MECHANIZATION_MIN_ACRES: f64 = 0.5;
pub const MECHANIZATION_PERCENT: u64 = 50;
pub const MECHANIZATION_PERCENT_SC_ST: u64 = 60;
pub const ORGANIC_PER_HA_THREE_YEARS: u64 = 50_000;
pub const ORGANIC_MIN_ACRES: f64 = 0.5;
pub const ORGANIC_CLUSTER_SIZE: u32 = 20;
pub const SOLAR_PUMP_MIN_ACRES: f64 = 0.5;

pub fn district_risk(name: &str) -> DistrictRisk {
    lookup(DISTRICT_RISKS, name).unwrap_or(DistrictRisk::UNKNOWN)
}

pub fn crop_risk(name: &str) -> CropRisk {
    lookup(CROP_RISKS, name).unwrap_or(CropRisk::UNKNOWN)
}

/// Case-insensitive lookup in a keyed static table.
pub fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    let key = key.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| *value)
}

pub fn contains_crop(crops: &[&str], crop: &str) -> bool {
    let crop = crop.trim();
    crops.iter().any(|candidate| candidate.eq_ignore_ascii_case(crop))
}
