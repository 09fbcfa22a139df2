use serde::Serialize;

use super::domain::{crop_key, round_to};

/// Predictions are refused below this plot size.
pub const MIN_GROWTH_LAND_ACRES: f64 = 0.1;

struct GrowthProfile {
    crop: &'static str,
    yield_t_per_acre: f64,
    days_to_harvest: u32,
    price_rs_per_ton: u64,
    notes: &'static str,
}

static GROWTH_TABLE: [GrowthProfile; 4] = [
    GrowthProfile {
        crop: "paddy",
        yield_t_per_acre: 1.2,
        days_to_harvest: 120,
        price_rs_per_ton: 20_000,
        notes: "Normal duration paddy variety under good management.",
    },
    GrowthProfile {
        crop: "banana",
        yield_t_per_acre: 8.0,
        days_to_harvest: 300,
        price_rs_per_ton: 35_000,
        notes: "Nendran/robusta type banana with proper fertilizer and irrigation.",
    },
    GrowthProfile {
        crop: "coconut",
        yield_t_per_acre: 1.0,
        days_to_harvest: 365,
        price_rs_per_ton: 30_000,
        notes: "Bearing coconut garden (not newly planted). Estimate is for one year.",
    },
    GrowthProfile {
        crop: "pepper",
        yield_t_per_acre: 0.4,
        days_to_harvest: 240,
        price_rs_per_ton: 500_000,
        notes: "Mature black pepper vines under average management.",
    },
];

static GENERIC: GrowthProfile = GrowthProfile {
    crop: "generic",
    yield_t_per_acre: 2.0,
    days_to_harvest: 150,
    price_rs_per_ton: 25_000,
    notes: "Generic estimate used (crop not in database).",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPrediction {
    pub crop: String,
    pub land_size_acres: f64,
    pub expected_yield_tons: f64,
    pub days_to_harvest: u32,
    pub expected_profit_rs: u64,
    pub notes: String,
}

pub fn predict_growth(crop: &str, land_acres: f64) -> GrowthPrediction {
    let key = crop_key(crop);
    let profile = GROWTH_TABLE
        .iter()
        .find(|profile| profile.crop == key)
        .unwrap_or(&GENERIC);

    let expected_yield_tons = round_to(profile.yield_t_per_acre * land_acres, 2);
    GrowthPrediction {
        crop: crop.trim().to_string(),
        land_size_acres: land_acres,
        expected_yield_tons,
        days_to_harvest: profile.days_to_harvest,
        expected_profit_rs: (expected_yield_tons * profile.price_rs_per_ton as f64) as u64,
        notes: profile.notes.to_string(),
    }
}
