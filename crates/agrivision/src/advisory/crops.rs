use serde::Serialize;

use super::domain::SoilType;
use super::domain::SoilType::{Clay, Laterite, Loam, Sandy};

pub const KERALA_DISTRICTS: [&str; 14] = [
    "thiruvananthapuram",
    "kollam",
    "pathanamthitta",
    "alappuzha",
    "kottayam",
    "idukki",
    "ernakulam",
    "thrissur",
    "palakkad",
    "malappuram",
    "kozhikode",
    "wayanad",
    "kannur",
    "kasaragod",
];

const ACRES_PER_HECTARE: f64 = 2.47;
const SMALL_FARM_ACRES: f64 = 2.0;
const HIGH_VALUE_PROFIT_PER_HA: u64 = 100_000;
const MAX_SUGGESTIONS: usize = 3;

struct CropProfile {
    name: &'static str,
    soils: &'static [SoilType],
    /// Empty means the crop suits every district.
    districts: &'static [&'static str],
    season: &'static str,
    yield_t_per_ha: f64,
    profit_rs_per_ha: u64,
}

static CROPS: [CropProfile; 4] = [
    CropProfile {
        name: "Paddy",
        soils: &[Clay, Loam],
        districts: &["Alappuzha", "Kottayam", "Thrissur", "Palakkad"],
        season: "Kharif (Jun–Oct)",
        yield_t_per_ha: 3.0,
        profit_rs_per_ha: 50_000,
    },
    CropProfile {
        name: "Banana",
        soils: &[Loam, Laterite],
        districts: &["Thiruvananthapuram", "Kollam", "Kozhikode", "Kannur"],
        season: "Year-round (best Jun–Aug planting)",
        yield_t_per_ha: 20.0,
        profit_rs_per_ha: 120_000,
    },
    CropProfile {
        name: "Coconut",
        soils: &[Laterite, Sandy],
        districts: &[],
        season: "Perennial",
        yield_t_per_ha: 5.0,
        profit_rs_per_ha: 80_000,
    },
    CropProfile {
        name: "Pepper",
        soils: &[Loam, Laterite],
        districts: &["Idukki", "Wayanad", "Kottayam"],
        season: "Perennial (cool, humid)",
        yield_t_per_ha: 1.5,
        profit_rs_per_ha: 150_000,
    },
];

/// A ranked crop for the farmer's plot, with yield and profit scaled to its size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropSuggestion {
    pub name: String,
    pub season: String,
    pub score: u8,
    pub expected_yield_tonnes: f64,
    pub expected_profit_rs: u64,
    pub reasoning: String,
}

pub fn is_kerala_district(district: &str) -> bool {
    let district = district.trim();
    KERALA_DISTRICTS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(district))
}

/// Up to three crops ranked by soil, district, season and plot-size fit.
///
/// Districts outside Kerala get no suggestions. Note that an empty season matches every crop.
pub fn recommend_crops(
    soil: SoilType,
    land_acres: f64,
    district: &str,
    season: &str,
) -> Vec<CropSuggestion> {
    if !is_kerala_district(district) {
        return Vec::new();
    }
    let district = district.trim();
    let season_lower = season.to_lowercase();

    let mut scored: Vec<(u8, &CropProfile)> = CROPS
        .iter()
        .filter_map(|crop| {
            let mut score = 0;
            if crop.soils.contains(&soil) {
                score += 2;
            }
            if crop.districts.is_empty()
                || crop
                    .districts
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(district))
            {
                score += 2;
            }
            if crop.season.to_lowercase().contains(&season_lower) {
                score += 1;
            }
            if land_acres <= SMALL_FARM_ACRES && crop.profit_rs_per_ha > HIGH_VALUE_PROFIT_PER_HA {
                score += 1;
            }
            (score > 0).then_some((score, crop))
        })
        .collect();
    scored.sort_by(|left, right| right.0.cmp(&left.0));

    let factor = land_acres / ACRES_PER_HECTARE;
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(score, crop)| CropSuggestion {
            name: crop.name.to_string(),
            season: crop.season.to_string(),
            score,
            expected_yield_tonnes: crop.yield_t_per_ha * factor,
            expected_profit_rs: (crop.profit_rs_per_ha as f64 * factor) as u64,
            reasoning: format!(
                "Matched soil ({}), district ({district}) and season ({season}).",
                soil.label()
            ),
        })
        .collect()
}
