use serde::Serialize;

use super::domain::{crop_key, round_to, OrganicMatter};

/// N, P, K in kg per acre.
const BASE_NPK: [(&str, [f64; 3]); 4] = [
    ("paddy", [40.0, 20.0, 20.0]),
    ("banana", [80.0, 40.0, 60.0]),
    ("coconut", [30.0, 15.0, 40.0]),
    ("pepper", [50.0, 25.0, 25.0]),
];
const DEFAULT_NPK: [f64; 3] = [40.0, 20.0, 20.0];
const HIGH_ORGANIC_SCALE: [f64; 3] = [0.7, 0.8, 0.8];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerPlan {
    pub crop: String,
    pub nitrogen_kg: f64,
    pub phosphorus_kg: f64,
    pub potassium_kg: f64,
    pub organic_alternative: String,
    pub tips: String,
}

pub fn fertilizer_plan(crop: &str, organic_matter: OrganicMatter, land_acres: f64) -> FertilizerPlan {
    let key = crop_key(crop);
    let base = BASE_NPK
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, npk)| *npk)
        .unwrap_or(DEFAULT_NPK);

    let mut npk = base.map(|kg| kg * land_acres);
    let tips = match organic_matter {
        OrganicMatter::High => {
            for (value, scale) in npk.iter_mut().zip(HIGH_ORGANIC_SCALE) {
                *value *= scale;
            }
            "Soil organic matter is high. Reduce chemical fertilizer and prefer organic manures."
        }
        OrganicMatter::Low => "Organic matter is low. Add FYM/compost and green manure crops.",
        OrganicMatter::Medium => "Maintain balanced use of chemical fertilizers and organic manures.",
    };

    FertilizerPlan {
        crop: crop.to_string(),
        nitrogen_kg: round_to(npk[0], 1),
        phosphorus_kg: round_to(npk[1], 1),
        potassium_kg: round_to(npk[2], 1),
        organic_alternative: "Apply 5–10 tons/acre of well-decomposed FYM or compost.".to_string(),
        tips: tips.to_string(),
    }
}
