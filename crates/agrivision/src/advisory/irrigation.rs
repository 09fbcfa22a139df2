use serde::Serialize;

use super::domain::{crop_key, GrowthStage, RainChance, SoilType};

/// Litres per square metre.
const BASE_NEED: [(&str, f64); 4] = [
    ("paddy", 50.0),
    ("banana", 40.0),
    ("coconut", 30.0),
    ("pepper", 20.0),
];
const DEFAULT_NEED: f64 = 30.0;
const PLOT_SQUARE_METRES: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrrigationPlan {
    pub crop: String,
    pub water_liters_per_day: u64,
    pub frequency: String,
    pub notes: String,
}

pub fn irrigation_plan(
    crop: &str,
    stage: GrowthStage,
    soil: SoilType,
    rain_chance: RainChance,
) -> IrrigationPlan {
    let key = crop_key(crop);
    let mut per_square_metre = BASE_NEED
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(DEFAULT_NEED, |(_, need)| *need);

    match stage {
        GrowthStage::Seedling => per_square_metre *= 0.7,
        GrowthStage::Flowering => per_square_metre *= 1.2,
        GrowthStage::Vegetative | GrowthStage::Maturity => {}
    }
    match soil {
        SoilType::Sandy => per_square_metre *= 1.2,
        SoilType::Clay => per_square_metre *= 0.8,
        SoilType::Loam | SoilType::Laterite => {}
    }
    if rain_chance == RainChance::High {
        per_square_metre *= 0.5;
    }

    let frequency = if rain_chance == RainChance::Low {
        "Daily"
    } else {
        "On non-rainy days"
    };

    IrrigationPlan {
        crop: crop.to_string(),
        water_liters_per_day: (per_square_metre * PLOT_SQUARE_METRES) as u64,
        frequency: frequency.to_string(),
        notes: "Use mulching to reduce evaporation and schedule irrigation early morning or late evening."
            .to_string(),
    }
}
