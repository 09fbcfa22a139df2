use serde::{Deserialize, Serialize};

/// Soil classes recognised by the crop advisor and the irrigation planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    #[default]
    Loam,
    Laterite,
    Sandy,
}

impl SoilType {
    pub fn label(self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Loam => "loam",
            SoilType::Laterite => "laterite",
            SoilType::Sandy => "sandy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganicMatter {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Seedling,
    #[default]
    Vegetative,
    Flowering,
    Maturity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainChance {
    Low,
    #[default]
    Medium,
    High,
}

/// Case-insensitive, whitespace-tolerant key used for the crop tables.
pub(crate) fn crop_key(crop: &str) -> String {
    crop.trim().to_ascii_lowercase()
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
