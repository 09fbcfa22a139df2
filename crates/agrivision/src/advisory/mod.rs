//! Rule-based farm advisory: crop choice, weather, fertilizer, markets, irrigation,
//! government schemes, pest diagnosis and growth forecasts.
//!
//! All functions are pure and fall back to generic advice for crops they do not know.

mod crops;
pub mod domain;
mod fertilizer;
mod growth;
mod irrigation;
mod market;
mod pest;
pub mod router;
mod schemes;
mod weather;

#[cfg(test)]
mod tests;

pub use crops::{is_kerala_district, recommend_crops, CropSuggestion, KERALA_DISTRICTS};
pub use domain::{GrowthStage, OrganicMatter, RainChance, SoilType};
pub use fertilizer::{fertilizer_plan, FertilizerPlan};
pub use growth::{predict_growth, GrowthPrediction, MIN_GROWTH_LAND_ACRES};
pub use irrigation::{irrigation_plan, IrrigationPlan};
pub use market::{best_markets, MarketPrice};
pub use pest::{diagnose_pest, PestDiagnosis};
pub use router::advisory_router;
pub use schemes::{
    scheme_detail, schemes_for_farmer, Scheme, SchemeDetail, MIN_SCHEME_LAND_ACRES,
};
pub use weather::{weather_alerts, AlertKind, AlertLevel, WeatherAlert};
