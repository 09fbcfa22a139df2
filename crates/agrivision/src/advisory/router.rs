use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::domain::{GrowthStage, OrganicMatter, RainChance, SoilType};
use super::{
    best_markets, diagnose_pest, fertilizer_plan, irrigation_plan, predict_growth,
    recommend_crops, scheme_detail, schemes_for_farmer, weather_alerts, MIN_GROWTH_LAND_ACRES,
};
use crate::finance::domain::{validate_crop, validate_land, validate_minimum_land, validate_required};
use crate::finance::router::invalid_input;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropQuery {
    pub soil_type: SoilType,
    pub land_acres: f64,
    pub district: String,
    #[serde(default)]
    pub season: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub district: String,
    #[serde(default)]
    pub crop: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerQuery {
    pub crop: String,
    #[serde(default)]
    pub organic_matter: OrganicMatter,
    pub land_acres: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuery {
    pub crop: String,
    #[serde(default)]
    pub district: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationQuery {
    pub crop: String,
    #[serde(default)]
    pub stage: GrowthStage,
    #[serde(default)]
    pub soil_type: SoilType,
    #[serde(default)]
    pub rain_chance: RainChance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeQuery {
    pub land_acres: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PestQuery {
    #[serde(default)]
    pub crop: String,
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthQuery {
    pub crop: String,
    pub land_acres: f64,
}

/// Router exposing the advisory tools. Stateless, so it needs no injected services.
pub fn advisory_router() -> Router {
    Router::new()
        .route("/api/v1/advisory/crops", post(crops_handler))
        .route("/api/v1/advisory/weather", post(weather_handler))
        .route("/api/v1/advisory/fertilizer", post(fertilizer_handler))
        .route("/api/v1/advisory/market", post(market_handler))
        .route("/api/v1/advisory/irrigation", post(irrigation_handler))
        .route("/api/v1/advisory/schemes", post(schemes_handler))
        .route("/api/v1/advisory/pest", post(pest_handler))
        .route("/api/v1/advisory/growth", post(growth_handler))
        .route("/api/v1/schemes/:code", get(scheme_detail_handler))
}

pub(crate) async fn crops_handler(axum::Json(query): axum::Json<CropQuery>) -> Response {
    if let Err(error) = validate_land(query.land_acres) {
        return invalid_input(error);
    }

    let suggestions = recommend_crops(
        query.soil_type,
        query.land_acres,
        &query.district,
        &query.season,
    );
    debug!(district = %query.district, count = suggestions.len(), "recommended crops");
    (StatusCode::OK, axum::Json(json!({ "suggestions": suggestions }))).into_response()
}

pub(crate) async fn weather_handler(axum::Json(query): axum::Json<WeatherQuery>) -> Response {
    if let Err(error) = validate_required("district", &query.district) {
        return invalid_input(error);
    }

    let alerts = weather_alerts(&query.district, &query.crop);
    (StatusCode::OK, axum::Json(json!({ "alerts": alerts }))).into_response()
}

pub(crate) async fn fertilizer_handler(
    axum::Json(query): axum::Json<FertilizerQuery>,
) -> Response {
    if let Err(error) = validate_land(query.land_acres).and_then(|_| validate_crop(&query.crop)) {
        return invalid_input(error);
    }

    let plan = fertilizer_plan(&query.crop, query.organic_matter, query.land_acres);
    (StatusCode::OK, axum::Json(plan)).into_response()
}

pub(crate) async fn market_handler(axum::Json(query): axum::Json<MarketQuery>) -> Response {
    if let Err(error) = validate_crop(&query.crop) {
        return invalid_input(error);
    }

    let markets = best_markets(&query.crop);
    debug!(crop = %query.crop, district = %query.district, count = markets.len(), "listed markets");
    (StatusCode::OK, axum::Json(json!({ "markets": markets }))).into_response()
}

pub(crate) async fn irrigation_handler(
    axum::Json(query): axum::Json<IrrigationQuery>,
) -> Response {
    if let Err(error) = validate_crop(&query.crop) {
        return invalid_input(error);
    }

    let plan = irrigation_plan(
        &query.crop,
        query.stage,
        query.soil_type,
        query.rain_chance,
    );
    (StatusCode::OK, axum::Json(plan)).into_response()
}

pub(crate) async fn schemes_handler(axum::Json(query): axum::Json<SchemeQuery>) -> Response {
    let schemes = schemes_for_farmer(query.land_acres);
    (StatusCode::OK, axum::Json(json!({ "schemes": schemes }))).into_response()
}

pub(crate) async fn pest_handler(axum::Json(query): axum::Json<PestQuery>) -> Response {
    let diagnosis = diagnose_pest(&query.crop, &query.symptoms);
    (StatusCode::OK, axum::Json(diagnosis)).into_response()
}

pub(crate) async fn growth_handler(axum::Json(query): axum::Json<GrowthQuery>) -> Response {
    if let Err(error) = validate_crop(&query.crop)
        .and_then(|_| validate_minimum_land(query.land_acres, MIN_GROWTH_LAND_ACRES))
    {
        return invalid_input(error);
    }

    let prediction = predict_growth(&query.crop, query.land_acres);
    (StatusCode::OK, axum::Json(prediction)).into_response()
}

pub(crate) async fn scheme_detail_handler(Path(code): Path<String>) -> Response {
    match scheme_detail(&code) {
        Some(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        None => {
            let payload = json!({ "error": format!("unknown scheme '{code}'") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
