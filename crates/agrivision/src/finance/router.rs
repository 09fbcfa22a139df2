use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    validate_crop, validate_land, FarmerCategory, FarmerProfile, InputError,
    InsuranceRecommendation, LoanEligibility, SubsidyRecommendation,
};
use super::EligibilityEngine;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceQuery {
    pub crop: String,
    #[serde(default)]
    pub district: String,
    pub land_acres: f64,
    #[serde(default)]
    pub season: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsidyQuery {
    pub land_acres: f64,
    pub crop: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub category: FarmerCategory,
    #[serde(default)]
    pub has_irrigation: bool,
    #[serde(default)]
    pub organic_interest: bool,
}

#[derive(Debug, Serialize)]
pub struct LoanResponse {
    pub eligible_count: usize,
    pub loans: Vec<LoanEligibility>,
}

#[derive(Debug, Serialize)]
pub struct InsuranceResponse {
    pub recommendations: Vec<InsuranceRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct SubsidyResponse {
    pub subsidies: Vec<SubsidyRecommendation>,
}

/// Router exposing the eligibility engine over JSON.
pub fn finance_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/finance/loans", post(loans_handler))
        .route("/api/v1/finance/insurance", post(insurance_handler))
        .route("/api/v1/finance/subsidies", post(subsidies_handler))
        .with_state(engine)
}

pub(crate) async fn loans_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    axum::Json(profile): axum::Json<FarmerProfile>,
) -> Response {
    if let Err(error) = profile.validate() {
        return invalid_input(error);
    }

    let loans = engine.evaluate_loans(&profile);
    let eligible_count = loans.iter().filter(|loan| loan.eligible).count();
    (
        StatusCode::OK,
        axum::Json(LoanResponse {
            eligible_count,
            loans,
        }),
    )
        .into_response()
}

pub(crate) async fn insurance_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    axum::Json(query): axum::Json<InsuranceQuery>,
) -> Response {
    if let Err(error) = validate_land(query.land_acres).and_then(|_| validate_crop(&query.crop)) {
        return invalid_input(error);
    }

    let recommendations =
        engine.analyze_insurance(&query.crop, &query.district, query.land_acres, &query.season);
    (
        StatusCode::OK,
        axum::Json(InsuranceResponse { recommendations }),
    )
        .into_response()
}

pub(crate) async fn subsidies_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    axum::Json(query): axum::Json<SubsidyQuery>,
) -> Response {
    if let Err(error) = validate_land(query.land_acres).and_then(|_| validate_crop(&query.crop)) {
        return invalid_input(error);
    }

    let subsidies = engine.recommend_subsidies(
        query.land_acres,
        &query.crop,
        &query.district,
        query.category,
        query.has_irrigation,
        query.organic_interest,
    );
    (StatusCode::OK, axum::Json(SubsidyResponse { subsidies })).into_response()
}

pub(crate) fn invalid_input(error: InputError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
