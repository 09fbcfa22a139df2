use axum::response::Response;
use serde_json::Value;

use crate::finance::{FarmerCategory, FarmerProfile};

pub(super) fn coconut_profile() -> FarmerProfile {
    FarmerProfile {
        land_acres: 2.0,
        crop: "Coconut".to_string(),
        district: "Thrissur".to_string(),
        season: "kharif".to_string(),
        annual_income: 200_000,
        existing_loans: 0,
        has_collateral: false,
        loan_amount_needed: 300_000,
        category: FarmerCategory::General,
        has_irrigation: true,
        organic_interest: false,
    }
}

pub(super) fn paddy_profile(annual_income: u64, existing_loans: u64) -> FarmerProfile {
    FarmerProfile {
        land_acres: 1.0,
        crop: "Paddy".to_string(),
        district: "Alappuzha".to_string(),
        annual_income,
        existing_loans,
        ..coconut_profile()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
