use super::catalog::{self, COCONUT_PALM_INSURANCE, KERALA_STATE_INSURANCE, PMFBY};
use super::config::EligibilityConfig;
use super::domain::{owned, InsuranceRecommendation, RiskAssessment, SeasonClass};

/// Composite risk over district flood/drought and crop weather/pest factors, in `0..=8`.
pub fn risk_points(crop: &str, district: &str) -> u8 {
    let district_risk = catalog::district_risk(district);
    let crop_risk = catalog::crop_risk(crop);

    [
        district_risk.flood,
        district_risk.drought,
        crop_risk.weather_sensitivity,
        crop_risk.pest_risk,
    ]
    .into_iter()
    .map(|level| level.points())
    .sum()
}

pub(crate) fn analyze(
    crop: &str,
    district: &str,
    land_acres: f64,
    season: &str,
    config: &EligibilityConfig,
) -> Vec<InsuranceRecommendation> {
    let land_ha = config.hectares(land_acres);
    let risk = RiskAssessment::from_points(risk_points(crop, district));
    let mut recommendations = Vec::with_capacity(3);

    let per_ha = catalog::lookup(PMFBY.sum_insured_per_ha, crop)
        .unwrap_or(PMFBY.default_sum_insured_per_ha);
    let sum_insured = (per_ha as f64 * land_ha) as u64;
    let premium_rate = match SeasonClass::classify(season) {
        SeasonClass::Kharif => PMFBY.premium_kharif,
        SeasonClass::Rabi => PMFBY.premium_rabi,
        SeasonClass::Commercial => PMFBY.premium_commercial,
    };

    recommendations.push(InsuranceRecommendation {
        scheme_name: PMFBY.name.to_string(),
        provider: PMFBY.provider.to_string(),
        premium_amount: percent_of(sum_insured, premium_rate),
        sum_insured,
        coverage: owned(PMFBY.coverage),
        risk: risk.clone(),
        recommendation: risk.advice.clone(),
        documents: owned(PMFBY.documents),
    });

    let state = KERALA_STATE_INSURANCE;
    let max_compensation =
        catalog::lookup(state.max_compensation, crop).unwrap_or(state.default_compensation);
    recommendations.push(InsuranceRecommendation {
        scheme_name: state.name.to_string(),
        provider: state.provider.to_string(),
        premium_amount: percent_of(max_compensation, state.premium_rate),
        sum_insured: max_compensation,
        coverage: owned(state.coverage),
        risk: risk.clone(),
        recommendation: "Good additional coverage for Kerala-specific risks.".to_string(),
        documents: owned(state.documents),
    });

    if crop.trim().eq_ignore_ascii_case("coconut") {
        let palm = COCONUT_PALM_INSURANCE;
        let estimated_palms = (land_acres * config.palms_per_acre) as u64;
        let palms = estimated_palms.min(palm.max_palms);
        recommendations.push(InsuranceRecommendation {
            scheme_name: palm.name.to_string(),
            provider: palm.provider.to_string(),
            premium_amount: (palms as f64 * palm.premium_per_palm) as u64,
            sum_insured: palms * palm.sum_insured_per_palm,
            coverage: owned(palm.coverage),
            risk,
            recommendation: format!("Specific coverage for {palms} coconut palms."),
            documents: owned(palm.documents),
        });
    }

    recommendations
}

fn percent_of(amount: u64, rate: f64) -> u64 {
    (amount as f64 * rate / 100.0) as u64
}
