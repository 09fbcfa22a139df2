//! Loan, insurance and subsidy eligibility for Kerala farmers.
//!
//! Every evaluation is a pure function of its inputs and the compiled-in tables in
//! [`catalog`]; unknown crops or districts resolve to documented fallbacks instead of errors.

pub mod catalog;
mod config;
pub mod domain;
mod insurance;
mod loans;
pub mod router;
mod subsidies;

#[cfg(test)]
mod tests;

pub use config::EligibilityConfig;
pub use domain::{
    FarmerCategory, FarmerProfile, InputError, InsuranceRecommendation, LoanEligibility,
    RiskAssessment, RiskBand, RiskLevel, SeasonClass, SubsidyRecommendation,
};
pub use insurance::risk_points;
pub use loans::calculate_emi;
pub use router::finance_router;

use tracing::debug;

/// Stateless evaluator applying the eligibility heuristics to a farmer's inputs.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// One record per loan product, eligible first, then by ascending interest rate.
    pub fn evaluate_loans(&self, profile: &FarmerProfile) -> Vec<LoanEligibility> {
        let results = loans::evaluate_all(profile, &self.config);
        debug!(
            crop = %profile.crop,
            eligible = results.iter().filter(|loan| loan.eligible).count(),
            "evaluated loan products"
        );
        results
    }

    /// National scheme, state scheme and, for coconut, the palm scheme, in that order.
    pub fn analyze_insurance(
        &self,
        crop: &str,
        district: &str,
        land_acres: f64,
        season: &str,
    ) -> Vec<InsuranceRecommendation> {
        let results = insurance::analyze(crop, district, land_acres, season, &self.config);
        debug!(crop, district, schemes = results.len(), "analyzed crop insurance");
        results
    }

    pub fn recommend_subsidies(
        &self,
        land_acres: f64,
        crop: &str,
        _district: &str,
        category: FarmerCategory,
        has_irrigation: bool,
        organic_interest: bool,
    ) -> Vec<SubsidyRecommendation> {
        let results = subsidies::recommend(
            land_acres,
            crop,
            category,
            has_irrigation,
            organic_interest,
            &self.config,
        );
        debug!(crop, schemes = results.len(), "recommended subsidies");
        results
    }
}

pub fn evaluate_loans(profile: &FarmerProfile) -> Vec<LoanEligibility> {
    EligibilityEngine::default().evaluate_loans(profile)
}

pub fn analyze_insurance(
    crop: &str,
    district: &str,
    land_acres: f64,
    season: &str,
) -> Vec<InsuranceRecommendation> {
    EligibilityEngine::default().analyze_insurance(crop, district, land_acres, season)
}

pub fn recommend_subsidies(
    land_acres: f64,
    crop: &str,
    district: &str,
    category: FarmerCategory,
    has_irrigation: bool,
    organic_interest: bool,
) -> Vec<SubsidyRecommendation> {
    EligibilityEngine::default().recommend_subsidies(
        land_acres,
        crop,
        district,
        category,
        has_irrigation,
        organic_interest,
    )
}
