use super::catalog::{LoanProduct, LOAN_PRODUCTS};
use super::config::EligibilityConfig;
use super::domain::{owned, FarmerProfile, LoanEligibility};

/// Equated monthly instalment for an amortizing loan, truncated to whole rupees.
pub fn calculate_emi(principal: u64, annual_rate: f64, tenure_months: u32) -> u64 {
    if tenure_months == 0 {
        return principal;
    }
    if annual_rate == 0.0 {
        return principal / u64::from(tenure_months);
    }

    let monthly_rate = annual_rate / 12.0 / 100.0;
    let factor = (1.0 + monthly_rate).powi(tenure_months as i32);
    let emi = principal as f64 * monthly_rate * factor / (factor - 1.0);
    emi.max(0.0) as u64
}

pub(crate) fn evaluate_all(
    profile: &FarmerProfile,
    config: &EligibilityConfig,
) -> Vec<LoanEligibility> {
    let mut results: Vec<LoanEligibility> = LOAN_PRODUCTS
        .iter()
        .map(|loan| evaluate_product(loan, profile, config))
        .collect();

    // Vec::sort_by is stable, so equal rates keep table order.
    results.sort_by(|a, b| {
        b.eligible
            .cmp(&a.eligible)
            .then_with(|| a.interest_rate.total_cmp(&b.interest_rate))
    });

    results
}

fn evaluate_product(
    loan: &LoanProduct,
    profile: &FarmerProfile,
    config: &EligibilityConfig,
) -> LoanEligibility {
    let mut eligible = true;
    let mut reason = "You are eligible for this loan.".to_string();
    let mut max_eligible = loan.max_amount.min(profile.loan_amount_needed);

    if profile.land_acres < loan.min_land_acres {
        eligible = false;
        reason = format!("Minimum {} acres of land required.", loan.min_land_acres);
    }

    if !loan.eligible_crops.admits(&profile.crop) {
        eligible = false;
        reason = format!(
            "This loan is not available for {} cultivation.",
            profile.crop.trim()
        );
    }

    if loan.collateral_required
        && !profile.has_collateral
        && profile.loan_amount_needed > loan.collateral_limit
    {
        eligible = false;
        reason = "Collateral required for this loan amount.".to_string();
    }

    let income_limit = profile
        .annual_income
        .saturating_mul(config.income_multiplier);
    if income_limit < max_eligible {
        max_eligible = income_limit;
        reason.push_str(" Amount limited based on income.");
    }

    if profile.existing_loans > 0 {
        let debt_ratio = profile.existing_loans as f64 / profile.annual_income.max(1) as f64;
        if debt_ratio > config.debt_ratio_threshold {
            max_eligible = (max_eligible as f64 * config.debt_haircut) as u64;
            reason.push_str(" Reduced due to existing debt.");
        }
    }

    let (max_eligible_amount, monthly_emi, total_repayment) = if eligible {
        let emi = calculate_emi(max_eligible, loan.interest_rate, loan.tenure_months);
        (
            max_eligible,
            emi,
            emi.saturating_mul(u64::from(loan.tenure_months)),
        )
    } else {
        (0, 0, 0)
    };

    LoanEligibility {
        loan_id: loan.id.to_string(),
        loan_name: loan.name.to_string(),
        provider: loan.provider.to_string(),
        eligible,
        max_eligible_amount,
        interest_rate: loan.interest_rate,
        tenure_months: loan.tenure_months,
        monthly_emi,
        total_repayment,
        documents_required: owned(loan.documents),
        apply_at: loan.apply_at.to_string(),
        reason,
    }
}
