use super::catalog::{
    contains_crop, MECHANIZATION_MIN_ACRES, MECHANIZATION_PERCENT, MECHANIZATION_PERCENT_SC_ST,
    MICRO_IRRIGATION_CROPS, MICRO_IRRIGATION_MAX_PER_HA, MICRO_IRRIGATION_PERCENT,
    ORGANIC_CLUSTER_SIZE, ORGANIC_MIN_ACRES, ORGANIC_PER_HA_THREE_YEARS, PM_KISAN_ANNUAL_AMOUNT,
    PM_KISAN_MAX_HECTARES, SOLAR_PUMP_MIN_ACRES,
};
use super::config::EligibilityConfig;
use super::domain::{format_amount, owned, FarmerCategory, SubsidyRecommendation};

const ELIGIBLE: &str = "ELIGIBLE";

pub(crate) fn recommend(
    land_acres: f64,
    crop: &str,
    category: FarmerCategory,
    has_irrigation: bool,
    organic_interest: bool,
    config: &EligibilityConfig,
) -> Vec<SubsidyRecommendation> {
    let land_ha = config.hectares(land_acres);
    let mut recommendations = Vec::new();

    if land_ha <= PM_KISAN_MAX_HECTARES {
        recommendations.push(record(
            "pm_kisan",
            "PM-KISAN Samman Nidhi",
            format!(
                "₹{} per year (₹2,000 x 3 instalments)",
                format_amount(PM_KISAN_ANNUAL_AMOUNT)
            ),
            Some(PM_KISAN_ANNUAL_AMOUNT),
            ELIGIBLE,
            "Direct income support transferred to your bank account every 4 months.",
            "Register at pmkisan.gov.in or visit Krishi Bhavan",
            &["Aadhaar Card", "Land records", "Bank passbook"],
        ));
    }

    if contains_crop(MICRO_IRRIGATION_CROPS, crop) {
        let benefit = (MICRO_IRRIGATION_MAX_PER_HA as f64 * land_ha
            * MICRO_IRRIGATION_PERCENT as f64
            / 100.0) as u64;
        recommendations.push(record(
            "drip_irrigation",
            "Micro Irrigation Subsidy (PMKSY)",
            format!(
                "Up to ₹{} ({}% of cost)",
                format_amount(benefit),
                MICRO_IRRIGATION_PERCENT
            ),
            Some(benefit),
            ELIGIBLE,
            "Subsidy for drip irrigation and sprinkler systems to save water and increase yield.",
            "Apply through Krishi Bhavan or eMISSION portal",
            &[
                "Land documents",
                "Quotation from approved supplier",
                "Aadhaar",
                "Bank account",
            ],
        ));
    }

    if land_acres >= MECHANIZATION_MIN_ACRES {
        let percent = if category.is_scheduled() {
            MECHANIZATION_PERCENT_SC_ST
        } else {
            MECHANIZATION_PERCENT
        };
        recommendations.push(record(
            "farm_mechanization",
            "Farm Mechanization Subsidy (SMAM)",
            format!("Up to ₹1,50,000 ({percent}% of equipment cost)"),
            None,
            ELIGIBLE,
            "Subsidy on power tillers, sprayers, pump sets, and other farm machinery.",
            "Apply at agrimachinery.nic.in or Krishi Bhavan",
            &[
                "Land documents",
                "Aadhaar",
                "Quotation",
                "Caste certificate if SC/ST",
            ],
        ));
    }

    if organic_interest && land_acres >= ORGANIC_MIN_ACRES {
        let benefit = (ORGANIC_PER_HA_THREE_YEARS as f64 * land_ha) as u64;
        recommendations.push(SubsidyRecommendation {
            eligibility_status: format!(
                "ELIGIBLE (Need cluster of {ORGANIC_CLUSTER_SIZE}+ farmers)"
            ),
            ..record(
                "organic_farming",
                "Organic Farming Subsidy (PKVY)",
                format!("₹{} over 3 years", format_amount(benefit)),
                Some(benefit),
                ELIGIBLE,
                "Support for organic inputs, certification, and marketing. Need to form a cluster with nearby farmers.",
                "Form a farmer group and apply through Krishi Bhavan",
                &[
                    "Cluster formation documents",
                    "Land records",
                    "Commitment letter",
                ],
            )
        });
    }

    recommendations.push(record(
        "interest_subvention",
        "Interest Subvention on Crop Loans",
        "Effective interest rate of just 4% on loans up to ₹3 lakh".to_string(),
        None,
        ELIGIBLE,
        "3% interest subvention + additional 3% for prompt repayment on short-term crop loans.",
        "Automatic benefit when taking KCC or crop loan from bank",
        &["KCC application or crop loan documents"],
    ));

    if land_acres >= SOLAR_PUMP_MIN_ACRES && !has_irrigation {
        recommendations.push(record(
            "pm_kusum",
            "PM-KUSUM Solar Pump Subsidy",
            "60% subsidy on solar pump (up to 7.5 HP)".to_string(),
            None,
            ELIGIBLE,
            "Install solar-powered irrigation pump with 60% government subsidy. Save on electricity bills forever.",
            "Apply through ANERT Kerala or Krishi Bhavan",
            &["Land documents", "Water source proof", "Aadhaar", "Bank account"],
        ));
    }

    recommendations.push(record(
        "seed_subsidy",
        "Certified Seed Subsidy",
        "50% subsidy on certified seeds".to_string(),
        None,
        ELIGIBLE,
        "Get quality certified seeds at subsidized rates from Krishi Bhavans.",
        "Visit Krishi Bhavan during sowing season",
        &["Aadhaar / Ration card", "Land documents"],
    ));

    recommendations
}

#[allow(clippy::too_many_arguments)]
fn record(
    scheme_id: &str,
    scheme_name: &str,
    potential_benefit: String,
    benefit_amount: Option<u64>,
    eligibility_status: &str,
    description: &str,
    how_to_apply: &str,
    documents: &[&str],
) -> SubsidyRecommendation {
    SubsidyRecommendation {
        scheme_id: scheme_id.to_string(),
        scheme_name: scheme_name.to_string(),
        potential_benefit,
        benefit_amount,
        eligibility_status: eligibility_status.to_string(),
        description: description.to_string(),
        how_to_apply: how_to_apply.to_string(),
        documents: owned(documents),
    }
}
