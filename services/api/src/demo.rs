use agrivision::advisory::{
    fertilizer_plan, predict_growth, recommend_crops, schemes_for_farmer, weather_alerts,
    OrganicMatter, SoilType,
};
use agrivision::config::AppConfig;
use agrivision::error::AppError;
use agrivision::finance::domain::{format_amount, validate_crop, validate_land};
use agrivision::finance::{
    EligibilityEngine, FarmerCategory, FarmerProfile, InsuranceRecommendation, LoanEligibility,
    SubsidyRecommendation,
};
use clap::Args;
use std::fmt::Write;

/// Parses the serde name of a category (`general`, `sc`, `st`, `woman`), ignoring case.
pub(crate) fn parse_category(raw: &str) -> Result<FarmerCategory, String> {
    let name = raw.trim().to_ascii_lowercase();
    serde_json::from_value(serde_json::Value::String(name))
        .map_err(|_| format!("unknown category '{raw}' (expected general, sc, st or woman)"))
}

#[derive(Args, Debug)]
pub(crate) struct LoanArgs {
    /// Cultivated land in acres
    #[arg(long)]
    pub(crate) land_acres: f64,
    /// Main crop, e.g. Paddy or Coconut
    #[arg(long)]
    pub(crate) crop: String,
    /// Kerala district
    #[arg(long, default_value = "")]
    pub(crate) district: String,
    /// Cropping season (kharif, rabi, ...)
    #[arg(long, default_value = "")]
    pub(crate) season: String,
    /// Household income per year in rupees
    #[arg(long, default_value_t = 0)]
    pub(crate) annual_income: u64,
    /// Outstanding loans in rupees
    #[arg(long, default_value_t = 0)]
    pub(crate) existing_loans: u64,
    /// Gold or property available as collateral
    #[arg(long)]
    pub(crate) has_collateral: bool,
    /// Amount the farmer wants to borrow
    #[arg(long, default_value_t = 0)]
    pub(crate) loan_amount_needed: u64,
    #[arg(long, value_parser = parse_category, default_value = "general")]
    pub(crate) category: FarmerCategory,
}

impl LoanArgs {
    pub(crate) fn profile(&self) -> FarmerProfile {
        FarmerProfile {
            land_acres: self.land_acres,
            crop: self.crop.clone(),
            district: self.district.clone(),
            season: self.season.clone(),
            annual_income: self.annual_income,
            existing_loans: self.existing_loans,
            has_collateral: self.has_collateral,
            loan_amount_needed: self.loan_amount_needed,
            category: self.category,
            has_irrigation: false,
            organic_interest: false,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct InsuranceArgs {
    #[arg(long)]
    pub(crate) crop: String,
    #[arg(long, default_value = "")]
    pub(crate) district: String,
    #[arg(long)]
    pub(crate) land_acres: f64,
    #[arg(long, default_value = "kharif")]
    pub(crate) season: String,
}

#[derive(Args, Debug)]
pub(crate) struct SubsidyArgs {
    #[arg(long)]
    pub(crate) land_acres: f64,
    #[arg(long)]
    pub(crate) crop: String,
    #[arg(long, default_value = "")]
    pub(crate) district: String,
    #[arg(long, value_parser = parse_category, default_value = "general")]
    pub(crate) category: FarmerCategory,
    /// The plot already has a working irrigation source
    #[arg(long)]
    pub(crate) has_irrigation: bool,
    /// Interested in certified organic farming
    #[arg(long)]
    pub(crate) organic_interest: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the advisory portion of the demo.
    #[arg(long)]
    pub(crate) skip_advisory: bool,
}

fn engine() -> Result<EligibilityEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(EligibilityEngine::new(config.eligibility))
}

pub(crate) fn run_loans(args: LoanArgs) -> Result<(), AppError> {
    let profile = args.profile();
    profile.validate()?;
    let loans = engine()?.evaluate_loans(&profile);
    print!("{}", render_loans(&profile, &loans));
    Ok(())
}

pub(crate) fn run_insurance(args: InsuranceArgs) -> Result<(), AppError> {
    validate_land(args.land_acres)?;
    validate_crop(&args.crop)?;
    let recommendations =
        engine()?.analyze_insurance(&args.crop, &args.district, args.land_acres, &args.season);
    print!("{}", render_insurance(&args.crop, &recommendations));
    Ok(())
}

pub(crate) fn run_subsidies(args: SubsidyArgs) -> Result<(), AppError> {
    validate_land(args.land_acres)?;
    validate_crop(&args.crop)?;
    let subsidies = engine()?.recommend_subsidies(
        args.land_acres,
        &args.crop,
        &args.district,
        args.category,
        args.has_irrigation,
        args.organic_interest,
    );
    print!("{}", render_subsidies(&subsidies));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let profile = demo_profile();
    let engine = engine()?;

    println!("AgriVision demo");
    println!(
        "Farmer: {} acres of {} in {} ({} season)",
        profile.land_acres, profile.crop, profile.district, profile.season
    );

    if !args.skip_advisory {
        print!("{}", render_advisory(&profile));
    }

    let loans = engine.evaluate_loans(&profile);
    print!("\n{}", render_loans(&profile, &loans));

    let insurance = engine.analyze_insurance(
        &profile.crop,
        &profile.district,
        profile.land_acres,
        &profile.season,
    );
    print!("\n{}", render_insurance(&profile.crop, &insurance));

    let subsidies = engine.recommend_subsidies(
        profile.land_acres,
        &profile.crop,
        &profile.district,
        profile.category,
        profile.has_irrigation,
        profile.organic_interest,
    );
    print!("\n{}", render_subsidies(&subsidies));
    Ok(())
}

pub(crate) fn demo_profile() -> FarmerProfile {
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
        has_irrigation: false,
        organic_interest: true,
    }
}

pub(crate) fn render_loans(profile: &FarmerProfile, loans: &[LoanEligibility]) -> String {
    let mut out = String::new();
    let eligible = loans.iter().filter(|loan| loan.eligible).count();
    let _ = writeln!(
        out,
        "Loan options for ₹{} ({} of {} eligible)",
        format_amount(profile.loan_amount_needed),
        eligible,
        loans.len()
    );
    for loan in loans {
        let marker = if loan.eligible { "✔" } else { "✘" };
        let _ = writeln!(
            out,
            "{marker} {} ({}) @ {:.1}% for {} months",
            loan.loan_name, loan.provider, loan.interest_rate, loan.tenure_months
        );
        if loan.eligible {
            let _ = writeln!(
                out,
                "    up to ₹{} | EMI ₹{} | total ₹{}",
                format_amount(loan.max_eligible_amount),
                format_amount(loan.monthly_emi),
                format_amount(loan.total_repayment)
            );
        }
        let _ = writeln!(out, "    {}", loan.reason);
    }
    out
}

pub(crate) fn render_insurance(crop: &str, recommendations: &[InsuranceRecommendation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Crop insurance for {crop}");
    if let Some(first) = recommendations.first() {
        let _ = writeln!(
            out,
            "Risk: {} ({} points). {}",
            first.risk.label, first.risk.points, first.risk.advice
        );
    }
    for scheme in recommendations {
        let _ = writeln!(
            out,
            "- {} ({}): premium ₹{} for ₹{} cover",
            scheme.scheme_name,
            scheme.provider,
            format_amount(scheme.premium_amount),
            format_amount(scheme.sum_insured)
        );
        let _ = writeln!(out, "    {}", scheme.recommendation);
    }
    out
}

pub(crate) fn render_subsidies(subsidies: &[SubsidyRecommendation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Subsidies ({} schemes)", subsidies.len());
    for subsidy in subsidies {
        let _ = writeln!(
            out,
            "- {}: {} [{}]",
            subsidy.scheme_name, subsidy.potential_benefit, subsidy.eligibility_status
        );
        let _ = writeln!(out, "    Apply: {}", subsidy.how_to_apply);
    }
    out
}

fn render_advisory(profile: &FarmerProfile) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nCrop suggestions (laterite soil)");
    for suggestion in recommend_crops(
        SoilType::Laterite,
        profile.land_acres,
        &profile.district,
        &profile.season,
    ) {
        let _ = writeln!(
            out,
            "- {} (score {}): ~{:.2} t, ₹{} profit",
            suggestion.name,
            suggestion.score,
            suggestion.expected_yield_tonnes,
            format_amount(suggestion.expected_profit_rs)
        );
    }

    let _ = writeln!(out, "Weather alerts");
    for alert in weather_alerts(&profile.district, &profile.crop) {
        let _ = writeln!(out, "- [{:?}] {}", alert.level, alert.message);
    }

    let plan = fertilizer_plan(&profile.crop, OrganicMatter::Medium, profile.land_acres);
    let _ = writeln!(
        out,
        "Fertilizer: N {} kg, P {} kg, K {} kg. {}",
        plan.nitrogen_kg, plan.phosphorus_kg, plan.potassium_kg, plan.tips
    );

    let growth = predict_growth(&profile.crop, profile.land_acres);
    let _ = writeln!(
        out,
        "Harvest outlook: {} t in {} days, about ₹{}",
        growth.expected_yield_tons,
        growth.days_to_harvest,
        format_amount(growth.expected_profit_rs)
    );

    let schemes: Vec<String> = schemes_for_farmer(profile.land_acres)
        .into_iter()
        .map(|scheme| scheme.name)
        .collect();
    let _ = writeln!(out, "Government schemes: {}", schemes.join(", "));
    out
}
