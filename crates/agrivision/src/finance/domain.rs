use serde::{Deserialize, Serialize};

/// Qualitative level used by the district and crop risk tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn points(self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }
}

/// Social category of the farmer, used for differentiated subsidy rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmerCategory {
    #[default]
    General,
    Sc,
    St,
    Woman,
}

impl FarmerCategory {
    pub const fn is_scheduled(self) -> bool {
        matches!(self, FarmerCategory::Sc | FarmerCategory::St)
    }
}

/// Request-scoped description of a farm household, supplied per call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub land_acres: f64,
    pub crop: String,
    pub district: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub annual_income: u64,
    #[serde(default)]
    pub existing_loans: u64,
    #[serde(default)]
    pub has_collateral: bool,
    #[serde(default)]
    pub loan_amount_needed: u64,
    #[serde(default)]
    pub category: FarmerCategory,
    #[serde(default)]
    pub has_irrigation: bool,
    #[serde(default)]
    pub organic_interest: bool,
}

impl FarmerProfile {
    pub fn validate(&self) -> Result<(), InputError> {
        validate_land(self.land_acres)?;
        validate_crop(&self.crop)
    }
}

/// Boundary validation failures; the evaluators themselves never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("land size must be a positive number of acres (got {0})")]
    InvalidLandSize(f64),
    #[error("land size must be at least {minimum} acres (got {actual})")]
    LandBelowMinimum { minimum: f64, actual: f64 },
    #[error("crop must not be empty")]
    MissingCrop,
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },
}

pub fn validate_land(land_acres: f64) -> Result<(), InputError> {
    if land_acres.is_finite() && land_acres > 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidLandSize(land_acres))
    }
}

pub fn validate_minimum_land(land_acres: f64, minimum: f64) -> Result<(), InputError> {
    validate_land(land_acres)?;
    if land_acres < minimum {
        return Err(InputError::LandBelowMinimum {
            minimum,
            actual: land_acres,
        });
    }
    Ok(())
}

pub fn validate_required(field: &'static str, value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        Err(InputError::MissingField { field })
    } else {
        Ok(())
    }
}

pub fn validate_crop(crop: &str) -> Result<(), InputError> {
    if crop.trim().is_empty() {
        Err(InputError::MissingCrop)
    } else {
        Ok(())
    }
}

/// Eligibility verdict for one loan product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanEligibility {
    pub loan_id: String,
    pub loan_name: String,
    pub provider: String,
    pub eligible: bool,
    pub max_eligible_amount: u64,
    pub interest_rate: f64,
    pub tenure_months: u32,
    pub monthly_emi: u64,
    pub total_repayment: u64,
    pub documents_required: Vec<String>,
    pub apply_at: String,
    pub reason: String,
}

/// Composite weather/pest risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn from_points(points: u8) -> Self {
        if points >= 6 {
            RiskBand::High
        } else if points >= 3 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "LOW RISK",
            RiskBand::Medium => "MEDIUM RISK",
            RiskBand::High => "HIGH RISK",
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            RiskBand::Low => "Optional but advisable to take basic insurance.",
            RiskBand::Medium => "Recommended to take crop insurance for protection.",
            RiskBand::High => "Strongly recommended to take comprehensive crop insurance.",
        }
    }
}

/// Risk score computed once per insurance analysis and shared by every recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub points: u8,
    pub band: RiskBand,
    pub label: String,
    pub advice: String,
}

impl RiskAssessment {
    pub fn from_points(points: u8) -> Self {
        let band = RiskBand::from_points(points);
        Self {
            points,
            band,
            label: band.label().to_string(),
            advice: band.advice().to_string(),
        }
    }
}

/// Premium schedule selected from the cropping season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonClass {
    Kharif,
    Rabi,
    Commercial,
}

impl SeasonClass {
    pub fn classify(season: &str) -> Self {
        match season.trim().to_ascii_lowercase().as_str() {
            "kharif" | "monsoon" => SeasonClass::Kharif,
            "rabi" | "winter" => SeasonClass::Rabi,
            _ => SeasonClass::Commercial,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRecommendation {
    pub scheme_name: String,
    pub provider: String,
    pub premium_amount: u64,
    pub sum_insured: u64,
    pub coverage: Vec<String>,
    pub risk: RiskAssessment,
    pub recommendation: String,
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyRecommendation {
    pub scheme_id: String,
    pub scheme_name: String,
    pub potential_benefit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_amount: Option<u64>,
    pub eligibility_status: String,
    pub description: String,
    pub how_to_apply: String,
    pub documents: Vec<String>,
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Format a rupee amount with thousands separators (e.g. `22,258`).
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}
