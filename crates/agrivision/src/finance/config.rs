use serde::{Deserialize, Serialize};

/// Tunable heuristics applied by the eligibility engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Loan ceiling as a multiple of declared annual income.
    pub income_multiplier: u64,
    /// Existing-debt to income ratio above which the ceiling is cut.
    pub debt_ratio_threshold: f64,
    /// Fraction of the ceiling kept once the debt threshold is crossed.
    pub debt_haircut: f64,
    /// Palm density assumed when estimating insurable coconut palms.
    pub palms_per_acre: f64,
    /// Hectares per acre, used wherever a table is priced per hectare.
    pub acres_to_hectares: f64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            income_multiplier: 4,
            debt_ratio_threshold: 0.5,
            debt_haircut: 0.5,
            palms_per_acre: 70.0,
            acres_to_hectares: 0.4047,
        }
    }
}

impl EligibilityConfig {
    pub fn hectares(&self, acres: f64) -> f64 {
        acres * self.acres_to_hectares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hectares_use_the_configured_factor() {
        let config = EligibilityConfig::default();
        assert!((config.hectares(2.0) - 0.8094).abs() < 1e-9);

        let metric = EligibilityConfig {
            acres_to_hectares: 0.5,
            ..EligibilityConfig::default()
        };
        assert_eq!(metric.hectares(3.0), 1.5);
    }
}
