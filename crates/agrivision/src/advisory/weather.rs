use serde::Serialize;

use super::domain::crop_key;

const HEAVY_RAIN_DISTRICTS: [&str; 2] = ["idukki", "wayanad"];
const HUMIDITY_SENSITIVE_CROPS: [&str; 3] = ["pepper", "cardamom", "banana"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Rain,
    DiseaseRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherAlert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub level: AlertLevel,
    pub message: String,
}

/// Rule-based outlook; the high-range districts also get a humidity warning for sensitive crops.
pub fn weather_alerts(district: &str, crop: &str) -> Vec<WeatherAlert> {
    let district = district.trim().to_ascii_lowercase();
    if !HEAVY_RAIN_DISTRICTS.contains(&district.as_str()) {
        return vec![WeatherAlert {
            kind: AlertKind::Rain,
            level: AlertLevel::Medium,
            message: "Moderate showers likely. Plan irrigation accordingly.".to_string(),
        }];
    }

    let mut alerts = vec![WeatherAlert {
        kind: AlertKind::Rain,
        level: AlertLevel::High,
        message: "Heavy rainfall expected in the next 3 days. Avoid waterlogging in fields."
            .to_string(),
    }];
    if HUMIDITY_SENSITIVE_CROPS.contains(&crop_key(crop).as_str()) {
        alerts.push(WeatherAlert {
            kind: AlertKind::DiseaseRisk,
            level: AlertLevel::Medium,
            message: "High humidity may trigger fungal diseases. Monitor leaves for spots."
                .to_string(),
        });
    }
    alerts
}
