use crate::advisory::{diagnose_pest, weather_alerts, AlertKind, AlertLevel};

#[test]
fn keyword_hits_raise_confidence() {
    let diagnosis = diagnose_pest("Paddy", "Brown spot with diamond shaped lesion");
    assert_eq!(diagnosis.likely_disease, "Blast (leaf blast)");
    assert_eq!(diagnosis.confidence, 90);
}

#[test]
fn confidence_is_capped() {
    let diagnosis = diagnose_pest("pepper", "sudden wilt, blackening at the base and root rot");
    assert_eq!(diagnosis.likely_disease, "Quick wilt (Phytophthora)");
    assert_eq!(diagnosis.confidence, 95);
}

#[test]
fn ties_go_to_the_first_listed_disease() {
    let diagnosis = diagnose_pest("banana", "yellow leaf with brown spot");
    assert_eq!(diagnosis.likely_disease, "Panama wilt (Fusarium wilt)");
    assert_eq!(diagnosis.confidence, 70);
}

#[test]
fn unmatched_symptoms_fall_back_to_generic_advice() {
    let diagnosis = diagnose_pest("Ginger", "leaves curling");
    assert_eq!(diagnosis.likely_disease, "Not clearly identified");
    assert_eq!(diagnosis.confidence, 50);
    assert_eq!(diagnosis.crop, "Ginger");

    let blank = diagnose_pest("coconut", "");
    assert_eq!(blank.confidence, 50);
}

#[test]
fn high_range_districts_warn_about_heavy_rain_and_humidity() {
    let alerts = weather_alerts("Idukki", "Banana");
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].kind, AlertKind::Rain);
    assert_eq!(alerts[0].level, AlertLevel::High);
    assert_eq!(alerts[1].kind, AlertKind::DiseaseRisk);
    assert_eq!(alerts[1].level, AlertLevel::Medium);

    let paddy = weather_alerts("wayanad", "paddy");
    assert_eq!(paddy.len(), 1);
    assert_eq!(paddy[0].level, AlertLevel::High);
}

#[test]
fn other_districts_get_moderate_showers() {
    let alerts = weather_alerts("Thrissur", "pepper");
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::Medium);
    assert_eq!(
        alerts[0].message,
        "Moderate showers likely. Plan irrigation accordingly."
    );
}

#[test]
fn alert_kind_serializes_as_type() {
    let value = serde_json::to_value(&weather_alerts("Idukki", "pepper")[1]).unwrap();
    assert_eq!(value["type"], "disease-risk");
    assert_eq!(value["level"], "medium");
}
