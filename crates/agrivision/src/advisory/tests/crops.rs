use crate::advisory::{is_kerala_district, recommend_crops, SoilType};

fn names(suggestions: &[crate::advisory::CropSuggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn only_kerala_districts_get_suggestions() {
    assert!(recommend_crops(SoilType::Loam, 1.0, "Chennai", "kharif").is_empty());
    assert!(is_kerala_district("  WAYANAD "));
    assert!(!is_kerala_district(""));
}

#[test]
fn alappuzha_clay_favours_paddy_and_keeps_positive_scores_only() {
    let suggestions = recommend_crops(SoilType::Clay, 2.47, "Alappuzha", "kharif");

    assert_eq!(names(&suggestions), vec!["Paddy", "Coconut"]);
    assert_eq!(suggestions[0].score, 5);
    assert_eq!(suggestions[1].score, 2);
    assert!((suggestions[0].expected_yield_tonnes - 3.0).abs() < 1e-9);
    assert_eq!(suggestions[0].expected_profit_rs, 50_000);
    assert_eq!(suggestions[1].expected_profit_rs, 80_000);
}

#[test]
fn small_plots_get_a_high_value_bonus_and_ties_keep_table_order() {
    let suggestions = recommend_crops(SoilType::Loam, 2.0, "Kottayam", "perennial");

    assert_eq!(names(&suggestions), vec!["Pepper", "Paddy", "Banana"]);
    let scores: Vec<u8> = suggestions.iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![6, 4, 3]);
    assert_eq!(suggestions[0].expected_profit_rs, 121_457);
    assert_eq!(
        suggestions[0].reasoning,
        "Matched soil (loam), district (Kottayam) and season (perennial)."
    );
}
