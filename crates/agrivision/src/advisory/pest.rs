use serde::Serialize;

use super::domain::crop_key;

const BASE_CONFIDENCE: u8 = 60;
const CONFIDENCE_PER_HIT: u8 = 10;
const MAX_CONFIDENCE: u8 = 95;
const FALLBACK_CONFIDENCE: u8 = 50;

struct DiseaseProfile {
    crop: &'static str,
    name: &'static str,
    keywords: &'static [&'static str],
    treatment: &'static str,
    organic: &'static str,
    caution: &'static str,
}

static DISEASES: [DiseaseProfile; 6] = [
    DiseaseProfile {
        crop: "paddy",
        name: "Blast (leaf blast)",
        keywords: &["brown spot", "diamond", "lesion", "blast"],
        treatment: "Use blast-tolerant varieties, avoid excess nitrogen; spray recommended fungicide as per agri officer.",
        organic: "Apply neem cake and maintain proper spacing for good air movement.",
        caution: "Do not spray fungicides repeatedly without guidance; follow label dose only.",
    },
    DiseaseProfile {
        crop: "paddy",
        name: "Bacterial leaf blight",
        keywords: &["leaf tip", "drying", "kresek", "yellowing from tip"],
        treatment: "Drain excess water, apply balanced fertilizers; use copper-based bactericides if advised by agri officer.",
        organic: "Use seed treatment with beneficial microbes and avoid injuring plants during weeding.",
        caution: "Do not overuse copper; follow recommended intervals and safety measures.",
    },
    DiseaseProfile {
        crop: "banana",
        name: "Panama wilt (Fusarium wilt)",
        keywords: &["yellowing", "yellow leaf", "wilt", "v-shape"],
        treatment: "Remove and destroy heavily infected plants; improve drainage and use disease-free suckers.",
        organic: "Apply Trichoderma-enriched compost around the plant base and avoid waterlogging.",
        caution: "Do not replant banana in the same pit immediately; follow crop rotation.",
    },
    DiseaseProfile {
        crop: "banana",
        name: "Sigatoka leaf spot",
        keywords: &["yellow streak", "leaf spot", "brown spot", "strip"],
        treatment: "Remove severely affected leaves and spray recommended fungicide in dry weather.",
        organic: "Use neem oil or botanical extracts as preventive sprays and keep field well aerated.",
        caution: "Always use clean tools when removing leaves to avoid spreading disease.",
    },
    DiseaseProfile {
        crop: "coconut",
        name: "Bud rot",
        keywords: &["bud rot", "crown", "spear leaf", "rotting"],
        treatment: "Remove and destroy affected tissues; apply recommended fungicide on the crown as per agri officer.",
        organic: "Improve drainage around the palm and avoid water stagnation near the trunk.",
        caution: "Work carefully at the crown; use safety equipment and avoid climbing in wet conditions.",
    },
    DiseaseProfile {
        crop: "pepper",
        name: "Quick wilt (Phytophthora)",
        keywords: &["sudden wilt", "blackening", "base", "root rot"],
        treatment: "Improve drainage, apply recommended fungicide drench around the vine base.",
        organic: "Apply Trichoderma-enriched compost and mulch; avoid waterlogging.",
        caution: "Monitor neighbouring vines regularly; early detection reduces spread.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PestDiagnosis {
    pub crop: String,
    pub likely_disease: String,
    pub confidence: u8,
    pub treatment: String,
    pub organic_option: String,
    pub caution: String,
}

/// Keyword match of free-text symptoms against the crop's known diseases.
///
/// The first disease with the most keyword hits wins; without any hit a generic
/// recommendation is returned at 50% confidence.
pub fn diagnose_pest(crop: &str, symptoms: &str) -> PestDiagnosis {
    let text = symptoms.to_lowercase();
    let key = crop_key(crop);

    let mut best: Option<(usize, &DiseaseProfile)> = None;
    for disease in DISEASES.iter().filter(|disease| disease.crop == key) {
        let hits = disease
            .keywords
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count();
        if hits > best.map_or(0, |(score, _)| score) {
            best = Some((hits, disease));
        }
    }

    match best {
        Some((hits, disease)) => {
            let confidence = (BASE_CONFIDENCE as usize + hits * CONFIDENCE_PER_HIT as usize)
                .min(MAX_CONFIDENCE as usize) as u8;
            PestDiagnosis {
                crop: crop.to_string(),
                likely_disease: disease.name.to_string(),
                confidence,
                treatment: disease.treatment.to_string(),
                organic_option: disease.organic.to_string(),
                caution: disease.caution.to_string(),
            }
        }
        None => PestDiagnosis {
            crop: crop.to_string(),
            likely_disease: "Not clearly identified".to_string(),
            confidence: FALLBACK_CONFIDENCE,
            treatment: "Consult local Krishi Bhavan or an agriculture officer with clear photos for proper diagnosis.".to_string(),
            organic_option: "Use neem oil spray (2-3 ml/litre) as a general preventive measure and improve field hygiene.".to_string(),
            caution: "Avoid random pesticide mixing. Always follow recommended dose and safety instructions.".to_string(),
        },
    }
}
