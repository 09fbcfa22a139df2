use serde::Serialize;

/// Schemes are only suggested from this plot size upwards.
pub const MIN_SCHEME_LAND_ACRES: f64 = 0.1;
const PM_KISAN_MAX_ACRES: f64 = 5.0;

/// Short scheme card shown by the scheme finder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub name: String,
    pub department: String,
    pub description: String,
    pub eligibility: String,
    pub how_to_apply: String,
}

/// Long-form explanation behind a scheme code such as `pm-kisan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeDetail {
    pub code: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub benefits: &'static [&'static str],
    pub eligibility: &'static [&'static str],
    pub how_to_apply: &'static [&'static str],
    pub note: &'static str,
}

fn pm_kisan() -> Scheme {
    Scheme {
        name: "PM-KISAN".to_string(),
        department: "Central Government".to_string(),
        description: "Income support of ₹ 6,000/year to small and marginal farmers.".to_string(),
        eligibility: "Owner cultivator with up to 2 ha land.".to_string(),
        how_to_apply: "Register via Krishi Bhavan or online PM-KISAN portal.".to_string(),
    }
}

fn karshaka_insurance() -> Scheme {
    Scheme {
        name: "Karshaka Insurance Scheme".to_string(),
        department: "Government of Kerala".to_string(),
        description: "Insurance coverage for crop loss due to natural calamities.".to_string(),
        eligibility: "Registered farmers under state agriculture department.".to_string(),
        how_to_apply: "Apply through local Krishi Bhavan / agriculture officer.".to_string(),
    }
}

/// PM-KISAN up to five acres and the state insurance scheme for everyone; nothing for
/// plots under a tenth of an acre.
pub fn schemes_for_farmer(land_acres: f64) -> Vec<Scheme> {
    if !(land_acres >= MIN_SCHEME_LAND_ACRES) {
        return Vec::new();
    }

    let mut schemes = Vec::with_capacity(2);
    if land_acres <= PM_KISAN_MAX_ACRES {
        schemes.push(pm_kisan());
    }
    schemes.push(karshaka_insurance());
    schemes
}

pub fn scheme_detail(code: &str) -> Option<&'static SchemeDetail> {
    let code = code.trim();
    SCHEME_DETAILS
        .iter()
        .find(|detail| detail.code.eq_ignore_ascii_case(code))
}

pub static SCHEME_DETAILS: [SchemeDetail; 3] = [
    SchemeDetail {
        code: "pm-kisan",
        title: "PM-KISAN (Pradhan Mantri Kisan Samman Nidhi)",
        tagline: "Direct income support from Central Government",
        summary: "PM-KISAN provides an income support of ₹ 6,000 per year to all eligible small and marginal farmer families across India, paid in three equal instalments directly to the farmer's bank account.",
        benefits: &[
            "₹ 2,000 is transferred three times a year to the farmer's bank account.",
            "Helps farmers manage input costs for seeds, fertilizers and small expenses.",
            "Money is sent directly (DBT) without middlemen.",
        ],
        eligibility: &[
            "Farmer families owning cultivable land as per state land records.",
            "Certain higher-income and institutional categories are excluded.",
            "Land ownership details must be updated and verified by local officials.",
        ],
        how_to_apply: &[
            "Visit your local Krishi Bhavan or village agriculture office.",
            "Carry Aadhaar card, bank passbook and land ownership documents.",
            "You can also register and check status on the official PM-KISAN portal.",
        ],
        note: "For latest rules, always confirm with your local agriculture office or the PM-KISAN website.",
    },
    SchemeDetail {
        code: "karshaka-insurance",
        title: "Karshaka Insurance Scheme (Kerala)",
        tagline: "State-level crop insurance for Kerala farmers",
        summary: "Karshaka Insurance Scheme gives financial protection to registered Kerala farmers when crops are damaged due to flood, drought, pests, diseases or other natural calamities.",
        benefits: &[
            "Compensation for crop loss due to notified natural calamities.",
            "Encourages farmers to continue cultivation without fear of total loss.",
            "Premium is partially supported by the Government of Kerala.",
        ],
        eligibility: &[
            "Farmer must be registered with the Kerala agriculture department.",
            "Crops and area should be enrolled under the scheme for the season.",
            "Timely premium payment and accurate crop details are required.",
        ],
        how_to_apply: &[
            "Contact your local Krishi Bhavan or agriculture officer.",
            "Fill the enrolment form with crop, area and season details.",
            "Submit any documents requested and pay the required premium, if applicable.",
        ],
        note: "Compensation and coverage may change every year, so always check the latest circular from the department.",
    },
    SchemeDetail {
        code: "pm-kusum",
        title: "PM-KUSUM / Solar Pump Support",
        tagline: "Support for solar pumps and small solar plants",
        summary: "PM-KUSUM aims to promote the use of solar energy in agriculture by helping farmers install solar pumps and small solar power plants, reducing electricity cost for irrigation.",
        benefits: &[
            "Subsidy on installation of solar-powered irrigation pumps.",
            "Less dependence on grid electricity and diesel.",
            "Surplus power from certain components can be sold to the grid (as per scheme rules).",
        ],
        eligibility: &[
            "Individual farmers and groups of farmers as per scheme guidelines.",
            "Land and location must be suitable for installing solar equipment.",
            "Additional conditions may be set by the state nodal agency (such as KSEB in Kerala).",
        ],
        how_to_apply: &[
            "Check notifications from the state nodal agency (for example, KSEB / ANERT in Kerala).",
            "Submit an application when registrations are open, with land and identity details.",
            "Work with approved vendors for installation once your application is sanctioned.",
        ],
        note: "Subsidy percentage and components under PM-KUSUM can change; always refer to the latest official guidelines.",
    },
];
