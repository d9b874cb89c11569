//! Athletes medical fund information.

use serde::Serialize;

/// Medical fund information block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalFundInfo {
    pub title: &'static str,
    pub tagline: &'static str,
    pub covers: Vec<&'static str>,
    pub eligibility: &'static str,
    pub how_to_apply: Vec<&'static str>,
}

/// The medical fund information shown on the fund page.
#[must_use]
pub fn info() -> MedicalFundInfo {
    MedicalFundInfo {
        title: "Athletes Medical Fund",
        tagline: "Protecting and supporting our student-athletes",
        covers: vec![
            "Immediate medical attention during sanctioned matches or training",
            "Subsidized treatment and rehabilitation for approved cases",
            "Collaboration with partner facilities for specialized care",
        ],
        eligibility: "Players registered with USRA and participating in sanctioned \
                      activities are eligible under the terms and conditions of the fund.",
        how_to_apply: vec![
            "Notify USRA immediately after an incident via your school representative.",
            "Submit medical assessment and incident report to USRA.",
            "USRA verifies the claim and communicates the next steps.",
        ],
    }
}
