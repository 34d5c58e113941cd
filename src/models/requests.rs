use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ApplicantProfile, DegreeLevel};

/// Request to rank the catalog against an applicant profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub profile: RankProfile,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

/// Applicant profile as submitted over the wire
///
/// Validated here, then converted into the engine's `ApplicantProfile`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankProfile {
    #[validate(range(min = 0.0, max = 4.0))]
    pub gpa: f64,
    #[serde(alias = "research_interests", rename = "researchInterests", default)]
    pub research_interests: Vec<String>,
    #[serde(alias = "degree_level", rename = "degreeLevel", default)]
    pub degree_level: DegreeLevel,
    #[validate(length(min = 1))]
    #[serde(alias = "field_of_study", rename = "fieldOfStudy")]
    pub field_of_study: String,
}

impl From<RankProfile> for ApplicantProfile {
    fn from(p: RankProfile) -> Self {
        ApplicantProfile {
            gpa: p.gpa,
            research_interests: p.research_interests,
            degree_level: p.degree_level,
            field_of_study: p.field_of_study,
        }
    }
}

fn default_limit() -> u16 {
    10
}
