use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchCategory, MatchResult};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub matches: Vec<ProgramMatch>,
    pub total_programs: usize,
}

/// One ranked program, flattened into an owned record for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramMatch {
    pub university: String,
    pub program: String,
    pub location: String,
    pub ranking: Option<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub category: MatchCategory,
    #[serde(rename = "admissionProbability")]
    pub admission_probability: f64,
    #[serde(rename = "whyRecommended")]
    pub why_recommended: Vec<String>,
    pub concerns: Vec<String>,
    #[serde(rename = "facultyHighlights")]
    pub faculty_highlights: Vec<String>,
    pub tuition: String,
    pub deadline: String,
    #[serde(rename = "websiteUrl")]
    pub website_url: Option<String>,
}

impl From<MatchResult<'_>> for ProgramMatch {
    fn from(result: MatchResult<'_>) -> Self {
        ProgramMatch {
            university: result.program.name.clone(),
            program: result.program.program_name.clone(),
            location: result.program.location.clone(),
            ranking: result.program.ranking.clone(),
            match_score: result.match_score,
            category: result.category,
            admission_probability: result.admission_probability,
            why_recommended: result.why_recommended,
            concerns: result.concerns,
            faculty_highlights: result.faculty_highlights,
            tuition: result.program.tuition.clone(),
            deadline: result.program.deadline.clone(),
            website_url: result.program.website_url.clone(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
