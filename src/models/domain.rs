use serde::{Deserialize, Serialize};

/// Applicant profile supplied by the caller for a single ranking call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub gpa: f64,
    #[serde(rename = "researchInterests", default)]
    pub research_interests: Vec<String>,
    #[serde(rename = "degreeLevel", default)]
    pub degree_level: DegreeLevel,
    #[serde(rename = "fieldOfStudy")]
    pub field_of_study: String,
}

/// Degree level the applicant is applying for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    Masters,
    Phd,
    #[default]
    Other,
}

/// A graduate program in the catalog
///
/// Numeric baselines and collections default when absent so a partial
/// catalog still deserializes; a missing baseline scores as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub name: String,
    #[serde(rename = "programName")]
    pub program_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub ranking: Option<String>,
    #[serde(rename = "acceptanceRate", default)]
    pub acceptance_rate: f64,
    #[serde(rename = "minGpa", default)]
    pub min_gpa: f64,
    #[serde(rename = "avgGpa", default)]
    pub avg_gpa: f64,
    #[serde(rename = "researchAreas", default)]
    pub research_areas: Vec<String>,
    #[serde(default)]
    pub faculty: Vec<FacultyMember>,
    #[serde(default)]
    pub tuition: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(rename = "websiteUrl", default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
}

/// Faculty member attached to a program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyMember {
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(rename = "matchKeywords", default)]
    pub match_keywords: Vec<String>,
}

/// Applicant-relative risk tier for a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCategory {
    Reach,
    Target,
    Safety,
}

/// One scored program, borrowed from the catalog it was ranked against
///
/// Recomputing with identical inputs yields an identical result; nothing
/// here is mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub program: &'a ProgramRecord,
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
}

/// Scoring weights; each weight doubles as the cap for its sub-score
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub gpa: f64,
    pub research: f64,
    pub faculty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gpa: 25.0,
            research: 40.0,
            faculty: 25.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_level_deserializes_lowercase() {
        let level: DegreeLevel = serde_json::from_str("\"phd\"").unwrap();
        assert_eq!(level, DegreeLevel::Phd);
    }

    #[test]
    fn test_program_record_defaults_for_missing_fields() {
        let json = r#"{"name": "State University", "programName": "MS in Computer Science"}"#;
        let program: ProgramRecord = serde_json::from_str(json).unwrap();

        assert_eq!(program.avg_gpa, 0.0);
        assert_eq!(program.min_gpa, 0.0);
        assert_eq!(program.acceptance_rate, 0.0);
        assert!(program.research_areas.is_empty());
        assert!(program.faculty.is_empty());
        assert!(program.ranking.is_none());
        assert!(program.concerns.is_empty());
    }

    #[test]
    fn test_profile_camel_case_round_trip() {
        let json = r#"{
            "gpa": 3.9,
            "researchInterests": ["Machine Learning"],
            "degreeLevel": "phd",
            "fieldOfStudy": "Computer Science"
        }"#;
        let profile: ApplicantProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.gpa, 3.9);
        assert_eq!(profile.research_interests, vec!["Machine Learning"]);
        assert_eq!(profile.degree_level, DegreeLevel::Phd);

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["fieldOfStudy"], "Computer Science");
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.gpa, 25.0);
        assert_eq!(weights.research, 40.0);
        assert_eq!(weights.faculty, 25.0);
    }
}
