use crate::core::scoring::STRONG_RESEARCH_THRESHOLD;
use crate::models::{ApplicantProfile, MatchCategory, ProgramRecord};

/// Admission probability is capped here; the model never claims near-certainty
pub const PROBABILITY_CEILING: f64 = 85.0;

/// Probabilities below this classify as reach
const REACH_BELOW: f64 = 25.0;

/// Probabilities at or above this classify as safety
const SAFETY_AT: f64 = 60.0;

/// Boost applied when the raw research total clears the strong threshold
const STRONG_RESEARCH_BOOST: f64 = 2.5;
const BASE_BOOST: f64 = 1.5;

/// Estimate a coarse admission probability (0-85) for one pair
///
/// probability = (gpa / minGpa) * acceptanceRate * 100 * boost
///
/// A missing minimum-GPA baseline becomes a neutral multiplier of 1.0
/// rather than a division by zero; the result is always clamped before
/// classification, so this never fails.
#[inline]
pub fn estimate_admission_probability(
    profile: &ApplicantProfile,
    program: &ProgramRecord,
    research_raw_score: f64,
) -> f64 {
    let gpa_ratio = if program.min_gpa > 0.0 {
        profile.gpa / program.min_gpa
    } else {
        1.0
    };

    let boost = if research_raw_score > STRONG_RESEARCH_THRESHOLD {
        STRONG_RESEARCH_BOOST
    } else {
        BASE_BOOST
    };

    (gpa_ratio * program.acceptance_rate * 100.0 * boost).clamp(0.0, PROBABILITY_CEILING)
}

/// Map a probability onto a risk tier
///
/// Boundaries are strict on the lower comparison: exactly 25 is target,
/// exactly 60 is safety.
#[inline]
pub fn classify(probability: f64) -> MatchCategory {
    if probability < REACH_BELOW {
        MatchCategory::Reach
    } else if probability < SAFETY_AT {
        MatchCategory::Target
    } else {
        MatchCategory::Safety
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DegreeLevel;

    fn create_profile(gpa: f64) -> ApplicantProfile {
        ApplicantProfile {
            gpa,
            research_interests: vec![],
            degree_level: DegreeLevel::Masters,
            field_of_study: "Biology".to_string(),
        }
    }

    fn create_program(min_gpa: f64, acceptance_rate: f64) -> ProgramRecord {
        ProgramRecord {
            name: "Test University".to_string(),
            program_name: "MS in Biology".to_string(),
            location: "Testville".to_string(),
            ranking: None,
            acceptance_rate,
            min_gpa,
            avg_gpa: 3.5,
            research_areas: vec![],
            faculty: vec![],
            tuition: String::new(),
            deadline: String::new(),
            website_url: None,
            concerns: vec![],
        }
    }

    #[test]
    fn test_probability_formula() {
        let profile = create_profile(3.5);
        let program = create_program(3.0, 0.20);

        // (3.5 / 3.0) * 0.20 * 100 * 1.5 = 35.0
        let p = estimate_admission_probability(&profile, &program, 0.0);
        assert!((p - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_probability_capped_at_85() {
        let profile = create_profile(4.0);
        let program = create_program(2.0, 0.90);

        let p = estimate_admission_probability(&profile, &program, 30.0);
        assert_eq!(p, PROBABILITY_CEILING);
    }

    #[test]
    fn test_strong_research_boost_needs_three_hits() {
        let profile = create_profile(3.0);
        let program = create_program(3.0, 0.10);

        // Two overlap pairs (raw 20) keep the base boost
        let base = estimate_admission_probability(&profile, &program, 20.0);
        assert!((base - 15.0).abs() < 1e-9);

        // Three pairs (raw 30) switch to the stronger boost
        let boosted = estimate_admission_probability(&profile, &program, 30.0);
        assert!((boosted - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_min_gpa_is_neutral() {
        let profile = create_profile(3.9);
        let program = create_program(0.0, 0.30);

        // Neutral ratio: 1.0 * 0.30 * 100 * 1.5 = 45.0
        let p = estimate_admission_probability(&profile, &program, 0.0);
        assert!((p - 45.0).abs() < 1e-9);
        assert!(p.is_finite());
    }

    #[test]
    fn test_higher_acceptance_rate_raises_probability() {
        let profile = create_profile(3.5);
        let open = create_program(3.0, 0.50);
        let selective = create_program(3.0, 0.05);

        let p_open = estimate_admission_probability(&profile, &open, 0.0);
        let p_selective = estimate_admission_probability(&profile, &selective, 0.0);

        assert!(p_open > p_selective);
        assert_eq!(classify(p_open), MatchCategory::Safety);
        assert_eq!(classify(p_selective), MatchCategory::Reach);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify(0.0), MatchCategory::Reach);
        assert_eq!(classify(24.999), MatchCategory::Reach);
        assert_eq!(classify(25.0), MatchCategory::Target);
        assert_eq!(classify(59.999), MatchCategory::Target);
        assert_eq!(classify(60.0), MatchCategory::Safety);
        assert_eq!(classify(85.0), MatchCategory::Safety);
    }
}
