use crate::core::scoring::keyword_overlap;
use crate::models::{ApplicantProfile, ProgramRecord};

/// Justification lists are truncated to these lengths, preserving
/// generation order: earlier, more specific reasons win.
const MAX_RECOMMENDATIONS: usize = 3;
const MAX_CONCERNS: usize = 2;

/// Acceptance rates below this earn a competitiveness concern
const COMPETITIVE_RATE_CUTOFF: f64 = 0.05;

/// Human-readable justifications for one ranked program
#[derive(Debug, Clone, Default)]
pub struct Explanation {
    pub why_recommended: Vec<String>,
    pub concerns: Vec<String>,
}

/// Build recommendation and concern strings from already-computed facts
///
/// Order of generation: GPA comparison, matched research areas (first-matched
/// order), field-of-study overlap; concerns: GPA shortfall, competitiveness,
/// then the program's own static caveats.
pub fn build_explanation(
    profile: &ApplicantProfile,
    program: &ProgramRecord,
    matched_areas: &[String],
) -> Explanation {
    let mut why_recommended = Vec::new();
    let mut concerns = Vec::new();

    // GPA comparison; each baseline only speaks when it is present
    if program.avg_gpa > 0.0 && profile.gpa >= program.avg_gpa {
        why_recommended.push("GPA exceeds program average".to_string());
    } else if program.min_gpa > 0.0 && profile.gpa >= program.min_gpa {
        why_recommended.push("GPA meets minimum requirement".to_string());
    } else if program.min_gpa > 0.0 {
        concerns.push("GPA below typical range".to_string());
    }

    for area in matched_areas {
        why_recommended.push(format!("Strong research alignment in {}", area));
    }

    if keyword_overlap(&program.program_name, &profile.field_of_study) {
        why_recommended.push("Program aligns with your field of study".to_string());
    }

    if program.acceptance_rate > 0.0 && program.acceptance_rate < COMPETITIVE_RATE_CUTOFF {
        concerns.push(format!(
            "Extremely competitive ({:.1}% acceptance rate)",
            program.acceptance_rate * 100.0
        ));
    }

    // Institution-level caveats come after the computed ones
    concerns.extend(program.concerns.iter().cloned());

    why_recommended.truncate(MAX_RECOMMENDATIONS);
    concerns.truncate(MAX_CONCERNS);

    Explanation {
        why_recommended,
        concerns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DegreeLevel;

    fn create_profile(gpa: f64, field: &str) -> ApplicantProfile {
        ApplicantProfile {
            gpa,
            research_interests: vec![],
            degree_level: DegreeLevel::Masters,
            field_of_study: field.to_string(),
        }
    }

    fn create_program(min_gpa: f64, avg_gpa: f64, acceptance_rate: f64) -> ProgramRecord {
        ProgramRecord {
            name: "Test University".to_string(),
            program_name: "MS in Data Science".to_string(),
            location: "Testville".to_string(),
            ranking: None,
            acceptance_rate,
            min_gpa,
            avg_gpa,
            research_areas: vec![],
            faculty: vec![],
            tuition: String::new(),
            deadline: String::new(),
            website_url: None,
            concerns: vec![],
        }
    }

    #[test]
    fn test_gpa_exceeds_average() {
        let explanation =
            build_explanation(&create_profile(3.9, "History"), &create_program(3.0, 3.5, 0.3), &[]);
        assert_eq!(explanation.why_recommended, vec!["GPA exceeds program average"]);
        assert!(explanation.concerns.is_empty());
    }

    #[test]
    fn test_gpa_meets_minimum_only() {
        let explanation =
            build_explanation(&create_profile(3.2, "History"), &create_program(3.0, 3.5, 0.3), &[]);
        assert_eq!(explanation.why_recommended, vec!["GPA meets minimum requirement"]);
    }

    #[test]
    fn test_gpa_below_minimum_is_a_concern() {
        let explanation =
            build_explanation(&create_profile(2.8, "History"), &create_program(3.0, 3.5, 0.3), &[]);
        assert!(explanation.why_recommended.is_empty());
        assert_eq!(explanation.concerns, vec!["GPA below typical range"]);
    }

    #[test]
    fn test_missing_baselines_say_nothing_about_gpa() {
        let explanation =
            build_explanation(&create_profile(3.9, "History"), &create_program(0.0, 0.0, 0.3), &[]);
        assert!(explanation.why_recommended.is_empty());
        assert!(explanation.concerns.is_empty());
    }

    #[test]
    fn test_matched_areas_in_first_matched_order() {
        let matched = vec!["Machine Learning".to_string(), "Robotics".to_string()];
        let explanation = build_explanation(
            &create_profile(2.0, "History"),
            &create_program(0.0, 0.0, 0.3),
            &matched,
        );

        assert_eq!(
            explanation.why_recommended,
            vec![
                "Strong research alignment in Machine Learning",
                "Strong research alignment in Robotics",
            ]
        );
    }

    #[test]
    fn test_field_of_study_line_comes_after_specific_areas() {
        let matched = vec!["Databases".to_string()];
        let explanation = build_explanation(
            &create_profile(3.9, "Data Science"),
            &create_program(3.0, 3.5, 0.3),
            &matched,
        );

        assert_eq!(
            explanation.why_recommended,
            vec![
                "GPA exceeds program average",
                "Strong research alignment in Databases",
                "Program aligns with your field of study",
            ]
        );
    }

    #[test]
    fn test_recommendations_truncate_to_three() {
        let matched: Vec<String> = (0..5).map(|i| format!("Area {}", i)).collect();
        let explanation = build_explanation(
            &create_profile(3.9, "History"),
            &create_program(3.0, 3.5, 0.3),
            &matched,
        );

        // GPA line first, then the two earliest areas
        assert_eq!(explanation.why_recommended.len(), 3);
        assert_eq!(explanation.why_recommended[0], "GPA exceeds program average");
        assert_eq!(explanation.why_recommended[1], "Strong research alignment in Area 0");
    }

    #[test]
    fn test_competitive_concern_formatting() {
        let explanation =
            build_explanation(&create_profile(3.9, "History"), &create_program(3.0, 3.5, 0.038), &[]);
        assert!(explanation
            .concerns
            .contains(&"Extremely competitive (3.8% acceptance rate)".to_string()));
    }

    #[test]
    fn test_computed_concerns_precede_static_and_truncate_to_two() {
        let mut program = create_program(3.5, 3.8, 0.03);
        program.concerns = vec![
            "Limited funding for masters students".to_string(),
            "No spring admission".to_string(),
        ];

        let explanation = build_explanation(&create_profile(3.0, "History"), &program, &[]);

        assert_eq!(
            explanation.concerns,
            vec!["GPA below typical range", "Extremely competitive (3.0% acceptance rate)"]
        );
    }
}
