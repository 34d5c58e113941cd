use crate::core::{
    classify::{classify, estimate_admission_probability},
    explain::build_explanation,
    scoring::calculate_match_score,
};
use crate::models::{ApplicantProfile, MatchResult, ProgramRecord, ScoringWeights};

/// At most this many faculty highlights survive into a result
const MAX_FACULTY_HIGHLIGHTS: usize = 3;

/// Main ranking orchestrator
///
/// # Pipeline stages
/// 1. Composite scoring per program
/// 2. Admission-probability estimate and tier classification
/// 3. Explanation generation
/// 4. Stable sort by score and truncation to the requested limit
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank a catalog of programs against an applicant profile
    ///
    /// Pure and deterministic: identical inputs produce identical output,
    /// including string ordering. Returns `min(limit, catalog.len())`
    /// results sorted by descending match score; ties keep catalog
    /// iteration order. A zero limit or an empty catalog yields an empty
    /// list rather than an error.
    pub fn rank<'a>(
        &self,
        profile: &ApplicantProfile,
        catalog: &'a [ProgramRecord],
        limit: usize,
    ) -> Vec<MatchResult<'a>> {
        if limit == 0 || catalog.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult<'a>> = catalog
            .iter()
            .map(|program| self.score_program(profile, program))
            .collect();

        // sort_by is stable, so equal scores preserve catalog order
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results.truncate(limit);

        results
    }

    /// Score a single program; every stage degrades instead of failing
    pub fn score_program<'a>(
        &self,
        profile: &ApplicantProfile,
        program: &'a ProgramRecord,
    ) -> MatchResult<'a> {
        let breakdown = calculate_match_score(profile, program, &self.weights);

        let admission_probability =
            estimate_admission_probability(profile, program, breakdown.research_raw_score);
        let category = classify(admission_probability);

        let explanation = build_explanation(profile, program, &breakdown.matched_areas);

        let mut faculty_highlights = breakdown.faculty_highlights;
        faculty_highlights.truncate(MAX_FACULTY_HIGHLIGHTS);

        MatchResult {
            program,
            match_score: breakdown.total,
            category,
            admission_probability,
            why_recommended: explanation.why_recommended,
            concerns: explanation.concerns,
            faculty_highlights,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
