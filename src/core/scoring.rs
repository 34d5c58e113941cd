use crate::models::{ApplicantProfile, FacultyMember, ProgramRecord, ScoringWeights};

/// Points added for each applicant-interest / program-area overlap
const RESEARCH_HIT_POINTS: f64 = 10.0;

/// Points added for each applicant-interest / faculty-keyword overlap
const FACULTY_HIT_POINTS: f64 = 8.0;

/// GPA ratio cap: an outlier GPA earns at most a 20% bonus over parity
const GPA_RATIO_CAP: f64 = 1.2;

/// Composite ceiling; the engine never reports 100
pub const SCORE_CEILING: f64 = 98.0;

/// Raw research total above which the stronger probability boost applies
pub const STRONG_RESEARCH_THRESHOLD: f64 = 20.0;

/// Displayed faculty match percentage is capped here
const FACULTY_PERCENT_CEILING: f64 = 98.0;

/// Per-pair sub-scores and the facts the rest of the pipeline needs
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Composite match score, rounded, 0-98
    pub total: u8,
    pub gpa_sub_score: f64,
    /// Research sub-score clamped to its weight
    pub research_sub_score: f64,
    /// Unclamped research total; feeds the admission-probability boost
    pub research_raw_score: f64,
    pub faculty_sub_score: f64,
    /// Distinct program areas that matched, in first-matched order
    pub matched_areas: Vec<String>,
    /// One entry per faculty member with at least one keyword hit
    pub faculty_highlights: Vec<String>,
}

/// Calculate a composite match score (0-98) for one profile/program pair
///
/// Scoring formula:
/// score = (
///     gpa_fit * 25 +          # min(gpa / avgGpa, 1.2), neutral if avgGpa missing
///     research_hits * 10 +    # substring overlap, clamped to 40
///     faculty_hits * 8        # per-faculty keyword overlap, clamped to 25
/// )
///
/// Every missing or empty input degrades to a zero contribution; this
/// function never fails for a well-formed pair.
pub fn calculate_match_score(
    profile: &ApplicantProfile,
    program: &ProgramRecord,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let gpa_sub_score = gpa_fit_score(profile.gpa, program.avg_gpa, weights.gpa);

    let (research_sub_score, research_raw_score, matched_areas) = research_alignment(
        &profile.research_interests,
        &program.research_areas,
        weights.research,
    );

    let (faculty_sub_score, faculty_highlights) =
        faculty_alignment(&profile.research_interests, &program.faculty, weights.faculty);

    let total = (gpa_sub_score + research_sub_score + faculty_sub_score)
        .min(SCORE_CEILING)
        .round() as u8;

    ScoreBreakdown {
        total,
        gpa_sub_score,
        research_sub_score,
        research_raw_score,
        faculty_sub_score,
        matched_areas,
        faculty_highlights,
    }
}

/// GPA fit sub-score, 0 to weight * 1.2
///
/// Neutral (zero) when the program has no average-GPA baseline.
#[inline]
fn gpa_fit_score(gpa: f64, avg_gpa: f64, weight: f64) -> f64 {
    if avg_gpa <= 0.0 {
        return 0.0;
    }

    let fit = (gpa / avg_gpa).min(GPA_RATIO_CAP);
    (fit * weight).max(0.0)
}

/// Research-alignment sub-score, clamped to its weight
///
/// Every (interest, area) pair whose strings contain each other
/// case-insensitively adds a fixed increment. Returns the clamped
/// sub-score, the unclamped running total, and the distinct areas
/// that matched in the order they first matched.
fn research_alignment(
    interests: &[String],
    areas: &[String],
    weight: f64,
) -> (f64, f64, Vec<String>) {
    let mut raw = 0.0;
    let mut matched_areas = Vec::new();

    for area in areas {
        let mut area_hit = false;
        for interest in interests {
            if keyword_overlap(interest, area) {
                raw += RESEARCH_HIT_POINTS;
                area_hit = true;
            }
        }
        if area_hit {
            matched_areas.push(area.clone());
        }
    }

    (raw.min(weight), raw, matched_areas)
}

/// Faculty-alignment sub-score, clamped to its weight
///
/// Each faculty member accumulates points per (interest, keyword) hit.
/// A member with any hit yields one highlight entry carrying a displayed
/// "percent match" - a presentation heuristic, not a probability.
fn faculty_alignment(
    interests: &[String],
    faculty: &[FacultyMember],
    weight: f64,
) -> (f64, Vec<String>) {
    let mut total = 0.0;
    let mut highlights = Vec::new();

    for member in faculty {
        let mut accumulator = 0.0;
        for interest in interests {
            for keyword in &member.match_keywords {
                if keyword_overlap(interest, keyword) {
                    accumulator += FACULTY_HIT_POINTS;
                }
            }
        }

        if accumulator > 0.0 {
            total += accumulator;
            highlights.push(format!(
                "{} ({}) - {}% research match",
                member.name,
                member.specialty,
                faculty_match_percent(accumulator)
            ));
        }
    }

    (total.min(weight), highlights)
}

/// Map a raw keyword-hit accumulator onto a displayed percentage
#[inline]
fn faculty_match_percent(accumulator: f64) -> u8 {
    (accumulator * 1.2 + 75.0)
        .round()
        .min(FACULTY_PERCENT_CEILING) as u8
}

/// Case-insensitive substring containment in either direction
///
/// Tolerates phrasing differences ("Machine Learning" vs "ML research")
/// at the cost of possible false positives. Blank strings never match:
/// an empty needle is contained in everything.
#[inline]
pub fn keyword_overlap(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }

    a.contains(&b) || b.contains(&a)
}
