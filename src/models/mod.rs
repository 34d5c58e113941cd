// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ApplicantProfile, DegreeLevel, FacultyMember, MatchCategory, MatchResult, ProgramRecord, ScoringWeights};
pub use requests::{RankProfile, RankRequest};
pub use responses::{ErrorResponse, HealthResponse, ProgramMatch, RankResponse};
