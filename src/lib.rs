//! GradFit Algo - program matching and ranking service for the GradFit app
//!
//! This library provides the core matching engine used by the GradFit
//! application: it scores a catalog of graduate programs against an
//! applicant's profile, classifies each program into a risk tier, and
//! returns a ranked top-N list with human-readable justifications.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify::classify, classify::estimate_admission_probability, Ranker};
pub use crate::models::{
    ApplicantProfile, DegreeLevel, FacultyMember, MatchCategory, MatchResult, ProgramRecord,
    RankRequest, RankResponse, ScoringWeights,
};
