use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Ranker;
use crate::models::{
    ApplicantProfile, ErrorResponse, HealthResponse, ProgramMatch, RankRequest, RankResponse,
};
use crate::services::{CacheKey, CacheManager, CatalogStore};

/// Hard cap on requested result counts
const MAX_LIMIT: usize = 100;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub cache: Arc<CacheManager>,
    pub ranker: Ranker,
}

/// Configure all ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/rank", web::post().to(rank_programs))
        .route("/programs", web::get().to(list_programs));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank the catalog against an applicant profile
///
/// POST /api/v1/rank
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "gpa": 3.9,
///     "researchInterests": ["Machine Learning"],
///     "degreeLevel": "phd",
///     "fieldOfStudy": "Computer Science"
///   },
///   "limit": 10
/// }
/// ```
async fn rank_programs(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    // Cap limit to prevent oversized responses
    let limit = (req.limit as usize).min(MAX_LIMIT);
    let profile: ApplicantProfile = req.profile.into();

    tracing::info!(
        "Ranking {} programs for field '{}', limit {}",
        state.catalog.len(),
        profile.field_of_study,
        limit
    );

    // Rankings are deterministic over the loaded catalog, so cached
    // responses stay valid until the entry expires
    let cache_key = CacheKey::rank(&profile, limit);
    if let Ok(cached) = state.cache.get::<RankResponse>(&cache_key).await {
        tracing::debug!("Serving ranking from cache");
        return HttpResponse::Ok().json(cached);
    }

    let results = state.ranker.rank(&profile, state.catalog.programs(), limit);

    let response = RankResponse {
        matches: results.into_iter().map(ProgramMatch::from).collect(),
        total_programs: state.catalog.len(),
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache ranking: {}", e);
    }

    tracing::info!(
        "Returning {} matches (from {} programs)",
        response.matches.len(),
        response.total_programs
    );

    HttpResponse::Ok().json(response)
}

/// List the loaded program catalog
///
/// GET /api/v1/programs
///
/// Returns the raw catalog for client bootstrap and debugging.
async fn list_programs(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "count": state.catalog.len(),
        "programs": state.catalog.programs(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response_shape() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
