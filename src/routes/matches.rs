use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{is_eligible, Matcher};
use crate::error::ApiError;
use crate::models::{HealthResponse, Opportunity, RankMatchesRequest, RankMatchesResponse, RankQuery, RankedOpportunity};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matcher: Matcher, matching: MatchingSettings) -> Self {
        Self { matcher, matching }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank opportunities endpoint
///
/// POST /api/v1/matches/rank?maxDistance=50&limit=10
///
/// Request body:
/// ```json
/// {
///   "volunteer": { "skills": ["python"], "availability": ["monday"], "latitude": -23.5, "longitude": -46.6 },
///   "opportunities": [ { "id": "uuid", "requiredSkills": [], "schedule": [], "latitude": -23.5, "longitude": -46.6 } ]
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    query: web::Query<RankQuery>,
    req: web::Json<RankMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = query.validate() {
        tracing::warn!("Rejected rank query: {}", errors);
        return Err(errors.into());
    }
    if let Err(errors) = req.validate() {
        tracing::warn!("Rejected rank request: {}", errors);
        return Err(errors.into());
    }

    let max_distance_km = query.max_distance_km(state.matching.max_distance_km);
    if !max_distance_km.is_finite() {
        return Err(ApiError::InvalidQuery("maxDistance must be a finite number".to_string()));
    }
    let limit = query.limit(state.matching.default_limit, state.matching.max_limit);

    let RankMatchesRequest { volunteer, opportunities } = req.into_inner();
    let total_candidates = opportunities.len();

    let candidates: Vec<Opportunity> = opportunities.into_iter().filter(is_eligible).collect();
    tracing::debug!(
        "Dropped {} inactive opportunities",
        total_candidates - candidates.len()
    );

    let volunteer_id = volunteer
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    tracing::info!(
        "Ranking {} candidates for volunteer {}, max distance: {}km, limit: {}",
        candidates.len(),
        volunteer_id,
        max_distance_km,
        limit
    );

    let mut ranked = state
        .matcher
        .rank_opportunities(&volunteer, &candidates, max_distance_km);
    ranked.truncate(limit);

    let response = RankMatchesResponse {
        matches: ranked.into_iter().map(RankedOpportunity::from).collect(),
        total_candidates,
        eligible_candidates: candidates.len(),
        max_distance_km,
    };

    tracing::info!(
        "Returning {} matches for volunteer {} (from {} candidates)",
        response.matches.len(),
        volunteer_id,
        total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}
