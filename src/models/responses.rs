use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, Opportunity};

/// Per-dimension scores shown alongside a ranked opportunity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub schedule_match: f64,
    /// Distance in km, one decimal
    pub distance: f64,
}

/// One entry of the ranking response
#[derive(Debug, Clone, Serialize)]
pub struct RankedOpportunity<'a> {
    pub opportunity: &'a Opportunity,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl<'a> From<MatchResult<'a>> for RankedOpportunity<'a> {
    fn from(result: MatchResult<'a>) -> Self {
        Self {
            opportunity: result.opportunity,
            score: result.score,
            breakdown: ScoreBreakdown {
                skill_match: result.skill_match,
                schedule_match: result.schedule_match,
                distance: result.distance_km,
            },
        }
    }
}

/// Response for the ranking endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankMatchesResponse<'a> {
    pub matches: Vec<RankedOpportunity<'a>>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
    pub max_distance_km: f64,
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
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
