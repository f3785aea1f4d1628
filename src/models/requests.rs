use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Opportunity, VolunteerProfile};

/// Request to rank opportunities for a volunteer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    #[validate(nested)]
    pub volunteer: VolunteerProfile,
    #[serde(default)]
    #[validate(nested)]
    pub opportunities: Vec<Opportunity>,
}

/// Query string accepted by the ranking endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RankQuery {
    #[serde(alias = "max_distance", rename = "maxDistance")]
    #[validate(range(min = 0.0))]
    pub max_distance: Option<f64>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

impl RankQuery {
    /// Resolve the distance threshold, falling back to the configured default
    pub fn max_distance_km(&self, default_km: f64) -> f64 {
        self.max_distance.unwrap_or(default_km)
    }

    /// Resolve the result limit, capped at `max_limit`
    pub fn limit(&self, default_limit: u16, max_limit: u16) -> usize {
        self.limit.unwrap_or(default_limit).min(max_limit) as usize
    }
}
