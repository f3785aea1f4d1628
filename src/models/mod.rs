// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GeoPoint, VolunteerProfile, Opportunity, OpportunityStatus, MatchResult, ScoringWeights};
pub use requests::{RankMatchesRequest, RankQuery};
pub use responses::{RankedOpportunity, RankMatchesResponse, ScoreBreakdown, HealthResponse, ErrorResponse};
