//! Volunteer Match - ranks volunteering opportunities for a volunteer
//!
//! The core is a pure scoring engine combining skill overlap, schedule overlap
//! and geographic proximity into a single weighted compatibility score. The
//! remaining modules expose it as a stateless HTTP service.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Matcher, rank_opportunities, haversine_distance, skill_match, schedule_match};
pub use crate::models::{VolunteerProfile, Opportunity, OpportunityStatus, MatchResult, ScoringWeights};
