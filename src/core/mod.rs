// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod overlap;
pub mod scoring;

pub use distance::haversine_distance;
pub use filters::{is_eligible, exceeds_distance};
pub use matcher::{Matcher, rank_opportunities, DEFAULT_MAX_DISTANCE_KM};
pub use overlap::{skill_match, schedule_match};
pub use scoring::{distance_score, composite_score};
