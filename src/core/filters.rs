use crate::models::{GeoPoint, Opportunity, OpportunityStatus};

/// Check if an opportunity can be offered to volunteers at all
///
/// Only active opportunities are candidates; closed and completed ones are
/// dropped before ranking.
#[inline]
pub fn is_eligible(opportunity: &Opportunity) -> bool {
    opportunity.status == OpportunityStatus::Active
}

/// Check if a candidate falls outside the volunteer's distance threshold
///
/// A volunteer without a location is never filtered by distance, whatever the
/// opportunity's actual position.
#[inline]
pub fn exceeds_distance(
    volunteer_location: Option<GeoPoint>,
    distance_km: f64,
    max_distance_km: f64,
) -> bool {
    match volunteer_location {
        Some(_) => distance_km > max_distance_km,
        None => false,
    }
}
