use crate::models::{MatchResult, Opportunity, ScoringWeights, VolunteerProfile};
use crate::core::{
    distance::haversine_distance,
    filters::exceeds_distance,
    overlap::{schedule_match, skill_match},
    scoring::{composite_score, distance_score, round_km, round_percentage},
};

/// Distance threshold used when the caller does not supply one
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Main matching orchestrator - scores and ranks opportunities for a volunteer
///
/// # Pipeline Stages
/// 1. Distance to each opportunity (only when the volunteer has a location)
/// 2. Distance exclusion
/// 3. Skill and schedule overlap
/// 4. Weighted scoring and ranking
///
/// The matcher holds no state between calls and can be shared freely across
/// request handlers.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank candidate opportunities for a volunteer
    ///
    /// # Arguments
    /// * `volunteer` - The volunteer being matched
    /// * `opportunities` - Active opportunities, in discovery order
    /// * `max_distance_km` - Opportunities further than this are dropped
    ///
    /// # Returns
    /// Every retained opportunity, highest score first. Equal scores keep
    /// their input order. No limit is applied here.
    pub fn rank_opportunities<'a>(
        &self,
        volunteer: &VolunteerProfile,
        opportunities: &'a [Opportunity],
        max_distance_km: f64,
    ) -> Vec<MatchResult<'a>> {
        let origin = volunteer.location();

        let mut results: Vec<MatchResult<'a>> = opportunities
            .iter()
            .filter_map(|opportunity| {
                let distance_km = match origin {
                    Some(point) => haversine_distance(
                        point.latitude,
                        point.longitude,
                        opportunity.latitude,
                        opportunity.longitude,
                    ),
                    None => 0.0,
                };

                if exceeds_distance(origin, distance_km, max_distance_km) {
                    return None;
                }

                let skill = skill_match(&volunteer.skills, &opportunity.required_skills);
                let schedule = schedule_match(&volunteer.availability, &opportunity.schedule);
                let proximity = distance_score(distance_km, max_distance_km);

                Some(MatchResult {
                    opportunity,
                    score: composite_score(skill, schedule, proximity, &self.weights),
                    skill_match: round_percentage(skill),
                    schedule_match: round_percentage(schedule),
                    distance_km: round_km(distance_km),
                })
            })
            .collect();

        // Stable sort: ties keep discovery order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank opportunities with the standard weights
pub fn rank_opportunities<'a>(
    volunteer: &VolunteerProfile,
    opportunities: &'a [Opportunity],
    max_distance_km: f64,
) -> Vec<MatchResult<'a>> {
    Matcher::with_default_weights().rank_opportunities(volunteer, opportunities, max_distance_km)
}
