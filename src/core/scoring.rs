use crate::models::ScoringWeights;

/// Calculate distance score (0-100)
///
/// Falls linearly from 100 at zero distance to 0 at `max_distance_km` and
/// stays at 0 beyond it. Zero distance always scores 100, including when the
/// threshold itself is 0. NaN propagates.
#[inline]
pub fn distance_score(distance_km: f64, max_distance_km: f64) -> f64 {
    if distance_km == 0.0 {
        return 100.0;
    }

    let score = 100.0 - (distance_km / max_distance_km) * 100.0;
    // Comparison rather than f64::max so a NaN score is not turned into 0
    if score < 0.0 { 0.0 } else { score }
}

/// Calculate the composite match score (0-100), rounded to an integer
///
/// score = round(
///     skill_match * 0.5 +        # Share of required skills the volunteer has
///     schedule_match * 0.3 +     # Share of schedule slots the volunteer covers
///     distance_score * 0.2       # Closer = higher
/// )
pub fn composite_score(
    skill_match: f64,
    schedule_match: f64,
    distance_score: f64,
    weights: &ScoringWeights,
) -> f64 {
    round_percentage(
        skill_match * weights.skill
            + schedule_match * weights.schedule
            + distance_score * weights.distance,
    )
}

/// Round a percentage to the nearest integer
#[inline]
pub fn round_percentage(value: f64) -> f64 {
    value.round()
}

/// Round a distance to one decimal place
#[inline]
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 10.0).round() / 10.0
}
