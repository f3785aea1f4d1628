//! Token overlap between what a volunteer offers and what an opportunity asks for.
//!
//! Both measures count every required entry individually: a skill listed twice
//! on the opportunity contributes twice to the denominator, and twice to the
//! numerator when the volunteer has it.

/// Lowercase and trim a free-text token for comparison
#[inline]
fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Percentage (0-100) of the opportunity's required skills the volunteer has
///
/// No required skills means no constraint (100). A volunteer without skills
/// scores 0 against any non-empty requirement.
pub fn skill_match(volunteer_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 100.0;
    }
    if volunteer_skills.is_empty() {
        return 0.0;
    }

    let offered: Vec<String> = volunteer_skills.iter().map(|s| normalize(s)).collect();
    let matched = required_skills
        .iter()
        .map(|s| normalize(s))
        .filter(|skill| offered.contains(skill))
        .count();

    matched as f64 / required_skills.len() as f64 * 100.0
}

/// Percentage (0-100) of the opportunity's schedule slots the volunteer is available for
///
/// An empty schedule imposes no constraint (100). A volunteer with no
/// availability scores 0 against any non-empty schedule.
pub fn schedule_match(availability: &[String], schedule: &[String]) -> f64 {
    if schedule.is_empty() {
        return 100.0;
    }
    if availability.is_empty() {
        return 0.0;
    }

    let available: Vec<String> = availability.iter().map(|s| normalize(s)).collect();
    let matched = schedule
        .iter()
        .map(|s| normalize(s))
        .filter(|slot| available.contains(slot))
        .count();

    matched as f64 / schedule.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_requirements_is_full_match() {
        assert_eq!(skill_match(&tokens(&["python"]), &[]), 100.0);
        assert_eq!(skill_match(&[], &[]), 100.0);
        assert_eq!(schedule_match(&[], &[]), 100.0);
    }

    #[test]
    fn test_empty_volunteer_side_is_zero() {
        assert_eq!(skill_match(&[], &tokens(&["python"])), 0.0);
        assert_eq!(schedule_match(&[], &tokens(&["monday"])), 0.0);
    }

    #[test]
    fn test_normalization_and_duplicates() {
        let volunteer = tokens(&["Python", " design "]);
        assert_eq!(skill_match(&volunteer, &tokens(&["python", "python"])), 100.0);
        assert_eq!(skill_match(&volunteer, &tokens(&["DESIGN ", "cooking"])), 50.0);
    }

    #[test]
    fn test_duplicate_requirement_counts_twice() {
        // 2 of 3 required entries matched, not 1 of 2 distinct skills
        let volunteer = tokens(&["python"]);
        let required = tokens(&["python", "python", "rust"]);
        let score = skill_match(&volunteer, &required);
        assert!((score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_partial_matching() {
        assert_eq!(skill_match(&tokens(&["python3"]), &tokens(&["python"])), 0.0);
        assert_eq!(schedule_match(&tokens(&["mon"]), &tokens(&["monday"])), 0.0);
    }

    #[test]
    fn test_schedule_partial_overlap() {
        let availability = tokens(&["Monday"]);
        let schedule = tokens(&["monday", "wednesday"]);
        assert_eq!(schedule_match(&availability, &schedule), 50.0);
    }

    #[test]
    fn test_bounds() {
        let volunteer = tokens(&["a", "b", "c"]);
        let cases = [tokens(&["a"]), tokens(&["x", "y"]), tokens(&["a", "b", "z", "a"])];
        for required in &cases {
            let skill = skill_match(&volunteer, required);
            let schedule = schedule_match(&volunteer, required);
            assert!((0.0..=100.0).contains(&skill));
            assert!((0.0..=100.0).contains(&schedule));
        }
    }
}
