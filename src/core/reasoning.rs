use crate::models::MatchResult;

/// Score band above which a match is called excellent
pub const EXCELLENT_SCORE_THRESHOLD: f64 = 0.8;
/// Score band above which a match is called good
pub const GOOD_SCORE_THRESHOLD: f64 = 0.6;
/// Score band above which a match is called somewhat aligned
pub const SOME_ALIGNMENT_THRESHOLD: f64 = 0.4;

/// Generate the human-readable explanation for a scored match
///
/// Pure function over a completed (pre-reasoning) result. Clauses fire
/// independently in a fixed order and are joined by single spaces; the score
/// band contributes at most one clause, highest threshold first. When nothing
/// fires at all, a generic fallback sentence is returned.
pub fn generate_reasoning(result: &MatchResult) -> String {
    let opportunity = &result.opportunity;
    let profile = &result.user_profile;
    let mut parts: Vec<String> = Vec::new();

    if !result.matched_skills.is_empty() {
        parts.push(format!(
            "Your skills in {} align well with this opportunity.",
            result.matched_skills.join(", ")
        ));
    }

    if !result.matched_interests.is_empty() {
        parts.push(format!(
            "This opportunity matches your interests in {}.",
            result.matched_interests.join(", ")
        ));
    }

    if let (Some(opp_level), Some(profile_level)) =
        (&opportunity.experience_level, &profile.experience_level)
    {
        if profile_level.to_lowercase().contains(&opp_level.to_lowercase()) {
            parts.push("The experience level requirement matches your background.".to_string());
        }
    }

    if let Some(location) = &opportunity.location {
        let location_lower = location.to_lowercase();
        if profile
            .preferred_locations
            .iter()
            .any(|preferred| location_lower.contains(&preferred.to_lowercase()))
        {
            parts.push("The location matches your preferences.".to_string());
        }
    }

    if opportunity.remote && profile.remote_preference {
        parts.push("This is a remote opportunity, which matches your preference.".to_string());
    }

    if result.similarity_score > EXCELLENT_SCORE_THRESHOLD {
        parts.push("This is an excellent match based on your profile.".to_string());
    } else if result.similarity_score > GOOD_SCORE_THRESHOLD {
        parts.push("This is a good match for your profile.".to_string());
    } else if result.similarity_score > SOME_ALIGNMENT_THRESHOLD {
        parts.push("This opportunity has some alignment with your profile.".to_string());
    }

    if parts.is_empty() {
        "This opportunity may be of interest based on your profile.".to_string()
    } else {
        parts.join(" ")
    }
}
