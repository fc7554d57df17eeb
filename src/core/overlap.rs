/// Calculate skill overlap between a user's skills and an opportunity's
/// required skills
///
/// Matching is deliberately loose: a required skill counts as matched when it
/// is a substring of any user skill or any user skill is a substring of it,
/// so "React" matches "React.js" and "ReactJS". The matched list keeps the
/// lower-cased required-skill form and is not deduplicated when the same
/// requirement appears twice.
///
/// An empty requirement list is a perfect match (ratio 1.0), not a zero:
/// absence of a constraint is not absence of fit.
pub fn skill_overlap(user_skills: &[String], required_skills: &[String]) -> (Vec<String>, f64) {
    if required_skills.is_empty() {
        return (vec![], 1.0);
    }

    let user_skills_lower: Vec<String> = user_skills
        .iter()
        .map(|skill| skill.to_lowercase().trim().to_string())
        .collect();

    let mut matched = Vec::new();
    for required in required_skills {
        let required_lower = required.to_lowercase().trim().to_string();
        let hit = user_skills_lower
            .iter()
            .any(|user| required_lower.contains(user.as_str()) || user.contains(&required_lower));
        if hit {
            matched.push(required_lower);
        }
    }

    let ratio = matched.len() as f64 / required_skills.len() as f64;
    (matched, ratio)
}

/// Calculate interest overlap between a user's interests and the projected
/// opportunity text
///
/// Asymmetric to the skill case on purpose: no declared interests means no
/// interest signal (ratio 0.0), since interests are a soft signal rather than
/// a requirement. The matched list keeps the original-case interest strings.
pub fn interest_overlap(user_interests: &[String], opportunity_text: &str) -> (Vec<String>, f64) {
    if user_interests.is_empty() {
        return (vec![], 0.0);
    }

    let text_lower = opportunity_text.to_lowercase();

    let matched: Vec<String> = user_interests
        .iter()
        .filter(|interest| {
            let interest_lower = interest.to_lowercase().trim().to_string();
            text_lower.contains(&interest_lower)
        })
        .cloned()
        .collect();

    let ratio = matched.len() as f64 / user_interests.len() as f64;
    (matched, ratio)
}
