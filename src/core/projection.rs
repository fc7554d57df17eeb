use crate::models::{Opportunity, UserProfile};

/// Hard cap on resume text fed into the embedding input, in characters.
/// Keeps embedding cost bounded for arbitrarily long resumes.
pub const RESUME_CHAR_CAP: usize = 500;

/// Separator between projected fields
const FIELD_SEPARATOR: &str = " | ";

/// Render an opportunity into the canonical text used for embedding
///
/// Pure and deterministic: field order and separators are fixed so identical
/// opportunities always produce identical embedding input.
pub fn render_opportunity(opportunity: &Opportunity) -> String {
    let mut parts = vec![
        format!("Title: {}", opportunity.title),
        format!("Company: {}", opportunity.organization),
        format!("Description: {}", opportunity.description),
        format!("Type: {}", opportunity.category.as_str()),
    ];

    if let Some(location) = &opportunity.location {
        parts.push(format!("Location: {}", location));
    }

    if !opportunity.skills_required.is_empty() {
        parts.push(format!("Skills: {}", opportunity.skills_required.join(", ")));
    }

    if let Some(experience) = &opportunity.experience_level {
        parts.push(format!("Experience: {}", experience));
    }

    if let Some(compensation) = &opportunity.compensation_range {
        parts.push(format!("Salary: {}", compensation));
    }

    parts.join(FIELD_SEPARATOR)
}

/// Render a user profile into the canonical text used for embedding
///
/// Resume text is truncated to [`RESUME_CHAR_CAP`] characters. The cap is a
/// character count, not a byte offset, so multi-byte text never splits.
pub fn render_profile(profile: &UserProfile) -> String {
    let mut parts = Vec::new();

    if !profile.skills.is_empty() {
        parts.push(format!("Skills: {}", profile.skills.join(", ")));
    }

    if !profile.interests.is_empty() {
        parts.push(format!("Interests: {}", profile.interests.join(", ")));
    }

    if let Some(experience) = &profile.experience_level {
        parts.push(format!("Experience Level: {}", experience));
    }

    if !profile.preferred_locations.is_empty() {
        parts.push(format!(
            "Preferred Locations: {}",
            profile.preferred_locations.join(", ")
        ));
    }

    if let Some(resume) = &profile.resume_text {
        let truncated: String = resume.chars().take(RESUME_CHAR_CAP).collect();
        parts.push(format!("Resume: {}", truncated));
    }

    parts.join(FIELD_SEPARATOR)
}
