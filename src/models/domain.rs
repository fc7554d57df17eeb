use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Kind of opportunity being matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityCategory {
    Job,
    Internship,
    Hackathon,
}

impl OpportunityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityCategory::Job => "job",
            OpportunityCategory::Internship => "internship",
            OpportunityCategory::Hackathon => "hackathon",
        }
    }
}

impl std::fmt::Display for OpportunityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job, internship, or hackathon listing fetched from an external source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    pub category: OpportunityCategory,
    pub url: String,
    #[serde(rename = "postedDate", default)]
    pub posted_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "skillsRequired", default)]
    pub skills_required: Vec<String>,
    #[serde(rename = "compensationRange", default)]
    pub compensation_range: Option<String>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub remote: bool,
    pub source: String,
    #[serde(rename = "rawData", default)]
    pub raw_data: serde_json::Value,
}

/// User profile with skills, interests, and matching preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<String>,
    #[serde(rename = "preferredLocations", default)]
    pub preferred_locations: Vec<String>,
    #[serde(rename = "remotePreference", default = "default_true")]
    pub remote_preference: bool,
    #[serde(rename = "resumeText", default)]
    pub resume_text: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_true() -> bool {
    true
}

/// Scored result of matching one opportunity against one profile
///
/// Transient: built fresh on every matching call and never mutated after
/// construction. Persisting or discarding it is the caller's decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub opportunity: Opportunity,
    #[serde(rename = "userProfile")]
    pub user_profile: UserProfile,
    #[serde(rename = "similarityScore")]
    pub similarity_score: f64,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "matchedInterests")]
    pub matched_interests: Vec<String>,
    pub reasoning: String,
}

/// Caller-supplied tuning for a matching call
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchParams {
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(rename = "minScore", default = "default_min_score")]
    pub min_score: f64,
    #[serde(rename = "maxResults", default = "default_max_results")]
    pub max_results: usize,
}

fn default_min_score() -> f64 {
    0.3
}

fn default_max_results() -> usize {
    15
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_results: default_max_results(),
        }
    }
}

/// Weights for combining the scoring signals
///
/// Tunable policy constants, not values derived from data.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub semantic: f64,
    pub skills: f64,
    pub interests: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            semantic: 0.6,
            skills: 0.3,
            interests: 0.1,
        }
    }
}

/// Aggregate statistics over a batch of match results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub total_matches: usize,
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub by_type: HashMap<String, usize>,
    pub by_source: HashMap<String, usize>,
}
