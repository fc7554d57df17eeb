use crate::models::MatchResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Score thresholds separating recommendation tiers
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TierThresholds {
    /// At or above this score a match is a best match
    pub best: f64,
    /// At or above this score a match is a good match
    pub good: f64,
    /// At or above this score a match is still worth suggesting
    pub suggestion: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            best: 0.7,
            good: 0.4,
            suggestion: 0.2,
        }
    }
}

/// Recommendation tier a scored match falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Best,
    Good,
    Suggestion,
}

impl MatchTier {
    /// Tier for a score, or None when the score falls below every threshold
    pub fn for_score(score: f64, thresholds: &TierThresholds) -> Option<Self> {
        if score >= thresholds.best {
            Some(MatchTier::Best)
        } else if score >= thresholds.good {
            Some(MatchTier::Good)
        } else if score >= thresholds.suggestion {
            Some(MatchTier::Suggestion)
        } else {
            None
        }
    }
}

/// Matches partitioned into recommendation tiers
///
/// Matches below the suggestion threshold are dropped entirely.
#[derive(Debug, Clone, Default)]
pub struct RecommendationBreakdown {
    pub best_matches: Vec<MatchResult>,
    pub good_matches: Vec<MatchResult>,
    pub other_suggestions: Vec<MatchResult>,
}

impl RecommendationBreakdown {
    pub fn total(&self) -> usize {
        self.best_matches.len() + self.good_matches.len() + self.other_suggestions.len()
    }
}

/// Partition scored matches into recommendation tiers
///
/// Pure over its inputs; relative order within each tier follows the input
/// order, so tiering a ranked list yields ranked tiers.
pub fn categorize_matches(
    matches: &[MatchResult],
    thresholds: &TierThresholds,
) -> RecommendationBreakdown {
    let mut breakdown = RecommendationBreakdown::default();

    for result in matches {
        match MatchTier::for_score(result.similarity_score, thresholds) {
            Some(MatchTier::Best) => breakdown.best_matches.push(result.clone()),
            Some(MatchTier::Good) => breakdown.good_matches.push(result.clone()),
            Some(MatchTier::Suggestion) => breakdown.other_suggestions.push(result.clone()),
            None => {}
        }
    }

    breakdown
}

/// Most frequently matched skills across a result list, descending by count
///
/// Counts the lower-cased matched-skill entries as they appear in results,
/// then keeps the top `limit`. Ties order by skill name so the output is
/// deterministic.
pub fn top_matched_skills(matches: &[MatchResult], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for result in matches {
        for skill in &result.matched_skills {
            *counts.entry(skill.clone()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Opportunity, OpportunityCategory, UserProfile};

    fn create_result(id: &str, score: f64, matched_skills: Vec<&str>) -> MatchResult {
        MatchResult {
            opportunity: Opportunity {
                id: id.to_string(),
                title: "Role".to_string(),
                organization: "Acme".to_string(),
                description: "Work".to_string(),
                location: None,
                category: OpportunityCategory::Job,
                url: "https://example.com".to_string(),
                posted_date: None,
                deadline: None,
                skills_required: vec![],
                compensation_range: None,
                experience_level: None,
                remote: false,
                source: "wellfound".to_string(),
                raw_data: serde_json::Value::Null,
            },
            user_profile: UserProfile {
                user_id: "user-1".to_string(),
                email: "user@example.com".to_string(),
                skills: vec![],
                interests: vec![],
                experience_level: None,
                preferred_locations: vec![],
                remote_preference: false,
                resume_text: None,
                created_at: None,
                updated_at: None,
            },
            similarity_score: score,
            matched_skills: matched_skills.iter().map(|s| s.to_string()).collect(),
            matched_interests: vec![],
            reasoning: String::new(),
        }
    }

    #[test]
    fn test_tier_boundaries_inclusive() {
        let thresholds = TierThresholds::default();

        assert_eq!(
            MatchTier::for_score(0.7, &thresholds),
            Some(MatchTier::Best)
        );
        assert_eq!(
            MatchTier::for_score(0.4, &thresholds),
            Some(MatchTier::Good)
        );
        assert_eq!(
            MatchTier::for_score(0.2, &thresholds),
            Some(MatchTier::Suggestion)
        );
        assert_eq!(MatchTier::for_score(0.19, &thresholds), None);
    }

    #[test]
    fn test_categorize_partitions() {
        let matches = vec![
            create_result("1", 0.9, vec![]),
            create_result("2", 0.5, vec![]),
            create_result("3", 0.25, vec![]),
            create_result("4", 0.05, vec![]),
        ];

        let breakdown = categorize_matches(&matches, &TierThresholds::default());
        assert_eq!(breakdown.best_matches.len(), 1);
        assert_eq!(breakdown.good_matches.len(), 1);
        assert_eq!(breakdown.other_suggestions.len(), 1);
        assert_eq!(breakdown.total(), 3);
    }

    #[test]
    fn test_categorize_keeps_input_order_within_tier() {
        let matches = vec![
            create_result("a", 0.8, vec![]),
            create_result("b", 0.75, vec![]),
            create_result("c", 0.95, vec![]),
        ];

        let breakdown = categorize_matches(&matches, &TierThresholds::default());
        let ids: Vec<&str> = breakdown
            .best_matches
            .iter()
            .map(|m| m.opportunity.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_top_matched_skills_ranked() {
        let matches = vec![
            create_result("1", 0.9, vec!["rust", "sql"]),
            create_result("2", 0.8, vec!["rust"]),
            create_result("3", 0.7, vec!["python"]),
        ];

        let top = top_matched_skills(&matches, 2);
        assert_eq!(top, vec![("rust".to_string(), 2), ("python".to_string(), 1)]);
    }

    #[test]
    fn test_top_matched_skills_empty() {
        assert!(top_matched_skills(&[], 5).is_empty());
    }
}
