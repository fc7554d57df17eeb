use crate::core::{overlap, projection, reasoning, scoring};
use crate::models::{
    MatchParams, MatchResult, MatchStatistics, Opportunity, OpportunityCategory, ScoringWeights,
    UserProfile,
};
use crate::services::{cosine_similarity, EmbeddingError, EmbeddingProvider};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};
use validator::Validate;

/// Errors surfaced to callers of the matching engine
///
/// Embedding failures are handled per-candidate inside the batch loop and
/// never reach the caller; only boundary violations do.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Embedding provider unavailable: {0}")]
    EmbeddingUnavailable(#[from] EmbeddingError),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid match parameters: {0}")]
    InvalidParams(String),
}

/// Default number of candidates scored concurrently against the provider
const DEFAULT_CONCURRENCY: usize = 8;
/// Per-candidate ceiling on the embedding round trip
const DEFAULT_EMBED_TIMEOUT: Duration = Duration::from_secs(30);
/// Reasoning attached to fail-open results
const ERROR_REASONING: &str = "Error occurred during matching process.";

/// Engine for matching opportunities with user profiles using embeddings
///
/// Stateless per call: the only shared state is the injected embedding
/// provider, which is read-only configuration. Scoring a batch is
/// embarrassingly parallel, so candidates are scored through a bounded
/// concurrent stream to respect provider rate limits.
pub struct MatchingEngine {
    provider: Arc<dyn EmbeddingProvider>,
    weights: ScoringWeights,
    concurrency: usize,
    embed_timeout: Duration,
}

impl MatchingEngine {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_weights(provider, ScoringWeights::default())
    }

    pub fn with_weights(provider: Arc<dyn EmbeddingProvider>, weights: ScoringWeights) -> Self {
        Self {
            provider,
            weights,
            concurrency: DEFAULT_CONCURRENCY,
            embed_timeout: DEFAULT_EMBED_TIMEOUT,
        }
    }

    /// Build an engine from loaded configuration
    pub fn from_settings(
        provider: Arc<dyn EmbeddingProvider>,
        settings: &crate::config::Settings,
    ) -> Self {
        Self {
            provider,
            weights: settings.scoring.weights.clone().into(),
            concurrency: settings.matching.concurrency.max(1),
            embed_timeout: Duration::from_secs(settings.matching.embed_timeout_secs),
        }
    }

    /// Override how many candidates are scored concurrently
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Override the per-candidate embedding timeout
    pub fn embed_timeout(mut self, timeout: Duration) -> Self {
        self.embed_timeout = timeout;
        self
    }

    /// Score a single opportunity against a profile
    ///
    /// Fail-open: an embedding failure or timeout degrades to a zero-score
    /// result carrying an error reasoning, so one bad provider call never
    /// aborts the batch it belongs to. The failure is logged here.
    pub async fn match_opportunity(
        &self,
        opportunity: &Opportunity,
        profile: &UserProfile,
    ) -> MatchResult {
        let scored = tokio::time::timeout(
            self.embed_timeout,
            self.score_candidate(opportunity, profile),
        )
        .await
        .unwrap_or(Err(EmbeddingError::Timeout));

        match scored {
            Ok(result) => result,
            Err(e) => {
                error!(
                    "Error matching opportunity {} with profile {}: {}",
                    opportunity.id, profile.user_id, e
                );
                MatchResult {
                    opportunity: opportunity.clone(),
                    user_profile: profile.clone(),
                    similarity_score: 0.0,
                    matched_skills: vec![],
                    matched_interests: vec![],
                    reasoning: ERROR_REASONING.to_string(),
                }
            }
        }
    }

    /// Find matching opportunities for a user profile
    ///
    /// Scores every candidate, drops results below `params.min_score`, sorts
    /// descending by score (stable, so ties keep input order), and truncates
    /// to `params.max_results`. An empty candidate list yields an empty
    /// result list, not an error.
    pub async fn find_matches(
        &self,
        opportunities: &[Opportunity],
        profile: &UserProfile,
        params: &MatchParams,
    ) -> Result<Vec<MatchResult>, MatchError> {
        params
            .validate()
            .map_err(|e| MatchError::InvalidParams(e.to_string()))?;
        if profile.user_id.trim().is_empty() {
            return Err(MatchError::InvalidProfile(
                "userId must not be empty".to_string(),
            ));
        }

        info!(
            "Finding matches for user {} from {} opportunities",
            profile.user_id,
            opportunities.len()
        );

        let mut matches: Vec<MatchResult> = stream::iter(opportunities)
            .map(|opportunity| self.match_opportunity(opportunity, profile))
            .buffered(self.concurrency)
            .filter(|result| {
                futures::future::ready(result.similarity_score >= params.min_score)
            })
            .collect()
            .await;

        // Stable sort keeps tied results in input order for reproducibility
        matches.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(params.max_results);

        info!(
            "Found {} matches above threshold {}",
            matches.len(),
            params.min_score
        );
        Ok(matches)
    }

    /// Find matches restricted to one opportunity category
    pub async fn find_matches_by_type(
        &self,
        opportunities: &[Opportunity],
        profile: &UserProfile,
        category: OpportunityCategory,
        params: &MatchParams,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let filtered: Vec<Opportunity> = opportunities
            .iter()
            .filter(|opportunity| opportunity.category == category)
            .cloned()
            .collect();

        info!("Filtering {} {} opportunities", filtered.len(), category);

        self.find_matches(&filtered, profile, params).await
    }

    /// Aggregate statistics over a result list
    ///
    /// Zeroed defaults for an empty input; no division by zero.
    pub fn get_match_statistics(&self, matches: &[MatchResult]) -> MatchStatistics {
        if matches.is_empty() {
            return MatchStatistics::default();
        }

        let scores: Vec<f64> = matches.iter().map(|m| m.similarity_score).collect();
        let total = scores.len();

        let mut by_type = std::collections::HashMap::new();
        let mut by_source = std::collections::HashMap::new();
        for result in matches {
            *by_type
                .entry(result.opportunity.category.as_str().to_string())
                .or_insert(0) += 1;
            *by_source
                .entry(result.opportunity.source.clone())
                .or_insert(0) += 1;
        }

        MatchStatistics {
            total_matches: total,
            average_score: scores.iter().sum::<f64>() / total as f64,
            highest_score: scores.iter().cloned().fold(f64::MIN, f64::max),
            lowest_score: scores.iter().cloned().fold(f64::MAX, f64::min),
            by_type,
            by_source,
        }
    }

    async fn score_candidate(
        &self,
        opportunity: &Opportunity,
        profile: &UserProfile,
    ) -> Result<MatchResult, EmbeddingError> {
        let opportunity_text = projection::render_opportunity(opportunity);
        let profile_text = projection::render_profile(profile);

        let texts = [opportunity_text.clone(), profile_text];
        let embeddings = self.provider.embed(&texts).await?;
        if embeddings.len() != 2 {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected 2 embeddings, got {}",
                embeddings.len()
            )));
        }

        let semantic =
            scoring::clamp_similarity(cosine_similarity(&embeddings[0], &embeddings[1]));

        let (matched_skills, skill_ratio) =
            overlap::skill_overlap(&profile.skills, &opportunity.skills_required);
        let (matched_interests, interest_ratio) =
            overlap::interest_overlap(&profile.interests, &opportunity_text);

        let score =
            scoring::weighted_score(semantic, skill_ratio, interest_ratio, &self.weights);

        let mut result = MatchResult {
            opportunity: opportunity.clone(),
            user_profile: profile.clone(),
            similarity_score: score,
            matched_skills,
            matched_interests,
            reasoning: String::new(),
        };
        result.reasoning = reasoning::generate_reasoning(&result);

        Ok(result)
    }
}
