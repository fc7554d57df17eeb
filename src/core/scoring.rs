use crate::models::ScoringWeights;

/// Clamp a raw cosine similarity into the [0, 1] scoring range
///
/// Cosine similarity lands in [-1, 1], but negative similarity is not a
/// meaningful "dissimilarity bonus" for ranking, so it floors at zero.
#[inline]
pub fn clamp_similarity(similarity: f64) -> f64 {
    similarity.clamp(0.0, 1.0)
}

/// Combine the three scoring signals into one weighted score (0-1)
///
/// Scoring formula:
/// score = (
///     semantic * 0.6 +        # embedding similarity of the two projections
///     skill_ratio * 0.3 +     # fraction of required skills covered
///     interest_ratio * 0.1    # fraction of interests found in the text
/// )
#[inline]
pub fn weighted_score(
    semantic: f64,
    skill_ratio: f64,
    interest_ratio: f64,
    weights: &ScoringWeights,
) -> f64 {
    semantic * weights.semantic + skill_ratio * weights.skills + interest_ratio * weights.interests
}
