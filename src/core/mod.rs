// Core algorithm exports
pub mod engine;
pub mod overlap;
pub mod personalization;
pub mod projection;
pub mod reasoning;
pub mod scoring;

pub use engine::{MatchError, MatchingEngine};
pub use overlap::{interest_overlap, skill_overlap};
pub use personalization::{
    categorize_matches, top_matched_skills, MatchTier, RecommendationBreakdown, TierThresholds,
};
pub use projection::{render_opportunity, render_profile};
pub use reasoning::generate_reasoning;
pub use scoring::{clamp_similarity, weighted_score};
