//! Oppmatch - Opportunity matching engine
//!
//! This library scores how well candidate opportunities (jobs, internships,
//! hackathons) fit a user profile. It combines semantic embedding similarity
//! with explicit skill and interest overlap into a single weighted score,
//! attaches a human-readable reasoning string, and returns a ranked,
//! thresholded result list.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{
    categorize_matches, generate_reasoning, MatchError, MatchTier, MatchingEngine,
    RecommendationBreakdown, TierThresholds,
};
pub use models::{
    MatchParams, MatchResult, MatchStatistics, Opportunity, OpportunityCategory, ScoringWeights,
    UserProfile,
};
pub use services::{CohereClient, EmbeddingError, EmbeddingProvider};
