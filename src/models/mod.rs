// Model exports
pub mod domain;

pub use domain::{
    MatchParams, MatchResult, MatchStatistics, Opportunity, OpportunityCategory, ScoringWeights,
    UserProfile,
};
