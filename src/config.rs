use crate::core::TierThresholds;
use crate::models::{MatchParams, ScoringWeights};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub cohere: CohereSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub personalization: PersonalizationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CohereSettings {
    #[serde(default = "default_cohere_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_cohere_model")]
    pub model: String,
}

fn default_cohere_endpoint() -> String {
    crate::services::embedding::COHERE_API_URL.to_string()
}

fn default_cohere_model() -> String {
    crate::services::embedding::COHERE_EMBED_MODEL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_embed_timeout_secs")]
    pub embed_timeout_secs: u64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_results: default_max_results(),
            concurrency: default_concurrency(),
            embed_timeout_secs: default_embed_timeout_secs(),
        }
    }
}

impl From<&MatchingSettings> for MatchParams {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            min_score: settings.min_score,
            max_results: settings.max_results,
        }
    }
}

fn default_min_score() -> f64 { 0.3 }
fn default_max_results() -> usize { 15 }
fn default_concurrency() -> usize { 8 }
fn default_embed_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_semantic_weight")]
    pub semantic: f64,
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            semantic: default_semantic_weight(),
            skills: default_skills_weight(),
            interests: default_interests_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            semantic: config.semantic,
            skills: config.skills,
            interests: config.interests,
        }
    }
}

fn default_semantic_weight() -> f64 { 0.6 }
fn default_skills_weight() -> f64 { 0.3 }
fn default_interests_weight() -> f64 { 0.1 }

#[derive(Debug, Clone, Deserialize)]
pub struct PersonalizationSettings {
    #[serde(default = "default_best_threshold")]
    pub best_threshold: f64,
    #[serde(default = "default_good_threshold")]
    pub good_threshold: f64,
    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: f64,
}

impl Default for PersonalizationSettings {
    fn default() -> Self {
        Self {
            best_threshold: default_best_threshold(),
            good_threshold: default_good_threshold(),
            suggestion_threshold: default_suggestion_threshold(),
        }
    }
}

impl From<PersonalizationSettings> for TierThresholds {
    fn from(settings: PersonalizationSettings) -> Self {
        Self {
            best: settings.best_threshold,
            good: settings.good_threshold,
            suggestion: settings.suggestion_threshold,
        }
    }
}

fn default_best_threshold() -> f64 { 0.7 }
fn default_good_threshold() -> f64 { 0.4 }
fn default_suggestion_threshold() -> f64 { 0.2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with OPPMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with OPPMATCH__)
            // e.g., OPPMATCH__MATCHING__MIN_SCORE -> matching.min_score
            .add_source(
                Environment::with_prefix("OPPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("OPPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply conventional environment overrides
///
/// COHERE_API_KEY is checked before OPPMATCH__COHERE__API_KEY so the key can
/// be supplied the way the provider documents it.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("COHERE_API_KEY")
        .or_else(|_| env::var("OPPMATCH__COHERE__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("cohere.api_key", api_key)?;
    }

    builder.build()
}
