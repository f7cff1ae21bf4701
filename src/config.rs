use std::path::PathBuf;

use crate::intelligence::ScoringMode;

/// Application-level constants
pub const APP_NAME: &str = "Diagnova";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_SCORING_MODE: &str = "DIAGNOVA_SCORING_MODE";
pub const ENV_FALLBACK_SIMPLE: &str = "DIAGNOVA_FALLBACK_SIMPLE";
pub const ENV_REFERENCE_DIR: &str = "DIAGNOVA_REFERENCE_DIR";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "diagnova=info"
}

/// Engine settings. Defaults: multi-factor scoring, simple fallback on, built-in tables.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub mode: ScoringMode,
    /// Re-score with the simple strategy when multi-factor retains nothing.
    pub fallback_to_simple: bool,
    /// Directory with JSON reference overrides.
    pub reference_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::MultiFactor,
            fallback_to_simple: true,
            reference_dir: None,
        }
    }
}

impl EngineConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unrecognized values keep the default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SCORING_MODE) {
            match ScoringMode::parse(&raw) {
                Some(mode) => config.mode = mode,
                None => tracing::warn!(
                    value = %raw,
                    "Unknown {ENV_SCORING_MODE}, keeping {}",
                    config.mode.as_str()
                ),
            }
        }

        if let Some(raw) = lookup(ENV_FALLBACK_SIMPLE) {
            match raw.trim().to_lowercase().as_str() {
                "0" | "false" | "no" | "off" => config.fallback_to_simple = false,
                "1" | "true" | "yes" | "on" => config.fallback_to_simple = true,
                _ => tracing::warn!(value = %raw, "Unknown {ENV_FALLBACK_SIMPLE}, keeping default"),
            }
        }

        config.reference_dir = lookup(ENV_REFERENCE_DIR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        config
    }
}
