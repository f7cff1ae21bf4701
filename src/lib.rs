pub mod config;
pub mod intelligence;

pub use config::EngineConfig;
pub use intelligence::{
    AssessmentReport, AssessmentRequest, DefaultLikelihoodEngine, EngineError, LikelihoodEngine,
};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// reserved for the JSON report.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
