use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use diagnova::config::{self, EngineConfig};
use diagnova::intelligence::ScoringMode;
use diagnova::{AssessmentRequest, DefaultLikelihoodEngine, EngineError, LikelihoodEngine};

#[derive(Debug, Parser)]
#[command(
    name = "diagnova",
    version,
    about = "Rank candidate conditions from reported symptoms",
    long_about = "diagnova scores reported symptoms and follow-up answers against a local\n\
        reference of conditions and prints a JSON report of the most likely ones.\n\n\
        Settings come from DIAGNOVA_SCORING_MODE, DIAGNOVA_FALLBACK_SIMPLE and\n\
        DIAGNOVA_REFERENCE_DIR. Flags override the environment.\n\n\
        EXAMPLES:\n\
        \n  diagnova \"fatigue, weight gain\" \"worse in winter\"\n\
        \n  diagnova --mode simple \"fever, sore throat\"\n\
        \n  echo '{\"symptoms\": \"night sweats, fever\"}' | diagnova"
)]
struct Cli {
    /// Comma-separated symptoms (reads a JSON request from stdin if not provided)
    #[arg(value_name = "SYMPTOMS")]
    symptoms: Option<String>,

    /// Free-text answers to follow-up questions
    #[arg(value_name = "ANSWER", requires = "symptoms")]
    answers: Vec<String>,

    /// Scoring strategy (simple, multi_factor)
    #[arg(long, value_name = "MODE", value_parser = parse_mode)]
    mode: Option<ScoringMode>,

    /// Do not re-score with the simple strategy when multi-factor keeps nothing
    #[arg(long)]
    no_fallback: bool,

    /// Directory with JSON reference overrides
    #[arg(long, value_name = "DIR")]
    reference_dir: Option<PathBuf>,

    /// Print the report on a single line
    #[arg(long)]
    compact: bool,
}

fn parse_mode(raw: &str) -> Result<ScoringMode, String> {
    ScoringMode::parse(raw).ok_or_else(|| format!("unknown scoring mode '{raw}'"))
}

impl Cli {
    /// Environment settings with command-line overrides applied.
    fn engine_config(&self, mut config: EngineConfig) -> EngineConfig {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.no_fallback {
            config.fallback_to_simple = false;
        }
        if let Some(dir) = &self.reference_dir {
            config.reference_dir = Some(dir.clone());
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    diagnova::init_tracing();
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    match run(&cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Assessment failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, EngineError> {
    let engine = DefaultLikelihoodEngine::new(cli.engine_config(EngineConfig::from_env()))?;

    let report = match &cli.symptoms {
        Some(symptoms) => {
            let request = AssessmentRequest::new(symptoms.as_str()).with_answers(&cli.answers);
            engine.assess(&request)
        }
        None => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .map_err(|e| EngineError::Serialization(e.to_string()))?;
            let request: AssessmentRequest = serde_json::from_str(&json)
                .map_err(|e| EngineError::Serialization(e.to_string()))?;
            engine.assess(&request)
        }
    };

    let rendered = if cli.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    };
    rendered.map_err(|e| EngineError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_symptoms_and_answers() {
        let cli = Cli::try_parse_from(["diagnova", "fatigue, weight gain", "worse in winter", "no"])
            .unwrap();
        assert_eq!(cli.symptoms.as_deref(), Some("fatigue, weight gain"));
        assert_eq!(cli.answers, vec!["worse in winter", "no"]);
        assert!(!cli.compact);
    }

    #[test]
    fn no_arguments_reads_stdin() {
        let cli = Cli::try_parse_from(["diagnova"]).unwrap();
        assert!(cli.symptoms.is_none());
        assert!(cli.answers.is_empty());
    }

    #[test]
    fn flags_override_environment() {
        let cli = Cli::try_parse_from([
            "diagnova",
            "--mode",
            "simple",
            "--no-fallback",
            "--reference-dir",
            "/opt/diagnova/reference",
            "fever",
        ])
        .unwrap();
        let config = cli.engine_config(EngineConfig::default());
        assert_eq!(config.mode, ScoringMode::Simple);
        assert!(!config.fallback_to_simple);
        assert_eq!(config.reference_dir, Some(PathBuf::from("/opt/diagnova/reference")));
    }

    #[test]
    fn absent_flags_keep_environment() {
        let env = EngineConfig {
            mode: ScoringMode::Simple,
            fallback_to_simple: false,
            reference_dir: Some(PathBuf::from("/srv/reference")),
        };
        let cli = Cli::try_parse_from(["diagnova", "fever"]).unwrap();
        assert_eq!(cli.engine_config(env.clone()), env);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = Cli::try_parse_from(["diagnova", "--mode", "quantum", "fever"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
