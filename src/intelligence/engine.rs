use std::time::Instant;

use uuid::Uuid;

use crate::config::EngineConfig;

use super::display::select_visible;
use super::explain::{explain_or_fallback, ExplanationGenerator, TemplateExplainer};
use super::helpers::round4;
use super::messages::{MessageTemplates, CLOSE_CALL_LABEL};
use super::normalize::SymptomInput;
use super::reference::ReferenceData;
use super::scoring::{strategy_for, ScoredCondition, ScoringStrategy};
use super::signals::{collect_signals, default_extractors, SignalExtractor, Signals};
use super::types::{
    AssessmentReport, AssessmentRequest, ConditionResult, EngineError, LikelihoodEngine,
    ScoringMode,
};

/// Namespace for assessment fingerprints.
const ASSESSMENT_NAMESPACE: Uuid = Uuid::from_u128(0x6d1a_95c2_3f0e_4b7a_9c41_d2e8_07b5_a3f6);

/// Default implementation of the likelihood engine.
/// Runs every signal extractor, scores with the configured strategy, then
/// normalizes and cuts the ranked list for display.
pub struct DefaultLikelihoodEngine {
    pub(crate) reference: ReferenceData,
    extractors: Vec<Box<dyn SignalExtractor>>,
    strategy: Box<dyn ScoringStrategy>,
    fallback: Option<Box<dyn ScoringStrategy>>,
    explainer: Box<dyn ExplanationGenerator>,
}

impl DefaultLikelihoodEngine {
    /// Build from configuration, loading reference overrides if a directory is set.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let reference = match &config.reference_dir {
            Some(dir) => ReferenceData::load(dir)?,
            None => ReferenceData::builtin()?,
        };
        Ok(Self::with_reference(reference, &config))
    }

    pub fn with_reference(reference: ReferenceData, config: &EngineConfig) -> Self {
        let fallback = (config.mode == ScoringMode::MultiFactor && config.fallback_to_simple)
            .then(|| strategy_for(ScoringMode::Simple));
        Self {
            reference,
            extractors: default_extractors(),
            strategy: strategy_for(config.mode),
            fallback,
            explainer: Box::new(TemplateExplainer),
        }
    }

    pub fn with_explainer(mut self, explainer: impl ExplanationGenerator + 'static) -> Self {
        self.explainer = Box::new(explainer);
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// JSON request in, pretty JSON report out.
    pub fn assess_json(&self, request_json: &str) -> Result<String, EngineError> {
        let request: AssessmentRequest = serde_json::from_str(request_json)
            .map_err(|e| EngineError::Serialization(e.to_string()))?;
        let report = self.assess(&request);
        serde_json::to_string_pretty(&report).map_err(|e| EngineError::Serialization(e.to_string()))
    }

    /// Score with the primary strategy, dropping to the fallback when nothing
    /// survives the primary retention threshold.
    fn score(
        &self,
        input: &SymptomInput,
        signals: &Signals,
    ) -> (ScoringMode, Vec<ScoredCondition>) {
        let scored = self.strategy.score(input, &self.reference, signals);
        if !scored.is_empty() || input.is_empty() {
            return (self.strategy.mode(), scored);
        }
        match &self.fallback {
            Some(fallback) => {
                tracing::info!(
                    from = self.strategy.mode().as_str(),
                    to = fallback.mode().as_str(),
                    symptoms = input.len(),
                    "No condition retained, re-scoring with fallback strategy"
                );
                (fallback.mode(), fallback.score(input, &self.reference, signals))
            }
            None => (self.strategy.mode(), scored),
        }
    }

    fn build_condition(&self, scored: &ScoredCondition, likelihood: f64) -> ConditionResult {
        let disease = &self.reference.diseases()[scored.index];
        ConditionResult {
            condition: disease.name.clone(),
            likelihood,
            display_text: MessageTemplates::likelihood(likelihood),
            description: disease.description.clone(),
            external_reference_term: disease.external_reference_term.clone(),
            clusters: disease.clusters.clone(),
            explanation: explain_or_fallback(
                self.explainer.as_ref(),
                &disease.name,
                &scored.matched_symptoms,
                likelihood,
            ),
            matched_symptoms: scored.matched_symptoms.clone(),
            raw_score: round4(scored.score),
            factors: scored.factors,
        }
    }
}

impl LikelihoodEngine for DefaultLikelihoodEngine {
    fn assess(&self, request: &AssessmentRequest) -> AssessmentReport {
        let start = Instant::now();

        let input = SymptomInput::from_request(request);
        let assessment_id =
            Uuid::new_v5(&ASSESSMENT_NAMESPACE, input.fingerprint_source().as_bytes());
        let signals = collect_signals(&self.extractors, &input, &self.reference);
        let (mode, scored) = self.score(&input, &signals);

        let pairs: Vec<(usize, f64)> = scored.iter().map(|s| (s.index, s.score)).collect();
        let selection = select_visible(&pairs);

        let conditions: Vec<ConditionResult> = selection
            .ranked
            .iter()
            .filter_map(|entry| {
                scored
                    .iter()
                    .find(|s| s.index == entry.position)
                    .map(|s| self.build_condition(s, entry.likelihood))
            })
            .collect();

        let red_flags: Vec<_> = signals.red_flags.into_iter().filter(|f| f.detected).collect();
        let patterns: Vec<_> = signals.patterns.into_iter().filter(|p| p.detected).collect();

        tracing::info!(
            assessment_id = %assessment_id,
            mode = mode.as_str(),
            symptoms = input.len(),
            retained = scored.len(),
            shown = conditions.len(),
            red_flags = red_flags.len(),
            urgent = red_flags.iter().any(|f| f.urgent),
            processing_ms = start.elapsed().as_millis() as u64,
            "Assessment complete"
        );

        AssessmentReport {
            assessment_id,
            mode,
            conditions,
            dominant_clusters: signals.clusters.dominant,
            system_involvement: signals.systems,
            red_flags,
            red_flag_multipliers: signals.red_flag_multipliers,
            patterns,
            time_course: signals.time_course,
            close_call_label: selection.close_call.then(|| CLOSE_CALL_LABEL.to_string()),
        }
    }

    fn mode(&self) -> ScoringMode {
        self.strategy.mode()
    }
}
