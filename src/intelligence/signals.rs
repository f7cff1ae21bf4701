//! Signal extraction.
//!
//! Each concern (relevance, clusters, body systems, red flags, patterns, time
//! course) is an independent `SignalExtractor`. Extractors only read the
//! normalized input and the reference data, and write their own slot of
//! `Signals`. Order does not matter.

use std::cmp::Ordering;

use super::detection::{detect_patterns, detect_red_flags};
use super::normalize::SymptomInput;
use super::reference::ReferenceData;
use super::time_course::infer_time_course;
use super::types::{
    BodySystem, ClusterTag, PatternMatch, RedFlag, RedFlagMultipliers, SystemInvolvement,
    TimeCourse, TimePattern,
};

/// Share of the total cluster weight the dominant clusters must cover.
const DOMINANT_SHARE: f64 = 0.6;

// ─── Signal records ──────────────────────────────────────────────────────────

/// Relevance of the reported symptoms to one condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionRelevance {
    /// `Σ relevance × symptom_score` over matched symptoms.
    pub raw_score: f64,
    /// Reported symptoms with relevance > 0, original casing.
    pub matched_symptoms: Vec<String>,
}

impl ConditionRelevance {
    pub fn matched(&self) -> usize {
        self.matched_symptoms.len()
    }
}

/// Cluster weights, indexed by `ClusterTag` ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterProfile {
    pub scores: [f64; ClusterTag::ALL.len()],
    pub total: f64,
    pub dominant: Vec<ClusterTag>,
}

impl Default for ClusterProfile {
    fn default() -> Self {
        Self {
            scores: [0.0; ClusterTag::ALL.len()],
            total: 0.0,
            dominant: vec![ClusterTag::CATCH_ALL],
        }
    }
}

impl ClusterProfile {
    pub fn score(&self, tag: ClusterTag) -> f64 {
        self.scores[tag.ordinal()]
    }
}

/// Everything the scorers need, extracted once per request.
#[derive(Debug, Clone)]
pub struct Signals {
    /// One entry per condition, in reference declaration order.
    pub relevance: Vec<ConditionRelevance>,
    /// `Σ symptom_score` over every reported symptom.
    pub total_symptom_score: f64,
    pub clusters: ClusterProfile,
    /// Involved systems only, in `BodySystem` order.
    pub systems: Vec<SystemInvolvement>,
    /// One flag per rule, detected or not.
    pub red_flags: Vec<RedFlag>,
    pub red_flag_multipliers: RedFlagMultipliers,
    /// One match per pattern rule, detected or not.
    pub patterns: Vec<PatternMatch>,
    pub time_course: TimeCourse,
}

impl Default for Signals {
    fn default() -> Self {
        Self {
            relevance: Vec::new(),
            total_symptom_score: 0.0,
            clusters: ClusterProfile::default(),
            systems: Vec::new(),
            red_flags: Vec::new(),
            red_flag_multipliers: RedFlagMultipliers::default(),
            patterns: Vec::new(),
            time_course: TimeCourse {
                duration_days: None,
                pattern: TimePattern::Unknown,
                derived: true,
                interpretation: String::new(),
            },
        }
    }
}

impl Signals {
    pub fn involved_systems(&self) -> impl Iterator<Item = BodySystem> + '_ {
        self.systems.iter().map(|s| s.system)
    }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

pub trait SignalExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, input: &SymptomInput, reference: &ReferenceData, signals: &mut Signals);
}

/// The full extractor set, in the order they are run.
pub fn default_extractors() -> Vec<Box<dyn SignalExtractor>> {
    vec![
        Box::new(RelevanceExtractor),
        Box::new(ClusterExtractor),
        Box::new(SystemExtractor),
        Box::new(RedFlagExtractor),
        Box::new(PatternExtractor),
        Box::new(TimeCourseExtractor),
    ]
}

/// Run every extractor over the input.
pub fn collect_signals(
    extractors: &[Box<dyn SignalExtractor>],
    input: &SymptomInput,
    reference: &ReferenceData,
) -> Signals {
    let mut signals = Signals::default();
    for extractor in extractors {
        extractor.extract(input, reference, &mut signals);
        tracing::debug!(extractor = extractor.name(), "Signal extracted");
    }
    signals
}

// ─── Extractors ──────────────────────────────────────────────────────────────

pub struct RelevanceExtractor;

impl SignalExtractor for RelevanceExtractor {
    fn name(&self) -> &'static str {
        "relevance"
    }

    fn extract(&self, input: &SymptomInput, reference: &ReferenceData, signals: &mut Signals) {
        let weights: Vec<f64> = input
            .symptoms
            .iter()
            .map(|s| reference.symptom_score(&s.key))
            .collect();
        signals.total_symptom_score = weights.iter().sum();

        signals.relevance = reference
            .diseases()
            .iter()
            .map(|disease| {
                let mut out = ConditionRelevance::default();
                for (token, weight) in input.symptoms.iter().zip(&weights) {
                    let relevance = disease.relevance_for(&token.key);
                    if relevance > 0.0 {
                        out.raw_score += relevance * weight;
                        out.matched_symptoms.push(token.original.clone());
                    }
                }
                out
            })
            .collect();
    }
}

pub struct ClusterExtractor;

impl SignalExtractor for ClusterExtractor {
    fn name(&self) -> &'static str {
        "clusters"
    }

    fn extract(&self, input: &SymptomInput, reference: &ReferenceData, signals: &mut Signals) {
        let mut scores = [0.0; ClusterTag::ALL.len()];
        for token in &input.symptoms {
            let tags = reference.clusters_for(&token.key);
            let share = reference.symptom_score(&token.key) / tags.len() as f64;
            for tag in tags {
                scores[tag.ordinal()] += share;
            }
        }
        signals.clusters = ClusterProfile {
            scores,
            total: scores.iter().sum(),
            dominant: dominant_clusters(&scores),
        };
    }
}

/// Smallest prefix of clusters (descending score, ties in declaration order)
/// covering 60% of the total. Falls back to the catch-all when nothing scores.
pub fn dominant_clusters(scores: &[f64; ClusterTag::ALL.len()]) -> Vec<ClusterTag> {
    let total: f64 = scores.iter().sum();
    if total <= 0.0 {
        return vec![ClusterTag::CATCH_ALL];
    }

    let mut ranked: Vec<ClusterTag> = ClusterTag::ALL
        .iter()
        .copied()
        .filter(|t| scores[t.ordinal()] > 0.0)
        .collect();
    ranked.sort_by(|a, b| {
        scores[b.ordinal()]
            .partial_cmp(&scores[a.ordinal()])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.ordinal().cmp(&b.ordinal()))
    });

    let target = total * DOMINANT_SHARE - 1e-12;
    let mut covered = 0.0;
    let mut dominant = Vec::new();
    for tag in ranked {
        covered += scores[tag.ordinal()];
        dominant.push(tag);
        if covered >= target {
            break;
        }
    }
    dominant
}

pub struct SystemExtractor;

impl SignalExtractor for SystemExtractor {
    fn name(&self) -> &'static str {
        "systems"
    }

    fn extract(&self, input: &SymptomInput, reference: &ReferenceData, signals: &mut Signals) {
        let mut involvement: Vec<SystemInvolvement> = BodySystem::ALL
            .iter()
            .map(|&system| SystemInvolvement {
                system,
                matched_symptoms: Vec::new(),
                score: 0.0,
            })
            .collect();

        for token in &input.symptoms {
            let systems = reference.systems_for(&token.key);
            let share = reference.symptom_score(&token.key) / systems.len() as f64;
            for system in systems {
                let slot = &mut involvement[system.ordinal()];
                slot.matched_symptoms.push(token.original.clone());
                slot.score += share;
            }
        }

        involvement.retain(|s| !s.matched_symptoms.is_empty());
        signals.systems = involvement;
    }
}

/// Fraction of shared systems: `|cs ∩ is| / max(|cs|, |is|)`.
pub fn system_overlap<I>(condition_systems: &[BodySystem], involved: I) -> f64
where
    I: IntoIterator<Item = BodySystem>,
{
    let involved: Vec<BodySystem> = involved.into_iter().collect();
    let denominator = condition_systems.len().max(involved.len());
    if denominator == 0 {
        return 0.0;
    }
    let shared = condition_systems
        .iter()
        .filter(|s| involved.contains(s))
        .count();
    shared as f64 / denominator as f64
}

pub struct RedFlagExtractor;

impl SignalExtractor for RedFlagExtractor {
    fn name(&self) -> &'static str {
        "red_flags"
    }

    fn extract(&self, input: &SymptomInput, _reference: &ReferenceData, signals: &mut Signals) {
        let (flags, multipliers) = detect_red_flags(&input.combined_text);
        signals.red_flags = flags;
        signals.red_flag_multipliers = multipliers;
    }
}

pub struct PatternExtractor;

impl SignalExtractor for PatternExtractor {
    fn name(&self) -> &'static str {
        "patterns"
    }

    fn extract(&self, input: &SymptomInput, _reference: &ReferenceData, signals: &mut Signals) {
        signals.patterns = detect_patterns(&input.combined_text);
    }
}

pub struct TimeCourseExtractor;

impl SignalExtractor for TimeCourseExtractor {
    fn name(&self) -> &'static str {
        "time_course"
    }

    fn extract(&self, input: &SymptomInput, _reference: &ReferenceData, signals: &mut Signals) {
        signals.time_course = infer_time_course(&input.combined_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals_for(symptoms: &str) -> Signals {
        let reference = ReferenceData::builtin().unwrap();
        let input = SymptomInput::new(symptoms, &[], None);
        collect_signals(&default_extractors(), &input, &reference)
    }

    #[test]
    fn relevance_per_condition_in_declaration_order() {
        let reference = ReferenceData::builtin().unwrap();
        let signals = signals_for("weight loss, heart palpitations, anxiety");
        assert_eq!(signals.relevance.len(), reference.diseases().len());

        let idx = reference.disease_position("Hyperthyroidism").unwrap();
        let hyper = &signals.relevance[idx];
        assert_eq!(hyper.matched(), 3);
        // 0.9×0.35 + 0.9×0.30 + 0.8×0.12
        assert!((hyper.raw_score - 0.681).abs() < 1e-9);
        assert_eq!(hyper.matched_symptoms[1], "heart palpitations");
    }

    #[test]
    fn total_symptom_score_includes_unknown_symptoms() {
        let signals = signals_for("fatigue, purple toenails");
        // 0.04 + 0.15
        assert!((signals.total_symptom_score - 0.19).abs() < 1e-9);
    }

    #[test]
    fn cluster_weight_split_across_tags() {
        let signals = signals_for("heat intolerance");
        assert!((signals.clusters.score(ClusterTag::Endocrine) - 0.35).abs() < 1e-9);
        assert_eq!(signals.clusters.dominant, vec![ClusterTag::Endocrine]);

        let signals = signals_for("palpitations");
        assert!((signals.clusters.score(ClusterTag::Endocrine) - 0.15).abs() < 1e-9);
        assert!((signals.clusters.score(ClusterTag::AutonomicDysfunction) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn dominant_clusters_tie_breaks_by_declaration() {
        let mut scores = [0.0; 7];
        scores[ClusterTag::Endocrine.ordinal()] = 0.5;
        scores[ClusterTag::Autoimmune.ordinal()] = 0.5;
        assert_eq!(
            dominant_clusters(&scores),
            vec![ClusterTag::Autoimmune, ClusterTag::Endocrine]
        );
    }

    #[test]
    fn dominant_clusters_smallest_prefix() {
        let mut scores = [0.0; 7];
        scores[ClusterTag::Infectious.ordinal()] = 0.7;
        scores[ClusterTag::Neurologic.ordinal()] = 0.2;
        scores[ClusterTag::Endocrine.ordinal()] = 0.1;
        assert_eq!(dominant_clusters(&scores), vec![ClusterTag::Infectious]);
    }

    #[test]
    fn dominant_clusters_zero_total() {
        assert_eq!(dominant_clusters(&[0.0; 7]), vec![ClusterTag::MetabolicNutritional]);
    }

    #[test]
    fn unmapped_symptom_lands_in_catch_all_system() {
        let signals = signals_for("purple toenails");
        assert_eq!(signals.systems.len(), 1);
        assert_eq!(signals.systems[0].system, BodySystem::EndocrineMetabolic);
        assert_eq!(signals.systems[0].matched_symptoms, vec!["purple toenails"]);
    }

    #[test]
    fn systems_listed_in_enum_order() {
        let signals = signals_for("chest pain, fainting, difficulty breathing");
        let systems: Vec<BodySystem> = signals.involved_systems().collect();
        assert_eq!(
            systems,
            vec![
                BodySystem::Cardiac,
                BodySystem::Neurological,
                BodySystem::Autonomic,
                BodySystem::Respiratory
            ]
        );
    }

    #[test]
    fn overlap_fraction() {
        let cs = [BodySystem::EndocrineMetabolic, BodySystem::Cardiac, BodySystem::Neurological];
        let involved = vec![BodySystem::Cardiac, BodySystem::Neurological];
        assert!((system_overlap(&cs, involved) - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(system_overlap(&[], Vec::new()), 0.0);
        assert_eq!(system_overlap(&cs, vec![BodySystem::Respiratory]), 0.0);
    }

    #[test]
    fn empty_input_yields_concrete_time_course() {
        let signals = signals_for("");
        assert!(signals.relevance.iter().all(|r| r.matched() == 0));
        assert_ne!(signals.time_course.pattern, TimePattern::Unknown);
        assert_eq!(signals.clusters.dominant, vec![ClusterTag::MetabolicNutritional]);
    }
}
