use super::detection::pattern_multiplier;
use super::helpers::{first_integer, matches_all};
use super::normalize::SymptomInput;
use super::reference::ReferenceData;
use super::signals::{system_overlap, Signals};
use super::types::{
    DiseaseEntry, FactorBreakdown, PatientProfile, ScoringMode, TimeCourse, TimePattern,
};

const SIMPLE_THRESHOLD: f64 = 0.15;
const MULTI_FACTOR_THRESHOLD: f64 = 0.30;
const PRIORITY_BOOST: f64 = 1.3;
const MULTI_SYSTEM_BOOST: f64 = 1.5;
const MULTI_SYSTEM_MIN_INVOLVED: usize = 3;
const MULTI_SYSTEM_MIN_SPANNED: usize = 2;

const W_CLUSTER: f64 = 0.40;
const W_SYSTEM: f64 = 0.20;
const W_TIME: f64 = 0.15;
const W_PATTERN: f64 = 0.10;
const W_DEMOGRAPHIC: f64 = 0.10;
const W_RED_FLAG: f64 = 0.05;

const FIT_SHARE: f64 = 0.6;
const AFFINITY_SHARE: f64 = 0.4;

/// A retained condition with its pre-normalization score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCondition {
    /// Position in the reference condition list.
    pub index: usize,
    pub raw_score: f64,
    pub score: f64,
    pub matched_symptoms: Vec<String>,
    pub factors: Option<FactorBreakdown>,
}

pub trait ScoringStrategy: Send + Sync {
    fn mode(&self) -> ScoringMode;

    /// Minimum `matched / reported` ratio for a condition to be retained.
    fn threshold(&self) -> f64;

    fn score(
        &self,
        input: &SymptomInput,
        reference: &ReferenceData,
        signals: &Signals,
    ) -> Vec<ScoredCondition>;
}

pub fn strategy_for(mode: ScoringMode) -> Box<dyn ScoringStrategy> {
    match mode {
        ScoringMode::Simple => Box::new(SimpleScorer),
        ScoringMode::MultiFactor => Box::new(MultiFactorScorer),
    }
}

/// Retention gate, applied before any boosting.
fn retained(matched: usize, reported: usize, threshold: f64) -> bool {
    matched > 0 && reported > 0 && matched as f64 / reported as f64 >= threshold
}

// ---------------------------------------------------------------------------
// Priority rules
// ---------------------------------------------------------------------------

struct PriorityRule {
    terms: &'static [&'static [&'static str]],
    conditions: &'static [&'static str],
}

const RACING_HEART: &[&str] = &["palpitations", "racing heart", "rapid heartbeat"];

const PRIORITY_RULES: &[PriorityRule] = &[
    PriorityRule {
        terms: &[&["weight loss"], RACING_HEART],
        conditions: &["Hyperthyroidism", "Graves' Disease"],
    },
    PriorityRule {
        terms: &[&["weight gain"], &["fatigue", "cold intolerance"]],
        conditions: &["Hypothyroidism", "Hashimoto's Thyroiditis"],
    },
    PriorityRule {
        terms: &[
            &["salt craving"],
            &["darkening skin", "dizziness", "low blood pressure"],
        ],
        conditions: &["Addison's Disease"],
    },
    PriorityRule {
        terms: &[&["excessive thirst"], &["frequent urination"]],
        conditions: &["Type 1 Diabetes", "Type 2 Diabetes"],
    },
    PriorityRule {
        terms: &[&["dizziness", "lightheadedness"], RACING_HEART],
        conditions: &["Postural Orthostatic Tachycardia Syndrome"],
    },
];

/// Conditions promoted by symptom-combination rules over the symptom text.
pub fn priority_conditions(symptom_text: &str) -> Vec<&'static str> {
    let mut out = Vec::new();
    for rule in PRIORITY_RULES {
        if matches_all(symptom_text, rule.terms) {
            out.extend(rule.conditions.iter().copied());
        }
    }
    out
}

pub(crate) fn priority_rule_conditions() -> impl Iterator<Item = &'static str> {
    PRIORITY_RULES.iter().flat_map(|r| r.conditions.iter().copied())
}

// ---------------------------------------------------------------------------
// Demographics
// ---------------------------------------------------------------------------

/// `(condition, minimum typical onset age, factor below that age)`
const ONSET_AGES: &[(&str, u32, f64)] = &[
    ("Multiple Sclerosis", 15, 0.4),
    ("Rheumatoid Arthritis", 16, 0.5),
    ("Type 2 Diabetes", 10, 0.5),
    ("Postural Orthostatic Tachycardia Syndrome", 12, 0.6),
];

pub(crate) fn onset_age_conditions() -> impl Iterator<Item = &'static str> {
    ONSET_AGES.iter().map(|(c, _, _)| *c)
}

/// 1.0 unless the stated age is below the condition's minimum onset age.
/// Unparseable or missing ages are treated as compatible.
pub fn demographic_compatibility(condition: &str, profile: Option<&PatientProfile>) -> f64 {
    let Some(age) = profile.and_then(|p| first_integer(&p.age)) else {
        return 1.0;
    };
    ONSET_AGES
        .iter()
        .find(|(name, _, _)| *name == condition)
        .filter(|(_, min_age, _)| age < *min_age)
        .map_or(1.0, |(_, _, factor)| *factor)
}

// ---------------------------------------------------------------------------
// Factor helpers
// ---------------------------------------------------------------------------

/// Maps a multiplier (neutral at 1.0) into [0, 1].
fn norm(multiplier: f64) -> f64 {
    (multiplier / 2.0).clamp(0.0, 1.0)
}

/// 1.5 when the course is typical for the condition, 0.75 when atypical,
/// neutral when either side is unknown. Inferred courses count half.
pub fn time_course_multiplier(typical: &[TimePattern], course: &TimeCourse) -> f64 {
    let base = if typical.is_empty() || course.pattern == TimePattern::Unknown {
        1.0
    } else if typical.contains(&course.pattern) {
        1.5
    } else {
        0.75
    };
    if course.derived {
        1.0 + (base - 1.0) * 0.5
    } else {
        base
    }
}

fn red_flag_multiplier(disease: &DiseaseEntry, signals: &Signals) -> f64 {
    disease
        .risk_category
        .map_or(1.0, |category| signals.red_flag_multipliers.get(category))
}

fn cluster_match(disease: &DiseaseEntry, raw_score: f64, signals: &Signals) -> f64 {
    let fit = if signals.total_symptom_score > 0.0 {
        (raw_score / signals.total_symptom_score).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let affinity = if signals.clusters.total > 0.0 {
        let covered: f64 = disease
            .clusters
            .iter()
            .map(|tag| signals.clusters.score(*tag))
            .sum();
        (covered / signals.clusters.total).min(1.0)
    } else {
        0.0
    };
    FIT_SHARE * fit + AFFINITY_SHARE * affinity
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Weighted relevance sum with priority boost.
pub struct SimpleScorer;

impl ScoringStrategy for SimpleScorer {
    fn mode(&self) -> ScoringMode {
        ScoringMode::Simple
    }

    fn threshold(&self) -> f64 {
        SIMPLE_THRESHOLD
    }

    fn score(
        &self,
        input: &SymptomInput,
        reference: &ReferenceData,
        signals: &Signals,
    ) -> Vec<ScoredCondition> {
        let priority = priority_conditions(&input.symptom_text);
        reference
            .diseases()
            .iter()
            .zip(&signals.relevance)
            .enumerate()
            .filter(|(_, (_, rel))| retained(rel.matched(), input.len(), self.threshold()))
            .map(|(index, (disease, rel))| {
                let boost = if priority.iter().any(|p| *p == disease.name) {
                    PRIORITY_BOOST
                } else {
                    1.0
                };
                ScoredCondition {
                    index,
                    raw_score: rel.raw_score,
                    score: rel.raw_score * boost,
                    matched_symptoms: rel.matched_symptoms.clone(),
                    factors: None,
                }
            })
            .collect()
    }
}

/// Six-factor composition over every extracted signal.
pub struct MultiFactorScorer;

impl MultiFactorScorer {
    pub fn factors(
        disease: &DiseaseEntry,
        raw_score: f64,
        input: &SymptomInput,
        reference: &ReferenceData,
        signals: &Signals,
        priority: bool,
    ) -> FactorBreakdown {
        let condition_systems = reference.condition_systems(&disease.name);
        let involved = signals.systems.len();
        FactorBreakdown {
            cluster_match: cluster_match(disease, raw_score, signals),
            system_overlap: system_overlap(condition_systems, signals.involved_systems()),
            multi_system_boost: involved >= MULTI_SYSTEM_MIN_INVOLVED
                && condition_systems.len() >= MULTI_SYSTEM_MIN_SPANNED,
            time_course_multiplier: time_course_multiplier(
                &disease.typical_course,
                &signals.time_course,
            ),
            pattern_multiplier: pattern_multiplier(&signals.patterns, &disease.name),
            demographic_compatibility: demographic_compatibility(
                &disease.name,
                input.profile.as_ref(),
            ),
            red_flag_multiplier: red_flag_multiplier(disease, signals),
            priority_boost: priority,
        }
    }

    pub fn compose(f: &FactorBreakdown) -> f64 {
        let system_boost = if f.multi_system_boost {
            MULTI_SYSTEM_BOOST
        } else {
            1.0
        };
        let total = W_CLUSTER * f.cluster_match
            + W_SYSTEM * f.system_overlap * system_boost
            + W_TIME * norm(f.time_course_multiplier)
            + W_PATTERN * norm(f.pattern_multiplier)
            + W_DEMOGRAPHIC * f.demographic_compatibility
            + W_RED_FLAG * norm(f.red_flag_multiplier);
        if f.priority_boost {
            total * PRIORITY_BOOST
        } else {
            total
        }
    }
}

impl ScoringStrategy for MultiFactorScorer {
    fn mode(&self) -> ScoringMode {
        ScoringMode::MultiFactor
    }

    fn threshold(&self) -> f64 {
        MULTI_FACTOR_THRESHOLD
    }

    fn score(
        &self,
        input: &SymptomInput,
        reference: &ReferenceData,
        signals: &Signals,
    ) -> Vec<ScoredCondition> {
        let priority = priority_conditions(&input.symptom_text);
        reference
            .diseases()
            .iter()
            .zip(&signals.relevance)
            .enumerate()
            .filter(|(_, (_, rel))| retained(rel.matched(), input.len(), self.threshold()))
            .map(|(index, (disease, rel))| {
                let is_priority = priority.iter().any(|p| *p == disease.name);
                let factors = Self::factors(
                    disease,
                    rel.raw_score,
                    input,
                    reference,
                    signals,
                    is_priority,
                );
                ScoredCondition {
                    index,
                    raw_score: rel.raw_score,
                    score: Self::compose(&factors),
                    matched_symptoms: rel.matched_symptoms.clone(),
                    factors: Some(factors),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::signals::{collect_signals, default_extractors};

    fn run(
        strategy: &dyn ScoringStrategy,
        symptoms: &str,
        answers: &[&str],
    ) -> Vec<ScoredCondition> {
        let reference = ReferenceData::builtin().unwrap();
        let answers: Vec<String> = answers.iter().map(|a| a.to_string()).collect();
        let input = SymptomInput::new(symptoms, &answers, None);
        let signals = collect_signals(&default_extractors(), &input, &reference);
        strategy.score(&input, &reference, &signals)
    }

    fn find<'a>(scored: &'a [ScoredCondition], name: &str) -> Option<&'a ScoredCondition> {
        let reference = ReferenceData::builtin().unwrap();
        let idx = reference.disease_position(name)?;
        scored.iter().find(|s| s.index == idx)
    }

    #[test]
    fn retention_ratio() {
        assert!(retained(1, 3, 0.30));
        assert!(!retained(1, 4, 0.30));
        assert!(retained(1, 6, 0.15));
        assert!(!retained(0, 0, 0.15));
    }

    #[test]
    fn priority_rules_match_symptom_text() {
        let p = priority_conditions("weight loss, heart palpitations, anxiety");
        assert_eq!(p, vec!["Hyperthyroidism", "Graves' Disease"]);
        let p = priority_conditions("excessive thirst, frequent urination");
        assert_eq!(p, vec!["Type 1 Diabetes", "Type 2 Diabetes"]);
        assert!(priority_conditions("weight loss").is_empty());
    }

    #[test]
    fn demographic_table() {
        let child = PatientProfile {
            age: "8 years".into(),
            gender: String::new(),
        };
        let adult = PatientProfile {
            age: "34".into(),
            gender: String::new(),
        };
        assert_eq!(demographic_compatibility("Multiple Sclerosis", Some(&child)), 0.4);
        assert_eq!(demographic_compatibility("Type 2 Diabetes", Some(&child)), 0.5);
        assert_eq!(demographic_compatibility("Multiple Sclerosis", Some(&adult)), 1.0);
        assert_eq!(demographic_compatibility("Lymphoma", Some(&child)), 1.0);
        assert_eq!(demographic_compatibility("Multiple Sclerosis", None), 1.0);
        let vague = PatientProfile {
            age: "young".into(),
            gender: String::new(),
        };
        assert_eq!(demographic_compatibility("Multiple Sclerosis", Some(&vague)), 1.0);
    }

    #[test]
    fn time_course_multiplier_variants() {
        let explicit = TimeCourse {
            duration_days: Some(21),
            pattern: TimePattern::Chronic,
            derived: false,
            interpretation: "x".into(),
        };
        assert_eq!(time_course_multiplier(&[TimePattern::Chronic], &explicit), 1.5);
        assert_eq!(time_course_multiplier(&[TimePattern::Acute], &explicit), 0.75);
        assert_eq!(time_course_multiplier(&[], &explicit), 1.0);

        let derived = TimeCourse {
            derived: true,
            ..explicit
        };
        assert_eq!(time_course_multiplier(&[TimePattern::Chronic], &derived), 1.25);
        assert_eq!(time_course_multiplier(&[TimePattern::Acute], &derived), 0.875);
    }

    #[test]
    fn norm_clamps() {
        assert_eq!(norm(1.0), 0.5);
        assert_eq!(norm(5.0), 1.0);
        assert_eq!(norm(-1.0), 0.0);
    }

    #[test]
    fn simple_score_is_weighted_sum_with_priority() {
        let scored = run(&SimpleScorer, "weight loss, heart palpitations, anxiety", &[]);
        let hyper = find(&scored, "Hyperthyroidism").unwrap();
        assert!((hyper.raw_score - 0.681).abs() < 1e-9);
        assert!((hyper.score - 0.681 * 1.3).abs() < 1e-9);
        assert!(hyper.factors.is_none());

        let panic = find(&scored, "Panic Disorder").unwrap();
        assert!((panic.score - panic.raw_score).abs() < 1e-12);
    }

    #[test]
    fn multi_factor_threshold_stricter_than_simple() {
        // Four symptoms, Rheumatoid Arthritis matches one of them (25%).
        let symptoms = "morning stiffness, headache, cough, sore throat";
        let simple = run(&SimpleScorer, symptoms, &[]);
        let multi = run(&MultiFactorScorer, symptoms, &[]);
        assert!(find(&simple, "Rheumatoid Arthritis").is_some());
        assert!(find(&multi, "Rheumatoid Arthritis").is_none());
    }

    #[test]
    fn multi_factor_prefers_thyroid_for_hyperadrenergic_weight_loss() {
        let scored = run(&MultiFactorScorer, "weight loss, heart palpitations, anxiety", &[]);
        let hyper = find(&scored, "Hyperthyroidism").unwrap();
        let factors = hyper.factors.unwrap();
        assert!(factors.priority_boost);
        assert!(factors.multi_system_boost);
        assert!((factors.pattern_multiplier - 1.4).abs() < 1e-9);
        assert!((factors.system_overlap - 0.6).abs() < 1e-9);

        let panic = find(&scored, "Panic Disorder").unwrap();
        assert!(hyper.score > panic.score);
    }

    #[test]
    fn compose_is_weighted_sum() {
        let f = FactorBreakdown {
            cluster_match: 1.0,
            system_overlap: 1.0,
            multi_system_boost: false,
            time_course_multiplier: 2.0,
            pattern_multiplier: 2.0,
            demographic_compatibility: 1.0,
            red_flag_multiplier: 2.0,
            priority_boost: false,
        };
        assert!((MultiFactorScorer::compose(&f) - 1.0).abs() < 1e-9);
        let boosted = FactorBreakdown {
            priority_boost: true,
            multi_system_boost: true,
            ..f
        };
        assert!((MultiFactorScorer::compose(&boosted) - 1.1 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn red_flag_multiplier_follows_risk_category() {
        let scored = run(&MultiFactorScorer, "night sweats, fever, weight loss", &[]);
        let lymphoma = find(&scored, "Lymphoma").unwrap();
        // B symptoms +1.0
        assert!((lymphoma.factors.unwrap().red_flag_multiplier - 2.0).abs() < 1e-9);
        let mono = find(&scored, "Infectious Mononucleosis").unwrap();
        assert_eq!(mono.factors.unwrap().red_flag_multiplier, 1.0);
    }

    #[test]
    fn empty_input_scores_nothing() {
        assert!(run(&MultiFactorScorer, "", &[]).is_empty());
        assert!(run(&SimpleScorer, " , ", &["for 3 weeks"]).is_empty());
    }
}
