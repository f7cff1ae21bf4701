use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ClusterTag
// ---------------------------------------------------------------------------

/// Coarse pathophysiological category used for explainability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ClusterTag {
    Autoimmune,
    Endocrine,
    Neurologic,
    Infectious,
    MalignancyHematologic,
    AutonomicDysfunction,
    /// Catch-all for symptoms with no cluster mapping.
    MetabolicNutritional,
}

impl ClusterTag {
    /// Declaration order, used for deterministic tie-breaks.
    pub const ALL: [ClusterTag; 7] = [
        Self::Autoimmune,
        Self::Endocrine,
        Self::Neurologic,
        Self::Infectious,
        Self::MalignancyHematologic,
        Self::AutonomicDysfunction,
        Self::MetabolicNutritional,
    ];

    pub const CATCH_ALL: ClusterTag = Self::MetabolicNutritional;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Autoimmune => "autoimmune",
            Self::Endocrine => "endocrine",
            Self::Neurologic => "neurologic",
            Self::Infectious => "infectious",
            Self::MalignancyHematologic => "malignancy/hematologic",
            Self::AutonomicDysfunction => "autonomic dysfunction",
            Self::MetabolicNutritional => "metabolic/nutritional",
        }
    }

    pub(crate) fn ordinal(&self) -> usize {
        *self as usize
    }
}

// ---------------------------------------------------------------------------
// BodySystem
// ---------------------------------------------------------------------------

/// Anatomical or functional grouping used for multi-system overlap scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BodySystem {
    /// Catch-all for symptoms with no system mapping.
    EndocrineMetabolic,
    Cardiac,
    Neurological,
    Autonomic,
    Gastrointestinal,
    Hematologic,
    Autoimmune,
    Respiratory,
}

impl BodySystem {
    pub const ALL: [BodySystem; 8] = [
        Self::EndocrineMetabolic,
        Self::Cardiac,
        Self::Neurological,
        Self::Autonomic,
        Self::Gastrointestinal,
        Self::Hematologic,
        Self::Autoimmune,
        Self::Respiratory,
    ];

    pub const CATCH_ALL: BodySystem = Self::EndocrineMetabolic;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndocrineMetabolic => "endocrine/metabolic",
            Self::Cardiac => "cardiac",
            Self::Neurological => "neurological",
            Self::Autonomic => "autonomic",
            Self::Gastrointestinal => "gastrointestinal",
            Self::Hematologic => "hematologic",
            Self::Autoimmune => "autoimmune",
            Self::Respiratory => "respiratory",
        }
    }

    pub(crate) fn ordinal(&self) -> usize {
        *self as usize
    }
}

// ---------------------------------------------------------------------------
// TimePattern
// ---------------------------------------------------------------------------

/// Temporal course of the reported illness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimePattern {
    Acute,
    Relapsing,
    Progressive,
    Chronic,
    /// Intermediate state only. A finished assessment never reports it.
    Unknown,
}

impl TimePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acute => "acute",
            Self::Relapsing => "relapsing",
            Self::Progressive => "progressive",
            Self::Chronic => "chronic",
            Self::Unknown => "unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// RiskCategory & RedFlagMultipliers
// ---------------------------------------------------------------------------

/// Risk category a red flag can boost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Malignancy,
    ChronicInfection,
    Ms,
    Dysautonomia,
    AdrenalInsufficiency,
    Autoimmune,
}

/// One multiplier per risk category. Each starts at 1.0 and only grows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RedFlagMultipliers {
    pub malignancy: f64,
    pub chronic_infection: f64,
    pub ms: f64,
    pub dysautonomia: f64,
    pub adrenal_insufficiency: f64,
    pub autoimmune: f64,
}

impl Default for RedFlagMultipliers {
    fn default() -> Self {
        Self {
            malignancy: 1.0,
            chronic_infection: 1.0,
            ms: 1.0,
            dysautonomia: 1.0,
            adrenal_insufficiency: 1.0,
            autoimmune: 1.0,
        }
    }
}

impl RedFlagMultipliers {
    pub fn get(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::Malignancy => self.malignancy,
            RiskCategory::ChronicInfection => self.chronic_infection,
            RiskCategory::Ms => self.ms,
            RiskCategory::Dysautonomia => self.dysautonomia,
            RiskCategory::AdrenalInsufficiency => self.adrenal_insufficiency,
            RiskCategory::Autoimmune => self.autoimmune,
        }
    }

    /// Additive accumulation on the trigger side.
    pub fn boost(&mut self, category: RiskCategory, amount: f64) {
        let slot = match category {
            RiskCategory::Malignancy => &mut self.malignancy,
            RiskCategory::ChronicInfection => &mut self.chronic_infection,
            RiskCategory::Ms => &mut self.ms,
            RiskCategory::Dysautonomia => &mut self.dysautonomia,
            RiskCategory::AdrenalInsufficiency => &mut self.adrenal_insufficiency,
            RiskCategory::Autoimmune => &mut self.autoimmune,
        };
        *slot += amount.max(0.0);
    }
}

// ---------------------------------------------------------------------------
// Reference records
// ---------------------------------------------------------------------------

/// Weighting of a known symptom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SymptomWeight {
    pub severity_weight: f64,
    pub specificity_weight: f64,
}

impl SymptomWeight {
    /// Applied to symptoms with no entry in the weight table.
    pub const UNKNOWN: SymptomWeight = SymptomWeight {
        severity_weight: 0.5,
        specificity_weight: 0.3,
    };

    pub fn score(&self) -> f64 {
        self.severity_weight * self.specificity_weight
    }
}

/// A candidate condition. `name` is the join key across every table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseEntry {
    pub name: String,
    pub clusters: Vec<ClusterTag>,
    /// Ordered `(symptom_key, relevance)` pairs. Order drives fuzzy tie-breaks.
    pub symptom_relevance: Vec<(String, f64)>,
    pub description: String,
    pub external_reference_term: String,
    #[serde(default)]
    pub typical_course: Vec<TimePattern>,
    #[serde(default)]
    pub risk_category: Option<RiskCategory>,
}

// ---------------------------------------------------------------------------
// Derived per-request records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemInvolvement {
    pub system: BodySystem,
    pub matched_symptoms: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedFlag {
    pub name: String,
    pub detected: bool,
    pub severity: f64,
    /// Warrants prompt in-person care rather than a ranked list.
    pub urgent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternMatch {
    pub pattern_name: String,
    pub detected: bool,
    pub affected_conditions: Vec<String>,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeCourse {
    pub duration_days: Option<u32>,
    pub pattern: TimePattern,
    /// True when duration or pattern was inferred from symptom semantics.
    pub derived: bool,
    pub interpretation: String,
}

/// Per-factor contributions of the multi-factor score, before weighting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FactorBreakdown {
    pub cluster_match: f64,
    pub system_overlap: f64,
    pub multi_system_boost: bool,
    pub time_course_multiplier: f64,
    pub pattern_multiplier: f64,
    pub demographic_compatibility: f64,
    pub red_flag_multiplier: f64,
    pub priority_boost: bool,
}

// ---------------------------------------------------------------------------
// Scoring mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Weighted relevance sum with a 15% match-ratio threshold.
    Simple,
    /// Six-factor composition with a 30% match-ratio threshold.
    #[default]
    MultiFactor,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::MultiFactor => "multi_factor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "simple" => Some(Self::Simple),
            "multi_factor" | "multifactor" | "advanced" => Some(Self::MultiFactor),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Request & report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientProfile {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
}

/// Committed wizard input: delimited symptom text plus one answer per question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssessmentRequest {
    pub symptoms: String,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub profile: Option<PatientProfile>,
}

impl AssessmentRequest {
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            ..Self::default()
        }
    }

    pub fn with_answers<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers = answers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_profile(mut self, age: &str, gender: &str) -> Self {
        self.profile = Some(PatientProfile {
            age: age.to_string(),
            gender: gender.to_string(),
        });
        self
    }
}

/// One surfaced condition. Created fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionResult {
    pub condition: String,
    /// Always in [0.05, 1.0].
    pub likelihood: f64,
    pub display_text: String,
    pub description: String,
    pub external_reference_term: String,
    pub clusters: Vec<ClusterTag>,
    pub explanation: String,
    pub matched_symptoms: Vec<String>,
    pub raw_score: f64,
    pub factors: Option<FactorBreakdown>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentReport {
    /// Stable fingerprint of the normalized input.
    pub assessment_id: Uuid,
    pub mode: ScoringMode,
    pub conditions: Vec<ConditionResult>,
    pub dominant_clusters: Vec<ClusterTag>,
    pub system_involvement: Vec<SystemInvolvement>,
    /// Detected red flags only.
    pub red_flags: Vec<RedFlag>,
    pub red_flag_multipliers: RedFlagMultipliers,
    /// Detected patterns only.
    pub patterns: Vec<PatternMatch>,
    pub time_course: TimeCourse,
    pub close_call_label: Option<String>,
}

impl AssessmentReport {
    pub fn has_urgent_flag(&self) -> bool {
        self.red_flags.iter().any(|f| f.detected && f.urgent)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Invalid reference data: {0}")]
    InvalidReference(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum ExplanationError {
    #[error("Explanation generator unavailable")]
    Unavailable,

    #[error("Explanation generation failed: {0}")]
    Failed(String),
}

// ---------------------------------------------------------------------------
// LikelihoodEngine trait
// ---------------------------------------------------------------------------

/// The main assessment trait. Assessment never fails on user input.
pub trait LikelihoodEngine {
    fn assess(&self, request: &AssessmentRequest) -> AssessmentReport;

    fn mode(&self) -> ScoringMode;
}
