pub mod types;
pub mod normalize;
pub mod tables;
pub mod reference;
pub mod helpers;
pub mod detection;
pub mod time_course;
pub mod signals;
pub mod scoring;
pub mod display;
pub mod messages;
pub mod explain;
pub mod engine;

pub use engine::DefaultLikelihoodEngine;
pub use explain::{ExplanationGenerator, TemplateExplainer};
pub use reference::ReferenceData;
pub use types::{
    AssessmentReport, AssessmentRequest, BodySystem, ClusterTag, ConditionResult, EngineError,
    ExplanationError, LikelihoodEngine, PatientProfile, RedFlag, ScoringMode, TimeCourse,
    TimePattern,
};
