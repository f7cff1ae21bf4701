use super::messages::MessageTemplates;
use super::types::ExplanationError;

/// Produces the per-condition explanation shown beside a likelihood.
///
/// Implementations may call out to a text generator. The engine never depends
/// on one succeeding: any error or empty output falls back to the local template.
pub trait ExplanationGenerator: Send + Sync {
    fn explain(
        &self,
        condition: &str,
        matched_symptoms: &[String],
        likelihood: f64,
    ) -> Result<String, ExplanationError>;
}

/// Local, deterministic explanation from the first two matched symptoms.
pub struct TemplateExplainer;

impl ExplanationGenerator for TemplateExplainer {
    fn explain(
        &self,
        _condition: &str,
        matched_symptoms: &[String],
        _likelihood: f64,
    ) -> Result<String, ExplanationError> {
        Ok(MessageTemplates::fallback_explanation(matched_symptoms))
    }
}

/// Ask the generator, falling back to the template on error or blank output.
pub fn explain_or_fallback(
    generator: &dyn ExplanationGenerator,
    condition: &str,
    matched_symptoms: &[String],
    likelihood: f64,
) -> String {
    match generator.explain(condition, matched_symptoms, likelihood) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            tracing::warn!(condition, "Explanation generator returned empty text, using template");
            MessageTemplates::fallback_explanation(matched_symptoms)
        }
        Err(e) => {
            tracing::warn!(condition, error = %e, "Explanation generator failed, using template");
            MessageTemplates::fallback_explanation(matched_symptoms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl ExplanationGenerator for Failing {
        fn explain(&self, _: &str, _: &[String], _: f64) -> Result<String, ExplanationError> {
            Err(ExplanationError::Failed("timeout".into()))
        }
    }

    struct Blank;

    impl ExplanationGenerator for Blank {
        fn explain(&self, _: &str, _: &[String], _: f64) -> Result<String, ExplanationError> {
            Ok("   ".into())
        }
    }

    struct Canned;

    impl ExplanationGenerator for Canned {
        fn explain(
            &self,
            condition: &str,
            _: &[String],
            likelihood: f64,
        ) -> Result<String, ExplanationError> {
            Ok(format!(" {condition} at {:.0}% ", likelihood * 100.0))
        }
    }

    fn matched() -> Vec<String> {
        vec!["fatigue".into(), "weight gain".into()]
    }

    #[test]
    fn template_explainer_names_first_two_symptoms() {
        let text = explain_or_fallback(&TemplateExplainer, "Hypothyroidism", &matched(), 0.8);
        assert_eq!(text, "This condition may be considered based on fatigue and weight gain.");
    }

    #[test]
    fn failing_generator_falls_back() {
        let text = explain_or_fallback(&Failing, "Hypothyroidism", &matched(), 0.8);
        assert!(text.starts_with("This condition may be considered based on"));
    }

    #[test]
    fn blank_output_falls_back() {
        let text = explain_or_fallback(&Blank, "Hypothyroidism", &matched(), 0.8);
        assert!(text.contains("fatigue and weight gain"));
    }

    #[test]
    fn generator_output_is_trimmed() {
        let text = explain_or_fallback(&Canned, "Hypothyroidism", &matched(), 0.8);
        assert_eq!(text, "Hypothyroidism at 80%");
    }

    #[test]
    fn fallback_matches_template_explainer() {
        let fallback = explain_or_fallback(&Failing, "x", &matched(), 0.5);
        let template = TemplateExplainer.explain("x", &matched(), 0.5).unwrap();
        assert_eq!(fallback, template);
    }
}
