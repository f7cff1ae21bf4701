use super::types::TimePattern;

/// Shown in place of a percentage for likelihoods under 10%.
pub const LOW_LIKELIHOOD_TEXT: &str = "Low likelihood (<10%)";

/// Attached to a report when the top two conditions are too close to call.
pub const CLOSE_CALL_LABEL: &str = "Close call — consider more information";

/// Message template builder for user-facing text.
/// Calm, non-diagnostic wording. Never claims a diagnosis.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Display text for a normalized likelihood in [0.05, 1.0].
    pub fn likelihood(likelihood: f64) -> String {
        if likelihood < 0.10 {
            LOW_LIKELIHOOD_TEXT.to_string()
        } else {
            format!("{}%", (likelihood * 100.0).round() as u32)
        }
    }

    /// Local fallback explanation from the first two matched symptoms.
    pub fn fallback_explanation(matched_symptoms: &[String]) -> String {
        match matched_symptoms {
            [] => "This condition may be considered based on the reported symptoms.".to_string(),
            [only] => format!("This condition may be considered based on {only}."),
            [first, second, ..] => {
                format!("This condition may be considered based on {first} and {second}.")
            }
        }
    }

    /// Human-readable course summary. Always concrete, never empty.
    pub fn time_course(duration_days: u32, pattern: TimePattern, derived: bool) -> String {
        let span = match duration_days {
            d if d > 90 => "Symptoms have been present for more than three months",
            d if d > 21 => "Symptoms have been present for several weeks",
            d if d > 14 => "Symptoms have been present for over two weeks",
            _ => "Symptoms are of recent onset",
        };
        let course = match pattern {
            TimePattern::Acute => "with a sudden onset",
            TimePattern::Relapsing => "with a course that comes and goes",
            TimePattern::Progressive => "with a gradually worsening course",
            TimePattern::Chronic | TimePattern::Unknown => "with a persistent course",
        };
        if derived {
            format!(
                "{span}, {course}. This timeline is estimated from the symptoms described \
                 and may change with more detail."
            )
        } else {
            format!("{span}, {course}.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likelihood_text_threshold() {
        assert_eq!(MessageTemplates::likelihood(0.05), LOW_LIKELIHOOD_TEXT);
        assert_eq!(MessageTemplates::likelihood(0.0999), LOW_LIKELIHOOD_TEXT);
        assert_eq!(MessageTemplates::likelihood(0.10), "10%");
        assert_eq!(MessageTemplates::likelihood(0.456), "46%");
        assert_eq!(MessageTemplates::likelihood(1.0), "100%");
    }

    #[test]
    fn fallback_explanation_variants() {
        let two = vec!["weight loss".to_string(), "anxiety".to_string(), "tremor".to_string()];
        assert_eq!(
            MessageTemplates::fallback_explanation(&two),
            "This condition may be considered based on weight loss and anxiety."
        );
        assert_eq!(
            MessageTemplates::fallback_explanation(&two[..1]),
            "This condition may be considered based on weight loss."
        );
        assert!(MessageTemplates::fallback_explanation(&[]).contains("reported symptoms"));
    }

    #[test]
    fn time_course_buckets() {
        let text = MessageTemplates::time_course(120, TimePattern::Chronic, false);
        assert!(text.contains("more than three months"));
        let text = MessageTemplates::time_course(21, TimePattern::Chronic, false);
        assert!(text.contains("over two weeks"));
        let text = MessageTemplates::time_course(30, TimePattern::Progressive, true);
        assert!(text.contains("several weeks"));
        assert!(text.contains("estimated"));
        let text = MessageTemplates::time_course(2, TimePattern::Acute, false);
        assert!(text.contains("recent onset"));
        assert!(!text.contains("unavailable"));
    }
}
