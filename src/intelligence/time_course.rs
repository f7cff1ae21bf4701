use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::helpers::{contains_any, parse_count, COUNT_WORDS, WORSENING_TERMS};
use super::messages::MessageTemplates;
use super::types::{TimeCourse, TimePattern};

/// Durations up to this many days read as acute when no pattern is stated.
const ACUTE_MAX_DAYS: u32 = 14;
const DEFAULT_DURATION_DAYS: u32 = 30;

/// "for 3 weeks", "since the last two months", "for a couple of days", "for 2-3 weeks".
/// A range counts as its upper bound.
static RE_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:for|since|over|last|past)\s+(?:(?:the|last|past|about|around|almost|nearly)\s+)*(?:(?:a|an)\s+)?(?P<count>{COUNT_WORDS})(?:\s*(?:-|to)\s*(?P<upper>{COUNT_WORDS}))?\s+(?:of\s+)?(?P<unit>day|week|month|year)s?\b"
    ))
    .unwrap()
});

/// "3 weeks ago", "a month ago", "2-3 days ago".
static RE_AGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?P<count>{COUNT_WORDS})(?:\s*(?:-|to)\s*(?P<upper>{COUNT_WORDS}))?\s+(?:of\s+)?(?P<unit>day|week|month|year)s?\s+ago\b"
    ))
    .unwrap()
});

/// "since last week", "over the past month": one unit.
static RE_LAST_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?:since|over|for|in|during)\s+)?(?:the\s+)?(?:last|past)\s+(?P<unit>day|week|month|year)\b",
    )
    .unwrap()
});

/// Explicit pattern cues, checked in precedence order.
const PATTERN_CUES: &[(TimePattern, &[&str])] = &[
    (
        TimePattern::Relapsing,
        &[
            "comes and goes",
            "come and go",
            "on and off",
            "flare",
            "relaps",
            "remission",
            "episod",
            "intermittent",
            "recurr",
        ],
    ),
    (
        TimePattern::Progressive,
        &[
            "progressive",
            "progressively",
            "gradually worse",
            "steadily worse",
            "getting worse",
            "keeps getting worse",
            "worsening",
            "more and more",
        ],
    ),
    (
        TimePattern::Acute,
        &[
            "sudden",
            "abrupt",
            "acute",
            "since yesterday",
            "this morning",
            "last night",
        ],
    ),
    (
        TimePattern::Chronic,
        &[
            "chronic",
            "constant",
            "persistent",
            "all the time",
            "for years",
            "long-standing",
            "longstanding",
            "always",
        ],
    ),
];

/// Symptom-semantic inference used when the text does not state a pattern.
struct InferenceRule {
    terms: &'static [&'static [&'static str]],
    pattern: fn(&str) -> TimePattern,
    duration_days: u32,
}

fn chronic(_: &str) -> TimePattern {
    TimePattern::Chronic
}

fn acute(_: &str) -> TimePattern {
    TimePattern::Acute
}

fn progressive(_: &str) -> TimePattern {
    TimePattern::Progressive
}

fn progressive_if_worsening(text: &str) -> TimePattern {
    if contains_any(text, WORSENING_TERMS) {
        TimePattern::Progressive
    } else {
        TimePattern::Chronic
    }
}

const INFERENCE_RULES: &[InferenceRule] = &[
    InferenceRule {
        terms: &[&["weight loss", "losing weight", "lost weight"]],
        pattern: chronic,
        duration_days: 21,
    },
    InferenceRule {
        terms: &[&["palpitations", "racing heart", "rapid heartbeat"], WORSENING_TERMS],
        pattern: progressive,
        duration_days: 30,
    },
    InferenceRule {
        terms: &[&["tremor"], &["anxiety"]],
        pattern: chronic,
        duration_days: 60,
    },
    InferenceRule {
        terms: &[&["numbness", "weakness", "vision"]],
        pattern: progressive_if_worsening,
        duration_days: 45,
    },
    InferenceRule {
        terms: &[&["fever", "sore throat"]],
        pattern: acute,
        duration_days: 7,
    },
    InferenceRule {
        terms: &[&["fainting", "chest pain", "difficulty breathing"]],
        pattern: acute,
        duration_days: 2,
    },
];

/// Typical duration assumed for an explicitly stated pattern with no duration.
fn default_duration(pattern: TimePattern) -> u32 {
    match pattern {
        TimePattern::Acute => 3,
        TimePattern::Relapsing => 60,
        TimePattern::Progressive => 45,
        TimePattern::Chronic | TimePattern::Unknown => 90,
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

fn captures_to_days(caps: &Captures<'_>) -> Option<u32> {
    let count = match caps.name("upper").or_else(|| caps.name("count")) {
        Some(m) => parse_count(m.as_str())?,
        None => 1,
    };
    let unit_days = match caps.name("unit")?.as_str() {
        "day" => 1,
        "week" => 7,
        "month" => 30,
        _ => 365,
    };
    Some(count.saturating_mul(unit_days))
}

/// First explicit duration in the text, in days. When two forms match at the
/// same position the counted form wins.
pub fn extract_duration(text: &str) -> Option<u32> {
    let first = [&*RE_DURATION, &*RE_AGO, &*RE_LAST_UNIT]
        .into_iter()
        .filter_map(|re| re.captures(text))
        .min_by_key(|caps| caps.get(0).map_or(usize::MAX, |m| m.start()))?;
    captures_to_days(&first)
}

/// First explicit pattern cue, by precedence.
pub fn extract_pattern(text: &str) -> Option<TimePattern> {
    PATTERN_CUES
        .iter()
        .find(|(_, cues)| contains_any(text, cues))
        .map(|(pattern, _)| *pattern)
}

fn infer(text: &str) -> Option<(TimePattern, u32)> {
    INFERENCE_RULES
        .iter()
        .find(|rule| rule.terms.iter().all(|group| contains_any(text, group)))
        .map(|rule| ((rule.pattern)(text), rule.duration_days))
}

/// Resolve duration and pattern for the combined lowercase text.
/// Always yields a concrete pattern and a non-empty interpretation.
pub fn infer_time_course(text: &str) -> TimeCourse {
    let (duration, pattern, derived) = match (extract_duration(text), extract_pattern(text)) {
        (Some(days), Some(pattern)) => (days, pattern, false),
        (Some(days), None) => {
            let pattern = if days <= ACUTE_MAX_DAYS {
                TimePattern::Acute
            } else {
                TimePattern::Chronic
            };
            (days, pattern, false)
        }
        (None, Some(pattern)) => {
            let days = infer(text)
                .map(|(_, days)| days)
                .unwrap_or_else(|| default_duration(pattern));
            (days, pattern, true)
        }
        (None, None) => infer(text)
            .map(|(pattern, days)| (days, pattern, true))
            .unwrap_or((DEFAULT_DURATION_DAYS, TimePattern::Chronic, true)),
    };

    TimeCourse {
        duration_days: Some(duration),
        pattern,
        derived,
        interpretation: MessageTemplates::time_course(duration, pattern, derived),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_weeks_duration() {
        let tc = infer_time_course("fatigue for 3 weeks");
        assert_eq!(tc.duration_days, Some(21));
        assert!(!tc.derived);
        assert_eq!(tc.pattern, TimePattern::Chronic);
    }

    #[test]
    fn duration_variants() {
        assert_eq!(extract_duration("since two months"), Some(60));
        assert_eq!(extract_duration("over the past couple of days"), Some(2));
        assert_eq!(extract_duration("for about a year"), Some(365));
        assert_eq!(extract_duration("started 5 days ago"), Some(5));
        assert_eq!(extract_duration("for several weeks"), Some(21));
        assert_eq!(extract_duration("fatigue"), None);
    }

    #[test]
    fn article_before_vague_count() {
        assert_eq!(extract_duration("fatigue for a few weeks"), Some(21));
        assert_eq!(extract_duration("fatigue for a couple of months"), Some(60));
        assert_eq!(extract_duration("for a week"), Some(7));
        assert_eq!(extract_duration("over an hour"), None);
    }

    #[test]
    fn last_unit_without_count() {
        assert_eq!(extract_duration("fatigue since last week"), Some(7));
        assert_eq!(extract_duration("over the past month"), Some(30));
        assert_eq!(extract_duration("for the last 3 weeks"), Some(21));
        assert_eq!(extract_duration("tired at last weekend"), None);
    }

    #[test]
    fn ranges_take_upper_bound() {
        assert_eq!(extract_duration("fatigue for 2-3 weeks"), Some(21));
        assert_eq!(extract_duration("for two to three months"), Some(90));
        assert_eq!(extract_duration("started 4-5 days ago"), Some(5));
    }

    #[test]
    fn everyday_phrasings_are_explicit() {
        for (text, days) in [
            ("fatigue for a few weeks", 21),
            ("fatigue for a couple of months", 60),
            ("fatigue since last week", 7),
            ("fatigue for 2-3 weeks", 21),
        ] {
            let tc = infer_time_course(text);
            assert_eq!(tc.duration_days, Some(days), "{text}");
            assert!(!tc.derived, "{text}");
        }
        assert_eq!(infer_time_course("fatigue since last week").pattern, TimePattern::Acute);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(extract_duration("2 days ago, but tired for 3 months"), Some(2));
        assert_eq!(extract_duration("for 3 months, worse 2 days ago"), Some(90));
    }

    #[test]
    fn huge_counts_saturate() {
        assert_eq!(extract_duration("for 99999999999 years"), None);
        assert_eq!(extract_duration("for 4000000000 years"), Some(u32::MAX));
    }

    #[test]
    fn short_duration_reads_acute() {
        let tc = infer_time_course("fever for 4 days");
        assert_eq!(tc.pattern, TimePattern::Acute);
        assert!(!tc.derived);
    }

    #[test]
    fn pattern_precedence() {
        assert_eq!(
            extract_pattern("it comes and goes but is getting worse"),
            Some(TimePattern::Relapsing)
        );
        assert_eq!(extract_pattern("getting worse constantly"), Some(TimePattern::Progressive));
        assert_eq!(extract_pattern("started suddenly"), Some(TimePattern::Acute));
        assert_eq!(extract_pattern("fatigue"), None);
    }

    #[test]
    fn explicit_pattern_and_duration() {
        let tc = infer_time_course("numbness, it comes and goes, for 6 months");
        assert_eq!(tc.pattern, TimePattern::Relapsing);
        assert_eq!(tc.duration_days, Some(180));
        assert!(!tc.derived);
    }

    #[test]
    fn pattern_only_borrows_inferred_duration() {
        let tc = infer_time_course("numbness, flares up");
        assert_eq!(tc.pattern, TimePattern::Relapsing);
        assert_eq!(tc.duration_days, Some(45));
        assert!(tc.derived);
    }

    #[test]
    fn inference_rules() {
        let tc = infer_time_course("weight loss, heart palpitations, anxiety");
        assert_eq!((tc.pattern, tc.duration_days), (TimePattern::Chronic, Some(21)));
        assert!(tc.derived);

        let tc = infer_time_course("tremor, anxiety");
        assert_eq!((tc.pattern, tc.duration_days), (TimePattern::Chronic, Some(60)));

        let tc = infer_time_course("numbness, blurred vision");
        assert_eq!((tc.pattern, tc.duration_days), (TimePattern::Chronic, Some(45)));

        let tc = infer_time_course("chest pain, fainting, difficulty breathing");
        assert_eq!((tc.pattern, tc.duration_days), (TimePattern::Acute, Some(2)));
    }

    #[test]
    fn default_is_chronic_thirty_days() {
        let tc = infer_time_course("fatigue");
        assert_eq!(tc.pattern, TimePattern::Chronic);
        assert_eq!(tc.duration_days, Some(30));
        assert!(tc.derived);
        assert!(!tc.interpretation.is_empty());
    }

    #[test]
    fn never_unknown_and_never_unavailable() {
        for text in ["", "fatigue", "rash for 2 days", "flare", "xyz 3 weeks ago"] {
            let tc = infer_time_course(text);
            assert_ne!(tc.pattern, TimePattern::Unknown);
            assert!(!tc.interpretation.is_empty());
            assert!(!tc.interpretation.to_lowercase().contains("unavailable"));
            assert!(!tc.interpretation.to_lowercase().contains("not available"));
        }
    }
}
