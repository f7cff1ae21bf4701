use std::sync::LazyLock;

use regex::Regex;

use super::helpers::{matches_all, parse_count, COUNT_WORDS};
use super::types::{PatternMatch, RedFlag, RedFlagMultipliers, RiskCategory};

// ---------------------------------------------------------------------------
// Rule definitions
// ---------------------------------------------------------------------------

/// What fires a rule, evaluated over the combined lowercase text.
#[derive(Clone, Copy)]
pub enum Trigger {
    /// Every group needs at least one term present.
    AllOf(&'static [&'static [&'static str]]),
    Custom(fn(&str) -> bool),
}

impl Trigger {
    pub fn fires(&self, text: &str) -> bool {
        match self {
            Self::AllOf(groups) => matches_all(text, groups),
            Self::Custom(check) => check(text),
        }
    }
}

pub struct RedFlagRule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub severity: f64,
    pub urgent: bool,
    /// Additive boosts applied to the multipliers when the rule fires.
    pub boosts: &'static [(RiskCategory, f64)],
}

pub struct PatternRule {
    pub name: &'static str,
    pub trigger: &'static [&'static [&'static str]],
    pub conditions: &'static [&'static str],
    pub multiplier: f64,
}

const FAINTING: &[&str] = &[
    "fainting",
    "fainted",
    "passed out",
    "syncope",
    "loss of consciousness",
];
const BREATHING: &[&str] = &[
    "difficulty breathing",
    "trouble breathing",
    "can't breathe",
    "cannot breathe",
    "struggling to breathe",
];
const WEIGHT_LOSS: &[&str] = &["weight loss", "losing weight", "lost weight"];
const NEURO_DEFICIT: &[&str] = &["numbness", "tingling", "weakness", "vision", "balance"];
const RACING_HEART: &[&str] = &["palpitations", "racing heart", "rapid heartbeat"];

pub const RED_FLAG_RULES: &[RedFlagRule] = &[
    RedFlagRule {
        name: "Rapid weight loss",
        trigger: Trigger::Custom(is_rapid_weight_loss),
        severity: 0.8,
        urgent: false,
        boosts: &[(RiskCategory::Malignancy, 1.5)],
    },
    RedFlagRule {
        name: "Unexplained weight loss",
        trigger: Trigger::AllOf(&[
            WEIGHT_LOSS,
            &["unexplained", "unintentional", "without trying", "not trying", "not dieting"],
        ]),
        severity: 0.7,
        urgent: false,
        boosts: &[(RiskCategory::Malignancy, 1.0)],
    },
    RedFlagRule {
        name: "Cardiopulmonary warning signs",
        trigger: Trigger::AllOf(&[
            &["chest pain", "chest pressure", "chest tightness"],
            &[
                "fainting",
                "fainted",
                "passed out",
                "shortness of breath",
                "difficulty breathing",
                "trouble breathing",
                "can't breathe",
            ],
        ]),
        severity: 1.0,
        urgent: true,
        boosts: &[],
    },
    RedFlagRule {
        name: "Syncope",
        trigger: Trigger::AllOf(&[FAINTING]),
        severity: 0.9,
        urgent: true,
        boosts: &[(RiskCategory::Dysautonomia, 1.0)],
    },
    RedFlagRule {
        name: "Breathing difficulty",
        trigger: Trigger::AllOf(&[BREATHING]),
        severity: 0.9,
        urgent: true,
        boosts: &[],
    },
    RedFlagRule {
        name: "B symptoms",
        trigger: Trigger::AllOf(&[&["night sweats"], &["fever", "weight loss"]]),
        severity: 0.7,
        urgent: false,
        boosts: &[
            (RiskCategory::Malignancy, 1.0),
            (RiskCategory::ChronicInfection, 1.0),
        ],
    },
    RedFlagRule {
        name: "Bleeding",
        trigger: Trigger::AllOf(&[&[
            "coughing blood",
            "coughing up blood",
            "blood in stool",
            "bloody stool",
            "vomiting blood",
            "blood in urine",
        ]]),
        severity: 0.9,
        urgent: true,
        boosts: &[
            (RiskCategory::Malignancy, 1.0),
            (RiskCategory::ChronicInfection, 0.5),
        ],
    },
    RedFlagRule {
        name: "Focal neurological deficit",
        trigger: Trigger::AllOf(&[
            &["numbness", "tingling", "weakness"],
            &["vision", "balance", "one side", "one eye", "one arm", "one leg"],
        ]),
        severity: 0.7,
        urgent: false,
        boosts: &[(RiskCategory::Ms, 1.5)],
    },
    RedFlagRule {
        name: "Sudden neurological deficit",
        trigger: Trigger::AllOf(&[
            &["sudden", "abrupt"],
            &[
                "numbness",
                "weakness",
                "vision loss",
                "slurred speech",
                "facial droop",
                "confusion",
            ],
        ]),
        severity: 1.0,
        urgent: true,
        boosts: &[(RiskCategory::Ms, 0.5)],
    },
    RedFlagRule {
        name: "Orthostatic intolerance",
        trigger: Trigger::AllOf(&[
            &["dizziness", "lightheadedness", "fainting"],
            &["standing", "stand up", "upright", "getting up"],
        ]),
        severity: 0.5,
        urgent: false,
        boosts: &[(RiskCategory::Dysautonomia, 1.5)],
    },
    RedFlagRule {
        name: "Adrenal insufficiency signs",
        trigger: Trigger::AllOf(&[
            &["salt craving"],
            &["darkening skin", "low blood pressure", "dizziness", "fatigue"],
        ]),
        severity: 0.7,
        urgent: false,
        boosts: &[(RiskCategory::AdrenalInsufficiency, 1.5)],
    },
    RedFlagRule {
        name: "Inflammatory arthritis signs",
        trigger: Trigger::AllOf(&[
            &["joint pain", "joint swelling", "swollen joints"],
            &["morning stiffness", "symmetric", "both hands", "both wrists"],
        ]),
        severity: 0.5,
        urgent: false,
        boosts: &[(RiskCategory::Autoimmune, 1.0)],
    },
    RedFlagRule {
        name: "Prolonged fever",
        trigger: Trigger::AllOf(&[
            &["fever"],
            &["weeks", "months", "persistent", "prolonged", "recurrent", "won't go away"],
        ]),
        severity: 0.6,
        urgent: false,
        boosts: &[(RiskCategory::ChronicInfection, 1.5)],
    },
];

pub const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        name: "Migratory joint pain with transient rash",
        trigger: &[
            &["joint pain", "joint swelling", "aching joints"],
            &["rash"],
            &["migrat", "moves", "moving", "comes and goes", "transient", "different joints"],
        ],
        conditions: &["Systemic Lupus Erythematosus", "Rheumatoid Arthritis", "Lyme Disease"],
        multiplier: 1.5,
    },
    PatternRule {
        name: "Hyperadrenergic",
        trigger: &[RACING_HEART, &["tremor", "sweating", "heat intolerance", "anxiety"]],
        conditions: &["Hyperthyroidism", "Graves' Disease", "Pheochromocytoma"],
        multiplier: 1.4,
    },
    PatternRule {
        name: "Hypometabolic",
        trigger: &[
            &["weight gain"],
            &["cold intolerance", "fatigue", "dry skin", "constipation"],
        ],
        conditions: &["Hypothyroidism", "Hashimoto's Thyroiditis"],
        multiplier: 1.4,
    },
    PatternRule {
        name: "Orthostatic",
        trigger: &[
            &["dizziness", "lightheadedness", "fainting"],
            &[
                "racing heart",
                "palpitations",
                "rapid heartbeat",
                "standing",
                "stand up",
                "low blood pressure",
            ],
        ],
        conditions: &["Postural Orthostatic Tachycardia Syndrome", "Orthostatic Hypotension"],
        multiplier: 1.5,
    },
    PatternRule {
        name: "Relapsing neurological",
        trigger: &[
            NEURO_DEFICIT,
            &[
                "comes and goes",
                "flare",
                "relaps",
                "episod",
                "intermittent",
                "remission",
                "on and off",
            ],
        ],
        conditions: &["Multiple Sclerosis", "Myasthenia Gravis"],
        multiplier: 1.5,
    },
    PatternRule {
        name: "Constitutional B symptoms",
        trigger: &[&["night sweats", "fever"], &["weight loss", "swollen lymph nodes"]],
        conditions: &["Lymphoma", "Leukemia", "Tuberculosis"],
        multiplier: 1.5,
    },
    PatternRule {
        name: "Adrenal",
        trigger: &[
            &["salt craving", "darkening skin"],
            &["fatigue", "low blood pressure", "dizziness", "weight loss"],
        ],
        conditions: &["Addison's Disease"],
        multiplier: 1.6,
    },
    PatternRule {
        name: "Osmotic",
        trigger: &[&["excessive thirst"], &["frequent urination"]],
        conditions: &["Type 1 Diabetes", "Type 2 Diabetes"],
        multiplier: 1.5,
    },
    PatternRule {
        name: "Malabsorption",
        trigger: &[&["bloating"], &["diarrhea"]],
        conditions: &["Celiac Disease"],
        multiplier: 1.4,
    },
    PatternRule {
        name: "Neuropathy with pallor",
        trigger: &[&["tingling", "numbness"], &["pale skin", "pallor"]],
        conditions: &["Vitamin B12 Deficiency"],
        multiplier: 1.3,
    },
    PatternRule {
        name: "Post-exertional malaise",
        trigger: &[
            &[
                "after exercise",
                "after exertion",
                "post-exertional",
                "worse after activity",
                "exercise intolerance",
            ],
            &["fatigue", "exhaust", "brain fog"],
        ],
        conditions: &["Chronic Fatigue Syndrome", "Postural Orthostatic Tachycardia Syndrome"],
        multiplier: 1.4,
    },
];

// ---------------------------------------------------------------------------
// Quantified weight loss
// ---------------------------------------------------------------------------

/// "lost 5 kg in 2 months", "down 10 lbs over the last three weeks".
/// The amount must follow a loss cue so quantified gains never match.
static RE_WEIGHT_LOSS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:lost|losing|lose|dropped|dropping|down|shed)\s+(?:(?:about|around|almost|nearly|over|roughly)\s+)?(\d+(?:\.\d+)?)\s*(kg|kgs|kilos?|kilograms?|lbs?|pounds?)\b.{{0,40}}?\b(?:in|over|within)\s+(?:the\s+)?(?:last\s+|past\s+)?(?:({COUNT_WORDS})\s+)?(day|week|month|year)s?\b"
    ))
    .unwrap()
});

const RAPID_LOSS_KG: f64 = 2.0;
const RAPID_LOSS_LB: f64 = 4.4;
const RAPID_LOSS_MAX_DAYS: u32 = 60;

/// At least 2 kg (4.4 lb) lost within at most two months.
pub fn is_rapid_weight_loss(text: &str) -> bool {
    RE_WEIGHT_LOSS.captures_iter(text).any(|caps| {
        let Some(amount) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
            return false;
        };
        let metric = caps.get(2).is_some_and(|m| m.as_str().starts_with('k'));
        let heavy = if metric {
            amount >= RAPID_LOSS_KG
        } else {
            amount >= RAPID_LOSS_LB
        };
        let count = caps
            .get(3)
            .map_or(Some(1), |m| parse_count(m.as_str()))
            .unwrap_or(1);
        let unit_days = match caps.get(4).map(|m| m.as_str()) {
            Some("day") => 1,
            Some("week") => 7,
            Some("month") => 30,
            _ => 365,
        };
        heavy && count.saturating_mul(unit_days) <= RAPID_LOSS_MAX_DAYS
    })
}

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

/// Evaluate every red-flag rule. Returns one flag per rule (detected or not)
/// and the accumulated multipliers.
pub fn detect_red_flags(text: &str) -> (Vec<RedFlag>, RedFlagMultipliers) {
    let mut multipliers = RedFlagMultipliers::default();
    let flags = RED_FLAG_RULES
        .iter()
        .map(|rule| {
            let detected = rule.trigger.fires(text);
            if detected {
                for &(category, amount) in rule.boosts {
                    multipliers.boost(category, amount);
                }
                tracing::debug!(flag = rule.name, urgent = rule.urgent, "Red flag detected");
            }
            RedFlag {
                name: rule.name.to_string(),
                detected,
                severity: rule.severity,
                urgent: rule.urgent,
            }
        })
        .collect();
    (flags, multipliers)
}

/// Evaluate every pattern rule, one match record per rule.
pub fn detect_patterns(text: &str) -> Vec<PatternMatch> {
    PATTERN_RULES
        .iter()
        .map(|rule| PatternMatch {
            pattern_name: rule.name.to_string(),
            detected: matches_all(text, rule.trigger),
            affected_conditions: rule.conditions.iter().map(|c| c.to_string()).collect(),
            multiplier: rule.multiplier,
        })
        .collect()
}

/// Product of the multipliers of detected patterns naming `condition`.
pub fn pattern_multiplier(patterns: &[PatternMatch], condition: &str) -> f64 {
    patterns
        .iter()
        .filter(|p| p.detected && p.affected_conditions.iter().any(|c| c == condition))
        .map(|p| p.multiplier)
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(text: &str) -> Vec<String> {
        detect_red_flags(text)
            .0
            .into_iter()
            .filter(|f| f.detected)
            .map(|f| f.name)
            .collect()
    }

    #[test]
    fn rapid_weight_loss_metric_and_imperial() {
        assert!(is_rapid_weight_loss("i lost 5 kg in 2 months"));
        assert!(is_rapid_weight_loss("down 10 lbs over the last three weeks"));
        assert!(is_rapid_weight_loss("lost 3 kilos in a month"));
        assert!(is_rapid_weight_loss("dropped 2 kg within the past 60 days"));
        assert!(is_rapid_weight_loss("i've lost about 3 kg in six weeks"));
    }

    #[test]
    fn weight_gain_is_not_rapid_loss() {
        assert!(!is_rapid_weight_loss("gained 5 kg in 2 months"));
        assert!(!is_rapid_weight_loss("put on 10 lbs over the last three weeks"));
        assert!(!is_rapid_weight_loss("5 kg in 2 months"));

        let (flags, m) = detect_red_flags("weight gain, fatigue gained 5 kg in 2 months");
        assert!(!flags.iter().any(|f| f.name == "Rapid weight loss" && f.detected));
        assert!((m.malignancy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn slow_or_small_weight_loss_is_not_rapid() {
        assert!(!is_rapid_weight_loss("lost 1 kg in 2 months"));
        assert!(!is_rapid_weight_loss("lost 4 lbs in a month"));
        assert!(!is_rapid_weight_loss("lost 5 kg in 6 months"));
        assert!(!is_rapid_weight_loss("lost 8 kg in a year"));
        assert!(!is_rapid_weight_loss("weight loss"));
    }

    #[test]
    fn rapid_weight_loss_boosts_malignancy() {
        let (flags, m) = detect_red_flags("weight loss lost 6 kg in 3 weeks");
        assert!(flags.iter().any(|f| f.name == "Rapid weight loss" && f.detected));
        assert!((m.malignancy - 2.5).abs() < 1e-9);
    }

    #[test]
    fn cardiopulmonary_scenario_is_urgent() {
        let (flags, _) = detect_red_flags("chest pain, fainting, difficulty breathing");
        let urgent: Vec<&RedFlag> = flags.iter().filter(|f| f.detected && f.urgent).collect();
        assert!(urgent.len() >= 3);
        assert!(urgent.iter().any(|f| f.name == "Cardiopulmonary warning signs"));
    }

    #[test]
    fn boosts_accumulate_across_rules() {
        let (_, m) = detect_red_flags("night sweats, fever, coughing blood, fever for weeks");
        // B symptoms +1.0, bleeding +1.0
        assert!((m.malignancy - 3.0).abs() < 1e-9);
        // B symptoms +1.0, bleeding +0.5, prolonged fever +1.5
        assert!((m.chronic_infection - 4.0).abs() < 1e-9);
        assert!((m.ms - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_rule_is_evaluated() {
        let (flags, m) = detect_red_flags("fatigue");
        assert_eq!(flags.len(), RED_FLAG_RULES.len());
        assert!(flags.iter().all(|f| !f.detected));
        assert_eq!(m, RedFlagMultipliers::default());
    }

    #[test]
    fn orthostatic_needs_posture_context() {
        assert!(!detected("dizziness").contains(&"Orthostatic intolerance".to_string()));
        assert!(
            detected("dizziness when standing").contains(&"Orthostatic intolerance".to_string())
        );
    }

    #[test]
    fn hyperadrenergic_pattern_for_palpitations_with_anxiety() {
        let patterns = detect_patterns("weight loss, heart palpitations, anxiety");
        let hyper = patterns.iter().find(|p| p.pattern_name == "Hyperadrenergic").unwrap();
        assert!(hyper.detected);
        assert!((pattern_multiplier(&patterns, "Hyperthyroidism") - 1.4).abs() < 1e-9);
        assert!((pattern_multiplier(&patterns, "Lymphoma") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn migratory_joint_pain_with_rash_boosts_autoimmune_conditions() {
        let patterns = detect_patterns("joint pain, rash, pain moves between different joints");
        let migratory = patterns
            .iter()
            .find(|p| p.pattern_name == "Migratory joint pain with transient rash")
            .unwrap();
        assert!(migratory.detected);
        for condition in ["Systemic Lupus Erythematosus", "Rheumatoid Arthritis", "Lyme Disease"] {
            assert!((pattern_multiplier(&patterns, condition) - 1.5).abs() < 1e-9);
        }
        assert_eq!(pattern_multiplier(&patterns, "Hypothyroidism"), 1.0);
    }

    #[test]
    fn migratory_pattern_needs_rash() {
        let patterns = detect_patterns("joint pain that moves between different joints");
        assert_eq!(pattern_multiplier(&patterns, "Lyme Disease"), 1.0);
    }

    #[test]
    fn post_exertional_malaise_pattern() {
        let patterns = detect_patterns("fatigue, brain fog, worse after activity");
        let pem = patterns
            .iter()
            .find(|p| p.pattern_name == "Post-exertional malaise")
            .unwrap();
        assert!(pem.detected);
        assert!((pattern_multiplier(&patterns, "Chronic Fatigue Syndrome") - 1.4).abs() < 1e-9);
        assert_eq!(pattern_multiplier(&patterns, "Celiac Disease"), 1.0);
    }

    #[test]
    fn pattern_multipliers_compose_multiplicatively() {
        let patterns = detect_patterns("dizziness, racing heart, fatigue, exercise intolerance");
        let pots = pattern_multiplier(&patterns, "Postural Orthostatic Tachycardia Syndrome");
        assert!((pots - 1.5 * 1.4).abs() < 1e-9);
    }

    #[test]
    fn no_patterns_means_neutral_multiplier() {
        let patterns = detect_patterns("headache");
        assert!(patterns.iter().all(|p| !p.detected));
        assert_eq!(pattern_multiplier(&patterns, "Celiac Disease"), 1.0);
    }
}
