//! Built-in reference tables.
//!
//! Declaration order is significant: fuzzy symptom lookup resolves to the first
//! matching key, and ranking ties fall back to condition order.

use super::types::BodySystem as S;
use super::types::ClusterTag::{self, *};
use super::types::RiskCategory;
use super::types::TimePattern::{self, *};

/// `(symptom, severity_weight, specificity_weight)`
pub const SYMPTOM_WEIGHTS: &[(&str, f64, f64)] = &[
    ("fatigue", 0.4, 0.1),
    ("weight loss", 0.7, 0.5),
    ("weight gain", 0.5, 0.4),
    ("palpitations", 0.6, 0.5),
    ("racing heart", 0.6, 0.5),
    ("rapid heartbeat", 0.6, 0.5),
    ("anxiety", 0.4, 0.3),
    ("tremor", 0.5, 0.6),
    ("heat intolerance", 0.5, 0.7),
    ("cold intolerance", 0.5, 0.7),
    ("night sweats", 0.6, 0.6),
    ("sweating", 0.4, 0.4),
    ("fever", 0.6, 0.3),
    ("chest pain", 0.9, 0.4),
    ("fainting", 0.9, 0.5),
    ("difficulty breathing", 0.9, 0.4),
    ("shortness of breath", 0.8, 0.4),
    ("dizziness", 0.5, 0.3),
    ("lightheadedness", 0.5, 0.4),
    ("low blood pressure", 0.6, 0.5),
    ("exercise intolerance", 0.5, 0.5),
    ("headache", 0.4, 0.2),
    ("numbness", 0.6, 0.6),
    ("tingling", 0.5, 0.5),
    ("muscle weakness", 0.6, 0.5),
    ("vision changes", 0.7, 0.6),
    ("blurred vision", 0.6, 0.5),
    ("double vision", 0.8, 0.7),
    ("balance problems", 0.6, 0.5),
    ("memory problems", 0.5, 0.4),
    ("brain fog", 0.4, 0.3),
    ("depression", 0.4, 0.3),
    ("insomnia", 0.3, 0.3),
    ("joint pain", 0.5, 0.4),
    ("joint swelling", 0.6, 0.6),
    ("morning stiffness", 0.5, 0.6),
    ("muscle pain", 0.4, 0.3),
    ("rash", 0.4, 0.3),
    ("butterfly rash", 0.6, 0.9),
    ("hair loss", 0.4, 0.4),
    ("dry skin", 0.3, 0.3),
    ("darkening skin", 0.6, 0.8),
    ("pale skin", 0.4, 0.4),
    ("easy bruising", 0.6, 0.6),
    ("salt craving", 0.5, 0.8),
    ("bulging eyes", 0.6, 0.9),
    ("goiter", 0.6, 0.8),
    ("excessive thirst", 0.5, 0.7),
    ("frequent urination", 0.5, 0.6),
    ("increased appetite", 0.4, 0.5),
    ("irregular periods", 0.4, 0.5),
    ("nausea", 0.4, 0.2),
    ("vomiting", 0.5, 0.2),
    ("abdominal pain", 0.5, 0.3),
    ("bloating", 0.3, 0.3),
    ("diarrhea", 0.4, 0.3),
    ("constipation", 0.3, 0.3),
    ("swollen lymph nodes", 0.6, 0.6),
    ("cough", 0.4, 0.2),
    ("persistent cough", 0.6, 0.4),
    ("coughing blood", 1.0, 0.8),
    ("sore throat", 0.3, 0.2),
];

pub struct DiseaseSeed {
    pub name: &'static str,
    pub clusters: &'static [ClusterTag],
    pub relevance: &'static [(&'static str, f64)],
    pub description: &'static str,
    pub reference_term: &'static str,
    pub course: &'static [TimePattern],
    pub risk: Option<RiskCategory>,
}

pub const DISEASES: &[DiseaseSeed] = &[
    DiseaseSeed {
        name: "Hyperthyroidism",
        clusters: &[Endocrine],
        relevance: &[
            ("weight loss", 0.9),
            ("palpitations", 0.9),
            ("racing heart", 0.8),
            ("anxiety", 0.8),
            ("tremor", 0.8),
            ("heat intolerance", 0.9),
            ("sweating", 0.7),
            ("increased appetite", 0.7),
            ("insomnia", 0.5),
            ("diarrhea", 0.4),
            ("fatigue", 0.4),
            ("irregular periods", 0.3),
        ],
        description: "Overproduction of thyroid hormone that speeds up metabolism.",
        reference_term: "Hyperthyroidism",
        course: &[Progressive, Chronic],
        risk: None,
    },
    DiseaseSeed {
        name: "Graves' Disease",
        clusters: &[Endocrine, Autoimmune],
        relevance: &[
            ("weight loss", 0.8),
            ("palpitations", 0.9),
            ("racing heart", 0.8),
            ("anxiety", 0.7),
            ("tremor", 0.8),
            ("heat intolerance", 0.8),
            ("bulging eyes", 1.0),
            ("goiter", 0.8),
            ("sweating", 0.6),
            ("double vision", 0.5),
            ("fatigue", 0.3),
        ],
        description: "Autoimmune stimulation of the thyroid gland, the most common cause of hyperthyroidism.",
        reference_term: "Graves Disease",
        course: &[Progressive, Chronic],
        risk: Some(RiskCategory::Autoimmune),
    },
    DiseaseSeed {
        name: "Hypothyroidism",
        clusters: &[Endocrine, MetabolicNutritional],
        relevance: &[
            ("fatigue", 0.8),
            ("weight gain", 0.9),
            ("cold intolerance", 0.9),
            ("dry skin", 0.7),
            ("hair loss", 0.6),
            ("constipation", 0.6),
            ("brain fog", 0.5),
            ("depression", 0.5),
            ("memory problems", 0.4),
            ("muscle pain", 0.4),
            ("irregular periods", 0.4),
        ],
        description: "Underactive thyroid gland that slows metabolism.",
        reference_term: "Hypothyroidism",
        course: &[Chronic, Progressive],
        risk: None,
    },
    DiseaseSeed {
        name: "Hashimoto's Thyroiditis",
        clusters: &[Endocrine, Autoimmune],
        relevance: &[
            ("fatigue", 0.8),
            ("weight gain", 0.8),
            ("cold intolerance", 0.8),
            ("goiter", 0.7),
            ("dry skin", 0.6),
            ("hair loss", 0.6),
            ("constipation", 0.5),
            ("joint pain", 0.4),
            ("depression", 0.4),
            ("brain fog", 0.4),
        ],
        description: "Autoimmune inflammation of the thyroid that gradually reduces hormone output.",
        reference_term: "Hashimoto Disease",
        course: &[Chronic],
        risk: Some(RiskCategory::Autoimmune),
    },
    DiseaseSeed {
        name: "Type 1 Diabetes",
        clusters: &[Endocrine, Autoimmune, MetabolicNutritional],
        relevance: &[
            ("excessive thirst", 1.0),
            ("frequent urination", 1.0),
            ("weight loss", 0.8),
            ("increased appetite", 0.6),
            ("fatigue", 0.6),
            ("blurred vision", 0.6),
            ("nausea", 0.3),
        ],
        description: "Autoimmune loss of insulin production leading to high blood sugar.",
        reference_term: "Diabetes Mellitus, Type 1",
        course: &[Acute, Progressive],
        risk: Some(RiskCategory::Autoimmune),
    },
    DiseaseSeed {
        name: "Type 2 Diabetes",
        clusters: &[Endocrine, MetabolicNutritional],
        relevance: &[
            ("excessive thirst", 0.9),
            ("frequent urination", 0.9),
            ("fatigue", 0.6),
            ("blurred vision", 0.6),
            ("tingling", 0.5),
            ("numbness", 0.4),
            ("weight gain", 0.4),
        ],
        description: "Insulin resistance with progressively elevated blood sugar.",
        reference_term: "Diabetes Mellitus, Type 2",
        course: &[Chronic, Progressive],
        risk: None,
    },
    DiseaseSeed {
        name: "Addison's Disease",
        clusters: &[Endocrine, Autoimmune],
        relevance: &[
            ("salt craving", 1.0),
            ("darkening skin", 1.0),
            ("fatigue", 0.8),
            ("low blood pressure", 0.8),
            ("weight loss", 0.7),
            ("dizziness", 0.6),
            ("muscle weakness", 0.6),
            ("nausea", 0.5),
            ("abdominal pain", 0.5),
            ("depression", 0.3),
        ],
        description: "Adrenal insufficiency with low cortisol and aldosterone production.",
        reference_term: "Addison Disease",
        course: &[Chronic, Progressive],
        risk: Some(RiskCategory::AdrenalInsufficiency),
    },
    DiseaseSeed {
        name: "Postural Orthostatic Tachycardia Syndrome",
        clusters: &[AutonomicDysfunction],
        relevance: &[
            ("dizziness", 0.9),
            ("lightheadedness", 0.9),
            ("racing heart", 0.9),
            ("palpitations", 0.8),
            ("exercise intolerance", 0.8),
            ("fainting", 0.7),
            ("fatigue", 0.7),
            ("brain fog", 0.6),
            ("shortness of breath", 0.4),
            ("nausea", 0.4),
            ("headache", 0.3),
        ],
        description: "Excessive heart-rate rise on standing caused by autonomic dysregulation.",
        reference_term: "Postural Orthostatic Tachycardia Syndrome",
        course: &[Chronic, Relapsing],
        risk: Some(RiskCategory::Dysautonomia),
    },
    DiseaseSeed {
        name: "Orthostatic Hypotension",
        clusters: &[AutonomicDysfunction],
        relevance: &[
            ("dizziness", 0.9),
            ("lightheadedness", 0.9),
            ("low blood pressure", 0.9),
            ("fainting", 0.8),
            ("blurred vision", 0.4),
            ("fatigue", 0.4),
            ("muscle weakness", 0.3),
        ],
        description: "Drop in blood pressure on standing that reduces blood flow to the brain.",
        reference_term: "Hypotension, Orthostatic",
        course: &[Relapsing, Chronic],
        risk: Some(RiskCategory::Dysautonomia),
    },
    DiseaseSeed {
        name: "Multiple Sclerosis",
        clusters: &[Neurologic, Autoimmune],
        relevance: &[
            ("numbness", 0.9),
            ("vision changes", 0.9),
            ("tingling", 0.8),
            ("double vision", 0.8),
            ("muscle weakness", 0.8),
            ("balance problems", 0.8),
            ("blurred vision", 0.7),
            ("fatigue", 0.6),
            ("dizziness", 0.4),
            ("memory problems", 0.4),
            ("brain fog", 0.4),
            ("depression", 0.3),
        ],
        description: "Immune-mediated demyelination of the central nervous system.",
        reference_term: "Multiple Sclerosis",
        course: &[Relapsing, Progressive],
        risk: Some(RiskCategory::Ms),
    },
    DiseaseSeed {
        name: "Myasthenia Gravis",
        clusters: &[Neurologic, Autoimmune],
        relevance: &[
            ("muscle weakness", 1.0),
            ("double vision", 0.9),
            ("fatigue", 0.6),
            ("difficulty breathing", 0.6),
            ("vision changes", 0.5),
        ],
        description: "Autoimmune disruption of nerve-to-muscle signalling causing fatigable weakness.",
        reference_term: "Myasthenia Gravis",
        course: &[Relapsing, Progressive],
        risk: Some(RiskCategory::Autoimmune),
    },
    DiseaseSeed {
        name: "Systemic Lupus Erythematosus",
        clusters: &[Autoimmune],
        relevance: &[
            ("butterfly rash", 1.0),
            ("joint pain", 0.8),
            ("fatigue", 0.7),
            ("rash", 0.7),
            ("fever", 0.6),
            ("joint swelling", 0.6),
            ("hair loss", 0.5),
            ("chest pain", 0.4),
            ("swollen lymph nodes", 0.3),
            ("pale skin", 0.3),
        ],
        description: "Multi-organ autoimmune disease with periods of flare and remission.",
        reference_term: "Lupus Erythematosus, Systemic",
        course: &[Relapsing, Chronic],
        risk: Some(RiskCategory::Autoimmune),
    },
    DiseaseSeed {
        name: "Rheumatoid Arthritis",
        clusters: &[Autoimmune],
        relevance: &[
            ("morning stiffness", 1.0),
            ("joint pain", 0.9),
            ("joint swelling", 0.9),
            ("fatigue", 0.5),
            ("fever", 0.3),
            ("muscle pain", 0.3),
        ],
        description: "Autoimmune inflammation of the joint lining, usually symmetric.",
        reference_term: "Arthritis, Rheumatoid",
        course: &[Chronic, Progressive],
        risk: Some(RiskCategory::Autoimmune),
    },
    DiseaseSeed {
        name: "Celiac Disease",
        clusters: &[Autoimmune, MetabolicNutritional],
        relevance: &[
            ("bloating", 0.9),
            ("diarrhea", 0.9),
            ("abdominal pain", 0.7),
            ("weight loss", 0.7),
            ("fatigue", 0.5),
            ("rash", 0.4),
            ("brain fog", 0.3),
            ("pale skin", 0.3),
            ("constipation", 0.3),
        ],
        description: "Immune reaction to gluten that damages the small intestine.",
        reference_term: "Celiac Disease",
        course: &[Chronic, Relapsing],
        risk: Some(RiskCategory::Autoimmune),
    },
    DiseaseSeed {
        name: "Iron Deficiency Anemia",
        clusters: &[MalignancyHematologic, MetabolicNutritional],
        relevance: &[
            ("fatigue", 0.9),
            ("pale skin", 0.9),
            ("shortness of breath", 0.6),
            ("dizziness", 0.5),
            ("palpitations", 0.5),
            ("exercise intolerance", 0.5),
            ("hair loss", 0.4),
            ("headache", 0.3),
            ("cold intolerance", 0.3),
        ],
        description: "Reduced red-cell production from insufficient iron.",
        reference_term: "Anemia, Iron-Deficiency",
        course: &[Chronic, Progressive],
        risk: None,
    },
    DiseaseSeed {
        name: "Vitamin B12 Deficiency",
        clusters: &[MetabolicNutritional, Neurologic],
        relevance: &[
            ("tingling", 0.9),
            ("numbness", 0.8),
            ("fatigue", 0.8),
            ("pale skin", 0.6),
            ("memory problems", 0.6),
            ("balance problems", 0.6),
            ("brain fog", 0.5),
            ("depression", 0.4),
            ("muscle weakness", 0.4),
        ],
        description: "Low B12 affecting blood formation and peripheral nerves.",
        reference_term: "Vitamin B 12 Deficiency",
        course: &[Chronic, Progressive],
        risk: None,
    },
    DiseaseSeed {
        name: "Lymphoma",
        clusters: &[MalignancyHematologic],
        relevance: &[
            ("swollen lymph nodes", 1.0),
            ("night sweats", 0.9),
            ("weight loss", 0.8),
            ("fever", 0.7),
            ("fatigue", 0.6),
            ("persistent cough", 0.3),
            ("shortness of breath", 0.3),
            ("easy bruising", 0.3),
        ],
        description: "Cancer of the lymphatic system.",
        reference_term: "Lymphoma",
        course: &[Progressive, Chronic],
        risk: Some(RiskCategory::Malignancy),
    },
    DiseaseSeed {
        name: "Leukemia",
        clusters: &[MalignancyHematologic],
        relevance: &[
            ("easy bruising", 0.9),
            ("fatigue", 0.7),
            ("pale skin", 0.7),
            ("fever", 0.6),
            ("night sweats", 0.6),
            ("weight loss", 0.6),
            ("swollen lymph nodes", 0.5),
            ("shortness of breath", 0.3),
        ],
        description: "Cancer of blood-forming tissue that crowds out normal blood cells.",
        reference_term: "Leukemia",
        course: &[Progressive],
        risk: Some(RiskCategory::Malignancy),
    },
    DiseaseSeed {
        name: "Pheochromocytoma",
        clusters: &[Endocrine, MalignancyHematologic],
        relevance: &[
            ("palpitations", 0.9),
            ("sweating", 0.9),
            ("headache", 0.8),
            ("racing heart", 0.7),
            ("anxiety", 0.6),
            ("tremor", 0.5),
            ("weight loss", 0.4),
        ],
        description: "Adrenal tumour releasing bursts of catecholamines.",
        reference_term: "Pheochromocytoma",
        course: &[Relapsing],
        risk: Some(RiskCategory::Malignancy),
    },
    DiseaseSeed {
        name: "Tuberculosis",
        clusters: &[Infectious],
        relevance: &[
            ("persistent cough", 1.0),
            ("coughing blood", 0.9),
            ("night sweats", 0.8),
            ("fever", 0.7),
            ("weight loss", 0.7),
            ("fatigue", 0.5),
            ("chest pain", 0.4),
            ("shortness of breath", 0.4),
        ],
        description: "Chronic bacterial infection that mainly affects the lungs.",
        reference_term: "Tuberculosis",
        course: &[Chronic, Progressive],
        risk: Some(RiskCategory::ChronicInfection),
    },
    DiseaseSeed {
        name: "Infectious Mononucleosis",
        clusters: &[Infectious],
        relevance: &[
            ("sore throat", 0.9),
            ("swollen lymph nodes", 0.9),
            ("fever", 0.8),
            ("fatigue", 0.8),
            ("headache", 0.3),
            ("muscle pain", 0.3),
            ("rash", 0.2),
        ],
        description: "Viral infection, usually Epstein-Barr, with fever and sore throat.",
        reference_term: "Infectious Mononucleosis",
        course: &[Acute],
        risk: None,
    },
    DiseaseSeed {
        name: "Lyme Disease",
        clusters: &[Infectious],
        relevance: &[
            ("rash", 0.8),
            ("joint pain", 0.7),
            ("fatigue", 0.6),
            ("fever", 0.6),
            ("headache", 0.5),
            ("muscle pain", 0.5),
            ("numbness", 0.4),
            ("memory problems", 0.3),
            ("palpitations", 0.3),
        ],
        description: "Tick-borne bacterial infection that can spread to joints, nerves and heart.",
        reference_term: "Lyme Disease",
        course: &[Relapsing, Chronic],
        risk: Some(RiskCategory::ChronicInfection),
    },
    DiseaseSeed {
        name: "Panic Disorder",
        clusters: &[Neurologic],
        relevance: &[
            ("anxiety", 1.0),
            ("palpitations", 0.8),
            ("racing heart", 0.8),
            ("shortness of breath", 0.6),
            ("chest pain", 0.5),
            ("sweating", 0.5),
            ("tremor", 0.5),
            ("dizziness", 0.5),
            ("nausea", 0.3),
        ],
        description: "Recurrent episodes of intense fear with strong physical symptoms.",
        reference_term: "Panic Disorder",
        course: &[Relapsing],
        risk: None,
    },
    DiseaseSeed {
        name: "Chronic Fatigue Syndrome",
        clusters: &[Neurologic, AutonomicDysfunction],
        relevance: &[
            ("fatigue", 1.0),
            ("exercise intolerance", 0.9),
            ("brain fog", 0.8),
            ("memory problems", 0.6),
            ("muscle pain", 0.6),
            ("insomnia", 0.5),
            ("headache", 0.4),
            ("dizziness", 0.4),
            ("sore throat", 0.3),
        ],
        description: "Long-lasting fatigue worsened by exertion and not relieved by rest.",
        reference_term: "Fatigue Syndrome, Chronic",
        course: &[Chronic, Relapsing],
        risk: Some(RiskCategory::Dysautonomia),
    },
];

/// Symptom to cluster tags. Unlisted symptoms fall to the catch-all cluster.
pub const SYMPTOM_CLUSTERS: &[(&str, &[ClusterTag])] = &[
    ("fatigue", &[MetabolicNutritional, Endocrine]),
    ("weight loss", &[Endocrine, MetabolicNutritional]),
    ("weight gain", &[Endocrine, MetabolicNutritional]),
    ("palpitations", &[Endocrine, AutonomicDysfunction]),
    ("racing heart", &[AutonomicDysfunction, Endocrine]),
    ("rapid heartbeat", &[AutonomicDysfunction, Endocrine]),
    ("anxiety", &[Neurologic, Endocrine]),
    ("tremor", &[Endocrine, Neurologic]),
    ("heat intolerance", &[Endocrine]),
    ("cold intolerance", &[Endocrine]),
    ("night sweats", &[Infectious]),
    ("sweating", &[Endocrine, AutonomicDysfunction]),
    ("fever", &[Infectious, Autoimmune]),
    ("chest pain", &[AutonomicDysfunction]),
    ("fainting", &[AutonomicDysfunction]),
    ("difficulty breathing", &[AutonomicDysfunction, Infectious]),
    ("shortness of breath", &[AutonomicDysfunction, MalignancyHematologic]),
    ("dizziness", &[AutonomicDysfunction]),
    ("lightheadedness", &[AutonomicDysfunction]),
    ("low blood pressure", &[AutonomicDysfunction, Endocrine]),
    ("exercise intolerance", &[AutonomicDysfunction, MetabolicNutritional]),
    ("headache", &[Neurologic]),
    ("numbness", &[Neurologic]),
    ("tingling", &[Neurologic, MetabolicNutritional]),
    ("muscle weakness", &[Neurologic, Autoimmune]),
    ("vision changes", &[Neurologic]),
    ("blurred vision", &[Neurologic, Endocrine]),
    ("double vision", &[Neurologic, Autoimmune]),
    ("balance problems", &[Neurologic]),
    ("memory problems", &[Neurologic]),
    ("brain fog", &[Neurologic, AutonomicDysfunction]),
    ("depression", &[Neurologic]),
    ("insomnia", &[Neurologic, Endocrine]),
    ("joint pain", &[Autoimmune]),
    ("joint swelling", &[Autoimmune]),
    ("morning stiffness", &[Autoimmune]),
    ("muscle pain", &[Autoimmune, Infectious]),
    ("rash", &[Autoimmune, Infectious]),
    ("butterfly rash", &[Autoimmune]),
    ("hair loss", &[Endocrine, Autoimmune]),
    ("dry skin", &[Endocrine]),
    ("darkening skin", &[Endocrine]),
    ("pale skin", &[MalignancyHematologic, MetabolicNutritional]),
    ("easy bruising", &[MalignancyHematologic]),
    ("salt craving", &[Endocrine]),
    ("bulging eyes", &[Endocrine, Autoimmune]),
    ("goiter", &[Endocrine]),
    ("excessive thirst", &[Endocrine, MetabolicNutritional]),
    ("frequent urination", &[Endocrine, MetabolicNutritional]),
    ("increased appetite", &[Endocrine, MetabolicNutritional]),
    ("irregular periods", &[Endocrine]),
    ("nausea", &[MetabolicNutritional]),
    ("vomiting", &[MetabolicNutritional]),
    ("abdominal pain", &[MetabolicNutritional, Autoimmune]),
    ("bloating", &[MetabolicNutritional, Autoimmune]),
    ("diarrhea", &[MetabolicNutritional, Infectious]),
    ("constipation", &[MetabolicNutritional, Endocrine]),
    ("swollen lymph nodes", &[MalignancyHematologic, Infectious]),
    ("cough", &[Infectious]),
    ("persistent cough", &[Infectious, MalignancyHematologic]),
    ("coughing blood", &[Infectious, MalignancyHematologic]),
    ("sore throat", &[Infectious]),
    // Second rows for weight loss and night sweats are unioned with the first.
    ("weight loss", &[MalignancyHematologic]),
    ("night sweats", &[MalignancyHematologic, Endocrine]),
];

/// Symptom to body systems. Unlisted symptoms fall to endocrine/metabolic.
pub const SYMPTOM_SYSTEMS: &[(&str, &[S])] = &[
    ("fatigue", &[S::EndocrineMetabolic, S::Hematologic]),
    ("weight loss", &[S::EndocrineMetabolic, S::Gastrointestinal]),
    ("weight gain", &[S::EndocrineMetabolic]),
    ("palpitations", &[S::Cardiac, S::Autonomic]),
    ("racing heart", &[S::Cardiac, S::Autonomic]),
    ("rapid heartbeat", &[S::Cardiac, S::Autonomic]),
    ("anxiety", &[S::Neurological]),
    ("tremor", &[S::Neurological, S::EndocrineMetabolic]),
    ("heat intolerance", &[S::EndocrineMetabolic, S::Autonomic]),
    ("cold intolerance", &[S::EndocrineMetabolic]),
    ("night sweats", &[S::Autonomic, S::Hematologic]),
    ("sweating", &[S::Autonomic]),
    ("fever", &[S::Autoimmune, S::Hematologic]),
    ("chest pain", &[S::Cardiac, S::Respiratory]),
    ("fainting", &[S::Cardiac, S::Autonomic, S::Neurological]),
    ("difficulty breathing", &[S::Respiratory, S::Cardiac]),
    ("shortness of breath", &[S::Respiratory, S::Cardiac]),
    ("dizziness", &[S::Autonomic, S::Neurological]),
    ("lightheadedness", &[S::Autonomic, S::Cardiac]),
    ("low blood pressure", &[S::Cardiac, S::Autonomic]),
    ("exercise intolerance", &[S::Cardiac, S::Autonomic]),
    ("headache", &[S::Neurological]),
    ("numbness", &[S::Neurological]),
    ("tingling", &[S::Neurological]),
    ("muscle weakness", &[S::Neurological]),
    ("vision changes", &[S::Neurological]),
    ("blurred vision", &[S::Neurological, S::EndocrineMetabolic]),
    ("double vision", &[S::Neurological]),
    ("balance problems", &[S::Neurological]),
    ("memory problems", &[S::Neurological]),
    ("brain fog", &[S::Neurological]),
    ("depression", &[S::Neurological]),
    ("insomnia", &[S::Neurological]),
    ("joint pain", &[S::Autoimmune]),
    ("joint swelling", &[S::Autoimmune]),
    ("morning stiffness", &[S::Autoimmune]),
    ("muscle pain", &[S::Autoimmune]),
    ("rash", &[S::Autoimmune]),
    ("butterfly rash", &[S::Autoimmune]),
    ("hair loss", &[S::EndocrineMetabolic, S::Autoimmune]),
    ("dry skin", &[S::EndocrineMetabolic]),
    ("darkening skin", &[S::EndocrineMetabolic]),
    ("pale skin", &[S::Hematologic]),
    ("easy bruising", &[S::Hematologic]),
    ("salt craving", &[S::EndocrineMetabolic]),
    ("bulging eyes", &[S::EndocrineMetabolic, S::Autoimmune]),
    ("goiter", &[S::EndocrineMetabolic]),
    ("excessive thirst", &[S::EndocrineMetabolic]),
    ("frequent urination", &[S::EndocrineMetabolic]),
    ("increased appetite", &[S::EndocrineMetabolic, S::Gastrointestinal]),
    ("irregular periods", &[S::EndocrineMetabolic]),
    ("nausea", &[S::Gastrointestinal]),
    ("vomiting", &[S::Gastrointestinal]),
    ("abdominal pain", &[S::Gastrointestinal]),
    ("bloating", &[S::Gastrointestinal]),
    ("diarrhea", &[S::Gastrointestinal]),
    ("constipation", &[S::Gastrointestinal]),
    ("swollen lymph nodes", &[S::Hematologic]),
    ("cough", &[S::Respiratory]),
    ("persistent cough", &[S::Respiratory]),
    ("coughing blood", &[S::Respiratory, S::Hematologic]),
    ("sore throat", &[S::Respiratory]),
];

/// Condition to the body systems it spans. Every condition needs an entry.
pub const CONDITION_SYSTEMS: &[(&str, &[S])] = &[
    ("Hyperthyroidism", &[S::EndocrineMetabolic, S::Cardiac, S::Neurological]),
    ("Graves' Disease", &[S::EndocrineMetabolic, S::Cardiac, S::Autoimmune]),
    ("Hypothyroidism", &[S::EndocrineMetabolic, S::Neurological]),
    ("Hashimoto's Thyroiditis", &[S::EndocrineMetabolic, S::Autoimmune]),
    ("Type 1 Diabetes", &[S::EndocrineMetabolic, S::Autoimmune]),
    ("Type 2 Diabetes", &[S::EndocrineMetabolic]),
    ("Addison's Disease", &[S::EndocrineMetabolic, S::Autonomic, S::Autoimmune]),
    ("Postural Orthostatic Tachycardia Syndrome", &[S::Autonomic, S::Cardiac, S::Neurological]),
    ("Orthostatic Hypotension", &[S::Autonomic, S::Cardiac]),
    ("Multiple Sclerosis", &[S::Neurological, S::Autoimmune]),
    ("Myasthenia Gravis", &[S::Neurological, S::Autoimmune]),
    ("Systemic Lupus Erythematosus", &[S::Autoimmune, S::Hematologic, S::Cardiac]),
    ("Rheumatoid Arthritis", &[S::Autoimmune]),
    ("Celiac Disease", &[S::Gastrointestinal, S::Autoimmune]),
    ("Iron Deficiency Anemia", &[S::Hematologic, S::Cardiac]),
    ("Vitamin B12 Deficiency", &[S::Hematologic, S::Neurological]),
    ("Lymphoma", &[S::Hematologic, S::Respiratory]),
    ("Leukemia", &[S::Hematologic]),
    ("Pheochromocytoma", &[S::EndocrineMetabolic, S::Cardiac, S::Autonomic]),
    ("Tuberculosis", &[S::Respiratory]),
    ("Infectious Mononucleosis", &[S::Hematologic, S::Respiratory]),
    ("Lyme Disease", &[S::Neurological, S::Autoimmune, S::Cardiac]),
    ("Panic Disorder", &[S::Neurological, S::Cardiac, S::Respiratory]),
    ("Chronic Fatigue Syndrome", &[S::Neurological, S::Autonomic]),
];
