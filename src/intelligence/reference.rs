use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::normalize::{match_key, union_tags, KeyedTable};
use super::tables;
use super::types::{BodySystem, ClusterTag, DiseaseEntry, EngineError, SymptomWeight};

pub const SYMPTOM_WEIGHTS_FILE: &str = "symptom_weights.json";
pub const DISEASES_FILE: &str = "diseases.json";
pub const SYMPTOM_CLUSTERS_FILE: &str = "symptom_clusters.json";
pub const SYMPTOM_SYSTEMS_FILE: &str = "symptom_systems.json";
pub const CONDITION_SYSTEMS_FILE: &str = "condition_systems.json";

/// Row of `symptom_weights.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomWeightRow {
    pub symptom: String,
    pub severity_weight: f64,
    pub specificity_weight: f64,
}

/// Row of `symptom_clusters.json`. Repeated symptoms are unioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomClusterRow {
    pub symptom: String,
    pub clusters: Vec<ClusterTag>,
}

/// Row of `symptom_systems.json`. Repeated symptoms are unioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomSystemRow {
    pub symptom: String,
    pub systems: Vec<BodySystem>,
}

/// Row of `condition_systems.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSystemsRow {
    pub condition: String,
    pub systems: Vec<BodySystem>,
}

/// Read-only reference data. Built once per engine, shared by every request.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    weights: KeyedTable<SymptomWeight>,
    diseases: Vec<DiseaseEntry>,
    disease_index: HashMap<String, usize>,
    symptom_clusters: KeyedTable<Vec<ClusterTag>>,
    symptom_systems: KeyedTable<Vec<BodySystem>>,
    condition_systems: HashMap<String, Vec<BodySystem>>,
}

impl ReferenceData {
    /// Built-in tables, validated.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::from_rows(
            builtin_weight_rows(),
            builtin_diseases(),
            builtin_cluster_rows(),
            builtin_system_rows(),
            builtin_condition_system_rows(),
        )
    }

    /// Load tables from JSON files in `dir`. A missing file keeps the built-in
    /// table for that concern; an unreadable or malformed file is an error.
    pub fn load(dir: &Path) -> Result<Self, EngineError> {
        let weights = read_table(dir, SYMPTOM_WEIGHTS_FILE)?.unwrap_or_else(builtin_weight_rows);
        let diseases = read_table(dir, DISEASES_FILE)?.unwrap_or_else(builtin_diseases);
        let clusters =
            read_table(dir, SYMPTOM_CLUSTERS_FILE)?.unwrap_or_else(builtin_cluster_rows);
        let systems = read_table(dir, SYMPTOM_SYSTEMS_FILE)?.unwrap_or_else(builtin_system_rows);
        let condition_systems = read_table(dir, CONDITION_SYSTEMS_FILE)?
            .unwrap_or_else(builtin_condition_system_rows);

        let data = Self::from_rows(weights, diseases, clusters, systems, condition_systems)?;
        tracing::info!(
            dir = %dir.display(),
            diseases = data.diseases.len(),
            symptoms = data.weights.len(),
            "Reference data loaded"
        );
        Ok(data)
    }

    pub fn from_rows(
        weights: Vec<SymptomWeightRow>,
        diseases: Vec<DiseaseEntry>,
        clusters: Vec<SymptomClusterRow>,
        systems: Vec<SymptomSystemRow>,
        condition_systems: Vec<ConditionSystemsRow>,
    ) -> Result<Self, EngineError> {
        for row in &weights {
            check_unit(&row.symptom, "severity_weight", row.severity_weight)?;
            check_unit(&row.symptom, "specificity_weight", row.specificity_weight)?;
        }

        // Later weight rows for the same symptom win; weights are scalars.
        let weights = KeyedTable::from_entries(
            weights.into_iter().map(|r| {
                (
                    r.symptom,
                    SymptomWeight {
                        severity_weight: r.severity_weight,
                        specificity_weight: r.specificity_weight,
                    },
                )
            }),
            |existing, incoming| *existing = incoming,
        );

        let symptom_clusters = KeyedTable::from_entries(
            clusters.into_iter().map(|r| (r.symptom, r.clusters)),
            union_tags,
        );
        let symptom_systems = KeyedTable::from_entries(
            systems.into_iter().map(|r| (r.symptom, r.systems)),
            union_tags,
        );

        let mut condition_map: HashMap<String, Vec<BodySystem>> = HashMap::new();
        for row in condition_systems {
            union_tags(condition_map.entry(row.condition).or_default(), row.systems);
        }

        let diseases: Vec<DiseaseEntry> = diseases.into_iter().map(normalize_entry).collect();
        let mut disease_index = HashMap::new();
        for (idx, entry) in diseases.iter().enumerate() {
            if disease_index.insert(entry.name.clone(), idx).is_some() {
                return Err(EngineError::InvalidReference(format!(
                    "duplicate condition name: {}",
                    entry.name
                )));
            }
        }

        let data = Self {
            weights,
            diseases,
            disease_index,
            symptom_clusters,
            symptom_systems,
            condition_systems: condition_map,
        };
        data.validate()?;
        Ok(data)
    }

    /// Check cross-table invariants. Violations are configuration errors.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.diseases.is_empty() {
            return Err(EngineError::InvalidReference(
                "no conditions defined".to_string(),
            ));
        }

        for entry in &self.diseases {
            if entry.name.trim().is_empty() {
                return Err(EngineError::InvalidReference(
                    "condition with empty name".to_string(),
                ));
            }
            if entry.symptom_relevance.is_empty() {
                return Err(EngineError::InvalidReference(format!(
                    "condition {} has no symptom relevance map",
                    entry.name
                )));
            }
            for (symptom, relevance) in &entry.symptom_relevance {
                check_unit(&entry.name, symptom, *relevance)?;
            }
            let mut seen = HashSet::new();
            for (symptom, _) in &entry.symptom_relevance {
                if !seen.insert(symptom.as_str()) {
                    return Err(EngineError::InvalidReference(format!(
                        "condition {} lists symptom {} twice",
                        entry.name, symptom
                    )));
                }
            }
            if self.condition_systems(&entry.name).is_empty() {
                return Err(EngineError::InvalidReference(format!(
                    "condition {} has no body-system entry",
                    entry.name
                )));
            }
        }

        for name in self.condition_systems.keys() {
            if !self.disease_index.contains_key(name) {
                tracing::warn!(condition = %name, "Body-system entry for unknown condition");
            }
        }

        Ok(())
    }

    // -- Lookups ----------------------------------------------------------

    pub fn diseases(&self) -> &[DiseaseEntry] {
        &self.diseases
    }

    pub fn disease(&self, name: &str) -> Option<&DiseaseEntry> {
        self.disease_index.get(name).map(|&idx| &self.diseases[idx])
    }

    pub fn disease_position(&self, name: &str) -> Option<usize> {
        self.disease_index.get(name).copied()
    }

    /// Weight for a symptom token, or the unknown-symptom default.
    pub fn symptom_weight(&self, token: &str) -> SymptomWeight {
        self.weights
            .lookup(token)
            .copied()
            .unwrap_or(SymptomWeight::UNKNOWN)
    }

    pub fn symptom_score(&self, token: &str) -> f64 {
        self.symptom_weight(token).score()
    }

    /// Clusters for a symptom token; unmatched symptoms get the catch-all.
    pub fn clusters_for(&self, token: &str) -> Vec<ClusterTag> {
        match self.symptom_clusters.lookup(token) {
            Some(tags) if !tags.is_empty() => tags.clone(),
            _ => vec![ClusterTag::CATCH_ALL],
        }
    }

    /// Body systems for a symptom token; unmatched symptoms get the catch-all.
    pub fn systems_for(&self, token: &str) -> Vec<BodySystem> {
        match self.symptom_systems.lookup(token) {
            Some(systems) if !systems.is_empty() => systems.clone(),
            _ => vec![BodySystem::CATCH_ALL],
        }
    }

    pub fn condition_systems(&self, condition: &str) -> &[BodySystem] {
        self.condition_systems
            .get(condition)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl DiseaseEntry {
    /// Relevance of a reported symptom to this condition, 0.0 if unrelated.
    pub fn relevance_for(&self, token: &str) -> f64 {
        match_key(token, self.symptom_relevance.iter().map(|(k, _)| k.as_str()))
            .map(|idx| self.symptom_relevance[idx].1)
            .unwrap_or(0.0)
    }
}

fn normalize_entry(mut entry: DiseaseEntry) -> DiseaseEntry {
    entry.name = entry.name.trim().to_string();
    for (symptom, _) in entry.symptom_relevance.iter_mut() {
        *symptom = symptom.trim().to_lowercase();
    }
    entry
}

fn check_unit(owner: &str, field: &str, value: f64) -> Result<(), EngineError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(EngineError::InvalidReference(format!(
            "{owner}: {field} = {value} is outside [0, 1]"
        )));
    }
    Ok(())
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Option<Vec<T>>, EngineError> {
    let path = dir.join(file);
    if !path.exists() {
        tracing::debug!(file, "No reference override, using built-in table");
        return Ok(None);
    }
    let json = std::fs::read_to_string(&path).map_err(|e| {
        EngineError::ReferenceDataLoad(path.display().to_string(), e.to_string())
    })?;
    let rows = serde_json::from_str(&json)
        .map_err(|e| EngineError::ReferenceDataParse(file.to_string(), e.to_string()))?;
    Ok(Some(rows))
}

// ---------------------------------------------------------------------------
// Built-in rows
// ---------------------------------------------------------------------------

fn builtin_weight_rows() -> Vec<SymptomWeightRow> {
    tables::SYMPTOM_WEIGHTS
        .iter()
        .map(|&(symptom, severity, specificity)| SymptomWeightRow {
            symptom: symptom.to_string(),
            severity_weight: severity,
            specificity_weight: specificity,
        })
        .collect()
}

fn builtin_diseases() -> Vec<DiseaseEntry> {
    tables::DISEASES
        .iter()
        .map(|seed| DiseaseEntry {
            name: seed.name.to_string(),
            clusters: seed.clusters.to_vec(),
            symptom_relevance: seed
                .relevance
                .iter()
                .map(|&(s, r)| (s.to_string(), r))
                .collect(),
            description: seed.description.to_string(),
            external_reference_term: seed.reference_term.to_string(),
            typical_course: seed.course.to_vec(),
            risk_category: seed.risk,
        })
        .collect()
}

fn builtin_cluster_rows() -> Vec<SymptomClusterRow> {
    tables::SYMPTOM_CLUSTERS
        .iter()
        .map(|&(symptom, clusters)| SymptomClusterRow {
            symptom: symptom.to_string(),
            clusters: clusters.to_vec(),
        })
        .collect()
}

fn builtin_system_rows() -> Vec<SymptomSystemRow> {
    tables::SYMPTOM_SYSTEMS
        .iter()
        .map(|&(symptom, systems)| SymptomSystemRow {
            symptom: symptom.to_string(),
            systems: systems.to_vec(),
        })
        .collect()
}

fn builtin_condition_system_rows() -> Vec<ConditionSystemsRow> {
    tables::CONDITION_SYSTEMS
        .iter()
        .map(|&(condition, systems)| ConditionSystemsRow {
            condition: condition.to_string(),
            systems: systems.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> ReferenceData {
        ReferenceData::builtin().unwrap()
    }

    #[test]
    fn builtin_tables_are_valid() {
        let data = builtin();
        assert_eq!(data.diseases().len(), tables::DISEASES.len());
        assert!(data.disease("Hyperthyroidism").is_some());
    }

    #[test]
    fn symptom_weight_exact_and_fuzzy() {
        let data = builtin();
        let w = data.symptom_weight("weight loss");
        assert!((w.score() - 0.35).abs() < 1e-9);
        let fuzzy = data.symptom_weight("heart palpitations");
        assert!((fuzzy.score() - 0.30).abs() < 1e-9);
    }

    #[test]
    fn unknown_symptom_gets_default_weight() {
        let data = builtin();
        assert_eq!(data.symptom_weight("purple toenails"), SymptomWeight::UNKNOWN);
    }

    #[test]
    fn duplicate_cluster_rows_are_unioned() {
        let data = builtin();
        let tags = data.clusters_for("weight loss");
        assert!(tags.contains(&ClusterTag::Endocrine));
        assert!(tags.contains(&ClusterTag::MalignancyHematologic));
        let tags = data.clusters_for("night sweats");
        assert!(tags.contains(&ClusterTag::Infectious));
        assert!(tags.contains(&ClusterTag::MalignancyHematologic));
    }

    #[test]
    fn unmapped_symptom_defaults_to_catch_all() {
        let data = builtin();
        assert_eq!(data.clusters_for("purple toenails"), vec![ClusterTag::MetabolicNutritional]);
        assert_eq!(data.systems_for("purple toenails"), vec![BodySystem::EndocrineMetabolic]);
    }

    #[test]
    fn relevance_for_uses_fuzzy_match() {
        let data = builtin();
        let hyper = data.disease("Hyperthyroidism").unwrap();
        assert!((hyper.relevance_for("heart palpitations") - 0.9).abs() < 1e-9);
        assert_eq!(hyper.relevance_for("sore throat"), 0.0);
    }

    #[test]
    fn every_condition_has_systems() {
        let data = builtin();
        for entry in data.diseases() {
            assert!(
                !data.condition_systems(&entry.name).is_empty(),
                "{} missing systems",
                entry.name
            );
        }
    }

    #[test]
    fn duplicate_condition_name_rejected() {
        let mut diseases = builtin_diseases();
        diseases.push(diseases[0].clone());
        let err = ReferenceData::from_rows(
            builtin_weight_rows(),
            diseases,
            builtin_cluster_rows(),
            builtin_system_rows(),
            builtin_condition_system_rows(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidReference(_)));
    }

    #[test]
    fn empty_relevance_map_rejected() {
        let mut diseases = builtin_diseases();
        diseases[0].symptom_relevance.clear();
        let err = ReferenceData::from_rows(
            builtin_weight_rows(),
            diseases,
            builtin_cluster_rows(),
            builtin_system_rows(),
            builtin_condition_system_rows(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no symptom relevance map"));
    }

    #[test]
    fn missing_condition_systems_rejected() {
        let mut systems = builtin_condition_system_rows();
        systems.retain(|r| r.condition != "Lymphoma");
        let err = ReferenceData::from_rows(
            builtin_weight_rows(),
            builtin_diseases(),
            builtin_cluster_rows(),
            builtin_system_rows(),
            systems,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Lymphoma"));
    }

    #[test]
    fn out_of_range_weight_rejected() {
        let mut weights = builtin_weight_rows();
        weights[0].severity_weight = 1.4;
        let err = ReferenceData::from_rows(
            weights,
            builtin_diseases(),
            builtin_cluster_rows(),
            builtin_system_rows(),
            builtin_condition_system_rows(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn load_missing_dir_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let data = ReferenceData::load(dir.path()).unwrap();
        assert_eq!(data.diseases().len(), tables::DISEASES.len());
    }

    #[test]
    fn load_overrides_weights_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![SymptomWeightRow {
            symptom: "fatigue".into(),
            severity_weight: 1.0,
            specificity_weight: 1.0,
        }];
        std::fs::write(
            dir.path().join(SYMPTOM_WEIGHTS_FILE),
            serde_json::to_string(&rows).unwrap(),
        )
        .unwrap();

        let data = ReferenceData::load(dir.path()).unwrap();
        assert!((data.symptom_score("fatigue") - 1.0).abs() < 1e-9);
        // Symptoms outside the override fall back to the unknown default.
        assert_eq!(data.symptom_weight("weight loss"), SymptomWeight::UNKNOWN);
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DISEASES_FILE), "{ not json").unwrap();
        let err = ReferenceData::load(dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::ReferenceDataParse(ref f, _) if f == DISEASES_FILE));
    }
}
