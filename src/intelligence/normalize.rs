use std::collections::HashMap;

use super::types::{AssessmentRequest, PatientProfile};

/// A reported symptom: original casing for display, lowercase key for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomToken {
    pub original: String,
    pub key: String,
}

/// Normalized request. Every extractor reads from this and nothing else.
#[derive(Debug, Clone, Default)]
pub struct SymptomInput {
    pub symptoms: Vec<SymptomToken>,
    /// Lowercase symptom keys joined with ", ".
    pub symptom_text: String,
    /// Lowercase answers joined with " ".
    pub answer_text: String,
    /// Symptom text followed by answer text.
    pub combined_text: String,
    pub profile: Option<PatientProfile>,
}

impl SymptomInput {
    pub fn from_request(request: &AssessmentRequest) -> Self {
        Self::new(&request.symptoms, &request.answers, request.profile.clone())
    }

    pub fn new(symptoms: &str, answers: &[String], profile: Option<PatientProfile>) -> Self {
        let symptoms = split_symptoms(symptoms);
        let symptom_text = symptoms
            .iter()
            .map(|s| s.key.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let answer_text = answers
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let combined_text = match (symptom_text.is_empty(), answer_text.is_empty()) {
            (false, false) => format!("{symptom_text} {answer_text}"),
            (false, true) => symptom_text.clone(),
            (true, _) => answer_text.clone(),
        };

        Self {
            symptoms,
            symptom_text,
            answer_text,
            combined_text,
            profile,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    /// Canonical string form, used to fingerprint the assessment.
    pub fn fingerprint_source(&self) -> String {
        let (age, gender) = self
            .profile
            .as_ref()
            .map(|p| (p.age.trim().to_lowercase(), p.gender.trim().to_lowercase()))
            .unwrap_or_default();
        format!(
            "{}\u{1f}{}\u{1f}{}\u{1f}{}",
            self.symptom_text, self.answer_text, age, gender
        )
    }
}

/// Split on comma, semicolon and newline; trim; drop empties.
pub fn split_symptoms(raw: &str) -> Vec<SymptomToken> {
    raw.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| SymptomToken {
            original: s.to_string(),
            key: s.to_lowercase(),
        })
        .collect()
}

/// Two-phase key resolution over keys in declaration order.
///
/// Phase 1: exact match. Phase 2: the first key that is contained in the token,
/// or contains it. Returns the key's position.
pub fn match_key<'a, I>(token: &str, keys: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    if token.is_empty() {
        return None;
    }
    let mut keys = keys.into_iter();
    if let Some(pos) = keys.clone().position(|k| k == token) {
        return Some(pos);
    }
    keys.position(|k| contains_either(token, k))
}

fn contains_either(token: &str, key: &str) -> bool {
    !key.is_empty() && (token.contains(key) || key.contains(token))
}

// ---------------------------------------------------------------------------
// KeyedTable
// ---------------------------------------------------------------------------

/// Symptom-keyed reference table with exact index plus ordered fallback scan.
#[derive(Debug, Clone)]
pub struct KeyedTable<T> {
    keys: Vec<String>,
    values: Vec<T>,
    exact: HashMap<String, usize>,
}

impl<T> Default for KeyedTable<T> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            exact: HashMap::new(),
        }
    }
}

impl<T> KeyedTable<T> {
    /// Build from ordered entries. A repeated key keeps its first position and
    /// its value is folded with `merge`.
    pub fn from_entries<I, F>(entries: I, mut merge: F) -> Self
    where
        I: IntoIterator<Item = (String, T)>,
        F: FnMut(&mut T, T),
    {
        let mut table = Self::default();
        for (key, value) in entries {
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            match table.exact.get(&key) {
                Some(&idx) => merge(&mut table.values[idx], value),
                None => {
                    table.exact.insert(key.clone(), table.keys.len());
                    table.keys.push(key);
                    table.values.push(value);
                }
            }
        }
        table
    }

    pub fn resolve(&self, token: &str) -> Option<usize> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if let Some(&idx) = self.exact.get(token) {
            return Some(idx);
        }
        self.keys.iter().position(|k| contains_either(token, k))
    }

    pub fn lookup(&self, token: &str) -> Option<&T> {
        self.resolve(token).map(|idx| &self.values[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.keys.iter().map(String::as_str).zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Union merge for tag lists: appends unseen tags, keeps first-seen order.
pub fn union_tags<T: PartialEq>(existing: &mut Vec<T>, incoming: Vec<T>) {
    for tag in incoming {
        if !existing.contains(&tag) {
            existing.push(tag);
        }
    }
}
