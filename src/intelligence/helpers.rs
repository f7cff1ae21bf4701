use std::sync::LazyLock;

use regex::Regex;

/// Language describing a worsening course.
pub const WORSENING_TERMS: &[&str] = &[
    "worse",
    "worsening",
    "progressive",
    "progressively",
    "getting more",
    "more and more",
    "spreading",
];

/// True if any term occurs as a substring of `text`.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| !t.is_empty() && text.contains(t))
}

/// Conjunction of disjunctions: every group must have at least one term in `text`.
/// An empty group list never matches.
pub fn matches_all(text: &str, groups: &[&[&str]]) -> bool {
    !groups.is_empty() && groups.iter().all(|group| contains_any(text, group))
}

static RE_INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// First run of ASCII digits in `text`, if it fits in a u32.
pub fn first_integer(text: &str) -> Option<u32> {
    RE_INTEGER.find(text)?.as_str().parse().ok()
}

/// Count for a spelled-out or numeric quantity. Vague words map to a
/// conservative count: "few" and "several" to 3, "couple" to 2.
pub fn parse_count(word: &str) -> Option<u32> {
    let word = word.trim();
    if let Ok(n) = word.parse::<u32>() {
        return Some(n);
    }
    let n = match word {
        "a" | "an" | "one" => 1,
        "two" | "couple" => 2,
        "three" | "few" | "several" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        _ => return None,
    };
    Some(n)
}

/// Alternation fragment for `parse_count` words, for use inside regexes.
pub const COUNT_WORDS: &str =
    r"[0-9]+|a|an|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|few|couple|several";

/// Round to 4 decimal places so reported scores do not drift in the last bits.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
