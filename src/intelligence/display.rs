use std::cmp::Ordering;

/// Smallest likelihood ever shown.
pub const LIKELIHOOD_FLOOR: f64 = 0.05;
/// Below this top raw strength the list is cut to `NARROW_TOP_N`.
pub const STRONG_SIGNAL: f64 = 0.40;
/// Rank-1 minus rank-2 gap under which the result is a close call.
pub const CLOSE_CALL_GAP: f64 = 0.10;
pub const NARROW_TOP_N: usize = 3;
pub const WIDE_TOP_N: usize = 5;

/// A condition that survived normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry {
    /// Declaration position, used as the tie-break.
    pub position: usize,
    /// In [0.05, 1.0].
    pub likelihood: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub ranked: Vec<RankedEntry>,
    pub close_call: bool,
}

/// Divide every score by the batch maximum. Leaves scores untouched when the
/// maximum is not positive.
pub fn normalize(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        scores.iter().map(|s| s / max).collect()
    } else {
        scores.to_vec()
    }
}

/// Display value for a normalized score: zeros vanish, small values are raised
/// to the floor, nothing exceeds 1.
pub fn clamp_likelihood(normalized: f64) -> Option<f64> {
    if normalized > 0.0 {
        Some(normalized.clamp(LIKELIHOOD_FLOOR, 1.0))
    } else {
        None
    }
}

/// Normalize, clamp, rank and cut `(position, score)` pairs.
///
/// The list length depends on the top raw score: a weak signal shows at most
/// three conditions. A narrow lead also cuts to three and flags a close call.
pub fn select_visible(scores: &[(usize, f64)]) -> Selection {
    let raw: Vec<f64> = scores.iter().map(|(_, s)| *s).collect();
    let top_strength = raw.iter().copied().fold(0.0_f64, f64::max).clamp(0.0, 1.0);

    let mut ranked: Vec<RankedEntry> = scores
        .iter()
        .zip(normalize(&raw))
        .filter_map(|(&(position, _), normalized)| {
            clamp_likelihood(normalized).map(|likelihood| RankedEntry {
                position,
                likelihood,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.likelihood
            .partial_cmp(&a.likelihood)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.position.cmp(&b.position))
    });

    let mut top_n = if top_strength < STRONG_SIGNAL {
        NARROW_TOP_N
    } else {
        WIDE_TOP_N
    };
    let close_call = match ranked.as_slice() {
        [first, second, ..] => first.likelihood - second.likelihood < CLOSE_CALL_GAP,
        _ => false,
    };
    if close_call {
        top_n = NARROW_TOP_N;
    }
    ranked.truncate(top_n);

    Selection { ranked, close_call }
}
