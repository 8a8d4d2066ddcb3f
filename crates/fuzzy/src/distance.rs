//! Edit distance and the similarity score derived from it.
//!
//! Distances are counted in Unicode scalar values, so an accented letter is
//! one edit, not two.

/// Levenshtein distance with unit-cost insertion, deletion and substitution.
///
/// ```rust
/// use fuzzy::edit_distance;
///
/// assert_eq!(edit_distance("cabernet", "cabernot"), 1);
/// assert_eq!(edit_distance("", "rosé"), 4);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// `1 - edit_distance / max(len)`, in `[0.0, 1.0]`.
///
/// Two empty strings are identical and score `1.0`.
///
/// ```rust
/// use fuzzy::similarity;
///
/// assert_eq!(similarity("cabernet", "cabernot"), 0.875);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}
