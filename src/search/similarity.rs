//! Partial-ratio fuzzy string similarity.
//!
//! All the ranking code in this crate scores string closeness on a 0–100
//! scale tolerant of one string being a substring of the other: the shorter
//! string is slid across the longer one and the best windowed Levenshtein
//! similarity wins.

/// Compute the partial-ratio similarity (0–100) between two strings.
///
/// 100 means the shorter string appears verbatim somewhere in the longer
/// one; 0 means no window shares any character structure. Two empty strings
/// are identical by convention.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let window = short.len();
    let short_str: String = short.iter().collect();
    let mut best = 0.0_f64;

    for start in 0..=(long.len() - window) {
        let candidate: String = long[start..start + window].iter().collect();
        let distance = strsim::levenshtein(&short_str, &candidate);
        let score = (1.0 - distance as f64 / window as f64) * 100.0;
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }

    best
}

/// Plain normalized Levenshtein ratio (0–100) without the sliding window.
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    strsim::normalized_levenshtein(a, b) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(partial_ratio("GlcNAc", "GlcNAc"), 100.0);
    }

    #[test]
    fn test_substring_scores_100() {
        assert_eq!(partial_ratio("GlcNAc", "Man(b1-4)GlcNAc(b1-4)GlcNAc"), 100.0);
        // Order of arguments does not matter
        assert_eq!(partial_ratio("Man(b1-4)GlcNAc(b1-4)GlcNAc", "GlcNAc"), 100.0);
    }

    #[test]
    fn test_disjoint_strings_score_low() {
        assert!(partial_ratio("aaaa", "zzzz") < 30.0);
    }

    #[test]
    fn test_empty_behavior() {
        assert_eq!(partial_ratio("", ""), 100.0);
        assert_eq!(partial_ratio("Man", ""), 0.0);
        assert_eq!(partial_ratio("", "Man"), 0.0);
    }

    #[test]
    fn test_score_is_bounded() {
        for (a, b) in [
            ("a4-b1 b4-c1", "a4-b1 b4-c1 c3-d1"),
            ("1-2-2-2", "1-2-3-2"),
            ("mannose", "high mannose glycan"),
        ] {
            let score = partial_ratio(a, b);
            assert!((0.0..=100.0).contains(&score), "{a} vs {b}: {score}");
        }
    }

    #[test]
    fn test_close_strings_score_high() {
        // One linkage differs out of three
        let score = partial_ratio("a4-b1 b4-c1 c3-d1", "a4-b1 b4-c1 c6-d1");
        assert!(score > 85.0, "score was {score}");
    }

    #[test]
    fn test_ratio_plain() {
        assert_eq!(ratio("Man", "Man"), 100.0);
        assert!(ratio("Man", "Gal") < 100.0);
        assert_eq!(ratio("", ""), 100.0);
    }
}
