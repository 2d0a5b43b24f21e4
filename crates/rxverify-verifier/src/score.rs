//! Weighted-ratio name similarity on a 0–100 scale.
//!
//! Edit-distance cores come from `strsim`; the composite takes the best of a
//! straight comparison and a token-sorted comparison so word order does not
//! dominate the score.

/// Weight applied to the token-sorted comparison.
const TOKEN_SORT_WEIGHT: f64 = 0.95;

/// Lowercase and collapse runs of whitespace.
fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

fn token_sorted(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity between two names in [0, 100]. Case- and whitespace-insensitive;
/// 100 means an exact match after normalization.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    let full = strsim::normalized_levenshtein(&a, &b);
    let sorted =
        strsim::normalized_levenshtein(&token_sorted(&a), &token_sorted(&b)) * TOKEN_SORT_WEIGHT;

    full.max(sorted) * 100.0
}

/// Best match for `query` among `candidates`: index and score of the highest
/// scoring entry. Ties keep the earliest candidate. `None` only when
/// `candidates` is empty.
pub fn best_match(query: &str, candidates: &[String]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let score = weighted_ratio(query, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_scores_100() {
        let score = weighted_ratio("Augmentin 625 Duo Tablet", "Augmentin 625 Duo Tablet");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn case_and_spacing_do_not_matter() {
        let score = weighted_ratio("  augmentin   625 duo tablet ", "Augmentin 625 Duo Tablet");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn word_order_is_forgiven() {
        let score = weighted_ratio("Duo Tablet Augmentin 625", "Augmentin 625 Duo Tablet");
        assert!(score >= 94.9);
    }

    #[test]
    fn unrelated_names_score_low() {
        assert!(weighted_ratio("Xanax", "Augmentin 625 Duo Tablet") < 40.0);
    }

    #[test]
    fn best_match_prefers_highest_score() {
        let candidates = vec![
            "Azithral 500 Tablet".to_string(),
            "Augmentin 625 Duo Tablet".to_string(),
        ];
        let (idx, score) = best_match("Augmentin 625 Duo Tablet", &candidates).unwrap();
        assert_eq!(idx, 1);
        assert!(score > 99.0);
    }

    #[test]
    fn best_match_keeps_first_on_ties() {
        let candidates = vec!["Dolo 650 Tablet".to_string(), "Dolo 650 Tablet".to_string()];
        let (idx, _) = best_match("Dolo 650 Tablet", &candidates).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn empty_candidate_list_has_no_match() {
        assert!(best_match("Dolo 650 Tablet", &[]).is_none());
    }
}
