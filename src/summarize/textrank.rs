//! Graph-based sentence ranking (TextRank).
//!
//! Builds a cosine-similarity graph over sentence term-frequency vectors and
//! runs damped power iteration over it. Iteration count is bounded, so
//! worst-case latency is deterministic; cost is O(n²) in sentence count.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::text::{tokenize, word_frequency};

const DAMPING: f64 = 0.85;
const CONVERGENCE_EPSILON: f64 = 0.0001;
const MAX_ITERATIONS: usize = 50;

/// Rank sentences and return the indices of the `top_n` best, in descending
/// rank order. Callers that need reading order re-sort ascending.
///
/// When there are no more sentences than `top_n`, all indices are returned
/// in original order and no ranking runs. Score ties are broken by original
/// sentence order.
pub fn text_rank(sentences: &[String], top_n: usize) -> Vec<usize> {
    let n = sentences.len();
    if n <= top_n {
        return (0..n).collect();
    }

    let vectors: Vec<HashMap<String, usize>> = sentences
        .iter()
        .map(|s| word_frequency(&tokenize(s)))
        .collect();

    // Symmetric similarity matrix; the diagonal stays zero.
    let mut similarity = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let sim = cosine_similarity(&vectors[i], &vectors[j]);
            similarity[i][j] = sim;
            similarity[j][i] = sim;
        }
    }

    let out_degree: Vec<f64> = similarity.iter().map(|row| row.iter().sum()).collect();

    let mut scores = vec![1.0 / n as f64; n];
    for _ in 0..MAX_ITERATIONS {
        let mut next = vec![(1.0 - DAMPING) / n as f64; n];
        for j in 0..n {
            if out_degree[j] <= 0.0 {
                continue;
            }
            for i in 0..n {
                if similarity[j][i] > 0.0 {
                    next[i] += DAMPING * (similarity[j][i] / out_degree[j]) * scores[j];
                }
            }
        }

        let delta: f64 = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b).abs())
            .sum();
        scores = next;
        if delta < CONVERGENCE_EPSILON {
            break;
        }
    }

    let mut indices: Vec<usize> = (0..n).collect();
    // Stable sort: equal scores keep original sentence order.
    indices.sort_by(|&a, &b| {
        scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal)
    });
    indices.truncate(top_n);

    indices
}

fn cosine_similarity(a: &HashMap<String, usize>, b: &HashMap<String, usize>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, &count)| b.get(term).map(|&other| (count * other) as f64))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }

    let norm_a: f64 = a.values().map(|&c| (c * c) as f64).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|&c| (c * c) as f64).sum::<f64>().sqrt();

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_input_returns_all_in_order() {
        let input = sentences(&["First sentence here.", "Second sentence here."]);
        assert_eq!(text_rank(&input, 5), vec![0, 1]);
    }

    #[test]
    fn test_returns_at_most_top_n_valid_indices() {
        let input = sentences(&[
            "The budget review covered the platform migration plan.",
            "The platform migration plan needs a budget owner.",
            "Lunch was served in the cafeteria at noon today.",
            "Migration of the platform depends on the budget review.",
        ]);
        let ranked = text_rank(&input, 2);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|&i| i < input.len()));
    }

    #[test]
    fn test_connected_sentences_outrank_outliers() {
        let input = sentences(&[
            "The budget review covered the platform migration plan.",
            "The platform migration plan needs a budget owner.",
            "Bananas are yellow fruit unrelated topics entirely.",
            "Migration of the platform depends on the budget review.",
        ]);
        let ranked = text_rank(&input, 3);
        assert!(!ranked.contains(&2));
    }

    #[test]
    fn test_empty_input() {
        assert!(text_rank(&[], 5).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let input = sentences(&[
            "Alpha beta gamma delta words here.",
            "Beta gamma delta epsilon words here.",
            "Gamma delta epsilon zeta words here.",
            "Unrelated sentence about something else.",
        ]);
        assert_eq!(text_rank(&input, 2), text_rank(&input, 2));
    }

    #[test]
    fn test_zero_vector_sentences_are_isolated() {
        let input = sentences(&[
            "Budget review for the platform migration.",
            "Platform migration budget review continues.",
            "Uh hm mm.",
            "The budget and the platform again today.",
        ]);
        // All-stop-word sentence has a zero vector; ranking must not panic
        // and must rank it below the connected sentences.
        let ranked = text_rank(&input, 3);
        assert!(!ranked.contains(&2));
    }
}
