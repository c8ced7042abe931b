//! Frequency ranking of keyword candidates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A distinct word and the number of times it survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Lowercase keyword.
    pub word: String,
    /// Occurrences in the analyzed body (always at least one).
    pub count: usize,
}

impl KeywordCount {
    /// Builds a keyword entry.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Counts every distinct token, keeping first-occurrence order.
pub fn count_tokens<I, S>(tokens: I) -> Vec<KeywordCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in tokens {
        let token = token.as_ref();
        match counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token.to_owned(), 1);
            }
        }
    }
    counts
        .into_iter()
        .map(|(word, count)| KeywordCount { word, count })
        .collect()
}

/// Returns the `n` most frequent tokens, highest count first.
///
/// Equal counts keep the order in which their words first appeared, and fewer than `n`
/// distinct tokens simply produce a shorter list.
pub fn top_n<I, S>(tokens: I, n: usize) -> Vec<KeywordCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if n == 0 {
        return Vec::new();
    }
    let mut counts = count_tokens(tokens);
    // `sort_by` is stable, which is what keeps ties in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn repeated_word_ranks_first() {
        let tokens = ["quick", "brown", "fox", "jumps", "lazy", "dog", "dog", "barks"];
        let ranked = top_n(tokens, 10);
        assert_eq!(
            ranked,
            vec![
                KeywordCount::new("dog", 2),
                KeywordCount::new("quick", 1),
                KeywordCount::new("brown", 1),
                KeywordCount::new("fox", 1),
                KeywordCount::new("jumps", 1),
                KeywordCount::new("lazy", 1),
                KeywordCount::new("barks", 1),
            ]
        );
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let tokens = ["beta", "alpha", "gamma", "alpha", "beta", "delta", "gamma"];
        let ranked = top_n(tokens, 3);
        assert_eq!(
            ranked,
            vec![
                KeywordCount::new("beta", 2),
                KeywordCount::new("alpha", 2),
                KeywordCount::new("gamma", 2),
            ]
        );
    }

    #[test]
    fn length_is_min_of_n_and_distinct() {
        let tokens: Vec<String> = (0..25).map(|i| format!("word{}", i % 12)).collect();
        assert_eq!(top_n(&tokens, 10).len(), 10);
        assert_eq!(top_n(&tokens, 50).len(), 12);
        assert!(top_n(&tokens, 0).is_empty());
        assert!(top_n(Vec::<String>::new(), 10).is_empty());
    }

    #[test]
    fn output_is_non_increasing_and_counts_sum() {
        let tokens = [
            "market", "rally", "market", "stocks", "rally", "market", "bonds", "yield", "stocks",
        ];
        let ranked = top_n(tokens, 10);
        assert!(ranked.windows(2).all(|pair| pair[0].count >= pair[1].count));
        assert_eq!(ranked.iter().map(|k| k.count).sum::<usize>(), tokens.len());
        assert_eq!(ranked[0], KeywordCount::new("market", 3));
    }
}
