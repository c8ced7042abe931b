//! Word tokenization and keyword-candidate filtering.

use crate::stopwords::Stopwords;
use unicode_segmentation::UnicodeSegmentation;

/// Minimum length (in characters) of a keyword candidate.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Treebank clitics split off the end of a word, so `company's` yields `company`.
const CLITICS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

const HYPHENS: &[&str] = &["-", "\u{2010}"];

/// Splits `text` into word tokens.
///
/// Segments on Unicode word boundaries, then keeps hyphen-linked runs such as
/// `state-of-the-art` as a single token and splits clitics off their stem
/// (`couldn't` becomes `could` and `n't`). Punctuation and whitespace are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    let segments: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < segments.len() {
        let (start, segment) = segments[i];
        if !is_wordlike(segment) {
            i += 1;
            continue;
        }
        let mut last = i;
        while last + 2 < segments.len()
            && HYPHENS.contains(&segments[last + 1].1)
            && is_wordlike(segments[last + 2].1)
        {
            last += 2;
        }
        let (end_start, end_segment) = segments[last];
        let word = &text[start..end_start + end_segment.len()];
        match split_clitic(word) {
            Some((stem, clitic)) => {
                tokens.push(stem);
                tokens.push(clitic);
            }
            None => tokens.push(word),
        }
        i = last + 1;
    }
    tokens
}

fn is_wordlike(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn split_clitic(word: &str) -> Option<(&str, &str)> {
    CLITICS.iter().find_map(|clitic| {
        let stem = word.strip_suffix(*clitic)?;
        is_wordlike(stem).then(|| word.split_at(stem.len()))
    })
}

/// Filters lowercase Unicode words down to keyword candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFilter {
    min_chars: usize,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(MIN_KEYWORD_CHARS)
    }
}

impl TokenFilter {
    /// Creates a filter keeping tokens of at least `min_chars` characters.
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Minimum retained token length in characters.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Lowercases and [`tokenize`]s `body`, keeping the tokens that are purely
    /// alphanumeric, not stopwords, and long enough.
    ///
    /// Output preserves source order and repeats; empty input yields an empty vector.
    pub fn filter(&self, body: &str, stopwords: &Stopwords) -> Vec<String> {
        let lowered = body.to_lowercase();
        tokenize(&lowered)
            .into_iter()
            .filter(|word| self.keeps(word, stopwords))
            .map(str::to_owned)
            .collect()
    }

    fn keeps(&self, word: &str, stopwords: &Stopwords) -> bool {
        word.chars().all(char::is_alphanumeric)
            && word.chars().count() >= self.min_chars
            && !stopwords.contains(word)
    }
}

/// Keyword candidates of `body` using the default four-character minimum.
pub fn filter_tokens(body: &str, stopwords: &Stopwords) -> Vec<String> {
    TokenFilter::default().filter(body, stopwords)
}
