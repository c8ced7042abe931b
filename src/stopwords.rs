//! English stopword set used to drop low-value tokens before ranking.

use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The NLTK English stopword list.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Read-only set of lowercase stopwords.
///
/// Build it once at startup and share it (for example behind an `Arc`) with every
/// analysis; lookups never allocate.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: FxHashSet<String>,
}

impl Stopwords {
    /// The 179-word English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// An empty set; nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from arbitrary words, lowercasing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// The English list plus the words listed in `path`.
    ///
    /// The file holds one word per line; blank lines and lines starting with `#` are skipped.
    pub fn english_with_file(path: impl AsRef<Path>) -> Result<Self, StopwordsError> {
        let mut set = Self::english();
        set.extend_from_file(path)?;
        Ok(set)
    }

    /// Appends the words listed in a newline-delimited file.
    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, StopwordsError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| StopwordsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let before = self.len();
        self.extend(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        Ok(self.len() - before)
    }

    /// Adds words to the set, lowercasing each one.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|word| word.as_ref().to_lowercase()));
    }

    /// Checks an already-lowercased token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set filters nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Errors surfaced while loading extra stopwords.
#[derive(Debug)]
pub enum StopwordsError {
    /// The stopword file could not be read.
    Read {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

impl fmt::Display for StopwordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read stopwords from {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StopwordsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn english_list_is_complete_and_lowercase() {
        let stopwords = Stopwords::english();
        assert_eq!(stopwords.len(), 179);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("over"));
        assert!(stopwords.contains("wouldn't"));
        assert!(!stopwords.contains("quick"));
    }

    #[test]
    fn custom_words_are_lowercased() {
        let stopwords = Stopwords::from_words(["Reuters", "SAID"]);
        assert!(stopwords.contains("reuters"));
        assert!(stopwords.contains("said"));
        assert!(!stopwords.contains("Reuters"));
    }

    #[test]
    fn loads_extra_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# newsroom boilerplate").expect("write");
        writeln!(file, "Reuters").expect("write");
        writeln!(file).expect("write");
        writeln!(file, "  said  ").expect("write");
        writeln!(file, "the").expect("write");

        let stopwords = Stopwords::english_with_file(file.path()).expect("load");
        assert_eq!(stopwords.len(), 181);
        assert!(stopwords.contains("reuters"));
        assert!(stopwords.contains("said"));
        assert!(!stopwords.contains("# newsroom boilerplate"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Stopwords::english_with_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
