//! Analysis tuning knobs and the command-line surface shared by the binaries.

use crate::stopwords::{Stopwords, StopwordsError};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Default number of ranked keywords reported per article.
pub const DEFAULT_TOP_KEYWORDS: usize = 10;
/// Default number of body characters kept in the snippet.
pub const DEFAULT_SNIPPET_CHARS: usize = 1000;
/// Default number of terms handed to the word-cloud renderer.
pub const DEFAULT_CLOUD_WORDS: usize = 200;
/// Default upper bound for a single network fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(20);
/// Default cap on downloaded response bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 5 * 1024 * 1024;
/// User agent sent with every fetch unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("trendscope/", env!("CARGO_PKG_VERSION"));

/// Tunable knobs that bound a single analysis request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerControls {
    fetch_timeout: Duration,
    top_keywords: usize,
    snippet_chars: usize,
    cloud_words: usize,
    max_body_bytes: usize,
    user_agent: String,
}

impl AnalyzerControls {
    /// Constructs a new set of analyzer controls.
    pub fn new(
        fetch_timeout: Duration,
        top_keywords: usize,
        snippet_chars: usize,
        cloud_words: usize,
        max_body_bytes: usize,
        user_agent: String,
    ) -> Self {
        Self {
            fetch_timeout,
            top_keywords,
            snippet_chars,
            cloud_words,
            max_body_bytes,
            user_agent,
        }
    }

    /// Upper bound for the network fetch.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Number of ranked keywords kept in a result.
    pub fn top_keywords(&self) -> usize {
        self.top_keywords
    }

    /// Number of body characters kept in the snippet.
    pub fn snippet_chars(&self) -> usize {
        self.snippet_chars
    }

    /// Number of weighted terms produced for the word cloud.
    pub fn cloud_words(&self) -> usize {
        self.cloud_words
    }

    /// Maximum response bytes read from the remote server.
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// User agent header value for fetches.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for AnalyzerControls {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            top_keywords: DEFAULT_TOP_KEYWORDS,
            snippet_chars: DEFAULT_SNIPPET_CHARS,
            cloud_words: DEFAULT_CLOUD_WORDS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Command-line flags shared by binaries that run analyses.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Seconds before a page fetch is abandoned
    #[arg(long, env = "TRENDSCOPE_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout_secs: u64,

    /// Number of ranked keywords to report
    #[arg(long, env = "TRENDSCOPE_TOP_KEYWORDS", default_value_t = DEFAULT_TOP_KEYWORDS)]
    pub top_keywords: usize,

    /// Characters of body text kept in the snippet
    #[arg(long, env = "TRENDSCOPE_SNIPPET_CHARS", default_value_t = DEFAULT_SNIPPET_CHARS)]
    pub snippet_chars: usize,

    /// Maximum words drawn in the word cloud
    #[arg(long, env = "TRENDSCOPE_CLOUD_WORDS", default_value_t = DEFAULT_CLOUD_WORDS)]
    pub cloud_words: usize,

    /// Maximum response bytes downloaded per page
    #[arg(long, env = "TRENDSCOPE_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// User-Agent header sent with fetches
    #[arg(long, env = "TRENDSCOPE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Newline-delimited file of extra stopwords appended to the English list
    #[arg(long, env = "TRENDSCOPE_STOPWORDS")]
    pub stopwords_file: Option<PathBuf>,
}

impl Cli {
    /// Converts the parsed flags into `AnalyzerControls`.
    pub fn build_controls(&self) -> AnalyzerControls {
        AnalyzerControls::new(
            Duration::from_secs(self.timeout_secs.max(1)),
            self.top_keywords,
            self.snippet_chars,
            self.cloud_words,
            self.max_body_bytes.max(1),
            self.user_agent.trim().to_string(),
        )
    }

    /// English stopwords plus the words listed in `--stopwords-file`, if any.
    pub fn load_stopwords(&self) -> Result<Stopwords, StopwordsError> {
        match &self.stopwords_file {
            Some(path) => Stopwords::english_with_file(path),
            None => Ok(Stopwords::english()),
        }
    }
}
