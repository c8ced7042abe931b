//! Single-request analysis pipeline: fetch, rank keywords, score sentiment.

use crate::controls::AnalyzerControls;
use crate::fetcher::{ArticleFetcher, Document, FetchError};
use crate::ranker::{top_n, KeywordCount};
use crate::sentiment::{PolarityScorer, SentimentResult, SentimentScorer};
use crate::stopwords::Stopwords;
use crate::tokenizer::{filter_tokens, TokenFilter};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Minimum word length for word-cloud terms.
const CLOUD_MIN_CHARS: usize = 3;

/// Everything produced for one analyzed URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// URL that was analyzed.
    pub url: String,
    /// Article title.
    pub title: String,
    /// Polarity and label of the full body.
    pub sentiment: SentimentResult,
    /// Most frequent keywords, highest count first.
    pub top_keywords: Vec<KeywordCount>,
    /// Leading characters of the body.
    pub snippet: String,
    /// Whether `snippet` was cut short of the full body.
    pub truncated: bool,
    /// Weighted terms for the word cloud, highest count first.
    pub cloud_terms: Vec<KeywordCount>,
}

impl AnalysisResult {
    /// Snippet followed by an ellipsis when the body was longer.
    pub fn snippet_display(&self) -> String {
        if self.truncated {
            format!("{}...", self.snippet)
        } else {
            self.snippet.clone()
        }
    }
}

/// Failure classes of an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisErrorKind {
    /// The page could not be fetched or parsed.
    ExtractionFailed,
    /// The page was fetched but had no readable text.
    NoReadableContent,
    /// The fetch exceeded its time bound.
    Timeout,
}

impl AnalysisErrorKind {
    /// Short user-facing explanation of the failure class.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::ExtractionFailed => {
                "Could not extract text. Ensure the URL is public and contains readable text."
            }
            Self::NoReadableContent => "The page was fetched but contains no readable text.",
            Self::Timeout => "The page took too long to respond.",
        }
    }
}

impl fmt::Display for AnalysisErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExtractionFailed => "extraction failed",
            Self::NoReadableContent => "no readable content",
            Self::Timeout => "timeout",
        })
    }
}

/// Terminal failure of one analysis request.
#[derive(Debug)]
pub struct AnalysisError {
    kind: AnalysisErrorKind,
    message: String,
    source: Option<FetchError>,
}

impl AnalysisError {
    /// Builds an error with a short message.
    pub fn new(kind: AnalysisErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Failure class.
    pub fn kind(&self) -> AnalysisErrorKind {
        self.kind
    }

    /// Short human-readable detail.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FetchError> for AnalysisError {
    fn from(err: FetchError) -> Self {
        let kind = if err.is_timeout() {
            AnalysisErrorKind::Timeout
        } else {
            AnalysisErrorKind::ExtractionFailed
        };
        Self {
            kind,
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for AnalysisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|err| err as &(dyn Error + 'static))
    }
}

/// Runs the fetch → keywords + sentiment pipeline for one URL at a time.
///
/// The analyzer holds only read-only state, so one instance can serve any number of
/// concurrent requests.
pub struct Analyzer<F, P> {
    fetcher: F,
    sentiment: SentimentScorer<P>,
    stopwords: Arc<Stopwords>,
    controls: AnalyzerControls,
}

impl<F, P> Analyzer<F, P>
where
    F: ArticleFetcher,
    P: PolarityScorer,
{
    /// Assembles an analyzer from its collaborators.
    pub fn new(fetcher: F, scorer: P, stopwords: Arc<Stopwords>, controls: AnalyzerControls) -> Self {
        Self {
            fetcher,
            sentiment: SentimentScorer::new(scorer),
            stopwords,
            controls,
        }
    }

    /// Controls this analyzer was built with.
    pub fn controls(&self) -> &AnalyzerControls {
        &self.controls
    }

    /// Fetches `url` and analyzes its article.
    pub fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AnalysisError::new(
                AnalysisErrorKind::ExtractionFailed,
                "no url given",
            ));
        }

        let started = Instant::now();
        let outcome = self
            .fetcher
            .fetch(url)
            .map_err(AnalysisError::from)
            .and_then(|document| self.analyze_document(url, document));
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &outcome {
            Ok(result) => info!(
                url,
                elapsed_ms,
                label = %result.sentiment.label,
                keywords = result.top_keywords.len(),
                "analysis finished"
            ),
            Err(err) => warn!(url, elapsed_ms, kind = %err.kind(), error = %err, "analysis failed"),
        }
        outcome
    }

    /// Analyzes an already-fetched document.
    pub fn analyze_document(
        &self,
        url: &str,
        document: Document,
    ) -> Result<AnalysisResult, AnalysisError> {
        let Document { title, body } = document;
        if body.trim().is_empty() {
            return Err(AnalysisError::new(
                AnalysisErrorKind::NoReadableContent,
                "the page has no readable text",
            ));
        }

        let tokens = filter_tokens(&body, &self.stopwords);
        let top_keywords = top_n(&tokens, self.controls.top_keywords());
        let cloud_terms = top_n(
            TokenFilter::new(CLOUD_MIN_CHARS).filter(&body, &self.stopwords),
            self.controls.cloud_words(),
        );
        let sentiment = self.sentiment.score(&body);
        let (snippet, truncated) = snippet(&body, self.controls.snippet_chars());

        Ok(AnalysisResult {
            url: url.to_string(),
            title,
            sentiment,
            top_keywords,
            snippet,
            truncated,
            cloud_terms,
        })
    }
}

/// First `limit` characters of `body`, and whether anything was cut.
pub fn snippet(body: &str, limit: usize) -> (String, bool) {
    match body.char_indices().nth(limit) {
        Some((cut, _)) => (body[..cut].to_string(), true),
        None => (body.to_string(), false),
    }
}
