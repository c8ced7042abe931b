#![warn(missing_docs)]
//! Fetches an article, ranks its keywords, scores its sentiment and draws a word cloud.

pub mod cloud;
pub mod controls;
pub mod fetcher;
pub mod pipeline;
pub mod ranker;
pub mod report;
pub mod sentiment;
pub mod stopwords;
pub mod tokenizer;

use anyhow::{Context, Result};
use std::sync::Arc;

pub use cloud::{CloudConfig, CloudRenderer, PlacedWord, SvgCloudRenderer};
pub use controls::{AnalyzerControls, Cli};
pub use fetcher::{ArticleFetcher, Document, FetchError, HttpFetcher};
pub use pipeline::{snippet, AnalysisError, AnalysisErrorKind, AnalysisResult, Analyzer};
pub use ranker::{count_tokens, top_n, KeywordCount};
pub use sentiment::{
    LexiconScorer, PolarityScorer, SentimentLabel, SentimentResult, SentimentScorer,
};
pub use stopwords::{Stopwords, StopwordsError};
pub use tokenizer::{filter_tokens, TokenFilter};

/// Analyzer wired to the network fetcher and the embedded lexicon.
pub type HttpAnalyzer = Analyzer<HttpFetcher, LexiconScorer>;

/// Builds the production analyzer from parsed command-line flags.
pub fn build_analyzer(cli: &Cli) -> Result<HttpAnalyzer> {
    let controls = cli.build_controls();
    let stopwords = cli.load_stopwords().context("failed to load stopwords")?;
    let fetcher = HttpFetcher::new(&controls).context("failed to build http client")?;
    tracing::debug!(
        stopwords = stopwords.len(),
        timeout_secs = controls.fetch_timeout().as_secs(),
        "analyzer ready"
    );
    Ok(Analyzer::new(
        fetcher,
        LexiconScorer::default(),
        Arc::new(stopwords),
        controls,
    ))
}
