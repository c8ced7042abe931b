//! Sentiment scoring facade.
//!
//! A [`PolarityScorer`] turns text into a continuous polarity in `[-1.0, 1.0]`;
//! [`SentimentScorer`] wraps one and maps the value onto a [`SentimentLabel`].

mod lexicon;

pub use lexicon::LexiconScorer;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability that scores the polarity of free text.
pub trait PolarityScorer: Send + Sync {
    /// Returns a polarity in `[-1.0, 1.0]`; negative is unfavorable, positive favorable.
    fn polarity(&self, text: &str) -> f64;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Box<T> {
    fn polarity(&self, text: &str) -> f64 {
        (**self).polarity(text)
    }
}

/// Three-way sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Polarity above zero.
    Positive,
    /// Polarity below zero.
    Negative,
    /// Polarity exactly zero.
    Neutral,
}

impl SentimentLabel {
    /// Classifies an unrounded polarity.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity plus its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Unrounded polarity in `[-1.0, 1.0]`.
    pub polarity: f64,
    /// Label derived from the unrounded polarity.
    pub label: SentimentLabel,
}

impl SentimentResult {
    /// Builds a result, clamping out-of-range and NaN polarities.
    pub fn from_polarity(polarity: f64) -> Self {
        let polarity = if polarity.is_nan() {
            0.0
        } else {
            polarity.clamp(-1.0, 1.0)
        };
        Self {
            polarity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }

    /// Polarity rounded to two decimals, for presentation only.
    pub fn display_polarity(&self) -> f64 {
        (self.polarity * 100.0).round() / 100.0
    }
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            SentimentLabel::Neutral => f.write_str("Neutral"),
            label => write!(f, "{label} ({:.2})", self.display_polarity()),
        }
    }
}

/// Facade that labels the polarity reported by a [`PolarityScorer`].
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer<P> {
    scorer: P,
}

impl<P: PolarityScorer> SentimentScorer<P> {
    /// Wraps a polarity capability.
    pub fn new(scorer: P) -> Self {
        Self { scorer }
    }

    /// Scores `body` and classifies the result.
    pub fn score(&self, body: &str) -> SentimentResult {
        SentimentResult::from_polarity(self.scorer.polarity(body))
    }
}
