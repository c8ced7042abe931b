//! Word-cloud layout and SVG rendering.
//!
//! Terms are placed largest first along an elliptical Archimedean spiral that starts
//! at the canvas center; a term that cannot fit is shrunk until it does or falls
//! below the minimum font size.

use crate::ranker::KeywordCount;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;

/// Rough advance width of one glyph relative to the font size.
const GLYPH_WIDTH: f64 = 0.6;
/// Gap kept between neighboring words, in pixels.
const PADDING: f64 = 2.0;
const SPIRAL_STEP: f64 = 0.15;
const SPIRAL_GROWTH: f64 = 1.8;
const SHRINK: f64 = 0.8;

const PALETTE: &[&str] = &[
    "#440154", "#414487", "#2a788e", "#22a884", "#7ad151", "#3b528b", "#21918c", "#5ec962",
];

/// Capability that draws a word cloud from weighted terms.
pub trait CloudRenderer {
    /// Renders `terms` (highest count first) into an image document.
    fn render(&self, terms: &[KeywordCount]) -> String;

    /// MIME type of the rendered document.
    fn content_type(&self) -> &'static str;
}

/// Canvas and font settings for the word cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background fill.
    pub background: String,
    /// Font size of the most frequent term.
    pub max_font: f64,
    /// Smallest font size that is still drawn.
    pub min_font: f64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: "white".to_string(),
            max_font: 96.0,
            min_font: 10.0,
        }
    }
}

/// One word positioned on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    /// The drawn word.
    pub word: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Left edge of the bounding box.
    pub x: f64,
    /// Top edge of the bounding box.
    pub y: f64,
    /// Bounding box width.
    pub width: f64,
    /// Bounding box height.
    pub height: f64,
    /// Fill color.
    pub color: &'static str,
}

impl PlacedWord {
    fn overlaps(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x < self.x + self.width + PADDING
            && self.x < x + width + PADDING
            && y < self.y + self.height + PADDING
            && self.y < y + height + PADDING
    }
}

/// Renders word clouds as standalone SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgCloudRenderer {
    config: CloudConfig,
}

impl SvgCloudRenderer {
    /// Creates a renderer with explicit canvas settings.
    pub fn new(config: CloudConfig) -> Self {
        Self { config }
    }

    /// Canvas settings in use.
    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Positions `terms` on the canvas without drawing them.
    pub fn layout(&self, terms: &[KeywordCount]) -> Vec<PlacedWord> {
        let Some(max_count) = terms.iter().map(|term| term.count).max() else {
            return Vec::new();
        };
        let mut placed: Vec<PlacedWord> = Vec::with_capacity(terms.len());
        for (rank, term) in terms.iter().enumerate() {
            let weight = term.count as f64 / max_count as f64;
            let mut font = (self.config.max_font * weight.sqrt()).max(self.config.min_font);
            while font >= self.config.min_font {
                if let Some(word) = self.place(&term.word, font, rank, &placed) {
                    placed.push(word);
                    break;
                }
                font *= SHRINK;
            }
        }
        placed
    }

    fn place(&self, word: &str, font: f64, rank: usize, placed: &[PlacedWord]) -> Option<PlacedWord> {
        let canvas_w = f64::from(self.config.width);
        let canvas_h = f64::from(self.config.height);
        let width = GLYPH_WIDTH * font * word.chars().count() as f64;
        let height = font;
        if width > canvas_w || height > canvas_h {
            return None;
        }

        let aspect = canvas_w / canvas_h;
        let max_radius = canvas_w.max(canvas_h) / 2.0;
        let mut theta = 0.0f64;
        loop {
            let radius = SPIRAL_GROWTH * theta;
            if radius > max_radius {
                return None;
            }
            let cx = canvas_w / 2.0 + radius * theta.cos() * aspect.sqrt();
            let cy = canvas_h / 2.0 + radius * theta.sin() / aspect.sqrt();
            let x = cx - width / 2.0;
            let y = cy - height / 2.0;
            let inside = x >= 0.0 && y >= 0.0 && x + width <= canvas_w && y + height <= canvas_h;
            if inside && !placed.iter().any(|other| other.overlaps(x, y, width, height)) {
                return Some(PlacedWord {
                    word: word.to_string(),
                    font_size: font,
                    x,
                    y,
                    width,
                    height,
                    color: PALETTE[rank % PALETTE.len()],
                });
            }
            theta += SPIRAL_STEP;
        }
    }
}

impl CloudRenderer for SvgCloudRenderer {
    fn render(&self, terms: &[KeywordCount]) -> String {
        let CloudConfig {
            width,
            height,
            background,
            ..
        } = &self.config;
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" text-rendering="geometricPrecision" shape-rendering="geometricPrecision">"#
        );
        let _ = write!(
            svg,
            r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
            encode_double_quoted_attribute(background)
        );
        for word in self.layout(terms) {
            // SVG places text by its baseline; descenders sit in the bottom fifth of the box.
            let baseline = word.y + word.height * 0.8;
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" font-family="Helvetica, Arial, sans-serif" fill="{}" textLength="{:.1}" lengthAdjust="spacingAndGlyphs">{}</text>"#,
                word.x,
                baseline,
                word.font_size,
                word.color,
                word.width,
                encode_text(&word.word)
            );
        }
        svg.push_str("</svg>");
        svg
    }

    fn content_type(&self) -> &'static str {
        "image/svg+xml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> Vec<KeywordCount> {
        let mut terms = vec![
            KeywordCount::new("climate", 40),
            KeywordCount::new("summit", 22),
            KeywordCount::new("emissions", 15),
            KeywordCount::new("leaders", 9),
        ];
        terms.extend((0..60).map(|i| KeywordCount::new(format!("term{i}"), 1 + i % 4)));
        terms
    }

    #[test]
    fn layout_stays_on_canvas_without_overlaps() {
        let renderer = SvgCloudRenderer::default();
        let placed = renderer.layout(&terms());
        assert!(!placed.is_empty());
        for (i, a) in placed.iter().enumerate() {
            assert!(a.x >= 0.0 && a.y >= 0.0);
            assert!(a.x + a.width <= 800.0 && a.y + a.height <= 400.0);
            for b in &placed[i + 1..] {
                let disjoint = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(disjoint, "{} overlaps {}", a.word, b.word);
            }
        }
    }

    #[test]
    fn most_frequent_term_is_largest_and_centered() {
        let placed = SvgCloudRenderer::default().layout(&terms());
        let first = &placed[0];
        assert_eq!(first.word, "climate");
        assert!(placed.iter().all(|word| word.font_size <= first.font_size));
        let center_x = first.x + first.width / 2.0;
        let center_y = first.y + first.height / 2.0;
        assert!((center_x - 400.0).abs() < 1.0 && (center_y - 200.0).abs() < 1.0);
    }

    #[test]
    fn svg_has_canvas_background_and_words() {
        let renderer = SvgCloudRenderer::default();
        let svg = renderer.render(&terms()[..3]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="800" height="400""#));
        assert!(svg.contains(r#"fill="white""#));
        assert!(svg.contains(">climate</text>"));
        assert!(svg.contains(">emissions</text>"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(renderer.content_type(), "image/svg+xml");
    }

    #[test]
    fn markup_in_words_and_fill_is_escaped() {
        let renderer = SvgCloudRenderer::new(CloudConfig {
            background: "\"><script>".to_string(),
            ..CloudConfig::default()
        });
        let svg = renderer.render(&[KeywordCount::new("r&d<b>", 3)]);
        assert!(svg.contains(">r&amp;d&lt;b&gt;</text>"));
        assert!(svg.contains(r#"<rect width="800" height="400" fill="&quot;"#));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn empty_terms_render_a_blank_canvas() {
        let svg = SvgCloudRenderer::default().render(&[]);
        assert!(!svg.contains("<text"));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn oversized_words_are_shrunk_or_skipped() {
        let renderer = SvgCloudRenderer::new(CloudConfig {
            width: 120,
            height: 60,
            ..CloudConfig::default()
        });
        let placed = renderer.layout(&[KeywordCount::new("extraordinarily", 5)]);
        assert_eq!(placed.len(), 1);
        assert!(placed[0].width <= 120.0);
    }
}
