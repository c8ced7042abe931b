//! Text and HTML renderings of an analysis.

use crate::pipeline::{AnalysisError, AnalysisResult};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;

/// Shown while an analysis is running.
pub const LOADING_MESSAGE: &str = "Extracting and analyzing content...";

const PAGE_STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;max-width:880px;margin:2rem auto;padding:0 1rem;color:#222}\
form{display:flex;gap:.5rem;margin-bottom:1.5rem}\
input[type=url]{flex:1;padding:.5rem;font-size:1rem}\
button{padding:.5rem 1rem;font-size:1rem}\
.error{background:#fdecea;border:1px solid #f5c2c0;color:#8a1f17;padding:.75rem 1rem;border-radius:4px}\
.loading{display:none;color:#555}\
form.busy+.loading{display:block}\
.snippet{white-space:pre-wrap;background:#f7f7f7;padding:1rem;border-radius:4px}\
.cloud svg{max-width:100%;height:auto}";

/// Upper-cases the first character of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Plain-text report printed by the command line tool.
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Analyzing: {}", result.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "Sentiment: {}", result.sentiment);
    let _ = writeln!(out);
    let _ = writeln!(out, "Top keywords:");
    for keyword in &result.top_keywords {
        let _ = writeln!(
            out,
            "- {}: Mentioned {} times",
            capitalize(&keyword.word),
            keyword.count
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Article preview:");
    let _ = writeln!(out, "{}", result.snippet_display());
    out
}

/// One-line failure text for terminals.
pub fn render_error_text(err: &AnalysisError) -> String {
    format!("{} ({})", err.kind().summary(), err.message())
}

/// Input form with no result below it.
pub fn render_form_page() -> String {
    page("", "")
}

/// Form followed by the analysis and the inline word-cloud document.
pub fn render_result_page(result: &AnalysisResult, cloud_svg: &str) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h2>Analyzing: {}</h2>", encode_text(&result.title));
    let _ = write!(
        body,
        "<p class=\"sentiment\"><strong>Sentiment:</strong> {}</p>",
        encode_text(&result.sentiment.to_string())
    );
    body.push_str("<h3>Top keywords</h3><ol class=\"keywords\">");
    for keyword in &result.top_keywords {
        let _ = write!(
            body,
            "<li>{}: Mentioned {} times</li>",
            encode_text(&capitalize(&keyword.word)),
            keyword.count
        );
    }
    body.push_str("</ol>");
    let _ = write!(body, "<h3>Word cloud</h3><div class=\"cloud\">{cloud_svg}</div>");
    let _ = write!(
        body,
        "<h3>Article preview</h3><div class=\"snippet\">{}</div>",
        encode_text(&result.snippet_display())
    );
    page(&result.url, &body)
}

/// Form followed by a visible failure message.
pub fn render_error_page(url: &str, err: &AnalysisError) -> String {
    let body = format!(
        "<div class=\"error\" data-kind=\"{}\"><strong>{}</strong><br>{}</div>",
        encode_double_quoted_attribute(&err.kind().to_string()),
        encode_text(err.kind().summary()),
        encode_text(err.message())
    );
    page(url, &body)
}

fn page(url: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>trendscope</title><style>{PAGE_STYLE}</style></head><body>\
<h1>Article sentiment and keywords</h1>\
<form method=\"get\" action=\"/analyze\" onsubmit=\"this.classList.add('busy')\">\
<input type=\"url\" name=\"url\" placeholder=\"https://example.com/article\" value=\"{}\" required>\
<button type=\"submit\">Analyze</button></form>\
<p class=\"loading\">{LOADING_MESSAGE}</p>{body}</body></html>",
        encode_double_quoted_attribute(url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::AnalysisErrorKind;
    use crate::ranker::KeywordCount;
    use crate::sentiment::SentimentResult;
    use pretty_assertions::assert_eq;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            url: "https://news.example/a?b=1&c=2".to_string(),
            title: "Markets <rally>".to_string(),
            sentiment: SentimentResult::from_polarity(0.354),
            top_keywords: vec![KeywordCount::new("market", 4), KeywordCount::new("stocks", 2)],
            snippet: "Markets rallied".to_string(),
            truncated: true,
            cloud_terms: vec![KeywordCount::new("market", 4)],
        }
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("market"), "Market");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn text_report_layout() {
        let expected = "Analyzing: Markets <rally>\n\
\n\
Sentiment: Positive (0.35)\n\
\n\
Top keywords:\n\
- Market: Mentioned 4 times\n\
- Stocks: Mentioned 2 times\n\
\n\
Article preview:\n\
Markets rallied...\n";
        assert_eq!(render_text(&sample()), expected);
    }

    #[test]
    fn html_report_escapes_and_embeds_cloud() {
        let html = render_result_page(&sample(), "<svg id=\"cloud\"></svg>");
        assert!(html.contains("Analyzing: Markets &lt;rally&gt;"));
        assert!(html.contains("<li>Market: Mentioned 4 times</li>"));
        assert!(html.contains("<svg id=\"cloud\"></svg>"));
        assert!(html.contains("value=\"https://news.example/a?b=1&amp;c=2\""));
        assert!(html.contains("Markets rallied..."));
        assert!(html.contains(LOADING_MESSAGE));
    }

    #[test]
    fn error_pages_name_the_failure() {
        let extraction = AnalysisError::new(AnalysisErrorKind::ExtractionFailed, "status 404");
        let empty = AnalysisError::new(AnalysisErrorKind::NoReadableContent, "no text");
        let extraction_html = render_error_page("https://x.example/", &extraction);
        let empty_html = render_error_page("https://x.example/", &empty);
        assert!(extraction_html.contains("Could not extract text"));
        assert!(!empty_html.contains("Could not extract text"));
        assert!(empty_html.contains("no readable text"));
        assert_eq!(
            render_error_text(&extraction),
            "Could not extract text. Ensure the URL is public and contains readable text. (status 404)"
        );
    }

    #[test]
    fn form_page_has_url_input() {
        let html = render_form_page();
        assert!(html.contains("<input type=\"url\" name=\"url\""));
        assert!(!html.contains("class=\"error\""));
    }
}
