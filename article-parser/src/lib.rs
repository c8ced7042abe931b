//! Extract a title and readable body text from article HTML.
//!
//! This crate focuses on pulling the main story text of news and blog pages
//! while skipping common non-content elements like navigation, share bars,
//! comment threads, and advertising slots.

use scraper::{node::Node, ElementRef, Html, Selector};
use serde::Serialize;

const IGNORE_TAGS: &[&str] = &[
    "aside", "button", "figcaption", "figure", "footer", "form", "header", "iframe", "nav",
    "noscript", "script", "select", "style", "svg", "table", "template",
];

const IGNORE_CLASSES: &[&str] = &[
    "ad",
    "ads",
    "advert",
    "advertisement",
    "author-bio",
    "breadcrumb",
    "breadcrumbs",
    "byline",
    "caption",
    "comment",
    "comments",
    "cookie-banner",
    "cookie-notice",
    "hidden",
    "menu",
    "newsletter",
    "paywall",
    "promo",
    "recommended",
    "related",
    "related-articles",
    "share",
    "sharing",
    "sidebar",
    "social",
    "sponsored",
    "sr-only",
    "subscribe",
    "tags",
    "toc",
    "visually-hidden",
];

const IGNORE_CLASS_PREFIXES: &[&str] = &["ad-", "comment-", "newsletter-", "share-", "social-"];

/// Candidate containers for the article body, most specific first.
const CONTENT_ROOTS: &[&str] = &[
    "[itemprop=\"articleBody\"]",
    "article",
    "[role=\"main\"]",
    "main",
    ".article-body",
    ".article-content",
    ".entry-content",
    ".post-content",
    "#content",
];

/// Elements whose text forms one body block.
const BLOCK_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "pre"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Paragraph,
    Heading,
    ListItem,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ContentBlock {
    kind: BlockKind,
    text: String,
}

/// Title plus readable body of an article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Best available headline (`og:title`, `<title>`, then the first `<h1>`).
    pub title: String,
    /// Body blocks joined with blank lines.
    pub body: String,
}

impl Article {
    /// True when no readable body text survived extraction.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Extracts the title and body text of an article page.
///
/// # Example
///
/// ```
/// use article_parser::extract_article;
///
/// let html = r#"<html><head><title>Launch day</title></head>
///   <body><article><p>Hello <span>world</span>.</p></article></body></html>"#;
/// let article = extract_article(html);
/// assert_eq!(article.title, "Launch day");
/// assert_eq!(article.body, "Hello world.");
/// ```
pub fn extract_article(html: &str) -> Article {
    let document = Html::parse_document(html);
    let title = extract_title(&document);
    let body = blocks_from_document(&document)
        .into_iter()
        .filter(|block| !(block.kind == BlockKind::Heading && block.text == title))
        .map(|block| block.text)
        .collect::<Vec<_>>()
        .join("\n\n");
    Article { title, body }
}

fn blocks_from_document(document: &Html) -> Vec<ContentBlock> {
    let mut best: Option<Vec<ContentBlock>> = None;
    let mut best_len = 0usize;
    for selector in CONTENT_ROOTS {
        let parsed = Selector::parse(selector).expect("valid content root selector");
        for root in document.select(&parsed) {
            if has_ignored_ancestor(&root) {
                continue;
            }
            let blocks = collect_blocks(root);
            let len = paragraph_len(&blocks);
            if len > best_len {
                best_len = len;
                best = Some(blocks);
            }
        }
    }

    match best {
        Some(blocks) => blocks,
        None => {
            let body = Selector::parse("body").expect("valid body selector");
            let root = document
                .select(&body)
                .next()
                .unwrap_or_else(|| document.root_element());
            collect_blocks(root)
        }
    }
}

fn collect_blocks(root: ElementRef<'_>) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let selector = Selector::parse(&BLOCK_TAGS.join(", ")).expect("valid selector for content nodes");
    for node in root.select(&selector) {
        // An outer block already carries the text of blocks nested inside it.
        if has_ignored_ancestor(&node) || nested_in_block(&node, &root) {
            continue;
        }
        let mut buf = String::new();
        collect_text(node, &mut buf);
        let kind = classify_block(node.value().name());
        let text = match kind {
            BlockKind::Code => normalize_code(&buf),
            _ => normalize_whitespace(&buf),
        };
        if !text.is_empty() {
            blocks.push(ContentBlock { kind, text });
        }
    }

    if blocks.is_empty() {
        let mut buf = String::new();
        collect_text(root, &mut buf);
        let normalized = normalize_whitespace(&buf);
        if !normalized.is_empty() {
            blocks.push(ContentBlock {
                kind: BlockKind::Paragraph,
                text: normalized,
            });
        }
    }

    blocks
}

fn paragraph_len(blocks: &[ContentBlock]) -> usize {
    blocks
        .iter()
        .filter(|block| block.kind == BlockKind::Paragraph)
        .map(|block| block.text.len())
        .sum()
}

fn extract_title(document: &Html) -> String {
    let og_title = Selector::parse("meta[property=\"og:title\"]").expect("valid og:title selector");
    if let Some(content) = document
        .select(&og_title)
        .filter_map(|meta| meta.value().attr("content"))
        .map(normalize_whitespace)
        .find(|title| !title.is_empty())
    {
        return content;
    }

    for selector in ["title", "h1"] {
        let parsed = Selector::parse(selector).expect("valid title selector");
        if let Some(text) = document
            .select(&parsed)
            .map(|node| normalize_whitespace(&node.text().collect::<String>()))
            .find(|title| !title.is_empty())
        {
            return text;
        }
    }
    String::new()
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if should_ignore_element(element.value()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    if matches!(child.value().name(), "br" | "p" | "li" | "div") {
                        out.push(' ');
                    }
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}

fn should_ignore_element(element: &scraper::node::Element) -> bool {
    let tag_name = element.name();
    if tag_name == "body" || tag_name == "html" {
        return false;
    }
    if IGNORE_TAGS.contains(&tag_name) {
        return true;
    }
    if element.attr("hidden").is_some() || element.attr("aria-hidden") == Some("true") {
        return true;
    }
    for class_name in element.classes() {
        if IGNORE_CLASSES.contains(&class_name)
            || IGNORE_CLASS_PREFIXES
                .iter()
                .any(|prefix| class_name.starts_with(prefix))
        {
            return true;
        }
    }
    false
}

fn has_ignored_ancestor(node: &ElementRef<'_>) -> bool {
    if should_ignore_element(node.value()) {
        return true;
    }
    for ancestor in node.ancestors() {
        if let Some(element) = ElementRef::wrap(ancestor) {
            if should_ignore_element(element.value()) {
                return true;
            }
        }
    }
    false
}

fn nested_in_block(node: &ElementRef<'_>, root: &ElementRef<'_>) -> bool {
    for ancestor in node.ancestors() {
        if ancestor.id() == root.id() {
            return false;
        }
        if ElementRef::wrap(ancestor).is_some_and(|element| BLOCK_TAGS.contains(&element.value().name())) {
            return true;
        }
    }
    false
}

fn normalize_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    out.trim().to_string()
}

fn normalize_code(input: &str) -> String {
    input.trim().to_string()
}

fn classify_block(tag: &str) -> BlockKind {
    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => BlockKind::Heading,
        "li" => BlockKind::ListItem,
        "pre" => BlockKind::Code,
        _ => BlockKind::Paragraph,
    }
}
