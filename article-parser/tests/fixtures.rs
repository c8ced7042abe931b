use pretty_assertions::assert_eq;

use article_parser::extract_article;

fn render(html: &str) -> String {
    let article = extract_article(html);
    format!("{}\n\n{}", article.title, article.body)
}

#[test]
fn fixtures_match_expected_output() {
    let cases = [
        (
            "news-with-chrome",
            include_str!("fixtures/html/news-with-chrome.html"),
            include_str!("fixtures/expected/news-with-chrome.txt"),
        ),
        (
            "blog-entry-content",
            include_str!("fixtures/html/blog-entry-content.html"),
            include_str!("fixtures/expected/blog-entry-content.txt"),
        ),
        (
            "nested-lists",
            include_str!("fixtures/html/nested-lists.html"),
            include_str!("fixtures/expected/nested-lists.txt"),
        ),
        (
            "bare-body",
            include_str!("fixtures/html/bare-body.html"),
            include_str!("fixtures/expected/bare-body.txt"),
        ),
    ];

    for (name, html, expected) in cases {
        assert_eq!(
            render(html),
            expected.trim_end_matches('\n'),
            "fixture mismatch: {name}"
        );
    }
}
