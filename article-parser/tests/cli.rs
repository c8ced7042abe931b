use std::io::Write;
use std::process::{Command, Stdio};

fn expected_with_newline(expected: &str) -> String {
    format!("{}\n", expected.trim_end_matches('\n'))
}

#[test]
fn cli_reads_file_path_as_text() {
    let output = Command::new(env!("CARGO_BIN_EXE_article_parser"))
        .arg("--text")
        .arg("tests/fixtures/html/news-with-chrome.html")
        .output()
        .expect("run CLI");

    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let expected = include_str!("fixtures/expected/news-with-chrome.txt");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        expected_with_newline(expected),
    );
}

#[test]
fn cli_reads_stdin_and_prints_json() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_article_parser"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn CLI");

    let html = include_str!("fixtures/html/blog-entry-content.html");
    child
        .stdin
        .as_mut()
        .expect("stdin open")
        .write_all(html.as_bytes())
        .expect("write stdin");

    let output = child.wait_with_output().expect("read CLI output");
    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(parsed["title"], "Notes on sourdough");
    assert!(parsed["body"]
        .as_str()
        .expect("body string")
        .starts_with("My first loaf was a disaster."));
}

#[test]
fn cli_fails_on_pages_without_text() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_article_parser"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn CLI");

    child
        .stdin
        .as_mut()
        .expect("stdin open")
        .write_all(b"<html><body><nav>Home</nav></body></html>")
        .expect("write stdin");

    let output = child.wait_with_output().expect("read CLI output");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no readable article text"));
}
