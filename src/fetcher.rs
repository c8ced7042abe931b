//! Article fetching: download a page and reduce it to a title and readable body.

use crate::controls::AnalyzerControls;
use article_parser::extract_article;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io::{self, Read};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// Title and body text of one fetched article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Article headline (may be empty when the page has none).
    pub title: String,
    /// Readable main-content text.
    pub body: String,
}

impl Document {
    /// Builds a document from its parts.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Capability that turns a URL into a [`Document`].
pub trait ArticleFetcher: Send + Sync {
    /// Fetches and extracts the article at `url`.
    fn fetch(&self, url: &str) -> Result<Document, FetchError>;
}

impl<T: ArticleFetcher + ?Sized> ArticleFetcher for Box<T> {
    fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        (**self).fetch(url)
    }
}

/// Raw response bytes awaiting extraction.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL of the fetched document.
    pub url: Url,
    /// HTTP response status code.
    pub status: u16,
    /// Content-Type header (if provided).
    pub content_type: Option<String>,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Extracts the article from the downloaded bytes.
    ///
    /// HTML is run through the article parser; `text/plain` bodies are used as-is.
    pub fn into_document(self) -> Result<Document, FetchError> {
        let kind = ContentKind::classify(self.content_type.as_deref())
            .ok_or_else(|| FetchError::UnsupportedContent(self.content_type.clone().unwrap_or_default()))?;
        let (decoded, lossy) = decode_body(&self.body);
        if lossy {
            debug!(url = %self.url, "response body was not valid UTF-8; decoded lossily");
        }
        match kind {
            ContentKind::Html => {
                let article = extract_article(&decoded);
                Ok(Document::new(article.title, article.body))
            }
            ContentKind::Text => Ok(Document::new(String::new(), decoded.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Html,
    Text,
}

impl ContentKind {
    fn classify(content_type: Option<&str>) -> Option<Self> {
        let Some(raw) = content_type else {
            return Some(Self::Html);
        };
        let mime = raw
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match mime.as_str() {
            "" | "text/html" | "application/xhtml+xml" => Some(Self::Html),
            "text/plain" => Some(Self::Text),
            _ => None,
        }
    }
}

fn decode_body(bytes: &[u8]) -> (Cow<'_, str>, bool) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), false),
        Err(_) => (String::from_utf8_lossy(bytes), true),
    }
}

/// Errors surfaced while fetching an article.
#[derive(Debug)]
pub enum FetchError {
    /// The input was not an absolute `http`/`https` URL.
    InvalidUrl(String),
    /// The request did not finish within the configured bound.
    Timeout(Duration),
    /// Connecting or sending the request failed.
    Request(reqwest::Error),
    /// The server answered with a non-success status.
    Status(u16),
    /// The response was not HTML or plain text.
    UnsupportedContent(String),
    /// Reading the response body failed.
    Body(io::Error),
}

impl FetchError {
    /// True when the failure was caused by the fetch time bound.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(reason) => write!(f, "invalid url: {reason}"),
            Self::Timeout(after) => write!(f, "no response after {}s", after.as_secs_f32()),
            Self::Request(_) => write!(f, "the page could not be reached"),
            Self::Status(status) => write!(f, "the server responded with status {status}"),
            Self::UnsupportedContent(kind) if kind.is_empty() => {
                write!(f, "the page is not a readable text document")
            }
            Self::UnsupportedContent(kind) => {
                write!(f, "unsupported content type {kind}")
            }
            Self::Body(_) => write!(f, "the response body could not be read"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Body(err) => Some(err),
            Self::InvalidUrl(_) | Self::Timeout(_) | Self::Status(_) | Self::UnsupportedContent(_) => {
                None
            }
        }
    }
}

/// Parses and checks that `input` is an absolute web URL.
pub fn parse_web_url(input: &str) -> Result<Url, FetchError> {
    let url = Url::parse(input.trim()).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!("unsupported scheme '{other}'"))),
    }
}

/// Blocking HTTP fetcher with a bounded timeout and body size cap.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
    max_body_bytes: usize,
}

impl HttpFetcher {
    /// Builds a fetcher from the analyzer controls.
    pub fn new(controls: &AnalyzerControls) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(controls.fetch_timeout())
            .user_agent(controls.user_agent())
            .build()
            .map_err(FetchError::Request)?;
        Ok(Self {
            client,
            timeout: controls.fetch_timeout(),
            max_body_bytes: controls.max_body_bytes(),
        })
    }

    /// Downloads `url` without extracting anything.
    pub fn download(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let url = parse_web_url(url)?;
        let started = Instant::now();
        let mut response = self
            .client
            .get(url.clone())
            .header(
                ACCEPT,
                HeaderValue::from_static("text/html,application/xhtml+xml,text/plain;q=0.9"),
            )
            .send()
            .map_err(|err| self.request_error(err))?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "fetch rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let final_url = response.url().clone();

        let mut body = Vec::new();
        (&mut response)
            .take(self.max_body_bytes as u64 + 1)
            .read_to_end(&mut body)
            .map_err(|err| self.body_error(err))?;
        if body.len() > self.max_body_bytes {
            warn!(url = %final_url, limit = self.max_body_bytes, "response body truncated");
            body.truncate(self.max_body_bytes);
        }

        debug!(
            url = %final_url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched page"
        );
        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    fn request_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Request(err)
        }
    }

    fn body_error(&self, err: io::Error) -> FetchError {
        let timed_out = err.kind() == io::ErrorKind::TimedOut
            || err
                .get_ref()
                .and_then(|inner| inner.downcast_ref::<reqwest::Error>())
                .is_some_and(reqwest::Error::is_timeout);
        if timed_out {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Body(err)
        }
    }
}

impl ArticleFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        self.download(url)?.into_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    fn page(content_type: Option<&str>, body: &str) -> FetchedPage {
        FetchedPage {
            url: Url::parse("https://example.com/story").unwrap(),
            status: 200,
            content_type: content_type.map(str::to_string),
            body: body.as_bytes().to_vec(),
        }
    }

    fn fetcher(timeout: Duration) -> HttpFetcher {
        let controls = AnalyzerControls::new(
            timeout,
            10,
            1000,
            200,
            1024 * 1024,
            "trendscope-test".to_string(),
        );
        HttpFetcher::new(&controls).expect("client")
    }

    /// Serves one canned HTTP response on a loopback port and returns its URL.
    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let mut seen = Vec::new();
                while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => seen.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/article")
    }

    fn http_response(status: &str, content_type: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[test]
    fn html_pages_are_reduced_to_article_text() {
        let doc = page(
            Some("text/html; charset=utf-8"),
            "<html><head><title>Big news</title></head><body><nav>Menu</nav>\
             <article><p>Something happened.</p></article></body></html>",
        )
        .into_document()
        .expect("document");
        assert_eq!(doc, Document::new("Big news", "Something happened."));
    }

    #[test]
    fn plain_text_is_used_verbatim() {
        let doc = page(Some("text/plain"), "  just words  \n")
            .into_document()
            .expect("document");
        assert_eq!(doc, Document::new("", "just words"));
    }

    #[test]
    fn binary_content_is_rejected() {
        let err = page(Some("application/pdf"), "%PDF-1.7").into_document().unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedContent(ref kind) if kind == "application/pdf"));
    }

    #[test]
    fn non_web_urls_are_rejected_before_any_request() {
        let fetcher = fetcher(Duration::from_secs(1));
        assert!(matches!(fetcher.fetch("ftp://example.com/file"), Err(FetchError::InvalidUrl(_))));
        assert!(matches!(fetcher.fetch("not a url"), Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn fetches_article_from_a_live_server() {
        let url = serve_once(http_response(
            "200 OK",
            "text/html",
            "<html><head><title>Local</title></head><body><p>Served locally.</p></body></html>",
        ));
        let doc = fetcher(Duration::from_secs(5)).fetch(&url).expect("fetch");
        assert_eq!(doc, Document::new("Local", "Served locally."));
    }

    #[test]
    fn error_statuses_are_reported() {
        let url = serve_once(http_response("404 Not Found", "text/html", "missing"));
        let err = fetcher(Duration::from_secs(5)).fetch(&url).unwrap_err();
        assert!(matches!(err, FetchError::Status(404)));
    }

    #[test]
    fn unreachable_hosts_fail_with_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let err = fetcher(Duration::from_secs(5))
            .fetch(&format!("http://{addr}/"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Request(_)), "got {err:?}");
    }

    #[test]
    fn silent_servers_time_out() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        let handle = thread::spawn(move || {
            let held = listener.accept();
            thread::sleep(Duration::from_millis(1500));
            drop(held);
        });
        let err = fetcher(Duration::from_millis(300))
            .fetch(&format!("http://{addr}/"))
            .unwrap_err();
        assert!(err.is_timeout(), "got {err:?}");
        handle.join().expect("server thread");
    }
}
