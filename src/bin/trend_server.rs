use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trendscope::report::{render_error_page, render_form_page, render_result_page};
use trendscope::{
    build_analyzer, AnalysisError, AnalysisErrorKind, AnalysisResult, Cli, CloudRenderer,
    HttpAnalyzer, SvgCloudRenderer,
};

#[derive(Parser, Debug)]
#[command(
    name = "trendscope-server",
    version,
    about = "HTTP form and JSON API for article sentiment and keyword analysis"
)]
struct ServerCli {
    /// Address to bind the HTTP server to (host:port).
    #[arg(long, env = "TRENDSCOPE_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    #[command(flatten)]
    controls: Cli,
}

#[derive(Clone)]
struct AppState {
    analyzer: Arc<HttpAnalyzer>,
    renderer: Arc<SvgCloudRenderer>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct UrlQuery {
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = ServerCli::parse();
    let addr: SocketAddr = cli
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", cli.bind))?;
    // The blocking HTTP client owns a runtime of its own; create and drop it outside tokio.
    let analyzer = Arc::new(build_analyzer(&cli.controls)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(serve(addr, analyzer.clone()))
}

async fn serve(addr: SocketAddr, analyzer: Arc<HttpAnalyzer>) -> Result<()> {
    let state = AppState {
        analyzer,
        renderer: Arc::new(SvgCloudRenderer::default()),
    };
    let app = Router::new()
        .route("/", get(form_page))
        .route("/analyze", get(analyze_page))
        .route("/healthz", get(healthz))
        .route("/v1/analyze", post(analyze_handler))
        .route("/v1/cloud", get(cloud_handler))
        .with_state(state);

    println!("trendscope-server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .await
        .context("server shutdown")?;
    Ok(())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn form_page() -> Html<String> {
    Html(render_form_page())
}

async fn analyze_page(State(state): State<AppState>, Query(query): Query<UrlQuery>) -> Response {
    let url = query.url.unwrap_or_default();
    if url.trim().is_empty() {
        return Html(render_form_page()).into_response();
    }
    match run_analysis(&state, url.clone()).await {
        Ok(result) => {
            let svg = state.renderer.render(&result.cloud_terms);
            Html(render_result_page(&result, &svg)).into_response()
        }
        Err(err) => (status_for(err.kind()), Html(render_error_page(&url, &err))).into_response(),
    }
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(bad_request("url must not be empty"));
    }
    let result = run_analysis(&state, request.url)
        .await
        .map_err(analysis_error)?;
    Ok(Json(result))
}

async fn cloud_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ApiError> {
    let url = query.url.unwrap_or_default();
    if url.trim().is_empty() {
        return Err(bad_request("url must not be empty"));
    }
    let result = run_analysis(&state, url).await.map_err(analysis_error)?;
    let svg = state.renderer.render(&result.cloud_terms);
    Ok(([(header::CONTENT_TYPE, state.renderer.content_type())], svg).into_response())
}

async fn run_analysis(state: &AppState, url: String) -> Result<AnalysisResult, AnalysisError> {
    let analyzer = state.analyzer.clone();
    let start = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || analyzer.analyze(&url)).await;
    match outcome {
        Ok(result) => {
            info!(
                latency_ms = start.elapsed().as_secs_f64() * 1000.0,
                ok = result.is_ok(),
                "request served"
            );
            result
        }
        Err(err) => {
            error!(error = %err, "analysis task join error");
            Err(AnalysisError::new(
                AnalysisErrorKind::ExtractionFailed,
                "analysis task did not complete",
            ))
        }
    }
}

fn status_for(kind: AnalysisErrorKind) -> StatusCode {
    match kind {
        AnalysisErrorKind::NoReadableContent => StatusCode::UNPROCESSABLE_ENTITY,
        AnalysisErrorKind::ExtractionFailed => StatusCode::BAD_GATEWAY,
        AnalysisErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
    }
}

fn kind_code(kind: AnalysisErrorKind) -> &'static str {
    match kind {
        AnalysisErrorKind::NoReadableContent => "no_readable_content",
        AnalysisErrorKind::ExtractionFailed => "extraction_failed",
        AnalysisErrorKind::Timeout => "timeout",
    }
}

fn analysis_error(err: AnalysisError) -> ApiError {
    (
        status_for(err.kind()),
        Json(ErrorBody {
            kind: kind_code(err.kind()),
            message: format!("{} {}", err.kind().summary(), err.message()),
        }),
    )
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            kind: "invalid_request",
            message: message.into(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_failure_kind() {
        assert_eq!(
            status_for(AnalysisErrorKind::NoReadableContent),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_for(AnalysisErrorKind::ExtractionFailed), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(AnalysisErrorKind::Timeout), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn kind_codes_match_serialized_kinds() {
        for kind in [
            AnalysisErrorKind::NoReadableContent,
            AnalysisErrorKind::ExtractionFailed,
            AnalysisErrorKind::Timeout,
        ] {
            let encoded = serde_json::to_value(kind).expect("encode");
            assert_eq!(encoded, serde_json::Value::from(kind_code(kind)));
        }
    }

    #[test]
    fn error_body_carries_kind_and_message() {
        let (status, Json(body)) =
            analysis_error(AnalysisError::new(AnalysisErrorKind::Timeout, "after 20s"));
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body.kind, "timeout");
        assert!(body.message.ends_with("after 20s"));
    }
}
