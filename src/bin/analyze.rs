use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trendscope::report::{render_error_text, render_text, LOADING_MESSAGE};
use trendscope::{build_analyzer, Cli, CloudRenderer, SvgCloudRenderer};

#[derive(Parser, Debug)]
#[command(
    name = "trendscope",
    version,
    about = "Score the sentiment and rank the keywords of an online article"
)]
struct AnalyzeCli {
    /// Article URL to analyze.
    url: String,

    /// Print the full analysis as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Write the word cloud as an SVG document to this path.
    #[arg(long, value_name = "PATH")]
    cloud_svg: Option<PathBuf>,

    #[command(flatten)]
    controls: Cli,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = AnalyzeCli::parse();
    let analyzer = build_analyzer(&cli.controls)?;

    eprintln!("{LOADING_MESSAGE}");
    let result = match analyzer.analyze(&cli.url) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {}", render_error_text(&err));
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(path) = &cli.cloud_svg {
        let svg = SvgCloudRenderer::default().render(&result.cloud_terms);
        fs::write(path, svg)
            .with_context(|| format!("failed to write word cloud to {}", path.display()))?;
    }

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &result).context("failed to encode result")?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_text(&result))?;
    }
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
