use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}: {err}", env!("CARGO_PKG_NAME"));
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let mut output = Output::Json;
    let mut source = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", usage(&program));
                return Ok(());
            }
            "-V" | "--version" => {
                println!("{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--text" => output = Output::Text,
            _ if source.is_some() => {
                return Err(format!("unexpected argument: {arg}\n{}", usage(&program)));
            }
            _ => source = Some(arg),
        }
    }

    let html = match source.as_deref() {
        None | Some("-") => read_stdin()?,
        Some(path) => {
            fs::read_to_string(path).map_err(|err| format!("failed to read '{path}': {err}"))?
        }
    };

    let rendered = match output {
        Output::Json => {
            let article = article_parser::extract_article(&html);
            if article.is_empty() {
                return Err("no readable article text found".to_string());
            }
            serde_json::to_string_pretty(&article)
        }
        Output::Text => {
            let article = article_parser::extract_article(&html);
            if article.is_empty() {
                return Err("no readable article text found".to_string());
            }
            Ok(format!("{}\n\n{}", article.title, article.body))
        }
    }
    .map_err(|err| format!("failed to serialize JSON: {err}"))?;
    println!("{rendered}");
    Ok(())
}

enum Output {
    Json,
    Text,
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|err| format!("failed to read stdin: {err}"))?;
    Ok(buf)
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--text] [HTML_FILE|-]\n\n\
         Reads a saved article page (or stdin when no path or '-' is given) and prints the\n\
         extracted title and body as JSON.\n\n\
         Options:\n  \
         --text          Print the title and body as plain text\n  \
         -h, --help      Show this message\n  \
         -V, --version   Print package version"
    )
}
