use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use lintpipe::cli::Cli;
use lintpipe::config::Config;
use lintpipe::findings::Finding;
use lintpipe::runner::LintRunner;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let runner = match config.analyzer {
        Some(ref path) => LintRunner::new(PathBuf::from(path)),
        None => match LintRunner::bundled() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
    }
    .with_config_path(config.analyzer_config.as_ref().map(PathBuf::from))
    .with_timeout(config.timeout.map(Duration::from_secs));

    let mut findings: Vec<Finding> = Vec::new();
    for path in &cli.paths {
        match runner.lint(path).await {
            Ok(mut batch) => findings.append(&mut batch),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }

    match config.format.as_str() {
        "json" => match serde_json::to_string_pretty(&findings) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
        _ => {
            for f in &findings {
                println!(
                    "{}:{}:{}: {} ({})",
                    f.filename, f.line, f.column, f.text, f.category
                );
            }
        }
    }
}
