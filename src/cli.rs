use clap::Parser;

/// lintpipe — run the bundled Go linter and print its findings
#[derive(Parser, Debug, Clone)]
#[command(name = "lintpipe", version, about)]
pub struct Cli {
    /// Files to lint
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Path to the analyzer binary (default: bundled next to this executable)
    #[arg(long)]
    pub analyzer: Option<String>,

    /// Analyzer rule configuration file, forwarded via -config_path
    #[arg(long)]
    pub analyzer_config: Option<String>,

    /// Output format (text, json)
    #[arg(long)]
    pub format: Option<String>,

    /// Analyzer timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<String>,
}
