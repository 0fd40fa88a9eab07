use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tfidf_rank::{output, FileSource, OutputFormat, PipelineOptions, Settings};

/// Exit status when some sources could not be read but the rest were scored.
const EXIT_PARTIAL: i32 = 2;

/// tfidf_rank: list the most distinctive terms of each document in a corpus.
///
/// Every source file is one document. Scores are TF × ln(N / (1 + DF)),
/// printed per document from highest to lowest.
#[derive(Parser)]
#[command(name = "tfidf_rank")]
#[command(version = "0.1.0")]
#[command(about = "Rank the terms of each document by TF-IDF", long_about = None)]
struct Cli {
    /// Text files to score, one document per file
    #[arg(value_name = "SOURCES", default_value = "purchases.txt")]
    sources: Vec<String>,

    /// Keep only the N best terms per document (0 = all) [env: TFIDF_TOP_K]
    #[arg(short = 'k', long, value_name = "N")]
    top_k: Option<usize>,

    /// Output format [env: TFIDF_FORMAT]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Worker threads (0 = one per CPU) [env: TFIDF_THREADS]
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,
}

impl Cli {
    /// Apply CLI overrides on top of environment settings.
    fn settings(&self) -> Settings {
        let env = Settings::from_env();
        Settings {
            top_k: self.top_k.unwrap_or(env.top_k),
            format: self.format.unwrap_or(env.format),
            threads: self.threads.unwrap_or(env.threads),
        }
    }
}

/// Returns `true` when every source was scored.
fn execute(cli: &Cli) -> Result<bool> {
    let settings = cli.settings();
    let options = PipelineOptions {
        top_k: settings.top_k_limit(),
        threads: settings.threads,
    };

    let report = tfidf_rank::run(&FileSource, &cli.sources, options)
        .context("Failed to compute TF-IDF scores")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::render(&mut out, &report, settings.format)?;

    Ok(report.skipped.is_empty())
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tfidf_rank=info")),
        )
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_PARTIAL),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
