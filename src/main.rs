//! # Corpdesk — company-knowledge Q&A shell
//!
//! Answers questions about a single company from a static text corpus.
//!
//! Usage:
//!   corpdesk --corpus data/company.txt --ask "What is the revenue?"
//!   corpdesk --corpus data/company.txt      # interactive loop
//!   corpdesk --top-k 3 --verbose

use anyhow::Result;
use clap::Parser;
use corpdesk_core::config::CorpdeskConfig;
use corpdesk_engine::Engine;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "corpdesk",
    version,
    about = "Company-knowledge Q&A over a static text corpus"
)]
struct Cli {
    /// Corpus text file (overrides the configured path)
    #[arg(short, long)]
    corpus: Option<String>,

    /// Answer a single question and exit
    #[arg(short, long)]
    ask: Option<String>,

    /// Retrieval depth (overrides the configured top-k)
    #[arg(long)]
    top_k: Option<usize>,

    /// Alternate config file
    #[arg(long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => CorpdeskConfig::load_from(Path::new(&expand_path(path)))?,
        None => CorpdeskConfig::load()?,
    };
    if let Some(top_k) = cli.top_k {
        config.retrieval.top_k = top_k;
    }
    if let Some(corpus) = &cli.corpus {
        config.corpus_path = corpus.clone();
    }

    let company = config.answer.company_name.clone();
    let corpus_path = config.corpus_path.clone();
    let mut engine = Engine::new(config);

    if corpus_path.is_empty() {
        tracing::warn!("No corpus configured; answers will be generic");
    } else {
        let path = expand_path(&corpus_path);
        match engine.load_corpus(Path::new(&path)) {
            Ok(count) => tracing::info!("Loaded {count} chunks from {path}"),
            Err(e) => {
                tracing::warn!("Could not load corpus {path}: {e}; starting with an empty index");
            }
        }
    }

    if let Some(question) = &cli.ask {
        println!("{}", engine.answer(question).text);
        return Ok(());
    }

    println!("Ask about {company} (type 'exit' to quit)");
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }
        println!("{}\n", engine.answer(question).text);
    }

    Ok(())
}
