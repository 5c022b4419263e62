use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

use interrefs::config::{load_config, CONFIG_FILENAME};
use interrefs::interrefs::InterRefs;
use interrefs::types::*;
use tracing_subscriber::EnvFilter;

/// Cross-reference discovery for static-site corpora.
#[derive(Parser)]
#[command(
    name = "interrefs",
    version,
    about = "Compute forward and backward references between rendered documents"
)]
struct Cli {
    /// JSON corpus snapshot: {"articles": [...], "drafts": [...]}
    corpus: PathBuf,
    /// Settings file (TOML)
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    config: PathBuf,
    /// Site root; overrides SITE_URL from the settings file
    #[arg(long)]
    site_url: Option<String>,
    /// Keep at most N forward references per document
    #[arg(long, value_name = "N")]
    forward_refs: Option<usize>,
    /// Keep at most N backward references per document
    #[arg(long, value_name = "N")]
    backward_refs: Option<usize>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> interrefs::errors::Result<()> {
    let mut config = load_config(&cli.config)?;
    if let Some(site_url) = cli.site_url {
        config.site_url = site_url;
    }
    if cli.forward_refs.is_some() {
        config.forward_refs = cli.forward_refs;
    }
    if cli.backward_refs.is_some() {
        config.backward_refs = cli.backward_refs;
    }

    let text = std::fs::read_to_string(&cli.corpus)?;
    let mut corpus: Corpus<Article> = serde_json::from_str(&text)?;
    corpus.finalize();

    InterRefs::new(config).build(&mut corpus)?;

    // Sorted by url so repeated runs print documents in the same order.
    let output: BTreeMap<&str, &ReferenceSet> = corpus
        .iter()
        .map(|article| (article.url.as_str(), &article.interrefs))
        .collect();

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);
    Ok(())
}
