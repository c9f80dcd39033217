use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pagemood_common::observability::{init_logging, LogConfig};
use pagemood_config::{AnalyzerConfig, PagemoodConfigLoader, DEFAULT_TARGET_URL};
use pagemood_language::client::GoogleLanguageClient;
use pagemood_language::credentials::ApiCredentials;

mod pipeline;

/// Analyse a web page: extract its important text, list Wikipedia links for
/// the entities the language service recognizes, and summarize the page's
/// sentiment as an emoji.
#[derive(Debug, Parser)]
#[command(name = "pagemood")]
struct Args {
    /// Page to analyse. Falls back to the config file, then the default.
    url: Option<String>,

    /// Optional YAML config file (`KEYDIR_PATH` alone is enough without one).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mirror log events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LogConfig {
        verbose: args.verbose,
        ..LogConfig::default()
    })?;

    // 1) Resolve configuration (file wins over bare environment).
    let (url, analyzer_cfg) = match &args.config {
        Some(path) => {
            let cfg = PagemoodConfigLoader::new()
                .with_file(path)
                .load()
                .context("config load failed")?;
            (cfg.target_url(args.url.as_deref()), cfg.analyzer)
        }
        None => {
            let analyzer = AnalyzerConfig::from_env().context("config load failed")?;
            (
                args.url.unwrap_or_else(|| DEFAULT_TARGET_URL.to_string()),
                analyzer,
            )
        }
    };

    // 2) Load credentials once, before any network call.
    let credentials = ApiCredentials::from_key_file(Path::new(&analyzer_cfg.key_path))
        .context("credential setup failed")?;
    let client = match analyzer_cfg.endpoint.as_deref() {
        Some(endpoint) => {
            GoogleLanguageClient::with_endpoint(credentials, analyzer_cfg.language, endpoint)
        }
        None => GoogleLanguageClient::new(credentials, analyzer_cfg.language),
    }
    .context("analyzer setup failed")?;

    // 3) Run the pipeline; each stage names itself on failure.
    let summary = pipeline::run(&url, &client).await?;

    tracing::info!(
        url = %url,
        wiki_link_count = summary.wiki_links.len(),
        emoji = summary.emoji,
        "pagemood.done"
    );
    Ok(())
}
