mod browse;
mod export;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shelf-cli")]
#[command(about = "Browse a remote product catalog: search, sort, and page through it")]
struct Cli {
    /// Product listing endpoint; overrides `SHELF_API_URL`.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read commands from stdin (search, sort, size, prev, next, page, reload, quit)
    /// and print the table after each one.
    Browse,
    /// Fetch once, apply the given query, and write a standalone HTML page.
    Export {
        /// Title search applied before sorting.
        #[arg(long)]
        search: Option<String>,
        /// Column to sort by.
        #[arg(long, value_enum)]
        sort: Option<SortColumn>,
        /// Sort descending instead of ascending.
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Items per page.
        #[arg(long, default_value = "10")]
        page_size: String,
        /// Page to render; clamped to the available pages.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Output file; stdout when omitted.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortColumn {
    Title,
    Price,
}

impl From<SortColumn> for shelf_view::SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Title => shelf_view::SortKey::Title,
            SortColumn::Price => shelf_view::SortKey::Price,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = shelf_core::load_app_config().context("failed to load configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let api_url = cli.api_url.as_deref().unwrap_or(&config.api_url);
    let client = shelf_client::ProductsClient::new(
        api_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )
    .with_context(|| format!("failed to build client for {api_url}"))?;
    tracing::debug!(endpoint = client.endpoint(), "client ready");

    match cli.command {
        Commands::Browse => browse::run_browse(client).await,
        Commands::Export {
            search,
            sort,
            desc,
            page_size,
            page,
            out,
        } => {
            let query = export::ExportQuery {
                search,
                sort: sort.map(Into::into),
                descending: desc,
                page_size,
                page,
            };
            export::run_export(client, &query, out.as_deref()).await
        }
    }
}
