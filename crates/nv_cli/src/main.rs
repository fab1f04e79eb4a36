use clap::Parser;
use nv_core::{Query, Result};
use nv_fetcher::config::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use nv_fetcher::{NewsApiSource, NewsSource, SourceConfig};
use nv_sentiment::VerdictAnalyzer;
use tracing::{error, info};

mod report;

#[derive(Parser, Debug)]
#[command(name = "nv", author, version, about = "Company news sentiment verdict", long_about = None)]
struct Cli {
    /// Company name to search news for
    company: String,

    /// Trailing window in days
    #[arg(long, default_value_t = 3)]
    days: u32,

    /// Maximum number of articles to fetch
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// News API key; read from NEWS_API_KEY when omitted
    #[arg(long)]
    api_key: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Search all outlets instead of the financial domain list
    #[arg(long)]
    any_domain: bool,

    /// Keep articles even when the title does not mention the company
    #[arg(long)]
    no_title_match: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let query = Query::new(cli.company, cli.days)?;

    let mut config = match cli.api_key {
        Some(key) => SourceConfig::new(key)?,
        None => SourceConfig::from_env()?,
    };
    config.page_size = cli.page_size;
    config.timeout_secs = cli.timeout;
    if cli.any_domain {
        config.domains.clear();
    }
    if cli.no_title_match {
        config.title_match = false;
    }

    let source = NewsApiSource::new(config)?;
    let analyzer = VerdictAnalyzer::with_default_scorer();
    info!(
        "🗞️ Fetching news for '{}' over the last {} days (via {})",
        query.company,
        query.horizon_days,
        source.name()
    );

    let articles = source.fetch(&query).await?;
    let (scored, verdict) = analyzer.analyze(&query, &articles)?;
    info!("🧮 Scored {} articles", scored.len());

    println!("\nTop {} analyzed articles:", scored.len());
    println!("{}", report::article_table(&scored));
    println!("{}", report::verdict_summary(&verdict));
    Ok(())
}
