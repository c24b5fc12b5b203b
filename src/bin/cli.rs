//! realty-scrape command line
//!
//! Scrapes the listing search page for a zip code, saves the listings to CSV
//! and prints a market report.

use anyhow::Context;
use clap::Parser;
use realty_scrape::{BrowserSession, ConnectionOptions, ExtractionPolicy, LaunchOptions, ListingRecord,
                    ListingScraper, MarketReport, ScrapeOptions, export, scrape_html};
use std::{path::PathBuf, time::Duration};
use url::Url;

#[derive(Parser)]
#[command(name = "realty-scrape")]
#[command(version)]
#[command(about = "Scrape real-estate listings for a zip code", long_about = None)]
struct Cli {
    /// Zip code to search
    #[arg(default_value = "90210")]
    zip_code: String,

    /// Maximum number of listing cards to extract
    #[arg(long, default_value_t = realty_scrape::listing::DEFAULT_MAX_CARDS)]
    max_cards: usize,

    /// Overall time budget in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Seconds to wait for each card selector
    #[arg(long, default_value_t = 15)]
    wait: u64,

    /// Seconds to pause after page load
    #[arg(long, default_value_t = 5)]
    settle: u64,

    /// Search URL template, `{zip}` is replaced with the zip code
    #[arg(long, default_value = realty_scrape::scrape::DEFAULT_SEARCH_URL)]
    search_url: String,

    /// CSV output path (default: real_estate_data_<zip>_<date>.csv)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Fail on the first card that cannot be processed
    #[arg(long)]
    strict: bool,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// Persistent browser profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<PathBuf>,

    /// WebSocket endpoint URL for remote browser connection
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Extract from a saved results page instead of launching a browser
    #[arg(long, value_name = "FILE")]
    from_html: Option<PathBuf>,

    /// Base URL for resolving relative links in --from-html pages
    #[arg(long, value_name = "URL", requires = "from_html")]
    base_url: Option<Url>,
}

impl Cli {
    fn scrape_options(&self) -> ScrapeOptions {
        let policy = if self.strict {
            ExtractionPolicy::Strict
        } else {
            ExtractionPolicy::Lenient
        };

        ScrapeOptions::new()
            .search_url(self.search_url.clone())
            .max_cards(self.max_cards)
            .timeout(Duration::from_secs(self.timeout))
            .element_wait(Duration::from_secs(self.wait))
            .settle_delay(Duration::from_secs(self.settle))
            .policy(policy)
    }

    fn launch_options(&self) -> LaunchOptions {
        let mut options = LaunchOptions::new().headless(!self.headed);
        if let Some(ref path) = self.chrome_path {
            options = options.chrome_path(path);
        }
        if let Some(ref dir) = self.user_data_dir {
            options = options.user_data_dir(dir);
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = cli.scrape_options();

    log::info!("Starting scrape for zip code {}", cli.zip_code);

    let records = match cli.from_html {
        Some(ref file) => {
            let html = std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
            scrape_html(&html, cli.base_url.clone(), &options)?
        }
        None => scrape_live(&cli, options)?,
    };

    if records.is_empty() {
        println!("No properties were found. Please check the selectors or the search URL.");
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| export::default_output_path(&cli.zip_code, chrono::Local::now().date_naive()));
    export::save_to_csv(&records, &output)?;

    let report = MarketReport::generate(&records);
    println!("\nMarket Report:");
    println!("{}", report.to_pretty_json()?);

    Ok(())
}

fn scrape_live(cli: &Cli, options: ScrapeOptions) -> anyhow::Result<Vec<ListingRecord>> {
    let session = match cli.ws_endpoint {
        Some(ref endpoint) => {
            log::info!("Connecting to browser at {}", endpoint);
            BrowserSession::connect(ConnectionOptions::new(endpoint.clone()))
        }
        None => {
            log::info!("Browser mode: {}", if cli.headed { "headed" } else { "headless" });
            BrowserSession::launch(cli.launch_options())
        }
    }
    .context("Failed to start browser session")?;

    let result = ListingScraper::new(&session, options).scrape(&cli.zip_code);

    if let Err(e) = session.close() {
        log::debug!("Failed to close browser tabs: {}", e);
    }

    Ok(result?)
}
