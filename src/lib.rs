//! # realty-scrape
//!
//! A Rust library for scraping real-estate search results through Chrome DevTools Protocol (CDP),
//! with price normalization and a small market report.
//!
//! ## Features
//!
//! - **Browser Session Management**: Launch or connect to Chrome/Chromium instances
//! - **Listing Extraction**: Best-effort, field-by-field extraction from listing cards
//! - **Offline Extraction**: Run the same extraction over a saved results page
//! - **Market Report**: Price statistics over a batch of listings
//! - **CSV Export**: One row per listing with a fixed header
//!
//! ## Usage
//!
//! ### Scraping a Live Search Page
//!
//! ```rust,no_run
//! use realty_scrape::{BrowserSession, LaunchOptions, ListingScraper, MarketReport, ScrapeOptions};
//!
//! # fn main() -> realty_scrape::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let scraper = ListingScraper::new(&session, ScrapeOptions::default());
//!
//! let records = scraper.scrape("90210")?;
//! realty_scrape::export::save_to_csv(&records, "listings.csv")?;
//!
//! let report = MarketReport::generate(&records);
//! println!("{}", report.to_pretty_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Extracting From Saved HTML
//!
//! ```rust
//! use realty_scrape::{MarketReport, ScrapeOptions, scrape_html};
//!
//! # fn main() -> realty_scrape::Result<()> {
//! let html = r#"<article data-test="property-card">
//!     <span data-test="property-card-price">$450,000</span>
//!     <span data-test="property-card-addr">1 Main St</span>
//! </article>"#;
//!
//! let records = scrape_html(html, None, &ScrapeOptions::default())?;
//! assert_eq!(records.len(), 1);
//!
//! let report = MarketReport::generate(&records);
//! assert_eq!(report.average_price, 450_000.0);
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom Card Sources
//!
//! Anything that can look up text and links by CSS selector can be fed to the
//! extractor by implementing [`CardHandle`]. Lookups return `Ok(None)` when
//! nothing matches; errors are reserved for real failures and are handled
//! according to the [`ExtractionPolicy`].
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and configuration
//! - [`dom`]: Listing card handles (live Chrome elements, parsed HTML)
//! - [`listing`]: Records, extraction, price normalization and reports
//! - [`scrape`]: End-to-end scrape runs
//! - [`export`]: CSV output
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod dom;
pub mod error;
pub mod export;
pub mod listing;
pub mod scrape;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
pub use dom::{CardHandle, ChromeCard, HtmlCard, HtmlSnapshot};
pub use error::{Result, ScrapeError};
pub use listing::{CardSelectors, ExtractionPolicy, ListingExtractor, ListingRecord, MarketReport, normalize_price};
pub use scrape::{ListingScraper, ScrapeOptions, scrape_html};
