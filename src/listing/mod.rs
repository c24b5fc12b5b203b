//! Listing extraction and market reporting
//!
//! - ListingRecord: one scraped property
//! - ListingExtractor: card handles to records
//! - normalize_price: displayed price to currency amount
//! - MarketReport: price statistics over a batch of records

pub mod extract;
pub mod price;
pub mod record;
pub mod report;
pub mod selectors;

pub use extract::{DEFAULT_MAX_CARDS, ExtractionPolicy, ListingExtractor};
pub use price::normalize_price;
pub use record::ListingRecord;
pub use report::MarketReport;
pub use selectors::CardSelectors;
