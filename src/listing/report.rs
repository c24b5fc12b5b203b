use crate::error::Result;
use crate::listing::record::ListingRecord;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Aggregate price statistics over a batch of listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketReport {
    /// Number of records in the batch, priced or not
    pub total_listings: usize,

    /// Number of records whose price parsed to a number
    pub properties_with_prices: usize,

    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,

    /// Date the report was generated
    pub report_date: NaiveDate,
}

impl MarketReport {
    /// Build a report dated today
    pub fn generate(records: &[ListingRecord]) -> Self {
        Self::generate_on(records, Local::now().date_naive())
    }

    /// Build a report with an explicit report date
    pub fn generate_on(records: &[ListingRecord], report_date: NaiveDate) -> Self {
        let prices: Vec<f64> = records.iter().filter_map(ListingRecord::parsed_price).collect();

        let (average_price, min_price, max_price) = if prices.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let sum: f64 = prices.iter().sum();
            let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
            let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (round_cents(sum / prices.len() as f64), round_cents(min), round_cents(max))
        };

        Self {
            total_listings: records.len(),
            properties_with_prices: prices.len(),
            average_price,
            min_price,
            max_price,
            report_date,
        }
    }

    /// Render as 2-space indented JSON
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
