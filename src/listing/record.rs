use crate::listing::price::normalize_price;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scraped property, possibly partial
///
/// Field order is the column order of the CSV output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingRecord {
    /// Date the card was extracted, serialized as `YYYY-MM-DD`
    pub scrape_date: NaiveDate,

    /// Absolute link to the listing detail page
    pub url: Option<String>,

    /// Price as displayed on the card (e.g. "$1.2M", "$450,000")
    pub price: Option<String>,

    /// Street address as displayed on the card
    pub address: Option<String>,

    /// Bedroom count (never populated by card extraction)
    pub beds: Option<u32>,

    /// Bathroom count (never populated by card extraction)
    pub baths: Option<f32>,

    /// Living area in square feet (never populated by card extraction)
    pub sqft: Option<u32>,
}

impl ListingRecord {
    /// Create an empty record stamped with the given date
    pub fn new(scrape_date: NaiveDate) -> Self {
        Self {
            scrape_date,
            url: None,
            price: None,
            address: None,
            beds: None,
            baths: None,
            sqft: None,
        }
    }

    /// Builder method: set URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder method: set displayed price
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Builder method: set address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Whether any listing field was captured
    ///
    /// `scrape_date` is always set and does not count.
    pub fn has_listing_data(&self) -> bool {
        self.url.is_some()
            || self.price.is_some()
            || self.address.is_some()
            || self.beds.is_some()
            || self.baths.is_some()
            || self.sqft.is_some()
    }

    /// Numeric price, if the displayed price parses
    pub fn parsed_price(&self) -> Option<f64> {
        normalize_price(self.price.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = ListingRecord::new(date());
        assert!(!record.has_listing_data());
        assert_eq!(record.scrape_date, date());
    }

    #[test]
    fn test_address_only_counts_as_data() {
        let record = ListingRecord::new(date()).with_address("1 Main St");
        assert!(record.has_listing_data());
        assert_eq!(record.parsed_price(), None);
    }

    #[test]
    fn test_parsed_price() {
        let record = ListingRecord::new(date()).with_price("$450,000");
        assert_eq!(record.parsed_price(), Some(450_000.0));
    }

    #[test]
    fn test_serialization_uses_iso_date_and_nulls() {
        let record = ListingRecord::new(date())
            .with_url("https://example.com/home/1")
            .with_price("$1.2M");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["scrape_date"], "2024-03-09");
        assert_eq!(json["price"], "$1.2M");
        assert!(json["address"].is_null());
        assert!(json["beds"].is_null());
        assert!(json["sqft"].is_null());
    }
}
