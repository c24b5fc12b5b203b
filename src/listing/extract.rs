use crate::dom::CardHandle;
use crate::error::{Result, ScrapeError};
use crate::listing::record::ListingRecord;
use crate::listing::selectors::CardSelectors;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default cap on the number of cards processed per page
pub const DEFAULT_MAX_CARDS: usize = 10;

/// How failures on a single card are handled
///
/// A selector that matches nothing is never a failure: the field is left unset
/// in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionPolicy {
    /// Log the failure, skip the card and keep going
    #[default]
    Lenient,
    /// Abort the batch with the first card failure
    Strict,
}

impl ExtractionPolicy {
    pub fn is_strict(self) -> bool {
        self == ExtractionPolicy::Strict
    }
}

/// Turns listing cards into [`ListingRecord`]s
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    selectors: CardSelectors,
    max_cards: usize,
    policy: ExtractionPolicy,
    scrape_date: Option<NaiveDate>,
}

impl ListingExtractor {
    /// Create an extractor with the given selectors and default limits
    pub fn new(selectors: CardSelectors) -> Self {
        Self {
            selectors,
            max_cards: DEFAULT_MAX_CARDS,
            policy: ExtractionPolicy::default(),
            scrape_date: None,
        }
    }

    /// Builder method: set the card cap
    pub fn max_cards(mut self, max_cards: usize) -> Self {
        self.max_cards = max_cards;
        self
    }

    /// Builder method: set the failure policy
    pub fn policy(mut self, policy: ExtractionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method: stamp records with a fixed date instead of today
    pub fn with_scrape_date(mut self, date: NaiveDate) -> Self {
        self.scrape_date = Some(date);
        self
    }

    /// Get the selectors in use
    pub fn selectors(&self) -> &CardSelectors {
        &self.selectors
    }

    /// Extract records from the first `max_cards` cards, preserving order
    ///
    /// Cards where no field matched are dropped. Under the lenient policy this
    /// never fails; under the strict policy the first card failure is returned.
    pub fn extract<I>(&self, cards: I) -> Result<Vec<ListingRecord>>
    where
        I: IntoIterator,
        I::Item: CardHandle,
    {
        let scrape_date = self.scrape_date.unwrap_or_else(|| Local::now().date_naive());
        let mut records = Vec::new();

        for (index, card) in cards.into_iter().take(self.max_cards).enumerate() {
            log::debug!("Processing listing card {}", index);

            match self.extract_card(&card, scrape_date) {
                Ok(record) if record.has_listing_data() => {
                    log::info!(
                        "Processed listing: {}",
                        record.address.as_deref().unwrap_or("<no address>")
                    );
                    records.push(record);
                }
                Ok(_) => log::debug!("Listing card {} had no matching fields", index),
                Err(e) if self.policy.is_strict() => {
                    return Err(ScrapeError::CardFailed {
                        index,
                        source: Box::new(e),
                    });
                }
                Err(e) => log::warn!("Error processing listing card {}: {}", index, e),
            }
        }

        Ok(records)
    }

    fn extract_card<C: CardHandle>(&self, card: &C, scrape_date: NaiveDate) -> Result<ListingRecord> {
        let mut record = ListingRecord::new(scrape_date);
        record.url = card.link(&self.selectors.url)?;
        record.price = card.text(&self.selectors.price)?;
        record.address = card.text(&self.selectors.address)?;
        Ok(record)
    }
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new(CardSelectors::default())
    }
}
