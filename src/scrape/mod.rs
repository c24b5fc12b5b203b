//! Scrape runs: load a search page, locate listing cards and extract records

pub mod options;

pub use options::{DEFAULT_SEARCH_URL, ScrapeOptions};

use crate::browser::BrowserSession;
use crate::dom::{ChromeCard, HtmlSnapshot};
use crate::error::Result;
use crate::listing::{ListingExtractor, ListingRecord};
use std::time::Instant;
use url::Url;

/// Scrapes listing cards from a live browser session
pub struct ListingScraper<'s> {
    session: &'s BrowserSession,
    options: ScrapeOptions,
}

impl<'s> ListingScraper<'s> {
    pub fn new(session: &'s BrowserSession, options: ScrapeOptions) -> Self {
        Self { session, options }
    }

    /// Get the options in use
    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    /// Scrape the search results page for a zip code
    ///
    /// Under the lenient policy browser failures are logged and an empty list
    /// is returned; under the strict policy they are returned as errors.
    pub fn scrape(&self, zip_code: &str) -> Result<Vec<ListingRecord>> {
        match self.try_scrape(zip_code) {
            Ok(records) => Ok(records),
            Err(e) if self.options.policy.is_strict() => Err(e),
            Err(e) => {
                log::error!("Error during scraping: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn try_scrape(&self, zip_code: &str) -> Result<Vec<ListingRecord>> {
        let started = Instant::now();
        let url = self.options.url_for(zip_code);

        log::info!("Loading URL: {}", url);
        self.session.navigate(&url)?;
        self.session.wait_for_navigation()?;
        log::info!("Page loaded, waiting for content...");

        std::thread::sleep(self.options.settle_delay);

        if started.elapsed() > self.options.timeout {
            log::warn!("Scraping timed out after {:?}", self.options.timeout);
            return Ok(Vec::new());
        }

        log::info!("Searching for listings in {}...", zip_code);
        let tab = self.session.tab()?;
        let elements = self
            .session
            .find_cards(&tab, &self.options.selectors.cards, self.options.element_wait)?;

        if elements.is_empty() {
            log::warn!("Could not find listing cards. The page structure might have changed.");
            return Ok(Vec::new());
        }

        log::info!("Found {} listing cards", elements.len());
        extractor_for(&self.options).extract(elements.into_iter().map(ChromeCard::new))
    }
}

/// Extract listings from a saved results page
///
/// Relative links are resolved against `base_url` when given. Card location
/// failures follow the extraction policy, as in [`ListingScraper::scrape`].
pub fn scrape_html(html: &str, base_url: Option<Url>, options: &ScrapeOptions) -> Result<Vec<ListingRecord>> {
    let mut snapshot = HtmlSnapshot::parse(html);
    if let Some(base_url) = base_url {
        snapshot = snapshot.with_base_url(base_url);
    }

    let cards = match snapshot.cards(&options.selectors.cards) {
        Ok(cards) => cards,
        Err(e) if options.policy.is_strict() => return Err(e),
        Err(e) => {
            log::error!("Error locating listing cards: {}", e);
            return Ok(Vec::new());
        }
    };

    if cards.is_empty() {
        log::warn!("Could not find listing cards. The page structure might have changed.");
        return Ok(Vec::new());
    }

    log::info!("Found {} listing cards", cards.len());
    extractor_for(options).extract(cards)
}

fn extractor_for(options: &ScrapeOptions) -> ListingExtractor {
    ListingExtractor::new(options.selectors.clone())
        .max_cards(options.max_cards)
        .policy(options.policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use crate::listing::{CardSelectors, ExtractionPolicy};

    const PAGE: &str = r#"
        <html><body>
          <article data-test="property-card">
            <a data-test="property-card-link" href="/homedetails/100">view</a>
            <span data-test="property-card-price">$450,000</span>
            <address data-test="property-card-addr">100 Palm Dr, Beverly Hills, CA</address>
          </article>
          <article data-test="property-card">
            <span class="promo">Sponsored</span>
          </article>
          <article data-test="property-card">
            <span data-test="property-card-price">$1.2M</span>
          </article>
        </body></html>
    "#;

    #[test]
    fn test_scrape_html_uses_fallback_card_selector() {
        let base = Url::parse("https://www.zillow.com/homes/for_sale/90210").unwrap();
        let records = scrape_html(PAGE, Some(base), &ScrapeOptions::default()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url.as_deref(), Some("https://www.zillow.com/homedetails/100"));
        assert_eq!(records[0].price.as_deref(), Some("$450,000"));
        assert_eq!(records[0].address.as_deref(), Some("100 Palm Dr, Beverly Hills, CA"));
        assert_eq!(records[1].url, None);
        assert_eq!(records[1].price.as_deref(), Some("$1.2M"));
    }

    #[test]
    fn test_scrape_html_respects_card_cap() {
        let options = ScrapeOptions::default().max_cards(1);
        let records = scrape_html(PAGE, None, &options).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url.as_deref(), Some("/homedetails/100"));
    }

    #[test]
    fn test_scrape_html_no_cards() {
        let records = scrape_html("<html><body><p>Captcha</p></body></html>", None, &ScrapeOptions::default())
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_scrape_html_invalid_card_selector_follows_policy() {
        let selectors = CardSelectors::default().with_cards(["li[["]);

        let lenient = ScrapeOptions::default().selectors(selectors.clone());
        assert!(scrape_html(PAGE, None, &lenient).unwrap().is_empty());

        let strict = lenient.policy(ExtractionPolicy::Strict);
        let result = scrape_html(PAGE, None, &strict);
        assert!(matches!(result, Err(ScrapeError::InvalidSelector { .. })));
    }

    #[test]
    fn test_scrape_html_strict_invalid_field_selector() {
        let options = ScrapeOptions::default()
            .policy(ExtractionPolicy::Strict)
            .selectors(CardSelectors::default().with_price("span[["));
        assert!(scrape_html(PAGE, None, &options).is_err());

        let lenient = options.policy(ExtractionPolicy::Lenient);
        assert!(scrape_html(PAGE, None, &lenient).unwrap().is_empty());
    }
}
