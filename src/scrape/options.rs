use crate::listing::{CardSelectors, DEFAULT_MAX_CARDS, ExtractionPolicy};
use std::time::Duration;

/// Search results page for a zip code; `{zip}` is substituted
pub const DEFAULT_SEARCH_URL: &str = "https://www.zillow.com/homes/for_sale/{zip}";

/// Options controlling a scrape run
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Search page URL template containing `{zip}`
    pub search_url: String,

    /// Maximum number of cards to extract
    pub max_cards: usize,

    /// Overall time budget, checked once the page has settled
    pub timeout: Duration,

    /// How long to wait for each card selector to appear
    pub element_wait: Duration,

    /// Pause after page load before looking for cards
    pub settle_delay: Duration,

    /// Failure handling for cards and for the run as a whole
    pub policy: ExtractionPolicy,

    /// Card and field selectors
    pub selectors: CardSelectors,
}

impl ScrapeOptions {
    /// Create scrape options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set search URL template
    pub fn search_url(mut self, template: impl Into<String>) -> Self {
        self.search_url = template.into();
        self
    }

    /// Builder method: set card cap
    pub fn max_cards(mut self, max_cards: usize) -> Self {
        self.max_cards = max_cards;
        self
    }

    /// Builder method: set overall time budget
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method: set per-selector wait
    pub fn element_wait(mut self, wait: Duration) -> Self {
        self.element_wait = wait;
        self
    }

    /// Builder method: set settle delay
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Builder method: set failure policy
    pub fn policy(mut self, policy: ExtractionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method: set selectors
    pub fn selectors(mut self, selectors: CardSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    /// Search page URL for a zip code
    pub fn url_for(&self, zip_code: &str) -> String {
        self.search_url.replace("{zip}", zip_code.trim())
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            max_cards: DEFAULT_MAX_CARDS,
            timeout: Duration::from_secs(60),
            element_wait: Duration::from_secs(15),
            settle_delay: Duration::from_secs(5),
            policy: ExtractionPolicy::Lenient,
            selectors: CardSelectors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ScrapeOptions::default();
        assert_eq!(opts.max_cards, 10);
        assert_eq!(opts.timeout, Duration::from_secs(60));
        assert_eq!(opts.element_wait, Duration::from_secs(15));
        assert_eq!(opts.policy, ExtractionPolicy::Lenient);
    }

    #[test]
    fn test_url_for() {
        let opts = ScrapeOptions::default();
        assert_eq!(opts.url_for("90210"), "https://www.zillow.com/homes/for_sale/90210");
        assert_eq!(opts.url_for(" 10001 "), "https://www.zillow.com/homes/for_sale/10001");

        let custom = ScrapeOptions::new().search_url("http://localhost:8080/search?zip={zip}");
        assert_eq!(custom.url_for("60601"), "http://localhost:8080/search?zip=60601");
    }

    #[test]
    fn test_builder() {
        let opts = ScrapeOptions::new()
            .max_cards(3)
            .timeout(Duration::from_secs(5))
            .element_wait(Duration::from_millis(250))
            .settle_delay(Duration::ZERO)
            .policy(ExtractionPolicy::Strict);

        assert_eq!(opts.max_cards, 3);
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert_eq!(opts.element_wait, Duration::from_millis(250));
        assert_eq!(opts.settle_delay, Duration::ZERO);
        assert!(opts.policy.is_strict());
    }
}
