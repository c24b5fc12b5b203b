use serde::{Deserialize, Serialize};

/// Primary card container class on the results page
pub const DEFAULT_CARD_SELECTOR: &str = "article.StyledPropertyCard-c11n-8-85-1__sc-14p766w-0";

/// Fallback card container selector
pub const FALLBACK_CARD_SELECTOR: &str = "[data-test='property-card']";

pub const DEFAULT_URL_SELECTOR: &str = r#"a[data-test="property-card-link"]"#;
pub const DEFAULT_PRICE_SELECTOR: &str = r#"[data-test="property-card-price"]"#;
pub const DEFAULT_ADDRESS_SELECTOR: &str = r#"[data-test="property-card-addr"]"#;

/// CSS selectors used to locate listing cards and their fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardSelectors {
    /// Card container selectors, tried in order until one matches
    pub cards: Vec<String>,

    /// Link to the listing detail page (link target is read)
    pub url: String,

    /// Displayed price (text is read)
    pub price: String,

    /// Displayed address (text is read)
    pub address: String,
}

impl CardSelectors {
    /// Builder method: replace the card selector fallback list
    pub fn with_cards<I, S>(mut self, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cards = cards.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set URL selector
    pub fn with_url(mut self, selector: impl Into<String>) -> Self {
        self.url = selector.into();
        self
    }

    /// Builder method: set price selector
    pub fn with_price(mut self, selector: impl Into<String>) -> Self {
        self.price = selector.into();
        self
    }

    /// Builder method: set address selector
    pub fn with_address(mut self, selector: impl Into<String>) -> Self {
        self.address = selector.into();
        self
    }
}

impl Default for CardSelectors {
    fn default() -> Self {
        Self {
            cards: vec![DEFAULT_CARD_SELECTOR.to_string(), FALLBACK_CARD_SELECTOR.to_string()],
            url: DEFAULT_URL_SELECTOR.to_string(),
            price: DEFAULT_PRICE_SELECTOR.to_string(),
            address: DEFAULT_ADDRESS_SELECTOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_fallback_order() {
        let selectors = CardSelectors::default();
        assert_eq!(selectors.cards, vec![DEFAULT_CARD_SELECTOR, FALLBACK_CARD_SELECTOR]);
    }

    #[test]
    fn test_builder() {
        let selectors = CardSelectors::default()
            .with_cards(["li.result"])
            .with_url("a.detail")
            .with_price(".cost")
            .with_address(".street");

        assert_eq!(selectors.cards, vec!["li.result"]);
        assert_eq!(selectors.url, "a.detail");
        assert_eq!(selectors.price, ".cost");
        assert_eq!(selectors.address, ".street");
    }
}
