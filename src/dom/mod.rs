//! Listing card handles
//!
//! A card is one rendered listing element located on a search results page.
//! The extractor only ever needs two things from a card:
//! - the text of a descendant matched by a CSS selector
//! - the link target of a descendant matched by a CSS selector
//!
//! Both lookups distinguish "nothing matched" (`Ok(None)`) from an unexpected
//! failure (`Err`). Implementations:
//! - [`ChromeCard`]: a live element in a `headless_chrome` tab
//! - [`HtmlCard`]: an element of a parsed HTML snapshot

pub mod chrome;
pub mod html;

pub use chrome::ChromeCard;
pub use html::{HtmlCard, HtmlSnapshot};

use crate::error::Result;

/// Capability needed to pull listing fields out of a card
pub trait CardHandle {
    /// Text of the first descendant matching `selector`
    fn text(&self, selector: &str) -> Result<Option<String>>;

    /// Link target of the first descendant matching `selector`
    fn link(&self, selector: &str) -> Result<Option<String>>;
}

impl<T: CardHandle + ?Sized> CardHandle for &T {
    fn text(&self, selector: &str) -> Result<Option<String>> {
        (**self).text(selector)
    }

    fn link(&self, selector: &str) -> Result<Option<String>> {
        (**self).link(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl CardHandle for Fixed {
        fn text(&self, selector: &str) -> Result<Option<String>> {
            Ok(Some(format!("text:{}", selector)))
        }

        fn link(&self, _selector: &str) -> Result<Option<String>> {
            Ok(None)
        }
    }

    fn price_of<C: CardHandle>(card: C) -> Option<String> {
        card.text(".price").unwrap()
    }

    #[test]
    fn test_reference_forwards() {
        let card = Fixed;
        assert_eq!(price_of(&card), Some("text:.price".to_string()));

        let dynamic: &dyn CardHandle = &card;
        assert_eq!(price_of(dynamic), Some("text:.price".to_string()));
        assert_eq!(dynamic.link("a").unwrap(), None);
    }
}
