use crate::dom::CardHandle;
use crate::error::{Result, ScrapeError};
use headless_chrome::Element;
use headless_chrome::browser::tab::NoElementFound;

/// Returns the resolved (absolute) link target rather than the raw attribute
const HREF_JS: &str = "function() { return this.href; }";

/// Listing card backed by a live element in a Chrome tab
pub struct ChromeCard<'a> {
    element: Element<'a>,
}

impl<'a> ChromeCard<'a> {
    /// Wrap an element located by the browser session
    pub fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    /// Get the underlying element
    pub fn element(&self) -> &Element<'a> {
        &self.element
    }

    fn find(&self, selector: &str) -> Result<Option<Element<'a>>> {
        match self.element.find_element(selector) {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.downcast_ref::<NoElementFound>().is_some() => Ok(None),
            Err(e) => Err(lookup_failed(selector, e)),
        }
    }
}

impl CardHandle for ChromeCard<'_> {
    fn text(&self, selector: &str) -> Result<Option<String>> {
        let Some(found) = self.find(selector)? else {
            return Ok(None);
        };

        let text = found.get_inner_text().map_err(|e| lookup_failed(selector, e))?;
        Ok(Some(text.trim().to_string()))
    }

    fn link(&self, selector: &str) -> Result<Option<String>> {
        let Some(found) = self.find(selector)? else {
            return Ok(None);
        };

        let result = found
            .call_js_fn(HREF_JS, vec![], false)
            .map_err(|e| lookup_failed(selector, e))?;

        // Anchors without an href report an empty string
        Ok(result
            .value
            .and_then(|value| value.as_str().map(str::to_string))
            .filter(|href| !href.is_empty()))
    }
}

fn lookup_failed(selector: &str, e: anyhow::Error) -> ScrapeError {
    ScrapeError::LookupFailed {
        selector: selector.to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowserSession, LaunchOptions};
    use std::time::Duration;

    const CARD_HTML: &str = "data:text/html,<html><body>\
        <article data-test='property-card'>\
        <a data-test='property-card-link' href='https://example.com/homedetails/1'>link</a>\
        <span data-test='property-card-price'> $450,000 </span>\
        </article></body></html>";

    #[test]
    #[ignore] // Requires Chrome to be installed
    fn test_chrome_card_lookups() {
        let session =
            BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");
        session.navigate(CARD_HTML).expect("Failed to navigate");

        let tab = session.tab().expect("No active tab");
        let elements = session
            .find_cards(&tab, &["[data-test='property-card']".to_string()], Duration::from_secs(5))
            .expect("Card lookup failed");
        assert_eq!(elements.len(), 1);

        let card = ChromeCard::new(elements.into_iter().next().unwrap());
        assert_eq!(
            card.text("[data-test='property-card-price']").unwrap(),
            Some("$450,000".to_string())
        );
        assert_eq!(card.text("[data-test='property-card-addr']").unwrap(), None);
        assert_eq!(
            card.link("a[data-test='property-card-link']").unwrap(),
            Some("https://example.com/homedetails/1".to_string())
        );
    }
}
