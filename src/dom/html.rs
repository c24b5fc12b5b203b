use crate::dom::CardHandle;
use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A parsed page, e.g. a results page saved from the browser
pub struct HtmlSnapshot {
    document: Html,
    base_url: Option<Url>,
}

impl HtmlSnapshot {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
            base_url: None,
        }
    }

    /// Builder method: resolve relative links against this URL
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Get the base URL used for link resolution
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Locate listing cards, trying each selector in order
    ///
    /// The first selector that matches anything wins. An empty vector means no
    /// selector matched.
    pub fn cards(&self, selectors: &[String]) -> Result<Vec<HtmlCard<'_>>> {
        for css in selectors {
            let selector = parse_selector(css)?;
            let cards: Vec<HtmlCard<'_>> = self
                .document
                .select(&selector)
                .map(|element| HtmlCard {
                    element,
                    base_url: self.base_url.as_ref(),
                })
                .collect();

            if !cards.is_empty() {
                log::debug!("Card selector '{}' matched {} elements", css, cards.len());
                return Ok(cards);
            }

            log::debug!("Card selector '{}' matched nothing", css);
        }

        Ok(Vec::new())
    }
}

/// Listing card backed by an element of an [`HtmlSnapshot`]
#[derive(Clone, Copy)]
pub struct HtmlCard<'a> {
    element: ElementRef<'a>,
    base_url: Option<&'a Url>,
}

impl<'a> HtmlCard<'a> {
    fn find(&self, css: &str) -> Result<Option<ElementRef<'a>>> {
        let selector = parse_selector(css)?;
        Ok(self.element.select(&selector).next())
    }
}

impl CardHandle for HtmlCard<'_> {
    fn text(&self, selector: &str) -> Result<Option<String>> {
        Ok(self.find(selector)?.map(|found| {
            let text: String = found.text().collect();
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        }))
    }

    fn link(&self, selector: &str) -> Result<Option<String>> {
        let Some(found) = self.find(selector)? else {
            return Ok(None);
        };

        let href = match found.value().attr("href").map(str::trim) {
            Some(href) if !href.is_empty() => href,
            _ => return Ok(None),
        };

        let resolved = match self.base_url {
            Some(base) => match base.join(href) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    log::debug!("Keeping unresolvable link '{}': {}", href, e);
                    href.to_string()
                }
            },
            None => href.to_string(),
        };

        Ok(Some(resolved))
    }
}

/// Parse a CSS selector, mapping failures to [`ScrapeError::InvalidSelector`]
pub(crate) fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
