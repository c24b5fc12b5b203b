use thiserror::Error;

/// Errors that can occur while scraping listings
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Failed to launch the browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// A tab operation failed
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// Navigation to a URL failed or timed out
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// A lookup on a listing card failed for a reason other than a missing element
    #[error("Lookup of '{selector}' failed: {reason}")]
    LookupFailed { selector: String, reason: String },

    /// A CSS selector could not be parsed
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A single listing card could not be processed
    #[error("Error processing listing card {index}: {source}")]
    CardFailed {
        index: usize,
        #[source]
        source: Box<ScrapeError>,
    },

    /// Writing tabular output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_failed_message_includes_cause() {
        let err = ScrapeError::CardFailed {
            index: 3,
            source: Box::new(ScrapeError::LookupFailed {
                selector: ".price".to_string(),
                reason: "node detached".to_string(),
            }),
        };

        let message = err.to_string();
        assert!(message.contains("card 3"));
        assert!(message.contains(".price"));
        assert!(message.contains("node detached"));
    }
}
