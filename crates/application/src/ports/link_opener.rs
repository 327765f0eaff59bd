//! Link opener port - Navigation side-effect sink

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for opening external links (search results, YouTube, directions)
///
/// Opening a link is a side effect of some intents; a failure here is
/// logged and never affects the textual response.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LinkOpenerPort: Send + Sync {
    /// Open `url` in the user's browser or equivalent
    async fn open_external(&self, url: &str) -> Result<(), ApplicationError>;
}
