//! System link opener
//!
//! Hands URLs to the desktop's default handler. Dry-run mode only logs
//! the URL, which keeps tests and headless sessions from spawning a
//! browser.

use application::{error::ApplicationError, ports::LinkOpenerPort};
use async_trait::async_trait;
use tracing::{debug, info};

/// Opens links with `xdg-open` (or `open` on macOS)
#[derive(Debug)]
pub struct SystemLinkOpener {
    dry_run: bool,
}

impl SystemLinkOpener {
    /// Create a link opener
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    fn handler() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

#[async_trait]
impl LinkOpenerPort for SystemLinkOpener {
    async fn open_external(&self, url: &str) -> Result<(), ApplicationError> {
        if self.dry_run {
            info!(url, "Dry run: would open external link");
            return Ok(());
        }

        debug!(url, handler = Self::handler(), "Opening external link");
        tokio::process::Command::new(Self::handler())
            .arg(url)
            .spawn()
            .map_err(|e| ApplicationError::ExternalService(format!("link handler: {e}")))?;
        Ok(())
    }
}
