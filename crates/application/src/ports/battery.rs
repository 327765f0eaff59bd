//! Battery port - Optional device capability for charge state queries

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A battery reading from the device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// Charge fraction in `0.0..=1.0`
    pub level: f32,
    /// Whether the device is currently charging
    pub is_charging: bool,
}

impl BatteryReading {
    /// Charge level as a rounded percentage
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        (self.level.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Port for the battery capability
///
/// The capability may be absent entirely (the responder holds an
/// `Option` of this port) and a present capability may still fail to
/// answer. Neither case ever reaches the user as an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BatteryPort: Send + Sync {
    /// Query the current battery state
    async fn read(&self) -> Result<BatteryReading, ApplicationError>;
}
