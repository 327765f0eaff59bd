//! Linux sysfs battery adapter
//!
//! Probes `/sys/class/power_supply` for a battery-type supply. The probe
//! returning `None` models capability absence; a present battery can
//! still fail to answer (files unreadable or unparsable), which the
//! responder turns into its fixed fallback reply.

use std::path::{Path, PathBuf};

use application::{error::ApplicationError, ports::{BatteryPort, BatteryReading}};
use async_trait::async_trait;
use tracing::debug;

const SYSFS_ROOT: &str = "/sys/class/power_supply";

/// Battery capability backed by the kernel's power-supply class
#[derive(Debug)]
pub struct SysfsBattery {
    supply_dir: PathBuf,
}

impl SysfsBattery {
    /// Probe the standard sysfs location for a battery
    pub fn probe() -> Option<Self> {
        Self::probe_root(Path::new(SYSFS_ROOT))
    }

    /// Probe a specific power-supply root directory
    pub fn probe_root(root: &Path) -> Option<Self> {
        let entries = std::fs::read_dir(root).ok()?;
        for entry in entries.flatten() {
            let dir = entry.path();
            let supply_type = std::fs::read_to_string(dir.join("type")).unwrap_or_default();
            if supply_type.trim() == "Battery" {
                debug!(supply = %dir.display(), "Found battery supply");
                return Some(Self { supply_dir: dir });
            }
        }
        None
    }

    async fn read_value(&self, name: &str) -> Result<String, ApplicationError> {
        tokio::fs::read_to_string(self.supply_dir.join(name))
            .await
            .map(|s| s.trim().to_string())
            .map_err(|e| ApplicationError::CapabilityUnavailable(format!("battery {name}: {e}")))
    }
}

#[async_trait]
impl BatteryPort for SysfsBattery {
    async fn read(&self) -> Result<BatteryReading, ApplicationError> {
        let capacity: f32 = self
            .read_value("capacity")
            .await?
            .parse()
            .map_err(|e| ApplicationError::CapabilityUnavailable(format!("battery capacity: {e}")))?;
        let status = self.read_value("status").await?;

        Ok(BatteryReading {
            level: (capacity / 100.0).clamp(0.0, 1.0),
            is_charging: status == "Charging",
        })
    }
}
