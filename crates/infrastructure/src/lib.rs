//! Infrastructure layer - Adapters for the application ports
//!
//! Console stand-ins for the speech engines, the Linux sysfs battery
//! probe, the system link opener, and configuration loading.

pub mod adapters;
pub mod config;

pub use adapters::{
    ConsoleSpeechInput, ConsoleSpeechOutput, NullSpeechInput, NullSpeechOutput, SysfsBattery,
    SystemLinkOpener,
};
pub use config::AppConfig;
