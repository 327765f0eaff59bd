//! Port adapters

mod console;
mod links;
mod sysfs_battery;

pub use console::{ConsoleSpeechInput, ConsoleSpeechOutput, NullSpeechInput, NullSpeechOutput};
pub use links::SystemLinkOpener;
pub use sysfs_battery::SysfsBattery;
