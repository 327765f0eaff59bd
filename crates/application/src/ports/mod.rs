//! Ports - Interfaces to external collaborators
//!
//! The speech engines, the battery capability, and the link opener are all
//! injected behind these traits so the dialogue core runs without any real
//! device.

mod battery;
mod link_opener;
mod speech_input;
mod speech_output;

pub use battery::{BatteryPort, BatteryReading};
pub use link_opener::LinkOpenerPort;
pub use speech_input::{RecognitionEvent, SpeechInputPort};
pub use speech_output::SpeechOutputPort;

#[cfg(test)]
pub use battery::MockBatteryPort;
#[cfg(test)]
pub use link_opener::MockLinkOpenerPort;
#[cfg(test)]
pub use speech_input::MockSpeechInputPort;
#[cfg(test)]
pub use speech_output::MockSpeechOutputPort;
