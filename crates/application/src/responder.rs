//! Responder - Produces the spoken/displayed reply for an intent
//!
//! The responder is total: every intent yields a non-empty response
//! string and no error ever reaches the caller. The battery capability is
//! optional and its failures collapse to a fixed fallback; link-opening
//! failures are logged and never affect the reply text.

use std::{fmt, sync::Arc};

use chrono::Local;
use domain::{Intent, VolumeDirection};
use tracing::{debug, instrument, warn};

use crate::{
    ports::{BatteryPort, LinkOpenerPort},
    urlencoding,
};

/// Fixed reply when the battery capability is absent or fails
const BATTERY_FALLBACK: &str = "Battery level is approximately 75% and not charging";

/// Maps intents to responses, performing any side effects along the way
pub struct Responder {
    battery: Option<Arc<dyn BatteryPort>>,
    links: Arc<dyn LinkOpenerPort>,
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("battery_available", &self.battery.is_some())
            .finish_non_exhaustive()
    }
}

impl Responder {
    /// Create a responder
    ///
    /// `battery` is `None` when the device exposes no battery capability.
    pub fn new(battery: Option<Arc<dyn BatteryPort>>, links: Arc<dyn LinkOpenerPort>) -> Self {
        Self { battery, links }
    }

    /// Produce the response for an intent
    #[instrument(skip(self, intent), fields(intent = %intent.description()))]
    pub async fn respond(&self, intent: &Intent) -> String {
        match intent {
            Intent::CurrentTime => {
                let time = Local::now().format("%-I:%M:%S %p");
                format!("The current time is {time}")
            },
            Intent::CurrentDate => {
                let date = Local::now().format("%A, %B %-d, %Y");
                format!("Today is {date}")
            },
            Intent::PlaceCall { contact } => {
                let contact = contact.as_deref().unwrap_or("contact");
                format!(
                    "Initiating call to {contact}. Note: This is a web simulation. \
                     Full phone control requires a native mobile app."
                )
            },
            Intent::SendMessage => "Opening messaging interface. In a native app, this would \
                                    send your message directly."
                .to_string(),
            Intent::OpenCamera => "Camera access requested. In a native app with permissions, \
                                   I would open your camera now."
                .to_string(),
            Intent::BatteryStatus => self.battery_status().await,
            Intent::AdjustVolume { direction } => match direction {
                VolumeDirection::Up => "Volume increased. Full system volume control requires \
                                        native device access."
                    .to_string(),
                VolumeDirection::Down => "Volume decreased. Full system volume control requires \
                                          native device access."
                    .to_string(),
                VolumeDirection::Mute => "Device muted. Full system volume control requires \
                                          native device access."
                    .to_string(),
            },
            Intent::AdjustBrightness => "Brightness adjusted. Full screen brightness control \
                                         requires native device access."
                .to_string(),
            Intent::WifiSettings => "WiFi settings accessed. Full network control requires \
                                     native device access and permissions."
                .to_string(),
            Intent::BluetoothSettings => "Bluetooth settings accessed. Full bluetooth control \
                                          requires native device access and permissions."
                .to_string(),
            Intent::SetAlarm { time_phrase } => match time_phrase {
                Some(time) => format!(
                    "Setting alarm for {time}. Full alarm functionality requires native \
                     device access."
                ),
                None => "Setting alarm. Full alarm functionality requires native device access."
                    .to_string(),
            },
            Intent::WebSearch { query } => match query {
                Some(query) => {
                    let url = format!(
                        "https://www.google.com/search?q={}",
                        urlencoding::encode(query)
                    );
                    self.open_link(&url).await;
                    format!("Searching for {query}")
                },
                None => "What would you like me to search for?".to_string(),
            },
            Intent::OpenYouTube { query } => match query {
                Some(query) => {
                    let url = format!(
                        "https://www.youtube.com/results?search_query={}",
                        urlencoding::encode(query)
                    );
                    self.open_link(&url).await;
                    format!("Opening YouTube to search for {query}")
                },
                None => {
                    self.open_link("https://www.youtube.com").await;
                    "Opening YouTube".to_string()
                },
            },
            Intent::Weather => "To check weather, I would need location access and a weather \
                                API. You can say \"search weather in [city]\" for now."
                .to_string(),
            Intent::Navigate { destination } => match destination {
                Some(destination) => {
                    let url = format!(
                        "https://www.google.com/maps/dir/?api=1&destination={}",
                        urlencoding::encode(destination)
                    );
                    self.open_link(&url).await;
                    format!("Opening navigation to {destination}")
                },
                None => "Where would you like to go?".to_string(),
            },
            Intent::Greeting => "Hello! I'm JARVIS, your voice-controlled AI assistant. I'm \
                                 ready to help. Try commands like \"what time is it\", \"search \
                                 for something\", or phone controls like \"call someone\" or \
                                 \"check battery\"."
                .to_string(),
            Intent::Help => "I can help you with: checking time and date, making calls, sending \
                             messages, controlling settings like volume and brightness, setting \
                             alarms, checking battery, searching the web, opening YouTube, \
                             navigation, and more. What would you like me to do?"
                .to_string(),
            Intent::Unknown { heard } => format!(
                "I heard \"{heard}\". I'm a web-based assistant with simulated phone controls. \
                 Full device control requires a native mobile app with system permissions. Try \
                 commands like \"what time is it\", \"search for cats\", \"check battery\", or \
                 \"help\" to see what I can do."
            ),
        }
    }

    /// Query the battery capability, substituting the fixed fallback on
    /// absence or failure
    async fn battery_status(&self) -> String {
        let Some(battery) = &self.battery else {
            debug!("Battery capability absent, using fallback");
            return BATTERY_FALLBACK.to_string();
        };

        match battery.read().await {
            Ok(reading) => {
                let charging = if reading.is_charging {
                    "charging"
                } else {
                    "not charging"
                };
                format!("Battery level is {}% and {charging}", reading.percent())
            },
            Err(e) => {
                warn!(error = %e, "Battery query failed, using fallback");
                BATTERY_FALLBACK.to_string()
            },
        }
    }

    /// Open an external link, swallowing (but logging) any failure
    async fn open_link(&self, url: &str) {
        debug!(url, "Opening external link");
        if let Err(e) = self.links.open_external(url).await {
            warn!(error = %e, url, "Failed to open external link");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ApplicationError,
        ports::{BatteryReading, MockBatteryPort, MockLinkOpenerPort},
    };

    fn no_links() -> Arc<MockLinkOpenerPort> {
        // Panics the test if any link is opened
        Arc::new(MockLinkOpenerPort::new())
    }

    #[tokio::test]
    async fn battery_absent_uses_fallback() {
        let responder = Responder::new(None, no_links());
        let reply = responder.respond(&Intent::BatteryStatus).await;
        assert_eq!(reply, "Battery level is approximately 75% and not charging");
    }

    #[tokio::test]
    async fn battery_failure_uses_fallback() {
        let mut battery = MockBatteryPort::new();
        battery
            .expect_read()
            .returning(|| Err(ApplicationError::CapabilityUnavailable("battery".to_string())));

        let responder = Responder::new(Some(Arc::new(battery)), no_links());
        let reply = responder.respond(&Intent::BatteryStatus).await;
        assert!(reply.contains("75%"));
        assert!(reply.contains("not charging"));
    }

    #[tokio::test]
    async fn battery_reading_is_rounded_and_labelled() {
        let mut battery = MockBatteryPort::new();
        battery.expect_read().returning(|| {
            Ok(BatteryReading {
                level: 0.824,
                is_charging: true,
            })
        });

        let responder = Responder::new(Some(Arc::new(battery)), no_links());
        let reply = responder.respond(&Intent::BatteryStatus).await;
        assert_eq!(reply, "Battery level is 82% and charging");
    }

    #[tokio::test]
    async fn search_opens_exactly_one_link_with_encoded_query() {
        let mut links = MockLinkOpenerPort::new();
        links
            .expect_open_external()
            .withf(|url| url == "https://www.google.com/search?q=ai+news")
            .times(1)
            .returning(|_| Ok(()));

        let responder = Responder::new(None, Arc::new(links));
        let reply = responder
            .respond(&Intent::WebSearch {
                query: Some("ai news".to_string()),
            })
            .await;
        assert_eq!(reply, "Searching for ai news");
    }

    #[tokio::test]
    async fn search_without_query_asks_and_opens_nothing() {
        let responder = Responder::new(None, no_links());
        let reply = responder.respond(&Intent::WebSearch { query: None }).await;
        assert_eq!(reply, "What would you like me to search for?");
    }

    #[tokio::test]
    async fn link_failure_does_not_change_the_reply() {
        let mut links = MockLinkOpenerPort::new();
        links
            .expect_open_external()
            .times(1)
            .returning(|_| Err(ApplicationError::ExternalService("no browser".to_string())));

        let responder = Responder::new(None, Arc::new(links));
        let reply = responder
            .respond(&Intent::WebSearch {
                query: Some("cats".to_string()),
            })
            .await;
        assert_eq!(reply, "Searching for cats");
    }

    #[tokio::test]
    async fn youtube_without_query_opens_home_page() {
        let mut links = MockLinkOpenerPort::new();
        links
            .expect_open_external()
            .withf(|url| url == "https://www.youtube.com")
            .times(1)
            .returning(|_| Ok(()));

        let responder = Responder::new(None, Arc::new(links));
        let reply = responder.respond(&Intent::OpenYouTube { query: None }).await;
        assert_eq!(reply, "Opening YouTube");
    }

    #[tokio::test]
    async fn navigate_opens_directions_link() {
        let mut links = MockLinkOpenerPort::new();
        links
            .expect_open_external()
            .withf(|url| {
                url == "https://www.google.com/maps/dir/?api=1&destination=times+square"
            })
            .times(1)
            .returning(|_| Ok(()));

        let responder = Responder::new(None, Arc::new(links));
        let reply = responder
            .respond(&Intent::Navigate {
                destination: Some("times square".to_string()),
            })
            .await;
        assert_eq!(reply, "Opening navigation to times square");
    }

    #[tokio::test]
    async fn call_reply_names_the_contact() {
        let responder = Responder::new(None, no_links());
        let reply = responder
            .respond(&Intent::PlaceCall {
                contact: Some("mom".to_string()),
            })
            .await;
        assert!(reply.contains("mom"));
    }

    #[tokio::test]
    async fn call_reply_falls_back_to_contact() {
        let responder = Responder::new(None, no_links());
        let reply = responder.respond(&Intent::PlaceCall { contact: None }).await;
        assert!(reply.contains("Initiating call to contact"));
    }

    #[tokio::test]
    async fn unknown_reply_echoes_the_utterance() {
        let responder = Responder::new(None, no_links());
        let reply = responder
            .respond(&Intent::Unknown {
                heard: "make me a sandwich".to_string(),
            })
            .await;
        assert!(reply.contains("I heard \"make me a sandwich\""));
    }

    #[tokio::test]
    async fn every_pure_intent_yields_a_non_empty_reply() {
        let responder = Responder::new(None, no_links());
        let intents = [
            Intent::CurrentTime,
            Intent::CurrentDate,
            Intent::SendMessage,
            Intent::OpenCamera,
            Intent::AdjustVolume {
                direction: VolumeDirection::Up,
            },
            Intent::AdjustBrightness,
            Intent::WifiSettings,
            Intent::BluetoothSettings,
            Intent::SetAlarm { time_phrase: None },
            Intent::Weather,
            Intent::Greeting,
            Intent::Help,
        ];
        for intent in intents {
            assert!(!responder.respond(&intent).await.is_empty());
        }
    }
}
