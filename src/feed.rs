//! Weather and crypto readings for the live panel.
//!
//! The page only ever talks to a [`FeedProvider`]. [`DemoFeed`] answers with
//! fixed readings; a real upstream can replace it without touching the view.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location: String,
    pub temperature: f64,
    pub feels_like: f64,
    /// Percent, 0-100.
    pub humidity: u8,
    pub condition: String,
    pub description: String,
    /// m/s
    pub wind_speed: f64,
    /// meters
    pub visibility: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinQuote {
    pub usd: f64,
    pub usd_24h_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CryptoReading {
    pub bitcoin: CoinQuote,
    pub ripple: CoinQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Weather,
    Crypto,
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feed::Weather => write!(f, "weather"),
            Feed::Crypto => write!(f, "crypto"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("{feed} feed unavailable: {reason}")]
    Unavailable { feed: Feed, reason: String },
}

impl FeedError {
    pub fn unavailable(feed: Feed, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            feed,
            reason: reason.into(),
        }
    }
}

/// A source of live readings. Each call is a one-shot fetch.
#[allow(async_fn_in_trait)]
pub trait FeedProvider {
    async fn fetch_weather(&self) -> Result<WeatherReading, FeedError>;
    async fn fetch_crypto(&self) -> Result<CryptoReading, FeedError>;
}

/// Placeholder provider; resolves immediately and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoFeed;

impl DemoFeed {
    pub fn weather() -> WeatherReading {
        WeatherReading {
            location: "Guatemala City".to_string(),
            temperature: 22.0,
            feels_like: 24.0,
            humidity: 75,
            condition: "Clouds".to_string(),
            description: "parcialmente nublado".to_string(),
            wind_speed: 3.5,
            visibility: 10_000,
        }
    }

    pub fn crypto() -> CryptoReading {
        CryptoReading {
            bitcoin: CoinQuote {
                usd: 43_250.0,
                usd_24h_change: 2.5,
            },
            ripple: CoinQuote {
                usd: 0.62,
                usd_24h_change: 3.8,
            },
        }
    }
}

impl FeedProvider for DemoFeed {
    async fn fetch_weather(&self) -> Result<WeatherReading, FeedError> {
        Ok(Self::weather())
    }

    async fn fetch_crypto(&self) -> Result<CryptoReading, FeedError> {
        Ok(Self::crypto())
    }
}

/// Latest good reading of one feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSlot<T> {
    latest: Option<T>,
}

impl<T> Default for FeedSlot<T> {
    fn default() -> Self {
        Self { latest: None }
    }
}

impl<T> FeedSlot<T> {
    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    /// Replaces the reading on success. A failure is logged and the previous
    /// reading (if any) stays in place.
    pub fn apply(&mut self, result: Result<T, FeedError>) {
        match result {
            Ok(reading) => self.latest = Some(reading),
            Err(e) => log::warn!("{e}; keeping last reading"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveFeeds {
    pub weather: FeedSlot<WeatherReading>,
    pub crypto: FeedSlot<CryptoReading>,
}

impl LiveFeeds {
    pub fn apply_weather(&mut self, result: Result<WeatherReading, FeedError>) {
        self.weather.apply(result);
    }

    pub fn apply_crypto(&mut self, result: Result<CryptoReading, FeedError>) {
        self.crypto.apply(result);
    }

    /// Fetches both feeds once and publishes whatever succeeded.
    pub async fn refresh(&mut self, provider: &impl FeedProvider) {
        let weather = provider.fetch_weather().await;
        self.apply_weather(weather);
        let crypto = provider.fetch_crypto().await;
        self.apply_crypto(crypto);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DownFeed;

    impl FeedProvider for DownFeed {
        async fn fetch_weather(&self) -> Result<WeatherReading, FeedError> {
            Err(FeedError::unavailable(Feed::Weather, "connection refused"))
        }

        async fn fetch_crypto(&self) -> Result<CryptoReading, FeedError> {
            Err(FeedError::unavailable(Feed::Crypto, "rate limited"))
        }
    }

    #[tokio::test]
    async fn test_demo_feed_readings() {
        let weather = DemoFeed.fetch_weather().await.unwrap();
        assert_eq!(weather.location, "Guatemala City");
        assert_eq!(weather.temperature, 22.0);
        assert_eq!(weather.feels_like, 24.0);
        assert_eq!(weather.humidity, 75);
        assert_eq!(weather.wind_speed, 3.5);
        assert_eq!(weather.visibility, 10_000);

        let crypto = DemoFeed.fetch_crypto().await.unwrap();
        assert_eq!(crypto.bitcoin.usd, 43_250.0);
        assert_eq!(crypto.bitcoin.usd_24h_change, 2.5);
        assert_eq!(crypto.ripple.usd, 0.62);
    }

    #[tokio::test]
    async fn test_refresh_publishes_readings() {
        let mut feeds = LiveFeeds::default();
        assert!(feeds.weather.latest().is_none());
        assert!(feeds.crypto.latest().is_none());

        feeds.refresh(&DemoFeed).await;
        assert_eq!(feeds.weather.latest(), Some(&DemoFeed::weather()));
        assert_eq!(feeds.crypto.latest(), Some(&DemoFeed::crypto()));
    }

    #[tokio::test]
    async fn test_failure_before_first_reading_leaves_nothing() {
        let mut feeds = LiveFeeds::default();
        feeds.refresh(&DownFeed).await;
        assert_eq!(feeds, LiveFeeds::default());
    }

    #[tokio::test]
    async fn test_failure_keeps_last_good_reading() {
        let mut feeds = LiveFeeds::default();
        feeds.refresh(&DemoFeed).await;
        let before = feeds.clone();

        feeds.refresh(&DownFeed).await;
        assert_eq!(feeds, before);
    }

    #[test]
    fn test_reading_is_replaced_wholesale() {
        let mut slot = FeedSlot::default();
        slot.apply(Ok(DemoFeed::weather()));
        let colder = WeatherReading {
            location: "Quetzaltenango".to_string(),
            temperature: 12.0,
            ..DemoFeed::weather()
        };
        slot.apply(Ok(colder.clone()));
        assert_eq!(slot.latest(), Some(&colder));
    }

    #[test]
    fn test_error_message() {
        let e = FeedError::unavailable(Feed::Crypto, "timeout");
        assert_eq!(e.to_string(), "crypto feed unavailable: timeout");
    }

    #[test]
    fn test_readings_survive_json() {
        let json = serde_json::to_string(&DemoFeed::crypto()).unwrap();
        assert!(json.contains("\"usd_24h_change\":2.5"));
        let back: CryptoReading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DemoFeed::crypto());
    }
}
