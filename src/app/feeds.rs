use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::feed::DemoFeed;
use crate::feed::{CryptoReading, Feed, FeedError, FeedProvider, WeatherReading};

#[server(input = GetUrl)]
pub async fn get_weather() -> Result<WeatherReading, ServerFnError> {
    DemoFeed
        .fetch_weather()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_crypto() -> Result<CryptoReading, ServerFnError> {
    DemoFeed
        .fetch_crypto()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Browser-side provider backed by the server functions above.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFeed;

impl FeedProvider for ServerFeed {
    async fn fetch_weather(&self) -> Result<WeatherReading, FeedError> {
        get_weather()
            .await
            .map_err(|e| FeedError::unavailable(Feed::Weather, e.to_string()))
    }

    async fn fetch_crypto(&self) -> Result<CryptoReading, FeedError> {
        get_crypto()
            .await
            .map_err(|e| FeedError::unavailable(Feed::Crypto, e.to_string()))
    }
}
