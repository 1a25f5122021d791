//! What the live panels show, independent of markup.
//!
//! Both the desktop panel and the collapsible mobile panel render a
//! [`LivePanel`]; they differ only in [`PanelLayout`].

use crate::clock::{ClockSnapshot, HourCycle};
use crate::feed::{CoinQuote, LiveFeeds};
use crate::format;
use crate::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    /// The owner's clock, always shown.
    Owner,
    /// The viewer's clock when they are somewhere else.
    Viewer,
    /// The viewer's clock when they share the owner's timezone.
    Shared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockRow {
    pub kind: ClockKind,
    pub label: &'static str,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRow {
    pub place: &'static str,
    pub temperature: String,
    pub wind: String,
    /// Hover text with the fields the row itself leaves out.
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinRow {
    pub name: &'static str,
    pub price: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivePanel {
    pub heading: &'static str,
    pub clocks: [ClockRow; 2],
    pub weather: Option<WeatherRow>,
    pub coins: Option<[CoinRow; 2]>,
}

impl LivePanel {
    pub fn build(
        state: &UiState,
        clock: &ClockSnapshot,
        feeds: &LiveFeeds,
        layout: PanelLayout,
    ) -> Self {
        let content = state.content();
        let cycle = HourCycle::for_language(state.language);

        let owner = ClockRow {
            kind: ClockKind::Owner,
            label: content.my_hour,
            time: clock.reference_time(cycle),
        };
        let second = if clock.in_reference_region {
            ClockRow {
                kind: ClockKind::Shared,
                label: content.our_hour,
                time: clock.viewer_time(cycle),
            }
        } else {
            ClockRow {
                kind: ClockKind::Viewer,
                label: content.your_hour,
                time: clock.viewer_time(cycle),
            }
        };

        let weather = feeds.weather.latest().map(|w| WeatherRow {
            place: match layout {
                PanelLayout::Desktop => "Guatemala",
                PanelLayout::Mobile => "GT",
            },
            temperature: format::temperature(w.temperature),
            wind: format::wind_speed(w.wind_speed),
            details: format!(
                "{} · {} · {}% · {}",
                w.location,
                w.description,
                w.humidity,
                format::temperature(w.feels_like)
            ),
        });

        let coins = feeds.crypto.latest().map(|c| {
            let (btc_name, btc_price) = match layout {
                PanelLayout::Desktop => ("₿ Bitcoin:", format::usd_grouped(c.bitcoin.usd)),
                PanelLayout::Mobile => ("₿ BTC:", format::usd_thousands(c.bitcoin.usd)),
            };
            [
                coin_row(btc_name, btc_price, &c.bitcoin),
                coin_row("✖ XRP:", format::usd_fixed(c.ripple.usd, 3), &c.ripple),
            ]
        });

        Self {
            heading: content.live_feeds,
            clocks: [owner, second],
            weather,
            coins,
        }
    }
}

fn coin_row(name: &'static str, price: String, quote: &CoinQuote) -> CoinRow {
    CoinRow {
        name,
        price,
        change: format!("({})", format::percent_change(quote.usd_24h_change)),
        trend: if quote.usd_24h_change > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Language;
    use crate::feed::{CryptoReading, DemoFeed, FeedError};
    use crate::state::UiAction;
    use chrono::{TimeZone, Utc};

    fn snapshot(viewer_timezone: &str) -> ClockSnapshot {
        let instant = Utc.with_ymd_and_hms(2025, 3, 14, 20, 5, 9).unwrap();
        ClockSnapshot::new(instant, viewer_timezone.to_string())
    }

    fn demo_feeds() -> LiveFeeds {
        let mut feeds = LiveFeeds::default();
        feeds.apply_weather(Ok(DemoFeed::weather()));
        feeds.apply_crypto(Ok(DemoFeed::crypto()));
        feeds
    }

    #[test]
    fn test_weather_row_format() {
        let panel = LivePanel::build(
            &UiState::default(),
            &snapshot("UTC"),
            &demo_feeds(),
            PanelLayout::Desktop,
        );
        let weather = panel.weather.expect("weather row");
        assert_eq!(weather.place, "Guatemala");
        assert_eq!(weather.temperature, "22°C");
        assert_eq!(weather.wind, "3.5m/s");
        assert!(weather.details.contains("75%"));

        let mobile = LivePanel::build(
            &UiState::default(),
            &snapshot("UTC"),
            &demo_feeds(),
            PanelLayout::Mobile,
        );
        assert_eq!(mobile.weather.map(|w| w.place), Some("GT"));
    }

    #[test]
    fn test_crypto_rows() {
        let desktop = LivePanel::build(
            &UiState::default(),
            &snapshot("UTC"),
            &demo_feeds(),
            PanelLayout::Desktop,
        );
        let [btc, xrp] = desktop.coins.expect("coin rows");
        assert_eq!(btc.name, "₿ Bitcoin:");
        assert_eq!(btc.price, "$43,250");
        assert_eq!(btc.change, "(+2.5%)");
        assert_eq!(btc.trend, Trend::Up);
        assert_eq!(xrp.price, "$0.620");
        assert_eq!(xrp.change, "(+3.8%)");

        let mobile = LivePanel::build(
            &UiState::default(),
            &snapshot("UTC"),
            &demo_feeds(),
            PanelLayout::Mobile,
        );
        let [btc, _] = mobile.coins.expect("coin rows");
        assert_eq!(btc.name, "₿ BTC:");
        assert_eq!(btc.price, "$43k");
    }

    #[test]
    fn test_negative_change_keeps_own_sign() {
        let mut feeds = LiveFeeds::default();
        let mut crypto: CryptoReading = DemoFeed::crypto();
        crypto.bitcoin.usd_24h_change = -1.7;
        crypto.ripple.usd_24h_change = 0.0;
        feeds.apply_crypto(Ok(crypto));

        let panel = LivePanel::build(
            &UiState::default(),
            &snapshot("UTC"),
            &feeds,
            PanelLayout::Desktop,
        );
        let [btc, xrp] = panel.coins.expect("coin rows");
        assert_eq!(btc.change, "(-1.7%)");
        assert_eq!(btc.trend, Trend::Down);
        assert_eq!(xrp.change, "(0.0%)");
        assert_eq!(xrp.trend, Trend::Down);
    }

    #[test]
    fn test_missing_feeds_render_nothing() {
        let mut feeds = LiveFeeds::default();
        feeds.apply_weather(Err(FeedError::unavailable(
            crate::feed::Feed::Weather,
            "offline",
        )));
        let panel = LivePanel::build(
            &UiState::default(),
            &snapshot("UTC"),
            &feeds,
            PanelLayout::Desktop,
        );
        assert!(panel.weather.is_none());
        assert!(panel.coins.is_none());
        // clocks never depend on the feeds
        assert_eq!(panel.clocks[0].kind, ClockKind::Owner);
    }

    #[test]
    fn test_clock_rows_for_visitor() {
        let panel = LivePanel::build(
            &UiState::default(),
            &snapshot("Europe/Madrid"),
            &LiveFeeds::default(),
            PanelLayout::Desktop,
        );
        let [owner, viewer] = panel.clocks;
        assert_eq!(owner.label, "My hour");
        assert_eq!(owner.time, "14:05:09");
        assert_eq!(viewer.kind, ClockKind::Viewer);
        assert_eq!(viewer.label, "Your local hour");
        assert_eq!(viewer.time, "21:05:09");
        assert_eq!(panel.heading, "🚀 APIs en Vivo");
    }

    #[test]
    fn test_clock_rows_for_local_viewer() {
        let state = UiState::default().with(UiAction::ToggleLanguage);
        let panel = LivePanel::build(
            &state,
            &snapshot("America/Guatemala"),
            &LiveFeeds::default(),
            PanelLayout::Mobile,
        );
        let [owner, shared] = panel.clocks;
        assert_eq!(shared.kind, ClockKind::Shared);
        assert_eq!(shared.label, "Our local hour");
        assert_eq!(owner.time, "2:05:09 PM");
        assert_eq!(shared.time, owner.time);
        assert_eq!(panel.heading, Language::En.content().live_feeds);
    }
}
