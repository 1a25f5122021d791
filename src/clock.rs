//! Timezone-aware clocks for the live panel.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::config::SITE;
use crate::content::Language;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Couldn't resolve the viewer's timezone: {0}")]
    TimezoneResolution(String),
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    /// `14:05:09`
    H24,
    /// `2:05:09 PM`
    H12,
}

impl HourCycle {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Es => HourCycle::H24,
            Language::En => HourCycle::H12,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            HourCycle::H24 => "%H:%M:%S",
            HourCycle::H12 => "%-I:%M:%S %p",
        }
    }
}

pub fn parse_timezone(timezone_id: &str) -> Result<Tz, ClockError> {
    timezone_id
        .parse::<Tz>()
        .map_err(|_| ClockError::UnknownTimezone(timezone_id.to_string()))
}

const REFERENCE_TIMEZONES: [&str; 1] = [SITE.reference_timezone];

fn fallback_timezone() -> Tz {
    parse_timezone(SITE.fallback_timezone).unwrap_or(Tz::UTC)
}

/// Wall-clock time of `instant` in `timezone_id`.
///
/// Unknown ids render in the fallback timezone instead of failing.
pub fn format_time(instant: DateTime<Utc>, timezone_id: &str, cycle: HourCycle) -> String {
    let tz = parse_timezone(timezone_id).unwrap_or_else(|e| {
        log::warn!("{e}, formatting in {}", SITE.fallback_timezone);
        fallback_timezone()
    });
    format_in(instant, tz, cycle)
}

pub fn format_in(instant: DateTime<Utc>, tz: Tz, cycle: HourCycle) -> String {
    instant.with_timezone(&tz).format(cycle.pattern()).to_string()
}

pub fn is_reference_region(timezone_id: &str) -> bool {
    REFERENCE_TIMEZONES.iter().any(|tz| *tz == timezone_id)
}

/// Source of the viewer's IANA timezone id.
pub trait TimezoneResolver {
    fn resolve(&self) -> Result<String, ClockError>;
}

/// Always answers with the same id. Used for the server render, where the
/// viewer's timezone is not known yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimezone(pub String);

impl FixedTimezone {
    pub fn new(timezone_id: impl Into<String>) -> Self {
        Self(timezone_id.into())
    }
}

impl TimezoneResolver for FixedTimezone {
    fn resolve(&self) -> Result<String, ClockError> {
        Ok(self.0.clone())
    }
}

/// `Intl.DateTimeFormat().resolvedOptions().timeZone`
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimezone;

#[cfg(feature = "hydrate")]
impl TimezoneResolver for BrowserTimezone {
    fn resolve(&self) -> Result<String, ClockError> {
        use js_sys::{Array, Intl, Object, Reflect};
        use wasm_bindgen::JsValue;

        let options = Intl::DateTimeFormat::new(&Array::new(), &Object::new()).resolved_options();
        Reflect::get(&options, &JsValue::from_str("timeZone"))
            .map_err(|_| ClockError::TimezoneResolution("resolvedOptions() failed".to_string()))?
            .as_string()
            .filter(|tz| !tz.is_empty())
            .ok_or_else(|| ClockError::TimezoneResolution("no timeZone in resolvedOptions()".to_string()))
    }
}

#[cfg(feature = "hydrate")]
pub fn default_resolver() -> BrowserTimezone {
    BrowserTimezone
}

#[cfg(not(feature = "hydrate"))]
pub fn default_resolver() -> FixedTimezone {
    FixedTimezone::new(SITE.fallback_timezone)
}

/// Resolves the viewer's timezone, falling back to UTC when the resolver
/// fails or returns an id the timezone database doesn't know.
pub fn detect_viewer_timezone(resolver: &impl TimezoneResolver) -> String {
    match resolver.resolve().and_then(|id| parse_timezone(&id).map(|_| id)) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("{e}, using {}", SITE.fallback_timezone);
            SITE.fallback_timezone.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub instant: DateTime<Utc>,
    pub viewer_timezone: String,
    pub in_reference_region: bool,
}

impl ClockSnapshot {
    pub fn new(instant: DateTime<Utc>, viewer_timezone: String) -> Self {
        let in_reference_region = is_reference_region(&viewer_timezone);
        Self {
            instant,
            viewer_timezone,
            in_reference_region,
        }
    }

    pub fn reference_time(&self, cycle: HourCycle) -> String {
        format_time(self.instant, SITE.reference_timezone, cycle)
    }

    pub fn viewer_time(&self, cycle: HourCycle) -> String {
        format_time(self.instant, &self.viewer_timezone, cycle)
    }
}

pub struct ClockService<R> {
    resolver: R,
}

impl<R: TimezoneResolver> ClockService<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> ClockSnapshot {
        ClockSnapshot::new(now, detect_viewer_timezone(&self.resolver))
    }

    pub fn now(&self) -> ClockSnapshot {
        self.snapshot(Utc::now())
    }
}
