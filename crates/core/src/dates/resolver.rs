//! Single entry point for turning stored date values into `NaiveDate`.
//!
//! Dates reach the engine as ISO strings from the API, `DD/MM/YYYY` strings
//! typed by operators, `MM/DD/YYYY` strings from older imports, timestamps,
//! or already-parsed values. Every component resolves them through here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Years accepted in slash-delimited input.
const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// A date value as it arrives from the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawDate<'a> {
    /// No value stored.
    Missing,
    /// Text in any supported notation.
    Text(&'a str),
    /// Already a calendar date.
    Date(NaiveDate),
    /// A point in time; its UTC calendar date is used.
    Timestamp(DateTime<Utc>),
}

impl<'a> From<&'a str> for RawDate<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for RawDate<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for RawDate<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Self::Missing, Self::Text)
    }
}

impl From<NaiveDate> for RawDate<'_> {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<Option<NaiveDate>> for RawDate<'_> {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::Missing, Self::Date)
    }
}

impl From<DateTime<Utc>> for RawDate<'_> {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self::Timestamp(timestamp)
    }
}

/// How the first two fields of `a/b/YYYY` are assigned to day and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashOrder {
    /// `a > 12` means `DD/MM`, `b > 12` means `MM/DD`, otherwise `DD/MM`.
    Heuristic,
    /// Always `DD/MM`; a month above 12 is rejected.
    DayFirst,
}

/// Resolves heterogeneous date representations.
pub struct DateResolver;

impl DateResolver {
    /// Resolves a date using the positional slash heuristic.
    ///
    /// Returns `None` for missing, empty, or unparseable input.
    ///
    /// ```
    /// use assetlens_core::dates::DateResolver;
    /// use chrono::NaiveDate;
    ///
    /// let expected = NaiveDate::from_ymd_opt(2023, 1, 31);
    /// assert_eq!(DateResolver::resolve("31/01/2023"), expected);
    /// assert_eq!(DateResolver::resolve("01/31/2023"), expected);
    /// assert_eq!(DateResolver::resolve("2023-01-31"), expected);
    /// ```
    #[must_use]
    pub fn resolve<'a>(raw: impl Into<RawDate<'a>>) -> Option<NaiveDate> {
        Self::resolve_with(raw.into(), SlashOrder::Heuristic)
    }

    /// Resolves a date reading every slash date as `DD/MM/YYYY`.
    ///
    /// Used at asset intake, where operators enter dates day-first and an
    /// `MM/DD` value indicates a data-entry mistake worth surfacing.
    #[must_use]
    pub fn resolve_day_first<'a>(raw: impl Into<RawDate<'a>>) -> Option<NaiveDate> {
        Self::resolve_with(raw.into(), SlashOrder::DayFirst)
    }

    /// Resolves a date with an explicit slash ordering.
    #[must_use]
    pub fn resolve_with(raw: RawDate<'_>, order: SlashOrder) -> Option<NaiveDate> {
        match raw {
            RawDate::Missing => None,
            RawDate::Date(date) => Some(date),
            RawDate::Timestamp(timestamp) => Some(timestamp.date_naive()),
            RawDate::Text(text) => {
                let resolved = Self::parse_text(text.trim(), order);
                if resolved.is_none() && !text.trim().is_empty() {
                    tracing::debug!(raw = %text, ?order, "unresolvable date value");
                }
                resolved
            }
        }
    }

    /// Formats a date as `DD/MM/YYYY`.
    #[must_use]
    pub fn format_day_first(date: NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    /// Formats a date as `YYYY-MM-DD`.
    #[must_use]
    pub fn format_iso(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn parse_text(text: &str, order: SlashOrder) -> Option<NaiveDate> {
        if text.is_empty() {
            return None;
        }

        if text.contains('/') {
            return Self::parse_slash(text, order);
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(text)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|dt| dt.date())
            })
    }

    fn parse_slash(text: &str, order: SlashOrder) -> Option<NaiveDate> {
        let mut fields = text.split('/').map(|part| part.trim().parse::<u32>().ok());
        let (first, second, year) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(Some(a)), Some(Some(b)), Some(Some(y)), None) => (a, b, y),
            _ => return None,
        };

        // Only a second field that cannot be a month flips the order.
        let (day, month) = if order == SlashOrder::Heuristic && first <= 12 && second > 12 {
            (second, first)
        } else {
            (first, second)
        };

        let year = i32::try_from(year).ok()?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }

        NaiveDate::from_ymd_opt(year, month, day)
    }
}
