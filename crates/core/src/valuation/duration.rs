//! Day-count constants and duration formatting shared by age, warranty, and
//! history calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Average days per year.
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Average days per month.
pub const DAYS_PER_MONTH: Decimal = dec!(30.44);

/// Whole calendar days from `start` to `end` (negative if `end` is earlier).
#[must_use]
pub fn whole_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// A day count split into average years, months, and remaining days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedParts {
    /// Whole years.
    pub years: i64,
    /// Whole months after the years.
    pub months: i64,
    /// Whole days after the months.
    pub days: i64,
}

impl ElapsedParts {
    /// Splits an absolute day count.
    #[must_use]
    pub fn from_days(total_days: i64) -> Self {
        let total = Decimal::from(total_days.unsigned_abs());
        let years = (total / DAYS_PER_YEAR).floor();
        let remainder = total - years * DAYS_PER_YEAR;
        let months = (remainder / DAYS_PER_MONTH).floor();
        let days = (remainder - months * DAYS_PER_MONTH).floor();

        Self {
            years: years.to_i64().unwrap_or_default(),
            months: months.to_i64().unwrap_or_default(),
            days: days.to_i64().unwrap_or_default(),
        }
    }

    /// Returns true when every unit is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// The two largest non-zero units, title case: `"2 Years 3 Months"`.
    ///
    /// Zero elapsed time renders as `"Today"`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_zero() {
            return "Today".to_string();
        }
        self.non_zero_units(["Year", "Month", "Day"])
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every non-zero unit, lower case: `"1 year, 2 months, 3 days"`.
    ///
    /// Zero elapsed time renders as `"today"`.
    #[must_use]
    pub fn message(&self) -> String {
        if self.is_zero() {
            return "today".to_string();
        }
        self.non_zero_units(["year", "month", "day"])
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn non_zero_units(&self, names: [&'static str; 3]) -> impl Iterator<Item = String> {
        [self.years, self.months, self.days]
            .into_iter()
            .zip(names)
            .filter(|(count, _)| *count > 0)
            .map(|(count, unit)| pluralize(count, unit))
    }
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
