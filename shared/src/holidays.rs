//! Fixed holiday table keyed by month and day.
//!
//! Holidays recur on the same `MM-DD` every year, so lookups ignore the year
//! entirely. The default table covers the Bangladesh government holidays;
//! a configuration file may replace it wholesale.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Zero-padded `MM-DD` key used to match a date against the holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDayKey {
    month: u32,
    day: u32,
}

impl MonthDayKey {
    /// Build a key, rejecting dates that never occur (leap day is allowed).
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        // 2000 is a leap year, so 02-29 is accepted
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(CalendarError::InvalidMonthDay(format!("{:02}-{:02}", month, day)));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for MonthDayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDayKey {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonthDay(s.to_string());

        let (month, day) = s.split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let day = day.parse::<u32>().map_err(|_| invalid())?;

        Self::new(month, day).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthDayKey {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDayKey> for String {
    fn from(key: MonthDayKey) -> Self {
        key.to_string()
    }
}

/// A single recurring holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayEntry {
    #[serde(rename = "date")]
    pub month_day: MonthDayKey,
    pub reason: String,
}

const DEFAULT_HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "New Year"),
    (2, 21, "Language Martyrs Day"),
    (3, 17, "Birthday of Sheikh Mujibur Rahman"),
    (3, 26, "Independence Day"),
    (5, 1, "May Day"),
    (8, 15, "National Mourning Day"),
    (12, 10, "Victory Day"),
    (12, 16, "Liberation War Victory"),
    // Religious holidays
    (4, 22, "Shab-e-Barat (Islamic)"),
    (6, 28, "Eid-ul-Fitr (Islamic)"),
    (7, 30, "Eid-al-Adha (Islamic)"),
    (8, 20, "Ashura (Islamic)"),
    (10, 18, "Muharram (Islamic)"),
    (12, 25, "Christmas Day"),
];

/// Immutable holiday lookup, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayTable {
    by_key: HashMap<MonthDayKey, String>,
}

impl HolidayTable {
    /// Build a table from entries. A later entry for the same key wins.
    pub fn from_entries(entries: impl IntoIterator<Item = HolidayEntry>) -> Self {
        let by_key = entries
            .into_iter()
            .map(|entry| (entry.month_day, entry.reason))
            .collect();
        Self { by_key }
    }

    /// Reason for the holiday on `month`/`day`, if any.
    pub fn lookup(&self, month: u32, day: u32) -> Option<&str> {
        let key = MonthDayKey::new(month, day).ok()?;
        self.get(&key)
    }

    pub fn get(&self, key: &MonthDayKey) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl Default for HolidayTable {
    fn default() -> Self {
        Self::from_entries(DEFAULT_HOLIDAYS.iter().map(|&(month, day, reason)| HolidayEntry {
            month_day: MonthDayKey { month, day },
            reason: reason.to_string(),
        }))
    }
}
