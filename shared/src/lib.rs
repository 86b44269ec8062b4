use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{Datelike, Months, NaiveDate};

pub mod calendar;
pub mod config;
pub mod error;
pub mod holidays;
pub mod navigation;
pub mod selection;
pub mod state;
pub mod timer;
pub mod tooltip;

pub use calendar::{month_name, CalendarService};
pub use config::CalendarConfig;
pub use error::CalendarError;
pub use holidays::{HolidayEntry, HolidayTable, MonthDayKey};
pub use navigation::{NavigationController, NavigationDirection, NavigationEvent, NavigationPhase};
pub use selection::SelectionController;
pub use state::{render, CalendarState, CalendarView, Machine, TimerCommands};
pub use timer::{TimerCommand, TimerRequest, TimerToken};
pub use tooltip::{position_tooltip, CellRect, TooltipController, TooltipPosition, TooltipSize, VisibleTooltip};

/// The month currently shown by the calendar.
///
/// Always holds the first day of a valid month, so month arithmetic on it
/// cannot produce an invalid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarFocusDate {
    first_day: NaiveDate,
}

impl CalendarFocusDate {
    /// Focus on `month` (1-12) of `year`.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::OutOfRange { year, month })?;
        Ok(Self { first_day })
    }

    /// Focus on the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let first_day = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
        Self { first_day }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Weekday of the 1st (0 = Sunday .. 6 = Saturday)
    pub fn first_weekday(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    /// Number of days in the month, taken as "day 0" of the next month:
    /// the day before the next month's 1st.
    pub fn days_in_month(&self) -> u32 {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next_first| next_first.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Number of days in the previous month (its last day).
    pub fn days_in_previous_month(&self) -> u32 {
        self.first_day.pred_opt().map(|last| last.day()).unwrap_or(31)
    }

    /// Shift by `offset` months, rolling the year over below January or
    /// above December. Stays put if the result leaves chrono's date range.
    pub fn shifted(&self, offset: i32) -> Self {
        let index = self.year() * 12 + self.month0() as i32 + offset;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        Self::new(year, month).unwrap_or(*self)
    }

    pub fn previous(&self) -> Self {
        self.shifted(-1)
    }

    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    fn month0(&self) -> u32 {
        self.first_day.month0()
    }
}

impl fmt::Display for CalendarFocusDate {
    /// Header label, e.g. "October 2026"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_name(self.month()), self.year())
    }
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Trailing day of the previous month, shown only to align the grid
    PrevMonthFiller,
    /// Actual day within the month
    MonthDay,
}

/// A single cell of the rendered grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub day: u32,
    pub day_type: CalendarDayType,
    pub is_weekend: bool,
    pub is_today: bool,
    pub holiday_reason: Option<String>,
    pub is_selected: bool,
    /// Click pulse currently playing on this cell
    pub is_clicked: bool,
    /// Fade-in delay for the row-by-row cascade; fillers have none
    pub animation_delay_ms: Option<u32>,
}

impl CalendarDay {
    pub fn is_filler(&self) -> bool {
        self.day_type == CalendarDayType::PrevMonthFiller
    }

    pub fn is_holiday(&self) -> bool {
        self.holiday_reason.is_some()
    }

    /// Animation delay as a CSS time value, e.g. "0.15s"
    pub fn animation_delay_css(&self) -> Option<String> {
        self.animation_delay_ms
            .map(|ms| format!("{}s", ms as f64 / 1000.0))
    }
}

/// A rendered calendar month: leading fillers followed by every day
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CalendarMonth {
    pub focus: CalendarFocusDate,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days_in_month: u32,
}

impl CalendarMonth {
    pub fn label(&self) -> String {
        self.focus.to_string()
    }

    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|day| !day.is_filler())
    }

    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.month_days().find(|cell| cell.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_date_rejects_invalid_month() {
        assert!(matches!(CalendarFocusDate::new(2025, 0), Err(CalendarError::InvalidMonth(0))));
        assert!(matches!(CalendarFocusDate::new(2025, 13), Err(CalendarError::InvalidMonth(13))));
        assert!(CalendarFocusDate::new(2025, 12).is_ok());
    }

    #[test]
    fn test_focus_date_rejects_unrepresentable_year() {
        assert!(matches!(
            CalendarFocusDate::new(i32::MAX, 6),
            Err(CalendarError::OutOfRange { year: i32::MAX, month: 6 })
        ));
    }

    #[test]
    fn test_days_in_month() {
        let days = |year, month| CalendarFocusDate::new(year, month).unwrap().days_in_month();

        assert_eq!(days(2025, 1), 31); // January
        assert_eq!(days(2025, 4), 30); // April
        assert_eq!(days(2025, 2), 28); // February (non-leap)
        assert_eq!(days(2024, 2), 29); // February (leap year)
        assert_eq!(days(1900, 2), 28); // Divisible by 100 but not 400
        assert_eq!(days(2000, 2), 29); // Divisible by 400
        assert_eq!(days(2025, 12), 31);
    }

    #[test]
    fn test_days_in_previous_month() {
        let march = CalendarFocusDate::new(2024, 3).unwrap();
        assert_eq!(march.days_in_previous_month(), 29);

        let january = CalendarFocusDate::new(2025, 1).unwrap();
        assert_eq!(january.days_in_previous_month(), 31);
    }

    #[test]
    fn test_navigation_rolls_over_year() {
        let december = CalendarFocusDate::new(2025, 12).unwrap();
        assert_eq!(december.next(), CalendarFocusDate::new(2026, 1).unwrap());

        let january = CalendarFocusDate::new(2025, 1).unwrap();
        assert_eq!(january.previous(), CalendarFocusDate::new(2024, 12).unwrap());

        let june = CalendarFocusDate::new(2025, 6).unwrap();
        assert_eq!(june.previous(), CalendarFocusDate::new(2025, 5).unwrap());
        assert_eq!(june.next(), CalendarFocusDate::new(2025, 7).unwrap());
        assert_eq!(june.shifted(-18), CalendarFocusDate::new(2023, 12).unwrap());
    }

    #[test]
    fn test_focus_label() {
        let focus = CalendarFocusDate::new(2026, 10).unwrap();
        assert_eq!(focus.to_string(), "October 2026");
    }

    #[test]
    fn test_containing_and_contains() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let focus = CalendarFocusDate::containing(date);

        assert_eq!(focus.year(), 2026);
        assert_eq!(focus.month(), 10);
        assert_eq!(focus.first_day().day(), 1);
        assert!(focus.contains(date));
        assert!(!focus.next().contains(date));
    }
}
