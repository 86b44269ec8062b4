//! Calendar grid construction.
//!
//! This module turns a focus month into the ordered list of cells the UI
//! lays out on a 7-column grid: leading filler days from the previous month,
//! then every day of the month decorated with weekend, holiday and "today"
//! flags. The UI only handles presentation; all date rules live here.

use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;

use crate::config::CalendarConfig;
use crate::holidays::HolidayTable;
use crate::{CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth};

/// Fade-in stagger between rows of the grid
const ROW_DELAY_MS: u32 = 100;
/// Fade-in stagger between columns within a row
const COLUMN_DELAY_MS: u32 = 50;

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Fade-in delay for day `day` (1-based): one row step per full week
/// elapsed plus one column step per day into the week.
pub fn animation_delay_ms(day: u32) -> u32 {
    let index = day.saturating_sub(1);
    (index / 7) * ROW_DELAY_MS + (index % 7) * COLUMN_DELAY_MS
}

/// Builds calendar months from the holiday table and weekend rules
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarService {
    holidays: HolidayTable,
    weekend_days: Vec<u32>,
}

impl CalendarService {
    pub fn new(holidays: HolidayTable, weekend_days: Vec<u32>) -> Self {
        Self {
            holidays,
            weekend_days,
        }
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(config.holiday_table(), config.weekend_days.clone())
    }

    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    /// Generate the cells for `focus`, flagging `today` if it falls inside it
    pub fn generate_calendar_month(&self, focus: CalendarFocusDate, today: NaiveDate) -> CalendarMonth {
        let first_day = focus.first_weekday();
        let days_in_month = focus.days_in_month();
        let prev_month_days = focus.days_in_previous_month();

        debug!(
            "🗓️ CALENDAR: Generating {} ({} days, first weekday {})",
            focus, days_in_month, first_day
        );

        let mut days = Vec::with_capacity((first_day + days_in_month) as usize);

        // Fillers end on the last day of the previous month
        for i in 0..first_day {
            days.push(CalendarDay {
                day: prev_month_days - first_day + i + 1,
                day_type: CalendarDayType::PrevMonthFiller,
                is_weekend: false,
                is_today: false,
                holiday_reason: None,
                is_selected: false,
                is_clicked: false,
                animation_delay_ms: None,
            });
        }

        for day in 1..=days_in_month {
            let date = focus.first_day().with_day(day).unwrap_or(focus.first_day());
            let holiday_reason = self
                .holidays
                .lookup(focus.month(), day)
                .map(str::to_string);

            days.push(CalendarDay {
                day,
                day_type: CalendarDayType::MonthDay,
                is_weekend: self.is_weekend(date.weekday()),
                is_today: date == today,
                holiday_reason,
                is_selected: false,
                is_clicked: false,
                animation_delay_ms: Some(animation_delay_ms(day)),
            });
        }

        debug!("🗓️ CALENDAR: Total calendar cells created: {}", days.len());

        CalendarMonth {
            focus,
            days,
            first_day_of_week: first_day,
            days_in_month,
        }
    }

    fn is_weekend(&self, weekday: Weekday) -> bool {
        self.weekend_days.contains(&weekday.num_days_from_sunday())
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::from_config(&CalendarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus(year: i32, month: u32) -> CalendarFocusDate {
        CalendarFocusDate::new(year, month).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Invalid Month");
    }

    #[test]
    fn test_cell_count_matches_fillers_plus_days() {
        let service = CalendarService::default();
        let today = date(2026, 10, 19);

        for year in [1999, 2000, 2024, 2025, 2026] {
            for month in 1..=12 {
                let calendar = service.generate_calendar_month(focus(year, month), today);
                let fillers = calendar.days.iter().filter(|d| d.is_filler()).count() as u32;

                assert!(fillers <= 6);
                assert_eq!(fillers, calendar.first_day_of_week);
                assert_eq!(calendar.days.len() as u32, fillers + calendar.days_in_month);
            }
        }
    }

    #[test]
    fn test_fillers_count_up_to_previous_month_end() {
        let service = CalendarService::default();
        // October 2026 starts on a Thursday
        let calendar = service.generate_calendar_month(focus(2026, 10), date(2026, 10, 19));

        let fillers: Vec<u32> = calendar
            .days
            .iter()
            .take_while(|d| d.is_filler())
            .map(|d| d.day)
            .collect();
        assert_eq!(fillers, vec![27, 28, 29, 30]);
        assert!(calendar.days[4..].iter().all(|d| !d.is_filler()));
        assert_eq!(calendar.days[4].day, 1);
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_fillers() {
        let service = CalendarService::default();
        // February 2026 starts on a Sunday
        let calendar = service.generate_calendar_month(focus(2026, 2), date(2026, 10, 19));

        assert_eq!(calendar.first_day_of_week, 0);
        assert_eq!(calendar.days.first().unwrap().day, 1);
        assert_eq!(calendar.days.len(), 28);
    }

    #[test]
    fn test_weekend_is_friday_and_saturday() {
        let service = CalendarService::default();
        let calendar = service.generate_calendar_month(focus(2026, 10), date(2026, 10, 19));

        for cell in calendar.month_days() {
            let weekday = date(2026, 10, cell.day).weekday();
            let expected = matches!(weekday, Weekday::Fri | Weekday::Sat);
            assert_eq!(cell.is_weekend, expected, "day {}", cell.day);
        }
    }

    #[test]
    fn test_holiday_flags() {
        let service = CalendarService::default();
        let today = date(2026, 10, 19);

        let january = service.generate_calendar_month(focus(2026, 1), today);
        assert_eq!(january.day(1).unwrap().holiday_reason.as_deref(), Some("New Year"));
        assert!(!january.day(2).unwrap().is_holiday());

        let december = service.generate_calendar_month(focus(2026, 12), today);
        let holidays: Vec<u32> = december.month_days().filter(|d| d.is_holiday()).map(|d| d.day).collect();
        assert_eq!(holidays, vec![10, 16, 25]);
        assert_eq!(december.day(25).unwrap().holiday_reason.as_deref(), Some("Christmas Day"));
        assert!(december.days.iter().filter(|d| d.is_filler()).all(|d| !d.is_holiday()));
    }

    #[test]
    fn test_today_flag_only_in_current_month() {
        let service = CalendarService::default();
        let today = date(2026, 10, 19);

        let october = service.generate_calendar_month(focus(2026, 10), today);
        let flagged: Vec<u32> = october.days.iter().filter(|d| d.is_today).map(|d| d.day).collect();
        assert_eq!(flagged, vec![19]);

        // Same day number, different year
        let last_year = service.generate_calendar_month(focus(2025, 10), today);
        assert!(last_year.days.iter().all(|d| !d.is_today));

        // Filler day 30 of September is never "today" even on September 30
        let sept_end = date(2026, 9, 30);
        let october = service.generate_calendar_month(focus(2026, 10), sept_end);
        assert!(october.days.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_animation_delay_cascade() {
        assert_eq!(animation_delay_ms(1), 0);
        assert_eq!(animation_delay_ms(2), 50);
        assert_eq!(animation_delay_ms(7), 300);
        assert_eq!(animation_delay_ms(8), 100);
        assert_eq!(animation_delay_ms(15), 200);
        assert_eq!(animation_delay_ms(31), 500);

        let service = CalendarService::default();
        let calendar = service.generate_calendar_month(focus(2026, 10), date(2026, 10, 19));
        assert_eq!(calendar.day(9).unwrap().animation_delay_css().as_deref(), Some("0.15s"));
        assert!(calendar.days[0].animation_delay_css().is_none());
    }

    #[test]
    fn test_custom_weekend_and_holidays() {
        let config = CalendarConfig::from_json(
            r#"{"weekend_days": [0, 6], "holidays": [{"date": "10-19", "reason": "Test Day"}]}"#,
        )
        .unwrap();
        let service = CalendarService::from_config(&config);
        let calendar = service.generate_calendar_month(focus(2026, 10), date(2026, 10, 19));

        // 2026-10-18 is a Sunday, 2026-10-16 a Friday
        assert!(calendar.day(18).unwrap().is_weekend);
        assert!(!calendar.day(16).unwrap().is_weekend);
        assert_eq!(calendar.day(19).unwrap().holiday_reason.as_deref(), Some("Test Day"));
        assert!(!calendar.day(18).unwrap().is_holiday());
    }
}
