use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::holidays::{HolidayEntry, HolidayTable};

/// Timing, layout and data settings for the calendar widget.
///
/// Every field has a default, so a config document only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Hover time before a holiday tooltip appears
    pub tooltip_show_delay_ms: u32,
    /// Fade-out time before a hidden tooltip is removed
    pub tooltip_fade_ms: u32,
    /// Gap between the tooltip's bottom edge and the hovered cell
    pub tooltip_offset_y: f64,
    /// Distance kept from the viewport edges when clamping
    pub tooltip_edge_margin: f64,
    pub nav_fade_out_ms: u32,
    pub nav_transition_ms: u32,
    pub click_pulse_ms: u32,
    /// Weekend days as 0 = Sunday .. 6 = Saturday
    pub weekend_days: Vec<u32>,
    pub log_level: String,
    /// Replaces the built-in holiday table when present
    pub holidays: Option<Vec<HolidayEntry>>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            tooltip_show_delay_ms: 300,
            tooltip_fade_ms: 300,
            tooltip_offset_y: 10.0,
            tooltip_edge_margin: 10.0,
            nav_fade_out_ms: 300,
            nav_transition_ms: 500,
            click_pulse_ms: 600,
            weekend_days: vec![5, 6], // Friday, Saturday
            log_level: "info".to_string(),
            holidays: None,
        }
    }
}

impl CalendarConfig {
    /// Parse a JSON config document, filling gaps with defaults.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn holiday_table(&self) -> HolidayTable {
        match &self.holidays {
            Some(entries) => HolidayTable::from_entries(entries.iter().cloned()),
            None => HolidayTable::default(),
        }
    }
}
