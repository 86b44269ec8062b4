use anyhow::{Context, Result};
use shared::CalendarConfig;

/// Id of the `<script type="application/json">` element holding overrides
const CONFIG_ELEMENT_ID: &str = "calendar-config";

/// Load the calendar config embedded in the page.
///
/// A missing or empty element means defaults; malformed JSON is an error.
pub fn load_config() -> Result<CalendarConfig> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context("No document available")?;

    let json = match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => element.text_content().unwrap_or_default(),
        None => return Ok(CalendarConfig::default()),
    };

    if json.trim().is_empty() {
        return Ok(CalendarConfig::default());
    }

    CalendarConfig::from_json(&json).context("Failed to parse #calendar-config")
}
