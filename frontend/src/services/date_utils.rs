use chrono::NaiveDate;
use js_sys::Date;
use shared::{CellRect, TooltipSize};
use web_sys::Element;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Current viewport width in CSS pixels
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Bounding box of `element` in viewport coordinates
pub fn element_rect(element: &Element) -> CellRect {
    let rect = element.get_bounding_client_rect();
    CellRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Rendered size of `element`
pub fn element_size(element: &Element) -> TooltipSize {
    let rect = element.get_bounding_client_rect();
    TooltipSize {
        width: rect.width(),
        height: rect.height(),
    }
}
