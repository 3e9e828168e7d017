//! WASM bindings for the availability calendar.
//!
//! The browser host reads its own clock, passes "today" in, and inserts the
//! returned HTML fragment into the page.

use availability_calendar::{
    render_html_calendar, AvailabilitySet, CalendarConfig, CalendarDate, DateWindowBuilder,
};
use wasm_bindgen::prelude::*;

/// Render the calendar as an HTML fragment.
///
/// `available_json` is a JSON array of `YYYY-MM-DD` strings; malformed
/// entries are skipped. An empty `container_id` is rejected.
#[wasm_bindgen(js_name = renderCalendar)]
pub fn render_calendar(
    today: &str,
    available_json: &str,
    container_id: &str,
) -> Result<String, JsError> {
    render_fragment(today, available_json, container_id).map_err(|e| JsError::new(&e))
}

/// The window's dates as a JSON array of strings.
#[wasm_bindgen(js_name = buildWindow)]
pub fn build_window(today: &str, days: i32) -> Result<String, JsError> {
    window_json(today, days).map_err(|e| JsError::new(&e))
}

fn render_fragment(today: &str, available_json: &str, container_id: &str) -> Result<String, String> {
    let today = CalendarDate::parse(today).map_err(|e| e.to_string())?;
    let raw: Vec<String> =
        serde_json::from_str(available_json).map_err(|e| format!("available dates: {e}"))?;
    let config = CalendarConfig {
        container_id: container_id.to_string(),
        ..CalendarConfig::default()
    };
    let container = render_html_calendar(today, &AvailabilitySet::from_strings(&raw), &config)
        .map_err(|e| e.to_string())?;
    container.to_html().map_err(|e| e.to_string())
}

fn window_json(today: &str, days: i32) -> Result<String, String> {
    let window = DateWindowBuilder::new(i64::from(days))
        .build_from_str(today)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&window).map_err(|e| e.to_string())
}
