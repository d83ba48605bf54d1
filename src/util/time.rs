//! Timestamp display.
//!
//! In the browser, ISO-8601 strings from the backend are shown in the
//! user's locale through `Date.toLocaleString`. Native builds fall back to a
//! trimmed `YYYY-MM-DD HH:MM:SS` rendering.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Localized date and time.
pub fn format_datetime(iso: &str) -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(date) = parse_js_date(iso) {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    fallback_datetime(iso)
}

/// Localized time of day.
pub fn format_time(iso: &str) -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(date) = parse_js_date(iso) {
            return String::from(date.to_locale_time_string("default"));
        }
    }
    fallback_datetime(iso).split(' ').nth(1).map_or_else(|| iso.to_owned(), str::to_owned)
}

#[cfg(feature = "csr")]
fn parse_js_date(iso: &str) -> Option<js_sys::Date> {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    (!date.get_time().is_nan()).then_some(date)
}

fn fallback_datetime(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    let time = time.get(..8).unwrap_or(time);
    format!("{date} {time}")
}
