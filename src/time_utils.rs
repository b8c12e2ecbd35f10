use chrono::DateTime;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

/// Abbreviated month and day (`"Mar 04"`) for an x-axis tick.
///
/// The tick is shown in local wall-clock time (`utc_offset_minutes` east of
/// UTC) after shifting it back by the whole hours of that offset, rounded
/// toward negative infinity.
pub fn format_month_day(tick_ms: f64, utc_offset_minutes: i32) -> String {
    let offset = i64::from(utc_offset_minutes);
    let whole_hours = offset.div_euclid(60);
    let wall_clock = (tick_ms.round() as i64)
        .checked_add(offset * MINUTE_MS)
        .and_then(|ms| ms.checked_sub(whole_hours * HOUR_MS));

    match wall_clock.and_then(DateTime::from_timestamp_millis) {
        Some(date) => date.format("%b %d").to_string(),
        None => String::new(),
    }
}

/// Price tick text the way a JavaScript number prints: no trailing `.0`, no
/// negative zero.
pub fn format_price_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
