#[cfg(target_arch = "wasm32")]
pub fn now_unix_millis() -> u64 {
    let now = js_sys::Date::now();
    if now.is_finite() && now > 0.0 {
        now as u64
    } else {
        0
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

pub fn now_unix_seconds() -> u64 {
    now_unix_millis() / 1_000
}

/// Calendar year for a unix timestamp in milliseconds (UTC).
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn year_of(unix_millis: u64) -> i64 {
    // Civil-from-days, Howard Hinnant's algorithm.
    let days = (unix_millis / 86_400_000) as i64 + 719_468;
    let era = days.div_euclid(146_097);
    let day_of_era = days - era * 146_097;
    let year_of_era = (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let year = year_of_era + era * 400;
    if month_index >= 10 {
        year + 1
    } else {
        year
    }
}
