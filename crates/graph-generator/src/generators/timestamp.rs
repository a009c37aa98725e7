//! Date and time value generators.
//!
//! Range bounds are date expressions, resolved once against a reference time:
//!
//! - `now`, `today`
//! - relative offsets: `-30 years`, `+1 week`, `-90 minutes`
//! - absolute: RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD`

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime};
use rand::Rng;
use std::fmt::Write;

/// Canonical text form of every generated date/time.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a date expression relative to `now`.
pub fn parse_date_expression(expr: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let expr = expr.trim();
    match expr.to_ascii_lowercase().as_str() {
        "now" => return Some(now),
        "today" => return now.date().and_hms_opt(0, 0, 0),
        _ => {}
    }

    if let Some(dt) = parse_relative(expr, now) {
        return Some(dt);
    }

    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(expr) {
        return Some(dt.naive_utc());
    }

    for format in [DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(expr, format) {
            return Some(dt);
        }
    }

    // Try common date-only format
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

/// Parse `[+-]N unit` offsets.
fn parse_relative(expr: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let (negative, rest) = match expr.as_bytes().first()? {
        b'-' => (true, &expr[1..]),
        b'+' => (false, &expr[1..]),
        _ => (false, expr),
    };

    let mut parts = rest.split_whitespace();
    let amount: i64 = parts.next()?.parse().ok()?;
    let unit = parts.next()?.to_ascii_lowercase();
    if parts.next().is_some() {
        return None;
    }

    let unit = unit.strip_suffix('s').unwrap_or(&unit);
    let signed = if negative { -amount } else { amount };

    match unit {
        "second" | "sec" => now.checked_add_signed(Duration::try_seconds(signed)?),
        "minute" | "min" => now.checked_add_signed(Duration::try_minutes(signed)?),
        "hour" => now.checked_add_signed(Duration::try_hours(signed)?),
        "day" => now.checked_add_signed(Duration::try_days(signed)?),
        "week" => now.checked_add_signed(Duration::try_weeks(signed)?),
        "month" => shift_months(now, signed),
        "year" => shift_months(now, signed.checked_mul(12)?),
        _ => None,
    }
}

fn shift_months(now: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        now.checked_sub_months(magnitude)
    } else {
        now.checked_add_months(magnitude)
    }
}

/// Generate a random date/time between `start` and `end` (inclusive, whole seconds).
pub fn generate_datetime_between<R: Rng>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> NaiveDateTime {
    let start_ts = start.and_utc().timestamp();
    let end_ts = end.and_utc().timestamp();

    if start_ts >= end_ts {
        return start;
    }

    let random_ts = rng.gen_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or(start)
}

/// Translate a PHP `date()` format (`Y-m-d`) into a strftime format (`%Y-%m-%d`).
///
/// Formats that already contain `%` are taken to be strftime and returned as is.
pub fn php_to_strftime(format: &str) -> String {
    if format.contains('%') {
        return format.to_string();
    }

    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        let mapped = match c {
            'Y' => "%Y",
            'y' => "%y",
            'm' => "%m",
            'n' => "%-m",
            'd' => "%d",
            'j' => "%-d",
            'H' => "%H",
            'G' => "%-H",
            'h' => "%I",
            'g' => "%-I",
            'i' => "%M",
            's' => "%S",
            'A' => "%p",
            'a' => "%P",
            'D' => "%a",
            'l' => "%A",
            'M' => "%b",
            'F' => "%B",
            'U' => "%s",
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
                continue;
            }
            other => {
                out.push(other);
                continue;
            }
        };
        out.push_str(mapped);
    }
    out
}

/// Check that a strftime format is well formed and renders on a naive
/// date/time. Timezone items (`%Z`, `%z`, `%:z`) parse but cannot render.
pub fn is_valid_strftime(format: &str) -> bool {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let sample = DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc();
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).is_ok()
}
