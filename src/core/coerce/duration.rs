//! Duration grammars
//!
//! Three textual shapes are accepted for a duration:
//! - a plain integer, read as a number of minutes (`90`)
//! - a clock form `[d.]h:m[:s]` (`01:30:00`, `2.04:00:00`)
//! - the display form produced by [`display`] (`1d 2h 30m`)
//!
//! Durations are whole seconds and never negative.

use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// Parses any of the accepted duration shapes
pub fn parse(text: &str) -> Option<Duration> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(minutes) = text.parse::<u32>() {
        return Some(Duration::from_secs(u64::from(minutes) * SECS_PER_MINUTE));
    }

    if text.contains(':') {
        return parse_clock(text);
    }

    if !is_display_form(text) {
        return None;
    }
    humantime::parse_duration(text).ok()
}

/// Space-separated `<digits><unit>` tokens with a unit of `d`, `h`, `m` or `s`
fn is_display_form(text: &str) -> bool {
    text.split_whitespace().all(|token| {
        let digits = token.trim_end_matches(['d', 'h', 'm', 's']);
        !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && token.len() - digits.len() == 1
    })
}

/// Clock form: optional `days.` prefix, hours below 24, minutes and seconds below 60
fn parse_clock(text: &str) -> Option<Duration> {
    let (days, clock) = match text.split_once('.') {
        Some((days, clock)) => (parse_component(days, u64::MAX / SECS_PER_DAY)?, clock),
        None => (0, text),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m] => (parse_component(h, 23)?, parse_component(m, 59)?, 0),
        [h, m, s] => (
            parse_component(h, 23)?,
            parse_component(m, 59)?,
            parse_component(s, 59)?,
        ),
        _ => return None,
    };

    let total = days
        .checked_mul(SECS_PER_DAY)?
        .checked_add(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds)?;
    Some(Duration::from_secs(total))
}

fn parse_component(part: &str, max: u64) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u64>().ok().filter(|value| *value <= max)
}

/// Human form listing units from the largest non-zero one: `1d 2h 30m`, `5m 10s`, `0s`
pub fn display(duration: Duration) -> String {
    let total = duration.as_secs();
    let units = [
        (total / SECS_PER_DAY, "d"),
        (total % SECS_PER_DAY / SECS_PER_HOUR, "h"),
        (total % SECS_PER_HOUR / SECS_PER_MINUTE, "m"),
        (total % SECS_PER_MINUTE, "s"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{amount}{unit}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

/// Edit form `hh:mm:ss`, prefixed with `d.` once the span reaches a day
pub fn edit(duration: Duration) -> String {
    let total = duration.as_secs();
    let days = total / SECS_PER_DAY;
    let hours = total % SECS_PER_DAY / SECS_PER_HOUR;
    let minutes = total % SECS_PER_HOUR / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if days > 0 {
        format!("{days}.{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
