//! Conversion between setting values and their textual forms
//!
//! [`parse`] turns submitted or stored text into a native [`SettingValue`].
//! Two inverses exist because display and edit contexts need different
//! shapes from the same value:
//!
//! - [`format`] renders for reading (`yes`, `1h 30m`, `2025-01-31 18:00:00`)
//! - [`raw_for_editing`] renders for a form field (`true`, `01:30:00`,
//!   `2025-01-31T18:00:00`)
//!
//! Both are accepted back by [`parse`].
//!
//! # Examples
//!
//! ```
//! use keeper::core::coerce::{format, parse, raw_for_editing};
//! use keeper::domain::{SettingValue, ValueKind};
//! use std::time::Duration;
//!
//! let value = parse("90", &ValueKind::Duration).unwrap();
//! assert_eq!(value, SettingValue::Duration(Duration::from_secs(5_400)));
//! assert_eq!(format(&value), "1h 30m");
//! assert_eq!(raw_for_editing(&value), "01:30:00");
//! ```

pub mod duration;

use crate::domain::{ConsoleError, Result, SettingValue, ValueKind};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Display pattern for timestamps
pub const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

/// Edit pattern for timestamps, accepted by a `datetime-local` control
pub const TIMESTAMP_EDIT: &str = "%Y-%m-%dT%H:%M:%S";

const TIMESTAMP_PATTERNS: [&str; 5] = [
    TIMESTAMP_DISPLAY,
    TIMESTAMP_EDIT,
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

macro_rules! parse_number {
    ($variant:ident, $ty:ty, $text:expr, $kind:expr) => {
        $text
            .trim()
            .parse::<$ty>()
            .map(SettingValue::$variant)
            .map_err(|_| ConsoleError::conversion($kind.name(), $text))
    };
}

/// Converts `text` into a value of `kind`
///
/// Booleans never fail: `true`, `1`, `on` and `yes` (any case) are true and
/// any other text is false.
///
/// # Errors
///
/// Returns [`ConsoleError::Conversion`] when the text does not match the
/// grammar of `kind`. The key is left empty; callers bound to a setting add
/// it with [`ConsoleError::for_key`].
pub fn parse(text: &str, kind: &ValueKind) -> Result<SettingValue> {
    match kind {
        ValueKind::String => Ok(SettingValue::String(text.to_string())),
        ValueKind::Bool => Ok(SettingValue::Bool(parse_bool(text))),
        ValueKind::I8 => parse_number!(I8, i8, text, kind),
        ValueKind::I16 => parse_number!(I16, i16, text, kind),
        ValueKind::I32 => parse_number!(I32, i32, text, kind),
        ValueKind::I64 => parse_number!(I64, i64, text, kind),
        ValueKind::U8 => parse_number!(U8, u8, text, kind),
        ValueKind::U16 => parse_number!(U16, u16, text, kind),
        ValueKind::U32 => parse_number!(U32, u32, text, kind),
        ValueKind::U64 => parse_number!(U64, u64, text, kind),
        ValueKind::F32 => text
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|f| f.is_finite())
            .map(SettingValue::F32)
            .ok_or_else(|| ConsoleError::conversion(kind.name(), text)),
        ValueKind::F64 => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(SettingValue::F64)
            .ok_or_else(|| ConsoleError::conversion(kind.name(), text)),
        ValueKind::Decimal => Decimal::from_str(text.trim())
            .map(SettingValue::Decimal)
            .map_err(|_| ConsoleError::conversion(kind.name(), text)),
        ValueKind::Duration => duration::parse(text)
            .map(SettingValue::Duration)
            .ok_or_else(|| ConsoleError::conversion(kind.name(), text)),
        ValueKind::Timestamp => parse_timestamp(text)
            .map(SettingValue::Timestamp)
            .ok_or_else(|| ConsoleError::conversion(kind.name(), text)),
        ValueKind::Enum(def) => def
            .resolve(text)
            .map(|name| SettingValue::Enum(name.to_string()))
            .ok_or_else(|| ConsoleError::conversion(kind.name(), text)),
    }
}

fn parse_bool(text: &str) -> bool {
    let text = text.trim();
    ["true", "1", "on", "yes"]
        .iter()
        .any(|truthy| text.eq_ignore_ascii_case(truthy))
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Renders a value for reading
pub fn format(value: &SettingValue) -> String {
    match value {
        SettingValue::Bool(true) => "yes".to_string(),
        SettingValue::Bool(false) => "no".to_string(),
        SettingValue::Duration(d) => duration::display(*d),
        SettingValue::Timestamp(ts) => ts.format(TIMESTAMP_DISPLAY).to_string(),
        other => natural(other),
    }
}

/// Renders a value for an edit field
pub fn raw_for_editing(value: &SettingValue) -> String {
    match value {
        SettingValue::Bool(b) => b.to_string(),
        SettingValue::Duration(d) => duration::edit(*d),
        SettingValue::Timestamp(ts) => ts.format(TIMESTAMP_EDIT).to_string(),
        other => natural(other),
    }
}

fn natural(value: &SettingValue) -> String {
    match value {
        SettingValue::Bool(b) => b.to_string(),
        SettingValue::I8(v) => v.to_string(),
        SettingValue::I16(v) => v.to_string(),
        SettingValue::I32(v) => v.to_string(),
        SettingValue::I64(v) => v.to_string(),
        SettingValue::U8(v) => v.to_string(),
        SettingValue::U16(v) => v.to_string(),
        SettingValue::U32(v) => v.to_string(),
        SettingValue::U64(v) => v.to_string(),
        SettingValue::F32(v) => v.to_string(),
        SettingValue::F64(v) => v.to_string(),
        SettingValue::Decimal(v) => v.to_string(),
        SettingValue::Duration(d) => duration::edit(*d),
        SettingValue::Timestamp(ts) => ts.format(TIMESTAMP_DISPLAY).to_string(),
        SettingValue::Enum(s) | SettingValue::String(s) => s.clone(),
    }
}

/// Form control suited to a value kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Checkbox,
    Number,
    DateTimeLocal,
    Text,
}

impl InputKind {
    /// HTML `input` type attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Checkbox => "checkbox",
            InputKind::Number => "number",
            InputKind::DateTimeLocal => "datetime-local",
            InputKind::Text => "text",
        }
    }
}

/// Picks the form control for a value kind
pub fn input_kind(kind: &ValueKind) -> InputKind {
    match kind {
        ValueKind::Bool => InputKind::Checkbox,
        k if k.is_integer() || k.is_fractional() => InputKind::Number,
        ValueKind::Timestamp => InputKind::DateTimeLocal,
        _ => InputKind::Text,
    }
}
