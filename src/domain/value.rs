//! Setting value kinds and native values
//!
//! Every setting has a fixed [`ValueKind`] that decides which coercion rules
//! apply to it; its current value is held as a [`SettingValue`] of the
//! matching variant.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;
use std::time::Duration;

/// Named constants of an enumeration-typed setting
///
/// # Examples
///
/// ```
/// use keeper::domain::value::EnumDef;
///
/// static MODE: EnumDef = EnumDef::new("DropMode", &["Normal", "Party", "Free"]);
/// assert_eq!(MODE.resolve("party"), Some("Party"));
/// assert_eq!(MODE.resolve("solo"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDef {
    /// Type name shown in conversion errors
    pub name: &'static str,
    /// Constants in declaration order
    pub variants: &'static [&'static str],
}

impl EnumDef {
    /// Creates an enumeration description
    pub const fn new(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self { name, variants }
    }

    /// Finds the constant matching `text` case-insensitively
    pub fn resolve(&self, text: &str) -> Option<&'static str> {
        let text = text.trim();
        self.variants
            .iter()
            .copied()
            .find(|variant| variant.eq_ignore_ascii_case(text))
    }
}

/// Kind of a setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    /// Non-negative time span
    Duration,
    /// Naive local date and time
    Timestamp,
    /// One of the constants of an enumeration
    Enum(&'static EnumDef),
    String,
}

impl ValueKind {
    /// Short name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::I8 => "i8",
            ValueKind::I16 => "i16",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Decimal => "decimal",
            ValueKind::Duration => "duration",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Enum(def) => def.name,
            ValueKind::String => "string",
        }
    }

    /// True for the integer families
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ValueKind::I8
                | ValueKind::I16
                | ValueKind::I32
                | ValueKind::I64
                | ValueKind::U8
                | ValueKind::U16
                | ValueKind::U32
                | ValueKind::U64
        )
    }

    /// True for floating point and decimal kinds
    pub fn is_fractional(&self) -> bool {
        matches!(self, ValueKind::F32 | ValueKind::F64 | ValueKind::Decimal)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Native value of a setting
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Duration(Duration),
    Timestamp(NaiveDateTime),
    /// Canonical constant name
    Enum(String),
    String(String),
}

impl SettingValue {
    /// Whether this value can be stored in a setting of `kind`
    pub fn matches_kind(&self, kind: &ValueKind) -> bool {
        match (self, kind) {
            (SettingValue::Enum(name), ValueKind::Enum(def)) => def.variants.contains(&name.as_str()),
            (SettingValue::Bool(_), ValueKind::Bool)
            | (SettingValue::I8(_), ValueKind::I8)
            | (SettingValue::I16(_), ValueKind::I16)
            | (SettingValue::I32(_), ValueKind::I32)
            | (SettingValue::I64(_), ValueKind::I64)
            | (SettingValue::U8(_), ValueKind::U8)
            | (SettingValue::U16(_), ValueKind::U16)
            | (SettingValue::U32(_), ValueKind::U32)
            | (SettingValue::U64(_), ValueKind::U64)
            | (SettingValue::F32(_), ValueKind::F32)
            | (SettingValue::F64(_), ValueKind::F64)
            | (SettingValue::Decimal(_), ValueKind::Decimal)
            | (SettingValue::Duration(_), ValueKind::Duration)
            | (SettingValue::Timestamp(_), ValueKind::Timestamp)
            | (SettingValue::String(_), ValueKind::String) => true,
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Widens any signed or unsigned integer that fits in `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SettingValue::I8(v) => Some(i64::from(*v)),
            SettingValue::I16(v) => Some(i64::from(*v)),
            SettingValue::I32(v) => Some(i64::from(*v)),
            SettingValue::I64(v) => Some(*v),
            SettingValue::U8(v) => Some(i64::from(*v)),
            SettingValue::U16(v) => Some(i64::from(*v)),
            SettingValue::U32(v) => Some(i64::from(*v)),
            SettingValue::U64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            SettingValue::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Text of string and enumerant values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) | SettingValue::Enum(s) => Some(s),
            _ => None,
        }
    }
}
