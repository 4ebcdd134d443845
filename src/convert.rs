//! Dynamic conversion between [`Date`] and related timestamp types, for
//! binding layers that move values around without static types.

use std::fmt;

use chrono::NaiveDateTime;

use crate::{Date, DateError, NullableDate, prelude::*};

/// A dynamically typed value as seen by a binding layer.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Value {
    #[from(ignore)]
    Null,
    Date(Date),
    Timestamp(NaiveDateTime),
    OptionalTimestamp(Option<NaiveDateTime>),
    Text(String),
    Integer(i64),
}

/// The type of a [`Value`], used to name conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Date,
    Timestamp,
    OptionalTimestamp,
    Text,
    Integer,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Date => "Date",
            Self::Timestamp => "timestamp",
            Self::OptionalTimestamp => "optional timestamp",
            Self::Text => "text",
            Self::Integer => "integer",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Date(_) => ValueKind::Date,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::OptionalTimestamp(_) => ValueKind::OptionalTimestamp,
            Self::Text(_) => ValueKind::Text,
            Self::Integer(_) => ValueKind::Integer,
        }
    }

    /// Reads a date out of any date-like value. `Ok(None)` for null and for
    /// an empty optional timestamp.
    ///
    /// # Errors
    /// Returns `DateError::TypeMismatch` for text and integers.
    pub fn as_date(&self) -> Result<Option<Date>, DateError> {
        match *self {
            Self::Null | Self::OptionalTimestamp(None) => Ok(None),
            Self::Date(date) => Ok(Some(date)),
            Self::Timestamp(ts) | Self::OptionalTimestamp(Some(ts)) => Ok(Some(Date::from(ts))),
            Self::Text(_) | Self::Integer(_) => Err(DateError::TypeMismatch(self.kind().name())),
        }
    }
}

/// A converter between values of one type and the value kinds it supports.
pub trait TypeConverter {
    fn can_convert_from(&self, kind: ValueKind) -> bool;

    fn can_convert_to(&self, kind: ValueKind) -> bool;

    /// Converts `value` into the converter's own type.
    ///
    /// # Errors
    /// Returns `DateError::Unsupported` when the value's kind is not supported.
    fn convert_from(&self, value: Value) -> Result<Value, DateError>;

    /// Converts `value`, of the converter's own type, into `target`.
    ///
    /// # Errors
    /// Returns `DateError::Unsupported` when the target kind is not supported.
    fn convert_to(&self, value: Value, target: ValueKind) -> Result<Value, DateError>;
}

/// The fallback every converter delegates to: anything can become text,
/// nothing else is supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseConverter;

impl TypeConverter for BaseConverter {
    fn can_convert_from(&self, _kind: ValueKind) -> bool {
        false
    }

    fn can_convert_to(&self, kind: ValueKind) -> bool {
        kind == ValueKind::Text
    }

    fn convert_from(&self, value: Value) -> Result<Value, DateError> {
        Err(DateError::Unsupported {
            from: value.kind().name(),
            to: ValueKind::Date.name(),
        })
    }

    fn convert_to(&self, value: Value, target: ValueKind) -> Result<Value, DateError> {
        if target != ValueKind::Text {
            return Err(DateError::Unsupported {
                from: value.kind().name(),
                to: target.name(),
            });
        }

        let text = match value {
            Value::Null | Value::OptionalTimestamp(None) => String::new(),
            Value::Date(date) => date.to_string(),
            Value::Timestamp(ts) | Value::OptionalTimestamp(Some(ts)) => ts.to_string(),
            Value::Text(text) => text,
            Value::Integer(n) => n.to_string(),
        };
        Ok(Value::Text(text))
    }
}

/// Converts between [`Date`] and its peers: timestamps and optional
/// timestamps. Other kinds go to [`BaseConverter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DateConverter {
    base: BaseConverter,
}

impl DateConverter {
    /// Kinds this converter handles itself.
    pub const PEERS: [ValueKind; 3] = [ValueKind::Date, ValueKind::Timestamp, ValueKind::OptionalTimestamp];

    pub const fn new() -> Self {
        Self { base: BaseConverter }
    }

    fn is_peer(kind: ValueKind) -> bool {
        Self::PEERS.contains(&kind)
    }
}

impl TypeConverter for DateConverter {
    fn can_convert_from(&self, kind: ValueKind) -> bool {
        Self::is_peer(kind) || self.base.can_convert_from(kind)
    }

    fn can_convert_to(&self, kind: ValueKind) -> bool {
        Self::is_peer(kind) || self.base.can_convert_to(kind)
    }

    fn convert_from(&self, value: Value) -> Result<Value, DateError> {
        if value == Value::Null {
            return Ok(Value::Null);
        }
        if !Self::is_peer(value.kind()) {
            return self.base.convert_from(value);
        }

        Ok(value.as_date()?.map_or(Value::Null, Value::Date))
    }

    fn convert_to(&self, value: Value, target: ValueKind) -> Result<Value, DateError> {
        if !Self::is_peer(target) {
            return self.base.convert_to(value, target);
        }

        let date = value.as_date()?;
        Ok(match target {
            ValueKind::Timestamp => Value::Timestamp(date.to_timestamp()),
            ValueKind::OptionalTimestamp => Value::OptionalTimestamp(date.to_optional_timestamp()),
            _ => date.map_or(Value::Null, Value::Date),
        })
    }
}
