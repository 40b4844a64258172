//! Runtime value types and conversions.
//!
//! This module contains the core `Value` type, the `ValueKind` tags used for
//! output typing, and the comparison/arithmetic/coercion rules shared by the
//! whole expression layer.

use core::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use compact_str::CompactString;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use crate::error::{Result, RowcaseError};
use crate::expr::ArithOp;

//------------------------------------------------------------------------------
// Value Definition
//------------------------------------------------------------------------------

/// A single scalar value held by a record field or produced by an expression.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Integer value (i64)
    Integer(i64),
    /// Floating point value (f64)
    Float(f64),
    /// Fixed-point decimal value
    Decimal(Decimal),
    /// Boolean value
    Boolean(bool),
    /// Text value
    Text(CompactString),
    /// Byte sequence
    Bytes(Vec<u8>),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Date and time without timezone
    DateTime(NaiveDateTime),
    /// Signed duration
    Duration(#[cfg_attr(feature = "serde", serde(with = "duration_serde"))] TimeDelta),
    /// UUID identifier
    Uuid(Uuid),
    /// NULL value
    #[default]
    Null,
}

/// The kind tag of a [`Value`], used for declared output types and coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Integer,
    Float,
    Decimal,
    Boolean,
    Text,
    Bytes,
    Date,
    Time,
    DateTime,
    Duration,
    Uuid,
    Null,
}

impl ValueKind {
    /// Rank within the numeric family, widest last. `None` for non-numeric kinds.
    pub(crate) const fn numeric_rank(self) -> Option<u8> {
        match self {
            ValueKind::Integer => Some(0),
            ValueKind::Float => Some(1),
            ValueKind::Decimal => Some(2),
            _ => None,
        }
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Decimal => "decimal",
            ValueKind::Boolean => "boolean",
            ValueKind::Text => "text",
            ValueKind::Bytes => "bytes",
            ValueKind::Date => "date",
            ValueKind::Time => "time",
            ValueKind::DateTime => "datetime",
            ValueKind::Duration => "duration",
            ValueKind::Uuid => "uuid",
            ValueKind::Null => "null",
        };
        write!(f, "{name}")
    }
}

//------------------------------------------------------------------------------
// Accessors
//------------------------------------------------------------------------------

impl Value {
    /// Returns the kind tag of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Date(_) => ValueKind::Date,
            Value::Time(_) => ValueKind::Time,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Duration(_) => ValueKind::Duration,
            Value::Uuid(_) => ValueKind::Uuid,
            Value::Null => ValueKind::Null,
        }
    }

    /// Returns true if this value is NULL.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the integer value if this is an Integer.
    #[inline]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float value if this is a Float.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a Boolean.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value if this is Text.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Returns the byte sequence if this is Bytes.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(value) => Some(value.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(r) => write!(f, "{r}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::Date(d) => write!(f, "{d}"),
            Value::Time(t) => write!(f, "{t}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::Duration(d) => write!(f, "{d}"),
            Value::Uuid(u) => write!(f, "{u}"),
            Value::Null => Ok(()),
        }
    }
}

//------------------------------------------------------------------------------
// Comparison
//------------------------------------------------------------------------------

impl Value {
    /// Compare two values.
    ///
    /// Values of the same kind compare by their natural order. Values within
    /// the numeric family (Integer, Float, Decimal) compare numerically across
    /// kinds. Any comparison involving NULL (or a NaN float) yields `None`,
    /// which predicates treat as no-match. Comparing values outside one
    /// unifiable family is an `Incomparable` error.
    pub fn compare(&self, other: &Value) -> Result<Option<Ordering>> {
        let ord = match (self, other) {
            (Value::Null, _) | (_, Value::Null) => return Ok(None),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => return Ok(a.partial_cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => a.cmp(b),
            (Value::Integer(a), Value::Float(b)) => return Ok((*a as f64).partial_cmp(b)),
            (Value::Float(a), Value::Integer(b)) => return Ok(a.partial_cmp(&(*b as f64))),
            (Value::Integer(a), Value::Decimal(b)) => Decimal::from(*a).cmp(b),
            (Value::Decimal(a), Value::Integer(b)) => a.cmp(&Decimal::from(*b)),
            (Value::Float(a), Value::Decimal(b)) => {
                return Ok(b.to_f64().and_then(|b| a.partial_cmp(&b)));
            }
            (Value::Decimal(a), Value::Float(b)) => {
                return Ok(a.to_f64().and_then(|a| a.partial_cmp(b)));
            }
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::Time(a), Value::Time(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::Duration(a), Value::Duration(b)) => a.cmp(b),
            (Value::Uuid(a), Value::Uuid(b)) => a.cmp(b),
            _ => return Err(RowcaseError::Incomparable(self.kind(), other.kind())),
        };
        Ok(Some(ord))
    }

    /// Equality with the same unification rules as [`Value::compare`].
    ///
    /// NULL is never equal to anything, including NULL.
    pub fn eq_value(&self, other: &Value) -> Result<bool> {
        Ok(matches!(self.compare(other)?, Some(Ordering::Equal)))
    }
}

//------------------------------------------------------------------------------
// Arithmetic
//------------------------------------------------------------------------------

impl Value {
    /// Apply a binary arithmetic operator over the numeric family.
    ///
    /// Kind promotion: two Integers stay Integer; a Float operand promotes to
    /// Float; a Decimal operand paired with an Integer or Decimal stays
    /// Decimal. A NULL operand propagates NULL. Division by zero yields NULL.
    pub(crate) fn arith(&self, op: ArithOp, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
            (Value::Integer(a), Value::Integer(b)) => int_arith(op, *a, *b),
            (Value::Integer(a), Value::Float(b)) => Ok(float_arith(op, *a as f64, *b)),
            (Value::Float(a), Value::Integer(b)) => Ok(float_arith(op, *a, *b as f64)),
            (Value::Float(a), Value::Float(b)) => Ok(float_arith(op, *a, *b)),
            (Value::Float(a), Value::Decimal(b)) => {
                let b = b.to_f64().ok_or(RowcaseError::Overflow(op.symbol()))?;
                Ok(float_arith(op, *a, b))
            }
            (Value::Decimal(a), Value::Float(b)) => {
                let a = a.to_f64().ok_or(RowcaseError::Overflow(op.symbol()))?;
                Ok(float_arith(op, a, *b))
            }
            (Value::Integer(a), Value::Decimal(b)) => decimal_arith(op, Decimal::from(*a), *b),
            (Value::Decimal(a), Value::Integer(b)) => decimal_arith(op, *a, Decimal::from(*b)),
            (Value::Decimal(a), Value::Decimal(b)) => decimal_arith(op, *a, *b),
            (lhs, rhs) => {
                let kind = if lhs.kind().numeric_rank().is_none() {
                    lhs.kind()
                } else {
                    rhs.kind()
                };
                Err(RowcaseError::InvalidOperand {
                    op: op.symbol(),
                    kind,
                })
            }
        }
    }
}

fn int_arith(op: ArithOp, a: i64, b: i64) -> Result<Value> {
    let out = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
        ArithOp::Mul => a.checked_mul(b),
        ArithOp::Div => {
            if b == 0 {
                return Ok(Value::Null);
            }
            a.checked_div(b)
        }
    };
    out.map(Value::Integer)
        .ok_or(RowcaseError::Overflow(op.symbol()))
}

fn float_arith(op: ArithOp, a: f64, b: f64) -> Value {
    match op {
        ArithOp::Add => Value::Float(a + b),
        ArithOp::Sub => Value::Float(a - b),
        ArithOp::Mul => Value::Float(a * b),
        ArithOp::Div => {
            if b == 0.0 {
                Value::Null
            } else {
                Value::Float(a / b)
            }
        }
    }
}

fn decimal_arith(op: ArithOp, a: Decimal, b: Decimal) -> Result<Value> {
    let out = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
        ArithOp::Mul => a.checked_mul(b),
        ArithOp::Div => {
            if b.is_zero() {
                return Ok(Value::Null);
            }
            a.checked_div(b)
        }
    };
    out.map(Value::Decimal)
        .ok_or(RowcaseError::Overflow(op.symbol()))
}

//------------------------------------------------------------------------------
// Coercion
//------------------------------------------------------------------------------

impl Value {
    /// Coerce this value to the given output kind.
    ///
    /// NULL coerces to any kind. Within the numeric family only widening is
    /// allowed (Integer to Float or Decimal, Float to Decimal). Every other
    /// cross-kind coercion is a `TypeMismatch` error.
    pub fn coerce(self, kind: ValueKind) -> Result<Value> {
        if self.is_null() || self.kind() == kind {
            return Ok(self);
        }
        match (self, kind) {
            (Value::Integer(i), ValueKind::Float) => Ok(Value::Float(i as f64)),
            (Value::Integer(i), ValueKind::Decimal) => Ok(Value::Decimal(Decimal::from(i))),
            (Value::Float(f), ValueKind::Decimal) => Decimal::from_f64_retain(f)
                .map(Value::Decimal)
                .ok_or(RowcaseError::TypeMismatch {
                    expected: kind,
                    found: ValueKind::Float,
                }),
            (value, kind) => Err(RowcaseError::TypeMismatch {
                expected: kind,
                found: value.kind(),
            }),
        }
    }
}

/// Unify two kinds into one output kind.
///
/// Equal kinds unify to themselves, NULL is a wildcard, and the numeric family
/// unifies to its widest member.
pub(crate) fn unify_kinds(a: ValueKind, b: ValueKind) -> Result<ValueKind> {
    if a == b {
        return Ok(a);
    }
    match (a, b) {
        (ValueKind::Null, other) | (other, ValueKind::Null) => Ok(other),
        _ => match (a.numeric_rank(), b.numeric_rank()) {
            (Some(ra), Some(rb)) => Ok(if ra >= rb { a } else { b }),
            _ => Err(RowcaseError::TypeMismatch {
                expected: a,
                found: b,
            }),
        },
    }
}

//------------------------------------------------------------------------------
// Conversions
//------------------------------------------------------------------------------

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(CompactString::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(CompactString::from(value))
    }
}

impl From<CompactString> for Value {
    fn from(value: CompactString) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Value::Time(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<TimeDelta> for Value {
    fn from(value: TimeDelta) -> Self {
        Value::Duration(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

#[cfg(feature = "serde")]
mod duration_serde {
    //! `TimeDelta` as whole microseconds, which is how durations round-trip
    //! through storage layers.

    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        value
            .num_microseconds()
            .ok_or_else(|| serde::ser::Error::custom("duration out of microsecond range"))?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        Ok(TimeDelta::microseconds(i64::deserialize(deserializer)?))
    }
}
