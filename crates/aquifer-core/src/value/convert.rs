//! Module: value::convert
//! Responsibility: pure raw-value to target-kind normalization.
//! Does not own: null handling (the engine skips nulls upstream) or the
//! final narrowing into concrete field types (FieldValue impls).
//! Boundary: consumed by the hydration engine, one call per populated column.

use crate::{
    types::{Date, Decimal, Timestamp, Ulid},
    value::{FieldKind, Value, ValueError},
};
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

// Largest magnitude at which every integer has an exact f64 representation.
// Float/integer conversions outside this window are rejected, not rounded.
const F64_SAFE: u64 = 1u64 << 53;

const SECS_PER_DAY: i64 = 86_400;

/// Convert a non-null raw value into the normalized form for `kind`.
///
/// Priority order: enums first, identifiers second, then the general
/// coercion families (numeric widening/narrowing, string/numeric,
/// string/temporal, decimal).
pub fn convert(value: Value, kind: FieldKind) -> Result<Value, ValueError> {
    if value.is_null() {
        return Err(ValueError::Unsupported {
            from: "null",
            to: kind,
        });
    }

    match kind {
        FieldKind::Enum => to_enum(value),
        FieldKind::Ulid => to_ulid(value),
        FieldKind::Bool => to_bool(value),
        FieldKind::Int => to_int(value).map(Value::Int),
        FieldKind::Uint => to_uint(value).map(Value::Uint),
        FieldKind::Float => to_float(value).map(Value::Float),
        FieldKind::Decimal => to_decimal(value).map(Value::Decimal),
        FieldKind::Text => Ok(Value::Text(value.to_string())),
        FieldKind::Date => to_date(value).map(Value::Date),
        FieldKind::Timestamp => to_timestamp(value).map(Value::Timestamp),
    }
}

// Enum targets accept a numeric discriminant or an already-typed enum
// value. Discriminant validity is checked by the enum's FieldValue impl.
fn to_enum(value: Value) -> Result<Value, ValueError> {
    match value {
        Value::Enum(e) => Ok(Value::Int(e.repr)),
        Value::Int(i) => Ok(Value::Int(i)),
        Value::Uint(u) => i64::try_from(u).map(Value::Int).map_err(|_| {
            ValueError::OutOfRange {
                value: u.to_string(),
                to: FieldKind::Enum,
            }
        }),
        other => Err(unsupported(&other, FieldKind::Enum)),
    }
}

fn to_ulid(value: Value) -> Result<Value, ValueError> {
    match value {
        Value::Ulid(u) => Ok(Value::Ulid(u)),
        Value::Text(s) => Ulid::from_string(&s)
            .map(Value::Ulid)
            .map_err(|_| ValueError::Parse {
                text: s,
                to: FieldKind::Ulid,
            }),
        other => Err(unsupported(&other, FieldKind::Ulid)),
    }
}

fn to_bool(value: Value) -> Result<Value, ValueError> {
    match value {
        Value::Bool(b) => Ok(Value::Bool(b)),
        Value::Int(0) | Value::Uint(0) => Ok(Value::Bool(false)),
        Value::Int(1) | Value::Uint(1) => Ok(Value::Bool(true)),
        Value::Text(s) if s.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
        Value::Text(s) if s.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
        Value::Text(s) => Err(ValueError::Parse {
            text: s,
            to: FieldKind::Bool,
        }),
        other => Err(unsupported(&other, FieldKind::Bool)),
    }
}

fn to_int(value: Value) -> Result<i64, ValueError> {
    match value {
        Value::Int(i) => Ok(i),
        Value::Uint(u) => i64::try_from(u).map_err(|_| out_of_range(u, FieldKind::Int)),
        Value::Float(f) => float_to_integer(f, FieldKind::Int),
        Value::Decimal(d) => d
            .round()
            .to_i64()
            .ok_or_else(|| out_of_range(d, FieldKind::Int)),
        Value::Text(s) => s.trim().parse().map_err(|_| ValueError::Parse {
            text: s,
            to: FieldKind::Int,
        }),
        Value::Bool(b) => Ok(i64::from(b)),
        other => Err(unsupported(&other, FieldKind::Int)),
    }
}

fn to_uint(value: Value) -> Result<u64, ValueError> {
    match value {
        Value::Uint(u) => Ok(u),
        Value::Int(i) => u64::try_from(i).map_err(|_| out_of_range(i, FieldKind::Uint)),
        Value::Float(f) => {
            let i = float_to_integer(f, FieldKind::Uint)?;
            u64::try_from(i).map_err(|_| out_of_range(f, FieldKind::Uint))
        }
        Value::Decimal(d) => d
            .round()
            .to_u64()
            .ok_or_else(|| out_of_range(d, FieldKind::Uint)),
        Value::Text(s) => s.trim().parse().map_err(|_| ValueError::Parse {
            text: s,
            to: FieldKind::Uint,
        }),
        Value::Bool(b) => Ok(u64::from(b)),
        other => Err(unsupported(&other, FieldKind::Uint)),
    }
}

fn to_float(value: Value) -> Result<f64, ValueError> {
    match value {
        Value::Float(f) => Ok(f),
        Value::Int(i) => {
            if i.unsigned_abs() > F64_SAFE {
                return Err(out_of_range(i, FieldKind::Float));
            }
            Ok(i as f64)
        }
        Value::Uint(u) => {
            if u > F64_SAFE {
                return Err(out_of_range(u, FieldKind::Float));
            }
            Ok(u as f64)
        }
        Value::Decimal(d) => d.to_f64().ok_or_else(|| out_of_range(d, FieldKind::Float)),
        Value::Text(s) => s.trim().parse().map_err(|_| ValueError::Parse {
            text: s,
            to: FieldKind::Float,
        }),
        other => Err(unsupported(&other, FieldKind::Float)),
    }
}

fn to_decimal(value: Value) -> Result<Decimal, ValueError> {
    match value {
        Value::Decimal(d) => Ok(d),
        Value::Int(i) => Ok(Decimal::from(i)),
        Value::Uint(u) => Ok(Decimal::from(u)),
        Value::Float(f) => Decimal::try_from(f).map_err(|_| out_of_range(f, FieldKind::Decimal)),
        Value::Text(s) => Decimal::from_str(s.trim()).map_err(|_| ValueError::Parse {
            text: s,
            to: FieldKind::Decimal,
        }),
        other => Err(unsupported(&other, FieldKind::Decimal)),
    }
}

fn to_date(value: Value) -> Result<Date, ValueError> {
    match value {
        Value::Date(d) => Ok(d),
        Value::Text(s) => s.parse().map_err(|_| ValueError::Parse {
            text: s,
            to: FieldKind::Date,
        }),
        Value::Int(i) => i32::try_from(i)
            .map(Date::from_days)
            .map_err(|_| out_of_range(i, FieldKind::Date)),
        Value::Uint(u) => i32::try_from(u)
            .map(Date::from_days)
            .map_err(|_| out_of_range(u, FieldKind::Date)),
        Value::Timestamp(ts) => {
            let days = i64::try_from(ts.seconds()).map_err(|_| out_of_range(ts, FieldKind::Date))?
                / SECS_PER_DAY;
            i32::try_from(days)
                .map(Date::from_days)
                .map_err(|_| out_of_range(ts, FieldKind::Date))
        }
        other => Err(unsupported(&other, FieldKind::Date)),
    }
}

fn to_timestamp(value: Value) -> Result<Timestamp, ValueError> {
    match value {
        Value::Timestamp(ts) => Ok(ts),
        Value::Uint(u) => Ok(Timestamp::from_seconds(u)),
        Value::Int(i) => u64::try_from(i)
            .map(Timestamp::from_seconds)
            .map_err(|_| out_of_range(i, FieldKind::Timestamp)),
        Value::Text(s) => s.parse().map_err(|_| ValueError::Parse {
            text: s,
            to: FieldKind::Timestamp,
        }),
        Value::Date(d) => {
            let secs = i64::from(d.days()) * SECS_PER_DAY;
            u64::try_from(secs)
                .map(Timestamp::from_seconds)
                .map_err(|_| out_of_range(d, FieldKind::Timestamp))
        }
        other => Err(unsupported(&other, FieldKind::Timestamp)),
    }
}

// Round half-to-even, then require the result inside the exact window.
fn float_to_integer(f: f64, to: FieldKind) -> Result<i64, ValueError> {
    let rounded = f.round_ties_even();

    if !rounded.is_finite() || rounded.abs() > F64_SAFE as f64 {
        return Err(out_of_range(f, to));
    }

    Ok(rounded as i64)
}

fn out_of_range(value: impl ToString, to: FieldKind) -> ValueError {
    ValueError::OutOfRange {
        value: value.to_string(),
        to,
    }
}

const fn unsupported(value: &Value, to: FieldKind) -> ValueError {
    ValueError::Unsupported {
        from: value.label(),
        to,
    }
}
