/// I2: loosely typed `Value` to primitive conversion
///
/// * `I2::int` - to i32, i64 narrows with wraparound, floats truncate toward zero
/// * `I2::long` - to i64
/// * `I2::float` - to f64
/// * `I2::string` - to String, never fails
///
/// bytes and strings go through the base 10 parsers of `StrC`,
/// datetimes become their unix timestamp in seconds.
use std::fmt::Display;

use crate::erx::{Erx, ResultE};
use crate::tools::datetime::Format;
use crate::tools::number::StrC;
use crate::value::{Value, SUPPORTED_TYPES};

pub struct I2;

/// bytes and datetimes normalized to text, everything else passed back
fn textify(value: &Value, format: Format) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.clone()),
        Value::Bytes(b) => Some(String::from_utf8_lossy(b).into_owned()),
        Value::Datetime(dt) => Some(format.render(dt)),
        _ => None,
    }
}

fn unsupported(thrower: &str, value: &Value) -> Erx {
    Erx::new(thrower, &format!("data-type is {}, only support type: {}", value.type_name(), SUPPORTED_TYPES))
}

fn parse_failed<E: Display>(thrower: &str, data_type: &str, text: &str, target: &str, err: E) -> Erx {
    Erx::new(thrower, &format!("data-type is {}, and parse \"{}\" as {} error: {}", data_type, text, target, err))
}

/// the text a numeric conversion has to parse, with the type it came from
fn parsable(thrower: &str, value: &Value) -> ResultE<(&'static str, String)> {
    match value {
        Value::Str(s) => Ok((value.type_name(), s.clone())),
        Value::Bytes(b) => Ok((value.type_name(), String::from_utf8_lossy(b).into_owned())),
        _ => Err(unsupported(thrower, value)),
    }
}

impl I2 {
    pub fn int(value: &Value) -> ResultE<i32> {
        let thrower = "I2::int";
        match value {
            Value::Bool(b) => Ok(*b as i32),
            Value::Int(v) => Ok(*v),
            Value::Long(v) => Ok(*v as i32),
            Value::F32(v) => Ok(*v as i32),
            Value::F64(v) => Ok(*v as i32),
            Value::Byte(v) => Ok(*v as i32),
            Value::Datetime(dt) => Ok(dt.timestamp() as i32),
            _ => {
                let (data_type, text) = parsable(thrower, value)?;
                StrC::i32(&text).map_err(|e| parse_failed(thrower, data_type, &text, "i32", e))
            }
        }
    }

    pub fn long(value: &Value) -> ResultE<i64> {
        let thrower = "I2::long";
        match value {
            Value::Bool(b) => Ok(*b as i64),
            Value::Int(v) => Ok(*v as i64),
            Value::Long(v) => Ok(*v),
            Value::F32(v) => Ok(*v as i64),
            Value::F64(v) => Ok(*v as i64),
            Value::Byte(v) => Ok(*v as i64),
            Value::Datetime(dt) => Ok(dt.timestamp()),
            _ => {
                let (data_type, text) = parsable(thrower, value)?;
                StrC::i64(&text).map_err(|e| parse_failed(thrower, data_type, &text, "i64", e))
            }
        }
    }

    pub fn float(value: &Value) -> ResultE<f64> {
        let thrower = "I2::float";
        match value {
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Int(v) => Ok(*v as f64),
            Value::Long(v) => Ok(*v as f64),
            Value::F32(v) => Ok(*v as f64),
            Value::F64(v) => Ok(*v),
            Value::Byte(v) => Ok(*v as f64),
            Value::Datetime(dt) => Ok(dt.timestamp() as f64),
            _ => {
                let (data_type, text) = parsable(thrower, value)?;
                let parsed = StrC::f64(&text).map_err(|e| parse_failed(thrower, data_type, &text, "f64", e))?;
                if StrC::overflowed(&text, parsed) {
                    return Err(parse_failed(thrower, data_type, &text, "f64", "value out of range"));
                }
                Ok(parsed)
            }
        }
    }

    pub fn string(value: &Value) -> String {
        Self::string_with(value, Format::DateTime)
    }

    /// like `string`, with datetimes rendered by `format`
    pub fn string_with(value: &Value, format: Format) -> String {
        match textify(value, format) {
            Some(s) => s,
            None => value.to_string(),
        }
    }

    pub fn int_or(value: &Value, d: i32) -> i32 {
        Self::int(value).unwrap_or(d)
    }

    pub fn long_or(value: &Value, d: i64) -> i64 {
        Self::long(value).unwrap_or(d)
    }

    pub fn float_or(value: &Value, d: f64) -> f64 {
        Self::float(value).unwrap_or(d)
    }
}

impl TryFrom<&Value> for i32 {
    type Error = Erx;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        I2::int(value)
    }
}

impl TryFrom<&Value> for i64 {
    type Error = Erx;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        I2::long(value)
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Erx;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        I2::float(value)
    }
}

impl From<&Value> for String {
    fn from(value: &Value) -> Self {
        I2::string(value)
    }
}
