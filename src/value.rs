use chrono::{DateTime, FixedOffset, Local, Utc};
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::tools::datetime::Format;

/// A loosely typed input.
///
/// `Bool` through `Datetime` are the shapes the numeric conversions understand,
/// the rest only ever render as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Long(i64),
    F32(f32),
    F64(f64),
    Byte(u8),
    Bytes(Vec<u8>),
    Str(String),
    /// the offset is the one used for epoch conversion
    Datetime(DateTime<FixedOffset>),

    Null,
    Char(char),
    List(Vec<Value>),
    Record(BTreeMap<String, Value>),
}

pub const SUPPORTED_TYPES: &'static str = "bool, i32, i64, f32, f64, u8, bytes, string, datetime";

impl Value {
    /// runtime type name, as it appears in conversion errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "i32",
            Value::Long(_) => "i64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Byte(_) => "u8",
            Value::Bytes(_) => "bytes",
            Value::Str(_) => "string",
            Value::Datetime(_) => "datetime",
            Value::Null => "null",
            Value::Char(_) => "char",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Bytes(v) => write!(f, "{}", String::from_utf8_lossy(v)),
            Value::Str(v) => write!(f, "{}", v),
            Value::Datetime(v) => write!(f, "{}", Format::DateTime.render(v)),
            Value::Null => write!(f, "null"),
            Value::Char(v) => write!(f, "{}", v),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(fields) => {
                write!(f, "{{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

macro_rules! value_from {
    ($from:ty, $variant:ident) => {
        impl From<$from> for Value {
            fn from(v: $from) -> Self {
                Value::$variant(v)
            }
        }
    };
}

value_from!(bool, Bool);
value_from!(i32, Int);
value_from!(i64, Long);
value_from!(f32, F32);
value_from!(f64, F64);
value_from!(u8, Byte);
value_from!(Vec<u8>, Bytes);
value_from!(String, Str);
value_from!(char, Char);
value_from!(DateTime<FixedOffset>, Datetime);
value_from!(Vec<Value>, List);
value_from!(BTreeMap<String, Value>, Record);

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Datetime(v.fixed_offset())
    }
}

impl From<DateTime<Local>> for Value {
    fn from(v: DateTime<Local>) -> Self {
        Value::Datetime(v.fixed_offset())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Long(i),
                None => Value::F64(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(fields) => Value::Record(fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_type_name() {
        assert_eq!(Value::from(true).type_name(), "bool");
        assert_eq!(Value::from(1i32).type_name(), "i32");
        assert_eq!(Value::from(1i64).type_name(), "i64");
        assert_eq!(Value::from(1u8).type_name(), "u8");
        assert_eq!(Value::from(&b"1"[..]).type_name(), "bytes");
        assert_eq!(Value::from("1").type_name(), "string");
        assert_eq!(Value::from(None::<i32>).type_name(), "null");
        assert_eq!(Value::Record(BTreeMap::new()).type_name(), "record");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(-12i64).to_string(), "-12");
        assert_eq!(Value::from(2.5f64).to_string(), "2.5");
        assert_eq!(Value::from(vec![Value::from(1), Value::Null]).to_string(), "[1, null]");

        let mut record = BTreeMap::new();
        record.insert("b".to_string(), Value::from("x"));
        record.insert("a".to_string(), Value::from(1));
        assert_eq!(Value::from(record).to_string(), "{a: 1, b: x}");

        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Value::from(dt).to_string(), "2024-01-02 03:04:05");
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({"id": 7, "ratio": 0.5, "tags": ["a"], "ok": true, "none": null});
        let Value::Record(fields) = Value::from(json) else {
            panic!("expected record");
        };
        assert_eq!(fields["id"], Value::Long(7));
        assert_eq!(fields["ratio"], Value::F64(0.5));
        assert_eq!(fields["tags"], Value::List(vec![Value::from("a")]));
        assert_eq!(fields["ok"], Value::Bool(true));
        assert!(fields["none"].is_null());
    }
}
