use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

// String Convert
//
// base 10, optional leading sign, no surrounding whitespace
pub struct StrC;

impl StrC {
    pub fn i32(value: &str) -> Result<i32, ParseIntError> {
        i32::from_str_radix(value, 10)
    }

    pub fn i64(value: &str) -> Result<i64, ParseIntError> {
        i64::from_str_radix(value, 10)
    }

    pub fn f64(value: &str) -> Result<f64, ParseFloatError> {
        f64::from_str(value)
    }

    /// a finite literal that parsed to an infinity, e.g. `1e400`
    pub fn overflowed(value: &str, parsed: f64) -> bool {
        if !parsed.is_infinite() {
            return false;
        }
        let unsigned = value.trim_start_matches(['+', '-']).to_ascii_lowercase();
        unsigned != "inf" && unsigned != "infinity"
    }

    pub fn i_d(value: &str, d: i32) -> i32 {
        Self::i32(value).unwrap_or(d)
    }

    pub fn l_d(value: &str, d: i64) -> i64 {
        Self::i64(value).unwrap_or(d)
    }

    pub fn f_d(value: &str, d: f64) -> f64 {
        Self::f64(value).unwrap_or(d)
    }
}
