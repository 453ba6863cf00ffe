//! Number prototype methods

use core_types::{ChainError, ChainResult, Value};

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn range_error(message: &str) -> ChainError {
    ChainError::thrown(Value::error_named("RangeError", message))
}

/// Number prototype methods
pub struct NumberPrototype;

impl NumberPrototype {
    /// `toFixed(digits?)` - fixed-point rendering with 0 to 100 digits
    pub fn to_fixed(num: f64, digits: f64) -> ChainResult<Value> {
        if !(0.0..=100.0).contains(&digits) {
            return Err(range_error(
                "toFixed() digits argument must be between 0 and 100",
            ));
        }
        if !num.is_finite() {
            return Ok(Value::string(Value::Number(num).to_string()));
        }
        Ok(Value::string(format!("{:.*}", digits as usize, num)))
    }

    /// `toString(radix?)` - decimal by default, digit conversion for radix
    /// 2 through 36
    pub fn to_string(num: f64, radix: Option<u32>) -> ChainResult<Value> {
        let radix = radix.unwrap_or(10);
        if !(2..=36).contains(&radix) {
            return Err(range_error("toString() radix must be between 2 and 36"));
        }
        if radix == 10 || !num.is_finite() {
            return Ok(Value::string(Value::Number(num).to_string()));
        }

        let negative = num < 0.0;
        let magnitude = num.abs();
        let base = radix as f64;

        let mut int_part = magnitude.trunc();
        let mut int_digits = Vec::new();
        if int_part == 0.0 {
            int_digits.push(b'0');
        }
        while int_part >= 1.0 {
            let digit = (int_part % base) as usize;
            int_digits.push(DIGITS[digit]);
            int_part = (int_part / base).trunc();
        }
        int_digits.reverse();

        let mut rendered = String::from_utf8_lossy(&int_digits).into_owned();

        let mut frac = magnitude.fract();
        if frac > 0.0 {
            rendered.push('.');
            // Cap fractional expansion; doubles carry no more precision
            for _ in 0..20 {
                frac *= base;
                let digit = frac.trunc() as usize;
                rendered.push(DIGITS[digit] as char);
                frac -= frac.trunc();
                if frac <= 0.0 {
                    break;
                }
            }
        }

        if negative {
            rendered.insert(0, '-');
        }
        Ok(Value::string(rendered))
    }
}
