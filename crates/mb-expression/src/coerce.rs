//! Coercion rules: the strict-but-forgiving conversions behind `to-boolean`,
//! `to-string`, `to-number` and `to-color`.
//!
//! The single-operand attempts here return `Option`; the operator layer scans
//! its operands left to right and fails `NoMatchingVariant` on exhaustion.

use crate::color::Color;
use crate::value::Value;

/// The `to-boolean` rule. Total: false for `Null`, `false`, `0` and `""`,
/// true for everything else.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0,
        Value::Str(s) => !s.is_empty(),
        Value::Color(_) | Value::Array(_) | Value::Object(_) => true,
    }
}

/// The `to-string` rule. Numbers print without a superfluous `.0`, arrays
/// and objects serialize as compact JSON, colors as `rgba(r,g,b,a)`.
pub fn to_string(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Str(s) => s.clone(),
        Value::Color(c) => c.to_string(),
        Value::Array(_) | Value::Object(_) => v.to_json().to_string(),
    }
}

/// Attempts the `to-number` rule on one operand: a number as-is, booleans as
/// 0/1, `Null` as 0, strings parseable as a finite decimal.
pub fn number_of(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => Some(*n),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Str(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Attempts the `to-color` rule on one operand: a color as-is, a string in
/// one of the forms [`Color::parse`] accepts, or a 3/4-element numeric array
/// (channels 0-255, alpha 0-1).
pub fn color_of(v: &Value) -> Option<Color> {
    match v {
        Value::Color(c) => Some(*c),
        Value::Str(s) => Color::parse(s),
        Value::Array(items) if items.len() == 3 || items.len() == 4 => {
            let channel = |v: &Value| match v {
                Value::Number(n) if (0.0..=255.0).contains(n) => Some(n.round() as u8),
                _ => None,
            };
            let r = channel(&items[0])?;
            let g = channel(&items[1])?;
            let b = channel(&items[2])?;
            let a = match items.get(3) {
                None => 1.0,
                Some(Value::Number(n)) if (0.0..=1.0).contains(n) => *n as f32,
                Some(_) => return None,
            };
            Some(Color { r, g, b, a })
        }
        _ => None,
    }
}
