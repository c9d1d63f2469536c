//! Lookup and feature-data operators. The lazy no-target forms of `get` and
//! `has` never reach this module; the parser turns them into
//! `PropertyRef`/`PropertyExists` terminals.

use crate::coerce;
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::expr::Expression;
use crate::value::Value;

pub(crate) fn id(ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    Ok(Value::Str(coerce::to_string(&ctx.feature_id())))
}

/// String length in characters, or array length.
pub(crate) fn length(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    match args[0].evaluate(ctx)? {
        Value::Str(s) => Ok(Value::Number(s.chars().count() as f64)),
        Value::Array(items) => Ok(Value::Number(items.len() as f64)),
        other => Err(EvalError::TypeMismatch {
            expected: "string or array",
            got: other.type_name(),
        }),
    }
}

/// Zero-based element access: `at(index, array)`.
pub(crate) fn at(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    let index = match args[0].evaluate(ctx)? {
        Value::Number(n) => n as i64,
        other => {
            return Err(EvalError::TypeMismatch {
                expected: "number",
                got: other.type_name(),
            })
        }
    };
    let items = match args[1].evaluate(ctx)? {
        Value::Array(items) => items,
        other => {
            return Err(EvalError::TypeMismatch {
                expected: "array",
                got: other.type_name(),
            })
        }
    };
    if index < 0 || index as usize >= items.len() {
        return Err(EvalError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    Ok(items[index as usize].clone())
}

fn key_and_object(
    args: &[Expression],
    ctx: &dyn EvalContext,
) -> Result<(String, std::collections::BTreeMap<String, Value>), EvalError> {
    let key = match args[0].evaluate(ctx)? {
        Value::Str(key) => key,
        other => {
            return Err(EvalError::TypeMismatch {
                expected: "string",
                got: other.type_name(),
            })
        }
    };
    match args[1].evaluate(ctx)? {
        Value::Object(map) => Ok((key, map)),
        other => Err(EvalError::TypeMismatch {
            expected: "object",
            got: other.type_name(),
        }),
    }
}

/// `get(key, object)`: direct key lookup; a missing key reads as `Null`.
pub(crate) fn get(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    let (key, map) = key_and_object(args, ctx)?;
    Ok(map.get(&key).cloned().unwrap_or(Value::Null))
}

/// `has(key, object)`: key presence check.
pub(crate) fn has(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    let (key, map) = key_and_object(args, ctx)?;
    Ok(Value::Bool(map.contains_key(&key)))
}
