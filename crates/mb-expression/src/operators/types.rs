//! Types operators: `typeof` plus the coercions and runtime-type assertions
//! from the coercion engine. Variadic forms try operands left to right and
//! stop at the first success, so later operands are never evaluated.

use crate::coerce;
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::expr::Expression;
use crate::parser::OperatorKind;
use crate::value::Value;

pub(crate) fn type_of(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    Ok(Value::Str(args[0].evaluate(ctx)?.type_name().to_string()))
}

pub(crate) fn to_boolean(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    Ok(Value::Bool(coerce::truthy(&args[0].evaluate(ctx)?)))
}

pub(crate) fn to_string(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    Ok(Value::Str(coerce::to_string(&args[0].evaluate(ctx)?)))
}

pub(crate) fn to_number(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    for arg in args {
        if let Some(n) = coerce::number_of(&arg.evaluate(ctx)?) {
            return Ok(Value::Number(n));
        }
    }
    Err(EvalError::NoMatchingVariant("to-number"))
}

pub(crate) fn to_color(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    for arg in args {
        if let Some(c) = coerce::color_of(&arg.evaluate(ctx)?) {
            return Ok(Value::Color(c));
        }
    }
    Err(EvalError::NoMatchingVariant("to-color"))
}

/// `boolean` / `number` / `object` / `string` / `array`: returns the first
/// operand whose runtime type matches the operator's name. `array` only
/// accepts the ordered-list container, so objects are rejected.
pub(crate) fn assert_type(
    kind: OperatorKind,
    args: &[Expression],
    ctx: &dyn EvalContext,
) -> Result<Value, EvalError> {
    let expected = kind.name();
    for arg in args {
        let value = arg.evaluate(ctx)?;
        if value.type_name() == expected {
            return Ok(value);
        }
    }
    Err(EvalError::NoMatchingVariant(expected))
}
