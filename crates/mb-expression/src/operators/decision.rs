//! Decision operators: negation, comparisons, `all`/`any`, `case`,
//! `coalesce` and `match`. Everything here short-circuits left to right.

use crate::coerce;
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::expr::Expression;
use crate::parser::OperatorKind;
use crate::value::Value;
use std::cmp::Ordering;

pub(crate) fn not(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    Ok(Value::Bool(!coerce::truthy(&args[0].evaluate(ctx)?)))
}

fn scalar_mismatch(left: &Value, right: &Value) -> EvalError {
    let comparable = |v: &Value| matches!(v, Value::Number(_) | Value::Str(_) | Value::Bool(_));
    if comparable(left) {
        EvalError::TypeMismatch {
            expected: left.type_name(),
            got: right.type_name(),
        }
    } else {
        EvalError::TypeMismatch {
            expected: "number, string or boolean",
            got: left.type_name(),
        }
    }
}

/// `==` / `!=`. `Null` equals only `Null`; otherwise both operands must share
/// a scalar runtime type.
pub(crate) fn equality(
    kind: OperatorKind,
    args: &[Expression],
    ctx: &dyn EvalContext,
) -> Result<Value, EvalError> {
    let left = args[0].evaluate(ctx)?;
    let right = args[1].evaluate(ctx)?;
    let equal = match (&left, &right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => return Err(scalar_mismatch(&left, &right)),
    };
    Ok(Value::Bool(if kind == OperatorKind::Eq {
        equal
    } else {
        !equal
    }))
}

/// `<` / `<=` / `>` / `>=` by natural ordering. A `Null` operand makes the
/// comparison false rather than an error.
pub(crate) fn ordering(
    kind: OperatorKind,
    args: &[Expression],
    ctx: &dyn EvalContext,
) -> Result<Value, EvalError> {
    let left = args[0].evaluate(ctx)?;
    let right = args[1].evaluate(ctx)?;
    if left == Value::Null || right == Value::Null {
        return Ok(Value::Bool(false));
    }
    let ord = match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => a
            .partial_cmp(b)
            .ok_or(EvalError::NoMatchingVariant(kind.name()))?,
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => return Err(scalar_mismatch(&left, &right)),
    };
    let keep = match kind {
        OperatorKind::Lt => ord == Ordering::Less,
        OperatorKind::Lte => ord != Ordering::Greater,
        OperatorKind::Gt => ord == Ordering::Greater,
        OperatorKind::Gte => ord != Ordering::Less,
        _ => unreachable!("not an ordering operator"),
    };
    Ok(Value::Bool(keep))
}

pub(crate) fn all(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    for arg in args {
        if !coerce::truthy(&arg.evaluate(ctx)?) {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

pub(crate) fn any(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    for arg in args {
        if coerce::truthy(&arg.evaluate(ctx)?) {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

/// First truthy condition wins; untaken branches are never evaluated.
pub(crate) fn case(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    let (pairs, default) = args.split_at(args.len() - 1);
    for pair in pairs.chunks(2) {
        if coerce::truthy(&pair[0].evaluate(ctx)?) {
            return pair[1].evaluate(ctx);
        }
    }
    default[0].evaluate(ctx)
}

/// First non-`Null` operand wins; all-`Null` yields `Null`.
pub(crate) fn coalesce(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    for arg in args {
        let value = arg.evaluate(ctx)?;
        if value != Value::Null {
            return Ok(value);
        }
    }
    Ok(Value::Null)
}

/// Input, `(label-or-array-of-labels, output)` pairs, trailing default.
/// Labels compare by value equality; the first hit wins.
pub(crate) fn match_of(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    let input = args[0].evaluate(ctx)?;
    let body = &args[1..args.len() - 1];
    for pair in body.chunks(2) {
        let label = pair[0].evaluate(ctx)?;
        let hit = match &label {
            Value::Array(labels) => labels.contains(&input),
            other => *other == input,
        };
        if hit {
            return pair[1].evaluate(ctx);
        }
    }
    args[args.len() - 1].evaluate(ctx)
}
