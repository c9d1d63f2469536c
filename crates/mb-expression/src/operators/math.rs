//! Math and zoom operators. Operands must already be numbers; explicit
//! conversion is what `to-number` is for. Domain errors surface as
//! `NoMatchingVariant` instead of leaking NaN or infinity into style values.

use crate::context::EvalContext;
use crate::error::EvalError;
use crate::expr::Expression;
use crate::parser::OperatorKind;
use crate::value::Value;

/// Scale denominator of the full Web-Mercator extent at zoom 0; the zoom
/// level is `log2` of the ratio to the current scale denominator.
const ZOOM_BASE_SCALE_DENOMINATOR: f64 = 559_082_264.028;

fn operand(expr: &Expression, ctx: &dyn EvalContext) -> Result<f64, EvalError> {
    match expr.evaluate(ctx)? {
        Value::Number(n) => Ok(n),
        other => Err(EvalError::TypeMismatch {
            expected: "number",
            got: other.type_name(),
        }),
    }
}

fn finite(kind: OperatorKind, n: f64) -> Result<Value, EvalError> {
    if n.is_finite() {
        Ok(Value::Number(n))
    } else {
        Err(EvalError::NoMatchingVariant(kind.name()))
    }
}

pub(crate) fn unary(
    kind: OperatorKind,
    args: &[Expression],
    ctx: &dyn EvalContext,
) -> Result<Value, EvalError> {
    use OperatorKind as K;
    let x = operand(&args[0], ctx)?;
    let out = match kind {
        K::Ln => x.ln(),
        K::Log10 => x.log10(),
        K::Log2 => x.log2(),
        K::Sqrt => x.sqrt(),
        K::Sin => x.sin(),
        K::Cos => x.cos(),
        K::Tan => x.tan(),
        K::Asin => x.asin(),
        K::Acos => x.acos(),
        K::Atan => x.atan(),
        _ => unreachable!("not a unary math operator"),
    };
    finite(kind, out)
}

pub(crate) fn reduce(
    kind: OperatorKind,
    args: &[Expression],
    ctx: &dyn EvalContext,
) -> Result<Value, EvalError> {
    use OperatorKind as K;
    let mut acc = operand(&args[0], ctx)?;
    for arg in &args[1..] {
        let n = operand(arg, ctx)?;
        acc = match kind {
            K::Add => acc + n,
            K::Sub => acc - n,
            K::Mul => acc * n,
            K::Div => acc / n,
            K::Rem => acc % n,
            K::Min => acc.min(n),
            K::Max => acc.max(n),
            _ => unreachable!("not a reducing math operator"),
        };
    }
    finite(kind, acc)
}

pub(crate) fn pow(args: &[Expression], ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    let base = operand(&args[0], ctx)?;
    let exponent = operand(&args[1], ctx)?;
    finite(OperatorKind::Pow, base.powf(exponent))
}

/// The fractional zoom level for the context's current scale denominator.
pub(crate) fn zoom(ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    Ok(Value::Number(
        (ZOOM_BASE_SCALE_DENOMINATOR / ctx.scale_denominator()).log2(),
    ))
}
