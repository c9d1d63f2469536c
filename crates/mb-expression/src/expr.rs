//! The expression AST and its evaluator.

use crate::context::EvalContext;
use crate::error::EvalError;
use crate::operators::{decision, lookup, math, types};
use crate::parser::OperatorKind;
use crate::value::Value;
use serde_json::Value as Json;

/// A parsed, immutable style expression.
///
/// Built once from a style document, read-only thereafter, and safe to share
/// across threads; evaluation never mutates the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// An unevaluated payload held verbatim. Nested arrays and objects under
    /// `literal` are data, not expressions, and round-trip unchanged.
    Literal(Json),
    /// An operator application; arity and shape were validated at parse time.
    Op {
        kind: OperatorKind,
        args: Vec<Expression>,
    },
    /// Lazy feature-attribute reference, produced by `get` with no target
    /// object. The rule-composition layer may lower this into its own
    /// property-access representation instead of evaluating it.
    PropertyRef(String),
    /// Lazy attribute-presence check, produced by `has` with no target
    /// object.
    PropertyExists(String),
}

impl Expression {
    /// Evaluates the expression against a feature/rendering context.
    ///
    /// Pure with respect to the AST: equal contexts produce equal results.
    /// Failure in any sub-expression aborts the whole evaluation.
    pub fn evaluate(&self, ctx: &dyn EvalContext) -> Result<Value, EvalError> {
        match self {
            Expression::Literal(raw) => Ok(Value::from_json(raw)),
            Expression::PropertyRef(key) => Ok(ctx.get_attribute(key).unwrap_or(Value::Null)),
            Expression::PropertyExists(key) => Ok(Value::Bool(ctx.get_attribute(key).is_some())),
            Expression::Op { kind, args } => evaluate_op(*kind, args, ctx),
        }
    }
}

/// Evaluates a parsed expression against a feature/rendering context.
pub fn evaluate(expr: &Expression, ctx: &dyn EvalContext) -> Result<Value, EvalError> {
    expr.evaluate(ctx)
}

fn evaluate_op(
    kind: OperatorKind,
    args: &[Expression],
    ctx: &dyn EvalContext,
) -> Result<Value, EvalError> {
    use OperatorKind as K;
    match kind {
        K::Not => decision::not(args, ctx),
        K::Eq | K::Neq => decision::equality(kind, args, ctx),
        K::Lt | K::Lte | K::Gt | K::Gte => decision::ordering(kind, args, ctx),
        K::All => decision::all(args, ctx),
        K::Any => decision::any(args, ctx),
        K::Case => decision::case(args, ctx),
        K::Coalesce => decision::coalesce(args, ctx),
        K::Match => decision::match_of(args, ctx),
        K::TypeOf => types::type_of(args, ctx),
        K::ToBoolean => types::to_boolean(args, ctx),
        K::ToString => types::to_string(args, ctx),
        K::ToNumber => types::to_number(args, ctx),
        K::ToColor => types::to_color(args, ctx),
        K::Boolean | K::Number | K::Object | K::String | K::Array => {
            types::assert_type(kind, args, ctx)
        }
        K::Id => lookup::id(ctx),
        K::GeometryType => Ok(ctx.geometry_type()),
        K::Properties => Err(EvalError::Unimplemented("properties")),
        K::Length => lookup::length(args, ctx),
        K::At => lookup::at(args, ctx),
        K::Get => lookup::get(args, ctx),
        K::Has => lookup::has(args, ctx),
        K::Pi => Ok(Value::Number(std::f64::consts::PI)),
        K::E => Ok(Value::Number(std::f64::consts::E)),
        K::Ln2 => Ok(Value::Number(std::f64::consts::LN_2)),
        K::Ln | K::Log10 | K::Log2 | K::Sqrt | K::Sin | K::Cos | K::Tan | K::Asin | K::Acos
        | K::Atan => math::unary(kind, args, ctx),
        K::Add | K::Sub | K::Mul | K::Div | K::Rem | K::Min | K::Max => {
            math::reduce(kind, args, ctx)
        }
        K::Pow => math::pow(args, ctx),
        K::Zoom => math::zoom(ctx),
    }
}
