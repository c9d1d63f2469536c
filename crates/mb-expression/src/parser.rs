//! Parsing of raw JSON nodes into immutable [`Expression`] trees.
//!
//! An expression node is an array whose head is an operator name string;
//! everything else is a literal. Argument counts and shapes are validated
//! here, once, so the evaluator never revisits them.

use crate::error::ParseError;
use crate::expr::Expression;
use serde_json::Value as Json;

/// Every operator the language recognizes, keyed by the head symbol of an
/// expression array. Closed: dispatch is a single exhaustive `match` in the
/// evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    // Decision
    Not,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    All,
    Any,
    Case,
    Coalesce,
    Match,
    // Types
    TypeOf,
    ToBoolean,
    ToString,
    ToNumber,
    ToColor,
    Boolean,
    Number,
    Object,
    String,
    Array,
    // Lookup & feature data
    Id,
    GeometryType,
    Properties,
    Length,
    At,
    Get,
    Has,
    // Math & zoom
    Pi,
    E,
    Ln2,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Min,
    Max,
    Pow,
    Zoom,
}

impl OperatorKind {
    pub(crate) fn from_name(name: &str) -> Option<OperatorKind> {
        use OperatorKind as K;
        let kind = match name {
            "!" => K::Not,
            "==" => K::Eq,
            "!=" => K::Neq,
            "<" => K::Lt,
            "<=" => K::Lte,
            ">" => K::Gt,
            ">=" => K::Gte,
            "all" => K::All,
            "any" => K::Any,
            "case" => K::Case,
            "coalesce" => K::Coalesce,
            "match" => K::Match,
            "typeof" => K::TypeOf,
            "to-boolean" => K::ToBoolean,
            "to-string" => K::ToString,
            "to-number" => K::ToNumber,
            "to-color" => K::ToColor,
            "boolean" => K::Boolean,
            "number" => K::Number,
            "object" => K::Object,
            "string" => K::String,
            "array" => K::Array,
            "id" => K::Id,
            "geometry-type" => K::GeometryType,
            "properties" => K::Properties,
            "length" => K::Length,
            "at" => K::At,
            "get" => K::Get,
            "has" => K::Has,
            "pi" => K::Pi,
            "e" => K::E,
            "ln2" => K::Ln2,
            "ln" => K::Ln,
            "log10" => K::Log10,
            "log2" => K::Log2,
            "sqrt" => K::Sqrt,
            "sin" => K::Sin,
            "cos" => K::Cos,
            "tan" => K::Tan,
            "asin" => K::Asin,
            "acos" => K::Acos,
            "atan" => K::Atan,
            "+" => K::Add,
            "-" => K::Sub,
            "*" => K::Mul,
            "/" => K::Div,
            "%" => K::Rem,
            "min" => K::Min,
            "max" => K::Max,
            "^" => K::Pow,
            "zoom" => K::Zoom,
            _ => return None,
        };
        Some(kind)
    }

    /// The head symbol this operator is written as.
    pub fn name(&self) -> &'static str {
        use OperatorKind as K;
        match self {
            K::Not => "!",
            K::Eq => "==",
            K::Neq => "!=",
            K::Lt => "<",
            K::Lte => "<=",
            K::Gt => ">",
            K::Gte => ">=",
            K::All => "all",
            K::Any => "any",
            K::Case => "case",
            K::Coalesce => "coalesce",
            K::Match => "match",
            K::TypeOf => "typeof",
            K::ToBoolean => "to-boolean",
            K::ToString => "to-string",
            K::ToNumber => "to-number",
            K::ToColor => "to-color",
            K::Boolean => "boolean",
            K::Number => "number",
            K::Object => "object",
            K::String => "string",
            K::Array => "array",
            K::Id => "id",
            K::GeometryType => "geometry-type",
            K::Properties => "properties",
            K::Length => "length",
            K::At => "at",
            K::Get => "get",
            K::Has => "has",
            K::Pi => "pi",
            K::E => "e",
            K::Ln2 => "ln2",
            K::Ln => "ln",
            K::Log10 => "log10",
            K::Log2 => "log2",
            K::Sqrt => "sqrt",
            K::Sin => "sin",
            K::Cos => "cos",
            K::Tan => "tan",
            K::Asin => "asin",
            K::Acos => "acos",
            K::Atan => "atan",
            K::Add => "+",
            K::Sub => "-",
            K::Mul => "*",
            K::Div => "/",
            K::Rem => "%",
            K::Min => "min",
            K::Max => "max",
            K::Pow => "^",
            K::Zoom => "zoom",
        }
    }
}

/// Operator signature, checked against the argument count at parse time.
enum Arity {
    Exact(usize),
    AtLeast(usize),
    Range(usize, usize),
    /// `(condition, value)` pairs followed by a default: odd count, three up.
    CasePairs,
    /// Input, `(label, output)` pairs, default: even count, four up.
    MatchPairs,
}

fn arity(kind: OperatorKind) -> Arity {
    use OperatorKind as K;
    match kind {
        K::Not | K::TypeOf | K::ToBoolean | K::ToString | K::Length | K::Ln | K::Log10
        | K::Log2 | K::Sqrt | K::Sin | K::Cos | K::Tan | K::Asin | K::Acos | K::Atan => {
            Arity::Exact(1)
        }
        K::Eq | K::Neq | K::Lt | K::Lte | K::Gt | K::Gte | K::At | K::Pow => Arity::Exact(2),
        K::Id | K::GeometryType | K::Properties | K::Pi | K::E | K::Ln2 | K::Zoom => {
            Arity::Exact(0)
        }
        K::ToNumber | K::ToColor | K::Boolean | K::Number | K::Object | K::String | K::Array
        | K::Coalesce => Arity::AtLeast(1),
        K::All | K::Any | K::Add | K::Sub | K::Mul | K::Div | K::Rem | K::Min | K::Max => {
            Arity::AtLeast(2)
        }
        K::Get | K::Has => Arity::Range(1, 2),
        K::Case => Arity::CasePairs,
        K::Match => Arity::MatchPairs,
    }
}

fn check_arity(kind: OperatorKind, count: usize) -> Result<(), ParseError> {
    let message = match arity(kind) {
        Arity::Exact(n) if count != n => format!("expects {} operand(s), got {}", n, count),
        Arity::AtLeast(n) if count < n => {
            format!("expects at least {} operand(s), got {}", n, count)
        }
        Arity::Range(min, max) if count < min || count > max => {
            format!("expects between {} and {} operands, got {}", min, max, count)
        }
        Arity::CasePairs if count < 3 || count % 2 == 0 => {
            "expects condition/value pairs followed by a default".to_string()
        }
        Arity::MatchPairs if count < 4 || count % 2 == 1 => {
            "expects an input, label/output pairs, and a default".to_string()
        }
        _ => return Ok(()),
    };
    Err(ParseError::ArityOrShape {
        operator: kind.name(),
        message,
    })
}

/// Turns an opaque JSON node into an immutable [`Expression`] tree.
///
/// Non-array nodes and arrays whose head is not a string are literals. A
/// string head must name a known operator; data arrays that happen to start
/// with a string belong under `literal`. The payload of `literal` is captured
/// verbatim, never recursively parsed.
pub fn parse(node: &Json) -> Result<Expression, ParseError> {
    let items = match node.as_array() {
        Some(items) => items,
        None => return Ok(Expression::Literal(node.clone())),
    };
    let head = match items.first().and_then(Json::as_str) {
        Some(head) => head,
        None => return Ok(Expression::Literal(node.clone())),
    };
    if head == "literal" {
        if items.len() != 2 {
            return Err(ParseError::MalformedLiteral);
        }
        return Ok(Expression::Literal(items[1].clone()));
    }
    let kind = OperatorKind::from_name(head)
        .ok_or_else(|| ParseError::UnknownOperator(head.to_string()))?;
    let rest = &items[1..];

    // `get`/`has` with no target object become lazy property references the
    // downstream rule layer can bind per feature.
    if matches!(kind, OperatorKind::Get | OperatorKind::Has) && rest.len() == 1 {
        let key = rest[0].as_str().ok_or_else(|| ParseError::ArityOrShape {
            operator: kind.name(),
            message: "without a target object expects a plain string key".to_string(),
        })?;
        return Ok(if kind == OperatorKind::Get {
            Expression::PropertyRef(key.to_string())
        } else {
            Expression::PropertyExists(key.to_string())
        });
    }

    check_arity(kind, rest.len())?;
    let args = rest.iter().map(parse).collect::<Result<Vec<_>, _>>()?;
    Ok(Expression::Op { kind, args })
}
