//! Map style expression language: parser, dynamic value model, coercion
//! rules and evaluator.
//!
//! # Overview
//!
//! Expressions are JSON arrays of the form `[operator, ...operands]`,
//! parsed once into an immutable [`Expression`] tree and evaluated per
//! feature against an [`EvalContext`] supplied by the rendering layer. The
//! same tree may be evaluated concurrently from any number of threads.
//!
//! # Example
//!
//! ```
//! use mb_expression::{evaluate, parse, EvalContext, Value};
//! use serde_json::json;
//!
//! struct Road;
//!
//! impl EvalContext for Road {
//!     fn get_attribute(&self, name: &str) -> Option<Value> {
//!         (name == "lanes").then(|| Value::Number(4.0))
//!     }
//!     fn feature_id(&self) -> Value {
//!         Value::Str("road.17".to_string())
//!     }
//!     fn geometry_type(&self) -> Value {
//!         Value::Str("LineString".to_string())
//!     }
//!     fn scale_denominator(&self) -> f64 {
//!         2132.729584
//!     }
//! }
//!
//! let expr = parse(&json!(["case", [">=", ["get", "lanes"], 4], "wide", "narrow"])).unwrap();
//! assert_eq!(evaluate(&expr, &Road).unwrap(), Value::Str("wide".to_string()));
//! ```

pub mod coerce;
pub mod color;
pub mod context;
pub mod error;
pub mod expr;
pub mod operators;
pub mod parser;
pub mod value;

// Re-export the core public API
pub use color::Color;
pub use context::EvalContext;
pub use error::{EvalError, ParseError};
pub use expr::{evaluate, Expression};
pub use parser::{parse, OperatorKind};
pub use value::Value;
