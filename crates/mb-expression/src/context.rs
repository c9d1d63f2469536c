//! The evaluation-context boundary to the external feature/rendering layer.

use crate::value::Value;

/// Per-feature data and rendering state an expression may read.
///
/// Implemented by the feature/rendering layer, one context per evaluation
/// call. A parsed [`Expression`](crate::Expression) is immutable and may be
/// evaluated concurrently against any number of contexts.
pub trait EvalContext {
    /// Looks up a feature attribute by name.
    fn get_attribute(&self, name: &str) -> Option<Value>;

    /// The feature identifier.
    fn feature_id(&self) -> Value;

    /// The feature's default geometry type, one of `Point`, `LineString`,
    /// `Polygon`, `MultiPoint`, `MultiLineString` or `MultiPolygon`.
    fn geometry_type(&self) -> Value;

    /// The current rendering scale denominator, the input to `zoom`.
    fn scale_denominator(&self) -> f64;
}
