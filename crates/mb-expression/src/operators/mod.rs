//! Operator families: decision, types, lookup/feature-data, math/zoom.

pub(crate) mod decision;
pub(crate) mod lookup;
pub(crate) mod math;
pub(crate) mod types;
