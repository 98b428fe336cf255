//! Housing attribute features
//!
//! Field schema and the fixed-order feature vector fed to the model.

mod schema;
mod vector;

pub use schema::{find_field, FieldSpec, FEATURE_COUNT, FIELDS};
pub use vector::FeatureVector;
