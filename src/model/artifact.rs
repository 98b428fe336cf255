//! Serialized model artifact
//!
//! The on-disk JSON form of the pre-trained model, produced offline by
//! the training pipeline and loaded once at startup. Loading fails fast:
//! a missing or malformed file is reported and nothing else runs.

use anyhow::Result;
use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::features::FIELDS;

use super::linear::{ModelError, PriceModel};

/// Default location of the pre-trained artifact
pub const DEFAULT_MODEL_PATH: &str = "models/boston_housing.json";

/// Training-fit statistics stored alongside the weights, for display only
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainingMetrics {
    /// R-squared on the training set
    pub r2: f64,
    /// Root mean squared error on the training set
    pub rmse: f64,
}

/// On-disk representation of the pre-trained linear model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Dataset the model was fitted on
    pub dataset: String,
    /// When the model was fitted
    pub trained_at: DateTime<Utc>,
    /// Feature names in training order
    pub feature_names: Vec<String>,
    /// One weight per feature, in training order
    pub coefficients: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
    /// Fit statistics, if the training run recorded them
    pub metrics: Option<TrainingMetrics>,
}

impl ModelArtifact {
    /// Load an artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();

        let json = fs::read_to_string(path).map_err(|source| ModelError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| ModelError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the artifact as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Validate against the field schema and build the in-memory model
    ///
    /// Rejects an artifact whose feature names are missing, reordered, or
    /// out of step with its coefficient count.
    pub fn into_model(self) -> Result<PriceModel, ModelError> {
        if self.feature_names.len() != FIELDS.len() {
            return Err(ModelError::SchemaMismatch {
                reason: format!(
                    "expected {} features, artifact has {}",
                    FIELDS.len(),
                    self.feature_names.len()
                ),
            });
        }

        if self.coefficients.len() != self.feature_names.len() {
            return Err(ModelError::SchemaMismatch {
                reason: format!(
                    "{} feature names but {} coefficients",
                    self.feature_names.len(),
                    self.coefficients.len()
                ),
            });
        }

        for (i, (spec, name)) in FIELDS.iter().zip(self.feature_names.iter()).enumerate() {
            if !name.eq_ignore_ascii_case(spec.name) {
                return Err(ModelError::SchemaMismatch {
                    reason: format!("feature {} is '{}', expected '{}'", i + 1, name, spec.name),
                });
            }
        }

        Ok(PriceModel::new(
            Array1::from_vec(self.coefficients),
            self.intercept,
            self.feature_names,
        ))
    }

    /// Load and validate in one step
    pub fn load_model<P: AsRef<Path>>(path: P) -> Result<PriceModel, ModelError> {
        Self::load(path)?.into_model()
    }
}
