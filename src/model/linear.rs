//! Linear regression prediction
//!
//! The in-memory form of the pre-trained model: one weight per feature
//! plus an intercept. The model predicts the median home price in
//! thousands of dollars, the unit it was trained on.

use ndarray::Array1;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or applying the model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file '{path}' was not found or could not be read")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model file '{path}' is not a valid model artifact")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model artifact does not match the expected feature schema: {reason}")]
    SchemaMismatch { reason: String },

    #[error("dimension mismatch: model expects {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Pre-trained linear regression model
///
/// Held immutably for the process lifetime once loaded.
#[derive(Debug, Clone)]
pub struct PriceModel {
    coefficients: Array1<f64>,
    intercept: f64,
    feature_names: Vec<String>,
}

impl PriceModel {
    /// Create a model from already-validated parameters
    pub fn new(coefficients: Array1<f64>, intercept: f64, feature_names: Vec<String>) -> Self {
        Self {
            coefficients,
            intercept,
            feature_names,
        }
    }

    /// Number of features the model expects
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Intercept term
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Feature names in training order
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Predict the median home price, in thousands of dollars
    pub fn predict(&self, x: &Array1<f64>) -> Result<f64, ModelError> {
        if x.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: x.len(),
            });
        }

        Ok(self.coefficients.dot(x) + self.intercept)
    }

    /// Human-readable coefficient table
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str("Linear Regression Model\n");
        s.push_str("=======================\n\n");
        s.push_str(&format!("Intercept: {:.6}\n\n", self.intercept));
        s.push_str("Coefficients:\n");

        for (i, (name, &c)) in self
            .feature_names
            .iter()
            .zip(self.coefficients.iter())
            .enumerate()
        {
            s.push_str(&format!("  {:3}. {:8}: {:>12.6}\n", i + 1, name, c));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("F{}", i)).collect()
    }

    #[test]
    fn test_predict_is_dot_plus_intercept() {
        // y = 1 + 2*x1 + 3*x2
        let model = PriceModel::new(Array1::from_vec(vec![2.0, 3.0]), 1.0, names(2));
        let y = model.predict(&Array1::from_vec(vec![10.0, 100.0])).unwrap();
        assert!((y - 321.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_model_returns_intercept() {
        let model = PriceModel::new(Array1::zeros(13), 24.0, names(13));
        let y = model.predict(&Array1::from_elem(13, 999.0)).unwrap();
        assert!((y - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_predict_rejects_wrong_length() {
        let model = PriceModel::new(Array1::zeros(13), 0.0, names(13));
        let err = model.predict(&Array1::zeros(12)).unwrap_err();
        match err {
            ModelError::DimensionMismatch { expected, got } => {
                assert_eq!(expected, 13);
                assert_eq!(got, 12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_summary_lists_every_feature() {
        let model = PriceModel::new(
            Array1::from_vec(vec![0.5, -1.5]),
            3.0,
            vec!["RM".to_string(), "LSTAT".to_string()],
        );
        let summary = model.summary();
        assert!(summary.contains("RM"));
        assert!(summary.contains("LSTAT"));
        assert!(summary.contains("Intercept: 3.000000"));
    }
}
