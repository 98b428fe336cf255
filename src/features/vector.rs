//! Fixed-order feature vector
//!
//! One complete set of inputs, assembled fresh from the current form
//! values on every prediction and discarded after use. The field order
//! here and in `to_array` must match the training order in the schema.

use ndarray::Array1;

use super::schema::FEATURE_COUNT;

/// The 13 housing attributes the model scores
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Per capita crime rate by town
    pub crim: f64,
    /// Proportion of residential land zoned for lots over 25,000 sq.ft.
    pub zn: f64,
    /// Proportion of non-retail business acres per town
    pub indus: f64,
    /// Charles River dummy variable, 0 or 1
    pub chas: f64,
    /// Nitric oxides concentration (parts per 10 million)
    pub nox: f64,
    /// Average number of rooms per dwelling
    pub rm: f64,
    /// Proportion of owner-occupied units built prior to 1940
    pub age: f64,
    /// Weighted distances to five Boston employment centres
    pub dis: f64,
    /// Index of accessibility to radial highways
    pub rad: f64,
    /// Full-value property-tax rate per $10,000
    pub tax: f64,
    /// Pupil-teacher ratio by town
    pub ptratio: f64,
    /// 1000(Bk - 0.63)^2 where Bk is the proportion of Black residents
    pub b: f64,
    /// % lower status of the population
    pub lstat: f64,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            crim: 0.1,
            zn: 0.0,
            indus: 7.0,
            chas: 0.0,
            nox: 0.5,
            rm: 6.0,
            age: 60.0,
            dis: 4.0,
            rad: 1.0,
            tax: 296.0,
            ptratio: 15.0,
            b: 396.9,
            lstat: 12.5,
        }
    }
}

impl FeatureVector {
    /// Field values in training order
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.crim,
            self.zn,
            self.indus,
            self.chas,
            self.nox,
            self.rm,
            self.age,
            self.dis,
            self.rad,
            self.tax,
            self.ptratio,
            self.b,
            self.lstat,
        ]
    }

    /// Assemble the input row the model consumes
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_vec(self.values().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FIELDS;

    #[test]
    fn test_array_order_matches_schema() {
        let vector = FeatureVector {
            crim: 1.0,
            zn: 2.0,
            indus: 3.0,
            chas: 4.0,
            nox: 5.0,
            rm: 6.0,
            age: 7.0,
            dis: 8.0,
            rad: 9.0,
            tax: 10.0,
            ptratio: 11.0,
            b: 12.0,
            lstat: 13.0,
        };

        let array = vector.to_array();
        assert_eq!(array.len(), FEATURE_COUNT);
        for (i, &value) in array.iter().enumerate() {
            assert_eq!(value, (i + 1) as f64);
        }
    }

    #[test]
    fn test_defaults_match_schema() {
        let defaults = FeatureVector::default().values();
        for (spec, &value) in FIELDS.iter().zip(defaults.iter()) {
            assert_eq!(
                value, spec.default,
                "default for {} disagrees with the schema",
                spec.name
            );
        }
    }

    #[test]
    fn test_default_river_adjacency_is_zero() {
        assert_eq!(FeatureVector::default().chas, 0.0);
    }

    #[test]
    fn test_default_rooms_is_six() {
        assert_eq!(FeatureVector::default().rm, 6.0);
    }
}
