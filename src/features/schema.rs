//! Field schema for the 13 Boston housing attributes
//!
//! `FIELDS` lists the inputs in the order the model was trained on.
//! That order is an invariant: the artifact loader checks its feature
//! names against this table before any prediction is made.

/// Number of input features the model expects
pub const FEATURE_COUNT: usize = 13;

/// Static description of a single input field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Short uppercase name (column name in the original dataset)
    pub name: &'static str,
    /// Human-readable label shown next to the input
    pub label: &'static str,
    /// Value used when the user does not supply one
    pub default: f64,
    /// Decimal places used when echoing the value back
    pub precision: usize,
    /// Whether the field only admits the values 0 and 1
    pub binary: bool,
}

/// The 13 input fields, in training order
pub const FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec {
        name: "CRIM",
        label: "Per capita crime rate by town",
        default: 0.1,
        precision: 4,
        binary: false,
    },
    FieldSpec {
        name: "ZN",
        label: "Proportion of residential land zoned for lots over 25,000 sq.ft.",
        default: 0.0,
        precision: 2,
        binary: false,
    },
    FieldSpec {
        name: "INDUS",
        label: "Proportion of non-retail business acres per town",
        default: 7.0,
        precision: 2,
        binary: false,
    },
    FieldSpec {
        name: "CHAS",
        label: "Charles River dummy variable (1 if tract bounds river; 0 otherwise)",
        default: 0.0,
        precision: 0,
        binary: true,
    },
    FieldSpec {
        name: "NOX",
        label: "Nitric oxides concentration (parts per 10 million)",
        default: 0.5,
        precision: 4,
        binary: false,
    },
    FieldSpec {
        name: "RM",
        label: "Average number of rooms per dwelling",
        default: 6.0,
        precision: 2,
        binary: false,
    },
    FieldSpec {
        name: "AGE",
        label: "Proportion of owner-occupied units built prior to 1940",
        default: 60.0,
        precision: 2,
        binary: false,
    },
    FieldSpec {
        name: "DIS",
        label: "Weighted distances to five Boston employment centres",
        default: 4.0,
        precision: 2,
        binary: false,
    },
    FieldSpec {
        name: "RAD",
        label: "Index of accessibility to radial highways",
        default: 1.0,
        precision: 0,
        binary: false,
    },
    FieldSpec {
        name: "TAX",
        label: "Full-value property-tax rate per $10,000",
        default: 296.0,
        precision: 0,
        binary: false,
    },
    FieldSpec {
        name: "PTRATIO",
        label: "Pupil-teacher ratio by town",
        default: 15.0,
        precision: 2,
        binary: false,
    },
    FieldSpec {
        name: "B",
        label: "1000(Bk - 0.63)^2 where Bk is the proportion of Black residents by town",
        default: 396.9,
        precision: 2,
        binary: false,
    },
    FieldSpec {
        name: "LSTAT",
        label: "% lower status of the population",
        default: 12.5,
        precision: 2,
        binary: false,
    },
];

/// Look up a field by its short name (case-insensitive)
pub fn find_field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}
