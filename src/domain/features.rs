//! Health metrics collected by the form and the fixed-order feature vector
//! handed to the predictor.
//!
//! [`Feature`] is the binding contract between named inputs and vector
//! positions: its declaration order is the vector order, and [`Feature::name`]
//! is the column name a model artifact must declare at that position.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Number of features the predictor consumes
pub const FEATURE_COUNT: usize = 7;

/// One input column of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Age,
    Bmi,
    Glucose,
    Insulin,
    BloodPressure,
    SkinThickness,
    DiabetesPedigreeFunction,
}

/// Kind of input control rendered for a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Slider,
    Number,
}

/// Bounds, step and default of an input control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    pub kind: ControlKind,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Decimal places shown in the control (0 for integer inputs)
    pub decimals: usize,
}

impl Control {
    const fn integer(kind: ControlKind, min: f64, max: f64, default: f64) -> Self {
        Self {
            kind,
            min,
            max,
            step: 1.0,
            default,
            decimals: 0,
        }
    }

    const fn real(min: f64, max: f64, step: f64, default: f64, decimals: usize) -> Self {
        Self {
            kind: ControlKind::Number,
            min,
            max,
            step,
            default,
            decimals,
        }
    }

    /// Format a value the way the control displays it
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

impl Feature {
    /// All features in vector order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Age,
        Feature::Bmi,
        Feature::Glucose,
        Feature::Insulin,
        Feature::BloodPressure,
        Feature::SkinThickness,
        Feature::DiabetesPedigreeFunction,
    ];

    /// Position of this feature in the vector
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name, also used as the form field name
    pub fn name(self) -> &'static str {
        match self {
            Feature::Age => "age",
            Feature::Bmi => "bmi",
            Feature::Glucose => "glucose",
            Feature::Insulin => "insulin",
            Feature::BloodPressure => "blood_pressure",
            Feature::SkinThickness => "skin_thickness",
            Feature::DiabetesPedigreeFunction => "diabetes_pedigree_function",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Feature::Age => "Age",
            Feature::Bmi => "BMI",
            Feature::Glucose => "Glucose Level",
            Feature::Insulin => "Insulin Level",
            Feature::BloodPressure => "Blood Pressure",
            Feature::SkinThickness => "Skin Thickness",
            Feature::DiabetesPedigreeFunction => "Diabetes Pedigree Function",
        }
    }

    pub fn control(self) -> Control {
        match self {
            Feature::Age => Control::integer(ControlKind::Slider, 0.0, 100.0, 25.0),
            Feature::Bmi => Control::real(0.0, 50.0, 0.1, 25.0, 1),
            Feature::Glucose => Control::integer(ControlKind::Number, 0.0, 200.0, 100.0),
            Feature::Insulin => Control::integer(ControlKind::Number, 0.0, 900.0, 80.0),
            Feature::BloodPressure => Control::integer(ControlKind::Number, 0.0, 180.0, 80.0),
            Feature::SkinThickness => Control::integer(ControlKind::Number, 0.0, 100.0, 20.0),
            Feature::DiabetesPedigreeFunction => Control::real(0.0, 2.5, 0.01, 0.5, 2),
        }
    }

    /// Ordered column names
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current values of the seven input controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HealthMetrics {
    #[validate(range(min = 0, max = 100, message = "Age must be between 0 and 100"))]
    pub age: u32,

    #[validate(
        range(min = 0.0, max = 50.0, message = "BMI must be between 0.0 and 50.0"),
        custom(function = "finite")
    )]
    pub bmi: f64,

    #[validate(range(min = 0, max = 200, message = "Glucose Level must be between 0 and 200"))]
    pub glucose: u32,

    #[validate(range(min = 0, max = 900, message = "Insulin Level must be between 0 and 900"))]
    pub insulin: u32,

    #[validate(range(min = 0, max = 180, message = "Blood Pressure must be between 0 and 180"))]
    pub blood_pressure: u32,

    #[validate(range(min = 0, max = 100, message = "Skin Thickness must be between 0 and 100"))]
    pub skin_thickness: u32,

    #[validate(
        range(
            min = 0.0,
            max = 2.5,
            message = "Diabetes Pedigree Function must be between 0.0 and 2.5"
        ),
        custom(function = "finite")
    )]
    pub diabetes_pedigree_function: f64,
}

fn finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        let mut error = ValidationError::new("finite");
        error.message = Some("value must be a finite number".into());
        Err(error)
    }
}

impl Default for HealthMetrics {
    fn default() -> Self {
        Self {
            age: 25,
            bmi: 25.0,
            glucose: 100,
            insulin: 80,
            blood_pressure: 80,
            skin_thickness: 20,
            diabetes_pedigree_function: 0.5,
        }
    }
}

impl HealthMetrics {
    /// Value of a single feature as the predictor sees it
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Age => f64::from(self.age),
            Feature::Bmi => self.bmi,
            Feature::Glucose => f64::from(self.glucose),
            Feature::Insulin => f64::from(self.insulin),
            Feature::BloodPressure => f64::from(self.blood_pressure),
            Feature::SkinThickness => f64::from(self.skin_thickness),
            Feature::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
        }
    }

    /// Assemble the vector in [`Feature::ALL`] order
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVector(Feature::ALL.map(|feature| self.value(feature)))
    }

    /// Range-check every field.
    ///
    /// Returns the messages of all violated bounds, in vector order.
    pub fn check(&self) -> Result<(), Vec<String>> {
        let errors = match self.validate() {
            Ok(()) => return Ok(()),
            Err(errors) => errors,
        };

        let field_errors = errors.field_errors();
        let messages = Feature::ALL
            .iter()
            .filter_map(|feature| field_errors.get(feature.name()))
            .flat_map(|errs| errs.iter())
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })
            .collect();

        Err(messages)
    }
}

/// Fixed-order numeric input of the predictor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
