use rocket::serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::Dimension;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Cannot convert from '{from}' ({from_dimension}) to '{to}' ({to_dimension})")]
    IncompatibleDimensions {
        from: String,
        from_dimension: Dimension,
        to: String,
        to_dimension: Dimension,
    },
    #[error("could not convert string to float: '{0}'")]
    InvalidNumeric(String),
    #[error("'{0}' is not defined in the unit registry")]
    UnknownUnit(String),
    #[error("{value} {from} cannot be expressed in '{to}': the result is out of range")]
    OutOfRange { value: String, from: String, to: String },
}

/// The categories of failure shown to the user.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "snake_case")]
pub enum ErrorKind {
    IncompatibleDimensions,
    InvalidNumeric,
    Unknown,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::IncompatibleDimensions { .. } => ErrorKind::IncompatibleDimensions,
            ConversionError::InvalidNumeric(_) => ErrorKind::InvalidNumeric,
            ConversionError::UnknownUnit(_) | ConversionError::OutOfRange { .. } => ErrorKind::Unknown,
        }
    }

    /// The message displayed in the result area of the form.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::IncompatibleDimensions => "❌ Invalid conversion".to_string(),
            ErrorKind::InvalidNumeric => "❌ Please enter a valid numeric value.".to_string(),
            ErrorKind::Unknown => format!("❌ Error: {}", self),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn unknown_unit_message_carries_details() {
        let error = ConversionError::UnknownUnit("furlongs".to_string());

        assert_that!(error.kind()).is_equal_to(ErrorKind::Unknown);
        assert_that!(error.user_message())
            .is_equal_to("❌ Error: 'furlongs' is not defined in the unit registry".to_string());
    }

    #[test]
    fn incompatible_dimensions_hides_details() {
        let error = ConversionError::IncompatibleDimensions {
            from: "meters".to_string(),
            from_dimension: Dimension::Length,
            to: "kilograms".to_string(),
            to_dimension: Dimension::Mass,
        };

        assert_that!(error.to_string())
            .is_equal_to("Cannot convert from 'meters' (length) to 'kilograms' (mass)".to_string());
        assert_that!(error.user_message()).is_equal_to("❌ Invalid conversion".to_string());
    }

    #[test]
    fn out_of_range_message_carries_details() {
        let error = ConversionError::OutOfRange {
            value: "1e308".to_string(),
            from: "miles".to_string(),
            to: "centimeters".to_string(),
        };

        assert_that!(error.kind()).is_equal_to(ErrorKind::Unknown);
        assert_that!(error.user_message()).is_equal_to(
            "❌ Error: 1e308 miles cannot be expressed in 'centimeters': the result is out of range".to_string(),
        );
    }

    #[test]
    fn invalid_numeric_message() {
        let error = ConversionError::InvalidNumeric("abc".to_string());
        assert_that!(error.user_message())
            .is_equal_to("❌ Please enter a valid numeric value.".to_string());
    }
}
