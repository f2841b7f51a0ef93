use log::{debug, info, warn};
use rocket::serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ErrorKind};
use crate::registry::{Quantity, UnitKind};

/// Represent a conversion command, from the given unit to the given unit
/// with the provided value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// The outcome of a conversion, as displayed to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", tag = "status", rename_all = "lowercase")]
pub enum ConversionResult {
    Success { message: String },
    Error { kind: ErrorKind, message: String },
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// Build a request from the raw text of the value field.
    pub fn parse(
        raw_value: &str,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Result<Self, ConversionError> {
        let value = parse_value(raw_value)?;
        Ok(Self::new(value, from_unit, to_unit))
    }

    /// Execute the conversion, returning the formatted result line.
    pub fn execute(&self) -> Result<String, ConversionError> {
        if !self.value.is_finite() {
            return Err(ConversionError::InvalidNumeric(self.value.to_string()));
        }

        let from: UnitKind = self.from_unit.parse()?;
        let to: UnitKind = self.to_unit.parse()?;
        let result = Quantity::new(self.value, from).to(to)?;
        debug!("Converted {:?} to {:?}", Quantity::new(self.value, from), result);

        Ok(format!(
            "{} {} = {:.2} {}",
            format_value(self.value),
            self.from_unit,
            result.value,
            self.to_unit
        ))
    }
}

impl From<Result<String, ConversionError>> for ConversionResult {
    fn from(result: Result<String, ConversionError>) -> Self {
        match result {
            Ok(message) => ConversionResult::Success { message },
            Err(err) => {
                match err.kind() {
                    ErrorKind::Unknown => warn!("Conversion failed: {}", err),
                    _ => info!("Conversion rejected: {}", err),
                }
                ConversionResult::Error {
                    kind: err.kind(),
                    message: err.user_message(),
                }
            }
        }
    }
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ConversionResult::Success { message } => message,
            ConversionResult::Error { message, .. } => message,
        }
    }
}

/// Convert `value` from `from_unit` to `to_unit`, always returning a
/// displayable line: either the result or a user facing error message.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> String {
    run(ConversionRequest::new(value, from_unit, to_unit).execute())
}

/// Same as [`convert`], for a value still in its textual form.
pub fn convert_input(raw_value: &str, from_unit: &str, to_unit: &str) -> String {
    run(ConversionRequest::parse(raw_value, from_unit, to_unit).and_then(|request| request.execute()))
}

fn run(result: Result<String, ConversionError>) -> String {
    ConversionResult::from(result).message().to_string()
}

fn parse_value(raw_value: &str) -> Result<f64, ConversionError> {
    let trimmed = raw_value.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConversionError::InvalidNumeric(trimmed.to_string()))
}

/// Shortest representation that reads back to the same value, keeping a
/// trailing `.0` on integral values. Exponents carry a sign and at least two
/// digits (`1e-05`, `1e+16`).
fn format_value(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
