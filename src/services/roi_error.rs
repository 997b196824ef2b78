use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoiError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("division by zero: {what} is zero")]
    DivisionByZero { what: String },
}

impl RoiError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        RoiError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn division_by_zero(what: &str) -> Self {
        RoiError::DivisionByZero {
            what: what.to_string(),
        }
    }
}

/// Divides `numerator` by `denominator`, refusing to produce infinity or NaN.
pub fn checked_divide(numerator: f64, denominator: f64, what: &str) -> Result<f64, RoiError> {
    if denominator == 0.0 {
        return Err(RoiError::division_by_zero(what));
    }
    ensure_finite(numerator / denominator, what)
}

pub fn ensure_finite(value: f64, what: &str) -> Result<f64, RoiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RoiError::invalid(what, format!("computed value {value} is not finite")))
    }
}
