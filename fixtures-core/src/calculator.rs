use crate::error::{Error, Result};

/// Elementary binary operations on `f64`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// True division. A zero divisor (of either sign) is an invalid argument.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b != 0.0 {
            return Ok(a / b);
        }
        Err(Error::InvalidArgument("Cannot divide by zero".to_string()))
    }
}
