use std::fmt::Display;

use crate::validator::{ValidationError, Validator};

/// A validator requiring a numeric value to lie within an inclusive `[min, max]` bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValidator<T> {
    min: T,
    max: T,
}

impl<T> RangeValidator<T> {
    /// Create a range validator over the inclusive bound `[min, max]`.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> Validator<T> for RangeValidator<T>
where
    T: PartialOrd + Display,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if &self.min <= value && value <= &self.max {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Value {value} is not in range [{min}, {max}].",
                min = self.min,
                max = self.max,
            )))
        }
    }

    fn describe(&self) -> String {
        format!("value must be in range [{}, {}]", self.min, self.max)
    }
}
