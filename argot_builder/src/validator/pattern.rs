use regex::Regex;
use std::ffi::OsStr;

use crate::parser::DesignError;
use crate::validator::{ValidationError, Validator};

/// A validator requiring the value to fully match a regular expression.
///
/// Applies to anything string or path like (via [`OsStr`]).
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{RegexValidator, Validator};
///
/// let validator = RegexValidator::new("[a-z]+_[0-9]+").unwrap();
/// assert!(validator.validate("sample_12").is_ok());
/// assert!(validator.validate("sample_12b").is_err());
/// assert_eq!(validator.describe(), "value must match the pattern '[a-z]+_[0-9]+'");
/// ```
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: String,
    regex: Regex,
}

impl RegexValidator {
    /// Create a regex validator.
    /// An invalid pattern is a mistake in the program, reported as a [`DesignError`].
    pub fn new(pattern: impl Into<String>) -> Result<Self, DesignError> {
        let pattern = pattern.into();
        // Anchor both ends so that partial matches are rejected.
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|error| {
            DesignError::InvalidPattern {
                pattern: pattern.clone(),
                reason: error.to_string(),
            }
        })?;

        Ok(Self { pattern, regex })
    }

    /// The pattern values must match.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// A short fragment describing the constraint, for the help page.
    pub fn describe(&self) -> String {
        format!("value must match the pattern '{}'", self.pattern)
    }
}

impl<T> Validator<T> for RegexValidator
where
    T: AsRef<OsStr> + ?Sized,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        let value = value.as_ref().to_string_lossy();

        if self.regex.is_match(&value) {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Value {value} did not match the pattern {p}.",
                p = self.pattern
            )))
        }
    }

    fn describe(&self) -> String {
        RegexValidator::describe(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("[a-z]+", "abc", true)]
    #[case("[a-z]+", "abc1", false)]
    #[case("[a-z]+", "1abc", false)]
    #[case("[a-z]+", "", false)]
    #[case("[a-z]*", "", true)]
    #[case("a|b", "a", true)]
    #[case("a|b", "ab", false)]
    #[case(".*\\.fa", "reads.fa", true)]
    #[case(".*\\.fa", "reads.fa.gz", false)]
    fn validate(#[case] pattern: &str, #[case] value: &str, #[case] expected: bool) {
        // Setup
        let validator = RegexValidator::new(pattern).unwrap();

        // Execute
        let result = validator.validate(value);

        // Verify
        assert_eq!(result.is_ok(), expected);

        if let Err(error) = result {
            assert_contains!(error.message(), value);
            assert_contains!(error.message(), pattern);
        }
    }

    #[test]
    fn validate_path() {
        let validator = RegexValidator::new("/tmp/.*").unwrap();
        assert!(validator.validate(&PathBuf::from("/tmp/file.txt")).is_ok());
        assert!(validator.validate(&PathBuf::from("/var/file.txt")).is_err());
        assert!(validator.validate(&"/tmp/x".to_string()).is_ok());
    }

    #[test]
    fn invalid_pattern() {
        let error = RegexValidator::new("(unclosed").unwrap_err();
        assert_matches!(error, DesignError::InvalidPattern { pattern, .. } if pattern == "(unclosed");
    }

    #[test]
    fn describe() {
        let validator = RegexValidator::new("x+").unwrap();
        assert_eq!(validator.pattern(), "x+");
        assert_eq!(validator.describe(), "value must match the pattern 'x+'");
        assert_eq!(
            Validator::<str>::describe(&validator),
            "value must match the pattern 'x+'"
        );
    }
}
