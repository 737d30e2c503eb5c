use crate::prelude::{Enumeration, Value};
use crate::validator::{join_labels, NameTable, ValidationError, Validator};

/// A validator requiring the value to equal one of an ordered set of allowed values.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{ValueListValidator, Validator};
///
/// let validator = ValueListValidator::new(vec![3u8, 1, 2]);
/// assert!(validator.validate(&1).is_ok());
/// assert!(validator.validate(&4).is_err());
/// assert_eq!(validator.describe(), "value must be one of [3, 1, 2]");
/// ```
#[derive(Clone)]
pub struct ValueListValidator<T> {
    values: Vec<T>,
    labels: Vec<String>,
    render: fn(&T) -> String,
    equals: fn(&T, &T) -> bool,
}

impl<T> std::fmt::Debug for ValueListValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueListValidator")
            .field("labels", &self.labels)
            .finish()
    }
}

impl<T: Value + PartialEq> ValueListValidator<T> {
    /// Create a value list validator; labels are rendered as by [`Value::render`].
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        let labels = values.iter().map(Value::render).collect();
        Self {
            values,
            labels,
            render: <T as Value>::render,
            equals: <T as PartialEq>::eq,
        }
    }
}

impl<T: Enumeration> ValueListValidator<T> {
    /// Create a value list validator over all values of an [`Enumeration`], labelled by name.
    pub fn enumerated() -> Self {
        NameTable::<T>::load().value_list()
    }
}

impl<T> ValueListValidator<T> {
    pub(crate) fn labelled(
        entries: Vec<(String, T)>,
        render: fn(&T) -> String,
        equals: fn(&T, &T) -> bool,
    ) -> Self {
        let (labels, values) = entries.into_iter().unzip();
        Self {
            values,
            labels,
            render,
            equals,
        }
    }

    /// The labels of the allowed values, in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl<T> Validator<T> for ValueListValidator<T> {
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if self.values.iter().any(|allowed| (self.equals)(allowed, value)) {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Value {v} is not one of {labels}.",
                v = (self.render)(value),
                labels = join_labels(&self.labels),
            )))
        }
    }

    fn describe(&self) -> String {
        format!("value must be one of {}", join_labels(&self.labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", true)]
    #[case("b", true)]
    #[case("c", true)]
    #[case("", false)]
    #[case("A", false)]
    #[case("ab", false)]
    fn validate_strings(#[case] value: &str, #[case] expected: bool) {
        // Setup
        let validator = ValueListValidator::new(vec![
            "c".to_string(),
            "a".to_string(),
            "b".to_string(),
        ]);

        // Execute
        let result = validator.validate(&value.to_string());

        // Verify
        assert_eq!(result.is_ok(), expected);
        if let Err(error) = result {
            assert_eq!(
                error.message(),
                format!("Value {value} is not one of [c, a, b].")
            );
        }
    }

    #[test]
    fn describe_order() {
        let validator = ValueListValidator::new(vec![9i64, -1, 4]);
        assert_eq!(validator.labels(), &["9", "-1", "4"]);
        assert_eq!(validator.describe(), "value must be one of [9, -1, 4]");
    }

    #[test]
    fn empty() {
        let validator: ValueListValidator<u32> = ValueListValidator::new(vec![]);
        assert!(validator.validate(&0).is_err());
        assert_eq!(validator.describe(), "value must be one of []");
    }
}
