mod enumeration;
mod file;
mod list;
mod pattern;
mod range;

pub(crate) use self::enumeration::NameTable;
pub use self::file::*;
pub use self::list::*;
pub use self::pattern::*;
pub use self::range::*;

use thiserror::Error;

/// Behaviour to constrain the values bound to an option or positional argument.
///
/// A validator runs once per occurrence on the command line, after the token has been converted into `T`.
/// Built-in validators combine with `|`, which requires both sides to accept the value.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{RangeValidator, ValidationError, Validator};
///
/// struct Even;
///
/// impl Validator<u32> for Even {
///     fn validate(&self, value: &u32) -> Result<(), ValidationError> {
///         if value % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new(format!("Value {value} is not even.")))
///         }
///     }
///
///     fn describe(&self) -> String {
///         "value must be even".to_string()
///     }
/// }
///
/// let validator = RangeValidator::new(1u32, 10) | Even;
/// assert!(validator.validate(&4u32).is_ok());
/// assert!(validator.validate(&5u32).is_err());
/// assert!(validator.validate(&12u32).is_err());
/// assert_eq!(
///     Validator::<u32>::describe(&validator),
///     "value must be in range [1, 10] and value must be even"
/// );
/// ```
pub trait Validator<T: ?Sized> {
    /// Check the value, rejecting it with a human readable reason.
    fn validate(&self, value: &T) -> Result<(), ValidationError>;

    /// A short fragment describing the constraint, for the help page.
    fn describe(&self) -> String;
}

impl<'v, T: ?Sized> Validator<T> for Box<dyn Validator<T> + 'v> {
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        (**self).validate(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The reason a [`Validator`] rejected a value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    /// Create a validation error from a human readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The human readable message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// The conjunction of two validators: a value must be accepted by both.
///
/// The first rejection wins; the second validator does not run when the first rejects.
/// Typically created through `first | second`.
#[derive(Debug, Clone)]
pub struct ValidatorChain<A, B> {
    first: A,
    second: B,
}

impl<A, B> ValidatorChain<A, B> {
    /// Combine two validators over the same value type.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Validator<T> for ValidatorChain<A, B>
where
    T: ?Sized,
    A: Validator<T>,
    B: Validator<T>,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        self.first.validate(value)?;
        self.second.validate(value)
    }

    fn describe(&self) -> String {
        format!(
            "{} and {}",
            self.first.describe(),
            self.second.describe()
        )
    }
}

macro_rules! chainable {
    ($($target:ty => [$($generic:ident),*]);+ $(;)?) => {
        $(
            impl<$($generic,)* Rhs> std::ops::BitOr<Rhs> for $target {
                type Output = ValidatorChain<Self, Rhs>;

                fn bitor(self, rhs: Rhs) -> Self::Output {
                    ValidatorChain::new(self, rhs)
                }
            }
        )+
    };
}

chainable! {
    RegexValidator => [];
    InputFileValidator => [];
    OutputFileValidator => [];
    ValueListValidator<T> => [T];
    RangeValidator<T> => [T];
    ValidatorChain<A, B> => [A, B];
}

/// Render labels as a bracketed, comma separated list (ex: `[a, b]`).
pub(crate) fn join_labels<S: AsRef<str>>(labels: &[S]) -> String {
    let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    format!("[{}]", labels.join(", "))
}
