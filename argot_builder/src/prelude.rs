//! Traits which, typically, may be imported without concern: `use argot::prelude::*`.

/// Behaviour for multiple (0 to many) items T to be collected together, in order.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);

    /// The items currently held, in order.
    /// Used to render the default of a list on the help page; `None` renders no default.
    fn items(&self) -> Option<Vec<&T>> {
        None
    }
}

/// Behaviour for a type with a built-in conversion from a command line token.
///
/// Implemented for the primitive numbers, `bool`, `char`, `String`, and `PathBuf`.
pub trait Value: Sized {
    /// A human readable name for the type, shown on the help page (ex: `"signed 32 bit integer"`).
    fn type_label() -> String;

    /// Convert a command line token; `None` when the token is malformed.
    fn from_token(token: &str) -> Option<Self>;

    /// Render a value for the help page, typically the default.
    fn render(&self) -> String;
}

/// Behaviour for a type which converts from the command line by name.
///
/// Names must be distinct, and their order is the order shown on the help page.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::prelude::*;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Mode {
///     Fast,
///     Thorough,
/// }
///
/// impl Enumeration for Mode {
///     fn enumeration_names() -> Vec<(&'static str, Self)> {
///         vec![("fast", Mode::Fast), ("thorough", Mode::Thorough)]
///     }
/// }
/// ```
pub trait Enumeration: Sized + Clone + PartialEq {
    /// The ordered mapping from display names to values.
    fn enumeration_names() -> Vec<(&'static str, Self)>;
}
