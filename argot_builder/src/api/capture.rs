use thiserror::Error;

use crate::model::Arity;
use crate::prelude::{Enumeration, Value};
use crate::validator::{NameTable, ValidationError, ValueListValidator};

/// Behaviour to capture an explicit generic type T from an input `&str`.
///
/// We use this at the bottom of the command line parser object graph so the compiler can maintain each field's type.
#[doc(hidden)]
pub trait GenericCapturable<'a, T> {
    /// Declare that the parameter has been matched.
    fn matched(&mut self);

    /// Convert a token into the generic type T for this parameter.
    fn convert(&self, token: &str) -> Result<T, InvalidCapture>;

    /// Write a (converted and validated) value through to the bound variable.
    fn store(&mut self, value: T);

    /// Get the `Arity` for this implementation.
    fn arity(&self) -> Arity;

    /// The human readable type name, if the parameter takes a value.
    fn type_label(&self) -> Option<String>;

    /// The rendering of the bound variable, as it was before parsing.
    fn render_initial(&self) -> Option<String>;

    /// The display names, for a parameter converted by [`Enumeration`].
    fn enumeration_names(&self) -> Option<Vec<String>>;

    /// The membership constraint implied by the conversion, for a parameter converted by [`Enumeration`].
    fn value_list(&self) -> Option<ValueListValidator<T>>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[doc(hidden)]
pub enum InvalidCapture {
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion { token: String, type_name: String },
    #[error("{0}")]
    Rejected(ValidationError),
}

/// How a field turns tokens into `T`, resolved once when the field is created.
pub(crate) struct Conversion<T> {
    type_label: String,
    source: Source<T>,
}

enum Source<T> {
    Native {
        from_token: fn(&str) -> Option<T>,
        render: fn(&T) -> String,
    },
    Named(NameTable<T>),
}

impl<T> Conversion<T> {
    pub(crate) fn native() -> Self
    where
        T: Value,
    {
        Self {
            type_label: T::type_label(),
            source: Source::Native {
                from_token: <T as Value>::from_token,
                render: <T as Value>::render,
            },
        }
    }

    pub(crate) fn named() -> Self
    where
        T: Enumeration,
    {
        Self {
            type_label: short_type_name::<T>(),
            source: Source::Named(NameTable::load()),
        }
    }

    pub(crate) fn convert(&self, token: &str) -> Result<T, InvalidCapture> {
        let value = match &self.source {
            Source::Native { from_token, .. } => from_token(token),
            Source::Named(table) => table.lookup(token),
        };

        value.ok_or_else(|| InvalidCapture::InvalidConversion {
            token: token.to_string(),
            type_name: self.type_label.clone(),
        })
    }

    pub(crate) fn render(&self, value: &T) -> String {
        match &self.source {
            Source::Native { render, .. } => render(value),
            Source::Named(table) => table.render(value),
        }
    }

    pub(crate) fn type_label(&self) -> String {
        self.type_label.clone()
    }

    pub(crate) fn names(&self) -> Option<Vec<String>> {
        match &self.source {
            Source::Native { .. } => None,
            Source::Named(table) => Some(table.names()),
        }
    }

    pub(crate) fn value_list(&self) -> Option<ValueListValidator<T>> {
        match &self.source {
            Source::Native { .. } => None,
            Source::Named(table) => Some(table.value_list()),
        }
    }
}

/// The last path segment of a type name (ex: `my_crate::Mode` becomes `Mode`).
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
