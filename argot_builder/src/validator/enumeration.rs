use crate::prelude::Enumeration;
use crate::validator::ValueListValidator;

/// The name-indexed lookup table of an [`Enumeration`], resolved once per declared option.
#[derive(Debug, Clone)]
pub(crate) struct NameTable<T> {
    entries: Vec<(&'static str, T)>,
    duplicate: fn(&T) -> T,
    equals: fn(&T, &T) -> bool,
}

impl<T: Enumeration> NameTable<T> {
    pub(crate) fn load() -> Self {
        Self {
            entries: T::enumeration_names(),
            duplicate: <T as Clone>::clone,
            equals: <T as PartialEq>::eq,
        }
    }
}

impl<T> NameTable<T> {
    /// Exact name lookup.
    pub(crate) fn lookup(&self, name: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| (self.duplicate)(value))
    }

    pub(crate) fn name_of(&self, value: &T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| (self.equals)(v, value))
            .map(|(name, _)| *name)
    }

    /// The display name of `value`, or `<unnamed>` for a value missing from the table.
    pub(crate) fn render(&self, value: &T) -> String {
        self.name_of(value)
            .map(str::to_string)
            .unwrap_or_else(|| UNNAMED.to_string())
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Every value of the table is allowed, so a rejected value never has a name.
    pub(crate) fn value_list(&self) -> ValueListValidator<T> {
        ValueListValidator::labelled(
            self.entries
                .iter()
                .map(|(name, value)| (name.to_string(), (self.duplicate)(value)))
                .collect(),
            |_| UNNAMED.to_string(),
            self.equals,
        )
    }
}

const UNNAMED: &str = "<unnamed>";
