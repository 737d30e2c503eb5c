use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::api::capture::*;
use crate::model::Arity;
use crate::prelude::{Collectable, Enumeration, Value};
use crate::validator::{join_labels, ValueListValidator};

/// A field that takes a single value; repeated occurrences overwrite (last wins).
///
/// The bound variable's value at registration is its default.
pub struct Scalar<'a, T> {
    variable: Rc<RefCell<&'a mut T>>,
    conversion: Conversion<T>,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar field, converting tokens by [`Value`].
    pub fn new(variable: &'a mut T) -> Self
    where
        T: Value,
    {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            conversion: Conversion::native(),
        }
    }

    /// Create a scalar field, converting tokens by [`Enumeration`] name.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{prelude::*, CommandLineParser, Opt, Scalar};
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
    ///
    /// let mut mode = Mode::Fast;
    /// let mut parser = CommandLineParser::new("program", vec!["program", "--mode", "thorough"]).unwrap();
    /// parser.add_option(Opt::new(Scalar::enumerated(&mut mode), ('m', "mode"))).unwrap();
    /// parser.try_parse().unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(mode, Mode::Thorough);
    /// ```
    pub fn enumerated(variable: &'a mut T) -> Self
    where
        T: Enumeration,
    {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            conversion: Conversion::named(),
        }
    }
}

impl<'a, T> GenericCapturable<'a, T> for Scalar<'a, T> {
    fn matched(&mut self) {
        // Do nothing.
    }

    fn convert(&self, token: &str) -> Result<T, InvalidCapture> {
        self.conversion.convert(token)
    }

    fn store(&mut self, value: T) {
        **self.variable.borrow_mut() = value;
    }

    fn arity(&self) -> Arity {
        Arity::Single
    }

    fn type_label(&self) -> Option<String> {
        Some(self.conversion.type_label())
    }

    fn render_initial(&self) -> Option<String> {
        Some(self.conversion.render(&**self.variable.borrow()))
    }

    fn enumeration_names(&self) -> Option<Vec<String>> {
        self.conversion.names()
    }

    fn value_list(&self) -> Option<ValueListValidator<T>> {
        self.conversion.value_list()
    }
}

/// A field that takes a list of values; repeated occurrences append, in order.
pub struct Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: Rc<RefCell<&'a mut C>>,
    conversion: Conversion<T>,
}

impl<'a, C, T> Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a collection field, converting tokens by [`Value`].
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{CommandLineParser, Opt, Collection};
    ///
    /// let mut items: Vec<u32> = Vec::default();
    /// let tokens = vec!["program", "-i", "1", "--item=2", "-i3"];
    /// let mut parser = CommandLineParser::new("program", tokens).unwrap();
    /// parser.add_option(Opt::new(Collection::new(&mut items), ('i', "item"))).unwrap();
    /// parser.try_parse().unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(items, vec![1, 2, 3]);
    /// ```
    pub fn new(variable: &'a mut C) -> Self
    where
        T: Value,
    {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            conversion: Conversion::native(),
        }
    }

    /// Create a collection field, converting tokens by [`Enumeration`] name.
    pub fn enumerated(variable: &'a mut C) -> Self
    where
        T: Enumeration,
    {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            conversion: Conversion::named(),
        }
    }
}

impl<'a, C, T> GenericCapturable<'a, T> for Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn convert(&self, token: &str) -> Result<T, InvalidCapture> {
        self.conversion.convert(token)
    }

    fn store(&mut self, value: T) {
        (**self.variable.borrow_mut()).add(value);
    }

    fn arity(&self) -> Arity {
        Arity::List
    }

    fn type_label(&self) -> Option<String> {
        Some(format!("list of {}", self.conversion.type_label()))
    }

    fn render_initial(&self) -> Option<String> {
        let variable = self.variable.borrow();
        variable.items().map(|items| {
            let labels: Vec<String> = items
                .into_iter()
                .map(|item| self.conversion.render(item))
                .collect();
            join_labels(&labels)
        })
    }

    fn enumeration_names(&self) -> Option<Vec<String>> {
        self.conversion.names()
    }

    fn value_list(&self) -> Option<ValueListValidator<T>> {
        self.conversion.value_list()
    }
}

/// A presence-only field: matching sets the bound `bool` to `true`.
pub(crate) struct Switch<'a> {
    variable: Rc<RefCell<&'a mut bool>>,
}

impl<'a> Switch<'a> {
    pub(crate) fn new(variable: &'a mut bool) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
        }
    }

    pub(crate) fn initial(&self) -> bool {
        **self.variable.borrow()
    }
}

impl<'a> GenericCapturable<'a, bool> for Switch<'a> {
    fn matched(&mut self) {
        **self.variable.borrow_mut() = true;
    }

    fn convert(&self, _token: &str) -> Result<bool, InvalidCapture> {
        unreachable!("internal error - must not convert on a Switch");
    }

    fn store(&mut self, _value: bool) {
        unreachable!("internal error - must not store on a Switch");
    }

    fn arity(&self) -> Arity {
        Arity::Single
    }

    fn type_label(&self) -> Option<String> {
        None
    }

    fn render_initial(&self) -> Option<String> {
        None
    }

    fn enumeration_names(&self) -> Option<Vec<String>> {
        None
    }

    fn value_list(&self) -> Option<ValueListValidator<bool>> {
        None
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn items(&self) -> Option<Vec<&T>> {
        Some(self.iter().collect())
    }
}

impl<T> Collectable<T> for VecDeque<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }

    fn items(&self) -> Option<Vec<&T>> {
        Some(self.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::Colour;
    use std::path::PathBuf;

    #[test]
    fn vec() {
        let mut collection: Vec<u32> = Vec::default();
        collection.add(1);
        collection.add(0);
        assert_eq!(collection, vec![1, 0]);
        assert_eq!(collection.items(), Some(vec![&1, &0]));
    }

    #[test]
    fn vec_deque() {
        let mut collection: VecDeque<u32> = VecDeque::default();
        collection.add(1);
        collection.add(0);
        assert_eq!(collection, VecDeque::from([1, 0]));
    }

    #[test]
    fn scalar_capture() {
        // Integer
        let mut variable: u32 = 7;
        let mut scalar = Scalar::new(&mut variable);
        assert_eq!(scalar.render_initial(), Some("7".to_string()));
        assert_eq!(scalar.type_label(), Some("unsigned 32 bit integer".to_string()));
        let value = scalar.convert("5").unwrap();
        scalar.store(value);
        let value = scalar.convert("6").unwrap();
        scalar.store(value);
        drop(scalar);
        assert_eq!(variable, 6);

        // Path
        let mut variable = PathBuf::default();
        let mut scalar = Scalar::new(&mut variable);
        let value = scalar.convert("out/x.fa").unwrap();
        scalar.store(value);
        drop(scalar);
        assert_eq!(variable, PathBuf::from("out/x.fa"));
    }

    #[test]
    fn scalar_invalid() {
        let mut variable: u32 = 0;
        let scalar = Scalar::new(&mut variable);
        assert_matches!(
            scalar.convert("-1"),
            Err(InvalidCapture::InvalidConversion { token, .. }) if token == "-1"
        );
    }

    #[test]
    fn scalar_enumerated() {
        // Setup
        let mut variable = Colour::Blue;
        let mut scalar = Scalar::enumerated(&mut variable);

        // Execute
        assert_eq!(scalar.render_initial(), Some("blue".to_string()));
        let value = scalar.convert("red").unwrap();
        scalar.store(value);

        // Verify
        assert_eq!(
            scalar.enumeration_names(),
            Some(vec!["red".to_string(), "green".to_string(), "blue".to_string()])
        );
        assert!(scalar.value_list().is_some());
        drop(scalar);
        assert_eq!(variable, Colour::Red);
    }

    #[test]
    fn collection_capture() {
        // Setup
        let mut variable: Vec<i64> = vec![9];
        let mut collection = Collection::new(&mut variable);

        // Execute
        assert_eq!(collection.render_initial(), Some("[9]".to_string()));
        for token in ["1", "-2", "3"] {
            let value = collection.convert(token).unwrap();
            collection.store(value);
        }

        // Verify
        assert_eq!(collection.arity(), Arity::List);
        assert_eq!(
            collection.type_label(),
            Some("list of signed 64 bit integer".to_string())
        );
        drop(collection);
        assert_eq!(variable, vec![9, 1, -2, 3]);
    }

    #[test]
    fn collection_enumerated() {
        let mut variable: Vec<Colour> = vec![Colour::Green, Colour::Red];
        let collection = Collection::enumerated(&mut variable);
        assert_eq!(collection.render_initial(), Some("[green, red]".to_string()));
    }

    #[test]
    fn switch_matched() {
        let mut variable = false;
        let mut switch = Switch::new(&mut variable);
        assert!(!switch.initial());
        switch.matched();
        assert!(switch.initial());
        drop(switch);
        assert!(variable);
    }

    #[test]
    #[should_panic]
    fn switch_convert() {
        let mut variable = false;
        let switch = Switch::new(&mut variable);
        let _ = switch.convert("true");
    }
}
