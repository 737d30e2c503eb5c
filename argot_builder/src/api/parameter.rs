use crate::api::{GenericCapturable, InvalidCapture, Switch};
use crate::model::{Arity, Identifier, Visibility};
use crate::parser::{AnonymousCapturable, Descriptor, DescriptorKind};
use crate::validator::{Validator, ValidatorChain};

pub(crate) struct AnonymousCapture<'a, T: 'a> {
    field: Box<dyn GenericCapturable<'a, T> + 'a>,
    validator: Option<Box<dyn Validator<T> + 'a>>,
}

impl<'a, T> AnonymousCapture<'a, T> {
    pub(crate) fn bind(
        field: Box<dyn GenericCapturable<'a, T> + 'a>,
        validator: Option<Box<dyn Validator<T> + 'a>>,
    ) -> Self {
        Self { field, validator }
    }
}

impl<'a, T> AnonymousCapturable for AnonymousCapture<'a, T> {
    fn matched(&mut self) {
        self.field.matched();
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let value = self.field.convert(token)?;

        if let Some(validator) = &self.validator {
            validator
                .validate(&value)
                .map_err(InvalidCapture::Rejected)?;
        }

        self.field.store(value);
        Ok(())
    }
}

pub(crate) struct ParameterInner<'a, T> {
    kind: DescriptorKind,
    field: Box<dyn GenericCapturable<'a, T> + 'a>,
    validator: Option<Box<dyn Validator<T> + 'a>>,
    identifier: Option<Identifier>,
    help: String,
    visibility: Visibility,
    flag_default: bool,
}

impl<'a, T: 'a> ParameterInner<'a, T> {
    fn new(
        kind: DescriptorKind,
        field: impl GenericCapturable<'a, T> + 'a,
        identifier: Option<Identifier>,
    ) -> Self {
        Self {
            kind,
            field: Box::new(field),
            validator: None,
            identifier,
            help: String::default(),
            visibility: Visibility::default(),
            flag_default: false,
        }
    }

    pub(crate) fn kind(&self) -> DescriptorKind {
        self.kind
    }

    pub(crate) fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub(crate) fn arity(&self) -> Arity {
        self.field.arity()
    }

    pub(crate) fn flag_default(&self) -> bool {
        self.flag_default
    }

    pub(crate) fn enumeration_names(&self) -> Option<Vec<String>> {
        self.field.enumeration_names()
    }

    /// Split into the descriptor snapshot and the type-erased capture.
    /// An enumeration's membership constraint precedes the caller's validator.
    pub(crate) fn split(self, name: String) -> (Descriptor, Box<dyn AnonymousCapturable + 'a>) {
        let ParameterInner {
            kind,
            field,
            validator,
            identifier,
            help,
            visibility,
            ..
        } = self;
        let validator: Option<Box<dyn Validator<T> + 'a>> = match (field.value_list(), validator) {
            (Some(list), Some(validator)) => Some(Box::new(ValidatorChain::new(list, validator))),
            (Some(list), None) => Some(Box::new(list)),
            (None, validator) => validator,
        };
        let descriptor = Descriptor::new(
            kind,
            name,
            identifier,
            help,
            visibility,
            field.arity(),
            field.type_label(),
            field.render_initial(),
            validator.as_ref().map(|v| v.describe()),
            field.enumeration_names(),
        );

        (
            descriptor,
            Box::new(AnonymousCapture::bind(field, validator)),
        )
    }
}

impl<'a, T> std::fmt::Debug for ParameterInner<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let identifier = match &self.identifier {
            Some(identifier) => format!(", {identifier}"),
            None => "".to_string(),
        };

        write!(
            f,
            "{kind:?}[{t}, {arity}{identifier}, {visibility:?}]",
            kind = self.kind,
            t = std::any::type_name::<T>(),
            arity = self.field.arity(),
            visibility = self.visibility,
        )
    }
}

/// An option for the command line parser, addressed by an [`Identifier`] and taking values.
/// Used with [`CommandLineParser::add_option`](./struct.CommandLineParser.html#method.add_option).
pub struct Opt<'a, T>(ParameterInner<'a, T>);

impl<'a, T: 'a> Opt<'a, T> {
    /// Create an option parameter.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{Opt, Scalar};
    ///
    /// let mut threads: u32 = 1;
    /// Opt::new(Scalar::new(&mut threads), ('t', "threads"));
    /// ```
    pub fn new(
        field: impl GenericCapturable<'a, T> + 'a,
        identifier: impl Into<Identifier>,
    ) -> Self {
        Self(ParameterInner::new(
            DescriptorKind::Opt,
            field,
            Some(identifier.into()),
        ))
    }

    /// Document the help message for this option.
    /// If repeated, only the final message will apply to the option.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.0.help = description.into();
        self
    }

    /// Set the [`Visibility`] of this option (default: [`Visibility::Standard`]).
    /// A [`Visibility::Required`] option must appear on the command line.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.0.visibility = visibility;
        self
    }

    /// Constrain the values of this option; runs once per occurrence.
    /// If repeated, only the final validator will apply (combine validators with `|`).
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{Opt, RangeValidator, Scalar};
    ///
    /// let mut threads: u32 = 1;
    /// Opt::new(Scalar::new(&mut threads), ('t', "threads"))
    ///     .validator(RangeValidator::new(1, 64));
    /// ```
    pub fn validator(mut self, validator: impl Validator<T> + 'a) -> Self {
        self.0.validator = Some(Box::new(validator));
        self
    }

    pub(crate) fn consume(self) -> ParameterInner<'a, T> {
        self.0
    }
}

/// A presence-only flag for the command line parser.
/// Used with [`CommandLineParser::add_flag`](./struct.CommandLineParser.html#method.add_flag).
///
/// The bound variable must read `false`; it becomes `true` when the flag is present.
pub struct Flag<'a>(ParameterInner<'a, bool>);

impl<'a> Flag<'a> {
    /// Create a flag parameter.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::Flag;
    ///
    /// let mut verbose: bool = false;
    /// Flag::new(&mut verbose, ('v', "verbose"));
    /// ```
    pub fn new(variable: &'a mut bool, identifier: impl Into<Identifier>) -> Self {
        let switch = Switch::new(variable);
        let flag_default = switch.initial();
        let mut inner = ParameterInner::new(DescriptorKind::Flag, switch, Some(identifier.into()));
        inner.flag_default = flag_default;
        Self(inner)
    }

    /// Document the help message for this flag.
    /// If repeated, only the final message will apply to the flag.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.0.help = description.into();
        self
    }

    /// Set the [`Visibility`] of this flag (default: [`Visibility::Standard`]).
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.0.visibility = visibility;
        self
    }

    pub(crate) fn consume(self) -> ParameterInner<'a, bool> {
        self.0
    }
}

/// A positional argument for the command line parser, identified only by its order.
/// Used with [`CommandLineParser::add_positional_option`](./struct.CommandLineParser.html#method.add_positional_option).
///
/// Only the final positional argument may be a list ([`Collection`](crate::Collection)).
pub struct Positional<'a, T>(ParameterInner<'a, T>);

impl<'a, T: 'a> Positional<'a, T> {
    /// Create a positional parameter.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{Positional, Scalar};
    /// use std::path::PathBuf;
    ///
    /// let mut input = PathBuf::default();
    /// Positional::new(Scalar::new(&mut input))
    ///     .help("The input file.");
    /// ```
    pub fn new(field: impl GenericCapturable<'a, T> + 'a) -> Self {
        Self(ParameterInner::new(DescriptorKind::Positional, field, None))
    }

    /// Document the help message for this positional argument.
    /// If repeated, only the final message will apply to the positional argument.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.0.help = description.into();
        self
    }

    /// Set the [`Visibility`] of this positional argument (default: [`Visibility::Standard`]).
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.0.visibility = visibility;
        self
    }

    /// Constrain the values of this positional argument; runs once per token.
    /// If repeated, only the final validator will apply (combine validators with `|`).
    pub fn validator(mut self, validator: impl Validator<T> + 'a) -> Self {
        self.0.validator = Some(Box::new(validator));
        self
    }

    pub(crate) fn consume(self) -> ParameterInner<'a, T> {
        self.0
    }
}
