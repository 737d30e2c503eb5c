use std::collections::HashMap;

use crate::matcher::{ArgumentConfig, OptionConfig};
use crate::model::{Arity, Identifier, Visibility};
use crate::parser::AnonymousCapturable;

/// The class of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// An option, taking values.
    Opt,
    /// A presence-only flag.
    Flag,
    /// A positional argument.
    Positional,
}

/// The snapshot of one declared option, flag, or positional argument.
///
/// Handed to the [`Renderer`](crate::Renderer) as part of the [`HelpPage`](crate::HelpPage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    kind: DescriptorKind,
    name: String,
    identifier: Option<Identifier>,
    description: String,
    visibility: Visibility,
    arity: Arity,
    type_label: Option<String>,
    default: Option<String>,
    constraint: Option<String>,
    choices: Option<Vec<String>>,
}

impl Descriptor {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        kind: DescriptorKind,
        name: String,
        identifier: Option<Identifier>,
        description: String,
        visibility: Visibility,
        arity: Arity,
        type_label: Option<String>,
        default: Option<String>,
        constraint: Option<String>,
        choices: Option<Vec<String>>,
    ) -> Self {
        Self {
            kind,
            name,
            identifier,
            description,
            visibility,
            arity,
            type_label,
            default,
            constraint,
            choices,
        }
    }

    /// The class of the parameter.
    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    /// The display name: the identifier for options and flags (ex: `-i/--int`), `ARGUMENT-<n>` for positional arguments.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identifier of an option or flag.
    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    /// The help message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The help page exposure.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the bound variable takes one value or a list.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// The human readable type of the bound variable (`None` for flags).
    pub fn type_label(&self) -> Option<&str> {
        self.type_label.as_deref()
    }

    /// The rendering of the bound variable as it was at registration (`None` for flags).
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The `describe()` fragment of the attached validators.
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    /// The legal names, for an [`Enumeration`](crate::prelude::Enumeration) type, in mapping order.
    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }
}

/// Every declared descriptor with its type-erased capture, indexed by identifier and position.
pub(crate) struct Registry<'a> {
    descriptors: Vec<Descriptor>,
    // We need a (dyn .. [ignoring T] ..) here in order to put all the fields of varying types T under one collection.
    captures: Vec<Box<dyn AnonymousCapturable + 'a>>,
    shorts: HashMap<char, usize>,
    longs: HashMap<String, usize>,
    positionals: Vec<usize>,
    subcommands: Vec<String>,
}

impl<'a> std::fmt::Debug for Registry<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("descriptors", &self.descriptors)
            .field("subcommands", &self.subcommands)
            .finish()
    }
}

impl<'a> Registry<'a> {
    pub(crate) fn new(subcommands: Vec<String>) -> Self {
        Self {
            descriptors: Vec::default(),
            captures: Vec::default(),
            shorts: HashMap::default(),
            longs: HashMap::default(),
            positionals: Vec::default(),
            subcommands,
        }
    }

    /// Insert an already design-checked descriptor, returning its index.
    pub(crate) fn insert(
        &mut self,
        descriptor: Descriptor,
        capture: Box<dyn AnonymousCapturable + 'a>,
    ) -> usize {
        let index = self.descriptors.len();

        if let Some(identifier) = descriptor.identifier() {
            if let Some(short) = identifier.short() {
                self.shorts.insert(short, index);
            }

            if let Some(long) = identifier.long() {
                self.longs.insert(long.to_string(), index);
            }
        }

        if descriptor.kind() == DescriptorKind::Positional {
            self.positionals.push(index);
        }

        self.descriptors.push(descriptor);
        self.captures.push(capture);
        index
    }

    pub(crate) fn find_short(&self, short: char) -> Option<&Descriptor> {
        self.shorts.get(&short).map(|index| &self.descriptors[*index])
    }

    pub(crate) fn find_long(&self, long: &str) -> Option<&Descriptor> {
        self.longs.get(long).map(|index| &self.descriptors[*index])
    }

    pub(crate) fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub(crate) fn subcommands(&self) -> &[String] {
        &self.subcommands
    }

    pub(crate) fn is_top_level(&self) -> bool {
        !self.subcommands.is_empty()
    }

    pub(crate) fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    /// Whether a list positional argument has been declared (it must be the final one).
    pub(crate) fn has_list_positional(&self) -> bool {
        self.positionals
            .iter()
            .any(|index| self.descriptors[*index].arity() == Arity::List)
    }

    /// The option/flag lookup tables and the positional slots, for the matcher.
    pub(crate) fn configs(&self) -> (Vec<OptionConfig>, Vec<ArgumentConfig>) {
        let options = self
            .descriptors
            .iter()
            .enumerate()
            .filter_map(|(index, descriptor)| {
                descriptor.identifier().map(|identifier| {
                    OptionConfig::new(
                        index,
                        identifier.clone(),
                        descriptor.kind() == DescriptorKind::Opt,
                    )
                })
            })
            .collect();
        let arguments = self
            .positionals
            .iter()
            .map(|index| {
                ArgumentConfig::new(
                    *index,
                    self.descriptors[*index].name().to_string(),
                    self.descriptors[*index].arity(),
                )
            })
            .collect();
        (options, arguments)
    }

    pub(crate) fn into_parts(self) -> (Vec<Descriptor>, Vec<Box<dyn AnonymousCapturable + 'a>>) {
        (self.descriptors, self.captures)
    }
}
