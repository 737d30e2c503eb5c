use std::collections::HashSet;

use crate::constant::*;
use crate::model::{Arity, Identifier};
use crate::parser::{DesignError, Registry};

/// The program name is embedded verbatim in generated pages: alphanumerics, `-`, and `_` only.
pub(crate) fn check_program(program: &str) -> Result<(), DesignError> {
    if program.is_empty()
        || !program
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(DesignError::InvalidProgramName(program.to_string()));
    }

    Ok(())
}

/// Subcommand keywords are alphanumeric only; repeats collapse, preserving the first occurrence.
pub(crate) fn check_subcommands(
    keywords: impl IntoIterator<Item = impl Into<String>>,
) -> Result<Vec<String>, DesignError> {
    let mut seen = HashSet::new();
    let mut out = Vec::default();

    for keyword in keywords.into_iter().map(Into::into) {
        if keyword.is_empty() || !keyword.chars().all(char::is_alphanumeric) {
            return Err(DesignError::InvalidSubcommand(keyword));
        }

        if seen.insert(keyword.clone()) {
            out.push(keyword);
        }
    }

    Ok(out)
}

/// Check an option or flag identifier against the identifiers and keywords already in the registry.
pub(crate) fn check_identifier(
    registry: &Registry,
    identifier: &Identifier,
) -> Result<(), DesignError> {
    if identifier.is_empty() {
        return Err(DesignError::EmptyIdentifier);
    }

    if let Some(short) = identifier.short() {
        if short == HELP_SHORT || short.is_whitespace() || short.is_control() {
            return Err(DesignError::InvalidShortIdentifier(short));
        }

        if registry.find_short(short).is_some() {
            return Err(DesignError::DuplicateIdentifier(format!("-{short}")));
        }

        if registry
            .subcommands()
            .iter()
            .any(|keyword| keyword.chars().eq(std::iter::once(short)))
        {
            return Err(DesignError::SubcommandCollision(short.to_string()));
        }
    }

    if let Some(long) = identifier.long() {
        check_long(long)?;

        if registry.find_long(long).is_some() {
            return Err(DesignError::DuplicateIdentifier(format!("--{long}")));
        }

        if registry.subcommands().iter().any(|keyword| keyword == long) {
            return Err(DesignError::SubcommandCollision(long.to_string()));
        }
    }

    Ok(())
}

fn check_long(long: &str) -> Result<(), DesignError> {
    let invalid = |reason: &str| DesignError::InvalidLongIdentifier {
        long: long.to_string(),
        reason: reason.to_string(),
    };

    if long.chars().count() == 1 {
        return Err(invalid("it must not be a single character"));
    }

    if long.starts_with('-') {
        return Err(invalid("it must not start with '-'"));
    }

    if !long.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(invalid("only alphanumeric characters and '-' are allowed"));
    }

    if RESERVED_LONGS.contains(&long) {
        return Err(DesignError::ReservedIdentifier(long.to_string()));
    }

    Ok(())
}

/// Presence-only flags cannot express a `true` default.
pub(crate) fn check_flag_default(name: &str, flag_default: bool) -> Result<(), DesignError> {
    if flag_default {
        Err(DesignError::FlagDefaultTrue(name.to_string()))
    } else {
        Ok(())
    }
}

/// No positional arguments on a parser with subcommands, and nothing after a list positional argument.
pub(crate) fn check_positional(registry: &Registry) -> Result<(), DesignError> {
    if registry.is_top_level() {
        return Err(DesignError::PositionalWithSubcommands);
    }

    if registry.has_list_positional() {
        return Err(DesignError::PositionalAfterList);
    }

    Ok(())
}

/// Enumeration names are matched exactly, so they must be distinct.
pub(crate) fn check_enumeration(names: Option<&[String]>) -> Result<(), DesignError> {
    let mut seen = HashSet::new();

    match names
        .unwrap_or_default()
        .iter()
        .find(|name| !seen.insert(name.as_str()))
    {
        Some(name) => Err(DesignError::DuplicateEnumerationName(name.clone())),
        None => Ok(()),
    }
}

/// Positional arguments are named by their 1-based position (ex: `ARGUMENT-1`).
pub(crate) fn positional_name(registry: &Registry) -> String {
    format!("{POSITIONAL_PREFIX}-{}", registry.positional_count() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Visibility;
    use crate::parser::test::BlackHole;
    use crate::parser::{Descriptor, DescriptorKind};
    use rstest::rstest;

    fn registry(subcommands: &[&str], identifiers: Vec<Identifier>) -> Registry<'static> {
        let mut registry = Registry::new(subcommands.iter().map(|s| s.to_string()).collect());

        for identifier in identifiers {
            registry.insert(
                Descriptor::new(
                    DescriptorKind::Flag,
                    identifier.to_string(),
                    Some(identifier),
                    String::default(),
                    Visibility::Standard,
                    Arity::Single,
                    None,
                    None,
                    None,
                    None,
                ),
                Box::new(BlackHole::default()),
            );
        }

        registry
    }

    fn positional(registry: &mut Registry, arity: Arity, visibility: Visibility) {
        let name = positional_name(registry);
        registry.insert(
            Descriptor::new(
                DescriptorKind::Positional,
                name,
                None,
                String::default(),
                visibility,
                arity,
                None,
                None,
                None,
                None,
            ),
            Box::new(BlackHole::default()),
        );
    }

    #[rstest]
    #[case("program")]
    #[case("my-program")]
    #[case("my_program2")]
    #[case("prögram")]
    fn program_valid(#[case] program: &str) {
        assert_eq!(check_program(program), Ok(()));
    }

    #[rstest]
    #[case("")]
    #[case("my program")]
    #[case("./program")]
    #[case("program!")]
    #[case("pro\tgram")]
    fn program_invalid(#[case] program: &str) {
        assert_eq!(
            check_program(program),
            Err(DesignError::InvalidProgramName(program.to_string()))
        );
    }

    #[test]
    fn subcommands() {
        assert_eq!(
            check_subcommands(["sub1", "Sub2", "sub1"]),
            Ok(vec!["sub1".to_string(), "Sub2".to_string()])
        );
        assert_eq!(check_subcommands(Vec::<String>::default()), Ok(vec![]));
    }

    #[rstest]
    #[case("")]
    #[case("sub-1")]
    #[case("sub 1")]
    #[case("sub_1")]
    #[case("sub\n")]
    fn subcommands_invalid(#[case] keyword: &str) {
        assert_eq!(
            check_subcommands(["valid", keyword]),
            Err(DesignError::InvalidSubcommand(keyword.to_string()))
        );
    }

    #[rstest]
    #[case(Identifier::new('i', "int"))]
    #[case(Identifier::from('i'))]
    #[case(Identifier::from("int"))]
    #[case(Identifier::from("in"))]
    #[case(Identifier::from("int-2"))]
    #[case(Identifier::from('H'))]
    #[case(Identifier::from('?'))]
    #[case(Identifier::from('5'))]
    #[case(Identifier::from("helper"))]
    fn identifier_valid(#[case] identifier: Identifier) {
        let registry = registry(&[], vec![Identifier::new('x', "existing")]);
        assert_eq!(check_identifier(&registry, &identifier), Ok(()));
    }

    #[rstest]
    #[case(Identifier::new(None, ""), DesignError::EmptyIdentifier)]
    #[case(Identifier::from('h'), DesignError::InvalidShortIdentifier('h'))]
    #[case(Identifier::new('h', "hat"), DesignError::InvalidShortIdentifier('h'))]
    #[case(Identifier::from(' '), DesignError::InvalidShortIdentifier(' '))]
    #[case(Identifier::from('\t'), DesignError::InvalidShortIdentifier('\t'))]
    #[case(Identifier::from('\u{7}'), DesignError::InvalidShortIdentifier('\u{7}'))]
    #[case(Identifier::from('x'), DesignError::DuplicateIdentifier("-x".to_string()))]
    #[case(Identifier::new('y', "existing"), DesignError::DuplicateIdentifier("--existing".to_string()))]
    #[case(Identifier::new('x', "other"), DesignError::DuplicateIdentifier("-x".to_string()))]
    #[case(Identifier::from("help"), DesignError::ReservedIdentifier("help".to_string()))]
    #[case(Identifier::from("advanced-help"), DesignError::ReservedIdentifier("advanced-help".to_string()))]
    #[case(Identifier::from("export-help"), DesignError::ReservedIdentifier("export-help".to_string()))]
    #[case(Identifier::from("version"), DesignError::ReservedIdentifier("version".to_string()))]
    #[case(Identifier::from("copyright"), DesignError::ReservedIdentifier("copyright".to_string()))]
    #[case(Identifier::from("version-check"), DesignError::ReservedIdentifier("version-check".to_string()))]
    fn identifier_invalid(#[case] identifier: Identifier, #[case] expected: DesignError) {
        let registry = registry(&[], vec![Identifier::new('x', "existing")]);
        assert_eq!(check_identifier(&registry, &identifier), Err(expected));
    }

    #[rstest]
    #[case("i")]
    #[case("-int")]
    #[case("--int")]
    #[case("in t")]
    #[case("in_t")]
    #[case("int=")]
    #[case("in.t")]
    fn identifier_invalid_long(#[case] long: &str) {
        let registry = registry(&[], vec![]);
        assert_matches!(
            check_identifier(&registry, &Identifier::from(long)),
            Err(DesignError::InvalidLongIdentifier { long: l, .. }) if l == long
        );
    }

    #[rstest]
    #[case(Identifier::from("sub1"), "sub1")]
    #[case(Identifier::new('s', "sub2"), "sub2")]
    #[case(Identifier::from('1'), "1")]
    fn identifier_subcommand(#[case] identifier: Identifier, #[case] keyword: &str) {
        let registry = registry(&["sub1", "sub2", "1"], vec![]);
        assert_eq!(
            check_identifier(&registry, &identifier),
            Err(DesignError::SubcommandCollision(keyword.to_string()))
        );
    }

    #[test]
    fn flag_default() {
        assert_eq!(check_flag_default("-f", false), Ok(()));
        assert_eq!(
            check_flag_default("-f", true),
            Err(DesignError::FlagDefaultTrue("-f".to_string()))
        );
    }

    #[rstest]
    #[case(Visibility::Required)]
    #[case(Visibility::Standard)]
    #[case(Visibility::Advanced)]
    #[case(Visibility::Hidden)]
    fn positional_after_list(#[case] visibility: Visibility) {
        // Setup
        let mut registry = registry(&[], vec![]);
        assert_eq!(check_positional(&registry), Ok(()));
        positional(&mut registry, Arity::Single, Visibility::Standard);
        assert_eq!(check_positional(&registry), Ok(()));
        positional(&mut registry, Arity::List, visibility);

        // Execute
        let result = check_positional(&registry);

        // Verify
        assert_eq!(result, Err(DesignError::PositionalAfterList));
    }

    #[test]
    fn positional_top_level() {
        let registry = registry(&["sub1"], vec![]);
        assert_eq!(
            check_positional(&registry),
            Err(DesignError::PositionalWithSubcommands)
        );
    }

    #[test]
    fn positional_names() {
        let mut registry = registry(&[], vec![Identifier::from('x')]);
        assert_eq!(positional_name(&registry), "ARGUMENT-1");
        positional(&mut registry, Arity::Single, Visibility::Hidden);
        assert_eq!(positional_name(&registry), "ARGUMENT-2");
    }

    #[rstest]
    #[case(None, Ok(()))]
    #[case(Some(vec!["a", "b"]), Ok(()))]
    #[case(Some(vec![]), Ok(()))]
    #[case(Some(vec!["a", "b", "a"]), Err(DesignError::DuplicateEnumerationName("a".to_string())))]
    fn enumeration(#[case] names: Option<Vec<&str>>, #[case] expected: Result<(), DesignError>) {
        let names: Option<Vec<String>> =
            names.map(|names| names.into_iter().map(str::to_string).collect());
        assert_eq!(check_enumeration(names.as_deref()), expected);
    }
}
