use std::collections::HashMap;

use crate::constant::*;
use crate::matcher::api::*;
use crate::matcher::model::*;
use crate::model::{ExportFormat, MetaRequest};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An option which still awaits its value (ex: `--int` in `--int 5`).
#[derive(Debug)]
struct Pending {
    target: Target,
    name: String,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    index: usize,
    takes_value: bool,
}

#[derive(Debug)]
pub(crate) struct TokenMatcher {
    shorts: HashMap<char, Entry>,
    longs: HashMap<String, Entry>,
    names: HashMap<usize, String>,
    slots: PositionalSlots,
    subcommands: Vec<String>,
    options_ended: bool,
    pending: Option<Pending>,
    matches: Vec<MatchTokens>,
    dispatch: Option<String>,
}

impl TokenMatcher {
    pub(crate) fn new(
        options: Vec<OptionConfig>,
        arguments: Vec<ArgumentConfig>,
        subcommands: Vec<String>,
    ) -> Self {
        let mut shorts = HashMap::default();
        let mut longs = HashMap::default();
        let mut names = HashMap::default();

        for option_config in options.into_iter() {
            let entry = Entry {
                index: option_config.index(),
                takes_value: option_config.takes_value(),
            };
            let identifier = option_config.identifier();

            if let Some(short) = identifier.short() {
                shorts.insert(short, entry);
            }

            if let Some(long) = identifier.long() {
                longs.insert(long.to_string(), entry);
            }

            names.insert(option_config.index(), identifier.to_string());
        }

        Self {
            shorts,
            longs,
            names,
            slots: PositionalSlots::new(arguments),
            subcommands,
            options_ended: false,
            pending: None,
            matches: Vec::default(),
            dispatch: None,
        }
    }

    /// Whether a subcommand keyword has been matched; no further token belongs to this matcher.
    pub(crate) fn is_dispatched(&self) -> bool {
        self.dispatch.is_some()
    }

    pub(crate) fn feed(&mut self, token: &str) -> Result<(), MatchError> {
        if self.is_dispatched() {
            unreachable!("internal error - cannot feed tokens after the subcommand");
        }

        // 1. A pending option takes the token as its value, whatever it looks like.
        if let Some(Pending { target, .. }) = self.pending.take() {
            self.matches.push(MatchTokens::value(target, token));
            return Ok(());
        }

        if self.options_ended {
            return self.match_argument(token);
        }

        if token == END_OF_OPTIONS {
            self.options_ended = true;
            return Ok(());
        }

        // 2. Find a 'long' option/flag, such as:
        //  --initial
        //  --initial ..
        //  --initial=..
        // 3. Find 'short' option/flag(s), such as (both -i and -v are example short identifiers):
        //  -v
        //  -i..
        //  -i ..
        //  -vi..
        //  -vi ..
        // 4. Match against a positional argument or subcommand.
        if let Some(long) = token.strip_prefix("--") {
            self.match_option(long, token)
        } else if let Some(cluster) = token.strip_prefix('-') {
            if self.is_short_cluster(cluster) {
                self.match_option_short(cluster)
            } else {
                self.match_argument(token)
            }
        } else {
            self.match_argument(token)
        }
    }

    /// A lone `-`, or a negative number not starting with a registered short identifier, is positional.
    fn is_short_cluster(&self, cluster: &str) -> bool {
        match cluster.chars().next() {
            Some(first) => self.shorts.contains_key(&first) || !is_negative_number(cluster),
            None => false,
        }
    }

    /// The tokens which belong to this parser for the meta check.
    ///
    /// Walks the tokens as `feed` would, and cuts the region at the subcommand keyword it dispatches on.
    /// A keyword consumed as an option's value (ex: `--name sub1`) stays inside the region.
    pub(crate) fn meta_region<'t>(&self, tokens: &'t [String]) -> &'t [String] {
        if self.subcommands.is_empty() {
            return tokens;
        }

        let mut pending = false;

        for (position, token) in tokens.iter().enumerate() {
            if pending {
                pending = false;
                continue;
            }

            if token == END_OF_OPTIONS {
                // The meta check ends here regardless.
                break;
            }

            if let Some(long) = token.strip_prefix("--") {
                let (name, attached) = split_equals_delimiter(long);
                pending = attached.is_none()
                    && (name == VERSION_CHECK_LONG
                        || name == EXPORT_HELP_LONG
                        || matches!(self.longs.get(name), Some(Entry { takes_value: true, .. })));
            } else if let Some(cluster) = token
                .strip_prefix('-')
                .filter(|cluster| self.is_short_cluster(cluster))
            {
                pending = self.awaits_value(cluster);
            } else if self.subcommands.iter().any(|keyword| keyword == token) {
                return &tokens[..position];
            }
        }

        tokens
    }

    /// Whether a short cluster ends with a value-taking identifier, whose value is the next token.
    fn awaits_value(&self, cluster: &str) -> bool {
        for (position, single) in cluster.char_indices() {
            match self.shorts.get(&single) {
                Some(Entry {
                    takes_value: true, ..
                }) => return position + single.len_utf8() == cluster.len(),
                Some(Entry {
                    takes_value: false, ..
                }) => {}
                None => return false,
            }
        }

        false
    }

    fn match_option(&mut self, long: &str, token: &str) -> Result<(), MatchError> {
        let (name, attached) = split_equals_delimiter(long);

        let target = if name == VERSION_CHECK_LONG {
            Target::VersionCheck
        } else {
            match self.longs.get(name) {
                Some(Entry {
                    index,
                    takes_value: true,
                }) => Target::Descriptor(*index),
                Some(Entry {
                    index,
                    takes_value: false,
                }) => {
                    // Flags cannot take values.
                    if attached.is_some() {
                        return Err(MatchError::UnknownOption(token.to_string()));
                    }

                    self.matches.push(MatchTokens::flag(*index));
                    return Ok(());
                }
                None => return Err(MatchError::UnknownOption(format!("--{name}"))),
            }
        };

        match attached {
            Some(value) => self.matches.push(MatchTokens::value(target, value)),
            None => {
                let name = match target {
                    Target::Descriptor(index) => self.names[&index].clone(),
                    Target::VersionCheck => format!("--{VERSION_CHECK_LONG}"),
                };
                self.pending = Some(Pending { target, name });
            }
        }

        Ok(())
    }

    fn match_option_short(&mut self, cluster: &str) -> Result<(), MatchError> {
        for (position, single) in cluster.char_indices() {
            match self.shorts.get(&single) {
                Some(Entry {
                    index,
                    takes_value: true,
                }) => {
                    // The remainder of the cluster, if any, is the value.
                    let remainder = &cluster[position + single.len_utf8()..];

                    if remainder.is_empty() {
                        self.pending = Some(Pending {
                            target: Target::Descriptor(*index),
                            name: self.names[index].clone(),
                        });
                    } else {
                        self.matches
                            .push(MatchTokens::value(Target::Descriptor(*index), remainder));
                    }

                    return Ok(());
                }
                Some(Entry {
                    index,
                    takes_value: false,
                }) => {
                    self.matches.push(MatchTokens::flag(*index));
                }
                None => return Err(MatchError::UnknownOption(format!("-{single}"))),
            }
        }

        Ok(())
    }

    fn match_argument(&mut self, token: &str) -> Result<(), MatchError> {
        if !self.subcommands.is_empty() {
            return if self.subcommands.iter().any(|keyword| keyword == token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched subcommand '{token}'.");
                }

                self.dispatch = Some(token.to_string());
                Ok(())
            } else {
                Err(MatchError::UnknownSubcommand {
                    token: token.to_string(),
                    choices: self.subcommands.clone(),
                })
            };
        }

        match self.slots.next() {
            Some(index) => {
                self.matches
                    .push(MatchTokens::value(Target::Descriptor(index), token));
                Ok(())
            }
            None => Err(MatchError::ArgumentsExhausted(token.to_string())),
        }
    }

    pub(crate) fn close(self) -> Result<Matches, MatchError> {
        if let Some(Pending { name, .. }) = self.pending {
            return Err(MatchError::MissingValue(name));
        }

        if !self.subcommands.is_empty() && self.dispatch.is_none() {
            return Err(MatchError::MissingSubcommand(self.subcommands));
        }

        if let Some(name) = self.slots.unfilled() {
            return Err(MatchError::MissingArgument(name.to_string()));
        }

        Ok(Matches {
            values: self.matches,
            dispatch: self.dispatch,
        })
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

/// A number such as `5`, `0.5`, or `.5`; but not `nan` or `inf`, which read as short identifiers.
fn is_negative_number(cluster: &str) -> bool {
    let mut chars = cluster.chars();
    let leading = match chars.next() {
        Some('.') => chars.next(),
        first => first,
    };

    leading.map_or(false, |digit| digit.is_ascii_digit()) && cluster.parse::<f64>().is_ok()
}

/// Find the first reserved meta token, in token order, up to the end of options (`--`).
pub(crate) fn find_meta(tokens: &[String]) -> Result<Option<MetaRequest>, MatchError> {
    let export_help = format!("--{EXPORT_HELP_LONG}");

    for (position, token) in tokens.iter().enumerate() {
        let token = token.as_str();

        if token == END_OF_OPTIONS {
            break;
        }

        let request = match token.strip_prefix("--") {
            Some(HELP_LONG) => Some(MetaRequest::Help),
            Some(ADVANCED_HELP_LONG) => Some(MetaRequest::AdvancedHelp),
            Some(VERSION_LONG) => Some(MetaRequest::Version),
            Some(COPYRIGHT_LONG) => Some(MetaRequest::Copyright),
            Some(long) => match split_equals_delimiter(long) {
                (EXPORT_HELP_LONG, attached) => {
                    let format = match attached {
                        Some(format) => format,
                        None => match tokens.get(position + 1) {
                            Some(format) => format.as_str(),
                            None => return Err(MatchError::MissingValue(export_help)),
                        },
                    };

                    match ExportFormat::from_token(format) {
                        Some(format) => Some(MetaRequest::Export(format)),
                        None => return Err(MatchError::InvalidExportFormat(format.to_string())),
                    }
                }
                _ => None,
            },
            None => match token.strip_prefix('-') {
                Some(short) if short.len() == 1 && short.starts_with(HELP_SHORT) => {
                    Some(MetaRequest::Help)
                }
                Some(ADVANCED_HELP_SHORT) => Some(MetaRequest::AdvancedHelp),
                _ => None,
            },
        };

        if request.is_some() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Found meta token '{token}': {request:?}.");
            }

            return Ok(request);
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Arity, Identifier};
    use rstest::rstest;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    fn matcher(arguments: Vec<ArgumentConfig>) -> TokenMatcher {
        TokenMatcher::new(
            vec![
                OptionConfig::new(0, Identifier::new('i', "int"), true),
                OptionConfig::new(1, Identifier::new('f', "flag"), false),
                OptionConfig::new(2, Identifier::from('g'), false),
                OptionConfig::new(3, Identifier::from("name"), true),
            ],
            arguments,
            Vec::default(),
        )
    }

    fn feed_all(token_matcher: &mut TokenMatcher, tokens: &[&str]) -> Result<(), MatchError> {
        for token in tokens {
            token_matcher.feed(token)?;
        }

        Ok(())
    }

    fn value(index: usize, value: &str) -> MatchTokens {
        MatchTokens::value(Target::Descriptor(index), value)
    }

    #[test]
    fn matcher_empty() {
        // Setup
        let token_matcher = TokenMatcher::new(vec![], vec![], vec![]);

        // Execute
        let matches = token_matcher.close().unwrap();

        // Verify
        assert_eq!(matches.values, vec![]);
        assert_eq!(matches.dispatch, None);
    }

    #[rstest]
    #[case(vec!["--int", "5"], "5")]
    #[case(vec!["--int=5"], "5")]
    #[case(vec!["--int="], "")]
    #[case(vec!["--int=a=b"], "a=b")]
    #[case(vec!["-i", "5"], "5")]
    #[case(vec!["-i5"], "5")]
    #[case(vec!["-i=5"], "=5")]
    #[case(vec!["-i", "-5"], "-5")]
    #[case(vec!["--int", "--flag"], "--flag")]
    #[case(vec!["-i", "--"], "--")]
    fn match_option(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let mut token_matcher = matcher(vec![]);

        // Execute
        feed_all(&mut token_matcher, &tokens).unwrap();
        let matches = token_matcher.close().unwrap();

        // Verify
        assert_eq!(matches.values, vec![value(0, expected)]);
    }

    #[rstest]
    #[case(vec!["--flag"], vec![1])]
    #[case(vec!["-f"], vec![1])]
    #[case(vec!["-fg"], vec![1, 2])]
    #[case(vec!["-gf"], vec![2, 1])]
    #[case(vec!["-f", "-f"], vec![1, 1])]
    #[case(vec!["-ff"], vec![1, 1])]
    fn match_flag(#[case] tokens: Vec<&str>, #[case] expected: Vec<usize>) {
        // Setup
        let mut token_matcher = matcher(vec![]);

        // Execute
        feed_all(&mut token_matcher, &tokens).unwrap();
        let matches = token_matcher.close().unwrap();

        // Verify
        assert_eq!(
            matches.values,
            expected
                .into_iter()
                .map(MatchTokens::flag)
                .collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[case(vec!["-fgi", "5"])]
    #[case(vec!["-fgi5"])]
    fn match_cluster(#[case] tokens: Vec<&str>) {
        // Setup
        let mut token_matcher = matcher(vec![]);

        // Execute
        feed_all(&mut token_matcher, &tokens).unwrap();
        let matches = token_matcher.close().unwrap();

        // Verify
        assert_eq!(
            matches.values,
            vec![MatchTokens::flag(1), MatchTokens::flag(2), value(0, "5")]
        );
    }

    #[test]
    fn match_cluster_remainder() {
        // Everything after the value-taking character is its value, including other identifiers.
        let mut token_matcher = matcher(vec![]);
        token_matcher.feed("-ifg").unwrap();
        let matches = token_matcher.close().unwrap();
        assert_eq!(matches.values, vec![value(0, "fg")]);
    }

    #[rstest]
    #[case(vec!["--other"], "--other")]
    #[case(vec!["--other=1"], "--other")]
    #[case(vec!["--flag=1"], "--flag=1")]
    #[case(vec!["-x"], "-x")]
    #[case(vec!["-fx"], "-x")]
    #[case(vec!["-h"], "-h")]
    #[case(vec!["--i"], "--i")]
    #[case(vec!["-nan"], "-n")]
    #[case(vec!["-NaN"], "-N")]
    #[case(vec!["-Inf"], "-I")]
    fn match_unknown(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let mut token_matcher = matcher(vec![]);

        // Execute
        let result = feed_all(&mut token_matcher, &tokens);

        // Verify
        assert_eq!(result, Err(MatchError::UnknownOption(expected.to_string())));
    }

    #[rstest]
    #[case(vec!["--int"], "-i/--int")]
    #[case(vec!["-i"], "-i/--int")]
    #[case(vec!["--version-check"], "--version-check")]
    #[case(vec!["-fi"], "-i/--int")]
    #[case(vec!["--name"], "--name")]
    fn match_missing_value(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let mut token_matcher = matcher(vec![]);
        feed_all(&mut token_matcher, &tokens).unwrap();

        // Execute
        let result = token_matcher.close();

        // Verify
        assert_eq!(result, Err(MatchError::MissingValue(expected.to_string())));
    }

    #[rstest]
    #[case(vec!["a"], vec!["a"])]
    #[case(vec!["a", "b", "c"], vec!["a", "b", "c"])]
    #[case(vec!["-"], vec!["-"])]
    #[case(vec!["-5"], vec!["-5"])]
    #[case(vec!["-0.5"], vec!["-0.5"])]
    #[case(vec!["-.5"], vec!["-.5"])]
    #[case(vec!["--", "-f", "--int"], vec!["-f", "--int"])]
    #[case(vec!["--", "--"], vec!["--"])]
    #[case(vec!["a", "-f", "b"], vec!["a", "b"])]
    fn match_argument_list(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let mut token_matcher = matcher(vec![ArgumentConfig::new(4, "ARGUMENT-1", Arity::List)]);

        // Execute
        feed_all(&mut token_matcher, &tokens).unwrap();
        let matches = token_matcher.close().unwrap();

        // Verify
        let positionals: Vec<&str> = matches
            .values
            .iter()
            .filter(|match_tokens| match_tokens.target == Target::Descriptor(4))
            .filter_map(|match_tokens| match_tokens.value.as_deref())
            .collect();
        assert_eq!(positionals, expected);
    }

    #[test]
    fn match_argument_list_empty() {
        let token_matcher = matcher(vec![ArgumentConfig::new(4, "ARGUMENT-1", Arity::List)]);
        assert_eq!(token_matcher.close().unwrap().values, vec![]);
    }

    #[test]
    fn match_negative_short() {
        // A registered short identifier wins over the negative number reading.
        let mut token_matcher = TokenMatcher::new(
            vec![OptionConfig::new(0, Identifier::from('5'), false)],
            vec![ArgumentConfig::new(1, "ARGUMENT-1", Arity::List)],
            vec![],
        );
        feed_all(&mut token_matcher, &["-5", "-6"]).unwrap();
        let matches = token_matcher.close().unwrap();
        assert_eq!(matches.values, vec![MatchTokens::flag(0), value(1, "-6")]);
    }

    #[rstest]
    #[case(vec![], Err(MatchError::MissingArgument("ARGUMENT-1".to_string())))]
    #[case(vec!["a"], Err(MatchError::MissingArgument("ARGUMENT-2".to_string())))]
    #[case(vec!["a", "b"], Ok(vec![value(4, "a"), value(5, "b")]))]
    fn match_argument_single(
        #[case] tokens: Vec<&str>,
        #[case] expected: Result<Vec<MatchTokens>, MatchError>,
    ) {
        // Setup
        let mut token_matcher = matcher(vec![
            ArgumentConfig::new(4, "ARGUMENT-1", Arity::Single),
            ArgumentConfig::new(5, "ARGUMENT-2", Arity::Single),
        ]);
        feed_all(&mut token_matcher, &tokens).unwrap();

        // Execute
        let result = token_matcher.close().map(|matches| matches.values);

        // Verify
        assert_eq!(result, expected);
    }

    #[test]
    fn match_argument_exhausted() {
        // Setup
        let mut token_matcher = matcher(vec![ArgumentConfig::new(4, "ARGUMENT-1", Arity::Single)]);
        token_matcher.feed("a").unwrap();

        // Execute
        let result = token_matcher.feed("b");

        // Verify
        assert_eq!(result, Err(MatchError::ArgumentsExhausted("b".to_string())));
    }

    #[test]
    fn match_argument_none() {
        let mut token_matcher = matcher(vec![]);
        assert_eq!(
            token_matcher.feed("a"),
            Err(MatchError::ArgumentsExhausted("a".to_string()))
        );
    }

    #[rstest]
    #[case(vec!["--version-check", "false"], "false")]
    #[case(vec!["--version-check=true"], "true")]
    #[case(vec!["--version-check", "maybe"], "maybe")]
    fn match_version_check(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let mut token_matcher = matcher(vec![]);

        // Execute
        feed_all(&mut token_matcher, &tokens).unwrap();
        let matches = token_matcher.close().unwrap();

        // Verify
        assert_eq!(
            matches.values,
            vec![MatchTokens::value(Target::VersionCheck, expected)]
        );
    }

    #[rstest]
    #[case(vec!["sub1"], vec![])]
    #[case(vec!["-f", "sub2"], vec![MatchTokens::flag(1)])]
    #[case(vec!["--int", "sub1", "sub1"], vec![value(0, "sub1")])]
    #[case(vec!["--", "sub1"], vec![])]
    fn match_subcommand(#[case] tokens: Vec<&str>, #[case] expected: Vec<MatchTokens>) {
        // Setup
        let mut token_matcher = TokenMatcher::new(
            vec![
                OptionConfig::new(0, Identifier::new('i', "int"), true),
                OptionConfig::new(1, Identifier::from('f'), false),
            ],
            vec![],
            strings(&["sub1", "sub2"]),
        );

        // Execute
        for token in &tokens {
            token_matcher.feed(token).unwrap();

            if token_matcher.is_dispatched() {
                break;
            }
        }
        let matches = token_matcher.close().unwrap();

        // Verify
        assert_eq!(matches.values, expected);
        assert!(matches.dispatch.is_some());
    }

    #[rstest]
    #[case(vec!["sub3"], MatchError::UnknownSubcommand { token: "sub3".to_string(), choices: strings(&["sub1", "sub2"]) })]
    #[case(vec!["SUB1"], MatchError::UnknownSubcommand { token: "SUB1".to_string(), choices: strings(&["sub1", "sub2"]) })]
    fn match_subcommand_unknown(#[case] tokens: Vec<&str>, #[case] expected: MatchError) {
        let mut token_matcher = TokenMatcher::new(vec![], vec![], strings(&["sub1", "sub2"]));
        assert_eq!(feed_all(&mut token_matcher, &tokens), Err(expected));
    }

    #[test]
    fn match_subcommand_missing() {
        let token_matcher = TokenMatcher::new(vec![], vec![], strings(&["sub1", "sub2"]));
        assert_eq!(
            token_matcher.close(),
            Err(MatchError::MissingSubcommand(strings(&["sub1", "sub2"])))
        );
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec!["-h"], Some(MetaRequest::Help))]
    #[case(vec!["--help"], Some(MetaRequest::Help))]
    #[case(vec!["-hh"], Some(MetaRequest::AdvancedHelp))]
    #[case(vec!["--advanced-help"], Some(MetaRequest::AdvancedHelp))]
    #[case(vec!["--version"], Some(MetaRequest::Version))]
    #[case(vec!["--copyright"], Some(MetaRequest::Copyright))]
    #[case(vec!["--export-help", "html"], Some(MetaRequest::Export(ExportFormat::Html)))]
    #[case(vec!["--export-help=man"], Some(MetaRequest::Export(ExportFormat::Man)))]
    #[case(vec!["--int", "notanumber", "-h"], Some(MetaRequest::Help))]
    #[case(vec!["--unknown", "--version"], Some(MetaRequest::Version))]
    #[case(vec!["--version", "--help"], Some(MetaRequest::Version))]
    #[case(vec!["--", "--help"], None)]
    #[case(vec!["-hhh"], None)]
    #[case(vec!["-fh"], None)]
    #[case(vec!["help"], None)]
    fn meta(#[case] tokens: Vec<&str>, #[case] expected: Option<MetaRequest>) {
        assert_eq!(find_meta(&strings(&tokens)), Ok(expected));
    }

    #[rstest]
    #[case(vec!["--export-help"], MatchError::MissingValue("--export-help".to_string()))]
    #[case(vec!["--export-help", "pdf"], MatchError::InvalidExportFormat("pdf".to_string()))]
    #[case(vec!["--export-help="], MatchError::InvalidExportFormat("".to_string()))]
    fn meta_export_invalid(#[case] tokens: Vec<&str>, #[case] expected: MatchError) {
        assert_eq!(find_meta(&strings(&tokens)), Err(expected));
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec!["-h"], vec!["-h"])]
    #[case(vec!["-x", "sub1", "-h"], vec!["-x"])]
    #[case(vec!["sub2", "sub1"], vec![])]
    #[case(vec!["--int", "sub1", "-h", "sub1"], vec!["--int", "sub1", "-h"])]
    #[case(vec!["--int=sub1", "sub1", "-h"], vec!["--int=sub1"])]
    #[case(vec!["-i", "sub2", "sub1"], vec!["-i", "sub2"])]
    #[case(vec!["-fi", "sub2", "sub1"], vec!["-fi", "sub2"])]
    #[case(vec!["-isub1", "sub1"], vec!["-isub1"])]
    #[case(vec!["-f", "sub1", "sub2"], vec!["-f"])]
    #[case(vec!["--version-check", "sub1", "sub2"], vec!["--version-check", "sub1"])]
    #[case(vec!["--export-help", "sub1"], vec!["--export-help", "sub1"])]
    #[case(vec!["--", "sub1", "-h"], vec!["--", "sub1", "-h"])]
    fn region(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let token_matcher = TokenMatcher::new(
            vec![
                OptionConfig::new(0, Identifier::new('i', "int"), true),
                OptionConfig::new(1, Identifier::from('f'), false),
            ],
            vec![],
            strings(&["sub1", "sub2"]),
        );
        let tokens = strings(&tokens);

        // Execute
        let region = token_matcher.meta_region(&tokens);

        // Verify
        assert_eq!(region, strings(&expected).as_slice());
    }

    #[test]
    fn region_without_subcommands() {
        let tokens = strings(&["sub1", "-h"]);
        assert_eq!(matcher(vec![]).meta_region(&tokens), tokens.as_slice());
    }
}
