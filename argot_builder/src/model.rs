/// The short/long name pair by which an option or flag is addressed on the command line.
///
/// An empty long identifier (`""`) is treated as absent.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::Identifier;
///
/// assert_eq!(Identifier::new('i', "int").to_string(), "-i/--int");
/// assert_eq!(Identifier::from('i').to_string(), "-i");
/// assert_eq!(Identifier::from("int").to_string(), "--int");
/// assert_eq!(Identifier::new(None, "int"), Identifier::from("int"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Identifier {
    short: Option<char>,
    long: Option<String>,
}

impl Identifier {
    /// Create an identifier from an optional short character and a (possibly empty) long name.
    pub fn new(short: impl Into<Option<char>>, long: impl Into<String>) -> Self {
        let long = long.into();
        Self {
            short: short.into(),
            long: if long.is_empty() { None } else { Some(long) },
        }
    }

    /// The short side of this identifier, if any.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long side of this identifier, if any.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }
}

impl From<char> for Identifier {
    fn from(value: char) -> Self {
        Identifier::new(value, "")
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::new(None, value)
    }
}

impl From<(char, &str)> for Identifier {
    fn from((short, long): (char, &str)) -> Self {
        Identifier::new(short, long)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.short, &self.long) {
            (Some(s), Some(l)) => write!(f, "-{s}/--{l}"),
            (Some(s), None) => write!(f, "-{s}"),
            (None, Some(l)) => write!(f, "--{l}"),
            (None, None) => write!(f, "<unnamed>"),
        }
    }
}

/// Help page exposure of an option, flag, or positional argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Must be supplied on the command line; always shown in help.
    Required,
    /// Shown in help.
    #[default]
    Standard,
    /// Shown only with the extended help (`-hh`, `--advanced-help`).
    Advanced,
    /// Never shown in help.
    Hidden,
}

/// The cardinality of values bound to a single storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly one value; repeated occurrences overwrite (last wins).
    Single,
    /// An ordered sequence; repeated occurrences append.
    List,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Whether the program is allowed to check for updates.
///
/// Only recorded by the parser, the update check itself is performed elsewhere.
/// The command line may override it via `--version-check {true,false}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateNotifications {
    /// Update notifications are enabled.
    #[default]
    On,
    /// Update notifications are disabled.
    Off,
}

/// Output format requested by `--export-help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// HTML page.
    Html,
    /// Man page.
    Man,
}

impl ExportFormat {
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token {
            "html" => Some(ExportFormat::Html),
            "man" => Some(ExportFormat::Man),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Man => write!(f, "man"),
        }
    }
}

/// A reserved meta-token found on the command line, which short-circuits normal parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaRequest {
    /// `-h`, `--help`
    Help,
    /// `-hh`, `--advanced-help`
    AdvancedHelp,
    /// `--version`
    Version,
    /// `--copyright`
    Copyright,
    /// `--export-help <format>`
    Export(ExportFormat),
}

/// Free-text program metadata, handed to the [`Renderer`](crate::Renderer) alongside the descriptors.
///
/// All fields are optional; empty values are omitted from the rendered pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// One line description, shown next to the program name.
    pub short_description: String,
    /// Program version.
    pub version: String,
    /// Date of the last update.
    pub date: String,
    /// Synopsis lines, for example `"./app [OPTIONS] FILE"`.
    pub synopsis: Vec<String>,
    /// Description paragraphs.
    pub description: Vec<String>,
    /// Example invocations.
    pub examples: Vec<String>,
    /// Author name.
    pub author: String,
    /// Author email.
    pub email: String,
    /// Project url.
    pub url: String,
    /// Short copyright notice, shown on the help page.
    pub short_copyright: String,
    /// Full copyright or license text, shown by `--copyright`.
    pub long_copyright: String,
    /// How to cite the program.
    pub citation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Identifier::new('i', "int"), Some('i'), Some("int"))]
    #[case(Identifier::new('i', ""), Some('i'), None)]
    #[case(Identifier::new(None, "int"), None, Some("int"))]
    #[case(Identifier::from(('i', "int")), Some('i'), Some("int"))]
    #[case(Identifier::from('i'), Some('i'), None)]
    #[case(Identifier::from("int"), None, Some("int"))]
    #[case(Identifier::from(""), None, None)]
    fn identifier_parts(
        #[case] identifier: Identifier,
        #[case] short: Option<char>,
        #[case] long: Option<&str>,
    ) {
        assert_eq!(identifier.short(), short);
        assert_eq!(identifier.long(), long);
        assert_eq!(identifier.is_empty(), short.is_none() && long.is_none());
    }

    #[rstest]
    #[case("html", Some(ExportFormat::Html))]
    #[case("man", Some(ExportFormat::Man))]
    #[case("HTML", None)]
    #[case("pdf", None)]
    #[case("", None)]
    fn export_format(#[case] token: &str, #[case] expected: Option<ExportFormat>) {
        let format = ExportFormat::from_token(token);
        assert_eq!(format, expected);

        if let Some(format) = format {
            assert_eq!(format.to_string(), token);
        }
    }
}
