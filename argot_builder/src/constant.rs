pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_LONG: &str = "help";
pub(crate) const ADVANCED_HELP_SHORT: &str = "hh";
pub(crate) const ADVANCED_HELP_LONG: &str = "advanced-help";
pub(crate) const EXPORT_HELP_LONG: &str = "export-help";
pub(crate) const VERSION_LONG: &str = "version";
pub(crate) const COPYRIGHT_LONG: &str = "copyright";
pub(crate) const VERSION_CHECK_LONG: &str = "version-check";

/// Long identifiers implicitly registered by every parser.
pub(crate) const RESERVED_LONGS: [&str; 6] = [
    HELP_LONG,
    ADVANCED_HELP_LONG,
    EXPORT_HELP_LONG,
    VERSION_LONG,
    COPYRIGHT_LONG,
    VERSION_CHECK_LONG,
];

pub(crate) const END_OF_OPTIONS: &str = "--";
pub(crate) const POSITIONAL_PREFIX: &str = "ARGUMENT";
