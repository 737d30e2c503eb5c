use crate::constant::*;
use crate::model::{MetaRequest, Metadata, UpdateNotifications, Visibility};
use crate::parser::{Descriptor, DescriptorKind};

/// The complete snapshot handed to a [`Renderer`](crate::Renderer): every descriptor plus the program metadata.
///
/// Stable once constructed; it does not observe the bound variables after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPage {
    program: String,
    metadata: Metadata,
    descriptors: Vec<Descriptor>,
    subcommands: Vec<String>,
    notifications: UpdateNotifications,
}

impl HelpPage {
    pub(crate) fn new(
        program: String,
        metadata: Metadata,
        descriptors: Vec<Descriptor>,
        subcommands: Vec<String>,
        notifications: UpdateNotifications,
    ) -> Self {
        Self {
            program,
            metadata,
            descriptors,
            subcommands,
            notifications,
        }
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The free-text program metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Every declared option, flag, and positional argument, in registration order.
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// The subcommand keywords (empty for a plain parser).
    pub fn subcommands(&self) -> &[String] {
        &self.subcommands
    }

    /// The update notification setting at the time of the request.
    pub fn notifications(&self) -> UpdateNotifications {
        self.notifications
    }
}

const INDENT: &str = "    ";
const DETAIL_INDENT: &str = "          ";
const RULE_WIDTH: usize = 100;

/// Lays out the console pages, without width-aware wrapping.
pub(crate) struct Printer<'p> {
    page: &'p HelpPage,
}

impl<'p> Printer<'p> {
    pub(crate) fn new(page: &'p HelpPage) -> Self {
        Self { page }
    }

    pub(crate) fn render(&self, request: MetaRequest) -> Vec<String> {
        match request {
            MetaRequest::Help => self.help(false),
            MetaRequest::AdvancedHelp => self.help(true),
            MetaRequest::Version => self.version(),
            MetaRequest::Copyright => self.copyright(),
            // Export layouts are not laid out here, the console page stands in.
            MetaRequest::Export(_) => self.help(false),
        }
    }

    fn title(&self) -> Vec<String> {
        let metadata = self.page.metadata();
        let title = if metadata.short_description.is_empty() {
            self.page.program().to_string()
        } else {
            format!(
                "{} - {}",
                self.page.program(),
                metadata.short_description
            )
        };
        let underline = "=".repeat(title.chars().count());
        vec![title, underline]
    }

    fn help(&self, advanced: bool) -> Vec<String> {
        let metadata = self.page.metadata();
        let mut out = self.title();

        section(&mut out, "SYNOPSIS", self.synopsis());
        section(
            &mut out,
            "DESCRIPTION",
            metadata.description.iter().map(indent).collect(),
        );

        if !self.page.subcommands().is_empty() {
            let mut lines =
                vec![indent("This program must be invoked with one of the following subcommands:")];
            lines.extend(
                self.page
                    .subcommands()
                    .iter()
                    .map(|keyword| indent(format!("- {keyword}"))),
            );
            lines.push(indent(format!(
                "See the respective subcommand help page for further details (e.g. by calling {} {} -h).",
                self.page.program(),
                self.page.subcommands()[0]
            )));
            section(&mut out, "SUBCOMMANDS", lines);
        }

        section(
            &mut out,
            "POSITIONAL ARGUMENTS",
            self.entries(advanced, |descriptor| {
                descriptor.kind() == DescriptorKind::Positional
            }),
        );

        let basic = [
            entry(&format!("-{HELP_SHORT}, --{HELP_LONG}"), "Prints the help page."),
            entry(
                &format!("-{ADVANCED_HELP_SHORT}, --{ADVANCED_HELP_LONG}"),
                "Prints the help page including advanced options.",
            ),
            entry(&format!("--{VERSION_LONG}"), "Prints the version information."),
            entry(
                &format!("--{COPYRIGHT_LONG}"),
                "Prints the copyright/license information.",
            ),
            entry(
                &format!("--{EXPORT_HELP_LONG} (string)"),
                "Export the help page information. Value must be one of [html, man].",
            ),
            entry(
                &format!("--{VERSION_CHECK_LONG} (bool)"),
                &format!(
                    "Whether to check for the newest app version. Default: {}.",
                    self.page.notifications() == UpdateNotifications::On
                ),
            ),
        ];
        let mut options = vec!["  Basic options:".to_string()];
        options.extend(basic.concat());
        let user_options = self.entries(advanced, |descriptor| {
            descriptor.kind() != DescriptorKind::Positional
        });

        if !user_options.is_empty() {
            options.push(String::default());
            options.extend(user_options);
        }

        section(&mut out, "OPTIONS", options);
        section(
            &mut out,
            "EXAMPLES",
            metadata.examples.iter().map(indent).collect(),
        );
        section(&mut out, "VERSION", self.version_lines());
        section(&mut out, "LEGAL", self.legal_lines());
        out
    }

    fn synopsis(&self) -> Vec<String> {
        let metadata = self.page.metadata();

        if !metadata.synopsis.is_empty() {
            return metadata.synopsis.iter().map(indent).collect();
        }

        let mut parts = vec![self.page.program().to_string(), "[OPTIONS]".to_string()];

        if self.page.subcommands().is_empty() {
            parts.extend(
                self.page
                    .descriptors()
                    .iter()
                    .filter(|descriptor| descriptor.kind() == DescriptorKind::Positional)
                    .map(|descriptor| descriptor.name().to_string()),
            );
        } else {
            parts.push("SUBCOMMAND".to_string());
        }

        vec![indent(parts.join(" "))]
    }

    fn entries(&self, advanced: bool, select: impl Fn(&Descriptor) -> bool) -> Vec<String> {
        self.page
            .descriptors()
            .iter()
            .filter(|descriptor| select(descriptor))
            .filter(|descriptor| match descriptor.visibility() {
                Visibility::Required | Visibility::Standard => true,
                Visibility::Advanced => advanced,
                Visibility::Hidden => false,
            })
            .flat_map(|descriptor| entry(&heading(descriptor), &detail(descriptor)))
            .collect()
    }

    fn version_lines(&self) -> Vec<String> {
        let metadata = self.page.metadata();
        let mut lines = Vec::default();

        if !metadata.date.is_empty() {
            lines.push(indent(format!("Last update: {}", metadata.date)));
        }

        if !metadata.version.is_empty() {
            lines.push(indent(format!(
                "{} version: {}",
                self.page.program(),
                metadata.version
            )));
        }

        lines
    }

    fn legal_lines(&self) -> Vec<String> {
        let metadata = self.page.metadata();
        let mut lines = Vec::default();

        for (label, value) in [
            ("Copyright", &metadata.short_copyright),
            ("Author", &metadata.author),
            ("Contact", &metadata.email),
            ("Website", &metadata.url),
            ("In your academic works please cite", &metadata.citation),
        ] {
            if !value.is_empty() {
                lines.push(indent(format!("{label}: {value}")));
            }
        }

        if !metadata.long_copyright.is_empty() {
            lines.push(indent(format!(
                "For full copyright and/or warranty information see --{COPYRIGHT_LONG}."
            )));
        }

        lines
    }

    fn version(&self) -> Vec<String> {
        let mut out = self.title();
        section(&mut out, "VERSION", self.version_lines());

        if !self.page.metadata().url.is_empty() {
            section(&mut out, "URL", vec![indent(&self.page.metadata().url)]);
        }

        out
    }

    fn copyright(&self) -> Vec<String> {
        let metadata = self.page.metadata();
        let mut out = vec![
            "=".repeat(RULE_WIDTH),
            format!("Copyright information for {}:", self.page.program()),
            "-".repeat(RULE_WIDTH),
        ];

        if metadata.long_copyright.is_empty() && metadata.short_copyright.is_empty() {
            out.push(format!(
                "{} copyright information not available.",
                self.page.program()
            ));
        } else {
            if !metadata.short_copyright.is_empty() {
                out.push(metadata.short_copyright.clone());
            }

            if !metadata.long_copyright.is_empty() {
                out.push(metadata.long_copyright.clone());
            }
        }

        out
    }
}

/// Append a titled section, skipping it entirely when it has no lines.
fn section(out: &mut Vec<String>, title: &str, lines: Vec<String>) {
    if lines.is_empty() {
        return;
    }

    out.push(String::default());
    out.push(title.to_string());
    out.extend(lines);
}

fn indent(line: impl AsRef<str>) -> String {
    format!("{INDENT}{}", line.as_ref())
}

fn entry(heading: &str, detail: &str) -> Vec<String> {
    let mut lines = vec![indent(heading)];

    if !detail.is_empty() {
        lines.push(format!("{DETAIL_INDENT}{detail}"));
    }

    lines
}

fn heading(descriptor: &Descriptor) -> String {
    let name = match descriptor.identifier() {
        Some(identifier) => match (identifier.short(), identifier.long()) {
            (Some(short), Some(long)) => format!("-{short}, --{long}"),
            _ => identifier.to_string(),
        },
        None => descriptor.name().to_string(),
    };

    match descriptor.type_label() {
        Some(type_label) => format!("{name} ({type_label})"),
        None => name,
    }
}

fn detail(descriptor: &Descriptor) -> String {
    let mut parts = Vec::default();

    if !descriptor.description().is_empty() {
        parts.push(descriptor.description().to_string());
    }

    if descriptor.visibility() == Visibility::Required {
        parts.push("Required.".to_string());
    } else if let Some(default) = descriptor.default() {
        if !default.is_empty() {
            parts.push(format!("Default: {default}."));
        }
    }

    if let Some(constraint) = descriptor.constraint() {
        parts.push(sentence(constraint));
    }

    parts.join(" ")
}

/// Capitalize and terminate a `describe()` fragment (ex: `value must be even` becomes `Value must be even.`).
fn sentence(fragment: &str) -> String {
    let mut chars = fragment.chars();

    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::default(),
    }
}
