use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::validator::{join_labels, ValidationError, Validator};

/// How an [`OutputFileValidator`] treats a target which already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFileOpenOptions {
    /// The target must not exist yet.
    #[default]
    CreateNew,
    /// The target may exist, and will be overwritten.
    OpenOrCreate,
}

/// A validator requiring the value to name an existing, readable file.
///
/// When extensions are given, the file name must end with one of them (case-insensitive).
/// Compound extensions are compared as a whole, so `fa` and `fa.gz` are independent entries.
#[derive(Debug, Clone, Default)]
pub struct InputFileValidator {
    extensions: Vec<String>,
}

impl InputFileValidator {
    /// Create an input file validator with an extension allow-list (empty allows any extension).
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{InputFileValidator, Validator};
    ///
    /// let validator = InputFileValidator::new(["fa", ".fasta"]);
    /// assert!(validator.validate("does/not/exist.fa").is_err());
    /// assert_eq!(validator.describe(), "value must be a readable file with one of the extensions [fa, fasta]");
    /// ```
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: normalize(extensions),
        }
    }

    /// A short fragment describing the constraint, for the help page.
    pub fn describe(&self) -> String {
        format!("value must be a readable file{}", describe_extensions(&self.extensions))
    }
}

impl<T> Validator<T> for InputFileValidator
where
    T: AsRef<Path> + ?Sized,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        let path = value.as_ref();
        validate_extension(path, &self.extensions)?;

        if !path.exists() {
            return Err(ValidationError::new(format!(
                "The file {} does not exist!",
                path.display()
            )));
        }

        if path.is_dir() {
            return Err(ValidationError::new(format!(
                "The path {} is a directory, expected a file.",
                path.display()
            )));
        }

        File::open(path).map_err(|_| {
            ValidationError::new(format!("Cannot read the file {}!", path.display()))
        })?;
        Ok(())
    }

    fn describe(&self) -> String {
        InputFileValidator::describe(self)
    }
}

/// A validator requiring the value to name a writable file.
///
/// The parent directory must exist and be writable.
/// When extensions are given, the file name must end with one of them (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct OutputFileValidator {
    policy: OutputFileOpenOptions,
    extensions: Vec<String>,
}

impl OutputFileValidator {
    /// Create an output file validator with an open policy and an extension allow-list (empty allows any extension).
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{OutputFileOpenOptions, OutputFileValidator, Validator};
    ///
    /// let validator = OutputFileValidator::new(OutputFileOpenOptions::CreateNew, ["fa", "fasta"]);
    /// assert!(validator.validate("result.txt").is_err());
    /// ```
    pub fn new<I, S>(policy: OutputFileOpenOptions, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            policy,
            extensions: normalize(extensions),
        }
    }

    /// The open policy of this validator.
    pub fn policy(&self) -> OutputFileOpenOptions {
        self.policy
    }

    /// A short fragment describing the constraint, for the help page.
    pub fn describe(&self) -> String {
        let kind = match self.policy {
            OutputFileOpenOptions::CreateNew => "a new writable file",
            OutputFileOpenOptions::OpenOrCreate => "a writable file",
        };
        format!(
            "value must be {kind}{}",
            describe_extensions(&self.extensions)
        )
    }
}

impl<T> Validator<T> for OutputFileValidator
where
    T: AsRef<Path> + ?Sized,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        let path = value.as_ref();
        validate_extension(path, &self.extensions)?;
        let cannot_write =
            || ValidationError::new(format!("Cannot write the file {}!", path.display()));

        if path.exists() {
            match self.policy {
                OutputFileOpenOptions::CreateNew => {
                    return Err(ValidationError::new(format!(
                        "The file {} already exists!",
                        path.display()
                    )));
                }
                OutputFileOpenOptions::OpenOrCreate => {
                    // Append so that the existing content survives the check.
                    OpenOptions::new()
                        .append(true)
                        .open(path)
                        .map_err(|_| cannot_write())?;
                }
            }
        } else {
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|_| cannot_write())?;
            fs::remove_file(path).map_err(|_| cannot_write())?;
        }

        Ok(())
    }

    fn describe(&self) -> String {
        OutputFileValidator::describe(self)
    }
}

fn normalize<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    extensions
        .into_iter()
        .map(|extension| {
            let extension: String = extension.into();
            extension.trim_start_matches('.').to_lowercase()
        })
        .collect()
}

fn describe_extensions(extensions: &[String]) -> String {
    if extensions.is_empty() {
        String::default()
    } else {
        format!(" with one of the extensions {}", join_labels(extensions))
    }
}

fn validate_extension(path: &Path, extensions: &[String]) -> Result<(), ValidationError> {
    if extensions.is_empty() {
        return Ok(());
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let matched = extensions.iter().any(|extension| {
        let suffix = format!(".{extension}");
        // A bare '.fa' is a hidden file without an extension.
        file_name.len() > suffix.len() && file_name.ends_with(&suffix)
    });

    if matched {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "Expected one of the following valid extensions: {}! Got {} instead.",
            join_labels(extensions),
            path.display()
        )))
    }
}
