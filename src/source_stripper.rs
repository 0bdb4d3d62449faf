use std::{
    borrow::Cow,
    fmt::{self, Debug, Display, Formatter},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{cleaner::{CommentStripper, TextCleaner}, pragma, StripConfig, StripError};


/// A builder for the `SourceStripper` struct
/// That allows for configuring the stripper
/// before building it
pub struct SourceStripperBuilder {
    config: Option<StripConfig>,
    cleaner: Option<Arc<dyn TextCleaner>>,
    keep_header: Option<bool>,
}

impl SourceStripperBuilder {
    pub fn new() -> Self {
        SourceStripperBuilder {
            config: None,
            cleaner: None,
            keep_header: None,
        }
    }

    pub fn with_config(mut self, config: StripConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_cleaner<T: TextCleaner + 'static>(mut self, cleaner: T) -> Self {
        self.cleaner = Some(Arc::new(cleaner));
        self
    }

    /// Keep everything above the first pragma instead of truncating it.
    pub fn keep_header(mut self, keep: bool) -> Self {
        self.keep_header = Some(keep);
        self
    }

    pub fn build(self) -> SourceStripper {
        let mut config = self.config.unwrap_or_default();
        if let Some(keep) = self.keep_header {
            config.keep_pragma_only = !keep;
        }
        SourceStripper {
            config,
            cleaner: self.cleaner.unwrap_or_else(|| Arc::new(CommentStripper)),
        }
    }
}

impl Default for SourceStripperBuilder {
    fn default() -> Self {
        SourceStripperBuilder::new()
    }
}

/// Cleaned text together with the line counts before and after cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    pub original_lines: usize,
    pub cleaned_lines: usize,
}

/// What a finished run prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripReport {
    pub output_path: PathBuf,
    pub original_lines: usize,
    pub cleaned_lines: usize,
}

impl Display for StripReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cleaned file written to {}", self.output_path.display())?;
        writeln!(f, "Original lines: {}", self.original_lines)?;
        write!(f, "Cleaned lines: {}", self.cleaned_lines)
    }
}

/// Strips comments from Solidity sources
///
/// # Example
///
/// ```
/// use sol_cleaner::SourceStripper;
///
/// let stripper = SourceStripper::default();
/// let stripped = stripper.strip("// MIT\npragma solidity ^0.8.0;\n// note\ncontract A {}\n");
///
/// assert_eq!(stripped.text, "pragma solidity ^0.8.0;\ncontract A {}");
/// assert_eq!(stripped.original_lines, 4);
/// assert_eq!(stripped.cleaned_lines, 2);
/// ```
#[derive(Clone)]
pub struct SourceStripper {
    config: StripConfig,
    cleaner: Arc<dyn TextCleaner>,
}

impl Debug for SourceStripper {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SourceStripper({})", self.config)
    }
}

impl SourceStripper {
    pub fn new() -> SourceStripperBuilder {
        SourceStripperBuilder::new()
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Strips `source` after folding `\r\n` and lone `\r` into `\n`.
    pub fn strip(&self, source: &str) -> Stripped {
        let normalized = normalize_newlines(source);
        let source = if self.config.keep_pragma_only {
            pragma::truncate_to_pragma(&normalized)
        } else {
            &*normalized
        };
        let text = self.cleaner.clean(source);

        Stripped {
            original_lines: count_lines(source),
            cleaned_lines: count_lines(&text),
            text,
        }
    }

    /// Reads the configured input, strips it and writes the configured output.
    pub fn run(&self) -> Result<StripReport, StripError> {
        self.run_paths(&self.config.input, &self.config.output)
    }

    pub fn run_paths(&self, input: &Path, output: &Path) -> Result<StripReport, StripError> {
        let source = read_source(input)?;
        let stripped = self.strip(&source);
        fs::write(output, &stripped.text).map_err(|source| StripError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        info!(
            "{} -> {}: {} lines down to {}",
            input.display(),
            output.display(),
            stripped.original_lines,
            stripped.cleaned_lines
        );

        Ok(StripReport {
            output_path: output.to_path_buf(),
            original_lines: stripped.original_lines,
            cleaned_lines: stripped.cleaned_lines,
        })
    }
}

impl Default for SourceStripper {
    fn default() -> Self {
        SourceStripperBuilder::new().build()
    }
}

/// Reads a source file as UTF-8, naming the path on failure.
pub fn read_source(path: &Path) -> Result<String, StripError> {
    fs::read_to_string(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

// Counts '\n'-separated segments, so "" is one line and a trailing newline adds one.
fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}
