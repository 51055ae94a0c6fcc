//! Configuration file describing the available templates
//!
//! The configuration is a JSON document named [`CONFIG_FILE_NAME`] that lives in
//! the working directory:
//!
//! ```json
//! {
//!   "Templates": [
//!     {
//!       "Name": "controller",
//!       "Files": [
//!         {
//!           "Name": "{{Name}}Controller.go",
//!           "TemplatePath": "templates/controller.tmpl",
//!           "Parameters": [{ "Name": "{{Name}}", "Value": 0, "Case": "" }]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use ariadne::{Color, Label, Report, ReportKind, Source};
use serde::Deserialize;
use thiserror::Error;

/// File name of the configuration, resolved against the working directory
pub const CONFIG_FILE_NAME: &str = "gotempl.json";

/// Errors that can occur when loading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config file: {source}")]
    Parse {
        source: serde_json::Error,
        /// Raw file contents, kept for error reports
        content: String,
    },

    #[error("Incorrect config file.")]
    Incorrect,
}

impl ConfigError {
    /// Format the error with source context using ariadne
    ///
    /// Only parse errors carry source text; other kinds fall back to their
    /// display message.
    pub fn format(&self, filename: &str, color: bool) -> String {
        let (source, content) = match self {
            ConfigError::Parse { source, content } if !content.is_empty() => (source, content),
            _ => return self.to_string(),
        };

        let offset = char_offset(content, source.line(), source.column());
        let len = content.chars().count();
        let span = offset.min(len.saturating_sub(1))..(offset + 1).min(len);
        let message = source.to_string();

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(ariadne::Config::default().with_color(color))
            .with_message("invalid config file")
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(content.as_str())), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Convert serde_json's 1-based line / byte column into a char offset
fn char_offset(content: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (idx, text) in content.split('\n').enumerate() {
        if idx + 1 == line {
            let mut byte = column.saturating_sub(1).min(text.len());
            while !text.is_char_boundary(byte) {
                byte -= 1;
            }
            return offset + text[..byte].chars().count();
        }
        offset += text.chars().count() + 1;
    }
    content.chars().count()
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// `None` when the key is missing or `null`
    #[serde(rename = "Templates", alias = "templates", default)]
    pub templates: Option<Vec<Template>>,
}

/// A named group of files generated together
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Template {
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    #[serde(rename = "Files", alias = "files", default)]
    pub files: Vec<TemplateFile>,
}

/// One generated file: where its source lives and how its output is named
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateFile {
    /// Output file name, may contain placeholder tokens
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    /// Template source, relative to the working directory
    #[serde(rename = "TemplatePath", alias = "templatePath", default)]
    pub template_path: String,
    #[serde(rename = "Parameters", alias = "parameters", default)]
    pub parameters: Vec<TemplateFileParameter>,
}

/// A placeholder token and the argument that replaces it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateFileParameter {
    /// Literal token to search for
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    /// Zero-based index into the parameter arguments
    #[serde(rename = "Value", alias = "value", default)]
    pub value: i8,
    /// Never read
    #[serde(rename = "Case", alias = "case", default)]
    pub case: String,
}

impl Config {
    /// Load the configuration from `<dir>/gotempl.json`
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Self::from_file(&dir.join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse the configuration from a JSON string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            source,
            content: content.to_string(),
        })
    }

    /// Templates in declaration order, or [`ConfigError::Incorrect`] when the
    /// `Templates` key is missing
    pub fn templates(&self) -> Result<&[Template], ConfigError> {
        self.templates.as_deref().ok_or(ConfigError::Incorrect)
    }
}
