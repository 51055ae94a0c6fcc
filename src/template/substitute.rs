//! Placeholder substitution for template files

use bstr::ByteSlice;

use crate::config::{TemplateFile, TemplateFileParameter};

use super::registry::TemplateError;

/// Raw positional arguments of one invocation
///
/// Index 0 is the template name and the last entry is the output directory.
/// Parameter values are addressed with an offset of one, so parameter value
/// `0` reads argument 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    raw: Vec<String>,
}

impl Arguments {
    pub fn new(raw: Vec<String>) -> Self {
        Self { raw }
    }

    /// Template name (first argument)
    pub fn template_name(&self) -> Option<&str> {
        self.raw.first().map(String::as_str)
    }

    /// Output directory (last argument)
    pub fn output_dir(&self) -> Option<&str> {
        self.raw.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Argument that replaces a parameter: raw index `value + 1`
    pub fn value_for(&self, value: i8) -> Option<&str> {
        let index = usize::try_from(i16::from(value) + 1).ok()?;
        self.raw.get(index).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Arguments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Output of substituting one template file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Output file name after substitution
    pub name: String,
    /// File content after substitution, as raw bytes
    pub content: Vec<u8>,
}

/// Apply a file's parameters, in declared order, to its content and name
///
/// Each parameter sees the output of the previous ones, so a token that is a
/// prefix of a later token can consume part of it. Content is treated as bytes
/// and need not be valid UTF-8.
pub fn substitute(
    file: &TemplateFile,
    content: &[u8],
    args: &Arguments,
) -> Result<RenderedFile, TemplateError> {
    let mut rendered = RenderedFile {
        name: file.name.clone(),
        content: content.to_vec(),
    };

    for param in &file.parameters {
        let value = parameter_value(file, param, args)?;
        rendered.content = rendered.content.replace(&param.name, value);
        rendered.name = rendered.name.replace(&param.name, value);
    }

    Ok(rendered)
}

fn parameter_value<'a>(
    file: &TemplateFile,
    param: &TemplateFileParameter,
    args: &'a Arguments,
) -> Result<&'a str, TemplateError> {
    args.value_for(param.value)
        .ok_or_else(|| TemplateError::InvalidParameterIndex {
            file: file.name.clone(),
            param: param.name.clone(),
            value: param.value,
            available: args.len().saturating_sub(1),
        })
}
