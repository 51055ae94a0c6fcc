//! Template registry for looking up template definitions by name

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Template;
use crate::writer::join_under;

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found in registry
    #[error("Unknown template type '{name}'. Check the config file.{}", format_known(.known))]
    NotFound { name: String, known: Vec<String> },

    /// Error reading a template source file
    #[error("Cannot read template path file {}: {source}. Check the config file.", path.display())]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parameter points outside the supplied arguments
    #[error("parameter '{param}' of {file} uses value {value}, but only {available} arguments were given")]
    InvalidParameterIndex {
        file: String,
        param: String,
        value: i8,
        available: usize,
    },
}

fn format_known(known: &[String]) -> String {
    if known.is_empty() {
        String::new()
    } else {
        format!(" Known templates: {}", known.join(", "))
    }
}

/// Registry of templates keyed by name
///
/// Later definitions replace earlier ones with the same name, so lookups see
/// the last matching template in the configuration.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
    /// Base path for resolving relative file paths
    base_path: PathBuf,
}

impl TemplateRegistry {
    /// Create a new registry with a base path for file resolution
    pub fn with_base_path(base_path: PathBuf) -> Self {
        Self {
            templates: HashMap::new(),
            base_path,
        }
    }

    /// Register a template, replacing any previous one with the same name
    pub fn register(&mut self, template: Template) {
        if self.templates.contains_key(&template.name) {
            log::debug!("template '{}' redefined, using the later one", template.name);
        }
        self.templates.insert(template.name.clone(), template);
    }

    /// Register every template in declaration order
    pub fn extend<I: IntoIterator<Item = Template>>(&mut self, templates: I) {
        for template in templates {
            self.register(template);
        }
    }

    /// Look a template up, failing with the list of known names
    pub fn resolve(&self, name: &str) -> Result<&Template, TemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::NotFound {
                name: name.to_string(),
                known: self.names(),
            })
    }

    /// All template names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.templates.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolve a template path under the base path, even when it is absolute
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        join_under(&self.base_path, relative)
    }

    /// Read the raw bytes of a template file
    pub fn load_source(&self, relative: &str) -> Result<Vec<u8>, TemplateError> {
        let path = self.resolve_path(relative);
        log::debug!("reading template source {}", path.display());
        std::fs::read(&path).map_err(|source| TemplateError::FileReadError { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateFile;

    fn make_template(name: &str, file: &str) -> Template {
        Template {
            name: name.to_string(),
            files: vec![TemplateFile {
                name: file.to_string(),
                template_path: format!("templates/{}.tmpl", file),
                parameters: vec![],
            }],
        }
    }

    #[test]
    fn test_registry_register_and_resolve() {
        let mut registry = TemplateRegistry::default();
        registry.register(make_template("controller", "c.go"));

        assert_eq!(registry.resolve("controller").unwrap().files[0].name, "c.go");
        assert!(registry.resolve("Controller").is_err());
    }

    #[test]
    fn test_registry_last_definition_wins() {
        let mut registry = TemplateRegistry::default();
        registry.extend(vec![
            make_template("model", "first.go"),
            make_template("view", "view.go"),
            make_template("model", "second.go"),
        ]);

        assert_eq!(registry.names(), vec!["model".to_string(), "view".to_string()]);
        let template = registry.resolve("model").expect("Should resolve");
        assert_eq!(template.files[0].name, "second.go");
    }

    #[test]
    fn test_resolve_unknown_lists_known_names() {
        let mut registry = TemplateRegistry::default();
        registry.extend(vec![make_template("view", "v"), make_template("model", "m")]);

        let err = registry.resolve("controller").unwrap_err();
        match &err {
            TemplateError::NotFound { name, known } => {
                assert_eq!(name, "controller");
                assert_eq!(known, &vec!["model".to_string(), "view".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("Known templates: model, view"));
    }

    #[test]
    fn test_resolve_in_empty_registry() {
        let registry = TemplateRegistry::default();
        let err = registry.resolve("anything").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown template type 'anything'. Check the config file."
        );
    }

    #[test]
    fn test_resolve_path() {
        let registry = TemplateRegistry::with_base_path(PathBuf::from("/work"));
        assert_eq!(
            registry.resolve_path("templates/a.tmpl"),
            PathBuf::from("/work/templates/a.tmpl")
        );
        assert_eq!(
            registry.resolve_path("/abs/templates/a.tmpl"),
            PathBuf::from("/work/abs/templates/a.tmpl")
        );
        assert_eq!(
            TemplateRegistry::default().resolve_path("a.tmpl"),
            PathBuf::from("a.tmpl")
        );
    }

    #[test]
    fn test_load_source_keeps_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("latin1.tmpl"), b"caf\xe9 {{N}}").unwrap();

        let registry = TemplateRegistry::with_base_path(dir.path().to_path_buf());
        let source = registry.load_source("latin1.tmpl").expect("Should read non-UTF-8 source");
        assert_eq!(source, b"caf\xe9 {{N}}".to_vec());
    }

    #[test]
    fn test_load_source_missing_file() {
        let registry = TemplateRegistry::with_base_path(PathBuf::from("/definitely/not/here"));
        let result = registry.load_source("missing.tmpl");
        assert!(matches!(result, Err(TemplateError::FileReadError { .. })));
    }
}
