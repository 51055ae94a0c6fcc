//! gotempl - generate boilerplate files from named templates
//!
//! A template is declared in `gotempl.json` in the working directory. Each of
//! its files is read from disk, its placeholder tokens are replaced with
//! positional arguments, and the result is written to an output directory.
//!
//! # Example
//!
//! ```no_run
//! use gotempl::{generate, GenerateConfig};
//!
//! let args = ["controller", "Todo", "src/controllers/"];
//! let report = generate(args, &GenerateConfig::new()).unwrap();
//! assert!(report.failed.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod template;
pub mod writer;

use std::path::PathBuf;

pub use config::{Config, ConfigError, Template, TemplateFile, TemplateFileParameter, CONFIG_FILE_NAME};
pub use error::{Error, MIN_ARGS};
pub use template::{substitute, Arguments, RenderedFile, TemplateError, TemplateRegistry};
pub use writer::WriteError;

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory that config, template sources and the output dir are relative to
    pub working_dir: PathBuf,
    /// Name of the configuration file inside `working_dir`
    pub config_file_name: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            config_file_name: CONFIG_FILE_NAME.to_string(),
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Set the configuration file name
    pub fn with_config_file_name(mut self, name: impl Into<String>) -> Self {
        self.config_file_name = name.into();
        self
    }

    /// Full path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.working_dir.join(&self.config_file_name)
    }
}

/// Outcome of a generation run that was not stopped by an error
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Files written, in template order
    pub written: Vec<PathBuf>,
    /// Files that could not be written; these do not fail the run
    pub failed: Vec<WriteError>,
}

/// Check the raw argument count before anything is read from disk
pub fn check_arguments(args: &Arguments) -> Result<(), Error> {
    match args.len() {
        0 => Err(Error::NoArguments),
        n if n < MIN_ARGS => Err(Error::NotEnoughArguments { given: n }),
        _ => Ok(()),
    }
}

/// Run one generation: load config, resolve the template, write its files
///
/// `args` are the positional arguments: template name, parameter values, and
/// the output directory last.
pub fn generate<I, S>(args: I, config: &GenerateConfig) -> Result<GenerationReport, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Arguments = args.into_iter().collect();
    check_arguments(&args)?;

    let cfg = Config::from_file(&config.config_path())?;
    let templates = cfg.templates()?;

    let mut registry = TemplateRegistry::with_base_path(config.working_dir.clone());
    registry.extend(templates.iter().cloned());

    // check_arguments guarantees both are present
    let name = args.template_name().unwrap_or_default();
    let output_dir = args.output_dir().unwrap_or_default();
    let template = registry.resolve(name)?;
    log::debug!("generating '{}' ({} files)", template.name, template.files.len());

    let mut report = GenerationReport::default();
    for file in &template.files {
        let source = registry.load_source(&file.template_path)?;
        let rendered = substitute(file, &source, &args)?;
        let path = writer::output_path(&config.working_dir, output_dir, &rendered.name);

        match writer::write_file(&path, &rendered.content) {
            Ok(()) => {
                log::info!("created {}", path.display());
                report.written.push(path);
            }
            Err(e) => {
                log::warn!("{}", e);
                report.failed.push(e);
            }
        }
    }

    Ok(report)
}
