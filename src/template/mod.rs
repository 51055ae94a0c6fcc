//! Template lookup and placeholder substitution
//!
//! Templates come from the configuration file. Each template file is read from
//! disk and its placeholder tokens are replaced with positional arguments:
//!
//! ```text
//! gotempl controller Todo src/controllers/
//!
//! {{Name}}Controller.go  ->  src/controllers/TodoController.go
//! ```

mod registry;
mod substitute;

pub use registry::{TemplateError, TemplateRegistry};
pub use substitute::{substitute, Arguments, RenderedFile};
