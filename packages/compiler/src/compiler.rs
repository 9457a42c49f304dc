//! Schema Compiler
//!
//! Runs the whole extraction: namespace, declarations, enum document.

use crate::error::Result;
use crate::namespace::Namespace;
use crate::typedef::TypeDeclaration;
use crate::yaml::{self, DEFAULT_INDENT};

/// Namespace extracted when none is configured
pub const DEFAULT_NAMESPACE: &str = "FlatData";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Name of the namespace holding the declarations
    pub namespace: String,
    /// Spaces before each member entry
    pub indent: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Everything produced by one run, kept for reporting.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub namespace: Namespace,
    pub typedefs: Vec<TypeDeclaration>,
    pub document: String,
}

impl CompileOutput {
    pub fn enum_count(&self) -> usize {
        self.typedefs.iter().filter(|t| t.is_enum()).count()
    }
}

/// Extract every enum of the configured namespace and render the document.
///
/// The first error aborts the run; no partial document is returned.
pub fn compile(source: &str, options: &CompileOptions) -> Result<CompileOutput> {
    let namespace = Namespace::extract(source, &options.namespace)?;
    let typedefs = namespace.typedefs()?;
    let document = yaml::render_document(&typedefs, options.indent)?;

    Ok(CompileOutput {
        namespace,
        typedefs,
        document,
    })
}
