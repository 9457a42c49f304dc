use anyhow::Context;
use schegen_compiler::{CompileOptions, DEFAULT_INDENT, DEFAULT_NAMESPACE};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings read from a JSON config file, e.g.
/// `{ "namespace": "FlatData", "indent": 2 }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchegenConfig {
    pub namespace: String,
    pub indent: usize,
}

impl Default for SchegenConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl SchegenConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: SchegenConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, namespace: Option<&str>, indent: Option<usize>) -> Self {
        if let Some(namespace) = namespace {
            self.namespace = namespace.to_string();
        }
        if let Some(indent) = indent {
            self.indent = indent;
        }
        self
    }
}

impl From<SchegenConfig> for CompileOptions {
    fn from(config: SchegenConfig) -> Self {
        CompileOptions {
            namespace: config.namespace,
            indent: config.indent,
        }
    }
}
