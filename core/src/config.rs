//! Processor configuration and schema documents.
//!
//! [`ProcessorConfig`] holds the options that shape how tokens are read. It
//! is built once and never changes for the lifetime of a processor.
//! [`SchemaDocument`] bundles a configuration with an argument list so both
//! can live in a JSON or YAML file.
//!
//! # Example YAML
//!
//! ```yaml
//! program: backup
//! auto_help: true
//! prefix_short: "-"
//! prefix_long: "--"
//! arguments:
//!   - short: v
//!     long: verbose
//!     description: Chatty output
//!   - short: o
//!     long: output
//!     quantity: 1
//!     value: file
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;
use crate::validate::specs_from_values;
use crate::{ArgumentSpec, ProcessError, SchemaError};

/// Default prefix for short-form flags.
pub const DEFAULT_PREFIX_SHORT: &str = "-";

/// Default prefix for long-form flags.
pub const DEFAULT_PREFIX_LONG: &str = "--";

/// Options controlling token interpretation and help output.
///
/// # Examples
///
/// ```
/// # use argot_core::ProcessorConfig;
/// let config = ProcessorConfig::default();
/// assert!(config.auto_help);
/// assert_eq!(config.prefix_short, "-");
/// assert_eq!(config.prefix_long, "--");
///
/// let plus = ProcessorConfig::default().with_prefixes("+", "++");
/// assert_eq!(plus.prefix_long, "++");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Add a `--help` / `-?` flag and honor it during validation.
    pub auto_help: bool,
    /// Prefix in front of short-form flags.
    pub prefix_short: String,
    /// Prefix in front of long-form flags.
    pub prefix_long: String,
    /// Name shown in help output.
    #[serde(alias = "program")]
    pub program_name: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            auto_help: true,
            prefix_short: DEFAULT_PREFIX_SHORT.to_string(),
            prefix_long: DEFAULT_PREFIX_LONG.to_string(),
            program_name: current_program_name(),
        }
    }
}

impl ProcessorConfig {
    /// Sets whether the help flag is added automatically.
    pub fn with_auto_help(mut self, auto_help: bool) -> Self {
        self.auto_help = auto_help;
        self
    }

    /// Sets the short and long flag prefixes.
    pub fn with_prefixes(mut self, short: &str, long: &str) -> Self {
        self.prefix_short = short.to_string();
        self.prefix_long = long.to_string();
        self
    }

    /// Sets the program name shown in help output.
    pub fn with_program_name(mut self, name: &str) -> Self {
        self.program_name = name.to_string();
        self
    }

    /// Checks that both prefixes are usable.
    pub fn validate(&self) -> Result<(), ProcessError> {
        if self.prefix_short.is_empty() {
            return Err(ProcessError::InvalidConfig {
                reason: "prefix_short must not be empty".to_string(),
            });
        }
        if self.prefix_long.is_empty() {
            return Err(ProcessError::InvalidConfig {
                reason: "prefix_long must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn current_program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "program".to_string())
}

/// A processor configuration plus its argument list, as stored on disk.
///
/// Arguments are kept as raw records until [`specs`](Self::specs) converts
/// them, so malformed entries surface as [`SchemaError`]s rather than parse
/// failures.
///
/// # Examples
///
/// ```
/// use argot_core::SchemaDocument;
///
/// let doc = SchemaDocument::from_yaml_str(
///     "program: demo\narguments:\n  - { short: v, long: verbose }\n",
/// ).unwrap();
/// assert_eq!(doc.config.program_name, "demo");
/// assert_eq!(doc.specs().unwrap()[0].long, "verbose");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
    /// Processor options; every key is optional.
    #[serde(flatten)]
    pub config: ProcessorConfig,
    /// Raw argument records.
    #[serde(default)]
    pub arguments: Vec<Value>,
}

impl SchemaDocument {
    /// Loads a document, choosing the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnsupportedFormat`] for extensions other than
    /// `json`, `yaml` and `yml`, and I/O or parse errors otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let file = match extension.as_deref() {
            Some("json" | "yaml" | "yml") => std::fs::File::open(path)?,
            _ => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        let reader = BufReader::new(file);

        let document = if extension.as_deref() == Some("json") {
            serde_json::from_reader(reader)?
        } else {
            serde_yaml::from_reader(reader)?
        };
        Ok(document)
    }

    /// Parses a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(raw: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Converts the raw argument records into normalized specs.
    pub fn specs(&self) -> Result<Vec<ArgumentSpec>, SchemaError> {
        specs_from_values(&self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::Quantity;

    fn sample_yaml() -> &'static str {
        r#"program: backup
auto_help: false
prefix_short: "+"
prefix_long: "++"
arguments:
  - short: v
    long: verbose
  - short: o
    long: output
    quantity: 1
    value: file
    description: Output file
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let doc = SchemaDocument::from_yaml_str(sample_yaml()).unwrap();

        assert_eq!(doc.config.program_name, "backup");
        assert!(!doc.config.auto_help);
        assert_eq!(doc.config.prefix_short, "+");
        assert_eq!(doc.config.prefix_long, "++");

        let specs = doc.specs().unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].quantity, Quantity::One);
        assert_eq!(specs[1].value_label.as_deref(), Some("file"));
    }

    #[test]
    fn test_deserialize_minimal() {
        let doc = SchemaDocument::from_json_str("{}").unwrap();

        assert!(doc.config.auto_help);
        assert_eq!(doc.config.prefix_short, DEFAULT_PREFIX_SHORT);
        assert_eq!(doc.config.prefix_long, DEFAULT_PREFIX_LONG);
        assert!(doc.arguments.is_empty());
    }

    #[test]
    fn test_specs_surface_schema_errors() {
        let doc = SchemaDocument::from_json_str(r#"{"arguments": [{"long": "verbose"}]}"#).unwrap();
        assert_eq!(doc.specs(), Err(SchemaError::NotARecord { index: 0 }));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("schema.yml");
        std::fs::write(&yaml_path, sample_yaml()).unwrap();
        assert_eq!(
            SchemaDocument::load(&yaml_path).unwrap().config.program_name,
            "backup"
        );

        let json_path = dir.path().join("schema.json");
        let mut f = std::fs::File::create(&json_path).unwrap();
        f.write_all(br#"{"program": "json-demo", "arguments": []}"#)
            .unwrap();
        f.flush().unwrap();
        assert_eq!(
            SchemaDocument::load(&json_path).unwrap().config.program_name,
            "json-demo"
        );
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = SchemaDocument::load("schema.toml").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_validate_rejects_empty_prefixes() {
        let config = ProcessorConfig::default().with_prefixes("", "--");
        assert!(config.validate().is_err());

        let config = ProcessorConfig::default().with_prefixes("-", "");
        assert!(config.validate().is_err());

        assert!(ProcessorConfig::default().validate().is_ok());
    }
}
