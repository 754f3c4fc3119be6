//! UNIX-style command-line argument processing.
//!
//! This crate validates a raw token list against a declarative schema of
//! accepted flags and exposes the result through simple queries:
//!
//! - [`ArgumentSpec`]: one accepted flag with short/long forms, a
//!   [`Quantity`] rule, a value placeholder and a description.
//! - [`ArgumentProcessor`]: runs schema validation, token normalization
//!   (`-abc` → `--all --brief --color`) and grouping of values under their
//!   flags, then checks quantity rules.
//! - [`ProcessedArguments`]: the flag → values mapping, with queries that
//!   tell an unknown flag (`None`) apart from a known flag that was not given.
//! - [`SchemaDocument`]: a schema plus [`ProcessorConfig`] loaded from JSON
//!   or YAML.
//!
//! Errors never terminate the process from inside the library. They are
//! returned as [`ProcessError`]s; [`ArgumentProcessor::run`] hands them to a
//! [`Reporter`] such as [`ExitReporter`] for binaries that want the classic
//! "print and exit" behaviour.
//!
//! # Example
//!
//! ```
//! use argot_core::*;
//!
//! let schema = vec![
//!     ArgumentSpec::new("a", "all").with_description("Include hidden entries"),
//!     ArgumentSpec::new("o", "output")
//!         .with_quantity(Quantity::OneIfSpecified)
//!         .with_value_label("file"),
//! ];
//! let argv = ["-a", "--output", "list.txt"].map(String::from).to_vec();
//!
//! let mut processor = ArgumentProcessor::new(argv, schema, ProcessorConfig::default());
//! processor.process().unwrap();
//! assert_eq!(processor.validate().unwrap(), Validation::Valid);
//!
//! assert_eq!(processor.called("all"), Some(true));
//! assert_eq!(processor.values("output"), Some(vec!["list.txt"]));
//! ```

mod column;
mod config;
mod error;
mod group;
mod help;
mod normalize;
mod processed;
mod processor;
mod quantity;
mod report;
mod types;
mod validate;

pub use column::{
    ColumnFormatter, ColumnLayout, column_list, column_width, format_table, strip_colour,
    visible_width,
};
pub use config::{DEFAULT_PREFIX_LONG, DEFAULT_PREFIX_SHORT, ProcessorConfig, SchemaDocument};
pub use error::{ERROR_EXIT_CODE, ErrorKind, LoadError, ProcessError, Result, SchemaError};
pub use group::group_tokens;
pub use help::{help_row, render_help};
pub use normalize::{expand_chained_flags, is_short_flag, normalize_tokens, rewrite_short_flags};
pub use processed::ProcessedArguments;
pub use processor::{ArgumentProcessor, Validation};
pub use quantity::validate_quantities;
pub use report::{ERROR_PREFIX, ExitReporter, Reporter, error_block};
pub use types::{ArgumentSpec, DEFAULT_DESCRIPTION, Quantity};
pub use validate::{
    HELP_LONG, HELP_SHORT, help_spec, insert_help, specs_from_values, validate_schema,
    validate_spec,
};
