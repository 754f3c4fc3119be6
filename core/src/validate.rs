//! Schema validation.
//!
//! Normalizes a caller-supplied schema in place and checks its structural
//! invariants: single-character short forms, non-empty long forms, and
//! uniqueness of both across the whole schema.
//!
//! # Examples
//!
//! ```
//! use argot_core::*;
//!
//! let mut schema = vec![ArgumentSpec::new("v", "verbose")];
//! assert!(validate_schema(&mut schema).is_ok());
//! assert_eq!(schema[0].description.as_deref(), Some("No description"));
//!
//! // Invalid: two flags share the short form `v`
//! let mut bad = vec![ArgumentSpec::new("v", "verbose"), ArgumentSpec::new("v", "version")];
//! assert!(validate_schema(&mut bad).is_err());
//! ```

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::types::DEFAULT_DESCRIPTION;
use crate::{ArgumentSpec, Quantity, SchemaError};

/// Short form of the automatically inserted help flag.
pub const HELP_SHORT: &str = "?";

/// Long form of the automatically inserted help flag.
pub const HELP_LONG: &str = "help";

/// The flag appended to a schema when auto-help is enabled.
pub fn help_spec() -> ArgumentSpec {
    ArgumentSpec::new(HELP_SHORT, HELP_LONG)
        .with_quantity(Quantity::Switch)
        .with_description("Show all arguments instead of executing")
}

/// Appends [`help_spec`] unless a spec already claims the short form `?`.
///
/// Returns whether the help flag was added.
pub fn insert_help(schema: &mut Vec<ArgumentSpec>) -> bool {
    if schema.iter().any(|spec| spec.short == HELP_SHORT) {
        return false;
    }
    debug!("Appending automatic help flag");
    schema.push(help_spec());
    true
}

/// Checks and normalizes a single spec.
///
/// Fills in the default description. Uniqueness is a schema-wide property
/// and is checked by [`validate_schema`].
pub fn validate_spec(spec: &mut ArgumentSpec) -> Result<(), SchemaError> {
    if spec.short.chars().count() != 1 {
        return Err(SchemaError::ShortNotSingleCharacter {
            short: spec.short.clone(),
        });
    }

    if spec.long.is_empty() {
        return Err(SchemaError::EmptyLong {
            short: spec.short.clone(),
        });
    }

    if spec.description.is_none() {
        spec.description = Some(DEFAULT_DESCRIPTION.to_string());
    }

    Ok(())
}

/// Validates a schema in place.
///
/// Each spec is normalized in order, then short and long forms are checked
/// for uniqueness. The first problem found is returned.
pub fn validate_schema(schema: &mut [ArgumentSpec]) -> Result<(), SchemaError> {
    for spec in schema.iter_mut() {
        validate_spec(spec)?;
    }

    let mut seen_short: HashSet<&str> = HashSet::new();
    for spec in schema.iter() {
        if !seen_short.insert(spec.short.as_str()) {
            return Err(SchemaError::DuplicateShort {
                short: spec.short.clone(),
            });
        }
    }

    let mut seen_long: HashSet<&str> = HashSet::new();
    for spec in schema.iter() {
        if !seen_long.insert(spec.long.as_str()) {
            return Err(SchemaError::DuplicateLong {
                long: spec.long.clone(),
            });
        }
    }

    debug!(specs = schema.len(), "Validated argument schema");
    Ok(())
}

/// Converts loosely-typed records into normalized specs.
///
/// Records are converted and checked one at a time, so the error reported is
/// the one belonging to the earliest bad record. Uniqueness is left to
/// [`validate_schema`].
pub fn specs_from_values(values: &[Value]) -> Result<Vec<ArgumentSpec>, SchemaError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let mut spec = ArgumentSpec::from_value(value, index)?;
            validate_spec(&mut spec)?;
            Ok(spec)
        })
        .collect()
}
