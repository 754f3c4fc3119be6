//! Grouping of normalized tokens.
//!
//! Walks a normalized token list and splits it into groups of one long flag
//! followed by zero or more values, recording each group into
//! [`ProcessedArguments`]. A group ends at the next long flag or at the end
//! of input.

use tracing::debug;

use crate::{ArgumentSpec, ProcessError, ProcessedArguments, ProcessorConfig};

/// Groups `tokens` under their flags and records them into `processed`.
///
/// `tokens` must already be normalized. With a non-empty `schema`,
/// `processed` is expected to have every schema flag registered and any
/// other flag is rejected; with an empty schema, flags are registered as
/// they are encountered.
///
/// # Errors
///
/// [`MisplacedValue`](ProcessError::MisplacedValue) when the first token is
/// not a long flag, [`UnknownArgument`](ProcessError::UnknownArgument) for a
/// long flag outside a non-empty schema.
///
/// # Examples
///
/// ```
/// use argot_core::{group_tokens, ProcessedArguments, ProcessorConfig};
///
/// let tokens = vec!["--tag".to_string(), "a".to_string(), "--tag".to_string(), "b".to_string()];
/// let mut processed = ProcessedArguments::default();
/// group_tokens(tokens, &[], &ProcessorConfig::default(), &mut processed).unwrap();
/// assert_eq!(processed.values("tag"), Some(vec!["a", "b"]));
/// ```
pub fn group_tokens(
    tokens: Vec<String>,
    schema: &[ArgumentSpec],
    config: &ProcessorConfig,
    processed: &mut ProcessedArguments,
) -> Result<(), ProcessError> {
    let prefix_long = config.prefix_long.as_str();

    if let Some(first) = tokens.first() {
        if !first.starts_with(prefix_long) {
            return Err(ProcessError::MisplacedValue {
                value: first.clone(),
                prefix_long: prefix_long.to_string(),
            });
        }
    }

    let mut tokens = tokens.into_iter().peekable();
    let mut group: Vec<String> = Vec::new();

    while let Some(token) = tokens.next() {
        group.push(token);
        if tokens
            .peek()
            .is_none_or(|next| next.starts_with(prefix_long))
        {
            record_group(std::mem::take(&mut group), schema, prefix_long, processed)?;
        }
    }

    Ok(())
}

fn record_group(
    group: Vec<String>,
    schema: &[ArgumentSpec],
    prefix_long: &str,
    processed: &mut ProcessedArguments,
) -> Result<(), ProcessError> {
    let mut group = group.into_iter();
    let Some(flag) = group.next() else {
        return Ok(());
    };
    let long = &flag[prefix_long.len()..];

    if !schema.is_empty() && !processed.contains(long) {
        return Err(ProcessError::UnknownArgument { flag });
    }

    let values: Vec<String> = group.collect();
    debug!(flag = %long, values = values.len(), "Recorded argument group");
    processed.record(long, values);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    fn registered(schema: &[ArgumentSpec]) -> ProcessedArguments {
        let mut processed = ProcessedArguments::default();
        for spec in schema {
            processed.register(&spec.long);
        }
        processed
    }

    #[test]
    fn test_bare_value_first_is_misplaced() {
        let mut processed = ProcessedArguments::default();
        let err = group_tokens(
            tokens(&["value"]),
            &[],
            &ProcessorConfig::default(),
            &mut processed,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ProcessError::MisplacedValue {
                value: "value".to_string(),
                prefix_long: "--".to_string()
            }
        );
    }

    #[test]
    fn test_valueless_flags_record_absent_marker() {
        let schema = vec![ArgumentSpec::new("a", "all"), ArgumentSpec::new("l", "long")];
        let mut processed = registered(&schema);

        group_tokens(
            tokens(&["--all", "--long", "x", "y"]),
            &schema,
            &ProcessorConfig::default(),
            &mut processed,
        )
        .unwrap();

        assert_eq!(processed.entries("all"), Some(&[None][..]));
        assert_eq!(processed.values("long"), Some(vec!["x", "y"]));
    }

    #[test]
    fn test_unknown_long_flag_rejected_with_schema() {
        let schema = vec![ArgumentSpec::new("a", "all")];
        let mut processed = registered(&schema);

        let err = group_tokens(
            tokens(&["--all", "--bogus", "v"]),
            &schema,
            &ProcessorConfig::default(),
            &mut processed,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ProcessError::UnknownArgument {
                flag: "--bogus".to_string()
            }
        );
    }

    #[test]
    fn test_flags_created_on_demand_without_schema() {
        let mut processed = ProcessedArguments::default();

        group_tokens(
            tokens(&["--x", "--y", "1", "--x", "2"]),
            &[],
            &ProcessorConfig::default(),
            &mut processed,
        )
        .unwrap();

        assert_eq!(processed.entries("x"), Some(&[None, Some("2".to_string())][..]));
        assert_eq!(processed.values("y"), Some(vec!["1"]));
    }

    #[test]
    fn test_empty_input_records_nothing() {
        let mut processed = ProcessedArguments::default();
        group_tokens(Vec::new(), &[], &ProcessorConfig::default(), &mut processed).unwrap();
        assert!(processed.is_empty());
    }
}
