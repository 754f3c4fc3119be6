//! Quantity validation.
//!
//! Checks each flag's recorded entries against the [`Quantity`] rule of its
//! spec. Only meaningful with a non-empty schema; an empty schema has no
//! rules and always passes.

use tracing::debug;

use crate::{ArgumentSpec, ProcessError, ProcessedArguments, ProcessorConfig};

/// Checks every spec's quantity rule, in schema order.
///
/// A flag missing from `processed` is treated as never given.
///
/// # Errors
///
/// [`ProcessError::Quantity`] for the first flag whose entries break its
/// rule.
///
/// # Examples
///
/// ```
/// use argot_core::*;
///
/// let schema = vec![ArgumentSpec::new("o", "output").with_quantity(Quantity::One)];
/// let mut processed = ProcessedArguments::default();
/// processed.register("output");
///
/// let err = validate_quantities(&schema, &processed, &ProcessorConfig::default()).unwrap_err();
/// assert_eq!(err.lines()[1], "--output : one value");
/// ```
pub fn validate_quantities(
    schema: &[ArgumentSpec],
    processed: &ProcessedArguments,
    config: &ProcessorConfig,
) -> Result<(), ProcessError> {
    for spec in schema {
        let entries = processed.entries(&spec.long).unwrap_or_default();
        if spec.quantity.is_satisfied_by(entries) {
            continue;
        }

        debug!(flag = %spec.long, quantity = spec.quantity.code(), entries = entries.len(), "Quantity check failed");
        return Err(quantity_error(spec, &config.prefix_long));
    }
    Ok(())
}

fn quantity_error(spec: &ArgumentSpec, prefix_long: &str) -> ProcessError {
    ProcessError::Quantity {
        flag: format!("{prefix_long}{}", spec.long),
        quantity: spec.quantity,
        requirement: spec.quantity.requirement().unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    fn processed_with(long: &str, groups: &[&[&str]]) -> ProcessedArguments {
        let mut processed = ProcessedArguments::default();
        processed.register(long);
        for group in groups {
            processed.record(long, group.iter().map(|v| v.to_string()).collect());
        }
        processed
    }

    fn check(quantity: Quantity, groups: &[&[&str]]) -> Result<(), ProcessError> {
        let schema = vec![ArgumentSpec::new("f", "flag").with_quantity(quantity)];
        validate_quantities(
            &schema,
            &processed_with("flag", groups),
            &ProcessorConfig::default(),
        )
    }

    #[test]
    fn test_switch_always_valid() {
        assert!(check(Quantity::Switch, &[]).is_ok());
        assert!(check(Quantity::Switch, &[&["a", "b"]]).is_ok());
    }

    #[test]
    fn test_required_single_value() {
        assert!(check(Quantity::One, &[]).is_err());
        assert!(check(Quantity::One, &[&["a"]]).is_ok());
        assert!(check(Quantity::One, &[&["a", "b"]]).is_err());
    }

    #[test]
    fn test_optional_single_value() {
        assert!(check(Quantity::OneIfSpecified, &[]).is_ok());
        assert!(check(Quantity::OneIfSpecified, &[&["a"]]).is_ok());
        assert!(check(Quantity::OneIfSpecified, &[&["a"], &["b"]]).is_err());
    }

    #[test]
    fn test_many_values() {
        assert!(check(Quantity::TwoOrMore, &[&["a"]]).is_err());
        assert!(check(Quantity::TwoOrMore, &[&["a", "b"]]).is_ok());
        assert!(check(Quantity::OneOrMore, &[]).is_err());
        assert!(check(Quantity::OneOrMore, &[&["a"]]).is_ok());
        assert!(check(Quantity::TwoOrMoreIfSpecified, &[]).is_ok());
        assert!(check(Quantity::TwoOrMoreIfSpecified, &[&["a"]]).is_err());
    }

    #[test]
    fn test_error_names_flag_and_requirement() {
        let err = check(Quantity::TwoOrMoreIfSpecified, &[&["a"]]).unwrap_err();
        assert_eq!(
            err,
            ProcessError::Quantity {
                flag: "--flag".to_string(),
                quantity: Quantity::TwoOrMoreIfSpecified,
                requirement: "two or more values if specified".to_string(),
            }
        );
    }
}
