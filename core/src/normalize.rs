//! Token normalization.
//!
//! Rewrites a raw token list so every flag is in long form: chained short
//! flags are expanded (`-abc` → `-a -b -c`) and each short flag is then
//! replaced by its long equivalent. Tokens that are not flags pass through
//! untouched.
//!
//! With an empty schema there is nothing to look up, so short flags simply
//! have their prefix swapped and no flag is ever rejected.

use std::collections::HashMap;

use tracing::debug;

use crate::{ArgumentSpec, ProcessError, ProcessorConfig};

/// Whether `token` carries the short prefix and not the long one.
pub fn is_short_flag(token: &str, config: &ProcessorConfig) -> bool {
    !token.starts_with(&config.prefix_long) && token.starts_with(&config.prefix_short)
}

/// Expands chained short flags into one token per character.
///
/// Expansion keeps the original order and leaves already-expanded flags
/// unchanged. Characters equal to a single-character short prefix are
/// dropped from the cluster, so a lone short prefix expands to nothing.
///
/// # Examples
///
/// ```
/// use argot_core::{expand_chained_flags, ProcessorConfig};
///
/// let config = ProcessorConfig::default();
/// let tokens = vec!["-abc".to_string(), "value".to_string()];
/// assert_eq!(expand_chained_flags(tokens, &config), vec!["-a", "-b", "-c", "value"]);
/// ```
pub fn expand_chained_flags(tokens: Vec<String>, config: &ProcessorConfig) -> Vec<String> {
    let prefix = config.prefix_short.as_str();
    let mut prefix_chars = prefix.chars();
    let single_char_prefix = match (prefix_chars.next(), prefix_chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    };

    let mut expanded = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !is_short_flag(&token, config) {
            expanded.push(token);
            continue;
        }

        let cluster = &token[prefix.len()..];
        let before = expanded.len();
        expanded.extend(
            cluster
                .chars()
                .filter(|ch| Some(*ch) != single_char_prefix)
                .map(|ch| format!("{prefix}{ch}")),
        );
        if expanded.len() - before > 1 {
            debug!(token = %token, count = expanded.len() - before, "Expanded chained short flags");
        }
    }
    expanded
}

/// Rewrites every short flag as its long equivalent.
///
/// With a non-empty schema each short flag is looked up by its character;
/// a flag the schema does not define is an
/// [`UnknownArgument`](ProcessError::UnknownArgument) error. With an empty
/// schema the short prefix is swapped for the long prefix verbatim.
pub fn rewrite_short_flags(
    tokens: Vec<String>,
    schema: &[ArgumentSpec],
    config: &ProcessorConfig,
) -> Result<Vec<String>, ProcessError> {
    let prefix_short = config.prefix_short.as_str();
    let prefix_long = config.prefix_long.as_str();

    if schema.is_empty() {
        return Ok(tokens
            .into_iter()
            .map(|token| {
                if is_short_flag(&token, config) {
                    format!("{prefix_long}{}", &token[prefix_short.len()..])
                } else {
                    token
                }
            })
            .collect());
    }

    let short_long: HashMap<&str, &str> = schema
        .iter()
        .map(|spec| (spec.short.as_str(), spec.long.as_str()))
        .collect();

    tokens
        .into_iter()
        .map(|token| {
            if !is_short_flag(&token, config) {
                return Ok(token);
            }
            let short = &token[prefix_short.len()..];
            match short_long.get(short) {
                Some(long) => {
                    debug!(short = %token, long = %long, "Rewrote short flag");
                    Ok(format!("{prefix_long}{long}"))
                }
                None => Err(ProcessError::UnknownArgument { flag: token }),
            }
        })
        .collect()
}

/// Runs chained-flag expansion and short-to-long rewriting in order.
///
/// # Examples
///
/// ```
/// use argot_core::{normalize_tokens, ArgumentSpec, ProcessorConfig};
///
/// let schema = vec![ArgumentSpec::new("v", "verbose"), ArgumentSpec::new("q", "quiet")];
/// let tokens = vec!["-vq".to_string()];
/// let normalized = normalize_tokens(tokens, &schema, &ProcessorConfig::default()).unwrap();
/// assert_eq!(normalized, vec!["--verbose", "--quiet"]);
/// ```
pub fn normalize_tokens(
    tokens: Vec<String>,
    schema: &[ArgumentSpec],
    config: &ProcessorConfig,
) -> Result<Vec<String>, ProcessError> {
    let expanded = expand_chained_flags(tokens, config);
    rewrite_short_flags(expanded, schema, config)
}
