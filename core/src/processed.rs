//! Processed arguments and their query operations.
//!
//! Every query takes a flag's long name. Queries on a flag the processor has
//! never heard of return `None`, which is distinct from a known flag that was
//! simply not given: that one answers `Some(false)`, `Some(0)` or an empty
//! list.

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from long flag name to the entries recorded for it.
///
/// Each entry is a value, or `None` as the absent marker for an occurrence
/// of the flag that carried no value.
///
/// # Examples
///
/// ```
/// use argot_core::ProcessedArguments;
///
/// let mut args = ProcessedArguments::default();
/// args.register("verbose");
/// args.register("output");
/// args.record("output", vec!["a.txt".to_string()]);
///
/// assert_eq!(args.called("verbose"), Some(false));
/// assert_eq!(args.values("output"), Some(vec!["a.txt"]));
/// assert_eq!(args.called("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProcessedArguments {
    entries: BTreeMap<String, Vec<Option<String>>>,
}

impl ProcessedArguments {
    /// Ensures `long` has an entry list, leaving existing entries alone.
    pub fn register(&mut self, long: &str) {
        self.entries.entry(long.to_string()).or_default();
    }

    /// Whether `long` has an entry list at all.
    pub fn contains(&self, long: &str) -> bool {
        self.entries.contains_key(long)
    }

    /// Records one occurrence of `long` with the values that followed it.
    ///
    /// An occurrence with no values records a single absent marker. The
    /// flag is registered if needed.
    pub fn record(&mut self, long: &str, values: Vec<String>) {
        let entries = self.entries.entry(long.to_string()).or_default();
        if values.is_empty() {
            entries.push(None);
        } else {
            entries.extend(values.into_iter().map(Some));
        }
    }

    /// Raw entries for `long`, absent markers included.
    pub fn entries(&self, long: &str) -> Option<&[Option<String>]> {
        self.entries.get(long).map(Vec::as_slice)
    }

    /// Iterates over `(long name, entries)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<String>])> {
        self.entries
            .iter()
            .map(|(long, entries)| (long.as_str(), entries.as_slice()))
    }

    /// The flag was given at all, with or without a value.
    pub fn called(&self, long: &str) -> Option<bool> {
        self.entries(long).map(|entries| !entries.is_empty())
    }

    /// The flag was given at least one value.
    pub fn has_value(&self, long: &str) -> Option<bool> {
        self.entries(long)
            .map(|entries| entries.iter().any(Option::is_some))
    }

    /// The flag has exactly one entry.
    pub fn once(&self, long: &str) -> Option<bool> {
        self.entries(long).map(|entries| entries.len() == 1)
    }

    /// The flag has more than one entry.
    pub fn many(&self, long: &str) -> Option<bool> {
        self.entries(long).map(|entries| entries.len() > 1)
    }

    /// Number of values given, absent markers excluded.
    pub fn quantity(&self, long: &str) -> Option<usize> {
        self.entries(long)
            .map(|entries| entries.iter().flatten().count())
    }

    /// Values given, in encounter order.
    pub fn values(&self, long: &str) -> Option<Vec<&str>> {
        self.entries(long)
            .map(|entries| entries.iter().flatten().map(String::as_str).collect())
    }

    /// No flag was given at all.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// No flag was given a value.
    pub fn none(&self) -> bool {
        self.entries
            .values()
            .all(|entries| entries.iter().all(Option::is_none))
    }
}
