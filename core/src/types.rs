//! Argument specification types.
//!
//! An [`ArgumentSpec`] describes one accepted flag: its short and long
//! forms, how many values it takes ([`Quantity`]), and the text shown for it
//! in help output. A schema is simply an ordered `Vec<ArgumentSpec>`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SchemaError;

/// Description used when a spec does not provide one.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Cardinality rule for the values a flag may receive.
///
/// Each variant corresponds to an integer quantity code. Negative codes are
/// the optional counterparts of their positive codes: they also accept a
/// flag that was never given a value.
///
/// # Examples
///
/// ```
/// use argot_core::Quantity;
///
/// assert_eq!(Quantity::try_from(-1).unwrap(), Quantity::OneIfSpecified);
/// assert_eq!(Quantity::OneIfSpecified.requirement(), Some("one value if specified"));
/// assert!(Quantity::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Quantity {
    /// Pure switch, takes no value (code 0, the default).
    #[default]
    Switch,
    /// Exactly one value (code 1).
    One,
    /// Two or more values (code 2).
    TwoOrMore,
    /// One or more values (code 3).
    OneOrMore,
    /// Exactly one value, or never specified (code -1).
    OneIfSpecified,
    /// Two or more values, or never specified (code -2).
    TwoOrMoreIfSpecified,
}

impl Quantity {
    /// Integer code of this quantity.
    pub fn code(self) -> i64 {
        match self {
            Self::Switch => 0,
            Self::One => 1,
            Self::TwoOrMore => 2,
            Self::OneOrMore => 3,
            Self::OneIfSpecified => -1,
            Self::TwoOrMoreIfSpecified => -2,
        }
    }

    /// Human-readable requirement, `None` for a switch.
    pub fn requirement(self) -> Option<&'static str> {
        match self {
            Self::Switch => None,
            Self::One => Some("one value"),
            Self::TwoOrMore => Some("two or more values"),
            Self::OneOrMore => Some("one or more values"),
            Self::OneIfSpecified => Some("one value if specified"),
            Self::TwoOrMoreIfSpecified => Some("two or more values if specified"),
        }
    }

    /// Evaluates this rule against the entries accumulated for a flag.
    ///
    /// Entry counts include absent markers, so a flag given once without a
    /// value counts as "once".
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::Quantity;
    ///
    /// let once = vec![Some("a".to_string())];
    /// let twice = vec![Some("a".to_string()), Some("b".to_string())];
    ///
    /// assert!(Quantity::One.is_satisfied_by(&once));
    /// assert!(!Quantity::One.is_satisfied_by(&[]));
    /// assert!(Quantity::OneIfSpecified.is_satisfied_by(&[]));
    /// assert!(!Quantity::OneIfSpecified.is_satisfied_by(&twice));
    /// ```
    pub fn is_satisfied_by(self, entries: &[Option<String>]) -> bool {
        let once = entries.len() == 1;
        let many = entries.len() > 1;
        let has_value = entries.iter().any(Option::is_some);

        match self {
            Self::Switch => true,
            Self::One => once,
            Self::TwoOrMore => many,
            Self::OneOrMore => once || many,
            Self::OneIfSpecified => once || !has_value,
            Self::TwoOrMoreIfSpecified => many || !has_value,
        }
    }
}

impl TryFrom<i64> for Quantity {
    type Error = SchemaError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Switch),
            1 => Ok(Self::One),
            2 => Ok(Self::TwoOrMore),
            3 => Ok(Self::OneOrMore),
            -1 => Ok(Self::OneIfSpecified),
            -2 => Ok(Self::TwoOrMoreIfSpecified),
            other => Err(SchemaError::InvalidQuantity {
                code: other.to_string(),
            }),
        }
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> Self {
        quantity.code()
    }
}

/// One accepted flag.
///
/// Construct with [`new`](ArgumentSpec::new) and the builder methods, or from
/// loosely-typed data with [`from_value`](ArgumentSpec::from_value).
///
/// # Examples
///
/// ```
/// use argot_core::{ArgumentSpec, Quantity};
///
/// let output = ArgumentSpec::new("o", "output")
///     .with_quantity(Quantity::One)
///     .with_value_label("file")
///     .with_description("Write results to a file");
///
/// assert_eq!(output.long, "output");
/// assert_eq!(output.value_label.as_deref(), Some("file"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentSpec {
    /// Short form without its prefix (exactly one character once validated).
    pub short: String,
    /// Long form without its prefix.
    pub long: String,
    /// Cardinality rule for this flag's values.
    pub quantity: Quantity,
    /// Placeholder shown in help for an expected value.
    #[serde(rename = "value", skip_serializing_if = "Option::is_none")]
    pub value_label: Option<String>,
    /// Help text; filled with [`DEFAULT_DESCRIPTION`] during validation.
    pub description: Option<String>,
}

impl ArgumentSpec {
    /// Creates a switch with the given short and long forms.
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
            quantity: Quantity::Switch,
            value_label: None,
            description: None,
        }
    }

    /// Sets the quantity rule.
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the help placeholder for the flag's value.
    pub fn with_value_label(mut self, label: &str) -> Self {
        self.value_label = Some(label.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Description shown in help output.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Builds a spec from a loosely-typed record, as read from a schema file.
    ///
    /// The record must be an object with `short` and `long` keys. Scalar
    /// values are coerced to their string form; `quantity` defaults to 0 and
    /// the value placeholder may be given as `value` or `value_label`.
    /// `index` is the position of the record, used in error reports.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NotARecord`] when the record shape is wrong and
    /// [`SchemaError::InvalidQuantity`] for an unsupported quantity code.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_core::{ArgumentSpec, Quantity};
    /// use serde_json::json;
    ///
    /// let spec = ArgumentSpec::from_value(&json!({"short": 1, "long": "one", "quantity": -1}), 0).unwrap();
    /// assert_eq!(spec.short, "1");
    /// assert_eq!(spec.quantity, Quantity::OneIfSpecified);
    ///
    /// assert!(ArgumentSpec::from_value(&json!({"long": "x"}), 0).is_err());
    /// ```
    pub fn from_value(value: &Value, index: usize) -> Result<Self, SchemaError> {
        let record = value
            .as_object()
            .filter(|record| record.contains_key("short") && record.contains_key("long"))
            .ok_or(SchemaError::NotARecord { index })?;

        let quantity = match record.get("quantity") {
            None | Some(Value::Null) => Quantity::Switch,
            Some(Value::Number(number)) => match number.as_i64() {
                Some(code) => Quantity::try_from(code)?,
                None => {
                    return Err(SchemaError::InvalidQuantity {
                        code: number.to_string(),
                    });
                }
            },
            Some(other) => {
                return Err(SchemaError::InvalidQuantity {
                    code: other.to_string(),
                });
            }
        };

        let value_label = record
            .get("value")
            .or_else(|| record.get("value_label"))
            .and_then(optional_string);

        Ok(Self {
            short: coerce_string(&record["short"]),
            long: coerce_string(&record["long"]),
            quantity,
            value_label,
            description: record.get("description").and_then(optional_string),
        })
    }
}

fn optional_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(coerce_string(other)),
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
