//! Error types for argument processing.
//!
//! Every error here is fatal by contract: callers are expected to fix the
//! schema or the invocation, not recover. [`ProcessError::lines`] gives the
//! explanatory lines a [`Reporter`](crate::Reporter) renders before
//! terminating, and [`ProcessError::exit_code`] the status to terminate with.

use std::path::PathBuf;

use thiserror::Error;

use crate::Quantity;

/// Exit code used for every fatal processing error.
pub const ERROR_EXIT_CODE: i32 = 1;

/// Malformed or non-unique argument specification.
///
/// These are programmer errors in the schema, caught before any token is
/// looked at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Entry is not a record, or lacks a `short` or `long` key.
    #[error("argument spec #{index} must be a record containing :short, :long at minimum")]
    NotARecord { index: usize },
    /// Short form is not exactly one character.
    #[error("short form {short:?} must be a single character")]
    ShortNotSingleCharacter { short: String },
    /// Long form is empty.
    #[error("long form for {short:?} must not be empty")]
    EmptyLong { short: String },
    /// Quantity code outside the supported set.
    #[error("quantity {code} is not a supported quantity code")]
    InvalidQuantity { code: String },
    /// Two specs share a short form.
    #[error("duplicate short form: {short:?}")]
    DuplicateShort { short: String },
    /// Two specs share a long form.
    #[error("duplicate long form: {long:?}")]
    DuplicateLong { long: String },
}

impl SchemaError {
    /// Explanatory lines for the error block.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::NotARecord { .. } => vec![
                "Each argument spec must be a record and contain the following keys at minimum:"
                    .to_string(),
                ":short, :long".to_string(),
            ],
            Self::ShortNotSingleCharacter { short } => vec![
                "Each argument spec :short must be a single character only.".to_string(),
                format!("{short:?} is not valid."),
            ],
            Self::EmptyLong { short } => vec![
                "Each argument spec :long must be a non-empty string.".to_string(),
                format!("The spec for {short:?} has an empty :long."),
            ],
            Self::InvalidQuantity { code } => vec![
                "Each argument spec :quantity must be one of 0, 1, 2, 3, -1, -2.".to_string(),
                format!("{code} is not valid."),
            ],
            Self::DuplicateShort { short } => vec![
                "Argument spec :short values must be unique.".to_string(),
                format!("{short:?} is defined more than once."),
            ],
            Self::DuplicateLong { long } => vec![
                "Argument spec :long values must be unique.".to_string(),
                format!("{long:?} is defined more than once."),
            ],
        }
    }
}

/// Taxonomy bucket of a [`ProcessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Schema could not be validated.
    Schema,
    /// A value token appeared before any flag.
    MisplacedValue,
    /// A flag is not part of a non-empty schema.
    UnknownArgument,
    /// A cardinality constraint was violated.
    Quantity,
    /// The processor configuration itself is unusable.
    Config,
}

/// Fatal error raised while processing an argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// First token is a value rather than a long-form flag.
    #[error("argument value {value:?} must be preceded by a {prefix_long}argument")]
    MisplacedValue { value: String, prefix_long: String },

    /// Flag (rendered with its prefix) is not defined by the schema.
    #[error("the argument {flag:?} is not a valid argument")]
    UnknownArgument { flag: String },

    /// Flag (rendered with its long prefix) received the wrong number of values.
    #[error("incorrect quantity of values for {flag}: {requirement}")]
    Quantity {
        flag: String,
        quantity: Quantity,
        requirement: String,
    },

    /// Configuration rejected before any phase ran.
    #[error("invalid processor configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl ProcessError {
    /// Which bucket of the error taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Schema(_) => ErrorKind::Schema,
            Self::MisplacedValue { .. } => ErrorKind::MisplacedValue,
            Self::UnknownArgument { .. } => ErrorKind::UnknownArgument,
            Self::Quantity { .. } => ErrorKind::Quantity,
            Self::InvalidConfig { .. } => ErrorKind::Config,
        }
    }

    /// Status the process should terminate with.
    pub fn exit_code(&self) -> i32 {
        ERROR_EXIT_CODE
    }

    /// Explanatory lines for the error block; the first is shown after `ERROR:`.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Schema(err) => err.lines(),
            Self::MisplacedValue { value, prefix_long } => vec![format!(
                "Argument value {value:?} must be preceded by a {prefix_long}argument."
            )],
            Self::UnknownArgument { flag } => {
                vec![format!("The argument \"{flag}\" is not a valid argument")]
            }
            Self::Quantity {
                flag, requirement, ..
            } => vec![
                "Incorrect quantity of values for the following argument:".to_string(),
                format!("{flag} : {requirement}"),
            ],
            Self::InvalidConfig { reason } => vec![
                "The argument processor configuration is not valid:".to_string(),
                reason.clone(),
            ],
        }
    }
}

/// Convenience alias for results with [`ProcessError`].
pub type Result<T> = std::result::Result<T, ProcessError>;

/// Errors that can occur while reading a schema document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML.
    #[error("unsupported schema document format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}
