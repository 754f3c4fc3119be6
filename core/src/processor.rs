//! The argument processor.
//!
//! [`ArgumentProcessor`] ties the pipeline together: schema validation,
//! token normalization and grouping run in [`process`], cardinality checks
//! and the help short-circuit in [`validate`]. Both return errors instead of
//! terminating; [`run`] is the convenience that hands failures to the
//! configured [`Reporter`].
//!
//! [`process`]: ArgumentProcessor::process
//! [`validate`]: ArgumentProcessor::validate
//! [`run`]: ArgumentProcessor::run

use tracing::{debug, info};

use crate::group::group_tokens;
use crate::help::render_help;
use crate::normalize::normalize_tokens;
use crate::quantity::validate_quantities;
use crate::validate::{HELP_LONG, insert_help, validate_schema};
use crate::{
    ArgumentSpec, ColumnFormatter, ColumnLayout, ExitReporter, ProcessError, ProcessedArguments,
    ProcessorConfig, Reporter,
};

/// Outcome of a successful [`ArgumentProcessor::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Every quantity rule holds.
    Valid,
    /// The help flag was given; holds the rendered help text.
    HelpRequested(Vec<String>),
}

/// Validates and interprets a UNIX-style argument list against a schema.
///
/// An empty schema turns validation off: any flag is accepted and no
/// quantity rules apply. Note that with `auto_help` enabled the help flag is
/// appended first, so the schema is only empty when auto-help is off.
///
/// # Examples
///
/// ```
/// use argot_core::*;
///
/// let schema = vec![
///     ArgumentSpec::new("v", "verbose"),
///     ArgumentSpec::new("f", "file").with_quantity(Quantity::OneOrMore),
/// ];
/// let argv = ["-vf", "a.txt", "b.txt"].map(String::from).to_vec();
///
/// let mut processor = ArgumentProcessor::new(argv, schema, ProcessorConfig::default());
/// processor.process().unwrap();
/// assert_eq!(processor.validate().unwrap(), Validation::Valid);
///
/// assert_eq!(processor.called("verbose"), Some(true));
/// assert_eq!(processor.values("file"), Some(vec!["a.txt", "b.txt"]));
/// assert_eq!(processor.called("nonexistent"), None);
/// ```
#[derive(Debug)]
pub struct ArgumentProcessor<F = ColumnLayout, R = ExitReporter> {
    config: ProcessorConfig,
    argv: Vec<String>,
    schema: Vec<ArgumentSpec>,
    processed: ProcessedArguments,
    formatter: F,
    reporter: R,
}

impl ArgumentProcessor {
    /// Creates a processor with the default column layout and a reporter
    /// that exits the process.
    pub fn new(argv: Vec<String>, schema: Vec<ArgumentSpec>, config: ProcessorConfig) -> Self {
        Self::with_collaborators(argv, schema, config, ColumnLayout::default(), ExitReporter)
    }
}

impl<F, R> ArgumentProcessor<F, R>
where
    F: ColumnFormatter,
    R: Reporter,
{
    /// Creates a processor with explicit help formatter and reporter.
    pub fn with_collaborators(
        argv: Vec<String>,
        schema: Vec<ArgumentSpec>,
        config: ProcessorConfig,
        formatter: F,
        reporter: R,
    ) -> Self {
        Self {
            config,
            argv,
            schema,
            processed: ProcessedArguments::default(),
            formatter,
            reporter,
        }
    }

    /// Validates the schema, normalizes the token list and groups it.
    ///
    /// The token list is consumed; calling this again only re-validates the
    /// schema.
    ///
    /// # Errors
    ///
    /// Configuration and schema errors first, then unknown short flags,
    /// then a leading value, then unknown long flags.
    pub fn process(&mut self) -> Result<(), ProcessError> {
        self.config.validate()?;

        if self.config.auto_help {
            insert_help(&mut self.schema);
        }
        validate_schema(&mut self.schema)?;

        let argv = std::mem::take(&mut self.argv);
        let tokens = normalize_tokens(argv, &self.schema, &self.config)?;
        debug!(tokens = ?tokens, "Normalized tokens");

        for spec in &self.schema {
            self.processed.register(&spec.long);
        }

        group_tokens(tokens, &self.schema, &self.config, &mut self.processed)
    }

    /// Checks quantity rules, unless help was asked for.
    ///
    /// With auto-help enabled and the help flag given, the rules are skipped
    /// and the help text is returned instead.
    ///
    /// # Errors
    ///
    /// [`ProcessError::Quantity`] for the first flag, in schema order, whose
    /// values break its rule.
    pub fn validate(&self) -> Result<Validation, ProcessError> {
        if self.config.auto_help && self.called(HELP_LONG) == Some(true) {
            info!("Help requested");
            return Ok(Validation::HelpRequested(self.help_lines()));
        }

        if !self.schema.is_empty() {
            validate_quantities(&self.schema, &self.processed, &self.config)?;
        }
        Ok(Validation::Valid)
    }

    /// Runs [`process`](Self::process) and [`validate`](Self::validate),
    /// handing errors and help requests to the reporter.
    ///
    /// Only returns when the arguments are valid.
    pub fn run(&mut self) -> &ProcessedArguments {
        let outcome = self.process().and_then(|()| self.validate());
        match outcome {
            Ok(Validation::Valid) => &self.processed,
            Ok(Validation::HelpRequested(lines)) => self.reporter.help(&lines),
            Err(err) => self.reporter.fail(err.exit_code(), &err.lines()),
        }
    }

    /// Help text for the current schema.
    pub fn help_lines(&self) -> Vec<String> {
        render_help(&self.schema, &self.config, &self.formatter)
    }

    /// The schema, normalized once [`process`](Self::process) has run.
    pub fn schema(&self) -> &[ArgumentSpec] {
        &self.schema
    }

    /// The configuration this processor was built with.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Processed arguments recorded so far.
    pub fn arguments(&self) -> &ProcessedArguments {
        &self.processed
    }

    /// See [`ProcessedArguments::called`].
    pub fn called(&self, long: &str) -> Option<bool> {
        self.processed.called(long)
    }

    /// See [`ProcessedArguments::has_value`].
    pub fn has_value(&self, long: &str) -> Option<bool> {
        self.processed.has_value(long)
    }

    /// See [`ProcessedArguments::once`].
    pub fn once(&self, long: &str) -> Option<bool> {
        self.processed.once(long)
    }

    /// See [`ProcessedArguments::many`].
    pub fn many(&self, long: &str) -> Option<bool> {
        self.processed.many(long)
    }

    /// See [`ProcessedArguments::quantity`].
    pub fn quantity(&self, long: &str) -> Option<usize> {
        self.processed.quantity(long)
    }

    /// See [`ProcessedArguments::values`].
    pub fn values(&self, long: &str) -> Option<Vec<&str>> {
        self.processed.values(long)
    }

    /// See [`ProcessedArguments::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }

    /// See [`ProcessedArguments::none`].
    pub fn none(&self) -> bool {
        self.processed.none()
    }
}
