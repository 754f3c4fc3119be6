//! Help text rendering.

use crate::{ArgumentSpec, ColumnFormatter, ProcessorConfig};

const DIVIDER: &str = "  ";

/// Builds the help row for one spec: short form, long form with its value
/// placeholder, and description.
pub fn help_row(spec: &ArgumentSpec, config: &ProcessorConfig) -> Vec<String> {
    let value = spec
        .value_label
        .as_deref()
        .map(|label| format!(" <{}>", label.to_uppercase()))
        .unwrap_or_default();

    vec![
        format!("{}{}", config.prefix_short, spec.short),
        format!("{}{}{value}", config.prefix_long, spec.long),
        spec.description().to_string(),
    ]
}

/// Renders help text for `schema`.
///
/// A non-empty schema is listed one flag per row in aligned columns; an
/// empty schema produces a notice that any long flag is accepted.
///
/// # Examples
///
/// ```
/// use argot_core::*;
///
/// let schema = vec![ArgumentSpec::new("o", "output").with_value_label("file")];
/// let config = ProcessorConfig::default().with_program_name("demo");
/// let lines = render_help(&schema, &config, &ColumnLayout::default());
///
/// assert!(lines[1].starts_with("demo specifies the following valid arguments"));
/// assert_eq!(lines[3], "  -o  --output <FILE>  No description");
/// ```
pub fn render_help<F>(schema: &[ArgumentSpec], config: &ProcessorConfig, formatter: &F) -> Vec<String>
where
    F: ColumnFormatter + ?Sized,
{
    let program = &config.program_name;
    let mut lines = vec![" ".to_string()];

    if schema.is_empty() {
        lines.push(format!(
            "{program} does not specify a set of valid arguments. Any arguments preceded with \"{}\" can be used.",
            config.prefix_long
        ));
        return lines;
    }

    lines.push(format!(
        "{program} specifies the following valid arguments. Any other arguments will cause an error:"
    ));
    lines.push(" ".to_string());

    let rows: Vec<Vec<String>> = schema.iter().map(|spec| help_row(spec, config)).collect();
    lines.extend(formatter.format_table(&rows, &[DIVIDER; 3]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnLayout, Quantity};

    fn config() -> ProcessorConfig {
        ProcessorConfig::default().with_program_name("tool")
    }

    #[test]
    fn test_help_rows_are_aligned() {
        let schema = vec![
            ArgumentSpec::new("v", "verbose").with_description("Chatty output"),
            ArgumentSpec::new("o", "output")
                .with_quantity(Quantity::One)
                .with_value_label("file")
                .with_description("Output file"),
        ];

        let lines = render_help(&schema, &config(), &ColumnLayout::default());

        assert_eq!(lines[0], " ");
        assert_eq!(lines[2], " ");
        assert_eq!(lines[3], "  -v  --verbose        Chatty output");
        assert_eq!(lines[4], "  -o  --output <FILE>  Output file");
    }

    #[test]
    fn test_empty_schema_notice() {
        let lines = render_help(&[], &config(), &ColumnLayout::default());
        assert_eq!(
            lines[1],
            "tool does not specify a set of valid arguments. Any arguments preceded with \"--\" can be used."
        );
    }

    #[test]
    fn test_custom_formatter_receives_rows() {
        let schema = vec![ArgumentSpec::new("q", "quiet")];
        let formatter = |rows: &[Vec<String>], dividers: &[&str]| -> Vec<String> {
            vec![format!("{} rows, {} dividers", rows.len(), dividers.len())]
        };

        let lines = render_help(&schema, &config(), &formatter);
        assert_eq!(lines.last().unwrap(), "1 rows, 3 dividers");
    }

    #[test]
    fn test_help_row_uses_configured_prefixes() {
        let spec = ArgumentSpec::new("x", "extra").with_value_label("Path");
        let row = help_row(&spec, &ProcessorConfig::default().with_prefixes("+", "++"));
        assert_eq!(row, vec!["+x", "++extra <PATH>", "No description"]);
    }
}
