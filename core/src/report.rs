//! Fatal error and help reporting.
//!
//! The processor never terminates the process itself. Binaries hand a
//! [`Reporter`] to the processor, and [`ArgumentProcessor::run`] routes
//! errors and help requests through it.
//!
//! [`ArgumentProcessor::run`]: crate::ArgumentProcessor::run

use std::io::Write;

/// Prefix placed in front of the first line of an error block.
pub const ERROR_PREFIX: &str = "ERROR:";

const PREFIX_WIDTH: usize = 7;

/// Renders explanatory lines as an error block.
///
/// The block starts with a blank line; the first explanatory line carries
/// the `ERROR:` prefix and continuation lines are indented to match.
///
/// # Examples
///
/// ```
/// use argot_core::error_block;
///
/// let block = error_block(&["Bad thing.".to_string(), "Details.".to_string()]);
/// assert_eq!(block, vec!["", "ERROR: Bad thing.", "       Details."]);
/// ```
pub fn error_block(lines: &[String]) -> Vec<String> {
    let mut block = Vec::with_capacity(lines.len() + 1);
    block.push(String::new());
    for (index, line) in lines.iter().enumerate() {
        let prefix = if index == 0 { ERROR_PREFIX } else { "" };
        block.push(format!("{prefix:<PREFIX_WIDTH$}{line}"));
    }
    block
}

/// Terminal outcome handler for a processing run.
pub trait Reporter {
    /// Reports a fatal error and terminates with `code`.
    fn fail(&self, code: i32, lines: &[String]) -> !;

    /// Shows help text and terminates successfully.
    fn help(&self, lines: &[String]) -> !;
}

/// Prints to stdout and exits the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitReporter;

impl Reporter for ExitReporter {
    fn fail(&self, code: i32, lines: &[String]) -> ! {
        print_lines(&error_block(lines));
        std::process::exit(code)
    }

    fn help(&self, lines: &[String]) -> ! {
        print_lines(lines);
        std::process::exit(0)
    }
}

fn print_lines(lines: &[String]) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        // Nothing sensible is left to do if stdout is gone.
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}
