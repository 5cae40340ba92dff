use crate::ports::ErrorDisplay;

/// Prints user-facing errors to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalErrorDisplay;

impl ErrorDisplay for TerminalErrorDisplay {
    fn show_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}
