//! Warning aggregation and verbose notes.

/// Aggregates warnings for a command run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Print notes as well as warnings.
    verbose: bool,
    /// Collected warning messages.
    warnings: Vec<String>,
}

impl Diagnostics {
    /// Create a new diagnostics collector.
    pub(crate) fn new(verbose: bool) -> Self {
        Self {
            verbose,
            warnings: Vec::new(),
        }
    }

    /// Record a warning and print it immediately.
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("Warning: {message}");
        self.warnings.push(message);
    }

    /// Print a note when running verbosely.
    pub(crate) fn note(&self, message: impl Into<String>) {
        if self.verbose {
            eprintln!("{}", message.into());
        }
    }

    /// Return the warnings recorded so far.
    pub(crate) fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Print a warning summary when running verbosely and warnings were emitted.
    pub(crate) fn print_warning_summary(&self) {
        let warnings = self.warnings();
        if !self.verbose || warnings.is_empty() {
            return;
        }

        eprintln!("Completed with {} warning(s).", warnings.len());
    }
}
