use std::{
    fmt,
    sync::{Mutex, PoisonError},
};

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The solver returned control with a value the caller must validate.
    Warning,

    /// The solver failed in a way that should stop the calling simulation.
    ///
    /// Solvers never terminate the process themselves; whether a fatal
    /// diagnostic aborts the run is up to the top-level caller.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Fatal => f.write_str("fatal"),
        }
    }
}

/// A message reported by a solver to a [`DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Creates a fatal diagnostic.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fatal,
            message: message.into(),
        }
    }

    /// Returns true if this diagnostic is fatal.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Receives diagnostics from root finders.
///
/// Reporting never changes control flow: the solver that reports a
/// diagnostic still returns its value or error to the caller afterwards.
/// Sinks take `&self` so a single solver can be shared across threads.
pub trait DiagnosticSink {
    /// Records a diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// A sink that discards every diagnostic.
impl DiagnosticSink for () {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards diagnostics to the [`log`] facade.
///
/// Warnings are logged at `warn` level and fatal diagnostics at `error`
/// level, both under the `radroot` target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => log::warn!(target: "radroot", "{}", diagnostic.message),
            Severity::Fatal => log::error!(target: "radroot", "{}", diagnostic.message),
        }
    }
}

/// A thread-safe sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded diagnostics, oldest first.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded diagnostics with the given severity.
    #[must_use]
    pub fn with_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.diagnostics()
            .into_iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Consumes the recorder and returns its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for Recorder {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_reports_in_order() {
        let recorder = Recorder::new();
        assert!(recorder.is_empty());

        recorder.report(&Diagnostic::warning("first"));
        recorder.report(&Diagnostic::fatal("second"));

        let diagnostics = recorder.diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0], Diagnostic::warning("first"));
        assert!(diagnostics[1].is_fatal());
    }

    #[test]
    fn recorder_filters_by_severity() {
        let recorder = Recorder::new();
        recorder.report(&Diagnostic::warning("a"));
        recorder.report(&Diagnostic::fatal("b"));
        recorder.report(&Diagnostic::warning("c"));

        let warnings = recorder.with_severity(Severity::Warning);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[1].message, "c");

        assert_eq!(recorder.with_severity(Severity::Fatal).len(), 1);
    }

    #[test]
    fn reference_to_sink_is_a_sink() {
        fn report_twice(sink: impl DiagnosticSink) {
            sink.report(&Diagnostic::warning("x"));
            sink.report(&Diagnostic::warning("y"));
        }

        let recorder = Recorder::new();
        report_twice(&recorder);
        report_twice(&&recorder);

        assert_eq!(recorder.into_diagnostics().len(), 4);
    }

    #[test]
    fn unit_and_log_sinks_accept_reports() {
        ().report(&Diagnostic::fatal("ignored"));
        LogSink.report(&Diagnostic::warning("logged"));
        LogSink.report(&Diagnostic::fatal("logged"));
    }

    #[test]
    fn display_includes_severity() {
        assert_eq!(
            Diagnostic::warning("no convergence").to_string(),
            "warning: no convergence"
        );
        assert_eq!(Diagnostic::fatal("bad bracket").to_string(), "fatal: bad bracket");
    }
}
