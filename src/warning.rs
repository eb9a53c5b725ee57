use std::fmt;

/// A non-fatal problem found while processing a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// File the warning refers to, e.g. `SECBASE.LEV`.
    pub source: String,
    /// Human-readable description.
    pub message: String,
    /// Line in `source`, for warnings raised while parsing files.
    pub line: Option<u32>,
}

impl Warning {
    /// Creates a warning that is not tied to a line.
    #[must_use]
    pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            line: None,
        }
    }

    /// Attaches a line number.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}: {}", self.source, self.message),
            None => write!(f, "{}: {}", self.source, self.message),
        }
    }
}

/// Collects warnings for display once processing is done.
///
/// Every pushed warning is also emitted as a `tracing` event.
#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    warnings: Vec<Warning>,
}

impl WarningLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn push(&mut self, warning: Warning) {
        tracing::warn!(source = %warning.source, line = ?warning.line, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Iterates over the recorded warnings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.warnings.iter()
    }

    /// Number of recorded warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Discards all recorded warnings.
    pub fn clear(&mut self) {
        self.warnings.clear();
    }

    /// Consumes the log, returning the warnings.
    #[must_use]
    pub fn into_vec(self) -> Vec<Warning> {
        self.warnings
    }
}

impl<'a> IntoIterator for &'a WarningLog {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
