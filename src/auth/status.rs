//! Status line shown in the `#message` element.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// Ephemeral message; each event overwrites the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }

    /// Full `class` attribute value for the message element.
    pub fn class_name(&self) -> String {
        format!("message {}", self.severity.as_str())
    }
}
