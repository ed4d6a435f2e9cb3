use std::fmt;

/// Errors surfaced by the chrome core.
///
/// Per-item `ConfigParse` failures are recovered inside the reconciler (the
/// entry is skipped); every other occurrence aborts the top-level call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// Malformed JSON or a missing/invalid required field.
    ConfigParse(String),
    /// `nav` keyword outside {none, back, menu, close}.
    InvalidNavigationType(String),
    /// Top-level command name not recognized by the bridge.
    UnknownAction(String),
}

impl fmt::Display for ChromeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChromeError::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            ChromeError::InvalidNavigationType(nav) => {
                write!(f, "invalid navigation type: {nav:?}")
            }
            ChromeError::UnknownAction(action) => write!(f, "unknown action: {action}"),
        }
    }
}

impl std::error::Error for ChromeError {}

impl From<serde_json::Error> for ChromeError {
    fn from(e: serde_json::Error) -> Self {
        ChromeError::ConfigParse(e.to_string())
    }
}
