//! Status banner shown by the settings form

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a success banner stays visible.
pub const SUCCESS_DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Visual state of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

impl StatusKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    /// CSS class applied to the banner for this state.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "status-success",
            Self::Info => "status-info",
            Self::Error => "status-error",
        }
    }
}

/// A message displayed in the status banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, StatusKind::Error)
    }

    /// Delay after which the banner hides itself; only success banners do.
    #[must_use]
    pub const fn auto_dismiss(&self) -> Option<Duration> {
        match self.kind {
            StatusKind::Success => Some(SUCCESS_DISMISS_AFTER),
            StatusKind::Info | StatusKind::Error => None,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
