// SPDX-License-Identifier: MPL-2.0
//! What a toast says and how urgent it is.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    /// Something degraded but the screen still works.
    Warning,
    Error,
}

impl Severity {
    /// Accent stripe drawn on the left of the toast.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// How long the toast stays up. Every severity expires on its own.
    #[must_use]
    pub fn lifetime(self) -> Duration {
        match self {
            Severity::Info => Duration::from_millis(2000),
            Severity::Warning => Duration::from_millis(3500),
            Severity::Error => Duration::from_millis(5000),
        }
    }
}

/// A localizable toast message. Text is resolved through i18n at render time,
/// so a locale switch also applies to toasts already on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            severity,
            key: key.into(),
            args: Vec::new(),
        }
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Adds a Fluent argument, e.g. `$detail`.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }
}
