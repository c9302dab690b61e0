//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as a fragment that htmx swaps into the page's
//! `#alert-container` via the `hx-target-error` attribute on forms.

use maud::{Markup, html};

/// Alert message types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Success,
    Error,
}

/// Renders alert messages with appropriate styling
pub struct AlertView<'a> {
    pub alert_type: AlertType,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> AlertView<'a> {
    /// Create a new success alert
    #[allow(dead_code)]
    pub fn success(message: &'a str, details: &'a str) -> Markup {
        Self {
            alert_type: AlertType::Success,
            message,
            details,
        }
        .into_html()
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Markup {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
        .into_html()
    }

    fn into_html(self) -> Markup {
        let (container_style, icon) = match self.alert_type {
            AlertType::Success => (
                "flex items-start gap-3 p-4 rounded-lg border text-sm shadow-lg \
                text-green-800 border-green-300 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                "✓",
            ),
            AlertType::Error => (
                "flex items-start gap-3 p-4 rounded-lg border text-sm shadow-lg \
                text-red-800 border-red-300 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                "!",
            ),
        };

        html!(
            div class=(container_style) role="alert"
            {
                span class="font-bold" aria-hidden="true" { (icon) }

                div
                {
                    p class="font-medium" { (self.message) }

                    @if !self.details.is_empty() {
                        p { (self.details) }
                    }
                }

                button
                    type="button"
                    class="ms-auto font-bold cursor-pointer"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        )
    }
}
