// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast notifications.
//!
//! Toasts are fire-and-forget: every call builds an independent element that
//! slides in on the next animation frame, dwells, slides out, and detaches
//! itself. There is no queue and no de-duplication; concurrent toasts stack
//! on their own.
//!
//! This module holds the styling and the lifecycle timeline. The
//! [`Notifier`] trait is the seam the contact form reports through.

use alloc::format;
use alloc::string::String;

use crate::style::{RevealStyle, VisualState};
use crate::time::Millis;

/// Severity of a toast; selects its color scheme and icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Neutral information (default).
    #[default]
    Info,
    /// An action succeeded.
    Success,
    /// Input was rejected.
    Error,
}

impl Severity {
    /// Short lowercase name, used in the element's class list.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// CSS `background` of the toast.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Info => "linear-gradient(45deg,#667eea,#764ba2)",
            Self::Success => "linear-gradient(45deg,#4CAF50,#45a049)",
            Self::Error => "linear-gradient(45deg,#f44336,#da190b)",
        }
    }

    /// Font Awesome icon class shown before the message.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Info => "fa-info-circle",
            Self::Success => "fa-check-circle",
            Self::Error => "fa-times-circle",
        }
    }

    /// Class attribute of the toast element.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// Shows a toast.
pub trait Notifier {
    /// Shows `message` with the given severity.
    fn notify(&self, message: &str, severity: Severity);
}

/// Configuration for toasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationConfig {
    /// How long a toast stays fully visible.
    pub dwell: Millis,
    /// Delay between starting the exit transition and detaching the element.
    pub detach_after: Millis,
    /// Off-screen and on-screen states.
    pub style: RevealStyle,
}

impl NotificationConfig {
    /// Five seconds on screen, detached 350ms after sliding out.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            dwell: Millis(5000),
            detach_after: Millis(350),
            style: RevealStyle {
                hidden: VisualState {
                    opacity: "0",
                    transform: "translateX(20px)",
                },
                shown: VisualState {
                    opacity: "1",
                    transform: "translateX(0)",
                },
                transition: "opacity 0.3s ease, transform 0.3s ease",
            },
        }
    }
}

/// Lifecycle phase of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastPhase {
    /// Attached, hidden, waiting for the next animation frame.
    Entering,
    /// Fully visible.
    Visible,
    /// Exit transition running.
    Leaving,
    /// Removed from the document.
    Detached,
}

impl ToastPhase {
    /// Returns the phase that follows this one and the delay before it,
    /// or `None` once detached.
    ///
    /// `Entering → Visible` has no fixed delay; it happens on the next
    /// animation frame.
    #[must_use]
    pub fn next(self, config: &NotificationConfig) -> Option<(Self, Millis)> {
        match self {
            Self::Entering => Some((Self::Visible, Millis::ZERO)),
            Self::Visible => Some((Self::Leaving, config.dwell)),
            Self::Leaving => Some((Self::Detached, config.detach_after)),
            Self::Detached => None,
        }
    }
}

/// Full inline `cssText` of a toast element.
///
/// Inline so toasts render correctly without any page stylesheet.
#[must_use]
pub fn toast_css(severity: Severity, config: &NotificationConfig) -> String {
    let hidden = config.style.hidden;
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 0.9rem 1.2rem; border-radius: 10px; \
         box-shadow: 0 6px 24px rgba(0,0,0,0.25); z-index: 99999; \
         opacity: {}; transform: {}; transition: {}; max-width: 360px; \
         font-weight: 600; display: flex; gap: 0.6rem; align-items: center;",
        severity.background(),
        hidden.opacity,
        hidden.transform,
        config.style.transition,
    )
}

/// Stylesheet injected once so toast content lays out consistently.
pub const TOAST_CONTENT_CSS: &str = "\
.notification-content { display: flex; gap: 0.6rem; align-items: center; }
.notification-content i { font-size: 1.05rem; opacity: 0.95; }
";

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn severity_selects_scheme_and_icon() {
        assert_eq!(Severity::Success.icon_class(), "fa-check-circle");
        assert_eq!(Severity::Error.icon_class(), "fa-times-circle");
        assert_eq!(Severity::default().icon_class(), "fa-info-circle");
        assert_eq!(Severity::Error.class_name(), "notification notification-error");
        assert!(toast_css(Severity::Success, &NotificationConfig::standard()).contains("#4CAF50"));
    }

    #[test]
    fn toast_starts_off_screen() {
        let css = toast_css(Severity::Info, &NotificationConfig::standard());
        assert!(css.contains("opacity: 0;"), "{css}");
        assert!(css.contains("transform: translateX(20px);"), "{css}");
        assert!(css.contains("position: fixed;"), "{css}");
    }

    #[test]
    fn lifecycle_runs_dwell_then_detach() {
        let config = NotificationConfig::standard();
        let mut phase = ToastPhase::Entering;
        let mut steps = Vec::new();
        while let Some((next, delay)) = phase.next(&config) {
            steps.push((next, delay));
            phase = next;
        }
        assert_eq!(
            steps,
            [
                (ToastPhase::Visible, Millis(0)),
                (ToastPhase::Leaving, Millis(5000)),
                (ToastPhase::Detached, Millis(350)),
            ]
        );
    }
}
