// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form validation.
//!
//! Submission is simulated: a form that passes validation is acknowledged
//! with a success toast and reset, and nothing is sent anywhere.

use alloc::string::{String, ToString};

use regex::Regex;
use thiserror::Error;

use crate::config::Messages;
use crate::notify::{Notifier, Severity};

/// Shape of an acceptable email address: non-space/non-`@` runs around a
/// single `@` and at least one dot in the domain.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Selectors and field names of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    /// Form selectors, tried in order.
    pub forms: [&'static str; 2],
}

impl ContactConfig {
    /// `#contactForm`, falling back to `.contact-form`.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            forms: ["#contactForm", ".contact-form"],
        }
    }
}

/// Why a submission was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ContactError {
    /// At least one required field is blank after trimming.
    #[error("one or more required fields are blank")]
    MissingFields,
    /// The email field does not look like an address.
    #[error("email address is malformed")]
    InvalidEmail,
}

impl ContactError {
    /// User-facing toast text for this error.
    #[must_use]
    pub fn message(self, messages: &Messages) -> &'static str {
        match self {
            Self::MissingFields => messages.missing_fields,
            Self::InvalidEmail => messages.invalid_email,
        }
    }
}

/// Trimmed field values of one submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Subject line (the `title` field stands in when `subject` is blank).
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactSubmission {
    /// Reads the four fields through `field`, which returns the raw value of
    /// a named form field or `None` when the form has no such field.
    pub fn read(mut field: impl FnMut(&str) -> Option<String>) -> Self {
        let mut get = |name: &str| field(name).map(|v| v.trim().to_string()).unwrap_or_default();
        let name = get("name");
        let email = get("email");
        let mut subject = get("subject");
        if subject.is_empty() {
            subject = get("title");
        }
        let message = get("message");
        Self {
            name,
            email,
            subject,
            message,
        }
    }
}

/// Validates submissions.
#[derive(Clone, Debug)]
pub struct ContactValidator {
    email: Regex,
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactValidator {
    /// Compiles the email pattern.
    #[must_use]
    pub fn new() -> Self {
        Self {
            email: Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"),
        }
    }

    /// Returns `true` if `email` looks like an address.
    #[must_use]
    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    /// Checks a submission: every field present, then the email shape.
    pub fn validate(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let fields = [
            &submission.name,
            &submission.email,
            &submission.subject,
            &submission.message,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !self.is_valid_email(&submission.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates `submission` and reports the result through `notifier`.
    ///
    /// Exactly one toast is shown either way. `Ok` means the form should be
    /// reset.
    pub fn submit<N: Notifier + ?Sized>(
        &self,
        submission: &ContactSubmission,
        notifier: &N,
        messages: &Messages,
    ) -> Result<(), ContactError> {
        match self.validate(submission) {
            Ok(()) => {
                notifier.notify(messages.sent, Severity::Success);
                Ok(())
            }
            Err(err) => {
                notifier.notify(err.message(messages), Severity::Error);
                Err(err)
            }
        }
    }
}
