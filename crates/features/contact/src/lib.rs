//! # Contact
//!
//! Contact form model, field validation, and the simulated delivery dispatch.
//!
//! Validation mirrors the rules rendered next to each field in the UI, so a
//! [`ValidationErrors`] value can be mapped straight onto the form. Delivery
//! is simulated: [`Dispatch::send`] validates, pauses for a configurable
//! latency, and resolves to a receipt or a rejection without ever leaving the
//! process.
//!
//! ## Example
//!
//! ```rust
//! use folio_contact::{ContactForm, validate};
//!
//! let form = ContactForm {
//!     name: "Ada Lovelace".to_owned(),
//!     email: "ada@example.com".to_owned(),
//!     subject: "Analytical engines".to_owned(),
//!     message: "I have a proposal for a collaboration.".to_owned(),
//! };
//!
//! assert!(validate(&form).is_ok());
//! ```

mod dispatch;
mod error;
mod validate;

use serde::{Deserialize, Serialize};

pub use self::{
    dispatch::{DeliveryReceipt, Dispatch, Outcome, SIMULATED_LATENCY_MS},
    error::{DeliveryError, Field, FieldError, ValidationErrors},
    validate::{
        EMAIL_PATTERN, MESSAGE_MAX, MESSAGE_MIN, NAME_MAX, NAME_MIN, NAME_PATTERN, SUBJECT_MAX,
        SUBJECT_MIN, validate, validate_email, validate_message, validate_name, validate_subject,
    },
};

/// State of the contact form, one field per input.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// `true` while every field is empty or whitespace, used to gate the
    /// submit button before the visitor has typed anything.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .into_iter()
            .all(|field| field.trim().is_empty())
    }

    /// Character count of the message body, backing the live counter under
    /// the textarea.
    #[must_use]
    pub fn message_length(&self) -> usize {
        self.message.chars().count()
    }
}
