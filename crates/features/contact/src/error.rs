use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The form field an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// A single failed rule, addressed to one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field:?}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: Cow<'static, str>,
}

impl FieldError {
    pub(crate) const fn new(field: Field, message: &'static str) -> Self {
        Self {
            field,
            message: Cow::Borrowed(message),
        }
    }
}

/// Every rule the form currently violates, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message for `field`, for rendering under the matching input.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_ref())
    }
}

/// Why a [`Dispatch::send`](crate::Dispatch::send) did not produce a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("{message}")]
    Rejected { message: Cow<'static, str> },
}
