use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ContactForm, error::DeliveryError, validate};

/// How long [`Dispatch::send`] pauses before resolving, to mimic a round
/// trip to a mail service.
pub const SIMULATED_LATENCY_MS: u32 = 2_000;

/// What the dispatch resolves to after its pause.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Deliver,
    Reject,
}

/// Proof that a submission was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub accepted_at: DateTime<Utc>,
}

/// Simulated delivery channel for the contact form.
///
/// No message ever leaves the process: `send` validates the form, waits for
/// the configured latency, then resolves according to the configured
/// [`Outcome`]. The rejecting variant exists so the failure path of the form
/// can be exercised end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    outcome: Outcome,
    latency_ms: u32,
}

impl Default for Dispatch {
    fn default() -> Self {
        Self::deliver()
    }
}

impl Dispatch {
    /// A dispatch that accepts every valid submission.
    #[must_use]
    pub const fn deliver() -> Self {
        Self {
            outcome: Outcome::Deliver,
            latency_ms: SIMULATED_LATENCY_MS,
        }
    }

    /// A dispatch that rejects every submission after the pause.
    #[must_use]
    pub const fn reject() -> Self {
        Self {
            outcome: Outcome::Reject,
            latency_ms: SIMULATED_LATENCY_MS,
        }
    }

    /// Override the pause length; tests set this to zero.
    #[must_use]
    pub const fn with_latency_ms(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Validate `form` and simulate its delivery.
    ///
    /// Validation happens before the pause, so an invalid form fails fast
    /// without the artificial latency.
    ///
    /// # Errors
    ///
    /// [`DeliveryError::Invalid`] when the form violates a rule, or
    /// [`DeliveryError::Rejected`] when the channel is configured to fail.
    pub async fn send(&self, form: &ContactForm) -> Result<DeliveryReceipt, DeliveryError> {
        validate(form)?;

        pause(self.latency_ms).await;

        match self.outcome {
            Outcome::Deliver => {
                let receipt = DeliveryReceipt {
                    accepted_at: Utc::now(),
                };
                tracing::info!(subject = %form.subject, "contact message accepted");
                Ok(receipt)
            }
            Outcome::Reject => {
                tracing::warn!(subject = %form.subject, "contact message rejected");
                Err(DeliveryError::Rejected {
                    message: Cow::Borrowed(
                        "Failed to send message. Please try again or email me directly.",
                    ),
                })
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn pause(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn pause(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
