use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ContactForm,
    error::{Field, FieldError, ValidationErrors},
};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const SUBJECT_MIN: usize = 5;
pub const SUBJECT_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1_000;

/// Letters and whitespace only; digits and punctuation are rejected.
pub const NAME_PATTERN: &str = r"^[a-zA-Z\s]+$";
/// Deliberately loose: one `@`, no whitespace, and a dot somewhere in the
/// domain part. Real deliverability is out of scope.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(NAME_PATTERN).unwrap_or_else(|err| panic!("name pattern must compile: {err}"))
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).unwrap_or_else(|err| panic!("email pattern must compile: {err}"))
});

/// Check a single name value against the form rules.
///
/// # Errors
///
/// Returns the first rule the value violates.
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let length = name.chars().count();
    if length < NAME_MIN {
        return Err(FieldError::new(
            Field::Name,
            "Name must be at least 2 characters",
        ));
    }
    if length > NAME_MAX {
        return Err(FieldError::new(
            Field::Name,
            "Name must be less than 50 characters",
        ));
    }
    if !NAME_RE.is_match(name) {
        return Err(FieldError::new(
            Field::Name,
            "Name can only contain letters and spaces",
        ));
    }
    Ok(())
}

/// Check a single email value against the form rules.
///
/// # Errors
///
/// Returns the first rule the value violates.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::new(Field::Email, "Email is required"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::new(
            Field::Email,
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

/// Check a single subject value against the form rules.
///
/// # Errors
///
/// Returns the first rule the value violates.
pub fn validate_subject(subject: &str) -> Result<(), FieldError> {
    let length = subject.chars().count();
    if length < SUBJECT_MIN {
        return Err(FieldError::new(
            Field::Subject,
            "Subject must be at least 5 characters",
        ));
    }
    if length > SUBJECT_MAX {
        return Err(FieldError::new(
            Field::Subject,
            "Subject must be less than 100 characters",
        ));
    }
    Ok(())
}

/// Check a single message value against the form rules.
///
/// # Errors
///
/// Returns the first rule the value violates.
pub fn validate_message(message: &str) -> Result<(), FieldError> {
    let length = message.chars().count();
    if length < MESSAGE_MIN {
        return Err(FieldError::new(
            Field::Message,
            "Message must be at least 10 characters",
        ));
    }
    if length > MESSAGE_MAX {
        return Err(FieldError::new(
            Field::Message,
            "Message must be less than 1000 characters",
        ));
    }
    Ok(())
}

/// Validate the whole form, collecting at most one error per field so the
/// UI can render them all at once.
///
/// # Errors
///
/// Returns every violated rule, in field order.
pub fn validate(form: &ContactForm) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = [
        validate_name(&form.name),
        validate_email(&form.email),
        validate_subject(&form.subject),
        validate_message(&form.message),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
