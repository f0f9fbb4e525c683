use folio_contact::{
    ContactForm, Field, MESSAGE_MAX, MESSAGE_MIN, NAME_MAX, SUBJECT_MAX, SUBJECT_MIN, validate,
    validate_email, validate_message, validate_name, validate_subject,
};

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Analytical engines".to_owned(),
        message: "I have a proposal for a collaboration.".to_owned(),
    }
}

#[test]
fn a_complete_form_passes() {
    assert!(validate(&valid_form()).is_ok());
}

#[test]
fn name_rules() {
    assert!(validate_name("Jo").is_ok());
    assert!(validate_name(&"a".repeat(NAME_MAX)).is_ok());

    let err = validate_name("J").unwrap_err();
    assert_eq!(err.message, "Name must be at least 2 characters");

    let err = validate_name(&"a".repeat(NAME_MAX + 1)).unwrap_err();
    assert_eq!(err.message, "Name must be less than 50 characters");

    let err = validate_name("R2D2").unwrap_err();
    assert_eq!(err.message, "Name can only contain letters and spaces");
    assert!(validate_name("Ada-Lovelace").is_err());
}

#[test]
fn email_rules() {
    assert!(validate_email("ada@example.com").is_ok());
    assert!(validate_email("a@b.co").is_ok());

    let err = validate_email("").unwrap_err();
    assert_eq!(err.message, "Email is required");

    for bad in ["plainaddress", "missing@dot", "two words@example.com", "@example.com"] {
        let err = validate_email(bad).unwrap_err();
        assert_eq!(err.message, "Please enter a valid email address", "input: {bad}");
    }
}

#[test]
fn subject_boundaries() {
    assert!(validate_subject(&"s".repeat(SUBJECT_MIN - 1)).is_err());
    assert!(validate_subject(&"s".repeat(SUBJECT_MIN)).is_ok());
    assert!(validate_subject(&"s".repeat(SUBJECT_MAX)).is_ok());
    assert!(validate_subject(&"s".repeat(SUBJECT_MAX + 1)).is_err());
}

#[test]
fn message_boundaries() {
    assert!(validate_message(&"m".repeat(MESSAGE_MIN - 1)).is_err());
    assert!(validate_message(&"m".repeat(MESSAGE_MIN)).is_ok());
    assert!(validate_message(&"m".repeat(MESSAGE_MAX)).is_ok());
    assert!(validate_message(&"m".repeat(MESSAGE_MAX + 1)).is_err());
}

#[test]
fn lengths_count_characters_not_bytes() {
    // Ten accented characters encode to twenty bytes but still satisfy the
    // ten character minimum.
    let message = "é".repeat(MESSAGE_MIN);
    assert!(validate_message(&message).is_ok());
}

#[test]
fn whole_form_collects_one_error_per_field() {
    let form = ContactForm {
        name: "4".to_owned(),
        email: "not-an-email".to_owned(),
        subject: "hm".to_owned(),
        message: "short".to_owned(),
    };

    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.0.len(), 4);
    assert_eq!(
        errors.message_for(Field::Name),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(
        errors.message_for(Field::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        errors.message_for(Field::Subject),
        Some("Subject must be at least 5 characters")
    );
    assert_eq!(
        errors.message_for(Field::Message),
        Some("Message must be at least 10 characters")
    );
}

#[test]
fn partial_failures_leave_other_fields_untouched() {
    let mut form = valid_form();
    form.email = "broken".to_owned();

    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.0.len(), 1);
    assert!(errors.message_for(Field::Name).is_none());
    assert!(errors.message_for(Field::Email).is_some());
}

#[test]
fn an_empty_form_fails_every_field() {
    let errors = validate(&ContactForm::default()).unwrap_err();
    assert_eq!(errors.0.len(), 4);
    for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
        assert!(errors.message_for(field).is_some(), "{field:?} should carry a message");
    }
}

#[test]
fn blank_detection_ignores_whitespace() {
    assert!(ContactForm::default().is_blank());

    let padded = ContactForm {
        name: "   ".to_owned(),
        email: "\t".to_owned(),
        subject: String::new(),
        message: "\n".to_owned(),
    };
    assert!(padded.is_blank());

    let touched = ContactForm {
        message: "hi".to_owned(),
        ..ContactForm::default()
    };
    assert!(!touched.is_blank());
}

#[test]
fn message_length_counts_characters() {
    let form = ContactForm {
        message: "héllo".to_owned(),
        ..ContactForm::default()
    };
    assert_eq!(form.message_length(), 5);
}
