use chrono::Utc;
use folio_contact::{
    ContactForm, DeliveryError, Dispatch, Field, Outcome, SIMULATED_LATENCY_MS,
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
fn default_dispatch_delivers_with_simulated_latency() {
    let dispatch = Dispatch::default();
    assert_eq!(dispatch, Dispatch::deliver());
    assert_eq!(dispatch.outcome(), Outcome::Deliver);
    assert_eq!(Dispatch::deliver(), Dispatch::deliver().with_latency_ms(SIMULATED_LATENCY_MS));
}

#[tokio::test]
async fn a_valid_form_resolves_to_a_receipt() {
    let dispatch = Dispatch::deliver().with_latency_ms(0);

    let receipt = dispatch.send(&valid_form()).await.unwrap();
    assert!(receipt.accepted_at <= Utc::now());
}

#[tokio::test]
async fn a_rejecting_channel_fails_after_the_pause() {
    let dispatch = Dispatch::reject().with_latency_ms(0);

    let err = dispatch.send(&valid_form()).await.unwrap_err();
    match err {
        DeliveryError::Rejected { message } => {
            assert!(message.contains("try again"), "message: {message}");
        }
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn an_invalid_form_fails_before_the_pause() {
    // Time is paused, so a send that reached the two second pause would
    // only resolve through the auto-advancing clock; validation failures
    // must surface without touching the timer at all.
    let dispatch = Dispatch::deliver();
    let form = ContactForm {
        email: "broken".to_owned(),
        ..valid_form()
    };

    let before = tokio::time::Instant::now();
    let err = dispatch.send(&form).await.unwrap_err();
    assert_eq!(tokio::time::Instant::now(), before);

    match err {
        DeliveryError::Invalid(errors) => {
            assert!(errors.message_for(Field::Email).is_some());
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
}
