use dioxus::prelude::*;

use folio::features::contact::{ContactForm, DeliveryError, Dispatch, Field, MESSAGE_MAX, validate};

use crate::components::sections::Section;
use crate::components::ui::icons;
use crate::content;
use crate::hooks::use_reveal;

const DISPATCH: Dispatch = Dispatch::deliver();

#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Which fields the visitor has typed into. Rules are checked on every
/// keystroke, but a field only shows its message once it has been edited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Edited {
    name: bool,
    email: bool,
    subject: bool,
    message: bool,
}

impl Edited {
    const ALL: Self = Self { name: true, email: true, subject: true, message: true };

    fn mark(&mut self, field: Field) {
        match field {
            Field::Name => self.name = true,
            Field::Email => self.email = true,
            Field::Subject => self.subject = true,
            Field::Message => self.message = true,
        }
    }

    const fn shows(self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }
}

/// Contact details next to the simulated delivery form.
#[component]
pub(crate) fn Contact() -> Element {
    let revealed = use_reveal(Section::Contact.id());
    let mut form = use_signal(ContactForm::default);
    let mut edited = use_signal(Edited::default);
    let mut status = use_signal(|| SubmitStatus::Idle);

    let findings = use_memo(move || validate(&form()).err());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == SubmitStatus::Sending || findings().is_some() {
            return;
        }
        let current = form();
        status.set(SubmitStatus::Sending);
        spawn(async move {
            match DISPATCH.send(&current).await {
                Ok(_) => {
                    form.set(ContactForm::default());
                    edited.set(Edited::default());
                    status.set(SubmitStatus::Sent);
                }
                Err(DeliveryError::Invalid(_)) => {
                    // The button gating should make this unreachable; expose
                    // every message rather than swallowing the rejection.
                    edited.set(Edited::ALL);
                    status.set(SubmitStatus::Idle);
                }
                Err(DeliveryError::Rejected { message }) => {
                    status.set(SubmitStatus::Failed(message.into_owned()));
                }
            }
        });
    };

    let profile = content::profile();
    let phone_href = format!("tel:{}", profile.phone.replace(' ', ""));
    let current = form();
    let findings_now = findings();
    let edited_now = edited();
    let message_of = |field: Field| -> Option<String> {
        if !edited_now.shows(field) {
            return None;
        }
        findings_now.as_ref().and_then(|errors| errors.message_for(field)).map(ToOwned::to_owned)
    };
    let name_error = message_of(Field::Name);
    let email_error = message_of(Field::Email);
    let subject_error = message_of(Field::Subject);
    let message_error = message_of(Field::Message);
    let sending = status() == SubmitStatus::Sending;
    let message_length = current.message_length();
    // Locked until the form is both edited and rule-clean.
    let locked = sending || current.is_blank() || findings_now.is_some();

    rsx! {
        section { id: "contact", class: "section contact",
            div {
                class: "section-inner reveal",
                class: if revealed() { "is-revealed" },
                header { class: "section-heading",
                    p { class: "section-eyebrow", "Get in touch" }
                    h2 { "Contact" }
                }
                div { class: "contact-grid",
                    div { class: "contact-info",
                        p { class: "contact-pitch",
                            "Have a project in mind, a role to fill, or just want to say \
                             hello? My inbox is always open."
                        }
                        div { class: "contact-channels",
                            a { class: "contact-channel", href: "mailto:{profile.email}",
                                icons::Mail {}
                                div {
                                    span { class: "contact-channel-label", "Email" }
                                    span { {profile.email.clone()} }
                                }
                            }
                            a {
                                class: "contact-channel",
                                href: phone_href,
                                icons::Phone {}
                                div {
                                    span { class: "contact-channel-label", "Phone" }
                                    span { {profile.phone.clone()} }
                                }
                            }
                            div { class: "contact-channel",
                                icons::MapPin {}
                                div {
                                    span { class: "contact-channel-label", "Location" }
                                    span { {profile.location.clone()} }
                                }
                            }
                        }
                        div { class: "contact-socials",
                            for social in content::socials() {
                                a {
                                    key: "{social.label}",
                                    class: "icon-button",
                                    href: "{social.url}",
                                    target: "_blank",
                                    rel: "noreferrer",
                                    aria_label: "{social.label}",
                                    icons::SocialIcon { kind: social.kind }
                                }
                            }
                        }
                    }
                    form { class: "contact-form", novalidate: true, onsubmit: submit,
                        div { class: "form-row",
                            div { class: "form-field",
                                label { r#for: "contact-name", "Name" }
                                input {
                                    id: "contact-name",
                                    name: "name",
                                    r#type: "text",
                                    placeholder: "Your name",
                                    value: "{current.name}",
                                    class: if name_error.is_some() { "is-invalid" },
                                    oninput: move |evt| {
                                        form.write().name = evt.value();
                                        edited.write().mark(Field::Name);
                                    },
                                }
                                if let Some(message) = name_error.clone() {
                                    p { class: "field-error", role: "alert", {message} }
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "contact-email", "Email" }
                                input {
                                    id: "contact-email",
                                    name: "email",
                                    r#type: "email",
                                    placeholder: "you@example.com",
                                    value: "{current.email}",
                                    class: if email_error.is_some() { "is-invalid" },
                                    oninput: move |evt| {
                                        form.write().email = evt.value();
                                        edited.write().mark(Field::Email);
                                    },
                                }
                                if let Some(message) = email_error.clone() {
                                    p { class: "field-error", role: "alert", {message} }
                                }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-subject", "Subject" }
                            input {
                                id: "contact-subject",
                                name: "subject",
                                r#type: "text",
                                placeholder: "What is this about?",
                                value: "{current.subject}",
                                class: if subject_error.is_some() { "is-invalid" },
                                oninput: move |evt| {
                                    form.write().subject = evt.value();
                                    edited.write().mark(Field::Subject);
                                },
                            }
                            if let Some(message) = subject_error.clone() {
                                p { class: "field-error", role: "alert", {message} }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-message", "Message" }
                            textarea {
                                id: "contact-message",
                                name: "message",
                                rows: 6,
                                placeholder: "Tell me about your project...",
                                value: "{current.message}",
                                class: if message_error.is_some() { "is-invalid" },
                                oninput: move |evt| {
                                    form.write().message = evt.value();
                                    edited.write().mark(Field::Message);
                                },
                            }
                            div { class: "form-field-meta",
                                if let Some(message) = message_error.clone() {
                                    p { class: "field-error", role: "alert", {message} }
                                }
                                span { class: "char-count", "{message_length} / {MESSAGE_MAX}" }
                            }
                        }
                        match status() {
                            SubmitStatus::Sent => rsx! {
                                div { class: "form-banner form-banner-success", role: "status",
                                    "Thanks for your message! I'll get back to you within 24 hours."
                                }
                            },
                            SubmitStatus::Failed(reason) => rsx! {
                                div { class: "form-banner form-banner-error", role: "alert",
                                    {reason}
                                }
                            },
                            _ => rsx! {},
                        }
                        button {
                            r#type: "submit",
                            class: "button button-primary form-submit",
                            disabled: locked,
                            if sending {
                                span { class: "spinner", aria_hidden: true }
                                "Sending..."
                            } else {
                                icons::Send {}
                                "Send Message"
                            }
                        }
                    }
                }
            }
        }
    }
}
