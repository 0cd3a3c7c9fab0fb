// Host-side tests for the contact form state machine and the EmailJS payload.
// Async sends run to completion with pollster.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod contact {
    include!("../src/core/contact.rs");
}

use config::EmailConfig;
use contact::*;
use std::cell::{Cell, RefCell};

/// Transport that records what the form looked like mid-send.
struct Recorder<'a> {
    form: &'a RefCell<ContactForm>,
    fail: bool,
    calls: Cell<u32>,
    status_during_send: Cell<Option<FormStatus>>,
    last_message: RefCell<Option<ContactMessage>>,
}

impl<'a> Recorder<'a> {
    fn new(form: &'a RefCell<ContactForm>, fail: bool) -> Self {
        Self {
            form,
            fail,
            calls: Cell::new(0),
            status_during_send: Cell::new(None),
            last_message: RefCell::new(None),
        }
    }
}

impl MailTransport for Recorder<'_> {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        // Borrowing here proves submit holds no borrow across the send.
        self.status_during_send
            .set(Some(self.form.borrow().status()));
        *self.last_message.borrow_mut() = Some(message.clone());
        if self.fail {
            Err(DeliveryError::Status {
                status: 400,
                body: "The user ID is invalid".into(),
            })
        } else {
            Ok(())
        }
    }
}

fn filled_form() -> RefCell<ContactForm> {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, " Ada ");
    form.set_field(Field::Email, "ada@example.com");
    form.set_field(Field::Message, "Hello there");
    RefCell::new(form)
}

#[test]
fn failed_send_keeps_fields_and_resets_after_five_seconds() {
    let form = filled_form();
    let recorder = Recorder::new(&form, true);
    let now = Cell::new(10.0);
    assert_eq!(form.borrow().status(), FormStatus::Idle);

    let result = pollster::block_on(submit(&form, &recorder, || now.get()));
    assert_eq!(result, Ok(FormStatus::Error));
    assert_eq!(recorder.status_during_send.get(), Some(FormStatus::Sending));
    assert_eq!(form.borrow().fields().name, " Ada ");
    assert_eq!(form.borrow().fields().message, "Hello there");

    assert!(!form.borrow_mut().poll_reset(14.9));
    assert_eq!(form.borrow().status(), FormStatus::Error);
    assert!(form.borrow_mut().poll_reset(15.0));
    assert_eq!(form.borrow().status(), FormStatus::Idle);
    assert_eq!(form.borrow().fields().email, "ada@example.com");
}

#[test]
fn successful_send_clears_fields_and_resets() {
    let form = filled_form();
    let recorder = Recorder::new(&form, false);
    let result = pollster::block_on(submit(&form, &recorder, || 0.0));
    assert_eq!(result, Ok(FormStatus::Success));
    assert_eq!(form.borrow().fields(), &ContactFields::default());
    let sent = recorder.last_message.borrow().clone().expect("message sent");
    assert_eq!(sent.from_name, "Ada");
    assert_eq!(sent.from_email, "ada@example.com");

    assert!(!form.borrow_mut().poll_reset(4.0));
    assert!(form.borrow_mut().poll_reset(5.0));
    assert_eq!(form.borrow().status(), FormStatus::Idle);
    assert!(!form.borrow_mut().poll_reset(100.0));
}

#[test]
fn invalid_form_never_reaches_the_transport() {
    let form = filled_form();
    form.borrow_mut().set_field(Field::Email, "not-an-email");
    let recorder = Recorder::new(&form, false);
    let result = pollster::block_on(submit(&form, &recorder, || 0.0));
    assert_eq!(result, Err(FormError::InvalidEmail));
    assert_eq!(recorder.calls.get(), 0);
    assert_eq!(form.borrow().status(), FormStatus::Idle);

    form.borrow_mut().set_field(Field::Message, "   ");
    let result = pollster::block_on(submit(&form, &recorder, || 0.0));
    assert_eq!(result, Err(FormError::MissingField(Field::Message)));
}

#[test]
fn second_submit_while_sending_is_rejected() {
    let mut form = filled_form().into_inner();
    assert!(form.begin_submit(0.0).is_ok());
    assert_eq!(form.status(), FormStatus::Sending);
    assert_eq!(form.begin_submit(0.1), Err(FormError::Busy));
    assert!(!form.poll_reset(60.0), "sending never times out");
}

#[test]
fn email_shape_checks() {
    for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@domain.io"] {
        assert!(is_well_formed_email(ok), "{ok} should pass");
    }
    for bad in [
        "",
        "plain",
        "@example.com",
        "user@",
        "user@localhost",
        "user@.com",
        "user@example.",
        "user@exa..mple.com",
        "two@@example.com",
        "a@b@c.com",
        "sp ace@example.com",
    ] {
        assert!(!is_well_formed_email(bad), "{bad:?} should fail");
    }
}

#[test]
fn missing_fields_are_reported_in_order() {
    let fields = ContactFields::default();
    assert_eq!(fields.validate(), Err(FormError::MissingField(Field::Name)));
    let mut fields = ContactFields::default();
    fields.set(Field::Name, "Ada");
    assert_eq!(fields.validate(), Err(FormError::MissingField(Field::Email)));
    assert_eq!(
        FormError::MissingField(Field::Email).to_string(),
        "email is required"
    );
}

#[test]
fn status_texts() {
    assert_eq!(FormStatus::Idle.button_label(), "Envoyer le message");
    assert_eq!(FormStatus::Sending.button_label(), "Envoi en cours...");
    assert_eq!(FormStatus::Success.button_label(), "Message envoye !");
    assert_eq!(FormStatus::Error.button_label(), "Erreur, reessayez");
    assert!(FormStatus::Idle.notice().is_none());
    assert!(FormStatus::Error.notice().is_some());
    assert_eq!(FormStatus::Sending.as_str(), "sending");
}

#[test]
fn emailjs_request_body_shape() {
    let config = EmailConfig::from_values(Some("svc_1"), Some("tpl_2"), Some("pk_3"));
    let message = ContactMessage {
        from_name: "Ada".into(),
        from_email: "ada@example.com".into(),
        message: "Hi \"there\"".into(),
    };
    let json = EmailJsRequest::new(&config, &message).to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["service_id"], "svc_1");
    assert_eq!(v["template_id"], "tpl_2");
    assert_eq!(v["user_id"], "pk_3");
    assert_eq!(v["template_params"]["from_name"], "Ada");
    assert_eq!(v["template_params"]["from_email"], "ada@example.com");
    assert_eq!(v["template_params"]["message"], "Hi \"there\"");
}

#[test]
fn delivery_errors_describe_themselves() {
    let e = DeliveryError::Status {
        status: 400,
        body: "bad".into(),
    };
    assert_eq!(e.to_string(), "delivery service answered HTTP 400: bad");
    assert!(DeliveryError::Network("offline".into())
        .to_string()
        .contains("offline"));
}
