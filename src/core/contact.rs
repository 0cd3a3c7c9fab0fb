// Contact form state machine and the delivery seam.
//
// Status flow: `Idle -> Sending -> Success | Error -> Idle`. Both outcomes
// fall back to idle after [`FORM_STATUS_RESET_SEC`]. Success clears the
// fields; an error keeps them so the visitor can resubmit. Time is passed in
// explicitly as seconds so the frame loop (or a test) owns the clock.

use super::config::EmailConfig;
use super::constants::FORM_STATUS_RESET_SEC;
use serde::Serialize;
use std::cell::RefCell;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        let email = self.email.trim();
        if !is_well_formed_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(ContactMessage {
            from_name: self.name.trim().to_string(),
            from_email: email.to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// `local@domain.tld` with no whitespace, exactly one `@`, and a dot inside
/// the domain that is neither its first nor its last character.
pub fn is_well_formed_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.find('.') {
        Some(_) => !domain.starts_with('.') && !domain.ends_with('.') && !domain.contains(".."),
        None => false,
    }
}

/// Template parameters handed to the delivery service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Sending => "sending",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            FormStatus::Idle => "Envoyer le message",
            FormStatus::Sending => "Envoi en cours...",
            FormStatus::Success => "Message envoye !",
            FormStatus::Error => "Erreur, reessayez",
        }
    }

    pub fn notice(self) -> Option<&'static str> {
        match self {
            FormStatus::Success => Some("Merci ! Je reviens vers vous rapidement."),
            FormStatus::Error => Some("L'envoi a echoue. Reessayez dans un instant."),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.as_str())]
    MissingField(Field),
    #[error("email address is not well formed")]
    InvalidEmail,
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("delivery service answered HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Outbound email capability.
#[allow(async_fn_in_trait)]
pub trait MailTransport {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

/// JSON body of the EmailJS `email/send` endpoint.
#[derive(Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a EmailConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        }
    }

    pub fn to_json(&self) -> Result<String, DeliveryError> {
        serde_json::to_string(self).map_err(|e| DeliveryError::Encode(e.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    status_since: f64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            status: FormStatus::Idle,
            status_since: 0.0,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Validate and move to `Sending`. The form is unchanged on error.
    pub fn begin_submit(&mut self, now_sec: f64) -> Result<ContactMessage, FormError> {
        if self.status == FormStatus::Sending {
            return Err(FormError::Busy);
        }
        let message = self.fields.validate()?;
        self.set_status(FormStatus::Sending, now_sec);
        Ok(message)
    }

    pub fn finish(&mut self, result: &Result<(), DeliveryError>, now_sec: f64) {
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.set_status(FormStatus::Success, now_sec);
            }
            Err(_) => self.set_status(FormStatus::Error, now_sec),
        }
    }

    /// Return to idle once an outcome has been shown long enough. Returns
    /// `true` when the status changed.
    pub fn poll_reset(&mut self, now_sec: f64) -> bool {
        let settled = matches!(self.status, FormStatus::Success | FormStatus::Error);
        if settled && now_sec - self.status_since >= FORM_STATUS_RESET_SEC {
            self.set_status(FormStatus::Idle, now_sec);
            return true;
        }
        false
    }

    fn set_status(&mut self, status: FormStatus, now_sec: f64) {
        self.status = status;
        self.status_since = now_sec;
    }
}

/// Run one submission. No borrow of `form` is held across the send.
pub async fn submit<T, C>(form: &RefCell<ContactForm>, transport: &T, clock: C) -> Result<FormStatus, FormError>
where
    T: MailTransport,
    C: Fn() -> f64,
{
    let message = form.borrow_mut().begin_submit(clock())?;
    let result = transport.send(&message).await;
    match &result {
        Ok(()) => log::info!("[contact] message delivered"),
        Err(e) => log::warn!("[contact] delivery failed: {}", e),
    }
    let mut form = form.borrow_mut();
    form.finish(&result, clock());
    Ok(form.status())
}
