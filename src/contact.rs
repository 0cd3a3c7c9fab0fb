use crate::core::config::EmailConfig;
use crate::core::contact::{
    self, ContactForm, ContactMessage, DeliveryError, EmailJsRequest, Field, FormError,
    FormStatus, MailTransport,
};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::Request;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Sends contact messages through the EmailJS REST endpoint.
pub struct EmailJsTransport {
    config: EmailConfig,
}

impl EmailJsTransport {
    pub fn new(config: EmailConfig) -> Self {
        if config.is_placeholder() {
            log::warn!("[contact] EmailJS credentials are placeholders; sends will fail");
        }
        Self { config }
    }
}

impl MailTransport for EmailJsTransport {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let body = EmailJsRequest::new(&self.config, message).to_json()?;
        let response = Request::post(EMAILJS_ENDPOINT)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| DeliveryError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(());
        }
        Err(DeliveryError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

enum FieldInput {
    Input(web::HtmlInputElement),
    TextArea(web::HtmlTextAreaElement),
}

impl FieldInput {
    fn find(form: &web::HtmlFormElement, field: Field) -> Option<Self> {
        let el = form
            .query_selector(&format!("[name=\"{}\"]", field.as_str()))
            .ok()
            .flatten()?;
        match el.dyn_into::<web::HtmlInputElement>() {
            Ok(input) => Some(FieldInput::Input(input)),
            Err(el) => el.dyn_into::<web::HtmlTextAreaElement>().ok().map(FieldInput::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            FieldInput::Input(el) => el.value(),
            FieldInput::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            FieldInput::Input(el) => el.set_value(value),
            FieldInput::TextArea(el) => el.set_value(value),
        }
    }

    fn target(&self) -> &web::EventTarget {
        match self {
            FieldInput::Input(el) => el.as_ref(),
            FieldInput::TextArea(el) => el.as_ref(),
        }
    }
}

/// Reflects the form status into the page: button label and state, the
/// notice line and a `data-status` attribute on the form.
pub struct ContactView {
    form_el: web::HtmlFormElement,
    fields: Vec<(Field, Rc<FieldInput>)>,
    button: Option<web::HtmlButtonElement>,
    notice: Option<web::HtmlElement>,
    last_status: Option<FormStatus>,
}

impl ContactView {
    /// Show the current status and fire the auto-reset once its delay has
    /// passed.
    pub fn sync(&mut self, form: &RefCell<ContactForm>, now_sec: f64) {
        let status = {
            let mut form = form.borrow_mut();
            form.poll_reset(now_sec);
            form.status()
        };
        if self.last_status == Some(status) {
            return;
        }
        self.last_status = Some(status);
        _ = self.form_el.set_attribute("data-status", status.as_str());
        if let Some(button) = &self.button {
            button.set_text_content(Some(status.button_label()));
            button.set_disabled(status == FormStatus::Sending);
        }
        if let Some(notice) = &self.notice {
            notice.set_text_content(status.notice());
        }
        if status == FormStatus::Success {
            let form = form.borrow();
            for (field, input) in &self.fields {
                input.set_value(form.fields().get(*field));
            }
        }
    }
}

/// Hook up `form[data-contact-form]` inside `root`. Returns `None` when the
/// page has no contact form.
pub fn wire_contact_form(
    root: &web::Element,
    form: Rc<RefCell<ContactForm>>,
    transport: Rc<EmailJsTransport>,
    started: Instant,
) -> Option<(ContactView, Vec<EventListener>)> {
    let form_el = root
        .query_selector("form[data-contact-form]")
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlFormElement>()
        .ok()?;

    let mut listeners = Vec::new();
    let mut fields = Vec::new();
    for field in [Field::Name, Field::Email, Field::Message] {
        let Some(input) = FieldInput::find(&form_el, field) else {
            log::warn!("[contact] form has no {} field", field.as_str());
            continue;
        };
        let input = Rc::new(input);
        form.borrow_mut().set_field(field, input.value());
        {
            let form = form.clone();
            let input_for_cb = input.clone();
            listeners.push(EventListener::new(input.target(), "input", move |_| {
                form.borrow_mut().set_field(field, input_for_cb.value());
            }));
        }
        fields.push((field, input));
    }

    {
        let form = form.clone();
        let form_for_validity = form_el.clone();
        listeners.push(EventListener::new_with_options(
            &form_el,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |ev| {
                ev.prevent_default();
                let form = form.clone();
                let transport = transport.clone();
                let form_el = form_for_validity.clone();
                spawn_local(async move {
                    let clock = move || started.elapsed().as_secs_f64();
                    match contact::submit(&form, &*transport, clock).await {
                        Ok(status) => log::debug!("[contact] submit finished: {}", status.as_str()),
                        Err(FormError::Busy) => log::debug!("[contact] ignored submit while sending"),
                        Err(e) => {
                            log::info!("[contact] rejected: {}", e);
                            _ = form_el.report_validity();
                        }
                    }
                });
            },
        ));
    }

    let button = form_el
        .query_selector("button[type=\"submit\"], button")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let notice = form_el
        .query_selector("[data-form-status]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

    let view = ContactView {
        form_el,
        fields,
        button,
        notice,
        last_status: None,
    };
    Some((view, listeners))
}
