use crate::constants::{STATUS_ERROR_CLASS, STATUS_OK_CLASS};
use crate::core::contact::submit_with;
use crate::core::markup::{
    ID_CONTACT_EMAIL, ID_CONTACT_MESSAGE, ID_CONTACT_NAME, ID_CONTACT_STATUS, ID_CONTACT_SUBMIT,
};
use crate::core::{ContactSubmission, LoggingSink};
use crate::dom::{self, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct FormFields {
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
    status: web::Element,
}

impl FormFields {
    fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            name: dom::element_by_id(document, ID_CONTACT_NAME)?,
            email: dom::element_by_id(document, ID_CONTACT_EMAIL)?,
            message: dom::element_by_id(document, ID_CONTACT_MESSAGE)?,
            status: dom::element_by_id(document, ID_CONTACT_STATUS)?,
        })
    }

    fn read(&self) -> ContactSubmission {
        ContactSubmission::new(&self.name.value(), &self.email.value(), &self.message.value())
    }

    fn clear(&self) {
        self.name.set_value("");
        self.email.set_value("");
        self.message.set_value("");
    }

    fn set_status(&self, text: &str, ok: bool) {
        self.status.set_text_content(Some(text));
        let cl = self.status.class_list();
        _ = cl.toggle_with_force(STATUS_OK_CLASS, ok);
        _ = cl.toggle_with_force(STATUS_ERROR_CLASS, !ok);
    }
}

/// Contact form stub: validates locally and hands the result to a logging sink.
pub struct ContactForm {
    sink: Rc<RefCell<LoggingSink>>,
    _submit: EventListener,
}

impl ContactForm {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let fields = FormFields::lookup(document)?;
        let sink = Rc::new(RefCell::new(LoggingSink::default()));
        let sink_click = sink.clone();
        let submit = dom::add_click_listener(document, ID_CONTACT_SUBMIT, move || {
            let submission = fields.read();
            match submit_with(&mut *sink_click.borrow_mut(), &submission) {
                Ok(msg) => {
                    fields.clear();
                    fields.set_status(msg, true);
                }
                Err(e) => {
                    log::warn!("[contact] rejected: {}", e);
                    fields.set_status(&e.to_string(), false);
                }
            }
        })?;
        Ok(Self {
            sink,
            _submit: submit,
        })
    }

    pub fn accepted(&self) -> usize {
        self.sink.borrow().accepted()
    }
}
