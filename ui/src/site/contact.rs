//! Quote request form. Submissions are confirmed in place and never leave
//! the page.

use dioxus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    /// Confirmation shown after submit, or `None` while a required field
    /// (name or email) is blank.
    pub fn confirmation(&self) -> Option<String> {
        let name = self.name.trim();
        if name.is_empty() || self.email.trim().is_empty() {
            return None;
        }
        Some(format!(
            "Thanks, {name}! A freight specialist will reach out within one business day."
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut notice = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let confirmed = form.read().confirmation();
        match confirmed {
            Some(text) => {
                tracing::info!("quote request submitted");
                notice.set(Some(text));
                form.write().clear();
            }
            None => notice.set(Some("Please add your name and email.".to_string())),
        }
    };

    let current = form.read().clone();

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { "Request a quote" }
            form { class: "contact__form", onsubmit,
                label { r#for: "contact-name", "Name" }
                input {
                    id: "contact-name",
                    r#type: "text",
                    value: "{current.name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                label { r#for: "contact-email", "Email" }
                input {
                    id: "contact-email",
                    r#type: "email",
                    value: "{current.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { r#for: "contact-company", "Company" }
                input {
                    id: "contact-company",
                    r#type: "text",
                    value: "{current.company}",
                    oninput: move |evt| form.write().company = evt.value(),
                }
                label { r#for: "contact-message", "What are you shipping?" }
                textarea {
                    id: "contact-message",
                    rows: "4",
                    value: "{current.message}",
                    oninput: move |evt| form.write().message = evt.value(),
                }
                button { class: "btn btn--primary", r#type: "submit", "Send request" }
            }
            if let Some(text) = notice() {
                p { class: "contact__notice", role: "status", "{text}" }
            }
        }
    }
}
