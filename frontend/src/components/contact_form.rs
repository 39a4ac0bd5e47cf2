use log::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::primitives::Button;
use crate::contact::{ContactDraft, ContactField, ContactSubmission};

const ACKNOWLEDGEMENT: &str = "Message sent! (Wire this to EmailJS or your backend)";

/// Stand-in for a real endpoint: logs the payload, then hands the visitor
/// message to `notify` and returns its failure.
fn acknowledge_locally<N, E>(submission: &ContactSubmission, notify: N) -> Result<(), E>
where
    N: FnOnce(&str) -> Result<(), E>,
{
    match serde_json::to_string(submission) {
        Ok(payload) => info!("Contact form submitted: {}", payload),
        Err(err) => warn!("Could not serialize contact submission: {}", err),
    }
    notify(ACKNOWLEDGEMENT)
}

fn alert(message: &str) -> Result<(), JsValue> {
    match web_sys::window() {
        Some(window) => window.alert_with_message(message),
        None => Err(JsValue::from_str("no window to alert in")),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Receives each valid submission. Without it the form only acknowledges
    /// locally; nothing is sent anywhere.
    #[prop_or_default]
    pub on_submit: Option<Callback<ContactSubmission>>,
    #[prop_or(AttrValue::Static("Tell us about your delivery"))]
    pub message_placeholder: AttrValue,
    #[prop_or(AttrValue::Static("Send Message"))]
    pub submit_label: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let error = use_state(|| None::<String>);

    let update = |field: ContactField| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        }
    };

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = draft.submit(|submission| match &on_submit {
                Some(callback) => callback.emit(submission),
                None => {
                    if let Err(err) = acknowledge_locally(&submission, alert) {
                        warn!("Could not acknowledge contact submission: {:?}", err);
                    }
                }
            });
            match result {
                Ok(()) => {
                    error.set(None);
                    draft.set(ContactDraft::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <style>
                {r#"
                .contact-form {
                    display: grid;
                    gap: 1rem;
                }
                .contact-form label {
                    font-size: 0.875rem;
                }
                .contact-form input,
                .contact-form textarea {
                    margin-top: 0.25rem;
                    width: 100%;
                    padding: 0 0.75rem;
                    border-radius: 0.75rem;
                    border: 1px solid #e5e7eb;
                    font: inherit;
                }
                .contact-form input {
                    height: 2.75rem;
                }
                .contact-form textarea {
                    padding: 0.5rem 0.75rem;
                    resize: vertical;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #f3b3a6;
                }
                .contact-form__error {
                    color: #b91c1c;
                    font-size: 0.875rem;
                    margin: 0;
                }
                "#}
            </style>
            <div>
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    placeholder="Your name"
                    required=true
                    value={draft.name.clone()}
                    oninput={
                        let set = update(ContactField::Name);
                        move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            set(input.value());
                        }
                    }
                />
            </div>
            <div>
                <label for="contact-reach">{"Email / Phone"}</label>
                <input
                    id="contact-reach"
                    placeholder="you@example.com or +91"
                    required=true
                    value={draft.contact.clone()}
                    oninput={
                        let set = update(ContactField::Contact);
                        move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            set(input.value());
                        }
                    }
                />
            </div>
            <div>
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    rows="4"
                    placeholder={props.message_placeholder.clone()}
                    required=true
                    value={draft.message.clone()}
                    oninput={
                        let set = update(ContactField::Message);
                        move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            set(input.value());
                        }
                    }
                />
            </div>
            if let Some(message) = &*error {
                <p class="contact-form__error" role="alert">{ message.clone() }</p>
            }
            <Button kind="submit" class="btn--brand">{ props.submit_label.clone() }</Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Asha".to_string(),
            contact: "asha@example.com".to_string(),
            message: "Two boxes to Pune".to_string(),
        }
    }

    #[test]
    fn acknowledgement_reaches_the_visitor_once() {
        let mut shown = Vec::new();
        let result: Result<(), ()> = acknowledge_locally(&submission(), |message| {
            shown.push(message.to_string());
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(shown, [ACKNOWLEDGEMENT]);
    }

    #[test]
    fn failed_acknowledgement_is_reported_to_caller() {
        let result = acknowledge_locally(&submission(), |_| Err("alerts blocked"));
        assert_eq!(result, Err("alerts blocked"));
    }
}
