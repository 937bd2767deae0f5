use log::{info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// What a visitor typed into the contact form. Submitting only logs it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn to_log_record(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable form: {}>", e))
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm {
                message: input.value(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let missing = form.missing_fields();
            if missing.is_empty() {
                info!("Form submitted: {}", form.to_log_record());
            } else {
                warn!("Form submitted with missing fields: {}", missing.join(", "));
            }
        })
    };

    html! {
        <section class="contact-section">
            <style>
                {r#"
                .contact-section {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    padding: 5rem 1.5rem;
                    background: linear-gradient(180deg, #a48de2 0%, #6999c0 100%);
                }
                .contact-content {
                    position: relative;
                    z-index: 10;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .contact-content h2 {
                    text-align: center;
                    font-size: clamp(3.75rem, 9vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .contact-content h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 4rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    font-size: 1.125rem;
                    color: #fff;
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 0.5rem;
                    resize: none;
                    transition: border-color 0.3s;
                }
                .contact-form input::placeholder,
                .contact-form textarea::placeholder {
                    color: rgba(255, 255, 255, 0.6);
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: rgba(255, 255, 255, 0.6);
                }
                .contact-submit {
                    padding: 1rem 2rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 0.5rem;
                    cursor: pointer;
                    transition: background 0.3s;
                }
                .contact-submit:hover {
                    background: rgba(255, 255, 255, 0.3);
                }
                .socials {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .socials a {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    color: #fff;
                    text-decoration: none;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                "#}
            </style>
            <div class="contact-content">
                <h2>{"Kontakt"}</h2>
                <h3>{"Želite da postanemo vaša NIT sa svetom?"}</h3>

                <form class="contact-form" {onsubmit}>
                    <input
                        type="text"
                        name="name"
                        placeholder="Ime"
                        required=true
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Email"
                        required=true
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                    <textarea
                        name="message"
                        placeholder="Poruka"
                        rows="6"
                        required=true
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    <button type="submit" class="contact-submit">{"➤ Započni nit"}</button>
                </form>

                <div class="socials">
                    <a href="#" aria-label="Instagram">{"IG"}</a>
                    <a href="#" aria-label="LinkedIn">{"in"}</a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "   ".to_string(),
            message: String::new(),
        };
        assert_eq!(form.missing_fields(), vec!["email", "message"]);
    }

    #[test]
    fn log_record_is_json() {
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Zdravo".to_string(),
        };
        assert!(form.missing_fields().is_empty());
        assert_eq!(
            form.to_log_record(),
            r#"{"name":"Ana","email":"ana@example.com","message":"Zdravo"}"#
        );
    }
}
