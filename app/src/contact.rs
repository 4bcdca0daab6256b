//! The contact page: an "about me" section and a contact form.
//!
//! There is no mail backend. Submission validates the fields, builds a
//! percent-encoded `mailto:` deep link and hands off to the visitor's mail
//! client; a transient status message confirms the hand-off. No delivery
//! confirmation exists beyond opening the client.

use leptos::prelude::*;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::time::Duration;

/// Where contact messages are addressed.
pub const CONTACT_ADDRESS: &str = "jtroncosoart@gmail.com";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Field-level validation mirrored from the form's inline hints.
pub(crate) fn validate(form: &ContactForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.message.trim().is_empty()
    {
        return Err("Por favor completa todos los campos");
    }
    let email = form.email.trim();
    if !email.contains('@') || !email.contains('.') {
        return Err("Por favor ingresa un email válido");
    }
    Ok(())
}

pub(crate) const SENT_CONFIRMATION: &str = "¡Mensaje enviado! Te responderé pronto.";
pub(crate) const FALLBACK_CONFIRMATION: &str =
    "Cliente de correo abierto. Completa el envío allí.";

/// Status message after the mailto hand-off. A blocked popup falls back to a
/// same-window navigation, and the message reflects which path was taken.
pub(crate) const fn handoff_confirmation(popup_opened: bool) -> &'static str {
    if popup_opened {
        SENT_CONFIRMATION
    } else {
        FALLBACK_CONFIRMATION
    }
}

/// Build the mail-client deep link for a validated form.
pub(crate) fn build_mailto(form: &ContactForm) -> String {
    let subject = format!("Nuevo mensaje de {} desde tu portfolio", form.name.trim());
    let body = format!(
        "Nombre: {}\r\nEmail: {}\r\n\r\nMensaje:\r\n{}",
        form.name.trim(),
        form.email.trim(),
        form.message.trim()
    );

    format!(
        "mailto:{CONTACT_ADDRESS}?subject={}&body={}",
        utf8_percent_encode(&subject, NON_ALPHANUMERIC),
        utf8_percent_encode(&body, NON_ALPHANUMERIC)
    )
}

/// Renders the contact page.
///
/// Form state lives in `RwSignal`s; a submission opens the mailto link in a
/// new window, falling back to a same-window navigation when the popup is
/// blocked, then clears the form and shows a status message for a few
/// seconds.
pub fn component() -> impl IntoView {
    let state = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(None::<(&'static str, bool)>);

    let show_status = move |message: &'static str, is_error: bool| {
        status.set(Some((message, is_error)));
        set_timeout(move || status.set(None), Duration::from_secs(5));
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = state.get();
        match validate(&form) {
            Err(message) => show_status(message, true),
            Ok(()) => {
                let link = build_mailto(&form);
                // Popup blockers return no window; fall back to navigating
                // the current one like the rest of the mailto world does.
                let popup_opened =
                    matches!(window().open_with_url_and_target(&link, "_blank"), Ok(Some(_)));
                if !popup_opened {
                    let _ = window().location().set_href(&link);
                }
                state.set(ContactForm::default());
                show_status(handoff_confirmation(popup_opened), false);
            }
        }
    };

    view! {
        <div class="text-white">
            <section class="px-4 pt-12 pb-16 sm:px-6">
                <div class="mx-auto max-w-3xl">
                    <h1 class="mb-6 text-4xl font-extrabold sm:text-5xl text-[#ffef5c]">
                        "Hablemos de tu proyecto"
                    </h1>
                    <p class="mb-2 text-gray-300">
                        "Ilustración, diseño gráfico, animación y experiencias de realidad aumentada."
                    </p>
                    <p class="text-gray-300">
                        "Escríbeme y te responderé lo antes posible."
                    </p>
                </div>
            </section>

            <section class="py-12 px-4 sm:px-6 bg-[#2a2a2a]">
                <div class="mx-auto max-w-3xl">
                    <h2 class="mb-8 text-3xl font-bold text-[#ffef5c]">"Contacto"</h2>
                    <form id="contact-form" class="space-y-6" on:submit=submit>
                        <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                            <input
                                id="name"
                                name="name"
                                placeholder="Tu nombre"
                                type="text"
                                autocomplete="name"
                                prop:value=move || state.get().name
                                on:input=move |ev| {
                                    let name = event_target_value(&ev);
                                    state.update(|prev| prev.name = name);
                                }
                                class="py-3 px-4 w-full placeholder-gray-400 text-white rounded-lg transition-shadow focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]"
                            />
                            <input
                                id="email"
                                name="email"
                                placeholder="Tu email"
                                type="email"
                                autocomplete="email"
                                prop:value=move || state.get().email
                                on:input=move |ev| {
                                    let email = event_target_value(&ev);
                                    state.update(|prev| prev.email = email);
                                }
                                class="py-3 px-4 w-full placeholder-gray-400 text-white rounded-lg transition-shadow focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]"
                            />
                        </div>
                        <textarea
                            id="message"
                            name="message"
                            placeholder="Tu mensaje"
                            autocomplete="off"
                            prop:value=move || state.get().message
                            on:input=move |ev| {
                                let message = event_target_value(&ev);
                                state.update(|prev| prev.message = message);
                            }
                            rows="6"
                            class="py-3 px-4 w-full placeholder-gray-400 text-white rounded-lg transition-shadow focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]"
                        />
                        <button type="submit" class="py-3 px-6 w-full text-lg font-semibold rounded-lg transition-colors cursor-pointer bg-[#ffef5c] text-[#1e1e1e] hover:bg-[#ffef5c]/90">
                            "Enviar mensaje"
                        </button>
                        <Show when=move || status.get().is_some() fallback=|| ().into_any()>
                            <p class=move || {
                                if status.get().is_some_and(|(_, is_error)| is_error) {
                                    "form-message text-red-400"
                                } else {
                                    "form-message text-[#ffef5c]"
                                }
                            }>
                                {move || status.get().map(|(message, _)| message)}
                            </p>
                        </Show>
                    </form>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ana López".to_owned(),
            email: "ana@example.com".to_owned(),
            message: "Hola, me interesa una ilustración.".to_owned(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(validate(&filled_form()), Ok(()));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut form = filled_form();
        form.message = "   ".to_owned();
        assert_eq!(validate(&form), Err("Por favor completa todos los campos"));

        assert!(validate(&ContactForm::default()).is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        form.email = "not-an-email".to_owned();
        assert_eq!(validate(&form), Err("Por favor ingresa un email válido"));
    }

    #[test]
    fn mailto_addresses_the_portfolio_owner() {
        let link = build_mailto(&filled_form());
        assert!(link.starts_with(&format!("mailto:{CONTACT_ADDRESS}?subject=")));
        assert!(link.contains("&body="));
    }

    #[test]
    fn mailto_percent_encodes_subject_and_body() {
        let link = build_mailto(&filled_form());

        // Spaces and non-ASCII must be escaped; line breaks become CRLF pairs.
        assert!(link.contains("Nuevo%20mensaje%20de%20Ana%20L%C3%B3pez"));
        assert!(link.contains("%0D%0A"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn handoff_message_depends_on_the_popup_result() {
        assert_eq!(handoff_confirmation(true), SENT_CONFIRMATION);
        assert_eq!(handoff_confirmation(false), FALLBACK_CONFIRMATION);
        assert_ne!(handoff_confirmation(true), handoff_confirmation(false));
    }

    #[test]
    fn mailto_trims_surrounding_whitespace() {
        let form = ContactForm {
            name: "  Ana  ".to_owned(),
            email: " ana@example.com ".to_owned(),
            message: " Hola ".to_owned(),
        };
        let link = build_mailto(&form);

        assert!(link.contains("Nuevo%20mensaje%20de%20Ana%20desde"));
        assert!(link.contains("ana%40example%2Ecom"));
    }
}
