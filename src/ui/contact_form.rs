//! Contact form posting to `/api/contact`

use leptos::prelude::*;

use crate::core::forms::{CONTACT_FAILURE, ContactRequest, FormState};
use crate::ui::common::{ErrorMessage, FormField, SubmitButton, SuccessMessage, TextAreaField};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[component]
pub fn ContactForm(
    /// Site owner the message is for
    #[prop(default = "gruntworksagency")]
    client_slug: &'static str,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let pending = RwSignal::new(false);
    let state = RwSignal::new(FormState::default());

    let field_errors =
        move |field: &'static str| Signal::derive(move || state.with(|s| s.errors.get(field).to_vec()));
    let success_message =
        Signal::derive(move || state.with(|s| s.success.then(|| s.message.clone()).flatten()));
    let error_message =
        Signal::derive(move || state.with(|s| (!s.success).then(|| s.message.clone()).flatten()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let phone_value = phone.get_untracked();
        let request = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: (!phone_value.trim().is_empty()).then_some(phone_value),
            message: message.get_untracked(),
            client_slug: Some(client_slug.to_string()),
        };

        // Same rules as the server, so obvious mistakes skip the round trip
        if let Err(errors) = request.validate() {
            state.set(FormState::failed(CONTACT_FAILURE, errors));
            return;
        }

        pending.set(true);
        leptos::task::spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            {
                let outcome = submit(&request).await;
                if outcome.success {
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                    crate::ui::tracking::track(
                        "contact_form_submitted",
                        Some(serde_json::json!({ "clientSlug": client_slug })),
                    );
                }
                state.set(outcome);
            }

            #[cfg(feature = "ssr")]
            let _ = request;

            pending.set(false);
        });
    };

    view! {
        <form
            on:submit=on_submit
            novalidate=true
            class="space-y-6 rounded-2xl border border-gray-200 bg-white p-8 shadow-lg"
        >
            <h2 class="text-2xl font-bold text-brand-charcoalBlack">"Get in Touch"</h2>

            <div aria-live="polite">
                <SuccessMessage message=success_message/>
                <ErrorMessage error=error_message/>
            </div>

            <FormField
                name="name"
                label="Name"
                required=true
                placeholder="Your full name"
                value=name.into()
                on_input=Callback::new(move |v| name.set(v))
                errors=field_errors("name")
            />
            <FormField
                name="email"
                label="Email"
                required=true
                input_type="email"
                placeholder="your.email@example.com"
                value=email.into()
                on_input=Callback::new(move |v| email.set(v))
                errors=field_errors("email")
            />
            <FormField
                name="phone"
                label="Phone"
                input_type="tel"
                placeholder="(555) 123-4567"
                value=phone.into()
                on_input=Callback::new(move |v| phone.set(v))
                errors=field_errors("phone")
            />
            <TextAreaField
                name="message"
                label="Message"
                required=true
                placeholder="Tell us about your project..."
                value=message.into()
                on_input=Callback::new(move |v| message.set(v))
                errors=field_errors("message")
            />

            <input type="hidden" name="clientSlug" value=client_slug/>

            <SubmitButton
                pending=pending
                label="Send Message"
                pending_label="Submitting..."
            />
        </form>
    }
}

/// Posts the request and maps any transport failure to a generic message
#[cfg(not(feature = "ssr"))]
async fn submit(request: &ContactRequest) -> FormState {
    use crate::core::forms::{FieldErrors, NETWORK_FAILURE};
    use gloo_net::http::Request;
    use leptos::logging::error;

    let response = match Request::post(CONTACT_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(request)
    {
        Ok(req) => req.send().await,
        Err(err) => Err(err),
    };

    let response = match response {
        Ok(response) => response,
        Err(err) => {
            error!("Contact form request failed: {}", err);
            return FormState::failed(NETWORK_FAILURE, FieldErrors::new());
        }
    };

    // Validation failures come back as a FormState body with a 4xx status
    match response.json::<FormState>().await {
        Ok(state) => state,
        Err(err) => {
            error!("Contact form response unreadable ({}): {}", response.status(), err);
            FormState::failed(NETWORK_FAILURE, FieldErrors::new())
        }
    }
}
