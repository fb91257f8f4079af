//! Status banners for form results and configuration problems

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div
                role="alert"
                class="flex items-center gap-2 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            >
                <Icon name=icons::ALERT_CIRCLE class="h-4 w-4"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success message component
/// Displays a success message with a check icon
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div
                role="status"
                class="flex items-center gap-2 rounded-lg border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-700"
            >
                <Icon name=icons::CHECK class="h-4 w-4"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Full-width section shown in place of content that cannot render
#[component]
pub fn ConfigurationError(
    /// What went wrong
    message: String,
) -> impl IntoView {
    view! {
        <section class="py-16 px-4">
            <div class="mx-auto max-w-2xl rounded-xl border border-red-300 bg-red-50 p-8 text-center">
                <h2 class="mb-2 text-xl font-bold text-red-700">"Configuration Error"</h2>
                <p class="text-red-600">{message}</p>
            </div>
        </section>
    }
}
