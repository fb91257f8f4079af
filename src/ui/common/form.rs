use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASSES: &str = "w-full rounded-lg border border-gray-300 bg-white px-4 py-3 text-brand-charcoalBlack placeholder-gray-400 focus:border-brand-safetyOrange focus:outline-none focus:ring-2 focus:ring-brand-safetyOrange/30";

/// Field error list shown below an input
#[component]
fn FieldErrorList(errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <For
            each=move || errors.get()
            key=|err| err.clone()
            children=|err| view! {
                <p class="flex items-center gap-1 text-sm text-red-600">
                    <Icon name=icons::ALERT_CIRCLE class="h-4 w-4"/>
                    <span>{err}</span>
                </p>
            }
        />
    }
}

/// Form field with label and input
#[component]
pub fn FormField(
    /// Input name and id
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Validation messages for this field
    #[prop(into)]
    errors: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=name class="block text-sm font-medium text-brand-charcoalBlack">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=name
                name=name
                type=input_type
                class=INPUT_CLASSES
                class:border-red-500=move || !errors.get().is_empty()
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorList errors=errors/>
        </div>
    }
}

/// Text area form field
#[component]
pub fn TextAreaField(
    /// Textarea name and id
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Validation messages for this field
    #[prop(into)]
    errors: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=name class="block text-sm font-medium text-brand-charcoalBlack">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=name
                name=name
                class=format!("{} resize-none", INPUT_CLASSES)
                class:border-red-500=move || !errors.get().is_empty()
                placeholder=placeholder
                required=required
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorList errors=errors/>
        </div>
    }
}
