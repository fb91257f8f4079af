use leptos::prelude::*;

/// Small rounded label with an emphasized lead text
#[component]
pub fn Pill(
    /// Bold leading text
    main_text: &'static str,
    /// Plain text after the lead
    #[prop(default = "")]
    secondary_text: &'static str,
    /// Color class for the lead text
    #[prop(default = "text-orange-500")]
    main_color: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block bg-white px-3 py-1 rounded-full text-[10px] font-semibold mb-4 backdrop-blur-sm {}",
            class
        )>
            <span class=format!("font-bold {}", main_color)>{main_text}</span>
            {(!secondary_text.is_empty()).then(|| view! {
                <span class="text-gray-700">{secondary_text}</span>
            })}
        </span>
    }
}
