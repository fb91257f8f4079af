use leptos::prelude::*;

/// Content read by screen readers but not drawn
#[component]
pub fn VisuallyHidden(
    /// Element id, for `aria-describedby`
    #[prop(optional)]
    id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span id=id class="sr-only">
            {children()}
        </span>
    }
}
