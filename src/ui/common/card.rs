use leptos::prelude::*;

const CARD_CLASSES: &str = "relative overflow-hidden rounded-xl bg-brand-charcoalBlack p-6 shadow-lg transition-all duration-200 ease-out hover:-translate-y-1";

/// Dark step card with an optional link target
#[component]
pub fn Card(
    title: &'static str,
    description: &'static str,
    /// Small olive line under the title
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Makes the whole card a link
    #[prop(optional)]
    href: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let content = move || {
        view! {
            <h3 class="mb-2 text-xl font-semibold font-display text-brand-creamWhite">{title}</h3>
            {subtitle.map(|text| view! { <p class="mb-3 text-sm text-brand-oliveGreen">{text}</p> })}
            <p class="text-sm text-brand-creamWhite/80">{description}</p>
            <div class="grain-overlay absolute inset-0 opacity-10" aria-hidden="true"></div>
        }
    };

    match href {
        Some(href) => view! {
            <a href=href class=format!("{} hover:shadow-xl {}", CARD_CLASSES, class)>
                {content()}
            </a>
        }
        .into_any(),
        None => view! {
            <div class=format!("{} {}", CARD_CLASSES, class)>
                {content()}
            </div>
        }
        .into_any(),
    }
}
