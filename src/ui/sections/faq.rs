use leptos::prelude::*;

use crate::core::faq::{Accordion, DEFAULT_FAQ_TITLE, EMPTY_FAQ_TEXT, FaqItem, warn_duplicate_ids};
use crate::ui::icon::{Icon, icons};

/// Single-open FAQ accordion with an optional call to action
#[component]
pub fn FaqSection(
    items: Vec<FaqItem>,
    #[prop(default = DEFAULT_FAQ_TITLE)]
    title: &'static str,
    #[prop(optional)]
    cta_label: Option<&'static str>,
    #[prop(optional)]
    cta_href: Option<&'static str>,
    /// Item expanded on first render
    #[prop(optional)]
    default_open: Option<&'static str>,
) -> impl IntoView {
    if items.is_empty() {
        return view! {
            <section id="faq" class="bg-neutral-950 px-4 py-16 lg:px-8">
                <div class="text-center text-neutral-400">{EMPTY_FAQ_TEXT}</div>
            </section>
        }
        .into_any();
    }

    warn_duplicate_ids(&items);

    let accordion = RwSignal::new(Accordion::new(default_open));

    view! {
        <section id="faq" class="bg-neutral-950 px-4 py-16 lg:px-8">
            <h2 class="mb-10 text-center font-serif text-3xl text-white md:text-5xl">{title}</h2>
            <div class="mx-auto w-full max-w-xl">
                {items
                    .into_iter()
                    .map(|item| view! { <FaqEntry item=item accordion=accordion/> })
                    .collect_view()}
            </div>
            {cta_label.zip(cta_href).map(|(label, href)| view! {
                <a
                    href=href
                    class="mx-auto mt-8 flex w-fit items-center gap-2 rounded-full border border-neutral-700 px-6 py-3 text-sm font-semibold text-white transition hover:bg-neutral-800"
                >
                    {label}
                </a>
            })}
        </section>
    }
    .into_any()
}

#[component]
fn FaqEntry(item: FaqItem, accordion: RwSignal<Accordion>) -> impl IntoView {
    let id = StoredValue::new(item.id);
    let is_open = move || id.with_value(|id| accordion.with(|a| a.is_open(id)));
    let panel_id = id.with_value(|id| format!("faq-panel-{}", id));

    view! {
        <div
            class="mb-4 overflow-hidden rounded-lg bg-neutral-900 text-white transition-shadow"
            class=("ring-1", is_open)
            class=("ring-neutral-700", is_open)
        >
            <h3>
                <button
                    class="group flex w-full items-center justify-between bg-neutral-900 p-6 text-left font-medium transition-colors hover:bg-neutral-800 focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-orange-400"
                    class=("bg-neutral-800", is_open)
                    aria-expanded=move || is_open().to_string()
                    aria-controls=panel_id.clone()
                    on:click=move |_| id.with_value(|id| accordion.update(|a| a.toggle(id)))
                >
                    <span class="block max-w-[80%] truncate">{item.question}</span>
                    <span
                        class="ml-4 inline-flex transition-transform duration-300"
                        class=("rotate-180", is_open)
                    >
                        <Icon name=icons::CHEVRON_DOWN class="h-5 w-5"/>
                    </span>
                </button>
            </h3>
            <div
                id=panel_id
                role="region"
                class="overflow-hidden transition-all duration-300 ease-out"
                class:max-h-0=move || !is_open()
                class:opacity-0=move || !is_open()
                class=("max-h-[80vh]", is_open)
            >
                <div class="px-6 pb-6 leading-relaxed text-neutral-300" inner_html=item.answer></div>
            </div>
        </div>
    }
}
