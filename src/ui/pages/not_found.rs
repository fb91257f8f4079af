//! 404 page for unknown routes

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        use axum::http::StatusCode;
        use leptos_axum::ResponseOptions;

        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | HEATWORKS"/>

        <div class="flex min-h-screen flex-col items-center justify-center bg-cream-sky p-4">
            <div class="text-center">
                <div class="mx-auto mb-6 flex h-24 w-24 items-center justify-center rounded-full bg-brand-creamWhite">
                    <Icon name=icons::MAP_PIN class="h-12 w-12"/>
                </div>

                <h1 class="mb-4 text-6xl font-black text-brand-charcoalBlack">"404"</h1>
                <h2 class="mb-2 text-2xl font-semibold text-brand-charcoalBlack">
                    "Page Not Found"
                </h2>
                <p class="mx-auto mb-8 max-w-md text-brand-charcoalBlack/70">
                    "This page is as hard to find as a business without a Google profile."
                </p>

                <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                    <A
                        href="/"
                        attr:class="rounded-lg bg-brand-safetyOrange px-6 py-3 font-medium text-white transition-colors hover:bg-brand-safetyOrangeDarker"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/contact"
                        attr:class="rounded-lg border border-brand-charcoalBlack/20 px-6 py-3 font-medium text-brand-charcoalBlack transition-colors hover:bg-brand-creamWhite"
                    >
                        "Contact Us"
                    </A>
                </div>
            </div>
        </div>
    }
}
