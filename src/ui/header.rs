//! Floating site header with the "More" services menu

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

struct ServiceLink {
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
    href: &'static str,
}

static SERVICES: [ServiceLink; 3] = [
    ServiceLink {
        title: "AI Website Creation",
        description: "Generate fully functional, client-ready websites in minutes with our AI-powered platform.",
        gradient: "from-blue-300 to-blue-500",
        href: "/services/ai-website-creation",
    },
    ServiceLink {
        title: "SEO Optimization",
        description: "Boost your clients' online visibility with our advanced SEO tools and strategies.",
        gradient: "from-orange-400 to-orange-500",
        href: "/services/seo-optimization",
    },
    ServiceLink {
        title: "Content Marketing",
        description: "Engage audiences and drive conversions with compelling, AI-assisted content.",
        gradient: "from-lime-400 to-lime-500",
        href: "/services/content-marketing",
    },
];

const NAV_LINK: &str = "text-gray-600 hover:text-gray-900 transition-colors";

/// Header component with the services menu and mobile menu support
#[component]
pub fn Header() -> impl IntoView {
    let (more_open, set_more_open) = signal(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let toggle_ref = NodeRef::<Div>::new();
    let menu_ref = NodeRef::<Div>::new();

    // Close the services menu on a press outside of it
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::mousedown;
        use wasm_bindgen::JsCast;

        let handle_mousedown = window_event_listener(mousedown, move |ev| {
            if !more_open.get_untracked() {
                return;
            }
            let Some(target) = ev.target() else {
                return;
            };
            let Some(node) = target.dyn_ref::<web_sys::Node>() else {
                return;
            };
            let inside = |node_ref: NodeRef<Div>| {
                node_ref
                    .get_untracked()
                    .is_some_and(|element| element.contains(Some(node)))
            };
            if !inside(toggle_ref) && !inside(menu_ref) {
                set_more_open.set(false);
            }
        });

        on_cleanup(move || handle_mousedown.remove());
    }

    view! {
        <header class="fixed top-4 left-1/2 -translate-x-1/2 z-50 w-[calc(100%-2rem)] max-w-[800px] rounded-2xl border border-gray-200 bg-white shadow-lg">
            <div class="relative mx-auto flex items-center justify-between px-4 py-4">
                <nav class="hidden md:flex items-center space-x-6 text-sm">
                    <a href="/#features" class=NAV_LINK>"Features"</a>
                    <a href="/#pricing" class=NAV_LINK>"Pricing"</a>
                    <div node_ref=toggle_ref class="relative">
                        <button
                            class=format!("flex items-center {}", NAV_LINK)
                            on:click=move |_| set_more_open.update(|v| *v = !*v)
                            aria-expanded=move || more_open.get().to_string()
                            aria-controls="more-menu-dropdown"
                        >
                            "More"
                            <span
                                class="ml-1 inline-flex transition-transform"
                                class=("rotate-180", move || more_open.get())
                            >
                                <Icon name=icons::CHEVRON_DOWN class="h-4 w-4"/>
                            </span>
                        </button>
                    </div>
                </nav>

                // Mobile menu button
                <button
                    class="md:hidden rounded-lg p-2 transition-colors hover:bg-gray-100"
                    on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="h-6 w-6"/> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="h-6 w-6"/> }.into_any()
                        }
                    }}
                </button>

                <div class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2">
                    <A href="/" attr:aria-label="Homepage">
                        <img src="/logo.png" alt="GRUNTWORKS Logo" width="220" height="60" class="h-12 w-auto"/>
                    </A>
                </div>

                <a
                    href="/audit"
                    class="flex items-center rounded-md bg-orange-500 px-4 py-2 text-white shadow-sm transition-colors hover:bg-orange-600"
                >
                    "Start Audit"
                    <Icon name=icons::ARROW_RIGHT class="ml-2 h-4 w-4"/>
                </a>
            </div>

            // Mobile menu
            <div
                class="md:hidden overflow-hidden transition-all duration-300"
                class:max-h-0=move || !mobile_menu_open.get()
                class:max-h-96=move || mobile_menu_open.get()
            >
                <nav class="flex flex-col gap-2 border-t border-gray-200 px-4 py-4 text-sm">
                    <a href="/#features" class=NAV_LINK on:click=move |_| set_mobile_menu_open.set(false)>
                        "Features"
                    </a>
                    <a href="/#pricing" class=NAV_LINK on:click=move |_| set_mobile_menu_open.set(false)>
                        "Pricing"
                    </a>
                    <a href="/contact" class=NAV_LINK on:click=move |_| set_mobile_menu_open.set(false)>
                        "Contact"
                    </a>
                </nav>
            </div>

            <Show when=move || more_open.get()>
                <div
                    id="more-menu-dropdown"
                    node_ref=menu_ref
                    role="menu"
                    class="absolute top-full left-1/2 -translate-x-1/2 mt-1 w-auto min-w-[600px] max-w-[700px] rounded-lg border border-gray-200 bg-white p-6 shadow-xl"
                >
                    <h3 class="mb-5 text-center text-lg font-semibold text-gray-800">
                        "Explore Our Services"
                    </h3>
                    <div class="grid grid-cols-3 gap-4">
                        {SERVICES
                            .iter()
                            .map(|service| view! {
                                <a
                                    href=service.href
                                    role="menuitem"
                                    class=format!(
                                        "group block overflow-hidden rounded-lg border border-white/20 bg-gradient-to-b shadow-md transition-shadow hover:shadow-lg {}",
                                        service.gradient
                                    )
                                >
                                    <div class="flex min-h-[160px] flex-col justify-end bg-black/20 p-5 transition-colors hover:bg-black/30">
                                        <h4 class="mb-1 text-base font-medium text-white group-hover:underline">
                                            {service.title}
                                        </h4>
                                        <p class="text-sm leading-relaxed text-white/80">{service.description}</p>
                                    </div>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </header>

        <Show when=move || more_open.get()>
            <div
                class="fixed inset-0 z-40 bg-black/10"
                aria-hidden="true"
                on:click=move |_| set_more_open.set(false)
            ></div>
        </Show>
    }
}
