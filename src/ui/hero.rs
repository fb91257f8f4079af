//! Hero section: headline, price badge, iPad video and the fly

use leptos::html::{Div, Section};
use leptos::prelude::*;

use crate::core::fly::{AnchorKey, AnchorMap, hero_config, hero_offsets};
use crate::core::parallax::Parallax;
use crate::ui::common::{CtaButton, Pill};
use crate::ui::fly::FlyAnimation;

#[component]
pub fn Hero() -> impl IntoView {
    let hero_ref = NodeRef::<Section>::new();
    let pill_ref = NodeRef::<Div>::new();
    let cta_ref = NodeRef::<Div>::new();
    let ipad_bezel_ref = NodeRef::<Div>::new();

    let (bg_translate_y, set_bg_translate_y) = signal(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let parallax = Parallax::default();
        let update = move || {
            let scroll_y = window().scroll_y().unwrap_or(0.0);
            set_bg_translate_y.set(parallax.translate_y(scroll_y));
        };

        Effect::new(move |_| update());
        let handle_scroll = window_event_listener(scroll, move |_| update());
        on_cleanup(move || handle_scroll.remove());
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (set_bg_translate_y, Parallax::default());
    }

    let anchors = AnchorMap::from([
        (AnchorKey::Pill, pill_ref),
        (AnchorKey::Cta, cta_ref),
        (AnchorKey::Ipad, ipad_bezel_ref),
    ]);

    view! {
        <section
            node_ref=hero_ref
            class="relative flex min-h-screen flex-col justify-center overflow-hidden bg-[#d4e3de]"
        >
            <div
                class="absolute inset-0 mt-[175px]"
                style:transform=move || format!("translateY({}px)", bg_translate_y.get())
            >
                <img src="/hero-bg.jpg" alt="" class="mt-[-175px] h-full w-full object-cover"/>
            </div>

            <div class="relative z-20 flex flex-col items-center pb-16 md:pb-24 lg:pb-32">
                <div class="container mx-auto flex flex-col items-center px-4 pt-[12rem] text-center">
                    <div node_ref=pill_ref>
                        <h1>
                            <Pill main_text="" secondary_text="The Ultimate Local SEO Audit"/>
                        </h1>
                    </div>

                    <h2 class="mb-4 max-w-3xl text-center text-6xl font-black text-[#2d2828]">
                        "Invisible on Google Maps?"
                        <br/>
                        "Stop Losing Jobs"
                    </h2>
                    <span class="m-[-10px] text-xs">"with"</span>
                    <div class="my-4">
                        <img src="/HEATWORKS-logo.png" alt="HEATWORKS Logo" width="300" height="120" class="mx-auto"/>
                    </div>

                    <p class="mb-8 mt-4 max-w-xl text-center text-md text-[#2d2828]">
                        <span class="font-bold">"HEATWORKS"</span>
                        " is your "
                        <i>"5-minute"</i>
                        " "
                        <span class="font-medium">"Google Local Home Services Audit"</span>
                        " built for landscapers who hate guessing. See your "
                        <i>"actual rankings"</i>
                        " across your "
                        <span class="font-medium">"entire metro"</span>
                        " area."
                    </p>

                    <div class="my-8 flex flex-col items-center justify-center gap-4 sm:flex-row">
                        <PriceBadge/>
                        <div node_ref=cta_ref>
                            <CtaButton href="/audit">"Start Audit"</CtaButton>
                        </div>
                    </div>
                </div>

                <div class="relative z-20 mx-auto mt-0 w-full max-w-[1280px] px-4">
                    <div class="relative mx-auto aspect-[16/9] w-full">
                        <div
                            node_ref=ipad_bezel_ref
                            class="pointer-events-none absolute left-1/2 top-0 z-20 h-4 w-4 -translate-x-1/2"
                            aria-hidden="true"
                        ></div>
                        <img
                            src="/ipad.png"
                            alt="iPad mockup displaying Heatworks audit"
                            class="absolute inset-0 z-10 h-full w-full object-contain"
                        />
                        <div
                            class="absolute left-[15.08%] top-[15.08%] z-0 flex h-[69.84%] w-[69.84%] items-center justify-center"
                            aria-label="iPad screen area"
                        >
                            <video
                                src="/video.mp4"
                                autoplay=true
                                loop=true
                                muted=true
                                playsinline=true
                                class="h-full w-full object-cover"
                            ></video>
                            <img
                                src="/HEATWORKS-logo.png"
                                alt="HEATWORKS Logo"
                                width="300"
                                height="120"
                                class="absolute right-[10px] top-[20px] z-10 max-w-[250px]"
                            />
                        </div>
                    </div>
                </div>

                <div class="absolute bottom-[-8rem] left-0 z-[5] w-full overflow-hidden sm:bottom-[-10rem] md:bottom-[-12rem] lg:bottom-[-16rem]">
                    <img src="/grass-transition.png" alt="" width="1440" height="1035" class="h-auto w-full object-fill"/>
                </div>

                <FlyAnimation
                    anchors=anchors
                    container=hero_ref
                    offsets=hero_offsets()
                    config=hero_config()
                />
            </div>
        </section>
    }
}

/// One-time price callout next to the hero CTA
#[component]
fn PriceBadge() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center rounded-lg border-2 border-red-900 bg-white px-6 py-2 text-center shadow-md">
            <span class="mb-[-5px] text-[9px] font-bold text-red-900">"limited time"</span>
            <span class="text-xl font-bold text-black">
                "$75"
                <span class="pl-1 text-[10px] text-gray-400">"/ one-time"</span>
            </span>
        </div>
    }
}
