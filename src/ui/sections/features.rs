use leptos::prelude::*;

use crate::ui::common::Pill;

struct FeatureCard {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    background: &'static str,
}

static FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        id: "live-heatmap",
        title: "Live Heatmap",
        description: "See who's ranking across your metro area in real time.",
        background: "/card--1.png",
    },
    FeatureCard {
        id: "100-point-audit",
        title: "100-Point Audit",
        description: "Full PDF report on your Google Business Page, Website and SEO performance.",
        background: "/card--2.png",
    },
    FeatureCard {
        id: "30-day-playbook",
        title: "30-Day Playbook",
        description: "Follow an easy step-by-step roadmap to boost visibility in 30 days flat.",
        background: "/card--3.png",
    },
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section
            id="features"
            class="features-gradient-bg film-grain-overlay relative pt-24 pb-12 sm:pt-28 md:pt-32 lg:pt-36"
        >
            <div class="container relative z-10 mx-auto max-w-[850px] px-4 text-center">
                <Pill main_text="What You'll Get" class="mx-auto"/>
                <h2 class="mb-4 text-center text-4xl font-black text-white md:text-5xl">
                    "Unearth Exactly What's Blocking Your Local SEO"
                </h2>
                <p class="mx-auto mb-12 max-w-lg text-center text-sm text-gray-300">
                    "Identify and fix your local SEO visibility gaps with our comprehensive audit, live heatmap, and personalized 30-day playbook."
                </p>

                <div class="mx-auto flex flex-col items-center justify-center gap-4 md:flex-row">
                    {FEATURE_CARDS
                        .iter()
                        .map(|card| view! {
                            <div
                                id=card.id
                                class="relative mx-auto aspect-[358/448] w-full max-w-[358px] flex-shrink-0 overflow-hidden rounded-lg shadow-lg md:basis-1/3"
                            >
                                <img
                                    src=card.background
                                    alt=format!("Background for {} card", card.title)
                                    class="absolute inset-0 h-full w-full object-cover"
                                />
                                <div class="absolute bottom-0 w-full p-4 text-left">
                                    <h3 class="text-xl font-black text-gray-900">{card.title}</h3>
                                    <p class="text-[12px] text-gray-700">{card.description}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
