use leptos::prelude::*;

use crate::ui::common::{Card, Pill};

struct Step {
    title: &'static str,
    duration: &'static str,
    micro_copy: &'static str,
}

static STEPS: [Step; 3] = [
    Step {
        title: "Sign Up",
        duration: "60 secs",
        micro_copy: "Fast, easy enrollment, just basic info.",
    },
    Step {
        title: "Connect Google Profile",
        duration: "2 mins",
        micro_copy: "Securely link your Google Business Profile.",
    },
    Step {
        title: "Check Your Email",
        duration: "Within 24 hrs",
        micro_copy: "Actionable insights straight to your inbox.",
    },
];

/// Three-step timeline with arrows between the cards
#[component]
pub fn HowItWorksSection() -> impl IntoView {
    let last = STEPS.len() - 1;

    view! {
        <section class="how-it-works-gradient-overlay relative bg-cover bg-center py-16 lg:py-24">
            <div class="container mx-auto max-w-4xl px-4">
                <div class="mb-4 flex justify-center">
                    <Pill main_text="How It Works"/>
                </div>
                <h2 class="mb-12 text-center text-4xl font-bold font-display text-brand-creamWhite lg:mb-16 lg:text-5xl">
                    "Super Easy - Super Fast"
                </h2>

                <ol class="relative flex flex-col gap-8 lg:grid lg:grid-cols-3">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(idx, step)| view! {
                            <li class="relative flex flex-col items-center">
                                <span
                                    class="absolute -top-4 left-1/2 z-10 flex h-8 w-8 -translate-x-1/2 items-center justify-center rounded-full border-4 border-white bg-orange-500 text-base font-bold text-white shadow-md"
                                    aria-label=format!("Step {}", idx + 1)
                                >
                                    {idx + 1}
                                </span>
                                <Card
                                    title=step.title
                                    subtitle=step.duration
                                    description=step.micro_copy
                                    class="flex w-full flex-col pt-6"
                                />
                                {(idx < last).then(|| view! { <StepArrow/> })}
                            </li>
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

/// Down arrow on narrow screens, right arrow beside the card on wide ones
#[component]
fn StepArrow() -> impl IntoView {
    view! {
        <div class="my-2 flex w-full items-center justify-center lg:hidden" aria-hidden="true">
            <svg width="24" height="32" viewBox="0 0 24 32" fill="none">
                <line x1="12" y1="4" x2="12" y2="28" stroke="#FFA500" stroke-width="3" stroke-linecap="round"/>
                <polygon points="6,28 12,32 18,28" fill="#FFA500"/>
            </svg>
        </div>
        <div
            class="absolute right-0 top-1/2 z-0 hidden h-6 w-16 translate-x-1/2 -translate-y-1/2 items-center justify-center lg:flex"
            aria-hidden="true"
        >
            <svg width="64" height="24" viewBox="0 0 64 24" fill="none">
                <line x1="4" y1="12" x2="60" y2="12" stroke="#FFA500" stroke-width="3" stroke-linecap="round"/>
                <polygon points="60,6 64,12 60,18" fill="#FFA500"/>
            </svg>
        </div>
    }
}
