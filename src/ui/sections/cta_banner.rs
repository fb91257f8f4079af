use leptos::prelude::*;

use crate::ui::common::CtaButton;
use crate::ui::icon::{Icon, icons};

const BENEFITS: [&str; 3] = ["Live map dashboard", "Full PDF audit report", "30-day playbook"];

#[component]
pub fn CtaBanner() -> impl IntoView {
    view! {
        <section class="bg-yellow-50 py-16 md:py-24">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mx-auto min-h-[20rem] max-w-4xl overflow-hidden rounded-xl bg-white shadow-xl md:flex md:items-stretch">
                    <div class="px-8 py-24 text-center md:w-1/2 md:px-12 md:text-left lg:px-16">
                        <h2 class="mb-4 text-3xl font-bold text-gray-900 sm:text-4xl">
                            "Ready to Grow Your Business with Us?"
                        </h2>
                        <ul class="mb-8 space-y-4 text-lg text-gray-700">
                            {BENEFITS
                                .into_iter()
                                .map(|benefit| view! {
                                    <li class="flex items-start justify-center md:justify-start">
                                        <Icon name=icons::CHECK class="mr-2 mt-1 h-5 w-5 flex-shrink-0 text-green-500"/>
                                        <span>{benefit}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                        <CtaButton href="/contact">"Book Free Consultation"</CtaButton>
                    </div>
                    <div class="relative h-64 w-full md:h-auto md:w-1/2">
                        <img
                            src="/cta_image.jpg"
                            alt="Sunny illustration of business collaboration and growth"
                            class="absolute inset-0 h-full w-full object-cover object-top"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
