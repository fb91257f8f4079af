//! Three-way pricing comparison

use leptos::prelude::*;

use crate::core::pricing::{CardLayout, FeatureRow, FeatureValue, Offer, PricingComparison, PricingError};
use crate::ui::common::{ConfigurationError, CtaButton, Tooltip, VisuallyHidden};

#[component]
pub fn PricingSection(comparison: Result<PricingComparison, PricingError>) -> impl IntoView {
    let comparison = match comparison {
        Ok(comparison) => comparison,
        Err(err) => {
            leptos::logging::error!("Pricing section not rendered: {}", err);
            return view! { <ConfigurationError message=err.to_string()/> }.into_any();
        }
    };

    let cards = comparison
        .cards()
        .map(|(offer, layout)| {
            view! { <PricingCard offer=offer.clone() layout=layout features=comparison.features.clone()/> }
        })
        .collect_view();

    view! {
        <section
            id="pricing"
            class="overflow-hidden bg-neutral-950 px-4 py-16 text-neutral-50 sm:py-20 md:px-8"
            aria-labelledby="pricing-headline"
        >
            <h2 id="pricing-headline" class="mb-3 text-center text-3xl font-bold leading-tight md:text-4xl">
                {comparison.headline.clone()}
            </h2>
            <p class="mx-auto mb-10 max-w-3xl text-center text-lg text-neutral-300 md:mb-16 md:text-xl">
                {comparison.subtext.clone()}
            </p>
            <div class="mx-auto grid max-w-6xl grid-cols-1 items-stretch gap-6 lg:grid-cols-3 lg:items-start lg:gap-8">
                {cards}
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn PricingCard(offer: Offer, layout: CardLayout, features: Vec<FeatureRow>) -> impl IntoView {
    let name_id = format!("offer-{}-name", offer.id);
    let card_class = format!(
        "relative flex flex-col rounded-2xl p-6 shadow-lg transition-transform {} {} {}",
        if layout.highlighted {
            "border-2 border-orange-500 bg-neutral-900 z-10"
        } else {
            "border border-neutral-800 bg-neutral-900/70"
        },
        layout.scale_class,
        layout.order_classes,
    );

    let rows = features
        .iter()
        .map(|row| {
            let value = row.value_for(&offer.id);
            view! {
                <div class="border-t border-neutral-700 py-3 text-sm">
                    <p class="mb-1.5 break-words text-xs font-medium text-neutral-400">{row.label.clone()}</p>
                    <FeatureCell value=value/>
                </div>
            }
        })
        .collect_view();

    let differentiator = offer.main_differentiator.clone().map(|text| {
        let differentiator_class = if layout.highlighted {
            "text-orange-300"
        } else {
            "text-neutral-200"
        };
        view! {
            <div class="mb-4 rounded-lg bg-neutral-800/60 px-2 py-3 text-center">
                <Tooltip id=format!("offer-{}-why", offer.id) text="What sets this option apart".to_string()>
                    <p class=format!("text-sm font-semibold {}", differentiator_class)>{text}</p>
                </Tooltip>
            </div>
        }
    });

    view! {
        <article class=card_class aria-labelledby=name_id.clone()>
            {layout.highlighted.then(|| view! {
                <span
                    aria-label="Best value"
                    class="absolute -top-3.5 right-3.5 rounded-full bg-orange-500 px-2.5 py-1 text-xs font-semibold text-neutral-950 shadow-md"
                >
                    "Best Value"
                </span>
            })}

            <div class="mb-4 text-center">
                <h3 id=name_id.clone() class="mb-1 text-xl font-semibold lg:text-2xl">{offer.name.clone()}</h3>
                {offer.price_note.clone().map(|note| view! {
                    <p class="text-xs text-neutral-400">{note}</p>
                })}
            </div>

            {differentiator}

            <div class="my-2 flex-grow">{rows}</div>

            {layout.highlighted.then(|| view! {
                <div class="mt-6 text-center">
                    <CtaButton href="/audit" class="w-full".to_string()>"Start Audit"</CtaButton>
                </div>
            })}
        </article>
    }
}

/// Feature text with its status emoji, or a dash when the offer has no value
#[component]
fn FeatureCell(value: Option<FeatureValue>) -> impl IntoView {
    let Some(value) = value else {
        return view! {
            <div class="flex w-full items-center text-left text-neutral-500">
                <span class="flex-grow pl-7">"—"</span>
            </div>
        }
        .into_any();
    };

    let indent = if value.emoji.is_none() { "pl-7" } else { "" };

    view! {
        <div class="flex w-full items-center text-left">
            {value.emoji.map(|emoji| view! {
                <span aria-hidden="true" class="mr-1.5 inline-flex h-6 w-7 shrink-0 items-center justify-center text-lg">
                    {emoji}
                </span>
            })}
            {value.description.map(|description| view! {
                <VisuallyHidden>{description}</VisuallyHidden>
            })}
            <span class=format!("flex-grow {}", indent)>{value.text}</span>
        </div>
    }
    .into_any()
}
