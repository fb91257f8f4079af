//! Testimonial carousel

use leptos::prelude::*;

use crate::core::carousel::Carousel;
use crate::ui::content::Testimonial;
use crate::ui::icon::{Icon, icons};

const ARROW_BUTTON: &str = "absolute top-1/2 z-20 -translate-y-1/2 rounded-full bg-brand-creamWhite/50 p-2 shadow-md transition-colors hover:bg-brand-creamWhite/80";

#[component]
pub fn TestimonialsSection(
    title: &'static str,
    subtext: &'static str,
    testimonials: Vec<Testimonial>,
) -> impl IntoView {
    view! {
        <section
            class="bg-gradient-to-b from-cream-sky to-soft-blue-sky py-16 md:py-24"
            aria-labelledby="testimonials-heading"
        >
            <div class="mx-auto max-w-[1440px] px-4 sm:px-8">
                <div class="mb-12 flex flex-col items-center gap-4 text-center md:mb-16">
                    <h2
                        id="testimonials-heading"
                        class="max-w-[720px] text-3xl font-semibold leading-tight text-brand-charcoalBlack sm:text-5xl"
                    >
                        {title}
                    </h2>
                    <p class="max-w-[600px] font-medium text-brand-charcoalBlack/80 sm:text-xl">{subtext}</p>
                </div>
                <TestimonialCarousel testimonials=testimonials/>
            </div>
        </section>
    }
}

/// One testimonial at a time with arrows, dots and autoplay
#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    if testimonials.is_empty() {
        return ().into_any();
    }

    let carousel = RwSignal::new(Carousel::new(testimonials.len()));
    let has_controls = carousel.with_untracked(Carousel::has_controls);

    // The interval is recreated on every resume so the next slide is a full
    // interval away
    #[cfg(not(feature = "ssr"))]
    {
        if has_controls {
            use crate::core::carousel::AUTOPLAY_INTERVAL;
            use leptos::leptos_dom::helpers::IntervalHandle;

            let playing = Memo::new(move |_| carousel.with(Carousel::is_playing));
            let autoplay: StoredValue<Option<IntervalHandle>> = StoredValue::new(None);
            let stop = move || {
                if let Some(handle) = autoplay.try_update_value(Option::take).flatten() {
                    handle.clear();
                }
            };

            Effect::new(move |_| {
                let playing = playing.get();
                stop();
                if !playing {
                    return;
                }
                match set_interval_with_handle(
                    move || carousel.maybe_update(|c| c.tick(AUTOPLAY_INTERVAL)),
                    AUTOPLAY_INTERVAL,
                ) {
                    Ok(handle) => autoplay.set_value(Some(handle)),
                    Err(err) => leptos::logging::warn!("Carousel autoplay unavailable: {:?}", err),
                }
            });

            on_cleanup(stop);
        }
    }

    let slides = StoredValue::new(testimonials);
    let current = move || {
        let index = carousel.with(Carousel::index);
        slides.with_value(|slides| slides.get(index).cloned())
    };

    view! {
        <div
            class="relative flex w-full flex-col items-center justify-center"
            role="region"
            aria-roledescription="carousel"
            aria-label="Testimonials"
            on:mouseenter=move |_| carousel.update(Carousel::hover_start)
            on:mouseleave=move |_| carousel.update(Carousel::hover_end)
        >
            <div class="relative flex min-h-[450px] w-full items-center justify-center overflow-hidden">
                {has_controls.then(|| view! {
                    <button
                        class=format!("{} left-2 sm:left-4 md:left-8", ARROW_BUTTON)
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(Carousel::prev)
                    >
                        <Icon name=icons::ARROW_LEFT class="h-6 w-6 md:h-8 md:w-8"/>
                    </button>
                })}

                {move || current().map(|testimonial| view! {
                    <div
                        class="flex w-full animate-fadeIn items-center justify-center"
                        role="group"
                        aria-roledescription="slide"
                        aria-label=carousel.with(Carousel::slide_label)
                    >
                        <TestimonialCard testimonial=testimonial/>
                    </div>
                })}

                {has_controls.then(|| view! {
                    <button
                        class=format!("{} right-2 sm:right-4 md:right-8", ARROW_BUTTON)
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(Carousel::next)
                    >
                        <Icon name=icons::ARROW_RIGHT class="h-6 w-6 md:h-8 md:w-8"/>
                    </button>
                })}
            </div>

            {has_controls.then(|| view! {
                <div class="mt-8 flex justify-center space-x-2" role="tablist" aria-label="Testimonial navigation dots">
                    {(0..carousel.with_untracked(Carousel::len))
                        .map(|index| {
                            let selected = move || carousel.with(|c| c.index() == index);
                            view! {
                                <button
                                    role="tab"
                                    class="h-3 w-3 rounded-full transition-all duration-300 ease-out"
                                    class=("bg-brand-steelBlue", selected)
                                    class=("scale-125", selected)
                                    class=("bg-neutral-300", move || !selected())
                                    aria-selected=move || selected().to_string()
                                    aria-label=format!("Go to testimonial {}", index + 1)
                                    on:click=move |_| carousel.update(|c| c.go_to(index))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
    .into_any()
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initials: String = testimonial.author.chars().take(2).collect();

    view! {
        <figure class="group relative flex max-w-[320px] flex-col overflow-hidden rounded-lg bg-brand-charcoalBlack p-6 text-start text-brand-creamWhite transition-all duration-200 ease-out hover:-translate-y-1">
            <figcaption class="z-10 flex items-center gap-3">
                <span class="relative flex h-12 w-12 shrink-0 items-center justify-center overflow-hidden rounded-full bg-brand-oliveGreen">
                    <span class="absolute">{initials}</span>
                    <img
                        src=testimonial.avatar_src
                        alt=testimonial.author
                        class="relative h-full w-full object-cover grayscale"
                    />
                </span>
                <div class="flex flex-col items-start">
                    <h3 class="font-semibold leading-none">{testimonial.author}</h3>
                    <p class="text-sm text-brand-creamWhite/80">{testimonial.company}</p>
                </div>
            </figcaption>
            <blockquote class="z-10 mt-4 text-sm text-brand-creamWhite/80 sm:text-base">
                {testimonial.quote}
            </blockquote>
            <div class="grain-overlay absolute inset-0 z-0 opacity-10" aria-hidden="true"></div>
        </figure>
    }
}
