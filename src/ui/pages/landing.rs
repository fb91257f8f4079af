//! Landing page: hero with the fly, features, pricing, testimonials and FAQ

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::content;
use crate::ui::hero::Hero;
use crate::ui::sections::{
    CtaBanner, FaqSection, FeaturesSection, Footer, HowItWorksSection, PricingSection,
    TestimonialsSection,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta/>

        <main class="overflow-x-hidden">
            <Hero/>
            <FeaturesSection/>
            <HowItWorksSection/>
            <PricingSection comparison=content::pricing()/>
            <TestimonialsSection
                title="Landscapers Who Stopped Guessing"
                subtext="Real owners, real maps, real phone calls."
                testimonials=content::testimonials()
            />
            <FaqSection
                items=content::faq_items()
                cta_label="Still have questions? Talk to us"
                cta_href="/contact"
            />
            <CtaBanner/>
        </main>
        <Footer/>
    }
}

/// Search and social metadata for the home page
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="HEATWORKS - The Ultimate Local SEO Audit"/>

        <Meta name="description" content="See your actual Google Maps rankings across your entire metro area. A 5-minute local SEO audit for landscapers and home service businesses."/>
        <Meta name="keywords" content="local SEO audit, Google Maps ranking, Google Business Profile, landscaper marketing, home services SEO, ranking heatmap"/>

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:url" content="https://heatworks.io/"/>
        <Meta property="og:title" content="HEATWORKS - The Ultimate Local SEO Audit"/>
        <Meta property="og:description" content="Invisible on Google Maps? See where you rank across your metro in 5 minutes."/>
        <Meta property="og:image" content="https://heatworks.io/og-image.png"/>

        // Twitter
        <Meta property="twitter:card" content="summary_large_image"/>
        <Meta property="twitter:title" content="HEATWORKS - The Ultimate Local SEO Audit"/>
        <Meta property="twitter:description" content="Invisible on Google Maps? See where you rank across your metro in 5 minutes."/>
        <Meta property="twitter:image" content="https://heatworks.io/og-image.png"/>

        <Link rel="canonical" href="https://heatworks.io/"/>

        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"Service","name":"HEATWORKS Local SEO Audit","serviceType":"Local SEO audit","description":"Metro-wide Google Maps ranking heatmap, 100-point profile audit and a 30-day playbook","url":"https://heatworks.io","provider":{"@type":"Organization","name":"Gruntworks Agency"},"offers":{"@type":"Offer","price":"75","priceCurrency":"USD"}}"#></script>
    }
}
