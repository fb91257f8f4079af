//! Landing page copy

use crate::core::faq::FaqItem;
use crate::core::pricing::{FeatureRow, Offer, PricingComparison, PricingError};

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
    pub avatar_src: &'static str,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "evergreen",
            quote: "We had no idea we were invisible two miles from the shop. The heatmap showed it in one screen and the playbook fixed it in a month.",
            author: "Dana Whitfield",
            company: "Evergreen Landscapes",
            avatar_src: "/images/testimonials/dana.jpg",
        },
        Testimonial {
            id: "stone-and-stem",
            quote: "The audit read like it was written by someone who has actually mowed a lawn. Calls went up the second week.",
            author: "Marcus Reyes",
            company: "Stone & Stem Hardscapes",
            avatar_src: "/images/testimonials/marcus.jpg",
        },
        Testimonial {
            id: "greenline",
            quote: "Seventy-five bucks and five minutes. Best money we spent on marketing all year.",
            author: "Priya Nair",
            company: "Greenline Lawn Care",
            avatar_src: "/images/testimonials/priya.jpg",
        },
    ]
}

pub fn faq_items() -> Vec<FaqItem> {
    vec![
        FaqItem::new(
            "what-is-heatworks",
            "What exactly is HEATWORKS?",
            "A <strong>5-minute local SEO audit</strong> for home service businesses. It maps where you rank on Google Maps across your whole metro area and tells you what is holding you back.",
        ),
        FaqItem::new(
            "how-long",
            "How long until I get my report?",
            "Sign up takes about a minute, connecting your Google Business Profile about two. Your full PDF audit and 30-day playbook land in your inbox within 24 hours.",
        ),
        FaqItem::new(
            "access",
            "Do you need access to my Google account?",
            "We only request read access to your Google Business Profile. We never post, edit or reply on your behalf.",
        ),
        FaqItem::new(
            "subscription",
            "Is this a subscription?",
            "No. The audit is a <em>one-time</em> $75 payment. If you want help carrying out the playbook, we can talk about that separately.",
        ),
        FaqItem::new(
            "not-landscaper",
            "I'm not a landscaper. Will it still work?",
            "Yes. The audit works for any business that relies on Google Maps for local leads: roofers, plumbers, cleaners and more.",
        ),
    ]
}

pub fn pricing() -> Result<PricingComparison, PricingError> {
    let offers = vec![
        Offer::new("diy", "Do It Yourself").with_price_note("Free, if your time is"),
        Offer::new("gruntworks", "HEATWORKS Audit")
            .with_price_note("$75 one-time")
            .with_differentiator("Full metro heatmap and a 30-day playbook"),
        Offer::new("agency", "Traditional Agency")
            .with_price_note("$500+/month")
            .with_differentiator("Long contracts, slow reports"),
    ];

    let features = vec![
        FeatureRow::new(
            "Metro-wide ranking heatmap",
            [
                ("diy", "❌ Manual spot checks"),
                ("gruntworks", "✅ Live, every neighborhood"),
                ("agency", "⚠️ Sometimes, extra cost"),
            ],
        ),
        FeatureRow::new(
            "100-point profile audit",
            [
                ("diy", "🤔 If you know what to look for"),
                ("gruntworks", "✅ Included"),
                ("agency", "✅ Included"),
            ],
        ),
        FeatureRow::new(
            "Time to results",
            [
                ("diy", "🕑 Weeks of research"),
                ("gruntworks", "🕑 Within 24 hours"),
                ("agency", "🕑 30-60 days onboarding"),
            ],
        ),
        FeatureRow::new(
            "Cost",
            [
                ("diy", "💸 Your evenings"),
                ("gruntworks", "💰 $75 once"),
                ("agency", "💸 Monthly retainer"),
            ],
        ),
        FeatureRow::new(
            "Step-by-step playbook",
            [("gruntworks", "✅ 30 days, plain English"), ("agency", "❌ Kept in-house")],
        ),
    ];

    PricingComparison::new(
        "Why Pay an Agency to Guess?",
        "See how the HEATWORKS audit stacks up against doing it yourself or hiring a traditional agency.",
        offers,
        features,
        None,
    )
}
