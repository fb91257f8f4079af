//! Landing page sections

pub mod cta_banner;
pub mod faq;
pub mod features;
pub mod footer;
pub mod how_it_works;
pub mod pricing;
pub mod testimonials;

pub use cta_banner::CtaBanner;
pub use faq::FaqSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use how_it_works::HowItWorksSection;
pub use pricing::PricingSection;
pub use testimonials::{TestimonialCarousel, TestimonialsSection};
