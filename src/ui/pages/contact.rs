//! Contact page: business details beside the contact form

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::contact_form::ContactForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::Footer;

struct OfficeHours {
    days: &'static str,
    hours: &'static str,
}

const OFFICE_HOURS: [OfficeHours; 3] = [
    OfficeHours { days: "Monday - Friday", hours: "9:00 AM - 6:00 PM" },
    OfficeHours { days: "Saturday", hours: "10:00 AM - 4:00 PM" },
    OfficeHours { days: "Sunday", hours: "Closed" },
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact Us | HEATWORKS"/>
        <Meta name="description" content="Questions about the HEATWORKS audit? Call, email or send us a message."/>

        <main class="min-h-screen bg-cream-sky px-4 pb-16 pt-32">
            <div class="container mx-auto max-w-6xl">
                <h1 class="mb-12 text-center text-4xl font-black text-brand-charcoalBlack md:text-5xl">
                    "Contact Us"
                </h1>

                <div class="grid grid-cols-1 gap-12 lg:grid-cols-2">
                    <div class="space-y-8">
                        <div>
                            <h2 class="mb-4 text-2xl font-bold text-brand-charcoalBlack">"Get in Touch"</h2>
                            <p class="text-brand-charcoalBlack/80">
                                "Ready to take your business to the next level? We're here to help you succeed with tailored solutions and expert guidance."
                            </p>
                        </div>

                        <div class="space-y-4">
                            <h3 class="text-lg font-semibold text-brand-charcoalBlack">"Business Info"</h3>
                            <InfoLine icon=icons::PHONE label="Phone">
                                <a href="tel:+15551234567" class="hover:text-brand-safetyOrange">"(555) 123-4567"</a>
                            </InfoLine>
                            <InfoLine icon=icons::MAIL label="Email">
                                <a href="mailto:info@gruntworksagency.com" class="hover:text-brand-safetyOrange">
                                    "info@gruntworksagency.com"
                                </a>
                            </InfoLine>
                            <InfoLine icon=icons::MAP_PIN label="Address">
                                <address class="not-italic">"123 Business St, City, State 12345"</address>
                            </InfoLine>
                        </div>

                        <div class="space-y-4">
                            <h3 class="flex items-center gap-2 text-lg font-semibold text-brand-charcoalBlack">
                                <Icon name=icons::CLOCK class="h-5 w-5"/>
                                "Office Hours"
                            </h3>
                            <dl class="grid grid-cols-2 gap-y-2 text-brand-charcoalBlack/80">
                                {OFFICE_HOURS
                                    .iter()
                                    .map(|row| view! {
                                        <dt class="font-medium">{row.days}</dt>
                                        <dd>{row.hours}</dd>
                                    })
                                    .collect_view()}
                            </dl>
                        </div>
                    </div>

                    <ContactForm/>
                </div>
            </div>
        </main>
        <Footer/>
    }
}

#[component]
fn InfoLine(icon: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <span class="mt-1 flex h-9 w-9 items-center justify-center rounded-full bg-brand-creamWhite">
                <Icon name=icon class="h-4 w-4"/>
            </span>
            <div>
                <div class="text-sm font-medium text-brand-charcoalBlack/60">{label}</div>
                <div class="text-brand-charcoalBlack">{children()}</div>
            </div>
        </div>
    }
}
