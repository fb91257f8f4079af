use leptos::prelude::*;
use leptos_router::components::A;

const FOOTER_LINK: &str = "text-sm text-brand-creamWhite/70 hover:text-brand-safetyOrange transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/10 bg-brand-charcoalBlack py-12">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mb-8 grid grid-cols-1 gap-8 md:grid-cols-4">
                    <div class="md:col-span-2">
                        <img src="/HEATWORKS-logo.png" alt="HEATWORKS Logo" width="180" height="72" class="mb-4"/>
                        <p class="max-w-md text-sm text-brand-creamWhite/70">
                            "The 5-minute local SEO audit for home service businesses, by Gruntworks."
                        </p>
                    </div>

                    <div>
                        <h4 class="mb-4 font-semibold text-brand-creamWhite">"Product"</h4>
                        <ul class="space-y-2">
                            <li><a href="/#features" class=FOOTER_LINK>"Features"</a></li>
                            <li><a href="/#pricing" class=FOOTER_LINK>"Pricing"</a></li>
                            <li><a href="/audit" class=FOOTER_LINK>"Start Audit"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="mb-4 font-semibold text-brand-creamWhite">"Company"</h4>
                        <ul class="space-y-2">
                            <li><A href="/contact" attr:class=FOOTER_LINK>"Contact"</A></li>
                            <li>
                                <a href="mailto:info@gruntworksagency.com" class=FOOTER_LINK>
                                    "info@gruntworksagency.com"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-white/10 pt-8 text-sm text-brand-creamWhite/50">
                    "© 2025 Gruntworks Agency. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
