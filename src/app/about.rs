use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="grid mx-auto page-content">
            <h1 class="font-bold text-2xl text-center mb-8">"About Me"</h1>
            <div class="grid max-w-4xl grid-cols-1 md:grid-cols-3 gap-8 p-8 bg-brightBlack/20 rounded-lg border border-muted/30">
                <Sidebar />
                <Experience />
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <div class="space-y-4 p-2">
            <div class="flex flex-col space-y-4 text-center">
                <h2 class="text-2xl font-bold">"Yuvaraj Guru"</h2>
                <div class="flex flex-col items-center rounded-sm border border-primary px-3 py-4 text-sm">
                    <div class="flex flex-col items-start gap-y-1.5 text-left">
                        <div class="flex items-center gap-x-1.5">
                            <i class="extra-location"></i>
                            <div>"Chennai, India"</div>
                        </div>
                        <div class="flex items-center gap-x-1.5">
                            <i class="extra-email"></i>
                            <a href="mailto:k.yuvarajguru@gmail.com" target="_blank" rel="noreferrer">
                                "k.yuvarajguru@gmail.com"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <div>
                <h3 class="font-bold text-lg mb-2">"Skills"</h3>
                <ul class="text-sm space-y-1">
                    <li>"React, Vue.js, TypeScript"</li>
                    <li>"Node.js, Express, REST APIs"</li>
                    <li>"Design systems & accessibility"</li>
                    <li>"Docker, CI/CD, cloud deployment"</li>
                    <li>"AI-assisted product workflows"</li>
                </ul>
            </div>
            <div>
                <h3 class="font-bold text-lg mb-2">"Languages"</h3>
                <ul class="text-sm space-y-1">
                    <li>"English, Tamil"</li>
                </ul>
            </div>
        </div>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <div class="md:col-span-2 space-y-6 p-2">
            <section>
                <h3 class="font-bold text-lg text-primary">"Frontend Architect"</h3>
                <p class="text-sm text-muted mb-2">"Product platform · 2021 — present"</p>
                <p class="text-sm leading-relaxed">
                    "Own the frontend architecture for a multi-team product platform: a shared
                    design system, performance budgets enforced in CI, and migration paths that
                    let four teams ship independently without forking components."
                </p>
            </section>
            <section>
                <h3 class="font-bold text-lg text-primary">"Senior Product Engineer"</h3>
                <p class="text-sm text-muted mb-2">"E-commerce · 2017 — 2021"</p>
                <p class="text-sm leading-relaxed">
                    "Led the storefront rebuild that took Lighthouse scores from the fifties to
                    the nineties, and turned single-facet search into client-side multi-facet
                    filtering, cutting server load by a fifth during peak events."
                </p>
            </section>
            <section>
                <h3 class="font-bold text-lg text-primary">"Full-Stack Developer"</h3>
                <p class="text-sm text-muted mb-2">"Agency work · 2014 — 2017"</p>
                <p class="text-sm leading-relaxed">
                    "Shipped dashboards, storefronts, and internal tools across React, Vue, and
                    Node.js backends; learned that boring deploys and readable code outlive
                    every framework cycle."
                </p>
            </section>
        </div>
    }
}
