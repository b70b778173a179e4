use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::i18n::{self, Language};

/// Hero landing page. All copy comes from the active translation bundle.
#[component]
pub fn HomePage() -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let translations = move || i18n::translations(language.get());

    view! {
        <Title text="Home" />
        <div class="max-w-4xl mx-auto page-content text-center">
            <section class="flex flex-col items-center gap-6 mt-12 section-content">
                <h1 class="text-4xl lg:text-5xl font-bold">
                    {move || translations().heading.clone()}
                </h1>
                <h2 class="text-xl lg:text-2xl text-primary font-medium">
                    {move || translations().subheading.clone()}
                </h2>
                <p class="max-w-2xl text-base lg:text-lg leading-relaxed text-muted">
                    {move || translations().description.clone()}
                </p>
                <A
                    attr:class="mt-4 px-6 py-3 rounded-full bg-primary/20 hover:bg-primary/30 text-primary font-medium border border-primary/30 transition-all duration-200"
                    href="/about"
                >
                    {move || translations().button_text.clone()}
                </A>
            </section>
            <section class="flex justify-center gap-4 mt-12 section-content">
                <a
                    href="https://www.linkedin.com/in/yuvaraj-guru/"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue hover:text-brightBlue text-2xl"
                    aria-label="LinkedIn Profile"
                >
                    <i class="devicon-linkedin-plain"></i>
                </a>
                <a
                    href="https://github.com/yuviguru"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-white hover:text-brightWhite text-2xl"
                    aria-label="GitHub Profile"
                >
                    <i class="devicon-github-plain"></i>
                </a>
            </section>
        </div>
    }
}
