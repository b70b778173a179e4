use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::i18n::{self, Language};

/// 404 page. On the server this also sets a real 404 status so crawlers
/// and proxies see the right code, not a soft 200.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let language = expect_context::<RwSignal<Language>>();
    let translations = move || i18n::translations(language.get());

    view! {
        <Title text="404" />
        <div class="text-center page-content mt-16">
            <h1 class="text-6xl font-bold text-primary mb-4">"404"</h1>
            <h2 class="text-2xl font-bold mb-2">
                {move || translations().not_found_title.clone()}
            </h2>
            <p class="text-muted mb-8">{move || translations().not_found_body.clone()}</p>
            <A
                attr:class="px-6 py-3 rounded-full bg-primary/20 hover:bg-primary/30 text-primary font-medium border border-primary/30 transition-all duration-200"
                href="/"
            >
                {move || translations().not_found_home.clone()}
            </A>
        </div>
    }
}
