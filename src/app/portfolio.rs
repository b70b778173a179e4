use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Outlet;

use super::article::ArticleView;
use super::listing::ContentListing;
use crate::content;
use crate::i18n::{self, Language};

#[component]
pub fn PortfolioWrapper() -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let translations = move || i18n::translations(language.get());

    view! {
        <Title text="Portfolio" />
        <div class="text-center mb-8">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">
                {move || translations().portfolio_title.clone()}
            </h1>
            <div class="max-w-2xl mx-auto text-lg font-medium text-muted section-content">
                {move || translations().portfolio_intro.clone()}
            </div>
        </div>
        <div class="w-full max-w-4xl mx-auto text-left">
            <Outlet />
        </div>
    }
}

#[component]
pub fn PortfolioHome() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <ContentListing store=content::projects() base_path="/portfolio" />
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    view! { <ArticleView store=content::projects() collection="portfolio" /> }
}
