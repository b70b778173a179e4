use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Outlet;

use super::article::ArticleView;
use super::listing::ContentListing;
use crate::content;
use crate::i18n::{self, Language};

#[component]
pub fn BlogWrapper() -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let translations = move || i18n::translations(language.get());

    view! {
        <Title text="Blog" />
        <div class="text-center mb-8">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">
                {move || translations().blog_title.clone()}
                <a
                    href="/rss.xml"
                    target="_blank"
                    class="relative top-1 ml-4 text-primary hover:text-primary/70 transition-colors duration-200"
                    aria-label="RSS Feed"
                >
                    <i class="extra-rss" />
                </a>
            </h1>
            <div class="max-w-2xl mx-auto text-lg font-medium text-muted section-content">
                {move || translations().blog_intro.clone()}
            </div>
        </div>
        <div class="w-full max-w-4xl mx-auto text-left">
            <Outlet />
        </div>
    }
}

#[component]
pub fn BlogHome() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <ContentListing store=content::blog_posts() base_path="/blog" />
    }
}

#[component]
pub fn BlogPost() -> impl IntoView {
    view! { <ArticleView store=content::blog_posts() collection="blog" /> }
}
