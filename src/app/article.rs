use std::sync::LazyLock;

use dashmap::DashMap;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use server_fn::codec::GetUrl;

use crate::content::{meta, ContentStore};
use crate::i18n::{self, Language};

/// Rendered article bodies, keyed by `collection/slug`. Both sides cache:
/// the server skips re-rendering, the browser skips re-fetching.
static BODY_CACHE: LazyLock<DashMap<String, String>> = LazyLock::new(DashMap::new);

#[server(input = GetUrl)]
pub async fn rendered_body(collection: String, slug: String) -> Result<String, ServerFnError> {
    let store = match collection.as_str() {
        "blog" => crate::content::blog_posts(),
        "portfolio" => crate::content::projects(),
        _ => return Err(ServerFnError::new("unknown collection")),
    };
    store
        .by_slug(&slug)
        .map(|item| crate::render::render_body(&item.content))
        .ok_or_else(|| ServerFnError::new("article not found"))
}

/// Article viewer shared by blog posts and portfolio projects: metadata
/// header rendered from the local store, body fetched pre-rendered (and
/// syntax highlighted) from the server.
#[component]
pub fn ArticleView(store: &'static ContentStore, collection: &'static str) -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let language = expect_context::<RwSignal<Language>>();

    let body = Resource::new(slug, move |slug| async move {
        let key = format!("{collection}/{slug}");
        let cache = &*BODY_CACHE;
        if let Some(html) = cache.get(&key) {
            return (*html).clone();
        }
        let html = rendered_body(collection.to_string(), slug).await.unwrap_or_default();
        cache.insert(key, html.clone());
        html
    });

    let header = move || {
        store.by_slug(&slug()).map(|item| {
            let tr = i18n::translations(language.get());
            let display_date =
                meta::format_display_date(&item.date, &tr).unwrap_or_else(|_| item.date.clone());
            let minutes = meta::reading_time(&item.content);
            view! {
                <div class="mb-6 p-4 bg-brightBlack/20 rounded-md border border-muted/30">
                    <h1 class="text-2xl lg:text-3xl font-bold mb-3">{item.title.clone()}</h1>
                    <div class="flex flex-wrap items-center gap-4 text-sm">
                        <span class="text-primary font-medium">{display_date}</span>
                        <span class="text-muted">{minutes} " " {tr.min_read.clone()}</span>
                        {item
                            .author
                            .as_ref()
                            .map(|author| {
                                view! {
                                    <span class="text-muted">
                                        {tr.by_author.clone()} " " {author.name.clone()}
                                    </span>
                                }
                            })}
                        <div class="flex flex-wrap gap-1">
                            {item
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="bg-primary/20 text-primary px-2 py-1 rounded text-xs">
                                            {tag.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            }
        })
    };

    let title = move || {
        store
            .by_slug(&slug())
            .map(|item| item.title.clone())
            .unwrap_or_else(|| "Not Found".to_string())
    };

    view! {
        <Title text=title />
        <div class="w-full max-w-4xl mx-auto text-left">
            {header}
            <Transition fallback=move || {
                view! {
                    <div class="space-y-4">
                        <div class="loading-skeleton h-8 rounded"></div>
                        <div class="loading-skeleton h-6 rounded w-3/4"></div>
                        <div class="loading-skeleton h-6 rounded w-2/3"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    let html = body.await;
                    view! {
                            <article class="prose prose-invert max-w-none">
                                <div inner_html=html></div>
                            </article>
                    }
                })}
            </Transition>
        </div>
    }
}
