use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::filter::filter_items;
use crate::content::page::{paginate, ListState, Page};
use crate::content::{derive_summary, meta, ContentItem, ContentStore};
use crate::i18n::{self, Language};

/// Listing page size, shared by the blog and the portfolio.
pub const ITEMS_PER_PAGE: usize = 6;

/// Searchable, tag-filterable, paginated listing over a content store.
///
/// The whole engine re-runs on every keystroke: filter from scratch,
/// paginate the result, render the page slice. `ListState` guarantees a
/// filter change lands back on page 1 before `paginate` is called.
#[component]
pub fn ContentListing(store: &'static ContentStore, base_path: &'static str) -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let translations = move || i18n::translations(language.get());
    let state = RwSignal::new(ListState::new());

    view! {
        <div class="mb-6 flex flex-col sm:flex-row gap-3 items-stretch sm:items-center">
            <input
                class="flex-grow px-4 py-2 rounded-md border border-muted bg-background text-foreground placeholder-muted focus:outline-none focus:ring-2 focus:ring-primary transition-all duration-200"
                placeholder=move || translations().search_placeholder.clone()
                prop:value=move || state.get().search.clone()
                on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
            />
            <select
                class="px-4 py-2 rounded-md border border-muted bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                prop:value=move || state.get().tag.clone().unwrap_or_default()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state
                        .update(|s| {
                            s.set_tag(if value.is_empty() { None } else { Some(value) })
                        });
                }
            >
                <option value="">{move || translations().all_tags.clone()}</option>
                {store
                    .tags()
                    .iter()
                    .map(|tag| {
                        view! { <option value=tag.clone()>{tag.clone()}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
        {move || {
            let st = state.get();
            let filtered = filter_items(store.items(), &st.search, st.tag.as_deref());
            // ListState keeps the page clamped, so this cannot fail.
            let page = paginate(&filtered, ITEMS_PER_PAGE, st.page).unwrap_or(Page::empty());
            let items = page.items.to_vec();
            let total_pages = page.total_pages;
            let tr = translations();
            view! {
                <div class="space-y-4 section-content">
                    {if items.is_empty() {
                        view! { <p class="text-muted text-center py-8">{tr.no_results.clone()}</p> }
                            .into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|item| view! { <ContentCard item base_path /> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
                {(total_pages > 1)
                    .then(|| {
                        view! {
                            <div class="flex justify-center items-center gap-2 mt-8">
                                <button
                                    class="px-3 py-1 rounded-md border border-muted/30 hover:bg-primary/20 transition-colors duration-200 disabled:opacity-40"
                                    disabled=(st.page <= 1)
                                    on:click=move |_| {
                                        state
                                            .update(|s| {
                                                let prev = s.page.saturating_sub(1);
                                                s.set_page(prev, total_pages);
                                            })
                                    }
                                >
                                    {tr.prev_page.clone()}
                                </button>
                                {(1..=total_pages)
                                    .map(|n| {
                                        let class = if n == st.page {
                                            "px-3 py-1 rounded-md bg-primary text-background font-medium"
                                        } else {
                                            "px-3 py-1 rounded-md border border-muted/30 hover:bg-primary/20 transition-colors duration-200"
                                        };
                                        view! {
                                            <button
                                                class=class
                                                on:click=move |_| {
                                                    state.update(|s| s.set_page(n, total_pages))
                                                }
                                            >
                                                {n}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                                <button
                                    class="px-3 py-1 rounded-md border border-muted/30 hover:bg-primary/20 transition-colors duration-200 disabled:opacity-40"
                                    disabled=(st.page >= total_pages)
                                    on:click=move |_| {
                                        state
                                            .update(|s| {
                                                let next = s.page + 1;
                                                s.set_page(next, total_pages);
                                            })
                                    }
                                >
                                    {tr.next_page.clone()}
                                </button>
                            </div>
                        }
                    })}
            }
        }}
    }
}

#[component]
fn ContentCard(item: &'static ContentItem, base_path: &'static str) -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let summary = derive_summary(item);
    let minutes = meta::reading_time(&item.content);
    let display_date = move || {
        let tr = i18n::translations(language.get());
        meta::format_display_date(&item.date, &tr).unwrap_or_else(|_| item.date.clone())
    };

    view! {
        <div class="p-6 rounded-lg bg-brightBlack/20 border border-muted/30 hover:border-primary/50 transition-all duration-200">
            <div class="flex items-center text-sm text-muted mb-3">
                <span>{display_date}</span>
                <span class="mx-2">"•"</span>
                <span>
                    {minutes} " "
                    {move || i18n::translations(language.get()).min_read.clone()}
                </span>
            </div>
            <A
                attr:class="text-xl font-bold text-foreground hover:text-primary transition-colors duration-200 block mb-3"
                href=format!("{base_path}/{}", item.slug)
            >
                {item.title.clone()}
            </A>
            <p class="mb-4 text-sm sm:text-base text-muted">{summary}</p>
            <div class="flex flex-wrap gap-2 mb-2">
                {item
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="px-3 py-1 bg-primary/20 text-primary text-xs rounded-full border border-primary/30">
                                {tag.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            {item
                .author
                .as_ref()
                .map(|author| {
                    view! {
                        <div class="text-sm text-muted">
                            {move || i18n::translations(language.get()).by_author.clone()} " "
                            {author.name.clone()}
                        </div>
                    }
                })}
        </div>
    }
}
