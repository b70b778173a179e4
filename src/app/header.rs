use leptos::prelude::*;
use leptos_router::components::A;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::i18n::{self, Language};
use crate::theme::Theme;

#[component]
pub fn Header() -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let translations = move || i18n::translations(language.get());

    view! {
        <header class="bg-brightBlack/30 shadow sticky top-0 backdrop-blur-sm z-10">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 max-w-7xl">
                <div class="flex items-center justify-between gap-4">
                    <A
                        attr:class="text-xl font-bold text-primary whitespace-nowrap"
                        href="/"
                    >
                        "Yuvaraj Guru"
                    </A>
                    <nav class="flex items-center gap-4 text-sm font-medium">
                        <A
                            attr:class="hover:text-primary transition-colors duration-200"
                            href="/"
                        >
                            {move || translations().nav_home.clone()}
                        </A>
                        <A
                            attr:class="hover:text-primary transition-colors duration-200"
                            href="/about"
                        >
                            {move || translations().nav_about.clone()}
                        </A>
                        <A
                            attr:class="hover:text-primary transition-colors duration-200"
                            href="/portfolio"
                        >
                            {move || translations().nav_portfolio.clone()}
                        </A>
                        <A
                            attr:class="hover:text-primary transition-colors duration-200"
                            href="/blog"
                        >
                            {move || translations().nav_blog.clone()}
                        </A>
                        <A
                            attr:class="hover:text-primary transition-colors duration-200"
                            href="/contact"
                        >
                            {move || translations().nav_contact.clone()}
                        </A>
                    </nav>
                    <div class="flex items-center gap-3">
                        <LanguageSelect />
                        <ThemeSwitcher />
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Dark/light toggle. The preference is restored from localStorage after
/// hydration and written back on every change; the active theme is
/// mirrored onto `<html data-theme="...">` for the stylesheet.
#[component]
fn ThemeSwitcher() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(crate::theme::STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| {
                if let Ok(saved) = stored.get_untracked().parse::<Theme>() {
                    theme.set(saved);
                }
            },
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |current, _, _| {
                set_stored.set(current.to_string());
                apply_theme(*current);
            },
            false,
        );
    }

    view! {
        <button
            class="px-3 py-1 rounded-md border border-muted/30 hover:bg-primary/20 transition-colors duration-200"
            aria-label="Toggle theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || match theme.get() {
                Theme::Dark => "☾",
                Theme::Light => "☀",
            }}
        </button>
    }
}

#[cfg(feature = "hydrate")]
fn apply_theme(theme: Theme) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute(crate::theme::HTML_ATTR, &theme.to_string());
    }
}

/// Language picker. Same persistence story as the theme; the selected
/// language drives which translation bundle every page reads.
#[component]
fn LanguageSelect() -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(crate::i18n::STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| {
                if let Ok(saved) = stored.get_untracked().parse::<Language>() {
                    language.set(saved);
                }
            },
            true,
        );
        Effect::watch(
            move || language.get(),
            move |current, _, _| set_stored.set(current.to_string()),
            false,
        );
    }

    view! {
        <select
            class="px-2 py-1 rounded-md border border-muted/30 bg-background text-foreground text-sm"
            aria-label="Select language"
            prop:value=move || language.get().to_string()
            on:change=move |ev| {
                if let Ok(selected) = event_target_value(&ev).parse::<Language>() {
                    language.set(selected);
                }
            }
        >
            {Language::ALL
                .into_iter()
                .map(|lang| {
                    view! { <option value=lang.to_string()>{lang.label()}</option> }
                })
                .collect_view()}
        </select>
    }
}
