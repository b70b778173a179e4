use leptos::prelude::*;
use leptos_meta::Title;

use crate::i18n::{self, Language};
use crate::theme::Theme;

const TOKENS: [(&str, &str); 6] = [
    ("background", "bg-background"),
    ("foreground", "bg-foreground"),
    ("primary", "bg-primary"),
    ("muted", "bg-muted"),
    ("green", "bg-green"),
    ("red", "bg-red"),
];

/// Design-system showcase: the color tokens behind both themes, rendered
/// with whichever theme is currently active.
#[component]
pub fn DesignPage() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let language = expect_context::<RwSignal<Language>>();
    let translations = move || i18n::translations(language.get());

    view! {
        <Title text="Design System" />
        <div class="max-w-4xl mx-auto page-content w-full">
            <h1 class="font-bold text-3xl text-center mb-4 section-content">
                {move || translations().design_title.clone()}
            </h1>
            <p class="text-center text-muted mb-8">
                "Active theme: " <span class="text-primary font-medium">{move || theme.get().to_string()}</span>
            </p>
            <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 section-content">
                {TOKENS
                    .into_iter()
                    .map(|(name, swatch_class)| {
                        view! {
                            <div class="p-4 rounded-lg border border-muted/30">
                                <div class=format!(
                                    "h-16 rounded-md mb-2 border border-muted/20 {swatch_class}",
                                )></div>
                                <div class="text-sm font-medium">{name}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
