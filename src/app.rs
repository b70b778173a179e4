mod about;
mod article;
mod blog;
mod contact;
mod design;
mod header;
mod homepage;
mod listing;
mod not_found;
mod portfolio;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use blog::{BlogHome, BlogPost, BlogWrapper};
use contact::ContactPage;
use design::DesignPage;
use header::Header;
use homepage::HomePage;
use not_found::NotFound;
use portfolio::{PortfolioHome, PortfolioWrapper, ProjectPage};

use crate::i18n::Language;
use crate::theme::Theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Theme and language are app-wide state, injected as context so page
    // components read them without reaching into storage themselves.
    let theme = RwSignal::new(Theme::default());
    let language = RwSignal::new(Language::default());
    provide_context(theme);
    provide_context(language);

    view! {
        // sets the document title
        <Title formatter=|title| format!("Yuvaraj Guru - {title}") />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow justify-start items-center mx-auto w-full max-w-7xl px-4 py-8">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <ParentRoute path=path!("/portfolio") view=PortfolioWrapper>
                        <Route path=path!("") view=PortfolioHome />
                        <Route path=path!(":slug") view=ProjectPage />
                    </ParentRoute>
                    <ParentRoute path=path!("/blog") view=BlogWrapper>
                        <Route path=path!("") view=BlogHome />
                        <Route path=path!(":slug") view=BlogPost />
                    </ParentRoute>
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/design") view=DesignPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-auto py-6 text-center text-xs text-muted">
            <div>"© 2024 Yuvaraj Guru"</div>
            <div class="mt-1">"Built " {env!("BUILD_TIME")}</div>
        </footer>
    }
}
