use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::Deserialize;

/// localStorage key for the persisted language preference.
pub const STORAGE_KEY: &str = "app-language";

#[derive(Embed)]
#[folder = "lang"]
struct Assets;

/// Supported display languages. English is the default and the fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Language::En => "en",
            Language::Es => "es",
        };
        write!(f, "{code}")
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            _ => Err(()),
        }
    }
}

/// One language's display strings.
///
/// Every field carries a serde default, so a bundle that omits a key
/// falls back to the English value for that key instead of failing the
/// whole bundle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Translations {
    pub heading: String,
    pub subheading: String,
    pub description: String,
    pub button_text: String,
    pub nav_home: String,
    pub nav_about: String,
    pub nav_portfolio: String,
    pub nav_blog: String,
    pub nav_contact: String,
    pub search_placeholder: String,
    pub all_tags: String,
    pub no_results: String,
    pub prev_page: String,
    pub next_page: String,
    pub min_read: String,
    pub by_author: String,
    pub blog_title: String,
    pub blog_intro: String,
    pub portfolio_title: String,
    pub portfolio_intro: String,
    pub contact_title: String,
    pub contact_intro: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_subject: String,
    pub contact_message: String,
    pub contact_send: String,
    pub contact_sent: String,
    pub contact_error: String,
    pub not_found_title: String,
    pub not_found_body: String,
    pub not_found_home: String,
    pub design_title: String,
    pub months: [String; 12],
}

impl Default for Translations {
    fn default() -> Self {
        Translations {
            heading: "I'm Yuvaraj Guru.".to_string(),
            subheading: "Frontend Architect & Product Engineer".to_string(),
            description: "I build products end-to-end — from pixel-perfect frontends to \
                          AI-powered automations. With 10+ years across React, Vue.js, Node.js, \
                          and modern AI tools, I ship polished experiences that solve real \
                          problems."
                .to_string(),
            button_text: "More About Me".to_string(),
            nav_home: "Home".to_string(),
            nav_about: "About".to_string(),
            nav_portfolio: "Portfolio".to_string(),
            nav_blog: "Blog".to_string(),
            nav_contact: "Contact".to_string(),
            search_placeholder: "Search posts...".to_string(),
            all_tags: "All tags".to_string(),
            no_results: "Nothing matches your search.".to_string(),
            prev_page: "Previous".to_string(),
            next_page: "Next".to_string(),
            min_read: "min read".to_string(),
            by_author: "By".to_string(),
            blog_title: "My Blog".to_string(),
            blog_intro: "Notes on frontend architecture, backend plumbing, and everything in \
                         between."
                .to_string(),
            portfolio_title: "My Portfolio".to_string(),
            portfolio_intro: "Selected work, from design systems to deployment pipelines."
                .to_string(),
            contact_title: "Get in Touch".to_string(),
            contact_intro: "Feel free to get in touch with me. I am always open to discussing \
                            new projects, creative ideas, or opportunities to be part of your \
                            vision."
                .to_string(),
            contact_name: "Your Name".to_string(),
            contact_email: "Your Email".to_string(),
            contact_subject: "Your Subject".to_string(),
            contact_message: "Your Message".to_string(),
            contact_send: "Send Message".to_string(),
            contact_sent: "Your message has been sent!".to_string(),
            contact_error: "Something went wrong. Please try again.".to_string(),
            not_found_title: "Page not found".to_string(),
            not_found_body: "The page you are looking for does not exist or has moved."
                .to_string(),
            not_found_home: "Back to home".to_string(),
            design_title: "Design System".to_string(),
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
        }
    }
}

static BUNDLES: LazyLock<DashMap<Language, Arc<Translations>>> = LazyLock::new(DashMap::new);

/// The translation bundle for `language`, parsed once per process and
/// cached. Falls back to the English defaults when the bundle is missing
/// or malformed, loudly.
pub fn translations(language: Language) -> Arc<Translations> {
    if let Some(cached) = BUNDLES.get(&language) {
        return cached.clone();
    }
    let bundle = Arc::new(load_bundle(language));
    BUNDLES.insert(language, bundle.clone());
    bundle
}

fn load_bundle(language: Language) -> Translations {
    let name = format!("base_{language}.json");
    let Some(file) = Assets::get(&name) else {
        log::warn!("no translation bundle {name}, falling back to English");
        return Translations::default();
    };
    match serde_json::from_slice(file.data.as_ref()) {
        Ok(bundle) => bundle,
        Err(err) => {
            log::warn!("translation bundle {name} is malformed ({err}), falling back to English");
            Translations::default()
        }
    }
}
