use leptos::{
    html::{Input, Textarea},
    prelude::*,
};
use leptos_meta::Title;

use crate::i18n::{self, Language};

/// Accept a contact-form submission.
///
/// No mail transport is configured in this deployment, so delivery runs
/// in demo mode: the submission is validated, logged, and acknowledged.
#[server]
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err(ServerFnError::new("name, email, and message are required"));
    }
    tracing::info!(
        from = %email,
        name = %name,
        subject = %subject,
        "contact form submission (demo mode, not delivered)"
    );
    Ok(())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let language = expect_context::<RwSignal<Language>>();
    let translations = move || i18n::translations(language.get());

    let send = ServerAction::<SendMessage>::new();
    let name_ref = NodeRef::<Input>::new();
    let email_ref = NodeRef::<Input>::new();
    let subject_ref = NodeRef::<Input>::new();
    let message_ref = NodeRef::<Textarea>::new();

    let field_class = "w-full px-4 py-2 rounded-md border border-muted bg-background \
                       text-foreground placeholder-muted focus:outline-none focus:ring-2 \
                       focus:ring-primary transition-all duration-200";

    view! {
        <Title text="Contact" />
        <div class="max-w-2xl mx-auto page-content w-full">
            <h1 class="font-bold text-3xl text-center mb-4 section-content">
                {move || translations().contact_title.clone()}
            </h1>
            <p class="text-center text-muted mb-8 section-content">
                {move || translations().contact_intro.clone()}
            </p>
            <form
                class="space-y-4 section-content"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let input_value = |node: NodeRef<Input>| {
                        node.get_untracked().map(|el| el.value()).unwrap_or_default()
                    };
                    let message = message_ref
                        .get_untracked()
                        .map(|el| el.value())
                        .unwrap_or_default();
                    send.dispatch(SendMessage {
                        name: input_value(name_ref),
                        email: input_value(email_ref),
                        subject: input_value(subject_ref),
                        message,
                    });
                }
            >
                <div class="flex flex-col sm:flex-row gap-4">
                    <input
                        class=field_class
                        node_ref=name_ref
                        placeholder=move || translations().contact_name.clone()
                    />
                    <input
                        class=field_class
                        type="email"
                        node_ref=email_ref
                        placeholder=move || translations().contact_email.clone()
                    />
                </div>
                <input
                    class=field_class
                    node_ref=subject_ref
                    placeholder=move || translations().contact_subject.clone()
                />
                <textarea
                    class=format!("{field_class} h-40")
                    node_ref=message_ref
                    placeholder=move || translations().contact_message.clone()
                ></textarea>
                <div class="text-center">
                    <button
                        type="submit"
                        class="px-6 py-3 rounded-full bg-primary/20 hover:bg-primary/30 text-primary font-medium border border-primary/30 transition-all duration-200 disabled:opacity-40"
                        disabled=move || send.pending().get()
                    >
                        {move || translations().contact_send.clone()}
                    </button>
                </div>
            </form>
            {move || {
                send.value()
                    .get()
                    .map(|result| match result {
                        Ok(()) => {
                            view! {
                                <div class="mt-6 p-3 rounded-md bg-green/20 text-green text-center">
                                    {translations().contact_sent.clone()}
                                </div>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! {
                                <div class="mt-6 p-3 rounded-md bg-red/20 text-red text-center">
                                    {translations().contact_error.clone()}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}
