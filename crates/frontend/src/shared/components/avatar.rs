use leptos::prelude::*;

/// Initial-letter avatar. Clickable when an `on_click` callback is given.
#[component]
pub fn UserAvatar(
    #[prop(into)] username: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let initial = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string());
    let clickable = on_click.is_some();

    view! {
        <div
            class="user-avatar"
            class:clickable=clickable
            title=format!("@{}", username)
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {initial}
        </div>
    }
}
