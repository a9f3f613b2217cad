use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::posts::api;
use crate::shared::notice;

const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// New-post form: text plus an optional image (multipart upload, 5 MB
/// client-side limit). Refetches the feed on success.
#[component]
pub fn PostComposer(#[prop(into)] token: String, on_created: Callback<()>) -> impl IntoView {
    let (content, set_content) = signal(String::new());
    let (pending, set_pending) = signal(false);
    // The file itself stays in the input element; only the presence flag
    // is reactive state.
    let (has_image, set_has_image) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let on_file_change = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        match file {
            Some(file) if file.size() > MAX_IMAGE_BYTES => {
                notice::alert("Image is too large (max 5MB)");
                input.set_value("");
                set_has_image.set(false);
            }
            other => set_has_image.set(other.is_some()),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        if text.trim().is_empty() || pending.get() {
            return;
        }
        set_pending.set(true);

        let token = token.clone();
        let input = file_input.get_untracked();
        let file = input
            .as_ref()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        spawn_local(async move {
            match api::create_post(&token, &text, file).await {
                Ok(_post) => {
                    set_content.set(String::new());
                    if let Some(input) = input {
                        input.set_value("");
                    }
                    set_has_image.set(false);
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("post creation failed: {e}");
                    notice::alert("Could not publish the post");
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="post-composer" on:submit=on_submit>
            <textarea
                placeholder="What's on your mind?"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
                disabled=move || pending.get()
            ></textarea>
            <input type="file" accept="image/*" node_ref=file_input on:change=on_file_change />
            <Show when=move || has_image.get()>
                <span class="attachment-note">"Image attached"</span>
            </Show>
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Publishing..." } else { "Publish" }}
            </button>
        </form>
    }
}
