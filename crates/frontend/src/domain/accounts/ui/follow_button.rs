use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::accounts::api;
use crate::shared::notice;

/// Follow/unfollow toggle. Issues POST when not following and DELETE when
/// following, flipping local state on success. The button disables while a
/// request is in flight; in-flight requests are never cancelled.
#[component]
pub fn FollowButton(
    #[prop(into)] username: String,
    initial_is_following: bool,
    #[prop(into)] token: String,
    #[prop(optional)] on_changed: Option<Callback<bool>>,
) -> impl IntoView {
    let (is_following, set_is_following) = signal(initial_is_following);
    let (pending, set_pending) = signal(false);

    let on_toggle = move |_| {
        if pending.get() {
            return;
        }
        set_pending.set(true);

        let username = username.clone();
        let token = token.clone();
        spawn_local(async move {
            let currently_following = is_following.get_untracked();
            let result = if currently_following {
                api::unfollow(&token, &username).await
            } else {
                api::follow(&token, &username).await
            };
            match result {
                Ok(()) => {
                    let now_following = !currently_following;
                    set_is_following.set(now_following);
                    if let Some(cb) = on_changed {
                        cb.run(now_following);
                    }
                }
                Err(e) => {
                    log::warn!("follow toggle for {username} failed: {e}");
                    notice::alert("Could not update follow state. Please retry.");
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <button
            class="follow-btn"
            class:following=move || is_following.get()
            disabled=move || pending.get()
            on:click=on_toggle
        >
            {move || {
                if pending.get() {
                    "..."
                } else if is_following.get() {
                    "Following"
                } else {
                    "+ Follow"
                }
            }}
        </button>
    }
}
