use contracts::accounts::Profile;
use contracts::auth::ChangePasswordRequest;
use contracts::posts::Post;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::accounts::api;
use crate::domain::posts::api as posts_api;
use crate::domain::posts::ui::post_card::PostCard;
use crate::routes::route::Route;
use crate::routes::router::use_router;
use crate::shared::components::avatar::UserAvatar;
use crate::shared::components::feedback::{ErrorScreen, LoadingSpinner};
use crate::shared::notice;
use crate::system::auth::context::use_session;

/// The logged-in user's own profile: details, edit form, password change
/// and the user's posts.
#[component]
pub fn OwnProfilePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let Some(claims) = session.claims() else {
        return view! { <LoadingSpinner /> }.into_any();
    };
    let token = StoredValue::new(session.access_token().unwrap_or_default());
    let viewer_id = claims.user_id;
    let is_admin = claims.is_admin;

    let profile = RwSignal::new(Option::<Profile>::None);
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let editing = RwSignal::new(false);
    let bio = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let picture_input: NodeRef<html::Input> = NodeRef::new();
    let saving = RwSignal::new(false);

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let changing_password = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            let token = token.get_value();
            match api::fetch_own_profile(&token).await {
                Ok(data) => {
                    bio.set(data.bio.clone());
                    website.set(data.website.clone());
                    profile.set(Some(data));
                }
                Err(e) => error.set(Some(e)),
            }
            match posts_api::fetch_my_posts(&token).await {
                Ok(data) => posts.set(data),
                Err(e) => log::warn!("own posts fetch failed: {e}"),
            }
            loading.set(false);
        });
    };
    load();

    let refresh_posts = Callback::new(move |_: ()| {
        spawn_local(async move {
            let token = token.get_value();
            match posts_api::fetch_my_posts(&token).await {
                Ok(data) => posts.set(data),
                Err(e) => log::warn!("own posts fetch failed: {e}"),
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let Some(username) = profile.get_untracked().map(|p| p.username) else {
            return;
        };
        saving.set(true);
        let input = picture_input.get_untracked();
        let picture = input
            .as_ref()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        spawn_local(async move {
            let token = token.get_value();
            let result = api::update_profile(
                &token,
                &username,
                &bio.get_untracked(),
                &website.get_untracked(),
                picture,
            )
            .await;
            match result {
                Ok(updated) => {
                    bio.set(updated.bio.clone());
                    website.set(updated.website.clone());
                    profile.set(Some(updated));
                    if let Some(input) = input {
                        input.set_value("");
                    }
                    editing.set(false);
                }
                Err(e) => notice::alert(&e),
            }
            saving.set(false);
        });
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if changing_password.get() {
            return;
        }
        let request = ChangePasswordRequest {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
        };
        if request.old_password.is_empty() || request.new_password.is_empty() {
            return;
        }
        changing_password.set(true);
        spawn_local(async move {
            let token = token.get_value();
            match api::change_password(&token, request).await {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    notice::alert("Password changed");
                }
                Err(e) => notice::alert(&e),
            }
            changing_password.set(false);
        });
    };

    view! {
        <div class="profile-page">
            <header class="app-header">
                <button class="back-btn" on:click=move |_| router.navigate(Route::Home)>
                    "Back to feed"
                </button>
                <h1>"My profile"</h1>
            </header>

            <Show
                when=move || error.get().is_none()
                fallback=move || {
                    view! { <ErrorScreen message=error.get().unwrap_or_default() /> }
                }
            >
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    {move || {
                        profile
                            .get()
                            .map(|p| {
                                view! {
                                    <section class="profile-header">
                                        <UserAvatar username=p.username.clone() />
                                        <div class="profile-details">
                                            <h2>{p.username.clone()}</h2>
                                            <span class="profile-email">{p.email.clone()}</span>
                                            <p class="profile-bio">{p.bio.clone()}</p>
                                            {(!p.website.is_empty())
                                                .then(|| {
                                                    view! {
                                                        <a class="profile-website" href=p.website.clone()>
                                                            {p.website.clone()}
                                                        </a>
                                                    }
                                                })}
                                            <div class="profile-counts">
                                                <span>{p.followers_count} " followers"</span>
                                                <span>{p.following_count} " following"</span>
                                            </div>
                                        </div>
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| editing.update(|e| *e = !*e)
                                        >
                                            {move || if editing.get() { "Cancel" } else { "Edit profile" }}
                                        </button>
                                    </section>
                                }
                            })
                    }}

                    <Show when=move || editing.get()>
                        <form class="profile-edit-form" on:submit=on_save>
                            <label>
                                "Bio"
                                <textarea
                                    prop:value=move || bio.get()
                                    on:input=move |ev| bio.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <label>
                                "Website"
                                <input
                                    type="url"
                                    prop:value=move || website.get()
                                    on:input=move |ev| website.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Profile picture"
                                <input type="file" accept="image/*" node_ref=picture_input />
                            </label>
                            <button type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </form>

                        <form class="password-form" on:submit=on_change_password>
                            <h3>"Change password"</h3>
                            <input
                                type="password"
                                placeholder="Current password"
                                prop:value=move || old_password.get()
                                on:input=move |ev| old_password.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder="New password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                            <button type="submit" disabled=move || changing_password.get()>
                                "Change password"
                            </button>
                        </form>
                    </Show>

                    <section class="profile-posts">
                        <h3>"My posts"</h3>
                        <For each=move || posts.get() key=|post| post.id let:post>
                            <PostCard
                                post=post
                                viewer_id=viewer_id
                                is_admin=is_admin
                                token=token.get_value()
                                on_refresh=refresh_posts
                            />
                        </For>
                    </section>
                </Show>
            </Show>
        </div>
    }
    .into_any()
}
