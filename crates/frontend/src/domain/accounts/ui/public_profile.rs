use contracts::accounts::{Profile, User};
use contracts::posts::Post;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::accounts::api;
use crate::domain::accounts::ui::follow_button::FollowButton;
use crate::domain::posts::api as posts_api;
use crate::domain::posts::ui::post_card::PostCard;
use crate::routes::route::Route;
use crate::routes::router::use_router;
use crate::shared::components::avatar::UserAvatar;
use crate::shared::components::feedback::{ErrorScreen, LoadingSpinner};
use crate::system::auth::claims::DisplayClaims;
use crate::system::auth::context::use_session;

/// Where to send a viewer instead of showing the page: anonymous viewers
/// go to the login screen (the route is reachable without a session, but
/// the data behind it is not), and viewing yourself lands on the editable
/// profile.
fn detour(claims: Option<&DisplayClaims>, username: &str) -> Option<Route> {
    match claims {
        None => Some(Route::Auth),
        Some(c) if c.username == username => Some(Route::OwnProfile),
        Some(_) => None,
    }
}

/// Another user's profile: details, follow toggle, mutual followers and
/// that user's posts.
#[component]
pub fn PublicProfilePage(#[prop(into)] username: String) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let claims = session.claims();
    if let Some(target) = detour(claims.as_ref(), &username) {
        // Redirects mutate the URL, so they run as an effect rather than
        // during rendering.
        Effect::new(move |_| router.replace(target.clone()));
        return view! { <LoadingSpinner /> }.into_any();
    }
    let Some(claims) = claims else {
        return view! { <LoadingSpinner /> }.into_any();
    };
    let token = StoredValue::new(session.access_token().unwrap_or_default());
    let username = StoredValue::new(username);
    let viewer_id = claims.user_id;
    let is_admin = claims.is_admin;

    let profile = RwSignal::new(Option::<Profile>::None);
    let posts = RwSignal::new(Vec::<Post>::new());
    let mutuals = RwSignal::new(Vec::<User>::new());
    let followers_count = RwSignal::new(0i64);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        spawn_local(async move {
            let token = token.get_value();
            let username = username.get_value();
            match api::fetch_profile(&token, &username).await {
                Ok(data) => {
                    followers_count.set(data.followers_count);
                    profile.set(Some(data));
                }
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                    return;
                }
            }
            match posts_api::fetch_user_posts(&token, &username).await {
                Ok(data) => posts.set(data),
                Err(e) => log::warn!("posts fetch for {username} failed: {e}"),
            }
            match api::mutual_followers(&token, &username).await {
                Ok(data) => mutuals.set(data),
                Err(e) => log::warn!("mutual followers fetch for {username} failed: {e}"),
            }
            loading.set(false);
        });
    };
    load();

    let refresh_posts = Callback::new(move |_: ()| {
        spawn_local(async move {
            let token = token.get_value();
            let username = username.get_value();
            match posts_api::fetch_user_posts(&token, &username).await {
                Ok(data) => posts.set(data),
                Err(e) => log::warn!("posts fetch for {username} failed: {e}"),
            }
        });
    });

    let on_follow_changed = Callback::new(move |now_following: bool| {
        followers_count.update(|count| *count += if now_following { 1 } else { -1 });
    });

    view! {
        <div class="profile-page">
            <header class="app-header">
                <button class="back-btn" on:click=move |_| router.navigate(Route::Home)>
                    "Back to feed"
                </button>
                <h1>{username.get_value()}</h1>
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
                                                <span>
                                                    {move || followers_count.get()} " followers"
                                                </span>
                                                <span>{p.following_count} " following"</span>
                                            </div>
                                        </div>
                                        <FollowButton
                                            username=p.username.clone()
                                            initial_is_following=p.is_following
                                            token=token.get_value()
                                            on_changed=on_follow_changed
                                        />
                                    </section>
                                }
                            })
                    }}

                    <Show when=move || !mutuals.get().is_empty()>
                        <section class="mutual-followers">
                            <h3>"Followed by people you follow"</h3>
                            <For each=move || mutuals.get() key=|user| user.id let:user>
                                <span class="mutual-name">{user.username.clone()}</span>
                            </For>
                        </section>
                    </Show>

                    <section class="profile-posts">
                        <h3>"Posts"</h3>
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

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(username: &str) -> DisplayClaims {
        DisplayClaims {
            user_id: 1,
            username: username.to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn test_anonymous_viewer_detours_to_auth() {
        assert_eq!(detour(None, "bob"), Some(Route::Auth));
    }

    #[test]
    fn test_own_username_detours_to_own_profile() {
        assert_eq!(
            detour(Some(&claims("alice")), "alice"),
            Some(Route::OwnProfile)
        );
    }

    #[test]
    fn test_other_user_shows_the_page() {
        assert_eq!(detour(Some(&claims("alice")), "bob"), None);
    }
}
