use contracts::accounts::User;
use leptos::prelude::*;

use crate::domain::accounts::ui::follow_button::FollowButton;
use crate::routes::route::Route;
use crate::routes::router::use_router;
use crate::shared::components::avatar::UserAvatar;

/// Registered-users sidebar. Admins see emails and a delete action instead
/// of follow buttons.
#[component]
pub fn UserList(
    #[prop(into)] users: Signal<Vec<User>>,
    viewer_id: i64,
    #[prop(into)] token: String,
    is_admin: bool,
    on_delete_user: Callback<i64>,
) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="user-list">
            <h3>{if is_admin { "User management" } else { "Registered users" }}</h3>
            <For each=move || users.get() key=|user| user.id let:user>
                {
                    let username = user.username.clone();
                    let email = user.email.clone();
                    let is_self = user.id == viewer_id;
                    let is_following = user.followers.contains(&viewer_id);
                    let user_id = user.id;
                    let token = token.clone();

                    let profile_username = username.clone();
                    let open_profile = Callback::new(move |_: ()| {
                        router.navigate(Route::PublicProfile(profile_username.clone()));
                    });

                    let action = if is_self {
                        view! { <span class="user-self">"(you)"</span> }.into_any()
                    } else if is_admin {
                        view! {
                            <button
                                class="delete-btn"
                                on:click=move |_| on_delete_user.run(user_id)
                            >
                                "Delete"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <FollowButton
                                username=username.clone()
                                initial_is_following=is_following
                                token=token
                            />
                        }
                        .into_any()
                    };

                    view! {
                        <div class="user-row">
                            <UserAvatar username=username.clone() on_click=open_profile />
                            <div class="user-meta">
                                <span class="user-name">{username.clone()}</span>
                                {is_admin.then(|| view! { <span class="user-email">{email}</span> })}
                            </div>
                            {action}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
