use contracts::accounts::User;
use contracts::posts::{Comment, Post};
use leptos::prelude::*;

use crate::routes::route::Route;
use crate::routes::router::use_router;
use crate::shared::components::avatar::UserAvatar;
use crate::shared::date_utils::format_datetime;

/// Admin user management table.
#[component]
pub fn AdminUsersView(
    #[prop(into)] users: Signal<Vec<User>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="admin-view">
            <h2>"User management"</h2>
            <For each=move || users.get() key=|user| user.id let:user>
                {
                    let username = user.username.clone();
                    let nav_username = username.clone();
                    let user_id = user.id;

                    view! {
                        <div class="admin-row">
                            <UserAvatar
                                username=username.clone()
                                on_click=Callback::new(move |_: ()| {
                                    router.navigate(Route::PublicProfile(nav_username.clone()));
                                })
                            />
                            <span class="admin-row-title">{username}</span>
                            <span class="admin-row-detail">{user.email.clone()}</span>
                            <button class="delete-btn" on:click=move |_| on_delete.run(user_id)>
                                "Delete"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

/// Admin post management table.
#[component]
pub fn AdminPostsView(
    #[prop(into)] posts: Signal<Vec<Post>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="admin-view">
            <h2>"Post management"</h2>
            <For each=move || posts.get() key=|post| post.id let:post>
                {
                    let author = post.author.username.clone();
                    let nav_author = author.clone();
                    let post_id = post.id;
                    let created = format_datetime(&post.created_at);

                    view! {
                        <div class="admin-row">
                            <UserAvatar
                                username=author.clone()
                                on_click=Callback::new(move |_: ()| {
                                    router.navigate(Route::PublicProfile(nav_author.clone()));
                                })
                            />
                            <span class="admin-row-title">{author}</span>
                            <span class="admin-row-detail">{post.content.clone()}</span>
                            <span class="admin-row-date">{created}</span>
                            <button class="delete-btn" on:click=move |_| on_delete.run(post_id)>
                                "Delete"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

/// Admin comment management table.
#[component]
pub fn AdminCommentsView(
    #[prop(into)] comments: Signal<Vec<Comment>>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="admin-view">
            <h2>"Comment management"</h2>
            <For each=move || comments.get() key=|comment| comment.id let:comment>
                {
                    let author = comment.author.username.clone();
                    let nav_author = author.clone();
                    let comment_id = comment.id;
                    let created = format_datetime(&comment.created_at);

                    view! {
                        <div class="admin-row">
                            <UserAvatar
                                username=author.clone()
                                on_click=Callback::new(move |_: ()| {
                                    router.navigate(Route::PublicProfile(nav_author.clone()));
                                })
                            />
                            <span class="admin-row-title">{author}</span>
                            <span class="admin-row-detail">{comment.text.clone()}</span>
                            <span class="admin-row-date">{created}</span>
                            <button class="delete-btn" on:click=move |_| on_delete.run(comment_id)>
                                "Delete"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
