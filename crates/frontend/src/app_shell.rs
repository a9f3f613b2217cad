//! Authenticated home shell: header, users sidebar, and the in-page
//! active-view switch between the feed and the admin tables.

use contracts::accounts::User;
use contracts::posts::{Comment, Post};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::accounts::api as accounts_api;
use crate::domain::accounts::ui::user_list::UserList;
use crate::domain::admin::ui::{AdminCommentsView, AdminPostsView, AdminUsersView};
use crate::domain::posts::api as posts_api;
use crate::domain::posts::ui::feed::Feed;
use crate::routes::route::Route;
use crate::routes::router::use_router;
use crate::shared::components::feedback::{ErrorScreen, LoadingSpinner};
use crate::shared::notice;
use crate::system::auth::context::use_session;

/// In-page view selector. Admin entries are offered only when the decoded
/// claims carry the admin flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Feed,
    AdminUsers,
    AdminPosts,
    AdminComments,
}

impl ActiveView {
    fn label(&self) -> &'static str {
        match self {
            ActiveView::Feed => "Feed",
            ActiveView::AdminUsers => "Users",
            ActiveView::AdminPosts => "Posts",
            ActiveView::AdminComments => "Comments",
        }
    }

    fn offered(is_admin: bool) -> Vec<ActiveView> {
        if is_admin {
            vec![
                ActiveView::Feed,
                ActiveView::AdminUsers,
                ActiveView::AdminPosts,
                ActiveView::AdminComments,
            ]
        } else {
            vec![ActiveView::Feed]
        }
    }
}

#[component]
pub fn HomePage(initial_view: ActiveView) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // The gate admits this view only with a session; while a redirect is
    // still in flight there is nothing to render.
    let Some(claims) = session.claims() else {
        return view! { <LoadingSpinner /> }.into_any();
    };
    let token = StoredValue::new(session.access_token().unwrap_or_default());
    let viewer_id = claims.user_id;
    let is_admin = claims.is_admin;

    let posts = RwSignal::new(Vec::<Post>::new());
    let users = RwSignal::new(Vec::<User>::new());
    let comments = RwSignal::new(Vec::<Comment>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let active_view = RwSignal::new(initial_view);

    let load_posts = move || {
        spawn_local(async move {
            let token = token.get_value();
            match posts_api::fetch_posts(&token).await {
                Ok(data) => posts.set(data),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    let load_users = move || {
        spawn_local(async move {
            let token = token.get_value();
            match accounts_api::fetch_users(&token).await {
                Ok(data) => users.set(data),
                Err(e) => log::warn!("user list fetch failed: {e}"),
            }
        });
    };

    let load_comments = move || {
        if !is_admin {
            return;
        }
        spawn_local(async move {
            let token = token.get_value();
            match posts_api::fetch_comments(&token).await {
                Ok(data) => comments.set(data),
                Err(e) => log::warn!("comment list fetch failed: {e}"),
            }
        });
    };

    // Initial data load; completions may interleave, each lands in its own
    // signal.
    load_posts();
    load_users();
    load_comments();

    let refresh_feed = Callback::new(move |_: ()| load_posts());

    let delete_user = Callback::new(move |user_id: i64| {
        if !notice::confirm("Do you really want to delete this user?") {
            return;
        }
        spawn_local(async move {
            let token = token.get_value();
            match accounts_api::admin_delete_user(&token, user_id).await {
                Ok(()) => users.update(|list| list.retain(|u| u.id != user_id)),
                Err(e) => notice::alert(&e),
            }
        });
    });

    let delete_post = Callback::new(move |post_id: i64| {
        if !notice::confirm("Do you really want to delete this post?") {
            return;
        }
        spawn_local(async move {
            let token = token.get_value();
            match posts_api::admin_delete_post(&token, post_id).await {
                Ok(()) => posts.update(|list| list.retain(|p| p.id != post_id)),
                Err(e) => notice::alert(&e),
            }
        });
    });

    let delete_comment = Callback::new(move |comment_id: i64| {
        if !notice::confirm("Do you really want to delete this comment?") {
            return;
        }
        spawn_local(async move {
            let token = token.get_value();
            match posts_api::delete_comment(&token, comment_id).await {
                Ok(()) => {
                    comments.update(|list| list.retain(|c| c.id != comment_id));
                    // Comments are embedded in posts as well.
                    load_posts();
                }
                Err(e) => notice::alert(&e),
            }
        });
    });

    let on_logout = move |_| {
        session.terminate();
        router.navigate(Route::Auth);
    };

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Social Network"</h1>
                <div class="header-actions">
                    <button
                        class="profile-btn"
                        on:click=move |_| router.navigate(Route::OwnProfile)
                    >
                        "My profile"
                    </button>
                    <button class="logout-btn" on:click=on_logout>"Logout"</button>
                </div>
            </header>

            <Show
                when=move || error.get().is_none()
                fallback=move || {
                    view! { <ErrorScreen message=error.get().unwrap_or_default() /> }
                }
            >
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <nav class="view-nav">
                        {ActiveView::offered(is_admin)
                            .into_iter()
                            .map(|view_kind| {
                                view! {
                                    <button
                                        class="nav-btn"
                                        class:active=move || active_view.get() == view_kind
                                        on:click=move |_| active_view.set(view_kind)
                                    >
                                        {view_kind.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="app-body">
                        <aside class="app-sidebar">
                            <UserList
                                users=users
                                viewer_id=viewer_id
                                token=token.get_value()
                                is_admin=is_admin
                                on_delete_user=delete_user
                            />
                        </aside>

                        <main class="app-main">
                            {move || match active_view.get() {
                                ActiveView::Feed => {
                                    view! {
                                        <Feed
                                            posts=posts
                                            viewer_id=viewer_id
                                            is_admin=is_admin
                                            token=token.get_value()
                                            on_refresh=refresh_feed
                                        />
                                    }
                                        .into_any()
                                }
                                ActiveView::AdminUsers => {
                                    view! { <AdminUsersView users=users on_delete=delete_user /> }
                                        .into_any()
                                }
                                ActiveView::AdminPosts => {
                                    view! { <AdminPostsView posts=posts on_delete=delete_post /> }
                                        .into_any()
                                }
                                ActiveView::AdminComments => {
                                    view! {
                                        <AdminCommentsView
                                            comments=comments
                                            on_delete=delete_comment
                                        />
                                    }
                                        .into_any()
                                }
                            }}
                        </main>
                    </div>
                </Show>
            </Show>
        </div>
    }
    .into_any()
}
