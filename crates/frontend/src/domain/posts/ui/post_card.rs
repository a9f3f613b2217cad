use contracts::posts::Post;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::posts::api;
use crate::routes::route::Route;
use crate::routes::router::use_router;
use crate::shared::components::avatar::UserAvatar;
use crate::shared::date_utils::format_datetime;
use crate::shared::notice;

/// One feed entry: content, like toggle, comments, comment form. Every
/// successful mutation asks the parent to refetch the feed.
#[component]
pub fn PostCard(
    post: Post,
    viewer_id: i64,
    is_admin: bool,
    #[prop(into)] token: String,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let router = use_router();

    let post_id = post.id;
    let author = post.author.username.clone();
    let author_for_nav = author.clone();
    let is_author = post.author.id == viewer_id;
    let liked = post.likes.iter().any(|like| like.user.id == viewer_id);
    let likes_count = post.likes_count;
    let created = format_datetime(&post.created_at);
    let content = post.content.clone();
    let image_url = post.image_url.clone();
    let comments = post.comments.clone();

    let (comment_text, set_comment_text) = signal(String::new());
    let (like_pending, set_like_pending) = signal(false);

    let like_token = token.clone();
    let on_like = move |_| {
        if like_pending.get() {
            return;
        }
        set_like_pending.set(true);
        let token = like_token.clone();
        spawn_local(async move {
            let result = if liked {
                api::unlike_post(&token).await
            } else {
                api::like_post(&token, post_id).await
            };
            match result {
                Ok(()) => on_refresh.run(()),
                Err(e) => notice::alert(&e),
            }
            set_like_pending.set(false);
        });
    };

    let comment_token = token.clone();
    let on_comment_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = comment_text.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        let token = comment_token.clone();
        spawn_local(async move {
            match api::create_comment(&token, post_id, &text).await {
                Ok(_comment) => {
                    set_comment_text.set(String::new());
                    on_refresh.run(());
                }
                Err(e) => {
                    log::warn!("comment on post {post_id} failed: {e}");
                    notice::alert("Could not post the comment");
                }
            }
        });
    };

    let delete_token = token.clone();
    let on_delete = move |_| {
        if !notice::confirm("Do you really want to delete this post?") {
            return;
        }
        let token = delete_token.clone();
        spawn_local(async move {
            let result = if is_admin && !is_author {
                api::admin_delete_post(&token, post_id).await
            } else {
                api::delete_post(&token, post_id).await
            };
            match result {
                Ok(()) => on_refresh.run(()),
                Err(e) => notice::alert(&e),
            }
        });
    };

    view! {
        <article class="post-card">
            <header class="post-header">
                <UserAvatar
                    username=author.clone()
                    on_click=Callback::new(move |_: ()| {
                        router.navigate(Route::PublicProfile(author_for_nav.clone()));
                    })
                />
                <div class="post-meta">
                    <span class="post-author">{author}</span>
                    <span class="post-date">{created}</span>
                </div>
                {(is_author || is_admin)
                    .then(|| view! { <button class="delete-btn" on:click=on_delete>"Delete"</button> })}
            </header>

            <p class="post-content">{content}</p>
            {image_url.map(|url| view! { <img class="post-image" src=url /> })}

            <div class="post-actions">
                <button
                    class="like-btn"
                    class:liked=liked
                    disabled=move || like_pending.get()
                    on:click=on_like
                >
                    {if liked { "Unlike" } else { "Like" }} " (" {likes_count} ")"
                </button>
            </div>

            <div class="post-comments">
                <For each=move || comments.clone() key=|comment| comment.id let:comment>
                    <div class="comment">
                        <span class="comment-author">{comment.author.username.clone()}</span>
                        <span class="comment-text">{comment.text.clone()}</span>
                    </div>
                </For>
                <form on:submit=on_comment_submit>
                    <input
                        type="text"
                        placeholder="Write a comment..."
                        prop:value=move || comment_text.get()
                        on:input=move |ev| set_comment_text.set(event_target_value(&ev))
                    />
                    <button type="submit">"Comment"</button>
                </form>
            </div>
        </article>
    }
}
