use contracts::posts::Post;
use leptos::prelude::*;

use crate::domain::posts::ui::composer::PostComposer;
use crate::domain::posts::ui::post_card::PostCard;

/// The feed view: composer on top, newest posts below.
#[component]
pub fn Feed(
    #[prop(into)] posts: Signal<Vec<Post>>,
    viewer_id: i64,
    is_admin: bool,
    #[prop(into)] token: String,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let composer_token = token.clone();

    view! {
        <div class="feed">
            <PostComposer token=composer_token on_created=on_refresh />
            <For each=move || posts.get() key=|post| post.id let:post>
                <PostCard
                    post=post
                    viewer_id=viewer_id
                    is_admin=is_admin
                    token=token.clone()
                    on_refresh=on_refresh
                />
            </For>
        </div>
    }
}
