use leptos::prelude::*;

use crate::app_shell::{ActiveView, HomePage};
use crate::domain::accounts::ui::own_profile::OwnProfilePage;
use crate::domain::accounts::ui::public_profile::PublicProfilePage;
use crate::routes::route::Route;
use crate::routes::router::use_router;
use crate::shared::notice;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::{self, Verdict};
use crate::system::pages::auth::AuthPage;

/// Route switch behind the access gate. Every navigation target passes
/// through `guard::admission` before its view is chosen, so a denied
/// target's content never mounts.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // Redirects mutate the URL, so they run as an effect rather than
    // during rendering.
    Effect::new(move |_| {
        let target = router.current();
        let claims = session.claims();
        match guard::admission(&target, claims.as_ref()) {
            Verdict::Admit => {}
            Verdict::RedirectToAuth => router.replace(Route::Auth),
            Verdict::RedirectToHome => {
                notice::alert("Access denied: you are not an administrator");
                router.replace(Route::Home);
            }
        }
    });

    move || {
        let target = router.current();
        let claims = session.claims();
        match guard::admission(&target, claims.as_ref()) {
            Verdict::RedirectToAuth => view! { <AuthPage /> }.into_any(),
            Verdict::RedirectToHome => {
                view! { <HomePage initial_view=ActiveView::Feed /> }.into_any()
            }
            Verdict::Admit => match target {
                Route::Auth => view! { <AuthPage /> }.into_any(),
                Route::Home => view! { <HomePage initial_view=ActiveView::Feed /> }.into_any(),
                Route::Admin => {
                    view! { <HomePage initial_view=ActiveView::AdminUsers /> }.into_any()
                }
                Route::OwnProfile => view! { <OwnProfilePage /> }.into_any(),
                Route::PublicProfile(username) => {
                    view! { <PublicProfilePage username=username /> }.into_any()
                }
            },
        }
    }
}
