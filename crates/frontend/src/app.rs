use leptos::prelude::*;

use crate::routes::router::provide_router;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::provide_session;

#[component]
pub fn App() -> impl IntoView {
    // Session first: the router's gate reads it on the initial route.
    provide_session();
    provide_router();

    view! {
        <AppRoutes />
    }
}
