use leptos::prelude::*;

use crate::routes::route::Route;
use crate::routes::router::use_router;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

/// Full-view error screen with a way back to the home view.
#[component]
pub fn ErrorScreen(#[prop(into)] message: String) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="error-container">
            <h2>"Error"</h2>
            <p>{message}</p>
            <button class="back-btn" on:click=move |_| router.navigate(Route::Home)>
                "Back to home"
            </button>
        </div>
    }
}
