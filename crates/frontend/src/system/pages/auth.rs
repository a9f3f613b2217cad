use contracts::auth::RegisterRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::route::Route;
use crate::routes::router::use_router;
use crate::system::auth::{api, context::use_session};

/// Login/register page. Login stores the token pair and navigates to the
/// feed; register shows a confirmation screen and returns to the login
/// form after a short delay.
#[component]
pub fn AuthPage() -> impl IntoView {
    let (is_login, set_is_login) = signal(true);
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (registered, set_registered) = signal(false);

    let session = use_session();
    let router = use_router();

    let reset_form = move || {
        set_username.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
    };

    let toggle_mode = move |_| {
        set_is_login.update(|v| *v = !*v);
        set_error_message.set(None);
        set_registered.set(false);
        reset_form();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let email_val = email.get();
        let password_val = password.get();
        let login_mode = is_login.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            if login_mode {
                match api::login(username_val, password_val).await {
                    Ok(pair) => match session.establish(&pair) {
                        Ok(()) => {
                            set_is_loading.set(false);
                            router.navigate(Route::Home);
                        }
                        Err(e) => {
                            log::warn!("received token failed to decode: {e}");
                            set_error_message
                                .set(Some("Login failed: invalid session token".to_string()));
                            set_is_loading.set(false);
                        }
                    },
                    Err(e) => {
                        set_error_message.set(Some(e));
                        set_is_loading.set(false);
                    }
                }
            } else {
                let request = RegisterRequest {
                    username: username_val,
                    email: email_val,
                    password: password_val,
                };
                match api::register(request).await {
                    Ok(()) => {
                        set_is_loading.set(false);
                        set_registered.set(true);
                        reset_form();
                        // Back to the login form after the confirmation screen.
                        TimeoutFuture::new(3_000).await;
                        set_registered.set(false);
                        set_is_login.set(true);
                    }
                    Err(e) => {
                        set_error_message.set(Some(e));
                        set_is_loading.set(false);
                    }
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <Show
                when=move || !registered.get()
                fallback=|| {
                    view! {
                        <div class="auth-success">
                            <h2>"Registration complete!"</h2>
                            <p>"Your account has been created."</p>
                            <p>"Redirecting you to the login form..."</p>
                        </div>
                    }
                }
            >
                <div class="auth-box">
                    <h1>{move || if is_login.get() { "Welcome back!" } else { "Join us!" }}</h1>

                    <div class="auth-toggle">
                        <button
                            class:active=move || is_login.get()
                            on:click=toggle_mode
                            disabled=move || is_login.get()
                        >
                            "Sign in"
                        </button>
                        <button
                            class:active=move || !is_login.get()
                            on:click=toggle_mode
                            disabled=move || !is_login.get()
                        >
                            "Register"
                        </button>
                    </div>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                type="text"
                                id="username"
                                prop:value=move || username.get()
                                on:input=move |ev| {
                                    set_username.set(event_target_value(&ev));
                                    set_error_message.set(None);
                                }
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <Show when=move || !is_login.get()>
                            <div class="form-group">
                                <label for="email">"Email"</label>
                                <input
                                    type="email"
                                    id="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| {
                                        set_email.set(event_target_value(&ev));
                                        set_error_message.set(None);
                                    }
                                    required
                                    disabled=move || is_loading.get()
                                />
                            </div>
                        </Show>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    set_error_message.set(None);
                                }
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button type="submit" class="submit-btn" disabled=move || is_loading.get()>
                            {move || match (is_login.get(), is_loading.get()) {
                                (true, true) => "Signing in...",
                                (true, false) => "Sign in",
                                (false, true) => "Creating account...",
                                (false, false) => "Create account",
                            }}
                        </button>

                        <Show when=move || error_message.get().is_some()>
                            <div class="form-error">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>
                    </form>
                </div>
            </Show>
        </div>
    }
}
