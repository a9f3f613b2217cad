use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::window;

use super::route::Route;

/// Current route plus History integration. `Copy` so components can close
/// over it freely.
#[derive(Clone, Copy)]
pub struct RouterContext {
    current: RwSignal<Route>,
}

impl RouterContext {
    /// Read the initial route from the window location.
    pub fn from_window() -> Self {
        let initial = window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::parse(&path))
            .unwrap_or(Route::Auth);
        Self {
            current: RwSignal::new(initial),
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// Navigate to a target, pushing a History entry.
    pub fn navigate(&self, route: Route) {
        self.set_url(&route, false);
        self.current.set(route);
    }

    /// Navigate without creating a History entry (gate redirects).
    pub fn replace(&self, route: Route) {
        self.set_url(&route, true);
        self.current.set(route);
    }

    fn set_url(&self, route: &Route, replace: bool) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let path = route.to_path();
                let result = if replace {
                    history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
                } else {
                    history.push_state_with_url(&JsValue::NULL, "", Some(&path))
                };
                if result.is_err() {
                    log::warn!("failed to update history for {path}");
                }
            }
        }
    }

    /// Keep the route signal in sync with browser back/forward. Called once
    /// at startup; the listener lives for the lifetime of the page.
    pub fn listen_popstate(&self) {
        let current = self.current;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let route = window()
                .and_then(|w| w.location().pathname().ok())
                .map(|path| Route::parse(&path))
                .unwrap_or(Route::Auth);
            current.set(route);
        });
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

pub fn provide_router() -> RouterContext {
    let router = RouterContext::from_window();
    router.listen_popstate();
    provide_context(router);
    router
}

pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext not found in component tree")
}
