use contracts::auth::TokenPair;
use leptos::prelude::*;

use super::claims::{self, ClaimsError, DisplayClaims};
use super::storage;

/// Session state shared across the app: the bearer token plus the claims
/// decoded from it. Provided once at the root and injected everywhere via
/// Leptos context, so nothing reads localStorage ad hoc.
#[derive(Clone, Copy)]
pub struct SessionContext {
    access_token: RwSignal<Option<String>>,
    claims: RwSignal<Option<DisplayClaims>>,
}

impl SessionContext {
    fn empty() -> Self {
        Self {
            access_token: RwSignal::new(None),
            claims: RwSignal::new(None),
        }
    }

    /// Rehydrate from localStorage at startup. A stored token that no
    /// longer decodes is treated as an invalid session: the store is
    /// cleared and the app starts unauthenticated.
    pub fn restore() -> Self {
        let ctx = Self::empty();
        if let Some(token) = storage::access_token() {
            match claims::decode(&token) {
                Ok(decoded) => {
                    ctx.access_token.set(Some(token));
                    ctx.claims.set(Some(decoded));
                }
                Err(e) => {
                    log::warn!("stored access token is invalid ({e}), clearing session");
                    storage::clear_tokens();
                }
            }
        }
        ctx
    }

    /// Login transition: persist the pair and publish the decoded claims.
    /// A token that does not decode never becomes a session.
    pub fn establish(&self, pair: &TokenPair) -> Result<(), ClaimsError> {
        let decoded = claims::decode(&pair.access)?;
        storage::save_tokens(&pair.access, &pair.refresh);
        log::info!("session established for {}", decoded.username);
        self.access_token.set(Some(pair.access.clone()));
        self.claims.set(Some(decoded));
        Ok(())
    }

    /// Logout transition: any state -> unauthenticated. Idempotent.
    pub fn terminate(&self) {
        log::info!("session terminated");
        storage::clear_tokens();
        self.access_token.set(None);
        self.claims.set(None);
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token.get()
    }

    pub fn claims(&self) -> Option<DisplayClaims> {
        self.claims.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.get().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.claims.get().map(|c| c.is_admin).unwrap_or(false)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.claims.get().map(|c| c.user_id)
    }

    pub fn username(&self) -> Option<String> {
        self.claims.get().map(|c| c.username)
    }
}

pub fn provide_session() -> SessionContext {
    let ctx = SessionContext::restore();
    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
