//! Access gate: decides, for a navigation target, whether to render it or
//! where to send the user instead. The gate never touches the session
//! store; redirects and the rejection notice are the routing layer's job.

use crate::routes::route::Route;

use super::claims::DisplayClaims;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Admit,
    RedirectToAuth,
    /// Admin target requested without the admin claim; caller surfaces a
    /// rejection notice before redirecting.
    RedirectToHome,
}

/// Pure admission decision for a navigation target.
pub fn admission(target: &Route, claims: Option<&DisplayClaims>) -> Verdict {
    if target.requires_session() && claims.is_none() {
        return Verdict::RedirectToAuth;
    }
    if matches!(target, Route::Admin) && !claims.map(|c| c.is_admin).unwrap_or(false) {
        return Verdict::RedirectToHome;
    }
    Verdict::Admit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(is_admin: bool) -> DisplayClaims {
        DisplayClaims {
            user_id: 1,
            username: "alice".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_absent_session_redirects_protected_targets_to_auth() {
        for target in [
            Route::Home,
            Route::Admin,
            Route::OwnProfile,
        ] {
            assert_eq!(admission(&target, None), Verdict::RedirectToAuth);
        }
    }

    #[test]
    fn test_public_targets_admit_without_session() {
        assert_eq!(admission(&Route::Auth, None), Verdict::Admit);
        assert_eq!(
            admission(&Route::PublicProfile("bob".to_string()), None),
            Verdict::Admit
        );
    }

    #[test]
    fn test_non_admin_never_admitted_to_admin() {
        assert_eq!(
            admission(&Route::Admin, Some(&claims(false))),
            Verdict::RedirectToHome
        );
    }

    #[test]
    fn test_admin_admitted_to_admin() {
        assert_eq!(admission(&Route::Admin, Some(&claims(true))), Verdict::Admit);
    }

    #[test]
    fn test_authenticated_user_admitted_elsewhere() {
        for target in [Route::Home, Route::OwnProfile, Route::Auth] {
            assert_eq!(admission(&target, Some(&claims(false))), Verdict::Admit);
        }
    }
}
