/// Closed set of navigation targets the client can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Login/register page (`/`, `/login`, `/register`).
    Auth,
    /// Feed plus users sidebar (`/home`).
    Home,
    /// Home shell opened on the admin sub-views (`/admin`).
    Admin,
    /// The logged-in user's own profile (`/profile`).
    OwnProfile,
    /// Another user's profile (`/user/{username}`).
    PublicProfile(String),
}

impl Route {
    /// Map a location pathname onto a target. Unknown paths fall back to
    /// the auth page.
    pub fn parse(path: &str) -> Route {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/login" | "/register" => Route::Auth,
            "/home" => Route::Home,
            "/admin" => Route::Admin,
            "/profile" => Route::OwnProfile,
            _ => {
                if let Some(username) = path.strip_prefix("/user/") {
                    if !username.is_empty() && !username.contains('/') {
                        let username = urlencoding::decode(username)
                            .map(|s| s.into_owned())
                            .unwrap_or_else(|_| username.to_string());
                        return Route::PublicProfile(username);
                    }
                }
                Route::Auth
            }
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Auth => "/".to_string(),
            Route::Home => "/home".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::OwnProfile => "/profile".to_string(),
            Route::PublicProfile(username) => {
                format!("/user/{}", urlencoding::encode(username))
            }
        }
    }

    /// Targets that cannot be displayed without a session. The public
    /// profile renders without one (its data fetch still needs a token and
    /// redirects on its own).
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Home | Route::Admin | Route::OwnProfile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_aliases() {
        assert_eq!(Route::parse("/"), Route::Auth);
        assert_eq!(Route::parse("/login"), Route::Auth);
        assert_eq!(Route::parse("/register"), Route::Auth);
    }

    #[test]
    fn test_parse_fixed_targets() {
        assert_eq!(Route::parse("/home"), Route::Home);
        assert_eq!(Route::parse("/home/"), Route::Home);
        assert_eq!(Route::parse("/admin"), Route::Admin);
        assert_eq!(Route::parse("/profile"), Route::OwnProfile);
    }

    #[test]
    fn test_parse_public_profile() {
        assert_eq!(
            Route::parse("/user/bob"),
            Route::PublicProfile("bob".to_string())
        );
        assert_eq!(
            Route::parse("/user/bob/"),
            Route::PublicProfile("bob".to_string())
        );
        // percent-encoded usernames round-trip
        assert_eq!(
            Route::parse("/user/caf%C3%A9"),
            Route::PublicProfile("café".to_string())
        );
    }

    #[test]
    fn test_unknown_paths_fall_back_to_auth() {
        assert_eq!(Route::parse("/user/"), Route::Auth);
        assert_eq!(Route::parse("/user/a/b"), Route::Auth);
        assert_eq!(Route::parse("/nonsense"), Route::Auth);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::Admin,
            Route::OwnProfile,
            Route::PublicProfile("café user".to_string()),
        ] {
            assert_eq!(Route::parse(&route.to_path()), route);
        }
    }

    #[test]
    fn test_session_requirements() {
        assert!(Route::Home.requires_session());
        assert!(Route::Admin.requires_session());
        assert!(Route::OwnProfile.requires_session());
        assert!(!Route::Auth.requires_session());
        assert!(!Route::PublicProfile("bob".to_string()).requires_session());
    }
}
