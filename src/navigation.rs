//! Screen Navigation
//!
//! Screens are switched through a signal and mirrored to the URL hash.
//! Access rules live in [`resolve`].

use crate::models::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Main,
    AdminUsers,
}

impl Screen {
    pub fn hash(&self) -> &'static str {
        match self {
            Screen::Login => "#/login",
            Screen::Signup => "#/signup",
            Screen::Main => "#/main",
            Screen::AdminUsers => "#/admin/users",
        }
    }

    /// Parse `location.hash`. Empty or unknown hashes yield `None` (root).
    pub fn from_hash(hash: &str) -> Option<Self> {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        match path {
            "/login" => Some(Screen::Login),
            "/signup" => Some(Screen::Signup),
            "/main" => Some(Screen::Main),
            "/admin/users" => Some(Screen::AdminUsers),
            _ => None,
        }
    }
}

/// Where a request for `requested` actually lands given the session.
/// `None` while the session is still being restored.
pub fn resolve(requested: Option<Screen>, user: Option<&User>, loading: bool) -> Option<Screen> {
    if loading {
        return None;
    }
    let screen = match (requested, user) {
        (None, Some(_)) => Screen::Main,
        (None, None) => Screen::Login,
        (Some(Screen::Login | Screen::Signup), Some(_)) => Screen::Main,
        (Some(Screen::Main | Screen::AdminUsers), None) => Screen::Login,
        (Some(Screen::AdminUsers), Some(u)) if !u.is_admin() => Screen::Main,
        (Some(screen), _) => screen,
    };
    Some(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn make_user(role: Role) -> User {
        User {
            id: 1,
            username: "ana".to_string(),
            email: "ana@x.io".to_string(),
            full_name: None,
            role,
            is_active: true,
        }
    }

    #[test]
    fn test_loading_shows_nothing() {
        assert_eq!(resolve(Some(Screen::Main), None, true), None);
    }

    #[test]
    fn test_guard_matrix() {
        let user = make_user(Role::User);
        let admin = make_user(Role::Admin);

        assert_eq!(resolve(None, None, false), Some(Screen::Login));
        assert_eq!(resolve(None, Some(&user), false), Some(Screen::Main));

        assert_eq!(resolve(Some(Screen::Main), None, false), Some(Screen::Login));
        assert_eq!(resolve(Some(Screen::AdminUsers), None, false), Some(Screen::Login));
        assert_eq!(resolve(Some(Screen::Signup), None, false), Some(Screen::Signup));

        assert_eq!(resolve(Some(Screen::Login), Some(&user), false), Some(Screen::Main));
        assert_eq!(resolve(Some(Screen::Signup), Some(&admin), false), Some(Screen::Main));

        assert_eq!(resolve(Some(Screen::AdminUsers), Some(&user), false), Some(Screen::Main));
        assert_eq!(resolve(Some(Screen::AdminUsers), Some(&admin), false), Some(Screen::AdminUsers));
    }

    #[test]
    fn test_hash_parsing() {
        for screen in [Screen::Login, Screen::Signup, Screen::Main, Screen::AdminUsers] {
            assert_eq!(Screen::from_hash(screen.hash()), Some(screen));
        }
        assert_eq!(Screen::from_hash("#/admin/users/"), Some(Screen::AdminUsers));
        assert_eq!(Screen::from_hash(""), None);
        assert_eq!(Screen::from_hash("#/nope"), None);
    }
}
