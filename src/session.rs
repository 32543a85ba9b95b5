//! Session Context
//!
//! The signed-in user, shared by every screen. The bearer token itself
//! lives in localStorage so a reload can restore the session.

use leptos::prelude::*;
use tracing::{error, info, warn};

use crate::api;
use crate::error::ApiError;
use crate::models::{LoginCredentials, PasswordChange, SignupData, User};
use crate::storage;

#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<User>>,
    /// True until the stored token (if any) has been checked
    loading: RwSignal<bool>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    pub fn with_user<R>(&self, f: impl FnOnce(Option<&User>) -> R) -> R {
        self.user.with(|u| f(u.as_ref()))
    }

    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(User::is_admin))
    }

    pub fn username(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.username.clone()))
    }

    pub fn display_name(&self) -> String {
        self.user
            .with(|u| u.as_ref().map(|u| u.display_name().to_string()))
            .unwrap_or_default()
    }

    /// Check a stored token against `/users/`. A rejected token is discarded.
    pub async fn restore(self) {
        if storage::token().is_some() {
            match api::get_current_user().await {
                Ok(user) => {
                    info!(username = %user.username, "session restored");
                    self.user.set(Some(user));
                }
                Err(e) => {
                    warn!("failed to restore session: {}", e);
                    storage::clear_session();
                }
            }
        }
        self.loading.set(false);
    }

    pub async fn login(self, credentials: LoginCredentials) -> Result<(), ApiError> {
        let token = api::login(&credentials)
            .await
            .inspect_err(|e| error!("login failed: {}", e))?;
        storage::set(storage::TOKEN_KEY, &token.access_token);

        match api::get_current_user().await {
            Ok(user) => {
                info!(username = %user.username, "logged in");
                self.user.set(Some(user));
                Ok(())
            }
            Err(e) => {
                error!("failed to load user after login: {}", e);
                storage::clear_session();
                Err(e)
            }
        }
    }

    /// Register an account. Does not sign in.
    pub async fn signup(self, data: SignupData) -> Result<(), ApiError> {
        api::signup(&data)
            .await
            .inspect_err(|e| error!("signup failed: {}", e))
    }

    pub fn logout(&self) {
        info!("logged out");
        storage::clear_session();
        self.user.set(None);
    }

    pub async fn change_password(self, password: String) -> Result<(), ApiError> {
        let Some(username) = self.user.with_untracked(|u| u.as_ref().map(|u| u.username.clone())) else {
            return Err(ApiError::Unauthorized { detail: None });
        };
        api::change_password(&PasswordChange { username, password })
            .await
            .inspect_err(|e| error!("password change failed: {}", e))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session should be provided")
}
