//! Session and authorization state for one client.
//!
//! The store is an explicit context object: callers own it and pass it where
//! role decisions are needed. Every mutation writes through to durable
//! storage so [`has_role`] (which reads storage) agrees with
//! [`SessionStore::is_in_role`] (which reads memory) as long as one store owns
//! the storage.

use examdesk_common::{RoleQuery, User, UserProfile};
use tracing::{debug, info, warn};

use crate::error::{ClientError, Result};
use crate::services::{AuthApi, Credentials};
use crate::storage::{read_json, write_json, KeyValueStore, TOKEN_KEY, USER_DATA_KEY, USER_KEY};

pub mod roles {
    pub const ADMIN: &str = "Admin";
    pub const TEACHER: &str = "Teacher";
    pub const MERCHANT: &str = "Merchant";
}

/// Where the caller should navigate after a session change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
        }
    }
}

pub struct SessionStore<S, A> {
    storage: S,
    auth: A,
    user: Option<User>,
    profile: Option<UserProfile>,
    error: bool,
}

impl<S: KeyValueStore, A: AuthApi> SessionStore<S, A> {
    /// An anonymous session. Storage is left untouched.
    pub fn new(storage: S, auth: A) -> Self {
        Self {
            storage,
            auth,
            user: None,
            profile: None,
            error: false,
        }
    }

    /// Rebuilds the session from storage at process start.
    pub fn restore(storage: S, auth: A) -> Self {
        let user: Option<User> = read_json(&storage, USER_KEY);
        let profile: Option<UserProfile> = read_json(&storage, USER_DATA_KEY);
        match &user {
            Some(u) => debug!(user_id = u.id, "Restored session from storage."),
            None => debug!("No stored session."),
        }
        Self {
            storage,
            auth,
            user,
            profile,
            error: false,
        }
    }

    /// Authenticates and persists the returned identity.
    ///
    /// On failure the error flag is raised and nothing is written. Two stores
    /// sharing one storage race here: the last completed login wins.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<User> {
        let user = match self.auth.login(credentials).await {
            Ok(user) => user,
            Err(e) => {
                self.error = true;
                return Err(e);
            }
        };

        if let Err(e) = self.persist(&user) {
            warn!(error = %e, "Failed to persist session.");
            self.discard_partial_session();
            self.error = true;
            return Err(e);
        }

        self.user = Some(user.clone());
        self.profile = None;
        self.error = false;
        Ok(user)
    }

    fn persist(&self, user: &User) -> Result<()> {
        write_json(&self.storage, USER_KEY, user)?;
        self.storage.set(TOKEN_KEY, &user.token)?;
        // A profile from a previous identity must not survive a new login.
        self.storage.remove(USER_DATA_KEY)
    }

    /// Drops whatever part of an identity reached storage so a failed login
    /// leaves nobody logged in, in memory or on disk.
    fn discard_partial_session(&mut self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to remove partially stored session entry.");
            }
        }
        self.user = None;
        self.profile = None;
    }

    /// Fetches `users/me` and stores it under `userData`.
    pub async fn refresh_profile(&mut self) -> Result<UserProfile> {
        let token = self
            .token()
            .ok_or_else(|| ClientError::Unauthorized("not logged in".to_string()))?
            .to_string();

        let profile = match self.auth.profile(&token).await {
            Ok(profile) => profile,
            Err(e) => {
                self.error = true;
                return Err(e);
            }
        };
        write_json(&self.storage, USER_DATA_KEY, &profile)?;
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    /// Clears the session. Safe to call when nobody is logged in.
    pub fn logout(&mut self) -> Redirect {
        for key in [USER_KEY, TOKEN_KEY, USER_DATA_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to clear stored session entry.");
            }
        }
        if let Some(user) = self.user.take() {
            info!(user_id = user.id, "Logged out.");
        }
        self.profile = None;
        self.error = false;
        Redirect::Login
    }

    pub fn is_in_role<'a>(&self, query: impl Into<RoleQuery<'a>>) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_in_role(query))
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Role check that reads the stored `user` entry instead of a live session.
/// Missing or malformed content means no roles.
pub fn has_role<'a, S>(storage: &S, query: impl Into<RoleQuery<'a>>) -> bool
where
    S: KeyValueStore + ?Sized,
{
    read_json::<User, S>(storage, USER_KEY).is_some_and(|u| u.is_in_role(query))
}
