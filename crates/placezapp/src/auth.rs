//! # Local Login Gate
//!
//! placez is single-tenant. The "login" is a gate, not a security boundary:
//! credentials are a plaintext list in local storage, compared verbatim.
//!
//! - The credential list lives under `travelUsers` in the *local* backend and
//!   is seeded with one default entry (`admin` / `admin123`).
//! - A successful login writes a [`Session`] under `currentUser` in the
//!   *session* backend. Logging out removes it.
//!
//! Unreadable credential lists are replaced by the default entry; an
//! unreadable session counts as logged out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::{SESSION_KEY, USERS_KEY};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn default_entry() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub logged_in: bool,
    pub login_time: DateTime<Utc>,
    pub token: String,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            logged_in: true,
            login_time: Utc::now(),
            token: format!("travel_{}", Uuid::new_v4().simple()),
        }
    }
}

fn write_default_credentials<B: StorageBackend>(local: &B) -> Result<Vec<Credential>> {
    let users = vec![Credential::default_entry()];
    local.set(USERS_KEY, &serde_json::to_string(&users)?)?;
    Ok(users)
}

/// Writes the default credential list if none is stored.
pub fn ensure_default_credentials<B: StorageBackend>(local: &B) -> Result<()> {
    load_credentials(local)?;
    Ok(())
}

fn load_credentials<B: StorageBackend>(local: &B) -> Result<Vec<Credential>> {
    let Some(raw) = local.get(USERS_KEY)? else {
        return write_default_credentials(local);
    };

    match serde_json::from_str(&raw) {
        Ok(users) => Ok(users),
        Err(e) => {
            warn!(error = %e, "discarding corrupted credential list");
            write_default_credentials(local)
        }
    }
}

pub fn authenticate<B: StorageBackend>(local: &B, username: &str, password: &str) -> Result<bool> {
    Ok(load_credentials(local)?
        .iter()
        .any(|c| c.username == username && c.password == password))
}

/// Returns the new session, or None if the credentials do not match.
/// A failed attempt leaves any existing session in place.
pub fn login<L: StorageBackend, S: StorageBackend>(
    local: &L,
    session: &S,
    username: &str,
    password: &str,
) -> Result<Option<Session>> {
    if !authenticate(local, username, password)? {
        info!(username, "login rejected");
        return Ok(None);
    }

    let new_session = Session::new(username);
    session.set(SESSION_KEY, &serde_json::to_string(&new_session)?)?;
    info!(username, "logged in");
    Ok(Some(new_session))
}

pub fn current_session<S: StorageBackend>(session: &S) -> Result<Option<Session>> {
    let Some(raw) = session.get(SESSION_KEY)? else {
        return Ok(None);
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(s) if s.logged_in => Ok(Some(s)),
        Ok(_) => Ok(None),
        Err(e) => {
            warn!(error = %e, "ignoring corrupted session");
            Ok(None)
        }
    }
}

/// Ends the current session. Returns the session that was ended, if any.
pub fn logout<S: StorageBackend>(session: &S) -> Result<Option<Session>> {
    let ended = current_session(session)?;
    session.remove(SESSION_KEY)?;
    if let Some(s) = &ended {
        info!(username = %s.username, "logged out");
    }
    Ok(ended)
}
