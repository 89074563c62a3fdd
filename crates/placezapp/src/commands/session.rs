use crate::auth;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PlacezError, Result};
use crate::store::backend::StorageBackend;

pub fn login<L: StorageBackend, S: StorageBackend>(
    local: &L,
    session: &S,
    username: &str,
    password: &str,
) -> Result<CmdResult> {
    let created = auth::login(local, session, username, password)?
        .ok_or_else(|| PlacezError::Api("Invalid username or password".to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged in as {}",
        created.username
    )));
    Ok(result.with_session(created))
}

pub fn logout<S: StorageBackend>(session: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match auth::logout(session)? {
        Some(ended) => result.add_message(CmdMessage::success(format!(
            "Logged out {}",
            ended.username
        ))),
        None => result.add_message(CmdMessage::info("Not logged in")),
    }
    Ok(result)
}

pub fn whoami<S: StorageBackend>(session: &S) -> Result<CmdResult> {
    let current = auth::current_session(session)?.ok_or(PlacezError::NotLoggedIn)?;
    Ok(CmdResult::default().with_session(current))
}
