//! Session configuration loaded from environment variables.
//!
//! The signed-in user is described by `BILLS_USER_EMAIL` and `BILLS_USER_TYPE`
//! (defaults to `Employee`). The session is read once at startup and handed to the
//! controllers; nothing writes it back.

use crate::{
    core::session::{Session, UserKind},
    errors::{Error, Result},
};

/// Builds the session from raw variable values.
///
/// # Errors
/// Fails when the email is blank or the user type is not supported.
pub fn session_from(email: &str, user_type: Option<&str>) -> Result<Session> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::Config {
            message: "BILLS_USER_EMAIL is empty".to_string(),
        });
    }

    let kind = user_type
        .unwrap_or("Employee")
        .parse::<UserKind>()
        .map_err(|message| Error::Config { message })?;

    Ok(Session {
        kind,
        email: email.to_string(),
    })
}

/// Reads the session from `BILLS_USER_EMAIL` / `BILLS_USER_TYPE`.
///
/// # Errors
/// Fails when `BILLS_USER_EMAIL` is missing or the values are rejected by [`session_from`].
pub fn load_session() -> Result<Session> {
    let email = std::env::var("BILLS_USER_EMAIL")?;
    let user_type = std::env::var("BILLS_USER_TYPE").ok();
    session_from(&email, user_type.as_deref())
}
