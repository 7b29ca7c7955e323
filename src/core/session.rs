//! Signed-in user context, handed to each controller at construction.

use std::str::FromStr;

/// Kind of account behind a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKind {
    /// Submits and tracks their own bills
    Employee,
}

impl FromStr for UserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Employee" => Ok(Self::Employee),
            other => Err(format!("unsupported user type '{other}'")),
        }
    }
}

/// Read-only view of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Account kind
    pub kind: UserKind,
    /// Owner identifier stamped on submitted bills
    pub email: String,
}

impl Session {
    /// Session for an employee account.
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            kind: UserKind::Employee,
            email: email.into(),
        }
    }
}
