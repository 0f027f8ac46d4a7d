//! Minimal session capability.
//!
//! Authentication proper lives outside this crate; the core only needs to
//! know who, if anyone, is signed in, and their role for display and access
//! gating. The session is a single JSON blob in the same persistence
//! service the records use. No credentials are validated or stored here.

use crate::error::{Result, RosterError};
use crate::store::Persistence;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SESSION_KEY: &str = "current_user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: String,
    pub role: UserRole,
}

/// The signed-in user, or `None` when no session exists.
pub fn current_user<P: Persistence>(persistence: &P) -> Result<Option<CurrentUser>> {
    match persistence.load(SESSION_KEY)? {
        Some(blob) => {
            let user = serde_json::from_str(&blob).map_err(RosterError::Serialization)?;
            Ok(Some(user))
        }
        None => Ok(None),
    }
}

/// Start a session for `email`. Replaces any existing session.
pub fn login<P: Persistence>(persistence: &mut P, email: &str, role: UserRole) -> Result<CurrentUser> {
    let user = CurrentUser {
        email: email.to_string(),
        role,
    };
    let blob = serde_json::to_string(&user).map_err(RosterError::Serialization)?;
    persistence.save(SESSION_KEY, &blob)?;
    Ok(user)
}

/// End the session. A no-op when nobody is signed in.
pub fn logout<P: Persistence>(persistence: &mut P) -> Result<()> {
    persistence.remove(SESSION_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn no_session_reads_back_as_none() {
        let store = InMemoryStore::new();
        assert_eq!(current_user(&store).unwrap(), None);
    }

    #[test]
    fn login_then_current_user_round_trips() {
        let mut store = InMemoryStore::new();
        login(&mut store, "admin@x.com", UserRole::Admin).unwrap();
        let user = current_user(&store).unwrap().unwrap();
        assert_eq!(user.email, "admin@x.com");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn logout_clears_the_session() {
        let mut store = InMemoryStore::new();
        login(&mut store, "u@x.com", UserRole::User).unwrap();
        logout(&mut store).unwrap();
        assert_eq!(current_user(&store).unwrap(), None);
        // Logging out twice is fine.
        logout(&mut store).unwrap();
    }
}
