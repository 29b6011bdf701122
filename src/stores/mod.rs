//! The data-fetching collaborator contract.
//!
//! The dashboard never talks to the backend directly; it goes through the
//! store traits defined here, which deliver full snapshots of transactions
//! and tasks and accept the CRUD operations the forms issue. Every call takes
//! an explicit [Session] so that no ambient global token state is involved.

use std::fmt;

mod memory;
mod task;
mod transaction;

pub use memory::MemoryStore;
pub use task::TaskStore;
pub use transaction::TransactionStore;

/// The authentication context passed explicitly to every store call.
///
/// Holds the bearer token for the backend API. Where the token comes from and
/// how it is persisted is the embedding application's concern.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
}

impl Session {
    /// Create a session from a backend access token.
    pub fn new(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_owned(),
        }
    }

    /// The value for the `Authorization` header of a backend request.
    pub fn bearer_token(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// The token must not leak into logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"********")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Session;

    #[test]
    fn bearer_token_prefixes_the_access_token() {
        let session = Session::new("abc123");

        assert_eq!(session.bearer_token(), "Bearer abc123");
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let session = Session::new("super-secret");

        let debug = format!("{session:?}");

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("********"));
    }
}
