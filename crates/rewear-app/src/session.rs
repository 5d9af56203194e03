// Rust guideline compliant 2026-02-09

//! Explicit authentication state passed to every service.

use crate::error::{AppError, Result};
use rewear_core::User;

/// The caller's identity and role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Signed-in user, if any.
    pub user: Option<User>,
    /// Whether the user may moderate listings.
    pub is_admin: bool,
}

impl Session {
    /// Creates a session for an anonymous visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a session for a regular member.
    pub fn member(user: User) -> Self {
        Self {
            user: Some(user),
            is_admin: false,
        }
    }

    /// Creates a session for a moderator.
    pub fn admin(user: User) -> Self {
        Self {
            user: Some(user),
            is_admin: true,
        }
    }

    /// Returns true if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the signed-in user's points balance.
    pub fn points(&self) -> Option<u32> {
        self.user.as_ref().map(|user| user.points)
    }

    /// Returns the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotAuthenticated` for anonymous sessions.
    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(AppError::NotAuthenticated)
    }

    /// Returns the signed-in moderator.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotAuthenticated` for anonymous sessions and
    /// `AppError::Forbidden` for members without the moderator role.
    pub fn require_admin(&self) -> Result<&User> {
        let user = self.require_user()?;
        if !self.is_admin {
            return Err(AppError::Forbidden);
        }
        Ok(user)
    }
}
