//! User records as seen by the task views.
//!
//! Users are owned by the user-management service. The timeline only joins
//! on `id` to render an assignee label from `name` and `department`.

use super::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Account role reported by the user-management service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Administrator with user-management rights.
    Admin,
    /// Ordinary member.
    #[default]
    User,
    /// Read-only visitor.
    Guest,
    /// Project-scoped account.
    Project,
    /// Role not known to this crate.
    Other(String),
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "user" | "" => Self::User,
            "guest" => Self::Guest,
            "project" => Self::Project,
            _ => Self::Other(value.trim().to_owned()),
        }
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Account identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// Employer.
    pub company: String,
    /// Department within the company.
    pub department: String,
    /// Job title.
    pub position: String,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Returns `true` for administrator accounts.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Label used wherever the user appears as an assignee.
    #[must_use]
    pub fn display_label(&self) -> String {
        if self.department.trim().is_empty() {
            return self.name.clone();
        }
        format!("{} ({})", self.name, self.department)
    }
}

/// Lookup table joining assignee ids to users.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<UserId, User>,
}

impl UserDirectory {
    /// Builds a directory. Later records with a repeated id replace earlier ones.
    #[must_use]
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|user| (user.id.clone(), user)).collect(),
        }
    }

    /// Finds a user by id.
    #[must_use]
    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Returns the assignee label for `id`, or a placeholder naming the id
    /// when the user is unknown. Unassigned tasks yield `None`.
    #[must_use]
    pub fn assignee_label(&self, id: Option<&UserId>) -> Option<String> {
        let assignee = id?;
        Some(
            self.get(assignee)
                .map_or_else(|| format!("User #{assignee}"), User::display_label),
        )
    }

    /// Number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` when the directory holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
