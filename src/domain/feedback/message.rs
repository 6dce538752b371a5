//! A single message posted to the feedback board.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{FeedbackId, Timestamp, ValidationError};

/// Who posted a message. Admin replies are highlighted on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackRole {
    #[default]
    Guest,
    User,
    Admin,
}

impl fmt::Display for FeedbackRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedbackRole::Guest => "guest",
            FeedbackRole::User => "user",
            FeedbackRole::Admin => "admin",
        };
        write!(f, "{s}")
    }
}

/// A posted message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackMessage {
    id: FeedbackId,
    name: String,
    message: String,
    role: FeedbackRole,
    timestamp: Timestamp,
}

impl FeedbackMessage {
    /// Creates a message stamped with a fresh id and the current time.
    ///
    /// Name and message are trimmed and must not be blank.
    pub fn new(name: &str, message: &str, role: FeedbackRole) -> Result<Self, ValidationError> {
        Self::new_at(FeedbackId::new(), Timestamp::now(), name, message, role)
    }

    pub fn new_at(
        id: FeedbackId,
        timestamp: Timestamp,
        name: &str,
        message: &str,
        role: FeedbackRole,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::empty_field("message"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            message: message.to_string(),
            role,
            timestamp,
        })
    }

    pub fn id(&self) -> &FeedbackId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn role(&self) -> FeedbackRole {
        self.role
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }
}
