use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Topic identity
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(i64);

impl TopicId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TopicId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TopicId> for i64 {
    fn from(id: TopicId) -> Self {
        id.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Topic status
// ──────────────────────────────────────────────────────────
//

/// Only `Active` is produced today; there are no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicStatus {
    #[default]
    Active,
}

impl TopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Active => "ACTIVE",
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown topic status: {0}")]
pub struct UnknownTopicStatus(pub String);

impl FromStr for TopicStatus {
    type Err = UnknownTopicStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(TopicStatus::Active),
            other => Err(UnknownTopicStatus(other.to_string())),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Entities
// ──────────────────────────────────────────────────────────
//

/// A topic that has not been persisted yet (no identity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub title: String,
    pub message: String,
    pub author: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
    pub status: TopicStatus,
}

impl NewTopic {
    pub fn new(title: String, message: String, author: String, course: String) -> Self {
        Self {
            title,
            message,
            author,
            course,
            created_at: Utc::now(),
            status: TopicStatus::Active,
        }
    }
}

/// A persisted topic. Mutated only through [`Topic::apply_patch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub message: String,
    pub author: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
    pub status: TopicStatus,
}

/// Partial update: `None` keeps the stored value, `Some` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub author: Option<String>,
    pub course: Option<String>,
}

impl TopicPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.message.is_none()
            && self.author.is_none()
            && self.course.is_none()
    }
}

impl Topic {
    /// Overwrites each field present in `patch`. Identity, status and
    /// creation time are never touched.
    pub fn apply_patch(&mut self, patch: TopicPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(course) = patch.course {
            self.course = course;
        }
    }
}
