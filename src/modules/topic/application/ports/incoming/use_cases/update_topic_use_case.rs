use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::{TopicId, TopicPatch},
    ports::outgoing::TopicView,
};

//
// ──────────────────────────────────────────────────────────
// Update Topic Command
// ──────────────────────────────────────────────────────────
//

/// Present fields must not be blank; absent fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    topic_id: TopicId,
    patch: TopicPatch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateTopicCommandError {
    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),
}

impl UpdateTopicCommand {
    pub fn new(
        topic_id: TopicId,
        title: Option<String>,
        message: Option<String>,
        author: Option<String>,
        course: Option<String>,
    ) -> Result<Self, UpdateTopicCommandError> {
        let patch = TopicPatch {
            title: present("title", title)?,
            message: present("message", message)?,
            author: present("author", author)?,
            course: present("course", course)?,
        };

        Ok(Self { topic_id, patch })
    }

    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    pub fn patch(&self) -> &TopicPatch {
        &self.patch
    }

    pub fn into_parts(self) -> (TopicId, TopicPatch) {
        (self.topic_id, self.patch)
    }
}

fn present(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, UpdateTopicCommandError> {
    match value {
        None => Ok(None),
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Err(UpdateTopicCommandError::EmptyField(field))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError>;
}
