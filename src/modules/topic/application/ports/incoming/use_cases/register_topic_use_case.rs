use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicView;

//
// ──────────────────────────────────────────────────────────
// Register Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterTopicCommand {
    title: String,
    message: String,
    author: String,
    course: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Author cannot be empty")]
    EmptyAuthor,

    #[error("Course cannot be empty")]
    EmptyCourse,
}

impl RegisterTopicCommand {
    pub fn new(
        title: String,
        message: String,
        author: String,
        course: String,
    ) -> Result<Self, RegisterTopicCommandError> {
        let title = non_blank(title).ok_or(RegisterTopicCommandError::EmptyTitle)?;
        let message = non_blank(message).ok_or(RegisterTopicCommandError::EmptyMessage)?;
        let author = non_blank(author).ok_or(RegisterTopicCommandError::EmptyAuthor)?;
        let course = non_blank(course).ok_or(RegisterTopicCommandError::EmptyCourse)?;

        Ok(Self {
            title,
            message,
            author,
            course,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn course(&self) -> &str {
        &self.course
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterTopicError {
    #[error("A topic with the same title and message already exists")]
    DuplicateTopic,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterTopicUseCase: Send + Sync {
    async fn execute(&self, command: RegisterTopicCommand)
        -> Result<TopicView, RegisterTopicError>;
}
