use async_trait::async_trait;

use crate::topic::application::domain::entities::{NewTopic, Topic, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the topic store.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Persists a new topic; the store assigns its id.
    async fn insert(&self, topic: NewTopic) -> Result<Topic, TopicRepositoryError>;

    /// Loads a topic for mutation.
    async fn find_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicRepositoryError>;

    /// Writes the mutable fields (title, message, author, course) back.
    async fn update(&self, topic: &Topic) -> Result<Topic, TopicRepositoryError>;

    async fn delete(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError>;
}
