use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::TopicId,
    ports::{
        incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
        outgoing::{TopicRepository, TopicRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> DeleteTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: TopicId) -> Result<(), DeleteTopicError> {
        self.repository
            .delete(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::NotFound,
                TopicRepositoryError::DatabaseError(msg) => DeleteTopicError::DatabaseError(msg),
            })
    }
}
