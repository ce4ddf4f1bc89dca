use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicRepository, TopicRepositoryError, TopicView},
};

/// Loads the topic, applies the patch and writes it back. No duplicate
/// re-check happens on update.
#[derive(Debug, Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(e: TopicRepositoryError) -> UpdateTopicError {
    match e {
        TopicRepositoryError::TopicNotFound => UpdateTopicError::NotFound,
        TopicRepositoryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError> {
        let (topic_id, patch) = command.into_parts();

        let mut topic = self
            .repository
            .find_by_id(topic_id)
            .await
            .map_err(map_repository_error)?
            .ok_or(UpdateTopicError::NotFound)?;

        if patch.is_empty() {
            return Ok(TopicView::from(topic));
        }

        topic.apply_patch(patch);

        let updated = self
            .repository
            .update(&topic)
            .await
            .map_err(map_repository_error)?;

        Ok(TopicView::from(updated))
    }
}
