use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::NewTopic,
    ports::{
        incoming::use_cases::{RegisterTopicCommand, RegisterTopicError, RegisterTopicUseCase},
        outgoing::{TopicQuery, TopicRepository, TopicView},
    },
};

/// The existence check and the insert are two separate statements, so two
/// concurrent registrations of the same pair can both succeed.
#[derive(Debug, Clone)]
pub struct RegisterTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> RegisterTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RegisterTopicUseCase for RegisterTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterTopicCommand,
    ) -> Result<TopicView, RegisterTopicError> {
        // 1️⃣ Reject duplicates
        let exists = self
            .query
            .exists_by_title_and_message(command.title(), command.message())
            .await
            .map_err(|e| RegisterTopicError::RepositoryError(e.to_string()))?;

        if exists {
            return Err(RegisterTopicError::DuplicateTopic);
        }

        // 2️⃣ Persist
        let new_topic = NewTopic::new(
            command.title().to_string(),
            command.message().to_string(),
            command.author().to_string(),
            command.course().to_string(),
        );

        let topic = self
            .repository
            .insert(new_topic)
            .await
            .map_err(|e| RegisterTopicError::RepositoryError(e.to_string()))?;

        Ok(TopicView::from(topic))
    }
}
