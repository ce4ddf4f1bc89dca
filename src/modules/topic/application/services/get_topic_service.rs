use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::TopicId,
    ports::{
        incoming::use_cases::{GetTopicError, GetTopicUseCase},
        outgoing::{TopicQuery, TopicQueryError, TopicView},
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicUseCase for GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: TopicId) -> Result<TopicView, GetTopicError> {
        self.query.get_by_id(topic_id).await.map_err(|e| match e {
            TopicQueryError::NotFound => GetTopicError::NotFound,
            TopicQueryError::DatabaseError(msg) => GetTopicError::QueryFailed(msg),
        })
    }
}
