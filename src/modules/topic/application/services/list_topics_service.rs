use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{ListTopicsError, ListTopicsUseCase},
    outgoing::{PageRequest, PageResult, TopicQuery, TopicView},
};

#[derive(Debug, Clone)]
pub struct ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<TopicView>, ListTopicsError> {
        self.query
            .list(page)
            .await
            .map_err(|e| ListTopicsError::QueryFailed(e.to_string()))
    }
}
