use async_trait::async_trait;

use crate::topic::application::ports::outgoing::{PageRequest, PageResult, TopicView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Failed to list topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<TopicView>, ListTopicsError>;
}
