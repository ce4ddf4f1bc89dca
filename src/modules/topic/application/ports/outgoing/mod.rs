mod topic_query;
mod topic_repository;

pub use topic_query::{
    PageRequest, PageResult, TopicQuery, TopicQueryError, TopicView, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use topic_repository::{TopicRepository, TopicRepositoryError};
