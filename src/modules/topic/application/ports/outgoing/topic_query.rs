use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::topic::application::domain::entities::{Topic, TopicId, TopicStatus};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Read-only snapshot of a topic, returned by every topic endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopicView {
    #[schema(value_type = i64, example = 1)]
    pub id: TopicId,
    #[schema(example = "Ownership and borrowing")]
    pub title: String,
    #[schema(example = "When should I clone instead of borrowing?")]
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: TopicStatus,
    #[schema(example = "ana")]
    pub author: String,
    #[schema(example = "Rust fundamentals")]
    pub course: String,
}

impl From<&Topic> for TopicView {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title.clone(),
            message: topic.message.clone(),
            created_at: topic.created_at,
            status: topic.status,
            author: topic.author.clone(),
            course: topic.course.clone(),
        }
    }
}

impl From<Topic> for TopicView {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            message: topic.message,
            created_at: topic.created_at,
            status: topic.status,
            author: topic.author,
            course: topic.course,
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Zero-based page index plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    /// Clamps `size` into `1..=MAX_PAGE_SIZE`; a missing size falls back to
    /// `DEFAULT_PAGE_SIZE`. `page` is capped so that `offset()` never
    /// exceeds `i64::MAX`, the largest OFFSET Postgres accepts.
    pub fn new(page: Option<u64>, size: Option<u64>) -> Self {
        let size = match size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(s) => s.min(MAX_PAGE_SIZE),
        };
        let max_page = MAX_OFFSET / size;

        Self {
            page: page.unwrap_or(0).min(max_page),
            size,
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(MAX_OFFSET)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_items.div_ceil(request.size.max(1)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Topic not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Exact match on both columns.
    async fn exists_by_title_and_message(
        &self,
        title: &str,
        message: &str,
    ) -> Result<bool, TopicQueryError>;

    async fn get_by_id(&self, topic_id: TopicId) -> Result<TopicView, TopicQueryError>;

    /// Ordered by id ascending (insertion order).
    async fn list(&self, page: PageRequest) -> Result<PageResult<TopicView>, TopicQueryError>;
}
