use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::ListTopicsError,
        outgoing::{PageRequest, PageResult, TopicView},
    },
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTopicsQuery {
    /// Zero-based page index (default 0)
    pub page: Option<u64>,
    /// Page size (default 10, max 100)
    pub size: Option<u64>,
}

/// List topics
///
/// Pages through all topics in insertion order.
#[utoipa::path(
    get,
    path = "/topics",
    tag = "topics",
    params(ListTopicsQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "A page of topics", body = inline(SuccessResponse<PageResult<TopicView>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/topics")]
pub async fn list_topics_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    query: web::Query<ListTopicsQuery>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.size);

    match data.topic.list.execute(page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListTopicsError::QueryFailed(msg)) => {
            tracing::error!("Failed to list topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
