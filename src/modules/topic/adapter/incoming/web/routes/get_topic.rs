use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{
        domain::entities::TopicId,
        ports::{incoming::use_cases::GetTopicError, outgoing::TopicView},
    },
    AppState,
};

/// Get a topic
#[utoipa::path(
    get,
    path = "/topics/{id}",
    tag = "topics",
    params(("id" = i64, Path, description = "Topic id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "The topic", body = inline(SuccessResponse<TopicView>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/topics/{id}")]
pub async fn get_topic_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let topic_id = TopicId::from(path.into_inner());

    match data.topic.get_single.execute(topic_id).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(GetTopicError::NotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        Err(GetTopicError::QueryFailed(msg)) => {
            tracing::error!("Failed to load topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}
