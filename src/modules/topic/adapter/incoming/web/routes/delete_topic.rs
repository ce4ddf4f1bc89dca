use actix_web::{delete, web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{
        domain::entities::TopicId, ports::incoming::use_cases::DeleteTopicError,
    },
    AppState,
};

/// Delete a topic
///
/// Permanently removes the topic.
#[utoipa::path(
    delete,
    path = "/topics/{id}",
    tag = "topics",
    params(("id" = i64, Path, description = "Topic id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/topics/{id}")]
pub async fn delete_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let topic_id = TopicId::from(path.into_inner());

    match data.topic.delete.execute(topic_id).await {
        Ok(()) => {
            tracing::info!(topic_id = %topic_id, by = %user.login, "Topic deleted");
            ApiResponse::no_content()
        }
        Err(DeleteTopicError::NotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        Err(DeleteTopicError::DatabaseError(msg)) => {
            tracing::error!("Failed to delete topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}
