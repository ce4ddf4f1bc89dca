use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{
        domain::entities::TopicId,
        ports::{
            incoming::use_cases::{UpdateTopicCommand, UpdateTopicError},
            outgoing::TopicView,
        },
    },
    AppState,
};

/// Every field is optional; omitted or `null` fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTopicRequest {
    #[schema(example = "Lifetimes")]
    pub title: Option<String>,
    pub message: Option<String>,
    pub author: Option<String>,
    pub course: Option<String>,
}

/// Update a topic
///
/// Partial update: only the fields present in the body are overwritten.
#[utoipa::path(
    put,
    path = "/topics/{id}",
    tag = "topics",
    params(("id" = i64, Path, description = "Topic id")),
    request_body = UpdateTopicRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Updated topic", body = inline(SuccessResponse<TopicView>)),
        (status = 400, description = "A present field is blank", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/topics/{id}")]
pub async fn update_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let topic_id = TopicId::from(path.into_inner());
    let body = payload.into_inner();

    let command = match UpdateTopicCommand::new(
        topic_id,
        body.title,
        body.message,
        body.author,
        body.course,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
    };

    match data.topic.update.execute(command).await {
        Ok(topic) => {
            tracing::info!(topic_id = %topic.id, by = %user.login, "Topic updated");
            ApiResponse::success(topic)
        }
        Err(err) => map_update_topic_error(topic_id, err),
    }
}

fn map_update_topic_error(topic_id: TopicId, err: UpdateTopicError) -> HttpResponse {
    match err {
        UpdateTopicError::NotFound => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        UpdateTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to update topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}
