use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::{RegisterTopicCommand, RegisterTopicCommandError, RegisterTopicError},
        outgoing::TopicView,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterTopicRequest {
    #[schema(example = "Ownership and borrowing")]
    pub title: String,
    #[schema(example = "When should I clone instead of borrowing?")]
    pub message: String,
    #[schema(example = "ana")]
    pub author: String,
    #[schema(example = "Rust fundamentals")]
    pub course: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Register a topic
///
/// Fails with 400 when a topic with the same title and message already exists.
#[utoipa::path(
    post,
    path = "/topics",
    tag = "topics",
    request_body = RegisterTopicRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Topic registered", body = inline(SuccessResponse<TopicView>),
            headers(("Location" = String, description = "URI of the new topic"))),
        (status = 400, description = "Blank field or duplicate topic", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/topics")]
pub async fn register_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<RegisterTopicRequest>,
) -> impl Responder {
    let RegisterTopicRequest {
        title,
        message,
        author,
        course,
    } = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match RegisterTopicCommand::new(title, message, author, course) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.topic.register.execute(command).await {
        Ok(topic) => {
            tracing::info!(topic_id = %topic.id, by = %user.login, "Topic registered");
            let location = format!("/topics/{}", topic.id);
            ApiResponse::created_at(&location, topic)
        }
        Err(err) => map_register_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: RegisterTopicCommandError) -> HttpResponse {
    let code = match err {
        RegisterTopicCommandError::EmptyTitle => "EMPTY_TITLE",
        RegisterTopicCommandError::EmptyMessage => "EMPTY_MESSAGE",
        RegisterTopicCommandError::EmptyAuthor => "EMPTY_AUTHOR",
        RegisterTopicCommandError::EmptyCourse => "EMPTY_COURSE",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_register_topic_error(err: RegisterTopicError) -> HttpResponse {
    match err {
        RegisterTopicError::DuplicateTopic => ApiResponse::bad_request(
            "DUPLICATE_TOPIC",
            "A topic with the same title and message already exists",
        ),
        RegisterTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to register topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
