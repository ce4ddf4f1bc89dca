use crate::api::schemas::{ErrorCode, ErrorDetail, ErrorResponse};
use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::auth::application::use_cases::login_user::LoginUserResponse;
use crate::topic::adapter::incoming::web::routes::{RegisterTopicRequest, UpdateTopicRequest};
use crate::topic::application::domain::entities::TopicStatus;
use crate::topic::application::ports::outgoing::TopicView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum Hub API",
        version = "1.0.0",
        description = "Forum topics with bearer-token authentication"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::register_topic_handler,
        crate::topic::adapter::incoming::web::routes::list_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            ErrorCode,
            LoginRequestDto,
            LoginUserResponse,
            RegisterTopicRequest,
            UpdateTopicRequest,
            TopicView,
            TopicStatus
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "topics", description = "Topic management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /login"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
