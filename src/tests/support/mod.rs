pub mod app_state_builder;
pub mod in_memory_topic_store;
pub mod stubs;

use actix_web::{dev::ServiceResponse, test, web};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

/// Token provider in the shape the auth extractor looks up from app data.
pub fn token_provider_data(
    provider: impl TokenProvider + 'static,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

pub async fn read_json(resp: ServiceResponse) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}
