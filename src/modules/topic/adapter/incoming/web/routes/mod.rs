mod delete_topic;
mod get_topic;
mod list_topics;
mod register_topic;
mod update_topic;

// `__path_*` items are the utoipa path specs consumed by `api::openapi::ApiDoc`
pub use delete_topic::{__path_delete_topic_handler, delete_topic_handler};
pub use get_topic::{__path_get_topic_handler, get_topic_handler};
pub use list_topics::{__path_list_topics_handler, list_topics_handler, ListTopicsQuery};
pub use register_topic::{__path_register_topic_handler, register_topic_handler, RegisterTopicRequest};
pub use update_topic::{__path_update_topic_handler, update_topic_handler, UpdateTopicRequest};
