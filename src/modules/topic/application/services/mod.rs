mod delete_topic_service;
mod get_topic_service;
mod list_topics_service;
mod register_topic_service;
mod update_topic_service;

pub use delete_topic_service::DeleteTopicService;
pub use get_topic_service::GetTopicService;
pub use list_topics_service::ListTopicsService;
pub use register_topic_service::RegisterTopicService;
pub use update_topic_service::UpdateTopicService;
