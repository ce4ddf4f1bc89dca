mod delete_topic_use_case;
mod get_topic_use_case;
mod list_topics_use_case;
mod register_topic_use_case;
mod update_topic_use_case;

pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use list_topics_use_case::{ListTopicsError, ListTopicsUseCase};
pub use register_topic_use_case::{
    RegisterTopicCommand, RegisterTopicCommandError, RegisterTopicError, RegisterTopicUseCase,
};
pub use update_topic_use_case::{
    UpdateTopicCommand, UpdateTopicCommandError, UpdateTopicError, UpdateTopicUseCase,
};
