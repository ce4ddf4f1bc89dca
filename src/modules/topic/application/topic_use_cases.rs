use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    DeleteTopicUseCase, GetTopicUseCase, ListTopicsUseCase, RegisterTopicUseCase,
    UpdateTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub register: Arc<dyn RegisterTopicUseCase + Send + Sync>,
    pub list: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
}
