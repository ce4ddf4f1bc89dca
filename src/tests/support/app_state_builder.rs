use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::tests::support::in_memory_topic_store::InMemoryTopicStore;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    DeleteTopicUseCase, GetTopicUseCase, ListTopicsUseCase, RegisterTopicUseCase,
    UpdateTopicUseCase,
};
use crate::topic::application::services::{
    DeleteTopicService, GetTopicService, ListTopicsService, RegisterTopicService,
    UpdateTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_topic: Arc<dyn RegisterTopicUseCase + Send + Sync>,
    list_topics: Arc<dyn ListTopicsUseCase + Send + Sync>,
    get_topic: Arc<dyn GetTopicUseCase + Send + Sync>,
    update_topic: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    delete_topic: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_topic: Arc::new(StubRegisterTopicUseCase::default()),
            list_topics: Arc::new(StubListTopicsUseCase::default()),
            get_topic: Arc::new(StubGetTopicUseCase::default()),
            update_topic: Arc::new(StubUpdateTopicUseCase::default()),
            delete_topic: Arc::new(StubDeleteTopicUseCase::default()),
            login_user: Arc::new(StubLoginUserUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    /// Wires the real topic services over one in-memory store.
    pub fn with_topic_store(mut self, store: InMemoryTopicStore) -> Self {
        self.register_topic = Arc::new(RegisterTopicService::new(store.clone(), store.clone()));
        self.list_topics = Arc::new(ListTopicsService::new(store.clone()));
        self.get_topic = Arc::new(GetTopicService::new(store.clone()));
        self.update_topic = Arc::new(UpdateTopicService::new(store.clone()));
        self.delete_topic = Arc::new(DeleteTopicService::new(store));
        self
    }

    pub fn with_register_topic(
        mut self,
        uc: impl RegisterTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_topic = Arc::new(uc);
        self
    }

    pub fn with_list_topics(mut self, uc: impl ListTopicsUseCase + Send + Sync + 'static) -> Self {
        self.list_topics = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.get_topic = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_topic = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_topic = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: TopicUseCases {
                register: self.register_topic,
                list: self.list_topics,
                get_single: self.get_topic,
                update: self.update_topic,
                delete: self.delete_topic,
            },
            login_user_use_case: self.login_user,
        })
    }
}
