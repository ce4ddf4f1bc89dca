use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::topic::application::domain::entities::{NewTopic, Topic, TopicId};
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
    TopicView,
};

#[derive(Default)]
struct StoreState {
    next_id: i64,
    topics: Vec<Topic>,
}

/// Both sides of the topic store over one shared `Vec`. Clones share state,
/// so the same store can be handed to a query and a repository slot.
#[derive(Clone, Default)]
pub struct InMemoryTopicStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryTopicStore {
    /// Seeds `count` topics titled "Topic 1" through "Topic {count}".
    pub fn with_topics(count: usize) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for i in 1..=count {
                state.insert(NewTopic::new(
                    format!("Topic {}", i),
                    format!("Message {}", i),
                    "ana".to_string(),
                    "Rust".to_string(),
                ));
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().topics.len()
    }
}

impl StoreState {
    fn insert(&mut self, topic: NewTopic) -> Topic {
        self.next_id += 1;
        let stored = Topic {
            id: TopicId::from(self.next_id),
            title: topic.title,
            message: topic.message,
            author: topic.author,
            course: topic.course,
            created_at: topic.created_at,
            status: topic.status,
        };
        self.topics.push(stored.clone());
        stored
    }

    fn find(&self, topic_id: TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }
}

#[async_trait]
impl TopicQuery for InMemoryTopicStore {
    async fn exists_by_title_and_message(
        &self,
        title: &str,
        message: &str,
    ) -> Result<bool, TopicQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .topics
            .iter()
            .any(|t| t.title == title && t.message == message))
    }

    async fn get_by_id(&self, topic_id: TopicId) -> Result<TopicView, TopicQueryError> {
        let state = self.state.lock().unwrap();
        state
            .find(topic_id)
            .map(TopicView::from)
            .ok_or(TopicQueryError::NotFound)
    }

    async fn list(&self, page: PageRequest) -> Result<PageResult<TopicView>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        let items = state
            .topics
            .iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .map(TopicView::from)
            .collect();

        Ok(PageResult::new(items, page, state.topics.len() as u64))
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicStore {
    async fn insert(&self, topic: NewTopic) -> Result<Topic, TopicRepositoryError> {
        Ok(self.state.lock().unwrap().insert(topic))
    }

    async fn find_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicRepositoryError> {
        Ok(self.state.lock().unwrap().find(topic_id).cloned())
    }

    async fn update(&self, topic: &Topic) -> Result<Topic, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let slot = state
            .topics
            .iter_mut()
            .find(|t| t.id == topic.id)
            .ok_or(TopicRepositoryError::TopicNotFound)?;

        slot.title = topic.title.clone();
        slot.message = topic.message.clone();
        slot.author = topic.author.clone();
        slot.course = topic.course.clone();

        Ok(slot.clone())
    }

    async fn delete(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.topics.len();
        state.topics.retain(|t| t.id != topic_id);

        if state.topics.len() == before {
            return Err(TopicRepositoryError::TopicNotFound);
        }
        Ok(())
    }
}
