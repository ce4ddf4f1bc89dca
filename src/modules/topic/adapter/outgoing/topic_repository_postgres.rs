use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::topic::application::ports::outgoing::{
    TopicRepository, TopicRepositoryError,
};
use crate::topic::application::domain::entities::{NewTopic, Topic, TopicId};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: &TopicModel) -> Result<Topic, TopicRepositoryError> {
    model
        .to_domain()
        .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn insert(&self, topic: NewTopic) -> Result<Topic, TopicRepositoryError> {
        let active = TopicActiveModel {
            title: Set(topic.title),
            message: Set(topic.message),
            created_at: Set(topic.created_at.fixed_offset()),
            status: Set(topic.status.as_str().to_string()),
            author: Set(topic.author),
            course: Set(topic.course),
            ..Default::default()
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        to_domain(&inserted)
    }

    async fn find_by_id(&self, topic_id: TopicId) -> Result<Option<Topic>, TopicRepositoryError> {
        let model = TopicEntity::find_by_id(topic_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        model.as_ref().map(to_domain).transpose()
    }

    async fn update(&self, topic: &Topic) -> Result<Topic, TopicRepositoryError> {
        // created_at and status are left unset so the UPDATE never touches them
        let active = TopicActiveModel {
            id: Set(topic.id.value()),
            title: Set(topic.title.clone()),
            message: Set(topic.message.clone()),
            author: Set(topic.author.clone()),
            course: Set(topic.course.clone()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TopicRepositoryError::TopicNotFound,
            other => TopicRepositoryError::DatabaseError(other.to_string()),
        })?;

        to_domain(&updated)
    }

    async fn delete(&self, topic_id: TopicId) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::delete_by_id(topic_id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}
