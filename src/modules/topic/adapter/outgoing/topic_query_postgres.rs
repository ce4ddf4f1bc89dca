use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::sync::Arc;

use crate::modules::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicQuery, TopicQueryError, TopicView,
};
use crate::topic::application::domain::entities::TopicId;

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

/// One page of topics in insertion order.
fn page_select(page: PageRequest) -> Select<TopicEntity> {
    TopicEntity::find()
        .order_by_asc(TopicColumn::Id)
        .offset(page.offset())
        .limit(page.size)
}

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_view(model: &TopicModel) -> Result<TopicView, TopicQueryError> {
    model
        .to_domain()
        .map(TopicView::from)
        .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn exists_by_title_and_message(
        &self,
        title: &str,
        message: &str,
    ) -> Result<bool, TopicQueryError> {
        let count = TopicEntity::find()
            .filter(TopicColumn::Title.eq(title))
            .filter(TopicColumn::Message.eq(message))
            .count(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn get_by_id(&self, topic_id: TopicId) -> Result<TopicView, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?
            .ok_or(TopicQueryError::NotFound)?;

        to_view(&model)
    }

    async fn list(&self, page: PageRequest) -> Result<PageResult<TopicView>, TopicQueryError> {
        let total = TopicEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        let models: Vec<TopicModel> = page_select(page)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        let items = models
            .iter()
            .map(to_view)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }
}
