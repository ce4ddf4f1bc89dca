use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::topic::application::domain::entities::{Topic, TopicId, TopicStatus, UnknownTopicStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub created_at: DateTimeWithTimeZone,

    pub status: String,

    #[sea_orm(column_type = "Text")]
    pub author: String,

    #[sea_orm(column_type = "Text")]
    pub course: String,
}

impl Model {
    pub fn to_domain(&self) -> Result<Topic, UnknownTopicStatus> {
        Ok(Topic {
            id: TopicId::from(self.id),
            title: self.title.clone(),
            message: self.message.clone(),
            author: self.author.clone(),
            course: self.course.clone(),
            created_at: self.created_at.with_timezone(&Utc),
            status: self.status.parse::<TopicStatus>()?,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
