use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::ports::outgoing::user_query::{
    UserCredentials, UserQuery, UserQueryError,
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_credentials(model: UserModel) -> UserCredentials {
        UserCredentials {
            id: model.id,
            login: model.login,
            password_hash: model.password_hash,
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_login(
        &self,
        login: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Login.eq(login))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_credentials))
    }
}
