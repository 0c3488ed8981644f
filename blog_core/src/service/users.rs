use sea_orm::DatabaseConnection;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::{dto::NewUser, entity::prelude::*};

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error("username already taken")]
    UsernameTaken,

    #[error("invalid user")]
    Invalid(#[from] ValidationErrors),
}

#[derive(Clone)]
pub struct UsersService {
    db: DatabaseConnection,
}

impl UsersService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_user(&self, new_user: NewUser) -> Result<UserModel, UsersServiceError> {
        new_user.validate()?;

        if self.find_by_username(&new_user.username).await?.is_some() {
            return Err(UsersServiceError::UsernameTaken);
        }

        let user = new_user.into_active_model().insert(&self.db).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "created user");

        Ok(user)
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, UsersServiceError> {
        let user = User::find()
            .filter(UserColumn::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, UsersServiceError> {
        let users = User::find()
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await?;

        Ok(users)
    }
}
