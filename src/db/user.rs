use crate::db::service::DbService;
use crate::types::{error::AppError, user::NewUser};
use crate::utils::token::{hash_password, new_id, new_token};
use chrono::Utc;
use entity::token::{ActiveModel as TokenActive, Column as TokenColumn, Entity as Token};
use entity::user::{ActiveModel as UserActive, Column as UserColumn, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait};
use uuid::Uuid;

impl DbService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(UserColumn::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(UserColumn::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Resolve a bearer token key to its owning user in one joined query.
    /// Unknown keys come back as `None`; the caller decides the 401.
    pub async fn find_user_by_token(&self, key: &str) -> Result<Option<UserModel>, AppError> {
        Ok(Token::find_by_id(key.to_owned())
            .find_also_related(User)
            .one(&self.db)
            .await?
            .and_then(|(_, user)| user))
    }

    /// Create a user and its single token in one transaction. The token is
    /// an explicit step of user creation, not a side effect.
    pub async fn create_user(&self, payload: NewUser) -> Result<(Uuid, String), AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::AlreadyExists);
        }
        let password_hash = hash_password(&payload.password)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

        let uid = new_id();
        let key = new_token();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            username: Set(payload.username),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        Token::insert(TokenActive {
            key: Set(key.clone()),
            user_id: Set(uid),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok((uid, key))
    }

    /// One token per user, reused across logins. The insert arm only runs if
    /// creation somehow skipped the token row.
    pub async fn get_or_create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        if let Some(token) = Token::find()
            .filter(TokenColumn::UserId.eq(user_id))
            .one(&self.db)
            .await?
        {
            return Ok(token.key);
        }

        let key = new_token();
        Token::insert(TokenActive {
            key: Set(key.clone()),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        })
        .exec(&self.db)
        .await?;
        Ok(key)
    }
}
