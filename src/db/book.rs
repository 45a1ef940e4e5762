use crate::db::service::DbService;
use crate::types::{book::NewBook, error::AppError};
use entity::book::{ActiveModel as BookActive, Column as BookColumn, Entity as Book, Model as BookModel};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

impl DbService {
    /// Every row, id-ordered. No pagination on this surface.
    pub async fn list_books(&self) -> Result<Vec<BookModel>, AppError> {
        Ok(Book::find()
            .order_by_asc(BookColumn::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_book_by_id(&self, id: i32) -> Result<BookModel, AppError> {
        Book::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn insert_book(&self, payload: NewBook) -> Result<BookModel, AppError> {
        let book = BookActive {
            title: Set(payload.title),
            author: Set(payload.author),
            published_date: Set(payload.published_date),
            ..Default::default()
        };
        Ok(book.insert(&self.db).await?)
    }

    pub async fn update_book(&self, id: i32, payload: NewBook) -> Result<BookModel, AppError> {
        let mut book: BookActive = self.find_book_by_id(id).await?.into();
        book.title = Set(payload.title);
        book.author = Set(payload.author);
        book.published_date = Set(payload.published_date);
        Ok(book.update(&self.db).await?)
    }

    pub async fn delete_book(&self, id: i32) -> Result<(), AppError> {
        let book = self.find_book_by_id(id).await?;
        book.delete(&self.db).await?;
        Ok(())
    }
}
