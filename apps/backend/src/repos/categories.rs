//! Category repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::categories_sea as categories_adapter;
use crate::entities::categories;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Category domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            color: model.color,
        }
    }
}

fn category_not_found(category_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Category,
        format!("Category with id {category_id} not found"),
    )
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Option<Category>, DomainError> {
    let model = categories_adapter::find_by_id(conn, category_id).await?;
    Ok(model.map(Category::from))
}

pub async fn require_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Category, DomainError> {
    find_by_id(conn, category_id)
        .await?
        .ok_or_else(|| category_not_found(category_id))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Category>, DomainError> {
    let model = categories_adapter::find_by_name(conn, name).await?;
    Ok(model.map(Category::from))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    let models = categories_adapter::list_all(conn).await?;
    Ok(models.into_iter().map(Category::from).collect())
}

pub async fn create_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    color: String,
) -> Result<Category, DomainError> {
    let model = categories_adapter::create_category(conn, name, color).await?;
    Ok(Category::from(model))
}

pub async fn update_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
    name: String,
    color: String,
) -> Result<Category, DomainError> {
    let model = categories_adapter::update_category(conn, category_id, name, color).await?;
    Ok(Category::from(model))
}

pub async fn delete_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<bool, DomainError> {
    let rows = categories_adapter::delete_category(conn, category_id).await?;
    Ok(rows > 0)
}
