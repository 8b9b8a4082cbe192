//! Set repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::sets_sea as sets_adapter;
use crate::entities::sets;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Set domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub is_main: bool,
}

impl From<sets::Model> for Set {
    fn from(model: sets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category_id: model.category_id,
            is_main: model.is_main,
        }
    }
}

fn set_not_found(set_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Set, format!("Set with id {set_id} not found"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
) -> Result<Option<Set>, DomainError> {
    let model = sets_adapter::find_by_id(conn, set_id).await?;
    Ok(model.map(Set::from))
}

pub async fn require_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
) -> Result<Set, DomainError> {
    find_by_id(conn, set_id)
        .await?
        .ok_or_else(|| set_not_found(set_id))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Set>, DomainError> {
    let model = sets_adapter::find_by_name(conn, name).await?;
    Ok(model.map(Set::from))
}

pub async fn sets_in_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Vec<Set>, DomainError> {
    let models = sets_adapter::sets_in_category(conn, category_id).await?;
    Ok(models.into_iter().map(Set::from).collect())
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Set>, DomainError> {
    let models = sets_adapter::list_all(conn).await?;
    Ok(models.into_iter().map(Set::from).collect())
}

pub async fn main_set_for_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Option<Set>, DomainError> {
    let model = sets_adapter::main_set_for_category(conn, category_id).await?;
    Ok(model.map(Set::from))
}

pub async fn create_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    category_id: i64,
    is_main: bool,
) -> Result<Set, DomainError> {
    let model = sets_adapter::create_set(conn, name, category_id, is_main).await?;
    Ok(Set::from(model))
}

pub async fn rename_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
    name: String,
) -> Result<Set, DomainError> {
    let model = sets_adapter::rename_set(conn, set_id, name).await?;
    Ok(Set::from(model))
}

pub async fn delete_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
) -> Result<bool, DomainError> {
    let rows = sets_adapter::delete_set(conn, set_id).await?;
    Ok(rows > 0)
}

pub async fn card_ids_for_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(sets_adapter::card_ids_for_set(conn, set_id).await?)
}

pub async fn card_ids_for_sets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_ids: &[i64],
) -> Result<Vec<i64>, DomainError> {
    Ok(sets_adapter::card_ids_for_sets(conn, set_ids).await?)
}

pub async fn add_card_to_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
    card_id: i64,
) -> Result<(), DomainError> {
    Ok(sets_adapter::add_card_to_set(conn, set_id, card_id).await?)
}

pub async fn replace_set_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
    card_ids: &[i64],
) -> Result<(), DomainError> {
    Ok(sets_adapter::replace_set_cards(conn, set_id, card_ids).await?)
}
