//! Card repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::cards_sea as cards_adapter;
use crate::domain::deck::{decode_tags, encode_tags};
use crate::entities::cards;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Card domain model; tags arrive decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i64,
    /// Per-category sequence number
    pub number: i32,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: i64,
}

impl Card {
    /// Display number, `"{category_id}.{number}"`.
    pub fn formatted_number(&self) -> String {
        format!("{}.{}", self.category_id, self.number)
    }
}

impl From<cards::Model> for Card {
    fn from(model: cards::Model) -> Self {
        Self {
            id: model.id,
            number: model.number,
            description: model.description,
            tags: decode_tags(&model.hashtags),
            category_id: model.category_id,
        }
    }
}

fn card_not_found(card_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Card, format!("Card with id {card_id} not found"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Option<Card>, DomainError> {
    let model = cards_adapter::find_by_id(conn, card_id).await?;
    Ok(model.map(Card::from))
}

pub async fn require_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Card, DomainError> {
    find_by_id(conn, card_id)
        .await?
        .ok_or_else(|| card_not_found(card_id))
}

pub async fn cards_in_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<Vec<Card>, DomainError> {
    let models = cards_adapter::cards_in_category(conn, category_id).await?;
    Ok(models.into_iter().map(Card::from).collect())
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_ids: &[i64],
) -> Result<Vec<Card>, DomainError> {
    let models = cards_adapter::find_by_ids(conn, card_ids).await?;
    Ok(models.into_iter().map(Card::from).collect())
}

/// The next free sequence number in a category (`count + 1`).
pub async fn next_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: i64,
) -> Result<i32, DomainError> {
    let count = cards_adapter::count_in_category(conn, category_id).await?;
    Ok(count as i32 + 1)
}

pub async fn create_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    number: i32,
    description: String,
    tags: &[String],
    category_id: i64,
) -> Result<Card, DomainError> {
    let model =
        cards_adapter::create_card(conn, number, description, encode_tags(tags), category_id)
            .await?;
    Ok(Card::from(model))
}

pub async fn update_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
    description: String,
    tags: &[String],
) -> Result<Card, DomainError> {
    let model =
        cards_adapter::update_card(conn, card_id, description, encode_tags(tags)).await?;
    Ok(Card::from(model))
}

pub async fn delete_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<bool, DomainError> {
    let rows = cards_adapter::delete_card(conn, card_id).await?;
    Ok(rows > 0)
}

pub async fn delete_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_ids: &[i64],
) -> Result<u64, DomainError> {
    Ok(cards_adapter::delete_cards(conn, card_ids).await?)
}
