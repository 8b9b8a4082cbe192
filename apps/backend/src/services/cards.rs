//! Card catalog services.

use sea_orm::DatabaseTransaction;

use crate::errors::domain::DomainError;
use crate::repos::cards::{self, Card};
use crate::repos::categories;
use crate::repos::sets;
use crate::services::categories::main_set_name;

/// Add a card to a category.
///
/// The card gets the next sequence number in its category and joins the
/// category's main set, which is created on the spot if it is somehow
/// missing.
pub async fn add_card(
    txn: &DatabaseTransaction,
    category_id: i64,
    description: String,
    tags: &[String],
) -> Result<Card, DomainError> {
    let category = categories::require_category(txn, category_id).await?;

    let main_set = match sets::main_set_for_category(txn, category_id).await? {
        Some(set) => set,
        None => sets::create_set(txn, main_set_name(&category.name), category_id, true).await?,
    };

    let number = cards::next_number(txn, category_id).await?;
    let card = cards::create_card(txn, number, description, tags, category_id).await?;

    sets::add_card_to_set(txn, main_set.id, card.id).await?;

    Ok(card)
}

pub async fn edit_card(
    txn: &DatabaseTransaction,
    card_id: i64,
    description: String,
    tags: &[String],
) -> Result<Card, DomainError> {
    cards::require_card(txn, card_id).await?;
    cards::update_card(txn, card_id, description, tags).await
}

pub async fn card_info(txn: &DatabaseTransaction, card_id: i64) -> Result<Card, DomainError> {
    cards::require_card(txn, card_id).await
}

pub async fn delete_card(txn: &DatabaseTransaction, card_id: i64) -> Result<(), DomainError> {
    cards::require_card(txn, card_id).await?;
    cards::delete_card(txn, card_id).await?;
    Ok(())
}
