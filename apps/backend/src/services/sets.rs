//! Card-set catalog services.

use sea_orm::DatabaseTransaction;

use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::cards::{self, Card};
use crate::repos::categories;
use crate::repos::sets::{self, Set};

/// Detail view of a set.
#[derive(Debug, Clone, PartialEq)]
pub struct SetInfo {
    pub name: String,
    pub cards: Vec<Card>,
}

/// Create a set under a category with an initial card list.
pub async fn create_set(
    txn: &DatabaseTransaction,
    name: String,
    category_id: i64,
    card_ids: &[i64],
) -> Result<Set, DomainError> {
    categories::require_category(txn, category_id).await?;

    if sets::find_by_name(txn, &name).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateName,
            "Set name must be unique",
        ));
    }

    // Every referenced card must exist before any membership is written
    for card_id in card_ids {
        cards::require_card(txn, *card_id).await?;
    }

    let set = sets::create_set(txn, name, category_id, false).await?;
    sets::replace_set_cards(txn, set.id, card_ids).await?;

    Ok(set)
}

/// Replace a set's name and card list.
pub async fn edit_set(
    txn: &DatabaseTransaction,
    set_id: i64,
    name: String,
    card_ids: &[i64],
) -> Result<Set, DomainError> {
    sets::require_set(txn, set_id).await?;

    if let Some(existing) = sets::find_by_name(txn, &name).await? {
        if existing.id != set_id {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateName,
                "Set name must be unique",
            ));
        }
    }

    for card_id in card_ids {
        cards::require_card(txn, *card_id).await?;
    }

    let set = sets::rename_set(txn, set_id, name).await?;
    sets::replace_set_cards(txn, set_id, card_ids).await?;

    Ok(set)
}

pub async fn set_info(txn: &DatabaseTransaction, set_id: i64) -> Result<SetInfo, DomainError> {
    let set = sets::require_set(txn, set_id).await?;
    let card_ids = sets::card_ids_for_set(txn, set_id).await?;
    let cards = cards::find_by_ids(txn, &card_ids).await?;

    Ok(SetInfo {
        name: set.name,
        cards,
    })
}

/// Delete a set together with its member cards. The main set is protected.
pub async fn delete_set(txn: &DatabaseTransaction, set_id: i64) -> Result<(), DomainError> {
    let set = sets::require_set(txn, set_id).await?;

    if set.is_main {
        return Err(DomainError::validation_kind(
            ValidationKind::MainSetProtected,
            "You cannot delete the main set",
        ));
    }

    // The member cards are deleted with the set; their membership rows in
    // other sets (including the main set) go via FK cascade.
    let card_ids = sets::card_ids_for_set(txn, set_id).await?;
    cards::delete_cards(txn, &card_ids).await?;
    sets::delete_set(txn, set_id).await?;

    Ok(())
}
