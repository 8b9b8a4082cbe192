//! Category catalog services.

use sea_orm::DatabaseTransaction;

use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::cards::{self, Card};
use crate::repos::categories::{self, Category};
use crate::repos::sets::{self, Set};

/// Detail view of a category: its cards and its non-main sets.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryData {
    pub name: String,
    pub color: String,
    pub cards: Vec<Card>,
    pub sets: Vec<Set>,
}

/// Display name for a category's main set.
pub fn main_set_name(category_name: &str) -> String {
    format!("Main Set ({category_name})")
}

/// Create a category and its main set.
pub async fn create_category(
    txn: &DatabaseTransaction,
    name: String,
    color: String,
) -> Result<Category, DomainError> {
    if categories::find_by_name(txn, &name).await?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateName,
            "Category name must be unique",
        ));
    }

    let category = categories::create_category(txn, name, color).await?;

    // Every category owns a main set from birth
    sets::create_set(txn, main_set_name(&category.name), category.id, true).await?;

    Ok(category)
}

pub async fn edit_category(
    txn: &DatabaseTransaction,
    category_id: i64,
    name: String,
    color: String,
) -> Result<Category, DomainError> {
    categories::require_category(txn, category_id).await?;

    if let Some(existing) = categories::find_by_name(txn, &name).await? {
        if existing.id != category_id {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateName,
                "Category name must be unique",
            ));
        }
    }

    categories::update_category(txn, category_id, name, color).await
}

pub async fn list_categories(txn: &DatabaseTransaction) -> Result<Vec<Category>, DomainError> {
    categories::list_all(txn).await
}

/// Detail view: name, color, all cards, and the user-visible (non-main) sets.
pub async fn category_data(
    txn: &DatabaseTransaction,
    category_id: i64,
) -> Result<CategoryData, DomainError> {
    let category = categories::require_category(txn, category_id).await?;
    let cards = cards::cards_in_category(txn, category_id).await?;
    let sets = sets::sets_in_category(txn, category_id)
        .await?
        .into_iter()
        .filter(|s| !s.is_main)
        .collect();

    Ok(CategoryData {
        name: category.name,
        color: category.color,
        cards,
        sets,
    })
}

/// Delete a category with everything it owns: sets, membership rows and
/// cards all go via FK cascade.
pub async fn delete_category(
    txn: &DatabaseTransaction,
    category_id: i64,
) -> Result<(), DomainError> {
    categories::require_category(txn, category_id).await?;
    categories::delete_category(txn, category_id).await?;
    Ok(())
}
