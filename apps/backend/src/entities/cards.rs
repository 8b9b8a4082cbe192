use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Per-category sequence number, assigned at insert
    pub number: i32,
    pub description: String,
    /// Comma-joined tag list; decoded at the repo boundary
    pub hashtags: String,
    #[sea_orm(column_name = "category_id")]
    pub category_id: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::set_cards::Entity")]
    SetCards,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::set_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SetCards.def()
    }
}

impl Related<super::sets::Entity> for Entity {
    fn to() -> RelationDef {
        super::set_cards::Relation::Set.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::set_cards::Relation::Card.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
