use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "game_status")]
pub enum GameStatus {
    #[sea_orm(string_value = "WAITING")]
    Waiting,
    #[sea_orm(string_value = "STARTED")]
    Started,
}

impl GameStatus {
    /// Lowercase label used on the wire ("waiting" / "started").
    pub fn as_wire(&self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::Started => "started",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub status: GameStatus,
    /// Comma-joined tag filter; decoded at the repo boundary
    pub hashtags: String,
    #[sea_orm(column_name = "started_at")]
    pub started_at: Option<OffsetDateTime>,
    /// Immutable deck snapshot taken at start, as "card_id.category_id" tokens
    #[sea_orm(column_name = "initial_deck")]
    pub initial_deck: Option<String>,
    /// Remaining deck, consumed by draws
    pub deck: Option<String>,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_sets::Entity")]
    GameSets,
    #[sea_orm(has_many = "super::game_categories::Entity")]
    GameCategories,
}

impl Related<super::game_sets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameSets.def()
    }
}

impl Related<super::game_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameCategories.def()
    }
}

impl Related<super::sets::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_sets::Relation::Set.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_sets::Relation::Game.def().rev())
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_categories::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_categories::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
