use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Admins {
    Table,
    Id,
    Login,
    Password,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Hosts {
    Table,
    Id,
    Login,
    Password,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Name,
    Color,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Sets {
    Table,
    Id,
    Name,
    CategoryId,
    IsMain,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Cards {
    Table,
    Id,
    Number,
    Description,
    Hashtags,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SetCards {
    Table,
    SetId,
    CardId,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    Status,
    Hashtags,
    StartedAt,
    InitialDeck,
    Deck,
    LockVersion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GameSets {
    Table,
    GameId,
    SetId,
}

#[derive(Iden)]
enum GameCategories {
    Table,
    GameId,
    CategoryId,
}

#[derive(Iden)]
enum GameStatusEnum {
    #[iden = "game_status"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // admins
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Admins::Login).string().not_null())
                    .col(ColumnDef::new(Admins::Password).string().not_null())
                    .col(
                        ColumnDef::new(Admins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Admins::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_admins_login")
                    .table(Admins::Table)
                    .col(Admins::Login)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // hosts
        manager
            .create_table(
                Table::create()
                    .table(Hosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hosts::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Hosts::Login).string().not_null())
                    .col(ColumnDef::new(Hosts::Password).string().not_null())
                    .col(
                        ColumnDef::new(Hosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Hosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_hosts_login")
                    .table(Hosts::Table)
                    .col(Hosts::Login)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // categories
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Color).string().not_null())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Categories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_categories_name")
                    .table(Categories::Table)
                    .col(Categories::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // sets
        manager
            .create_table(
                Table::create()
                    .table(Sets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sets::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Sets::Name).string().not_null())
                    .col(ColumnDef::new(Sets::CategoryId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Sets::IsMain)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Sets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sets_category_id")
                            .from(Sets::Table, Sets::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_sets_name")
                    .table(Sets::Table)
                    .col(Sets::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // cards
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cards::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Cards::Number).integer().not_null())
                    .col(ColumnDef::new(Cards::Description).text().not_null())
                    .col(
                        ColumnDef::new(Cards::Hashtags)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Cards::CategoryId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Cards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cards::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_category_id")
                            .from(Cards::Table, Cards::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // card numbers are a per-category sequence
        manager
            .create_index(
                Index::create()
                    .name("ux_cards_category_id_number")
                    .table(Cards::Table)
                    .col(Cards::CategoryId)
                    .col(Cards::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // set_cards (set <-> card membership)
        manager
            .create_table(
                Table::create()
                    .table(SetCards::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SetCards::SetId).big_integer().not_null())
                    .col(ColumnDef::new(SetCards::CardId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(SetCards::SetId)
                            .col(SetCards::CardId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_set_cards_set_id")
                            .from(SetCards::Table, SetCards::SetId)
                            .to(Sets::Table, Sets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_set_cards_card_id")
                            .from(SetCards::Table, SetCards::CardId)
                            .to(Cards::Table, Cards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // game_status enum (PostgreSQL only)
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                let exists = manager
                    .get_connection()
                    .query_one(Statement::from_string(
                        sea_orm::DatabaseBackend::Postgres,
                        "SELECT 1 FROM pg_type WHERE typname = 'game_status'".to_string(),
                    ))
                    .await?
                    .is_some();

                if !exists {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(GameStatusEnum::Type)
                                .values(["WAITING", "STARTED"])
                                .to_owned(),
                        )
                        .await?;
                }
            }
            sea_orm::DatabaseBackend::Sqlite => {
                // SQLite stores enum columns as TEXT
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(
                        ColumnDef::new(Games::Status)
                            .custom(GameStatusEnum::Type)
                            .not_null()
                            .default("WAITING"),
                    )
                    .col(
                        ColumnDef::new(Games::Hashtags)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Games::StartedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Games::InitialDeck).text().null())
                    .col(ColumnDef::new(Games::Deck).text().null())
                    .col(
                        ColumnDef::new(Games::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_games_name")
                    .table(Games::Table)
                    .col(Games::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // game_sets (game <-> selected sets)
        manager
            .create_table(
                Table::create()
                    .table(GameSets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameSets::GameId).big_integer().not_null())
                    .col(ColumnDef::new(GameSets::SetId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(GameSets::GameId)
                            .col(GameSets::SetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_sets_game_id")
                            .from(GameSets::Table, GameSets::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_sets_set_id")
                            .from(GameSets::Table, GameSets::SetId)
                            .to(Sets::Table, Sets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // game_categories (game <-> selected categories, tag discovery only)
        manager
            .create_table(
                Table::create()
                    .table(GameCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameCategories::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameCategories::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GameCategories::GameId)
                            .col(GameCategories::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_categories_game_id")
                            .from(GameCategories::Table, GameCategories::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_categories_category_id")
                            .from(GameCategories::Table, GameCategories::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameSets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SetCards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;

        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_type(PgType::drop().name(GameStatusEnum::Type).to_owned())
                .await?;
        }

        Ok(())
    }
}
