//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Members table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "members")]
pub struct Model {
    /// Auto-increment primary key; doubles as insertion order
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Student ID number (indexed, not unique)
    pub id_number: String,

    pub full_name: String,

    /// `full_name` lowercased with Unicode rules; search runs against it
    pub full_name_search: String,

    pub phone_number: String,
    pub email: String,
    pub department: String,
    pub date_of_birth: Date,
    pub state_of_origin: String,

    #[sea_orm(column_type = "Text")]
    pub interests: String,

    #[sea_orm(column_type = "Text")]
    pub hobbies: String,

    #[sea_orm(column_type = "Text")]
    pub best_engineering_quote: String,

    /// Registration timestamp
    pub submitted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
