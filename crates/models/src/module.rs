use std::{fmt, str::FromStr};

use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Storage limit of the `title` column.
pub const MAX_TITLE_LEN: usize = 120;
/// Weeks are small unsigned numbers.
pub const MAX_WEEK: i64 = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub week: i32,
    pub status: ModuleStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamps `created_at` on insert and refreshes `updated_at` on every save.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = Utc::now().into();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

/// Lifecycle status of a module. Stored and serialized as the snake_case literal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    #[default]
    #[sea_orm(string_value = "planned")]
    Planned,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "done")]
    Done,
}

impl ModuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleStatus::Planned => "planned",
            ModuleStatus::InProgress => "in_progress",
            ModuleStatus::Done => "done",
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleStatus {
    type Err = ModelError;

    /// Exact, case-sensitive match on the three literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ModuleStatus::Planned),
            "in_progress" => Ok(ModuleStatus::InProgress),
            "done" => Ok(ModuleStatus::Done),
            _ => Err(ModelError::Validation("status inválido".into())),
        }
    }
}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title no puede estar vacío".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ModelError::Validation(format!(
            "title no puede superar {MAX_TITLE_LEN} caracteres"
        )));
    }
    Ok(())
}

pub fn validate_week(week: i64) -> Result<i32, ModelError> {
    if !(0..=MAX_WEEK).contains(&week) {
        return Err(ModelError::Validation(format!("week debe estar entre 0 y {MAX_WEEK}")));
    }
    Ok(week as i32)
}

pub async fn create(
    db: &DatabaseConnection,
    title: &str,
    description: &str,
    week: i64,
    status: ModuleStatus,
) -> Result<Model, ModelError> {
    validate_title(title)?;
    let week = validate_week(week)?;

    let am = ActiveModel {
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        week: Set(week),
        status: Set(status),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
