//! Schema bootstrap, run once before the HTTP listener is bound.
//!
//! Migrations are tracked by sea-orm, so running this on every start is safe.
//! Not meant to be called concurrently.

use migration::MigratorTrait;
use models::module::{self, ModuleStatus};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::errors::ServiceError;

/// (title, description, week, status) of the first-run demo rows.
pub const SEED_MODULES: [(&str, &str, i64, ModuleStatus); 3] = [
    (
        "Introducción a Cloud",
        "Conceptos básicos de virtualización y contenedores.",
        1,
        ModuleStatus::Planned,
    ),
    (
        "Docker y Compose",
        "Imágenes, contenedores, redes y volúmenes.",
        2,
        ModuleStatus::InProgress,
    ),
    (
        "Orquestación",
        "Introducción a Docker Compose y nociones de Kubernetes.",
        3,
        ModuleStatus::Planned,
    ),
];

/// Create missing tables, then seed `modules` when it is empty.
/// Returns the number of seeded rows.
pub async fn init_schema(db: &DatabaseConnection) -> Result<usize, ServiceError> {
    migration::Migrator::up(db, None).await?;
    let seeded = seed_if_empty(db).await?;
    info!(seeded, "database ready and schema verified");
    Ok(seeded)
}

/// Seed data only on an empty table. Statements are independent; a failure
/// half-way leaves the earlier rows in place.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<usize, ServiceError> {
    let existing = module::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(0);
    }
    for (title, description, week, status) in SEED_MODULES {
        module::create(db, title, description, week, status).await?;
    }
    info!(count = SEED_MODULES.len(), "seeded initial modules");
    Ok(SEED_MODULES.len())
}
