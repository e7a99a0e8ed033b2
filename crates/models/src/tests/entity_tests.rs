use crate::db::connect_in_memory;
use crate::errors::ModelError;
use crate::module::{self, ModuleStatus};
use crate::visit;
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Set, Statement,
};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn create_sets_both_timestamps() -> Result<()> {
    let db = setup_test_db().await?;

    let m = module::create(&db, "Redes", "", 4, ModuleStatus::Planned).await?;
    assert!(m.id > 0);
    assert_eq!(m.description, "");
    assert_eq!(m.status, ModuleStatus::Planned);
    assert_eq!(m.created_at, m.updated_at);
    Ok(())
}

#[tokio::test]
async fn save_refreshes_updated_at_only() -> Result<()> {
    let db = setup_test_db().await?;
    let m = module::create(&db, "Redes", "TCP/IP", 4, ModuleStatus::Planned).await?;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let mut am: module::ActiveModel = m.clone().into();
    am.status = Set(ModuleStatus::Done);
    let updated = am.update(&db).await?;

    assert_eq!(updated.created_at, m.created_at);
    assert!(updated.updated_at > m.updated_at);
    assert_eq!(updated.title, "Redes");
    Ok(())
}

#[tokio::test]
async fn create_rejects_invalid_fields_before_insert() -> Result<()> {
    let db = setup_test_db().await?;

    let err = module::create(&db, "  ", "", 1, ModuleStatus::Planned).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    let err = module::create(&db, "ok", "", 300, ModuleStatus::Planned).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    assert!(module::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn storage_rejects_unknown_status_literal() -> Result<()> {
    let db = setup_test_db().await?;
    let backend = db.get_database_backend();
    let stmt = Statement::from_string(
        backend,
        "INSERT INTO modules (title, description, week, status, created_at, updated_at) \
         VALUES ('x', '', 1, 'archived', CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)",
    );
    assert!(db.execute(stmt).await.is_err());

    let stmt = Statement::from_string(
        backend,
        "INSERT INTO modules (title, description, week, status, created_at, updated_at) \
         VALUES ('x', '', -1, 'done', CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)",
    );
    assert!(db.execute(stmt).await.is_err());
    Ok(())
}

#[tokio::test]
async fn visits_only_grow() -> Result<()> {
    let db = setup_test_db().await?;
    assert_eq!(visit::count(&db).await?, 0);

    let first = visit::create(&db).await?;
    let second = visit::create(&db).await?;
    assert!(second.id > first.id);
    assert_eq!(visit::count(&db).await?, 2);
    Ok(())
}
