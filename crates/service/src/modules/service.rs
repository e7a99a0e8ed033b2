use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use tracing::{info, instrument};
use models::module::{self, Entity as ModuleEntity};
use crate::errors::ServiceError;
use crate::modules::domain::{ModulePatch, NewModule, MSG_NOTHING_TO_UPDATE};

/// List every module ordered by week, then id.
pub async fn list_modules(db: &DatabaseConnection) -> Result<Vec<module::Model>, ServiceError> {
    let rows = ModuleEntity::find()
        .order_by_asc(module::Column::Week)
        .order_by_asc(module::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get a module by id.
pub async fn get_module(db: &DatabaseConnection, id: i32) -> Result<Option<module::Model>, ServiceError> {
    let found = ModuleEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Insert a validated module; the store assigns id and timestamps.
#[instrument(skip(db, input), fields(week = input.week))]
pub async fn create_module(db: &DatabaseConnection, input: NewModule) -> Result<module::Model, ServiceError> {
    let created = module::create(db, &input.title, &input.description, input.week, input.status).await?;
    info!(id = created.id, "module_created");
    Ok(created)
}

/// Update only the columns present in `patch`. Last write wins.
#[instrument(skip(db, patch))]
pub async fn update_module(db: &DatabaseConnection, id: i32, patch: ModulePatch) -> Result<module::Model, ServiceError> {
    if patch.is_empty() {
        return Err(ServiceError::Validation(MSG_NOTHING_TO_UPDATE.into()));
    }
    let current = ModuleEntity::find_by_id(id).one(db).await?;
    let Some(existing) = current else { return Err(ServiceError::not_found("module")); };

    let mut am: module::ActiveModel = existing.into();
    if let Some(t) = patch.title { module::validate_title(&t)?; am.title = Set(t); }
    if let Some(d) = patch.description { am.description = Set(d); }
    if let Some(w) = patch.week { am.week = Set(module::validate_week(w)?); }
    if let Some(s) = patch.status { am.status = Set(s); }

    match am.update(db).await {
        Ok(updated) => {
            info!(id = updated.id, "module_updated");
            Ok(updated)
        }
        // row vanished between the read and the write
        Err(DbErr::RecordNotUpdated) => Err(ServiceError::not_found("module")),
        Err(e) => Err(e.into()),
    }
}

/// Delete a module; returns true if a row was removed.
pub async fn delete_module(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = ModuleEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected > 0 {
        info!(id, "module_deleted");
    }
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::module::ModuleStatus;

    fn new_module(title: &str, week: i64) -> NewModule {
        NewModule { title: title.into(), description: String::new(), week, status: ModuleStatus::Planned }
    }

    #[tokio::test]
    async fn module_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_module(&db, NewModule {
            title: "Docker".into(),
            description: "Imágenes".into(),
            week: 2,
            status: ModuleStatus::InProgress,
        }).await?;
        let found = get_module(&db, a.id).await?.unwrap();
        assert_eq!(found.title, "Docker");
        assert_eq!(found.description, "Imágenes");
        assert_eq!(found.week, 2);
        assert_eq!(found.status, ModuleStatus::InProgress);

        let updated = update_module(&db, a.id, ModulePatch {
            title: Some("Docker y Compose".into()),
            week: Some(3),
            ..Default::default()
        }).await?;
        assert_eq!(updated.title, "Docker y Compose");
        assert_eq!(updated.week, 3);
        assert_eq!(updated.description, "Imágenes");

        assert!(delete_module(&db, a.id).await?);
        assert!(get_module(&db, a.id).await?.is_none());
        assert!(!delete_module(&db, a.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn status_only_update_keeps_other_columns() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_module(&db, NewModule {
            title: "Redes".into(),
            description: "TCP/IP".into(),
            week: 4,
            status: ModuleStatus::Planned,
        }).await?;

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let updated = update_module(&db, a.id, ModulePatch {
            status: Some(ModuleStatus::Done),
            ..Default::default()
        }).await?;

        assert_eq!(updated.status, ModuleStatus::Done);
        assert_eq!(updated.title, a.title);
        assert_eq!(updated.description, a.description);
        assert_eq!(updated.week, a.week);
        assert_eq!(updated.created_at, a.created_at);
        assert!(updated.updated_at > a.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_module_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_module(&db, 999, ModulePatch {
            week: Some(1),
            ..Default::default()
        }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = update_module(&db, 999, ModulePatch::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        Ok(())
    }

    #[tokio::test]
    async fn list_is_ordered_by_week_then_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let w3 = create_module(&db, new_module("c", 3)).await?;
        let w1a = create_module(&db, new_module("a", 1)).await?;
        let w2 = create_module(&db, new_module("b", 2)).await?;
        let w1b = create_module(&db, new_module("a2", 1)).await?;

        let ids: Vec<i32> = list_modules(&db).await?.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![w1a.id, w1b.id, w2.id, w3.id]);
        Ok(())
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_module(&db, new_module("a", 1)).await?;
        let b = create_module(&db, new_module("b", 1)).await?;
        assert!(delete_module(&db, b.id).await?);
        let c = create_module(&db, new_module("c", 1)).await?;
        assert!(c.id > b.id);
        assert!(b.id > a.id);
        Ok(())
    }
}
