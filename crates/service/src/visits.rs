use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::errors::ServiceError;

/// Record one visit and return the total count, the visit included.
/// Two statements, no transaction: concurrent callers may observe each other's rows.
pub async fn record_visit(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let visit = models::visit::create(db).await?;
    let total = models::visit::count(db).await?;
    debug!(visit_id = visit.id, total, "visit_recorded");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn each_call_adds_one() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert_eq!(record_visit(&db).await?, 1);
        assert_eq!(record_visit(&db).await?, 2);
        assert_eq!(record_visit(&db).await?, 3);
        Ok(())
    }
}
