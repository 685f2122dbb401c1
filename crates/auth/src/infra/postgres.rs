//! PostgreSQL Identity Store

use sqlx::PgPool;

use crate::domain::identity::Identity;
use crate::domain::repository::{IdentityRepository, LookupError};

/// PostgreSQL-backed identity store
///
/// Pool sizing, timeouts, and retry policy belong to the pool handed in
/// here; the engine never sees them.
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl IdentityRepository for PgIdentityRepository {
    async fn fetch(&self, system_id: &str) -> Result<Identity, LookupError> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT
                system_id,
                password_hash,
                customer_id,
                ip_allow_list
            FROM identities
            WHERE system_id = $1
            "#,
        )
        .bind(system_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            // any transport or query fault collapses to StoreUnavailable
            tracing::warn!(error = %e, "identity store query failed");
            LookupError::StoreUnavailable(e.to_string())
        })?;

        match row {
            Some(row) => row.into_identity(),
            None => Err(LookupError::NotFound),
        }
    }
}

/// Raw identities row; attributes other than the key are nullable
#[derive(sqlx::FromRow)]
struct IdentityRow {
    system_id: String,
    password_hash: Option<String>,
    customer_id: Option<String>,
    ip_allow_list: Option<String>,
}

impl IdentityRow {
    fn into_identity(self) -> Result<Identity, LookupError> {
        Identity::from_record(
            self.system_id,
            self.password_hash,
            self.customer_id,
            self.ip_allow_list,
        )
    }
}
