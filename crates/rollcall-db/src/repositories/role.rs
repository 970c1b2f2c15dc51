//! PostgreSQL implementation of RoleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rollcall_core::entities::Role;
use rollcall_core::traits::{RepoResult, RoleRepository};

use crate::models::RoleModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RoleRepository
#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    /// Create a new PgRoleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleModel>("SELECT id, name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_names(&self, names: &[String]) -> RepoResult<Vec<Role>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, RoleModel>(
            r"
            SELECT id, name
            FROM roles
            WHERE name = ANY($1)
            ORDER BY name
            ",
        )
        .bind(names)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Role::from).collect())
    }
}
