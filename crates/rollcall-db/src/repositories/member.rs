//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use rollcall_core::entities::{Member, MemberChanges, NewMember};
use rollcall_core::error::DomainError;
use rollcall_core::traits::{MemberRepository, RepoResult};
use rollcall_core::value_objects::RecordId;

use crate::mappers::{group_role_names, member_with_roles};
use crate::models::{MemberModel, MemberRoleNameModel};

use super::error::{map_db_error, member_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load role names for one member, or for every member when `member_id` is `None`
    async fn load_role_names(&self, member_id: Option<i64>) -> Result<Vec<MemberRoleNameModel>, DomainError> {
        sqlx::query_as::<_, MemberRoleNameModel>(
            r"
            SELECT rm.member_id, r.name AS role_name
            FROM roles_members rm
            JOIN roles r ON r.id = rm.role_id
            WHERE $1::BIGINT IS NULL OR rm.member_id = $1
            ORDER BY rm.member_id, r.name
            ",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    /// Attach roles inside an open transaction; duplicates are ignored
    async fn link_roles(
        tx: &mut Transaction<'_, Postgres>,
        member_id: i64,
        role_ids: &[RecordId],
    ) -> Result<(), DomainError> {
        if role_ids.is_empty() {
            return Ok(());
        }

        let ids: Vec<i64> = role_ids.iter().map(|id| id.into_inner()).collect();
        sqlx::query(
            r"
            INSERT INTO roles_members (member_id, role_id)
            SELECT $1, UNNEST($2::BIGINT[])
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(member_id)
        .bind(&ids)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, status, created_at
            FROM members
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut roles = group_role_names(self.load_role_names(None).await?);

        rows.into_iter()
            .map(|model| {
                let names = roles.remove(&model.id).unwrap_or_default();
                member_with_roles(model, names)
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, status, created_at
            FROM members
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let names = self
                    .load_role_names(Some(model.id))
                    .await?
                    .into_iter()
                    .map(|row| row.role_name)
                    .collect();
                member_with_roles(model, names).map(Some)
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn create(&self, member: &NewMember, role_ids: &[RecordId]) -> RepoResult<RecordId> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO members (name, status)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(&member.name)
        .bind(member.status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        Self::link_roles(&mut tx, id, role_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(RecordId::new(id))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: RecordId, changes: &MemberChanges) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Matches the row even when nothing changes, so it doubles as the existence check
        let result = sqlx::query(
            r"
            UPDATE members
            SET name = COALESCE($2, name),
                status = COALESCE($3, status)
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(changes.name.as_deref())
        .bind(changes.status.map(|s| s.as_str()))
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        if let Some(role_ids) = &changes.role_ids {
            sqlx::query("DELETE FROM roles_members WHERE member_id = $1")
                .bind(id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

            Self::link_roles(&mut tx, id.into_inner(), role_ids).await?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn existing_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<RecordId>> {
        let ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM members WHERE id = ANY($1) ORDER BY id")
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(found.into_iter().map(RecordId::new).collect())
    }
}
