//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use rollcall_core::entities::{AttendanceEntry, AttendanceRecord};
use rollcall_core::traits::{AttendanceRepository, RepoResult};

use crate::models::AttendanceModel;

use super::error::{map_db_error, map_foreign_key_violation, member_not_found};

/// PostgreSQL implementation of AttendanceRepository
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    #[instrument(skip(self))]
    async fn list_by_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>> {
        let rows = sqlx::query_as::<_, AttendanceModel>(
            r"
            SELECT member_id, date, presence, observation
            FROM attendance
            WHERE date = $1
            ORDER BY member_id
            ",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(AttendanceRecord::try_from).collect()
    }

    #[instrument(skip(self, entries), fields(entries = entries.len()))]
    async fn upsert_batch(&self, date: NaiveDate, entries: &[AttendanceEntry]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for entry in entries {
            sqlx::query(
                r"
                INSERT INTO attendance (member_id, date, presence, observation)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (member_id, date)
                DO UPDATE SET presence = EXCLUDED.presence,
                              observation = EXCLUDED.observation
                ",
            )
            .bind(entry.member_id.into_inner())
            .bind(date)
            .bind(entry.presence.as_str())
            .bind(entry.observation.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_foreign_key_violation(e, || member_not_found(entry.member_id)))?;
        }

        // Dropping the transaction on any early return rolls it back
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
