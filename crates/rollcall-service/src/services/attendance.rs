//! Attendance service
//!
//! Reads and writes the per-day attendance sheet. A batch is validated as a
//! whole before anything is stored.

use std::collections::{BTreeMap, BTreeSet};

use rollcall_core::entities::AttendanceEntry;
use rollcall_core::{parse_attendance_date, DomainError, Presence, RecordId};
use tracing::{info, instrument};

use crate::dto::{AttendanceResponse, MessageResponse, UpdateAttendanceRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Records of one day ordered by member id
    #[instrument(skip(self))]
    pub async fn list_attendance(&self, date: &str) -> ServiceResult<Vec<AttendanceResponse>> {
        let date = parse_attendance_date(date)?;
        let records = self.ctx.attendance_repo().list_by_date(date).await?;

        Ok(records.into_iter().map(AttendanceResponse::from).collect())
    }

    /// Replace the entries of a day for the listed members
    ///
    /// # Errors
    /// `InvalidDateFormat` for a bad date, `Validation` naming the first
    /// entry with an unknown presence or member. Nothing is written on error.
    #[instrument(skip(self, request), fields(entries = request.entries.len()))]
    pub async fn update_attendance(
        &self,
        date: &str,
        request: UpdateAttendanceRequest,
    ) -> ServiceResult<MessageResponse> {
        let date = parse_attendance_date(date)?;

        let mut parsed = Vec::with_capacity(request.entries.len());
        for (index, entry) in request.entries.into_iter().enumerate() {
            let presence = entry.presence.parse::<Presence>().map_err(|_| {
                ServiceError::validation(format!(
                    "Entry {index} (memberId {}): presence must be P, F or FJ",
                    entry.member_id
                ))
            })?;
            parsed.push((index, AttendanceEntry::new(entry.member_id, presence, entry.observation)));
        }

        let requested: Vec<RecordId> = parsed
            .iter()
            .map(|(_, entry)| entry.member_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let existing: BTreeSet<RecordId> = if requested.is_empty() {
            BTreeSet::new()
        } else {
            self.ctx
                .member_repo()
                .existing_ids(&requested)
                .await?
                .into_iter()
                .collect()
        };

        if let Some((index, entry)) = parsed
            .iter()
            .find(|(_, entry)| !existing.contains(&entry.member_id))
        {
            return Err(ServiceError::validation(format!(
                "Entry {index} (memberId {}): member not found",
                entry.member_id
            )));
        }

        // Later entries for the same member win
        let entries: Vec<AttendanceEntry> = parsed
            .into_iter()
            .map(|(_, entry)| (entry.member_id, entry))
            .collect::<BTreeMap<_, _>>()
            .into_values()
            .collect();

        if !entries.is_empty() {
            // A member removed after the existence check surfaces as a foreign key failure
            self.ctx
                .attendance_repo()
                .upsert_batch(date, &entries)
                .await
                .map_err(|e| match e {
                    DomainError::MemberNotFound(id) => {
                        ServiceError::validation(format!("memberId {id}: member not found"))
                    }
                    other => ServiceError::from(other),
                })?;
        }

        info!(%date, stored = entries.len(), "Attendance updated");

        Ok(MessageResponse::new("Attendance updated successfully"))
    }
}
