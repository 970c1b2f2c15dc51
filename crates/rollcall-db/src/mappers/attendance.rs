//! Attendance model -> entity mapper

use rollcall_core::entities::AttendanceRecord;
use rollcall_core::error::DomainError;
use rollcall_core::value_objects::RecordId;

use crate::models::AttendanceModel;

impl TryFrom<AttendanceModel> for AttendanceRecord {
    type Error = DomainError;

    fn try_from(model: AttendanceModel) -> Result<Self, Self::Error> {
        let presence = model.presence.parse().map_err(|_| {
            DomainError::DatabaseError(format!(
                "attendance for member {} on {} has unknown presence {:?}",
                model.member_id, model.date, model.presence
            ))
        })?;

        Ok(AttendanceRecord {
            member_id: RecordId::new(model.member_id),
            date: model.date,
            presence,
            observation: model.observation,
        })
    }
}
