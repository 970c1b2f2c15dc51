//! Value objects - immutable types that represent domain concepts

mod member_status;
mod presence;
mod record_id;

pub use member_status::MemberStatus;
pub use presence::{parse_attendance_date, Presence, ATTENDANCE_DATE_FORMAT};
pub use record_id::{RecordId, RecordIdParseError};
