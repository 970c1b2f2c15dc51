//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every write method is expected to be
//! atomic: either all of its row changes commit or none do.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{AttendanceEntry, AttendanceRecord, Member, MemberChanges, NewMember, Role, User};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;

    /// Find user by exact email match
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a user and return its generated id.
    /// A unique-email violation surfaces as `EmailAlreadyExists`.
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> RepoResult<RecordId>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List every member ordered by id, with role names sorted
    async fn list(&self) -> RepoResult<Vec<Member>>;

    /// Find a single member
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Member>>;

    /// Insert a member together with its role links
    async fn create(&self, member: &NewMember, role_ids: &[RecordId]) -> RepoResult<RecordId>;

    /// Apply a partial update; role ids, when present, replace the role set.
    /// Fails with `MemberNotFound` if the member does not exist.
    async fn update(&self, id: RecordId, changes: &MemberChanges) -> RepoResult<()>;

    /// Return the subset of `ids` that belong to existing members
    async fn existing_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<RecordId>>;
}

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// List all roles ordered by name
    async fn list(&self) -> RepoResult<Vec<Role>>;

    /// Find the roles whose names match exactly; unknown names are ignored
    async fn find_by_names(&self, names: &[String]) -> RepoResult<Vec<Role>>;
}

// ============================================================================
// Attendance Repository
// ============================================================================

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// All records for a date, ordered by member id
    async fn list_by_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>>;

    /// Insert or update one record per entry for `date`, in a single transaction
    async fn upsert_batch(&self, date: NaiveDate, entries: &[AttendanceEntry]) -> RepoResult<()>;
}
