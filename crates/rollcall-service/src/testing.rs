//! In-memory repositories for tests
//!
//! [`InMemoryStore`] implements every repository trait over a single
//! mutex-guarded state, mirroring the constraints of the PostgreSQL schema
//! (unique emails, one attendance row per member and day, atomic batches).

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::Mutex;

use rollcall_common::{hash_password, JwtService};
use rollcall_core::entities::{
    AttendanceEntry, AttendanceRecord, Member, MemberChanges, NewMember, Role, User,
};
use rollcall_core::error::DomainError;
use rollcall_core::traits::{
    AttendanceRepository, MemberRepository, RepoResult, RoleRepository, UserRepository,
};
use rollcall_core::value_objects::{MemberStatus, RecordId};

use crate::services::ServiceContext;

/// Secret used by [`test_context`]
pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-long-enough";

/// Roles created by the initial migration
pub const SEEDED_ROLES: [&str; 3] = ["Professor", "Líder", "Aluno"];

struct StoredUser {
    user: User,
    password_hash: String,
}

struct StoredMember {
    name: String,
    status: MemberStatus,
    role_ids: BTreeSet<RecordId>,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: BTreeMap<RecordId, StoredUser>,
    members: BTreeMap<RecordId, StoredMember>,
    roles: BTreeMap<RecordId, Role>,
    attendance: BTreeMap<(NaiveDate, RecordId), AttendanceRecord>,
}

impl State {
    fn allocate_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::new(self.next_id)
    }

    fn to_member(&self, id: RecordId, stored: &StoredMember) -> Member {
        let mut roles: Vec<String> = stored
            .role_ids
            .iter()
            .filter_map(|role_id| self.roles.get(role_id))
            .map(|role| role.name.clone())
            .collect();
        roles.sort();

        Member {
            id,
            name: stored.name.clone(),
            status: stored.status,
            roles,
            created_at: stored.created_at,
        }
    }
}

/// Thread-safe in-memory backing store
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Empty store without roles
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the seeded roles
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock();
            for name in SEEDED_ROLES {
                let id = state.allocate_id();
                state.roles.insert(id, Role::new(id, name));
            }
        }
        store
    }

    /// Insert a user with a hashed password
    pub fn add_user(&self, name: &str, email: &str, password: &str) -> User {
        let password_hash = hash_password(password).expect("hashing a test password");
        let mut state = self.state.lock();
        let id = state.allocate_id();
        let user = User::new(id, name.to_string(), email.to_string());
        state.users.insert(
            id,
            StoredUser {
                user: user.clone(),
                password_hash,
            },
        );
        user
    }

    /// Remove a user, as if the account was deleted after a token was issued
    pub fn remove_user(&self, id: RecordId) {
        self.state.lock().users.remove(&id);
    }

    /// Insert a member holding the named roles
    pub fn add_member(&self, name: &str, status: MemberStatus, roles: &[&str]) -> RecordId {
        let mut state = self.state.lock();
        let role_ids = state
            .roles
            .values()
            .filter(|role| roles.contains(&role.name.as_str()))
            .map(|role| role.id)
            .collect();
        let id = state.allocate_id();
        state.members.insert(
            id,
            StoredMember {
                name: name.to_string(),
                status,
                role_ids,
                created_at: Utc::now(),
            },
        );
        id
    }

    /// Number of stored attendance rows across every date
    pub fn attendance_count(&self) -> usize {
        self.state.lock().attendance.len()
    }
}

/// Service context over a seeded store, plus the store for assertions
pub fn test_context() -> (ServiceContext, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::seeded());
    let ctx = ServiceContext::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(JwtService::new(TEST_JWT_SECRET, 43200)),
    );
    (ctx, store)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(&id).map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.values().any(|s| s.user.email == email))
    }

    async fn create(&self, name: &str, email: &str, password_hash: &str) -> RepoResult<RecordId> {
        let mut state = self.state.lock();
        if state.users.values().any(|s| s.user.email == email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let id = state.allocate_id();
        state.users.insert(
            id,
            StoredUser {
                user: User::new(id, name.to_string(), email.to_string()),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(id)
    }

    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>> {
        Ok(self.state.lock().users.get(&id).map(|s| s.password_hash.clone()))
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn list(&self) -> RepoResult<Vec<Member>> {
        let state = self.state.lock();
        Ok(state
            .members
            .iter()
            .map(|(id, stored)| state.to_member(*id, stored))
            .collect())
    }

    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Member>> {
        let state = self.state.lock();
        Ok(state.members.get(&id).map(|stored| state.to_member(id, stored)))
    }

    async fn create(&self, member: &NewMember, role_ids: &[RecordId]) -> RepoResult<RecordId> {
        let mut state = self.state.lock();
        let id = state.allocate_id();
        state.members.insert(
            id,
            StoredMember {
                name: member.name.clone(),
                status: member.status,
                role_ids: role_ids.iter().copied().collect(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn update(&self, id: RecordId, changes: &MemberChanges) -> RepoResult<()> {
        let mut state = self.state.lock();
        let stored = state
            .members
            .get_mut(&id)
            .ok_or(DomainError::MemberNotFound(id))?;

        if let Some(name) = &changes.name {
            stored.name.clone_from(name);
        }
        if let Some(status) = changes.status {
            stored.status = status;
        }
        if let Some(role_ids) = &changes.role_ids {
            stored.role_ids = role_ids.iter().copied().collect();
        }
        Ok(())
    }

    async fn existing_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<RecordId>> {
        let state = self.state.lock();
        let found: BTreeSet<RecordId> = ids
            .iter()
            .copied()
            .filter(|id| state.members.contains_key(id))
            .collect();
        Ok(found.into_iter().collect())
    }
}

#[async_trait]
impl RoleRepository for InMemoryStore {
    async fn list(&self) -> RepoResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.state.lock().roles.values().cloned().collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn find_by_names(&self, names: &[String]) -> RepoResult<Vec<Role>> {
        Ok(self
            .state
            .lock()
            .roles
            .values()
            .filter(|role| names.contains(&role.name))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryStore {
    async fn list_by_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>> {
        Ok(self
            .state
            .lock()
            .attendance
            .range((date, RecordId::new(i64::MIN))..=(date, RecordId::new(i64::MAX)))
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn upsert_batch(&self, date: NaiveDate, entries: &[AttendanceEntry]) -> RepoResult<()> {
        let mut state = self.state.lock();

        // All or nothing, like the foreign key inside the transaction
        if let Some(missing) = entries
            .iter()
            .find(|entry| !state.members.contains_key(&entry.member_id))
        {
            return Err(DomainError::MemberNotFound(missing.member_id));
        }

        for entry in entries {
            state
                .attendance
                .insert((date, entry.member_id), entry.clone().into_record(date));
        }
        Ok(())
    }
}
