//! Roster service
//!
//! Members, their status and their role assignments.

use std::collections::BTreeSet;

use rollcall_core::entities::{MemberChanges, NewMember};
use rollcall_core::{DomainError, MemberStatus, RecordId};
use tracing::{info, instrument};

use crate::dto::{CreateMemberRequest, CreatedResponse, MemberResponse, MessageResponse, UpdateMemberRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every member ordered by id
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list().await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    /// Role names ordered by name
    #[instrument(skip(self))]
    pub async fn list_roles(&self) -> ServiceResult<Vec<String>> {
        let roles = self.ctx.role_repo().list().await?;
        Ok(roles.into_iter().map(|role| role.name).collect())
    }

    /// Create a member with optional status and roles
    #[instrument(skip(self, request))]
    pub async fn create_member(&self, request: CreateMemberRequest) -> ServiceResult<CreatedResponse> {
        let status = match request.status.as_deref() {
            Some(raw) => raw.parse::<MemberStatus>()?,
            None => MemberStatus::default(),
        };
        let member = NewMember::new(&request.name, status)?;
        let role_ids = self.resolve_roles(request.roles.as_deref().unwrap_or_default()).await?;

        let id = self.ctx.member_repo().create(&member, &role_ids).await?;

        info!(member_id = %id, roles = role_ids.len(), "Member created");

        Ok(CreatedResponse { id })
    }

    /// Apply a partial update; every field is checked before anything is written
    #[instrument(skip(self, request))]
    pub async fn update_member(
        &self,
        id: RecordId,
        request: UpdateMemberRequest,
    ) -> ServiceResult<MessageResponse> {
        let mut changes = MemberChanges::default();
        if let Some(name) = request.name.as_deref() {
            changes = changes.with_name(name)?;
        }
        if let Some(status) = request.status.as_deref() {
            changes = changes.with_status(status.parse()?);
        }
        if let Some(roles) = request.roles.as_deref() {
            changes = changes.with_role_ids(self.resolve_roles(roles).await?);
        }

        self.ctx
            .member_repo()
            .update(id, &changes)
            .await
            .map_err(|e| match e {
                DomainError::MemberNotFound(id) => ServiceError::not_found("Member", id),
                other => other.into(),
            })?;

        info!(member_id = %id, "Member updated");

        Ok(MessageResponse::new("Member updated successfully"))
    }

    /// Map role names to ids. Unknown names are dropped and duplicates collapse.
    async fn resolve_roles(&self, names: &[String]) -> ServiceResult<Vec<RecordId>> {
        let names: BTreeSet<&String> = names.iter().collect();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let names: Vec<String> = names.into_iter().cloned().collect();
        let roles = self.ctx.role_repo().find_by_names(&names).await?;

        let ids: BTreeSet<RecordId> = roles.into_iter().map(|role| role.id).collect();
        Ok(ids.into_iter().collect())
    }
}
