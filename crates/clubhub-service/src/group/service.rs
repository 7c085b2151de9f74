//! Group management service.

use std::sync::Arc;

use tracing::info;

use clubhub_core::error::AppError;
use clubhub_database::repositories::GroupRepository;
use clubhub_entity::group::Group;

use super::guards;

/// Manages group renaming, deletion, and membership, enforcing the
/// administrator-group invariants.
#[derive(Clone)]
pub struct GroupService {
    /// Group repository.
    groups: Arc<GroupRepository>,
    /// Configured administrator group name.
    admin_group_name: String,
}

impl std::fmt::Debug for GroupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupService")
            .field("admin_group_name", &self.admin_group_name)
            .finish()
    }
}

impl GroupService {
    /// Creates a new group service.
    pub fn new(groups: Arc<GroupRepository>, admin_group_name: impl Into<String>) -> Self {
        Self {
            groups,
            admin_group_name: admin_group_name.into(),
        }
    }

    /// Look up a group by id.
    pub async fn find_group(&self, group_id: i64) -> Result<Group, AppError> {
        self.groups
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| AppError::not_found("Group not found"))
    }

    /// Rename a group. The administrator group cannot be renamed and no
    /// other group may take its name.
    pub async fn rename_group(&self, group_id: i64, new_name: &str) -> Result<(), AppError> {
        let group = self.find_group(group_id).await?;
        guards::ensure_rename_allowed(&group, new_name, &self.admin_group_name)?;

        let new_name = new_name.trim();
        if let Some(existing) = self.groups.find_by_name(new_name).await? {
            if existing.id != group_id {
                return Err(AppError::conflict("Group name already in use"));
            }
        }

        self.groups.update_name(group_id, new_name).await?;
        info!(group_id, new_name, "group renamed");
        Ok(())
    }

    /// Delete a group. The administrator group cannot be deleted.
    pub async fn delete_group(&self, group_id: i64) -> Result<(), AppError> {
        let group = self.find_group(group_id).await?;
        guards::ensure_delete_allowed(&group, &self.admin_group_name)?;

        self.groups.delete(group_id).await?;
        info!(group_id, name = %group.name, "group deleted");
        Ok(())
    }

    /// Add a user to a group.
    pub async fn add_member(&self, group_id: i64, user_id: i64) -> Result<(), AppError> {
        // Existence check keeps the error a clean not-found instead of a
        // foreign-key violation.
        self.find_group(group_id).await?;
        self.groups.add_member(group_id, user_id).await?;
        info!(group_id, user_id, "user added to group");
        Ok(())
    }

    /// Remove a user from a group. The administrator group can never be
    /// emptied of members.
    pub async fn remove_member(&self, group_id: i64, user_id: i64) -> Result<(), AppError> {
        let group = self.find_group(group_id).await?;
        let member_count = self.groups.count_members(group_id).await?;
        guards::ensure_member_removal_allowed(&group, member_count, &self.admin_group_name)?;

        self.groups.remove_member(group_id, user_id).await?;
        info!(group_id, user_id, "user removed from group");
        Ok(())
    }

    /// Replace the privilege set of a group. Takes effect on members'
    /// next login; already-issued credentials keep their snapshot.
    pub async fn replace_privileges(
        &self,
        group_id: i64,
        privilege_ids: &[i64],
    ) -> Result<(), AppError> {
        self.find_group(group_id).await?;
        self.groups.replace_privileges(group_id, privilege_ids).await?;
        info!(group_id, count = privilege_ids.len(), "group privileges replaced");
        Ok(())
    }
}
