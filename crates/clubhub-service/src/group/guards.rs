//! Pure validation rules protecting the administrator group.
//!
//! The administrator group is identified by its configured name. It cannot
//! be renamed, deleted, or emptied of members, and no other group may take
//! its name.

use clubhub_core::error::AppError;
use clubhub_entity::group::Group;

/// Validates a group rename.
pub fn ensure_rename_allowed(
    group: &Group,
    new_name: &str,
    admin_group_name: &str,
) -> Result<(), AppError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(AppError::validation("Group name cannot be empty"));
    }

    let is_admin = group.name == admin_group_name;
    if is_admin && new_name != admin_group_name {
        return Err(AppError::conflict("Administrator group cannot be renamed"));
    }
    if !is_admin && new_name == admin_group_name {
        return Err(AppError::conflict(
            "Group cannot take the administrator group name",
        ));
    }
    Ok(())
}

/// Validates a group deletion.
pub fn ensure_delete_allowed(group: &Group, admin_group_name: &str) -> Result<(), AppError> {
    if group.name == admin_group_name {
        return Err(AppError::conflict("Administrator group cannot be deleted"));
    }
    Ok(())
}

/// Validates removing one member from a group with `member_count` current
/// members.
pub fn ensure_member_removal_allowed(
    group: &Group,
    member_count: i64,
    admin_group_name: &str,
) -> Result<(), AppError> {
    if group.name == admin_group_name && member_count <= 1 {
        return Err(AppError::conflict(
            "Cannot remove the last member of the administrator group",
        ));
    }
    Ok(())
}
