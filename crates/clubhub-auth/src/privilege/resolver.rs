//! Aggregates a user's effective privileges from group membership.

use std::collections::HashSet;

use clubhub_entity::privilege::Privilege;
use clubhub_entity::user::User;

/// Resolves the effective privilege set of a user.
///
/// The model is flat: a user belongs to groups, each group carries
/// privileges, and the effective set is the deduplicated union across all
/// groups. There is no group nesting and no privilege inheritance.
/// Resolution is a pure function over the already-loaded user; it is
/// recomputed on every credential issuance, so privilege changes take
/// effect on the next login.
#[derive(Debug, Clone)]
pub struct PrivilegeResolver;

impl PrivilegeResolver {
    /// Creates a new resolver.
    pub fn new() -> Self {
        Self
    }

    /// Returns the union of all privileges across the user's groups,
    /// deduplicated by privilege name.
    ///
    /// A user with no groups yields an empty set.
    pub fn effective_privileges(&self, user: &User) -> HashSet<Privilege> {
        user.groups
            .iter()
            .flat_map(|group| group.privileges.iter().cloned())
            .collect()
    }
}

impl Default for PrivilegeResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use clubhub_entity::group::Group;

    use super::*;

    fn user_with_groups(groups: Vec<Group>) -> User {
        User {
            id: 1,
            email: "member@example.org".to_string(),
            username: None,
            first_name: "Jane".to_string(),
            last_name: "Member".to_string(),
            password_hash: String::new(),
            groups,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_union_across_groups() {
        let groups = vec![
            Group::new(
                1,
                "Board",
                vec![
                    Privilege::new(1, "groups_read", "Can read all groups."),
                    Privilege::new(2, "groups_write", "Can edit groups."),
                ],
            ),
            Group::new(
                2,
                "Members",
                vec![Privilege::new(3, "project_read", "Can read projects.")],
            ),
        ];

        let privileges = PrivilegeResolver::new().effective_privileges(&user_with_groups(groups));
        let names: HashSet<&str> = privileges.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["groups_read", "groups_write", "project_read"]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn test_duplicate_privilege_counted_once() {
        // The same privilege name in two groups, even under different row
        // ids, must not double-count.
        let groups = vec![
            Group::new(
                1,
                "Board",
                vec![Privilege::new(1, "product_write", "Can write products.")],
            ),
            Group::new(
                2,
                "Shopkeepers",
                vec![Privilege::new(42, "product_write", "")],
            ),
        ];

        let privileges = PrivilegeResolver::new().effective_privileges(&user_with_groups(groups));
        assert_eq!(privileges.len(), 1);
    }

    #[test]
    fn test_no_groups_yields_empty_set() {
        let privileges = PrivilegeResolver::new().effective_privileges(&user_with_groups(vec![]));
        assert!(privileges.is_empty());
    }

    #[test]
    fn test_group_without_privileges_contributes_nothing() {
        let groups = vec![Group::new(1, "Logon", vec![])];
        let privileges = PrivilegeResolver::new().effective_privileges(&user_with_groups(groups));
        assert!(privileges.is_empty());
    }
}
