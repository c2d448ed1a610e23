//! Authorization Policy
//!
//! The single decision point for access control. Every mutating use
//! case calls [`allowed`] before touching the repository; read paths
//! call it before querying. Role checks are exact set membership, there
//! is no implicit hierarchy.

use crate::id::UserId;
use crate::principal::{Principal, Role};

/// API operations subject to access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Users
    ListUsers,
    CreateUser,
    GetUser,
    UpdateUser,
    ResetPassword,
    DeleteUser,
    // Posts
    ListPosts,
    GetPost,
    GetPostBySlug,
    CreatePost,
    UpdatePost,
    DeletePost,
    // Comments
    ListComments,
    GetComment,
    CreateComment,
    UpdateComment,
    DeleteComment,
}

/// Decide whether `principal` may perform `action`.
///
/// `owner` is the owning user of the target entity for ownership-based
/// rules (the author of a post/comment, or the user being modified);
/// pass `None` for collection operations.
pub fn allowed(principal: Option<&Principal>, action: Action, owner: Option<UserId>) -> bool {
    use Action::*;

    match action {
        // Public operations
        ListUsers | CreateUser | ListPosts | GetPostBySlug | ListComments => true,

        // Any authenticated caller
        GetUser | GetPost | GetComment => principal.is_some(),

        // Self only
        UpdateUser | ResetPassword => is_owner(principal, owner),

        DeleteUser => has_role(principal, Role::SuperAdmin),

        CreatePost => has_role(principal, Role::Writer),

        UpdatePost | DeletePost => {
            has_role(principal, Role::Editor)
                || (has_role(principal, Role::Writer) && is_owner(principal, owner))
        }

        CreateComment => has_role(principal, Role::Commentator),

        UpdateComment | DeleteComment => {
            has_role(principal, Role::Editor)
                || (has_role(principal, Role::Commentator) && is_owner(principal, owner))
        }
    }
}

fn has_role(principal: Option<&Principal>, role: Role) -> bool {
    principal.is_some_and(|p| p.has_role(role))
}

fn is_owner(principal: Option<&Principal>, owner: Option<UserId>) -> bool {
    match (principal, owner) {
        (Some(p), Some(owner)) => p.user_id == owner,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;
    use crate::principal::RoleSet;

    fn principal(id: i64, roles: &[Role]) -> Principal {
        Principal::new(Id::from_i64(id), RoleSet::new(roles.iter().copied()))
    }

    #[test]
    fn test_public_actions_need_no_principal() {
        for action in [
            Action::ListUsers,
            Action::CreateUser,
            Action::ListPosts,
            Action::GetPostBySlug,
            Action::ListComments,
        ] {
            assert!(allowed(None, action, None));
        }
    }

    #[test]
    fn test_item_reads_require_authentication() {
        for action in [Action::GetUser, Action::GetPost, Action::GetComment] {
            assert!(!allowed(None, action, None));
            let p = principal(1, &[Role::Commentator]);
            assert!(allowed(Some(&p), action, None));
        }
    }

    #[test]
    fn test_create_post_requires_writer() {
        let writer = principal(1, &[Role::Writer]);
        let commentator = principal(2, &[Role::Commentator]);
        assert!(allowed(Some(&writer), Action::CreatePost, None));
        assert!(!allowed(Some(&commentator), Action::CreatePost, None));
        assert!(!allowed(None, Action::CreatePost, None));
    }

    #[test]
    fn test_update_post_editor_or_owning_writer() {
        let editor = principal(1, &[Role::Editor]);
        let author = principal(2, &[Role::Writer]);
        let other_writer = principal(3, &[Role::Writer]);
        let owner = Some(Id::from_i64(2));

        assert!(allowed(Some(&editor), Action::UpdatePost, owner));
        assert!(allowed(Some(&author), Action::UpdatePost, owner));
        assert!(!allowed(Some(&other_writer), Action::UpdatePost, owner));
        assert!(!allowed(None, Action::UpdatePost, owner));
    }

    #[test]
    fn test_delete_post_matches_update_rule() {
        let author = principal(2, &[Role::Writer]);
        let other = principal(3, &[Role::Commentator]);
        let owner = Some(Id::from_i64(2));
        assert!(allowed(Some(&author), Action::DeletePost, owner));
        assert!(!allowed(Some(&other), Action::DeletePost, owner));
    }

    #[test]
    fn test_comment_rules() {
        let commentator = principal(5, &[Role::Commentator]);
        let editor = principal(6, &[Role::Editor]);
        let owner = Some(Id::from_i64(5));

        assert!(allowed(Some(&commentator), Action::CreateComment, None));
        assert!(allowed(Some(&commentator), Action::UpdateComment, owner));
        assert!(allowed(Some(&editor), Action::UpdateComment, owner));

        // Editor without Commentator cannot create, only moderate
        assert!(!allowed(Some(&editor), Action::CreateComment, None));

        // A commentator cannot touch someone else's comment
        let stranger = principal(7, &[Role::Commentator]);
        assert!(!allowed(Some(&stranger), Action::DeleteComment, owner));
    }

    #[test]
    fn test_delete_user_superadmin_only() {
        let superadmin = principal(1, &[Role::SuperAdmin]);
        let admin = principal(2, &[Role::Admin]);
        let commentator = principal(3, &[Role::Commentator]);
        let target = Some(Id::from_i64(9));

        assert!(allowed(Some(&superadmin), Action::DeleteUser, target));
        assert!(!allowed(Some(&admin), Action::DeleteUser, target));
        assert!(!allowed(Some(&commentator), Action::DeleteUser, target));
    }

    #[test]
    fn test_self_only_actions() {
        let me = principal(4, &[Role::Commentator]);
        assert!(allowed(Some(&me), Action::UpdateUser, Some(Id::from_i64(4))));
        assert!(!allowed(Some(&me), Action::UpdateUser, Some(Id::from_i64(5))));
        assert!(allowed(
            Some(&me),
            Action::ResetPassword,
            Some(Id::from_i64(4))
        ));
        assert!(!allowed(None, Action::ResetPassword, Some(Id::from_i64(4))));
    }

    #[test]
    fn test_no_role_hierarchy() {
        // SuperAdmin does not implicitly grant Writer
        let superadmin = principal(1, &[Role::SuperAdmin]);
        assert!(!allowed(Some(&superadmin), Action::CreatePost, None));
    }
}
