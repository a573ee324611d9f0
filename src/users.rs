//! User management operations.

use crate::client::Client;
use crate::error::Result;
use crate::request::{Query, RequestOptions};
use crate::types::{CursorPage, User, UserInvite, UserInviteResult};
use serde::Serialize;

/// Filters for listing users.
#[derive(Debug, Clone, Default)]
pub struct ListUsersParams {
    /// Page size.
    pub limit: Option<u32>,
    /// Cursor from the previous page.
    pub cursor: Option<String>,
    /// Include each user's global role.
    pub include_role: Option<bool>,
    /// Only users with access to this project.
    pub project_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleChange<'a> {
    new_role_name: &'a str,
}

impl Client {
    /// List users, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks owner access.
    pub async fn list_users(
        &self,
        params: ListUsersParams,
        opts: Option<RequestOptions>,
    ) -> Result<CursorPage<User>> {
        let query = Query::new()
            .push_opt("limit", params.limit)
            .push_opt("cursor", params.cursor)
            .push_opt("includeRole", params.include_role)
            .push_opt("projectId", params.project_id);
        self.get_json("/users", query, opts).await
    }

    /// Get a user by id or email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn get_user(
        &self,
        id_or_email: &str,
        include_role: Option<bool>,
        opts: Option<RequestOptions>,
    ) -> Result<User> {
        let path = format!("/users/{id_or_email}");
        let query = Query::new().push_opt("includeRole", include_role);
        self.get_json(&path, query, opts).await
    }

    /// Invite one or more users. The server reports success or failure per
    /// invite rather than failing the whole batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request itself fails; individual rejected
    /// invites surface in the result items.
    pub async fn create_users(
        &self,
        invites: &[UserInvite],
        opts: Option<RequestOptions>,
    ) -> Result<Vec<UserInviteResult>> {
        self.post_json("/users", invites, opts).await
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    pub async fn delete_user(&self, id: &str, opts: Option<RequestOptions>) -> Result<()> {
        let path = format!("/users/{id}");
        self.delete_empty(&path, opts).await
    }

    /// Change a user's global role (e.g. "global:admin", "global:member").
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the role name is invalid.
    pub async fn change_user_role(
        &self,
        id: &str,
        new_role: &str,
        opts: Option<RequestOptions>,
    ) -> Result<()> {
        let path = format!("/users/{id}/role");
        let body = RoleChange {
            new_role_name: new_role,
        };
        self.patch_empty(&path, &body, opts).await
    }
}
