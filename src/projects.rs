//! Project management operations.

use crate::client::Client;
use crate::error::Result;
use crate::request::{Query, RequestOptions};
use crate::types::{CursorPage, Project};
use serde::Serialize;

#[derive(Serialize)]
struct ProjectName<'a> {
    name: &'a str,
}

impl Client {
    /// Create a project.
    ///
    /// # Errors
    ///
    /// Returns an error if projects are unavailable on the instance's license
    /// or the request fails.
    pub async fn create_project(
        &self,
        name: &str,
        opts: Option<RequestOptions>,
    ) -> Result<Project> {
        self.post_json("/projects", &ProjectName { name }, opts).await
    }

    /// List projects, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_projects(
        &self,
        limit: Option<u32>,
        cursor: Option<String>,
        opts: Option<RequestOptions>,
    ) -> Result<CursorPage<Project>> {
        let query = Query::new()
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        self.get_json("/projects", query, opts).await
    }

    /// Rename a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is not found or the request fails.
    pub async fn update_project(
        &self,
        id: &str,
        name: &str,
        opts: Option<RequestOptions>,
    ) -> Result<()> {
        let path = format!("/projects/{id}");
        self.put_empty(&path, &ProjectName { name }, opts).await
    }

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is not found or still owns resources.
    pub async fn delete_project(&self, id: &str, opts: Option<RequestOptions>) -> Result<()> {
        let path = format!("/projects/{id}");
        self.delete_empty(&path, opts).await
    }
}
