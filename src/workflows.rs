//! Workflow management operations.

use crate::client::Client;
use crate::error::Result;
use crate::request::{Query, RequestOptions};
use crate::types::{CursorPage, Tag, Workflow, WorkflowDraft};
use serde::Serialize;

/// Filters for listing workflows.
#[derive(Debug, Clone, Default)]
pub struct ListWorkflowsParams {
    /// Only active (or only inactive) workflows.
    pub active: Option<bool>,
    /// Comma-separated tag names the workflow must carry.
    pub tags: Option<String>,
    /// Exact workflow name.
    pub name: Option<String>,
    /// Only workflows in this project.
    pub project_id: Option<String>,
    /// Omit pinned data from the returned workflows.
    pub exclude_pinned_data: Option<bool>,
    /// Page size.
    pub limit: Option<u32>,
    /// Cursor from the previous page.
    pub cursor: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferRequest<'a> {
    destination_project_id: &'a str,
}

#[derive(Serialize)]
struct TagRef<'a> {
    id: &'a str,
}

impl Client {
    /// Create a workflow.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is rejected or the request fails.
    pub async fn create_workflow(
        &self,
        draft: &WorkflowDraft,
        opts: Option<RequestOptions>,
    ) -> Result<Workflow> {
        self.post_json("/workflows", draft, opts).await
    }

    /// List workflows, one page at a time.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use n8n_client::{Client, ClientConfig, ListWorkflowsParams};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new(ClientConfig::new("https://n8n.example.com", "key"))?;
    /// let mut cursor = None;
    /// loop {
    ///     let page = client
    ///         .list_workflows(
    ///             ListWorkflowsParams {
    ///                 active: Some(true),
    ///                 cursor: cursor.take(),
    ///                 ..Default::default()
    ///             },
    ///             None,
    ///         )
    ///         .await?;
    ///     for workflow in page.items {
    ///         println!("{}: {}", workflow.id, workflow.name);
    ///     }
    ///     match page.next_cursor {
    ///         Some(next) => cursor = Some(next),
    ///         None => break,
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_workflows(
        &self,
        params: ListWorkflowsParams,
        opts: Option<RequestOptions>,
    ) -> Result<CursorPage<Workflow>> {
        let query = Query::new()
            .push_opt("active", params.active)
            .push_opt("tags", params.tags)
            .push_opt("name", params.name)
            .push_opt("projectId", params.project_id)
            .push_opt("excludePinnedData", params.exclude_pinned_data)
            .push_opt("limit", params.limit)
            .push_opt("cursor", params.cursor);
        self.get_json("/workflows", query, opts).await
    }

    /// Get a workflow by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow is not found or the request fails.
    pub async fn get_workflow(
        &self,
        id: &str,
        exclude_pinned_data: Option<bool>,
        opts: Option<RequestOptions>,
    ) -> Result<Workflow> {
        let path = format!("/workflows/{id}");
        let query = Query::new().push_opt("excludePinnedData", exclude_pinned_data);
        self.get_json(&path, query, opts).await
    }

    /// Replace a workflow's definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow is not found or the draft is rejected.
    pub async fn update_workflow(
        &self,
        id: &str,
        draft: &WorkflowDraft,
        opts: Option<RequestOptions>,
    ) -> Result<Workflow> {
        let path = format!("/workflows/{id}");
        self.put_json(&path, draft, opts).await
    }

    /// Delete a workflow, returning the deleted record.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow is not found or the request fails.
    pub async fn delete_workflow(
        &self,
        id: &str,
        opts: Option<RequestOptions>,
    ) -> Result<Workflow> {
        let path = format!("/workflows/{id}");
        self.delete_json(&path, opts).await
    }

    /// Activate a workflow so its triggers start firing.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow is not found or cannot be activated.
    pub async fn activate_workflow(
        &self,
        id: &str,
        opts: Option<RequestOptions>,
    ) -> Result<Workflow> {
        let path = format!("/workflows/{id}/activate");
        self.post_json(&path, &serde_json::json!({}), opts).await
    }

    /// Deactivate a workflow.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow is not found or the request fails.
    pub async fn deactivate_workflow(
        &self,
        id: &str,
        opts: Option<RequestOptions>,
    ) -> Result<Workflow> {
        let path = format!("/workflows/{id}/deactivate");
        self.post_json(&path, &serde_json::json!({}), opts).await
    }

    /// Move a workflow to another project.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow or project is not found.
    pub async fn transfer_workflow(
        &self,
        id: &str,
        destination_project_id: &str,
        opts: Option<RequestOptions>,
    ) -> Result<()> {
        let path = format!("/workflows/{id}/transfer");
        let body = TransferRequest {
            destination_project_id,
        };
        self.put_empty(&path, &body, opts).await
    }

    /// List the tags attached to a workflow.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow is not found or the request fails.
    pub async fn get_workflow_tags(
        &self,
        id: &str,
        opts: Option<RequestOptions>,
    ) -> Result<Vec<Tag>> {
        let path = format!("/workflows/{id}/tags");
        self.get_json(&path, Query::new(), opts).await
    }

    /// Replace the set of tags attached to a workflow.
    ///
    /// # Errors
    ///
    /// Returns an error if the workflow or a tag is not found.
    pub async fn update_workflow_tags(
        &self,
        id: &str,
        tag_ids: &[&str],
        opts: Option<RequestOptions>,
    ) -> Result<Vec<Tag>> {
        let path = format!("/workflows/{id}/tags");
        let body: Vec<TagRef<'_>> = tag_ids.iter().map(|id| TagRef { id }).collect();
        self.put_json(&path, &body, opts).await
    }
}
