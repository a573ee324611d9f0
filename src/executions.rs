//! Execution inspection operations.

use crate::client::Client;
use crate::error::Result;
use crate::request::{Query, RequestOptions};
use crate::types::{CursorPage, Execution, ExecutionStatus};

/// Filters for listing executions.
#[derive(Debug, Clone, Default)]
pub struct ListExecutionsParams {
    /// Include the full run data in each record.
    pub include_data: Option<bool>,
    /// Only executions with this status.
    pub status: Option<ExecutionStatus>,
    /// Only executions of this workflow.
    pub workflow_id: Option<String>,
    /// Only executions of workflows in this project.
    pub project_id: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Cursor from the previous page.
    pub cursor: Option<String>,
}

impl Client {
    /// List executions, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use n8n_client::{Client, ClientConfig, ExecutionStatus, ListExecutionsParams};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new(ClientConfig::new("https://n8n.example.com", "key"))?;
    /// let failed = client
    ///     .list_executions(
    ///         ListExecutionsParams {
    ///             status: Some(ExecutionStatus::Error),
    ///             limit: Some(20),
    ///             ..Default::default()
    ///         },
    ///         None,
    ///     )
    ///     .await?;
    /// println!("{} failed executions", failed.items.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_executions(
        &self,
        params: ListExecutionsParams,
        opts: Option<RequestOptions>,
    ) -> Result<CursorPage<Execution>> {
        let query = Query::new()
            .push_opt("includeData", params.include_data)
            .push_opt("status", params.status)
            .push_opt("workflowId", params.workflow_id)
            .push_opt("projectId", params.project_id)
            .push_opt("limit", params.limit)
            .push_opt("cursor", params.cursor);
        self.get_json("/executions", query, opts).await
    }

    /// Get a single execution.
    ///
    /// # Errors
    ///
    /// Returns an error if the execution is not found or the request fails.
    pub async fn get_execution(
        &self,
        id: i64,
        include_data: Option<bool>,
        opts: Option<RequestOptions>,
    ) -> Result<Execution> {
        let path = format!("/executions/{id}");
        let query = Query::new().push_opt("includeData", include_data);
        self.get_json(&path, query, opts).await
    }

    /// Delete an execution record, returning the deleted record.
    ///
    /// # Errors
    ///
    /// Returns an error if the execution is not found or the request fails.
    pub async fn delete_execution(
        &self,
        id: i64,
        opts: Option<RequestOptions>,
    ) -> Result<Execution> {
        let path = format!("/executions/{id}");
        self.delete_json(&path, opts).await
    }
}
