//! Variable management operations.

use crate::client::Client;
use crate::error::Result;
use crate::request::{Query, RequestOptions};
use crate::types::{CursorPage, Variable, VariableDraft};

impl Client {
    /// Create a variable. The server returns no body on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the key already exists or the request fails.
    pub async fn create_variable(
        &self,
        draft: &VariableDraft,
        opts: Option<RequestOptions>,
    ) -> Result<()> {
        self.post_empty("/variables", draft, opts).await
    }

    /// List variables, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_variables(
        &self,
        limit: Option<u32>,
        cursor: Option<String>,
        opts: Option<RequestOptions>,
    ) -> Result<CursorPage<Variable>> {
        let query = Query::new()
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        self.get_json("/variables", query, opts).await
    }

    /// Update a variable's key and value.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not found or the request fails.
    pub async fn update_variable(
        &self,
        id: &str,
        draft: &VariableDraft,
        opts: Option<RequestOptions>,
    ) -> Result<()> {
        let path = format!("/variables/{id}");
        self.put_empty(&path, draft, opts).await
    }

    /// Delete a variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not found or the request fails.
    pub async fn delete_variable(&self, id: &str, opts: Option<RequestOptions>) -> Result<()> {
        let path = format!("/variables/{id}");
        self.delete_empty(&path, opts).await
    }
}
