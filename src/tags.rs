//! Tag management operations.

use crate::client::Client;
use crate::error::Result;
use crate::request::{Query, RequestOptions};
use crate::types::{CursorPage, Tag};
use serde::Serialize;

#[derive(Serialize)]
struct TagName<'a> {
    name: &'a str,
}

impl Client {
    /// Create a tag.
    ///
    /// # Errors
    ///
    /// Returns an error if a tag with the same name exists or the request
    /// fails.
    pub async fn create_tag(&self, name: &str, opts: Option<RequestOptions>) -> Result<Tag> {
        self.post_json("/tags", &TagName { name }, opts).await
    }

    /// List tags, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_tags(
        &self,
        limit: Option<u32>,
        cursor: Option<String>,
        opts: Option<RequestOptions>,
    ) -> Result<CursorPage<Tag>> {
        let query = Query::new()
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        self.get_json("/tags", query, opts).await
    }

    /// Get a tag by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not found or the request fails.
    pub async fn get_tag(&self, id: &str, opts: Option<RequestOptions>) -> Result<Tag> {
        let path = format!("/tags/{id}");
        self.get_json(&path, Query::new(), opts).await
    }

    /// Rename a tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not found or the new name collides.
    pub async fn update_tag(
        &self,
        id: &str,
        name: &str,
        opts: Option<RequestOptions>,
    ) -> Result<Tag> {
        let path = format!("/tags/{id}");
        self.put_json(&path, &TagName { name }, opts).await
    }

    /// Delete a tag, returning the deleted record.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not found or the request fails.
    pub async fn delete_tag(&self, id: &str, opts: Option<RequestOptions>) -> Result<Tag> {
        let path = format!("/tags/{id}");
        self.delete_json(&path, opts).await
    }
}
