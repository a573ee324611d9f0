//! Credential management operations.
//!
//! The server never returns decrypted credential data, so there is no read
//! endpoint; credentials can only be created, deleted, transferred, and
//! described via their type schema.

use crate::client::Client;
use crate::error::Result;
use crate::request::{Query, RequestOptions};
use crate::types::{Credential, CredentialDraft};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferRequest<'a> {
    destination_project_id: &'a str,
}

impl Client {
    /// Store a credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the data does not match the credential type's
    /// schema or the request fails.
    pub async fn create_credential(
        &self,
        draft: &CredentialDraft,
        opts: Option<RequestOptions>,
    ) -> Result<Credential> {
        self.post_json("/credentials", draft, opts).await
    }

    /// Delete a credential, returning the deleted record.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is not found or the request fails.
    pub async fn delete_credential(
        &self,
        id: &str,
        opts: Option<RequestOptions>,
    ) -> Result<Credential> {
        let path = format!("/credentials/{id}");
        self.delete_json(&path, opts).await
    }

    /// Fetch the JSON schema describing a credential type's expected data.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is unknown or the request fails.
    pub async fn get_credential_schema(
        &self,
        type_name: &str,
        opts: Option<RequestOptions>,
    ) -> Result<Value> {
        let path = format!("/credentials/schema/{type_name}");
        self.get_json(&path, Query::new(), opts).await
    }

    /// Move a credential to another project.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential or project is not found.
    pub async fn transfer_credential(
        &self,
        id: &str,
        destination_project_id: &str,
        opts: Option<RequestOptions>,
    ) -> Result<()> {
        let path = format!("/credentials/{id}/transfer");
        let body = TransferRequest {
            destination_project_id,
        };
        self.put_empty(&path, &body, opts).await
    }
}
