//! Security audit generation.

use crate::client::Client;
use crate::error::Result;
use crate::request::RequestOptions;
use crate::types::AuditOptions;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuditRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_options: Option<&'a AuditOptions>,
}

impl Client {
    /// Generate a security audit of the instance.
    ///
    /// The report is a free-form document keyed by risk category, so it is
    /// returned as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use n8n_client::{AuditOptions, Client, ClientConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new(ClientConfig::new("https://n8n.example.com", "key"))?;
    /// let report = client
    ///     .generate_audit(
    ///         Some(&AuditOptions {
    ///             days_abandoned_workflow: Some(90),
    ///             categories: Some(vec!["credentials".to_string()]),
    ///         }),
    ///         None,
    ///     )
    ///     .await?;
    /// println!("{report:#}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate_audit(
        &self,
        options: Option<&AuditOptions>,
        opts: Option<RequestOptions>,
    ) -> Result<Value> {
        let body = AuditRequest {
            additional_options: options,
        };
        self.post_json("/audit", &body, opts).await
    }
}
