//! Type-safe async Rust client for the n8n workflow automation REST API.
//!
//! This crate wraps the n8n public API (v1) with typed resource methods for
//! workflows, executions, credentials, users, tags, variables, projects, and
//! security audits, on top of a single request executor that owns URL
//! construction, timeouts, cancellation, and error classification.
//!
//! # Features
//!
//! - Typed resource methods with cursor-based pagination
//! - Static API-key authentication (`X-N8N-API-KEY`)
//! - Per-call overrides: headers, timeout, external cancellation token
//! - Closed error taxonomy with status-classification predicates
//!
//! # Example
//!
//! ```no_run
//! use n8n_client::{Client, ClientConfig, ListWorkflowsParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(
//!     ClientConfig::new("https://n8n.example.com", std::env::var("N8N_API_KEY")?),
//! )?;
//!
//! let page = client
//!     .list_workflows(
//!         ListWorkflowsParams {
//!             active: Some(true),
//!             ..Default::default()
//!         },
//!         None,
//!     )
//!     .await?;
//! for workflow in page.items {
//!     println!("{}: {}", workflow.id, workflow.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error handling
//!
//! All operations return `Result<T, Error>`. API errors carry the status,
//! method, path, and parsed body, plus classification predicates:
//!
//! ```no_run
//! # use n8n_client::{Client, ClientConfig, Error};
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new(ClientConfig::new("https://n8n.example.com", "key"))?;
//! match client.get_workflow("wf-123", None, None).await {
//!     Ok(workflow) => println!("Found: {}", workflow.name),
//!     Err(Error::Api(api)) if api.is_not_found() => println!("Workflow not found"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Cancellation
//!
//! Every call can carry an external [`CancellationToken`]. Triggering it
//! surfaces [`Error::Aborted`]; an elapsed timeout surfaces
//! [`Error::Timeout`]. When both fire near-simultaneously the external token
//! wins the classification, since caller intent should not be mistaken for a
//! server-side timeout.
//!
//! ```no_run
//! # use n8n_client::{Client, ClientConfig, RequestOptions};
//! # use tokio_util::sync::CancellationToken;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::new(ClientConfig::new("https://n8n.example.com", "key"))?;
//! let token = CancellationToken::new();
//! let opts = RequestOptions::new().cancel(token.clone());
//!
//! // Elsewhere: token.cancel() tears down the in-flight call.
//! let result = client.get_workflow("wf-123", None, Some(opts)).await;
//! # Ok(())
//! # }
//! ```
//!
//! This client performs no retries and no caching; every failure is
//! classified into exactly one error variant and returned to the caller.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

mod audit;
mod client;
mod config;
mod credentials;
mod error;
mod executions;
mod projects;
mod request;
mod tags;
mod types;
mod users;
mod variables;
mod workflows;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_TIMEOUT};
pub use error::{ApiError, Error, Result};
pub use executions::ListExecutionsParams;
pub use request::{Query, RequestOptions};
pub use types::{
    AuditOptions, Credential, CredentialDraft, CursorPage, Execution, ExecutionStatus,
    InvitedUser, Project, Tag, User, UserInvite, UserInviteResult, Variable, VariableDraft,
    Workflow, WorkflowDraft,
};
pub use users::ListUsersParams;
pub use workflows::ListWorkflowsParams;

// Re-export the cancellation token type callers hand to `RequestOptions`.
pub use tokio_util::sync::CancellationToken;
