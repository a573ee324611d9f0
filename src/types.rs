//! Type definitions mirroring the n8n REST API's JSON shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a cursor-paginated listing.
///
/// The server returns `{ "data": [...], "nextCursor": "..." }`; repeat the
/// call with the cursor until it comes back absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    /// Items on this page.
    #[serde(rename = "data")]
    pub items: Vec<T>,
    /// Opaque token for the next page; `None` on the last page.
    pub next_cursor: Option<String>,
}

/// A workflow as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Workflow identifier.
    pub id: String,
    /// Workflow name.
    pub name: String,
    /// Whether the workflow is active.
    #[serde(default)]
    pub active: bool,
    /// Node definitions; kept as raw JSON since node shapes are owned by the
    /// server and its installed node types.
    #[serde(default)]
    pub nodes: Vec<Value>,
    /// Connection graph between nodes.
    #[serde(default)]
    pub connections: Value,
    /// Workflow settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    /// Static data persisted between runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_data: Option<Value>,
    /// Tags attached to the workflow.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// ISO 8601 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a workflow.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDraft {
    /// Workflow name.
    pub name: String,
    /// Node definitions.
    pub nodes: Vec<Value>,
    /// Connection graph between nodes.
    pub connections: Value,
    /// Workflow settings.
    pub settings: Value,
    /// Static data persisted between runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_data: Option<Value>,
}

/// An execution record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Execution identifier.
    pub id: i64,
    /// Whether the execution ran to completion.
    #[serde(default)]
    pub finished: bool,
    /// How the execution was started (e.g. "manual", "trigger", "webhook").
    #[serde(default)]
    pub mode: String,
    /// Identifier of the execution this one retries, if any.
    #[serde(default)]
    pub retry_of: Option<i64>,
    /// Identifier of the successful retry, if any.
    #[serde(default)]
    pub retry_success_id: Option<i64>,
    /// ISO 8601 start timestamp.
    #[serde(default)]
    pub started_at: Option<String>,
    /// ISO 8601 stop timestamp, absent while running.
    #[serde(default)]
    pub stopped_at: Option<String>,
    /// Identifier of the workflow that was executed.
    #[serde(default)]
    pub workflow_id: Option<String>,
    /// ISO 8601 timestamp a waiting execution resumes at.
    #[serde(default)]
    pub wait_till: Option<String>,
    /// Execution status.
    #[serde(default)]
    pub status: Option<ExecutionStatus>,
    /// Full run data; only present when requested with `include_data`.
    #[serde(default)]
    pub data: Option<Value>,
}

/// Execution lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Canceled,
    Crashed,
    Error,
    New,
    Running,
    Success,
    Waiting,
    Warning,
    #[serde(other)]
    Unknown,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Canceled => "canceled",
            ExecutionStatus::Crashed => "crashed",
            ExecutionStatus::Error => "error",
            ExecutionStatus::New => "new",
            ExecutionStatus::Running => "running",
            ExecutionStatus::Success => "success",
            ExecutionStatus::Waiting => "waiting",
            ExecutionStatus::Warning => "warning",
            ExecutionStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored credential. The server never returns decrypted secret data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Credential identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Credential type name (e.g. "httpBasicAuth").
    #[serde(rename = "type")]
    pub credential_type: String,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating a credential.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDraft {
    /// Display name.
    pub name: String,
    /// Credential type name.
    #[serde(rename = "type")]
    pub credential_type: String,
    /// Secret data, shaped per the credential type's schema.
    pub data: Value,
}

/// A user account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: String,
    /// Email address.
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Whether the invite is still pending.
    #[serde(default)]
    pub is_pending: bool,
    /// Global role, present when requested with `include_role`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// An invitation to create a user account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvite {
    /// Email address to invite.
    pub email: String,
    /// Global role for the new account (e.g. "global:member").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Per-invite outcome of a bulk user creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInviteResult {
    /// The created user, on success.
    #[serde(default)]
    pub user: Option<InvitedUser>,
    /// The failure reason, when the invite was rejected.
    #[serde(default)]
    pub error: Option<String>,
}

/// A freshly invited user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitedUser {
    pub id: String,
    pub email: String,
    /// URL the invitee uses to accept.
    #[serde(default)]
    pub invite_accept_url: Option<String>,
    /// Whether the invite email was sent.
    #[serde(default)]
    pub email_sent: bool,
}

/// A workflow tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag identifier.
    pub id: String,
    /// Tag name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// An environment variable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Variable identifier.
    pub id: String,
    /// Variable key.
    pub key: String,
    /// Variable value.
    pub value: String,
    /// Value type, currently always "string".
    #[serde(default, rename = "type")]
    pub variable_type: Option<String>,
}

/// Payload for creating or updating a variable.
#[derive(Debug, Clone, Serialize)]
pub struct VariableDraft {
    pub key: String,
    pub value: String,
}

/// A project grouping workflows and credentials.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Project type (e.g. "team", "personal").
    #[serde(default, rename = "type")]
    pub project_type: Option<String>,
}

/// Extra options for generating a security audit.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOptions {
    /// Days a workflow must be untouched to count as abandoned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_abandoned_workflow: Option<u32>,
    /// Risk categories to include (e.g. "credentials", "database",
    /// "filesystem", "instance", "nodes").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}
