//! Ticket-creation capability interface

use async_trait::async_trait;

use crate::Result;

/// One issue-creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Issue title (trimmed, non-empty)
    pub title: String,
    /// Issue body, may be empty
    pub body: String,
    /// Milestone the issue is filed under
    pub milestone: String,
    /// Labels in order
    pub labels: Vec<String>,
}

/// A created issue, as much as the backend can tell us
#[derive(Debug, Clone, Default)]
pub struct CreatedIssue {
    /// Issue number, when the backend reports one
    pub number: Option<u64>,
}

/// Capability interface for creating issues in a tracker
///
/// Implementations perform exactly one creation per call and never retry;
/// the import engine treats any error as fatal.
#[async_trait]
pub trait IssueCreator: Send + Sync {
    /// Short backend name for progress output
    fn name(&self) -> &'static str;

    /// Human-readable rendition of the request, printed as an audit trail
    /// regardless of mode
    fn audit_line(&self, issue: &NewIssue) -> String;

    /// Create the issue in the target repository
    async fn create(&self, issue: &NewIssue) -> Result<CreatedIssue>;

    /// Whether the backend can run in this environment
    fn is_available(&self) -> bool {
        true
    }
}
