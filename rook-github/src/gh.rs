//! Issue creation by shelling out to the GitHub CLI

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::{CreatedIssue, Error, IssueCreator, NewIssue, Result};

/// The `gh issue create` backend
///
/// One invocation per row, run to completion before the next. The process
/// inherits stdio so the tool's own output stays visible.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    repo: String,
}

impl GhCli {
    /// Create a gh backend for the given repository
    pub fn new(program: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            repo: repo.into(),
        }
    }

    /// Arguments for one `gh issue create` invocation
    ///
    /// Labels are appended after the fixed options, in request order.
    fn build_args(&self, issue: &NewIssue) -> Vec<String> {
        let mut args = vec![
            "issue".to_string(),
            "create".to_string(),
            "--repo".to_string(),
            self.repo.clone(),
            "--title".to_string(),
            issue.title.clone(),
            "--body".to_string(),
            issue.body.clone(),
            "--milestone".to_string(),
            issue.milestone.clone(),
        ];

        for label in &issue.labels {
            args.push("--label".to_string());
            args.push(label.clone());
        }

        args
    }
}

#[async_trait]
impl IssueCreator for GhCli {
    fn name(&self) -> &'static str {
        "gh"
    }

    fn audit_line(&self, issue: &NewIssue) -> String {
        let mut line = String::from("$ ");
        line.push_str(&shell_quote(&self.program));
        for arg in self.build_args(issue) {
            line.push(' ');
            line.push_str(&shell_quote(&arg));
        }
        line
    }

    async fn create(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        debug!(title = %issue.title, "Invoking gh issue create");

        let status = Command::new(&self.program)
            .args(self.build_args(issue))
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ToolNotFound(self.program.clone())
                } else {
                    Error::Io(e)
                }
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                program: self.program.clone(),
                status,
            });
        }

        Ok(CreatedIssue::default())
    }

    fn is_available(&self) -> bool {
        std::process::Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

/// Quote an argument for display in the audit trail
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));

    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_issue() -> NewIssue {
        NewIssue {
            title: "Fix login bug".to_string(),
            body: "Users cannot log in".to_string(),
            milestone: "Phase 1 – Ontology Ingestion & Canonical Model".to_string(),
            labels: vec!["bug".to_string(), "urgent".to_string()],
        }
    }

    #[test]
    fn test_build_args_order() {
        let gh = GhCli::new("gh", "acme/onto");
        let args = gh.build_args(&sample_issue());

        assert_eq!(
            args,
            vec![
                "issue",
                "create",
                "--repo",
                "acme/onto",
                "--title",
                "Fix login bug",
                "--body",
                "Users cannot log in",
                "--milestone",
                "Phase 1 – Ontology Ingestion & Canonical Model",
                "--label",
                "bug",
                "--label",
                "urgent",
            ]
        );
    }

    #[test]
    fn test_build_args_no_labels() {
        let gh = GhCli::new("gh", "acme/onto");
        let issue = NewIssue {
            labels: vec![],
            ..sample_issue()
        };

        let args = gh.build_args(&issue);
        assert!(!args.contains(&"--label".to_string()));
        assert_eq!(args.len(), 10);
    }

    #[test]
    fn test_audit_line_is_quoted() {
        let gh = GhCli::new("gh", "acme/onto");
        let line = gh.audit_line(&sample_issue());

        assert_eq!(
            line,
            "$ gh issue create --repo acme/onto --title 'Fix login bug' \
             --body 'Users cannot log in' \
             --milestone 'Phase 1 – Ontology Ingestion & Canonical Model' \
             --label bug --label urgent"
        );
    }

    #[test]
    fn test_shell_quote_plain() {
        assert_eq!(shell_quote("bug"), "bug");
        assert_eq!(shell_quote("acme/onto"), "acme/onto");
        assert_eq!(shell_quote("--title"), "--title");
    }

    #[test]
    fn test_shell_quote_spaces_and_empty() {
        assert_eq!(shell_quote("two words"), "'two words'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_shell_quote_embedded_quote() {
        assert_eq!(shell_quote("can't"), r"'can'\''t'");
    }

    #[test]
    fn test_is_available_for_missing_program() {
        let gh = GhCli::new("definitely-not-a-real-gh-binary", "acme/onto");
        assert!(!gh.is_available());
    }

    #[tokio::test]
    async fn test_create_with_missing_program() {
        let gh = GhCli::new("definitely-not-a-real-gh-binary", "acme/onto");
        let result = gh.create(&sample_issue()).await;

        assert!(matches!(result, Err(Error::ToolNotFound(_))));
    }
}
