//! Issue creation through the GitHub REST API using octocrab

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, info};

use rook_core::Secrets;

use crate::{CreatedIssue, Error, IssueCreator, NewIssue, Result};

/// The direct API backend
///
/// Alternative to shelling out to `gh` for environments where the CLI is
/// not installed.
pub struct ApiCreator {
    client: Octocrab,
    owner: String,
    repo: String,
}

/// Milestone as returned by the milestones endpoint
#[derive(Debug, Deserialize)]
struct MilestoneRef {
    number: u64,
    title: String,
}

impl ApiCreator {
    /// Create an API backend for the given repository reference
    ///
    /// Token is loaded from (in priority order):
    /// 1. GITHUB_TOKEN environment variable
    /// 2. ~/.config/rook/secrets.toml
    pub fn new(repo_ref: &str) -> Result<Self> {
        let (owner, repo) = parse_repo(repo_ref)?;

        let secrets = Secrets::load().map_err(|e| Error::Auth(e.to_string()))?;

        let token = secrets.github_token().ok_or_else(|| {
            Error::Auth(
                "GitHub token not found. Set GITHUB_TOKEN environment variable \
                 or add token to ~/.config/rook/secrets.toml"
                    .to_string(),
            )
        })?;

        let client = Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        info!(owner = %owner, repo = %repo, "Created GitHub API client");

        Ok(Self {
            client,
            owner,
            repo,
        })
    }

    /// Resolve a milestone title to its number
    ///
    /// The issues endpoint only accepts milestones by number. Milestones in
    /// any state are considered, matching how `gh` addresses them by title.
    async fn milestone_number(&self, title: &str) -> Result<u64> {
        debug!(title, "Resolving milestone");

        let route = format!("/repos/{}/{}/milestones", self.owner, self.repo);
        let milestones: Vec<MilestoneRef> = self
            .client
            .get(route, Some(&[("state", "all"), ("per_page", "100")]))
            .await?;

        milestones
            .into_iter()
            .find(|m| m.title.trim() == title.trim())
            .map(|m| m.number)
            .ok_or_else(|| Error::MilestoneNotFound {
                title: title.to_string(),
                repo: format!("{}/{}", self.owner, self.repo),
            })
    }
}

impl std::fmt::Debug for ApiCreator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCreator")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl IssueCreator for ApiCreator {
    fn name(&self) -> &'static str {
        "api"
    }

    fn audit_line(&self, issue: &NewIssue) -> String {
        format!(
            "POST /repos/{}/{}/issues title={:?} body={:?} milestone={:?} labels={:?}",
            self.owner, self.repo, issue.title, issue.body, issue.milestone, issue.labels
        )
    }

    async fn create(&self, issue: &NewIssue) -> Result<CreatedIssue> {
        debug!(title = %issue.title, "Creating issue via REST API");

        let milestone = self.milestone_number(&issue.milestone).await?;

        let created = self
            .client
            .issues(&self.owner, &self.repo)
            .create(issue.title.as_str())
            .body(issue.body.as_str())
            .milestone(milestone)
            .labels(issue.labels.clone())
            .send()
            .await
            .map_err(Error::Api)?;

        Ok(CreatedIssue {
            number: Some(created.number),
        })
    }
}

/// Parse a repository reference into (owner, repo)
///
/// Accepts `owner/repo` shorthand, `https://github.com/owner/repo[.git]`,
/// and `git@github.com:owner/repo[.git]`.
pub fn parse_repo(reference: &str) -> Result<(String, String)> {
    let reference = reference.trim();

    if let Some(rest) = reference.strip_prefix("git@") {
        let path = rest
            .split_once(':')
            .map(|(_, path)| path)
            .ok_or_else(|| Error::Parse(format!("Invalid SSH remote: {}", reference)))?;
        return split_owner_repo(path.trim_end_matches(".git"))
            .ok_or_else(|| Error::Parse(format!("Invalid SSH remote: {}", reference)));
    }

    if reference.starts_with("https://") || reference.starts_with("http://") {
        let url = url::Url::parse(reference).map_err(|e| Error::Parse(e.to_string()))?;
        let path = url.path().trim_start_matches('/').trim_end_matches(".git");
        return split_owner_repo(path)
            .ok_or_else(|| Error::Parse(format!("Invalid repository URL: {}", reference)));
    }

    split_owner_repo(reference.trim_end_matches(".git")).ok_or_else(|| {
        Error::Parse(format!(
            "Invalid repository reference: {}. Expected owner/repo",
            reference
        ))
    })
}

fn split_owner_repo(path: &str) -> Option<(String, String)> {
    let mut parts = path.split('/');
    let owner = parts.next()?;
    let repo = parts.next()?;

    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    Some((owner.to_string(), repo.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let (owner, repo) = parse_repo("acme/onto").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "onto");
    }

    #[test]
    fn test_parse_shorthand_with_git_suffix() {
        let (owner, repo) = parse_repo("acme/onto.git").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "onto");
    }

    #[test]
    fn test_parse_https_url() {
        let (owner, repo) = parse_repo("https://github.com/acme/onto").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "onto");
    }

    #[test]
    fn test_parse_https_url_with_git_suffix() {
        let (owner, repo) = parse_repo("https://github.com/acme/onto.git").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "onto");
    }

    #[test]
    fn test_parse_ssh_url() {
        let (owner, repo) = parse_repo("git@github.com:acme/onto.git").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "onto");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_repo("invalid").is_err());
        assert!(parse_repo("").is_err());
        assert!(parse_repo("/onto").is_err());
    }
}
