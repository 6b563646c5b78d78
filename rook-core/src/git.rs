//! Git repository detection
//!
//! Used to infer the target repository from the enclosing checkout when no
//! repository is configured explicitly.

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::{Error, Result};

/// A thin wrapper over the enclosing git repository
pub struct GitRepo {
    repo: Repository,
    root: PathBuf,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl GitRepo {
    /// Discover the repository enclosing `path`
    ///
    /// Searches upward from the given path to find the repository root.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::Config(format!("Not a git repository: {}", path.display()))
            } else {
                Error::Other(format!("Git error: {}", e))
            }
        })?;

        let root = repo
            .workdir()
            .ok_or_else(|| Error::Config("Bare repositories are not supported".to_string()))?
            .to_path_buf();

        Ok(Self { repo, root })
    }

    /// Get the repository root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// URL of the `origin` remote, if one is configured
    pub fn origin_url(&self) -> Option<String> {
        self.repo
            .find_remote("origin")
            .ok()
            .and_then(|remote| remote.url().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_initialized_repo() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();

        let repo = GitRepo::discover(dir.path()).unwrap();
        assert!(repo.root().exists());
        assert!(repo.origin_url().is_none());
    }

    #[test]
    fn test_discover_missing_path() {
        let result = GitRepo::discover("/nonexistent/path/12345");
        assert!(result.is_err());
    }

    #[test]
    fn test_origin_url_when_configured() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        repo.remote("origin", "git@github.com:acme/onto.git").unwrap();

        let repo = GitRepo::discover(dir.path()).unwrap();
        assert_eq!(
            repo.origin_url(),
            Some("git@github.com:acme/onto.git".to_string())
        );
    }
}
