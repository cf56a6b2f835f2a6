mod pull_request_handler;
mod repository_handler;

pub use pull_request_handler::PullRequestHandler;
pub use repository_handler::RepositoryHandler;

use super::github_client::GithubClient;

/// Github repo handler access implementation
impl GithubClient {
    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }
}
