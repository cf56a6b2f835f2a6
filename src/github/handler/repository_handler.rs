use super::pull_request_handler::PullRequestHandler;
use crate::github::{github_client::GithubClient, response::Repository};
use anyhow::Result;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn get(&self) -> Result<Repository> {
        self.client.get_repository(&self.owner, &self.repo).await
    }

    pub fn pull_request(&self, number: u64) -> PullRequestHandler<'a> {
        PullRequestHandler::new(self.client, &self.owner, &self.repo, number)
    }
}
