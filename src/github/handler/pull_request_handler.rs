use crate::github::{
    github_client::GithubClient,
    response::{IssueComment, Label, PullRequest},
};
use anyhow::Result;

pub struct PullRequestHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    number: u64,
}

impl<'a> PullRequestHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
    ) -> Self {
        PullRequestHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub async fn get(&self) -> Result<PullRequest> {
        self.client
            .get_pull_request(&self.owner, &self.repo, self.number)
            .await
    }

    pub async fn labels(&self) -> Result<Vec<Label>> {
        self.client
            .list_labels(&self.owner, &self.repo, self.number)
            .await
    }

    pub async fn issue_comments(&self) -> Result<Vec<IssueComment>> {
        self.client
            .list_issue_comments(&self.owner, &self.repo, self.number)
            .await
    }

    pub async fn create_issue_comment(&self, body: impl Into<String>) -> Result<IssueComment> {
        self.client
            .create_issue_comment(&self.owner, &self.repo, self.number, body)
            .await
    }
}
