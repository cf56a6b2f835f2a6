use super::{
    request::{CommentRequest, SerializeRequest},
    response::{IssueComment, Label, PullRequest, Repository},
};
use crate::{
    get,
    http::{self, HttpClient},
    post,
};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PER_PAGE: u32 = 100;

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub(super) async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let uri = format!("{}/repos/{}/{}", self.api_url, owner, repo);

        log::debug!("getting repository {}/{}", owner, repo);
        let response =
            get!(self, &uri).with_context(|| format!("Cannot get repository {owner}/{repo}"))?;

        Ok(http::parse(response).await?)
    }

    pub(super) async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest> {
        let uri = format!("{}/repos/{}/{}/pulls/{}", self.api_url, owner, repo, number);

        log::debug!("getting pull request #{}", number);
        let response =
            get!(self, &uri).with_context(|| format!("Cannot get pull request #{number}"))?;

        Ok(http::parse(response).await?)
    }

    pub(super) async fn list_labels(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<Label>> {
        let uri = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.api_url, owner, repo, number
        );

        log::debug!("listing labels of #{}", number);
        self.get_all(uri)
            .await
            .with_context(|| format!("Cannot list labels of pull request #{number}"))
    }

    pub(super) async fn list_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<IssueComment>> {
        let uri = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, owner, repo, number
        );

        log::debug!("listing comments of #{}", number);
        self.get_all(uri)
            .await
            .with_context(|| format!("Cannot list comments of pull request #{number}"))
    }

    pub(super) async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: impl Into<String>,
    ) -> Result<IssueComment> {
        let uri = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, owner, repo, number
        );

        let body = CommentRequest::new(body).into_request()?;

        log::debug!("commenting on #{}", number);
        let response = post!(self, &uri, body)
            .with_context(|| format!("Cannot comment on pull request #{number}"))?;

        Ok(http::parse(response).await?)
    }

    /// Collects every page of a list endpoint by following `Link` headers.
    async fn get_all<T>(&self, uri: String) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut next = Some(format!("{}?per_page={}&page=1", uri, PER_PAGE));

        while let Some(url) = next {
            log::trace!("fetching page {}", url);
            let response = get!(self, &url)?;
            next = http::next_page(response.headers());

            let page: Vec<T> = http::parse(response).await?;
            items.extend(page);
        }

        Ok(items)
    }
}
