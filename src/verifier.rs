use crate::{
    github::{GithubClient, PullRequestHandler},
    labels::AllowList,
    template,
};
use anyhow::Result;

#[derive(Debug, PartialEq, Eq)]
pub enum Verification {
    /// The pull request carries at least one allowed label.
    Passed { matched: Vec<String> },
    /// No allowed label was found. `commented` is false when an identical
    /// comment was already on the pull request.
    Failed { commented: bool },
}

pub struct Verifier<'a> {
    allow_list: &'a AllowList,
    message: String,
}

impl<'a> Verifier<'a> {
    pub fn new(allow_list: &'a AllowList, message_template: &str) -> Self {
        let message = template::render(message_template, &allow_list.to_string());

        Verifier {
            allow_list,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub async fn verify(
        &self,
        client: &GithubClient,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Verification> {
        let repository = client.repo(owner, repo);
        log::info!("using repository {}", repository.get().await?.full_name);

        let pull_request = repository.pull_request(number);
        let pr = pull_request.get().await?;
        log::info!("checking #{} \"{}\" ({})", pr.number, pr.title, pr.state);

        self.check(&pull_request).await
    }

    async fn check(&self, pull_request: &PullRequestHandler<'_>) -> Result<Verification> {
        let message_posted = pull_request
            .issue_comments()
            .await?
            .iter()
            .any(|comment| comment.has_body(&self.message));

        let labels = pull_request.labels().await?;
        let matched = self.allow_list.matching(&labels);

        if !matched.is_empty() {
            return Ok(Verification::Passed { matched });
        }

        if message_posted {
            log::info!(
                "#{} already has the comment, not posting it again",
                pull_request.number()
            );
            return Ok(Verification::Failed { commented: false });
        }

        let comment = pull_request.create_issue_comment(&self.message).await?;
        log::info!("posted comment {} on #{}", comment.id, pull_request.number());

        Ok(Verification::Failed { commented: true })
    }
}
