mod issue_comment;
mod label;
mod pull_request;
mod repository;

pub use issue_comment::IssueComment;
pub use label::Label;
pub use pull_request::PullRequest;
pub use repository::Repository;
