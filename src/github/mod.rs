pub mod github_client;
mod handler;
mod macros;
mod request;
mod response;

pub use github_client::GithubClient;
pub use handler::PullRequestHandler;
pub use response::Label;
