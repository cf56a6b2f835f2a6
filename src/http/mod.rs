mod pagination;

pub use pagination::next_page;

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client, RequestBuilder,
};
use serde::de::DeserializeOwned;
use std::ops::Deref;
use thiserror::Error;

const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT_NAME: &str = "verify-pr-labels";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn github_headers(self, token: &str) -> RequestBuilder;
    fn json_content(self) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
    }

    fn json_content(self) -> RequestBuilder {
        self.header(CONTENT_TYPE, "application/json")
    }
}

/// Turns transport failures and non-2xx statuses into [`Error`].
pub trait ResponseHandler {
    async fn handle(self) -> Result<reqwest::Response, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<reqwest::Response, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        Err(Error::GenericResponseError {
            status: status.as_u16(),
            message,
        })
    }
}

pub async fn parse<T>(response: reqwest::Response) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let text = response
        .text()
        .await
        .map_err(|cause| Error::ReadResponseTextError { cause })?;

    serde_json::from_str::<T>(&text).map_err(|cause| Error::ParseResponseError { cause })
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("GitHub responded with status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
