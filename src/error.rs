use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("A token must be provided!")]
    MissingToken,
    #[error("The environmental variable {name} is empty!")]
    MissingEnvVar { name: &'static str },
    #[error("GITHUB_REPOSITORY must have the form \"owner/name\", got \"{value}\"")]
    InvalidRepository { value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error(
        "A valid pull request number input must be defined when triggering on \
         \"pull_request_target\". The pull request number passed was \"{input}\"."
    )]
    InvalidPrNumber { input: String },
    #[error("The pull request number could not be extracted from GITHUB_REF = \"{github_ref}\"")]
    UnresolvableRef { github_ref: String },
}
