use crate::{
    cli::Cli, error::ConfigError, github::github_client::DEFAULT_API_URL, labels::AllowList,
    pull_request::PrReference,
};

const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
const REF_VAR: &str = "GITHUB_REF";
const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";
const API_URL_VAR: &str = "GITHUB_API_URL";

#[derive(Debug)]
pub struct Config {
    pub token: String,
    pub allow_list: AllowList,
    pub message: String,
    pub owner: String,
    pub repo: String,
    pub pr_reference: PrReference,
    pub api_url: String,
}

impl Config {
    /// Combines the command line with the Actions environment, read through
    /// `env` so callers decide where variables come from.
    pub fn load<F>(cli: Cli, env: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if cli.token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        let allow_list = AllowList::parse(&cli.allowed_labels);

        let repository = required(&env, REPOSITORY_VAR)?;
        let github_ref = required(&env, REF_VAR)?;
        let event_name = required(&env, EVENT_NAME_VAR)?;

        let (owner, repo) = split_repository(&repository)?;
        let pr_reference = PrReference::new(&event_name, &cli.pr_number, &github_ref);
        let api_url = env(API_URL_VAR)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        log::debug!(
            "repository: {}, event: {}, ref: {}",
            repository,
            event_name,
            github_ref
        );

        Ok(Config {
            token: cli.token,
            allow_list,
            message: cli.message,
            owner,
            repo,
            pr_reference,
            api_url,
        })
    }
}

fn required<F>(env: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    env(name).ok_or(ConfigError::MissingEnvVar { name })
}

fn split_repository(full_name: &str) -> Result<(String, String), ConfigError> {
    match full_name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_owned(), repo.to_owned()))
        }
        _ => Err(ConfigError::InvalidRepository {
            value: full_name.to_owned(),
        }),
    }
}
