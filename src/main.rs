mod cli;
mod config;
mod error;
mod github;
mod http;
mod labels;
mod logger;
mod pull_request;
mod template;
mod verifier;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use github::GithubClient;
use itertools::Itertools;
use std::{env, fmt::Display, process::ExitCode};
use verifier::{Verification, Verifier};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            return Ok(if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    logger::init(cli.log_level)?;

    let config = match Config::load(cli, |name| env::var(name).ok()) {
        Ok(config) => config,
        Err(err) => return Ok(abort(err)),
    };

    println!("Valid labels are: {}", config.allow_list);

    let number = match config.pr_reference.resolve() {
        Ok(number) => number,
        Err(err) => return Ok(abort(err)),
    };

    log::info!(
        "verifying pull request #{} of {}/{}",
        number,
        config.owner,
        config.repo
    );
    let client = GithubClient::new(&config.token, &config.api_url);
    let verifier = Verifier::new(&config.allow_list, &config.message);
    log::debug!("comment message: {}", verifier.message());

    let verification = verifier
        .verify(&client, &config.owner, &config.repo, number)
        .await
        .context("Cannot verify the pull request labels")?;

    match verification {
        Verification::Passed { matched } => {
            println!(
                "This pull request contains the following valid labels: {}",
                matched.iter().join(", ")
            );
            Ok(ExitCode::SUCCESS)
        }
        Verification::Failed { commented } => {
            eprintln!(
                "Error! This pull request does not contain any of the valid labels: {}",
                config.allow_list
            );
            if commented {
                eprintln!("Posted a comment asking for one of the valid labels");
            }
            eprintln!("Exiting with an error code");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn abort(err: impl Display) -> ExitCode {
    eprintln!("ERROR: {}", err);
    ExitCode::FAILURE
}
