use crate::error::InputError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const TARGET_EVENT_NAME: &str = "pull_request_target";

static MERGE_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"refs/pull/([0-9]+)/merge").expect("merge ref pattern must compile")
});

/// Where the pull request number comes from. `pull_request_target` runs on
/// the base branch, so `GITHUB_REF` does not name the PR and the number has
/// to be passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrReference {
    Target(String),
    Ref(String),
}

impl PrReference {
    pub fn new(event_name: &str, pr_number: &str, github_ref: &str) -> Self {
        if event_name == TARGET_EVENT_NAME {
            PrReference::Target(pr_number.to_owned())
        } else {
            PrReference::Ref(github_ref.to_owned())
        }
    }

    pub fn resolve(&self) -> Result<u64, InputError> {
        match self {
            PrReference::Target(input) => parse_number(input.trim()).ok_or_else(|| {
                InputError::InvalidPrNumber {
                    input: input.to_owned(),
                }
            }),
            PrReference::Ref(github_ref) => MERGE_REF
                .captures(github_ref)
                .and_then(|captures| parse_number(&captures[1]))
                .ok_or_else(|| InputError::UnresolvableRef {
                    github_ref: github_ref.to_owned(),
                }),
        }
    }
}

fn parse_number(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().filter(|number| *number > 0)
}
