use clap::Parser;
use log::LevelFilter;

/// Fails a pull request check unless the PR carries one of the allowed labels.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Token used to authenticate against the GitHub API.
    pub token: String,

    /// Comma separated list of labels that satisfy the check.
    #[arg(allow_hyphen_values = true)]
    pub allowed_labels: String,

    /// Pull request number, only read when triggered by `pull_request_target`.
    #[arg(allow_hyphen_values = true)]
    pub pr_number: String,

    /// Comment posted when no valid label is found. `{}` is replaced by the
    /// allowed labels.
    #[arg(allow_hyphen_values = true)]
    pub message: String,

    /// Verbosity of diagnostic logs.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_positional_arguments() {
        let cli = Cli::try_parse_from([
            "verify-pr-labels",
            "token",
            "bug, feature",
            "",
            "Please add one of: {}",
        ])
        .unwrap();

        assert_eq!(cli.token, "token");
        assert_eq!(cli.allowed_labels, "bug, feature");
        assert_eq!(cli.pr_number, "");
        assert_eq!(cli.message, "Please add one of: {}");
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn should_parse_log_level() {
        let cli = Cli::try_parse_from([
            "verify-pr-labels",
            "--log-level",
            "debug",
            "token",
            "bug",
            "12",
            "{}",
        ])
        .unwrap();

        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn should_accept_values_starting_with_a_hyphen() {
        let cli = Cli::try_parse_from([
            "verify-pr-labels",
            "token",
            "-bug,feature",
            "-1",
            "- Please add one of: {}",
        ])
        .unwrap();

        assert_eq!(cli.allowed_labels, "-bug,feature");
        assert_eq!(cli.pr_number, "-1");
        assert_eq!(cli.message, "- Please add one of: {}");
    }

    #[test]
    fn should_reject_missing_arguments() {
        let result = Cli::try_parse_from(["verify-pr-labels", "token", "bug"]);

        assert!(result.is_err());
    }
}
