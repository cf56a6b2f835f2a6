use crate::github::Label;
use itertools::Itertools;
use std::{collections::HashSet, fmt};

/// Labels accepted by the check, kept in the order the caller gave them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    labels: Vec<String>,
}

impl AllowList {
    pub fn parse(csv: &str) -> Self {
        let labels = csv.split(',').map(|label| label.trim().to_owned()).collect();

        AllowList { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Names of the PR labels present in the allow-list, in PR order.
    pub fn matching(&self, pr_labels: &[Label]) -> Vec<String> {
        let allowed: HashSet<&str> = self.labels.iter().map(String::as_str).collect();

        pr_labels
            .iter()
            .filter(|label| allowed.contains(label.name.as_str()))
            .map(|label| label.name.to_owned())
            .collect()
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().iter().join(", "))
    }
}
