use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
}

impl IssueComment {
    pub fn has_body(&self, body: &str) -> bool {
        self.body.as_deref() == Some(body)
    }
}
