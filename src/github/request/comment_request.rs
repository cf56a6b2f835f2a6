use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub body: String,
}

impl CommentRequest {
    pub fn new(body: impl Into<String>) -> Self {
        CommentRequest { body: body.into() }
    }
}
