use serde::Serialize;

/// Body of a webhook message: `{"content": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct Payload<'a> {
    pub content: &'a str,
}

impl<'a> Payload<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }
}
