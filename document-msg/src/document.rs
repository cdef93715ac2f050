use serde::{Deserialize, Serialize};

// Format agnostic view of a http/1.1 message. Contract between the
// text codec and the message mapper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    // First line of the message, request line or status line.
    #[serde(rename = "start-line")]
    pub start_line: String,
    // Raw "Name: value" lines, declaration order is significant.
    #[serde(rename = "header-fields", default)]
    pub header_fields: Vec<String>,
    // Host and optional port of a request. Filled by the mapper,
    // never part of the wire text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    // None means no body segment at all, Some("") an empty one.
    #[serde(rename = "message-body", default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Document {
    pub fn new(start_line: impl Into<String>) -> Self {
        Document {
            start_line: start_line.into(),
            ..Document::default()
        }
    }

    pub fn with_header_field(mut self, field: impl Into<String>) -> Self {
        self.header_fields.push(field.into());
        self
    }

    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
