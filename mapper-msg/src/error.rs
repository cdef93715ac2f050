use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("start line| {0}")]
    MalformedStartLine(String),
    #[error("header field| {0}")]
    MalformedHeaderField(String),
    #[error("authority| no authority and no Host header field")]
    MissingAuthority,
    #[error("method| {0}")]
    InvalidMethod(#[from] http::method::InvalidMethod),
    #[error("uri| {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),
    #[error("status| {0}")]
    InvalidStatus(String),
    #[error("version| {0}")]
    InvalidVersion(String),
    #[error("header name| {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),
    #[error("header value| {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    // Header value holds opaque bytes, not text. Named by header.
    #[error("header value not text| {0}")]
    OpaqueHeaderValue(String),
    #[error("message build| {0}")]
    Build(#[from] http::Error),
}
