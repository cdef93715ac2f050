use thiserror::Error;

#[cfg_attr(any(test, debug_assertions), derive(PartialEq))]
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("start line| must not be empty")]
    MissingStartLine,
}
