// Reason phrase as received on the wire. http::Response does not store
// one, so it rides in the response extensions and normalization prefers
// it over the canonical phrase of the status code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReasonPhrase(String);

impl ReasonPhrase {
    pub fn new(phrase: impl Into<String>) -> Self {
        ReasonPhrase(phrase.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReasonPhrase {
    fn from(phrase: &str) -> Self {
        ReasonPhrase::new(phrase)
    }
}
