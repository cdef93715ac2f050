pub mod error;

mod decode;
mod encode;

use document_msg::Document;
use traits_msg::TextCodec;

use crate::error::CodecError;

// Codec between raw http/1.1 message text and the structured document.
// Pure line structure, no knowledge of header semantics.
pub struct HttpCodec;

impl TextCodec for HttpCodec {
    type Error = CodecError;

    const FORMAT: &'static str = "http";

    fn decode(&self, raw: &str) -> Document {
        decode::decode(raw)
    }

    fn encode(&self, document: &Document) -> Result<String, CodecError> {
        encode::encode(document)
    }
}
