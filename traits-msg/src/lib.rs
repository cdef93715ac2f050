use document_msg::Document;

// Codec between raw message text and the structured document. A
// dispatcher picks the codec by the format identifier it advertises.
pub trait TextCodec {
    type Error;

    const FORMAT: &'static str;

    // Total, structurally odd input still yields a best effort document.
    fn decode(&self, raw: &str) -> Document;

    fn encode(&self, document: &Document) -> Result<String, Self::Error>;

    fn supports(format: &str) -> bool {
        format == Self::FORMAT
    }
}

// Typed message to structured document.
pub trait Normalize<M> {
    type Error;

    fn normalize(&self, message: &M) -> Result<Document, Self::Error>;
}

// Structured document to typed message. Implemented once per target
// shape, the document is consumed.
pub trait Denormalize<M> {
    type Error;

    fn denormalize(&self, document: Document) -> Result<M, Self::Error>;
}
