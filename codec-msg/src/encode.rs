use document_msg::{Document, abnf::EOL};

use crate::error::CodecError;

/* Steps:
 *      1. Reject an empty start line, nothing is emitted.
 *      2. Start line, then every header field in order, then one
 *         unconditional blank line.
 *      3. A present body is the final segment, even when empty. An
 *         absent body ends the output right after the separator.
 *
 * Error:
 *      CodecError::MissingStartLine    [1]
 */
pub(crate) fn encode(document: &Document) -> Result<String, CodecError> {
    if document.start_line.is_empty() {
        return Err(CodecError::MissingStartLine);
    }

    let mut lines = Vec::with_capacity(document.header_fields.len() + 3);
    lines.push(document.start_line.as_str());
    for field in &document.header_fields {
        lines.push(field.as_str());
    }
    lines.push("");
    if let Some(body) = &document.body {
        lines.push(body.as_str());
    }

    Ok(lines.join(EOL))
}
