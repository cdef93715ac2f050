use document_msg::{Document, abnf::EOL};

/* Steps:
 *      1. Split raw on EOL. First line is the start line.
 *      2. Lines upto the first blank line are header fields. Only
 *         the literal blank separator ends the section, so a field
 *         with an empty value ("X-Empty:") is kept. The separator
 *         itself is discarded.
 *      3. Remaining lines rejoined with EOL are the body. Nothing
 *         after the separator, or no separator at all, yields an
 *         empty body, never an absent one.
 */
pub(crate) fn decode(raw: &str) -> Document {
    let mut lines = raw.split(EOL);
    let start_line = lines.next().unwrap_or_default().to_string();

    let mut header_fields = Vec::new();
    for line in lines.by_ref() {
        if line.is_empty() {
            break;
        }
        header_fields.push(line.to_string());
    }

    let body = lines.collect::<Vec<_>>().join(EOL);

    Document {
        start_line,
        header_fields,
        authority: None,
        body: Some(body),
    }
}
