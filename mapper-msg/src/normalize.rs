use document_msg::Document;
use http::{HeaderMap, Request, Response, header};
use traits_msg::Normalize;

use crate::{
    MessageMapper,
    error::MapError,
    message::{Message, MessageBody},
    reason::ReasonPhrase,
    version,
};

/* Steps:
 *      1. Build the start line from the message variant.
 *      2. Emit one header field per name, in map order, all of them.
 *         Set-Cookie fans out to one field per value, every other
 *         name joins its values with a bare comma.
 *      3. Requests record the authority for later denormalization.
 *      4. Body is carried verbatim, absent stays absent.
 */
impl Normalize<Message> for MessageMapper {
    type Error = MapError;

    fn normalize(&self, message: &Message) -> Result<Document, MapError> {
        match message {
            Message::Request(request) => self.normalize(request),
            Message::Response(response) => self.normalize(response),
        }
    }
}

impl Normalize<Request<MessageBody>> for MessageMapper {
    type Error = MapError;

    fn normalize(&self, request: &Request<MessageBody>) -> Result<Document, MapError> {
        let target = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let start_line = format!(
            "{} {} HTTP/{}",
            request.method(),
            target,
            version::token(request.version())?,
        );
        let authority = match request.uri().authority() {
            Some(authority) => Some(authority.to_string()),
            None => host_header(request.headers())?,
        };
        Ok(Document {
            start_line,
            header_fields: header_fields(request.headers())?,
            authority,
            body: request.body().clone(),
        })
    }
}

impl Normalize<Response<MessageBody>> for MessageMapper {
    type Error = MapError;

    fn normalize(&self, response: &Response<MessageBody>) -> Result<Document, MapError> {
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(ReasonPhrase::as_str)
            .or_else(|| response.status().canonical_reason())
            .unwrap_or_default();
        let start_line = format!(
            "HTTP/{} {} {}",
            version::token(response.version())?,
            response.status().as_str(),
            reason,
        );
        Ok(Document {
            start_line,
            header_fields: header_fields(response.headers())?,
            authority: None,
            body: response.body().clone(),
        })
    }
}

fn header_fields(headers: &HeaderMap) -> Result<Vec<String>, MapError> {
    let mut fields = Vec::with_capacity(headers.keys_len());
    for name in headers.keys() {
        let mut values = Vec::new();
        for value in headers.get_all(name) {
            let value = value
                .to_str()
                .map_err(|_| MapError::OpaqueHeaderValue(name.as_str().to_string()))?;
            values.push(value);
        }
        if *name == header::SET_COOKIE {
            for value in values {
                fields.push(format!("{}: {}", wire_case(name.as_str()), value));
            }
        } else {
            fields.push(format!("{}: {}", wire_case(name.as_str()), values.join(",")));
        }
    }
    Ok(fields)
}

fn host_header(headers: &HeaderMap) -> Result<Option<String>, MapError> {
    match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map(|host| Some(host.to_string()))
            .map_err(|_| MapError::OpaqueHeaderValue(header::HOST.as_str().to_string())),
        None => Ok(None),
    }
}

// http lowercases header names, emit the usual wire casing instead:
// "content-type" -> "Content-Type".
fn wire_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        upper = c == '-';
    }
    out
}
