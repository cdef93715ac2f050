use document_msg::{
    Document,
    abnf::{COLON, HOST, HTTP_PREFIX, SP},
};
use http::{
    HeaderMap, Method, Request, Response, StatusCode, Uri,
    header::{HeaderName, HeaderValue},
};
use tracing::error;
use traits_msg::Denormalize;

use crate::{
    MessageMapper,
    error::MapError,
    message::{Message, MessageBody},
    reason::ReasonPhrase,
    version,
};

/* Steps:
 *      1. Split the start line on single spaces into three tokens,
 *         the third keeps any remaining spaces.
 *      2. Resolve the authority, explicit document field first, then
 *         a Host field anywhere in the header section.
 *      3. Build the absolute uri as http://<authority><target>.
 *      4. Append every header field, multiplicity preserved, nothing
 *         consumed destructively.
 *
 * Error:
 *      MapError::MalformedStartLine    [1]
 *      MapError::MissingAuthority      [2]
 *      MapError::InvalidUri            [3]
 *      MapError::MalformedHeaderField  [4]
 */
impl Denormalize<Request<MessageBody>> for MessageMapper {
    type Error = MapError;

    fn denormalize(&self, document: Document) -> Result<Request<MessageBody>, MapError> {
        let Document {
            start_line,
            header_fields,
            authority,
            body,
        } = document;

        let (method, target, version) = split_start_line(&start_line)?;
        let version = version
            .strip_prefix(HTTP_PREFIX)
            .ok_or_else(|| MapError::MalformedStartLine(start_line.clone()))
            .and_then(version::from_token)?;

        let authority = match authority {
            Some(authority) => authority,
            None => host_field(&header_fields).ok_or(MapError::MissingAuthority)?,
        };
        let uri: Uri = format!("http://{authority}{target}").parse()?;

        let mut request = Request::builder()
            .method(method.parse::<Method>()?)
            .uri(uri)
            .version(version)
            .body(body)?;
        append_header_fields(request.headers_mut(), &header_fields)?;
        Ok(request)
    }
}

/* Steps:
 *      1. Split the start line into [version, status, reason]. The
 *         reason may itself contain spaces and is kept whole.
 *      2. Keep the received reason phrase in the extensions.
 */
impl Denormalize<Response<MessageBody>> for MessageMapper {
    type Error = MapError;

    fn denormalize(&self, document: Document) -> Result<Response<MessageBody>, MapError> {
        let Document {
            start_line,
            header_fields,
            body,
            ..
        } = document;

        let (version, status, reason) = split_start_line(&start_line)?;
        let version = version
            .strip_prefix(HTTP_PREFIX)
            .ok_or_else(|| MapError::MalformedStartLine(start_line.clone()))
            .and_then(version::from_token)?;
        let status = status
            .parse::<u16>()
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .ok_or_else(|| MapError::InvalidStatus(status.to_string()))?;

        let mut response = Response::builder()
            .status(status)
            .version(version)
            .body(body)?;
        response.extensions_mut().insert(ReasonPhrase::new(reason));
        append_header_fields(response.headers_mut(), &header_fields)?;
        Ok(response)
    }
}

// Variant picked from the start line shape, a status line always
// begins with the protocol.
impl Denormalize<Message> for MessageMapper {
    type Error = MapError;

    fn denormalize(&self, document: Document) -> Result<Message, MapError> {
        if document.start_line.starts_with(HTTP_PREFIX) {
            Denormalize::<Response<MessageBody>>::denormalize(self, document)
                .map(Message::Response)
        } else {
            Denormalize::<Request<MessageBody>>::denormalize(self, document).map(Message::Request)
        }
    }
}

fn split_start_line(start_line: &str) -> Result<(&str, &str, &str), MapError> {
    let mut tokens = start_line.splitn(3, SP);
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(second), Some(third)) if !first.is_empty() && !second.is_empty() => {
            Ok((first, second, third))
        }
        _ => {
            error!("malformed start line| {}", start_line);
            Err(MapError::MalformedStartLine(start_line.to_string()))
        }
    }
}

// Name before the first colon, value after it with one optional
// leading space stripped.
fn split_header_field(field: &str) -> Result<(&str, &str), MapError> {
    let (name, value) = field
        .split_once(COLON)
        .ok_or_else(|| MapError::MalformedHeaderField(field.to_string()))?;
    if name.is_empty() {
        return Err(MapError::MalformedHeaderField(field.to_string()));
    }
    Ok((name, value.strip_prefix(SP).unwrap_or(value)))
}

// First Host field anywhere in the section, position is not assumed.
fn host_field(fields: &[String]) -> Option<String> {
    fields.iter().find_map(|field| {
        let (name, value) = split_header_field(field).ok()?;
        name.eq_ignore_ascii_case(HOST).then(|| value.to_string())
    })
}

fn append_header_fields(headers: &mut HeaderMap, fields: &[String]) -> Result<(), MapError> {
    for field in fields {
        let (name, value) = split_header_field(field)?;
        headers.append(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }
    Ok(())
}
