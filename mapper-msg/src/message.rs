use http::{HeaderMap, Request, Response, Version};

// Body carried verbatim. None is no body at all, Some("") an empty one.
pub type MessageBody = Option<String>;

// Closed set of message shapes the mapper understands.
#[derive(Debug)]
pub enum Message {
    Request(Request<MessageBody>),
    Response(Response<MessageBody>),
}

impl Message {
    pub fn headers(&self) -> &HeaderMap {
        match self {
            Message::Request(request) => request.headers(),
            Message::Response(response) => response.headers(),
        }
    }

    pub fn version(&self) -> Version {
        match self {
            Message::Request(request) => request.version(),
            Message::Response(response) => response.version(),
        }
    }

    pub fn body(&self) -> &MessageBody {
        match self {
            Message::Request(request) => request.body(),
            Message::Response(response) => response.body(),
        }
    }

    pub fn into_request(self) -> Option<Request<MessageBody>> {
        match self {
            Message::Request(request) => Some(request),
            Message::Response(_) => None,
        }
    }

    pub fn into_response(self) -> Option<Response<MessageBody>> {
        match self {
            Message::Response(response) => Some(response),
            Message::Request(_) => None,
        }
    }
}

impl From<Request<MessageBody>> for Message {
    fn from(request: Request<MessageBody>) -> Self {
        Message::Request(request)
    }
}

impl From<Response<MessageBody>> for Message {
    fn from(response: Response<MessageBody>) -> Self {
        Message::Response(response)
    }
}
