//! Request definitions
//!
//! Structured form of a decoded request message.

use bytes::Bytes;

/// Recognized request methods (case-sensitive, exact match)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Parse a method token. Returns `None` for anything but the four
    /// recognized methods.
    pub fn parse(token: &str) -> Option<Method> {
        match token {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            _ => None,
        }
    }

    /// The wire token for this method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// What a request path refers to.
///
/// `/boards[/<name>]` is the collection resource: the name, when present,
/// is the entire remainder after the second slash. `/board/<name>[/<id>]`
/// is the item resource: when a further slash is present, the name is
/// everything before the LAST slash and the id everything after it
/// (authoritative rule, also for numeric board names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `/boards` or `/boards/<name>`
    Boards { name: Option<String> },

    /// `/board/<name>` or `/board/<name>/<id>`
    Board { name: String, id: Option<u64> },

    /// A path matching neither resource. The router answers 404 rather
    /// than dropping the connection.
    Unroutable,
}

impl Target {
    /// Render the path for this target. `None` for unroutable targets,
    /// which are never encoded.
    pub fn path(&self) -> Option<String> {
        match self {
            Target::Boards { name: None } => Some("/boards".to_string()),
            Target::Boards { name: Some(name) } => Some(format!("/boards/{name}")),
            Target::Board { name, id: None } => Some(format!("/board/{name}")),
            Target::Board { name, id: Some(id) } => Some(format!("/board/{name}/{id}")),
            Target::Unroutable => None,
        }
    }
}

/// A parsed request.
///
/// Constructed fresh for every decode call and passed through the router
/// by value; no state is shared between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// `None` when the request line carried an unrecognized method token
    pub method: Option<Method>,

    /// The resource the path refers to
    pub target: Target,

    /// Declared `Content-Length` (0 when the header is absent)
    pub content_length: usize,

    /// Body bytes, present only when `content_length` is non-zero
    pub body: Option<Bytes>,
}

impl Request {
    /// Build a request for encoding (client side)
    pub fn new(method: Method, target: Target, body: Option<Bytes>) -> Self {
        let content_length = body.as_ref().map(|b| b.len()).unwrap_or(0);
        Self {
            method: Some(method),
            target,
            content_length,
            body,
        }
    }
}
