//! Response definitions
//!
//! Structured form of a response message plus the fixed status table.

use bytes::Bytes;

/// Status codes produced by this system. No other code appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    Created,
    BadRequest,
    NotFound,
    Conflict,
}

impl StatusCode {
    /// Numeric wire code
    pub fn code(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::Conflict => 409,
        }
    }

    /// Fixed reason phrase for the status line
    pub fn reason(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::Conflict => "Conflict",
        }
    }

    /// Look up a status by numeric code
    pub fn from_code(code: u16) -> Option<StatusCode> {
        match code {
            200 => Some(StatusCode::Ok),
            201 => Some(StatusCode::Created),
            400 => Some(StatusCode::BadRequest),
            404 => Some(StatusCode::NotFound),
            409 => Some(StatusCode::Conflict),
            _ => None,
        }
    }

    /// The client treats exactly 200 and 201 as success, decided on the
    /// numeric code alone.
    pub fn is_success(self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Created)
    }
}

/// A response message
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status code
    pub status: StatusCode,

    /// Optional body (board list or post list for read operations)
    pub body: Option<Bytes>,
}

impl Response {
    /// 200 OK with an optional body
    pub fn ok(body: Option<Bytes>) -> Self {
        Self {
            status: StatusCode::Ok,
            body,
        }
    }

    /// 201 Created
    pub fn created() -> Self {
        Self {
            status: StatusCode::Created,
            body: None,
        }
    }

    /// 400 Bad Request
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            body: None,
        }
    }

    /// 404 Not Found
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            body: None,
        }
    }

    /// 409 Conflict
    pub fn conflict() -> Self {
        Self {
            status: StatusCode::Conflict,
            body: None,
        }
    }
}
