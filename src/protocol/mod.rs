//! Protocol Module
//!
//! Defines the HTTP/1.1-flavored wire protocol for client-server
//! communication. One shared grammar covers both directions.
//!
//! ## Request Format
//! ```text
//! METHOD SP PATH SP HTTP/1.1 CRLF
//! Host: <host> CRLF
//! [Content-Type: text/plain CRLF
//!  Content-Length: <n> CRLF
//!  CRLF
//!  <body>]
//! CRLF
//! ```
//!
//! ### Methods
//! `GET`, `POST`, `PUT`, `DELETE` — case-sensitive, exact match. Anything
//! else decodes to an unroutable request, answered with 404.
//!
//! ## Response Format
//! ```text
//! HTTP/1.1 <code> <reason> CRLF
//! [Content-Type: text/plain CRLF
//!  Content-Length: <n> CRLF
//!  CRLF
//!  <body>]
//! CRLF
//! ```
//!
//! ### Status Codes
//! - 200 OK
//! - 201 Created
//! - 400 Bad Request
//! - 404 Not Found
//! - 409 Conflict
//!
//! ## Body Location
//! The body is NOT found by scanning for the blank line. It is located by
//! byte-offset arithmetic: the last `Content-Length` bytes before the final
//! two bytes of the message. This is the wire contract both sides rely on.

mod request;
mod response;
mod codec;

pub use request::{Method, Request, Target};
pub use response::{Response, StatusCode};
pub use codec::{decode_request, decode_response, encode_request, encode_response};
