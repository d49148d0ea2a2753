//! Protocol codec
//!
//! Encoding and decoding between raw byte buffers and structured messages.
//!
//! ## Body Location Contract
//! For a message of total length `L` with declared `Content-Length: n`, the
//! body is bytes `[L - n - 2, L - 2)` — the last `n` bytes before the final
//! CRLF. Header formatting never affects this; both peers compute the same
//! offset. The arithmetic is bounds-checked: a declared length that does
//! not fit the message is a protocol error, never an out-of-range slice.
//!
//! ## Leniency
//! Decoding is permissive the way the server is permissive: unrecognized
//! methods and unmatched paths produce an unroutable request (answered with
//! 404 downstream), and numeric tokens are read atoi-style (longest leading
//! digit run, defaulting to 0).

use bytes::{BufMut, Bytes, BytesMut};

use super::{Method, Request, Response, StatusCode, Target};
use crate::error::{BoardError, Result};

/// Every message ends with one CRLF after the body
const TRAILER_LEN: usize = 2;

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to bytes (client side).
///
/// Produces the request line, a mandatory `Host:` header, the content
/// header block when a body is present, and the trailing CRLF.
pub fn encode_request(request: &Request, host: &str) -> Result<Bytes> {
    let method = request
        .method
        .ok_or_else(|| BoardError::Protocol("request has no method".to_string()))?;
    let path = request
        .target
        .path()
        .ok_or_else(|| BoardError::Protocol("unroutable target cannot be encoded".to_string()))?;

    let mut buf = BytesMut::new();
    buf.put_slice(format!("{} {} HTTP/1.1\r\nHost: {}\r\n", method.as_str(), path, host).as_bytes());
    put_content_block(&mut buf, request.body.as_deref());
    buf.put_slice(b"\r\n");
    Ok(buf.freeze())
}

/// Decode a request from bytes (server side).
///
/// Never fails on malformed methods or paths — those decode to an
/// unroutable request. The only error is a declared body length that does
/// not fit the message.
pub fn decode_request(raw: &[u8]) -> Result<Request> {
    let (method, target) = parse_request_line(raw);
    let content_length = scan_content_length(raw);
    let body = extract_body(raw, content_length)?;

    Ok(Request {
        method,
        target,
        content_length,
        body,
    })
}

fn parse_request_line(raw: &[u8]) -> (Option<Method>, Target) {
    let line = raw.split(|&b| b == b'\n').next().unwrap_or(&[]);
    let Ok(line) = std::str::from_utf8(strip_cr(line)) else {
        return (None, Target::Unroutable);
    };

    let mut words = line.split_ascii_whitespace();
    let method = words.next().and_then(Method::parse);
    let target = match words.next() {
        Some(path) => parse_target(path),
        None => Target::Unroutable,
    };

    (method, target)
}

/// Split a path into its target.
///
/// The first segment decides the resource kind: literally `boards` is the
/// collection, literally `board` the item resource. For the item resource
/// the name is everything before the last `/` and the id everything after
/// it, when a further `/` exists.
fn parse_target(path: &str) -> Target {
    let Some(rest) = path.strip_prefix('/') else {
        return Target::Unroutable;
    };

    let (first, remainder) = match rest.split_once('/') {
        Some((first, remainder)) => (first, Some(remainder)),
        None => (rest, None),
    };

    match first {
        "boards" => Target::Boards {
            name: remainder.map(str::to_owned),
        },
        "board" => match remainder {
            Some(rem) => match rem.rsplit_once('/') {
                Some((name, id_token)) => Target::Board {
                    name: name.to_owned(),
                    id: Some(atoi(id_token)),
                },
                None => Target::Board {
                    name: rem.to_owned(),
                    id: None,
                },
            },
            // bare "/board" names nothing
            None => Target::Unroutable,
        },
        _ => Target::Unroutable,
    }
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes (server side).
pub fn encode_response(response: &Response) -> Bytes {
    let status = response.status;

    let mut buf = BytesMut::new();
    buf.put_slice(format!("HTTP/1.1 {} {}\r\n", status.code(), status.reason()).as_bytes());
    put_content_block(&mut buf, response.body.as_deref());
    buf.put_slice(b"\r\n");
    buf.freeze()
}

/// Decode a response from bytes (client side).
pub fn decode_response(raw: &[u8]) -> Result<Response> {
    let line = raw.split(|&b| b == b'\n').next().unwrap_or(&[]);
    let line = std::str::from_utf8(strip_cr(line))
        .map_err(|_| BoardError::Protocol("status line is not valid UTF-8".to_string()))?;

    let mut words = line.split_ascii_whitespace();
    let code_token = words
        .nth(1)
        .ok_or_else(|| BoardError::Protocol("status line has no code".to_string()))?;
    let code = atoi(code_token) as u16;
    let status = StatusCode::from_code(code)
        .ok_or_else(|| BoardError::Protocol(format!("unknown status code {code}")))?;

    let content_length = scan_content_length(raw);
    let body = extract_body(raw, content_length)?;

    Ok(Response { status, body })
}

// =============================================================================
// Shared Grammar Helpers
// =============================================================================

/// Append the content header block and body, only when the body is
/// non-empty. The value of `Content-Type` is fixed; only its presence
/// matters on the decoding side.
fn put_content_block(buf: &mut BytesMut, body: Option<&[u8]>) {
    if let Some(body) = body {
        if !body.is_empty() {
            buf.put_slice(
                format!("Content-Type: text/plain\r\nContent-Length: {}\r\n\r\n", body.len())
                    .as_bytes(),
            );
            buf.put_slice(body);
        }
    }
}

/// Scan every line of the message for a `Content-Length:` token and take
/// the word after it as the declared length. Both peers scan the whole
/// message this way; the last occurrence wins.
fn scan_content_length(raw: &[u8]) -> usize {
    let mut content_length = 0;

    for line in raw.split(|&b| b == b'\n') {
        let Ok(line) = std::str::from_utf8(strip_cr(line)) else {
            continue;
        };
        let mut words = line.split_ascii_whitespace();
        while let Some(word) = words.next() {
            if word == "Content-Length:" {
                if let Some(value) = words.next() {
                    content_length = atoi(value) as usize;
                }
            }
        }
    }

    content_length
}

/// Locate the body by offset arithmetic: the last `content_length` bytes
/// before the trailing CRLF.
fn extract_body(raw: &[u8], content_length: usize) -> Result<Option<Bytes>> {
    if content_length == 0 {
        return Ok(None);
    }

    let start = raw
        .len()
        .checked_sub(content_length + TRAILER_LEN)
        .ok_or_else(|| {
            BoardError::Protocol(format!(
                "declared Content-Length {} exceeds message of {} bytes",
                content_length,
                raw.len()
            ))
        })?;

    Ok(Some(Bytes::copy_from_slice(
        &raw[start..start + content_length],
    )))
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// atoi-style number parse: longest leading run of decimal digits, 0 when
/// there is none or the value overflows.
fn atoi(token: &str) -> u64 {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().unwrap_or(0)
}
