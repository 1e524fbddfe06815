use crate::http::request::{Headers, Method, Request, Version};
use bytes::Bytes;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Request line missing or not splittable into its three tokens
    InvalidRequestLine,
    /// Method token outside the known method table
    InvalidMethod,
    /// Version token outside the known version table
    InvalidVersion,
    /// Header line without a `:` separator
    InvalidHeader,
    /// Header bytes are not valid UTF-8
    InvalidEncoding,
    /// No blank line terminating the header section
    MissingHeaderBoundary,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::InvalidRequestLine => "malformed request line",
            ParseError::InvalidMethod => "unknown request method",
            ParseError::InvalidVersion => "unknown HTTP version",
            ParseError::InvalidHeader => "malformed header line",
            ParseError::InvalidEncoding => "header section is not valid UTF-8",
            ParseError::MissingHeaderBoundary => "missing blank line after headers",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses one HTTP request from a single read's worth of bytes.
///
/// One pass over one buffer: the request line is split off at the first CRLF,
/// the first blank line marks the header/body boundary, and the body is a
/// zero-copy slice of `buf` from there to the end. A request with no headers
/// parses fine; a request with no blank line does not.
///
/// The request-side `Content-Length` is deliberately not reconciled against
/// the bytes actually received — one read is one request, and whatever
/// followed the boundary in that read is the body.
pub fn parse_request(buf: &Bytes) -> Result<Request, ParseError> {
    let boundary = find_header_boundary(buf).ok_or(ParseError::MissingHeaderBoundary)?;

    let head = std::str::from_utf8(&buf[..boundary]).map_err(|_| ParseError::InvalidEncoding)?;
    let body = buf.slice(boundary + 4..);

    let mut lines = head.split("\r\n");

    // Request line: method, target, version, space separated
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut parts = request_line.split_whitespace();
    let method_token = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version_token = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    let method = Method::from_str(method_token).ok_or(ParseError::InvalidMethod)?;
    let version = Version::from_str(version_token).ok_or(ParseError::InvalidVersion)?;

    // Headers: one key/value per line, trimmed, duplicates kept, no cap
    let mut headers = Headers::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        headers.push(key.trim(), value.trim());
    }

    Ok(Request {
        method,
        target: target.to_string(),
        version,
        headers,
        body,
    })
}

fn find_header_boundary(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
