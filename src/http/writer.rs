use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;
use std::fmt;

const HTTP_VERSION: &str = "HTTP/1.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Responses must carry a body, even an empty one
    MissingBody,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::MissingBody => write!(f, "response has no body to send"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encodes a response to wire bytes:
/// `HTTP/1.1 <code> <reason>\r\n<headers>\r\n<body>`.
///
/// `Content-Length` is computed from the body and injected here, after any
/// headers the handler set. A bodyless response is an error, not an empty
/// send.
pub fn serialize_response(resp: &Response) -> Result<Vec<u8>, EncodeError> {
    let body = resp.body.as_deref().ok_or(EncodeError::MissingBody)?;

    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    buf.extend_from_slice(b"Content-Length: ");
    buf.extend_from_slice(body.len().to_string().as_bytes());
    buf.extend_from_slice(b"\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf.extend_from_slice(body);

    Ok(buf)
}

/// Writes an encoded response to a stream, accumulating partial writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Result<Self, EncodeError> {
        Ok(Self {
            buffer: serialize_response(response)?,
            written: 0,
        })
    }

    /// Loops until the full buffer is on the wire; a write error or a closed
    /// peer aborts and surfaces to the caller.
    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
