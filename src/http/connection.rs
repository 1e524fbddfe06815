use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Upper bound on a request: one read of this many bytes is one request.
///
/// This is an explicit design choice, not an accident of buffering. The
/// server never loops to drain a request spanning multiple reads, so a
/// request larger than this buffer is truncated and fails to parse. Clients
/// of this service send small JSON bodies; anything bigger is out of scope.
pub const READ_BUFFER_SIZE: usize = 2048;

/// The route-handler seam: the server core hands every parsed request to one
/// of these and sends back whatever it returns.
pub trait Handler {
    fn handle(&self, request: &Request) -> Response;
}

/// Handles a single accepted connection: one bounded read, one request, one
/// response, close.
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Runs the connection to completion.
    ///
    /// A peer that closes before sending anything is dropped silently. A
    /// request that fails to parse gets a 400 and the connection still
    /// closes cleanly. All buffers, the request, and the response are
    /// released on every path, success or failure.
    pub async fn serve(mut self, handler: &dyn Handler) -> anyhow::Result<()> {
        let mut buf = BytesMut::with_capacity(READ_BUFFER_SIZE);

        let n = self.stream.read_buf(&mut buf).await?;
        if n == 0 {
            // Peer closed without sending a request
            return Ok(());
        }
        let bytes = buf.freeze();

        let response = match parse_request(&bytes) {
            Ok(request) => handler.handle(&request),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse HTTP request");
                Response::bad_request()
            }
        };

        let mut writer = ResponseWriter::new(&response)?;
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }
}
