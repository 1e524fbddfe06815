use std::net::SocketAddr;
use std::rc::Rc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::{Connection, Handler};

/// A bound listening socket and its accept loop.
///
/// The whole server is single-threaded: connections are multiplexed on the
/// current thread with `spawn_local`, so the caller must drive the accept
/// loop inside a [`tokio::task::LocalSet`]. Nothing here is shared across
/// threads and nothing needs locking.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listening socket. Failure here is fatal at startup.
    pub async fn bind(addr: &str) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!("Listening on {}", addr);
        Ok(Self { listener })
    }

    /// Address the socket actually bound to (useful with port 0).
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections forever, handing each to `handler`.
    ///
    /// A failed accept is logged and the loop keeps going; per-connection
    /// errors stay local to that connection.
    pub async fn run(self, handler: Rc<dyn Handler>) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to accept connection");
                    continue;
                }
            };

            let handler = Rc::clone(&handler);
            tokio::task::spawn_local(async move {
                let conn = Connection::new(socket);
                if let Err(e) = conn.serve(handler.as_ref()).await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
