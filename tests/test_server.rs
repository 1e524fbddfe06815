use std::rc::Rc;

use registrar::search::{Column, Router, RowSource, RowSourceError};
use registrar::server::Server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

struct EmptySource;

impl RowSource for EmptySource {
    fn for_each_row(
        &self,
        _department: &str,
        _on_row: &mut dyn FnMut(&[Column<'_>]),
    ) -> Result<(), RowSourceError> {
        Ok(())
    }
}

async fn exchange(addr: std::net::SocketAddr, raw: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();

    // The server closes the connection after one response.
    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

fn run_single_threaded<F: std::future::Future>(fut: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let local = tokio::task::LocalSet::new();
    local.block_on(&rt, fut)
}

#[test]
fn test_course_search_end_to_end() {
    run_single_threaded(async {
        let server = Server::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();
        tokio::task::spawn_local(server.run(Rc::new(Router::new(EmptySource))));

        let reply = exchange(
            addr,
            b"POST /api/course_search HTTP/1.1\r\nHost: localhost\r\nContent-Length: 2\r\n\r\n{}",
        )
        .await;

        assert!(reply.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(reply.contains("Content-Type: application/json\r\n"));
        assert!(reply.contains("Content-Length: 2\r\n"));
        assert!(reply.ends_with("\r\n\r\n[]"));
    });
}

#[test]
fn test_unknown_route_end_to_end() {
    run_single_threaded(async {
        let server = Server::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();
        tokio::task::spawn_local(server.run(Rc::new(Router::new(EmptySource))));

        let reply = exchange(addr, b"GET /nope HTTP/1.1\r\n\r\n").await;

        assert!(reply.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(reply.ends_with("Content-Length: 0\r\n\r\n"));
    });
}

#[test]
fn test_malformed_request_gets_400_and_close() {
    run_single_threaded(async {
        let server = Server::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();
        tokio::task::spawn_local(server.run(Rc::new(Router::new(EmptySource))));

        let reply = exchange(addr, b"GARBAGE\r\n\r\n").await;

        assert!(reply.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    });
}

#[test]
fn test_connections_are_independent() {
    // One request per connection; a second exchange needs a new connection
    // and still succeeds.
    run_single_threaded(async {
        let server = Server::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();
        tokio::task::spawn_local(server.run(Rc::new(Router::new(EmptySource))));

        let first = exchange(addr, b"GET /api/course_search HTTP/1.1\r\n\r\n").await;
        let second = exchange(addr, b"GET /api/course_search HTTP/1.1\r\n\r\n").await;

        assert!(first.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(second.starts_with("HTTP/1.1 200 OK\r\n"));
    });
}
