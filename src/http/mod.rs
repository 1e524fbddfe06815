//! HTTP protocol implementation.
//!
//! A minimal HTTP/1.x wire layer: one request per connection, no keep-alive,
//! no pipelining, no chunked transfer-encoding.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection handler — one bounded read, one
//!   request, one response, close
//! - **`parser`**: Parses an incoming request from the single read buffer
//! - **`request`**: Request representation, methods, versions, and the
//!   ordered header list
//! - **`response`**: Response representation with builder pattern
//! - **`writer`**: Encodes and writes responses to the client
//!
//! # Connection lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read of the socket
//!        └──────┬──────┘
//!               │ Bytes received
//!               ▼
//!        ┌──────────────────┐
//!        │    Parsing       │ ← Request line / headers / body
//!        └──────┬───────────┘
//!               │ Parse ok          │ Parse failed
//!               ▼                   ▼
//!        ┌──────────────┐    ┌──────────────┐
//!        │  Dispatching │    │  400 answer  │
//!        └──────┬───────┘    └──────┬───────┘
//!               │ Response ready    │
//!               ▼                   ▼
//!        ┌─────────────────────────────┐
//!        │   Writing, then Closed      │
//!        └─────────────────────────────┘
//! ```
//!
//! Every connection closes after a single exchange; clients wanting more
//! requests reconnect.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
