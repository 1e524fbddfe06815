//! Registrar - Course Catalog API Server
//!
//! Core library: a hand-rolled HTTP/1.x wire layer, a from-scratch JSON
//! document model, and the course-search route that ties them together.

pub mod config;
pub mod http;
pub mod json;
pub mod search;
pub mod server;
