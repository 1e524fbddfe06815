//! Course search: the row-source contract and the API route on top of it.
//!
//! The HTTP core never talks to storage directly. It sees rows through the
//! narrow [`RowSource`] trait: a per-query callback that receives one row of
//! named columns at a time, which the route folds into a JSON array of
//! objects. Any storage backend that can produce named columns fits behind
//! it; [`StaticCatalog`] is the one shipped here.

pub mod catalog;
pub mod handler;
pub mod rows;

pub use catalog::StaticCatalog;
pub use handler::Router;
pub use rows::{Column, RowSource, RowSourceError};
