//! JSON document model.
//!
//! A self-contained JSON engine: a tagged value tree, a recursive-descent
//! parser, and a recursive serializer. No schema validation.
//!
//! # Architecture
//!
//! - **`value`**: The [`JsonValue`] tree with key/index access and mutation
//! - **`parser`**: Parses JSON text into a [`JsonValue`]
//! - **`writer`**: Serializes a [`JsonValue`] back to text
//!
//! Objects keep their entries in insertion order, both in memory and on the
//! wire. A value tree exclusively owns its descendants; releasing a tree is
//! just dropping it.
//!
//! # Example
//!
//! ```
//! use registrar::json::{parse, stringify, JsonValue};
//!
//! let mut obj = JsonValue::object();
//! obj.set("department", JsonValue::from("CSC")).unwrap();
//! let text = stringify(&obj, false);
//! assert_eq!(text, r#"{"department":"CSC"}"#);
//!
//! let back = parse(&text).unwrap();
//! assert_eq!(back.get("department").and_then(|v| v.as_str()), Some("CSC"));
//! ```

pub mod parser;
pub mod value;
pub mod writer;

pub use parser::{JsonParseError, parse, parse_lenient};
pub use value::{JsonError, JsonValue};
pub use writer::stringify;
