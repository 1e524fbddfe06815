use std::fmt;

/// Initial backing capacity for a freshly created array.
const ARRAY_START_CAPACITY: usize = 10;

/// A JSON document node.
///
/// Object entries are kept in insertion order and keys stay unique through
/// [`set`](JsonValue::set). A tree exclusively owns its descendants, so
/// dropping the root releases every node exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// Ordered key/value entries
    Object(Vec<(String, JsonValue)>),
    /// Ordered sequence of values
    Array(Vec<JsonValue>),
    /// UTF-8 text
    String(String),
    /// IEEE-754 floating value
    Number(f64),
    /// true / false
    Boolean(bool),
    /// null
    Null,
}

/// Error returned when a mutation targets the wrong variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// The operation requires an Object
    NotAnObject,
    /// The operation requires an Array
    NotAnArray,
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::NotAnObject => write!(f, "value is not a JSON object"),
            JsonError::NotAnArray => write!(f, "value is not a JSON array"),
        }
    }
}

impl std::error::Error for JsonError {}

impl JsonValue {
    /// Creates an empty object.
    pub fn object() -> Self {
        JsonValue::Object(Vec::new())
    }

    /// Creates an empty array with a small starting capacity.
    pub fn array() -> Self {
        JsonValue::Array(Vec::with_capacity(ARRAY_START_CAPACITY))
    }

    /// Looks up a key in an object.
    ///
    /// Returns `None` if the key is absent or the value is not an object;
    /// lookup never fails loudly.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Inserts or replaces an object entry.
    ///
    /// A linear scan finds an existing entry for `key`: if found its value is
    /// replaced (the old value is dropped), otherwise the entry is appended,
    /// preserving insertion order.
    ///
    /// # Errors
    ///
    /// [`JsonError::NotAnObject`] if the value is not an object.
    pub fn set(&mut self, key: &str, value: JsonValue) -> Result<(), JsonError> {
        let JsonValue::Object(entries) = self else {
            return Err(JsonError::NotAnObject);
        };
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => entries.push((key.to_string(), value)),
        }
        Ok(())
    }

    /// Removes an object entry, returning the removed value if it existed.
    ///
    /// # Errors
    ///
    /// [`JsonError::NotAnObject`] if the value is not an object.
    pub fn remove(&mut self, key: &str) -> Result<Option<JsonValue>, JsonError> {
        let JsonValue::Object(entries) = self else {
            return Err(JsonError::NotAnObject);
        };
        match entries.iter().position(|(k, _)| k == key) {
            Some(i) => Ok(Some(entries.remove(i).1)),
            None => Ok(None),
        }
    }

    /// Appends a value to an array. Backing storage doubles when full.
    ///
    /// # Errors
    ///
    /// [`JsonError::NotAnArray`] if the value is not an array; the rejected
    /// value is dropped, never leaked.
    pub fn push(&mut self, value: JsonValue) -> Result<(), JsonError> {
        let JsonValue::Array(items) = self else {
            return Err(JsonError::NotAnArray);
        };
        items.push(value);
        Ok(())
    }

    /// Removes and returns the last array element, or `None` if the array is
    /// empty or the value is not an array.
    pub fn pop(&mut self) -> Option<JsonValue> {
        match self {
            JsonValue::Array(items) => items.pop(),
            _ => None,
        }
    }

    /// Bounds-checked array indexing.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Number of object entries or array elements; 0 for leaf values.
    pub fn len(&self) -> usize {
        match self {
            JsonValue::Object(entries) => entries.len(),
            JsonValue::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Boolean(b)
    }
}
