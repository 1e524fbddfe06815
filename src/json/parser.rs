use crate::json::value::JsonValue;
use std::fmt;

/// Structured JSON parse failure, with the byte offset where parsing stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonParseError {
    /// A character that fits no production at this position
    UnexpectedChar(char, usize),
    /// Input ended inside an unfinished value
    UnexpectedEof,
    /// A number-looking token the float scanner rejected
    InvalidNumber(usize),
}

impl fmt::Display for JsonParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonParseError::UnexpectedChar(c, pos) => {
                write!(f, "unexpected character {c:?} at byte {pos}")
            }
            JsonParseError::UnexpectedEof => write!(f, "unexpected end of input"),
            JsonParseError::InvalidNumber(pos) => write!(f, "invalid number at byte {pos}"),
        }
    }
}

impl std::error::Error for JsonParseError {}

/// Parses one JSON value from `input`.
///
/// Trailing text after the first complete value is ignored. Malformed input
/// yields a structured error rather than silently degrading; callers that
/// want the degrade-to-null behavior use [`parse_lenient`].
pub fn parse(input: &str) -> Result<JsonValue, JsonParseError> {
    let mut cursor = Cursor::new(input);
    cursor.parse_value()
}

/// Parses JSON text, collapsing any parse failure to `Null`.
///
/// This keeps the historical wire behavior where a malformed document is
/// indistinguishable from a literal `null`; route handlers rely on it to
/// treat an unreadable request body as "no parameters".
pub fn parse_lenient(input: &str) -> JsonValue {
    parse(input).unwrap_or(JsonValue::Null)
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> Result<(), JsonParseError> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(JsonParseError::UnexpectedChar(c, self.pos - c.len_utf8())),
            None => Err(JsonParseError::UnexpectedEof),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue, JsonParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some('"') => {
                self.pos += 1;
                self.parse_string().map(JsonValue::String)
            }
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some('t') if self.rest().starts_with("true") => {
                self.pos += 4;
                Ok(JsonValue::Boolean(true))
            }
            Some('f') if self.rest().starts_with("false") => {
                self.pos += 5;
                Ok(JsonValue::Boolean(false))
            }
            Some('n') if self.rest().starts_with("null") => {
                self.pos += 4;
                Ok(JsonValue::Null)
            }
            Some(c) if c.is_ascii_digit() || c == '-' => self.parse_number(),
            Some(c) => Err(JsonParseError::UnexpectedChar(c, self.pos)),
            None => Err(JsonParseError::UnexpectedEof),
        }
    }

    /// Parses the remainder of a string; the opening quote is already
    /// consumed. Recognized escapes are decoded, anything else after a
    /// backslash passes through as the escaped character itself.
    fn parse_string(&mut self) -> Result<String, JsonParseError> {
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => {
                    let escaped = self.bump().ok_or(JsonParseError::UnexpectedEof)?;
                    out.push(match escaped {
                        '"' => '"',
                        '\\' => '\\',
                        '/' => '/',
                        'b' => '\u{0008}',
                        'f' => '\u{000c}',
                        'n' => '\n',
                        'r' => '\r',
                        't' => '\t',
                        other => other,
                    });
                }
                Some(c) => out.push(c),
                None => return Err(JsonParseError::UnexpectedEof),
            }
        }
    }

    fn parse_array(&mut self) -> Result<JsonValue, JsonParseError> {
        self.pos += 1; // consume '['
        let mut out = JsonValue::array();
        self.skip_whitespace();
        if self.peek() != Some(']') {
            loop {
                let element = self.parse_value()?;
                // parse_value can only hand back elements for a fresh array
                let _ = out.push(element);
                self.skip_whitespace();
                if self.peek() != Some(',') {
                    break;
                }
                self.pos += 1;
                self.skip_whitespace();
            }
        }
        self.eat(']')?;
        Ok(out)
    }

    fn parse_object(&mut self) -> Result<JsonValue, JsonParseError> {
        self.pos += 1; // consume '{'
        let mut out = JsonValue::object();
        self.skip_whitespace();
        if self.peek() != Some('}') {
            loop {
                self.skip_whitespace();
                self.eat('"')?;
                let key = self.parse_string()?;
                self.skip_whitespace();
                self.eat(':')?;
                let value = self.parse_value()?;
                let _ = out.set(&key, value);
                self.skip_whitespace();
                if self.peek() != Some(',') {
                    break;
                }
                self.pos += 1;
            }
        }
        self.eat('}')?;
        Ok(out)
    }

    /// Scans the longest prefix that can belong to a float and defers the
    /// actual conversion to the host float parser.
    fn parse_number(&mut self) -> Result<JsonValue, JsonParseError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E') {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.input[start..self.pos]
            .parse::<f64>()
            .map(JsonValue::Number)
            .map_err(|_| JsonParseError::InvalidNumber(start))
    }
}
