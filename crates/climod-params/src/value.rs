//! Kind and value model for climod parameters
//!
//! This module provides:
//! - `Kind`: the closed set of parameter kind labels used by the
//!   manifest schema and the flag binder
//! - `Value`: a tagged variant holding the native value for each kind
//! - the text codec: every value has a canonical text form, and every
//!   kind can decode a text form back into a native value

/// Closed set of parameter kinds.
///
/// Every kind is backed by one `Value` variant: the specialized kinds
/// (file, image, point, enumerations, ...) reuse a scalar or sequence
/// backing and differ only in their manifest label and the decorations
/// their builders attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Integer,
    Float,
    Double,
    Text,
    IntegerSeq,
    FloatSeq,
    DoubleSeq,
    TextSeq,
    File,
    Directory,
    Image,
    Geometry,
    Point,
    Region,
    IntegerEnum,
    FloatEnum,
    DoubleEnum,
    TextEnum,
}

impl Kind {
    /// The manifest element label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Text => "string",
            Kind::IntegerSeq => "integer-vector",
            Kind::FloatSeq => "float-vector",
            Kind::DoubleSeq => "double-vector",
            Kind::TextSeq => "string-vector",
            Kind::File => "file",
            Kind::Directory => "directory",
            Kind::Image => "image",
            Kind::Geometry => "geometry",
            Kind::Point => "point",
            Kind::Region => "region",
            Kind::IntegerEnum => "integer-enumeration",
            Kind::FloatEnum => "float-enumeration",
            Kind::DoubleEnum => "double-enumeration",
            Kind::TextEnum => "string-enumeration",
        }
    }

    /// The zero value of this kind's backing variant.
    pub fn default_value(self) -> Value {
        match self {
            Kind::Boolean => Value::Boolean(false),
            Kind::Integer | Kind::IntegerEnum => Value::Integer(0),
            Kind::Float | Kind::FloatEnum => Value::Float(0.0),
            Kind::Double | Kind::DoubleEnum => Value::Double(0.0),
            Kind::Text
            | Kind::File
            | Kind::Directory
            | Kind::Image
            | Kind::Geometry
            | Kind::TextEnum => Value::Text(String::new()),
            Kind::IntegerSeq => Value::IntegerSeq(Vec::new()),
            Kind::FloatSeq => Value::FloatSeq(Vec::new()),
            Kind::DoubleSeq => Value::DoubleSeq(Vec::new()),
            Kind::TextSeq | Kind::Point | Kind::Region => Value::TextSeq(Vec::new()),
        }
    }

    /// Decode `text` into this kind's backing variant.
    ///
    /// Decoding is lenient: unparsable numeric text yields the zero
    /// value, and there is no validation layer above this codec.
    pub fn decode(self, text: &str) -> Value {
        match self.default_value() {
            Value::Boolean(_) => Value::Boolean(decode_boolean(text)),
            Value::Integer(_) => Value::Integer(decode_integer(text)),
            Value::Float(_) => Value::Float(text.trim().parse().unwrap_or(0.0)),
            Value::Double(_) => Value::Double(text.trim().parse().unwrap_or(0.0)),
            Value::Text(_) => Value::Text(text.to_string()),
            Value::IntegerSeq(_) => {
                Value::IntegerSeq(split_sequence(text).map(decode_integer).collect())
            }
            Value::FloatSeq(_) => Value::FloatSeq(
                split_sequence(text)
                    .map(|item| item.trim().parse().unwrap_or(0.0))
                    .collect(),
            ),
            Value::DoubleSeq(_) => Value::DoubleSeq(
                split_sequence(text)
                    .map(|item| item.trim().parse().unwrap_or(0.0))
                    .collect(),
            ),
            Value::TextSeq(_) => {
                Value::TextSeq(split_sequence(text).map(ToString::to_string).collect())
            }
        }
    }
}

/// Native value of one parameter.
///
/// `encode` and `Kind::decode` form the codec: `kind.decode(&v.encode())`
/// reproduces `v` for every value representable under that kind
/// (sequence elements must not embed the comma separator).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f32),
    Double(f64),
    Text(String),
    IntegerSeq(Vec<i64>),
    FloatSeq(Vec<f32>),
    DoubleSeq(Vec<f64>),
    TextSeq(Vec<String>),
}

impl Value {
    /// Canonical text form of this value.
    pub fn encode(&self) -> String {
        match self {
            Value::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Double(d) => d.to_string(),
            Value::Text(s) => s.clone(),
            Value::IntegerSeq(items) => join_sequence(items.iter()),
            Value::FloatSeq(items) => join_sequence(items.iter()),
            Value::DoubleSeq(items) => join_sequence(items.iter()),
            Value::TextSeq(items) => items.join(","),
        }
    }

    /// Read as boolean, re-decoding through text when the variant differs.
    pub fn as_boolean(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            other => decode_boolean(&other.encode()),
        }
    }

    /// Read as integer, re-decoding through text when the variant differs.
    pub fn as_integer(&self) -> i64 {
        match self {
            Value::Integer(i) => *i,
            other => decode_integer(&other.encode()),
        }
    }

    /// Read as single-precision float, re-decoding through text when the
    /// variant differs.
    pub fn as_float(&self) -> f32 {
        match self {
            Value::Float(f) => *f,
            other => other.encode().trim().parse().unwrap_or(0.0),
        }
    }

    /// Read as double, re-decoding through text when the variant differs.
    pub fn as_double(&self) -> f64 {
        match self {
            Value::Double(d) => *d,
            other => other.encode().trim().parse().unwrap_or(0.0),
        }
    }

    /// Read as text. For the `Text` variant this is the value itself.
    pub fn to_text(&self) -> String {
        self.encode()
    }

    /// Read as a text sequence, splitting the encoded form when the
    /// variant differs.
    pub fn as_text_seq(&self) -> Vec<String> {
        match self {
            Value::TextSeq(items) => items.clone(),
            other => split_sequence(&other.encode())
                .map(ToString::to_string)
                .collect(),
        }
    }
}

fn decode_boolean(text: &str) -> bool {
    match text.trim() {
        "true" | "yes" => true,
        "false" | "no" => false,
        other => decode_integer(other) > 0,
    }
}

fn decode_integer(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

fn split_sequence(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').filter(|item| !item.is_empty())
}

fn join_sequence<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
