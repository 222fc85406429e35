//! Attribute keys, typed values and attribute sets
//!
//! A [`Set`] is a semantic set: it is normalized on construction (sorted by
//! key, last write wins on duplicate keys), so two sets built from the same
//! pairs in any order compare equal. Ordered attribute lists, such as the
//! filtered attributes of an exemplar, are plain `Vec<KeyValue>`.

use std::fmt;

/// Attribute key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type tag of an attribute [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Int64,
    Float64,
    String,
    BoolSlice,
    Int64Slice,
    Float64Slice,
    StringSlice,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Bool => "BOOL",
            Type::Int64 => "INT64",
            Type::Float64 => "FLOAT64",
            Type::String => "STRING",
            Type::BoolSlice => "BOOLSLICE",
            Type::Int64Slice => "INT64SLICE",
            Type::Float64Slice => "FLOAT64SLICE",
            Type::StringSlice => "STRINGSLICE",
        };
        f.write_str(name)
    }
}

/// Typed attribute value
///
/// The set of kinds is closed; consumers that match on it exhaustively must
/// treat any other kind as a broken invariant.
///
/// Equality is bitwise for floats: `NaN` equals itself and `0.0` differs
/// from `-0.0`.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Value {
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    BoolSlice(Vec<bool>),
    Int64Slice(Vec<i64>),
    Float64Slice(Vec<f64>),
    StringSlice(Vec<String>),
}

impl Value {
    /// Type tag of this value
    pub fn value_type(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Int64(_) => Type::Int64,
            Value::Float64(_) => Type::Float64,
            Value::String(_) => Type::String,
            Value::BoolSlice(_) => Type::BoolSlice,
            Value::Int64Slice(_) => Type::Int64Slice,
            Value::Float64Slice(_) => Type::Float64Slice,
            Value::StringSlice(_) => Type::StringSlice,
        }
    }

    /// Render the value as text
    ///
    /// Scalars render as their plain text form, slices as JSON arrays.
    /// Floats use the shortest form, with an exponent for very large or
    /// small magnitudes (`1e+21`, `1e-05`).
    pub fn emit(&self) -> String {
        match self {
            Value::Bool(v) => v.to_string(),
            Value::Int64(v) => v.to_string(),
            Value::Float64(v) => format_float(*v),
            Value::String(v) => v.clone(),
            Value::BoolSlice(v) => serde_json::to_string(v).unwrap_or_default(),
            Value::Int64Slice(v) => serde_json::to_string(v).unwrap_or_default(),
            Value::Float64Slice(v) => serde_json::to_string(v).unwrap_or_default(),
            Value::StringSlice(v) => serde_json::to_string(v).unwrap_or_default(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BoolSlice(a), Value::BoolSlice(b)) => a == b,
            (Value::Int64Slice(a), Value::Int64Slice(b)) => a == b,
            (Value::Float64Slice(a), Value::Float64Slice(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            (Value::StringSlice(a), Value::StringSlice(b)) => a == b,
            _ => false,
        }
    }
}

/// Shortest round-trip text of `v`
///
/// Uses exponent notation when the decimal exponent is below -4 or at least
/// the larger of 6 and the digit count, with a signed two-digit exponent.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if v == 0.0 {
        return v.to_string();
    }

    let sci = format!("{:e}", v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return v.to_string();
    };
    let digits = mantissa.chars().filter(char::is_ascii_digit).count() as i32;

    let mut precision = 6;
    if precision > digits && digits >= exp + 1 {
        precision = digits;
    }
    if exp < -4 || exp >= precision {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        v.to_string()
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// A key paired with its value
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: Key,
    pub value: Value,
}

impl KeyValue {
    pub fn new(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn bool(key: impl Into<Key>, v: bool) -> Self {
        Self::new(key, Value::Bool(v))
    }

    pub fn int64(key: impl Into<Key>, v: i64) -> Self {
        Self::new(key, Value::Int64(v))
    }

    pub fn float64(key: impl Into<Key>, v: f64) -> Self {
        Self::new(key, Value::Float64(v))
    }

    pub fn string(key: impl Into<Key>, v: impl Into<String>) -> Self {
        Self::new(key, Value::String(v.into()))
    }

    pub fn bool_slice(key: impl Into<Key>, v: Vec<bool>) -> Self {
        Self::new(key, Value::BoolSlice(v))
    }

    pub fn int64_slice(key: impl Into<Key>, v: Vec<i64>) -> Self {
        Self::new(key, Value::Int64Slice(v))
    }

    pub fn float64_slice(key: impl Into<Key>, v: Vec<f64>) -> Self {
        Self::new(key, Value::Float64Slice(v))
    }

    pub fn string_slice<S: Into<String>>(key: impl Into<Key>, v: Vec<S>) -> Self {
        Self::new(key, Value::StringSlice(v.into_iter().map(Into::into).collect()))
    }
}

/// Renders a [`Set`] to text
pub trait Encoder {
    fn encode(&self, set: &Set) -> String;
}

/// `k1=v1,k2=v2` in key order; `,`, `=` and `\` are backslash-escaped
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEncoder;

impl DefaultEncoder {
    fn escape_into(out: &mut String, s: &str) {
        for c in s.chars() {
            if matches!(c, ',' | '=' | '\\') {
                out.push('\\');
            }
            out.push(c);
        }
    }
}

impl Encoder for DefaultEncoder {
    fn encode(&self, set: &Set) -> String {
        let mut out = String::new();
        for (i, kv) in set.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            Self::escape_into(&mut out, kv.key.as_str());
            out.push('=');
            Self::escape_into(&mut out, &kv.value.emit());
        }
        out
    }
}

/// Normalized attribute set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Set {
    kvs: Vec<KeyValue>,
}

impl Set {
    /// Build a set; later duplicates of a key replace earlier ones
    pub fn new<I: IntoIterator<Item = KeyValue>>(kvs: I) -> Self {
        let mut sorted: Vec<KeyValue> = kvs.into_iter().collect();
        sorted.sort_by(|a, b| a.key.cmp(&b.key));

        let mut kvs: Vec<KeyValue> = Vec::with_capacity(sorted.len());
        for kv in sorted {
            match kvs.last_mut() {
                Some(last) if last.key == kv.key => *last = kv,
                _ => kvs.push(kv),
            }
        }
        Self { kvs }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Semantic equality (same keys, same values)
    pub fn equals(&self, other: &Set) -> bool {
        self == other
    }

    /// Look up the value stored for `key`
    pub fn value(&self, key: &Key) -> Option<&Value> {
        self.kvs
            .binary_search_by(|kv| kv.key.cmp(key))
            .ok()
            .map(|i| &self.kvs[i].value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.kvs.iter()
    }

    pub fn len(&self) -> usize {
        self.kvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kvs.is_empty()
    }

    pub fn encoded(&self, encoder: &dyn Encoder) -> String {
        encoder.encode(self)
    }
}

impl FromIterator<KeyValue> for Set {
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&[KeyValue]> for Set {
    fn from(kvs: &[KeyValue]) -> Self {
        Self::new(kvs.iter().cloned())
    }
}
