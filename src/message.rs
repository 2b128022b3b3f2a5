//! Failure messages
//!
//! A [`Message`] describes one violation. It is either plain text, or a
//! [`CodedMessage`]: a type-safe [`Code`] plus named parameters that a rendering
//! layer can interpolate into localized text.
//!
//! Messages are immutable values. Equality is structural: two coded messages are
//! equal when their codes match and their parameter maps hold equal values under
//! the same keys, regardless of the order parameters were added in.
//!
//! # Examples
//!
//! ```
//! use confluence::message::{Code, CodedMessage, Message, Param};
//!
//! const TOO_SHORT: Code = Code::new("name.too_short");
//! const MIN: Param = Param::new("min");
//! const ACTUAL: Param = Param::new("actual");
//!
//! let a: Message = CodedMessage::new(TOO_SHORT)
//!     .with_param(MIN, 3)
//!     .with_param(ACTUAL, 1)
//!     .into();
//! let b: Message = CodedMessage::new(TOO_SHORT)
//!     .with_param(ACTUAL, 1)
//!     .with_param(MIN, 3)
//!     .into();
//! assert_eq!(a, b);
//!
//! let plain = Message::plain("must not be blank");
//! assert_eq!(plain.to_string(), "must not be blank");
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a coded message.
///
/// Codes are usually declared once as constants and shared by the validators that
/// emit them and the layer that renders them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Code(Cow<'static, str>);

impl Code {
    /// Create a code from a static identifier. Usable in `const` items.
    pub const fn new(id: &'static str) -> Self {
        Code(Cow::Borrowed(id))
    }

    /// Create a code from an identifier computed at runtime.
    pub fn owned(id: impl Into<String>) -> Self {
        Code(Cow::Owned(id.into()))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a coded message parameter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Param(Cow<'static, str>);

impl Param {
    /// Create a parameter key from a static name. Usable in `const` items.
    pub const fn new(name: &'static str) -> Self {
        Param(Cow::Borrowed(name))
    }

    /// Create a parameter key from a name computed at runtime.
    pub fn owned(name: impl Into<String>) -> Self {
        Param(Cow::Owned(name.into()))
    }

    /// The parameter name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value bound to a [`Param`] inside a coded message.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ParamValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer that does not fit an `i64`
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
    /// Ordered list of values
    List(Vec<ParamValue>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::UInt(u) => write!(f, "{}", u),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(impl From<$t> for ParamValue {
            fn from(value: $t) -> Self {
                ParamValue::Int(i64::from(value))
            }
        })+
    };
}

impl_from_signed!(i8, i16, i32, i64);

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(impl From<$t> for ParamValue {
            fn from(value: $t) -> Self {
                let wide = u64::from(value);
                match i64::try_from(wide) {
                    Ok(narrow) => ParamValue::Int(narrow),
                    Err(_) => ParamValue::UInt(wide),
                }
            }
        })+
    };
}

impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(narrow) => ParamValue::Int(narrow),
            Err(_) => ParamValue::UInt(value as u64),
        }
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(f64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A message identified by a [`Code`] and carrying named parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodedMessage {
    code: Code,
    params: BTreeMap<Param, ParamValue>,
}

impl CodedMessage {
    /// Create a coded message without parameters.
    pub fn new(code: Code) -> Self {
        CodedMessage {
            code,
            params: BTreeMap::new(),
        }
    }

    /// Create a coded message from a parameter map.
    ///
    /// Later entries win when a key is repeated.
    pub fn with_params<I, V>(code: Code, params: I) -> Self
    where
        I: IntoIterator<Item = (Param, V)>,
        V: Into<ParamValue>,
    {
        CodedMessage {
            code,
            params: params.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// Bind one more parameter, replacing any previous value for `key`.
    pub fn with_param(mut self, key: Param, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value.into());
        self
    }

    /// The message code.
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Look up a single parameter.
    pub fn param(&self, key: &Param) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// All parameters, ordered by key.
    pub fn params(&self) -> &BTreeMap<Param, ParamValue> {
        &self.params
    }
}

impl fmt::Display for CodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if self.params.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (idx, (key, value)) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str(")")
    }
}

/// Description of a single validation violation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Free-form text
    Plain(String),
    /// Code plus parameters
    Coded(CodedMessage),
}

impl Message {
    /// Create a plain text message.
    pub fn plain(text: impl Into<String>) -> Self {
        Message::Plain(text.into())
    }

    /// Create a coded message without parameters.
    pub fn code(code: Code) -> Self {
        Message::Coded(CodedMessage::new(code))
    }

    /// Create a coded message from a parameter map.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::message::{Code, Message, Param};
    ///
    /// let msg = Message::coded(
    ///     Code::new("range"),
    ///     [(Param::new("min"), 1), (Param::new("max"), 9)],
    /// );
    /// assert_eq!(msg.to_string(), "range(max=9, min=1)");
    /// ```
    pub fn coded<I, V>(code: Code, params: I) -> Self
    where
        I: IntoIterator<Item = (Param, V)>,
        V: Into<ParamValue>,
    {
        Message::Coded(CodedMessage::with_params(code, params))
    }

    /// The text of a plain message.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Message::Plain(text) => Some(text),
            Message::Coded(_) => None,
        }
    }

    /// The code of a coded message.
    pub fn as_coded(&self) -> Option<&CodedMessage> {
        match self {
            Message::Plain(_) => None,
            Message::Coded(coded) => Some(coded),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Plain(text) => f.write_str(text),
            Message::Coded(coded) => write!(f, "{}", coded),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::plain(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Plain(text)
    }
}

impl From<CodedMessage> for Message {
    fn from(coded: CodedMessage) -> Self {
        Message::Coded(coded)
    }
}

impl From<Code> for Message {
    fn from(code: Code) -> Self {
        Message::code(code)
    }
}
