//! Call-site context and its normalization.

use std::collections::BTreeMap;

use crate::record::value::Value;

/// Key inserted when a caller passes an odd number of context values.
pub const ERROR_KEY: &str = "LOG15_ERROR";

/// Message paired with [`ERROR_KEY`].
pub const ODD_ARGS_MESSAGE: &str = "Normalized odd number of arguments by adding nil";

/// A key/value bag for callers that prefer named pairs over a flat list.
///
/// Keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctx(BTreeMap<String, Value>);

impl Ctx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder form of [`Ctx::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten into `key, value, key, value, ...`.
    pub fn into_flat(self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.0.len() * 2);
        for (k, v) in self.0 {
            out.push(Value::Str(k));
            out.push(v);
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Ctx
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Ctx(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Context as supplied at a call site.
#[derive(Debug, Clone, PartialEq)]
pub enum Fields {
    /// Flat `key, value, ...` list. May be odd-length.
    List(Vec<Value>),
    /// A single bag of pairs.
    Map(Ctx),
}

impl Default for Fields {
    fn default() -> Self {
        Fields::List(Vec::new())
    }
}

impl From<()> for Fields {
    fn from(_: ()) -> Self {
        Fields::default()
    }
}

impl From<Vec<Value>> for Fields {
    fn from(values: Vec<Value>) -> Self {
        Fields::List(values)
    }
}

impl From<Ctx> for Fields {
    fn from(ctx: Ctx) -> Self {
        Fields::Map(ctx)
    }
}

/// Build a [`Fields::List`] from anything convertible to [`Value`].
///
/// ```
/// use kvlog::{fields, Fields, Value};
///
/// let f = fields!["port", 8080];
/// assert_eq!(f, Fields::List(vec![Value::from("port"), Value::from(8080)]));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::List(::std::vec::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Fields::List(::std::vec![$($crate::Value::from($value)),+])
    };
}

/// Flatten call-site context into an even-length sequence.
///
/// A bag expands to its pairs. An odd-length list gets `nil`, [`ERROR_KEY`]
/// and [`ODD_ARGS_MESSAGE`] appended so the mistake shows up in the output
/// instead of failing the call.
pub fn normalize(fields: Fields) -> Vec<Value> {
    let mut flat = match fields {
        Fields::Map(ctx) => ctx.into_flat(),
        Fields::List(values) => values,
    };

    if flat.len() % 2 != 0 {
        flat.push(Value::Nil);
        flat.push(Value::from(ERROR_KEY));
        flat.push(Value::from(ODD_ARGS_MESSAGE));
    }

    flat
}
