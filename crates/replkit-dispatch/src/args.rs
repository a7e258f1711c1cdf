//! Invocation arguments and their resolution against declared parameters.
//!
//! A caller supplies [`Args`]: positional values plus keyword values. A
//! command declares an ordered list of [`Param`]s. Resolution binds the
//! positional values to parameters in order, lets keywords fill the rest by
//! name, falls back to declared defaults, and produces [`ArgValues`] for the
//! handler to read from. A parameter given both ways is an error.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// A declared command parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    /// Value used when the caller does not supply one. `None` makes the
    /// parameter required.
    pub default: Option<Value>,
}

impl Param {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// `name` or `name=default`, as shown in help signatures.
    pub fn signature(&self) -> String {
        match &self.default {
            None => self.name.clone(),
            Some(Value::String(s)) => format!("{}={:?}", self.name, s),
            Some(v) => format!("{}={}", self.name, v),
        }
    }
}

/// Errors raised while binding or reading arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("missing required argument '{0}'")]
    Missing(String),

    #[error("invalid value for '{name}': {message}")]
    Invalid { name: String, message: String },

    #[error("unexpected argument '{0}'")]
    Unexpected(String),

    #[error("multiple values for argument '{0}'")]
    Duplicate(String),
}

/// Arguments as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub positional: Vec<Value>,
    pub keyword: Map<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional value.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a keyword value.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Builds arguments from shell-style tokens.
    ///
    /// `name=value` becomes a keyword, anything else is positional. Values
    /// that parse as JSON (numbers, booleans, arrays, quoted strings) keep
    /// their JSON type; everything else is taken as a plain string. A number
    /// or boolean still decodes as text when the handler asks for a string.
    ///
    /// ```rust
    /// use replkit_dispatch::Args;
    /// use serde_json::json;
    ///
    /// let args = Args::from_tokens(["Buy milk", "priority=high", "3"]);
    /// assert_eq!(args.positional, vec![json!("Buy milk"), json!(3)]);
    /// assert_eq!(args.keyword["priority"], json!("high"));
    /// ```
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut args = Args::new();
        for token in tokens {
            let token = token.as_ref();
            match token.split_once('=') {
                Some((name, value)) if is_identifier(name) => {
                    args.keyword.insert(name.to_string(), parse_scalar(value));
                }
                _ => args.positional.push(parse_scalar(token)),
            }
        }
        args
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Binds these arguments to `params`.
    pub fn resolve(self, params: &[Param]) -> Result<ArgValues, ArgError> {
        if self.positional.len() > params.len() {
            return Err(ArgError::Unexpected(format!("#{}", params.len() + 1)));
        }
        if let Some(name) = self
            .keyword
            .keys()
            .find(|k| !params.iter().any(|p| &p.name == *k))
        {
            return Err(ArgError::Unexpected(name.clone()));
        }

        let mut keyword = self.keyword;
        let mut positional = self.positional.into_iter();
        let mut values = Map::new();
        for param in params {
            let value = match (positional.next(), keyword.remove(&param.name)) {
                (Some(_), Some(_)) => return Err(ArgError::Duplicate(param.name.clone())),
                (supplied, named) => supplied.or(named),
            };
            match value.or_else(|| param.default.clone()) {
                Some(v) => {
                    values.insert(param.name.clone(), v);
                }
                None => return Err(ArgError::Missing(param.name.clone())),
            }
        }
        Ok(ArgValues { values })
    }
}

impl From<Vec<Value>> for Args {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keyword: Map::new(),
        }
    }
}

/// Arguments after binding, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgValues {
    values: Map<String, Value>,
}

impl ArgValues {
    /// Raw value of a parameter.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Decodes a parameter into `T`.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T, ArgError> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| ArgError::Missing(name.to_string()))?;
        decode(name, value)
    }

    /// Decodes a parameter that may be absent or null.
    pub fn opt<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ArgError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(name, value).map(Some),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn decode<T: DeserializeOwned>(name: &str, value: &Value) -> Result<T, ArgError> {
    T::deserialize(value)
        .or_else(|e| match value {
            // `2024` and `true` are also valid text
            Value::Number(_) | Value::Bool(_) => {
                T::deserialize(Value::String(value.to_string())).map_err(|_| e)
            }
            _ => Err(e),
        })
        .map_err(|e| ArgError::Invalid {
            name: name.to_string(),
            message: e.to_string(),
        })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_scalar(s: &str) -> Value {
    match serde_json::from_str::<Value>(s) {
        Ok(v) if !v.is_object() => v,
        _ => Value::String(s.to_string()),
    }
}
