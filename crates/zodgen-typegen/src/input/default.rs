//! Rendering of schema-declared default values.

use super::scalar::ScalarType;
use crate::ir::Literal;
use serde_json::Value;
use std::fmt;

/// Why a declared default was not inlined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultSkip {
    /// Computed by the database or client, e.g. `autoincrement()` or `now()`.
    Generated(String),
    /// A value with no static literal form (lists, null, objects).
    Unrenderable,
}

impl fmt::Display for DefaultSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultSkip::Generated(name) => write!(f, "generated default {name}()"),
            DefaultSkip::Unrenderable => write!(f, "default has no literal form"),
        }
    }
}

/// Turn a raw DMMF default into a literal for `.default(...)`.
pub fn format_default(raw: &Value, type_name: &str) -> Result<Literal, DefaultSkip> {
    if let Some(name) = generator_call(raw) {
        return Err(DefaultSkip::Generated(name.to_string()));
    }

    // Prisma serializes BigInt defaults as strings.
    if type_name == ScalarType::BigInt.name() {
        return match raw {
            Value::String(s) => Ok(Literal::BigInt(s.clone())),
            Value::Number(n) => Ok(Literal::BigInt(n.to_string())),
            _ => Err(DefaultSkip::Unrenderable),
        };
    }

    match raw {
        Value::String(s) => Ok(Literal::String(s.clone())),
        Value::Number(n) => Ok(Literal::Raw(n.to_string())),
        Value::Bool(b) => Ok(Literal::Raw(b.to_string())),
        _ => Err(DefaultSkip::Unrenderable),
    }
}

/// Name of the generator function if `raw` is a call marker like `{"name": "now", "args": []}`.
fn generator_call(raw: &Value) -> Option<&str> {
    let obj = raw.as_object()?;
    let name = obj.get("name")?;
    Some(name.as_str().unwrap_or_default())
}
