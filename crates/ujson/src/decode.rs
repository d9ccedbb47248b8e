use ahash::AHashMap;
use serde_json::Value;

use crate::{canonical::canonicalize, error::ParseError, Any, Number};

/// Decodes JSON text into a typed value tree, preserving source array order.
///
/// # Errors
/// Returns [`ParseError`] if the input is not syntactically valid JSON.
pub fn decode(data: &[u8]) -> Result<Any, ParseError> {
    let value = serde_json::from_slice(data).map_err(ParseError::new)?;
    Ok(convert(value, false))
}

/// Decodes JSON text into a typed value tree with every array reordered
/// into its canonical form, at every nesting level.
///
/// # Errors
/// Returns [`ParseError`] if the input is not syntactically valid JSON.
pub fn decode_canonical(data: &[u8]) -> Result<Any, ParseError> {
    let value = serde_json::from_slice(data).map_err(ParseError::new)?;
    Ok(convert(value, true))
}

fn convert(value: Value, canonical: bool) -> Any {
    match value {
        Value::Null => Any::Null,
        Value::Bool(b) => Any::Bool(b),
        // Integral literals that fit `i64` decode as `Int`; `Uint` is
        // reserved for values above `i64::MAX`; everything else is `Float`.
        Value::Number(num) => {
            if let Some(i) = num.as_i64() {
                Any::Number(Number::Int(i))
            } else if let Some(u) = num.as_u64() {
                Any::Number(Number::Uint(u))
            } else if let Some(f) = num.as_f64() {
                Any::Number(Number::Float(f))
            } else {
                // Reachable only with serde_json's arbitrary_precision
                // feature; degrade silently instead of failing the decode.
                Any::Null
            }
        }
        Value::String(s) => Any::String(s),
        Value::Array(old) => {
            let mut items: Vec<Any> = old.into_iter().map(|v| convert(v, canonical)).collect();
            if canonical {
                canonicalize(&mut items);
            }
            Any::Array(items.into_boxed_slice())
        }
        Value::Object(old) => {
            let map: AHashMap<String, Any> = old
                .into_iter()
                .map(|(k, v)| (k, convert(v, canonical)))
                .collect();
            Any::Object(Box::new(map))
        }
    }
}
